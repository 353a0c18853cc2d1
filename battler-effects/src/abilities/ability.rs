use battler_data::{
    AbilityFlag,
    Id,
    Identifiable,
};
use hashbrown::HashSet;
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    abilities::AbilityEffect,
    effect::EffectCondition,
};

fn default_true() -> bool {
    true
}

/// One effect of an ability, with its presentation and gating.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbilityEffectEntry {
    pub effect: AbilityEffect,
    /// Show the ability flyout when this effect applies.
    #[serde(default = "default_true")]
    pub shows_notification: bool,
    /// Evaluated before the effect's own gating check.
    #[serde(default)]
    pub extra_condition: Option<EffectCondition>,
}

impl AbilityEffectEntry {
    pub fn new(effect: AbilityEffect) -> Self {
        Self {
            effect,
            shows_notification: true,
            extra_condition: None,
        }
    }
}

/// Data for an ability, as it is written in the catalogue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbilityData {
    pub name: String,
    #[serde(default)]
    pub flags: HashSet<AbilityFlag>,
    /// Effects, in the order they run.
    #[serde(default)]
    pub effects: Vec<AbilityEffectEntry>,
    /// Every condition must hold for any effect to run.
    #[serde(default)]
    pub conditions: Vec<EffectCondition>,
}

/// A registered ability.
///
/// Shared by every combatant that holds it.
#[derive(Debug)]
pub struct Ability {
    id: Id,
    data: AbilityData,
}

impl Ability {
    pub fn new(data: AbilityData) -> Self {
        Self {
            id: Id::from(data.name.as_str()),
            data,
        }
    }

    pub fn name(&self) -> &str {
        &self.data.name
    }

    pub fn has_flag(&self, flag: AbilityFlag) -> bool {
        self.data.flags.contains(&flag)
    }

    pub fn effects(&self) -> &[AbilityEffectEntry] {
        &self.data.effects
    }

    pub fn conditions(&self) -> &[EffectCondition] {
        &self.data.conditions
    }

    /// Does this ability suppress the abilities of every other combatant on the field?
    pub fn is_field_suppressor(&self) -> bool {
        self.data
            .effects
            .iter()
            .any(|entry| matches!(entry.effect, AbilityEffect::SuppressFieldAbilities(_)))
    }
}

impl Identifiable for Ability {
    fn id(&self) -> &Id {
        &self.id
    }
}
