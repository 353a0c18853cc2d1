use anyhow::Result;
use battler_data::{
    MoveCategory,
    MoveFlag,
    Type,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    effect::{
        EffectContext,
        EffectUnit,
    },
    hooks::{
        MoveTypeParams,
        PowerParams,
        PreDefendParams,
        StabParams,
    },
};

/// Which moves a type change applies to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum MoveTypeCondition {
    Always,
    MoveType { move_type: Type },
}

fn no_power_change() -> f64 {
    1.0
}

/// Changes the type of the holder's moves.
///
/// The new type carries through immunities, the same-type bonus, and type-based boosts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveTypeChangeEffect {
    pub new_type: Type,
    pub condition: MoveTypeCondition,
    #[serde(default = "no_power_change")]
    pub power_multiplier: f64,
}

impl EffectUnit<MoveTypeParams> for MoveTypeChangeEffect {
    fn can_apply(&self, context: &EffectContext, params: &MoveTypeParams) -> bool {
        if params.attacker != context.owner() || params.move_data.typeless {
            return false;
        }
        match &self.condition {
            MoveTypeCondition::Always => true,
            MoveTypeCondition::MoveType { move_type } => params.move_type.get() == *move_type,
        }
    }

    fn apply(&self, _: &mut EffectContext, params: &mut MoveTypeParams) -> Result<()> {
        params.move_type.set(self.new_type);
        params.power.scale(self.power_multiplier);
        Ok(())
    }
}

/// Which moves a power boost applies to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum PowerCondition {
    Always,
    Flag { flag: MoveFlag },
    MoveType { move_type: Type },
    /// Moves whose base power is at most the given value.
    MaxBasePower { power: u32 },
}

impl PowerCondition {
    fn matches(&self, params: &PowerParams) -> bool {
        match self {
            Self::Always => true,
            Self::Flag { flag } => params.move_data.has_flag(*flag),
            Self::MoveType { move_type } => params.move_type == *move_type,
            Self::MaxBasePower { power } => params.move_data.base_power <= *power,
        }
    }
}

/// Boosts the power of the holder's own moves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovePowerBoostEffect {
    pub condition: PowerCondition,
    pub multiplier: f64,
}

impl EffectUnit<PowerParams> for MovePowerBoostEffect {
    fn can_apply(&self, context: &EffectContext, params: &PowerParams) -> bool {
        params.attacker == context.owner() && self.condition.matches(params)
    }

    fn apply(&self, _: &mut EffectContext, params: &mut PowerParams) -> Result<()> {
        params.power.scale(self.multiplier);
        Ok(())
    }
}

/// Boosts the power of allies' moves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllyPowerBoostEffect {
    pub multiplier: f64,
    #[serde(default)]
    pub category: Option<MoveCategory>,
}

impl EffectUnit<PowerParams> for AllyPowerBoostEffect {
    fn can_apply(&self, context: &EffectContext, params: &PowerParams) -> bool {
        if self
            .category
            .is_some_and(|category| category != params.move_data.category)
        {
            return false;
        }
        match (
            context.owner_combatant(),
            context.combatant(params.attacker),
        ) {
            (Ok(owner), Ok(attacker)) => owner.is_ally(attacker),
            _ => false,
        }
    }

    fn apply(&self, _: &mut EffectContext, params: &mut PowerParams) -> Result<()> {
        params.power.scale(self.multiplier);
        Ok(())
    }
}

/// Which incoming hits a received damage multiplier applies to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum DamageTakenCondition {
    Always,
    SuperEffective,
    FullHp,
    Contact,
    MoveType { move_type: Type },
}

/// Scales damage the holder is about to receive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceivedDamageMultiplierEffect {
    pub condition: DamageTakenCondition,
    pub multiplier: f64,
}

impl EffectUnit<PreDefendParams> for ReceivedDamageMultiplierEffect {
    fn can_apply(&self, context: &EffectContext, params: &PreDefendParams) -> bool {
        if params.defender != context.owner() {
            return false;
        }
        match &self.condition {
            DamageTakenCondition::Always => true,
            DamageTakenCondition::SuperEffective => params.type_multiplier.get() > 1.0,
            DamageTakenCondition::FullHp => context
                .owner_combatant()
                .is_ok_and(|owner| owner.is_full_hp()),
            DamageTakenCondition::Contact => params.move_data.has_flag(MoveFlag::Contact),
            DamageTakenCondition::MoveType { move_type } => params.move_type == *move_type,
        }
    }

    fn apply(&self, _: &mut EffectContext, params: &mut PreDefendParams) -> Result<()> {
        params.damage_multiplier.scale(self.multiplier);
        Ok(())
    }
}

/// Replaces the same-type attack bonus when the holder has one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StabBoostEffect {
    pub multiplier: f64,
}

impl EffectUnit<StabParams> for StabBoostEffect {
    fn can_apply(&self, context: &EffectContext, params: &StabParams) -> bool {
        params.attacker == context.owner() && params.multiplier.get() > 1.0
    }

    fn apply(&self, _: &mut EffectContext, params: &mut StabParams) -> Result<()> {
        params.multiplier.set(self.multiplier);
        Ok(())
    }
}
