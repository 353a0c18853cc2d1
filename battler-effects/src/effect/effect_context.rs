use anyhow::Result;
use battler_data::Id;

use crate::{
    battle::{
        BattleContext,
        Combatant,
        CombatantId,
        CoreBattle,
    },
    tags::TagType,
};

/// Where a running effect unit comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EffectSource {
    Ability {
        id: Id,
        name: String,
        passive: bool,
    },
    Tag(TagType),
}

/// The context an [`EffectUnit`][`crate::effect::EffectUnit`] runs in.
pub struct EffectContext<'c> {
    battle: BattleContext<'c>,
    owner: CombatantId,
    source: EffectSource,
}

impl<'c> EffectContext<'c> {
    pub fn new(battle: BattleContext<'c>, owner: CombatantId, source: EffectSource) -> Self {
        Self {
            battle,
            owner,
            source,
        }
    }

    /// The battle context, for running engine actions from inside an effect.
    pub fn battle_context(&mut self) -> &mut BattleContext<'c> {
        &mut self.battle
    }

    pub fn battle(&self) -> &CoreBattle {
        self.battle.battle()
    }

    pub fn simulated(&self) -> bool {
        self.battle.simulated()
    }

    /// The combatant whose ability or tag owns the running unit.
    pub fn owner(&self) -> CombatantId {
        self.owner
    }

    pub fn owner_combatant(&self) -> Result<&Combatant> {
        self.battle.combatant(self.owner)
    }

    pub fn combatant(&self, id: CombatantId) -> Result<&Combatant> {
        self.battle.combatant(id)
    }

    pub fn source(&self) -> &EffectSource {
        &self.source
    }

    /// Queues the flyout for the running ability, for units that only know whether they took
    /// effect once they have applied. No-op for tags.
    pub fn announce(&mut self) {
        if let EffectSource::Ability { name, .. } = &self.source {
            self.battle.notify_ability(self.owner, name);
        }
    }

    /// Name of a combatant for messages. Empty if the id is dangling.
    pub fn name_of(&self, id: CombatantId) -> String {
        self.battle.name_of(id).unwrap_or_default()
    }
}
