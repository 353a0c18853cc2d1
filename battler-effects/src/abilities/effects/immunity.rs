use anyhow::Result;
use battler_data::{
    Fraction,
    MoveFlag,
    Status,
    Type,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    battle::core_battle_actions,
    effect::{
        CancelInteraction,
        EffectContext,
        EffectUnit,
    },
    hooks::{
        CancelParams,
        PreDefendParams,
        StatusParams,
        TagParams,
    },
    tags::TagType,
};

/// Immunity to one attacking type, optionally healing the holder instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeImmunityEffect {
    pub immune_type: Type,
    #[serde(default)]
    pub heal_ratio: Option<Fraction>,
}

impl EffectUnit<PreDefendParams> for TypeImmunityEffect {
    fn can_apply(&self, _: &EffectContext, params: &PreDefendParams) -> bool {
        params.attacker != params.defender
            && !params.move_data.typeless
            && params.move_type == self.immune_type
    }

    fn apply(&self, context: &mut EffectContext, params: &mut PreDefendParams) -> Result<()> {
        params.type_multiplier.set(0.0);
        params.cancelled.set(true);
        if let Some(ratio) = self.heal_ratio {
            let owner = context.owner();
            let amount = ratio.of_at_least_one(context.owner_combatant()?.max_hp());
            core_battle_actions::heal(context.battle_context(), owner, amount)?;
        }
        Ok(())
    }

    fn trigger_message(
        &self,
        context: &EffectContext,
        _: &PreDefendParams,
        _: &str,
    ) -> Option<String> {
        match self.heal_ratio {
            Some(_) => None,
            None => Some(format!(
                "It doesn't affect {}!",
                context.name_of(context.owner())
            )),
        }
    }
}

/// Immunity to moves carrying a flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveFlagImmunityEffect {
    pub flag: MoveFlag,
}

impl EffectUnit<PreDefendParams> for MoveFlagImmunityEffect {
    fn can_apply(&self, _: &EffectContext, params: &PreDefendParams) -> bool {
        CancelInteraction::can_apply(params)
            && params.attacker != params.defender
            && params.move_data.has_flag(self.flag)
    }

    fn apply(&self, _: &mut EffectContext, params: &mut PreDefendParams) -> Result<()> {
        CancelInteraction::apply(params);
        params.type_multiplier.set(0.0);
        Ok(())
    }

    fn trigger_message(
        &self,
        context: &EffectContext,
        _: &PreDefendParams,
        _: &str,
    ) -> Option<String> {
        Some(format!("{} is unaffected!", context.name_of(context.owner())))
    }
}

/// Blocks priority moves aimed at the holder's side by opponents.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct PriorityMoveImmunityEffect {}

impl EffectUnit<PreDefendParams> for PriorityMoveImmunityEffect {
    fn can_apply(&self, context: &EffectContext, params: &PreDefendParams) -> bool {
        if !CancelInteraction::can_apply(params) || params.move_data.priority <= 0 {
            return false;
        }
        match (
            context.owner_combatant(),
            context.combatant(params.attacker),
        ) {
            (Ok(owner), Ok(attacker)) => owner.is_opponent(attacker),
            _ => false,
        }
    }

    fn apply(&self, _: &mut EffectContext, params: &mut PreDefendParams) -> Result<()> {
        CancelInteraction::apply(params);
        params.type_multiplier.set(0.0);
        Ok(())
    }

    fn trigger_message(
        &self,
        context: &EffectContext,
        params: &PreDefendParams,
        _: &str,
    ) -> Option<String> {
        Some(format!(
            "{} cannot use {}!",
            context.name_of(params.attacker),
            params.move_data.name
        ))
    }
}

/// Refuses one-hit knockouts.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct BlockOneHitKoEffect {}

impl EffectUnit<CancelParams> for BlockOneHitKoEffect {
    fn can_apply(&self, _: &EffectContext, params: &CancelParams) -> bool {
        CancelInteraction::can_apply(params)
    }

    fn apply(&self, _: &mut EffectContext, params: &mut CancelParams) -> Result<()> {
        CancelInteraction::apply(params);
        Ok(())
    }

    fn trigger_message(
        &self,
        context: &EffectContext,
        _: &CancelParams,
        display_name: &str,
    ) -> Option<String> {
        Some(format!(
            "{} was protected by {display_name}!",
            context.name_of(context.owner())
        ))
    }
}

/// Refuses damage that does not come from a direct hit.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct BlockNonDirectDamageEffect {}

impl EffectUnit<CancelParams> for BlockNonDirectDamageEffect {
    fn can_apply(&self, _: &EffectContext, params: &CancelParams) -> bool {
        CancelInteraction::can_apply(params)
    }

    fn apply(&self, _: &mut EffectContext, params: &mut CancelParams) -> Result<()> {
        CancelInteraction::apply(params);
        Ok(())
    }
}

/// Refuses recoil.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct BlockRecoilEffect {}

impl EffectUnit<CancelParams> for BlockRecoilEffect {
    fn can_apply(&self, _: &EffectContext, params: &CancelParams) -> bool {
        CancelInteraction::can_apply(params)
    }

    fn apply(&self, _: &mut EffectContext, params: &mut CancelParams) -> Result<()> {
        CancelInteraction::apply(params);
        Ok(())
    }
}

/// Refuses statuses. An empty list refuses every status.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct StatusImmunityEffect {
    #[serde(default)]
    pub statuses: Vec<Status>,
}

impl EffectUnit<StatusParams> for StatusImmunityEffect {
    fn can_apply(&self, _: &EffectContext, params: &StatusParams) -> bool {
        CancelInteraction::can_apply(params)
            && (self.statuses.is_empty() || self.statuses.contains(&params.status))
    }

    fn apply(&self, _: &mut EffectContext, params: &mut StatusParams) -> Result<()> {
        CancelInteraction::apply(params);
        Ok(())
    }

    fn trigger_message(
        &self,
        context: &EffectContext,
        params: &StatusParams,
        display_name: &str,
    ) -> Option<String> {
        Some(format!(
            "{}'s {display_name} prevents {:?}!",
            context.name_of(params.target),
            params.status
        ))
    }
}

/// Refuses tags for the holder and its allies.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct TagImmunityEffect {
    pub tag_types: Vec<TagType>,
}

impl EffectUnit<TagParams> for TagImmunityEffect {
    fn can_apply(&self, _: &EffectContext, params: &TagParams) -> bool {
        CancelInteraction::can_apply(params) && self.tag_types.contains(&params.tag_type)
    }

    fn apply(&self, _: &mut EffectContext, params: &mut TagParams) -> Result<()> {
        CancelInteraction::apply(params);
        Ok(())
    }

    fn trigger_message(
        &self,
        context: &EffectContext,
        params: &TagParams,
        display_name: &str,
    ) -> Option<String> {
        Some(format!(
            "{} is protected by {}'s {display_name}!",
            context.name_of(params.target),
            context.name_of(context.owner())
        ))
    }
}
