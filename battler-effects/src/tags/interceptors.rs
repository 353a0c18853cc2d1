//! Hook units carried by tags.
//!
//! Each is a stateless static handed out by
//! [`HookParams::narrow_tag`][`crate::hooks::HookParams::narrow_tag`].

use anyhow::Result;
use battler_data::{
    MoveFlag,
    Type,
};

use crate::{
    effect::{
        CancelInteraction,
        EffectContext,
        EffectUnit,
    },
    hooks::{
        CritParams,
        PreDefendParams,
    },
};

/// Immunity to Ground moves while levitating.
pub struct Levitation;

pub static LEVITATING: Levitation = Levitation;

impl EffectUnit<PreDefendParams> for Levitation {
    fn can_apply(&self, _: &EffectContext, params: &PreDefendParams) -> bool {
        params.move_type == Type::Ground
            && !params.move_data.typeless
            && params.attacker != params.defender
    }

    fn apply(&self, _: &mut EffectContext, params: &mut PreDefendParams) -> Result<()> {
        params.type_multiplier.set(0.0);
        CancelInteraction::apply(params);
        Ok(())
    }

    fn trigger_message(
        &self,
        context: &EffectContext,
        params: &PreDefendParams,
        _: &str,
    ) -> Option<String> {
        Some(format!("It doesn't affect {}!", context.name_of(params.defender)))
    }
}

/// Blocks moves that respect protection.
pub struct ProtectionGuard;

pub static PROTECTION: ProtectionGuard = ProtectionGuard;

impl EffectUnit<PreDefendParams> for ProtectionGuard {
    fn can_apply(&self, _: &EffectContext, params: &PreDefendParams) -> bool {
        CancelInteraction::can_apply(params)
            && params.attacker != params.defender
            && params.move_data.has_flag(MoveFlag::Protect)
    }

    fn apply(&self, _: &mut EffectContext, params: &mut PreDefendParams) -> Result<()> {
        CancelInteraction::apply(params);
        Ok(())
    }

    fn trigger_message(
        &self,
        context: &EffectContext,
        params: &PreDefendParams,
        _: &str,
    ) -> Option<String> {
        Some(format!("{} protected itself!", context.name_of(params.defender)))
    }
}

/// Blocks every move from another combatant while out of reach.
pub struct OutOfReach;

pub static OUT_OF_REACH: OutOfReach = OutOfReach;

impl EffectUnit<PreDefendParams> for OutOfReach {
    fn can_apply(&self, _: &EffectContext, params: &PreDefendParams) -> bool {
        CancelInteraction::can_apply(params) && params.attacker != params.defender
    }

    fn apply(&self, _: &mut EffectContext, params: &mut PreDefendParams) -> Result<()> {
        CancelInteraction::apply(params);
        Ok(())
    }

    fn trigger_message(
        &self,
        context: &EffectContext,
        params: &PreDefendParams,
        _: &str,
    ) -> Option<String> {
        Some(format!("{} avoided the attack!", context.name_of(params.defender)))
    }
}

/// Raises the critical hit stage by two.
pub struct CritBoost;

pub static CRIT_BOOST: CritBoost = CritBoost;

impl EffectUnit<CritParams> for CritBoost {
    fn apply(&self, _: &mut EffectContext, params: &mut CritParams) -> Result<()> {
        params.stage.increment(2);
        Ok(())
    }
}
