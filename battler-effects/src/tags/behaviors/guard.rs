use anyhow::Result;

use crate::{
    battle::BattleContext,
    tags::{
        BattlerTag,
        LapseCategory,
        TagBehavior,
        TagContext,
        TagDuration,
    },
};

/// Protection from moves for the rest of the turn.
///
/// Incoming moves are stopped by [`PROTECTION`][`crate::tags::interceptors::PROTECTION`].
pub struct Protection;

impl TagBehavior for Protection {
    fn lapse_categories(&self) -> &'static [LapseCategory] {
        &[LapseCategory::OnTurnEnd]
    }

    fn initial_duration(&self, _: &mut BattleContext) -> TagDuration {
        TagDuration::Turns(0)
    }

    fn on_add(&self, context: &mut TagContext, _: &mut BattlerTag) -> Result<()> {
        let name = context.name()?;
        context.message(format!("{name} protected itself!"));
        Ok(())
    }
}

/// Survives any hit this turn with at least 1 HP.
pub struct Endurance;

impl TagBehavior for Endurance {
    fn lapse_categories(&self) -> &'static [LapseCategory] {
        &[LapseCategory::OnTurnEnd]
    }

    fn initial_duration(&self, _: &mut BattleContext) -> TagDuration {
        TagDuration::Turns(0)
    }

    fn on_add(&self, context: &mut TagContext, _: &mut BattlerTag) -> Result<()> {
        let name = context.name()?;
        context.message(format!("{name} braced itself!"));
        Ok(())
    }
}

/// Out of reach while charging a two-turn move.
pub struct SemiInvulnerability;

impl TagBehavior for SemiInvulnerability {
    fn lapse_categories(&self) -> &'static [LapseCategory] {
        &[LapseCategory::OnMoveEffect]
    }

    fn initial_duration(&self, _: &mut BattleContext) -> TagDuration {
        TagDuration::Turns(1)
    }

    fn is_silent(&self) -> bool {
        true
    }
}

/// Magnet Rise: immune to Ground moves for five turns.
pub struct MagnetRise;

impl TagBehavior for MagnetRise {
    fn lapse_categories(&self) -> &'static [LapseCategory] {
        &[LapseCategory::OnTurnEnd]
    }

    fn initial_duration(&self, _: &mut BattleContext) -> TagDuration {
        TagDuration::Turns(5)
    }

    fn on_add(&self, context: &mut TagContext, _: &mut BattlerTag) -> Result<()> {
        let name = context.name()?;
        context.message(format!("{name} levitated with electromagnetism!"));
        Ok(())
    }

    fn on_remove(&self, context: &mut TagContext, _: &BattlerTag) -> Result<()> {
        let name = context.name()?;
        context.message(format!("{name}'s electromagnetism wore off!"));
        Ok(())
    }
}
