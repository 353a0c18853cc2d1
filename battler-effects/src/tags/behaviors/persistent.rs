use anyhow::Result;
use battler_data::Type;

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

/// Focus Energy: raises the owner's critical hit stage until it leaves the field.
pub struct FocusEnergy;

impl TagBehavior for FocusEnergy {
    fn lapse_categories(&self) -> &'static [LapseCategory] {
        &[LapseCategory::Custom]
    }

    fn initial_duration(&self, _: &mut BattleContext) -> TagDuration {
        TagDuration::Indefinite
    }

    fn on_add(&self, context: &mut TagContext, _: &mut BattlerTag) -> Result<()> {
        let name = context.name()?;
        context.message(format!("{name} is getting pumped!"));
        Ok(())
    }

    fn on_overlap(&self, context: &mut TagContext, _: &mut BattlerTag) -> Result<()> {
        let name = context.name()?;
        context.message(format!("{name} is already getting pumped!"));
        Ok(())
    }
}

/// Trapped: the owner cannot switch out while the source stays on the field.
pub struct Trap;

impl TagBehavior for Trap {
    fn lapse_categories(&self) -> &'static [LapseCategory] {
        &[LapseCategory::Custom]
    }

    fn initial_duration(&self, _: &mut BattleContext) -> TagDuration {
        TagDuration::Indefinite
    }

    fn is_source_linked(&self) -> bool {
        true
    }

    fn can_add(&self, context: &TagContext, _: &BattlerTag) -> Result<bool> {
        Ok(!context.owner_combatant()?.has_type(Type::Ghost))
    }

    fn on_add(&self, context: &mut TagContext, _: &mut BattlerTag) -> Result<()> {
        let name = context.name()?;
        context.message(format!("{name} can no longer escape!"));
        Ok(())
    }
}
