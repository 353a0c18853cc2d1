use anyhow::Result;
use battler_data::{
    Boost,
    Id,
    Identifiable,
    Stat,
    Status,
};

use crate::{
    battle::{
        BattleContext,
        core_battle_actions,
    },
    damage,
    tags::{
        BattlerTag,
        LapseCategory,
        TagBehavior,
        TagContext,
        TagData,
        TagDuration,
    },
};

const CONFUSION_SELF_HIT_POWER: f64 = 40.0;

/// Confusion: before each move, a one in three chance to hit itself instead.
pub struct Confusion;

impl Confusion {
    fn self_hit_damage(context: &mut TagContext) -> Result<u16> {
        let combatant = context.owner_combatant()?;
        let attack = damage::boosted_stat(combatant.stat(Stat::Atk), combatant.boost(Boost::Atk));
        let defense = damage::boosted_stat(combatant.stat(Stat::Def), combatant.boost(Boost::Def));
        let base = damage::base_damage(
            combatant.level,
            CONFUSION_SELF_HIT_POWER,
            attack,
            defense,
        );
        let roll = context.battle_context().range_inclusive(85, 100);
        Ok(damage::finalize_damage(base * roll as f64 / 100.0))
    }
}

impl TagBehavior for Confusion {
    fn lapse_categories(&self) -> &'static [LapseCategory] {
        &[LapseCategory::OnOwnMove]
    }

    fn initial_duration(&self, context: &mut BattleContext) -> TagDuration {
        TagDuration::Turns(context.range_inclusive(2, 5) as u8)
    }

    fn on_add(&self, context: &mut TagContext, _: &mut BattlerTag) -> Result<()> {
        let name = context.name()?;
        context.message(format!("{name} became confused!"));
        Ok(())
    }

    fn on_overlap(&self, context: &mut TagContext, _: &mut BattlerTag) -> Result<()> {
        let name = context.name()?;
        context.message(format!("{name} is already confused!"));
        Ok(())
    }

    fn lapse(
        &self,
        context: &mut TagContext,
        tag: &mut BattlerTag,
        category: LapseCategory,
    ) -> Result<bool> {
        if category == LapseCategory::Custom || !tag.tick() {
            return Ok(false);
        }
        let name = context.name()?;
        context.message(format!("{name} is confused!"));
        if context.battle_context().chance(1, 3) {
            let amount = Self::self_hit_damage(context)?;
            context.move_cancelled.set(true);
            context.message("It hurt itself in its confusion!");
            let owner = context.owner();
            core_battle_actions::damage(context.battle_context(), owner, amount, None)?;
        }
        Ok(true)
    }

    fn on_remove(&self, context: &mut TagContext, _: &BattlerTag) -> Result<()> {
        let name = context.name()?;
        context.message(format!("{name} snapped out of confusion!"));
        Ok(())
    }
}

/// Flinch: cancels the owner's next move this turn.
pub struct Flinch;

impl TagBehavior for Flinch {
    fn lapse_categories(&self) -> &'static [LapseCategory] {
        &[LapseCategory::OnOwnMove, LapseCategory::OnTurnEnd]
    }

    fn initial_duration(&self, _: &mut BattleContext) -> TagDuration {
        TagDuration::Turns(0)
    }

    fn is_silent(&self) -> bool {
        true
    }

    fn lapse(
        &self,
        context: &mut TagContext,
        _: &mut BattlerTag,
        category: LapseCategory,
    ) -> Result<bool> {
        if category == LapseCategory::OnOwnMove {
            context.move_cancelled.set(true);
            let name = context.name()?;
            context.message(format!("{name} flinched!"));
        }
        Ok(false)
    }
}

/// Disable: the owner cannot use the move it used last.
pub struct Disable;

impl Disable {
    fn disabled_move(tag: &BattlerTag) -> Option<&Id> {
        match &tag.data {
            TagData::Move(id) => Some(id),
            TagData::None => None,
        }
    }
}

impl TagBehavior for Disable {
    fn lapse_categories(&self) -> &'static [LapseCategory] {
        &[LapseCategory::OnOwnMove, LapseCategory::OnTurnEnd]
    }

    fn initial_duration(&self, _: &mut BattleContext) -> TagDuration {
        TagDuration::Turns(4)
    }

    fn can_add(&self, context: &TagContext, _: &BattlerTag) -> Result<bool> {
        Ok(context.owner_combatant()?.last_move.is_some())
    }

    fn on_add(&self, context: &mut TagContext, tag: &mut BattlerTag) -> Result<()> {
        let combatant = context.owner_combatant()?;
        let Some(last_move) = combatant.last_move.clone() else {
            return Ok(());
        };
        let name = combatant.name.clone();
        context.message(format!("{name}'s {last_move} was disabled!"));
        tag.data = TagData::Move(last_move);
        Ok(())
    }

    fn lapse(
        &self,
        context: &mut TagContext,
        tag: &mut BattlerTag,
        category: LapseCategory,
    ) -> Result<bool> {
        if category != LapseCategory::OnOwnMove {
            return Ok(tag.tick());
        }
        let disabled_move_name = match (&context.current_move, Self::disabled_move(tag)) {
            (Some(current), Some(disabled)) if current.id() == disabled => current.name.clone(),
            _ => return Ok(true),
        };
        context.move_cancelled.set(true);
        let name = context.name()?;
        context.message(format!("{name}'s {disabled_move_name} is disabled!"));
        Ok(true)
    }

    fn on_remove(&self, context: &mut TagContext, _: &BattlerTag) -> Result<()> {
        let name = context.name()?;
        context.message(format!("{name}'s move is no longer disabled."));
        Ok(())
    }
}

/// Drowsiness: the owner falls asleep when the tag runs out.
pub struct Drowsiness;

impl TagBehavior for Drowsiness {
    fn lapse_categories(&self) -> &'static [LapseCategory] {
        &[LapseCategory::OnTurnEnd]
    }

    fn initial_duration(&self, _: &mut BattleContext) -> TagDuration {
        TagDuration::Turns(2)
    }

    fn can_add(&self, context: &TagContext, _: &BattlerTag) -> Result<bool> {
        Ok(context.owner_combatant()?.status.is_none())
    }

    fn on_add(&self, context: &mut TagContext, _: &mut BattlerTag) -> Result<()> {
        let name = context.name()?;
        context.message(format!("{name} grew drowsy!"));
        Ok(())
    }

    fn lapse(
        &self,
        context: &mut TagContext,
        tag: &mut BattlerTag,
        _: LapseCategory,
    ) -> Result<bool> {
        if tag.tick() {
            return Ok(true);
        }
        let owner = context.owner();
        core_battle_actions::set_status(
            context.battle_context(),
            owner,
            Status::Sleep,
            tag.source_id,
        )?;
        Ok(false)
    }
}
