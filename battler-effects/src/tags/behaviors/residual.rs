use anyhow::Result;
use battler_data::{
    Fraction,
    Status,
    Type,
};

use crate::{
    battle::{
        BattleContext,
        core_battle_actions,
    },
    tags::{
        BattlerTag,
        LapseCategory,
        TagBehavior,
        TagContext,
        TagDuration,
    },
};

fn fraction_of_max_hp(context: &TagContext, fraction: Fraction) -> Result<u16> {
    Ok(fraction.of_at_least_one(context.owner_combatant()?.max_hp()))
}

/// Announces and deals residual damage to the owner, unless it refuses indirect damage.
fn hurt(context: &mut TagContext, fraction: Fraction, tag: &BattlerTag, text: &str) -> Result<u16> {
    let owner = context.owner();
    if core_battle_actions::indirect_damage_blocked(context.battle_context(), owner, tag.source_id)?
    {
        return Ok(0);
    }
    let amount = fraction_of_max_hp(context, fraction)?;
    let name = context.name()?;
    context.message(format!("{name} {text}"));
    core_battle_actions::damage(context.battle_context(), owner, amount, tag.source_id)
}

/// Leech Seed: drains the owner at the end of each turn and heals the source.
pub struct LeechSeed;

impl TagBehavior for LeechSeed {
    fn lapse_categories(&self) -> &'static [LapseCategory] {
        &[LapseCategory::OnTurnEnd]
    }

    fn initial_duration(&self, _: &mut BattleContext) -> TagDuration {
        TagDuration::Indefinite
    }

    fn is_source_linked(&self) -> bool {
        true
    }

    fn can_add(&self, context: &TagContext, _: &BattlerTag) -> Result<bool> {
        Ok(!context.owner_combatant()?.has_type(Type::Grass))
    }

    fn on_add(&self, context: &mut TagContext, _: &mut BattlerTag) -> Result<()> {
        let name = context.name()?;
        context.message(format!("{name} was seeded!"));
        Ok(())
    }

    fn lapse(
        &self,
        context: &mut TagContext,
        tag: &mut BattlerTag,
        _: LapseCategory,
    ) -> Result<bool> {
        let Some(source) = tag.source_id else {
            return Ok(false);
        };
        let source_present = context
            .battle_context()
            .combatant(source)
            .map(|combatant| combatant.active && !combatant.is_fainted())?;
        if !source_present {
            return Ok(true);
        }
        let amount = fraction_of_max_hp(context, Fraction::new(1, 8))?;
        let owner = context.owner();
        let name = context.name()?;
        let drained = core_battle_actions::apply_indirect_damage(
            context.battle_context(),
            owner,
            amount,
            Some(source),
        )?;
        if drained > 0 {
            context.message(format!("{name}'s health is sapped by Leech Seed!"));
            core_battle_actions::heal(context.battle_context(), source, drained)?;
        }
        Ok(true)
    }
}

/// Bind: damages the owner at the end of each turn until it runs out.
pub struct Bind;

impl TagBehavior for Bind {
    fn lapse_categories(&self) -> &'static [LapseCategory] {
        &[LapseCategory::OnTurnEnd]
    }

    fn initial_duration(&self, context: &mut BattleContext) -> TagDuration {
        TagDuration::Turns(context.range_inclusive(4, 5) as u8)
    }

    fn is_source_linked(&self) -> bool {
        true
    }

    fn on_add(&self, context: &mut TagContext, _: &mut BattlerTag) -> Result<()> {
        let name = context.name()?;
        context.message(format!("{name} was trapped!"));
        Ok(())
    }

    fn lapse(
        &self,
        context: &mut TagContext,
        tag: &mut BattlerTag,
        _: LapseCategory,
    ) -> Result<bool> {
        if !tag.tick() {
            return Ok(false);
        }
        hurt(context, Fraction::new(1, 8), tag, "is hurt by the bind!")?;
        Ok(true)
    }

    fn on_remove(&self, context: &mut TagContext, _: &BattlerTag) -> Result<()> {
        let name = context.name()?;
        context.message(format!("{name} was freed!"));
        Ok(())
    }
}

/// Nightmare: damages a sleeping owner after each of its moves.
pub struct Nightmare;

impl TagBehavior for Nightmare {
    fn lapse_categories(&self) -> &'static [LapseCategory] {
        &[LapseCategory::AfterOwnMove]
    }

    fn initial_duration(&self, _: &mut BattleContext) -> TagDuration {
        TagDuration::Indefinite
    }

    fn can_add(&self, context: &TagContext, _: &BattlerTag) -> Result<bool> {
        Ok(context.owner_combatant()?.status == Some(Status::Sleep))
    }

    fn on_add(&self, context: &mut TagContext, _: &mut BattlerTag) -> Result<()> {
        let name = context.name()?;
        context.message(format!("{name} began having a nightmare!"));
        Ok(())
    }

    fn lapse(
        &self,
        context: &mut TagContext,
        tag: &mut BattlerTag,
        _: LapseCategory,
    ) -> Result<bool> {
        if context.owner_combatant()?.status != Some(Status::Sleep) {
            return Ok(false);
        }
        hurt(context, Fraction::new(1, 4), tag, "is locked in a nightmare!")?;
        Ok(tag.tick())
    }
}

/// Perish Song: the owner faints when the count reaches zero.
pub struct PerishSong;

impl TagBehavior for PerishSong {
    fn lapse_categories(&self) -> &'static [LapseCategory] {
        &[LapseCategory::OnTurnEnd]
    }

    fn initial_duration(&self, _: &mut BattleContext) -> TagDuration {
        TagDuration::Turns(4)
    }

    fn on_add(&self, context: &mut TagContext, _: &mut BattlerTag) -> Result<()> {
        let name = context.name()?;
        context.message(format!("{name} heard the perish song!"));
        Ok(())
    }

    fn lapse(
        &self,
        context: &mut TagContext,
        tag: &mut BattlerTag,
        _: LapseCategory,
    ) -> Result<bool> {
        let active = tag.tick();
        let name = context.name()?;
        let count = tag.remaining_turns.turns().unwrap_or_default();
        context.message(format!("{name}'s perish count fell to {count}."));
        if active {
            return Ok(true);
        }
        let owner = context.owner();
        let hp = context.owner_combatant()?.hp;
        core_battle_actions::damage(context.battle_context(), owner, hp, None)?;
        Ok(false)
    }
}

/// Ingrain: heals the owner at the end of each turn.
pub struct Ingrain;

impl TagBehavior for Ingrain {
    fn lapse_categories(&self) -> &'static [LapseCategory] {
        &[LapseCategory::OnTurnEnd]
    }

    fn initial_duration(&self, _: &mut BattleContext) -> TagDuration {
        TagDuration::Indefinite
    }

    fn on_add(&self, context: &mut TagContext, _: &mut BattlerTag) -> Result<()> {
        let name = context.name()?;
        context.message(format!("{name} planted its roots!"));
        Ok(())
    }

    fn lapse(
        &self,
        context: &mut TagContext,
        tag: &mut BattlerTag,
        _: LapseCategory,
    ) -> Result<bool> {
        if !context.owner_combatant()?.is_full_hp() {
            let amount = fraction_of_max_hp(context, Fraction::new(1, 16))?;
            let owner = context.owner();
            let healed = core_battle_actions::heal(context.battle_context(), owner, amount)?;
            if healed > 0 {
                let name = context.name()?;
                context.message(format!("{name} absorbed nutrients with its roots!"));
            }
        }
        Ok(tag.tick())
    }
}
