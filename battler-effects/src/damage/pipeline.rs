use std::rc::Rc;

use anyhow::Result;
use battler_data::{
    MoveCategory,
    MoveData,
    Stat,
    Type,
    Weather,
};

use crate::{
    battle::{
        BattleContext,
        CombatantId,
        FieldScope,
        core_battle_actions,
    },
    common::NumberHolder,
    config::BaseDamageRandomization,
    damage::{
        DamageInputs,
        HitInfo,
        HitOutcome,
        HitResult,
        calculate_damage,
        effective_stat,
        finalize_damage,
        roll_critical_hit,
    },
    hooks::{
        CancelParams,
        Hook,
        MoveTypeParams,
        PostDamageParams,
        PowerParams,
        PreDefendParams,
        StabParams,
        run_field_hook,
        run_hook,
    },
    tags::TagType,
};

const STAB_MULTIPLIER: f64 = 1.5;

/// The type a move hits with after the attacker's MoveTypeChange hooks, and the power multiplier
/// that came with the change.
fn resolve_move_type(
    context: &mut BattleContext,
    attacker: CombatantId,
    defender: CombatantId,
    move_data: &Rc<MoveData>,
) -> Result<(Type, f64)> {
    let mut params = MoveTypeParams::new(attacker, defender, move_data.clone());
    run_hook(context, Hook::MoveTypeChange, attacker, &mut params)?;
    let move_type = params.move_type.get();
    if move_type != move_data.primary_type {
        log::debug!("{} became {move_type:?}", move_data.name);
    }
    Ok((move_type, params.power.get()))
}

/// The type multiplier before any effect weighs in.
fn base_type_multiplier(
    context: &BattleContext,
    defender: CombatantId,
    move_data: &MoveData,
    move_type: Type,
) -> Result<f64> {
    if move_data.typeless {
        return Ok(1.0);
    }
    let battle = context.battle();
    let chart = &battle.options().type_chart;
    let defender = context.combatant(defender)?;
    let mut multiplier = chart.multiplier(move_type, &defender.types);

    // Strong winds remove the Flying type's weaknesses.
    if battle.field.weather == Some(Weather::StrongWinds) && defender.has_type(Type::Flying) {
        let flying = chart.effectiveness(move_type, Type::Flying).multiplier();
        if flying > 1.0 {
            multiplier /= flying;
        }
    }
    Ok(multiplier)
}

fn random_factor(context: &mut BattleContext) -> f64 {
    let roll = match context.battle().options().randomize_base_damage {
        BaseDamageRandomization::Randomize => context.range_inclusive(85, 100),
        BaseDamageRandomization::Max => 100,
        BaseDamageRandomization::Min => 85,
    };
    roll as f64 / 100.0
}

fn field_multiplier(
    context: &BattleContext,
    attacker: CombatantId,
    defender: CombatantId,
    move_type: Type,
) -> Result<f64> {
    let field = &context.battle().field;
    let weather = field
        .weather
        .map(|weather| weather.attack_type_multiplier(move_type))
        .unwrap_or(1.0);
    let terrain = match field.terrain {
        Some(terrain) => terrain.attack_type_multiplier(
            move_type,
            context.combatant(attacker)?.is_grounded(),
            context.combatant(defender)?.is_grounded(),
        ),
        None => 1.0,
    };
    Ok(weather * terrain)
}

/// Damage from the formula, along with whether the hit was critical.
fn formula_damage(
    context: &mut BattleContext,
    attacker: CombatantId,
    defender: CombatantId,
    move_data: &Rc<MoveData>,
    (move_type, power_multiplier): (Type, f64),
    type_multiplier: f64,
) -> Result<(u16, bool)> {
    let mut power = PowerParams {
        attacker,
        defender,
        move_data: move_data.clone(),
        move_type,
        power: NumberHolder::new(move_data.base_power as f64 * power_multiplier),
    };
    run_hook(context, Hook::ModifyPower, attacker, &mut power)?;
    run_field_hook(context, Hook::FieldModifyPower, FieldScope::All, &mut power)?;
    let power = power.power.get().floor().max(1.0);

    let crit = roll_critical_hit(context, attacker, defender, move_data)?;

    let has_type = !move_data.typeless && context.combatant(attacker)?.has_type(move_type);
    let mut stab = StabParams {
        attacker,
        move_type,
        multiplier: NumberHolder::new(if has_type { STAB_MULTIPLIER } else { 1.0 }),
    };
    run_hook(context, Hook::StabModify, attacker, &mut stab)?;

    let other = field_multiplier(context, attacker, defender, move_type)?;

    let (attack_stat, defense_stat) = match move_data.category {
        MoveCategory::Special => (Stat::SpAtk, Stat::SpDef),
        _ => (Stat::Atk, Stat::Def),
    };
    let attack = effective_stat(
        context,
        attacker,
        Some(defender),
        attack_stat,
        Some(move_data.clone()),
        crit.critical,
    )?;
    let defense = effective_stat(
        context,
        defender,
        Some(attacker),
        defense_stat,
        Some(move_data.clone()),
        crit.critical,
    )?;

    let inputs = DamageInputs {
        level: context.combatant(attacker)?.level,
        power,
        attack,
        defense,
        stab: stab.multiplier.get(),
        type_multiplier,
        other,
        random: random_factor(context),
        crit_multiplier: crit.multiplier,
    };
    log::trace!("{} on {defender}: {inputs:?}", move_data.name);
    Ok((calculate_damage(&inputs), crit.critical))
}

fn effectiveness_message(result: HitResult) -> Option<&'static str> {
    match result {
        HitResult::SuperEffective => Some("It's super effective!"),
        HitResult::NotVeryEffective => Some("It's not very effective..."),
        HitResult::OneHitKo => Some("It's a one-hit KO!"),
        _ => None,
    }
}

fn resolve_hit(
    context: &mut BattleContext,
    attacker: CombatantId,
    defender: CombatantId,
    move_data: &Rc<MoveData>,
    hit: HitInfo,
) -> Result<HitOutcome> {
    let (move_type, power_multiplier) = resolve_move_type(context, attacker, defender, move_data)?;
    let type_multiplier = base_type_multiplier(context, defender, move_data, move_type)?;

    let mut pre_defend = PreDefendParams::new(
        attacker,
        defender,
        move_data.clone(),
        move_type,
        type_multiplier,
    );
    run_hook(context, Hook::TypeImmunity, defender, &mut pre_defend)?;
    run_hook(context, Hook::MoveImmunity, defender, &mut pre_defend)?;
    let side = context.combatant(defender)?.side;
    run_field_hook(
        context,
        Hook::FieldMoveImmunity,
        FieldScope::Side(side),
        &mut pre_defend,
    )?;

    let type_multiplier = pre_defend.type_multiplier.get();
    if pre_defend.cancelled.get() {
        log::debug!("{} blocked by {defender}", move_data.name);
        return Ok(HitOutcome::blocked(HitResult::Immune, type_multiplier));
    }
    if type_multiplier == 0.0 {
        let name = context.name_of(defender)?;
        context.notify_message(Some(defender), format!("It doesn't affect {name}..."));
        return Ok(HitOutcome::blocked(HitResult::NoEffect, type_multiplier));
    }
    if !move_data.is_damaging() {
        return Ok(HitOutcome::blocked(HitResult::Status, type_multiplier));
    }

    let defender_hp = context.combatant(defender)?.hp;
    let (mut damage, critical, result) = if move_data.ohko {
        let mut block = CancelParams::new(defender, Some(attacker));
        run_hook(context, Hook::BlockOneHitKo, defender, &mut block)?;
        if block.cancelled.get() {
            return Ok(HitOutcome::blocked(HitResult::Immune, type_multiplier));
        }
        (defender_hp, false, HitResult::OneHitKo)
    } else if let Some(fixed) = move_data.fixed_damage {
        (fixed, false, HitResult::Effective)
    } else {
        if field_multiplier(context, attacker, defender, move_type)? == 0.0 {
            context.notify_message(None, "But it failed!");
            return Ok(HitOutcome::blocked(HitResult::NoEffect, type_multiplier));
        }
        let (damage, critical) = formula_damage(
            context,
            attacker,
            defender,
            move_data,
            (move_type, power_multiplier),
            type_multiplier,
        )?;
        run_hook(
            context,
            Hook::ReceivedDamageMultiplier,
            defender,
            &mut pre_defend,
        )?;
        let multiplier = pre_defend.damage_multiplier.get();
        let damage = if multiplier == 1.0 {
            damage
        } else {
            finalize_damage(damage as f64 * multiplier)
        };
        (
            damage,
            critical,
            HitResult::from_type_multiplier(type_multiplier),
        )
    };

    damage = damage.min(defender_hp);
    if defender_hp > 0
        && damage == defender_hp
        && context.combatant(defender)?.has_tag(TagType::Enduring)
    {
        damage = defender_hp.saturating_sub(1);
        let name = context.name_of(defender)?;
        context.notify_message(Some(defender), format!("{name} endured the hit!"));
    }

    let dealt = core_battle_actions::apply_damage(context, defender, damage)?;
    let fainted = defender_hp > 0 && dealt >= defender_hp;
    let outcome = HitOutcome {
        result,
        damage: dealt,
        critical,
        type_multiplier,
        fainted,
    };
    if context.simulated() {
        return Ok(outcome);
    }

    if critical {
        context.notify_message(Some(defender), "A critical hit!");
    }

    let mut post_damage = PostDamageParams {
        attacker,
        defender,
        move_data: move_data.clone(),
        damage: dealt,
        critical,
    };
    run_hook(context, Hook::PostDefend, defender, &mut post_damage)?;
    run_hook(context, Hook::PostAttack, attacker, &mut post_damage)?;

    if let Some(recoil) = move_data.recoil {
        if dealt > 0 && context.combatant(attacker)?.active {
            let mut block = CancelParams::new(attacker, Some(attacker));
            run_hook(context, Hook::BlockRecoil, attacker, &mut block)?;
            if !block.cancelled.get()
                && !core_battle_actions::indirect_damage_blocked(context, attacker, Some(attacker))?
            {
                let name = context.name_of(attacker)?;
                context.notify_message(Some(attacker), format!("{name} is damaged by recoil!"));
                core_battle_actions::damage(
                    context,
                    attacker,
                    recoil.of_at_least_one(dealt),
                    Some(attacker),
                )?;
            }
        }
    }

    if fainted {
        core_battle_actions::faint(context, defender, Some(attacker), Some(move_data.clone()))?;
    }

    if hit.is_last() || fainted {
        if let Some(message) = effectiveness_message(result) {
            context.notify_message(Some(defender), message);
        }
    }

    log::debug!(
        "{} hit {defender} for {dealt} ({result:?}, critical: {critical})",
        move_data.name
    );
    Ok(outcome)
}

/// Resolves one hit of a move against one target.
///
/// Immunities run first and short-circuit the rest of the pipeline. Damage comes from the formula
/// unless the move deals fixed damage or knocks out in one hit. The target's HP is updated, and
/// post-damage hooks, recoil, and fainting follow. Every blocked interaction is reported as a
/// [`HitResult`], never as an error.
pub fn calculate_and_apply_hit(
    context: &mut BattleContext,
    attacker: CombatantId,
    defender: CombatantId,
    move_data: Rc<MoveData>,
    hit: HitInfo,
) -> Result<HitOutcome> {
    let ignoring = context.battle().field.suppression.ignoring_abilities();
    if move_data.ignore_ability {
        context
            .battle_mut()
            .field
            .suppression
            .set_ignoring_abilities(true);
    }
    let outcome = resolve_hit(context, attacker, defender, &move_data, hit);
    context
        .battle_mut()
        .field
        .suppression
        .set_ignoring_abilities(ignoring);
    outcome
}

/// Resolves a hit without touching the battle: no notifications, no HP change, no random draws.
pub fn simulate_hit(
    context: &mut BattleContext,
    attacker: CombatantId,
    defender: CombatantId,
    move_data: Rc<MoveData>,
) -> Result<HitOutcome> {
    context.simulate(|context| {
        calculate_and_apply_hit(context, attacker, defender, move_data, HitInfo::single())
    })
}
