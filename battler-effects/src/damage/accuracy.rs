use std::rc::Rc;

use anyhow::Result;
use battler_data::{
    Accuracy,
    Boost,
    BoostTable,
    MoveData,
};

use crate::{
    battle::{
        BattleContext,
        CombatantId,
    },
    common::NumberHolder,
    hooks::{
        AccuracyParams,
        Hook,
        run_hook,
    },
};

/// Multiplier for an accuracy or evasion stage, in thirds.
pub fn accuracy_stage_multiplier(stage: i8) -> f64 {
    let stage = stage.clamp(-BoostTable::MAX_STAGE, BoostTable::MAX_STAGE) as f64;
    if stage >= 0.0 {
        (3.0 + stage) / 3.0
    } else {
        3.0 / (3.0 - stage)
    }
}

/// The percent chance for a move to hit its target, or [`None`] if the move cannot miss.
///
/// One-hit KO moves gain the level difference and fail outright against a higher level target.
/// Everything else nets the attacker's accuracy stage against the target's evasion stage before
/// the attacker's ModifyAccuracy hooks run.
pub fn move_accuracy(
    context: &mut BattleContext,
    attacker: CombatantId,
    defender: CombatantId,
    move_data: &Rc<MoveData>,
) -> Result<Option<u8>> {
    let base = match move_data.accuracy {
        Accuracy::Exempt => return Ok(None),
        Accuracy::Chance(base) => base,
    };

    let attacker_level = context.combatant(attacker)?.level;
    let defender_level = context.combatant(defender)?.level;
    if move_data.ohko {
        if attacker_level < defender_level {
            return Ok(Some(0));
        }
        return Ok(Some(base.saturating_add(attacker_level - defender_level)));
    }

    let stage = context.combatant(attacker)?.boost(Boost::Accuracy) as i16
        - context.combatant(defender)?.boost(Boost::Evasion) as i16;
    let stage = stage.clamp(-(BoostTable::MAX_STAGE as i16), BoostTable::MAX_STAGE as i16) as i8;

    let mut params = AccuracyParams {
        attacker,
        defender,
        move_data: move_data.clone(),
        accuracy: NumberHolder::new(base as f64 * accuracy_stage_multiplier(stage)),
    };
    run_hook(context, Hook::ModifyAccuracy, attacker, &mut params)?;
    Ok(Some(
        params.accuracy.get().floor().clamp(0.0, u8::MAX as f64) as u8,
    ))
}

/// Rolls whether a move hits its target.
///
/// A miss is announced on the target. Simulated checks never draw and only miss when the chance is
/// below 100.
pub fn accuracy_check(
    context: &mut BattleContext,
    attacker: CombatantId,
    defender: CombatantId,
    move_data: &Rc<MoveData>,
) -> Result<bool> {
    let accuracy = match move_accuracy(context, attacker, defender, move_data)? {
        Some(accuracy) => accuracy,
        None => return Ok(true),
    };
    if context.chance(accuracy as u64, 100) {
        return Ok(true);
    }
    log::debug!("{} missed {defender} at {accuracy}%", move_data.name);
    let name = context.name_of(defender)?;
    context.notify_message(Some(defender), format!("{name} avoided the attack!"));
    Ok(false)
}
