use std::rc::Rc;

use anyhow::Result;
use battler_data::{
    Boost,
    MoveData,
    Stat,
};

use crate::{
    battle::{
        BattleContext,
        CombatantId,
        FieldScope,
    },
    common::{
        BooleanHolder,
        NumberHolder,
    },
    damage::boosted_stat,
    hooks::{
        Hook,
        StatParams,
        StatStageParams,
        run_field_hook,
        run_hook,
    },
};

/// The value of `stat` on `target` as used in a damage calculation against `opponent`.
///
/// The opponent may ignore the target's stages. A critical hit ignores the attacker's negative
/// offensive stages and the defender's positive defensive stages. The result then goes through
/// the target's own multipliers and the field-wide multipliers.
pub fn effective_stat(
    context: &mut BattleContext,
    target: CombatantId,
    opponent: Option<CombatantId>,
    stat: Stat,
    move_data: Option<Rc<MoveData>>,
    critical: bool,
) -> Result<u32> {
    let combatant = context.combatant(target)?;
    let raw = combatant.stat(stat);
    let mut stage = Boost::from_stat(stat)
        .map(|boost| combatant.boost(boost))
        .unwrap_or_default();

    if stage != 0 {
        if let Some(opponent) = opponent {
            let mut params = StatStageParams {
                target,
                stat,
                ignored: BooleanHolder::new(false),
            };
            run_hook(context, Hook::IgnoreOpponentStatStages, opponent, &mut params)?;
            if params.ignored.get() {
                stage = 0;
            }
        }
    }
    if critical
        && ((stat.is_offensive() && stage < 0) || (stat.is_defensive() && stage > 0))
    {
        stage = 0;
    }

    let mut params = StatParams {
        target,
        opponent,
        stat,
        move_data,
        multiplier: NumberHolder::new(1.0),
        applied: BooleanHolder::new(false),
    };
    run_hook(context, Hook::StatMultiplier, target, &mut params)?;
    run_field_hook(context, Hook::FieldStatMultiplier, FieldScope::All, &mut params)?;

    let value = boosted_stat(raw, stage) as f64 * params.multiplier.get();
    Ok((value.floor() as u32).max(1))
}
