use std::rc::Rc;

use anyhow::Result;
use battler_data::MoveData;

use crate::{
    battle::{
        BattleContext,
        CombatantId,
    },
    common::{
        BooleanHolder,
        IntegerHolder,
        NumberHolder,
    },
    hooks::{
        CritParams,
        Hook,
        run_hook,
    },
};

/// Whether a hit is critical, and how much a critical hit multiplies damage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CritRoll {
    pub critical: bool,
    pub multiplier: f64,
}

/// Decides whether a hit is critical.
///
/// The stage starts at the move's own ratio and is raised by the attacker's CritStage hooks. A
/// ForceCrit hook or the move itself can guarantee the hit, but the defender's BlockCrit hook
/// vetoes everything. Otherwise, the roll uses the configured chance table.
pub fn roll_critical_hit(
    context: &mut BattleContext,
    attacker: CombatantId,
    defender: CombatantId,
    move_data: &Rc<MoveData>,
) -> Result<CritRoll> {
    let mut params = CritParams {
        attacker,
        defender,
        move_data: move_data.clone(),
        stage: IntegerHolder::new(move_data.crit_stage as i32),
        forced: BooleanHolder::new(move_data.will_crit),
        blocked: BooleanHolder::new(false),
        multiplier: NumberHolder::new(context.battle().options().crit_multiplier),
    };
    run_hook(context, Hook::CritStage, attacker, &mut params)?;
    run_hook(context, Hook::ForceCrit, attacker, &mut params)?;
    run_hook(context, Hook::BlockCrit, defender, &mut params)?;

    let not_critical = CritRoll {
        critical: false,
        multiplier: 1.0,
    };
    if params.blocked.get() {
        return Ok(not_critical);
    }
    let critical = params.forced.get() || {
        let stage = params.stage.get().clamp(0, u8::MAX as i32) as u8;
        let denominator = context
            .battle()
            .options()
            .crit_chance_denominator(stage);
        context.chance(1, denominator)
    };
    if !critical {
        return Ok(not_critical);
    }

    run_hook(context, Hook::CritMultiplier, attacker, &mut params)?;
    Ok(CritRoll {
        critical,
        multiplier: params.multiplier.get(),
    })
}
