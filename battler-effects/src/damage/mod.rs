mod accuracy;
mod crit;
mod formula;
mod hit_result;
mod pipeline;
mod stats;

pub use accuracy::{
    accuracy_check,
    accuracy_stage_multiplier,
    move_accuracy,
};
pub use crit::{
    CritRoll,
    roll_critical_hit,
};
pub use formula::{
    DamageInputs,
    base_damage,
    boosted_stat,
    calculate_damage,
    finalize_damage,
    stat_stage_multiplier,
};
pub use hit_result::{
    HitInfo,
    HitOutcome,
    HitResult,
};
pub use pipeline::{
    calculate_and_apply_hit,
    simulate_hit,
};
pub use stats::effective_stat;
