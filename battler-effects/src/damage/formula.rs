use battler_data::BoostTable;

/// Multiplier for a stat stage.
///
/// Stages clamp to the legal range. Positive stages add halves, negative stages divide by them.
pub fn stat_stage_multiplier(stage: i8) -> f64 {
    let stage = stage.clamp(-BoostTable::MAX_STAGE, BoostTable::MAX_STAGE) as f64;
    if stage >= 0.0 {
        (2.0 + stage) / 2.0
    } else {
        2.0 / (2.0 - stage)
    }
}

/// A stat value after its stage multiplier.
pub fn boosted_stat(value: u16, stage: i8) -> u32 {
    (value as f64 * stat_stage_multiplier(stage)).floor() as u32
}

/// `(2 * level / 5 + 2) * power * attack / defense / 50 + 2`, before any modifier.
pub fn base_damage(level: u8, power: f64, attack: u32, defense: u32) -> f64 {
    let level_factor = 2.0 * level as f64 / 5.0 + 2.0;
    level_factor * power * attack as f64 / defense.max(1) as f64 / 50.0 + 2.0
}

/// Floors a damage value, keeping at least 1.
pub fn finalize_damage(damage: f64) -> u16 {
    damage.floor().clamp(1.0, u16::MAX as f64) as u16
}

/// Everything the damage formula depends on.
#[derive(Debug, Clone, PartialEq)]
pub struct DamageInputs {
    pub level: u8,
    pub power: f64,
    pub attack: u32,
    pub defense: u32,
    pub stab: f64,
    pub type_multiplier: f64,
    /// Weather, terrain, and any other flat modifier.
    pub other: f64,
    /// The random roll as a fraction in `[0.85, 1.0]`.
    pub random: f64,
    pub crit_multiplier: f64,
}

/// The damage formula.
pub fn calculate_damage(inputs: &DamageInputs) -> u16 {
    finalize_damage(
        base_damage(inputs.level, inputs.power, inputs.attack, inputs.defense)
            * inputs.stab
            * inputs.type_multiplier
            * inputs.other
            * inputs.random
            * inputs.crit_multiplier,
    )
}
