use anyhow::Result;
use battler_data::TypeChart;
use battler_prng::{
    PseudoRandomNumberGenerator,
    RealPseudoRandomNumberGenerator,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::error::general_error;

/// How base damage should be randomized in the damage calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BaseDamageRandomization {
    /// Roll a random factor in `[85, 100]`.
    ///
    /// This is the default behavior.
    Randomize,
    /// Only use the maximum base damage value.
    Max,
    /// Only use the minimum base damage value.
    Min,
}

/// How the engine should resolve ties when sorting by speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpeedSortTieResolution {
    /// Resolves ties randomly by advancing RNG.
    Random,
    /// Do not resolve ties and keep the original order of tied elements.
    Keep,
    /// Reverse the original order of tied elements.
    Reverse,
}

fn default_rng_factory() -> fn(seed: Option<u64>) -> Box<dyn PseudoRandomNumberGenerator> {
    |seed: Option<u64>| Box::new(RealPseudoRandomNumberGenerator::new(seed))
}

fn default_randomize() -> BaseDamageRandomization {
    BaseDamageRandomization::Randomize
}

fn default_random() -> SpeedSortTieResolution {
    SpeedSortTieResolution::Random
}

fn default_crit_chance_denominators() -> Vec<u64> {
    vec![24, 8, 2, 1]
}

fn default_crit_multiplier() -> f64 {
    1.5
}

/// Options that change how the effect engine behaves.
#[derive(Clone, Serialize, Deserialize)]
pub struct EngineOptions {
    /// The initial seed for random number generation.
    ///
    /// This can be used to effectively replay or control a battle.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Function for creating the battle's random number generator.
    ///
    /// Primarily useful for tests where we wish to have fine-grained control over battle RNG.
    #[serde(skip, default = "default_rng_factory")]
    pub rng_factory: fn(seed: Option<u64>) -> Box<dyn PseudoRandomNumberGenerator>,

    /// Describes how base damage should be randomized in the damage calculation.
    #[serde(default = "default_randomize")]
    pub randomize_base_damage: BaseDamageRandomization,

    /// Describes how speed ties should be resolved.
    #[serde(default = "default_random")]
    pub speed_sort_tie_resolution: SpeedSortTieResolution,

    /// Critical hit chance by stage, as `1 / denominator`.
    ///
    /// Stages beyond the end of the table use the last entry.
    #[serde(default = "default_crit_chance_denominators")]
    pub crit_chance_denominators: Vec<u64>,

    /// Base damage multiplier for a critical hit, before hooks.
    #[serde(default = "default_crit_multiplier")]
    pub crit_multiplier: f64,

    /// Type chart used for effectiveness.
    #[serde(default)]
    pub type_chart: TypeChart,
}

impl EngineOptions {
    /// Validates the options.
    pub fn validate(&self) -> Result<()> {
        if self.crit_chance_denominators.is_empty() {
            return Err(general_error("crit_chance_denominators cannot be empty"));
        }
        if self.crit_chance_denominators.contains(&0) {
            return Err(general_error(
                "crit_chance_denominators cannot contain a zero denominator",
            ));
        }
        if !(self.crit_multiplier > 0.0) {
            return Err(general_error(format!(
                "crit_multiplier must be positive, got {}",
                self.crit_multiplier
            )));
        }
        Ok(())
    }

    /// The critical hit chance denominator for the given stage.
    pub fn crit_chance_denominator(&self, stage: u8) -> u64 {
        let index = (stage as usize).min(self.crit_chance_denominators.len().saturating_sub(1));
        self.crit_chance_denominators
            .get(index)
            .copied()
            .unwrap_or(1)
    }
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            seed: None,
            rng_factory: default_rng_factory(),
            randomize_base_damage: default_randomize(),
            speed_sort_tie_resolution: default_random(),
            crit_chance_denominators: default_crit_chance_denominators(),
            crit_multiplier: default_crit_multiplier(),
            type_chart: TypeChart::default(),
        }
    }
}
