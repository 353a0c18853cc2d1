mod ability;
mod ability_effect;
pub mod effects;
mod registry;

pub use ability::{
    Ability,
    AbilityData,
    AbilityEffectEntry,
};
pub use ability_effect::AbilityEffect;
pub use registry::AbilityRegistry;
