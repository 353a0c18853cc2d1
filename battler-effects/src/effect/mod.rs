mod cancel;
mod condition;
mod effect_context;
mod effect_unit;

pub use cancel::{
    CancelInteraction,
    Cancellable,
};
pub use condition::EffectCondition;
pub use effect_context::{
    EffectContext,
    EffectSource,
};
pub use effect_unit::EffectUnit;
