mod engine_options;

pub use engine_options::{
    BaseDamageRandomization,
    EngineOptions,
    SpeedSortTieResolution,
};
