mod dispatcher;
mod hook;
mod narrow;
mod params;

pub use dispatcher::{
    ability_is_active,
    run_field_hook,
    run_hook,
    run_hook_on_side_of,
    speed_ordered,
};
pub use hook::Hook;
pub use narrow::HookParams;
pub use params::{
    AccuracyParams,
    CancelParams,
    CritParams,
    FaintParams,
    MoveTypeParams,
    PostDamageParams,
    PowerParams,
    PreDefendParams,
    StabParams,
    StatParams,
    StatStageChangeParams,
    StatStageParams,
    StatusParams,
    TagParams,
    TurnParams,
    WeatherParams,
};
