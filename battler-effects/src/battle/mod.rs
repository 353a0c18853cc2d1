mod combatant;
mod context;
mod core_battle;
pub mod core_battle_actions;
mod field;
mod speed_order;

pub use combatant::{
    Combatant,
    CombatantId,
    HeldItem,
};
pub use context::BattleContext;
pub use core_battle::{
    BattleSnapshot,
    CoreBattle,
};
pub use field::{
    Field,
    FieldScope,
    SuppressionState,
};
pub use speed_order::{
    SpeedOrderable,
    sort_with_random_ties,
    speed_sort,
};
