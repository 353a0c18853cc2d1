//! The built-in effect catalogue.
//!
//! Each effect is a plain data struct that implements
//! [`EffectUnit`][`crate::effect::EffectUnit`] for the parameter type of its hook.

mod contact;
mod crit;
mod immunity;
mod power;
mod stats;
mod status;
mod turn;

pub use contact::{
    ContactDamageEffect,
    ContactStatusEffect,
    ContactTagEffect,
    PostFaintContactDamageEffect,
    StealHeldItemEffect,
};
pub use crit::{
    BlockCritEffect,
    BonusCritEffect,
    ConditionalCritEffect,
    CritMultiplierEffect,
};
pub use immunity::{
    BlockNonDirectDamageEffect,
    BlockOneHitKoEffect,
    BlockRecoilEffect,
    MoveFlagImmunityEffect,
    PriorityMoveImmunityEffect,
    StatusImmunityEffect,
    TagImmunityEffect,
    TypeImmunityEffect,
};
pub use power::{
    AllyPowerBoostEffect,
    DamageTakenCondition,
    MovePowerBoostEffect,
    MoveTypeChangeEffect,
    MoveTypeCondition,
    PowerCondition,
    ReceivedDamageMultiplierEffect,
    StabBoostEffect,
};
pub use stats::{
    AccuracyMultiplierEffect,
    FieldStatMultiplierEffect,
    IgnoreOpponentStatStagesEffect,
    ProtectStatEffect,
    StatMultiplierEffect,
};
pub use status::SynchronizeStatusEffect;
pub use turn::{
    PostSummonStatStageEffect,
    PostSummonWeatherEffect,
    PostTurnHealEffect,
    PostTurnStatStageEffect,
    PostWeatherChangeStatStageEffect,
    SuppressFieldAbilitiesEffect,
};
