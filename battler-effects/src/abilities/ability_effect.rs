use serde::{
    Deserialize,
    Serialize,
};

use crate::abilities::effects::{
    AccuracyMultiplierEffect,
    AllyPowerBoostEffect,
    BlockCritEffect,
    BlockNonDirectDamageEffect,
    BlockOneHitKoEffect,
    BlockRecoilEffect,
    BonusCritEffect,
    ConditionalCritEffect,
    ContactDamageEffect,
    ContactStatusEffect,
    ContactTagEffect,
    CritMultiplierEffect,
    FieldStatMultiplierEffect,
    IgnoreOpponentStatStagesEffect,
    MoveFlagImmunityEffect,
    MovePowerBoostEffect,
    MoveTypeChangeEffect,
    PostFaintContactDamageEffect,
    PostSummonStatStageEffect,
    PostSummonWeatherEffect,
    PostTurnHealEffect,
    PostTurnStatStageEffect,
    PostWeatherChangeStatStageEffect,
    PriorityMoveImmunityEffect,
    ProtectStatEffect,
    ReceivedDamageMultiplierEffect,
    StabBoostEffect,
    StatMultiplierEffect,
    StatusImmunityEffect,
    StealHeldItemEffect,
    SuppressFieldAbilitiesEffect,
    SynchronizeStatusEffect,
    TagImmunityEffect,
    TypeImmunityEffect,
};

/// Every kind of effect an ability can have.
///
/// The variant decides which hook the effect answers to; see
/// [`HookParams`][`crate::hooks::HookParams`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AbilityEffect {
    TypeImmunity(TypeImmunityEffect),
    MoveFlagImmunity(MoveFlagImmunityEffect),
    PriorityMoveImmunity(PriorityMoveImmunityEffect),
    ReceivedDamageMultiplier(ReceivedDamageMultiplierEffect),
    MoveTypeChange(MoveTypeChangeEffect),
    AccuracyMultiplier(AccuracyMultiplierEffect),
    MovePowerBoost(MovePowerBoostEffect),
    AllyPowerBoost(AllyPowerBoostEffect),
    BonusCrit(BonusCritEffect),
    ConditionalCrit(ConditionalCritEffect),
    BlockCrit(BlockCritEffect),
    CritMultiplier(CritMultiplierEffect),
    StabBoost(StabBoostEffect),
    StatMultiplier(StatMultiplierEffect),
    FieldStatMultiplier(FieldStatMultiplierEffect),
    IgnoreOpponentStatStages(IgnoreOpponentStatStagesEffect),
    ProtectStat(ProtectStatEffect),
    PostDefendContactDamage(ContactDamageEffect),
    PostDefendContactStatus(ContactStatusEffect),
    PostDefendContactTag(ContactTagEffect),
    PostAttackStealHeldItem(StealHeldItemEffect),
    BlockNonDirectDamage(BlockNonDirectDamageEffect),
    BlockRecoil(BlockRecoilEffect),
    BlockOneHitKo(BlockOneHitKoEffect),
    StatusImmunity(StatusImmunityEffect),
    SynchronizeStatus(SynchronizeStatusEffect),
    TagImmunity(TagImmunityEffect),
    PostTurnHeal(PostTurnHealEffect),
    PostTurnStatStage(PostTurnStatStageEffect),
    PostSummonStatStage(PostSummonStatStageEffect),
    PostSummonWeather(PostSummonWeatherEffect),
    SuppressFieldAbilities(SuppressFieldAbilitiesEffect),
    PostFaintContactDamage(PostFaintContactDamageEffect),
    PostWeatherChangeStatStage(PostWeatherChangeStatStageEffect),
}
