use crate::{
    abilities::AbilityEffect,
    effect::EffectUnit,
    hooks::{
        AccuracyParams,
        CancelParams,
        CritParams,
        FaintParams,
        Hook,
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
    },
    tags::{
        TagType,
        interceptors,
    },
};

/// Parameter types that hooks can be dispatched with.
///
/// Narrowing maps a hook and an effect to the effect's implementation for this parameter type.
/// Each `(hook, effect)` pair is listed exactly once, so an effect runs only for the hook it
/// was written for.
pub trait HookParams: Sized + 'static {
    fn narrow_ability(hook: Hook, effect: &AbilityEffect) -> Option<&dyn EffectUnit<Self>>;

    fn narrow_tag(hook: Hook, tag_type: TagType) -> Option<&'static dyn EffectUnit<Self>> {
        let _ = (hook, tag_type);
        None
    }
}

fn unit<P, U>(unit: &U) -> Option<&dyn EffectUnit<P>>
where
    U: EffectUnit<P>,
{
    Some(unit)
}

impl HookParams for PreDefendParams {
    fn narrow_ability(hook: Hook, effect: &AbilityEffect) -> Option<&dyn EffectUnit<Self>> {
        match (hook, effect) {
            (Hook::TypeImmunity, AbilityEffect::TypeImmunity(effect)) => unit(effect),
            (Hook::MoveImmunity, AbilityEffect::MoveFlagImmunity(effect)) => unit(effect),
            (Hook::FieldMoveImmunity, AbilityEffect::PriorityMoveImmunity(effect)) => unit(effect),
            (Hook::ReceivedDamageMultiplier, AbilityEffect::ReceivedDamageMultiplier(effect)) => {
                unit(effect)
            }
            _ => None,
        }
    }

    fn narrow_tag(hook: Hook, tag_type: TagType) -> Option<&'static dyn EffectUnit<Self>> {
        match (hook, tag_type) {
            (Hook::TypeImmunity, TagType::MagnetRisen) => Some(&interceptors::LEVITATING),
            (Hook::MoveImmunity, TagType::Protected) => Some(&interceptors::PROTECTION),
            (Hook::MoveImmunity, TagType::SemiInvulnerable) => Some(&interceptors::OUT_OF_REACH),
            _ => None,
        }
    }
}

impl HookParams for MoveTypeParams {
    fn narrow_ability(hook: Hook, effect: &AbilityEffect) -> Option<&dyn EffectUnit<Self>> {
        match (hook, effect) {
            (Hook::MoveTypeChange, AbilityEffect::MoveTypeChange(effect)) => unit(effect),
            _ => None,
        }
    }
}

impl HookParams for AccuracyParams {
    fn narrow_ability(hook: Hook, effect: &AbilityEffect) -> Option<&dyn EffectUnit<Self>> {
        match (hook, effect) {
            (Hook::ModifyAccuracy, AbilityEffect::AccuracyMultiplier(effect)) => unit(effect),
            _ => None,
        }
    }
}

impl HookParams for PowerParams {
    fn narrow_ability(hook: Hook, effect: &AbilityEffect) -> Option<&dyn EffectUnit<Self>> {
        match (hook, effect) {
            (Hook::ModifyPower, AbilityEffect::MovePowerBoost(effect)) => unit(effect),
            (Hook::FieldModifyPower, AbilityEffect::AllyPowerBoost(effect)) => unit(effect),
            _ => None,
        }
    }
}

impl HookParams for CritParams {
    fn narrow_ability(hook: Hook, effect: &AbilityEffect) -> Option<&dyn EffectUnit<Self>> {
        match (hook, effect) {
            (Hook::CritStage, AbilityEffect::BonusCrit(effect)) => unit(effect),
            (Hook::ForceCrit, AbilityEffect::ConditionalCrit(effect)) => unit(effect),
            (Hook::BlockCrit, AbilityEffect::BlockCrit(effect)) => unit(effect),
            (Hook::CritMultiplier, AbilityEffect::CritMultiplier(effect)) => unit(effect),
            _ => None,
        }
    }

    fn narrow_tag(hook: Hook, tag_type: TagType) -> Option<&'static dyn EffectUnit<Self>> {
        match (hook, tag_type) {
            (Hook::CritStage, TagType::FocusEnergy) => Some(&interceptors::CRIT_BOOST),
            _ => None,
        }
    }
}

impl HookParams for StabParams {
    fn narrow_ability(hook: Hook, effect: &AbilityEffect) -> Option<&dyn EffectUnit<Self>> {
        match (hook, effect) {
            (Hook::StabModify, AbilityEffect::StabBoost(effect)) => unit(effect),
            _ => None,
        }
    }
}

impl HookParams for StatParams {
    fn narrow_ability(hook: Hook, effect: &AbilityEffect) -> Option<&dyn EffectUnit<Self>> {
        match (hook, effect) {
            (Hook::StatMultiplier, AbilityEffect::StatMultiplier(effect)) => unit(effect),
            (Hook::FieldStatMultiplier, AbilityEffect::FieldStatMultiplier(effect)) => {
                unit(effect)
            }
            _ => None,
        }
    }
}

impl HookParams for StatStageParams {
    fn narrow_ability(hook: Hook, effect: &AbilityEffect) -> Option<&dyn EffectUnit<Self>> {
        match (hook, effect) {
            (Hook::IgnoreOpponentStatStages, AbilityEffect::IgnoreOpponentStatStages(effect)) => {
                unit(effect)
            }
            _ => None,
        }
    }
}

impl HookParams for PostDamageParams {
    fn narrow_ability(hook: Hook, effect: &AbilityEffect) -> Option<&dyn EffectUnit<Self>> {
        match (hook, effect) {
            (Hook::PostDefend, AbilityEffect::PostDefendContactDamage(effect)) => unit(effect),
            (Hook::PostDefend, AbilityEffect::PostDefendContactStatus(effect)) => unit(effect),
            (Hook::PostDefend, AbilityEffect::PostDefendContactTag(effect)) => unit(effect),
            (Hook::PostAttack, AbilityEffect::PostAttackStealHeldItem(effect)) => unit(effect),
            _ => None,
        }
    }
}

impl HookParams for StatStageChangeParams {
    fn narrow_ability(hook: Hook, effect: &AbilityEffect) -> Option<&dyn EffectUnit<Self>> {
        match (hook, effect) {
            (Hook::PreStatStageChange, AbilityEffect::ProtectStat(effect)) => unit(effect),
            _ => None,
        }
    }
}

impl HookParams for StatusParams {
    fn narrow_ability(hook: Hook, effect: &AbilityEffect) -> Option<&dyn EffectUnit<Self>> {
        match (hook, effect) {
            (Hook::PreSetStatus, AbilityEffect::StatusImmunity(effect)) => unit(effect),
            (Hook::StatusApplied, AbilityEffect::SynchronizeStatus(effect)) => unit(effect),
            _ => None,
        }
    }
}

impl HookParams for TagParams {
    fn narrow_ability(hook: Hook, effect: &AbilityEffect) -> Option<&dyn EffectUnit<Self>> {
        match (hook, effect) {
            (Hook::TagImmunity, AbilityEffect::TagImmunity(effect)) => unit(effect),
            _ => None,
        }
    }
}

impl HookParams for CancelParams {
    fn narrow_ability(hook: Hook, effect: &AbilityEffect) -> Option<&dyn EffectUnit<Self>> {
        match (hook, effect) {
            (Hook::BlockNonDirectDamage, AbilityEffect::BlockNonDirectDamage(effect)) => {
                unit(effect)
            }
            (Hook::BlockRecoil, AbilityEffect::BlockRecoil(effect)) => unit(effect),
            (Hook::BlockOneHitKo, AbilityEffect::BlockOneHitKo(effect)) => unit(effect),
            _ => None,
        }
    }
}

impl HookParams for TurnParams {
    fn narrow_ability(hook: Hook, effect: &AbilityEffect) -> Option<&dyn EffectUnit<Self>> {
        match (hook, effect) {
            (Hook::TurnEnd, AbilityEffect::PostTurnHeal(effect)) => unit(effect),
            (Hook::TurnEnd, AbilityEffect::PostTurnStatStage(effect)) => unit(effect),
            (Hook::Summon, AbilityEffect::PostSummonStatStage(effect)) => unit(effect),
            (Hook::Summon, AbilityEffect::PostSummonWeather(effect)) => unit(effect),
            (Hook::Summon, AbilityEffect::SuppressFieldAbilities(effect)) => unit(effect),
            _ => None,
        }
    }
}

impl HookParams for FaintParams {
    fn narrow_ability(hook: Hook, effect: &AbilityEffect) -> Option<&dyn EffectUnit<Self>> {
        match (hook, effect) {
            (Hook::Faint, AbilityEffect::PostFaintContactDamage(effect)) => unit(effect),
            _ => None,
        }
    }
}

impl HookParams for WeatherParams {
    fn narrow_ability(hook: Hook, effect: &AbilityEffect) -> Option<&dyn EffectUnit<Self>> {
        match (hook, effect) {
            (Hook::WeatherChange, AbilityEffect::PostWeatherChangeStatStage(effect)) => {
                unit(effect)
            }
            _ => None,
        }
    }
}
