use anyhow::Result;
use battler_data::{
    Boost,
    BoostTable,
    Fraction,
    Weather,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    battle::{
        CombatantId,
        core_battle_actions,
    },
    effect::{
        EffectContext,
        EffectUnit,
    },
    hooks::{
        TurnParams,
        WeatherParams,
    },
};

/// Heals the holder at the end of each turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostTurnHealEffect {
    pub ratio: Fraction,
}

impl EffectUnit<TurnParams> for PostTurnHealEffect {
    fn can_apply(&self, context: &EffectContext, _: &TurnParams) -> bool {
        context
            .owner_combatant()
            .is_ok_and(|owner| !owner.is_fainted() && !owner.is_full_hp())
    }

    fn apply(&self, context: &mut EffectContext, _: &mut TurnParams) -> Result<()> {
        let owner = context.owner();
        let amount = self
            .ratio
            .of_at_least_one(context.owner_combatant()?.max_hp());
        core_battle_actions::heal(context.battle_context(), owner, amount)?;
        Ok(())
    }
}

fn can_change_stage(current: i8, stages: i8) -> bool {
    (stages > 0 && current < BoostTable::MAX_STAGE)
        || (stages < 0 && current > -BoostTable::MAX_STAGE)
}

/// Changes one of the holder's stat stages at the end of each turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostTurnStatStageEffect {
    pub boost: Boost,
    pub stages: i8,
}

impl EffectUnit<TurnParams> for PostTurnStatStageEffect {
    fn can_apply(&self, context: &EffectContext, _: &TurnParams) -> bool {
        context
            .owner_combatant()
            .is_ok_and(|owner| can_change_stage(owner.boost(self.boost), self.stages))
    }

    fn apply(&self, context: &mut EffectContext, _: &mut TurnParams) -> Result<()> {
        let owner = context.owner();
        core_battle_actions::boost(
            context.battle_context(),
            owner,
            self.boost,
            self.stages,
            Some(owner),
        )?;
        Ok(())
    }
}

/// Changes stat stages when the holder enters the field, either its own or its opponents'.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostSummonStatStageEffect {
    pub boost: Boost,
    pub stages: i8,
    #[serde(default)]
    pub opponents: bool,
}

impl PostSummonStatStageEffect {
    fn targets(&self, context: &EffectContext) -> Vec<CombatantId> {
        let Ok(owner) = context.owner_combatant() else {
            return Vec::new();
        };
        if !self.opponents {
            return Vec::from([owner.id]);
        }
        context
            .battle()
            .active_combatants()
            .filter(|combatant| combatant.is_opponent(owner) && !combatant.is_fainted())
            .map(|combatant| combatant.id)
            .collect()
    }
}

impl EffectUnit<TurnParams> for PostSummonStatStageEffect {
    fn can_apply(&self, context: &EffectContext, _: &TurnParams) -> bool {
        !self.targets(context).is_empty()
    }

    fn apply(&self, context: &mut EffectContext, _: &mut TurnParams) -> Result<()> {
        let owner = context.owner();
        for target in self.targets(context) {
            core_battle_actions::boost(
                context.battle_context(),
                target,
                self.boost,
                self.stages,
                Some(owner),
            )?;
        }
        Ok(())
    }
}

/// Sets the weather when the holder enters the field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostSummonWeatherEffect {
    pub weather: Weather,
}

impl EffectUnit<TurnParams> for PostSummonWeatherEffect {
    fn can_apply(&self, context: &EffectContext, _: &TurnParams) -> bool {
        context.battle().field.weather != Some(self.weather)
    }

    fn apply(&self, context: &mut EffectContext, _: &mut TurnParams) -> Result<()> {
        core_battle_actions::set_weather(context.battle_context(), Some(self.weather))?;
        Ok(())
    }
}

/// Suppresses the abilities of every other combatant while the holder is on the field.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct SuppressFieldAbilitiesEffect {}

impl EffectUnit<TurnParams> for SuppressFieldAbilitiesEffect {
    fn can_apply(&self, context: &EffectContext, _: &TurnParams) -> bool {
        !context
            .battle()
            .field
            .suppression
            .suppressors()
            .contains(&context.owner())
    }

    fn apply(&self, context: &mut EffectContext, _: &mut TurnParams) -> Result<()> {
        let owner = context.owner();
        core_battle_actions::add_field_suppressor(context.battle_context(), owner);
        Ok(())
    }

    fn trigger_message(&self, _: &EffectContext, _: &TurnParams, _: &str) -> Option<String> {
        Some("Abilities on the field were neutralized!".to_owned())
    }
}

/// Changes one of the holder's stat stages when the weather becomes one of the given kinds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostWeatherChangeStatStageEffect {
    pub weather: Vec<Weather>,
    pub boost: Boost,
    pub stages: i8,
}

impl EffectUnit<WeatherParams> for PostWeatherChangeStatStageEffect {
    fn can_apply(&self, context: &EffectContext, params: &WeatherParams) -> bool {
        params.previous != params.weather
            && params
                .weather
                .is_some_and(|weather| self.weather.contains(&weather))
            && context
                .owner_combatant()
                .is_ok_and(|owner| can_change_stage(owner.boost(self.boost), self.stages))
    }

    fn apply(&self, context: &mut EffectContext, _: &mut WeatherParams) -> Result<()> {
        let owner = context.owner();
        core_battle_actions::boost(
            context.battle_context(),
            owner,
            self.boost,
            self.stages,
            Some(owner),
        )?;
        Ok(())
    }
}
