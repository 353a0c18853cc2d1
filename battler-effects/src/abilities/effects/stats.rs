use anyhow::Result;
use battler_data::{
    Boost,
    Stat,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    effect::{
        EffectContext,
        EffectUnit,
    },
    hooks::{
        AccuracyParams,
        StatParams,
        StatStageChangeParams,
        StatStageParams,
    },
};

/// Scales one of the holder's own stats.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatMultiplierEffect {
    pub stat: Stat,
    pub multiplier: f64,
}

impl EffectUnit<StatParams> for StatMultiplierEffect {
    fn can_apply(&self, context: &EffectContext, params: &StatParams) -> bool {
        params.target == context.owner() && params.stat == self.stat
    }

    fn apply(&self, _: &mut EffectContext, params: &mut StatParams) -> Result<()> {
        params.multiplier.scale(self.multiplier);
        Ok(())
    }
}

/// Scales a stat of every other combatant on the field.
///
/// Several holders on the field do not stack: the first to apply wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldStatMultiplierEffect {
    pub stat: Stat,
    pub multiplier: f64,
}

impl EffectUnit<StatParams> for FieldStatMultiplierEffect {
    fn can_apply(&self, context: &EffectContext, params: &StatParams) -> bool {
        !params.applied.get() && params.target != context.owner() && params.stat == self.stat
    }

    fn apply(&self, _: &mut EffectContext, params: &mut StatParams) -> Result<()> {
        params.multiplier.scale(self.multiplier);
        params.applied.set(true);
        Ok(())
    }
}

/// Ignores the stat stages of the holder's opponent. An empty list ignores every stat.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct IgnoreOpponentStatStagesEffect {
    #[serde(default)]
    pub stats: Vec<Stat>,
}

impl EffectUnit<StatStageParams> for IgnoreOpponentStatStagesEffect {
    fn can_apply(&self, context: &EffectContext, params: &StatStageParams) -> bool {
        params.target != context.owner()
            && (self.stats.is_empty() || self.stats.contains(&params.stat))
    }

    fn apply(&self, _: &mut EffectContext, params: &mut StatStageParams) -> Result<()> {
        params.ignored.set(true);
        Ok(())
    }
}

/// Scales the accuracy of the holder's moves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccuracyMultiplierEffect {
    pub multiplier: f64,
}

impl EffectUnit<AccuracyParams> for AccuracyMultiplierEffect {
    fn can_apply(&self, context: &EffectContext, params: &AccuracyParams) -> bool {
        params.attacker == context.owner()
    }

    fn apply(&self, _: &mut EffectContext, params: &mut AccuracyParams) -> Result<()> {
        params.accuracy.scale(self.multiplier);
        Ok(())
    }
}

/// Prevents other combatants from lowering the holder's stat stages.
///
/// Protects a single stat, or every stat when none is given.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ProtectStatEffect {
    #[serde(default)]
    pub boost: Option<Boost>,
}

impl EffectUnit<StatStageChangeParams> for ProtectStatEffect {
    fn can_apply(&self, context: &EffectContext, params: &StatStageChangeParams) -> bool {
        params.target == context.owner()
            && params.source != Some(context.owner())
            && params.stages < 0
            && !params.cancelled.get()
            && self.boost.is_none_or(|boost| boost == params.boost)
    }

    fn apply(&self, _: &mut EffectContext, params: &mut StatStageChangeParams) -> Result<()> {
        params.cancelled.set(true);
        Ok(())
    }

    fn trigger_message(
        &self,
        context: &EffectContext,
        _: &StatStageChangeParams,
        ability_name: &str,
    ) -> Option<String> {
        let stat = match self.boost {
            Some(boost) => format!("{boost:?}"),
            None => "stats".to_owned(),
        };
        Some(format!(
            "{}'s {ability_name} prevents lowering its {stat}!",
            context.name_of(context.owner())
        ))
    }
}
