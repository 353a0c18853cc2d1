use anyhow::Result;
use battler_data::Status;
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    effect::{
        EffectContext,
        EffectUnit,
    },
    hooks::CritParams,
};

fn default_one() -> i32 {
    1
}

/// Raises the critical hit stage of the holder's moves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BonusCritEffect {
    #[serde(default = "default_one")]
    pub stages: i32,
}

impl EffectUnit<CritParams> for BonusCritEffect {
    fn apply(&self, _: &mut EffectContext, params: &mut CritParams) -> Result<()> {
        params.stage.increment(self.stages);
        Ok(())
    }
}

/// Forces a critical hit against a target with one of the given statuses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionalCritEffect {
    pub statuses: Vec<Status>,
}

impl EffectUnit<CritParams> for ConditionalCritEffect {
    fn can_apply(&self, context: &EffectContext, params: &CritParams) -> bool {
        context
            .combatant(params.defender)
            .ok()
            .and_then(|defender| defender.status)
            .is_some_and(|status| self.statuses.contains(&status))
    }

    fn apply(&self, _: &mut EffectContext, params: &mut CritParams) -> Result<()> {
        params.forced.set(true);
        Ok(())
    }
}

/// Prevents critical hits against the holder, even forced ones.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct BlockCritEffect {}

impl EffectUnit<CritParams> for BlockCritEffect {
    fn apply(&self, _: &mut EffectContext, params: &mut CritParams) -> Result<()> {
        params.blocked.set(true);
        Ok(())
    }
}

/// Scales the damage of the holder's critical hits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CritMultiplierEffect {
    pub multiplier: f64,
}

impl EffectUnit<CritParams> for CritMultiplierEffect {
    fn apply(&self, _: &mut EffectContext, params: &mut CritParams) -> Result<()> {
        params.multiplier.scale(self.multiplier);
        Ok(())
    }
}
