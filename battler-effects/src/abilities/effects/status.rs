use anyhow::Result;
use battler_data::Status;
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    battle::core_battle_actions,
    effect::{
        EffectContext,
        EffectUnit,
    },
    hooks::StatusParams,
};

/// Passes burn, paralysis, and poison back to whoever inflicted them.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct SynchronizeStatusEffect {}

impl EffectUnit<StatusParams> for SynchronizeStatusEffect {
    fn can_apply(&self, context: &EffectContext, params: &StatusParams) -> bool {
        if params.target != context.owner() {
            return false;
        }
        if !matches!(
            params.status,
            Status::Burn | Status::Paralysis | Status::Poison | Status::BadPoison
        ) {
            return false;
        }
        match params.source {
            Some(source) if source != params.target => context
                .combatant(source)
                .is_ok_and(|source| source.active && source.status.is_none()),
            _ => false,
        }
    }

    fn apply(&self, context: &mut EffectContext, params: &mut StatusParams) -> Result<()> {
        if let Some(source) = params.source {
            let owner = context.owner();
            core_battle_actions::set_status(
                context.battle_context(),
                source,
                params.status,
                Some(owner),
            )?;
        }
        Ok(())
    }
}
