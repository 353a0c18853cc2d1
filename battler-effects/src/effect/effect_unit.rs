use anyhow::Result;

use crate::effect::EffectContext;

/// A single effect that participates in a hook dispatch.
///
/// `P` is the parameter type of the hook. An effect that does not implement `EffectUnit<P>` can
/// never be handed a `P`, so mismatched content fails to compile instead of misbehaving.
///
/// Units are shared by every combatant that holds the same ability. Any state a unit carries from
/// [`EffectUnit::can_apply`] to [`EffectUnit::apply`] lives in interior scratch and is cleared by
/// [`EffectUnit::reset`], which the dispatcher calls after every invocation.
pub trait EffectUnit<P> {
    /// Decides whether the unit applies. Must not mutate battle state.
    fn can_apply(&self, context: &EffectContext, params: &P) -> bool {
        let _ = (context, params);
        true
    }

    /// Applies the unit.
    ///
    /// When the context is simulated, the unit writes holders exactly as it would for real but
    /// skips every externally observable side effect. Errors signal broken engine invariants, not
    /// that the unit did not apply.
    fn apply(&self, context: &mut EffectContext, params: &mut P) -> Result<()>;

    /// Message shown after the unit applied in a non-simulated dispatch.
    fn trigger_message(
        &self,
        context: &EffectContext,
        params: &P,
        display_name: &str,
    ) -> Option<String> {
        let _ = (context, params, display_name);
        None
    }

    /// Clears scratch state.
    fn reset(&self) {}
}
