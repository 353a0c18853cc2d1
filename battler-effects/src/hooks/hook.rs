use serde::{
    Deserialize,
    Serialize,
};

/// A point in battle resolution where effects run.
///
/// Each hook has exactly one parameter type; see [`HookParams`][`crate::hooks::HookParams`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hook {
    /// The defender is checked for immunity to the move's type.
    TypeImmunity,
    /// The defender is checked for immunity to the move itself.
    MoveImmunity,
    /// Every combatant on the defending side may block the move.
    FieldMoveImmunity,
    /// The defender scales damage it is about to receive.
    ReceivedDamageMultiplier,
    /// The attacker changes the move's type.
    MoveTypeChange,
    /// The attacker modifies the move's accuracy.
    ModifyAccuracy,
    /// The attacker modifies the move's power.
    ModifyPower,
    /// Any combatant on the field modifies the move's power.
    FieldModifyPower,
    /// The attacker adds critical hit stages.
    CritStage,
    /// The attacker forces a critical hit.
    ForceCrit,
    /// The defender prevents critical hits.
    BlockCrit,
    /// The attacker modifies the critical hit multiplier.
    CritMultiplier,
    /// The attacker modifies its same-type attack bonus.
    StabModify,
    /// A combatant modifies one of its own stats.
    StatMultiplier,
    /// Any combatant on the field modifies another combatant's stat.
    FieldStatMultiplier,
    /// The opponent decides whether a combatant's stat stages count.
    IgnoreOpponentStatStages,
    /// The defender reacts after taking damage.
    PostDefend,
    /// The attacker reacts after dealing damage.
    PostAttack,
    /// The target may refuse a stat stage change caused by another combatant.
    PreStatStageChange,
    /// The target may refuse a status.
    PreSetStatus,
    /// The target reacts after receiving a status.
    StatusApplied,
    /// The target and its allies may refuse a tag.
    TagImmunity,
    /// The target may refuse damage that does not come from a direct hit.
    BlockNonDirectDamage,
    /// The attacker may refuse recoil.
    BlockRecoil,
    /// The defender may refuse a one-hit knockout.
    BlockOneHitKo,
    /// Each active combatant acts at the end of a turn.
    TurnEnd,
    /// A combatant enters the field.
    Summon,
    /// A combatant faints.
    Faint,
    /// The weather changed.
    WeatherChange,
}
