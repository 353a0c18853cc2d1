use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// Ability flags, which decide when an ability's effects are allowed to run.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum AbilityFlag {
    /// Effects keep running after the holder faints.
    #[string = "BypassFaint"]
    BypassFaint,
    /// Ignored by moves that ignore abilities.
    #[string = "Ignorable"]
    Ignorable,
    /// Cannot be suppressed, individually or field-wide.
    #[string = "Unsuppressable"]
    Unsuppressable,
    /// Cannot be copied onto another combatant.
    #[string = "Uncopiable"]
    Uncopiable,
    /// Cannot be replaced by another ability.
    #[string = "Unreplaceable"]
    Unreplaceable,
}
