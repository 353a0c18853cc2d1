use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// When a tag's lapse runs.
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
pub enum LapseCategory {
    /// Only removed when the owner faints.
    #[string = "FaintOnly"]
    FaintOnly,
    /// Before the owner uses a move.
    #[string = "OnOwnMove"]
    OnOwnMove,
    /// After the owner uses a move.
    #[string = "AfterOwnMove"]
    AfterOwnMove,
    /// When the effect of the owner's move executes.
    #[string = "OnMoveEffect"]
    OnMoveEffect,
    /// At the end of each turn.
    #[string = "OnTurnEnd"]
    OnTurnEnd,
    /// Only when lapsed explicitly.
    #[string = "Custom"]
    Custom,
}
