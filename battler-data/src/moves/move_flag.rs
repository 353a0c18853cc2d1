use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// Move flags, which categorize moves for effects that react to them.
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
pub enum MoveFlag {
    /// A bite move.
    #[string = "Bite"]
    Bite,
    /// A bullet or ball move.
    #[string = "Bullet"]
    Bullet,
    /// Makes contact.
    #[string = "Contact"]
    Contact,
    /// A healing move.
    #[string = "Heal"]
    Heal,
    /// A powder or spore move.
    #[string = "Powder"]
    Powder,
    /// Blocked by protection.
    #[string = "Protect"]
    Protect,
    /// A pulse move.
    #[string = "Pulse"]
    Pulse,
    /// A punching move.
    #[string = "Punch"]
    Punch,
    /// A slicing move.
    #[string = "Slicing"]
    Slicing,
    /// A sound move.
    #[string = "Sound"]
    Sound,
    /// A wind move.
    #[string = "Wind"]
    Wind,
}
