use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::tags::{
    TagBehavior,
    behaviors,
};

/// The type of a battler tag.
///
/// A combatant holds at most one tag of each type.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum TagType {
    #[string = "Confused"]
    Confused,
    #[string = "Flinched"]
    Flinched,
    #[string = "Seeded"]
    Seeded,
    #[string = "Bound"]
    Bound,
    #[string = "Trapped"]
    Trapped,
    #[string = "Nightmare"]
    Nightmare,
    #[string = "PerishSong"]
    PerishSong,
    #[string = "Protected"]
    Protected,
    #[string = "MagnetRisen"]
    MagnetRisen,
    #[string = "FocusEnergy"]
    FocusEnergy,
    #[string = "Disabled"]
    Disabled,
    #[string = "Drowsy"]
    Drowsy,
    #[string = "Enduring"]
    Enduring,
    #[string = "Ingrain"]
    Ingrain,
    #[string = "SemiInvulnerable"]
    SemiInvulnerable,
}

impl TagType {
    /// The behavior shared by every tag of this type.
    pub fn behavior(&self) -> &'static dyn TagBehavior {
        match self {
            Self::Confused => &behaviors::Confusion,
            Self::Flinched => &behaviors::Flinch,
            Self::Seeded => &behaviors::LeechSeed,
            Self::Bound => &behaviors::Bind,
            Self::Trapped => &behaviors::Trap,
            Self::Nightmare => &behaviors::Nightmare,
            Self::PerishSong => &behaviors::PerishSong,
            Self::Protected => &behaviors::Protection,
            Self::MagnetRisen => &behaviors::MagnetRise,
            Self::FocusEnergy => &behaviors::FocusEnergy,
            Self::Disabled => &behaviors::Disable,
            Self::Drowsy => &behaviors::Drowsiness,
            Self::Enduring => &behaviors::Endurance,
            Self::Ingrain => &behaviors::Ingrain,
            Self::SemiInvulnerable => &behaviors::SemiInvulnerability,
        }
    }

    /// Name used in notifications.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Confused => "Confused",
            Self::Flinched => "Flinched",
            Self::Seeded => "Seeded",
            Self::Bound => "Bound",
            Self::Trapped => "Trapped",
            Self::Nightmare => "Nightmare",
            Self::PerishSong => "Perish Song",
            Self::Protected => "Protected",
            Self::MagnetRisen => "Magnet Rise",
            Self::FocusEnergy => "Focus Energy",
            Self::Disabled => "Disabled",
            Self::Drowsy => "Drowsy",
            Self::Enduring => "Enduring",
            Self::Ingrain => "Ingrain",
            Self::SemiInvulnerable => "Semi-Invulnerable",
        }
    }
}
