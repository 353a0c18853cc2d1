use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// A non-volatile status, which persists across switches.
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
pub enum Status {
    #[string = "brn"]
    #[alias = "Burn"]
    Burn,
    #[string = "frz"]
    #[alias = "Freeze"]
    Freeze,
    #[string = "par"]
    #[alias = "Paralysis"]
    Paralysis,
    #[string = "psn"]
    #[alias = "Poison"]
    Poison,
    #[string = "tox"]
    #[alias = "Toxic"]
    BadPoison,
    #[string = "slp"]
    #[alias = "Sleep"]
    Sleep,
}

impl Status {
    /// Is this any kind of poison?
    pub fn is_poison(&self) -> bool {
        matches!(self, Self::Poison | Self::BadPoison)
    }
}
