use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::Type;

/// Field-wide weather.
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
pub enum Weather {
    #[string = "Sun"]
    Sun,
    #[string = "Rain"]
    Rain,
    #[string = "Sandstorm"]
    Sandstorm,
    #[string = "Snow"]
    Snow,
    #[string = "HarshSun"]
    HarshSun,
    #[string = "HeavyRain"]
    HeavyRain,
    #[string = "StrongWinds"]
    StrongWinds,
}

impl Weather {
    /// The damage multiplier this weather applies to attacks of the given type.
    pub fn attack_type_multiplier(&self, move_type: Type) -> f64 {
        match (self, move_type) {
            (Self::Sun | Self::HarshSun, Type::Fire) => 1.5,
            (Self::Sun, Type::Water) => 0.5,
            (Self::HarshSun, Type::Water) => 0.0,
            (Self::Rain | Self::HeavyRain, Type::Water) => 1.5,
            (Self::Rain, Type::Fire) => 0.5,
            (Self::HeavyRain, Type::Fire) => 0.0,
            _ => 1.0,
        }
    }
}
