use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::Stat;

/// A stat that can carry a stage modifier.
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
pub enum Boost {
    #[string = "atk"]
    #[alias = "Attack"]
    Atk,
    #[string = "def"]
    #[alias = "Defense"]
    Def,
    #[string = "spa"]
    #[alias = "spatk"]
    SpAtk,
    #[string = "spd"]
    #[alias = "spdef"]
    SpDef,
    #[string = "spe"]
    #[alias = "Speed"]
    Spe,
    #[string = "acc"]
    #[alias = "Accuracy"]
    Accuracy,
    #[string = "eva"]
    #[alias = "Evasion"]
    Evasion,
}

impl Boost {
    /// The boost that modifies the given stat, if any.
    pub fn from_stat(stat: Stat) -> Option<Self> {
        match stat {
            Stat::HP => None,
            Stat::Atk => Some(Self::Atk),
            Stat::Def => Some(Self::Def),
            Stat::SpAtk => Some(Self::SpAtk),
            Stat::SpDef => Some(Self::SpDef),
            Stat::Spe => Some(Self::Spe),
        }
    }
}

/// Stat stages for every boostable stat, each in `[-6, 6]`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoostTable {
    #[serde(default)]
    pub atk: i8,
    #[serde(default)]
    pub def: i8,
    #[serde(default)]
    pub spa: i8,
    #[serde(default)]
    pub spd: i8,
    #[serde(default)]
    pub spe: i8,
    #[serde(default)]
    pub acc: i8,
    #[serde(default)]
    pub eva: i8,
}

impl BoostTable {
    pub const MAX_STAGE: i8 = 6;

    pub fn get(&self, boost: Boost) -> i8 {
        match boost {
            Boost::Atk => self.atk,
            Boost::Def => self.def,
            Boost::SpAtk => self.spa,
            Boost::SpDef => self.spd,
            Boost::Spe => self.spe,
            Boost::Accuracy => self.acc,
            Boost::Evasion => self.eva,
        }
    }

    fn get_mut(&mut self, boost: Boost) -> &mut i8 {
        match boost {
            Boost::Atk => &mut self.atk,
            Boost::Def => &mut self.def,
            Boost::SpAtk => &mut self.spa,
            Boost::SpDef => &mut self.spd,
            Boost::Spe => &mut self.spe,
            Boost::Accuracy => &mut self.acc,
            Boost::Evasion => &mut self.eva,
        }
    }

    /// Adds stages to a boost, clamping to the legal range.
    ///
    /// Returns the change that actually took place.
    pub fn add(&mut self, boost: Boost, stages: i8) -> i8 {
        let value = self.get_mut(boost);
        let before = *value;
        *value = before
            .saturating_add(stages)
            .clamp(-Self::MAX_STAGE, Self::MAX_STAGE);
        *value - before
    }

    /// Resets every stage to zero.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
