use std::fmt;

use hashbrown::HashMap;
use serde::{
    Deserialize,
    Serialize,
    de::Visitor,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The type of a combatant or move, which determines weaknesses and resistances.
#[derive(
    Debug,
    Default,
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
pub enum Type {
    #[string = "Normal"]
    #[default]
    Normal,
    #[string = "Fighting"]
    Fighting,
    #[string = "Flying"]
    Flying,
    #[string = "Poison"]
    Poison,
    #[string = "Ground"]
    Ground,
    #[string = "Rock"]
    Rock,
    #[string = "Bug"]
    Bug,
    #[string = "Ghost"]
    Ghost,
    #[string = "Steel"]
    Steel,
    #[string = "Fire"]
    Fire,
    #[string = "Water"]
    Water,
    #[string = "Grass"]
    Grass,
    #[string = "Electric"]
    Electric,
    #[string = "Psychic"]
    Psychic,
    #[string = "Ice"]
    Ice,
    #[string = "Dragon"]
    Dragon,
    #[string = "Dark"]
    Dark,
    #[string = "Fairy"]
    Fairy,
}

/// Type effectiveness of one type against another.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TypeEffectiveness {
    /// No effect.
    None,
    /// Not very effective.
    Weak,
    /// Normal effectiveness.
    #[default]
    Normal,
    /// Super effective.
    Strong,
}

impl TypeEffectiveness {
    /// The damage multiplier for this effectiveness.
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::Weak => 0.5,
            Self::Normal => 1.0,
            Self::Strong => 2.0,
        }
    }
}

impl From<f64> for TypeEffectiveness {
    fn from(value: f64) -> Self {
        if value <= 0.0 {
            Self::None
        } else if value < 1.0 {
            Self::Weak
        } else if value <= 1.0 {
            Self::Normal
        } else {
            Self::Strong
        }
    }
}

impl Serialize for TypeEffectiveness {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Weak => serializer.serialize_f64(0.5),
            _ => serializer.serialize_u32(self.multiplier() as u32),
        }
    }
}

struct TypeEffectivenessVisitor;

impl<'de> Visitor<'de> for TypeEffectivenessVisitor {
    type Value = TypeEffectiveness;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("one of the following values: 0, 0.5, 1, 2")
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Self::Value::from(v as f64))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Self::Value::from(v as f64))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Self::Value::from(v))
    }
}

impl<'de> Deserialize<'de> for TypeEffectiveness {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(TypeEffectivenessVisitor)
    }
}

/// A type table, keyed by the attacking type.
///
/// Missing entries are normal effectiveness.
pub type TypeTable<T> = HashMap<Type, HashMap<T, TypeEffectiveness>>;

/// A type chart, containing type effectiveness of attacking types against defending types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeChart {
    pub types: TypeTable<Type>,
}

impl TypeChart {
    /// Creates an empty chart, where every matchup is neutral.
    pub fn new() -> Self {
        Self {
            types: TypeTable::new(),
        }
    }

    pub fn from_filled(types: TypeTable<Type>) -> Self {
        Self { types }
    }

    /// The effectiveness of a single attacking type against a single defending type.
    pub fn effectiveness(&self, attacking: Type, defending: Type) -> TypeEffectiveness {
        self.types
            .get(&attacking)
            .and_then(|row| row.get(&defending))
            .copied()
            .unwrap_or_default()
    }

    /// The combined multiplier of an attacking type against all defending types.
    ///
    /// A defender with no types is treated as Normal.
    pub fn multiplier(&self, attacking: Type, defending: &[Type]) -> f64 {
        if defending.is_empty() {
            return self.effectiveness(attacking, Type::Normal).multiplier();
        }
        defending
            .iter()
            .map(|defending| self.effectiveness(attacking, *defending).multiplier())
            .product()
    }

    /// The standard type chart.
    pub fn standard() -> Self {
        use Type::*;
        // (attacking, super effective against, not very effective against, no effect against)
        let rows: [(Type, &[Type], &[Type], &[Type]); 18] = [
            (Normal, &[], &[Rock, Steel], &[Ghost]),
            (
                Fighting,
                &[Normal, Rock, Steel, Ice, Dark],
                &[Flying, Poison, Bug, Psychic, Fairy],
                &[Ghost],
            ),
            (Flying, &[Fighting, Bug, Grass], &[Rock, Steel, Electric], &[]),
            (Poison, &[Grass, Fairy], &[Poison, Ground, Rock, Ghost], &[Steel]),
            (
                Ground,
                &[Poison, Rock, Steel, Fire, Electric],
                &[Bug, Grass],
                &[Flying],
            ),
            (Rock, &[Flying, Bug, Fire, Ice], &[Fighting, Ground, Steel], &[]),
            (
                Bug,
                &[Grass, Psychic, Dark],
                &[Fighting, Flying, Poison, Ghost, Steel, Fire, Fairy],
                &[],
            ),
            (Ghost, &[Ghost, Psychic], &[Dark], &[Normal]),
            (Steel, &[Rock, Ice, Fairy], &[Steel, Fire, Water, Electric], &[]),
            (Fire, &[Bug, Steel, Grass, Ice], &[Rock, Fire, Water, Dragon], &[]),
            (Water, &[Ground, Rock, Fire], &[Water, Grass, Dragon], &[]),
            (
                Grass,
                &[Ground, Rock, Water],
                &[Flying, Poison, Bug, Steel, Fire, Grass, Dragon],
                &[],
            ),
            (Electric, &[Flying, Water], &[Grass, Electric, Dragon], &[Ground]),
            (Psychic, &[Fighting, Poison], &[Steel, Psychic], &[Dark]),
            (Ice, &[Flying, Ground, Grass, Dragon], &[Steel, Fire, Water, Ice], &[]),
            (Dragon, &[Dragon], &[Steel], &[Fairy]),
            (Dark, &[Ghost, Psychic], &[Fighting, Dark, Fairy], &[]),
            (Fairy, &[Fighting, Dragon, Dark], &[Poison, Steel, Fire], &[]),
        ];
        let mut types = TypeTable::new();
        for (attacking, strong, weak, none) in rows {
            let row = types.entry(attacking).or_insert_with(HashMap::new);
            row.extend(strong.iter().map(|t| (*t, TypeEffectiveness::Strong)));
            row.extend(weak.iter().map(|t| (*t, TypeEffectiveness::Weak)));
            row.extend(none.iter().map(|t| (*t, TypeEffectiveness::None)));
        }
        Self { types }
    }
}

impl Default for TypeChart {
    fn default() -> Self {
        Self::standard()
    }
}
