use std::{
    fmt,
    fmt::Display,
    str::FromStr,
};

use anyhow::Error;
use num::Integer;
use serde::{
    Deserialize,
    Serialize,
    Serializer,
    de::{
        Unexpected,
        Visitor,
    },
};

/// An exact ratio, used for HP-fraction effects (`1/8` of max HP) and probabilities.
///
/// Serializes as a fraction string (`"1/8"`). Deserializes from a fraction string, a percentage
/// string (`"30%"`), or an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fraction {
    num: u32,
    den: u32,
}

impl Fraction {
    /// Creates a new fraction in lowest terms.
    ///
    /// A zero denominator is treated as one.
    pub fn new(num: u32, den: u32) -> Self {
        let den = den.max(1);
        let gcd = num.gcd(&den).max(1);
        Self {
            num: num / gcd,
            den: den / gcd,
        }
    }

    /// Creates a percentage.
    pub fn percentage(percent: u32) -> Self {
        Self::new(percent, 100)
    }

    pub fn numerator(&self) -> u32 {
        self.num
    }

    pub fn denominator(&self) -> u32 {
        self.den
    }

    /// Applies the fraction to a value, truncating.
    pub fn of(&self, value: u16) -> u16 {
        (value as u64 * self.num as u64 / self.den as u64).min(u16::MAX as u64) as u16
    }

    /// Applies the fraction to a value, truncating, but never returning less than 1.
    ///
    /// HP-fraction damage and healing always move at least one point.
    pub fn of_at_least_one(&self, value: u16) -> u16 {
        self.of(value).max(1)
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

impl FromStr for Fraction {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((n, d)) = s.split_once('/') {
            let n = n
                .trim()
                .parse()
                .map_err(|_| anyhow::anyhow!("invalid numerator: {n}"))?;
            let d = d
                .trim()
                .parse()
                .map_err(|_| anyhow::anyhow!("invalid denominator: {d}"))?;
            Ok(Self::new(n, d))
        } else {
            let percent = s.strip_suffix('%').unwrap_or(s).trim();
            Ok(Self::percentage(percent.parse().map_err(|_| {
                anyhow::anyhow!("invalid percentage: {percent}")
            })?))
        }
    }
}

impl Serialize for Fraction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

struct FractionVisitor;

impl<'de> Visitor<'de> for FractionVisitor {
    type Value = Fraction;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a fraction string, percentage string, or integer")
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        let v = u32::try_from(v).map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))?;
        Ok(Fraction::new(v, 1))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        let v = u32::try_from(v).map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))?;
        Ok(Fraction::new(v, 1))
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Fraction::from_str(v).map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
    }
}

impl<'de> Deserialize<'de> for Fraction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(FractionVisitor)
    }
}
