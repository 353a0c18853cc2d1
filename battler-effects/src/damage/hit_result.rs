use serde::{
    Deserialize,
    Serialize,
};

/// How a single hit resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitResult {
    /// The type matchup or the weather nullified the move.
    NoEffect,
    /// An effect blocked the move.
    Immune,
    /// A status move that passed every immunity.
    Status,
    Effective,
    SuperEffective,
    NotVeryEffective,
    OneHitKo,
}

impl HitResult {
    pub fn from_type_multiplier(multiplier: f64) -> Self {
        if multiplier > 1.0 {
            Self::SuperEffective
        } else if multiplier < 1.0 {
            Self::NotVeryEffective
        } else {
            Self::Effective
        }
    }

    /// Did the move fail to reach its target?
    pub fn is_blocked(&self) -> bool {
        matches!(self, Self::NoEffect | Self::Immune)
    }
}

/// The result of [`calculate_and_apply_hit`][`crate::damage::calculate_and_apply_hit`].
#[derive(Debug, Clone, PartialEq)]
pub struct HitOutcome {
    pub result: HitResult,
    /// Damage dealt, after clamping to the target's HP.
    pub damage: u16,
    pub critical: bool,
    pub type_multiplier: f64,
    /// The target has no HP left.
    pub fainted: bool,
}

impl HitOutcome {
    pub(crate) fn blocked(result: HitResult, type_multiplier: f64) -> Self {
        Self {
            result,
            damage: 0,
            critical: false,
            type_multiplier,
            fainted: false,
        }
    }
}

/// Which strike of a move this is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitInfo {
    /// 1-based.
    pub hit: u8,
    pub total: u8,
}

impl HitInfo {
    pub fn single() -> Self {
        Self { hit: 1, total: 1 }
    }

    pub fn is_last(&self) -> bool {
        self.hit >= self.total
    }
}

impl Default for HitInfo {
    fn default() -> Self {
        Self::single()
    }
}
