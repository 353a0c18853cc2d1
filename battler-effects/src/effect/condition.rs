use anyhow::Result;
use battler_data::{
    Fraction,
    Status,
    Terrain,
    Weather,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::battle::{
    CombatantId,
    CoreBattle,
};

/// A predicate over the battle, evaluated from the point of view of an effect's owner.
///
/// Used both as an ability-level condition and as a per-effect extra condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EffectCondition {
    /// The weather is one of the given kinds.
    Weather { weather: Vec<Weather> },
    /// The terrain is the given kind.
    Terrain { terrain: Terrain },
    /// The owner's HP is at or below the given fraction of its maximum.
    HpAtMost { fraction: Fraction },
    /// The owner is at full HP.
    FullHp,
    /// The owner has the given status, or any status if none is given.
    HasStatus {
        #[serde(default)]
        status: Option<Status>,
    },
    Not { condition: Box<EffectCondition> },
    All { conditions: Vec<EffectCondition> },
    Any { conditions: Vec<EffectCondition> },
}

impl EffectCondition {
    pub fn evaluate(&self, battle: &CoreBattle, owner: CombatantId) -> Result<bool> {
        match self {
            Self::Weather { weather } => Ok(battle
                .field
                .weather
                .is_some_and(|current| weather.contains(&current))),
            Self::Terrain { terrain } => Ok(battle.field.terrain == Some(*terrain)),
            Self::HpAtMost { fraction } => {
                let combatant = battle.combatant(owner)?;
                // hp / max <= num / den
                Ok(combatant.hp as u64 * fraction.denominator() as u64
                    <= combatant.max_hp() as u64 * fraction.numerator() as u64)
            }
            Self::FullHp => Ok(battle.combatant(owner)?.is_full_hp()),
            Self::HasStatus { status } => {
                let current = battle.combatant(owner)?.status;
                Ok(match status {
                    Some(status) => current == Some(*status),
                    None => current.is_some(),
                })
            }
            Self::Not { condition } => Ok(!condition.evaluate(battle, owner)?),
            Self::All { conditions } => {
                for condition in conditions {
                    if !condition.evaluate(battle, owner)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Self::Any { conditions } => {
                for condition in conditions {
                    if condition.evaluate(battle, owner)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
        }
    }
}
