use battler_data::Id;
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    battle::CombatantId,
    tags::{
        LapseCategory,
        TagType,
    },
};

/// How long a tag lasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagDuration {
    /// Turns of effect remaining.
    Turns(u8),
    /// Never counts down.
    Indefinite,
}

impl TagDuration {
    /// Counts down one turn. Returns whether the tag is still active.
    ///
    /// Never goes below zero; indefinite durations never change.
    pub fn decrement(&mut self) -> bool {
        match self {
            Self::Turns(turns) => {
                *turns = turns.saturating_sub(1);
                *turns > 0
            }
            Self::Indefinite => true,
        }
    }

    pub fn turns(&self) -> Option<u8> {
        match self {
            Self::Turns(turns) => Some(*turns),
            Self::Indefinite => None,
        }
    }
}

/// Data specific to a tag type.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagData {
    #[default]
    None,
    /// A move the tag refers to.
    Move(Id),
}

/// A temporary condition attached to exactly one combatant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattlerTag {
    pub tag_type: TagType,
    pub lapse_categories: Vec<LapseCategory>,
    pub remaining_turns: TagDuration,
    #[serde(default)]
    pub source_move: Option<Id>,
    #[serde(default)]
    pub source_id: Option<CombatantId>,
    #[serde(default)]
    pub data: TagData,
}

impl BattlerTag {
    pub fn new(
        tag_type: TagType,
        lapse_categories: Vec<LapseCategory>,
        remaining_turns: TagDuration,
    ) -> Self {
        Self {
            tag_type,
            lapse_categories,
            remaining_turns,
            source_move: None,
            source_id: None,
            data: TagData::None,
        }
    }

    pub fn lapses_on(&self, category: LapseCategory) -> bool {
        self.lapse_categories.contains(&category)
    }

    /// Counts down one turn. Returns whether the tag is still active.
    pub fn tick(&mut self) -> bool {
        self.remaining_turns.decrement()
    }
}
