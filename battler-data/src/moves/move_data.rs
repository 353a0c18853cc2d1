use hashbrown::HashSet;
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    Accuracy,
    Fraction,
    Id,
    Identifiable,
    MoveCategory,
    MoveFlag,
    Type,
};

/// Data about a move, as far as effect resolution is concerned.
///
/// Targeting and PP belong to the scheduler that picks and executes moves. The engine only needs
/// what changes whether and how a hit resolves.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MoveData {
    /// Name of the move.
    pub name: String,
    /// Move category.
    pub category: MoveCategory,
    /// Move type.
    pub primary_type: Type,
    /// Base power.
    #[serde(default)]
    pub base_power: u32,
    /// Base accuracy.
    #[serde(default)]
    pub accuracy: Accuracy,
    /// Move priority.
    #[serde(default)]
    pub priority: i8,
    /// Move flags.
    #[serde(default)]
    pub flags: HashSet<MoveFlag>,
    /// Critical hit stage added by the move itself.
    #[serde(default)]
    pub crit_stage: u8,
    /// The move always lands a critical hit.
    #[serde(default)]
    pub will_crit: bool,
    /// Fixed damage dealt, bypassing the damage formula.
    pub fixed_damage: Option<u16>,
    /// The move knocks out the target in one hit.
    #[serde(default)]
    pub ohko: bool,
    /// Fraction of damage dealt taken back as recoil.
    pub recoil: Option<Fraction>,
    /// Number of strikes for a multi-hit move.
    pub multihit: Option<u8>,
    /// The move ignores type matchups.
    #[serde(default)]
    pub typeless: bool,
    /// The move ignores ignorable abilities of its target.
    #[serde(default)]
    pub ignore_ability: bool,

    #[serde(skip)]
    id: Id,
}

impl MoveData {
    /// Finalizes data after construction or deserialization.
    pub fn with_id(mut self) -> Self {
        self.id = Id::from(self.name.as_str());
        self
    }

    pub fn has_flag(&self, flag: MoveFlag) -> bool {
        self.flags.contains(&flag)
    }

    pub fn is_damaging(&self) -> bool {
        self.category != MoveCategory::Status
    }
}

impl Identifiable for MoveData {
    fn id(&self) -> &Id {
        &self.id
    }
}
