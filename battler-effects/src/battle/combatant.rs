use std::fmt::{
    self,
    Display,
};

use battler_data::{
    Boost,
    BoostTable,
    Id,
    Stat,
    StatTable,
    Status,
    Type,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    damage::stat_stage_multiplier,
    tags::{
        BattlerTag,
        TagType,
    },
};

/// Identifies a combatant within one battle.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct CombatantId(pub usize);

impl Display for CombatantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn default_true() -> bool {
    true
}

/// An item held by a combatant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldItem {
    pub id: Id,
    /// Can the item be stolen or swapped?
    #[serde(default = "default_true")]
    pub transferable: bool,
}

impl HeldItem {
    pub fn new<I>(id: I) -> Self
    where
        I: Into<Id>,
    {
        Self {
            id: id.into(),
            transferable: true,
        }
    }
}

fn default_level() -> u8 {
    50
}

/// A single combatant in a battle.
///
/// Everything here is persisted state and round-trips through serde, tags included.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Combatant {
    pub id: CombatantId,
    pub name: String,
    #[serde(default = "default_level")]
    pub level: u8,
    /// The side of the field the combatant fights for.
    #[serde(default)]
    pub side: usize,
    /// Zero, one, or two types.
    #[serde(default)]
    pub types: Vec<Type>,
    /// Stats, where `hp` is maximum HP.
    pub stats: StatTable,
    #[serde(default)]
    pub boosts: BoostTable,
    pub hp: u16,
    #[serde(default)]
    pub status: Option<Status>,
    pub ability: Id,
    #[serde(default)]
    pub passive_ability: Option<Id>,
    /// Temporarily replaces `ability` until the combatant leaves the field.
    #[serde(default)]
    pub ability_override: Option<Id>,
    #[serde(default)]
    pub ability_suppressed: bool,
    #[serde(default)]
    pub items: Vec<HeldItem>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub last_move: Option<Id>,

    #[serde(default)]
    pub(crate) tags: Vec<BattlerTag>,
}

impl Combatant {
    /// Creates a new combatant at full HP with no ability.
    pub fn new<S>(id: CombatantId, name: S, side: usize, types: Vec<Type>, stats: StatTable) -> Self
    where
        S: Into<String>,
    {
        let hp = stats.hp;
        Self {
            id,
            name: name.into(),
            level: default_level(),
            side,
            types,
            stats,
            boosts: BoostTable::default(),
            hp,
            status: None,
            ability: Id::from("noability"),
            passive_ability: None,
            ability_override: None,
            ability_suppressed: false,
            items: Vec::new(),
            active: true,
            last_move: None,
            tags: Vec::new(),
        }
    }

    /// The ability currently in effect, honoring any override.
    pub fn effective_ability(&self) -> &Id {
        self.ability_override.as_ref().unwrap_or(&self.ability)
    }

    pub fn max_hp(&self) -> u16 {
        self.stats.hp
    }

    pub fn is_fainted(&self) -> bool {
        self.hp == 0
    }

    pub fn is_full_hp(&self) -> bool {
        self.hp >= self.max_hp()
    }

    pub fn has_type(&self, typ: Type) -> bool {
        self.types.contains(&typ)
    }

    /// Is the combatant touching the ground?
    pub fn is_grounded(&self) -> bool {
        !self.has_type(Type::Flying) && !self.has_tag(TagType::MagnetRisen)
    }

    pub fn stat(&self, stat: Stat) -> u16 {
        self.stats.get(stat)
    }

    pub fn boost(&self, boost: Boost) -> i8 {
        self.boosts.get(boost)
    }

    /// Speed used for ordering, after stages and paralysis.
    pub fn speed(&self) -> u32 {
        let speed = self.stats.spe as f64 * stat_stage_multiplier(self.boosts.spe);
        let speed = speed.floor() as u32;
        if self.status == Some(Status::Paralysis) {
            speed / 2
        } else {
            speed
        }
    }

    pub fn is_ally(&self, other: &Combatant) -> bool {
        self.side == other.side && self.id != other.id
    }

    pub fn is_opponent(&self, other: &Combatant) -> bool {
        self.side != other.side
    }

    /// All tags, in the order they were added.
    pub fn tags(&self) -> &[BattlerTag] {
        &self.tags
    }

    pub fn tag(&self, tag_type: TagType) -> Option<&BattlerTag> {
        self.tags.iter().find(|tag| tag.tag_type == tag_type)
    }

    pub fn has_tag(&self, tag_type: TagType) -> bool {
        self.tag(tag_type).is_some()
    }

    pub fn first_item(&self) -> Option<&HeldItem> {
        self.items.first()
    }
}
