use battler_data::{
    Terrain,
    Weather,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::battle::CombatantId;

/// Which combatants a field-wide hook reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldScope {
    /// Every active combatant.
    All,
    /// Active combatants on one side.
    Side(usize),
}

/// Field-level ability suppression.
///
/// A combatant whose ability suppresses field abilities registers itself here while it is on the
/// field. Separately, a move that ignores abilities raises a transient flag for the duration of
/// its hit.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuppressionState {
    suppressors: Vec<CombatantId>,
    #[serde(skip)]
    ignoring_abilities: bool,
}

impl SuppressionState {
    /// Registers a suppressor. Returns `false` if it was already registered.
    pub fn add_suppressor(&mut self, id: CombatantId) -> bool {
        if self.suppressors.contains(&id) {
            return false;
        }
        self.suppressors.push(id);
        true
    }

    /// Removes a suppressor. Returns `false` if it was not registered.
    pub fn remove_suppressor(&mut self, id: CombatantId) -> bool {
        let before = self.suppressors.len();
        self.suppressors.retain(|suppressor| *suppressor != id);
        before != self.suppressors.len()
    }

    pub fn suppressors(&self) -> &[CombatantId] {
        &self.suppressors
    }

    /// Is some combatant other than `id` suppressing field abilities?
    pub fn suppressed_by_other(&self, id: CombatantId) -> bool {
        self.suppressors.iter().any(|suppressor| *suppressor != id)
    }

    pub fn ignoring_abilities(&self) -> bool {
        self.ignoring_abilities
    }

    pub fn set_ignoring_abilities(&mut self, ignoring: bool) {
        self.ignoring_abilities = ignoring;
    }
}

/// Field-wide state.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    #[serde(default)]
    pub weather: Option<Weather>,
    #[serde(default)]
    pub terrain: Option<Terrain>,
    #[serde(default)]
    pub suppression: SuppressionState,
}
