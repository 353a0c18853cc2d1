use std::rc::Rc;

use anyhow::Result;
use battler_data::{
    Id,
    Identifiable,
};
use hashbrown::HashMap;

use crate::{
    abilities::{
        Ability,
        AbilityData,
    },
    error::{
        WrapOptionError,
        WrapResultError,
        general_error,
    },
};

/// The ability every combatant has when nothing else is set.
pub const NO_ABILITY: &str = "No Ability";

/// Registered abilities, keyed by id.
///
/// Definitions are shared by reference: every combatant holding an ability sees the same
/// [`Ability`].
#[derive(Debug, Clone)]
pub struct AbilityRegistry {
    abilities: HashMap<Id, Rc<Ability>>,
}

impl AbilityRegistry {
    /// Creates a registry containing only the empty ability.
    pub fn new() -> Self {
        let mut abilities = HashMap::new();
        let empty = Rc::new(Ability::new(AbilityData {
            name: NO_ABILITY.to_owned(),
            flags: Default::default(),
            effects: Vec::new(),
            conditions: Vec::new(),
        }));
        abilities.insert(empty.id().clone(), empty);
        Self { abilities }
    }

    /// Creates a registry from a JSON list of ability definitions.
    pub fn from_json(json: &str) -> Result<Self> {
        let data: Vec<AbilityData> =
            serde_json::from_str(json).wrap_error_with_message("invalid ability data")?;
        let mut registry = Self::new();
        for ability in data {
            registry.register(ability)?;
        }
        Ok(registry)
    }

    /// Creates a registry with the built-in catalogue.
    pub fn builtin() -> Result<Self> {
        Self::from_json(include_str!("../../data/abilities.json"))
    }

    /// Registers a new ability.
    pub fn register(&mut self, data: AbilityData) -> Result<Rc<Ability>> {
        let ability = Rc::new(Ability::new(data));
        let id = ability.id().clone();
        if id.is_empty() {
            return Err(general_error("ability name cannot be empty"));
        }
        if self.abilities.contains_key(&id) {
            return Err(general_error(format!("ability {id} is already registered")));
        }
        self.abilities.insert(id, ability.clone());
        Ok(ability)
    }

    pub fn get(&self, id: &Id) -> Result<Rc<Ability>> {
        self.abilities
            .get(id)
            .cloned()
            .wrap_not_found_error_with_format(format_args!("ability {id}"))
    }

    pub fn len(&self) -> usize {
        self.abilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.abilities.is_empty()
    }
}

impl Default for AbilityRegistry {
    fn default() -> Self {
        Self::new()
    }
}
