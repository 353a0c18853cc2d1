use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::Type;

/// Field-wide terrain, which only affects grounded combatants.
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
pub enum Terrain {
    #[string = "Electric"]
    Electric,
    #[string = "Grassy"]
    Grassy,
    #[string = "Misty"]
    Misty,
    #[string = "Psychic"]
    Psychic,
}

impl Terrain {
    /// The damage multiplier for an attack of the given type.
    ///
    /// Boosts require a grounded attacker; Misty Terrain's reduction requires a grounded target.
    pub fn attack_type_multiplier(
        &self,
        move_type: Type,
        attacker_grounded: bool,
        target_grounded: bool,
    ) -> f64 {
        match (self, move_type) {
            (Self::Electric, Type::Electric)
            | (Self::Grassy, Type::Grass)
            | (Self::Psychic, Type::Psychic)
                if attacker_grounded =>
            {
                1.3
            }
            (Self::Misty, Type::Dragon) if target_grounded => 0.5,
            _ => 1.0,
        }
    }
}
