use anyhow::Result;
use battler_data::{
    Id,
    MoveCategory,
    MoveData,
    StatTable,
    Status,
    Terrain,
    Type,
    Weather,
};
use battler_effects::{
    abilities::AbilityRegistry,
    battle::{
        Combatant,
        CombatantId,
        CoreBattle,
        HeldItem,
    },
    config::{
        BaseDamageRandomization,
        EngineOptions,
        SpeedSortTieResolution,
    },
};

use crate::ControlledRandomNumberGenerator;

/// A stat table with every stat set to `value`.
pub fn uniform_stats(value: u16) -> StatTable {
    StatTable {
        hp: value,
        atk: value,
        def: value,
        spa: value,
        spd: value,
        spe: value,
    }
}

/// Move data for tests. Adjust other fields before wrapping it in an `Rc`.
pub fn test_move(name: &str, category: MoveCategory, move_type: Type, base_power: u32) -> MoveData {
    let mut data = MoveData::default();
    data.name = name.to_owned();
    data.category = category;
    data.primary_type = move_type;
    data.base_power = base_power;
    data.with_id()
}

/// Battle builder object for integration tests.
///
/// Combatant methods other than [`TestBattleBuilder::add_combatant`] apply to the combatant added
/// last.
pub struct TestBattleBuilder {
    options: EngineOptions,
    combatants: Vec<Combatant>,
    abilities: Option<AbilityRegistry>,
    controlled_rng: bool,
    weather: Option<Weather>,
    terrain: Option<Terrain>,
}

impl TestBattleBuilder {
    /// Creates a new [`TestBattleBuilder`].
    pub fn new() -> Self {
        Self {
            options: EngineOptions::default(),
            combatants: Vec::new(),
            abilities: None,
            controlled_rng: false,
            weather: None,
            terrain: None,
        }
    }

    /// Builds a new [`CoreBattle`] from the battle builder.
    ///
    /// Uses the built-in abilities unless a registry was given.
    pub fn build(mut self) -> Result<CoreBattle> {
        if self.controlled_rng {
            self.options.rng_factory =
                |seed: Option<u64>| Box::new(ControlledRandomNumberGenerator::new(seed));
        }
        let abilities = match self.abilities {
            Some(abilities) => abilities,
            None => AbilityRegistry::builtin()?,
        };
        let mut battle = CoreBattle::new(self.options, self.combatants, abilities)?;
        battle.field.weather = self.weather;
        battle.field.terrain = self.terrain;
        Ok(battle)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.options.seed = Some(seed);
        self
    }

    pub fn with_controlled_rng(mut self, controlled_rng: bool) -> Self {
        self.controlled_rng = controlled_rng;
        self
    }

    pub fn with_base_damage_randomization(
        mut self,
        randomize_base_damage: BaseDamageRandomization,
    ) -> Self {
        self.options.randomize_base_damage = randomize_base_damage;
        self
    }

    pub fn with_speed_sort_tie_resolution(
        mut self,
        speed_sort_tie_resolution: SpeedSortTieResolution,
    ) -> Self {
        self.options.speed_sort_tie_resolution = speed_sort_tie_resolution;
        self
    }

    pub fn with_crit_chance_denominators(mut self, denominators: Vec<u64>) -> Self {
        self.options.crit_chance_denominators = denominators;
        self
    }

    pub fn with_abilities(mut self, abilities: AbilityRegistry) -> Self {
        self.abilities = Some(abilities);
        self
    }

    pub fn with_weather(mut self, weather: Option<Weather>) -> Self {
        self.weather = weather;
        self
    }

    pub fn with_terrain(mut self, terrain: Option<Terrain>) -> Self {
        self.terrain = terrain;
        self
    }

    /// Adds a combatant. Ids follow insertion order.
    pub fn add_combatant(
        mut self,
        side: usize,
        name: &str,
        types: &[Type],
        stats: StatTable,
    ) -> Self {
        let id = CombatantId(self.combatants.len());
        self.combatants
            .push(Combatant::new(id, name, side, types.to_vec(), stats));
        self
    }

    fn update_last<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&mut Combatant),
    {
        if let Some(combatant) = self.combatants.last_mut() {
            f(combatant);
        }
        self
    }

    pub fn with_ability(self, ability: &str) -> Self {
        self.update_last(|combatant| combatant.ability = Id::from(ability))
    }

    pub fn with_passive_ability(self, ability: &str) -> Self {
        self.update_last(|combatant| combatant.passive_ability = Some(Id::from(ability)))
    }

    pub fn with_level(self, level: u8) -> Self {
        self.update_last(|combatant| combatant.level = level)
    }

    pub fn with_hp(self, hp: u16) -> Self {
        self.update_last(|combatant| combatant.hp = hp)
    }

    pub fn with_status(self, status: Status) -> Self {
        self.update_last(|combatant| combatant.status = Some(status))
    }

    pub fn with_item(self, item: &str) -> Self {
        self.update_last(|combatant| combatant.items.push(HeldItem::new(item)))
    }

    pub fn with_last_move(self, move_name: &str) -> Self {
        self.update_last(|combatant| combatant.last_move = Some(Id::from(move_name)))
    }

    /// Leaves the combatant off the field.
    pub fn benched(self) -> Self {
        self.update_last(|combatant| combatant.active = false)
    }
}

impl Default for TestBattleBuilder {
    fn default() -> Self {
        Self::new()
    }
}
