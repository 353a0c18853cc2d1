use anyhow::Result;
use battler_prng::PseudoRandomNumberGenerator;
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    abilities::AbilityRegistry,
    battle::{
        BattleContext,
        Combatant,
        CombatantId,
        Field,
    },
    config::EngineOptions,
    error::{
        WrapOptionError,
        WrapResultError,
        general_error,
    },
    log::NotificationLog,
    tags::SourceLinkIndex,
};

/// Persisted battle state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleSnapshot {
    pub combatants: Vec<Combatant>,
    #[serde(default)]
    pub field: Field,
    #[serde(default)]
    pub turn: u64,
}

/// The state the effect engine resolves against.
///
/// A battle owns its combatants, the field, the ability registry, and the random stream. All
/// mutation flows through a [`BattleContext`].
pub struct CoreBattle {
    options: EngineOptions,
    combatants: Vec<Combatant>,
    pub field: Field,
    abilities: AbilityRegistry,
    prng: Box<dyn PseudoRandomNumberGenerator>,
    pub notifications: NotificationLog,
    tag_sources: SourceLinkIndex,
    turn: u64,
}

impl CoreBattle {
    /// Creates a new battle.
    ///
    /// Combatant ids must match their position in `combatants`.
    pub fn new(
        options: EngineOptions,
        combatants: Vec<Combatant>,
        abilities: AbilityRegistry,
    ) -> Result<Self> {
        Self::from_snapshot(
            options,
            abilities,
            BattleSnapshot {
                combatants,
                field: Field::default(),
                turn: 0,
            },
        )
    }

    /// Restores a battle from persisted state.
    pub fn from_snapshot(
        options: EngineOptions,
        abilities: AbilityRegistry,
        snapshot: BattleSnapshot,
    ) -> Result<Self> {
        options
            .validate()
            .wrap_error_with_message("invalid engine options")?;
        for (i, combatant) in snapshot.combatants.iter().enumerate() {
            if combatant.id != CombatantId(i) {
                return Err(general_error(format!(
                    "combatant {} is at position {i}",
                    combatant.id
                )));
            }
            abilities
                .get(&combatant.ability)
                .wrap_error_with_format(format_args!("invalid ability for {}", combatant.name))?;
            if let Some(passive) = &combatant.passive_ability {
                abilities.get(passive).wrap_error_with_format(format_args!(
                    "invalid passive ability for {}",
                    combatant.name
                ))?;
            }
        }
        let prng = (options.rng_factory)(options.seed);
        let tag_sources = SourceLinkIndex::rebuild(&snapshot.combatants);
        Ok(Self {
            options,
            combatants: snapshot.combatants,
            field: snapshot.field,
            abilities,
            prng,
            notifications: NotificationLog::new(),
            tag_sources,
            turn: snapshot.turn,
        })
    }

    /// Captures persisted state.
    pub fn snapshot(&self) -> BattleSnapshot {
        BattleSnapshot {
            combatants: self.combatants.clone(),
            field: self.field.clone(),
            turn: self.turn,
        }
    }

    /// A context for resolving effects for real.
    pub fn context(&mut self) -> BattleContext<'_> {
        BattleContext::new(self, false)
    }

    /// A context for dry runs.
    pub fn simulation(&mut self) -> BattleContext<'_> {
        BattleContext::new(self, true)
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn abilities(&self) -> &AbilityRegistry {
        &self.abilities
    }

    pub fn turn(&self) -> u64 {
        self.turn
    }

    pub(crate) fn next_turn(&mut self) {
        self.turn += 1;
    }

    pub fn combatant(&self, id: CombatantId) -> Result<&Combatant> {
        self.combatants
            .get(id.0)
            .wrap_not_found_error_with_format(format_args!("combatant {id}"))
    }

    pub fn combatant_mut(&mut self, id: CombatantId) -> Result<&mut Combatant> {
        self.combatants
            .get_mut(id.0)
            .wrap_not_found_error_with_format(format_args!("combatant {id}"))
    }

    pub fn combatants(&self) -> impl Iterator<Item = &Combatant> {
        self.combatants.iter()
    }

    /// Combatants currently on the field, in id order.
    pub fn active_combatants(&self) -> impl Iterator<Item = &Combatant> {
        self.combatants.iter().filter(|combatant| combatant.active)
    }

    pub fn prng_mut(&mut self) -> &mut dyn PseudoRandomNumberGenerator {
        self.prng.as_mut()
    }

    pub(crate) fn tag_sources(&self) -> &SourceLinkIndex {
        &self.tag_sources
    }

    pub(crate) fn tag_sources_mut(&mut self) -> &mut SourceLinkIndex {
        &mut self.tag_sources
    }

    /// Renders notifications added since the last read.
    pub fn new_logs(&mut self) -> impl Iterator<Item = String> {
        self.notifications
            .read_out()
            .map(|notification| notification.to_string())
            .collect::<Vec<_>>()
            .into_iter()
    }
}
