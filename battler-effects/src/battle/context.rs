use anyhow::Result;
use battler_prng::rand_util;

use crate::{
    battle::{
        Combatant,
        CombatantId,
        CoreBattle,
    },
    log::{
        Notification,
        NotificationKind,
    },
};

/// A mutable view of a battle for the duration of one engine operation.
///
/// A simulated context resolves everything for its holder outputs but queues no notifications,
/// leaves combatants untouched, and never advances the random stream.
pub struct BattleContext<'b> {
    battle: &'b mut CoreBattle,
    simulated: bool,
}

impl<'b> BattleContext<'b> {
    pub fn new(battle: &'b mut CoreBattle, simulated: bool) -> Self {
        Self { battle, simulated }
    }

    /// Borrows a shorter-lived context over the same battle.
    pub fn reborrow(&mut self) -> BattleContext<'_> {
        BattleContext {
            battle: &mut *self.battle,
            simulated: self.simulated,
        }
    }

    /// Runs `f` with a simulated context over the same battle.
    pub fn simulate<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut BattleContext<'_>) -> R,
    {
        let mut context = BattleContext {
            battle: &mut *self.battle,
            simulated: true,
        };
        f(&mut context)
    }

    pub fn simulated(&self) -> bool {
        self.simulated
    }

    pub fn battle(&self) -> &CoreBattle {
        &*self.battle
    }

    pub fn battle_mut(&mut self) -> &mut CoreBattle {
        &mut *self.battle
    }

    pub fn combatant(&self, id: CombatantId) -> Result<&Combatant> {
        self.battle.combatant(id)
    }

    pub fn combatant_mut(&mut self, id: CombatantId) -> Result<&mut Combatant> {
        self.battle.combatant_mut(id)
    }

    /// Queues a notification. No-op when simulated.
    pub fn notify(&mut self, notification: Notification) {
        if self.simulated {
            return;
        }
        self.battle.notifications.push(notification);
    }

    pub fn notify_message<S>(&mut self, combatant: Option<CombatantId>, text: S)
    where
        S: Into<String>,
    {
        self.notify(Notification {
            kind: NotificationKind::Message,
            combatant,
            text: text.into(),
        });
    }

    /// Queues the ability flyout for a combatant. No-op when simulated.
    pub fn notify_ability(&mut self, combatant: CombatantId, ability_name: &str) {
        self.notify(Notification::new(
            NotificationKind::Ability,
            Some(combatant),
            ability_name,
        ));
    }

    /// Rolls `numerator / denominator`.
    ///
    /// When simulated, only a certain event succeeds.
    pub fn chance(&mut self, numerator: u64, denominator: u64) -> bool {
        if self.simulated {
            return numerator >= denominator;
        }
        rand_util::chance(self.battle.prng_mut(), numerator, denominator)
    }

    /// Rolls an integer in `[min, max]`.
    ///
    /// When simulated, the maximum.
    pub fn range_inclusive(&mut self, min: u64, max: u64) -> u64 {
        if self.simulated {
            return max.max(min);
        }
        rand_util::range_inclusive(self.battle.prng_mut(), min, max)
    }

    /// Picks an index into a collection of `len` elements.
    ///
    /// When simulated, the first.
    pub fn sample_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        if self.simulated {
            return Some(0);
        }
        Some(rand_util::range(self.battle.prng_mut(), 0, len as u64) as usize)
    }

    /// Display name of a combatant, for messages.
    pub fn name_of(&self, id: CombatantId) -> Result<String> {
        Ok(self.combatant(id)?.name.clone())
    }
}
