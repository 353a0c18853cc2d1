use std::{
    fmt::{
        self,
        Display,
    },
    mem,
};

use itertools::Itertools;

use crate::battle::CombatantId;

/// The kind of a [`Notification`], which decides how a client presents it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    /// An ability activated; clients show a flyout with the ability name.
    Ability,
    /// Free-form text.
    Message,
    Damage,
    Heal,
    Status,
    Boost,
    TagStart,
    TagEnd,
    Weather,
    Terrain,
    Faint,
    Item,
}

impl NotificationKind {
    /// The leading label of the event line.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ability => "ability",
            Self::Message => "message",
            Self::Damage => "damage",
            Self::Heal => "heal",
            Self::Status => "status",
            Self::Boost => "boost",
            Self::TagStart => "tagstart",
            Self::TagEnd => "tagend",
            Self::Weather => "weather",
            Self::Terrain => "terrain",
            Self::Faint => "faint",
            Self::Item => "item",
        }
    }
}

/// A single player-facing notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub combatant: Option<CombatantId>,
    pub text: String,
}

impl Notification {
    pub fn new<T>(kind: NotificationKind, combatant: Option<CombatantId>, text: T) -> Self
    where
        T: Display,
    {
        Self {
            kind,
            combatant,
            text: text.to_string(),
        }
    }
}

impl Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = vec![self.kind.label().to_owned()];
        if let Some(combatant) = self.combatant {
            parts.push(format!("mon:{combatant}"));
        }
        if !self.text.is_empty() {
            parts.push(self.text.clone());
        }
        write!(f, "{}", parts.into_iter().join("|"))
    }
}

/// An append-only log of notifications produced by a battle.
#[derive(Debug, Default)]
pub struct NotificationLog {
    notifications: Vec<Notification>,
    last_read: usize,
}

impl NotificationLog {
    /// Creates a new notification log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Does the log contain new notifications since the last call to [`Self::read_out`]?
    pub fn has_new_messages(&self) -> bool {
        self.last_read < self.notifications.len()
    }

    pub fn push(&mut self, notification: Notification) {
        self.notifications.push(notification)
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    /// Returns an iterator over all notifications.
    pub fn logs(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter()
    }

    /// Reads out any notifications that have been added since the last call to
    /// [`Self::read_out`].
    pub fn read_out(&mut self) -> impl Iterator<Item = &Notification> {
        let i = mem::replace(&mut self.last_read, self.notifications.len());
        self.notifications[i..].iter()
    }
}
