//! Effect resolution for turn-based creature battles.
//!
//! Abilities are data-driven collections of effect units. Every unit participates in one or more
//! hooks, which the engine dispatches at fixed points of a turn with a params object carrying
//! mutable holders. Temporary conditions on combatants are battler tags with their own lifecycle.
//! The damage pipeline threads one hit through immunities, power, critical hits, stats, and the
//! damage formula.

extern crate alloc;

pub mod abilities;
pub mod battle;
pub mod common;
pub mod config;
pub mod damage;
pub mod effect;
pub mod error;
pub mod hooks;
pub mod log;
pub mod tags;
