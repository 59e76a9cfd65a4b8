//! Core engine types: combatant stats, RNG capability, errors.
//!
//! This module contains the building blocks that carry no round logic of
//! their own. The turn controller in `battle` drives them.

pub mod combatant;
pub mod error;
pub mod rng;

pub use combatant::{Adversary, Ally, Stats};
pub use error::{EngineError, EngineResult};
pub use rng::{BattleRng, ScriptedRng, SeededRng, SeededRngState};
