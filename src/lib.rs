//! # raid-engine
//!
//! A deterministic, turn-based combat resolution engine: one adversary
//! (the boss) against a fixed party of allies, each carrying a distinct
//! special power.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: All randomness flows through an injected
//!    [`BattleRng`] capability. Given the same seed (or a scripted fake),
//!    an entire battle replays identically.
//!
//! 2. **Closed ability set**: Ally powers are a tagged enum with an
//!    exhaustive match for both the ordinary attack and the power
//!    activation, so the compiler guarantees every variant is handled.
//!
//! 3. **Engine only**: No I/O. Each round yields a [`RoundReport`] with
//!    state snapshots and narrated event strings for an external reporter.
//!
//! ## Modules
//!
//! - `core`: combatant stats model, RNG capability, error type
//! - `abilities`: ability tags and per-variant power state
//! - `battle`: the round state machine and the game loop
//! - `roster`: plain-data roster construction

pub mod abilities;
pub mod battle;
pub mod core;
pub mod roster;

// Re-export commonly used types
pub use crate::core::{
    Adversary, Ally, BattleRng, EngineError, EngineResult, ScriptedRng, SeededRng, SeededRngState,
    Stats,
};

pub use crate::abilities::{AbilityKind, Power};

pub use crate::battle::{AdversarySnapshot, AllySnapshot, Battle, Outcome, RoundReport};

pub use crate::roster::{AdversarySpec, AllySpec, Roster};
