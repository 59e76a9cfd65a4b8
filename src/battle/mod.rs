//! The turn controller and game loop.
//!
//! One round walks four phases in order: defense selection, adversary
//! attack, ally counter phase, terminal check. `round` implements the
//! phases; `game` owns the roster, the round counter, and the loop.

mod game;
mod round;

pub use game::{Battle, Outcome};
pub use round::{AdversarySnapshot, AllySnapshot, RoundReport};
