//! Ability tags and per-variant power state.
//!
//! Each ally carries exactly one [`Power`], fixed at creation. The variant
//! carries only the state that power needs; dispatch is an exhaustive
//! match, so adding a variant forces every call site to handle it.

mod kind;
mod power;

use smallvec::SmallVec;

pub use kind::AbilityKind;
pub use power::Power;

pub(crate) use power::{activate, ordinary_attack};

/// Narrated event strings accumulated during one round, for display only.
pub(crate) type EventLog = SmallVec<[String; 8]>;
