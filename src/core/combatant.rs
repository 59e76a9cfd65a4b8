//! Combatant state model.
//!
//! Every combatant, boss and hero alike, shares the same three-field core:
//! an immutable name, a health pool that can never be observed below zero,
//! and a base damage value that some powers raise permanently.
//!
//! The adversary adds its per-round defense selection on top; an ally adds
//! its fixed special power.

use serde::{Deserialize, Serialize};

use crate::abilities::{AbilityKind, Power};

/// Shared mutable state of any combatant.
///
/// ## Invariants
///
/// - `health` is never negative: [`Stats::apply_damage`] clamps at zero.
/// - Healing has no upper bound; over-heal past any starting value is
///   allowed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    name: String,
    health: i64,
    damage: i64,
}

impl Stats {
    /// Create a combatant's stat block.
    #[must_use]
    pub fn new(name: impl Into<String>, health: i64, damage: i64) -> Self {
        Self {
            name: name.into(),
            health: health.max(0),
            damage,
        }
    }

    /// Identifying name, fixed at creation.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current health. Never negative.
    #[must_use]
    pub fn health(&self) -> i64 {
        self.health
    }

    /// Base damage dealt by this combatant's ordinary attack.
    #[must_use]
    pub fn damage(&self) -> i64 {
        self.damage
    }

    /// Apply damage: `health = max(0, health - amount)`.
    ///
    /// A negative `amount` counts as zero damage, never as healing; a
    /// mitigation larger than the incoming hit nets out to no damage.
    pub fn apply_damage(&mut self, amount: i64) {
        self.health = (self.health - amount.max(0)).max(0);
    }

    /// Apply healing. No upper clamp.
    pub fn apply_heal(&mut self, amount: i64) {
        self.health += amount;
    }

    /// Whether this combatant can still act or be targeted as living.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Permanently raise base damage (used by the boost power).
    pub fn increase_damage(&mut self, amount: i64) {
        self.damage += amount;
    }
}

/// The single opposing combatant (the boss).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adversary {
    stats: Stats,
    chosen_defense: Option<AbilityKind>,
}

impl Adversary {
    /// Create the adversary; no defense is chosen before the first round.
    #[must_use]
    pub fn new(stats: Stats) -> Self {
        Self {
            stats,
            chosen_defense: None,
        }
    }

    /// The adversary's stat block.
    #[must_use]
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Mutable access for the turn controller.
    pub(crate) fn stats_mut(&mut self) -> &mut Stats {
        &mut self.stats
    }

    /// The ability tag selected as this round's defense, if any round has
    /// started.
    #[must_use]
    pub fn chosen_defense(&self) -> Option<AbilityKind> {
        self.chosen_defense
    }

    pub(crate) fn set_chosen_defense(&mut self, kind: AbilityKind) {
        self.chosen_defense = Some(kind);
    }
}

/// A member of the allied party (a hero).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ally {
    stats: Stats,
    power: Power,
}

impl Ally {
    /// Create an ally with its fixed special power.
    #[must_use]
    pub fn new(stats: Stats, power: Power) -> Self {
        Self { stats, power }
    }

    /// The ally's stat block.
    #[must_use]
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub(crate) fn stats_mut(&mut self) -> &mut Stats {
        &mut self.stats
    }

    /// The ally's special power and its variant state.
    #[must_use]
    pub fn power(&self) -> &Power {
        &self.power
    }

    pub(crate) fn power_mut(&mut self) -> &mut Power {
        &mut self.power
    }

    /// The fixed ability tag of this ally, used both for power dispatch and
    /// as the adversary's defense selector.
    #[must_use]
    pub fn kind(&self) -> AbilityKind {
        self.power.kind()
    }
}
