//! Roster construction from plain data.
//!
//! Starting stats arrive as specs; the engine performs no validation
//! beyond the empty-roster check at defense selection time. Combatants
//! persist for the whole battle — a dead ally stays in the roster at zero
//! health, it is never removed.

use serde::{Deserialize, Serialize};

use crate::abilities::Power;
use crate::core::combatant::{Adversary, Ally, Stats};

/// Starting attributes of the adversary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdversarySpec {
    pub name: String,
    pub health: i64,
    pub damage: i64,
}

impl AdversarySpec {
    #[must_use]
    pub fn new(name: impl Into<String>, health: i64, damage: i64) -> Self {
        Self {
            name: name.into(),
            health,
            damage,
        }
    }
}

/// Starting attributes of one ally, including its fixed power.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllySpec {
    pub name: String,
    pub health: i64,
    pub damage: i64,
    pub power: Power,
}

impl AllySpec {
    #[must_use]
    pub fn new(name: impl Into<String>, health: i64, damage: i64, power: Power) -> Self {
        Self {
            name: name.into(),
            health,
            damage,
            power,
        }
    }
}

/// The full cast of a battle: one adversary, an ordered party of allies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    adversary: Adversary,
    allies: Vec<Ally>,
}

impl Roster {
    /// Build a roster from specs. Ally order is preserved; it is the
    /// counter-phase acting order.
    #[must_use]
    pub fn new(adversary: AdversarySpec, allies: Vec<AllySpec>) -> Self {
        Self {
            adversary: Adversary::new(Stats::new(adversary.name, adversary.health, adversary.damage)),
            allies: allies
                .into_iter()
                .map(|spec| Ally::new(Stats::new(spec.name, spec.health, spec.damage), spec.power))
                .collect(),
        }
    }

    /// The adversary's starting state.
    #[must_use]
    pub fn adversary(&self) -> &Adversary {
        &self.adversary
    }

    /// The allies in acting order.
    #[must_use]
    pub fn allies(&self) -> &[Ally] {
        &self.allies
    }

    pub(crate) fn into_parts(self) -> (Adversary, Vec<Ally>) {
        (self.adversary, self.allies)
    }
}

/// The classic demo cast: the Dragon against the ten-hero party.
///
/// A ready-made roster for demos and battle-level tests.
#[must_use]
pub fn demo_party() -> Roster {
    Roster::new(
        AdversarySpec::new("Dragon", 1500, 50),
        vec![
            AllySpec::new("Mario", 270, 10, Power::CriticalDamage),
            AllySpec::new("Aibolit", 250, 5, Power::heal(15)),
            AllySpec::new("Ben", 280, 15, Power::CriticalDamage),
            AllySpec::new("Merlin", 290, 10, Power::boost(2)),
            AllySpec::new("Guts", 260, 5, Power::block_and_revert()),
            AllySpec::new("Kristin", 300, 5, Power::heal(5)),
            AllySpec::new("Gerald", 300, 0, Power::revival(150)),
            AllySpec::new("Luka", 260, 0, Power::hack(15)),
            AllySpec::new("Ronin", 270, 0, Power::shuriken(10, 10)),
            AllySpec::new(
                "Artur",
                270,
                0,
                Power::summon_call(Stats::new("OnePunchMan", 270, 1500)),
            ),
        ],
    )
}
