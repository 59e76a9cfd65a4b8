//! Power variants and their activation semantics.
//!
//! A power activates only for an ally that passed the counter-phase gate:
//! the ally is alive, the adversary is alive, and the ally's tag is not the
//! round's chosen defense. The gate itself lives in `battle::round`; this
//! module holds what each power does once it fires.

use serde::{Deserialize, Serialize};

use super::{AbilityKind, EventLog};
use crate::core::combatant::{Adversary, Ally, Stats};
use crate::core::error::{EngineError, EngineResult};
use crate::core::rng::BattleRng;

/// Sides of the summon die; the summon fires on a roll of 1.
const SUMMON_DIE_SIDES: i64 = 10;

/// An ally's special power, carrying only the state that variant needs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Power {
    /// Bonus counter damage of `damage * roll(2..=5)`.
    CriticalDamage,

    /// Permanently adds `boost_amount` to every living ally's damage.
    Boost { boost_amount: i64 },

    /// Mitigates part of the boss hit and reverts it on the counter.
    ///
    /// `blocked_damage` is set during the adversary's attack step and read
    /// back during this ally's activation. It is deliberately never reset
    /// between rounds, so a round in which this ally was fully defended
    /// reverts the previously stored value. The carry-over is ambiguous
    /// but load-bearing; do not reset it silently.
    BlockAndRevert { blocked_damage: i64 },

    /// Adds `heal_points` to every other living ally's health.
    Heal { heal_points: i64 },

    /// One-shot: revives the first dead ally to `revival_amount` health at
    /// the cost of this ally's own life.
    Revival {
        revival_amount: i64,
        used_revival: bool,
    },

    /// On even rounds, moves `steal_amount` health from the boss to a
    /// uniformly chosen living ally.
    Hack { steal_amount: i64 },

    /// Coin flip: a virus shuriken damages the boss, a vaccine shuriken
    /// heals it.
    Shuriken { virus_damage: i64, vaccine_heal: i64 },

    /// The ordinary attack narrates but deals no damage. No activation.
    OnePunch,

    /// Embeds a one-punch sub-combatant outside the roster; a 1-in-10 roll
    /// summons it for a (harmless) attack.
    SummonCall { summon: Stats },
}

impl Power {
    /// Boost power adding `boost_amount` damage per activation.
    #[must_use]
    pub fn boost(boost_amount: i64) -> Self {
        Power::Boost { boost_amount }
    }

    /// Block-and-revert power with no damage blocked yet.
    #[must_use]
    pub fn block_and_revert() -> Self {
        Power::BlockAndRevert { blocked_damage: 0 }
    }

    /// Heal power restoring `heal_points` to each other living ally.
    #[must_use]
    pub fn heal(heal_points: i64) -> Self {
        Power::Heal { heal_points }
    }

    /// Unused revival power restoring a fallen ally to `revival_amount`.
    #[must_use]
    pub fn revival(revival_amount: i64) -> Self {
        Power::Revival {
            revival_amount,
            used_revival: false,
        }
    }

    /// Hack power transferring `steal_amount` health on even rounds.
    #[must_use]
    pub fn hack(steal_amount: i64) -> Self {
        Power::Hack { steal_amount }
    }

    /// Shuriken power with its two outcomes.
    #[must_use]
    pub fn shuriken(virus_damage: i64, vaccine_heal: i64) -> Self {
        Power::Shuriken {
            virus_damage,
            vaccine_heal,
        }
    }

    /// Summon power embedding the given sub-combatant.
    #[must_use]
    pub fn summon_call(summon: Stats) -> Self {
        Power::SummonCall { summon }
    }

    /// The fixed tag of this power.
    #[must_use]
    pub fn kind(&self) -> AbilityKind {
        match self {
            Power::CriticalDamage => AbilityKind::CriticalDamage,
            Power::Boost { .. } => AbilityKind::Boost,
            Power::BlockAndRevert { .. } => AbilityKind::BlockAndRevert,
            Power::Heal { .. } => AbilityKind::Heal,
            Power::Revival { .. } => AbilityKind::Revival,
            Power::Hack { .. } => AbilityKind::Hack,
            Power::Shuriken { .. } => AbilityKind::Shuriken,
            Power::OnePunch => AbilityKind::OnePunch,
            Power::SummonCall { .. } => AbilityKind::SummonCall,
        }
    }

    /// Damage currently stored by a block-and-revert power; `None` for
    /// other variants.
    #[must_use]
    pub fn blocked_damage(&self) -> Option<i64> {
        match self {
            Power::BlockAndRevert { blocked_damage } => Some(*blocked_damage),
            _ => None,
        }
    }

    /// Whether a revival power has already fired; `None` for other
    /// variants.
    #[must_use]
    pub fn used_revival(&self) -> Option<bool> {
        match self {
            Power::Revival { used_revival, .. } => Some(*used_revival),
            _ => None,
        }
    }
}

/// The ordinary attack an eligible ally makes before its power fires.
///
/// Every variant hits for its base damage except one-punch, whose attack
/// is pure narration.
pub(crate) fn ordinary_attack(actor: &Ally, adversary: &mut Adversary, events: &mut EventLog) {
    match actor.kind() {
        AbilityKind::OnePunch => {
            events.push(format!(
                "{} attacks with {} damage.",
                actor.stats().name(),
                actor.stats().damage()
            ));
        }
        _ => {
            adversary.stats_mut().apply_damage(actor.stats().damage());
        }
    }
}

/// Activate the power of `allies[actor]` against the adversary.
///
/// Caller guarantees the counter-phase gate already passed. `round` is the
/// current round counter value (parity matters to the hack power).
pub(crate) fn activate<R: BattleRng>(
    actor: usize,
    adversary: &mut Adversary,
    allies: &mut [Ally],
    round: u32,
    rng: &mut R,
    events: &mut EventLog,
) -> EngineResult<()> {
    let power = allies[actor].power().clone();
    let actor_name = allies[actor].stats().name().to_owned();

    match power {
        Power::CriticalDamage => {
            let crit = allies[actor].stats().damage() * rng.roll_range(2, 5);
            adversary.stats_mut().apply_damage(crit);
            events.push(format!("{actor_name} hit critically {crit} to the boss."));
        }

        Power::Boost { boost_amount } => {
            for ally in allies.iter_mut() {
                if ally.stats().is_alive() {
                    ally.stats_mut().increase_damage(boost_amount);
                }
            }
            events.push(format!(
                "{actor_name} boosts each living ally's attack by {boost_amount}."
            ));
        }

        Power::BlockAndRevert { blocked_damage } => {
            adversary.stats_mut().apply_damage(blocked_damage);
            events.push(format!(
                "{actor_name} reverted {blocked_damage} to the boss."
            ));
        }

        Power::Heal { heal_points } => {
            for (i, ally) in allies.iter_mut().enumerate() {
                if i != actor && ally.stats().is_alive() {
                    ally.stats_mut().apply_heal(heal_points);
                }
            }
            events.push(format!(
                "{actor_name} heals every other living ally by {heal_points}."
            ));
        }

        Power::Revival {
            revival_amount,
            used_revival,
        } => {
            if used_revival || !allies[actor].stats().is_alive() {
                return Ok(());
            }
            let fallen = allies.iter().position(|a| a.stats().health() == 0);
            if let Some(target) = fallen {
                let target_name = allies[target].stats().name().to_owned();
                allies[target].stats_mut().apply_heal(revival_amount);
                let own_health = allies[actor].stats().health();
                allies[actor].stats_mut().apply_damage(own_health);
                if let Power::Revival { used_revival, .. } = allies[actor].power_mut() {
                    *used_revival = true;
                }
                events.push(format!(
                    "{actor_name} revived {target_name} and sacrificed themselves!"
                ));
            }
        }

        Power::Hack { steal_amount } => {
            if round % 2 != 0 {
                return Ok(());
            }
            adversary.stats_mut().apply_damage(steal_amount);
            let living: Vec<usize> = allies
                .iter()
                .enumerate()
                .filter(|(_, a)| a.stats().is_alive())
                .map(|(i, _)| i)
                .collect();
            let chosen = *rng.choose(&living).ok_or(EngineError::InvalidRoster(
                "no living ally to receive stolen health",
            ))?;
            allies[chosen].stats_mut().apply_heal(steal_amount);
            events.push(format!(
                "{actor_name} stole {steal_amount} health from the boss and transferred it to {}.",
                allies[chosen].stats().name()
            ));
        }

        Power::Shuriken {
            virus_damage,
            vaccine_heal,
        } => {
            // Two outcomes, uniform: 0 = virus, 1 = vaccine.
            if rng.pick_index(2) == 0 {
                adversary.stats_mut().apply_damage(virus_damage);
                events.push(format!(
                    "{actor_name} threw a virus shuriken, dealing {virus_damage} damage to the boss!"
                ));
            } else {
                adversary.stats_mut().apply_heal(vaccine_heal);
                events.push(format!(
                    "{actor_name} threw a vaccine shuriken, healing the boss by {vaccine_heal} health!"
                ));
            }
        }

        Power::OnePunch => {}

        Power::SummonCall { summon } => {
            if rng.roll_range(1, SUMMON_DIE_SIDES) == 1 {
                events.push(format!("{actor_name} summons {}!", summon.name()));
                // The summoned one-punch attack is narration only.
                events.push(format!(
                    "{} attacks with {} damage.",
                    summon.name(),
                    summon.damage()
                ));
            } else {
                events.push(format!("{actor_name} does not attack."));
            }
        }
    }

    Ok(())
}
