//! One round of combat.
//!
//! Phase order is fixed: `ChooseDefense → AdversaryAttack →
//! AllyCounterPhase`, after which the caller runs the terminal check. The
//! functions here mutate the roster in place and accumulate narrated
//! events; they never print.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::abilities::{self, AbilityKind, EventLog, Power};
use crate::core::combatant::{Adversary, Ally};
use crate::core::error::{EngineError, EngineResult};
use crate::core::rng::BattleRng;

/// Mitigation values a block-and-revert ally may draw when hit.
const BLOCK_VALUES: [i64; 2] = [5, 10];

/// Read-only view of the adversary for reporting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdversarySnapshot {
    pub name: String,
    pub health: i64,
    pub damage: i64,
    pub chosen_defense: Option<AbilityKind>,
}

impl AdversarySnapshot {
    fn of(adversary: &Adversary) -> Self {
        Self {
            name: adversary.stats().name().to_owned(),
            health: adversary.stats().health(),
            damage: adversary.stats().damage(),
            chosen_defense: adversary.chosen_defense(),
        }
    }
}

/// Read-only view of one ally for reporting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllySnapshot {
    pub name: String,
    pub health: i64,
    pub damage: i64,
    pub ability: AbilityKind,
}

impl AllySnapshot {
    fn of(ally: &Ally) -> Self {
        Self {
            name: ally.stats().name().to_owned(),
            health: ally.stats().health(),
            damage: ally.stats().damage(),
            ability: ally.kind(),
        }
    }
}

/// Everything an external reporter needs about one finished round.
///
/// Events are narration strings produced by ability activations, ordered
/// as they happened. They exist for display only; the engine never reads
/// them back.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    pub round: u32,
    pub adversary: AdversarySnapshot,
    pub allies: Vec<AllySnapshot>,
    pub events: Vec<String>,
}

impl RoundReport {
    pub(crate) fn capture(
        round: u32,
        adversary: &Adversary,
        allies: &[Ally],
        events: EventLog,
    ) -> Self {
        Self {
            round,
            adversary: AdversarySnapshot::of(adversary),
            allies: allies.iter().map(AllySnapshot::of).collect(),
            events: events.into_vec(),
        }
    }
}

/// Play one full round. `round` is the already-incremented counter value.
pub(crate) fn play_round<R: BattleRng>(
    round: u32,
    adversary: &mut Adversary,
    allies: &mut [Ally],
    rng: &mut R,
) -> EngineResult<RoundReport> {
    let mut events = EventLog::new();

    let defense = choose_defense(adversary, allies, rng)?;
    debug!(round, %defense, "defense chosen");

    adversary_attack(adversary, allies, defense, rng);
    counter_phase(round, adversary, allies, defense, rng, &mut events)?;

    Ok(RoundReport::capture(round, adversary, allies, events))
}

/// `ChooseDefense`: uniform pick over the full roster, dead allies
/// included. Selecting a dead ally's tag can make the defense unreachable
/// by any living ally; that is part of the rules, not a bug to fix here.
fn choose_defense<R: BattleRng>(
    adversary: &mut Adversary,
    allies: &[Ally],
    rng: &mut R,
) -> EngineResult<AbilityKind> {
    let chosen = rng
        .choose(allies)
        .ok_or(EngineError::InvalidRoster(
            "no allies to choose a defense from",
        ))?
        .kind();
    adversary.set_chosen_defense(chosen);
    Ok(chosen)
}

/// `AdversaryAttack`: the boss damages every living ally.
///
/// A block-and-revert ally that is not this round's defense draws a
/// mitigation value, stores it for its own counter, and takes the
/// unclamped difference instead of the full hit.
fn adversary_attack<R: BattleRng>(
    adversary: &mut Adversary,
    allies: &mut [Ally],
    defense: AbilityKind,
    rng: &mut R,
) {
    let boss_damage = adversary.stats().damage();
    for ally in allies.iter_mut() {
        if !ally.stats().is_alive() {
            continue;
        }
        if ally.kind() == AbilityKind::BlockAndRevert && defense != AbilityKind::BlockAndRevert {
            let mitigation = BLOCK_VALUES[rng.pick_index(BLOCK_VALUES.len())];
            if let Power::BlockAndRevert { blocked_damage } = ally.power_mut() {
                *blocked_damage = mitigation;
            }
            ally.stats_mut().apply_damage(boss_damage - mitigation);
        } else {
            ally.stats_mut().apply_damage(boss_damage);
        }
    }
}

/// `AllyCounterPhase`: each ally, in roster order, attacks and activates
/// its power — unless it is dead, the boss has fallen, or its tag matches
/// the chosen defense (a defended ally is skipped entirely this round).
fn counter_phase<R: BattleRng>(
    round: u32,
    adversary: &mut Adversary,
    allies: &mut [Ally],
    defense: AbilityKind,
    rng: &mut R,
    events: &mut EventLog,
) -> EngineResult<()> {
    for idx in 0..allies.len() {
        let eligible = allies[idx].stats().is_alive()
            && adversary.stats().is_alive()
            && allies[idx].kind() != defense;
        if !eligible {
            continue;
        }
        abilities::ordinary_attack(&allies[idx], adversary, events);
        abilities::activate(idx, adversary, allies, round, rng, events)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::combatant::Stats;
    use crate::core::rng::ScriptedRng;

    fn boss(health: i64, damage: i64) -> Adversary {
        Adversary::new(Stats::new("Boss", health, damage))
    }

    fn ally(name: &str, health: i64, damage: i64, power: Power) -> Ally {
        Ally::new(Stats::new(name, health, damage), power)
    }

    #[test]
    fn test_choose_defense_sets_tag() {
        let mut adversary = boss(100, 10);
        let allies = vec![
            ally("A", 50, 10, Power::CriticalDamage),
            ally("B", 50, 10, Power::heal(5)),
        ];
        let mut rng = ScriptedRng::new([1]);

        let defense = choose_defense(&mut adversary, &allies, &mut rng).unwrap();

        assert_eq!(defense, AbilityKind::Heal);
        assert_eq!(adversary.chosen_defense(), Some(AbilityKind::Heal));
    }

    #[test]
    fn test_choose_defense_includes_dead_allies() {
        let mut adversary = boss(100, 10);
        let allies = vec![
            ally("A", 50, 10, Power::CriticalDamage),
            ally("B", 0, 10, Power::heal(5)),
        ];
        let mut rng = ScriptedRng::new([1]);

        let defense = choose_defense(&mut adversary, &allies, &mut rng).unwrap();

        // Dead ally's tag is still selectable.
        assert_eq!(defense, AbilityKind::Heal);
    }

    #[test]
    fn test_choose_defense_empty_roster_errors() {
        let mut adversary = boss(100, 10);
        let mut rng = ScriptedRng::default();

        let err = choose_defense(&mut adversary, &[], &mut rng).unwrap_err();
        assert!(matches!(err, EngineError::InvalidRoster(_)));
    }

    #[test]
    fn test_attack_hits_all_living_allies() {
        let mut adversary = boss(100, 20);
        let mut allies = vec![
            ally("A", 50, 10, Power::CriticalDamage),
            ally("B", 0, 10, Power::heal(5)),
            ally("C", 15, 10, Power::boost(2)),
        ];
        let mut rng = ScriptedRng::default();

        adversary_attack(&mut adversary, &mut allies, AbilityKind::Shuriken, &mut rng);

        assert_eq!(allies[0].stats().health(), 30);
        assert_eq!(allies[1].stats().health(), 0); // dead, skipped
        assert_eq!(allies[2].stats().health(), 0); // clamped
    }

    #[test]
    fn test_attack_hits_defended_ally_too() {
        // Defense selection gates the counter phase, not the boss's hit.
        let mut adversary = boss(100, 20);
        let mut allies = vec![ally("A", 50, 10, Power::CriticalDamage)];
        let mut rng = ScriptedRng::default();

        adversary_attack(
            &mut adversary,
            &mut allies,
            AbilityKind::CriticalDamage,
            &mut rng,
        );

        assert_eq!(allies[0].stats().health(), 30);
    }

    #[test]
    fn test_attack_block_mitigation_composition() {
        let mut adversary = boss(100, 20);
        let mut allies = vec![ally("B", 50, 5, Power::block_and_revert())];
        // Mitigation pick 1 draws 10 from {5, 10}.
        let mut rng = ScriptedRng::new([1]);

        adversary_attack(&mut adversary, &mut allies, AbilityKind::Heal, &mut rng);

        assert_eq!(allies[0].stats().health(), 40); // 50 - (20 - 10)
        assert_eq!(allies[0].power().blocked_damage(), Some(10));
    }

    #[test]
    fn test_attack_defended_blocker_takes_full_hit() {
        let mut adversary = boss(100, 20);
        let mut allies = vec![ally("B", 50, 5, Power::block_and_revert())];
        let mut rng = ScriptedRng::default();

        adversary_attack(
            &mut adversary,
            &mut allies,
            AbilityKind::BlockAndRevert,
            &mut rng,
        );

        assert_eq!(allies[0].stats().health(), 30);
        // No mitigation drawn; stored value untouched.
        assert_eq!(allies[0].power().blocked_damage(), Some(0));
    }

    #[test]
    fn test_counter_phase_skips_defended_ally() {
        let mut adversary = boss(100, 0);
        let mut allies = vec![ally("A", 50, 10, Power::CriticalDamage)];
        let mut rng = ScriptedRng::default();
        let mut events = EventLog::new();

        counter_phase(
            1,
            &mut adversary,
            &mut allies,
            AbilityKind::CriticalDamage,
            &mut rng,
            &mut events,
        )
        .unwrap();

        // Neither the ordinary attack nor the power fired.
        assert_eq!(adversary.stats().health(), 100);
        assert!(events.is_empty());
    }

    #[test]
    fn test_counter_phase_stops_damage_once_boss_falls() {
        let mut adversary = boss(10, 0);
        let mut allies = vec![
            ally("A", 50, 10, Power::boost(1)),
            ally("B", 50, 10, Power::heal(5)),
        ];
        let mut rng = ScriptedRng::default();
        let mut events = EventLog::new();

        counter_phase(
            1,
            &mut adversary,
            &mut allies,
            AbilityKind::Shuriken,
            &mut rng,
            &mut events,
        )
        .unwrap();

        // A's attack drops the boss to 0; B never acts.
        assert_eq!(adversary.stats().health(), 0);
        assert_eq!(allies[1].stats().health(), 50);
    }

    #[test]
    fn test_play_round_report_shape() {
        let mut adversary = boss(100, 20);
        let mut allies = vec![ally("A", 50, 10, Power::CriticalDamage)];
        // Defense pick 0 (CriticalDamage) → ally fully gated, no more draws.
        let mut rng = ScriptedRng::new([0]);

        let report = play_round(1, &mut adversary, &mut allies, &mut rng).unwrap();

        assert_eq!(report.round, 1);
        assert_eq!(report.adversary.health, 100);
        assert_eq!(
            report.adversary.chosen_defense,
            Some(AbilityKind::CriticalDamage)
        );
        assert_eq!(report.allies.len(), 1);
        assert_eq!(report.allies[0].health, 30);
        assert!(report.events.is_empty());
    }
}
