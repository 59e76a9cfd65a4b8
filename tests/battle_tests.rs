//! Full-battle sweeps over seeded RNGs.
//!
//! Runs the classic demo cast to completion across many seeds and checks
//! the engine-wide invariants on every report: the health floor, hack
//! parity, the defense gate, and one-shot revival.

use raid_engine::{roster, AbilityKind, Battle, Outcome, RoundReport, SeededRng};

const MAX_ROUNDS: u32 = 10_000;

fn run_to_completion(seed: u64) -> (Outcome, Vec<RoundReport>) {
    let mut battle = Battle::new(roster::demo_party(), SeededRng::new(seed));
    let mut reports = Vec::new();

    for _ in 0..MAX_ROUNDS {
        if let Some(outcome) = battle.is_terminal() {
            return (outcome, reports);
        }
        reports.push(battle.run_round().expect("demo roster is valid"));
    }
    panic!("battle did not terminate within {MAX_ROUNDS} rounds (seed {seed})");
}

#[test]
fn demo_battles_terminate() {
    for seed in 0..25 {
        let (outcome, reports) = run_to_completion(seed);
        assert!(!reports.is_empty());
        assert!(matches!(
            outcome,
            Outcome::AlliesWin | Outcome::AdversaryWins
        ));
    }
}

#[test]
fn round_numbers_are_sequential() {
    let (_, reports) = run_to_completion(7);
    for (i, report) in reports.iter().enumerate() {
        assert_eq!(report.round, i as u32 + 1);
    }
}

#[test]
fn health_never_negative() {
    for seed in 0..25 {
        let (_, reports) = run_to_completion(seed);
        for report in &reports {
            assert!(report.adversary.health >= 0);
            for ally in &report.allies {
                assert!(ally.health >= 0, "seed {seed}: {} below zero", ally.name);
            }
        }
    }
}

#[test]
fn hack_never_fires_on_odd_rounds() {
    for seed in 0..25 {
        let (_, reports) = run_to_completion(seed);
        for report in &reports {
            if report.events.iter().any(|e| e.contains("stole")) {
                assert_eq!(report.round % 2, 0, "seed {seed}, round {}", report.round);
            }
        }
    }
}

#[test]
fn revival_fires_at_most_once_per_battle() {
    for seed in 0..25 {
        let (_, reports) = run_to_completion(seed);
        let revivals: usize = reports
            .iter()
            .flat_map(|r| &r.events)
            .filter(|e| e.contains("revived"))
            .count();
        assert!(revivals <= 1, "seed {seed}: {revivals} revivals");
    }
}

/// Every activation of the summon ally narrates, so a round that chose its
/// tag as defense must carry no events naming it.
#[test]
fn defended_summoner_stays_silent() {
    for seed in 0..25 {
        let (_, reports) = run_to_completion(seed);
        for report in &reports {
            if report.adversary.chosen_defense == Some(AbilityKind::SummonCall) {
                assert!(
                    !report.events.iter().any(|e| e.starts_with("Artur")),
                    "seed {seed}, round {}",
                    report.round
                );
            }
        }
    }
}

#[test]
fn same_seed_replays_identically() {
    let (outcome_a, reports_a) = run_to_completion(42);
    let (outcome_b, reports_b) = run_to_completion(42);
    assert_eq!(outcome_a, outcome_b);
    assert_eq!(reports_a, reports_b);
}

#[test]
fn report_serde_round_trip() {
    let (_, reports) = run_to_completion(3);
    let report = reports.first().unwrap();

    let json = serde_json::to_string(report).unwrap();
    let back: RoundReport = serde_json::from_str(&json).unwrap();

    assert_eq!(&back, report);
}
