//! Property tests for the arithmetic invariants.

use proptest::prelude::*;

use raid_engine::{
    AdversarySpec, AllySpec, Battle, BattleRng, Power, Roster, ScriptedRng, SeededRng, Stats,
};

proptest! {
    /// The health floor holds after any sequence of damage applications.
    #[test]
    fn health_floor(
        start in 0i64..=1000,
        amounts in prop::collection::vec(-1000i64..=1000, 0..50),
    ) {
        let mut stats = Stats::new("t", start, 0);
        for amount in amounts {
            stats.apply_damage(amount);
            prop_assert!(stats.health() >= 0);
        }
    }

    /// Damage never raises health and healing never lowers it.
    #[test]
    fn damage_and_heal_are_monotone(
        start in 0i64..=1000,
        amount in 0i64..=1000,
    ) {
        let mut stats = Stats::new("t", start, 0);
        stats.apply_damage(amount);
        prop_assert!(stats.health() <= start);

        let mut stats = Stats::new("t", start, 0);
        stats.apply_heal(amount);
        prop_assert!(stats.health() >= start);
    }

    /// A block-and-revert ally hit for boss damage `d` with mitigation
    /// drawn from {5, 10} takes exactly `max(0, d - m)`.
    #[test]
    fn block_mitigation_composition(d in 0i64..=200, m_idx in 0usize..2) {
        let start = 100_000;
        let roster = Roster::new(
            AdversarySpec::new("Boss", 1_000_000, d),
            vec![
                AllySpec::new("B", start, 0, Power::block_and_revert()),
                AllySpec::new("F", start, 0, Power::heal(0)),
            ],
        );
        // defense → F (Heal), mitigation pick → m_idx
        let mut battle = Battle::new(roster, ScriptedRng::new([1, m_idx as i64]));

        let report = battle.run_round().unwrap();

        let m = [5, 10][m_idx];
        let taken = start - report.allies[0].health;
        prop_assert_eq!(taken, (d - m).max(0));
        prop_assert_eq!(battle.allies()[0].power().blocked_damage(), Some(m));
    }

    /// The seeded RNG honors inclusive range bounds.
    #[test]
    fn roll_range_stays_in_bounds(seed in any::<u64>(), lo in -50i64..=50, span in 0i64..=100) {
        let hi = lo + span;
        let mut rng = SeededRng::new(seed);
        for _ in 0..20 {
            let v = rng.roll_range(lo, hi);
            prop_assert!((lo..=hi).contains(&v));
        }
    }

    /// Index picks stay inside the set.
    #[test]
    fn pick_index_stays_in_bounds(seed in any::<u64>(), len in 1usize..=32) {
        let mut rng = SeededRng::new(seed);
        for _ in 0..20 {
            prop_assert!(rng.pick_index(len) < len);
        }
    }
}
