//! Battle ownership and the round loop.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::round::{self, RoundReport};
use crate::core::combatant::{Adversary, Ally};
use crate::core::error::EngineResult;
use crate::core::rng::BattleRng;
use crate::roster::Roster;

/// How a finished battle ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The adversary's health reached zero.
    AlliesWin,
    /// Every ally's health reached zero.
    AdversaryWins,
}

/// A battle in progress: the roster, the round counter, and the RNG.
///
/// The battle exclusively owns all mutable state. Each call to
/// [`Battle::run_round`] advances one full round and yields a
/// [`RoundReport`] for an external reporter; [`Battle::run`] loops until a
/// terminal outcome.
#[derive(Clone, Debug)]
pub struct Battle<R: BattleRng> {
    adversary: Adversary,
    allies: Vec<Ally>,
    round: u32,
    rng: R,
}

impl<R: BattleRng> Battle<R> {
    /// Start a battle from a roster with an injected randomness source.
    #[must_use]
    pub fn new(roster: Roster, rng: R) -> Self {
        let (adversary, allies) = roster.into_parts();
        Self {
            adversary,
            allies,
            round: 0,
            rng,
        }
    }

    /// The adversary's current state.
    #[must_use]
    pub fn adversary(&self) -> &Adversary {
        &self.adversary
    }

    /// The allies in roster order. Dead allies stay in place.
    #[must_use]
    pub fn allies(&self) -> &[Ally] {
        &self.allies
    }

    /// Rounds played so far (0 before the first round).
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Snapshot of the current state, for reporting before any round has
    /// been played.
    #[must_use]
    pub fn snapshot(&self) -> RoundReport {
        RoundReport::capture(
            self.round,
            &self.adversary,
            &self.allies,
            Default::default(),
        )
    }

    /// Play one round: defense selection, adversary attack, ally counter
    /// phase. Fails only on a malformed roster, which aborts the battle.
    pub fn run_round(&mut self) -> EngineResult<RoundReport> {
        self.round += 1;
        debug!(round = self.round, "round start");
        round::play_round(self.round, &mut self.adversary, &mut self.allies, &mut self.rng)
    }

    /// Check the terminal condition.
    ///
    /// The adversary falling wins for the allies even if every ally fell
    /// in the same round.
    #[must_use]
    pub fn is_terminal(&self) -> Option<Outcome> {
        if self.adversary.stats().health() <= 0 {
            Some(Outcome::AlliesWin)
        } else if self.allies.iter().all(|a| !a.stats().is_alive()) {
            Some(Outcome::AdversaryWins)
        } else {
            None
        }
    }

    /// Run rounds until the battle ends, feeding each report to the
    /// caller's sink.
    pub fn run(&mut self, mut on_round: impl FnMut(&RoundReport)) -> EngineResult<Outcome> {
        loop {
            if let Some(outcome) = self.is_terminal() {
                info!(round = self.round, ?outcome, "battle over");
                return Ok(outcome);
            }
            let report = self.run_round()?;
            on_round(&report);
        }
    }
}
