//! The closed set of ability tags.

use serde::{Deserialize, Serialize};

/// Identifier of an ally's special power.
///
/// Doubles as the adversary's per-round defense selector: an ally whose
/// tag matches the chosen defense is locked out of the counter phase for
/// that round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbilityKind {
    /// Multiplied bonus damage on the counter attack.
    CriticalDamage,
    /// Permanently raises every living ally's damage.
    Boost,
    /// Mitigates part of the boss hit, then reverts it.
    BlockAndRevert,
    /// Heals every other living ally.
    Heal,
    /// One-shot sacrifice that revives a fallen ally.
    Revival,
    /// Transfers health from the boss to a living ally on even rounds.
    Hack,
    /// Coin-flip shuriken: damages or heals the boss.
    Shuriken,
    /// Ordinary attack is pure narration; deals no damage.
    OnePunch,
    /// Rarely summons an embedded one-punch sub-combatant.
    SummonCall,
}

impl std::fmt::Display for AbilityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            AbilityKind::CriticalDamage => "CRITICAL_DAMAGE",
            AbilityKind::Boost => "BOOST",
            AbilityKind::BlockAndRevert => "BLOCK_DAMAGE_AND_REVERT",
            AbilityKind::Heal => "HEAL",
            AbilityKind::Revival => "REVIVAL",
            AbilityKind::Hack => "HACK",
            AbilityKind::Shuriken => "SHURIKEN",
            AbilityKind::OnePunch => "ONE_PUNCH",
            AbilityKind::SummonCall => "SUMMON_CALL",
        };
        f.write_str(s)
    }
}
