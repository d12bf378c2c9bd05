//! RoundResult / BattleResult - Outcomes of combat resolution

use crate::types::Side;
use serde::{Deserialize, Serialize};

/// Snapshot of one exchange of dice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    /// Attacker dice after special effects, highest first
    pub attacker_rolls: Vec<u32>,
    /// Defender dice after special effects, highest first
    pub defender_rolls: Vec<u32>,
    pub attacker_losses: u32,
    /// Defender losses after structure absorption
    pub defender_losses: u32,
    pub attacker_remaining: u32,
    pub defender_remaining: u32,
    /// Human-readable notes for every active modifier
    #[serde(default)]
    pub notes: Vec<String>,
}

impl RoundResult {
    /// Number of dice pairs that were compared
    pub fn pairs_compared(&self) -> usize {
        self.attacker_rolls.len().min(self.defender_rolls.len())
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        format!(
            "{:?} vs {:?}: attacker -{}, defender -{} ({} left vs {} left)",
            self.attacker_rolls,
            self.defender_rolls,
            self.attacker_losses,
            self.defender_losses,
            self.attacker_remaining,
            self.defender_remaining
        )
    }
}

/// Outcome of a battle, one or many rounds long
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleResult {
    pub rounds: Vec<RoundResult>,
    pub attacker_remaining: u32,
    pub defender_remaining: u32,
    /// Retreat is not modelled; always false
    pub attacker_retreated: bool,
    pub winner: Side,
}

impl BattleResult {
    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    /// Total attacker losses across every round
    pub fn attacker_losses(&self) -> u32 {
        self.rounds.iter().map(|r| r.attacker_losses).sum()
    }

    /// Total defender losses across every round
    pub fn defender_losses(&self) -> u32 {
        self.rounds.iter().map(|r| r.defender_losses).sum()
    }

    pub fn attacker_won(&self) -> bool {
        self.winner == Side::Attacker
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        let rounds = self.round_count();
        format!(
            "{} wins after {} round{} ({} attacker, {} defender remaining)",
            self.winner,
            rounds,
            if rounds == 1 { "" } else { "s" },
            self.attacker_remaining,
            self.defender_remaining
        )
    }
}
