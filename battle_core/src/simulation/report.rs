//! Simulation report generation.

use crate::combat::BattleResult;
use crate::probability::round_to;
use serde::{Deserialize, Serialize};

/// Aggregate statistics over a batch of battles.
///
/// Percentages and averages are rounded to one decimal place. Averages
/// conditioned on a winner are zero when that side never won.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub num_battles: u32,
    pub attacker_wins: u32,
    pub defender_wins: u32,
    pub attacker_win_pct: f64,
    pub defender_win_pct: f64,
    pub avg_rounds: f64,
    pub avg_attacker_remaining: f64,
    pub avg_defender_remaining: f64,
    pub avg_attacker_losses: f64,
    pub avg_defender_losses: f64,

    // Breakdown when the attacker wins
    pub atk_win_avg_remaining: f64,
    pub atk_win_avg_rounds: f64,

    // Breakdown when the defender wins
    pub def_win_avg_remaining: f64,
    pub def_win_avg_rounds: f64,
}

impl SimulationResult {
    /// Attacker win rate as a fraction in `[0, 1]`, unrounded
    pub fn attacker_win_rate(&self) -> f64 {
        ratio(self.attacker_wins as u64, self.num_battles as u64)
    }

    /// Print a summary to stdout.
    pub fn print(&self) {
        println!("\n=== Simulation Results ({} battles) ===\n", self.num_battles);
        println!(
            "Attacker wins: {} ({:.1}%)",
            self.attacker_wins, self.attacker_win_pct
        );
        println!(
            "Defender wins: {} ({:.1}%)",
            self.defender_wins, self.defender_win_pct
        );
        println!("Average rounds: {:.1}", self.avg_rounds);
        println!(
            "Average remaining: attacker {:.1}, defender {:.1}",
            self.avg_attacker_remaining, self.avg_defender_remaining
        );
        println!(
            "Average losses: attacker {:.1}, defender {:.1}",
            self.avg_attacker_losses, self.avg_defender_losses
        );
        println!(
            "When attacker wins: {:.1} units left after {:.1} rounds",
            self.atk_win_avg_remaining, self.atk_win_avg_rounds
        );
        println!(
            "When defender wins: {:.1} units left after {:.1} rounds",
            self.def_win_avg_remaining, self.def_win_avg_rounds
        );
    }
}

fn ratio(sum: u64, count: u64) -> f64 {
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}

/// Running totals over battles, mergeable across workers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct BattleTally {
    battles: u64,
    attacker_wins: u64,
    total_rounds: u64,
    total_atk_remaining: u64,
    total_def_remaining: u64,
    atk_win_remaining: u64,
    atk_win_rounds: u64,
    def_win_remaining: u64,
    def_win_rounds: u64,
}

impl BattleTally {
    pub(crate) fn record(&mut self, result: &BattleResult) {
        let rounds = result.round_count() as u64;
        self.battles += 1;
        self.total_rounds += rounds;
        self.total_atk_remaining += result.attacker_remaining as u64;
        self.total_def_remaining += result.defender_remaining as u64;

        if result.attacker_won() {
            self.attacker_wins += 1;
            self.atk_win_remaining += result.attacker_remaining as u64;
            self.atk_win_rounds += rounds;
        } else {
            self.def_win_remaining += result.defender_remaining as u64;
            self.def_win_rounds += rounds;
        }
    }

    pub(crate) fn merge(mut self, other: BattleTally) -> BattleTally {
        self.battles += other.battles;
        self.attacker_wins += other.attacker_wins;
        self.total_rounds += other.total_rounds;
        self.total_atk_remaining += other.total_atk_remaining;
        self.total_def_remaining += other.total_def_remaining;
        self.atk_win_remaining += other.atk_win_remaining;
        self.atk_win_rounds += other.atk_win_rounds;
        self.def_win_remaining += other.def_win_remaining;
        self.def_win_rounds += other.def_win_rounds;
        self
    }

    pub(crate) fn finish(self, attacker_units: u32, defender_units: u32) -> SimulationResult {
        let n = self.battles;
        let defender_wins = n - self.attacker_wins;
        let one = |value: f64| round_to(value, 1);

        let (avg_attacker_losses, avg_defender_losses) = if n == 0 {
            (0.0, 0.0)
        } else {
            (
                attacker_units as f64 - ratio(self.total_atk_remaining, n),
                defender_units as f64 - ratio(self.total_def_remaining, n),
            )
        };

        SimulationResult {
            num_battles: n as u32,
            attacker_wins: self.attacker_wins as u32,
            defender_wins: defender_wins as u32,
            attacker_win_pct: one(ratio(self.attacker_wins, n) * 100.0),
            defender_win_pct: one(ratio(defender_wins, n) * 100.0),
            avg_rounds: one(ratio(self.total_rounds, n)),
            avg_attacker_remaining: one(ratio(self.total_atk_remaining, n)),
            avg_defender_remaining: one(ratio(self.total_def_remaining, n)),
            avg_attacker_losses: one(avg_attacker_losses),
            avg_defender_losses: one(avg_defender_losses),
            atk_win_avg_remaining: one(ratio(self.atk_win_remaining, self.attacker_wins)),
            atk_win_avg_rounds: one(ratio(self.atk_win_rounds, self.attacker_wins)),
            def_win_avg_remaining: one(ratio(self.def_win_remaining, defender_wins)),
            def_win_avg_rounds: one(ratio(self.def_win_rounds, defender_wins)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::RoundResult;
    use crate::types::Side;

    fn battle(winner: Side, rounds: usize, atk_left: u32, def_left: u32) -> BattleResult {
        let round = RoundResult {
            attacker_rolls: vec![],
            defender_rolls: vec![],
            attacker_losses: 0,
            defender_losses: 0,
            attacker_remaining: atk_left,
            defender_remaining: def_left,
            notes: vec![],
        };
        BattleResult {
            rounds: vec![round; rounds],
            attacker_remaining: atk_left,
            defender_remaining: def_left,
            attacker_retreated: false,
            winner,
        }
    }

    #[test]
    fn test_empty_tally_is_all_zero() {
        let result = BattleTally::default().finish(10, 5);
        assert_eq!(result.num_battles, 0);
        assert_eq!(result.attacker_win_pct, 0.0);
        assert_eq!(result.avg_attacker_losses, 0.0);
        assert_eq!(result.def_win_avg_rounds, 0.0);
    }

    #[test]
    fn test_conditional_averages() {
        let mut tally = BattleTally::default();
        tally.record(&battle(Side::Attacker, 2, 8, 0));
        tally.record(&battle(Side::Attacker, 4, 6, 0));
        tally.record(&battle(Side::Defender, 6, 1, 3));
        let result = tally.finish(10, 5);

        assert_eq!(result.attacker_wins, 2);
        assert_eq!(result.defender_wins, 1);
        assert_eq!(result.attacker_win_pct, 66.7);
        assert_eq!(result.defender_win_pct, 33.3);
        assert_eq!(result.avg_rounds, 4.0);
        assert_eq!(result.avg_attacker_remaining, 5.0);
        assert_eq!(result.avg_attacker_losses, 5.0);
        assert_eq!(result.avg_defender_losses, 4.0);
        assert_eq!(result.atk_win_avg_remaining, 7.0);
        assert_eq!(result.atk_win_avg_rounds, 3.0);
        assert_eq!(result.def_win_avg_remaining, 3.0);
        assert_eq!(result.def_win_avg_rounds, 6.0);
    }

    #[test]
    fn test_no_defender_wins_guarded() {
        let mut tally = BattleTally::default();
        tally.record(&battle(Side::Attacker, 1, 4, 0));
        let result = tally.finish(4, 1);
        assert_eq!(result.defender_wins, 0);
        assert_eq!(result.def_win_avg_remaining, 0.0);
        assert_eq!(result.def_win_avg_rounds, 0.0);
    }

    #[test]
    fn test_merge_matches_sequential() {
        let battles = [
            battle(Side::Attacker, 3, 5, 0),
            battle(Side::Defender, 2, 1, 2),
            battle(Side::Attacker, 5, 2, 0),
        ];
        let mut all = BattleTally::default();
        battles.iter().for_each(|b| all.record(b));

        let mut left = BattleTally::default();
        left.record(&battles[0]);
        let mut right = BattleTally::default();
        right.record(&battles[1]);
        right.record(&battles[2]);

        assert_eq!(left.merge(right), all);
    }
}
