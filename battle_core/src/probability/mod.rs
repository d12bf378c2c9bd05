//! Exact probabilities - single-roll tables and battle win odds

mod exact;
mod table;

pub use exact::{
    attacker_advantage_ratio, expected_losses, win_probability_exact, win_probability_table,
    ExactOdds, EXPECTATION_PRECISION, WIN_PROBABILITY_PRECISION,
};
pub use table::{
    single_roll_outcomes, single_roll_table, RollOutcome, RollTable, SINGLE_ROLL_PROBABILITIES,
};

pub(crate) use exact::round_to;

use thiserror::Error;

/// Probability query error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbabilityError {
    #[error("No probability data for {attacker_dice} attacker dice vs {defender_dice} defender dice")]
    UnsupportedDice { attacker_dice: u32, defender_dice: u32 },
}
