//! Exact battle odds - Markov chain over (attacker, defender) unit counts
//!
//! `Q(a, d)` is the probability the attacker eventually wins from `a`
//! attacking units against `d` defenders:
//!
//! - `Q(a, 0) = 1` (defender eliminated)
//! - `Q(1, d) = 0` for `d >= 1` (cannot attack with one unit)
//! - otherwise `Q(a, d) = sum P(al, dl) * Q(max(1, a - al), max(0, d - dl))`
//!
//! Every successor state has no more units on either side, so filling the
//! table by increasing `a`, then increasing `d`, always reads finished cells.
//! Only the vanilla ruleset is modelled; tuning, heroes and structures are
//! ignored.

use super::table::{single_roll_outcomes, RollTable, SINGLE_ROLL_PROBABILITIES};
use super::ProbabilityError;
use crate::combat::{MAX_ATTACKER_DICE, MAX_DEFENDER_DICE};
use serde::{Deserialize, Serialize};

/// Decimal places kept on a reported win probability
pub const WIN_PROBABILITY_PRECISION: i32 = 6;

/// Decimal places kept on expected losses and advantage ratios
pub const EXPECTATION_PRECISION: i32 = 4;

pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Table entry for dice counts already capped to the vanilla limits
fn capped_table(attacker_dice: u32, defender_dice: u32) -> &'static RollTable {
    debug_assert!((1..=MAX_ATTACKER_DICE).contains(&attacker_dice));
    debug_assert!((1..=MAX_DEFENDER_DICE).contains(&defender_dice));
    let index = (attacker_dice - 1) * MAX_DEFENDER_DICE + (defender_dice - 1);
    &SINGLE_ROLL_PROBABILITIES[index as usize]
}

/// Fill the full win-probability table up to the given army sizes
///
/// `table[a][d]` holds the unrounded attacker win probability from `a`
/// attackers against `d` defenders.
pub fn win_probability_table(attacker_units: u32, defender_units: u32) -> Vec<Vec<f64>> {
    let max_a = attacker_units as usize;
    let max_d = defender_units as usize;
    let mut q = vec![vec![0.0f64; max_d + 1]; max_a + 1];

    for row in q.iter_mut() {
        row[0] = 1.0;
    }

    for a in 2..=max_a {
        for d in 1..=max_d {
            let atk_dice = (a as u32 - 1).min(MAX_ATTACKER_DICE);
            let def_dice = (d as u32).min(MAX_DEFENDER_DICE);
            let table = capped_table(atk_dice, def_dice);

            q[a][d] = table
                .outcomes
                .iter()
                .map(|o| {
                    let next_a = a.saturating_sub(o.attacker_losses as usize).max(1);
                    let next_d = d.saturating_sub(o.defender_losses as usize);
                    o.probability() * q[next_a][next_d]
                })
                .sum();
        }
    }

    q
}

/// Exact probability that the attacker wins, rounded to six decimals
pub fn win_probability_exact(attacker_units: u32, defender_units: u32) -> f64 {
    if attacker_units <= 1 {
        return 0.0;
    }
    if defender_units == 0 {
        return 1.0;
    }

    let q = win_probability_table(attacker_units, defender_units);
    round_to(
        q[attacker_units as usize][defender_units as usize],
        WIN_PROBABILITY_PRECISION,
    )
}

/// Expected `(attacker_losses, defender_losses)` for one roll
pub fn expected_losses(attacker_dice: u32, defender_dice: u32) -> Result<(f64, f64), ProbabilityError> {
    let outcomes = single_roll_outcomes(attacker_dice, defender_dice)?;
    let atk: f64 = outcomes
        .iter()
        .map(|o| o.attacker_losses as f64 * o.probability())
        .sum();
    let def: f64 = outcomes
        .iter()
        .map(|o| o.defender_losses as f64 * o.probability())
        .sum();
    Ok((
        round_to(atk, EXPECTATION_PRECISION),
        round_to(def, EXPECTATION_PRECISION),
    ))
}

/// Ratio of expected defender losses to expected attacker losses
///
/// Above 1.0 the attacker wears the defender down faster than it bleeds.
pub fn attacker_advantage_ratio(attacker_dice: u32, defender_dice: u32) -> Result<f64, ProbabilityError> {
    let (atk, def) = expected_losses(attacker_dice, defender_dice)?;
    if atk == 0.0 {
        return Ok(f64::INFINITY);
    }
    Ok(round_to(def / atk, EXPECTATION_PRECISION))
}

/// Exact odds summary for a starting position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExactOdds {
    pub attacker_units: u32,
    pub defender_units: u32,
    /// Percentage, two decimals
    pub attacker_win_probability: f64,
    /// Percentage, two decimals
    pub defender_win_probability: f64,
    /// Dice pairing of the opening roll, e.g. `3v2`
    pub current_roll_type: String,
    pub expected_attacker_losses_per_roll: f64,
    pub expected_defender_losses_per_roll: f64,
}

impl ExactOdds {
    /// Compute odds for a position where both sides can still roll
    pub fn compute(attacker_units: u32, defender_units: u32) -> Result<Self, ProbabilityError> {
        let atk_dice = attacker_units.saturating_sub(1).min(MAX_ATTACKER_DICE);
        let def_dice = defender_units.min(MAX_DEFENDER_DICE);
        let (atk_exp, def_exp) = expected_losses(atk_dice, def_dice)?;
        let win = win_probability_exact(attacker_units, defender_units);

        Ok(ExactOdds {
            attacker_units,
            defender_units,
            attacker_win_probability: round_to(win * 100.0, 2),
            defender_win_probability: round_to((1.0 - win) * 100.0, 2),
            current_roll_type: format!("{}v{}", atk_dice, def_dice),
            expected_attacker_losses_per_roll: atk_exp,
            expected_defender_losses_per_roll: def_exp,
        })
    }
}
