//! Exact single-roll outcome table
//!
//! Values from Taflin (2001), "The Probability Distribution of Risk
//! Battles", Table 1. Each entry lists every possible `(attacker_losses,
//! defender_losses)` outcome of one roll as an exact fraction.

use super::ProbabilityError;

/// One outcome of a single roll with its exact probability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollOutcome {
    pub attacker_losses: u32,
    pub defender_losses: u32,
    pub numerator: u32,
    pub denominator: u32,
}

impl RollOutcome {
    const fn new(attacker_losses: u32, defender_losses: u32, numerator: u32, denominator: u32) -> Self {
        RollOutcome {
            attacker_losses,
            defender_losses,
            numerator,
            denominator,
        }
    }

    pub fn probability(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}

/// Outcome distribution for one `(attacker_dice, defender_dice)` pairing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollTable {
    pub attacker_dice: u32,
    pub defender_dice: u32,
    pub outcomes: &'static [RollOutcome],
}

impl RollTable {
    /// Short label such as `3v2`
    pub fn label(&self) -> String {
        format!("{}v{}", self.attacker_dice, self.defender_dice)
    }
}

/// Every pairing reachable under vanilla rules, ordered by attacker then
/// defender dice
pub static SINGLE_ROLL_PROBABILITIES: [RollTable; 6] = [
    RollTable {
        attacker_dice: 1,
        defender_dice: 1,
        outcomes: &[RollOutcome::new(0, 1, 15, 36), RollOutcome::new(1, 0, 21, 36)],
    },
    RollTable {
        attacker_dice: 1,
        defender_dice: 2,
        outcomes: &[RollOutcome::new(0, 1, 55, 216), RollOutcome::new(1, 0, 161, 216)],
    },
    RollTable {
        attacker_dice: 2,
        defender_dice: 1,
        outcomes: &[RollOutcome::new(0, 1, 125, 216), RollOutcome::new(1, 0, 91, 216)],
    },
    RollTable {
        attacker_dice: 2,
        defender_dice: 2,
        outcomes: &[
            RollOutcome::new(0, 2, 295, 1296),
            RollOutcome::new(1, 1, 420, 1296),
            RollOutcome::new(2, 0, 581, 1296),
        ],
    },
    RollTable {
        attacker_dice: 3,
        defender_dice: 1,
        outcomes: &[RollOutcome::new(0, 1, 855, 1296), RollOutcome::new(1, 0, 441, 1296)],
    },
    RollTable {
        attacker_dice: 3,
        defender_dice: 2,
        outcomes: &[
            RollOutcome::new(0, 2, 2890, 7776),
            RollOutcome::new(1, 1, 2611, 7776),
            RollOutcome::new(2, 0, 2275, 7776),
        ],
    },
];

/// Look up the outcome table for a dice pairing
pub fn single_roll_table(attacker_dice: u32, defender_dice: u32) -> Result<&'static RollTable, ProbabilityError> {
    SINGLE_ROLL_PROBABILITIES
        .iter()
        .find(|t| t.attacker_dice == attacker_dice && t.defender_dice == defender_dice)
        .ok_or(ProbabilityError::UnsupportedDice {
            attacker_dice,
            defender_dice,
        })
}

/// Look up the outcomes for a dice pairing
pub fn single_roll_outcomes(
    attacker_dice: u32,
    defender_dice: u32,
) -> Result<&'static [RollOutcome], ProbabilityError> {
    single_roll_table(attacker_dice, defender_dice).map(|t| t.outcomes)
}
