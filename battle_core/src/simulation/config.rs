//! Simulation configuration.

use crate::tuning::CombatTuning;
use crate::types::{Army, Hero, Structure};

/// Configuration for a batch of auto-resolved battles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig<'a> {
    /// Attacking units at the start of every battle
    pub attacker_units: u32,

    /// Defending units at the start of every battle
    pub defender_units: u32,

    /// Hero leading the attack, cloned into each battle
    pub attacker_hero: Option<Hero>,

    /// Catalog structures protecting the defender, shared read-only
    pub defender_structures: Vec<&'a Structure>,

    /// Tuning shared by every battle in the batch
    pub tuning: CombatTuning,

    /// Number of battles to run
    pub num_battles: u32,
}

impl Default for SimulationConfig<'_> {
    fn default() -> Self {
        Self {
            attacker_units: 10,
            defender_units: 5,
            attacker_hero: None,
            defender_structures: Vec::new(),
            tuning: CombatTuning::default(),
            num_battles: 10_000,
        }
    }
}

impl<'a> SimulationConfig<'a> {
    /// Vanilla battles between two plain armies
    pub fn vanilla(attacker_units: u32, defender_units: u32, num_battles: u32) -> Self {
        Self {
            attacker_units,
            defender_units,
            num_battles,
            ..Default::default()
        }
    }

    /// Fresh attacking army for one trial
    pub fn attacker(&self) -> Army<'a> {
        Army {
            units: self.attacker_units,
            hero: self.attacker_hero.clone(),
            structures: Vec::new(),
        }
    }

    /// Fresh defending army for one trial
    pub fn defender(&self) -> Army<'a> {
        Army {
            units: self.defender_units,
            hero: None,
            structures: self.defender_structures.clone(),
        }
    }
}
