//! Combat tuning - numeric balance knobs layered on the vanilla rules
//!
//! Every value here is a pure function of the tuning fields. With all fields
//! at their defaults the engine plays classic Risk.
//!
//! The planet upgrade can be spent three different ways:
//! - `flat_bonus`: added to every defender comparison
//! - `reroll_lowest_defender`: rerolls of the defender's lowest die (max 2)
//! - `suppress_attacker_highest`: knocks pips off the attacker's top die (max 3)

mod mode;

pub use mode::PlanetUpgradeMode;

use serde::{Deserialize, Serialize};

/// Most defender rerolls a planet upgrade can buy per round
pub const MAX_DEFENDER_REROLLS: i32 = 2;

/// Largest reduction a planet upgrade can apply to the attacker's top die
pub const MAX_ATTACKER_HIGHEST_PENALTY: i32 = 3;

/// Balance configuration applied on top of the vanilla ruleset
///
/// The engine trusts these values; range checks belong to whoever builds
/// the tuning (see `config::InputLimits`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatTuning {
    /// Flat modifier added to each attacker die in comparisons
    pub attacker_ability: i32,
    /// Flat modifier added to each defender die in comparisons
    pub defender_ability: i32,
    pub hero_upgrade_level: i32,
    pub planet_upgrade_level: i32,
    pub hero_value_per_upgrade: i32,
    pub planet_value_per_upgrade: i32,
    pub max_hero_upgrade_level: i32,
    pub max_planet_upgrade_level: i32,
    pub planet_upgrade_mode: PlanetUpgradeMode,
}

impl Default for CombatTuning {
    fn default() -> Self {
        CombatTuning {
            attacker_ability: 0,
            defender_ability: 0,
            hero_upgrade_level: 0,
            planet_upgrade_level: 0,
            hero_value_per_upgrade: 1,
            planet_value_per_upgrade: 1,
            max_hero_upgrade_level: 3,
            max_planet_upgrade_level: 3,
            planet_upgrade_mode: PlanetUpgradeMode::FlatBonus,
        }
    }
}

impl CombatTuning {
    /// Vanilla rules, no modifiers of any kind
    pub fn vanilla() -> Self {
        Self::default()
    }

    /// Whether every derived modifier is neutral
    pub fn is_vanilla(&self) -> bool {
        self.attacker_total_bonus() == 0
            && self.defender_total_bonus() == 0
            && self.defender_rerolls_per_round() == 0
            && self.attacker_highest_die_penalty() == 0
    }

    pub fn clamped_hero_upgrade_level(&self) -> i32 {
        self.hero_upgrade_level
            .clamp(0, self.max_hero_upgrade_level.max(0))
    }

    pub fn clamped_planet_upgrade_level(&self) -> i32 {
        self.planet_upgrade_level
            .clamp(0, self.max_planet_upgrade_level.max(0))
    }

    pub fn hero_upgrade_bonus(&self) -> i32 {
        self.clamped_hero_upgrade_level() * self.hero_value_per_upgrade
    }

    /// Raw strength of the planet upgrade, whatever mode spends it
    pub fn planet_upgrade_power(&self) -> i32 {
        self.clamped_planet_upgrade_level() * self.planet_value_per_upgrade
    }

    /// Planet power spent as a flat defender bonus (zero outside flat mode)
    pub fn planet_upgrade_bonus(&self) -> i32 {
        match self.planet_upgrade_mode {
            PlanetUpgradeMode::FlatBonus => self.planet_upgrade_power(),
            _ => 0,
        }
    }

    /// Rerolls of the defender's lowest die granted each round
    pub fn defender_rerolls_per_round(&self) -> u32 {
        match self.planet_upgrade_mode {
            PlanetUpgradeMode::RerollLowestDefender => {
                self.planet_upgrade_power().clamp(0, MAX_DEFENDER_REROLLS) as u32
            }
            _ => 0,
        }
    }

    /// Pips removed from the attacker's highest die each round
    pub fn attacker_highest_die_penalty(&self) -> u32 {
        match self.planet_upgrade_mode {
            PlanetUpgradeMode::SuppressAttackerHighest => {
                self.planet_upgrade_power().clamp(0, MAX_ATTACKER_HIGHEST_PENALTY) as u32
            }
            _ => 0,
        }
    }

    pub fn attacker_total_bonus(&self) -> i32 {
        self.attacker_ability + self.hero_upgrade_bonus()
    }

    pub fn defender_total_bonus(&self) -> i32 {
        self.defender_ability + self.planet_upgrade_bonus()
    }

    /// Whether the planet upgrade is active in a non-default mode
    pub fn has_special_planet_mode(&self) -> bool {
        self.clamped_planet_upgrade_level() > 0
            && self.planet_upgrade_mode != PlanetUpgradeMode::FlatBonus
    }
}
