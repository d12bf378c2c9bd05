//! Input limits - clamp and default raw user input
//!
//! The combat engine trusts whatever tuning it is given. Front ends run raw
//! values through these limits first.

use super::ConfigError;
use crate::tuning::CombatTuning;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Bounds for user-supplied battle parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputLimits {
    pub ability_min: i32,
    pub ability_max: i32,
    pub value_per_upgrade_min: i32,
    pub value_per_upgrade_max: i32,
    pub max_hero_upgrade_level: i32,
    pub max_planet_upgrade_level: i32,
    pub min_army_units: u32,
    pub min_simulation_attacker_units: u32,
    pub min_battles: u32,
    pub max_battles: u32,
    pub default_battles: u32,
    /// Upper bound on either side for exact odds queries
    pub exact_max_units: u32,
}

impl Default for InputLimits {
    fn default() -> Self {
        InputLimits {
            ability_min: -6,
            ability_max: 6,
            value_per_upgrade_min: 0,
            value_per_upgrade_max: 4,
            max_hero_upgrade_level: 3,
            max_planet_upgrade_level: 3,
            min_army_units: 1,
            min_simulation_attacker_units: 2,
            min_battles: 100,
            max_battles: 50_000,
            default_battles: 10_000,
            exact_max_units: 50,
        }
    }
}

fn clamp_u32(raw: i64, min: u32, max: u32) -> u32 {
    raw.clamp(min as i64, max.max(min) as i64) as u32
}

impl InputLimits {
    /// Reject limits whose ranges are inverted
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ranges = [
            ("ability", self.ability_min as i64, self.ability_max as i64),
            (
                "value_per_upgrade",
                self.value_per_upgrade_min as i64,
                self.value_per_upgrade_max as i64,
            ),
            ("battles", self.min_battles as i64, self.max_battles as i64),
            ("upgrade level", 0, self.max_hero_upgrade_level.min(self.max_planet_upgrade_level) as i64),
        ];
        for (name, min, max) in ranges {
            if min > max {
                return Err(ConfigError::ValidationError(format!(
                    "{} range is empty ({}..={})",
                    name, min, max
                )));
            }
        }
        Ok(())
    }

    /// Clamp every tuning field into range and pin the max levels
    pub fn clamp_tuning(&self, tuning: &CombatTuning) -> CombatTuning {
        let ability = |v: i32| v.clamp(self.ability_min, self.ability_max.max(self.ability_min));
        let value = |v: i32| {
            v.clamp(
                self.value_per_upgrade_min,
                self.value_per_upgrade_max.max(self.value_per_upgrade_min),
            )
        };
        let max_hero = self.max_hero_upgrade_level.max(0);
        let max_planet = self.max_planet_upgrade_level.max(0);

        CombatTuning {
            attacker_ability: ability(tuning.attacker_ability),
            defender_ability: ability(tuning.defender_ability),
            hero_upgrade_level: tuning.hero_upgrade_level.clamp(0, max_hero),
            planet_upgrade_level: tuning.planet_upgrade_level.clamp(0, max_planet),
            hero_value_per_upgrade: value(tuning.hero_value_per_upgrade),
            planet_value_per_upgrade: value(tuning.planet_value_per_upgrade),
            max_hero_upgrade_level: max_hero,
            max_planet_upgrade_level: max_planet,
            planet_upgrade_mode: tuning.planet_upgrade_mode,
        }
    }

    /// Units for a battle or round
    pub fn army_units(&self, raw: i64) -> u32 {
        clamp_u32(raw, self.min_army_units, u32::MAX)
    }

    /// Attacking units for a simulation, which must be able to attack
    pub fn simulation_attacker_units(&self, raw: i64) -> u32 {
        clamp_u32(raw, self.min_simulation_attacker_units, u32::MAX)
    }

    /// Battle count for a simulation, defaulted when missing
    pub fn battles(&self, raw: Option<i64>) -> u32 {
        clamp_u32(
            raw.unwrap_or(self.default_battles as i64),
            self.min_battles,
            self.max_battles,
        )
    }

    /// Army sizes for an exact odds query
    pub fn exact_units(&self, attacker: i64, defender: i64) -> (u32, u32) {
        (
            clamp_u32(attacker, 2, self.exact_max_units),
            clamp_u32(defender, 1, self.exact_max_units),
        )
    }
}

/// Load limits from a TOML file
pub fn load_limits(path: &Path) -> Result<InputLimits, ConfigError> {
    let limits: InputLimits = super::load_toml(path)?;
    limits.validate()?;
    Ok(limits)
}

/// Load limits from a TOML string
pub fn parse_limits(content: &str) -> Result<InputLimits, ConfigError> {
    let limits: InputLimits = super::parse_toml(content)?;
    limits.validate()?;
    Ok(limits)
}

/// Built-in limits
pub fn default_limits() -> InputLimits {
    let toml = include_str!("../../config/limits.toml");
    parse_limits(toml).unwrap_or_default()
}
