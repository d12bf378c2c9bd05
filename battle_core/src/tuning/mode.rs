//! Planet upgrade mode

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// How the defender's planet upgrade power is spent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanetUpgradeMode {
    #[default]
    FlatBonus,
    RerollLowestDefender,
    SuppressAttackerHighest,
}

impl PlanetUpgradeMode {
    pub fn all() -> &'static [PlanetUpgradeMode] {
        &[
            PlanetUpgradeMode::FlatBonus,
            PlanetUpgradeMode::RerollLowestDefender,
            PlanetUpgradeMode::SuppressAttackerHighest,
        ]
    }

    /// Parse a mode name; anything unrecognized falls back to `FlatBonus`
    pub fn normalize(raw: &str) -> Self {
        match raw.trim() {
            "reroll_lowest_defender" => PlanetUpgradeMode::RerollLowestDefender,
            "suppress_attacker_highest" => PlanetUpgradeMode::SuppressAttackerHighest,
            _ => PlanetUpgradeMode::FlatBonus,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlanetUpgradeMode::FlatBonus => "flat_bonus",
            PlanetUpgradeMode::RerollLowestDefender => "reroll_lowest_defender",
            PlanetUpgradeMode::SuppressAttackerHighest => "suppress_attacker_highest",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PlanetUpgradeMode::FlatBonus => "Flat Defender Bonus",
            PlanetUpgradeMode::RerollLowestDefender => "Reroll Lowest Defender Die",
            PlanetUpgradeMode::SuppressAttackerHighest => "Suppress Highest Attacker Die",
        }
    }

    pub fn help(&self) -> &'static str {
        match self {
            PlanetUpgradeMode::FlatBonus => {
                "Each level adds a numeric defender comparison bonus."
            }
            PlanetUpgradeMode::RerollLowestDefender => {
                "Each level grants reroll power (up to 2 rerolls) on the defender's lowest die each round."
            }
            PlanetUpgradeMode::SuppressAttackerHighest => {
                "Each level reduces the attacker's top die (up to -3) before comparisons."
            }
        }
    }
}

impl From<&str> for PlanetUpgradeMode {
    fn from(raw: &str) -> Self {
        PlanetUpgradeMode::normalize(raw)
    }
}

impl fmt::Display for PlanetUpgradeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PlanetUpgradeMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(PlanetUpgradeMode::normalize(&raw))
    }
}
