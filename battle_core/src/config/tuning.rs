//! Tuning files - saved balance presets

use super::ConfigError;
use crate::tuning::CombatTuning;
use std::path::Path;
use tracing::debug;

fn check(tuning: CombatTuning) -> Result<CombatTuning, ConfigError> {
    if tuning.max_hero_upgrade_level < 0 || tuning.max_planet_upgrade_level < 0 {
        return Err(ConfigError::ValidationError(
            "max upgrade levels cannot be negative".to_string(),
        ));
    }
    debug!(?tuning, "loaded tuning");
    Ok(tuning)
}

/// Load a tuning preset from a TOML file. Missing keys keep their defaults.
pub fn load_tuning(path: &Path) -> Result<CombatTuning, ConfigError> {
    check(super::load_toml(path)?)
}

/// Load a tuning preset from a TOML string
pub fn parse_tuning(content: &str) -> Result<CombatTuning, ConfigError> {
    check(super::parse_toml(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::PlanetUpgradeMode;

    #[test]
    fn test_empty_file_is_vanilla() {
        let tuning = parse_tuning("").unwrap();
        assert_eq!(tuning, CombatTuning::vanilla());
        assert!(tuning.is_vanilla());
    }

    #[test]
    fn test_partial_preset() {
        let toml = r#"
attacker_ability = 1
planet_upgrade_level = 2
planet_upgrade_mode = "reroll_lowest_defender"
"#;
        let tuning = parse_tuning(toml).unwrap();
        assert_eq!(tuning.attacker_ability, 1);
        assert_eq!(tuning.planet_upgrade_level, 2);
        assert_eq!(tuning.planet_upgrade_mode, PlanetUpgradeMode::RerollLowestDefender);
        assert_eq!(tuning.hero_value_per_upgrade, 1);
        assert_eq!(tuning.defender_rerolls_per_round(), 2);
    }

    #[test]
    fn test_unknown_mode_falls_back_to_flat() {
        let tuning = parse_tuning(r#"planet_upgrade_mode = "orbital_strike""#).unwrap();
        assert_eq!(tuning.planet_upgrade_mode, PlanetUpgradeMode::FlatBonus);
    }

    #[test]
    fn test_negative_max_level_rejected() {
        assert!(matches!(
            parse_tuning("max_hero_upgrade_level = -1"),
            Err(ConfigError::ValidationError(_))
        ));
    }
}
