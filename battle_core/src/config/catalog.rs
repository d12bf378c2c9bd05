//! Catalog loading - hero tiers and structure definitions

use super::ConfigError;
use crate::types::{Hero, Structure, HERO_DIE_SIZES};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::OnceLock;
use tracing::warn;

/// Read-only registry of heroes and structures, keyed by id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Hero tier id -> die size
    #[serde(default)]
    pub heroes: BTreeMap<String, u32>,
    #[serde(default)]
    pub structures: BTreeMap<String, Structure>,
}

impl Catalog {
    /// Build a hero for a tier id
    pub fn hero(&self, key: &str) -> Option<Hero> {
        self.heroes.get(key).map(|&die_size| Hero::new(key, die_size))
    }

    pub fn structure(&self, key: &str) -> Option<&Structure> {
        self.structures.get(key)
    }

    /// Resolve structure ids, silently skipping unknown ones
    pub fn structures_for<I, S>(&self, keys: I) -> Vec<&Structure>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        keys.into_iter()
            .filter_map(|key| self.structure(key.as_ref()))
            .collect()
    }

    /// Reject entries the engine cannot represent
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, &die_size) in &self.heroes {
            if !HERO_DIE_SIZES.contains(&die_size) {
                return Err(ConfigError::ValidationError(format!(
                    "hero '{}' has die size d{}, expected one of {:?}",
                    key, die_size, HERO_DIE_SIZES
                )));
            }
        }
        for (key, structure) in &self.structures {
            if structure.name.trim().is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "structure '{}' has no name",
                    key
                )));
            }
        }
        Ok(())
    }
}

/// Load a catalog from a TOML file
pub fn load_catalog(path: &Path) -> Result<Catalog, ConfigError> {
    let catalog: Catalog = super::load_toml(path)?;
    catalog.validate()?;
    Ok(catalog)
}

/// Load a catalog from a TOML string
pub fn parse_catalog(content: &str) -> Result<Catalog, ConfigError> {
    let catalog: Catalog = super::parse_toml(content)?;
    catalog.validate()?;
    Ok(catalog)
}

/// The built-in catalog, parsed once and shared for the life of the process
pub fn default_catalog() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(|| {
        let toml = include_str!("../../config/catalog.toml");
        parse_catalog(toml).unwrap_or_else(|e| {
            warn!(error = %e, "built-in catalog failed to load, using an empty catalog");
            Catalog::default()
        })
    })
}
