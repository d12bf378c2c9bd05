//! Core types shared by the combat engine

use serde::{Deserialize, Serialize};
use std::fmt;

/// Standard die used for every roll that is not upgraded by a hero
pub const STANDARD_DIE: u32 = 6;

/// Die sizes a hero may carry
pub const HERO_DIE_SIZES: [u32; 4] = [6, 8, 10, 12];

/// Which side of a battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Attacker,
    Defender,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Attacker => write!(f, "attacker"),
            Side::Defender => write!(f, "defender"),
        }
    }
}

/// Attacker-only upgrade that swaps one d6 for a larger die
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub name: String,
    pub die_size: u32,
}

impl Hero {
    pub fn new(name: impl Into<String>, die_size: u32) -> Self {
        Hero {
            name: name.into(),
            die_size,
        }
    }
}

impl fmt::Display for Hero {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (d{})", self.name, self.die_size)
    }
}

/// Passive effect a defensive structure provides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StructureEffect {
    /// Negates one defender loss per round
    Absorb,
    /// Grants the defender one extra die per round
    ExtraDefenderDie,
}

/// Defender-side catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Structure {
    pub name: String,
    pub effect: StructureEffect,
    #[serde(default)]
    pub description: String,
}

impl Structure {
    pub fn new(name: impl Into<String>, effect: StructureEffect) -> Self {
        Structure {
            name: name.into(),
            effect,
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// One side's state for the duration of a battle
///
/// Structures are borrowed from a catalog; the army never owns them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Army<'a> {
    pub units: u32,
    pub hero: Option<Hero>,
    pub structures: Vec<&'a Structure>,
}

impl<'a> Army<'a> {
    /// Create an army with no hero and no structures
    pub fn new(units: u32) -> Self {
        Army {
            units,
            hero: None,
            structures: Vec::new(),
        }
    }

    pub fn with_hero(mut self, hero: Hero) -> Self {
        self.hero = Some(hero);
        self
    }

    pub fn with_structures(mut self, structures: Vec<&'a Structure>) -> Self {
        self.structures = structures;
        self
    }

    /// Remove units, never dropping below zero
    pub fn take_losses(&mut self, losses: u32) {
        self.units = self.units.saturating_sub(losses);
    }

    /// Whether this army still has enough units to launch an attack
    pub fn can_attack(&self) -> bool {
        self.units > 1
    }

    pub fn is_eliminated(&self) -> bool {
        self.units == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_display() {
        let hero = Hero::new("General", 10);
        assert_eq!(hero.to_string(), "General (d10)");
    }

    #[test]
    fn test_take_losses_saturates() {
        let mut army = Army::new(1);
        army.take_losses(2);
        assert_eq!(army.units, 0);
        assert!(army.is_eliminated());
    }

    #[test]
    fn test_can_attack_needs_two_units() {
        assert!(!Army::new(1).can_attack());
        assert!(Army::new(2).can_attack());
    }

    #[test]
    fn test_structure_effect_serde_names() {
        let s: Structure = toml::from_str(
            r#"
name = "Fortress"
effect = "absorb"
"#,
        )
        .unwrap();
        assert_eq!(s.effect, StructureEffect::Absorb);
        assert!(s.description.is_empty());
    }
}
