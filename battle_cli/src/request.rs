//! Request building - turn raw command-line values into engine inputs
//!
//! Every number passes through `InputLimits` before it reaches the engine,
//! and catalog keys that do not resolve are dropped with a warning.

use battle_core::config::load_tuning;
use battle_core::{
    Army, Catalog, CombatTuning, ConfigError, Hero, InputLimits, PlanetUpgradeMode, Structure,
};
use clap::Args;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Balance knobs shared by every fighting subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct TuningArgs {
    /// TOML preset to start from; flags below override it
    #[arg(long, value_name = "FILE")]
    pub tuning: Option<PathBuf>,

    /// Flat modifier on each attacker die
    #[arg(long, allow_negative_numbers = true)]
    pub attacker_ability: Option<i32>,

    /// Flat modifier on each defender die
    #[arg(long, allow_negative_numbers = true)]
    pub defender_ability: Option<i32>,

    #[arg(long, allow_negative_numbers = true)]
    pub hero_level: Option<i32>,

    #[arg(long, allow_negative_numbers = true)]
    pub planet_level: Option<i32>,

    /// Attacker bonus per hero upgrade level
    #[arg(long, allow_negative_numbers = true)]
    pub hero_value: Option<i32>,

    /// Planet upgrade power per level
    #[arg(long, allow_negative_numbers = true)]
    pub planet_value: Option<i32>,

    /// flat_bonus, reroll_lowest_defender or suppress_attacker_highest
    #[arg(long, value_name = "MODE")]
    pub planet_mode: Option<String>,
}

impl TuningArgs {
    /// Build the clamped tuning for this request
    pub fn build(&self, limits: &InputLimits) -> Result<CombatTuning, ConfigError> {
        let mut tuning = match &self.tuning {
            Some(path) => load_tuning(path)?,
            None => CombatTuning::default(),
        };

        if let Some(v) = self.attacker_ability {
            tuning.attacker_ability = v;
        }
        if let Some(v) = self.defender_ability {
            tuning.defender_ability = v;
        }
        if let Some(v) = self.hero_level {
            tuning.hero_upgrade_level = v;
        }
        if let Some(v) = self.planet_level {
            tuning.planet_upgrade_level = v;
        }
        if let Some(v) = self.hero_value {
            tuning.hero_value_per_upgrade = v;
        }
        if let Some(v) = self.planet_value {
            tuning.planet_value_per_upgrade = v;
        }
        if let Some(mode) = &self.planet_mode {
            let parsed = PlanetUpgradeMode::normalize(mode);
            if parsed.as_str() != mode.trim() {
                warn!(mode = %mode, "unknown planet upgrade mode, using {}", parsed);
            }
            tuning.planet_upgrade_mode = parsed;
        }

        let clamped = limits.clamp_tuning(&tuning);
        if clamped != tuning {
            debug!(?tuning, ?clamped, "tuning clamped to input limits");
        }
        Ok(clamped)
    }
}

/// Armies and dice shared by every fighting subcommand
#[derive(Args, Debug, Clone)]
pub struct BattleArgs {
    /// Attacking units
    #[arg(short, long, default_value_t = 10, allow_negative_numbers = true)]
    pub attacker: i64,

    /// Defending units
    #[arg(short, long, default_value_t = 5, allow_negative_numbers = true)]
    pub defender: i64,

    /// Hero tier leading the attack (see `catalog`)
    #[arg(long, value_name = "TIER")]
    pub hero: Option<String>,

    /// Defender structure, repeatable
    #[arg(long = "structure", value_name = "KEY")]
    pub structures: Vec<String>,

    #[command(flatten)]
    pub tuning: TuningArgs,

    /// Seed for reproducible dice
    #[arg(long)]
    pub seed: Option<u64>,
}

impl BattleArgs {
    /// Attacking army with at least `min_units` units
    pub fn attacker_army(&self, catalog: &Catalog, min_units: u32) -> Army<'static> {
        let mut army = Army::new(clamp_min(self.attacker, min_units));
        if let Some(hero) = self.hero(catalog) {
            army = army.with_hero(hero);
        }
        army
    }

    pub fn defender_army<'a>(&self, catalog: &'a Catalog, limits: &InputLimits) -> Army<'a> {
        Army::new(limits.army_units(self.defender)).with_structures(self.structures(catalog))
    }

    pub fn hero(&self, catalog: &Catalog) -> Option<Hero> {
        let key = self.hero.as_deref()?;
        let hero = catalog.hero(key);
        if hero.is_none() {
            warn!(hero = key, "unknown hero tier, attacking without a hero");
        }
        hero
    }

    pub fn structures<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Structure> {
        for key in &self.structures {
            if catalog.structure(key).is_none() {
                warn!(structure = %key, "unknown structure, ignoring");
            }
        }
        catalog.structures_for(&self.structures)
    }

    /// Seeded generator when a seed was given, the thread RNG otherwise
    pub fn rng(&self) -> Box<dyn RngCore> {
        match self.seed {
            Some(seed) => Box::new(ChaCha8Rng::seed_from_u64(seed)),
            None => Box::new(rand::thread_rng()),
        }
    }
}

fn clamp_min(raw: i64, min: u32) -> u32 {
    raw.clamp(min as i64, u32::MAX as i64) as u32
}
