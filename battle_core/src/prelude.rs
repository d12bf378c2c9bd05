//! Prelude module for convenient imports
//!
//! ```rust
//! use battle_core::prelude::*;
//! ```

// Core types
pub use crate::types::{Army, Hero, Side, Structure, StructureEffect};

// Dice
pub use crate::dice::DiceSource;

// Combat
pub use crate::combat::{resolve_battle_with_rng, resolve_round_with_rng, BattleResult, ResolveMode, RoundResult};

// Tuning
pub use crate::tuning::{CombatTuning, PlanetUpgradeMode};

// Probability
pub use crate::probability::{single_roll_table, win_probability_exact, ExactOdds};

// Simulation
pub use crate::simulation::{run_simulation, run_simulation_parallel, SimulationConfig, SimulationResult};

// Config
pub use crate::config::{default_catalog, default_limits, Catalog, InputLimits};
