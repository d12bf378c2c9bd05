//! battle_core - Risk-style dice combat for territory strategy games
//!
//! This library provides:
//! - Dice: d6 rolls, hero dice and defender rerolls behind a `DiceSource`
//! - Structures: absorb and extra-die fortifications on the defending side
//! - Tuning: ability modifiers and hero/planet upgrades layered on vanilla rules
//! - Combat Resolution: single rounds and full battles between two armies
//! - Probability: exact single-roll tables and dynamic-programming win odds
//! - Simulation: Monte Carlo batches, sequential or across rayon workers

pub mod combat;
pub mod config;
pub mod dice;
pub mod prelude;
pub mod probability;
pub mod simulation;
pub mod structures;
pub mod tuning;
pub mod types;

// Re-export core types for convenience
pub use combat::{
    resolve_battle, resolve_battle_with_rng, resolve_round, resolve_round_with_rng, BattleResult,
    ResolveMode, RoundResult,
};
pub use config::{default_catalog, default_limits, Catalog, ConfigError, InputLimits};
pub use dice::DiceSource;
pub use probability::{win_probability_exact, ExactOdds, ProbabilityError};
pub use simulation::{run_simulation, run_simulation_parallel, SimulationConfig, SimulationResult};
pub use tuning::{CombatTuning, PlanetUpgradeMode};
pub use types::{Army, Hero, Side, Structure, StructureEffect};
