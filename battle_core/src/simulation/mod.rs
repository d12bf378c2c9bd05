//! Monte Carlo battle simulator.
//!
//! Runs thousands of auto-resolved battles with fresh armies and aggregates:
//! - Win counts and percentages for each side
//! - Average battle length
//! - Average survivors and losses, overall and split by winner
//!
//! Battles go through the same resolver as single battles, so simulated
//! numbers always match real play under the same tuning.

mod config;
mod report;
mod runner;

pub use config::SimulationConfig;
pub use report::SimulationResult;
pub use runner::{run_simulation, run_simulation_parallel, SIMULATION_CHUNK_SIZE};
