//! CLI error type

use battle_core::{ConfigError, ProbabilityError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Probability(#[from] ProbabilityError),
    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
}
