//! Error types for the pf-app service layer.

use std::path::PathBuf;

/// Application error type wrapping the backend crates' errors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Scenario error: {0}")]
    Scenario(String),

    #[error("Failed to read scenario file: {path}: {message}")]
    ScenarioFileRead { path: PathBuf, message: String },

    #[error("Simulation error: {0}")]
    Simulation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for pf-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<pf_project::ProjectError> for AppError {
    fn from(err: pf_project::ProjectError) -> Self {
        AppError::Scenario(err.to_string())
    }
}

impl From<pf_sim::SimError> for AppError {
    fn from(err: pf_sim::SimError) -> Self {
        AppError::Simulation(err.to_string())
    }
}
