//! Shared application service layer for pidflow.
//!
//! Collaborators that consume simulation output: step-response metrics,
//! scenario runs, parallel parameter sweeps and CSV export. Used by the CLI.

pub mod error;
pub mod export;
pub mod metrics;
pub mod run_service;
pub mod sweep;

pub use error::{AppError, AppResult};
pub use export::{series_csv, write_series_csv};
pub use metrics::{StepMetrics, compute_step_metrics};
pub use run_service::{RunResponse, load_scenario, run_config, run_scenario};
pub use sweep::{SweepPointResult, run_sweep};
