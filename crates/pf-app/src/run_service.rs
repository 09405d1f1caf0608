//! Run execution service.

use std::path::Path;
use std::time::Instant;

use pf_project::{ProjectError, Scenario};
use pf_sim::{SimConfig, SimRecord, simulate};

use crate::error::{AppError, AppResult};
use crate::metrics::{StepMetrics, compute_step_metrics};

/// Outcome of one closed-loop run.
#[derive(Debug, Clone)]
pub struct RunResponse {
    pub config: SimConfig,
    pub record: SimRecord,
    pub metrics: StepMetrics,
    /// Wall time spent in the simulator (seconds)
    pub solve_time_s: f64,
}

/// Run a single configuration and compute its metrics.
pub fn run_config(config: &SimConfig) -> AppResult<RunResponse> {
    let start = Instant::now();
    let record = simulate(config)?;
    let solve_time_s = start.elapsed().as_secs_f64();

    let metrics = compute_step_metrics(&record, config.setpoint, &config.output_limits);

    tracing::info!(
        samples = record.len(),
        solve_time_s,
        final_value = ?metrics.final_value,
        overshoot_pct = ?metrics.overshoot_pct,
        "run complete"
    );

    Ok(RunResponse {
        config: config.clone(),
        record,
        metrics,
        solve_time_s,
    })
}

/// Load a scenario file.
pub fn load_scenario(path: &Path) -> AppResult<Scenario> {
    pf_project::load(path).map_err(|e| match e {
        ProjectError::Io(source) => AppError::ScenarioFileRead {
            path: path.to_path_buf(),
            message: source.to_string(),
        },
        other => other.into(),
    })
}

/// Load a scenario file and run its base configuration.
pub fn run_scenario(path: &Path) -> AppResult<RunResponse> {
    let scenario = load_scenario(path)?;
    tracing::info!(name = %scenario.name, "running scenario");
    run_config(&scenario.sim)
}
