//! Parallel parameter sweeps.
//!
//! Every point is an independent run with its own plant and controller
//! state, so points are spread across the rayon pool.

use pf_project::SweepDef;
use pf_sim::{SimConfig, simulate};
use rayon::prelude::*;

use crate::error::{AppError, AppResult};
use crate::metrics::{StepMetrics, compute_step_metrics};

/// Metrics for one point of a sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepPointResult {
    /// Value of the swept parameter
    pub value: f64,
    pub metrics: StepMetrics,
}

/// Run `base` once per sweep point. Results come back in sweep order.
pub fn run_sweep(base: &SimConfig, sweep: &SweepDef) -> AppResult<Vec<SweepPointResult>> {
    if sweep.num_points == 0 {
        return Err(AppError::InvalidInput(
            "sweep must have at least one point".to_string(),
        ));
    }
    base.validate()?;

    let points = sweep.generate_points();
    tracing::info!(%sweep, "running sweep");

    points
        .par_iter()
        .map(|&value| -> AppResult<SweepPointResult> {
            let cfg = sweep.parameter.apply(base, value);
            let record = simulate(&cfg)?;
            Ok(SweepPointResult {
                value,
                metrics: compute_step_metrics(&record, cfg.setpoint, &cfg.output_limits),
            })
        })
        .collect()
}
