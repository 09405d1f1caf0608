//! Step-response performance metrics.
//!
//! Computes final value, peak, overshoot, rise time, settling time and
//! actuator saturation from a recorded closed-loop run.

use pf_controls::OutputLimits;
use pf_core::{Tolerances, nearly_equal};
use pf_sim::SimRecord;
use serde::{Deserialize, Serialize};

/// Settling band as a fraction of the setpoint.
pub const SETTLING_BAND: f64 = 0.02;

/// Standard step-response metrics. Fields that cannot be computed are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StepMetrics {
    /// Last recorded output
    pub final_value: Option<f64>,
    /// Maximum recorded output
    pub peak_value: Option<f64>,
    /// Time of the first sample reaching the peak (seconds)
    pub peak_time_s: Option<f64>,
    /// `(peak - setpoint) / setpoint * 100`; negative when the output never reaches the setpoint
    pub overshoot_pct: Option<f64>,
    /// 10% to 90% rise time (seconds)
    pub rise_time_s: Option<f64>,
    /// Time after which the output stays within ±2% of the setpoint (seconds)
    pub settling_time_s: Option<f64>,
    /// `setpoint - final_value`
    pub steady_state_error: Option<f64>,
    /// Percentage of samples with the control signal at a limit
    pub saturation_pct: Option<f64>,
}

impl StepMetrics {
    /// Returns true if at least some metrics were computed
    pub fn has_data(&self) -> bool {
        self.final_value.is_some()
    }
}

fn zero_setpoint(setpoint: f64) -> bool {
    nearly_equal(setpoint, 0.0, Tolerances::default())
}

/// Compute metrics for one run tracking a constant `setpoint`.
pub fn compute_step_metrics(
    record: &SimRecord,
    setpoint: f64,
    limits: &OutputLimits,
) -> StepMetrics {
    let Some(&final_value) = record.y.last() else {
        return StepMetrics::default();
    };

    let mut metrics = StepMetrics {
        final_value: Some(final_value),
        steady_state_error: Some(setpoint - final_value),
        ..StepMetrics::default()
    };

    // First index holding the maximum
    let (peak_idx, peak) = record
        .y
        .iter()
        .copied()
        .enumerate()
        .fold((0, f64::NEG_INFINITY), |(bi, bv), (i, v)| {
            if v > bv { (i, v) } else { (bi, bv) }
        });
    metrics.peak_value = Some(peak);
    metrics.peak_time_s = record.t.get(peak_idx).copied();

    if !zero_setpoint(setpoint) {
        metrics.overshoot_pct = Some((peak - setpoint) / setpoint * 100.0);
        metrics.rise_time_s = compute_rise_time(record, setpoint, 0.1, 0.9);
        metrics.settling_time_s = compute_settling_time(record, setpoint, SETTLING_BAND);
    }

    let saturated = record.u.iter().filter(|&&u| limits.is_saturated(u)).count();
    metrics.saturation_pct = Some(saturated as f64 / record.len() as f64 * 100.0);

    metrics
}

/// Time of the first sample whose output reaches `fraction` of the setpoint.
fn time_to_fraction(record: &SimRecord, setpoint: f64, fraction: f64) -> Option<f64> {
    record
        .samples()
        .find(|&(_, y, _)| y / setpoint >= fraction)
        .map(|(t, _, _)| t)
}

fn compute_rise_time(record: &SimRecord, setpoint: f64, low: f64, high: f64) -> Option<f64> {
    let t_low = time_to_fraction(record, setpoint, low)?;
    let t_high = time_to_fraction(record, setpoint, high)?;
    Some(t_high - t_low)
}

fn compute_settling_time(record: &SimRecord, setpoint: f64, band: f64) -> Option<f64> {
    let tolerance = band * setpoint.abs();
    let outside = |y: f64| y.is_nan() || (y - setpoint).abs() > tolerance;

    match record.y.iter().rposition(|&y| outside(y)) {
        None => record.t.first().copied(),
        Some(last) if last + 1 < record.len() => Some(record.t[last + 1]),
        Some(_) => None,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn metrics_are_consistent(
            y in prop::collection::vec(-10.0_f64..10.0, 1..64),
            setpoint in 0.1_f64..5.0,
        ) {
            let u: Vec<f64> = y.iter().map(|v| (v * 3.0).clamp(-10.0, 10.0)).collect();
            let record = SimRecord {
                t: (0..y.len()).map(|k| k as f64 * 0.01).collect(),
                y: y.clone(),
                u,
            };
            let metrics = compute_step_metrics(&record, setpoint, &OutputLimits::default());

            prop_assert!(metrics.peak_value.unwrap() >= metrics.final_value.unwrap());
            let sat = metrics.saturation_pct.unwrap();
            prop_assert!((0.0..=100.0).contains(&sat));
            if let Some(rise) = metrics.rise_time_s {
                // A sample at 90% is also at 10%, so the 10% crossing comes first
                prop_assert!(rise >= 0.0);
            }
        }
    }
}
