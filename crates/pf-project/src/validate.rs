//! Scenario validation logic.

use crate::schema::{LATEST_VERSION, Scenario};
use crate::sweep::{SweepDef, SweepParameter};

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

fn invalid(field: &str, value: impl ToString, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

pub fn validate_scenario(scenario: &Scenario) -> Result<(), ValidationError> {
    if scenario.version == 0 || scenario.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: scenario.version,
        });
    }

    if scenario.name.trim().is_empty() {
        return Err(invalid("name", &scenario.name, "must not be empty"));
    }

    let sim = &scenario.sim;
    if !(sim.time_step.is_finite() && sim.time_step > 0.0) {
        return Err(invalid(
            "sim.time_step",
            sim.time_step,
            "must be positive and finite",
        ));
    }
    if !(sim.duration.is_finite() && sim.duration > 0.0) {
        return Err(invalid(
            "sim.duration",
            sim.duration,
            "must be positive and finite",
        ));
    }
    if let Err(e) = sim.output_limits.validate() {
        return Err(invalid(
            "sim.output_limits",
            format!("[{}, {}]", sim.output_limits.min, sim.output_limits.max),
            &e.to_string(),
        ));
    }

    if let Some(sweep) = &scenario.sweep {
        validate_sweep(sweep)?;
    }

    Ok(())
}

fn validate_sweep(sweep: &SweepDef) -> Result<(), ValidationError> {
    if sweep.num_points < 2 {
        return Err(invalid(
            "sweep.num_points",
            sweep.num_points,
            "sweep must have at least 2 points",
        ));
    }
    if !(sweep.start.is_finite() && sweep.end.is_finite()) {
        return Err(invalid(
            "sweep.start/end",
            format!("{}..{}", sweep.start, sweep.end),
            "bounds must be finite",
        ));
    }
    if (sweep.start - sweep.end).abs() < 1e-12 {
        return Err(invalid(
            "sweep.start/end",
            format!("{}..{}", sweep.start, sweep.end),
            "start and end values must be different",
        ));
    }
    if sweep.parameter == SweepParameter::Setpoint && sweep.start.signum() != sweep.end.signum()
    {
        // Overshoot is relative to the setpoint and undefined at zero
        return Err(invalid(
            "sweep.start/end",
            format!("{}..{}", sweep.start, sweep.end),
            "setpoint sweeps must not cross zero",
        ));
    }
    Ok(())
}
