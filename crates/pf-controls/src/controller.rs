//! Discrete PID controller.
//!
//! Control law per sample:
//! - error `e = sp - pv`
//! - integral `I += e * dt` (never clamped)
//! - derivative `(e - e_prev) / dt`, or zero on the first sample
//! - output `clamp(kp * e + ki * I + kd * D)`

use crate::limits::OutputLimits;
use serde::{Deserialize, Serialize};

/// Parallel-form PID gains.
///
/// Any real values are accepted, including zero and negative gains.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PidGains {
    /// Proportional gain.
    pub kp: f64,
    /// Integral gain.
    pub ki: f64,
    /// Derivative gain.
    pub kd: f64,
}

impl PidGains {
    pub fn new(kp: f64, ki: f64, kd: f64) -> Self {
        Self { kp, ki, kd }
    }
}

impl Default for PidGains {
    fn default() -> Self {
        Self {
            kp: 3.0,
            ki: 1.0,
            kd: 0.2,
        }
    }
}

/// PID controller configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PidController {
    /// Controller gains.
    pub gains: PidGains,
    /// Actuator range applied to the output.
    pub limits: OutputLimits,
}

impl PidController {
    /// Create a new PID controller.
    ///
    /// # Arguments
    ///
    /// * `gains` - Proportional, integral and derivative gains
    /// * `limits` - Actuator saturation range
    pub fn new(gains: PidGains, limits: OutputLimits) -> Self {
        Self { gains, limits }
    }

    /// Compute controller output.
    ///
    /// # Arguments
    ///
    /// * `state` - Controller state (integral and previous error)
    /// * `pv` - Process variable (measured value)
    /// * `sp` - Setpoint (desired value)
    /// * `dt` - Sample period (seconds), must be positive
    ///
    /// # Returns
    ///
    /// Updated state and the output breakdown.
    pub fn update(&self, state: &PidState, pv: f64, sp: f64, dt: f64) -> (PidState, PidOutput) {
        let error = sp - pv;

        let integral = state.integral + error * dt;

        let derivative = if state.primed {
            (error - state.prev_error) / dt
        } else {
            0.0
        };

        let p_term = self.gains.kp * error;
        let i_term = self.gains.ki * integral;
        let d_term = self.gains.kd * derivative;

        let raw = p_term + i_term + d_term;
        let output = self.limits.clamp(raw);

        let new_state = PidState {
            integral,
            prev_error: error,
            primed: true,
        };

        (
            new_state,
            PidOutput {
                output,
                raw,
                p_term,
                i_term,
                d_term,
            },
        )
    }
}

impl Default for PidController {
    fn default() -> Self {
        Self::new(PidGains::default(), OutputLimits::default())
    }
}

/// PID controller state.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PidState {
    /// Integral accumulator.
    pub integral: f64,
    /// Error seen on the previous sample.
    pub prev_error: f64,
    /// False until the first sample has been processed.
    pub primed: bool,
}

/// Result of one controller update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PidOutput {
    /// Saturated output applied to the plant.
    pub output: f64,
    /// Output before saturation.
    pub raw: f64,
    pub p_term: f64,
    pub i_term: f64,
    pub d_term: f64,
}

impl PidOutput {
    /// True when saturation changed the output.
    pub fn is_clipped(&self) -> bool {
        self.output != self.raw
    }
}
