//! PID control law and actuator saturation for pidflow.
//!
//! The controller is a plain discrete-time PID:
//! - Proportional, integral and derivative terms of the tracking error
//! - Backward-difference derivative, zero on the first sample
//! - Output clamped to a configurable actuator range
//!
//! Only the applied output is saturated. The integral accumulator keeps
//! integrating while the actuator sits at a limit, so long saturated
//! stretches wind the integrator up.

pub mod controller;
pub mod error;
pub mod limits;

pub use controller::{PidController, PidGains, PidOutput, PidState};
pub use error::{ControlError, ControlResult};
pub use limits::OutputLimits;
