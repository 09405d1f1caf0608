//! Closed-loop PID + second-order plant simulation for pidflow.
//!
//! Provides:
//! - Second-order linear plant in state-space form
//! - Fixed-step forward Euler integrator
//! - Closed-loop runner recording time, output and control series

pub mod error;
pub mod integrator;
pub mod model;
pub mod plant;
pub mod sim;

pub use error::{SimError, SimResult};
pub use integrator::{ForwardEuler, Integrator};
pub use model::TransientModel;
pub use plant::{PlantState, SecondOrderPlant};
pub use sim::{MAX_STEPS, SimConfig, SimRecord, simulate, simulate_with, step_count};
