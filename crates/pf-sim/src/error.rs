//! Error types for simulation operations.

use thiserror::Error;

/// Errors encountered while setting up a simulation run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("Invalid configuration: {what}")]
    InvalidConfig { what: &'static str },

    #[error("Controller error: {message}")]
    Control { message: String },
}

pub type SimResult<T> = Result<T, SimError>;

impl From<pf_controls::ControlError> for SimError {
    fn from(e: pf_controls::ControlError) -> Self {
        SimError::Control {
            message: e.to_string(),
        }
    }
}

impl From<pf_core::PfError> for SimError {
    fn from(e: pf_core::PfError) -> Self {
        match e {
            pf_core::PfError::NonFinite { what, .. } | pf_core::PfError::InvalidArg { what } => {
                SimError::InvalidConfig { what }
            }
        }
    }
}
