//! Error types for control system operations.

use thiserror::Error;

/// Result type for control system operations.
pub type ControlResult<T> = Result<T, ControlError>;

/// Errors that can occur in control system operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ControlError {
    /// Invalid argument provided to a control function.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

impl From<pf_core::PfError> for ControlError {
    fn from(e: pf_core::PfError) -> Self {
        match e {
            pf_core::PfError::NonFinite { what, .. } | pf_core::PfError::InvalidArg { what } => {
                ControlError::InvalidArg { what }
            }
        }
    }
}
