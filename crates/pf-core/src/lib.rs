//! pf-core: stable foundation for pidflow.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;

pub use error::{PfError, PfResult};
pub use numeric::*;
