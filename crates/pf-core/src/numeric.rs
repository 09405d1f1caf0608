use crate::PfError;

/// Floating point type used throughout pidflow
pub type Real = f64;

/// Absolute/relative tolerance pair for float comparisons.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Tolerances {
    pub const fn new(abs: Real, rel: Real) -> Self {
        Self { abs, rel }
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self::new(1e-12, 1e-9)
    }
}

/// `|a - b|` within `tol.abs`, or within `tol.rel` of the larger magnitude.
pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    diff <= tol.abs || diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, PfError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(PfError::NonFinite { what, value: v })
    }
}

/// Accepts finite values strictly greater than zero.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, PfError> {
    if ensure_finite(v, what)? <= 0.0 {
        return Err(PfError::InvalidArg { what });
    }
    Ok(v)
}
