//! Actuator saturation limits.

use crate::error::{ControlError, ControlResult};
use pf_core::ensure_finite;
use serde::{Deserialize, Serialize};

/// Default symmetric actuator range.
pub const DEFAULT_OUTPUT_LIMIT: f64 = 10.0;

/// Closed interval `[min, max]` the applied control signal is clamped to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutputLimits {
    /// Lower actuator limit.
    pub min: f64,
    /// Upper actuator limit.
    pub max: f64,
}

impl OutputLimits {
    /// Create a new limit pair.
    ///
    /// # Errors
    ///
    /// Returns error if either bound is not finite or `min > max`.
    pub fn new(min: f64, max: f64) -> ControlResult<Self> {
        let limits = Self { min, max };
        limits.validate()?;
        Ok(limits)
    }

    /// Symmetric range `[-limit, limit]`.
    pub fn symmetric(limit: f64) -> ControlResult<Self> {
        Self::new(-limit, limit)
    }

    /// Check the bounds. Deserialized limits skip `new`, so callers
    /// validate before use.
    pub fn validate(&self) -> ControlResult<()> {
        ensure_finite(self.min, "output limit min")?;
        ensure_finite(self.max, "output limit max")?;
        if self.min > self.max {
            return Err(ControlError::InvalidArg {
                what: "output limit min must not exceed max",
            });
        }
        Ok(())
    }

    /// Clamp a raw control value into the actuator range.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// True when `value` sits on (or beyond) either limit.
    pub fn is_saturated(&self, value: f64) -> bool {
        value <= self.min || value >= self.max
    }

    /// True when `value` lies inside the closed range.
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl Default for OutputLimits {
    fn default() -> Self {
        Self {
            min: -DEFAULT_OUTPUT_LIMIT,
            max: DEFAULT_OUTPUT_LIMIT,
        }
    }
}
