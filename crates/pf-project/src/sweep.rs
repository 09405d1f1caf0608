//! Parameter sweep definitions.
//!
//! A sweep varies one configuration field over a range of values. Each point
//! is an independent run of the base configuration with that field replaced.

use pf_sim::SimConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Configuration field a sweep varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepParameter {
    Kp,
    Ki,
    Kd,
    Setpoint,
    NaturalFrequency,
    DampingRatio,
    PlantGain,
}

impl SweepParameter {
    /// Copy of `base` with this parameter set to `value`.
    pub fn apply(&self, base: &SimConfig, value: f64) -> SimConfig {
        let mut cfg = base.clone();
        match self {
            Self::Kp => cfg.kp = value,
            Self::Ki => cfg.ki = value,
            Self::Kd => cfg.kd = value,
            Self::Setpoint => cfg.setpoint = value,
            Self::NaturalFrequency => cfg.natural_frequency = value,
            Self::DampingRatio => cfg.damping_ratio = value,
            Self::PlantGain => cfg.plant_gain = value,
        }
        cfg
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Kp => "kp",
            Self::Ki => "ki",
            Self::Kd => "kd",
            Self::Setpoint => "setpoint",
            Self::NaturalFrequency => "natural_frequency",
            Self::DampingRatio => "damping_ratio",
            Self::PlantGain => "plant_gain",
        }
    }
}

impl fmt::Display for SweepParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Type of sweep progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepSpacing {
    /// Uniformly spaced points
    #[default]
    Linear,
    /// Logarithmically spaced points
    Logarithmic,
}

impl fmt::Display for SweepSpacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "Linear"),
            Self::Logarithmic => write!(f, "Logarithmic"),
        }
    }
}

/// Definition of a single parameter sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepDef {
    pub parameter: SweepParameter,
    pub start: f64,
    pub end: f64,
    pub num_points: usize,
    #[serde(default)]
    pub spacing: SweepSpacing,
}

impl SweepDef {
    pub fn linear(parameter: SweepParameter, start: f64, end: f64, num_points: usize) -> Self {
        Self {
            parameter,
            start,
            end,
            num_points,
            spacing: SweepSpacing::Linear,
        }
    }

    /// Generate all points in the sweep.
    pub fn generate_points(&self) -> Vec<f64> {
        match self.spacing {
            SweepSpacing::Linear => self.generate_linear(),
            SweepSpacing::Logarithmic => self.generate_logarithmic(),
        }
    }

    fn generate_linear(&self) -> Vec<f64> {
        if self.num_points <= 1 {
            return vec![self.start];
        }

        let delta = (self.end - self.start) / (self.num_points - 1) as f64;
        let mut points: Vec<f64> = (0..self.num_points)
            .map(|i| self.start + i as f64 * delta)
            .collect();

        // Ensure exact endpoint
        points[self.num_points - 1] = self.end;
        points
    }

    fn generate_logarithmic(&self) -> Vec<f64> {
        if self.num_points <= 1 {
            return vec![self.start];
        }

        // Both bounds must be positive
        if self.start <= 0.0 || self.end <= 0.0 {
            return self.generate_linear();
        }

        let log_start = self.start.ln();
        let log_delta = (self.end.ln() - log_start) / (self.num_points - 1) as f64;
        let mut points: Vec<f64> = (0..self.num_points)
            .map(|i| (log_start + i as f64 * log_delta).exp())
            .collect();

        points[self.num_points - 1] = self.end;
        points
    }
}

impl fmt::Display for SweepDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sweep {} from {} to {} ({} points, {})",
            self.parameter, self.start, self.end, self.num_points, self.spacing
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_points() {
        let sweep = SweepDef::linear(SweepParameter::Kp, 1.0, 3.0, 5);
        assert_eq!(sweep.generate_points(), vec![1.0, 1.5, 2.0, 2.5, 3.0]);
    }

    #[test]
    fn logarithmic_points() {
        let sweep = SweepDef {
            spacing: SweepSpacing::Logarithmic,
            ..SweepDef::linear(SweepParameter::Ki, 0.1, 10.0, 3)
        };
        let points = sweep.generate_points();
        assert_eq!(points.len(), 3);
        assert!((points[0] - 0.1).abs() < 1e-12);
        assert!((points[1] - 1.0).abs() < 1e-12);
        assert_eq!(points[2], 10.0);
    }

    #[test]
    fn logarithmic_falls_back_to_linear() {
        let sweep = SweepDef {
            spacing: SweepSpacing::Logarithmic,
            ..SweepDef::linear(SweepParameter::Kd, 0.0, 1.0, 3)
        };
        assert_eq!(sweep.generate_points(), vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn apply_sets_only_the_swept_field() {
        let base = SimConfig::default();
        let cfg = SweepParameter::DampingRatio.apply(&base, 0.9);
        assert_eq!(cfg.damping_ratio, 0.9);
        assert_eq!(cfg.kp, base.kp);
        assert_eq!(cfg.natural_frequency, base.natural_frequency);
    }
}
