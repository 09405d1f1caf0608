//! Second-order linear plant.
//!
//! State space form with `x = [position, velocity]`:
//!
//! ```text
//! x' = A x + B u      A = [[0, 1], [-wn^2, -2 zeta wn]],  B = [0, K]^T
//! y  = C x            C = [1, 0]
//! ```
//!
//! The 2x2 products are written out as scalar arithmetic.

use crate::model::TransientModel;
use serde::{Deserialize, Serialize};

/// Plant state vector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlantState {
    pub position: f64,
    pub velocity: f64,
}

/// Second-order plant parameters.
///
/// `natural_frequency > 0` and `damping_ratio >= 0` describe a physically
/// meaningful plant, but any values are accepted and simulated as given.
///
/// # Example
///
/// ```
/// use pf_sim::{ForwardEuler, Integrator, SecondOrderPlant, TransientModel};
///
/// let plant = SecondOrderPlant::new(2.0, 0.5, 1.0);
/// let mut x = plant.initial_state();
///
/// // Constant unit input for 20 s
/// for _ in 0..20_000 {
///     x = ForwardEuler.step(&plant, &x, 1.0, 0.001);
/// }
///
/// // Settles at the DC gain K / wn^2
/// assert!((plant.output(&x) - plant.dc_gain()).abs() < 1e-3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SecondOrderPlant {
    /// Natural frequency wn (rad/s).
    pub natural_frequency: f64,
    /// Damping ratio zeta.
    pub damping_ratio: f64,
    /// Input gain K.
    pub gain: f64,
}

impl SecondOrderPlant {
    pub fn new(natural_frequency: f64, damping_ratio: f64, gain: f64) -> Self {
        Self {
            natural_frequency,
            damping_ratio,
            gain,
        }
    }

    /// Steady-state output per unit input, `K / wn^2`.
    pub fn dc_gain(&self) -> f64 {
        self.gain / (self.natural_frequency * self.natural_frequency)
    }
}

impl Default for SecondOrderPlant {
    fn default() -> Self {
        Self::new(2.0, 0.5, 1.0)
    }
}

impl TransientModel for SecondOrderPlant {
    type State = PlantState;

    fn initial_state(&self) -> PlantState {
        PlantState::default()
    }

    fn rhs(&self, x: &PlantState, u: f64) -> PlantState {
        let wn = self.natural_frequency;
        let a10 = -(wn * wn);
        let a11 = -2.0 * self.damping_ratio * wn;
        PlantState {
            position: x.velocity,
            velocity: a10 * x.position + a11 * x.velocity + self.gain * u,
        }
    }

    fn output(&self, x: &PlantState) -> f64 {
        x.position
    }

    fn add(&self, a: &PlantState, b: &PlantState) -> PlantState {
        PlantState {
            position: a.position + b.position,
            velocity: a.velocity + b.velocity,
        }
    }

    fn scale(&self, a: &PlantState, scale: f64) -> PlantState {
        PlantState {
            position: a.position * scale,
            velocity: a.velocity * scale,
        }
    }
}
