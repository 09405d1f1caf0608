//! Fixed-step time integrators.

use crate::model::TransientModel;

/// Trait for time integrators.
pub trait Integrator {
    /// Advance state by one time step holding input `u` constant.
    fn step<M: TransientModel>(&self, model: &M, x: &M::State, u: f64, dt: f64) -> M::State;
}

/// Forward Euler (explicit, 1st order).
/// Calls rhs() once per step.
#[derive(Clone, Copy, Debug, Default)]
pub struct ForwardEuler;

impl Integrator for ForwardEuler {
    fn step<M: TransientModel>(&self, model: &M, x: &M::State, u: f64, dt: f64) -> M::State {
        // x_new = x + dt * rhs(x, u)
        let xdot = model.rhs(x, u);
        model.add(x, &model.scale(&xdot, dt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Scalar decay x' = -x + u.
    struct Decay;

    impl TransientModel for Decay {
        type State = f64;

        fn initial_state(&self) -> f64 {
            1.0
        }

        fn rhs(&self, x: &f64, u: f64) -> f64 {
            -x + u
        }

        fn output(&self, x: &f64) -> f64 {
            *x
        }

        fn add(&self, a: &f64, b: &f64) -> f64 {
            a + b
        }

        fn scale(&self, a: &f64, scale: f64) -> f64 {
            a * scale
        }
    }

    #[test]
    fn euler_single_step() {
        let model = Decay;
        let x = model.initial_state();
        let next = ForwardEuler.step(&model, &x, 0.0, 0.1);
        assert!((next - 0.9).abs() < 1e-15);
    }

    #[test]
    fn euler_converges_to_input() {
        let model = Decay;
        let mut x = model.initial_state();
        for _ in 0..10_000 {
            x = ForwardEuler.step(&model, &x, 2.0, 0.01);
        }
        assert!((model.output(&x) - 2.0).abs() < 1e-9);
    }
}
