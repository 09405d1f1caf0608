//! TransientModel trait for pluggable dynamic systems.

/// Trait for continuous-time models driven by a scalar input.
///
/// A TransientModel must implement:
/// - State type (Clone, for snapshots)
/// - Initial state
/// - RHS computation: x_dot = f(x, u)
/// - Observed output y = g(x)
/// - State arithmetic for integration: add states, scale by scalar
pub trait TransientModel {
    /// State type (must be Clone).
    type State: Clone;

    /// Return the initial state at t=0.
    fn initial_state(&self) -> Self::State;

    /// Compute state derivative for input `u`.
    fn rhs(&self, x: &Self::State, u: f64) -> Self::State;

    /// Observed output.
    fn output(&self, x: &Self::State) -> f64;

    /// Add two states element-wise: result = a + b.
    fn add(&self, a: &Self::State, b: &Self::State) -> Self::State;

    /// Scale a state by a scalar: result = scale * a.
    fn scale(&self, a: &Self::State, scale: f64) -> Self::State;
}
