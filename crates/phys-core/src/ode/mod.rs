//! Fixed-step ODE solvers over flat state vectors.
//!
//! A solver advances a state vector `x` from `t0` to `t1` by repeatedly
//! applying steps of its configured size `h`, calling an injected
//! [`Derivative`] strategy for the right-hand side. The loop never takes a
//! partial final step: when `h` does not evenly divide `[t0, t1]` the
//! remaining time is returned as [`Integration::leftover`] and the caller
//! decides whether to re-integrate the remainder with a smaller step or
//! carry it into the next tick.
//!
//! Two stepping strategies are provided:
//!
//! - [`EulerSolver`] — explicit Euler, one derivative evaluation per step
//! - [`Rk4Solver`] — classical fourth-order Runge-Kutta, four evaluations
//!   per step and strictly more accurate at equal step size
//!
//! # Example
//!
//! ```
//! use phys_core::ode::{create_solver, OdeSolver};
//!
//! // dx/dt = x, x(0) = 1: the solution is e^t
//! let solver = create_solver("rk4", 0.01).unwrap();
//! let result = solver
//!     .integrate(&[1.0], 0.0, 1.0, &|_t: f64, x: &[f64], dxdt: &mut [f64]| {
//!         dxdt[0] = x[0];
//!     })
//!     .unwrap();
//!
//! assert!((result.state[0] - std::f64::consts::E).abs() < 1e-8);
//! assert!(result.leftover.abs() < 1e-12);
//! ```

mod euler;
mod rk4;

pub use euler::EulerSolver;
pub use rk4::Rk4Solver;

use phys_types::{PhysError, Result};

/// Tolerance for the floating-point comparison in the stepping loop:
/// a step is taken while `t + h <= t1 + TIME_EPSILON`.
pub(crate) const TIME_EPSILON: f64 = 1e-14;

/// Right-hand side of an ODE system.
///
/// Implementations must behave as pure functions of `(t, x)`: a solver may
/// evaluate the derivative several times per step (RK4 does so four times)
/// and expects no side effects beyond writing `dxdt`.
///
/// Closures of the matching shape implement this trait, so simple systems
/// need no named type:
///
/// ```
/// use phys_core::ode::Derivative;
///
/// let decay = |_t: f64, x: &[f64], dxdt: &mut [f64]| {
///     dxdt[0] = -x[0];
/// };
/// let mut out = [0.0];
/// decay.eval(0.0, &[2.0], &mut out);
/// assert_eq!(out[0], -2.0);
/// ```
///
/// Stateful force models (per-scene fields, captured body data) implement
/// the trait on their own types instead of relying on global state.
pub trait Derivative {
    /// Write `dx/dt` at time `t` and state `x` into `dxdt`.
    ///
    /// `dxdt` has the same length as `x`.
    fn eval(&self, t: f64, x: &[f64], dxdt: &mut [f64]);
}

impl<F> Derivative for F
where
    F: Fn(f64, &[f64], &mut [f64]),
{
    fn eval(&self, t: f64, x: &[f64], dxdt: &mut [f64]) {
        self(t, x, dxdt);
    }
}

/// Result of one integration call.
#[derive(Debug, Clone, PartialEq)]
pub struct Integration {
    /// State vector at the last whole step taken.
    pub state: Vec<f64>,
    /// `t1 - t_reached`: the portion of the requested interval not covered
    /// because the fixed step did not evenly divide it. Can be a few ulps
    /// negative when the interval divides evenly.
    pub leftover: f64,
}

/// A fixed-step ODE solver.
pub trait OdeSolver {
    /// Advance `x0` from `t0` to (at most) `t1`.
    ///
    /// # Errors
    ///
    /// - [`PhysError::EmptyState`] if `x0` is empty
    /// - [`PhysError::InvalidTimeRange`] if `t1 <= t0`
    ///
    /// Both are rejected before any derivative evaluation.
    fn integrate(
        &self,
        x0: &[f64],
        t0: f64,
        t1: f64,
        deriv: &dyn Derivative,
    ) -> Result<Integration>;

    /// Replace the step size.
    ///
    /// # Errors
    ///
    /// [`PhysError::InvalidStepSize`] if `h` is not positive and finite.
    /// The previous step size is kept on error.
    fn set_step_size(&mut self, h: f64) -> Result<()>;

    /// The current step size.
    fn step_size(&self) -> f64;
}

/// Validate a step size at construction or mutation.
pub(crate) fn check_step_size(h: f64) -> Result<()> {
    if !h.is_finite() || h <= 0.0 {
        return Err(PhysError::InvalidStepSize(h));
    }
    Ok(())
}

/// Validate the integration arguments shared by all solvers.
pub(crate) fn check_range(x0: &[f64], t0: f64, t1: f64) -> Result<()> {
    if x0.is_empty() {
        return Err(PhysError::EmptyState);
    }
    if t1 <= t0 {
        return Err(PhysError::InvalidTimeRange { t0, t1 });
    }
    Ok(())
}

/// Create a solver by name.
///
/// Names are matched exactly and case-sensitively: `"euler"` or `"rk4"`.
///
/// # Errors
///
/// - [`PhysError::UnknownSolver`] for any other name
/// - [`PhysError::InvalidStepSize`] if `step_size` is not positive and finite
pub fn create_solver(name: &str, step_size: f64) -> Result<Box<dyn OdeSolver>> {
    match name {
        "euler" => Ok(Box::new(EulerSolver::new(step_size)?)),
        "rk4" => Ok(Box::new(Rk4Solver::new(step_size)?)),
        other => Err(PhysError::UnknownSolver(other.to_string())),
    }
}
