//! Explicit Euler integration (first-order).

use phys_types::Result;

use super::{check_range, check_step_size, Derivative, Integration, OdeSolver, TIME_EPSILON};

/// Explicit Euler solver.
///
/// Each step makes one derivative evaluation and applies
///
/// ```text
/// x(t + h) = x(t) + h * dx/dt(t, x)
/// ```
///
/// Simple and cheap, but first-order: the global error shrinks only
/// linearly with the step size, and the method is unstable for stiff
/// systems. Prefer [`super::Rk4Solver`] when accuracy matters.
#[derive(Debug, Clone)]
pub struct EulerSolver {
    step_size: f64,
}

impl EulerSolver {
    /// Create a solver with the given step size.
    ///
    /// # Errors
    ///
    /// [`phys_types::PhysError::InvalidStepSize`] if `step_size` is not
    /// positive and finite.
    pub fn new(step_size: f64) -> Result<Self> {
        check_step_size(step_size)?;
        Ok(Self { step_size })
    }
}

impl OdeSolver for EulerSolver {
    fn integrate(
        &self,
        x0: &[f64],
        t0: f64,
        t1: f64,
        deriv: &dyn Derivative,
    ) -> Result<Integration> {
        check_range(x0, t0, t1)?;

        let dim = x0.len();
        let mut x = x0.to_vec();
        let mut dxdt = vec![0.0; dim];
        let mut t = t0;

        while t + self.step_size <= t1 + TIME_EPSILON {
            deriv.eval(t, &x, &mut dxdt);

            for i in 0..dim {
                x[i] += self.step_size * dxdt[i];
            }

            t += self.step_size;
        }

        Ok(Integration {
            state: x,
            leftover: t1 - t,
        })
    }

    fn set_step_size(&mut self, h: f64) -> Result<()> {
        check_step_size(h)?;
        self.step_size = h;
        Ok(())
    }

    fn step_size(&self) -> f64 {
        self.step_size
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use phys_types::PhysError;

    fn exponential_growth(_t: f64, x: &[f64], dxdt: &mut [f64]) {
        dxdt[0] = x[0];
    }

    fn constant_derivative(_t: f64, _x: &[f64], dxdt: &mut [f64]) {
        dxdt[0] = 5.0;
    }

    /// d²x/dt² = -4x as a first-order system (omega = 2, period pi).
    fn harmonic_oscillator(_t: f64, x: &[f64], dxdt: &mut [f64]) {
        dxdt[0] = x[1];
        dxdt[1] = -4.0 * x[0];
    }

    #[test]
    fn test_exponential_growth_within_one_percent() {
        let solver = EulerSolver::new(0.001).unwrap();
        let result = solver
            .integrate(&[1.0], 0.0, 1.0, &exponential_growth)
            .unwrap();

        let analytical = std::f64::consts::E;
        let rel_error = (result.state[0] - analytical).abs() / analytical;
        assert!(rel_error < 0.01, "relative error {rel_error} too large");
        assert!(result.leftover.abs() < 1e-9);
    }

    #[test]
    fn test_harmonic_oscillator() {
        let solver = EulerSolver::new(0.001).unwrap();
        let quarter_period = std::f64::consts::PI / 4.0;
        let result = solver
            .integrate(&[1.0, 0.0], 0.0, quarter_period, &harmonic_oscillator)
            .unwrap();

        // x(pi/4) = cos(pi/2) = 0, v(pi/4) = -2 sin(pi/2) = -2
        assert!((result.state[0] - 0.0).abs() < 0.1);
        assert!((result.state[1] - (-2.0)).abs() < 0.2);
    }

    #[test]
    fn test_linear_system_components_independent() {
        // dx1/dt = -x1, dx2/dt = -2 x2
        let solver = EulerSolver::new(0.01).unwrap();
        let result = solver
            .integrate(&[2.0, 3.0], 0.0, 1.0, &|_t: f64, x: &[f64], dxdt: &mut [f64]| {
                dxdt[0] = -x[0];
                dxdt[1] = -2.0 * x[1];
            })
            .unwrap();

        let a1 = 2.0 * (-1.0f64).exp();
        let a2 = 3.0 * (-2.0f64).exp();
        assert!((result.state[0] - a1).abs() / a1 < 0.05);
        assert!((result.state[1] - a2).abs() / a2 < 0.05);
    }

    #[test]
    fn test_constant_derivative_is_exact() {
        let solver = EulerSolver::new(0.1).unwrap();
        let result = solver
            .integrate(&[1.0], 0.0, 2.0, &constant_derivative)
            .unwrap();

        // x(2) = 1 + 5 * 2 = 11, exact for a linear trajectory
        assert!((result.state[0] - 11.0).abs() < 1e-12);
    }

    #[test]
    fn test_uneven_interval_leaves_leftover() {
        // h = 0.03 over [0, 0.1]: three whole steps reach t = 0.09
        let solver = EulerSolver::new(0.03).unwrap();
        let result = solver
            .integrate(&[1.0], 0.0, 0.1, &constant_derivative)
            .unwrap();

        assert!((result.leftover - 0.01).abs() < 1e-9);
        // Exactly three steps of 0.03 * 5.0 each
        assert!((result.state[0] - 1.45).abs() < 1e-12);
    }

    #[test]
    fn test_step_larger_than_interval_takes_no_step() {
        let solver = EulerSolver::new(1.0).unwrap();
        let result = solver
            .integrate(&[1.0], 0.0, 0.1, &constant_derivative)
            .unwrap();

        assert_eq!(result.state[0], 1.0);
        assert!((result.leftover - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_invalid_arguments() {
        assert!(matches!(
            EulerSolver::new(-0.01),
            Err(PhysError::InvalidStepSize(_))
        ));
        assert!(EulerSolver::new(0.0).is_err());

        let solver = EulerSolver::new(0.01).unwrap();
        assert!(matches!(
            solver.integrate(&[], 0.0, 1.0, &exponential_growth),
            Err(PhysError::EmptyState)
        ));
        assert!(matches!(
            solver.integrate(&[1.0], 1.0, 0.0, &exponential_growth),
            Err(PhysError::InvalidTimeRange { .. })
        ));
        assert!(solver
            .integrate(&[1.0], 1.0, 1.0, &exponential_growth)
            .is_err());
    }

    #[test]
    fn test_step_size_mutation() {
        let mut solver = EulerSolver::new(0.1).unwrap();
        assert_eq!(solver.step_size(), 0.1);

        solver.set_step_size(0.05).unwrap();
        assert_eq!(solver.step_size(), 0.05);

        assert!(solver.set_step_size(0.0).is_err());
        assert!(solver.set_step_size(-0.01).is_err());
        // Failed mutation keeps the previous value
        assert_eq!(solver.step_size(), 0.05);
    }
}
