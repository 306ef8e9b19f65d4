//! Classical fourth-order Runge-Kutta integration.

use phys_types::Result;

use super::{check_range, check_step_size, Derivative, Integration, OdeSolver, TIME_EPSILON};

/// Fourth-order Runge-Kutta solver.
///
/// Each step makes four derivative evaluations,
///
/// ```text
/// k1 = f(t,       x)
/// k2 = f(t + h/2, x + h*k1/2)
/// k3 = f(t + h/2, x + h*k2/2)
/// k4 = f(t + h,   x + h*k3)
///
/// x(t + h) = x(t) + (h/6) * (k1 + 2*k2 + 2*k3 + k4)
/// ```
///
/// Global error is O(h^4): strictly more accurate than
/// [`super::EulerSolver`] at the same step size, at four times the
/// per-step cost.
#[derive(Debug, Clone)]
pub struct Rk4Solver {
    step_size: f64,
}

impl Rk4Solver {
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

impl OdeSolver for Rk4Solver {
    fn integrate(
        &self,
        x0: &[f64],
        t0: f64,
        t1: f64,
        deriv: &dyn Derivative,
    ) -> Result<Integration> {
        check_range(x0, t0, t1)?;

        let dim = x0.len();
        let h = self.step_size;

        let mut x = x0.to_vec();
        let mut k1 = vec![0.0; dim];
        let mut k2 = vec![0.0; dim];
        let mut k3 = vec![0.0; dim];
        let mut k4 = vec![0.0; dim];
        let mut x_temp = vec![0.0; dim];

        let mut t = t0;

        while t + h <= t1 + TIME_EPSILON {
            deriv.eval(t, &x, &mut k1);

            for i in 0..dim {
                x_temp[i] = x[i] + 0.5 * h * k1[i];
            }
            deriv.eval(t + 0.5 * h, &x_temp, &mut k2);

            for i in 0..dim {
                x_temp[i] = x[i] + 0.5 * h * k2[i];
            }
            deriv.eval(t + 0.5 * h, &x_temp, &mut k3);

            for i in 0..dim {
                x_temp[i] = x[i] + h * k3[i];
            }
            deriv.eval(t + h, &x_temp, &mut k4);

            for i in 0..dim {
                x[i] += (h / 6.0) * (k1[i] + 2.0 * k2[i] + 2.0 * k3[i] + k4[i]);
            }

            t += h;
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
