//! Rigid-body equations of motion.
//!
//! This module provides the derivative evaluator the ODE solvers consume:
//! for each body's 18-scalar slice of the packed state vector it computes
//!
//! ```text
//! d(position)/dt = P / m
//! d(R)/dt        = star(omega) * R
//! d(P)/dt        = F
//! d(L)/dt        = tau
//! ```
//!
//! the standard position/orientation/momentum formulation. Velocity is
//! never integrated directly: momentum, the physically conserved quantity,
//! is what accumulates numerical error.
//!
//! Forces and torques come from an injected [`ForceModel`]. The reference
//! model is [`Gravity`]; richer models (springs, wind, inter-body force
//! fields) implement the trait on their own types and plug in at the
//! stepper without any global state.

use nalgebra::{Matrix3, Vector3};
use phys_types::{RigidBody, STATE_SIZE};

use crate::ode::Derivative;

/// Skew-symmetric cross-product matrix of `omega`.
///
/// `star(omega) * v == omega x v` for any vector `v`:
///
/// ```text
/// [   0  -wz   wy ]
/// [  wz    0  -wx ]
/// [ -wy   wx    0 ]
/// ```
#[must_use]
pub fn star(omega: &Vector3<f64>) -> Matrix3<f64> {
    Matrix3::new(
        0.0, -omega.z, omega.y, //
        omega.z, 0.0, -omega.x, //
        -omega.y, omega.x, 0.0,
    )
}

/// Instantaneous force and torque acting on one body.
///
/// Implementations must be pure functions of `(t, body)`: the solvers may
/// evaluate the derivative, and therefore the force model, several times
/// per step.
pub trait ForceModel {
    /// Force and torque on `body` at time `t`, in world coordinates.
    fn force_and_torque(&self, t: f64, body: &RigidBody) -> (Vector3<f64>, Vector3<f64>);
}

/// Uniform gravitational field: `F = m * g`, zero torque.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gravity {
    /// Gravitational acceleration (m/s^2).
    pub acceleration: Vector3<f64>,
}

impl Gravity {
    /// Earth gravity pulling along -Y (the world is Y-up).
    #[must_use]
    pub fn earth() -> Self {
        Self {
            acceleration: Vector3::new(0.0, -9.81, 0.0),
        }
    }

    /// Zero gravity.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            acceleration: Vector3::zeros(),
        }
    }

    /// A custom uniform field.
    #[must_use]
    pub const fn new(acceleration: Vector3<f64>) -> Self {
        Self { acceleration }
    }
}

impl Default for Gravity {
    fn default() -> Self {
        Self::earth()
    }
}

impl ForceModel for Gravity {
    fn force_and_torque(&self, _t: f64, body: &RigidBody) -> (Vector3<f64>, Vector3<f64>) {
        (self.acceleration * body.mass, Vector3::zeros())
    }
}

/// The rigid-body right-hand side for a packed multi-body state vector.
///
/// Holds the body arena for the constant quantities (mass, inverse
/// inertia) while the integrated quantities are decoded from the state
/// vector the solver passes in. Body `i` occupies the slice starting at
/// `i * STATE_SIZE`.
pub struct RigidBodyDerivative<'a> {
    bodies: &'a [RigidBody],
    forces: &'a dyn ForceModel,
}

impl<'a> RigidBodyDerivative<'a> {
    /// Create the evaluator for an arena and a force model.
    #[must_use]
    pub fn new(bodies: &'a [RigidBody], forces: &'a dyn ForceModel) -> Self {
        Self { bodies, forces }
    }
}

impl Derivative for RigidBodyDerivative<'_> {
    /// # Panics
    ///
    /// Panics if `x` or `dxdt` is shorter than
    /// `bodies.len() * STATE_SIZE`.
    fn eval(&self, t: f64, x: &[f64], dxdt: &mut [f64]) {
        for (i, body) in self.bodies.iter().enumerate() {
            let offset = i * STATE_SIZE;

            // Decode the integrated quantities; mass and inverse inertia
            // come from the arena. Unpacking recomputes v and omega.
            let mut decoded = *body;
            decoded.unpack_state(x, offset);

            let (force, torque) = self.forces.force_and_torque(t, &decoded);

            // d(position)/dt = P / m
            dxdt[offset] = decoded.velocity.x;
            dxdt[offset + 1] = decoded.velocity.y;
            dxdt[offset + 2] = decoded.velocity.z;

            // d(R)/dt = star(omega) * R, row-major
            let r_dot = star(&decoded.angular_velocity) * decoded.rotation;
            for row in 0..3 {
                for col in 0..3 {
                    dxdt[offset + 3 + row * 3 + col] = r_dot[(row, col)];
                }
            }

            // d(P)/dt = F
            dxdt[offset + 12] = force.x;
            dxdt[offset + 13] = force.y;
            dxdt[offset + 14] = force.z;

            // d(L)/dt = tau
            dxdt[offset + 15] = torque.x;
            dxdt[offset + 16] = torque.y;
            dxdt[offset + 17] = torque.z;
        }
    }
}
