//! Rigid body state.
//!
//! A [`RigidBody`] carries the full simulation state of one solid: the
//! integrated quantities (position, rotation matrix, linear and angular
//! momentum) and the derived quantities (linear and angular velocity), which
//! are recomputed from the momenta after every integration step or impulse
//! and never integrated directly.

use nalgebra::{Affine3, Matrix3, Matrix4, Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{PhysError, Result};

/// Stable handle for a rigid body in a simulation arena.
///
/// Handles are indices into the owning arena's body vector. Growing the
/// arena never invalidates a handle, so contacts referencing bodies by
/// `BodyId` stay valid for the lifetime of the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BodyId(usize);

impl BodyId {
    /// Create a handle from a raw arena index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for BodyId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl std::fmt::Display for BodyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Body({})", self.0)
    }
}

/// One simulated solid.
///
/// The momenta are the quantities the integrator advances; the velocities
/// are auxiliary and must satisfy the invariant
///
/// ```text
/// velocity         = linear_momentum / mass
/// angular_velocity = inv_inertia * angular_momentum
/// ```
///
/// which [`RigidBody::sync_derived`] restores after any mutation of the
/// momenta. Momentum, not velocity, is what accumulates numerical error:
/// it is the physically conserved quantity.
///
/// # Example
///
/// ```
/// use phys_types::RigidBody;
/// use nalgebra::{Matrix3, Point3, Vector3};
///
/// let mut body = RigidBody::new(2.0, Point3::origin(), Matrix3::identity()).unwrap();
/// body.linear_momentum = Vector3::new(4.0, 0.0, 0.0);
/// body.sync_derived();
/// assert_eq!(body.velocity.x, 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RigidBody {
    /// Total mass in kg. Strictly positive.
    pub mass: f64,
    /// Position of the centre of mass in world coordinates.
    pub position: Point3<f64>,
    /// Orientation as an explicit 3x3 rotation matrix.
    ///
    /// Kept as a matrix (not a quaternion) because the integrator advances
    /// `dR/dt = star(omega) * R` directly. Under explicit integration the
    /// matrix slowly drifts from orthonormality; see
    /// [`RigidBody::orthonormalize_rotation`].
    pub rotation: Matrix3<f64>,
    /// Linear momentum (kg*m/s). Integrated.
    pub linear_momentum: Vector3<f64>,
    /// Angular momentum (kg*m^2/s). Integrated.
    pub angular_momentum: Vector3<f64>,
    /// Linear velocity (m/s). Derived, see [`RigidBody::sync_derived`].
    pub velocity: Vector3<f64>,
    /// Angular velocity (rad/s). Derived, see [`RigidBody::sync_derived`].
    pub angular_velocity: Vector3<f64>,
    /// Inverse inertia tensor in the world frame.
    pub inv_inertia: Matrix3<f64>,
}

impl RigidBody {
    /// Create a body at rest.
    ///
    /// # Errors
    ///
    /// Returns [`PhysError::InvalidMass`] if `mass` is not strictly positive
    /// and finite.
    pub fn new(mass: f64, position: Point3<f64>, inv_inertia: Matrix3<f64>) -> Result<Self> {
        if !(mass.is_finite() && mass > 0.0) {
            return Err(PhysError::InvalidMass(mass));
        }

        Ok(Self {
            mass,
            position,
            rotation: Matrix3::identity(),
            linear_momentum: Vector3::zeros(),
            angular_momentum: Vector3::zeros(),
            velocity: Vector3::zeros(),
            angular_velocity: Vector3::zeros(),
            inv_inertia,
        })
    }

    /// Recompute the derived velocities from the momenta.
    ///
    /// Call after any direct mutation of `linear_momentum` or
    /// `angular_momentum`; the integrator and the collision resolver call
    /// this themselves.
    pub fn sync_derived(&mut self) {
        self.velocity = self.linear_momentum / self.mass;
        self.angular_velocity = self.inv_inertia * self.angular_momentum;
    }

    /// Set the linear velocity, updating the momentum to match.
    pub fn set_velocity(&mut self, velocity: Vector3<f64>) {
        self.linear_momentum = velocity * self.mass;
        self.velocity = velocity;
    }

    /// Velocity of a world-space point rigidly attached to this body.
    ///
    /// `v_point = v + omega x (p - x)`
    #[must_use]
    pub fn velocity_at_point(&self, point: &Point3<f64>) -> Vector3<f64> {
        self.velocity + self.angular_velocity.cross(&(point - self.position))
    }

    /// World-space transform for the rendering collaborator.
    ///
    /// Built from the current rotation matrix and position; recomputed once
    /// per tick after integration. Returned as an affine (rather than an
    /// isometry) because the rotation block is only approximately orthonormal
    /// under explicit integration.
    #[must_use]
    pub fn world_transform(&self) -> Affine3<f64> {
        let mut m = Matrix4::identity();
        m.fixed_view_mut::<3, 3>(0, 0).copy_from(&self.rotation);
        m.fixed_view_mut::<3, 1>(0, 3).copy_from(&self.position.coords);
        Affine3::from_matrix_unchecked(m)
    }

    /// Re-orthonormalize the rotation matrix with Gram-Schmidt.
    ///
    /// Explicit integration of `dR/dt = star(omega) * R` drifts the matrix
    /// from orthonormality over many steps. This restores it; the simulation
    /// configuration decides whether it runs every tick.
    pub fn orthonormalize_rotation(&mut self) {
        let mut c0 = self.rotation.column(0).into_owned();
        let mut c1 = self.rotation.column(1).into_owned();
        c0.normalize_mut();
        c1 -= c0 * c0.dot(&c1);
        c1.normalize_mut();
        let c2 = c0.cross(&c1);
        self.rotation = Matrix3::from_columns(&[c0, c1, c2]);
    }

    /// Kinetic energy `0.5 m |v|^2 + 0.5 omega . L`.
    #[must_use]
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.norm_squared()
            + 0.5 * self.angular_velocity.dot(&self.angular_momentum)
    }

    /// Check that the state contains no `NaN` or `Inf` values.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.position.coords.iter().all(|x| x.is_finite())
            && self.rotation.iter().all(|x| x.is_finite())
            && self.linear_momentum.iter().all(|x| x.is_finite())
            && self.angular_momentum.iter().all(|x| x.is_finite())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_body_id() {
        let id = BodyId::new(7);
        assert_eq!(id.index(), 7);
        assert_eq!(id.to_string(), "Body(7)");

        let id2: BodyId = 7.into();
        assert_eq!(id, id2);
    }

    #[test]
    fn test_rejects_bad_mass() {
        assert!(RigidBody::new(0.0, Point3::origin(), Matrix3::identity()).is_err());
        assert!(RigidBody::new(-1.0, Point3::origin(), Matrix3::identity()).is_err());
        assert!(RigidBody::new(f64::NAN, Point3::origin(), Matrix3::identity()).is_err());
        assert!(RigidBody::new(f64::INFINITY, Point3::origin(), Matrix3::identity()).is_err());
    }

    #[test]
    fn test_sync_derived() {
        let mut body = RigidBody::new(4.0, Point3::origin(), Matrix3::identity()).unwrap();
        body.linear_momentum = Vector3::new(8.0, 0.0, 0.0);
        body.angular_momentum = Vector3::new(0.0, 2.0, 0.0);
        body.sync_derived();

        assert_relative_eq!(body.velocity.x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(body.angular_velocity.y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_velocity_at_point() {
        // Spinning about Y at 1 rad/s; a point one metre out on +X moves in -Z
        let mut body = RigidBody::new(1.0, Point3::origin(), Matrix3::identity()).unwrap();
        body.angular_momentum = Vector3::new(0.0, 1.0, 0.0);
        body.sync_derived();

        let v = body.velocity_at_point(&Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(v.z, -1.0, epsilon = 1e-12);
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_world_transform_tracks_position() {
        let body = RigidBody::new(1.0, Point3::new(1.0, 2.0, 3.0), Matrix3::identity()).unwrap();
        let t = body.world_transform();
        let p = t.transform_point(&Point3::origin());
        assert_relative_eq!(p.coords, Vector3::new(1.0, 2.0, 3.0), epsilon = 1e-12);
    }

    #[test]
    fn test_orthonormalize_rotation() {
        let mut body = RigidBody::new(1.0, Point3::origin(), Matrix3::identity()).unwrap();
        // Perturb the rotation away from orthonormality
        body.rotation[(0, 0)] = 1.01;
        body.rotation[(1, 0)] = 0.02;
        body.orthonormalize_rotation();

        let should_be_identity = body.rotation * body.rotation.transpose();
        assert_relative_eq!(should_be_identity, Matrix3::identity(), epsilon = 1e-10);
        assert_relative_eq!(body.rotation.determinant(), 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_kinetic_energy() {
        let mut body = RigidBody::new(2.0, Point3::origin(), Matrix3::identity()).unwrap();
        body.set_velocity(Vector3::new(1.0, 0.0, 0.0));
        // 0.5 * 2 * 1 = 1
        assert_relative_eq!(body.kinetic_energy(), 1.0, epsilon = 1e-12);
    }
}
