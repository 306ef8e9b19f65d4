//! Packed state-vector layout and codec.
//!
//! The ODE integrators advance a flat `f64` buffer. Each body occupies
//! [`STATE_SIZE`] consecutive scalars:
//!
//! ```text
//! offset + 0..3    position          (x, y, z)
//! offset + 3..12   rotation matrix   (row-major)
//! offset + 12..15  linear momentum   (Px, Py, Pz)
//! offset + 15..18  angular momentum  (Lx, Ly, Lz)
//! ```
//!
//! Packing N bodies contiguously lets a single integrator call advance an
//! arbitrary number of bodies at once. The codec is a pure copy: no
//! validation beyond slice bounds, the caller guarantees buffer sizing.

use crate::RigidBody;

/// Number of scalars per body in a packed state vector:
/// position(3) + rotation(9) + linear momentum(3) + angular momentum(3).
pub const STATE_SIZE: usize = 18;

impl RigidBody {
    /// Copy this body's integrated state into `buf` at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if `buf` is shorter than `offset + STATE_SIZE`.
    pub fn pack_state(&self, buf: &mut [f64], offset: usize) {
        buf[offset] = self.position.x;
        buf[offset + 1] = self.position.y;
        buf[offset + 2] = self.position.z;

        for i in 0..3 {
            for j in 0..3 {
                buf[offset + 3 + i * 3 + j] = self.rotation[(i, j)];
            }
        }

        buf[offset + 12] = self.linear_momentum.x;
        buf[offset + 13] = self.linear_momentum.y;
        buf[offset + 14] = self.linear_momentum.z;

        buf[offset + 15] = self.angular_momentum.x;
        buf[offset + 16] = self.angular_momentum.y;
        buf[offset + 17] = self.angular_momentum.z;
    }

    /// Overwrite this body's integrated state from `buf` at `offset`,
    /// then recompute the derived velocities.
    ///
    /// # Panics
    ///
    /// Panics if `buf` is shorter than `offset + STATE_SIZE`.
    pub fn unpack_state(&mut self, buf: &[f64], offset: usize) {
        self.position.x = buf[offset];
        self.position.y = buf[offset + 1];
        self.position.z = buf[offset + 2];

        for i in 0..3 {
            for j in 0..3 {
                self.rotation[(i, j)] = buf[offset + 3 + i * 3 + j];
            }
        }

        self.linear_momentum.x = buf[offset + 12];
        self.linear_momentum.y = buf[offset + 13];
        self.linear_momentum.z = buf[offset + 14];

        self.angular_momentum.x = buf[offset + 15];
        self.angular_momentum.y = buf[offset + 16];
        self.angular_momentum.z = buf[offset + 17];

        self.sync_derived();
    }
}

/// Pack every body contiguously, in arena order, into a fresh buffer.
///
/// Body `i` lands at offset `i * STATE_SIZE`, matching its [`crate::BodyId`]
/// index.
#[must_use]
pub fn pack_bodies(bodies: &[RigidBody]) -> Vec<f64> {
    let mut buf = vec![0.0; bodies.len() * STATE_SIZE];
    for (i, body) in bodies.iter().enumerate() {
        body.pack_state(&mut buf, i * STATE_SIZE);
    }
    buf
}

/// Unpack a contiguous buffer back into the bodies it was packed from.
///
/// # Panics
///
/// Panics if `buf` is shorter than `bodies.len() * STATE_SIZE`.
pub fn unpack_bodies(bodies: &mut [RigidBody], buf: &[f64]) {
    for (i, body) in bodies.iter_mut().enumerate() {
        body.unpack_state(buf, i * STATE_SIZE);
    }
}
