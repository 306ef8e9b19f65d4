//! Batch contact resolution.
//!
//! [`resolve_all`] drives the velocity-level fixed point: scan the whole
//! contact batch, apply an impulse to every contact still classified as
//! colliding, and repeat until a full pass is clean. Impulses applied early
//! in a pass can make later contacts collide (or stop colliding), which is
//! why whole passes are repeated rather than visiting each contact once.
//!
//! The pass count is bounded: a batch with inconsistent normals can cycle
//! forever, so [`ResolutionConfig::max_passes`] caps the loop. On cap the
//! batch is returned partially resolved and flagged as non-converged.

use phys_types::{Contact, RigidBody};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::classify::colliding;
use crate::impulse::apply_impulse;

/// Configuration for batch resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResolutionConfig {
    /// Coefficient of restitution applied to every impulse, in [0, 1].
    pub restitution: f64,
    /// Maximum number of full passes over the batch before giving up.
    pub max_passes: usize,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            restitution: 0.5,
            max_passes: 64,
        }
    }
}

/// Outcome of one batch resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolutionReport {
    /// Number of full passes taken over the batch.
    pub passes: usize,
    /// Number of impulses applied. Each one is a discontinuity in the
    /// simulated trajectory: the integrator must not assume smoothness
    /// across the step boundary when this is nonzero.
    pub impulses: usize,
    /// Whether a clean pass was reached. `false` means the pass cap was hit
    /// and the batch is only partially resolved.
    pub converged: bool,
}

impl ResolutionReport {
    /// True if any impulse was applied (the trajectory has a discontinuity).
    #[must_use]
    pub fn had_discontinuity(&self) -> bool {
        self.impulses > 0
    }
}

/// Resolve every colliding contact in the batch.
///
/// Scans all contacts repeatedly, applying an impulse to each one still
/// classified as colliding, until either a full pass applies none or
/// `config.max_passes` passes have run. Resting and separating contacts are
/// left untouched.
///
/// # Panics
///
/// Panics if any contact references a body handle out of bounds for
/// `bodies`.
pub fn resolve_all(
    bodies: &mut [RigidBody],
    contacts: &[Contact],
    config: &ResolutionConfig,
) -> ResolutionReport {
    let mut passes = 0;
    let mut impulses = 0;

    while passes < config.max_passes {
        passes += 1;
        let mut had_collision = false;

        for contact in contacts {
            if colliding(bodies, contact) {
                apply_impulse(bodies, contact, config.restitution);
                impulses += 1;
                had_collision = true;
            }
        }

        if !had_collision {
            return ResolutionReport {
                passes,
                impulses,
                converged: true,
            };
        }
    }

    tracing::warn!(
        max_passes = config.max_passes,
        impulses,
        "contact batch did not converge, returning partially resolved state"
    );

    ResolutionReport {
        passes,
        impulses,
        converged: false,
    }
}
