//! Per-tick simulation orchestration.
//!
//! One tick is, in order:
//!
//! 1. Resolve every colliding contact in the batch (impulses first, so
//!    inter-penetration cannot grow during the integration that follows)
//! 2. Pack all bodies into one state vector, integrate it from the current
//!    time forward, unpack, and recompute the derived velocities
//! 3. Optionally re-orthonormalize each body's rotation matrix
//! 4. Advance the simulation clock
//!
//! The ordering of (1) before (2) is an invariant, not an implementation
//! detail. The whole tick is synchronous on one thread, so every contact
//! in the batch is resolved against a consistent momentum snapshot.
//!
//! Leftover time from an unevenly-dividing step size is carried: the clock
//! advances to exactly the time the integrator reached, so the next tick
//! re-covers the remainder. The leftover is also reported per tick for
//! callers that prefer to re-integrate it with a smaller step themselves.

use phys_contact::{resolve_all, ResolutionConfig, ResolutionReport};
use phys_types::{pack_bodies, unpack_bodies, Contact, Result, SimulationConfig};

use crate::dynamics::{ForceModel, Gravity, RigidBodyDerivative};
use crate::ode::{create_solver, OdeSolver};
use crate::world::World;

/// Result of one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepReport {
    /// Integration time not covered this tick (carried into the next).
    pub leftover: f64,
    /// Outcome of the contact-resolution batch.
    pub resolution: ResolutionReport,
}

/// Orchestrates the per-tick physics loop.
///
/// # Example
///
/// ```
/// use phys_core::{Stepper, World};
/// use phys_types::{RigidBody, SimulationConfig};
/// use nalgebra::{Matrix3, Point3};
///
/// let mut world = World::new(SimulationConfig::default());
/// world.add_body(RigidBody::new(1.0, Point3::new(0.0, 5.0, 0.0), Matrix3::identity()).unwrap());
///
/// let mut stepper = Stepper::new(world.config().clone()).unwrap();
/// let report = stepper.step(&mut world, &[]).unwrap();
/// assert!(report.resolution.converged);
/// ```
pub struct Stepper {
    solver: Box<dyn OdeSolver>,
    forces: Box<dyn ForceModel>,
    config: SimulationConfig,
}

impl Stepper {
    /// Create a stepper for the given configuration, with gravity as the
    /// force model.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `config` fails validation, or the
    /// factory error for an invalid step size.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        let solver = create_solver(config.solver.name(), config.step_size)?;
        Ok(Self {
            solver,
            forces: Box::new(Gravity::earth()),
            config,
        })
    }

    /// Replace the force model.
    #[must_use]
    pub fn with_force_model(mut self, forces: Box<dyn ForceModel>) -> Self {
        self.forces = forces;
        self
    }

    /// The stepper's configuration.
    #[must_use]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Execute one tick: resolve `contacts`, then integrate every body
    /// forward by the configured timestep.
    ///
    /// The contact batch comes fresh from the external broad/narrow-phase
    /// collaborator each tick and is discarded afterwards. A world with no
    /// bodies only advances the clock.
    ///
    /// # Errors
    ///
    /// Propagates integrator errors ([`phys_types::PhysError`]).
    ///
    /// # Panics
    ///
    /// Panics if a contact references a body handle outside the world's
    /// arena.
    pub fn step(&mut self, world: &mut World, contacts: &[Contact]) -> Result<StepReport> {
        let dt = self.config.timestep;
        let t0 = world.time();

        // 1. Resolve all colliding contacts as one batch
        let resolution_config = ResolutionConfig {
            restitution: self.config.restitution,
            max_passes: self.config.max_resolution_passes,
        };
        let resolution = resolve_all(world.bodies_mut(), contacts, &resolution_config);
        if resolution.had_discontinuity() {
            // The trajectory is not smooth across this step boundary
            tracing::debug!(
                impulses = resolution.impulses,
                passes = resolution.passes,
                "contact impulses applied before integration"
            );
        }

        // 2. Integrate the packed state forward
        let leftover = if world.body_count() == 0 {
            0.0
        } else {
            let x0 = pack_bodies(world.bodies());
            let result = {
                let deriv = RigidBodyDerivative::new(world.bodies(), self.forces.as_ref());
                self.solver.integrate(&x0, t0, t0 + dt, &deriv)?
            };
            unpack_bodies(world.bodies_mut(), &result.state);
            result.leftover
        };

        // 3. Optional drift control for the rotation submatrices
        if self.config.renormalize_rotation {
            for body in world.bodies_mut() {
                body.orthonormalize_rotation();
            }
        }

        // 4. The clock tracks the state: uncovered time is carried into the
        //    next tick's integration interval
        world.advance_time(dt - leftover);

        Ok(StepReport {
            leftover,
            resolution,
        })
    }
}
