//! Rigid-body simulation engine.
//!
//! This crate provides the numerical core of the physics stack: fixed-step
//! ODE solvers over packed state vectors, the rigid-body derivative
//! evaluator, mass-property extraction from triangle meshes, axis-aligned
//! bounding boxes for broad-phase culling, and the per-tick orchestration
//! that ties contact resolution and integration together.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Stepper                               │
//! │  One tick: resolve contacts → integrate → derive velocities │
//! └─────────────────────────┬───────────────────────────────────┘
//!                           │
//!            ┌──────────────┼──────────────────┐
//!            ▼              ▼                  ▼
//! ┌────────────────┐ ┌─────────────┐ ┌──────────────────────┐
//! │  phys-contact  │ │    World    │ │     ode solvers      │
//! │ impulse batch  │ │ body arena  │ │ Euler / RK4, packed  │
//! └────────────────┘ └─────────────┘ │   state + Derivative │
//!                                    └──────────────────────┘
//! ```
//!
//! Mass properties ([`mass`]) are computed once per mesh at load time and
//! cached on the body; bounding boxes ([`bounds`]) feed the external
//! broad-phase collaborator that produces the contact batches.
//!
//! # Quick Start
//!
//! ```
//! use phys_core::{Stepper, World};
//! use phys_types::{RigidBody, SimulationConfig};
//! use nalgebra::{Matrix3, Point3};
//!
//! let mut world = World::new(SimulationConfig::default());
//! let ball = world.add_body(
//!     RigidBody::new(1.0, Point3::new(0.0, 10.0, 0.0), Matrix3::identity()).unwrap(),
//! );
//!
//! let mut stepper = Stepper::new(world.config().clone()).unwrap();
//! for _ in 0..60 {
//!     stepper.step(&mut world, &[]).unwrap();
//! }
//!
//! // One second of free fall under gravity
//! let body = world.body(ball).unwrap();
//! assert!(body.position.y < 10.0);
//! ```

#![doc(html_root_url = "https://docs.rs/phys-core/0.1.0")]
#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(
    clippy::missing_const_for_fn,     // Many methods can't be const due to nalgebra
    clippy::suboptimal_flops,          // mul_add style changes aren't always clearer
)]

pub mod bounds;
pub mod dynamics;
pub mod mass;
pub mod ode;
mod stepper;
mod world;

pub use bounds::Aabb;
pub use dynamics::{star, ForceModel, Gravity, RigidBodyDerivative};
pub use mass::{
    body_from_mesh, centre_of_mass_and_volume, inertia_tensor, inverse_inertia_tensor,
};
pub use ode::{create_solver, Derivative, EulerSolver, Integration, OdeSolver, Rk4Solver};
pub use stepper::{StepReport, Stepper};
pub use world::World;

// Re-export key types from the lower layers for convenience
pub use phys_contact::{ResolutionConfig, ResolutionReport};
pub use phys_types::{
    BodyId, Contact, ContactKind, PhysError, RigidBody, SimulationConfig, SolverKind, STATE_SIZE,
};
