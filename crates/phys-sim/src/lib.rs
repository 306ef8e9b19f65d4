//! Unified physics simulation API.
//!
//! This crate re-exports the complete rigid-body physics stack:
//!
//! - [`phys_types`] - Core data types (bodies, contacts, packed state, config)
//! - [`phys_contact`] - Impulse-based collision classification and response
//! - [`phys_core`] - Simulation engine (ODE solvers, mass properties, world,
//!   stepper)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                phys-sim (this crate)                │
//! │               Unified API / re-exports              │
//! └─────────────────────────────────────────────────────┘
//!                           │
//!              ┌────────────┴────────────┐
//!              ▼                         ▼
//!    ┌──────────────────┐     ┌──────────────────┐
//!    │    phys-core     │────▶│   phys-contact   │
//!    │ World, Stepper,  │     │ classify, batch  │
//!    │ ode, mass, aabb  │     │ impulse response │
//!    └────────┬─────────┘     └────────┬─────────┘
//!             │                        │
//!             └───────────┬────────────┘
//!                         ▼
//!               ┌──────────────────┐
//!               │    phys-types    │
//!               │   Data structs   │
//!               └──────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```
//! use phys_sim::prelude::*;
//!
//! // A world with one body built from a mesh
//! let vertices = [
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//!     Point3::new(0.0, 0.0, 1.0),
//! ];
//! let indices = [0, 2, 1, 0, 1, 3, 0, 3, 2, 1, 2, 3];
//!
//! let mut world = World::new(SimulationConfig::default());
//! let id = world.add_body(body_from_mesh(&vertices, &indices, 1000.0).unwrap());
//!
//! // Simulate one second of free fall
//! let mut stepper = Stepper::new(world.config().clone()).unwrap();
//! for _ in 0..60 {
//!     stepper.step(&mut world, &[]).unwrap();
//! }
//!
//! let transform = world.body(id).unwrap().world_transform();
//! // ... hand the transform to the renderer
//! ```

#![doc(html_root_url = "https://docs.rs/phys-sim/0.1.0")]
#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]

// Re-export sub-crates
pub use phys_contact;
pub use phys_core;
pub use phys_types;

// Re-export nalgebra for convenience
pub use nalgebra;

/// Prelude module for convenient imports.
///
/// ```
/// use phys_sim::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use phys_types::{
        BodyId, Contact, ContactKind, PhysError, RigidBody, SimulationConfig, SolverKind,
        STATE_SIZE,
    };

    // State codec
    pub use phys_types::{pack_bodies, unpack_bodies};

    // Simulation engine
    pub use phys_core::{
        body_from_mesh, centre_of_mass_and_volume, inertia_tensor, inverse_inertia_tensor, Aabb,
        Stepper, StepReport, World,
    };

    // ODE solvers
    pub use phys_core::ode::{
        create_solver, Derivative, EulerSolver, Integration, OdeSolver, Rk4Solver,
    };

    // Dynamics
    pub use phys_core::{star, ForceModel, Gravity, RigidBodyDerivative};

    // Collision response
    pub use phys_contact::{
        apply_impulse, classify, colliding, relative_normal_velocity, resolve_all, ContactState,
        ResolutionConfig, ResolutionReport, RESTING_THRESHOLD,
    };

    // Math types
    pub use nalgebra::{Affine3, Matrix3, Point3, Vector3};
}
