//! Core data types for rigid-body physics simulation.
//!
//! This crate provides the foundational types shared by the physics stack:
//!
//! - [`RigidBody`] - One simulated solid: mass, position, orientation, momenta
//! - [`Contact`] - A candidate or confirmed touching event between two bodies
//! - [`BodyId`] - Stable arena handle referencing a body
//! - [`SimulationConfig`] - Timestep, solver selection, contact settings
//! - [`PhysError`] - Error taxonomy for the whole stack
//!
//! It also defines the packed state-vector layout ([`STATE_SIZE`] scalars per
//! body) used by the ODE integrators, together with the codec that moves one
//! body in and out of a flat buffer.
//!
//! # Design Philosophy
//!
//! These types are **pure data**. They have no integration loop, no collision
//! logic, no force models. They're the common language between:
//!
//! - The simulation engine (phys-core)
//! - The collision resolver (phys-contact)
//! - External collaborators (renderer, asset loader) that consume transforms
//!   and produce meshes
//!
//! # Coordinate System
//!
//! - X: right
//! - Y: up
//! - Z: towards the viewer
//! - Right-handed
//!
//! # Example
//!
//! ```
//! use phys_types::RigidBody;
//! use nalgebra::{Matrix3, Point3, Vector3};
//!
//! // A 2 kg body at rest, one metre up
//! let body = RigidBody::new(
//!     2.0,
//!     Point3::new(0.0, 1.0, 0.0),
//!     Matrix3::identity(),
//! ).unwrap();
//!
//! assert_eq!(body.position.y, 1.0);
//! assert!(body.velocity.norm() < 1e-12);
//! ```

#![doc(html_root_url = "https://docs.rs/phys-types/0.1.0")]
#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(
    clippy::missing_const_for_fn,     // Many methods can't be const due to nalgebra
    clippy::suboptimal_flops,          // mul_add style changes aren't always clearer
)]

mod body;
mod config;
mod contact;
mod error;
mod state;

pub use body::{BodyId, RigidBody};
pub use config::{SimulationConfig, SolverKind};
pub use contact::{Contact, ContactKind};
pub use error::PhysError;
pub use state::{pack_bodies, unpack_bodies, STATE_SIZE};

// Re-export math types for convenience
pub use nalgebra::{Affine3, Matrix3, Point3, Vector3};

/// Result type for physics operations.
pub type Result<T> = std::result::Result<T, PhysError>;
