//! Impulse-based collision classification and response.
//!
//! This crate implements the velocity-level contact model: given a batch of
//! candidate contacts from the broad/narrow-phase collaborator, it decides
//! which are actually colliding and applies instantaneous impulses until the
//! whole batch is free of approaching contacts.
//!
//! # Contact Classification
//!
//! Each contact is classified by the relative velocity of the two bodies at
//! the contact point, projected onto the contact normal:
//!
//! ```text
//! vrel = n . (vel_at_point(A) - vel_at_point(B))
//!
//! vrel >  THRESHOLD   separating      no response
//! |vrel| <= THRESHOLD  resting         no response
//! vrel < -THRESHOLD   colliding       impulse applied
//! ```
//!
//! # Impulse Response
//!
//! A colliding contact receives the classical two-body impulse along the
//! normal:
//!
//! ```text
//! j = -(1 + e) * vrel
//!     ---------------------------------------------------------------
//!     1/mA + 1/mB + n.((Ia'(ra x n)) x ra) + n.((Ib'(rb x n)) x rb)
//! ```
//!
//! where `e` is the restitution coefficient and `ra`, `rb` the contact
//! offsets from each body's centre. The impulse updates the momenta of both
//! bodies symmetrically, so the pair's total linear momentum is conserved
//! exactly (up to floating point).
//!
//! # Example
//!
//! ```
//! use phys_contact::{classify, resolve_all, ContactState, ResolutionConfig};
//! use phys_types::{BodyId, Contact, RigidBody};
//! use nalgebra::{Matrix3, Point3, Vector3};
//!
//! // Two 1 kg bodies approaching head-on along X
//! let mut a = RigidBody::new(1.0, Point3::new(-1.0, 0.0, 0.0), Matrix3::identity()).unwrap();
//! let mut b = RigidBody::new(1.0, Point3::new(1.0, 0.0, 0.0), Matrix3::identity()).unwrap();
//! a.set_velocity(Vector3::new(1.0, 0.0, 0.0));
//! b.set_velocity(Vector3::new(-1.0, 0.0, 0.0));
//! let mut bodies = vec![a, b];
//!
//! // Contact at the midpoint; normal points from B towards A
//! let contact = Contact::vertex_face(
//!     BodyId::new(0),
//!     BodyId::new(1),
//!     Point3::origin(),
//!     Vector3::new(-1.0, 0.0, 0.0),
//! );
//!
//! assert_eq!(classify(&bodies, &contact), ContactState::Colliding);
//!
//! let report = resolve_all(&mut bodies, &[contact], &ResolutionConfig::default());
//! assert!(report.converged);
//! assert_eq!(classify(&bodies, &contact), ContactState::Separating);
//! ```

#![doc(html_root_url = "https://docs.rs/phys-contact/0.1.0")]
#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(clippy::missing_const_for_fn)]

mod batch;
mod classify;
mod impulse;

pub use batch::{resolve_all, ResolutionConfig, ResolutionReport};
pub use classify::{classify, colliding, relative_normal_velocity, ContactState, RESTING_THRESHOLD};
pub use impulse::apply_impulse;

// Re-export the contact types this crate consumes
pub use phys_types::{BodyId, Contact, ContactKind};
