//! Contact descriptions between rigid bodies.
//!
//! Contacts are transient: the broad/narrow-phase collaborator produces a
//! fresh batch each tick, the resolver consumes it, and the batch is
//! discarded. Bodies are referenced by [`BodyId`] arena handles, so a batch
//! stays valid even if the body arena grows while it is outstanding.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::BodyId;

/// How the narrow phase classified the touching geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ContactKind {
    /// A vertex of body A against a face of body B.
    VertexFace,
    /// An edge of body A against an edge of body B.
    EdgeEdge,
}

/// A candidate or confirmed touching event between two bodies.
///
/// `normal` is the outward normal of the touched face on body B, pointing
/// towards body A. The resolver classifies each contact by the relative
/// velocity of the bodies at `point` along `normal`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Contact {
    /// The body containing the vertex (or first edge).
    pub body_a: BodyId,
    /// The body containing the face (or second edge).
    pub body_b: BodyId,
    /// World-space contact location.
    pub point: Point3<f64>,
    /// Outward face normal at the contact, unit length.
    pub normal: Vector3<f64>,
    /// Vertex/face versus edge/edge classification.
    pub kind: ContactKind,
}

impl Contact {
    /// Create a vertex/face contact.
    #[must_use]
    pub fn vertex_face(
        body_a: BodyId,
        body_b: BodyId,
        point: Point3<f64>,
        normal: Vector3<f64>,
    ) -> Self {
        Self {
            body_a,
            body_b,
            point,
            normal,
            kind: ContactKind::VertexFace,
        }
    }

    /// Create an edge/edge contact.
    #[must_use]
    pub fn edge_edge(
        body_a: BodyId,
        body_b: BodyId,
        point: Point3<f64>,
        normal: Vector3<f64>,
    ) -> Self {
        Self {
            body_a,
            body_b,
            point,
            normal,
            kind: ContactKind::EdgeEdge,
        }
    }
}
