//! Mass properties from closed triangle meshes.
//!
//! Centre of mass, volume, and inertia tensor are computed analytically by
//! summing signed tetrahedra from the origin to each surface triangle. The
//! mesh must be closed and consistently wound for the results to be
//! meaningful; interior contributions cancel between oppositely-signed
//! tetrahedra, which is what makes the surface integral exact.
//!
//! These quantities are computed once per mesh at load time and cached on
//! the rigid body.
//!
//! # Example
//!
//! ```
//! use phys_core::mass::centre_of_mass_and_volume;
//! use nalgebra::Point3;
//!
//! // Unit tetrahedron, consistently wound
//! let vertices = [
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//!     Point3::new(0.0, 0.0, 1.0),
//! ];
//! let indices = [0, 2, 1, 0, 1, 3, 0, 3, 2, 1, 2, 3];
//!
//! let (com, volume) = centre_of_mass_and_volume(&vertices, &indices);
//! assert!((volume - 1.0 / 6.0).abs() < 1e-12);
//! assert!((com.x - 0.25).abs() < 1e-12);
//! ```

use nalgebra::{Matrix3, Point3, Vector3};
use phys_types::{PhysError, Result, RigidBody};

/// Check that `indices` is a list of triangle triples into `vertices`.
fn validate_indices(vertices: &[Point3<f64>], indices: &[usize]) {
    assert!(
        indices.len() % 3 == 0,
        "triangle indices must be a multiple of 3"
    );
    for &idx in indices {
        assert!(
            idx < vertices.len(),
            "triangle index {} out of bounds (vertex count: {})",
            idx,
            vertices.len()
        );
    }
}

/// Centre of mass and volume of a closed triangle mesh.
///
/// For each triangle `(v0, v1, v2)`, the determinant of the column matrix
/// `[v0 v1 v2]` is six times the signed volume of the tetrahedron spanned
/// by the origin and the triangle. Accumulating the determinants and their
/// vertex sums gives
///
/// ```text
/// com    = sum(det * (v0 + v1 + v2)) / (4 * sum(det))
/// volume = |sum(det)| / 6
/// ```
///
/// A degenerate or empty mesh (zero accumulated signed volume) yields the
/// origin and zero volume; no division by zero occurs.
///
/// # Panics
///
/// Panics if `indices` is not a list of in-bounds triangle triples.
#[must_use]
pub fn centre_of_mass_and_volume(
    vertices: &[Point3<f64>],
    indices: &[usize],
) -> (Point3<f64>, f64) {
    validate_indices(vertices, indices);

    let mut volume_x6 = 0.0;
    let mut com_x24_x_volume = Vector3::zeros();

    for tri in indices.chunks_exact(3) {
        let v0 = vertices[tri[0]].coords;
        let v1 = vertices[tri[1]].coords;
        let v2 = vertices[tri[2]].coords;

        let det = Matrix3::from_columns(&[v0, v1, v2]).determinant();
        volume_x6 += det;
        com_x24_x_volume += det * (v0 + v1 + v2);
    }

    let com = if volume_x6 == 0.0 {
        Point3::origin()
    } else {
        Point3::from(com_x24_x_volume / (4.0 * volume_x6))
    };

    (com, volume_x6.abs() / 6.0)
}

/// Inertia tensor of a closed triangle mesh about `com`, unit density.
///
/// Each triangle, translated relative to `com`, contributes its
/// tetrahedron's analytic covariance
///
/// ```text
/// C += vol * (r0 r0' + r1 r1' + r2 r2' + r0 r1' + r1 r2' + r2 r0') / 10
/// ```
///
/// where `vol = r0 . (r1 x r2) / 6` is the signed tetra volume. The
/// accumulated covariance is symmetrized and converted to the physical
/// inertia tensor: diagonal entries are sums of the other two covariance
/// diagonals, off-diagonals are the negated covariance cross terms.
///
/// # Panics
///
/// Panics if `indices` is not a list of in-bounds triangle triples.
#[must_use]
pub fn inertia_tensor(
    vertices: &[Point3<f64>],
    indices: &[usize],
    com: &Point3<f64>,
) -> Matrix3<f64> {
    validate_indices(vertices, indices);

    let mut covariance = Matrix3::zeros();

    for tri in indices.chunks_exact(3) {
        let r0 = vertices[tri[0]] - com;
        let r1 = vertices[tri[1]] - com;
        let r2 = vertices[tri[2]] - com;

        let vol = r0.dot(&r1.cross(&r2)) / 6.0;

        let c = r0 * r0.transpose()
            + r1 * r1.transpose()
            + r2 * r2.transpose()
            + r0 * r1.transpose()
            + r1 * r2.transpose()
            + r2 * r0.transpose();

        covariance += vol * c / 10.0;
    }

    let covariance = 0.5 * (covariance + covariance.transpose());

    let mut inertia = Matrix3::zeros();
    inertia[(0, 0)] = covariance[(1, 1)] + covariance[(2, 2)];
    inertia[(1, 1)] = covariance[(0, 0)] + covariance[(2, 2)];
    inertia[(2, 2)] = covariance[(0, 0)] + covariance[(1, 1)];
    inertia[(0, 1)] = -covariance[(0, 1)];
    inertia[(1, 0)] = -covariance[(0, 1)];
    inertia[(1, 2)] = -covariance[(1, 2)];
    inertia[(2, 1)] = -covariance[(1, 2)];
    inertia[(0, 2)] = -covariance[(0, 2)];
    inertia[(2, 0)] = -covariance[(0, 2)];

    inertia
}

/// Invert an inertia tensor.
///
/// # Errors
///
/// Returns [`PhysError::SingularInertia`] for a degenerate mass
/// distribution (any mesh enclosing positive volume is non-singular).
pub fn inverse_inertia_tensor(inertia: &Matrix3<f64>) -> Result<Matrix3<f64>> {
    inertia.try_inverse().ok_or(PhysError::SingularInertia)
}

/// Build a rigid body from a closed triangle mesh and a uniform density.
///
/// The load-time path: centre of mass, volume, and inertia are extracted
/// once and cached on the body. The body is placed with its centre of mass
/// at the mesh's centre of mass, at rest.
///
/// # Errors
///
/// - [`PhysError::InvalidMass`] if the mesh encloses no volume
/// - [`PhysError::SingularInertia`] if the inertia tensor is degenerate
///
/// # Panics
///
/// Panics if `indices` is not a list of in-bounds triangle triples.
pub fn body_from_mesh(
    vertices: &[Point3<f64>],
    indices: &[usize],
    density: f64,
) -> Result<RigidBody> {
    let (com, volume) = centre_of_mass_and_volume(vertices, indices);
    let mass = density * volume;

    // Unit-density tensor scaled by density, like the mass
    let inertia = inertia_tensor(vertices, indices, &com) * density;
    let inv_inertia = inverse_inertia_tensor(&inertia)?;

    RigidBody::new(mass, com, inv_inertia)
}
