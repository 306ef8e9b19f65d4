//! Three-way contact classification.

use phys_types::{Contact, RigidBody};

/// Numerical tolerance separating colliding, resting, and separating
/// contacts. Relative normal velocities within `±RESTING_THRESHOLD` are
/// treated as resting.
pub const RESTING_THRESHOLD: f64 = 1e-6;

/// The three-way classification of a contact at an instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactState {
    /// The bodies are moving apart at the contact; no response needed.
    Separating,
    /// The relative normal velocity is within tolerance of zero; the
    /// contact persists but needs no impulse.
    Resting,
    /// The bodies are approaching at the contact; an impulse is required.
    Colliding,
}

/// Relative velocity of the two bodies at the contact point, projected onto
/// the contact normal.
///
/// Positive means body A moves away from body B along the normal.
///
/// # Panics
///
/// Panics if either body handle is out of bounds for `bodies`.
#[must_use]
pub fn relative_normal_velocity(bodies: &[RigidBody], contact: &Contact) -> f64 {
    let pa_dot = bodies[contact.body_a.index()].velocity_at_point(&contact.point);
    let pb_dot = bodies[contact.body_b.index()].velocity_at_point(&contact.point);
    contact.normal.dot(&(pa_dot - pb_dot))
}

/// Classify a contact as separating, resting, or colliding.
#[must_use]
pub fn classify(bodies: &[RigidBody], contact: &Contact) -> ContactState {
    let vrel = relative_normal_velocity(bodies, contact);

    if vrel > RESTING_THRESHOLD {
        ContactState::Separating
    } else if vrel > -RESTING_THRESHOLD {
        ContactState::Resting
    } else {
        ContactState::Colliding
    }
}

/// True iff the contact needs an impulse (the bodies are approaching).
///
/// Resting contacts are not colliding.
#[must_use]
pub fn colliding(bodies: &[RigidBody], contact: &Contact) -> bool {
    classify(bodies, contact) == ContactState::Colliding
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::{Matrix3, Point3, Vector3};
    use phys_types::BodyId;

    /// Two unit-mass bodies on the X axis with a contact at the origin,
    /// normal pointing from B towards A (towards -X is A's side here).
    fn head_on_pair(va: f64, vb: f64) -> (Vec<RigidBody>, Contact) {
        let mut a =
            RigidBody::new(1.0, Point3::new(-1.0, 0.0, 0.0), Matrix3::identity()).unwrap();
        let mut b = RigidBody::new(1.0, Point3::new(1.0, 0.0, 0.0), Matrix3::identity()).unwrap();
        a.set_velocity(Vector3::new(va, 0.0, 0.0));
        b.set_velocity(Vector3::new(vb, 0.0, 0.0));

        let contact = Contact::vertex_face(
            BodyId::new(0),
            BodyId::new(1),
            Point3::origin(),
            Vector3::new(-1.0, 0.0, 0.0),
        );
        (vec![a, b], contact)
    }

    #[test]
    fn test_approaching_is_colliding() {
        let (bodies, contact) = head_on_pair(1.0, -1.0);
        // n = -x, relative velocity = (1 - -1) x = 2x, vrel = -2
        assert_relative_eq!(
            relative_normal_velocity(&bodies, &contact),
            -2.0,
            epsilon = 1e-12
        );
        assert_eq!(classify(&bodies, &contact), ContactState::Colliding);
        assert!(colliding(&bodies, &contact));
    }

    #[test]
    fn test_separating_is_not_colliding() {
        let (bodies, contact) = head_on_pair(-1.0, 1.0);
        assert_eq!(classify(&bodies, &contact), ContactState::Separating);
        assert!(!colliding(&bodies, &contact));
    }

    #[test]
    fn test_resting_band_is_not_colliding() {
        // Relative normal velocity inside the tolerance band
        let (bodies, contact) = head_on_pair(1e-8, -1e-8);
        assert_eq!(classify(&bodies, &contact), ContactState::Resting);
        assert!(!colliding(&bodies, &contact));
    }

    #[test]
    fn test_angular_velocity_contributes() {
        // Body A at rest but spinning; the contact point is off-centre, so
        // its surface velocity drives the classification.
        let (mut bodies, contact) = head_on_pair(0.0, 0.0);
        bodies[0].angular_momentum = Vector3::new(0.0, 0.0, 2.0);
        bodies[0].sync_derived();

        // omega x r = (0,0,2) x (1,0,0) = (0,2,0): tangential, not colliding
        assert_eq!(classify(&bodies, &contact), ContactState::Resting);

        // Spin about Y instead: (0,2,0) x (1,0,0) = (0,0,-2), still tangential
        // to the X normal. Use an off-axis contact point to get approach.
        let contact_above = Contact::vertex_face(
            BodyId::new(0),
            BodyId::new(1),
            Point3::new(0.0, 1.0, 0.0),
            Vector3::new(-1.0, 0.0, 0.0),
        );
        bodies[0].angular_momentum = Vector3::new(0.0, 0.0, -2.0);
        bodies[0].sync_derived();
        // omega x r = (0,0,-2) x (1,1,0) = (2,-2,0): vrel = -2 along -X
        assert_eq!(classify(&bodies, &contact_above), ContactState::Colliding);
    }
}
