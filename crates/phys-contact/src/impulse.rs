//! Two-body impulse response.

use nalgebra::Vector3;
use phys_types::{Contact, RigidBody};

use crate::classify::relative_normal_velocity;

/// Borrow two distinct bodies mutably from one arena slice.
///
/// Returns `None` when both handles refer to the same body; a contact of a
/// body with itself is meaningless and is skipped by the resolver.
fn pair_mut(bodies: &mut [RigidBody], i: usize, j: usize) -> Option<(&mut RigidBody, &mut RigidBody)> {
    match i.cmp(&j) {
        std::cmp::Ordering::Less => {
            let (lo, hi) = bodies.split_at_mut(j);
            Some((&mut lo[i], &mut hi[0]))
        }
        std::cmp::Ordering::Greater => {
            let (lo, hi) = bodies.split_at_mut(i);
            Some((&mut hi[0], &mut lo[j]))
        }
        std::cmp::Ordering::Equal => None,
    }
}

/// Apply the collision impulse for one contact.
///
/// Computes the impulse magnitude along the contact normal from the
/// classical two-body formula, adds `j * n` to body A's linear momentum and
/// subtracts it from body B's, applies the matching angular impulses
/// `ra x jn` and `-rb x jn`, and recomputes both bodies' derived
/// velocities. Total linear momentum of the pair is conserved exactly.
///
/// `restitution` is the coefficient of restitution in `[0, 1]`: 0 is fully
/// inelastic, 1 perfectly elastic.
///
/// Contacts whose two handles refer to the same body are ignored.
///
/// # Panics
///
/// Panics if either body handle is out of bounds for `bodies`.
pub fn apply_impulse(bodies: &mut [RigidBody], contact: &Contact, restitution: f64) {
    let vrel = relative_normal_velocity(bodies, contact);

    let Some((a, b)) = pair_mut(bodies, contact.body_a.index(), contact.body_b.index()) else {
        tracing::warn!(
            body = %contact.body_a,
            "contact references the same body twice, skipping"
        );
        return;
    };

    let n = contact.normal;
    let ra = contact.point - a.position;
    let rb = contact.point - b.position;

    let numerator = -(1.0 + restitution) * vrel;

    // Denominator: the four effective-mass terms
    let term1 = 1.0 / a.mass;
    let term2 = 1.0 / b.mass;
    let term3 = n.dot(&(a.inv_inertia * ra.cross(&n)).cross(&ra));
    let term4 = n.dot(&(b.inv_inertia * rb.cross(&n)).cross(&rb));

    let j = numerator / (term1 + term2 + term3 + term4);
    let impulse: Vector3<f64> = j * n;

    a.linear_momentum += impulse;
    b.linear_momentum -= impulse;
    a.angular_momentum += ra.cross(&impulse);
    b.angular_momentum -= rb.cross(&impulse);

    a.sync_derived();
    b.sync_derived();
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::{Matrix3, Point3};
    use phys_types::BodyId;

    fn head_on_pair(ma: f64, mb: f64, va: f64, vb: f64) -> (Vec<RigidBody>, Contact) {
        let mut a = RigidBody::new(ma, Point3::new(-1.0, 0.0, 0.0), Matrix3::identity()).unwrap();
        let mut b = RigidBody::new(mb, Point3::new(1.0, 0.0, 0.0), Matrix3::identity()).unwrap();
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
    fn test_elastic_head_on_exchanges_velocities() {
        let (mut bodies, contact) = head_on_pair(1.0, 1.0, 1.0, -1.0);
        apply_impulse(&mut bodies, &contact, 1.0);

        assert_relative_eq!(bodies[0].velocity.x, -1.0, epsilon = 1e-5);
        assert_relative_eq!(bodies[1].velocity.x, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_inelastic_head_on_stops_equal_pair() {
        let (mut bodies, contact) = head_on_pair(1.0, 1.0, 1.0, -1.0);
        apply_impulse(&mut bodies, &contact, 0.0);

        assert_relative_eq!(bodies[0].velocity.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(bodies[1].velocity.x, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_momentum_conserved_for_any_restitution() {
        for &e in &[0.0, 0.25, 0.5, 0.75, 1.0] {
            let (mut bodies, contact) = head_on_pair(2.0, 3.0, 2.0, -0.5);
            let before = bodies[0].linear_momentum + bodies[1].linear_momentum;

            apply_impulse(&mut bodies, &contact, e);

            let after = bodies[0].linear_momentum + bodies[1].linear_momentum;
            assert_relative_eq!(before, after, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_impulse_updates_derived_velocities() {
        let (mut bodies, contact) = head_on_pair(1.0, 1.0, 1.0, -1.0);
        apply_impulse(&mut bodies, &contact, 1.0);

        // velocity = momentum / mass must hold after the impulse
        for body in &bodies {
            assert_relative_eq!(
                body.velocity,
                body.linear_momentum / body.mass,
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_off_centre_contact_spins_bodies() {
        // Contact above the line of centres gives the pair angular momentum
        let mut a = RigidBody::new(1.0, Point3::new(-1.0, 0.0, 0.0), Matrix3::identity()).unwrap();
        let mut b = RigidBody::new(1.0, Point3::new(1.0, 0.0, 0.0), Matrix3::identity()).unwrap();
        a.set_velocity(Vector3::new(1.0, 0.0, 0.0));
        b.set_velocity(Vector3::new(-1.0, 0.0, 0.0));
        let mut bodies = vec![a, b];

        let contact = Contact::vertex_face(
            BodyId::new(0),
            BodyId::new(1),
            Point3::new(0.0, 0.5, 0.0),
            Vector3::new(-1.0, 0.0, 0.0),
        );
        apply_impulse(&mut bodies, &contact, 1.0);

        assert!(bodies[0].angular_momentum.norm() > 0.0);
        // Equal and opposite angular impulses about each body's own centre
        // still conserve linear momentum
        let total = bodies[0].linear_momentum + bodies[1].linear_momentum;
        assert_relative_eq!(total.norm(), 0.0, epsilon = 1e-10);
    }

    #[test]
    fn test_self_contact_is_ignored() {
        let (mut bodies, _) = head_on_pair(1.0, 1.0, 1.0, -1.0);
        let degenerate = Contact::vertex_face(
            BodyId::new(0),
            BodyId::new(0),
            Point3::origin(),
            Vector3::x(),
        );
        let before = bodies[0];
        apply_impulse(&mut bodies, &degenerate, 1.0);
        assert_eq!(bodies[0], before);
    }
}
