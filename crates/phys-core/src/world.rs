//! Simulation world: the body arena.
//!
//! The [`World`] owns every rigid body in a scene plus the simulation
//! clock and configuration. Bodies live in a growable arena addressed by
//! [`BodyId`] index handles; growing the arena never invalidates a handle,
//! and bodies live until the world is dropped. There is no global world:
//! every tick receives the world and its contact batch explicitly.

use hashbrown::HashMap;
use nalgebra::Vector3;
use phys_types::{BodyId, RigidBody, SimulationConfig};

/// The simulation state container.
///
/// # Example
///
/// ```
/// use phys_core::World;
/// use phys_types::{RigidBody, SimulationConfig};
/// use nalgebra::{Matrix3, Point3};
///
/// let mut world = World::new(SimulationConfig::default());
/// let id = world.add_body_named(
///     "crate",
///     RigidBody::new(1.0, Point3::origin(), Matrix3::identity()).unwrap(),
/// );
///
/// assert_eq!(world.body_by_name("crate"), Some(id));
/// assert_eq!(world.body_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct World {
    bodies: Vec<RigidBody>,
    names: HashMap<String, BodyId>,
    config: SimulationConfig,
    time: f64,
}

impl Default for World {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}

impl World {
    /// Create an empty world.
    #[must_use]
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            bodies: Vec::new(),
            names: HashMap::new(),
            config,
            time: 0.0,
        }
    }

    /// Add a body, returning its handle.
    pub fn add_body(&mut self, body: RigidBody) -> BodyId {
        let id = BodyId::new(self.bodies.len());
        self.bodies.push(body);
        id
    }

    /// Add a body under a name for later lookup.
    ///
    /// A repeated name rebinds to the new body; the old body stays in the
    /// arena.
    pub fn add_body_named(&mut self, name: impl Into<String>, body: RigidBody) -> BodyId {
        let id = self.add_body(body);
        self.names.insert(name.into(), id);
        id
    }

    /// Look up a body handle by name.
    #[must_use]
    pub fn body_by_name(&self, name: &str) -> Option<BodyId> {
        self.names.get(name).copied()
    }

    /// Get a body by handle.
    #[must_use]
    pub fn body(&self, id: BodyId) -> Option<&RigidBody> {
        self.bodies.get(id.index())
    }

    /// Get a body mutably by handle.
    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut RigidBody> {
        self.bodies.get_mut(id.index())
    }

    /// All bodies, in arena (packing) order.
    #[must_use]
    pub fn bodies(&self) -> &[RigidBody] {
        &self.bodies
    }

    /// All bodies mutably, in arena (packing) order.
    pub fn bodies_mut(&mut self) -> &mut [RigidBody] {
        &mut self.bodies
    }

    /// Number of bodies in the arena.
    #[must_use]
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// The simulation configuration.
    #[must_use]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Current simulation time in seconds.
    #[must_use]
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Advance the simulation clock. Called by the stepper.
    pub(crate) fn advance_time(&mut self, dt: f64) {
        self.time += dt;
    }

    /// Total linear momentum over all bodies.
    #[must_use]
    pub fn total_linear_momentum(&self) -> Vector3<f64> {
        self.bodies
            .iter()
            .fold(Vector3::zeros(), |sum, b| sum + b.linear_momentum)
    }

    /// Total kinetic energy over all bodies.
    #[must_use]
    pub fn total_kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(RigidBody::kinetic_energy).sum()
    }
}
