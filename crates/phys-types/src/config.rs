//! Simulation configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Result;

/// Which fixed-step ODE solver advances the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SolverKind {
    /// Explicit Euler: one derivative evaluation per step.
    Euler,
    /// Fourth-order Runge-Kutta: four evaluations, far more accurate.
    #[default]
    RungeKutta4,
}

impl SolverKind {
    /// The factory name of this solver (see `phys_core::ode::create_solver`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Euler => "euler",
            Self::RungeKutta4 => "rk4",
        }
    }
}

/// Configuration for one simulation.
///
/// Passed explicitly into each tick; there is no global simulation state.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimulationConfig {
    /// Tick length in seconds: how far each `step` call advances the clock.
    pub timestep: f64,
    /// Inner integration step size in seconds.
    ///
    /// When this does not evenly divide `timestep`, each tick reports
    /// leftover time and the caller decides whether to re-integrate the
    /// remainder or carry it.
    pub step_size: f64,
    /// ODE solver used to advance the packed state.
    pub solver: SolverKind,
    /// Coefficient of restitution applied to colliding contacts, in [0, 1].
    pub restitution: f64,
    /// Maximum number of full passes over a contact batch before the
    /// resolver gives up (see `phys_contact::resolve_all`).
    pub max_resolution_passes: usize,
    /// Re-orthonormalize every body's rotation matrix after each tick.
    ///
    /// Off by default: the drift of the rotation submatrix under explicit
    /// integration is a property of the formulation. Enable for
    /// long-running scenes.
    pub renormalize_rotation: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            timestep: 1.0 / 60.0,
            step_size: 1.0 / 240.0,
            solver: SolverKind::default(),
            restitution: 0.5,
            max_resolution_passes: 64,
            renormalize_rotation: false,
        }
    }
}

impl SimulationConfig {
    /// Create a configuration with the given tick length, integrating with
    /// a matching inner step.
    #[must_use]
    pub fn with_timestep(timestep: f64) -> Self {
        Self {
            timestep,
            step_size: timestep,
            ..Default::default()
        }
    }

    /// Set the solver.
    #[must_use]
    pub fn solver(mut self, solver: SolverKind) -> Self {
        self.solver = solver;
        self
    }

    /// Set the restitution coefficient.
    #[must_use]
    pub fn restitution(mut self, restitution: f64) -> Self {
        self.restitution = restitution;
        self
    }

    /// Enable per-tick rotation re-orthonormalization.
    #[must_use]
    pub fn with_renormalization(mut self) -> Self {
        self.renormalize_rotation = true;
        self
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PhysError::InvalidConfig`] if any field is out of
    /// range. Nothing is clamped.
    pub fn validate(&self) -> Result<()> {
        if !self.timestep.is_finite() || self.timestep <= 0.0 {
            return Err(crate::PhysError::invalid_config(format!(
                "timestep must be positive and finite, got {}",
                self.timestep
            )));
        }
        if !self.step_size.is_finite() || self.step_size <= 0.0 {
            return Err(crate::PhysError::invalid_config(format!(
                "step_size must be positive and finite, got {}",
                self.step_size
            )));
        }
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(crate::PhysError::invalid_config(format!(
                "restitution must be in [0, 1], got {}",
                self.restitution
            )));
        }
        if self.max_resolution_passes == 0 {
            return Err(crate::PhysError::invalid_config(
                "max_resolution_passes must be at least 1",
            ));
        }
        Ok(())
    }
}
