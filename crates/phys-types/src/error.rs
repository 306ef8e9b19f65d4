//! Error types for physics operations.

use thiserror::Error;

/// Errors that can occur in the physics stack.
///
/// All errors are local and synchronous; this is deterministic numerical
/// code, so there are no retry semantics. Validation errors are raised
/// before any mutation occurs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PhysError {
    /// Non-positive or non-finite integration step size.
    #[error("invalid step size: {0} (must be positive and finite)")]
    InvalidStepSize(f64),

    /// The initial state vector passed to an integrator was empty.
    #[error("initial state vector cannot be empty")]
    EmptyState,

    /// Non-increasing integration time range.
    #[error("invalid time range: t1 = {t1} must be greater than t0 = {t0}")]
    InvalidTimeRange {
        /// Start of the requested interval.
        t0: f64,
        /// End of the requested interval.
        t1: f64,
    },

    /// Unrecognized solver name passed to the factory.
    #[error("unknown solver type: {0:?}")]
    UnknownSolver(String),

    /// Non-positive or non-finite body mass.
    #[error("invalid mass: {0} (must be positive and finite)")]
    InvalidMass(f64),

    /// The inertia tensor is singular and cannot be inverted.
    #[error("inertia tensor is singular (degenerate mass distribution)")]
    SingularInertia,

    /// Invalid simulation configuration.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the configuration error.
        reason: String,
    },
}

impl PhysError {
    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Check if this is a configuration error.
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::InvalidConfig { .. })
    }
}
