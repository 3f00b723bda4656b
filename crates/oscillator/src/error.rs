//! Error types for the oscillator crate.
//!
//! Simulation itself never fails: every tick and observation is total.
//! The only fallible step is validating an [`OscillatorConfig`] before a
//! session starts.
//!
//! [`OscillatorConfig`]: crate::OscillatorConfig

use thiserror::Error;

/// A configuration value that would make the simulation meaningless.
///
/// Returned by [`OscillatorConfig::validate`](crate::OscillatorConfig::validate).
///
/// # Example
///
/// ```rust
/// use oscillator::{ConfigError, OscillatorConfig};
///
/// let err = OscillatorConfig::default().with_mass(0.0).validate().unwrap_err();
/// assert!(matches!(err, ConfigError::NonPositiveMass(_)));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A field holds NaN or an infinity.
    #[error("{field} must be finite, got {value}")]
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Mass is zero or negative. Acceleration would be undefined.
    #[error("mass must be positive, got {0}")]
    NonPositiveMass(f64),

    /// Stiffness is negative.
    #[error("stiffness must not be negative, got {0}")]
    NegativeStiffness(f64),

    /// Damping coefficient is negative.
    #[error("damping coefficient must not be negative, got {0}")]
    NegativeDamping(f64),

    /// The displacement limits are empty or inverted.
    #[error("displacement limits are inverted: min {min} must be below max {max}")]
    InvertedLimits {
        /// Lower limit.
        min: f64,
        /// Upper limit.
        max: f64,
    },

    /// The initial displacement lies outside the limits.
    #[error("initial displacement {value} is outside [{min}, {max}]")]
    InitialOutOfRange {
        /// The rejected initial displacement.
        value: f64,
        /// Lower limit.
        min: f64,
        /// Upper limit.
        max: f64,
    },

    /// The displacement step is zero or negative.
    #[error("displacement step must be positive, got {0}")]
    NonPositiveStep(f64),

    /// The history buffer would hold nothing.
    #[error("history capacity must be at least 1")]
    ZeroCapacity,

    /// The motion axis has no direction.
    #[error("motion axis must be a non-zero vector")]
    DegenerateAxis,
}

/// A specialized [`Result`] type for oscillator operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
