//! Physical and analysis configuration for an oscillator session.
//!
//! An [`OscillatorConfig`] is fixed once a session starts. Units are whatever
//! the rigid-body provider uses; the defaults mirror a 50 kg cube on a
//! 100 N/cm spring with a ±60 cm preview range.
//!
//! # Example
//!
//! ```rust
//! use oscillator::OscillatorConfig;
//!
//! let config = OscillatorConfig::new()
//!     .with_mass(1.0)
//!     .with_stiffness(100.0)
//!     .with_damping_coefficient(0.5)
//!     .with_history_capacity(600);
//!
//! assert!(config.validate().is_ok());
//! ```

use core::f64::consts::TAU;

use crate::error::{ConfigError, Result};
use crate::vector::Vector;

/// Configuration of the spring-damper system and its peak tracker.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct OscillatorConfig {
    /// Mass of the body. Must be positive.
    pub mass: f64,
    /// Spring stiffness `k`. Zero gives free motion.
    pub stiffness: f64,
    /// Viscous damping coefficient `c`.
    pub damping_coefficient: f64,
    /// Displacement the session starts from.
    pub initial_displacement: f64,
    /// Lower bound for the adjustable initial displacement.
    pub min_displacement: f64,
    /// Upper bound for the adjustable initial displacement.
    pub max_displacement: f64,
    /// Increment used by the raise/lower preview operations.
    pub displacement_step: f64,
    /// Number of displacement samples kept for analysis.
    pub history_capacity: usize,
    /// Motion axis. Normalized when the equilibrium is established.
    pub axis: Vector,
}

impl Default for OscillatorConfig {
    fn default() -> Self {
        Self {
            mass: 50.0,
            stiffness: 100.0,
            damping_coefficient: 0.0,
            initial_displacement: 0.0,
            min_displacement: -60.0,
            max_displacement: 60.0,
            displacement_step: 5.0,
            history_capacity: 1500,
            axis: Vector::UP,
        }
    }
}

impl OscillatorConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the mass.
    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    /// Sets the spring stiffness.
    pub fn with_stiffness(mut self, stiffness: f64) -> Self {
        self.stiffness = stiffness;
        self
    }

    /// Sets the damping coefficient.
    pub fn with_damping_coefficient(mut self, damping_coefficient: f64) -> Self {
        self.damping_coefficient = damping_coefficient;
        self
    }

    /// Sets the starting displacement.
    pub fn with_initial_displacement(mut self, displacement: f64) -> Self {
        self.initial_displacement = displacement;
        self
    }

    /// Sets the preview limits.
    pub fn with_limits(mut self, min: f64, max: f64) -> Self {
        self.min_displacement = min;
        self.max_displacement = max;
        self
    }

    /// Sets the preview step.
    pub fn with_displacement_step(mut self, step: f64) -> Self {
        self.displacement_step = step;
        self
    }

    /// Sets the history buffer capacity.
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Sets the motion axis.
    pub fn with_axis(mut self, axis: Vector) -> Self {
        self.axis = axis;
        self
    }

    /// Checks that the configuration describes a meaningful system.
    ///
    /// Sessions do not call this themselves; a zero mass, for instance, just
    /// produces non-finite accelerations. Callers are expected to validate
    /// before starting.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<()> {
        let scalars = [
            ("mass", self.mass),
            ("stiffness", self.stiffness),
            ("damping_coefficient", self.damping_coefficient),
            ("initial_displacement", self.initial_displacement),
            ("min_displacement", self.min_displacement),
            ("max_displacement", self.max_displacement),
            ("displacement_step", self.displacement_step),
            ("axis.x", self.axis.x),
            ("axis.y", self.axis.y),
            ("axis.z", self.axis.z),
        ];
        if let Some(&(field, value)) = scalars.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NonFinite { field, value });
        }

        if self.mass <= 0.0 {
            return Err(ConfigError::NonPositiveMass(self.mass));
        }
        if self.stiffness < 0.0 {
            return Err(ConfigError::NegativeStiffness(self.stiffness));
        }
        if self.damping_coefficient < 0.0 {
            return Err(ConfigError::NegativeDamping(self.damping_coefficient));
        }
        if self.min_displacement >= self.max_displacement {
            return Err(ConfigError::InvertedLimits {
                min: self.min_displacement,
                max: self.max_displacement,
            });
        }
        if !(self.min_displacement..=self.max_displacement).contains(&self.initial_displacement) {
            return Err(ConfigError::InitialOutOfRange {
                value: self.initial_displacement,
                min: self.min_displacement,
                max: self.max_displacement,
            });
        }
        if self.displacement_step <= 0.0 {
            return Err(ConfigError::NonPositiveStep(self.displacement_step));
        }
        if self.history_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.axis.magnitude() == 0.0 {
            return Err(ConfigError::DegenerateAxis);
        }
        Ok(())
    }

    /// The initial displacement clamped into the preview limits.
    ///
    /// Sessions start from this value, never from an out-of-range one.
    pub fn clamped_initial_displacement(&self) -> f64 {
        self.initial_displacement
            .max(self.min_displacement)
            .min(self.max_displacement)
    }

    /// Undamped natural period `2π·sqrt(m/k)`.
    ///
    /// Infinite when the stiffness is zero.
    pub fn natural_period(&self) -> f64 {
        if self.stiffness == 0.0 {
            return f64::INFINITY;
        }
        TAU * (self.mass / self.stiffness).sqrt()
    }

    /// Damping ratio `ζ = c / (2·sqrt(k·m))`.
    ///
    /// - `ζ < 1`: under-damped, oscillates with decay
    /// - `ζ = 1`: critically damped
    /// - `ζ > 1`: over-damped, no oscillation
    pub fn damping_ratio(&self) -> f64 {
        self.damping_coefficient / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamped_initial_displacement() {
        let config = OscillatorConfig::new().with_limits(-10.0, 20.0);
        assert_eq!(
            config.clone().with_initial_displacement(5.0).clamped_initial_displacement(),
            5.0
        );
        assert_eq!(
            config.clone().with_initial_displacement(500.0).clamped_initial_displacement(),
            20.0
        );
        assert_eq!(
            config.with_initial_displacement(-500.0).clamped_initial_displacement(),
            -10.0
        );
    }

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(OscillatorConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_non_positive_mass() {
        let err = OscillatorConfig::new().with_mass(0.0).validate();
        assert_eq!(err, Err(ConfigError::NonPositiveMass(0.0)));
    }

    #[test]
    fn test_rejects_non_finite() {
        let err = OscillatorConfig::new().with_stiffness(f64::NAN).validate();
        assert!(matches!(
            err,
            Err(ConfigError::NonFinite {
                field: "stiffness",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_inverted_limits() {
        let err = OscillatorConfig::new()
            .with_limits(10.0, 10.0)
            .with_initial_displacement(10.0)
            .validate();
        assert!(matches!(err, Err(ConfigError::InvertedLimits { .. })));
    }

    #[test]
    fn test_rejects_initial_out_of_range() {
        let err = OscillatorConfig::new()
            .with_initial_displacement(61.0)
            .validate();
        assert!(matches!(err, Err(ConfigError::InitialOutOfRange { .. })));
    }

    #[test]
    fn test_rejects_degenerate_settings() {
        assert_eq!(
            OscillatorConfig::new().with_history_capacity(0).validate(),
            Err(ConfigError::ZeroCapacity)
        );
        assert_eq!(
            OscillatorConfig::new()
                .with_displacement_step(0.0)
                .validate(),
            Err(ConfigError::NonPositiveStep(0.0))
        );
        assert_eq!(
            OscillatorConfig::new()
                .with_axis(Vector::zero())
                .validate(),
            Err(ConfigError::DegenerateAxis)
        );
        assert_eq!(
            OscillatorConfig::new()
                .with_damping_coefficient(-1.0)
                .validate(),
            Err(ConfigError::NegativeDamping(-1.0))
        );
    }

    #[test]
    fn test_zero_stiffness_and_damping_are_valid() {
        let config = OscillatorConfig::new()
            .with_stiffness(0.0)
            .with_damping_coefficient(0.0);
        assert!(config.validate().is_ok());
        assert!(config.natural_period().is_infinite());
    }

    #[test]
    fn test_natural_period() {
        let config = OscillatorConfig::new().with_mass(1.0).with_stiffness(100.0);
        assert!((config.natural_period() - TAU / 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_damping_ratio() {
        let config = OscillatorConfig::new()
            .with_mass(1.0)
            .with_stiffness(100.0)
            .with_damping_coefficient(20.0);
        assert!((config.damping_ratio() - 1.0).abs() < 1e-12);
    }
}
