//! Spring and viscous damping forces for a single degree of freedom.
//!
//! The model is linear in both arguments:
//!
//! ```text
//! F = -k·x - c·v
//! ```
//!
//! where `k` is the spring stiffness and `c` the damping coefficient.
//! Non-finite inputs propagate to the output unchanged.

/// Returns the net force on the mass for a displacement and velocity.
///
/// The spring term follows Hooke's law (`-k·x`) and the damping term is
/// viscous (`-c·v`). The result is their sum.
///
/// # Example
///
/// ```rust
/// use oscillator::compute_force;
///
/// // Spring only: 100 N/unit pulling back a 10 unit displacement
/// assert_eq!(compute_force(10.0, 0.0, 100.0, 0.0), -1000.0);
///
/// // Damping only
/// assert_eq!(compute_force(0.0, 2.0, 100.0, 0.5), -1.0);
/// ```
#[inline]
pub fn compute_force(
    displacement: f64,
    velocity: f64,
    stiffness: f64,
    damping_coefficient: f64,
) -> f64 {
    -stiffness * displacement - damping_coefficient * velocity
}

/// The two force terms and their sum, as reported to observers.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForceBreakdown {
    /// Restoring spring term, `-k·x`.
    pub spring: f64,
    /// Viscous damping term, `-c·v`.
    pub damping: f64,
    /// Net force, `spring + damping`.
    pub total: f64,
}

/// A spring-damper pair with fixed coefficients.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ForceModel {
    stiffness: f64,
    damping_coefficient: f64,
}

impl ForceModel {
    /// Creates a force model. Zero stiffness or damping is allowed.
    #[inline]
    pub const fn new(stiffness: f64, damping_coefficient: f64) -> Self {
        Self {
            stiffness,
            damping_coefficient,
        }
    }

    /// Spring stiffness `k`.
    #[inline]
    pub const fn stiffness(&self) -> f64 {
        self.stiffness
    }

    /// Damping coefficient `c`.
    #[inline]
    pub const fn damping_coefficient(&self) -> f64 {
        self.damping_coefficient
    }

    /// Net force for the given state. See [`compute_force`].
    #[inline]
    pub fn force(&self, displacement: f64, velocity: f64) -> f64 {
        compute_force(
            displacement,
            velocity,
            self.stiffness,
            self.damping_coefficient,
        )
    }

    /// Both force terms separately.
    #[inline]
    pub fn breakdown(&self, displacement: f64, velocity: f64) -> ForceBreakdown {
        let spring = -self.stiffness * displacement;
        let damping = -self.damping_coefficient * velocity;
        ForceBreakdown {
            spring,
            damping,
            total: spring + damping,
        }
    }
}
