//! The rigid body the oscillator drives.
//!
//! Integration belongs to the physics provider. The oscillator reads the
//! body's position and velocity, submits a force, and lets the provider
//! advance the body on its own schedule. [`RigidBody`] is that seam.
//!
//! [`PointMass`] is a minimal provider for headless runs and tests. It
//! integrates accumulated forces with semi-implicit Euler, which keeps the
//! energy of an undamped spring bounded over long runs.

use tracing::trace;

use crate::vector::{Point, Vector};

/// Operations the oscillator needs from a rigid-body provider.
pub trait RigidBody {
    /// Current world position.
    fn position(&self) -> Point;

    /// Current linear velocity.
    fn velocity(&self) -> Vector;

    /// Adds a force for the provider's next integration step.
    ///
    /// Forces accumulate until the provider consumes them.
    fn apply_force(&mut self, force: Vector);

    /// Overrides the body's mass. Called every tick and must be idempotent.
    fn set_mass(&mut self, mass: f64);

    /// Moves the body directly, bypassing integration.
    fn translate(&mut self, offset: Vector);
}

/// A point mass integrated with semi-implicit Euler.
///
/// # Example
///
/// ```rust
/// use oscillator::{Point, PointMass, RigidBody, Vector};
///
/// let mut body = PointMass::new(Point::origin(), 2.0);
/// body.apply_force(Vector::UP * 4.0);
/// body.integrate(0.5);
///
/// // a = 2, v = 1, x = 0.5
/// assert_eq!(body.velocity(), Vector::new(0.0, 0.0, 1.0));
/// assert_eq!(body.position(), Point::new(0.0, 0.0, 0.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointMass {
    position: Point,
    velocity: Vector,
    mass: f64,
    accumulated_force: Vector,
}

impl PointMass {
    /// Creates a body at rest.
    pub const fn new(position: Point, mass: f64) -> Self {
        Self {
            position,
            velocity: Vector::zero(),
            mass,
            accumulated_force: Vector::zero(),
        }
    }

    /// Sets the velocity.
    pub fn with_velocity(mut self, velocity: Vector) -> Self {
        self.velocity = velocity;
        self
    }

    /// Current mass.
    pub const fn mass(&self) -> f64 {
        self.mass
    }

    /// Force submitted since the last integration step.
    pub const fn pending_force(&self) -> Vector {
        self.accumulated_force
    }

    /// Advances the body by `dt` and clears the accumulated force.
    ///
    /// Velocity is updated before position (symplectic Euler).
    pub fn integrate(&mut self, dt: f64) {
        let acceleration = self.accumulated_force * (1.0 / self.mass);
        self.velocity += acceleration * dt;
        self.position += self.velocity * dt;
        self.accumulated_force = Vector::zero();
        trace!(
            z = self.position.z,
            vz = self.velocity.z,
            "point mass integrated"
        );
    }
}

impl RigidBody for PointMass {
    fn position(&self) -> Point {
        self.position
    }

    fn velocity(&self) -> Vector {
        self.velocity
    }

    fn apply_force(&mut self, force: Vector) {
        self.accumulated_force += force;
    }

    fn set_mass(&mut self, mass: f64) {
        self.mass = mass;
    }

    fn translate(&mut self, offset: Vector) {
        self.position += offset;
    }
}
