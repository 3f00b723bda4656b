//! Oscillator state: equilibrium, per-tick force and derived kinematics.
//!
//! Displacement is measured along the motion axis with the sign flipped:
//! a body sitting *below* the equilibrium (against the axis) has a
//! positive displacement, i.e. the spring is extended. The scalar force and
//! acceleration are reported in that same frame, and the force submitted to
//! the body points along `-axis`.

use tracing::{debug, info, trace};

use crate::config::OscillatorConfig;
use crate::force::{ForceBreakdown, ForceModel};
use crate::vector::{Point, Vector};

/// The fixed reference point displacements are measured from.
///
/// Built once per session from the body's starting position and handed to
/// [`OscillatorState::new`]; there is no way to move it afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Equilibrium {
    position: Point,
    axis: Vector,
}

impl Equilibrium {
    /// Places the equilibrium `initial_displacement` along `axis` from the
    /// body's position. `axis` is normalized.
    ///
    /// # Example
    ///
    /// ```rust
    /// use oscillator::{Equilibrium, Point, Vector};
    ///
    /// let eq = Equilibrium::from_body(Point::new(0.0, 0.0, 100.0), 10.0, Vector::UP);
    /// assert_eq!(eq.position(), Point::new(0.0, 0.0, 110.0));
    /// assert_eq!(eq.displacement_of(Point::new(0.0, 0.0, 100.0)), 10.0);
    /// ```
    pub fn from_body(body_position: Point, initial_displacement: f64, axis: Vector) -> Self {
        let axis = axis.normalized();
        Self {
            position: body_position + axis * initial_displacement,
            axis,
        }
    }

    /// The equilibrium point.
    pub const fn position(&self) -> Point {
        self.position
    }

    /// Unit motion axis.
    pub const fn axis(&self) -> Vector {
        self.axis
    }

    /// Signed displacement of `body_position`, positive against the axis.
    #[inline]
    pub fn displacement_of(&self, body_position: Point) -> f64 {
        -(body_position.component_along(self.axis) - self.position.component_along(self.axis))
    }
}

/// What a tick asks of the rigid body, and the resulting acceleration.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickOutput {
    /// Scalar force terms in the displacement frame.
    pub force: ForceBreakdown,
    /// The force to submit to the body, along `-axis`.
    pub force_vector: Vector,
    /// `force.total / mass`, in the displacement frame.
    pub acceleration: f64,
}

/// Runtime state of one spring-damper session.
#[derive(Debug, Clone, PartialEq)]
pub struct OscillatorState {
    config: OscillatorConfig,
    model: ForceModel,
    equilibrium: Equilibrium,
    initial_displacement: f64,
    current_displacement: f64,
    velocity: f64,
    last_velocity: f64,
    acceleration: f64,
    last_force: ForceBreakdown,
    active: bool,
}

impl OscillatorState {
    /// Creates an inactive state around `equilibrium`.
    ///
    /// The configured initial displacement is clamped into the limits.
    pub fn new(config: OscillatorConfig, equilibrium: Equilibrium) -> Self {
        let initial_displacement = config.clamped_initial_displacement();
        Self {
            model: ForceModel::new(config.stiffness, config.damping_coefficient),
            config,
            equilibrium,
            initial_displacement,
            current_displacement: initial_displacement,
            velocity: 0.0,
            last_velocity: 0.0,
            acceleration: 0.0,
            last_force: ForceBreakdown::default(),
            active: false,
        }
    }

    /// Computes this tick's force from the body's position and velocity.
    ///
    /// Returns a zero output and leaves the state untouched while inactive.
    /// The damping term uses the velocity in the displacement frame, so a
    /// positive coefficient always removes energy.
    pub fn tick(&mut self, dt: f64, body_position: Point, body_velocity: Vector) -> TickOutput {
        if !self.active {
            return TickOutput::default();
        }

        let axis = self.equilibrium.axis;
        let axis_velocity = body_velocity.dot(axis);

        self.current_displacement = self.equilibrium.displacement_of(body_position);
        let force = self.model.breakdown(self.current_displacement, -axis_velocity);
        self.acceleration = force.total / self.config.mass;
        self.last_force = force;
        self.last_velocity = self.velocity;
        self.velocity = axis_velocity;

        trace!(
            dt,
            displacement = self.current_displacement,
            velocity = self.velocity,
            force = force.total,
            "oscillator tick"
        );

        TickOutput {
            force,
            force_vector: -axis * force.total,
            acceleration: self.acceleration,
        }
    }

    /// Raises the initial displacement by one step, up to the maximum.
    ///
    /// Returns the offset to apply to the body, or `None` when already at
    /// the limit. The current displacement is set to the new initial value.
    pub fn increase_displacement(&mut self) -> Option<Vector> {
        if self.initial_displacement >= self.config.max_displacement {
            debug!(
                initial = self.initial_displacement,
                "displacement already at maximum"
            );
            return None;
        }
        let target = clamp_to(
            self.initial_displacement + self.config.displacement_step,
            self.config.min_displacement,
            self.config.max_displacement,
        );
        let delta = target - self.initial_displacement;
        self.set_initial(target);
        Some(-self.equilibrium.axis * delta)
    }

    /// Lowers the initial displacement by one step, down to the minimum.
    ///
    /// Returns the offset to apply to the body, or `None` when already at
    /// the limit.
    pub fn decrease_displacement(&mut self) -> Option<Vector> {
        if self.initial_displacement <= self.config.min_displacement {
            debug!(
                initial = self.initial_displacement,
                "displacement already at minimum"
            );
            return None;
        }
        let target = clamp_to(
            self.initial_displacement - self.config.displacement_step,
            self.config.min_displacement,
            self.config.max_displacement,
        );
        let delta = self.initial_displacement - target;
        self.set_initial(target);
        Some(self.equilibrium.axis * delta)
    }

    fn set_initial(&mut self, value: f64) {
        self.initial_displacement = value;
        self.current_displacement = value;
        debug!(initial = value, "initial displacement adjusted");
    }

    /// Starts or pauses force computation. Nothing else is reset.
    pub fn set_active(&mut self, active: bool) {
        if self.active != active {
            info!(active, "simulation toggled");
        }
        self.active = active;
    }

    /// Whether ticks compute forces.
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// The session configuration.
    pub const fn config(&self) -> &OscillatorConfig {
        &self.config
    }

    /// The fixed equilibrium.
    pub const fn equilibrium(&self) -> &Equilibrium {
        &self.equilibrium
    }

    /// Adjustable starting displacement, always within the limits.
    pub const fn initial_displacement(&self) -> f64 {
        self.initial_displacement
    }

    /// Displacement from equilibrium at the last tick or preview.
    pub const fn current_displacement(&self) -> f64 {
        self.current_displacement
    }

    /// Body velocity along the axis at the last tick.
    pub const fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Velocity at the tick before the last one.
    pub const fn last_velocity(&self) -> f64 {
        self.last_velocity
    }

    /// Acceleration at the last tick, in the displacement frame.
    pub const fn acceleration(&self) -> f64 {
        self.acceleration
    }

    /// Force terms computed at the last active tick.
    pub const fn last_force(&self) -> ForceBreakdown {
        self.last_force
    }
}

/// Clamps without panicking on inverted bounds or NaN.
fn clamp_to(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}
