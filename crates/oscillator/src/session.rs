//! A simulation session: one body, one oscillator, one peak tracker.
//!
//! The session owns the body handle it drives, so callers hold the session
//! itself rather than looking it up. Each [`Session::step`] runs the whole
//! per-tick pipeline:
//!
//! 1. assert the configured mass on the body
//! 2. read position and velocity, compute the force
//! 3. submit the force to the body
//! 4. feed the new sample to the peak tracker
//! 5. notify observers with a [`StepRecord`]
//!
//! Integration happens outside, in the body's provider, between steps.

use std::fmt;

use tracing::info;

use crate::body::{PointMass, RigidBody};
use crate::config::OscillatorConfig;
use crate::event::{StepObserver, StepRecord};
use crate::peak::PeakTracker;
use crate::snapshot::Snapshot;
use crate::state::{Equilibrium, OscillatorState};

/// Returns a time delta for a given number of frames per second.
///
/// Frame loops usually provide their own delta; prefer that when available.
///
/// # Example
///
/// ```rust
/// use oscillator::fps;
///
/// assert_eq!(fps(50), 0.02);
/// ```
#[inline]
pub fn fps(n: u32) -> f64 {
    1.0 / f64::from(n)
}

/// Drives an [`OscillatorState`] and a [`PeakTracker`] against a body.
///
/// # Example
///
/// ```rust
/// use oscillator::{fps, OscillatorConfig, Point, PointMass, Session};
///
/// let config = OscillatorConfig::new()
///     .with_mass(1.0)
///     .with_stiffness(100.0)
///     .with_initial_displacement(10.0);
/// let body = PointMass::new(Point::origin(), config.mass);
///
/// let mut session = Session::new(config, body);
/// session.set_active(true);
///
/// // Two seconds at 100 Hz
/// for _ in 0..200 {
///     session.advance(fps(100));
/// }
///
/// let view = session.snapshot();
/// assert!(view.peak_count > 0);
/// assert!((view.period_seconds - 0.63).abs() < 0.05);
/// ```
pub struct Session<B> {
    state: OscillatorState,
    tracker: PeakTracker,
    body: B,
    observers: Vec<Box<dyn StepObserver>>,
    ticks: u64,
    elapsed: f64,
}

impl<B: RigidBody> Session<B> {
    /// Starts an inactive session, fixing the equilibrium from the body's
    /// current position and the initial displacement clamped into the
    /// limits.
    pub fn new(config: OscillatorConfig, body: B) -> Self {
        let initial = config.clamped_initial_displacement();
        let equilibrium = Equilibrium::from_body(body.position(), initial, config.axis);
        info!(
            mass = config.mass,
            stiffness = config.stiffness,
            damping = config.damping_coefficient,
            initial,
            capacity = config.history_capacity,
            "oscillator session created"
        );
        Self {
            tracker: PeakTracker::new(config.history_capacity),
            state: OscillatorState::new(config, equilibrium),
            body,
            observers: Vec::new(),
            ticks: 0,
            elapsed: 0.0,
        }
    }

    /// Registers an observer notified after every active step.
    pub fn subscribe<O>(&mut self, observer: O)
    where
        O: StepObserver + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Runs one tick. Returns `None` while the simulation is inactive.
    ///
    /// The mass is asserted on the body either way.
    pub fn step(&mut self, dt: f64) -> Option<StepRecord> {
        self.body.set_mass(self.state.config().mass);
        if !self.state.is_active() {
            return None;
        }

        let out = self
            .state
            .tick(dt, self.body.position(), self.body.velocity());
        self.body.apply_force(out.force_vector);

        let observation =
            self.tracker
                .observe(self.state.current_displacement(), self.state.velocity(), dt);

        self.ticks += 1;
        self.elapsed += dt;

        let record = StepRecord {
            tick: self.ticks,
            elapsed: self.elapsed,
            dt,
            displacement: self.state.current_displacement(),
            velocity: self.state.velocity(),
            acceleration: out.acceleration,
            force: out.force,
            peak: observation.peak,
            evicted: observation.evicted,
        };
        for observer in &mut self.observers {
            observer.on_step(&record);
        }
        Some(record)
    }

    /// Starts or pauses the simulation. History and estimates are kept.
    pub fn set_active(&mut self, active: bool) {
        self.state.set_active(active);
    }

    /// Whether steps compute forces.
    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// Raises the initial displacement one step and moves the body with it.
    ///
    /// Returns `false` when already at the maximum. While the simulation
    /// runs this is only a preview offset; the next step measures the
    /// body's true displacement again.
    pub fn increase_displacement(&mut self) -> bool {
        let Some(offset) = self.state.increase_displacement() else {
            return false;
        };
        self.body.translate(offset);
        true
    }

    /// Lowers the initial displacement one step and moves the body with it.
    ///
    /// Returns `false` when already at the minimum.
    pub fn decrease_displacement(&mut self) -> bool {
        let Some(offset) = self.state.decrease_displacement() else {
            return false;
        };
        self.body.translate(offset);
        true
    }

    /// Copies the current state for display.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state, &self.tracker, self.ticks, self.elapsed)
    }

    /// Clears the peak tracker and step counters, keeping the oscillator.
    pub fn reset_analysis(&mut self) {
        self.tracker.reset();
        self.ticks = 0;
        self.elapsed = 0.0;
    }
}

impl<B> Session<B> {
    /// The oscillator state.
    pub const fn state(&self) -> &OscillatorState {
        &self.state
    }

    /// The peak tracker.
    pub const fn tracker(&self) -> &PeakTracker {
        &self.tracker
    }

    /// The driven body.
    pub const fn body(&self) -> &B {
        &self.body
    }

    /// Mutable access to the body, for the provider's integration step.
    pub fn body_mut(&mut self) -> &mut B {
        &mut self.body
    }

    /// Ends the session and returns the body.
    pub fn into_body(self) -> B {
        self.body
    }

    /// Active steps taken so far.
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Simulated time over active steps.
    pub const fn elapsed(&self) -> f64 {
        self.elapsed
    }
}

impl Session<PointMass> {
    /// Steps the session, then integrates the point mass over `dt`.
    pub fn advance(&mut self, dt: f64) -> Option<StepRecord> {
        let record = self.step(dt);
        self.body.integrate(dt);
        record
    }
}

impl<B: fmt::Debug> fmt::Debug for Session<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("state", &self.state)
            .field("tracker", &self.tracker)
            .field("body", &self.body)
            .field("observers", &self.observers.len())
            .field("ticks", &self.ticks)
            .field("elapsed", &self.elapsed)
            .finish()
    }
}
