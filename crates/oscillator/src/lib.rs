#![forbid(unsafe_code)]
// Allow these clippy lints for physics/math code readability
#![allow(clippy::must_use_candidate)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::use_self)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::struct_field_names)]
#![allow(clippy::float_cmp)]

//! # Oscillator
//!
//! A fixed-step damped spring oscillator with online signal analysis.
//!
//! The crate provides:
//! - **ForceModel**: Hooke spring plus viscous damping, `F = -k·x - c·v`
//! - **OscillatorState**: equilibrium, per-tick force and kinematics for one
//!   degree of freedom of a rigid body
//! - **PeakTracker**: velocity-reversal peak detection with amplitude and
//!   period estimates over a bounded displacement history
//! - **Session**: the per-tick pipeline tying the three to a [`RigidBody`],
//!   with [`StepRecord`] events and read-only [`Snapshot`]s
//!
//! Integration of the body is left to the physics provider behind
//! [`RigidBody`]. [`PointMass`] is a small provider for headless use.
//!
//! ## Example
//!
//! ```rust
//! use oscillator::{fps, OscillatorConfig, Point, PointMass, Session};
//!
//! let config = OscillatorConfig::new()
//!     .with_mass(1.0)
//!     .with_stiffness(100.0)
//!     .with_initial_displacement(10.0);
//! let body = PointMass::new(Point::origin(), config.mass);
//! let mut session = Session::new(config, body);
//!
//! session.set_active(true);
//! for _ in 0..300 {
//!     session.advance(fps(100));
//! }
//!
//! let view = session.snapshot();
//! println!("amplitude {} period {}s", view.amplitude, view.period_seconds);
//! ```
//!
//! ## Sign convention
//!
//! Displacement is positive when the body sits *against* the motion axis
//! relative to the equilibrium. With the default up axis, a body below the
//! equilibrium has a positive displacement and is pulled back up.
//!
//! ## Feature flags
//!
//! - `serde`: `Serialize`/`Deserialize` for configuration, events and
//!   snapshots

mod body;
mod config;
mod error;
mod event;
mod force;
mod peak;
mod session;
mod snapshot;
mod state;
mod vector;

pub use body::{PointMass, RigidBody};
pub use config::OscillatorConfig;
pub use error::{ConfigError, Result};
pub use event::{StepObserver, StepRecord, TracingObserver};
pub use force::{compute_force, ForceBreakdown, ForceModel};
pub use peak::{Observation, PeakEvent, PeakTracker, PeriodEstimate, VELOCITY_EPSILON};
pub use session::{fps, Session};
pub use snapshot::Snapshot;
pub use state::{Equilibrium, OscillatorState, TickOutput};
pub use vector::{Point, Vector};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::body::{PointMass, RigidBody};
    pub use crate::config::OscillatorConfig;
    pub use crate::event::{StepObserver, StepRecord};
    pub use crate::session::{fps, Session};
    pub use crate::snapshot::Snapshot;
    pub use crate::vector::{Point, Vector};
}
