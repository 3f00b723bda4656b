//! Step records and the observers that consume them.
//!
//! Each active [`Session::step`](crate::Session::step) produces a
//! [`StepRecord`] describing what changed: the force, the new kinematics, a
//! detected peak, an evicted history sample. Rendering and logging hang off
//! [`StepObserver`] instead of living inside the physics step.

use tracing::{debug, trace};

use crate::force::ForceBreakdown;
use crate::peak::PeakEvent;

/// Everything one active step changed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepRecord {
    /// Active step number, starting at 1.
    pub tick: u64,
    /// Simulated time accumulated over active steps, including this one.
    pub elapsed: f64,
    /// Time step used.
    pub dt: f64,
    /// Displacement from equilibrium.
    pub displacement: f64,
    /// Velocity along the motion axis.
    pub velocity: f64,
    /// Acceleration in the displacement frame.
    pub acceleration: f64,
    /// Force submitted to the body.
    pub force: ForceBreakdown,
    /// Velocity reversal detected on this step.
    pub peak: Option<PeakEvent>,
    /// History sample dropped on this step.
    pub evicted: Option<f64>,
}

/// Receives a [`StepRecord`] after every active step.
///
/// Closures taking `&StepRecord` implement this trait:
///
/// ```rust
/// use oscillator::{OscillatorConfig, Point, PointMass, Session, StepRecord};
///
/// let body = PointMass::new(Point::origin(), 1.0);
/// let mut session = Session::new(OscillatorConfig::default(), body);
///
/// let mut peaks = 0;
/// session.subscribe(move |record: &StepRecord| {
///     if record.peak.is_some() {
///         peaks += 1;
///     }
/// });
/// ```
pub trait StepObserver {
    /// Called once per active step, after all state has been updated.
    fn on_step(&mut self, record: &StepRecord);
}

impl<F> StepObserver for F
where
    F: FnMut(&StepRecord),
{
    fn on_step(&mut self, record: &StepRecord) {
        self(record);
    }
}

/// Logs steps at `trace` and peaks at `debug`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl StepObserver for TracingObserver {
    fn on_step(&mut self, record: &StepRecord) {
        trace!(
            tick = record.tick,
            displacement = record.displacement,
            velocity = record.velocity,
            acceleration = record.acceleration,
            force = record.force.total,
            "step"
        );

        if let Some(peak) = record.peak {
            match peak.period {
                Some(period) => debug!(
                    tick = record.tick,
                    peak = peak.peak_count,
                    amplitude = period.amplitude,
                    period = period.period_seconds,
                    "period measured"
                ),
                None => debug!(
                    tick = record.tick,
                    peak = peak.peak_count,
                    displacement = peak.displacement,
                    "peak"
                ),
            }
        }
    }
}
