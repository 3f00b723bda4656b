//! Read-only snapshots of a session for presentation layers.

use crate::config::OscillatorConfig;
use crate::force::ForceBreakdown;
use crate::peak::PeakTracker;
use crate::state::OscillatorState;

/// A copy of everything a display needs, taken between steps.
///
/// Holding a snapshot never borrows the session, and nothing in it can be
/// written back.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    /// Whether force computation is running.
    pub simulation_active: bool,
    /// Session configuration.
    pub config: OscillatorConfig,
    /// Adjustable starting displacement.
    pub initial_displacement: f64,
    /// Displacement from equilibrium.
    pub current_displacement: f64,
    /// Velocity along the motion axis.
    pub velocity: f64,
    /// Velocity one step earlier.
    pub last_velocity: f64,
    /// Acceleration in the displacement frame.
    pub acceleration: f64,
    /// Force terms from the last active step.
    pub force: ForceBreakdown,
    /// Reversals seen minus one.
    pub peak_count: i64,
    /// Last known amplitude.
    pub amplitude: f64,
    /// Signed displacement the amplitude was taken from.
    pub peak_displacement: f64,
    /// Last known period in seconds.
    pub period_seconds: f64,
    /// History index where the last period starts.
    pub period_start_index: usize,
    /// History index where the last period ends.
    pub period_end_index: usize,
    /// Displacement samples, oldest first.
    pub history: Vec<f64>,
    /// Active steps taken.
    pub ticks: u64,
    /// Simulated time over active steps.
    pub elapsed: f64,
}

impl Snapshot {
    pub(crate) fn capture(
        state: &OscillatorState,
        tracker: &PeakTracker,
        ticks: u64,
        elapsed: f64,
    ) -> Self {
        Self {
            simulation_active: state.is_active(),
            config: state.config().clone(),
            initial_displacement: state.initial_displacement(),
            current_displacement: state.current_displacement(),
            velocity: state.velocity(),
            last_velocity: state.last_velocity(),
            acceleration: state.acceleration(),
            force: state.last_force(),
            peak_count: tracker.peak_count(),
            amplitude: tracker.amplitude(),
            peak_displacement: tracker.peak_displacement(),
            period_seconds: tracker.period_seconds(),
            period_start_index: tracker.period_start_index(),
            period_end_index: tracker.period_end_index(),
            history: tracker.history().collect(),
            ticks,
            elapsed,
        }
    }

    /// The most recent displacement sample, if any.
    pub fn latest_displacement(&self) -> Option<f64> {
        self.history.last().copied()
    }

    /// The history samples spanning the last measured period.
    pub fn period_span(&self) -> &[f64] {
        let end = self.period_end_index.min(self.history.len());
        let start = self.period_start_index.min(end);
        &self.history[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Equilibrium;
    use crate::vector::{Point, Vector};

    fn snapshot_with(history: &[f64], start: usize, end: usize) -> Snapshot {
        let config = OscillatorConfig::new().with_history_capacity(8);
        let state = OscillatorState::new(
            config.clone(),
            Equilibrium::from_body(Point::origin(), 0.0, Vector::UP),
        );
        let mut tracker = PeakTracker::new(config.history_capacity);
        for &d in history {
            tracker.observe(d, 0.0, 0.1);
        }
        Snapshot {
            period_start_index: start,
            period_end_index: end,
            ..Snapshot::capture(&state, &tracker, 0, 0.0)
        }
    }

    #[test]
    fn test_capture_copies_history() {
        let snap = snapshot_with(&[1.0, 2.0, 3.0], 0, 0);
        assert_eq!(snap.history, vec![1.0, 2.0, 3.0]);
        assert_eq!(snap.latest_displacement(), Some(3.0));
        assert!(!snap.simulation_active);
        assert_eq!(snap.peak_count, -1);
    }

    #[test]
    fn test_period_span() {
        let snap = snapshot_with(&[1.0, 2.0, 3.0, 4.0], 1, 3);
        assert_eq!(snap.period_span(), &[2.0, 3.0]);
    }

    #[test]
    fn test_period_span_tolerates_stale_indices() {
        let snap = snapshot_with(&[1.0, 2.0], 5, 8);
        assert!(snap.period_span().is_empty());
        assert_eq!(snapshot_with(&[], 0, 0).latest_displacement(), None);
    }
}
