//! Online peak detection with amplitude and period estimation.
//!
//! A peak is an instant where the velocity along the motion axis reverses
//! sign. An oscillation spans two reversals, so only every other reversal
//! (even peak count, starting from -1) closes a period. Amplitude and period
//! are therefore "last known" values: they only change when a period closes.
//!
//! The tracker also keeps a bounded history of displacement samples. When
//! the oldest sample is evicted, the period indices shift down with it so
//! they keep pointing at the same samples.

use std::collections::VecDeque;

use tracing::debug;

/// Velocities at or below this magnitude never count toward a reversal.
pub const VELOCITY_EPSILON: f64 = 0.001;

/// A full period measured at a period-closing peak.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PeriodEstimate {
    /// Displacement magnitude at the closing peak.
    pub amplitude: f64,
    /// Time between the two most recent period-closing peaks.
    pub period_seconds: f64,
    /// History index of the previous period-closing peak.
    pub start_index: usize,
    /// History index of this peak.
    pub end_index: usize,
}

/// A detected velocity reversal.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PeakEvent {
    /// Peak count after this reversal.
    pub peak_count: i64,
    /// Displacement at the reversal.
    pub displacement: f64,
    /// Present when this reversal closed a period.
    pub period: Option<PeriodEstimate>,
}

/// What changed during one [`PeakTracker::observe`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Observation {
    /// The reversal detected on this sample, if any.
    pub peak: Option<PeakEvent>,
    /// The sample evicted from the history, if the buffer overflowed.
    pub evicted: Option<f64>,
}

/// Detects peaks in a stream of displacement/velocity samples.
///
/// # Example
///
/// ```rust
/// use oscillator::PeakTracker;
///
/// let mut tracker = PeakTracker::new(3);
/// for d in [1.0, 2.0, 3.0, 4.0, 5.0] {
///     tracker.observe(d, 1.0, 0.01);
/// }
/// assert_eq!(tracker.history().collect::<Vec<_>>(), vec![3.0, 4.0, 5.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PeakTracker {
    capacity: usize,
    history: VecDeque<f64>,
    last_velocity: f64,
    peak_count: i64,
    peak_displacement: f64,
    period_seconds: f64,
    last_period_index: usize,
    period_index: usize,
}

impl PeakTracker {
    /// Creates an empty tracker holding at most `capacity` samples.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            history: VecDeque::with_capacity(capacity.saturating_add(1)),
            last_velocity: 0.0,
            peak_count: -1,
            peak_displacement: 0.0,
            period_seconds: 0.0,
            last_period_index: 0,
            period_index: 0,
        }
    }

    /// Ingests one sample. Call once per active tick.
    pub fn observe(&mut self, displacement: f64, velocity: f64, dt: f64) -> Observation {
        let mut observation = Observation::default();

        if is_reversal(self.last_velocity, velocity) {
            self.peak_count += 1;
            let mut event = PeakEvent {
                peak_count: self.peak_count,
                displacement,
                period: None,
            };

            if self.peak_count % 2 == 0 {
                self.peak_displacement = displacement;
                self.last_period_index = self.period_index;
                self.period_index = self.history.len();
                #[allow(clippy::cast_precision_loss)]
                let ticks = self.period_index.abs_diff(self.last_period_index) as f64;
                self.period_seconds = ticks * dt;
                event.period = Some(self.period_estimate());
                debug!(
                    peak_count = self.peak_count,
                    amplitude = self.amplitude(),
                    period = self.period_seconds,
                    "period closed"
                );
            } else {
                debug!(peak_count = self.peak_count, displacement, "half-period peak");
            }
            observation.peak = Some(event);
        }
        self.last_velocity = velocity;

        self.history.push_back(displacement);
        if self.history.len() > self.capacity {
            observation.evicted = self.history.pop_front();
            self.last_period_index = self.shift_index(self.last_period_index);
            self.period_index = self.shift_index(self.period_index);
        }

        observation
    }

    /// Moves an index down by one with the buffer, staying in `[0, capacity]`.
    fn shift_index(&self, index: usize) -> usize {
        index.saturating_sub(1).min(self.capacity)
    }

    fn period_estimate(&self) -> PeriodEstimate {
        PeriodEstimate {
            amplitude: self.amplitude(),
            period_seconds: self.period_seconds,
            start_index: self.last_period_index,
            end_index: self.period_index,
        }
    }

    /// Clears all samples and estimates.
    pub fn reset(&mut self) {
        *self = Self::new(self.capacity);
    }

    /// Displacement samples, oldest first.
    pub fn history(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.history.iter().copied()
    }

    /// Number of samples held.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Whether no sample has been observed since creation or reset.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Maximum number of samples held.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of reversals seen, minus one. Starts at -1.
    pub const fn peak_count(&self) -> i64 {
        self.peak_count
    }

    /// Signed displacement captured at the last period-closing peak.
    pub const fn peak_displacement(&self) -> f64 {
        self.peak_displacement
    }

    /// Magnitude of [`peak_displacement`](Self::peak_displacement).
    pub fn amplitude(&self) -> f64 {
        self.peak_displacement.abs()
    }

    /// Last measured period in seconds.
    pub const fn period_seconds(&self) -> f64 {
        self.period_seconds
    }

    /// History index where the last measured period starts.
    pub const fn period_start_index(&self) -> usize {
        self.last_period_index
    }

    /// History index where the last measured period ends.
    pub const fn period_end_index(&self) -> usize {
        self.period_index
    }

    /// The last measured period, once two period-closing peaks have been
    /// seen. The first closing peak only measures from the start of the
    /// history.
    pub fn last_period(&self) -> Option<PeriodEstimate> {
        (self.peak_count >= 2).then(|| self.period_estimate())
    }
}

/// Opposite signs, both clear of the noise floor.
fn is_reversal(last_velocity: f64, velocity: f64) -> bool {
    velocity.abs() > VELOCITY_EPSILON
        && last_velocity.abs() > VELOCITY_EPSILON
        && last_velocity.is_sign_negative() != velocity.is_sign_negative()
}
