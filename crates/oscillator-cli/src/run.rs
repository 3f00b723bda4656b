//! Headless simulation runs.

use std::io::Write;

use oscillator::{Point, PointMass, Session, Snapshot, TracingObserver};
use tracing::{debug, info};

use crate::config::RunConfig;
use crate::error::Result;

/// Summary of a finished run.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// State of the session after the last step.
    pub snapshot: Snapshot,
    /// Steps taken.
    pub steps: u64,
    /// Velocity reversals detected.
    pub peaks: u64,
    /// Reversals that closed a period.
    pub periods: u64,
}

/// Runs a session on a point mass at the origin.
///
/// The raise/lower previews are applied before the simulation starts. When
/// `trace` is given, every step record is written to it as one JSON line.
///
/// # Errors
///
/// Returns an error if writing the trace fails.
pub fn run(config: &RunConfig, mut trace: Option<&mut dyn Write>) -> Result<RunOutcome> {
    let osc = config.oscillator.clone();
    let body = PointMass::new(Point::origin(), osc.mass);
    let mut session = Session::new(osc, body);
    session.subscribe(TracingObserver);

    for _ in 0..config.run.raise {
        if !session.increase_displacement() {
            debug!("initial displacement already at maximum");
            break;
        }
    }
    for _ in 0..config.run.lower {
        if !session.decrease_displacement() {
            debug!("initial displacement already at minimum");
            break;
        }
    }

    let dt = config.run.step();
    let steps = config.run.steps();
    info!(
        dt,
        steps,
        initial = session.state().initial_displacement(),
        "starting simulation"
    );
    session.set_active(true);

    let (mut peaks, mut periods) = (0, 0);
    for _ in 0..steps {
        let Some(record) = session.advance(dt) else {
            continue;
        };
        if let Some(peak) = record.peak {
            peaks += 1;
            if peak.period.is_some() {
                periods += 1;
            }
        }
        if let Some(out) = trace.as_deref_mut() {
            serde_json::to_writer(&mut *out, &record)?;
            out.write_all(b"\n")?;
        }
    }
    if let Some(out) = trace {
        out.flush()?;
    }

    let snapshot = session.snapshot();
    info!(
        peaks,
        periods,
        amplitude = snapshot.amplitude,
        period = snapshot.period_seconds,
        "simulation finished"
    );
    Ok(RunOutcome {
        snapshot,
        steps,
        peaks,
        periods,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::TAU;

    fn config(initial: f64, duration: f64) -> RunConfig {
        let mut config = RunConfig::default();
        config.oscillator.mass = 1.0;
        config.oscillator.stiffness = 100.0;
        config.oscillator.initial_displacement = initial;
        config.run.dt = Some(0.001);
        config.run.duration = duration;
        config
    }

    #[test]
    fn test_run_measures_period() {
        let outcome = run(&config(10.0, 3.0), None).unwrap();
        assert_eq!(outcome.steps, 3000);
        assert_eq!(outcome.snapshot.ticks, 3000);
        assert!(outcome.periods >= 3);
        assert!((outcome.snapshot.period_seconds - TAU / 10.0).abs() < 0.005);
        assert!((outcome.snapshot.amplitude - 10.0).abs() < 0.2);
    }

    #[test]
    fn test_run_writes_trace_lines() {
        let mut buf = Vec::new();
        let outcome = run(&config(5.0, 0.01), Some(&mut buf)).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len() as u64, outcome.steps);
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["tick"], 1);
        assert_eq!(first["displacement"], 5.0);
    }

    #[test]
    fn test_previews_apply_before_start() {
        let mut cfg = config(0.0, 0.0);
        cfg.run.raise = 3;
        let outcome = run(&cfg, None).unwrap();
        assert_eq!(outcome.steps, 0);
        assert_eq!(outcome.snapshot.initial_displacement, 15.0);
        assert!(outcome.snapshot.simulation_active);

        cfg.run.raise = 100;
        let outcome = run(&cfg, None).unwrap();
        assert_eq!(outcome.snapshot.initial_displacement, 60.0);
    }
}
