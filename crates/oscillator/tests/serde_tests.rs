//! Serialization of configuration, step records and snapshots.
//!
//! Only compiled with the `serde` feature.

#![cfg(feature = "serde")]
#![allow(clippy::float_cmp)]

use oscillator::{OscillatorConfig, Point, PointMass, Session, Snapshot, StepRecord};

#[test]
fn config_fields_default_when_missing() {
    let config: OscillatorConfig =
        serde_json::from_str(r#"{ "mass": 2.5, "history_capacity": 10 }"#).expect("valid json");
    assert_eq!(config.mass, 2.5);
    assert_eq!(config.history_capacity, 10);
    assert_eq!(config.stiffness, OscillatorConfig::default().stiffness);
}

#[test]
fn snapshot_serializes_history_and_estimates() {
    let config = OscillatorConfig::new()
        .with_mass(1.0)
        .with_initial_displacement(10.0)
        .with_history_capacity(16);
    let mut session = Session::new(config, PointMass::new(Point::origin(), 1.0));
    session.set_active(true);
    for _ in 0..40 {
        session.advance(0.01);
    }

    let snapshot = session.snapshot();
    let json = serde_json::to_string(&snapshot).expect("serialize");
    let back: Snapshot = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back.history.len(), 16);
    assert_eq!(back.ticks, 40);
    assert_eq!(back.period_seconds, snapshot.period_seconds);
}

#[test]
fn step_record_omits_nothing() {
    let config = OscillatorConfig::new().with_mass(1.0).with_initial_displacement(1.0);
    let mut session = Session::new(config, PointMass::new(Point::origin(), 1.0));
    session.set_active(true);
    let record: StepRecord = session.advance(0.01).expect("active");

    let value = serde_json::to_value(record).expect("serialize");
    for key in [
        "tick",
        "elapsed",
        "dt",
        "displacement",
        "velocity",
        "acceleration",
        "force",
        "peak",
        "evicted",
    ] {
        assert!(value.get(key).is_some(), "missing {key}");
    }
}
