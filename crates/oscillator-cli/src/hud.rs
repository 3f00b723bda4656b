//! Text rendering of a session snapshot.
//!
//! The layout follows the in-game debug overlay: a block of labelled
//! statistics in SI units, three analysis lines in the body's native units,
//! and a graph of the displacement history.

use std::fmt::Write;

use oscillator::Snapshot;

/// Native length units per metre are 100; statistics are shown in metres.
pub const CM_TO_METER: f64 = 0.01;

/// Displacement range covered by the graph, in native units.
pub const GRAPH_RANGE: (f64, f64) = (-100.0, 100.0);

const GRAPH_HEIGHT: usize = 11;

const TRACE: char = '*';
const AXIS: char = '-';
const AMPLITUDE: char = '|';
const PERIOD: char = '=';

/// Renders the full HUD for `snapshot` with a graph `width` columns wide.
pub fn render(snapshot: &Snapshot, width: usize) -> String {
    let mut out = String::new();
    for (label, value) in statistics(snapshot) {
        let _ = writeln!(out, "{label:<36}{value}");
    }
    out.push('\n');

    if let Some(latest) = snapshot.latest_displacement() {
        let _ = writeln!(out, "Displacement: {latest:.6} [cm]");
    }
    let _ = writeln!(out, "Amplitude: {:.6} [cm]", snapshot.amplitude);
    let _ = writeln!(out, "Period: {:.6} [s]", snapshot.period_seconds);

    if width > 0 {
        out.push('\n');
        out.push_str(&graph(snapshot, width));
    }
    out
}

/// The labelled statistic rows, top to bottom.
pub fn statistics(snapshot: &Snapshot) -> Vec<(&'static str, String)> {
    let config = &snapshot.config;
    vec![
        ("Start Simulation:", snapshot.simulation_active.to_string()),
        ("Mass [Kg]:", number(config.mass)),
        ("Damping coefficient []:", number(config.damping_coefficient)),
        ("Spring Stiffness [N/m]:", number(config.stiffness)),
        (
            "Spring Initial Displacement [m]:",
            number(snapshot.initial_displacement * CM_TO_METER),
        ),
        (
            "Spring Current Displacement [m]:",
            number(snapshot.current_displacement * CM_TO_METER),
        ),
        ("Velocity [m/s]:", number(snapshot.velocity * CM_TO_METER)),
        (
            "Acceleration [m/s^2]:",
            number(snapshot.acceleration * CM_TO_METER),
        ),
    ]
}

fn number(value: f64) -> String {
    let text = format!("{value:.3}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

/// Row for a displacement. The graph is drawn inverted, so positive
/// displacements plot below the midline.
fn row_of(displacement: f64) -> usize {
    let (low, high) = GRAPH_RANGE;
    let plotted = (-displacement).clamp(low, high);
    let t = (high - plotted) / (high - low);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let row = (t * (GRAPH_HEIGHT - 1) as f64).round() as usize;
    row.min(GRAPH_HEIGHT - 1)
}

fn column_of(index: usize, capacity: usize, width: usize) -> usize {
    if capacity == 0 {
        return 0;
    }
    (index * width / capacity).min(width - 1)
}

/// Draws the history graph with the amplitude marker and the period span.
///
/// Samples are placed by history index scaled to the buffer capacity, so a
/// partially filled history occupies the left part of the graph.
pub fn graph(snapshot: &Snapshot, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let capacity = snapshot.config.history_capacity;
    let mid = GRAPH_HEIGHT / 2;
    let mut grid = vec![vec![' '; width]; GRAPH_HEIGHT];
    grid[mid].fill(AXIS);

    for (i, &d) in snapshot.history.iter().enumerate() {
        grid[row_of(d)][column_of(i, capacity, width)] = TRACE;
    }

    if snapshot.peak_count >= 0 {
        let col = column_of(snapshot.period_start_index, capacity, width);
        let peak_row = row_of(snapshot.peak_displacement);
        let (top, bottom) = if peak_row < mid {
            (peak_row, mid)
        } else {
            (mid, peak_row)
        };
        for row in grid.iter_mut().take(bottom + 1).skip(top) {
            row[col] = AMPLITUDE;
        }
    }

    let mut period_row = vec![' '; width];
    if snapshot.period_end_index > snapshot.period_start_index {
        let start = column_of(snapshot.period_start_index, capacity, width);
        let end = column_of(snapshot.period_end_index, capacity, width);
        period_row[start..=end].fill(PERIOD);
    }

    let mut out = String::with_capacity((width + 1) * (GRAPH_HEIGHT + 1));
    for row in grid.iter().chain(std::iter::once(&period_row)) {
        let line: String = row.iter().collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use oscillator::{OscillatorConfig, Point, PointMass, Session};

    fn snapshot(history_capacity: usize, steps: usize) -> Snapshot {
        let config = OscillatorConfig::new()
            .with_mass(1.0)
            .with_stiffness(100.0)
            .with_initial_displacement(50.0)
            .with_history_capacity(history_capacity);
        let mut session = Session::new(config, PointMass::new(Point::origin(), 1.0));
        session.set_active(true);
        for _ in 0..steps {
            session.advance(0.01);
        }
        session.snapshot()
    }

    #[test]
    fn test_statistics_labels_and_units() {
        let snap = snapshot(100, 1);
        let stats = statistics(&snap);
        let labels: Vec<&str> = stats.iter().map(|(l, _)| *l).collect();
        assert_eq!(
            labels,
            vec![
                "Start Simulation:",
                "Mass [Kg]:",
                "Damping coefficient []:",
                "Spring Stiffness [N/m]:",
                "Spring Initial Displacement [m]:",
                "Spring Current Displacement [m]:",
                "Velocity [m/s]:",
                "Acceleration [m/s^2]:",
            ]
        );
        assert_eq!(stats[0].1, "true");
        assert_eq!(stats[1].1, "1");
        assert_eq!(stats[4].1, "0.5");
        // -100 N/kg * 50 in native units, shown in metres
        assert_eq!(stats[7].1, "-50");
    }

    #[test]
    fn test_number_formatting() {
        assert_eq!(number(100.0), "100");
        assert_eq!(number(0.125), "0.125");
        assert_eq!(number(1.0 / 3.0), "0.333");
        assert_eq!(number(-0.0001), "0");
    }

    #[test]
    fn test_render_text_lines() {
        let snap = snapshot(100, 5);
        let text = render(&snap, 40);
        assert!(text.contains("Displacement: "));
        assert!(text.contains("[cm]"));
        assert!(text.contains("Amplitude: 0.000000 [cm]"));
        assert!(text.contains("Period: 0.000000 [s]"));
    }

    #[test]
    fn test_render_without_history_skips_displacement() {
        let snap = snapshot(100, 0);
        let text = render(&snap, 0);
        assert!(!text.contains("Displacement: "));
        assert!(text.contains("Start Simulation:"));
    }

    #[test]
    fn test_rows_are_inverted() {
        assert_eq!(row_of(0.0), GRAPH_HEIGHT / 2);
        assert_eq!(row_of(100.0), GRAPH_HEIGHT - 1);
        assert_eq!(row_of(-100.0), 0);
        assert_eq!(row_of(1e9), GRAPH_HEIGHT - 1);
    }

    #[test]
    fn test_graph_shape() {
        let snap = snapshot(200, 150);
        assert!(snap.peak_count >= 0);
        let graph = graph(&snap, 50);
        let lines: Vec<&str> = graph.lines().collect();
        assert_eq!(lines.len(), GRAPH_HEIGHT + 1);
        assert!(graph.contains(TRACE));
        assert!(graph.contains(AMPLITUDE));
        assert!(lines.iter().all(|l| l.chars().count() <= 50));
    }

    #[test]
    fn test_columns_scale_to_capacity() {
        assert_eq!(column_of(0, 100, 50), 0);
        assert_eq!(column_of(50, 100, 50), 25);
        assert_eq!(column_of(100, 100, 50), 49);
        assert_eq!(column_of(3, 0, 50), 0);
    }
}
