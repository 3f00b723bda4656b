//! Command-line interface for the `oscillator` binary.
//!
//! # Examples
//!
//! ```bash
//! # Default 50 kg cube on a 100 N/cm spring, stretched 10 units
//! oscillator --initial-displacement 10
//!
//! # Load a config file, override the damping, print JSON
//! oscillator --config spring.toml --damping 2.5 --json
//!
//! # Lower the cube three preview steps before starting, log peaks
//! oscillator --lower 3 -vv
//! ```

use std::path::PathBuf;

use clap::Parser;

/// Simulate a damped spring oscillator and report its amplitude and period.
///
/// Values given on the command line override those from `--config`.
#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "oscillator",
    author,
    version,
    about = "Simulate a damped spring oscillator and report amplitude and period"
)]
pub struct Cli {
    /// TOML configuration file
    #[arg(long, short = 'c', env = "OSCILLATOR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Mass of the body
    #[arg(long)]
    pub mass: Option<f64>,

    /// Spring stiffness
    #[arg(long)]
    pub stiffness: Option<f64>,

    /// Viscous damping coefficient
    #[arg(long)]
    pub damping: Option<f64>,

    /// Displacement from equilibrium at start
    #[arg(long, allow_negative_numbers = true)]
    pub initial_displacement: Option<f64>,

    /// Number of displacement samples kept in the history
    #[arg(long)]
    pub capacity: Option<usize>,

    /// Simulation rate in frames per second
    #[arg(long)]
    pub fps: Option<u32>,

    /// Fixed time step in seconds (overrides --fps)
    #[arg(long, conflicts_with = "fps")]
    pub dt: Option<f64>,

    /// Simulated seconds to run
    #[arg(long, short = 'd')]
    pub duration: Option<f64>,

    /// Preview steps to raise the initial displacement before starting
    #[arg(long)]
    pub raise: Option<u32>,

    /// Preview steps to lower the initial displacement before starting
    #[arg(long)]
    pub lower: Option<u32>,

    /// Write every step as a JSON line to this file
    #[arg(long)]
    pub trace: Option<PathBuf>,

    /// Print the final snapshot as JSON instead of the HUD
    #[arg(long)]
    pub json: bool,

    /// Width of the HUD graph in columns
    #[arg(long, default_value_t = 60)]
    pub graph_width: usize,

    /// Enable verbose logging (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_negative_displacement() {
        let cli = Cli::parse_from(["oscillator", "--initial-displacement", "-15"]);
        assert_eq!(cli.initial_displacement, Some(-15.0));
    }

    #[test]
    fn test_fps_conflicts_with_dt() {
        let result = Cli::try_parse_from(["oscillator", "--fps", "30", "--dt", "0.01"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbosity_counts() {
        let cli = Cli::parse_from(["oscillator", "-vvv"]);
        assert_eq!(cli.verbose, 3);
        assert_eq!(cli.graph_width, 60);
    }
}
