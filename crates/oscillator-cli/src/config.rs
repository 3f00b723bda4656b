//! Run configuration for the CLI.
//!
//! Values are layered: built-in defaults, then the TOML file named by
//! `--config`, then individual command-line flags.
//!
//! ```toml
//! [oscillator]
//! mass = 1.0
//! stiffness = 100.0
//! damping_coefficient = 0.5
//! initial_displacement = 10.0
//!
//! [run]
//! fps = 100
//! duration = 5.0
//! ```

use std::fs;
use std::path::Path;

use oscillator::{fps, OscillatorConfig};
use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::error::{Error, Result};

/// Upper bound on the number of steps in one run.
pub const MAX_STEPS: u64 = 100_000_000;

/// How long and how finely to run the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunSettings {
    /// Simulation rate. Ignored when `dt` is set.
    pub fps: u32,
    /// Fixed step in seconds.
    pub dt: Option<f64>,
    /// Simulated seconds to run.
    pub duration: f64,
    /// Preview steps raising the initial displacement before the run.
    pub raise: u32,
    /// Preview steps lowering the initial displacement before the run.
    pub lower: u32,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            fps: 60,
            dt: None,
            duration: 10.0,
            raise: 0,
            lower: 0,
        }
    }
}

impl RunSettings {
    /// The step size in seconds.
    pub fn step(&self) -> f64 {
        self.dt.unwrap_or_else(|| fps(self.fps))
    }

    /// Number of steps needed to cover `duration`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn steps(&self) -> u64 {
        (self.duration / self.step()).round() as u64
    }
}

/// Everything the `oscillator` binary needs to run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Physical and analysis parameters.
    pub oscillator: OscillatorConfig,
    /// Step size and duration.
    pub run: RunSettings,
}

impl RunConfig {
    /// Parses a TOML document. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] on malformed TOML or mistyped values.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Reads and parses a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Read`] if the file cannot be read, or
    /// [`Error::Parse`] if it is not valid.
    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Overrides fields with any flags given on the command line.
    pub fn apply_cli(&mut self, cli: &Cli) {
        let osc = &mut self.oscillator;
        if let Some(mass) = cli.mass {
            osc.mass = mass;
        }
        if let Some(stiffness) = cli.stiffness {
            osc.stiffness = stiffness;
        }
        if let Some(damping) = cli.damping {
            osc.damping_coefficient = damping;
        }
        if let Some(initial) = cli.initial_displacement {
            osc.initial_displacement = initial;
        }
        if let Some(capacity) = cli.capacity {
            osc.history_capacity = capacity;
        }

        let run = &mut self.run;
        if let Some(fps) = cli.fps {
            run.fps = fps;
            run.dt = None;
        }
        if cli.dt.is_some() {
            run.dt = cli.dt;
        }
        if let Some(duration) = cli.duration {
            run.duration = duration;
        }
        if let Some(raise) = cli.raise {
            run.raise = raise;
        }
        if let Some(lower) = cli.lower {
            run.lower = lower;
        }
    }

    /// Builds the effective configuration for a parsed command line and
    /// validates it.
    ///
    /// # Errors
    ///
    /// Propagates load failures and validation errors.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_cli(cli);
        config.validate()?;
        Ok(config)
    }

    /// Checks oscillator parameters and run settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for bad physics and [`Error::Run`] for a
    /// bad step or duration.
    pub fn validate(&self) -> Result<()> {
        self.oscillator.validate()?;

        let run = &self.run;
        if run.dt.is_none() && run.fps == 0 {
            return Err(Error::Run("fps must be at least 1".into()));
        }
        let step = run.step();
        if !step.is_finite() || step <= 0.0 {
            return Err(Error::Run(format!("time step must be positive, got {step}")));
        }
        if !run.duration.is_finite() || run.duration < 0.0 {
            return Err(Error::Run(format!(
                "duration must not be negative, got {}",
                run.duration
            )));
        }
        #[allow(clippy::cast_precision_loss)]
        let ceiling = MAX_STEPS as f64;
        if (run.duration / step).round() > ceiling {
            return Err(Error::Run(format!(
                "duration {} at step {step} needs more than {MAX_STEPS} steps",
                run.duration
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use oscillator::ConfigError;

    #[test]
    fn test_defaults() {
        let config = RunConfig::default();
        assert_eq!(config.oscillator, OscillatorConfig::default());
        assert_eq!(config.run.fps, 60);
        assert_eq!(config.run.steps(), 600);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = RunConfig::from_toml_str(
            r"
            [oscillator]
            mass = 2.0

            [run]
            dt = 0.5
            duration = 3.0
            ",
        )
        .unwrap();
        assert_eq!(config.oscillator.mass, 2.0);
        assert_eq!(config.oscillator.stiffness, 100.0);
        assert_eq!(config.run.step(), 0.5);
        assert_eq!(config.run.steps(), 6);
    }

    #[test]
    fn test_malformed_toml() {
        let err = RunConfig::from_toml_str("[oscillator]\nmass = \"heavy\"").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_cli_overrides_file() {
        let mut config =
            RunConfig::from_toml_str("[oscillator]\nmass = 2.0\n[run]\ndt = 0.1").unwrap();
        let cli = Cli::parse_from(["oscillator", "--mass", "3", "--fps", "50", "--raise", "2"]);
        config.apply_cli(&cli);
        assert_eq!(config.oscillator.mass, 3.0);
        assert_eq!(config.run.dt, None);
        assert_eq!(config.run.step(), 0.02);
        assert_eq!(config.run.raise, 2);
    }

    #[test]
    fn test_resolve_rejects_zero_mass() {
        let cli = Cli::parse_from(["oscillator", "--mass", "0"]);
        let err = RunConfig::resolve(&cli).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::NonPositiveMass(_))));
    }

    #[test]
    fn test_validate_run_settings() {
        let mut config = RunConfig::default();
        config.run.fps = 0;
        assert!(matches!(config.validate(), Err(Error::Run(_))));

        let mut config = RunConfig::default();
        config.run.dt = Some(-1.0);
        assert!(matches!(config.validate(), Err(Error::Run(_))));

        let mut config = RunConfig::default();
        config.run.duration = f64::NAN;
        assert!(matches!(config.validate(), Err(Error::Run(_))));
    }

    #[test]
    fn test_step_count_is_bounded() {
        let mut config = RunConfig::default();
        config.run.dt = Some(1e-12);
        config.run.duration = 10.0;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, Error::Run(_)));
        assert!(err.to_string().contains("steps"));

        config.run.dt = Some(1e-6);
        config.run.duration = 100.0;
        assert!(config.validate().is_ok());
        assert_eq!(config.run.steps(), MAX_STEPS);
    }

    #[test]
    fn test_missing_file() {
        let err = RunConfig::load(Path::new("/nonexistent/oscillator.toml")).unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
    }
}
