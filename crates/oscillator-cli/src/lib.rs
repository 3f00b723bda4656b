#![forbid(unsafe_code)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::float_cmp)]

//! # Oscillator CLI
//!
//! Library half of the `oscillator` binary: argument parsing, layered
//! configuration, headless runs and the text HUD.
//!
//! ```rust,no_run
//! use oscillator_cli::{hud, run, RunConfig};
//!
//! let config = RunConfig::from_toml_str("[oscillator]\ninitial_displacement = 10.0")?;
//! let outcome = run(&config, None)?;
//! println!("{}", hud::render(&outcome.snapshot, 60));
//! # Ok::<(), oscillator_cli::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod hud;
pub mod logging;
pub mod run;

pub use cli::Cli;
pub use config::{RunConfig, RunSettings};
pub use error::{Error, Result};
pub use run::{run, RunOutcome};
