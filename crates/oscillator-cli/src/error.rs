//! Error type for the CLI library.

use std::io;
use std::path::PathBuf;

use oscillator::ConfigError;

/// Errors raised while loading configuration or running a simulation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configuration file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The configuration file is not valid TOML for [`RunConfig`](crate::RunConfig).
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The oscillator parameters were rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The run settings were rejected.
    #[error("invalid run settings: {0}")]
    Run(String),

    /// Writing output failed.
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    /// Serializing a record or snapshot failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for the CLI library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_is_transparent() {
        let err = Error::from(ConfigError::NonPositiveMass(0.0));
        assert_eq!(err.to_string(), ConfigError::NonPositiveMass(0.0).to_string());
    }

    #[test]
    fn test_read_error_names_path() {
        let err = Error::Read {
            path: PathBuf::from("missing.toml"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        let msg = err.to_string();
        assert!(msg.contains("missing.toml"));
        assert!(msg.contains("gone"));
    }
}
