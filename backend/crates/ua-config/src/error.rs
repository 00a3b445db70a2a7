use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

/// Failures while locating, reading or validating configuration.
///
/// Validation variants carry the dotted key (`auth.hash_cost`) so a failed
/// startup points straight at the offending setting.
#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("Invalid {key}: {message} {location}")]
    Invalid {
        key: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("{key} is required (set {env_var}) {location}")]
    Missing {
        key: &'static str,
        env_var: &'static str,
        location: ErrorLocation,
    },

    #[error("Cannot determine config directory: {source} {location}")]
    ConfigDir {
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[track_caller]
    pub fn invalid<S: Into<String>>(key: &'static str, message: S) -> Self {
        ConfigError::Invalid {
            key,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn missing(key: &'static str, env_var: &'static str) -> Self {
        ConfigError::Missing {
            key,
            env_var,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Out-of-range check shared by the numeric settings
    #[track_caller]
    pub(crate) fn check_range<T>(key: &'static str, value: T, min: T, max: T) -> ConfigErrorResult<()>
    where
        T: PartialOrd + std::fmt::Display,
    {
        if value < min || value > max {
            return Err(ConfigError::invalid(
                key,
                format!("must be {}-{}, got {}", min, max, value),
            ));
        }

        Ok(())
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
