use crate::{ConfigError, ConfigErrorResult};

use std::time::Duration;

use serde::Deserialize;

pub const MIN_STORE_TIMEOUT_SECS: u64 = 1;
pub const MAX_STORE_TIMEOUT_SECS: u64 = 300;
pub const DEFAULT_STORE_TIMEOUT_SECS: u64 = 30;

pub const MIN_STORE_CONNECTIONS: u32 = 1;
pub const MAX_STORE_CONNECTIONS: u32 = 64;
pub const DEFAULT_STORE_CONNECTIONS: u32 = 5;

/// Limits on calls into the account store.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Deadline for a single store call; an elapsed deadline is an internal error
    pub timeout_secs: u64,
    /// Size of the SQLite connection pool
    pub max_connections: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_STORE_TIMEOUT_SECS,
            max_connections: DEFAULT_STORE_CONNECTIONS,
        }
    }
}

impl StoreConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        ConfigError::check_range(
            "store.timeout_secs",
            self.timeout_secs,
            MIN_STORE_TIMEOUT_SECS,
            MAX_STORE_TIMEOUT_SECS,
        )?;
        ConfigError::check_range(
            "store.max_connections",
            self.max_connections,
            MIN_STORE_CONNECTIONS,
            MAX_STORE_CONNECTIONS,
        )
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
