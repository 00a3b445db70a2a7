mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod store_config;

pub use auth_config::{
    AuthConfig, JWT_SECRET_ENV, MAX_TOKEN_TTL_SECS, MIN_JWT_SECRET_LENGTH, MIN_TOKEN_TTL_SECS,
};
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use store_config::{
    DEFAULT_STORE_CONNECTIONS, DEFAULT_STORE_TIMEOUT_SECS, MAX_STORE_CONNECTIONS,
    MAX_STORE_TIMEOUT_SECS, MIN_STORE_CONNECTIONS, MIN_STORE_TIMEOUT_SECS, StoreConfig,
};

/// Environment variable naming the config directory
pub const CONFIG_DIR_ENV: &str = "UA_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".ua";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const MIN_PORT: u16 = 1024;
const DEFAULT_DATABASE_FILENAME: &str = "accounts.db";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

#[cfg(test)]
mod tests;
