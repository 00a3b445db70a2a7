use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] ua_config::ConfigError),

    #[error("Auth setup error: {0}")]
    Auth(#[from] ua_auth::AuthError),

    #[error("Database error: {0}")]
    Database(#[from] ua_db::DbError),

    #[error("Service setup error: {0}")]
    Service(#[from] ua_service::ServiceError),

    #[error("auth.jwt_secret is not configured")]
    MissingJwtSecret,

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("Failed to {action}: {source}")]
    Io {
        action: &'static str,
        #[source]
        source: std::io::Error,
    },
}

impl ServerError {
    /// Adapter for `map_err` on I/O during startup and serving
    pub fn io(action: &'static str) -> impl FnOnce(std::io::Error) -> Self {
        move |source| ServerError::Io { action, source }
    }
}

pub type Result<T> = std::result::Result<T, ServerError>;
