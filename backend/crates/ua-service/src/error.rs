use ua_auth::{AuthError, PolicyViolation};
use ua_core::CoreError;
use ua_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Outcome taxonomy of the account workflow. Every variant maps to exactly
/// one transport status; callers match on the variant, never the message.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Password policy violation: {violation} {location}")]
    PolicyViolation {
        violation: PolicyViolation,
        location: ErrorLocation,
    },

    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Authentication failed {location}")]
    AuthenticationFailed { location: ErrorLocation },

    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    #[error("Forbidden {location}")]
    Forbidden { location: ErrorLocation },

    #[error("Account not found {location}")]
    NotFound { location: ErrorLocation },

    #[error("Account already exists {location}")]
    Conflict { location: ErrorLocation },

    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ServiceError {
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S, field: Option<&str>) -> Self {
        Self::Validation {
            message: message.into(),
            field: field.map(str::to_string),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn authentication_failed() -> Self {
        Self::AuthenticationFailed {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found() -> Self {
        Self::NotFound {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<PolicyViolation> for ServiceError {
    #[track_caller]
    fn from(violation: PolicyViolation) -> Self {
        Self::PolicyViolation {
            violation,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for ServiceError {
    #[track_caller]
    fn from(err: CoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match err {
            CoreError::Validation { message, field, .. } => Self::Validation {
                message,
                field,
                location,
            },
            CoreError::Uuid { source, .. } => Self::Validation {
                message: format!("invalid account id: {}", source),
                field: Some("id".to_string()),
                location,
            },
            CoreError::EmptyDigest { .. } => Self::Internal {
                message: "empty password digest".to_string(),
                location,
            },
        }
    }
}

impl From<AuthError> for ServiceError {
    #[track_caller]
    fn from(err: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        if err.is_unauthorized() {
            Self::Unauthorized {
                message: err.to_string(),
                location,
            }
        } else if err.is_forbidden() {
            Self::Forbidden { location }
        } else {
            Self::Internal {
                message: err.to_string(),
                location,
            }
        }
    }
}

impl From<DbError> for ServiceError {
    #[track_caller]
    fn from(err: DbError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        if err.is_duplicate_email() {
            Self::Conflict { location }
        } else {
            Self::Internal {
                message: err.to_string(),
                location,
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
