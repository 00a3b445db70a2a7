//! REST API error types
//!
//! Every failure leaves as `{"error": {"code", "message", "field"?}}` with a
//! fixed status per kind. Messages for auth, lookup and internal failures are
//! generic; the detail stays in the server log.

use ua_service::ServiceError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use log::{debug, error, warn};
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if the error concerns a specific input field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Password policy violation (400)
    #[error("Password policy violation: {message} {location}")]
    PasswordPolicy {
        message: String,
        location: ErrorLocation,
    },

    /// Malformed input (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Bad credentials at login (401)
    #[error("Authentication failed {location}")]
    AuthenticationFailed { location: ErrorLocation },

    /// Missing or invalid bearer token (401)
    #[error("Unauthorized {location}")]
    Unauthorized { location: ErrorLocation },

    /// Valid token, someone else's resource (403)
    #[error("Forbidden {location}")]
    Forbidden { location: ErrorLocation },

    /// Resource not found (404)
    #[error("Not found {location}")]
    NotFound { location: ErrorLocation },

    /// Email already taken by an active account (409)
    #[error("Conflict {location}")]
    Conflict { location: ErrorLocation },

    /// Internal server error (500); `message` is logged, never sent
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn unauthorized() -> Self {
        ApiError::Unauthorized {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::PasswordPolicy { .. } | ApiError::Validation { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::AuthenticationFailed { .. } | ApiError::Unauthorized { .. } => {
                StatusCode::UNAUTHORIZED
            }
            ApiError::Forbidden { .. } => StatusCode::FORBIDDEN,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            ApiError::Internal { .. } => error!("{}", self),
            ApiError::AuthenticationFailed { .. }
            | ApiError::Unauthorized { .. }
            | ApiError::Forbidden { .. } => warn!("{}", self),
            _ => debug!("{}", self),
        }

        let body = match self {
            ApiError::PasswordPolicy { message, .. } => ApiErrorBody {
                code: "PASSWORD_POLICY".into(),
                message,
                field: Some("password".into()),
            },
            ApiError::Validation { message, field, .. } => ApiErrorBody {
                code: "VALIDATION_ERROR".into(),
                message,
                field,
            },
            ApiError::AuthenticationFailed { .. } => ApiErrorBody {
                code: "AUTHENTICATION_FAILED".into(),
                message: "invalid email or password".into(),
                field: None,
            },
            ApiError::Unauthorized { .. } => ApiErrorBody {
                code: "UNAUTHORIZED".into(),
                message: "unauthorized".into(),
                field: None,
            },
            ApiError::Forbidden { .. } => ApiErrorBody {
                code: "FORBIDDEN".into(),
                message: "forbidden".into(),
                field: None,
            },
            ApiError::NotFound { .. } => ApiErrorBody {
                code: "NOT_FOUND".into(),
                message: "not found".into(),
                field: None,
            },
            ApiError::Conflict { .. } => ApiErrorBody {
                code: "CONFLICT".into(),
                message: "account already exists".into(),
                field: None,
            },
            ApiError::Internal { .. } => ApiErrorBody {
                code: "INTERNAL_ERROR".into(),
                message: "internal server error".into(),
                field: None,
            },
        };

        let mut response = (status, Json(ApiErrorResponse { error: body })).into_response();

        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }

        response
    }
}

/// Convert workflow errors to API errors
impl From<ServiceError> for ApiError {
    #[track_caller]
    fn from(e: ServiceError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            ServiceError::PolicyViolation { violation, .. } => ApiError::PasswordPolicy {
                message: violation.to_string(),
                location,
            },
            ServiceError::Validation { message, field, .. } => ApiError::Validation {
                message,
                field,
                location,
            },
            ServiceError::AuthenticationFailed { .. } => {
                ApiError::AuthenticationFailed { location }
            }
            ServiceError::Unauthorized { message, .. } => {
                debug!("Unauthorized: {}", message);
                ApiError::Unauthorized { location }
            }
            ServiceError::Forbidden { .. } => ApiError::Forbidden { location },
            ServiceError::NotFound { .. } => ApiError::NotFound { location },
            ServiceError::Conflict { .. } => ApiError::Conflict { location },
            ServiceError::Internal { message, .. } => ApiError::Internal { message, location },
        }
    }
}

/// Unparseable or mistyped JSON bodies are validation failures
impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation {
            message: format!("invalid request body: {}", rejection.body_text()),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
