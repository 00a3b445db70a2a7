use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid token: {message} {location}")]
    InvalidToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("Missing authorization header {location}")]
    MissingHeader { location: ErrorLocation },

    #[error("Invalid authorization scheme: expected 'Bearer' {location}")]
    InvalidScheme { location: ErrorLocation },

    #[error("JWT decode failed: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("JWT encode failed: {source} {location}")]
    JwtEncode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Authenticated identity does not own resource {location}")]
    Forbidden { location: ErrorLocation },

    #[error("Password hashing failed: {source} {location}")]
    Hashing {
        #[source]
        source: bcrypt::BcryptError,
        location: ErrorLocation,
    },

    #[error("Invalid password digest: {source} {location}")]
    InvalidDigest {
        #[source]
        source: ua_core::CoreError,
        location: ErrorLocation,
    },

    #[error("Password exceeds {max_bytes} bytes {location}")]
    PasswordTooLong {
        max_bytes: usize,
        location: ErrorLocation,
    },

    #[error("Invalid auth configuration: {message} {location}")]
    Configuration {
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Missing, malformed, forged or expired credentials.
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            Self::InvalidToken { .. }
                | Self::TokenExpired { .. }
                | Self::MissingHeader { .. }
                | Self::InvalidScheme { .. }
                | Self::JwtDecode { .. }
                | Self::InvalidClaim { .. }
        )
    }

    pub fn is_forbidden(&self) -> bool {
        matches!(self, Self::Forbidden { .. })
    }

    /// Machine-readable code for rejection log lines
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidToken { .. } => "INVALID_TOKEN",
            Self::TokenExpired { .. } => "TOKEN_EXPIRED",
            Self::MissingHeader { .. } => "MISSING_AUTH_HEADER",
            Self::InvalidScheme { .. } => "INVALID_AUTH_SCHEME",
            Self::JwtDecode { .. } => "JWT_DECODE_FAILED",
            Self::JwtEncode { .. } => "JWT_ENCODE_FAILED",
            Self::InvalidClaim { .. } => "INVALID_CLAIM",
            Self::Forbidden { .. } => "FORBIDDEN",
            Self::Hashing { .. } => "HASHING_FAILED",
            Self::InvalidDigest { .. } => "INVALID_DIGEST",
            Self::PasswordTooLong { .. } => "PASSWORD_TOO_LONG",
            Self::Configuration { .. } => "AUTH_CONFIGURATION",
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
