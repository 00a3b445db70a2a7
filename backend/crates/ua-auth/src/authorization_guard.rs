//! Request-level authentication and the per-resource ownership check.

use crate::{AuthError, AuthenticatedIdentity, Result as AuthErrorResult, TokenService};

use std::panic::Location;
use std::sync::Arc;

use chrono::Utc;
use error_location::ErrorLocation;
use log::debug;

pub const BEARER_PREFIX: &str = "Bearer ";

/// Turns an `Authorization` header into an [`AuthenticatedIdentity`].
#[derive(Clone)]
pub struct AuthorizationGuard {
    tokens: Arc<TokenService>,
}

impl AuthorizationGuard {
    pub fn new(tokens: Arc<TokenService>) -> Self {
        Self { tokens }
    }

    /// Authenticate using the raw `Authorization` header value, if any
    #[track_caller]
    pub fn authenticate(&self, authorization: Option<&str>) -> AuthErrorResult<AuthenticatedIdentity> {
        self.authenticate_at(authorization, Utc::now().timestamp())
    }

    #[track_caller]
    pub fn authenticate_at(
        &self,
        authorization: Option<&str>,
        now: i64,
    ) -> AuthErrorResult<AuthenticatedIdentity> {
        let token = extract_bearer_token(authorization)?;
        let claims = self.tokens.validate_at(token, now)?;

        debug!("Authenticated subject {}", claims.sub);

        Ok(AuthenticatedIdentity::from_claims(claims))
    }
}

/// Pull the token out of a `Bearer <token>` header value
#[track_caller]
pub fn extract_bearer_token(authorization: Option<&str>) -> AuthErrorResult<&str> {
    let header = authorization.ok_or_else(|| AuthError::MissingHeader {
        location: ErrorLocation::from(Location::caller()),
    })?;

    let token = header
        .strip_prefix(BEARER_PREFIX)
        .ok_or_else(|| AuthError::InvalidScheme {
            location: ErrorLocation::from(Location::caller()),
        })?
        .trim();

    if token.is_empty() {
        return Err(AuthError::InvalidToken {
            message: "bearer token is empty".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(token)
}

/// The resource in the path must belong to the authenticated caller.
#[track_caller]
pub fn ensure_owner(identity: &AuthenticatedIdentity, resource_id: &str) -> AuthErrorResult<()> {
    if identity.subject() != resource_id {
        debug!(
            "Subject {} attempted to act on account {}",
            identity.subject(),
            resource_id
        );
        return Err(AuthError::Forbidden {
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(())
}
