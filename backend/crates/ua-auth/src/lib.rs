pub mod authenticated_identity;
pub mod authorization_guard;
pub mod claims;
pub mod credential_hasher;
pub mod error;
pub mod issued_token;
pub mod password_policy;
pub mod token_service;

pub use authenticated_identity::AuthenticatedIdentity;
pub use authorization_guard::{AuthorizationGuard, BEARER_PREFIX, ensure_owner, extract_bearer_token};
pub use claims::Claims;
pub use credential_hasher::{
    CredentialHasher, DEFAULT_HASH_COST, MAX_HASH_COST, MAX_PASSWORD_BYTES, MIN_HASH_COST,
};
pub use error::{AuthError, Result};
pub use issued_token::IssuedToken;
pub use password_policy::{
    MIN_PASSWORD_LENGTH, PolicyViolation, SPECIAL_CHARACTERS, validate_password,
};
pub use token_service::{DEFAULT_TOKEN_TTL_SECS, TokenService};

#[cfg(test)]
mod tests;
