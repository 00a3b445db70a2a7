use crate::{ConfigError, ConfigErrorResult};

use ua_auth::{DEFAULT_HASH_COST, DEFAULT_TOKEN_TTL_SECS, MAX_HASH_COST, MIN_HASH_COST};

use serde::Deserialize;

pub const JWT_SECRET_ENV: &str = "UA_AUTH_JWT_SECRET";
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

pub const MIN_TOKEN_TTL_SECS: i64 = 60;
pub const MAX_TOKEN_TTL_SECS: i64 = 86_400;

/// Token signing and password hashing settings.
///
/// There is no default secret: the server refuses to start without one.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret
    pub jwt_secret: Option<String>,
    /// Lifetime of issued session tokens
    pub token_ttl_secs: i64,
    /// bcrypt work factor
    pub hash_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
            hash_cost: DEFAULT_HASH_COST,
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field(
                "jwt_secret",
                &self.jwt_secret.as_ref().map(|_| "<redacted>"),
            )
            .field("token_ttl_secs", &self.token_ttl_secs)
            .field("hash_cost", &self.hash_cost)
            .finish()
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let secret = self
            .jwt_secret
            .as_deref()
            .ok_or_else(|| ConfigError::missing("auth.jwt_secret", JWT_SECRET_ENV))?;

        if secret.chars().count() < MIN_JWT_SECRET_LENGTH {
            return Err(ConfigError::invalid(
                "auth.jwt_secret",
                format!("must be at least {} characters", MIN_JWT_SECRET_LENGTH),
            ));
        }

        ConfigError::check_range(
            "auth.token_ttl_secs",
            self.token_ttl_secs,
            MIN_TOKEN_TTL_SECS,
            MAX_TOKEN_TTL_SECS,
        )?;
        ConfigError::check_range("auth.hash_cost", self.hash_cost, MIN_HASH_COST, MAX_HASH_COST)
    }
}
