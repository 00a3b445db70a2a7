use crate::{AuthError, Claims, IssuedToken, Result as AuthErrorResult};

use std::panic::Location;

use chrono::Utc;
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

pub const DEFAULT_TOKEN_TTL_SECS: i64 = 3600;

/// Issues and validates HS256 session tokens.
///
/// Stateless: everything needed to validate a token travels inside it, so a
/// token stays usable until `exp` passes.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_secs: i64,
}

impl TokenService {
    /// Create a service signing with HS256 (symmetric secret)
    #[track_caller]
    pub fn with_hs256(secret: &[u8], ttl_secs: i64) -> AuthErrorResult<Self> {
        if secret.is_empty() {
            return Err(AuthError::Configuration {
                message: "signing secret cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if ttl_secs <= 0 {
            return Err(AuthError::Configuration {
                message: format!("token ttl must be positive, got {}", ttl_secs),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked in validate_at against the caller's clock
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl_secs,
        })
    }

    pub fn ttl_secs(&self) -> i64 {
        self.ttl_secs
    }

    /// Issue a token for `subject`, valid for the configured TTL from now
    #[track_caller]
    pub fn issue(&self, subject: &str) -> AuthErrorResult<IssuedToken> {
        self.issue_at(subject, Utc::now().timestamp())
    }

    #[track_caller]
    pub fn issue_at(&self, subject: &str, issued_at: i64) -> AuthErrorResult<IssuedToken> {
        let claims = Claims::new(subject, issued_at, self.ttl_secs);
        claims.validate()?;

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|source| AuthError::JwtEncode {
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(IssuedToken {
            token,
            issued_at: claims.iat,
            expires_at: claims.exp,
        })
    }

    /// Validate token and return claims
    #[track_caller]
    pub fn validate(&self, token: &str) -> AuthErrorResult<Claims> {
        self.validate_at(token, Utc::now().timestamp())
    }

    #[track_caller]
    pub fn validate_at(&self, token: &str, now: i64) -> AuthErrorResult<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::InvalidSignature => AuthError::InvalidToken {
                        message: "signature does not match".to_string(),
                        location: ErrorLocation::from(Location::caller()),
                    },
                    _ => AuthError::JwtDecode {
                        source: e,
                        location: ErrorLocation::from(Location::caller()),
                    },
                }
            })?;

        let claims = token_data.claims;
        claims.validate()?;

        if claims.is_expired_at(now) {
            return Err(AuthError::TokenExpired {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(claims)
    }

    /// Get the algorithm being used (for logging/debugging)
    pub fn algorithm(&self) -> &str {
        "HS256"
    }
}
