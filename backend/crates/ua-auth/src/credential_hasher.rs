//! Password hashing with bcrypt.
//!
//! Digests are self-contained modular-crypt strings
//! (`$2b$<cost>$<22 char salt><31 char hash>`), so verification needs nothing
//! but the stored digest.

use crate::{AuthError, Result as AuthErrorResult};

use ua_core::PasswordDigest;

use std::panic::Location;

use error_location::ErrorLocation;
use log::warn;

pub const DEFAULT_HASH_COST: u32 = bcrypt::DEFAULT_COST;
pub const MIN_HASH_COST: u32 = 4;
pub const MAX_HASH_COST: u32 = 31;

/// bcrypt ignores input past this many bytes.
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Salted, adaptive password hasher.
#[derive(Debug, Clone, Copy)]
pub struct CredentialHasher {
    cost: u32,
}

impl Default for CredentialHasher {
    fn default() -> Self {
        Self {
            cost: DEFAULT_HASH_COST,
        }
    }
}

impl CredentialHasher {
    /// Create a hasher with an explicit work factor.
    #[track_caller]
    pub fn new(cost: u32) -> AuthErrorResult<Self> {
        if !(MIN_HASH_COST..=MAX_HASH_COST).contains(&cost) {
            return Err(AuthError::Configuration {
                message: format!(
                    "hash cost must be {}-{}, got {}",
                    MIN_HASH_COST, MAX_HASH_COST, cost
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self { cost })
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext password with a fresh random salt.
    ///
    /// Only fails if the password is longer than bcrypt can cover or the
    /// system cannot supply randomness.
    #[track_caller]
    pub fn hash(&self, plaintext: &str) -> AuthErrorResult<PasswordDigest> {
        if plaintext.len() > MAX_PASSWORD_BYTES {
            return Err(AuthError::PasswordTooLong {
                max_bytes: MAX_PASSWORD_BYTES,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let digest = bcrypt::hash(plaintext, self.cost).map_err(|source| AuthError::Hashing {
            source,
            location: ErrorLocation::from(Location::caller()),
        })?;

        PasswordDigest::new(digest).map_err(|source| AuthError::InvalidDigest {
            source,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Check a candidate against a stored digest.
    ///
    /// Mismatch, malformed digest and internal failure all return `false`.
    pub fn verify(&self, digest: &PasswordDigest, candidate: &str) -> bool {
        if candidate.len() > MAX_PASSWORD_BYTES {
            return false;
        }

        match bcrypt::verify(candidate, digest.as_str()) {
            Ok(matches) => matches,
            Err(e) => {
                warn!("Password digest could not be verified: {}", e);
                false
            }
        }
    }
}
