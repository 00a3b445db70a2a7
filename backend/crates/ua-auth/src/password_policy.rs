//! Password strength rules applied before a password is ever hashed.
//!
//! Rules are checked in a fixed order and the first failure is reported:
//! length, uppercase, lowercase, digit, special character.

use crate::MAX_PASSWORD_BYTES;

use thiserror::Error;

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Characters that satisfy the special-character rule.
pub const SPECIAL_CHARACTERS: &str = "!@#~$%^&*()+|_.,<>?/\\[]{}-";

/// The first rule a rejected password failed.
///
/// Messages are safe to show to the user as-is.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyViolation {
    #[error("password must be at least 8 characters long")]
    TooShort,

    #[error("password must be at most 72 bytes long")]
    TooLong,

    #[error("password must include at least one uppercase letter")]
    MissingUppercase,

    #[error("password must include at least one lowercase letter")]
    MissingLowercase,

    #[error("password must include at least one digit")]
    MissingDigit,

    #[error("password must include at least one special character")]
    MissingSpecial,
}

impl PolicyViolation {
    /// Name of the failed rule
    pub fn rule(&self) -> &'static str {
        match self {
            Self::TooShort | Self::TooLong => "length",
            Self::MissingUppercase => "uppercase",
            Self::MissingLowercase => "lowercase",
            Self::MissingDigit => "digit",
            Self::MissingSpecial => "special",
        }
    }
}

/// Check a plaintext password against the policy.
pub fn validate_password(plaintext: &str) -> Result<(), PolicyViolation> {
    if plaintext.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(PolicyViolation::TooShort);
    }

    // The digest only covers the first 72 bytes, anything longer would verify
    // against a different password sharing the same prefix.
    if plaintext.len() > MAX_PASSWORD_BYTES {
        return Err(PolicyViolation::TooLong);
    }

    if !plaintext.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(PolicyViolation::MissingUppercase);
    }

    if !plaintext.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(PolicyViolation::MissingLowercase);
    }

    if !plaintext.chars().any(|c| c.is_ascii_digit()) {
        return Err(PolicyViolation::MissingDigit);
    }

    if !plaintext.chars().any(|c| SPECIAL_CHARACTERS.contains(c)) {
        return Err(PolicyViolation::MissingSpecial);
    }

    Ok(())
}
