//! Account entity - the single user resource managed by the service.

use crate::{CoreError, ErrorLocation, PasswordDigest, Result as CoreErrorResult};

use std::panic::Location;

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

/// A registered user account.
///
/// Deliberately not `Serialize`: outward views go through a DTO that leaves
/// the password digest behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Assigned by the store on creation, immutable afterwards
    pub id: Uuid,
    pub name: String,
    /// Unique among non-deleted accounts, compared case-sensitively
    pub email: String,
    pub password_digest: PasswordDigest,
    pub birth_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Account {
    /// Parse an account identity as it appears in paths and token subjects.
    #[track_caller]
    pub fn parse_id(raw: &str) -> CoreErrorResult<Uuid> {
        Uuid::parse_str(raw).map_err(|source| CoreError::Uuid {
            source,
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
