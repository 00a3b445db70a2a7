use crate::Result as ServiceResult;

use ua_auth::{AuthenticatedIdentity, ensure_owner};
use ua_core::Account;

use uuid::Uuid;

/// Resolve the account a resource path refers to, provided the caller owns it.
///
/// The ownership check runs on the raw path segment first, so a malformed id
/// from someone else is `Forbidden` rather than a validation error.
pub fn owned_account_id(identity: &AuthenticatedIdentity, path_id: &str) -> ServiceResult<Uuid> {
    ensure_owner(identity, path_id)?;
    Ok(Account::parse_id(path_id)?)
}
