use crate::Result as DbErrorResult;

use ua_core::{Account, AccountChanges, NewAccount};

use async_trait::async_trait;
use uuid::Uuid;

/// Persistence seam for accounts.
///
/// Lookups only ever see non-deleted accounts. Absence is `None` / `false`,
/// never an error; a second active account with the same email is
/// [`DbError::DuplicateEmail`](crate::DbError::DuplicateEmail).
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persist a new account, assigning its id and timestamps
    async fn create(&self, account: &NewAccount) -> DbErrorResult<Account>;

    async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<Account>>;

    async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Account>>;

    /// Apply the present fields of `changes`, returning the updated account
    async fn update(&self, id: Uuid, changes: &AccountChanges) -> DbErrorResult<Option<Account>>;

    /// Mark the account deleted. `false` when there was no active account.
    async fn soft_delete(&self, id: Uuid) -> DbErrorResult<bool>;
}
