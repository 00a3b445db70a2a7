use crate::PasswordDigest;

use chrono::NaiveDate;

/// Fields needed to create an account. The store assigns the identity and
/// timestamps.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub password_digest: PasswordDigest,
    pub birth_date: Option<NaiveDate>,
}
