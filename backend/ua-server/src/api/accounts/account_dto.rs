use ua_core::Account;

use serde::Serialize;

/// Outward view of an account. The password digest has no field here.
#[derive(Debug, Serialize)]
pub struct AccountDto {
    pub id: String,
    pub name: String,
    pub email: String,
    /// `YYYY-MM-DD`
    pub birth_date: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Account> for AccountDto {
    fn from(a: Account) -> Self {
        Self {
            id: a.id.to_string(),
            name: a.name,
            email: a.email,
            birth_date: a.birth_date.map(|d| d.format("%Y-%m-%d").to_string()),
            created_at: a.created_at.timestamp(),
            updated_at: a.updated_at.timestamp(),
        }
    }
}
