pub mod account;
pub mod account_changes;
pub mod new_account;
pub mod password_digest;
