pub mod error;
pub mod models;
pub mod validation;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::account::Account;
pub use models::account_changes::AccountChanges;
pub use models::new_account::NewAccount;
pub use models::password_digest::PasswordDigest;
pub use validation::{MAX_EMAIL_LENGTH, MAX_NAME_LENGTH, validate_email, validate_name};

#[cfg(test)]
mod tests;
