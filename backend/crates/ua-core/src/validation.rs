//! Input shape checks for account fields.
//!
//! These run before anything touches the store. They are about well-formed
//! input only; password strength lives with the password policy.

use crate::{CoreError, ErrorLocation, Result as CoreErrorResult};

use std::panic::Location;

pub const MAX_NAME_LENGTH: usize = 100;
pub const MAX_EMAIL_LENGTH: usize = 254;

#[track_caller]
pub fn validate_name(name: &str) -> CoreErrorResult<()> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation {
            message: "name cannot be empty".to_string(),
            field: Some("name".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(CoreError::Validation {
            message: format!("name must be at most {} characters", MAX_NAME_LENGTH),
            field: Some("name".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(())
}

/// Accepts `local@domain.tld`-shaped addresses. Deliverability is not checked.
#[track_caller]
pub fn validate_email(email: &str) -> CoreErrorResult<()> {
    let invalid = |message: &str| CoreError::Validation {
        message: message.to_string(),
        field: Some("email".to_string()),
        location: ErrorLocation::from(Location::caller()),
    };

    if email.len() > MAX_EMAIL_LENGTH {
        return Err(invalid("email is too long"));
    }

    if email.chars().any(char::is_whitespace) {
        return Err(invalid("email cannot contain whitespace"));
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Err(invalid("email must contain '@'"));
    };

    if local.is_empty() || domain.contains('@') {
        return Err(invalid("email is malformed"));
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|l| l.is_empty()) {
        return Err(invalid("email domain is malformed"));
    }

    Ok(())
}
