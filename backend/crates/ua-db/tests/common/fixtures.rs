#![allow(dead_code)]

use ua_core::{NewAccount, PasswordDigest};

use chrono::NaiveDate;

/// A bcrypt-shaped digest; the store never interprets it
pub const TEST_DIGEST: &str = "$2b$04$abcdefghijklmnopqrstuu5Mq6P1iGmDy3pn6v0Gq7GfJHzWnRqG";

pub fn create_test_account(email: &str) -> NewAccount {
    NewAccount {
        name: "Ada Lovelace".to_string(),
        email: email.to_string(),
        password_digest: PasswordDigest::new(TEST_DIGEST.to_string()).unwrap(),
        birth_date: NaiveDate::from_ymd_opt(1815, 12, 10),
    }
}
