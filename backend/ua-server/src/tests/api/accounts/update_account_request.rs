use crate::UpdateAccountRequest;

use ua_core::AccountChanges;

use chrono::NaiveDate;
use googletest::prelude::*;

fn parse(body: &str) -> AccountChanges {
    serde_json::from_str::<UpdateAccountRequest>(body)
        .unwrap()
        .into()
}

#[test]
fn test_absent_birth_date_leaves_it_alone() {
    let changes = parse(r#"{"name": "Ann"}"#);

    assert_that!(changes.birth_date, none());
    assert_that!(changes.name, some(eq("Ann")));
}

#[test]
fn test_null_birth_date_clears_it() {
    let changes = parse(r#"{"birth_date": null}"#);

    assert_that!(changes.birth_date, some(none()));
    assert!(!changes.is_empty());
}

#[test]
fn test_birth_date_value_sets_it() {
    let changes = parse(r#"{"birth_date": "1990-01-02"}"#);

    assert_that!(
        changes.birth_date,
        some(eq(NaiveDate::from_ymd_opt(1990, 1, 2)))
    );
}

#[test]
fn test_email_and_password_are_ignored() {
    let changes = parse(r#"{"email": "b@x.io", "password": "N3w-Password!"}"#);

    assert!(changes.is_empty());
}

#[test]
fn test_malformed_birth_date_is_rejected() {
    let result = serde_json::from_str::<UpdateAccountRequest>(r#"{"birth_date": "02/01/1990"}"#);

    assert!(result.is_err());
}
