use crate::{Account, AccountChanges, CoreError, PasswordDigest};

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

fn test_account() -> Account {
    let now = Utc::now();
    Account {
        id: Uuid::new_v4(),
        name: "Ann".to_string(),
        email: "a@x.com".to_string(),
        password_digest: PasswordDigest::new("$2b$04$abcdefghijklmnopqrstuv".to_string()).unwrap(),
        birth_date: NaiveDate::from_ymd_opt(1990, 4, 12),
        created_at: now,
        updated_at: now,
        deleted_at: None,
    }
}

#[test]
fn test_parse_id_round_trips_uuid_string() {
    let account = test_account();

    let parsed = Account::parse_id(&account.id.to_string()).unwrap();

    assert_eq!(parsed, account.id);
}

#[test]
fn test_parse_id_rejects_garbage() {
    let result = Account::parse_id("not-a-uuid");

    assert!(matches!(result, Err(CoreError::Uuid { .. })));
}

#[test]
fn test_account_debug_does_not_leak_digest() {
    let account = test_account();

    let rendered = format!("{:?}", account);

    assert!(!rendered.contains("$2b$04$"));
    assert!(rendered.contains("<redacted>"));
}

#[test]
fn test_account_changes_is_empty() {
    assert!(AccountChanges::default().is_empty());

    let changes = AccountChanges {
        name: Some("Bea".to_string()),
        birth_date: None,
    };
    assert!(!changes.is_empty());

    let clear_birth_date = AccountChanges {
        name: None,
        birth_date: Some(None),
    };
    assert!(!clear_birth_date.is_empty());
}
