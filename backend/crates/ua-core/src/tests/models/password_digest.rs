use crate::{CoreError, PasswordDigest};

#[test]
fn test_empty_digest_is_rejected() {
    let result = PasswordDigest::new(String::new());

    assert!(matches!(result, Err(CoreError::EmptyDigest { .. })));
}

#[test]
fn test_digest_exposes_raw_value() {
    let digest = PasswordDigest::new("$2b$12$salt-and-hash".to_string()).unwrap();

    assert_eq!(digest.as_str(), "$2b$12$salt-and-hash");
}
