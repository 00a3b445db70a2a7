use crate::{AuthError, CredentialHasher, MIN_HASH_COST};

use ua_core::PasswordDigest;

// Lowest cost keeps the suite fast; the algorithm is identical.
fn fast_hasher() -> CredentialHasher {
    CredentialHasher::new(MIN_HASH_COST).unwrap()
}

#[test]
fn given_password_when_hashed_then_digest_is_bcrypt_modular_crypt() {
    let digest = fast_hasher().hash("Abcdef1!").unwrap();

    assert!(digest.as_str().starts_with("$2b$04$"));
    assert_eq!(digest.as_str().len(), 60);
}

#[test]
fn given_same_password_when_hashed_twice_then_digests_differ() {
    let hasher = fast_hasher();

    let first = hasher.hash("Abcdef1!").unwrap();
    let second = hasher.hash("Abcdef1!").unwrap();

    assert_ne!(first, second);
    assert!(hasher.verify(&first, "Abcdef1!"));
    assert!(hasher.verify(&second, "Abcdef1!"));
}

#[test]
fn given_digest_when_verified_with_extra_suffix_then_false() {
    let hasher = fast_hasher();
    let digest = hasher.hash("Abcdef1!").unwrap();

    assert!(!hasher.verify(&digest, "Abcdef1!x"));
}

#[test]
fn given_malformed_digest_when_verified_then_false() {
    let hasher = fast_hasher();
    let digest = PasswordDigest::new("not-a-bcrypt-digest".to_string()).unwrap();

    assert!(!hasher.verify(&digest, "Abcdef1!"));
}

#[test]
fn given_candidate_over_72_bytes_when_verified_then_false() {
    let hasher = fast_hasher();
    let password = format!("Aa1!{}", "x".repeat(68));
    let digest = hasher.hash(&password).unwrap();

    assert!(hasher.verify(&digest, &password));
    assert!(!hasher.verify(&digest, &format!("{}y", password)));
}

#[test]
fn given_password_over_72_bytes_when_hashed_then_error() {
    let result = fast_hasher().hash(&"A".repeat(73));

    assert!(matches!(result, Err(AuthError::PasswordTooLong { .. })));
}

#[test]
fn given_out_of_range_cost_when_created_then_configuration_error() {
    assert!(matches!(
        CredentialHasher::new(3),
        Err(AuthError::Configuration { .. })
    ));
    assert!(matches!(
        CredentialHasher::new(32),
        Err(AuthError::Configuration { .. })
    ));
}

#[test]
fn given_default_hasher_then_cost_is_bcrypt_default() {
    assert_eq!(CredentialHasher::default().cost(), bcrypt::DEFAULT_COST);
}
