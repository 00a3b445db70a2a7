
use crate::{AccountWorkflow, Registration};

use ua_auth::{CredentialHasher, MIN_HASH_COST, TokenService};
use ua_db::{AccountRepository, MIGRATOR, UserStore};

use std::sync::Arc;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub(crate) const TEST_SECRET: &[u8] = b"service-test-secret-at-least-32-bytes";
pub(crate) const STRONG_PASSWORD: &str = "Sup3r-Secret!";

pub(crate) async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub(crate) fn test_tokens() -> Arc<TokenService> {
    Arc::new(TokenService::with_hs256(TEST_SECRET, 3600).unwrap())
}

pub(crate) fn workflow_with_store(store: Arc<dyn UserStore>, timeout: Duration) -> AccountWorkflow {
    AccountWorkflow::new(
        store,
        CredentialHasher::new(MIN_HASH_COST).unwrap(),
        test_tokens(),
        timeout,
    )
    .unwrap()
}

pub(crate) async fn test_workflow() -> AccountWorkflow {
    let store = Arc::new(AccountRepository::new(create_test_pool().await));
    workflow_with_store(store, Duration::from_secs(5))
}

pub(crate) fn registration(email: &str) -> Registration {
    Registration {
        name: "Ann".to_string(),
        email: email.to_string(),
        password: STRONG_PASSWORD.to_string(),
        birth_date: None,
    }
}
