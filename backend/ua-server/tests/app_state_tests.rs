mod common;

use crate::common::{create_test_pool, test_auth_config};

use ua_server::build_app_state;
use ua_server::error::ServerError;

use std::time::Duration;

#[tokio::test]
async fn given_no_jwt_secret_when_building_state_then_refuses() {
    let mut auth = test_auth_config();
    auth.jwt_secret = None;

    let result = build_app_state(create_test_pool().await, &auth, Duration::from_secs(5));

    assert!(matches!(result, Err(ServerError::MissingJwtSecret)));
}

#[tokio::test]
async fn given_empty_jwt_secret_when_building_state_then_refuses() {
    let mut auth = test_auth_config();
    auth.jwt_secret = Some(String::new());

    let result = build_app_state(create_test_pool().await, &auth, Duration::from_secs(5));

    assert!(matches!(result, Err(ServerError::MissingJwtSecret)));
}

#[tokio::test]
async fn given_out_of_range_hash_cost_when_building_state_then_auth_error() {
    let mut auth = test_auth_config();
    auth.hash_cost = 2;

    let result = build_app_state(create_test_pool().await, &auth, Duration::from_secs(5));

    assert!(matches!(result, Err(ServerError::Auth(_))));
}
