use crate::{ApiError, CurrentAccount};

use ua_auth::{AuthorizationGuard, TokenService};

use std::sync::Arc;

use axum::{body::Body, extract::FromRequestParts, http::Request};

const SECRET: &[u8] = b"extractor-test-secret-32-bytes-long";

#[tokio::test]
async fn test_identity_in_extensions_is_extracted() {
    let tokens = Arc::new(TokenService::with_hs256(SECRET, 3600).unwrap());
    let header = format!("Bearer {}", tokens.issue("account-1").unwrap().token);
    let identity = AuthorizationGuard::new(tokens)
        .authenticate(Some(&header))
        .unwrap();

    let mut request = Request::builder().uri("/").body(Body::empty()).unwrap();
    request.extensions_mut().insert(identity);
    let (mut parts, _) = request.into_parts();

    let CurrentAccount(extracted) = CurrentAccount::from_request_parts(&mut parts, &())
        .await
        .unwrap();

    assert_eq!(extracted.subject(), "account-1");
}

#[tokio::test]
async fn test_missing_identity_is_unauthorized() {
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let (mut parts, _) = request.into_parts();

    let result = CurrentAccount::from_request_parts(&mut parts, &()).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}
