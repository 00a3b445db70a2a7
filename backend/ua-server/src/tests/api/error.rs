use crate::ApiError;

use ua_auth::PolicyViolation;
use ua_service::ServiceError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::{StatusCode, header};
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_policy_violation_returns_400_with_rule_message() {
    let error = ApiError::from(ServiceError::from(PolicyViolation::MissingUppercase));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "PASSWORD_POLICY");
    assert_eq!(json["error"]["field"], "password");
    assert_eq!(
        json["error"]["message"],
        PolicyViolation::MissingUppercase.to_string()
    );
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "name is too long".into(),
        field: Some("name".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "name");
}

#[tokio::test]
async fn test_validation_error_without_field_omits_field_key() {
    let error = ApiError::Validation {
        message: "invalid request body".into(),
        field: None,
        location: ErrorLocation::from(Location::caller()),
    };

    let (_, json) = body_json(error).await;

    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_authentication_failed_returns_401_with_generic_message() {
    let error = ApiError::from(ServiceError::authentication_failed());

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "AUTHENTICATION_FAILED");
    assert_eq!(json["error"]["message"], "invalid email or password");
}

#[tokio::test]
async fn test_unauthorized_returns_401_with_bearer_challenge() {
    let response = ApiError::unauthorized().into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.headers()[header::WWW_AUTHENTICATE], "Bearer");

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
    assert_eq!(json["error"]["message"], "unauthorized");
}

#[tokio::test]
async fn test_forbidden_returns_403() {
    let error = ApiError::Forbidden {
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"]["code"], "FORBIDDEN");
    assert_eq!(json["error"]["message"], "forbidden");
}

#[tokio::test]
async fn test_not_found_returns_404() {
    let error = ApiError::from(ServiceError::not_found());

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "not found");
}

#[tokio::test]
async fn test_conflict_returns_409() {
    let error = ApiError::Conflict {
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"]["code"], "CONFLICT");
    assert_eq!(json["error"]["message"], "account already exists");
}

#[tokio::test]
async fn test_internal_error_hides_detail() {
    let error = ApiError::from(ServiceError::internal("store find_by_id timed out"));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"]["message"], "internal server error");
}
