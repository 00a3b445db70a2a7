//! Account REST API handlers

use crate::{
    AccountResponse, ApiResult, CurrentAccount, LoginRequest, LoginResponse, RegisterRequest,
    UpdateAccountRequest,
};

use ua_service::{AppState, owned_account_id};

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

// =============================================================================
// Public
// =============================================================================

/// POST /v1/users
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<AccountResponse>)> {
    let Json(request) = payload?;

    let account = state.workflow.register(request.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(AccountResponse {
            account: account.into(),
        }),
    ))
}

/// POST /v1/users/login
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<LoginResponse>> {
    let Json(request) = payload?;

    let issued = state
        .workflow
        .login(&request.email, &request.password)
        .await?;

    Ok(Json(issued.into()))
}

// =============================================================================
// Authenticated, owner only
// =============================================================================

/// GET /v1/users/{id}
pub async fn get_account(
    State(state): State<AppState>,
    CurrentAccount(identity): CurrentAccount,
    Path(id): Path<String>,
) -> ApiResult<Json<AccountResponse>> {
    let account_id = owned_account_id(&identity, &id)?;

    let account = state.workflow.get(account_id).await?;

    Ok(Json(AccountResponse {
        account: account.into(),
    }))
}

/// PATCH /v1/users/{id}
pub async fn update_account(
    State(state): State<AppState>,
    CurrentAccount(identity): CurrentAccount,
    Path(id): Path<String>,
    payload: Result<Json<UpdateAccountRequest>, JsonRejection>,
) -> ApiResult<Json<AccountResponse>> {
    let account_id = owned_account_id(&identity, &id)?;
    let Json(request) = payload?;

    let account = state.workflow.update(account_id, request.into()).await?;

    Ok(Json(AccountResponse {
        account: account.into(),
    }))
}

/// DELETE /v1/users/{id}
pub async fn delete_account(
    State(state): State<AppState>,
    CurrentAccount(identity): CurrentAccount,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let account_id = owned_account_id(&identity, &id)?;

    state.workflow.delete(account_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
