//! Bearer-token authentication for resource routes.

use crate::ApiError;

use ua_service::AppState;

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use log::debug;

/// Validate the `Authorization: Bearer <token>` header and attach the
/// caller's [`AuthenticatedIdentity`](ua_auth::AuthenticatedIdentity) to the
/// request. Any failure ends the request with 401 before the handler runs.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let identity = {
        let header = match request.headers().get(AUTHORIZATION) {
            Some(value) => Some(value.to_str().map_err(|_| {
                debug!("Authorization header is not valid UTF-8");
                ApiError::unauthorized()
            })?),
            None => None,
        };

        state.guard.authenticate(header).map_err(|e| {
            debug!(
                "Rejected {} {} [{}]: {}",
                request.method(),
                request.uri().path(),
                e.error_code(),
                e
            );
            ApiError::unauthorized()
        })?
    };

    request.extensions_mut().insert(identity);

    Ok(next.run(request).await)
}
