//! Axum extractor for the authenticated caller

use crate::ApiError;

use ua_auth::AuthenticatedIdentity;

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

/// The identity `require_auth` attached to this request.
///
/// Rejects with 401 if the route was mounted without the middleware.
pub struct CurrentAccount(pub AuthenticatedIdentity);

impl<S> FromRequestParts<S> for CurrentAccount
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            parts
                .extensions
                .get::<AuthenticatedIdentity>()
                .cloned()
                .map(CurrentAccount)
                .ok_or_else(|| {
                    log::warn!("No authenticated identity on request");
                    ApiError::unauthorized()
                })
        }
    }
}
