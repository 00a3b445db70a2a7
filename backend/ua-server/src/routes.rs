use crate::api::middleware::require_auth::require_auth;
use crate::{delete_account, get_account, health, login, register, update_account};

use ua_service::AppState;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    // Resource routes: bearer token required, ownership checked per handler
    let protected = Router::new()
        .route(
            "/v1/users/{id}",
            get(get_account).patch(update_account).delete(delete_account),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .route("/v1/users", post(register))
        .route("/v1/users/login", post(login))
        .merge(protected)
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
