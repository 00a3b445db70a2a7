use crate::error::{Result as ServerErrorResult, ServerError};

use ua_auth::{AuthorizationGuard, CredentialHasher, TokenService};
use ua_config::AuthConfig;
use ua_db::{AccountRepository, UserStore};
use ua_service::{AccountWorkflow, AppState};

use std::sync::Arc;
use std::time::Duration;

use log::info;
use sqlx::SqlitePool;

/// Wire the store, hasher, token service and guard into request state.
///
/// The signing secret is required; there is no fallback key.
pub fn build_app_state(
    pool: SqlitePool,
    auth: &AuthConfig,
    store_timeout: Duration,
) -> ServerErrorResult<AppState> {
    let secret = auth
        .jwt_secret
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or(ServerError::MissingJwtSecret)?;

    let tokens = Arc::new(TokenService::with_hs256(
        secret.as_bytes(),
        auth.token_ttl_secs,
    )?);
    let hasher = CredentialHasher::new(auth.hash_cost)?;
    let store: Arc<dyn UserStore> = Arc::new(AccountRepository::new(pool));

    let workflow = AccountWorkflow::new(store, hasher, Arc::clone(&tokens), store_timeout)?;

    info!(
        "Auth: {} tokens, ttl={}s, bcrypt cost={}",
        tokens.algorithm(),
        tokens.ttl_secs(),
        hasher.cost()
    );

    Ok(AppState::new(
        Arc::new(workflow),
        AuthorizationGuard::new(tokens),
    ))
}
