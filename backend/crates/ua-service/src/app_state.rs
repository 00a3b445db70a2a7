use crate::AccountWorkflow;

use ua_auth::AuthorizationGuard;

use std::sync::Arc;

/// Shared state handed to every request handler
#[derive(Clone)]
pub struct AppState {
    pub workflow: Arc<AccountWorkflow>,
    pub guard: AuthorizationGuard,
}

impl AppState {
    pub fn new(workflow: Arc<AccountWorkflow>, guard: AuthorizationGuard) -> Self {
        Self { workflow, guard }
    }
}
