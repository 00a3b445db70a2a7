mod account_workflow;
mod app_state;
mod error;
mod ownership;
mod registration;

pub use account_workflow::AccountWorkflow;
pub use app_state::AppState;
pub use error::{Result, ServiceError};
pub use ownership::owned_account_id;
pub use registration::Registration;

#[cfg(test)]
mod tests;
