pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    accounts::{
        account_dto::AccountDto,
        account_response::AccountResponse,
        accounts::{delete_account, get_account, login, register, update_account},
        login_request::LoginRequest,
        login_response::LoginResponse,
        register_request::RegisterRequest,
        update_account_request::UpdateAccountRequest,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::current_account::CurrentAccount,
};

pub use crate::routes::build_router;
pub use crate::state::build_app_state;
