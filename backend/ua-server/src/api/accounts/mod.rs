#[allow(clippy::module_inception)]
pub mod accounts;
pub mod account_dto;
pub mod account_response;
pub mod login_request;
pub mod login_response;
pub mod register_request;
pub mod update_account_request;
