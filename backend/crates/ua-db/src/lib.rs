pub mod connection;
pub mod error;
pub mod repositories;
pub mod user_store;

pub use connection::pool::{MIGRATOR, create_pool};
pub use error::{DbError, Result};
pub use repositories::account_repository::AccountRepository;
pub use user_store::UserStore;
