pub mod accounts;
pub mod error;
pub mod extractors;
pub mod middleware;
