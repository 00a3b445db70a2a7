mod accounts;
mod error;
mod extractors;
