mod account;
mod password_digest;
