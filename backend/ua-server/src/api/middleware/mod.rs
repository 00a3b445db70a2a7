pub mod require_auth;
