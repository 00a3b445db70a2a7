use ua_auth::IssuedToken;

use serde::Serialize;

pub const TOKEN_TYPE: &str = "Bearer";

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub token_type: &'static str,
    /// Unix seconds
    pub expires_at: i64,
}

impl From<IssuedToken> for LoginResponse {
    fn from(issued: IssuedToken) -> Self {
        Self {
            token: issued.token,
            token_type: TOKEN_TYPE,
            expires_at: issued.expires_at,
        }
    }
}
