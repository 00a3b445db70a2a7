/// A freshly signed session token and its validity window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    /// Compact JWS: `header.claims.signature`
    pub token: String,
    pub issued_at: i64,
    pub expires_at: i64,
}
