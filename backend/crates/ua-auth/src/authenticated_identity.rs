use crate::Claims;

/// Identity of the caller, extracted from a validated token.
///
/// Only the authorization guard creates one, so holding a value means the
/// request carried a valid, unexpired token for this subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedIdentity {
    subject: String,
}

impl AuthenticatedIdentity {
    pub(crate) fn from_claims(claims: Claims) -> Self {
        Self { subject: claims.sub }
    }

    /// The account id the token was issued for
    pub fn subject(&self) -> &str {
        &self.subject
    }
}
