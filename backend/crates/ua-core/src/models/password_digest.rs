use crate::{CoreError, ErrorLocation, Result as CoreErrorResult};

use std::fmt;
use std::panic::Location;

/// Self-contained password digest (algorithm tag, cost, salt and hash).
///
/// `Debug` is redacted so digests never end up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordDigest(String);

impl PasswordDigest {
    #[track_caller]
    pub fn new(digest: String) -> CoreErrorResult<Self> {
        if digest.is_empty() {
            return Err(CoreError::EmptyDigest {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self(digest))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordDigest(<redacted>)")
    }
}
