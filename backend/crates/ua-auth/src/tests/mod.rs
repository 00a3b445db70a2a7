mod credential_hasher;

use crate::TokenService;

pub(crate) const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

pub(crate) fn test_token_service() -> TokenService {
    TokenService::with_hs256(TEST_SECRET, 3600).unwrap()
}
