//! Edge-compatible token verifier.
//!
//! The request gate runs on every `/admin/*` navigation and is written against
//! the smallest primitive set that can verify a session: one SHA-256 digest and
//! byte arithmetic. HMAC is composed here (RFC 2104) instead of pulling in the
//! `hmac` and `subtle` crates, so this file builds anywhere `sha2` does,
//! including `wasm32` targets.
//!
//! Output must stay byte-for-byte identical to [`super::token::mint`].

use sha2::{Digest, Sha256};
use std::fmt;

use super::{TokenVerifier, token::parse};

const BLOCK_LEN: usize = 64;
const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

/// Key material after XOR with the inner and outer pads.
struct PaddedKeys {
    inner: [u8; BLOCK_LEN],
    outer: [u8; BLOCK_LEN],
}

impl PaddedKeys {
    fn derive(secret: &[u8]) -> Self {
        let mut block = [0u8; BLOCK_LEN];
        if secret.len() > BLOCK_LEN {
            let digest = Sha256::digest(secret);
            block[..digest.len()].copy_from_slice(&digest);
        } else {
            block[..secret.len()].copy_from_slice(secret);
        }

        let mut inner = [0u8; BLOCK_LEN];
        let mut outer = [0u8; BLOCK_LEN];
        for (index, byte) in block.iter().enumerate() {
            inner[index] = byte ^ IPAD;
            outer[index] = byte ^ OPAD;
        }
        Self { inner, outer }
    }

    fn mac(&self, message: &[u8]) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(self.inner);
        hasher.update(message);
        let inner_hash = hasher.finalize();

        let mut hasher = Sha256::new();
        hasher.update(self.outer);
        hasher.update(inner_hash);
        hasher.finalize().into()
    }
}

/// Token verifier for the request gate.
pub struct EdgeVerifier {
    // None when no secret is configured: every token is rejected.
    keys: Option<PaddedKeys>,
}

impl EdgeVerifier {
    #[must_use]
    pub fn new(secret: &[u8]) -> Self {
        let keys = if secret.is_empty() {
            None
        } else {
            Some(PaddedKeys::derive(secret))
        };
        Self { keys }
    }
}

impl fmt::Debug for EdgeVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EdgeVerifier")
            .field("configured", &self.keys.is_some())
            .finish()
    }
}

impl TokenVerifier for EdgeVerifier {
    fn verify_at(&self, token: Option<&str>, now: i64) -> bool {
        let Some(keys) = &self.keys else {
            return false;
        };
        let Some(token) = token.filter(|token| !token.is_empty()) else {
            return false;
        };
        let Ok(parsed) = parse(token) else {
            return false;
        };

        let expected = keys.mac(parsed.payload().as_bytes());
        if !tags_equal(&expected, parsed.signature()) {
            return false;
        }

        !parsed.claims().is_expired_at(now)
    }
}

/// Branch-free tag comparison; only the (public) length may short-circuit.
fn tags_equal(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let diff = a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y));
    diff == 0
}

/// HMAC-SHA256 built from the digest alone.
#[cfg(test)]
pub(super) fn hmac_sha256(secret: &[u8], message: &[u8]) -> [u8; 32] {
    PaddedKeys::derive(secret).mac(message)
}

#[cfg(test)]
pub(super) fn sign_payload(secret: &[u8], payload: &str) -> String {
    use base64ct::{Base64UrlUnpadded, Encoding};

    let tag = hmac_sha256(secret, payload.as_bytes());
    format!("{payload}.{}", Base64UrlUnpadded::encode_string(&tag))
}
