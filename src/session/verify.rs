//! Full-runtime token verifier used by privileged handlers.

use hmac::Mac;
use secrecy::{ExposeSecret, SecretSlice};
use std::fmt;
use tracing::debug;

use super::{
    TokenVerifier,
    token::{HmacSha256, parse},
};

pub struct FullVerifier {
    secret: SecretSlice<u8>,
}

impl FullVerifier {
    #[must_use]
    pub fn new(secret: &[u8]) -> Self {
        Self {
            secret: SecretSlice::from(secret.to_vec()),
        }
    }
}

impl fmt::Debug for FullVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FullVerifier")
            .field("secret", &"***")
            .finish()
    }
}

impl TokenVerifier for FullVerifier {
    fn verify_at(&self, token: Option<&str>, now: i64) -> bool {
        let secret = self.secret.expose_secret();
        if secret.is_empty() {
            debug!("session secret not configured; rejecting token");
            return false;
        }
        let Some(token) = token.filter(|token| !token.is_empty()) else {
            return false;
        };

        let parsed = match parse(token) {
            Ok(parsed) => parsed,
            Err(err) => {
                debug!("rejecting session token: {err}");
                return false;
            }
        };

        let Ok(mut mac) = HmacSha256::new_from_slice(secret) else {
            return false;
        };
        mac.update(parsed.payload().as_bytes());
        if mac.verify_slice(parsed.signature()).is_err() {
            debug!("rejecting session token: signature mismatch");
            return false;
        }

        if parsed.claims().is_expired_at(now) {
            debug!("rejecting session token: expired");
            return false;
        }

        true
    }
}
