//! Admin session minting, transport, and verification.
//!
//! Token format (shared by both verifiers):
//!
//! ```text
//! BASE64URL(claims json) "." BASE64URL(HMAC-SHA256(secret, ascii payload part))
//! ```
//!
//! Base64 is URL-safe without padding. The MAC covers the encoded payload part,
//! not the decoded JSON, so a verifier never needs to re-serialize claims.
//!
//! Two verifiers implement [`TokenVerifier`]:
//! - [`FullVerifier`] uses the `hmac` crate and is used by privileged handlers.
//! - [`EdgeVerifier`] builds HMAC from a bare SHA-256 digest and is used by the
//!   request gate, which must stay cheap and dependency-light.
//!
//! Tokens minted by one verify with the other; see the conformance vectors in
//! the tests of this module.

mod compare;
mod config;
pub mod cookie;
mod edge;
pub mod gate;
mod token;
mod verify;

pub use compare::{compare, credentials_match};
pub use config::{AdminConfig, DEFAULT_SESSION_TTL_SECONDS, Environment};
pub use edge::EdgeVerifier;
pub use gate::{GateDecision, LOGIN_PATH};
pub use token::{
    ADMIN_SUBJECT, MAX_TOKEN_LEN, ParsedToken, SessionClaims, TokenError, mint, parse,
};
pub use verify::FullVerifier;

use time::OffsetDateTime;

/// Verifies a session token string taken from the cookie.
///
/// Every failure (missing, malformed, tampered, expired, unconfigured secret)
/// collapses to `false`.
pub trait TokenVerifier {
    /// Verify against an explicit clock, in unix seconds.
    fn verify_at(&self, token: Option<&str>, now: i64) -> bool;

    /// Verify against the wall clock.
    fn verify(&self, token: Option<&str>) -> bool {
        self.verify_at(token, unix_now())
    }
}

/// Current wall-clock time in unix seconds.
#[must_use]
pub fn unix_now() -> i64 {
    OffsetDateTime::now_utc().unix_timestamp()
}
