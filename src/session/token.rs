//! Session token codec.
//!
//! Flow Overview:
//! 1) Serialize claims as JSON and encode them as unpadded base64url.
//! 2) MAC the encoded payload part with HMAC-SHA256.
//! 3) Join both parts with a single `.`.
//!
//! `parse` only checks structure and claims; signature and expiry checks belong
//! to the verifiers.

use base64ct::{Base64UrlUnpadded, Encoding};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use thiserror::Error;

pub(super) type HmacSha256 = Hmac<Sha256>;

/// The only subject this service ever issues.
pub const ADMIN_SUBJECT: &str = "admin";
/// Upper bound for a cookie value we are willing to decode.
pub const MAX_TOKEN_LEN: usize = 512;
pub(super) const SIGNATURE_LEN: usize = 32;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("invalid token format")]
    Format,
    #[error("token exceeds maximum length")]
    TooLong,
    #[error("invalid base64url encoding")]
    Base64,
    #[error("invalid signature length")]
    SignatureLength,
    #[error("invalid claims json")]
    Json(#[from] serde_json::Error),
    #[error("invalid subject")]
    Subject,
    #[error("invalid token lifetime")]
    Lifetime,
    #[error("signing secret is not configured")]
    EmptySecret,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionClaims {
    pub sub: String,
    /// Issued at, unix seconds.
    pub iat: i64,
    /// Expires at, unix seconds. The token is valid while `now < exp`.
    pub exp: i64,
}

impl SessionClaims {
    /// Claims for an admin session starting at `now` and lasting `ttl_seconds`.
    #[must_use]
    pub fn issue(now: i64, ttl_seconds: i64) -> Self {
        Self {
            sub: ADMIN_SUBJECT.to_string(),
            iat: now,
            exp: now.saturating_add(ttl_seconds),
        }
    }

    #[must_use]
    pub fn is_expired_at(&self, now: i64) -> bool {
        now >= self.exp
    }

    fn validate(&self) -> Result<(), TokenError> {
        if self.sub != ADMIN_SUBJECT {
            return Err(TokenError::Subject);
        }
        if self.exp <= self.iat {
            return Err(TokenError::Lifetime);
        }
        Ok(())
    }
}

/// A structurally valid token whose signature has not been checked yet.
#[derive(Debug)]
pub struct ParsedToken<'a> {
    payload: &'a str,
    signature: Vec<u8>,
    claims: SessionClaims,
}

impl ParsedToken<'_> {
    /// The encoded payload part, exactly as covered by the MAC.
    #[must_use]
    pub fn payload(&self) -> &str {
        self.payload
    }

    #[must_use]
    pub fn signature(&self) -> &[u8] {
        &self.signature
    }

    #[must_use]
    pub fn claims(&self) -> &SessionClaims {
        &self.claims
    }
}

/// Encode and sign claims.
///
/// # Errors
/// Returns an error if the secret is empty, the claims are not an admin session
/// with a positive lifetime, or the claims cannot be serialized.
pub fn mint(claims: &SessionClaims, secret: &[u8]) -> Result<String, TokenError> {
    if secret.is_empty() {
        return Err(TokenError::EmptySecret);
    }
    claims.validate()?;

    let json = serde_json::to_vec(claims)?;
    let payload = Base64UrlUnpadded::encode_string(&json);
    let mut mac = HmacSha256::new_from_slice(secret).map_err(|_| TokenError::EmptySecret)?;
    mac.update(payload.as_bytes());
    let signature = Base64UrlUnpadded::encode_string(&mac.finalize().into_bytes());

    Ok(format!("{payload}.{signature}"))
}

/// Split and decode a token without checking its signature.
///
/// # Errors
/// Returns an error for anything that is not `payload.signature` with a valid
/// base64url payload holding admin claims and a 32-byte signature.
pub fn parse(token: &str) -> Result<ParsedToken<'_>, TokenError> {
    if token.len() > MAX_TOKEN_LEN {
        return Err(TokenError::TooLong);
    }
    let (payload, signature) = token.split_once('.').ok_or(TokenError::Format)?;
    if payload.is_empty() || signature.is_empty() || signature.contains('.') {
        return Err(TokenError::Format);
    }

    let signature = Base64UrlUnpadded::decode_vec(signature).map_err(|_| TokenError::Base64)?;
    if signature.len() != SIGNATURE_LEN {
        return Err(TokenError::SignatureLength);
    }

    let json = Base64UrlUnpadded::decode_vec(payload).map_err(|_| TokenError::Base64)?;
    let claims: SessionClaims = serde_json::from_slice(&json)?;
    claims.validate()?;

    Ok(ParsedToken {
        payload,
        signature,
        claims,
    })
}
