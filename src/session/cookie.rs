//! `admin_session` cookie transport.

use axum::http::{
    HeaderMap, HeaderValue,
    header::{COOKIE, InvalidHeaderValue},
};

use super::AdminConfig;

pub const SESSION_COOKIE_NAME: &str = "admin_session";

/// Build the `Set-Cookie` value carrying a freshly minted token.
///
/// # Errors
/// Returns an error if the token contains bytes not allowed in a header.
pub fn set_session_cookie(
    config: &AdminConfig,
    token: &str,
) -> Result<HeaderValue, InvalidHeaderValue> {
    let ttl_seconds = config.session_ttl_seconds();
    HeaderValue::from_str(&cookie_string(config, token, ttl_seconds))
}

/// Build the `Set-Cookie` value that expires the session immediately.
///
/// # Errors
/// Returns an error if the cookie attributes cannot form a header value.
pub fn clear_session_cookie(config: &AdminConfig) -> Result<HeaderValue, InvalidHeaderValue> {
    HeaderValue::from_str(&cookie_string(config, "", 0))
}

fn cookie_string(config: &AdminConfig, value: &str, max_age: i64) -> String {
    let mut cookie =
        format!("{SESSION_COOKIE_NAME}={value}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age}");
    if config.session_cookie_secure() {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Read the session token from the request `Cookie` headers.
///
/// Empty values count as absent.
#[must_use]
pub fn read_session_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|header| header.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| {
            let (key, val) = pair.trim().split_once('=')?;
            (key.trim() == SESSION_COOKIE_NAME).then(|| val.trim().to_string())
        })
        .find(|val| !val.is_empty())
}
