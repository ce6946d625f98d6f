//! Request gate for the `/admin` page area.
//!
//! Runs before routing on every request. Paths outside the admin area and the
//! login page pass untouched; everything else needs a session that the edge
//! verifier accepts, or the browser is sent to the login page.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use std::sync::Arc;
use tracing::debug;

use super::{EdgeVerifier, TokenVerifier, cookie::read_session_cookie, unix_now};

pub const ADMIN_PREFIX: &str = "/admin";
pub const LOGIN_PATH: &str = "/admin/login";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    PassThrough,
    /// Redirect to the given location.
    Redirect(String),
}

/// `/admin` itself and anything below `/admin/`.
#[must_use]
pub fn is_admin_path(path: &str) -> bool {
    path == ADMIN_PREFIX
        || path
            .strip_prefix(ADMIN_PREFIX)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Decide what to do with a request. No I/O, no state.
#[must_use]
pub fn decide(
    path: &str,
    query: Option<&str>,
    cookie: Option<&str>,
    verifier: &dyn TokenVerifier,
    now: i64,
) -> GateDecision {
    if !is_admin_path(path) || path == LOGIN_PATH {
        return GateDecision::PassThrough;
    }
    if verifier.verify_at(cookie, now) {
        return GateDecision::PassThrough;
    }

    let location = match query.filter(|query| !query.is_empty()) {
        Some(query) => format!("{LOGIN_PATH}?{query}"),
        None => LOGIN_PATH.to_string(),
    };
    GateDecision::Redirect(location)
}

/// axum middleware wrapping [`decide`] with the edge verifier.
pub async fn admin_gate(
    State(verifier): State<Arc<EdgeVerifier>>,
    request: Request,
    next: Next,
) -> Response {
    let cookie = read_session_cookie(request.headers());
    let decision = decide(
        request.uri().path(),
        request.uri().query(),
        cookie.as_deref(),
        &*verifier,
        unix_now(),
    );

    match decision {
        GateDecision::PassThrough => next.run(request).await,
        GateDecision::Redirect(location) => {
            debug!(path = request.uri().path(), "admin gate redirecting to login");
            Redirect::temporary(&location).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{SessionClaims, TokenError, mint};

    const SECRET: &[u8] = b"gate-secret";
    const NOW: i64 = 1_700_000_000;

    fn valid_token() -> Result<String, TokenError> {
        mint(&SessionClaims::issue(NOW, 3600), SECRET)
    }

    #[test]
    fn admin_path_matching() {
        assert!(is_admin_path("/admin"));
        assert!(is_admin_path("/admin/"));
        assert!(is_admin_path("/admin/users"));
        assert!(is_admin_path("/admin/login"));
        assert!(!is_admin_path("/administrator"));
        assert!(!is_admin_path("/api/admin/session"));
        assert!(!is_admin_path("/"));
    }

    #[test]
    fn non_admin_paths_pass_without_cookie() {
        let verifier = EdgeVerifier::new(SECRET);
        for path in ["/", "/health", "/api/admin/users", "/administrator"] {
            assert_eq!(
                decide(path, None, None, &verifier, NOW),
                GateDecision::PassThrough,
                "{path}"
            );
        }
    }

    #[test]
    fn login_page_passes_without_cookie() {
        let verifier = EdgeVerifier::new(SECRET);
        assert_eq!(
            decide(LOGIN_PATH, None, None, &verifier, NOW),
            GateDecision::PassThrough
        );
    }

    #[test]
    fn admin_pages_redirect_without_session() {
        let verifier = EdgeVerifier::new(SECRET);
        assert_eq!(
            decide("/admin", None, None, &verifier, NOW),
            GateDecision::Redirect(LOGIN_PATH.to_string())
        );
        assert_eq!(
            decide("/admin/users", None, Some("garbage"), &verifier, NOW),
            GateDecision::Redirect(LOGIN_PATH.to_string())
        );
    }

    #[test]
    fn redirect_keeps_query_string() {
        let verifier = EdgeVerifier::new(SECRET);
        assert_eq!(
            decide("/admin/users", Some("page=2"), None, &verifier, NOW),
            GateDecision::Redirect("/admin/login?page=2".to_string())
        );
    }

    #[test]
    fn valid_session_passes_until_expiry() -> Result<(), TokenError> {
        let token = valid_token()?;
        let verifier = EdgeVerifier::new(SECRET);
        assert_eq!(
            decide("/admin/users", None, Some(&token), &verifier, NOW),
            GateDecision::PassThrough
        );
        assert_eq!(
            decide("/admin/users", None, Some(&token), &verifier, NOW + 3600),
            GateDecision::Redirect(LOGIN_PATH.to_string())
        );
        Ok(())
    }

    #[test]
    fn rotated_secret_redirects() -> Result<(), TokenError> {
        let token = valid_token()?;
        let verifier = EdgeVerifier::new(b"another-secret");
        assert_eq!(
            decide("/admin", None, Some(&token), &verifier, NOW),
            GateDecision::Redirect(LOGIN_PATH.to_string())
        );
        Ok(())
    }
}
