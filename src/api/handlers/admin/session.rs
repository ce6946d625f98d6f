//! Session status, logout, and the guard used by privileged handlers.

use axum::{
    Json,
    extract::Extension,
    http::{HeaderMap, header::SET_COOKIE},
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::error;

use super::{
    state::AdminState,
    types::{AckResponse, SessionResponse},
};
use crate::{
    api::error::ApiError,
    session::{
        TokenVerifier,
        cookie::{clear_session_cookie, read_session_cookie},
    },
};

/// Reject the request unless it carries a session the full verifier accepts.
///
/// # Errors
/// Returns `ApiError::SessionInvalid` for missing, forged, or expired sessions.
pub fn require_session(headers: &HeaderMap, state: &AdminState) -> Result<(), ApiError> {
    let token = read_session_cookie(headers);
    if state.verifier().verify(token.as_deref()) {
        Ok(())
    } else {
        Err(ApiError::SessionInvalid)
    }
}

#[utoipa::path(
    get,
    path = "/api/admin/session",
    responses(
        (status = 200, description = "Whether the caller holds a valid admin session", body = SessionResponse)
    ),
    tag = "admin"
)]
pub async fn session(
    headers: HeaderMap,
    Extension(state): Extension<Arc<AdminState>>,
) -> Json<SessionResponse> {
    Json(SessionResponse {
        authenticated: require_session(&headers, &state).is_ok(),
    })
}

#[utoipa::path(
    post,
    path = "/api/admin/logout",
    responses(
        (status = 200, description = "Session cookie cleared", body = AckResponse)
    ),
    tag = "admin"
)]
pub async fn logout(
    Extension(state): Extension<Arc<AdminState>>,
) -> Result<impl IntoResponse, ApiError> {
    // No server-side state: clearing the cookie is all logout can do.
    let cookie = clear_session_cookie(state.config()).map_err(|err| {
        error!("Failed to build logout cookie: {err}");
        ApiError::Internal
    })?;
    Ok(([(SET_COOKIE, cookie)], Json(AckResponse { ok: true })))
}
