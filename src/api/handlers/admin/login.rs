//! Admin login: credential check, token minting, cookie issuance.

use axum::{
    Json,
    body::Bytes,
    extract::Extension,
    http::header::SET_COOKIE,
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::{error, info, warn};

use super::{
    state::AdminState,
    types::{AckResponse, LoginRequest},
};
use crate::{
    api::error::{ApiError, ErrorResponse},
    session::{SessionClaims, cookie::set_session_cookie, credentials_match, mint, unix_now},
};

#[utoipa::path(
    post,
    path = "/api/admin/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials accepted, session cookie set", body = AckResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 500, description = "Session could not be issued", body = ErrorResponse)
    ),
    tag = "admin"
)]
pub async fn login(
    Extension(state): Extension<Arc<AdminState>>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    // Unparseable bodies are compared as empty credentials and fail like any mismatch.
    let request: LoginRequest = serde_json::from_slice(&body).unwrap_or_default();

    if !credentials_match(state.config(), &request.email, &request.password) {
        warn!("Admin login rejected");
        return Err(ApiError::AuthenticationFailed);
    }

    let config = state.config();
    let claims = SessionClaims::issue(unix_now(), config.session_ttl_seconds());
    let token = mint(&claims, config.session_secret()).map_err(|err| {
        error!("Failed to mint admin session token: {err}");
        ApiError::Internal
    })?;
    let cookie = set_session_cookie(config, &token).map_err(|err| {
        error!("Failed to build admin session cookie: {err}");
        ApiError::Internal
    })?;

    info!(exp = claims.exp, "Admin session issued");
    Ok(([(SET_COOKIE, cookie)], Json(AckResponse { ok: true })))
}
