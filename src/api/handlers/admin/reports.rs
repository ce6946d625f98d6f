//! Read-only dashboard data proxied to the backend admin API.

use axum::{Json, extract::Extension, http::HeaderMap};
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;

use super::{session::require_session, state::AdminState};
use crate::api::error::{ApiError, ErrorResponse};

#[utoipa::path(
    get,
    path = "/api/admin/stats",
    responses(
        (status = 200, description = "Platform statistics", body = Object),
        (status = 401, description = "No valid admin session", body = ErrorResponse),
        (status = 502, description = "Backend unavailable", body = ErrorResponse)
    ),
    tag = "admin"
)]
pub async fn stats(
    headers: HeaderMap,
    Extension(state): Extension<Arc<AdminState>>,
) -> Result<Json<Value>, ApiError> {
    require_session(&headers, &state)?;
    Ok(Json(
        state
            .backend()
            .send(Method::GET, &["admin", "stats"], None)
            .await?,
    ))
}

#[utoipa::path(
    get,
    path = "/api/admin/resumes",
    responses(
        (status = 200, description = "Recent resume analyses", body = Object),
        (status = 401, description = "No valid admin session", body = ErrorResponse),
        (status = 502, description = "Backend unavailable", body = ErrorResponse)
    ),
    tag = "admin"
)]
pub async fn resumes(
    headers: HeaderMap,
    Extension(state): Extension<Arc<AdminState>>,
) -> Result<Json<Value>, ApiError> {
    require_session(&headers, &state)?;
    Ok(Json(
        state
            .backend()
            .send(Method::GET, &["admin", "resumes"], None)
            .await?,
    ))
}
