//! User management proxied to the backend admin API.

use axum::{
    Json,
    body::Bytes,
    extract::{Extension, Path},
    http::HeaderMap,
};
use reqwest::Method;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::info;

use super::{session::require_session, state::AdminState, types::UserToggleRequest};
use crate::api::error::{ApiError, ErrorResponse};

#[utoipa::path(
    get,
    path = "/api/admin/users",
    responses(
        (status = 200, description = "Users as reported by the backend", body = Object),
        (status = 401, description = "No valid admin session", body = ErrorResponse),
        (status = 502, description = "Backend unavailable", body = ErrorResponse)
    ),
    tag = "admin"
)]
pub async fn list_users(
    headers: HeaderMap,
    Extension(state): Extension<Arc<AdminState>>,
) -> Result<Json<Value>, ApiError> {
    require_session(&headers, &state)?;
    let data = state
        .backend()
        .send(Method::GET, &["admin", "users"], None)
        .await?;
    Ok(Json(data))
}

#[utoipa::path(
    delete,
    path = "/api/admin/users/{user_id}",
    params(("user_id" = String, Path, description = "Backend user identifier")),
    responses(
        (status = 200, description = "User deleted", body = Object),
        (status = 401, description = "No valid admin session", body = ErrorResponse),
        (status = 404, description = "Backend did not find the user", body = ErrorResponse)
    ),
    tag = "admin"
)]
pub async fn delete_user(
    Path(user_id): Path<String>,
    headers: HeaderMap,
    Extension(state): Extension<Arc<AdminState>>,
) -> Result<Json<Value>, ApiError> {
    require_session(&headers, &state)?;
    let data = state
        .backend()
        .send(Method::DELETE, &["admin", "users", &user_id], None)
        .await?;
    info!(user_id = %user_id, "Admin deleted user");
    Ok(Json(data))
}

#[utoipa::path(
    patch,
    path = "/api/admin/users/{user_id}/toggle",
    params(("user_id" = String, Path, description = "Backend user identifier")),
    request_body = UserToggleRequest,
    responses(
        (status = 200, description = "Updated user as returned by the backend", body = Object),
        (status = 401, description = "No valid admin session", body = ErrorResponse),
        (status = 404, description = "Backend did not find the user", body = ErrorResponse)
    ),
    tag = "admin"
)]
pub async fn toggle_user(
    Path(user_id): Path<String>,
    headers: HeaderMap,
    Extension(state): Extension<Arc<AdminState>>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    require_session(&headers, &state)?;
    let payload: Value = serde_json::from_slice(&body).unwrap_or_else(|_| json!({}));
    let data = state
        .backend()
        .send(Method::PATCH, &["admin", "users", &user_id], Some(&payload))
        .await?;
    info!(user_id = %user_id, "Admin updated user");
    Ok(Json(data))
}
