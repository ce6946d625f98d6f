//! Error taxonomy for the admin API.
//!
//! Authentication and session failures are deliberately vague; upstream
//! failures carry the backend's status and message through unchanged.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Wrong admin credentials at login. Never says which field was wrong.
    #[error("Invalid credentials")]
    AuthenticationFailed,
    /// Missing, tampered, or expired session cookie.
    #[error("Unauthorized")]
    SessionInvalid,
    /// The backend rejected or failed a proxied call.
    #[error("{message}")]
    Upstream { status: StatusCode, message: String },
    #[error("Internal server error")]
    Internal,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::AuthenticationFailed | Self::SessionInvalid => StatusCode::UNAUTHORIZED,
            Self::Upstream { status, .. } => *status,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            message: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_failures_map_to_unauthorized() {
        assert_eq!(
            ApiError::AuthenticationFailed.status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ApiError::SessionInvalid.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::AuthenticationFailed.to_string(), "Invalid credentials");
        assert_eq!(ApiError::SessionInvalid.to_string(), "Unauthorized");
    }

    #[test]
    fn upstream_keeps_backend_status_and_message() {
        let err = ApiError::Upstream {
            status: StatusCode::NOT_FOUND,
            message: "User not found".to_string(),
        };
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "User not found");
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn internal_maps_to_500() {
        assert_eq!(
            ApiError::Internal.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
