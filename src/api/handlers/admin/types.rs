use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Login body. Missing or mistyped fields are treated as empty strings.
#[derive(Deserialize, Default, ToSchema)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AckResponse {
    pub ok: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SessionResponse {
    pub authenticated: bool,
}

/// Documented shape of the toggle body; the handler forwards whatever JSON arrives.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserToggleRequest {
    pub is_active: bool,
}
