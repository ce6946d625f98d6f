//! Client for the backend admin API.
//!
//! Every call authenticates with the server-held admin API key in
//! `X-Admin-Key`. The browser's session token is never forwarded.

use anyhow::{Context, Result};
use axum::http::StatusCode;
use reqwest::{Client, Method};
use secrecy::{ExposeSecret, SecretString};
use serde_json::{Value, json};
use std::{fmt, time::Duration};
use tracing::{debug, error, instrument};
use url::Url;

use super::error::ApiError;
use crate::APP_USER_AGENT;

pub const ADMIN_KEY_HEADER: &str = "X-Admin-Key";
const REQUEST_TIMEOUT_SECONDS: u64 = 15;
const DEFAULT_FAILURE_MESSAGE: &str = "Request failed";

pub struct BackendClient {
    client: Client,
    base_url: Url,
    admin_key: SecretString,
}

impl BackendClient {
    /// # Errors
    /// Returns an error if the base URL is invalid or the HTTP client cannot be built.
    pub fn new(base_url: &str, admin_key: SecretString) -> Result<Self> {
        let base_url =
            Url::parse(base_url).with_context(|| format!("Invalid backend base URL: {base_url}"))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("Backend base URL cannot be used as a base: {base_url}");
        }
        let client = Client::builder()
            .user_agent(APP_USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECONDS))
            .build()
            .context("Failed to build backend HTTP client")?;
        Ok(Self {
            client,
            base_url,
            admin_key,
        })
    }

    /// Resolve `segments` below the base URL, percent-encoding each one.
    fn url(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::Internal)?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send a request to the backend and return its JSON body.
    ///
    /// # Errors
    /// Returns `ApiError::Upstream` with the backend status for non-2xx replies,
    /// or `502` when the backend cannot be reached.
    #[instrument(skip(self, body), fields(backend.method = %method))]
    pub async fn send(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        let url = self.url(segments)?;
        let mut request = self
            .client
            .request(method, url)
            .header(ADMIN_KEY_HEADER, self.admin_key.expose_secret());
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|err| {
            error!("Backend request failed: {err}");
            ApiError::Upstream {
                status: StatusCode::BAD_GATEWAY,
                message: "Backend unavailable".to_string(),
            }
        })?;

        let status = response.status();
        let data: Option<Value> = match response.bytes().await {
            Ok(bytes) => serde_json::from_slice(&bytes).ok(),
            Err(err) => {
                debug!("Failed to read backend response body: {err}");
                None
            }
        };

        if !status.is_success() {
            debug!("Backend replied with {status}");
            return Err(ApiError::Upstream {
                status: StatusCode::from_u16(status.as_u16()).unwrap_or(StatusCode::BAD_GATEWAY),
                message: failure_message(data.as_ref()),
            });
        }

        Ok(data.unwrap_or_else(|| json!({ "ok": true })))
    }
}

impl fmt::Debug for BackendClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendClient")
            .field("base_url", &self.base_url.as_str())
            .field("admin_key", &"***")
            .finish()
    }
}

/// Prefer the backend's `detail`, then `message`, when they are plain strings.
fn failure_message(data: Option<&Value>) -> String {
    data.and_then(|data| {
        ["detail", "message"]
            .iter()
            .find_map(|key| data.get(*key).and_then(Value::as_str))
    })
    .unwrap_or(DEFAULT_FAILURE_MESSAGE)
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> Result<BackendClient> {
        BackendClient::new(base, SecretString::from("key".to_string()))
    }

    #[test]
    fn url_appends_encoded_segments() -> Result<()> {
        let backend = client("http://localhost:8000/api/v1")?;
        let url = backend
            .url(&["admin", "users", "42"])
            .map_err(|err| anyhow::anyhow!("{err}"))?;
        assert_eq!(url.as_str(), "http://localhost:8000/api/v1/admin/users/42");

        let url = backend
            .url(&["admin", "users", "../stats"])
            .map_err(|err| anyhow::anyhow!("{err}"))?;
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/api/v1/admin/users/..%2Fstats"
        );
        Ok(())
    }

    #[test]
    fn url_tolerates_trailing_slash() -> Result<()> {
        let backend = client("http://localhost:8000/api/v1/")?;
        let url = backend
            .url(&["admin", "stats"])
            .map_err(|err| anyhow::anyhow!("{err}"))?;
        assert_eq!(url.as_str(), "http://localhost:8000/api/v1/admin/stats");
        Ok(())
    }

    #[test]
    fn new_rejects_invalid_urls() {
        assert!(client("not a url").is_err());
        assert!(client("mailto:admin@vitae.dev").is_err());
    }

    #[test]
    fn failure_message_prefers_detail() {
        assert_eq!(
            failure_message(Some(&json!({"detail": "User not found", "message": "x"}))),
            "User not found"
        );
        assert_eq!(failure_message(Some(&json!({"message": "Nope"}))), "Nope");
        assert_eq!(
            failure_message(Some(&json!({"detail": [{"loc": ["body"]}]}))),
            "Request failed"
        );
        assert_eq!(failure_message(None), "Request failed");
    }

    #[test]
    fn debug_output_hides_admin_key() -> Result<()> {
        let backend = BackendClient::new(
            "http://localhost:8000",
            SecretString::from("very-secret-key".to_string()),
        )?;
        let rendered = format!("{backend:?}");
        assert!(!rendered.contains("very-secret-key"));
        Ok(())
    }
}
