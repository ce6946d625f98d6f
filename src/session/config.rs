//! Process-wide admin configuration.
//!
//! Built once at startup and shared behind an `Arc`; nothing reads secrets from
//! the environment after that.

use secrecy::{ExposeSecret, SecretString};
use std::{fmt, path::PathBuf, str::FromStr};

pub const DEFAULT_SESSION_TTL_SECONDS: i64 = 12 * 60 * 60;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Production,
    Development,
}

impl Environment {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Development => "development",
        }
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "production" | "prod" => Ok(Self::Production),
            "development" | "dev" => Ok(Self::Development),
            other => Err(format!("unknown environment: {other}")),
        }
    }
}

#[derive(Clone)]
pub struct AdminConfig {
    admin_email: SecretString,
    admin_password: SecretString,
    session_secret: SecretString,
    session_ttl_seconds: i64,
    environment: Environment,
    backend_base_url: String,
    backend_admin_key: SecretString,
    pages_dir: Option<PathBuf>,
}

impl AdminConfig {
    #[must_use]
    pub fn new(backend_base_url: String) -> Self {
        Self {
            admin_email: SecretString::default(),
            admin_password: SecretString::default(),
            session_secret: SecretString::default(),
            session_ttl_seconds: DEFAULT_SESSION_TTL_SECONDS,
            environment: Environment::Production,
            backend_base_url,
            backend_admin_key: SecretString::default(),
            pages_dir: None,
        }
    }

    #[must_use]
    pub fn with_admin_email(mut self, email: String) -> Self {
        self.admin_email = SecretString::from(email);
        self
    }

    #[must_use]
    pub fn with_admin_password(mut self, password: String) -> Self {
        self.admin_password = SecretString::from(password);
        self
    }

    #[must_use]
    pub fn with_session_secret(mut self, secret: String) -> Self {
        self.session_secret = SecretString::from(secret);
        self
    }

    #[must_use]
    pub fn with_session_ttl_seconds(mut self, seconds: i64) -> Self {
        self.session_ttl_seconds = seconds;
        self
    }

    #[must_use]
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    #[must_use]
    pub fn with_backend_admin_key(mut self, key: String) -> Self {
        self.backend_admin_key = SecretString::from(key);
        self
    }

    #[must_use]
    pub fn with_pages_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.pages_dir = dir;
        self
    }

    #[must_use]
    pub fn admin_email(&self) -> &SecretString {
        &self.admin_email
    }

    #[must_use]
    pub fn admin_password(&self) -> &SecretString {
        &self.admin_password
    }

    #[must_use]
    pub fn session_secret(&self) -> &[u8] {
        self.session_secret.expose_secret().as_bytes()
    }

    #[must_use]
    pub fn session_ttl_seconds(&self) -> i64 {
        self.session_ttl_seconds
    }

    #[must_use]
    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Cookies are only marked `Secure` in production, where the tier is behind HTTPS.
    #[must_use]
    pub fn session_cookie_secure(&self) -> bool {
        self.environment == Environment::Production
    }

    #[must_use]
    pub fn backend_base_url(&self) -> &str {
        &self.backend_base_url
    }

    #[must_use]
    pub fn backend_admin_key(&self) -> &SecretString {
        &self.backend_admin_key
    }

    #[must_use]
    pub fn pages_dir(&self) -> Option<&PathBuf> {
        self.pages_dir.as_ref()
    }
}

impl fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminConfig")
            .field("admin_email", &"***")
            .field("admin_password", &"***")
            .field("session_secret", &"***")
            .field("session_ttl_seconds", &self.session_ttl_seconds)
            .field("environment", &self.environment)
            .field("backend_base_url", &self.backend_base_url)
            .field("backend_admin_key", &"***")
            .field("pages_dir", &self.pages_dir)
            .finish()
    }
}
