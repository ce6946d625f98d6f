use crate::{
    api::{self, handlers::admin::AdminState},
    session::{AdminConfig, Environment},
};
use anyhow::Result;
use secrecy::{ExposeSecret, SecretString};
use std::path::PathBuf;
use tracing::{debug, warn};

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub admin_email: SecretString,
    pub admin_password: SecretString,
    pub session_secret: SecretString,
    pub session_ttl_seconds: i64,
    pub environment: Environment,
    pub backend_url: String,
    pub backend_admin_key: SecretString,
    pub pages_dir: Option<PathBuf>,
}

impl Args {
    fn into_config(self) -> AdminConfig {
        AdminConfig::new(self.backend_url)
            .with_admin_email(self.admin_email.expose_secret().to_string())
            .with_admin_password(self.admin_password.expose_secret().to_string())
            .with_session_secret(self.session_secret.expose_secret().to_string())
            .with_session_ttl_seconds(self.session_ttl_seconds)
            .with_environment(self.environment)
            .with_backend_admin_key(self.backend_admin_key.expose_secret().to_string())
            .with_pages_dir(self.pages_dir)
    }
}

/// Warn about settings that leave parts of the admin tier permanently locked.
fn warn_on_unset(config: &AdminConfig) {
    if config.session_secret().is_empty() {
        warn!("Session secret is not set: every admin session will be rejected");
    }
    if config.admin_email().expose_secret().is_empty()
        || config.admin_password().expose_secret().is_empty()
    {
        warn!("Admin credentials are not set: every login attempt will be rejected");
    }
    if config.backend_admin_key().expose_secret().is_empty() {
        warn!("Backend admin key is not set: the backend will reject proxied calls");
    }
}

/// Execute the server action.
/// # Errors
/// Returns an error if the backend client cannot be built or the server fails to start.
pub async fn execute(args: Args) -> Result<()> {
    let port = args.port;
    let config = args.into_config();

    warn_on_unset(&config);
    debug!("Admin config: {:?}", config);

    let state = AdminState::new(config)?;

    api::new(port, state).await
}
