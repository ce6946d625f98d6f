use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};
use secrecy::SecretString;
use url::Url;

pub const ARG_BACKEND_URL: &str = "backend-url";
pub const ARG_BACKEND_ADMIN_KEY: &str = "backend-admin-key";

#[derive(Debug)]
pub struct Options {
    pub url: String,
    pub admin_key: SecretString,
}

impl Options {
    /// Parse backend arguments from matches.
    ///
    /// # Errors
    /// Returns an error if the backend URL is missing or not an absolute http(s) URL.
    pub fn parse(matches: &ArgMatches) -> Result<Self> {
        let url = matches
            .get_one::<String>(ARG_BACKEND_URL)
            .cloned()
            .filter(|value| !value.trim().is_empty())
            .with_context(|| format!("missing required argument: --{ARG_BACKEND_URL}"))?;

        let parsed = Url::parse(&url).with_context(|| format!("invalid --{ARG_BACKEND_URL}: {url}"))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            anyhow::bail!("invalid --{ARG_BACKEND_URL}: {url} (expected http or https)");
        }

        Ok(Self {
            url,
            admin_key: SecretString::from(
                matches
                    .get_one::<String>(ARG_BACKEND_ADMIN_KEY)
                    .cloned()
                    .unwrap_or_default(),
            ),
        })
    }
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_BACKEND_URL)
                .long(ARG_BACKEND_URL)
                .help("Backend API base URL, example: http://localhost:8000/api/v1")
                .env("VITAE_BACKEND_URL")
                .default_value("http://localhost:8000/api/v1"),
        )
        .arg(
            Arg::new(ARG_BACKEND_ADMIN_KEY)
                .long(ARG_BACKEND_ADMIN_KEY)
                .help("Admin API key sent to the backend as X-Admin-Key")
                .env("VITAE_BACKEND_ADMIN_KEY")
                .hide_env_values(true),
        )
}
