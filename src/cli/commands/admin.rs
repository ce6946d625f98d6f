use anyhow::Result;
use clap::{Arg, ArgMatches, Command, builder::ValueParser};
use secrecy::SecretString;
use std::path::PathBuf;

use crate::session::Environment;

pub const ARG_ADMIN_EMAIL: &str = "admin-email";
pub const ARG_ADMIN_PASSWORD: &str = "admin-password";
pub const ARG_SESSION_SECRET: &str = "session-secret";
pub const ARG_SESSION_TTL_SECONDS: &str = "session-ttl-seconds";
pub const ARG_ENVIRONMENT: &str = "environment";
pub const ARG_PAGES_DIR: &str = "pages-dir";

// Keep in sync with `DEFAULT_SESSION_TTL_SECONDS`.
const DEFAULT_SESSION_TTL: &str = "43200";

#[derive(Debug)]
pub struct Options {
    pub email: SecretString,
    pub password: SecretString,
    pub session_secret: SecretString,
    pub session_ttl_seconds: i64,
    pub environment: Environment,
    pub pages_dir: Option<PathBuf>,
}

impl Options {
    /// Parse admin session arguments from matches.
    ///
    /// Unset secrets are kept empty; the session layer rejects everything until they are set.
    ///
    /// # Errors
    /// Returns an error if the session TTL is missing.
    pub fn parse(matches: &ArgMatches) -> Result<Self> {
        let secret = |id: &str| {
            SecretString::from(matches.get_one::<String>(id).cloned().unwrap_or_default())
        };

        let session_ttl_seconds = matches
            .get_one::<i64>(ARG_SESSION_TTL_SECONDS)
            .copied()
            .ok_or_else(|| anyhow::anyhow!("missing required argument: --{ARG_SESSION_TTL_SECONDS}"))?;

        Ok(Self {
            email: secret(ARG_ADMIN_EMAIL),
            password: secret(ARG_ADMIN_PASSWORD),
            session_secret: secret(ARG_SESSION_SECRET),
            session_ttl_seconds,
            environment: matches
                .get_one::<Environment>(ARG_ENVIRONMENT)
                .copied()
                .unwrap_or(Environment::Production),
            pages_dir: matches.get_one::<PathBuf>(ARG_PAGES_DIR).cloned(),
        })
    }
}

fn environment_parser() -> ValueParser {
    ValueParser::new(|value: &str| value.parse::<Environment>())
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_ADMIN_EMAIL)
                .long(ARG_ADMIN_EMAIL)
                .help("Platform administrator email")
                .env("VITAE_ADMIN_EMAIL")
                .hide_env_values(true),
        )
        .arg(
            Arg::new(ARG_ADMIN_PASSWORD)
                .long(ARG_ADMIN_PASSWORD)
                .help("Platform administrator password")
                .env("VITAE_ADMIN_PASSWORD")
                .hide_env_values(true),
        )
        .arg(
            Arg::new(ARG_SESSION_SECRET)
                .long(ARG_SESSION_SECRET)
                .help("Secret used to sign admin session tokens")
                .long_help(
                    "Secret used to sign admin session tokens. Rotating it invalidates every outstanding session.",
                )
                .env("VITAE_SESSION_SECRET")
                .hide_env_values(true),
        )
        .arg(
            Arg::new(ARG_SESSION_TTL_SECONDS)
                .long(ARG_SESSION_TTL_SECONDS)
                .help("Admin session lifetime in seconds")
                .env("VITAE_SESSION_TTL_SECONDS")
                .default_value(DEFAULT_SESSION_TTL)
                .value_parser(clap::value_parser!(i64).range(1..)),
        )
        .arg(
            Arg::new(ARG_ENVIRONMENT)
                .long(ARG_ENVIRONMENT)
                .help("Deployment environment: production or development")
                .long_help(
                    "Deployment environment: production or development. Session cookies are marked Secure in production.",
                )
                .env("VITAE_ENVIRONMENT")
                .default_value("production")
                .value_parser(environment_parser()),
        )
        .arg(
            Arg::new(ARG_PAGES_DIR)
                .long(ARG_PAGES_DIR)
                .help("Directory with the built admin pages served under /admin")
                .env("VITAE_PAGES_DIR")
                .value_parser(clap::value_parser!(PathBuf)),
        )
}
