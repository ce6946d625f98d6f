//! Map validated CLI arguments to the action the binary runs.

use crate::cli::actions::{Action, server::Args};
use crate::cli::commands::{admin, backend};
use anyhow::Result;

/// Map validated CLI matches to a server action.
///
/// # Errors
/// Returns an error if required arguments are missing or inconsistent.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let port = matches.get_one::<u16>("port").copied().unwrap_or(8080);

    let admin_opts = admin::Options::parse(matches)?;
    let backend_opts = backend::Options::parse(matches)?;

    Ok(Action::Server(Args {
        port,
        admin_email: admin_opts.email,
        admin_password: admin_opts.password,
        session_secret: admin_opts.session_secret,
        session_ttl_seconds: admin_opts.session_ttl_seconds,
        environment: admin_opts.environment,
        backend_url: backend_opts.url,
        backend_admin_key: backend_opts.admin_key,
        pages_dir: admin_opts.pages_dir,
    }))
}
