use crate::{
    cli::{actions::Action, commands, dispatch, telemetry},
    session::Environment,
};
use anyhow::Result;

/// Map verbosity count to tracing level
const fn get_verbosity_level(verbosity: u8) -> Option<tracing::Level> {
    match verbosity {
        0 => None,
        1 => Some(tracing::Level::WARN),
        2 => Some(tracing::Level::INFO),
        3 => Some(tracing::Level::DEBUG),
        _ => Some(tracing::Level::TRACE),
    }
}

/// Main entry point for the CLI - builds and returns the Action
///
/// # Errors
///
/// Returns an error if argument parsing, telemetry initialization, or action dispatch fails
pub fn start() -> Result<Action> {
    let matches = commands::new().get_matches();

    let verbosity_level = get_verbosity_level(
        matches
            .get_one::<u8>(commands::logging::ARG_VERBOSITY)
            .copied()
            .unwrap_or(0),
    );

    // Production logs are shipped as JSON; development keeps the pretty format.
    let json = matches
        .get_one::<Environment>(commands::admin::ARG_ENVIRONMENT)
        .is_some_and(|environment| *environment == Environment::Production);

    telemetry::init(verbosity_level, json)?;

    dispatch::handler(&matches)
}
