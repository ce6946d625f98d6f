//! `/api/admin/*` handlers.
//!
//! Login and logout manage the `admin_session` cookie. Everything else checks
//! the cookie with the full verifier and then forwards to the backend admin API.

pub mod login;
pub mod reports;
pub mod session;
pub mod state;
pub mod types;
pub mod users;

pub use state::AdminState;
