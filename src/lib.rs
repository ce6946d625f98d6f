//! # Vitae (Admin Session Gateway)
//!
//! `vitae` is the admin-facing tier of the resume analysis dashboard. It owns a
//! single concern: proving that a browser belongs to the platform administrator
//! and forwarding privileged actions to the backend API on their behalf.
//!
//! ## Sessions
//!
//! A successful login mints a self-contained, HMAC-SHA256 signed token and stores
//! it in the `admin_session` cookie. There is no server-side session table: any
//! instance holding the signing secret can verify any token.
//!
//! - **Request Gate:** every `/admin/*` request is checked by a lightweight
//!   verifier that only relies on a SHA-256 digest. Unauthenticated navigation is
//!   redirected to `/admin/login`.
//! - **Privileged handlers:** `/api/admin/*` endpoints verify the cookie again with
//!   the full `hmac` implementation before doing anything.
//! - **Logout** only clears the cookie. A copied token stays valid until it
//!   expires; rotating the signing secret invalidates every outstanding token.
//!
//! ## Backend
//!
//! Privileged actions are proxied to the backend API with a separate admin API key
//! (`X-Admin-Key`). The session token never leaves this tier.

pub mod api;
pub mod cli;
pub mod session;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
