//! API handlers for the admin tier.

pub mod admin;
pub mod health;
pub mod root;
