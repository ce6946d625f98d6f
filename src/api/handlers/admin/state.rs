//! Shared state for the admin handlers.

use anyhow::Result;
use std::sync::Arc;

use crate::{
    api::backend::BackendClient,
    session::{AdminConfig, EdgeVerifier, FullVerifier},
};

/// Everything a privileged handler needs, built once at startup.
#[derive(Debug)]
pub struct AdminState {
    config: AdminConfig,
    verifier: FullVerifier,
    edge: Arc<EdgeVerifier>,
    backend: BackendClient,
}

impl AdminState {
    /// # Errors
    /// Returns an error if the backend client cannot be built from the config.
    pub fn new(config: AdminConfig) -> Result<Self> {
        let verifier = FullVerifier::new(config.session_secret());
        let edge = Arc::new(EdgeVerifier::new(config.session_secret()));
        let backend = BackendClient::new(
            config.backend_base_url(),
            config.backend_admin_key().clone(),
        )?;
        Ok(Self {
            config,
            verifier,
            edge,
            backend,
        })
    }

    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.config
    }

    /// Verifier for privileged handlers.
    #[must_use]
    pub fn verifier(&self) -> &FullVerifier {
        &self.verifier
    }

    /// Verifier for the page gate.
    #[must_use]
    pub fn edge(&self) -> Arc<EdgeVerifier> {
        Arc::clone(&self.edge)
    }

    #[must_use]
    pub fn backend(&self) -> &BackendClient {
        &self.backend
    }
}
