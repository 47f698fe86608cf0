//! Admin authentication.
//!
//! Callers depend on the `AuthProvider` trait only, so the static
//! credential check can be swapped for a real identity provider.

use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::commands::auth::AdminCredentials;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("email and password are required")]
    MissingCredentials,
    #[error("identity provider unavailable: {0}")]
    Unavailable(String),
}

/// Capability to verify admin credentials
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Returns `Ok(true)` when the credentials identify an administrator
    async fn verify_credentials(&self, credentials: &AdminCredentials) -> Result<bool, AuthError>;
}

/// Single administrator account taken from configuration.
///
/// Emails are compared trimmed and case-insensitively; passwords exactly.
#[derive(Debug, Clone)]
pub struct StaticCredentialsProvider {
    email: String,
    password: String,
}

impl StaticCredentialsProvider {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into().trim().to_lowercase(),
            password: password.into(),
        }
    }
}

#[async_trait]
impl AuthProvider for StaticCredentialsProvider {
    async fn verify_credentials(&self, credentials: &AdminCredentials) -> Result<bool, AuthError> {
        let email = credentials.email.trim().to_lowercase();
        if email.is_empty() || credentials.password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        let accepted = email == self.email && credentials.password == self.password;
        if accepted {
            info!("Admin login accepted for {}", email);
        } else {
            warn!("Admin login rejected for {}", email);
        }
        Ok(accepted)
    }
}
