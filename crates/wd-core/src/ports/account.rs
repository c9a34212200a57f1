//! Account service port
//!
//! The account-management collaborator that owns account and wallet
//! creation. Transport, encoding, and retry policy are implementation
//! details of the adapter; the flow only sees settlement and, on failure,
//! an optional diagnostic message.

use async_trait::async_trait;
use thiserror::Error;

/// Failure reported by the account service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountServiceError {
    /// The service failed with a diagnostic message.
    #[error("{0}")]
    Service(String),

    /// The service failed without a usable diagnostic.
    #[error("account creation failed")]
    Unspecified,
}

impl AccountServiceError {
    /// Diagnostic message, if the failure carried one.
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            Self::Service(message) => Some(message),
            Self::Unspecified => None,
        }
    }
}

#[async_trait]
pub trait AccountPort: Send + Sync {
    /// Create an account (and its wallet) for the given credentials.
    async fn create_account(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<(), AccountServiceError>;
}
