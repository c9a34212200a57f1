//! Registration error taxonomy.
//!
//! Validation variants are raised by the submit guard; the remaining
//! variants classify failures reported by the account service. The
//! `Display` string of each variant is the message shown to the user.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum RegistrationError {
    #[error("Email is required")]
    EmailEmpty,

    #[error("Full name is required")]
    FullNameEmpty,

    #[error("Password must be at least {min_len} characters")]
    PasswordTooShort { min_len: usize },

    /// The service rejected the email as already registered.
    #[error("Email already exists")]
    EmailTaken,

    /// The service rejected the submitted fields.
    #[error("Invalid registration data")]
    InvalidData,

    /// Unrecognized service failure; the diagnostic is shown verbatim.
    #[error("{message}")]
    Service { message: String },

    /// Service failure without any diagnostic message.
    #[error("Registration failed")]
    Failed,
}

impl RegistrationError {
    /// Classify a failure signal reported by the account service.
    ///
    /// Total over the input: exactly one branch applies. A message
    /// containing "409" wins over one containing "400"; any other
    /// non-empty message is kept verbatim; a missing (or empty) message
    /// falls back to [`RegistrationError::Failed`].
    pub fn classify(message: Option<&str>) -> Self {
        match message {
            Some(m) if m.contains("409") => Self::EmailTaken,
            Some(m) if m.contains("400") => Self::InvalidData,
            Some(m) if !m.is_empty() => Self::Service {
                message: m.to_string(),
            },
            _ => Self::Failed,
        }
    }
}
