//! Registration domain models
//!
//! This module defines the core domain models for the account registration
//! flow: the in-progress draft, the flow state machine, and the error
//! taxonomy surfaced to the user.

pub mod error;
pub mod state_machine;

pub use error::RegistrationError;
pub use state_machine::{
    RegistrationAction, RegistrationEvent, RegistrationState, RegistrationStateMachine,
};

use serde::{Deserialize, Serialize};

use crate::security::Secret;

/// A single field of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DraftField {
    Email,
    FullName,
    Password,
}

/// In-progress registration input.
///
/// Mutated field-by-field as the user types; never persisted; discarded on
/// close or successful submission. Owned exclusively by one flow instance.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegistrationDraft {
    pub email: String,
    pub full_name: String,
    pub password: Secret,
}

impl RegistrationDraft {
    /// Create a draft with the email pre-populated and the rest empty.
    pub fn with_email(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Self::default()
        }
    }

    /// Overwrite a single field.
    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Email => self.email = value,
            DraftField::FullName => self.full_name = value,
            DraftField::Password => self.password = Secret::new(value),
        }
    }

    /// Submit-boundary validation: all fields non-empty, password at least
    /// [`MIN_PASSWORD_LEN`] characters.
    pub fn validate(&self) -> Result<(), RegistrationError> {
        if self.email.is_empty() {
            return Err(RegistrationError::EmailEmpty);
        }
        if self.full_name.is_empty() {
            return Err(RegistrationError::FullNameEmpty);
        }
        if self.password.expose().chars().count() < MIN_PASSWORD_LEN {
            return Err(RegistrationError::PasswordTooShort {
                min_len: MIN_PASSWORD_LEN,
            });
        }
        Ok(())
    }

    pub fn is_submittable(&self) -> bool {
        self.validate().is_ok()
    }
}


/// Minimum password length accepted by the submit boundary.
pub const MIN_PASSWORD_LEN: usize = 8;
