//! # wd-core
//!
//! Core domain models and business logic for walletdesk.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod config;
pub mod notification;
pub mod ports;
pub mod registration;
pub mod security;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use notification::{Notification, NotificationSeverity};
pub use registration::{
    DraftField, RegistrationDraft, RegistrationError, RegistrationState, RegistrationStateMachine,
};
pub use security::Secret;
