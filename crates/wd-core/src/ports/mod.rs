//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations, following Hexagonal Architecture:
//! the flow logic stays independent of transport, toast rendering, and
//! frontend event plumbing.

pub mod account;
pub mod notification;
pub mod registration_events;

pub use account::{AccountPort, AccountServiceError};
pub use notification::NotificationPort;
pub use registration_events::RegistrationEventPort;
