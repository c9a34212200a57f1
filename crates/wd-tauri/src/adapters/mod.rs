//! Tauri-specific adapters for wd-core ports.
//!
//! These adapters must only be constructed once an `AppHandle` exists,
//! i.e. inside the Tauri setup phase.

pub mod notifications;
pub mod registration_events;

pub use notifications::TauriNotificationPort;
pub use registration_events::TauriRegistrationEventPort;
