//! Use cases
//!
//! Each use case drives a domain state machine and executes its side
//! effects through ports injected as `Arc<dyn Port>`.

pub mod registration;

pub use registration::{RegistrationFlow, RegistrationStateDto};
