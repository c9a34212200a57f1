//! # wd-app
//!
//! Application orchestration layer for walletdesk.
//!
//! This crate contains the use cases that drive the pure domain state
//! machines through ports.

pub mod usecases;

pub use usecases::registration::{RegistrationContext, RegistrationFlow, RegistrationStateDto};
