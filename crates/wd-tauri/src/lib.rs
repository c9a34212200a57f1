//! # wd-tauri
//!
//! Tauri integration layer for walletdesk.
//!
//! This crate provides:
//! - Tauri command handlers
//! - Event forwarding to the frontend (state changes, toast notifications)
//! - Bootstrap wiring (config, tracing, runtime)

pub mod adapters;
pub mod bootstrap;
pub mod commands;

// Re-export commonly used types
pub use bootstrap::AppRuntime;
