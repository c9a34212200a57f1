//! # wd-infra
//!
//! Infrastructure adapters for walletdesk: implementations of the wd-core
//! ports that talk to the outside world.

pub mod account;

pub use account::HttpAccountService;
