//! Account service adapters.

pub mod http;

pub use http::HttpAccountService;
