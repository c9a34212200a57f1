pub mod config;
pub mod runtime;
pub mod tracing;

pub use self::config::{load_config, resolve_config};
pub use self::runtime::AppRuntime;
pub use self::tracing::init_tracing_subscriber;
