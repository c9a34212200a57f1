//! Tracing configuration for walletdesk
//!
//! Structured logging with spans: command handlers open root spans
//! (`command.registration.*`), the use-case layer opens child spans.
//!
//! - **Development**: debug level, stdout
//! - **Production**: info level, stdout
//! - `RUST_LOG` overrides the defaults

use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

/// Check if running in development environment
fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Default filter directives, Tauri/webview noise suppressed.
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    vec![
        if is_dev { "debug" } else { "info" }.to_string(),
        "tauri=warn".to_string(), // Filter noisy setup spans (app::setup)
        "wry=off".to_string(),    // Filter WebView internals
        "hyper=info".to_string(),
        "reqwest=info".to_string(),
    ]
}

/// Initialize the global tracing subscriber.
///
/// Call once in `main`, before the Tauri builder runs.
pub fn init_tracing_subscriber() -> anyhow::Result<()> {
    let is_dev = is_development();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(build_filter_directives(is_dev).join(",")));

    registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to set tracing subscriber: {err}"))?;

    Ok(())
}
