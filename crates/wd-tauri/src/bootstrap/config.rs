//! Configuration loader.
//!
//! Pure data loading: read the TOML file, parse it, map it to the
//! `AppConfig` DTO. Whatever is in the file is accepted as fact; defaults
//! for missing values are applied by the runtime wiring, not here.

use anyhow::Context;
use std::path::PathBuf;
use tracing::warn;
use wd_core::config::AppConfig;

const CONFIG_DIR: &str = "walletdesk";
const CONFIG_FILE: &str = "config.toml";

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid TOML, or the
/// TOML structure cannot be mapped.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Platform config file location (`<config dir>/walletdesk/config.toml`).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the config file when present; otherwise return empty facts.
///
/// An unreadable or malformed file is logged and treated as absent rather
/// than aborting startup.
pub fn resolve_config() -> AppConfig {
    match default_config_path() {
        Some(path) if path.exists() => match load_config(path.clone()) {
            Ok(config) => config,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "ignoring unreadable config file");
                empty_config()
            }
        },
        _ => empty_config(),
    }
}

fn empty_config() -> AppConfig {
    AppConfig {
        service_base_url: String::new(),
        request_timeout_secs: 0,
        default_email: String::new(),
    }
}
