//! Configuration data transfer objects.
//!
//! Pure data only: TOML → DTO mapping, no validation, no default-value
//! policy. Empty strings and zero values are facts; the wiring layer
//! decides what to do with them.

/// Application configuration DTO (pure data, no logic).
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Wallet platform API base URL (may be empty - a fact, not an error).
    pub service_base_url: String,

    /// Account-service request timeout in seconds (0 = unset).
    pub request_timeout_secs: u64,

    /// Email pre-filled into the registration dialog, when an installer or
    /// a previous sign-in left one behind (may be empty).
    pub default_email: String,
}

impl AppConfig {
    /// Create AppConfig from a TOML value.
    ///
    /// Missing sections and keys map to empty values; no validation or
    /// defaulting happens here.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            service_base_url: toml_value
                .get("service")
                .and_then(|s| s.get("base_url"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            request_timeout_secs: toml_value
                .get("service")
                .and_then(|s| s.get("request_timeout_secs"))
                .and_then(|v| v.as_integer())
                .map(|v| v.max(0) as u64)
                .unwrap_or(0),
            default_email: toml_value
                .get("registration")
                .and_then(|r| r.get("default_email"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
        })
    }
}
