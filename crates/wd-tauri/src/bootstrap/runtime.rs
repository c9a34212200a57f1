//! # Application runtime
//!
//! Wires ports into use cases once the Tauri `AppHandle` exists and holds
//! the result for the command layer.
//!
//! The registration flow is cached here and shared across all Tauri
//! commands so the in-memory state machine is not reset on every call.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use wd_app::usecases::registration::RegistrationFlow;
use wd_core::config::AppConfig;
use wd_infra::account::HttpAccountService;

use crate::adapters::{TauriNotificationPort, TauriRegistrationEventPort};

/// Wallet platform API used when the config file does not name one.
const DEFAULT_SERVICE_BASE_URL: &str = "https://api.walletdesk.io";

/// Account-service request timeout used when the config file does not set
/// one. The flow itself imposes no timeout; this belongs to the transport.
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Application runtime with dependencies.
///
/// Constructed inside the Tauri setup phase and managed as
/// `Arc<AppRuntime>` state for the command handlers.
pub struct AppRuntime {
    /// Cached registration flow - shared across all Tauri commands so the
    /// in-memory registration state machine is not reset per call.
    registration_flow: Arc<RegistrationFlow>,
    /// Email pre-filled into the dialog when the frontend passes none.
    default_email: Option<String>,
}

impl AppRuntime {
    /// Wire adapters and use cases from the loaded configuration.
    pub fn initialize(config: &AppConfig, app_handle: tauri::AppHandle) -> anyhow::Result<Self> {
        let base_url = if config.service_base_url.is_empty() {
            DEFAULT_SERVICE_BASE_URL.to_string()
        } else {
            config.service_base_url.clone()
        };
        let timeout = if config.request_timeout_secs == 0 {
            DEFAULT_REQUEST_TIMEOUT
        } else {
            Duration::from_secs(config.request_timeout_secs)
        };

        info!(base_url = %base_url, "wiring account service");
        let account = Arc::new(HttpAccountService::new(base_url, timeout)?);
        let notifications = Arc::new(TauriNotificationPort::new(app_handle.clone()));
        let events = Arc::new(TauriRegistrationEventPort::new(app_handle));

        let registration_flow = Arc::new(RegistrationFlow::new(account, notifications, events));

        let default_email = if config.default_email.is_empty() {
            None
        } else {
            Some(config.default_email.clone())
        };

        Ok(Self {
            registration_flow,
            default_email,
        })
    }

    pub fn registration_flow(&self) -> Arc<RegistrationFlow> {
        self.registration_flow.clone()
    }

    pub fn default_email(&self) -> Option<String> {
        self.default_email.clone()
    }
}
