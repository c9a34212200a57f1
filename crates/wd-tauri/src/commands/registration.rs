//! Registration-related Tauri commands
//!
//! Each command delegates to the shared `RegistrationFlow` held by the
//! runtime, so the in-memory state machine is not reset between calls.

use crate::bootstrap::AppRuntime;
use std::sync::Arc;
use tauri::State;
use tracing::{info_span, Instrument};
use wd_app::usecases::registration::RegistrationStateDto;
use wd_core::registration::DraftField;

/// Open the registration dialog.
///
/// The email field is pre-populated from `default_email` when given,
/// falling back to the configured default.
#[tauri::command]
pub async fn open_registration(
    runtime: State<'_, Arc<AppRuntime>>,
    default_email: Option<String>,
) -> Result<RegistrationStateDto, String> {
    let span = info_span!("command.registration.open");
    async {
        let default_email = default_email.or_else(|| runtime.default_email());
        Ok(runtime.registration_flow().open(default_email).await)
    }
    .instrument(span)
    .await
}

/// Overwrite a single draft field.
#[tauri::command]
pub async fn update_registration_field(
    runtime: State<'_, Arc<AppRuntime>>,
    field: DraftField,
    value: String,
) -> Result<RegistrationStateDto, String> {
    let span = info_span!("command.registration.update_field");
    async {
        Ok(runtime
            .registration_flow()
            .update_field(field, value)
            .await)
    }
    .instrument(span)
    .await
}

/// Submit the draft and await settlement.
#[tauri::command]
pub async fn submit_registration(
    runtime: State<'_, Arc<AppRuntime>>,
) -> Result<RegistrationStateDto, String> {
    let span = info_span!("command.registration.submit");
    async { Ok(runtime.registration_flow().submit().await) }
        .instrument(span)
        .await
}

/// Dismiss the registration dialog.
#[tauri::command]
pub async fn close_registration(
    runtime: State<'_, Arc<AppRuntime>>,
) -> Result<RegistrationStateDto, String> {
    let span = info_span!("command.registration.close");
    async { Ok(runtime.registration_flow().close().await) }
        .instrument(span)
        .await
}

/// Get the current registration state.
#[tauri::command]
pub async fn get_registration_state(
    runtime: State<'_, Arc<AppRuntime>>,
) -> Result<RegistrationStateDto, String> {
    let span = info_span!("command.registration.get_state");
    async { Ok(runtime.registration_flow().current_state().await) }
        .instrument(span)
        .await
}
