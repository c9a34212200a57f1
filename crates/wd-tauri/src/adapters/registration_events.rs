//! Registration state forwarding.
//!
//! The frontend re-renders the dialog from these events. Only the DTO
//! crosses the boundary; the draft password stays on this side.

use tauri::{AppHandle, Emitter};
use tracing::warn;

use wd_app::usecases::registration::RegistrationStateDto;
use wd_core::ports::RegistrationEventPort;
use wd_core::registration::RegistrationState;

/// Event channel the frontend dialog listens on.
pub const REGISTRATION_STATE_EVENT: &str = "registration://state-changed";

/// Forwards registration state changes to the frontend as Tauri events.
pub struct TauriRegistrationEventPort<R: tauri::Runtime = tauri::Wry> {
    app: AppHandle<R>,
}

impl<R: tauri::Runtime> TauriRegistrationEventPort<R> {
    pub fn new(app: AppHandle<R>) -> Self {
        Self { app }
    }
}

#[async_trait::async_trait]
impl<R: tauri::Runtime> RegistrationEventPort for TauriRegistrationEventPort<R> {
    async fn emit_state_changed(&self, state: RegistrationState) {
        let dto = RegistrationStateDto::from(&state);
        if let Err(err) = self.app.emit(REGISTRATION_STATE_EVENT, &dto) {
            warn!(error = %err, state = state.name(), "failed to emit registration state event");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tauri::Listener;
    use wd_core::registration::{DraftField, RegistrationDraft};

    #[tokio::test]
    async fn emit_state_changed_forwards_dto_without_password() {
        let app = tauri::test::mock_app();
        let app_handle = app.handle();
        let (tx, mut rx) = tokio::sync::mpsc::channel::<String>(1);

        let tx_clone = tx.clone();
        app_handle.listen(REGISTRATION_STATE_EVENT, move |event: tauri::Event| {
            let _ = tx_clone.try_send(event.payload().to_string());
        });

        let mut draft = RegistrationDraft::with_email("a@b.com");
        draft.set(DraftField::Password, "hunter2hunter2".into());
        let port = TauriRegistrationEventPort::new(app_handle.clone());
        port.emit_state_changed(RegistrationState::Submitting { draft })
            .await;

        let payload = rx.recv().await.expect("event payload");
        assert!(payload.contains("a@b.com"));
        assert!(payload.contains("\"isSubmitting\":true"));
        assert!(!payload.contains("hunter2"));
    }
}
