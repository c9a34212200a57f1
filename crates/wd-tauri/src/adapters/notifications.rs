//! Toast notification forwarding.
//!
//! Notifications are fire-and-forget: emission failures are logged and
//! swallowed here, never surfaced to the flow.

use tauri::{AppHandle, Emitter};
use tracing::warn;

use wd_core::notification::Notification;
use wd_core::ports::NotificationPort;

/// Event channel the frontend toast system listens on.
pub const NOTIFICATION_EVENT: &str = "notification://event";

/// Forwards notifications to the frontend as Tauri events.
pub struct TauriNotificationPort<R: tauri::Runtime = tauri::Wry> {
    app: AppHandle<R>,
}

impl<R: tauri::Runtime> TauriNotificationPort<R> {
    pub fn new(app: AppHandle<R>) -> Self {
        Self { app }
    }
}

#[async_trait::async_trait]
impl<R: tauri::Runtime> NotificationPort for TauriNotificationPort<R> {
    async fn notify(&self, notification: Notification) {
        if let Err(err) = self.app.emit(NOTIFICATION_EVENT, &notification) {
            warn!(error = %err, title = %notification.title, "failed to emit notification event");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tauri::Listener;

    #[tokio::test]
    async fn notify_emits_notification_event() {
        let app = tauri::test::mock_app();
        let app_handle = app.handle();
        let (tx, mut rx) = tokio::sync::mpsc::channel::<String>(1);

        let tx_clone = tx.clone();
        app_handle.listen(NOTIFICATION_EVENT, move |event: tauri::Event| {
            let _ = tx_clone.try_send(event.payload().to_string());
        });

        let port = TauriNotificationPort::new(app_handle.clone());
        port.notify(Notification::error(
            "Registration Failed",
            "Email already exists",
        ))
        .await;

        let payload = rx.recv().await.expect("event payload");
        assert!(payload.contains("Registration Failed"));
        assert!(payload.contains("Email already exists"));
        assert!(payload.contains("error"));
    }

    #[tokio::test]
    async fn info_notification_omits_description() {
        let app = tauri::test::mock_app();
        let app_handle = app.handle();
        let (tx, mut rx) = tokio::sync::mpsc::channel::<String>(1);

        let tx_clone = tx.clone();
        app_handle.listen(NOTIFICATION_EVENT, move |event: tauri::Event| {
            let _ = tx_clone.try_send(event.payload().to_string());
        });

        let port = TauriNotificationPort::new(app_handle.clone());
        port.notify(Notification::info("Registration Successful"))
            .await;

        let payload = rx.recv().await.expect("event payload");
        assert!(payload.contains("Registration Successful"));
        assert!(!payload.contains("description"));
    }
}
