//! Transient outcome notifications.
//!
//! Fire-and-forget messages handed to the notification sink (the frontend
//! toast system); the core never retains or re-reads them.

use serde::{Deserialize, Serialize};

/// Notification severity. `Error` maps to the destructive toast variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationSeverity {
    Info,
    Error,
}

/// A transient notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub severity: NotificationSeverity,
}

impl Notification {
    pub fn info(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            severity: NotificationSeverity::Info,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: Some(description.into()),
            severity: NotificationSeverity::Error,
        }
    }
}
