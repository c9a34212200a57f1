use async_trait::async_trait;

use crate::notification::Notification;

/// Notification sink. Fire-and-forget: no acknowledgment is observed and
/// delivery failures stay inside the adapter.
#[async_trait]
pub trait NotificationPort: Send + Sync {
    async fn notify(&self, notification: Notification);
}
