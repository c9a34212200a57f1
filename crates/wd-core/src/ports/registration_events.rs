use async_trait::async_trait;

use crate::registration::RegistrationState;

/// Emits registration state changes to the presentation layer.
///
/// Implementations decide how much of the state crosses the boundary; the
/// draft password must not.
#[async_trait]
pub trait RegistrationEventPort: Send + Sync {
    async fn emit_state_changed(&self, state: RegistrationState);
}
