use std::sync::Arc;

use tokio::sync::Mutex;
use wd_core::registration::RegistrationState;

/// Shared registration context containing state and dispatch lock.
///
/// ## Lock Ordering
/// When acquiring both locks, acquire `dispatch_lock` first, then `state`.
/// - `dispatch_lock`: serializes transition application; it is NOT held
///   across the account-service call (mutual exclusion of submissions is
///   structural, via the `Submitting` state).
/// - `state`: used for both reading (`get_state`) and writing.
#[derive(Clone)]
pub struct RegistrationContext {
    /// Current registration state.
    state: Arc<Mutex<RegistrationState>>,
    /// Serializes dispatch calls to prevent concurrent transition races.
    /// Only acquired during `dispatch`, NOT during `get_state`.
    dispatch_lock: Arc<Mutex<()>>,
}

impl RegistrationContext {
    /// Creates a new RegistrationContext with the given initial state.
    pub fn new(initial_state: RegistrationState) -> Self {
        Self {
            state: Arc::new(Mutex::new(initial_state)),
            dispatch_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Creates a RegistrationContext in the `Closed` state.
    pub fn closed() -> Self {
        Self::new(RegistrationState::Closed)
    }

    /// Returns a clone of the current state.
    ///
    /// This is a lightweight read operation that does NOT acquire
    /// `dispatch_lock`.
    pub async fn get_state(&self) -> RegistrationState {
        self.state.lock().await.clone()
    }

    /// Acquires the dispatch lock for serializing concurrent dispatch calls.
    ///
    /// Returns a guard that releases the lock when dropped.
    pub async fn acquire_dispatch_lock(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.dispatch_lock.lock().await
    }

    /// Updates the state to the given value.
    ///
    /// This should only be called after acquiring `dispatch_lock`.
    pub async fn set_state(&self, state: RegistrationState) {
        let mut guard = self.state.lock().await;
        *guard = state;
    }
}
