//! Registration flow orchestrator.
//!
//! This module coordinates the registration state machine and side effects.
//! Transitions are applied and published atomically behind a dispatch lock;
//! actions (the account-service call, notifications) run outside the lock,
//! so the `Submitting` state itself is what rejects re-entry while a call
//! is in flight.

use std::sync::Arc;

use tracing::{debug, info, info_span, warn, Instrument};

use wd_core::notification::Notification;
use wd_core::ports::{AccountPort, NotificationPort, RegistrationEventPort};
use wd_core::registration::{
    DraftField, RegistrationAction, RegistrationError, RegistrationEvent, RegistrationStateMachine,
};

use crate::usecases::registration::context::RegistrationContext;
use crate::usecases::registration::dto::RegistrationStateDto;

/// Orchestrator that drives registration state and side effects.
///
/// One instance owns one dialog's worth of state; it is shared across
/// commands behind an `Arc` so the in-memory state machine survives
/// between calls.
pub struct RegistrationFlow {
    context: RegistrationContext,

    account: Arc<dyn AccountPort>,
    notifications: Arc<dyn NotificationPort>,
    events: Arc<dyn RegistrationEventPort>,
}

impl RegistrationFlow {
    pub fn new(
        account: Arc<dyn AccountPort>,
        notifications: Arc<dyn NotificationPort>,
        events: Arc<dyn RegistrationEventPort>,
    ) -> Self {
        Self {
            context: RegistrationContext::closed(),
            account,
            notifications,
            events,
        }
    }

    /// Activate the flow, optionally pre-populating the email field.
    pub async fn open(&self, default_email: Option<String>) -> RegistrationStateDto {
        self.dispatch(RegistrationEvent::Open { default_email })
            .await
    }

    /// Overwrite a single draft field. Ignored unless the flow is editing.
    pub async fn update_field(&self, field: DraftField, value: String) -> RegistrationStateDto {
        self.dispatch(RegistrationEvent::FieldChanged { field, value })
            .await
    }

    /// Submit the draft. Runs to settlement: on return the flow is either
    /// closed (success) or editing again with the draft intact (failure).
    /// A second submit while one is in flight is a no-op.
    pub async fn submit(&self) -> RegistrationStateDto {
        self.dispatch(RegistrationEvent::Submit).await
    }

    /// Dismiss the dialog and discard the draft. A no-op while a
    /// submission is in flight.
    pub async fn close(&self) -> RegistrationStateDto {
        self.dispatch(RegistrationEvent::Close).await
    }

    /// Current state view, without driving the machine.
    pub async fn current_state(&self) -> RegistrationStateDto {
        RegistrationStateDto::from(&self.context.get_state().await)
    }

    async fn dispatch(&self, event: RegistrationEvent) -> RegistrationStateDto {
        let span = info_span!("usecase.registration_flow.dispatch", event = event.name());
        async {
            let mut pending_events = vec![event];

            while let Some(event) = pending_events.pop() {
                let actions = self.apply(event).await;
                // Effects run outside the dispatch lock; the Submitting
                // state is the guard against re-entry, not the lock.
                let follow_up_events = self.execute_actions(actions).await;
                pending_events.extend(follow_up_events);
            }

            RegistrationStateDto::from(&self.context.get_state().await)
        }
        .instrument(span)
        .await
    }

    /// Apply one transition under the dispatch lock and publish the result.
    async fn apply(&self, event: RegistrationEvent) -> Vec<RegistrationAction> {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;

        let current = self.context.get_state().await;
        let event_name = event.name();
        let (next, actions) = RegistrationStateMachine::transition(current.clone(), event);

        if next == current {
            debug!(state = current.name(), event = event_name, "registration event ignored");
            return actions;
        }

        info!(
            from = current.name(),
            to = next.name(),
            event = event_name,
            "registration state transition"
        );
        self.context.set_state(next.clone()).await;
        self.events.emit_state_changed(next).await;
        actions
    }

    async fn execute_actions(
        &self,
        actions: Vec<RegistrationAction>,
    ) -> Vec<RegistrationEvent> {
        let mut follow_up_events = Vec::new();
        for action in actions {
            match action {
                RegistrationAction::CreateAccount {
                    email,
                    password,
                    full_name,
                } => {
                    debug!(email = %email, "registration calling account service");
                    match self
                        .account
                        .create_account(&email, password.expose(), &full_name)
                        .await
                    {
                        Ok(()) => {
                            follow_up_events.push(RegistrationEvent::SubmissionSucceeded);
                        }
                        Err(err) => {
                            let error = RegistrationError::classify(err.diagnostic());
                            warn!(error = %error, "account creation failed");
                            follow_up_events.push(RegistrationEvent::SubmissionFailed { error });
                        }
                    }
                }
                RegistrationAction::NotifySuccess => {
                    self.notifications
                        .notify(Notification::info(SUCCESS_TITLE))
                        .await;
                }
                RegistrationAction::NotifyFailure { error } => {
                    self.notifications
                        .notify(Notification::error(FAILURE_TITLE, error.to_string()))
                        .await;
                }
            }
        }

        follow_up_events
    }
}

const SUCCESS_TITLE: &str = "Registration Successful";
const FAILURE_TITLE: &str = "Registration Failed";
