//! Registration state machine.
//!
//! Defines a pure state transition function for the registration flow.
//! Side effects (the account-service call, notifications) are described as
//! actions and executed by the orchestration layer.

use std::fmt;

use crate::registration::{DraftField, RegistrationDraft, RegistrationError};
use crate::security::Secret;

/// Registration flow state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationState {
    /// Dialog closed; no draft held.
    Closed,
    /// Dialog open, fields editable, no submission in flight.
    Editing {
        draft: RegistrationDraft,
        error: Option<RegistrationError>,
    },
    /// Account creation in flight. Only settlement events leave this state.
    Submitting { draft: RegistrationDraft },
}

impl RegistrationState {
    /// Variant name, for logging without field contents.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Closed => "Closed",
            Self::Editing { .. } => "Editing",
            Self::Submitting { .. } => "Submitting",
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting { .. })
    }
}

/// Events that drive the registration flow.
#[derive(Clone, PartialEq, Eq)]
pub enum RegistrationEvent {
    /// Activate the flow, optionally pre-populating the email field.
    Open { default_email: Option<String> },
    /// The user edited a form field.
    FieldChanged { field: DraftField, value: String },
    /// The user triggered submission.
    Submit,
    /// The account-service call settled successfully.
    SubmissionSucceeded,
    /// The account-service call settled with a classified failure.
    SubmissionFailed { error: RegistrationError },
    /// The user dismissed the dialog.
    Close,
}

impl RegistrationEvent {
    /// Variant name, for logging without field contents.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Open { .. } => "Open",
            Self::FieldChanged { .. } => "FieldChanged",
            Self::Submit => "Submit",
            Self::SubmissionSucceeded => "SubmissionSucceeded",
            Self::SubmissionFailed { .. } => "SubmissionFailed",
            Self::Close => "Close",
        }
    }
}

// Hand-written so a password edit never reaches a log line.
impl fmt::Debug for RegistrationEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open { default_email } => f
                .debug_struct("Open")
                .field("default_email", default_email)
                .finish(),
            Self::FieldChanged { field, value } => {
                let mut s = f.debug_struct("FieldChanged");
                s.field("field", field);
                match field {
                    DraftField::Password => s.field("value", &"[REDACTED]"),
                    _ => s.field("value", value),
                };
                s.finish()
            }
            Self::Submit => f.write_str("Submit"),
            Self::SubmissionSucceeded => f.write_str("SubmissionSucceeded"),
            Self::SubmissionFailed { error } => f
                .debug_struct("SubmissionFailed")
                .field("error", error)
                .finish(),
            Self::Close => f.write_str("Close"),
        }
    }
}

/// Side-effects produced by state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationAction {
    /// Invoke the account service with the submitted fields.
    CreateAccount {
        email: String,
        password: Secret,
        full_name: String,
    },
    /// Emit the success notification.
    NotifySuccess,
    /// Emit the failure notification for a classified error.
    NotifyFailure { error: RegistrationError },
}

/// Pure registration state machine: no side effects.
pub struct RegistrationStateMachine;

impl RegistrationStateMachine {
    pub fn transition(
        state: RegistrationState,
        event: RegistrationEvent,
    ) -> (RegistrationState, Vec<RegistrationAction>) {
        match (state, event) {
            (RegistrationState::Closed, RegistrationEvent::Open { default_email }) => (
                RegistrationState::Editing {
                    draft: RegistrationDraft::with_email(default_email.unwrap_or_default()),
                    error: None,
                },
                Vec::new(),
            ),
            (
                RegistrationState::Editing { mut draft, error },
                RegistrationEvent::FieldChanged { field, value },
            ) => {
                draft.set(field, value);
                (RegistrationState::Editing { draft, error }, Vec::new())
            }
            (RegistrationState::Editing { draft, .. }, RegistrationEvent::Submit) => {
                if let Err(error) = draft.validate() {
                    return (
                        RegistrationState::Editing {
                            draft,
                            error: Some(error),
                        },
                        Vec::new(),
                    );
                }
                let action = RegistrationAction::CreateAccount {
                    email: draft.email.clone(),
                    password: draft.password.clone(),
                    full_name: draft.full_name.clone(),
                };
                (RegistrationState::Submitting { draft }, vec![action])
            }
            (RegistrationState::Submitting { .. }, RegistrationEvent::SubmissionSucceeded) => (
                RegistrationState::Closed,
                vec![RegistrationAction::NotifySuccess],
            ),
            (
                RegistrationState::Submitting { draft },
                RegistrationEvent::SubmissionFailed { error },
            ) => (
                RegistrationState::Editing {
                    draft,
                    error: Some(error.clone()),
                },
                vec![RegistrationAction::NotifyFailure { error }],
            ),
            (RegistrationState::Editing { .. }, RegistrationEvent::Close) => {
                (RegistrationState::Closed, Vec::new())
            }
            // Everything else is a no-op: submit/close/edits while a
            // submission is in flight, events while closed, re-open while
            // already open.
            (state, _event) => (state, Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        RegistrationAction, RegistrationEvent, RegistrationState, RegistrationStateMachine,
    };
    use crate::registration::{DraftField, RegistrationDraft, RegistrationError};

    fn valid_editing_state() -> RegistrationState {
        let mut draft = RegistrationDraft::with_email("a@b.com");
        draft.set(DraftField::FullName, "Ada Lovelace".into());
        draft.set(DraftField::Password, "longenough".into());
        RegistrationState::Editing { draft, error: None }
    }

    #[test]
    fn open_prepopulates_default_email() {
        let (next, actions) = RegistrationStateMachine::transition(
            RegistrationState::Closed,
            RegistrationEvent::Open {
                default_email: Some("a@b.com".into()),
            },
        );
        assert_eq!(
            next,
            RegistrationState::Editing {
                draft: RegistrationDraft::with_email("a@b.com"),
                error: None
            }
        );
        assert!(actions.is_empty());
    }

    #[test]
    fn open_without_default_email_starts_empty() {
        let (next, _) = RegistrationStateMachine::transition(
            RegistrationState::Closed,
            RegistrationEvent::Open {
                default_email: None,
            },
        );
        match next {
            RegistrationState::Editing { draft, .. } => assert!(draft.email.is_empty()),
            other => panic!("unexpected state: {:?}", other),
        }
    }

    #[test]
    fn submit_valid_draft_starts_submission_with_fields_in_order() {
        let (next, actions) =
            RegistrationStateMachine::transition(valid_editing_state(), RegistrationEvent::Submit);
        assert!(next.is_submitting());
        assert_eq!(actions.len(), 1);
        match &actions[0] {
            RegistrationAction::CreateAccount {
                email,
                password,
                full_name,
            } => {
                assert_eq!(email, "a@b.com");
                assert_eq!(password.expose(), "longenough");
                assert_eq!(full_name, "Ada Lovelace");
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn submit_short_password_sets_error_without_action() {
        let mut draft = RegistrationDraft::with_email("a@b.com");
        draft.set(DraftField::FullName, "Ada".into());
        draft.set(DraftField::Password, "short".into());
        let (next, actions) = RegistrationStateMachine::transition(
            RegistrationState::Editing { draft, error: None },
            RegistrationEvent::Submit,
        );
        match next {
            RegistrationState::Editing { error, .. } => assert_eq!(
                error,
                Some(RegistrationError::PasswordTooShort { min_len: 8 })
            ),
            other => panic!("unexpected state: {:?}", other),
        }
        assert!(actions.is_empty());
    }

    #[test]
    fn submission_success_closes_and_notifies() {
        let (submitting, _) =
            RegistrationStateMachine::transition(valid_editing_state(), RegistrationEvent::Submit);
        let (next, actions) = RegistrationStateMachine::transition(
            submitting,
            RegistrationEvent::SubmissionSucceeded,
        );
        assert_eq!(next, RegistrationState::Closed);
        assert_eq!(actions, vec![RegistrationAction::NotifySuccess]);
    }

    #[test]
    fn submission_failure_keeps_draft_and_notifies() {
        let (submitting, _) =
            RegistrationStateMachine::transition(valid_editing_state(), RegistrationEvent::Submit);
        let (next, actions) = RegistrationStateMachine::transition(
            submitting,
            RegistrationEvent::SubmissionFailed {
                error: RegistrationError::EmailTaken,
            },
        );
        match &next {
            RegistrationState::Editing { draft, error } => {
                assert_eq!(draft.email, "a@b.com");
                assert_eq!(draft.full_name, "Ada Lovelace");
                assert_eq!(draft.password.expose(), "longenough");
                assert_eq!(error, &Some(RegistrationError::EmailTaken));
            }
            other => panic!("unexpected state: {:?}", other),
        }
        assert_eq!(
            actions,
            vec![RegistrationAction::NotifyFailure {
                error: RegistrationError::EmailTaken
            }]
        );
    }

    #[test]
    fn submit_and_close_are_no_ops_while_submitting() {
        let (submitting, _) =
            RegistrationStateMachine::transition(valid_editing_state(), RegistrationEvent::Submit);

        let (after_submit, actions) =
            RegistrationStateMachine::transition(submitting.clone(), RegistrationEvent::Submit);
        assert_eq!(after_submit, submitting);
        assert!(actions.is_empty());

        let (after_close, actions) =
            RegistrationStateMachine::transition(submitting.clone(), RegistrationEvent::Close);
        assert_eq!(after_close, submitting);
        assert!(actions.is_empty());
    }

    #[test]
    fn field_edits_are_dropped_while_submitting() {
        let (submitting, _) =
            RegistrationStateMachine::transition(valid_editing_state(), RegistrationEvent::Submit);
        let (next, _) = RegistrationStateMachine::transition(
            submitting.clone(),
            RegistrationEvent::FieldChanged {
                field: DraftField::Email,
                value: "other@b.com".into(),
            },
        );
        assert_eq!(next, submitting);
    }

    #[test]
    fn close_while_editing_discards_draft() {
        let (next, actions) =
            RegistrationStateMachine::transition(valid_editing_state(), RegistrationEvent::Close);
        assert_eq!(next, RegistrationState::Closed);
        assert!(actions.is_empty());
    }

    #[test]
    fn events_while_closed_are_ignored() {
        let (next, actions) = RegistrationStateMachine::transition(
            RegistrationState::Closed,
            RegistrationEvent::Submit,
        );
        assert_eq!(next, RegistrationState::Closed);
        assert!(actions.is_empty());
    }

    #[test]
    fn field_changed_debug_redacts_password_value() {
        let event = RegistrationEvent::FieldChanged {
            field: DraftField::Password,
            value: "hunter2hunter2".into(),
        };
        let rendered = format!("{:?}", event);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
