use serde::Serialize;
use wd_core::registration::RegistrationState;

/// Data transfer object for the registration flow state.
///
/// This is the view the frontend renders from. The draft password never
/// crosses this boundary; validity is exposed as `can_submit` instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationStateDto {
    pub is_open: bool,
    pub is_submitting: bool,
    pub email: String,
    pub full_name: String,
    pub can_submit: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&RegistrationState> for RegistrationStateDto {
    fn from(state: &RegistrationState) -> Self {
        match state {
            RegistrationState::Closed => Self {
                is_open: false,
                is_submitting: false,
                email: String::new(),
                full_name: String::new(),
                can_submit: false,
                error: None,
            },
            RegistrationState::Editing { draft, error } => Self {
                is_open: true,
                is_submitting: false,
                email: draft.email.clone(),
                full_name: draft.full_name.clone(),
                can_submit: draft.is_submittable(),
                error: error.as_ref().map(|e| e.to_string()),
            },
            RegistrationState::Submitting { draft } => Self {
                is_open: true,
                is_submitting: true,
                email: draft.email.clone(),
                full_name: draft.full_name.clone(),
                can_submit: false,
                error: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wd_core::registration::{DraftField, RegistrationDraft, RegistrationError};

    #[test]
    fn editing_state_maps_draft_and_error() {
        let mut draft = RegistrationDraft::with_email("a@b.com");
        draft.set(DraftField::FullName, "Ada Lovelace".into());
        draft.set(DraftField::Password, "longenough".into());
        let state = RegistrationState::Editing {
            draft,
            error: Some(RegistrationError::EmailTaken),
        };

        let dto = RegistrationStateDto::from(&state);
        assert!(dto.is_open);
        assert!(!dto.is_submitting);
        assert!(dto.can_submit);
        assert_eq!(dto.email, "a@b.com");
        assert_eq!(dto.full_name, "Ada Lovelace");
        assert_eq!(dto.error.as_deref(), Some("Email already exists"));
    }

    #[test]
    fn serialized_dto_never_contains_the_password() {
        let mut draft = RegistrationDraft::with_email("a@b.com");
        draft.set(DraftField::Password, "hunter2hunter2".into());
        let state = RegistrationState::Submitting { draft };

        let json = serde_json::to_string(&RegistrationStateDto::from(&state)).unwrap();
        assert!(!json.contains("hunter2"));
        assert!(json.contains("\"isSubmitting\":true"));
    }
}
