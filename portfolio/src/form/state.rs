use std::collections::BTreeMap;

use log::{debug, warn};

use crate::validation::{Field, FieldError};

/// Where the simulated submission currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
}

impl SubmissionStatus {
    /// The only legal moves are Idle → Submitting → Success → Idle.
    pub fn can_transition_to(self, next: SubmissionStatus) -> bool {
        matches!(
            (self, next),
            (Self::Idle, Self::Submitting)
                | (Self::Submitting, Self::Success)
                | (Self::Success, Self::Idle)
        )
    }
}

/// Outcome of the last validation pass over a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validity {
    pub valid: bool,
    pub error_message: Option<String>,
}

impl Validity {
    pub fn valid() -> Self {
        Self {
            valid: true,
            error_message: None,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            error_message: Some(message.into()),
        }
    }
}

impl From<&Result<(), FieldError>> for Validity {
    fn from(result: &Result<(), FieldError>) -> Self {
        match result {
            Ok(()) => Self::valid(),
            Err(e) => Self::invalid(e.message.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    /// Value as read at the last validation pass, untrimmed.
    pub value: String,
    pub validity: Validity,
    /// Whether the inline error is on screen. Cleared by edits without
    /// touching `validity`.
    pub error_visible: bool,
}

/// Everything the validator knows about its form.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    fields: BTreeMap<Field, FieldState>,
    status: SubmissionStatus,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn field(&self, field: Field) -> Option<&FieldState> {
        self.fields.get(&field)
    }

    pub fn is_error_visible(&self, field: Field) -> bool {
        self.field(field).is_some_and(|f| f.error_visible)
    }

    pub(crate) fn record(&mut self, field: Field, value: &str, result: &Result<(), FieldError>) {
        let validity = Validity::from(result);
        let error_visible = !validity.valid;
        self.fields.insert(
            field,
            FieldState {
                value: value.to_string(),
                validity,
                error_visible,
            },
        );
    }

    pub(crate) fn hide_error(&mut self, field: Field) {
        if let Some(state) = self.fields.get_mut(&field) {
            state.error_visible = false;
        }
    }

    pub(crate) fn hide_all_errors(&mut self) {
        for state in self.fields.values_mut() {
            state.error_visible = false;
        }
    }

    pub(crate) fn clear_fields(&mut self) {
        self.fields.clear();
    }

    /// Move to `next` if the transition is legal. Illegal moves are logged
    /// and ignored.
    pub(crate) fn transition(&mut self, next: SubmissionStatus) -> bool {
        if !self.status.can_transition_to(next) {
            warn!("ignoring submission transition {:?} -> {:?}", self.status, next);
            return false;
        }
        debug!("submission {:?} -> {:?}", self.status, next);
        self.status = next;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_forward_cycle_is_legal() {
        use SubmissionStatus::*;
        assert!(Idle.can_transition_to(Submitting));
        assert!(Submitting.can_transition_to(Success));
        assert!(Success.can_transition_to(Idle));

        assert!(!Idle.can_transition_to(Success));
        assert!(!Submitting.can_transition_to(Idle));
        assert!(!Submitting.can_transition_to(Submitting));
        assert!(!Success.can_transition_to(Submitting));
    }

    #[test]
    fn illegal_transition_leaves_status_alone() {
        let mut state = FormState::new();
        assert!(!state.transition(SubmissionStatus::Success));
        assert_eq!(state.status(), SubmissionStatus::Idle);
        assert!(state.transition(SubmissionStatus::Submitting));
        assert_eq!(state.status(), SubmissionStatus::Submitting);
    }

    #[test]
    fn hiding_an_error_keeps_the_validity() {
        let mut state = FormState::new();
        let err = Field::Name.validate("");
        state.record(Field::Name, "", &err);
        assert!(state.is_error_visible(Field::Name));

        state.hide_error(Field::Name);
        let name = state.field(Field::Name).unwrap();
        assert!(!name.error_visible);
        assert!(!name.validity.valid);
        assert_eq!(name.validity.error_message.as_deref(), Some("Name is required"));
    }
}
