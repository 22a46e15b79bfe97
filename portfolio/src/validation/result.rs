use thiserror::Error;

use super::Field;

/// Why a field value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    Required,
    TooShort,
    TooLong,
    /// The value contains characters outside the allowed set.
    InvalidCharacters,
    /// The value does not have the expected shape.
    InvalidFormat,
}

/// A rejected field value. Displays as the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FieldError {
    pub field: Field,
    pub kind: ValidationErrorKind,
    pub message: String,
}

/// Result of validating one or more fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ValidationResult {
    /// All fields passed validation.
    #[default]
    Valid,
    /// One or more fields failed validation, in field order.
    Invalid(Vec<FieldError>),
}

impl ValidationResult {
    /// Build from per-field outcomes. Every outcome is kept; nothing
    /// short-circuits.
    pub fn collect(outcomes: impl IntoIterator<Item = Result<(), FieldError>>) -> Self {
        let errors: Vec<_> = outcomes.into_iter().filter_map(Result::err).collect();
        if errors.is_empty() {
            Self::Valid
        } else {
            Self::Invalid(errors)
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Valid => &[],
            Self::Invalid(errors) => errors,
        }
    }

    pub fn first_error(&self) -> Option<&FieldError> {
        self.errors().first()
    }

    pub fn error_for(&self, field: Field) -> Option<&FieldError> {
        self.errors().iter().find(|e| e.field == field)
    }
}
