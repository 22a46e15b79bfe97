//! Declarative field validation for the contact form.
//!
//! Each [`Field`] owns an ordered list of rules. Values are trimmed before
//! checking and the first failing rule decides the error, so a field
//! reports at most one problem at a time.
//!
//! # Example
//!
//! ```
//! use portfolio::validation::{Field, ValidationErrorKind};
//!
//! assert!(Field::Email.validate("jane@example.com").is_ok());
//!
//! let err = Field::Name.validate("J").unwrap_err();
//! assert_eq!(err.kind, ValidationErrorKind::TooShort);
//! assert_eq!(err.to_string(), "Name must be at least 2 characters long");
//! ```

mod field;
mod result;
mod rules;

pub use field::{Field, is_valid_email};
pub use result::{FieldError, ValidationErrorKind, ValidationResult};
pub use rules::FieldRules;
