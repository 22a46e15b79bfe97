use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::{FieldError, FieldRules, ValidationErrorKind};

static NAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s]+$").expect("name pattern is valid"));

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

static NAME_RULES: LazyLock<FieldRules> = LazyLock::new(|| {
    FieldRules::new()
        .required("Name is required")
        .min_length(2, "Name must be at least 2 characters long")
        .pattern(
            NAME_CHARS.clone(),
            ValidationErrorKind::InvalidCharacters,
            "Name can only contain letters and spaces",
        )
});

static EMAIL_RULES: LazyLock<FieldRules> = LazyLock::new(|| {
    FieldRules::new().required("Email is required").pattern(
        EMAIL.clone(),
        ValidationErrorKind::InvalidFormat,
        "Please enter a valid email address",
    )
});

static MESSAGE_RULES: LazyLock<FieldRules> = LazyLock::new(|| {
    FieldRules::new()
        .required("Message is required")
        .min_length(10, "Message must be at least 10 characters long")
        .max_length(1000, "Message must be less than 1000 characters")
});

/// `local@domain.tld` with no whitespace and no extra `@`. Checks `value`
/// as given, without trimming.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

/// The contact form's fields. The element id, the `name` attribute and the
/// error container id (`<name>-error`) all derive from [`Field::name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    pub fn error_id(self) -> String {
        format!("{}-error", self.name())
    }

    pub fn rules(self) -> &'static FieldRules {
        match self {
            Field::Name => &NAME_RULES,
            Field::Email => &EMAIL_RULES,
            Field::Message => &MESSAGE_RULES,
        }
    }

    pub fn validate(self, raw: &str) -> Result<(), FieldError> {
        self.rules().check(self, raw)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
