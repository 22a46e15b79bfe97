use regex::Regex;

use super::{Field, FieldError, ValidationErrorKind};

#[derive(Debug, Clone)]
enum Check {
    Required,
    MinLength(usize),
    MaxLength(usize),
    Pattern(Regex),
}

/// Length in UTF-16 code units, the unit form controls report.
fn text_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Whitespace plus the byte order mark, which form controls also strip.
fn trim_input(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

#[derive(Debug, Clone)]
struct Rule {
    check: Check,
    kind: ValidationErrorKind,
    message: String,
}

impl Rule {
    fn passes(&self, value: &str) -> bool {
        match &self.check {
            Check::Required => !value.is_empty(),
            Check::MinLength(min) => text_len(value) >= *min,
            Check::MaxLength(max) => text_len(value) <= *max,
            Check::Pattern(re) => re.is_match(value),
        }
    }
}

/// Ordered rules for one field.
///
/// ```
/// use portfolio::validation::{Field, FieldRules};
///
/// let rules = FieldRules::new()
///     .required("Code is required")
///     .max_length(4, "Code is too long");
///
/// assert!(rules.check(Field::Message, "abcd").is_ok());
/// assert!(rules.check(Field::Message, "   ").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct FieldRules {
    rules: Vec<Rule>,
}

impl FieldRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require the field to be non-empty.
    pub fn required(self, msg: impl Into<String>) -> Self {
        self.push(Check::Required, ValidationErrorKind::Required, msg)
    }

    /// Require minimum length (in UTF-16 code units).
    pub fn min_length(self, min: usize, msg: impl Into<String>) -> Self {
        self.push(Check::MinLength(min), ValidationErrorKind::TooShort, msg)
    }

    /// Require maximum length (in UTF-16 code units).
    pub fn max_length(self, max: usize, msg: impl Into<String>) -> Self {
        self.push(Check::MaxLength(max), ValidationErrorKind::TooLong, msg)
    }

    /// Require the whole value to match `re`. Anchor the pattern yourself.
    pub fn pattern(self, re: Regex, kind: ValidationErrorKind, msg: impl Into<String>) -> Self {
        self.push(Check::Pattern(re), kind, msg)
    }

    fn push(mut self, check: Check, kind: ValidationErrorKind, msg: impl Into<String>) -> Self {
        self.rules.push(Rule {
            check,
            kind,
            message: msg.into(),
        });
        self
    }

    /// Trim `raw` and run the rules in order; the first failure wins.
    pub fn check(&self, field: Field, raw: &str) -> Result<(), FieldError> {
        let value = trim_input(raw);
        match self.rules.iter().find(|rule| !rule.passes(value)) {
            Some(rule) => Err(FieldError {
                field,
                kind: rule.kind,
                message: rule.message.clone(),
            }),
            None => Ok(()),
        }
    }
}
