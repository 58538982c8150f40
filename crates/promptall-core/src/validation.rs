//! Contact-form validation.
//!
//! Validation is table-driven: [`CONTACT_RULES`] pairs each field with the
//! rules that apply to it, and [`validate`] runs the whole table, producing
//! a fresh [`ValidationReport`] per pass. Every field is evaluated even
//! after an earlier one fails, so several errors can show at once; within a
//! single field the first failing rule wins.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{ContactSubmission, Field};

/// Permissive email shape: something, `@`, something, a dot, something.
/// Deliberately not RFC-complete.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Whether a string looks like an email address
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// A single validation rule, checked against the trimmed field value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Non-empty after trimming
    Required,
    /// At least this many characters after trimming
    MinLength(usize),
    /// Matches the permissive email shape
    EmailFormat,
}

impl Rule {
    /// Returns true when the value passes this rule
    pub fn check(&self, value: &str) -> bool {
        let trimmed = value.trim();
        match self {
            Rule::Required => !trimmed.is_empty(),
            Rule::MinLength(min) => trimmed.chars().count() >= *min,
            Rule::EmailFormat => is_valid_email(trimmed),
        }
    }

    /// The user-facing message shown when this rule fails for `field`
    pub fn message(&self, field: Field) -> String {
        match self {
            Rule::Required => format!("{} is required", field.label()),
            Rule::MinLength(min) => {
                format!("{} must be at least {} characters", field.label(), min)
            }
            Rule::EmailFormat => "Please enter a valid email address".to_string(),
        }
    }
}

/// A field together with its rules, in evaluation order
#[derive(Debug, Clone, Copy)]
pub struct FieldRules {
    pub field: Field,
    pub rules: &'static [Rule],
}

/// The contact form's rule table. Interest and barriers are optional and
/// carry no rules.
pub const CONTACT_RULES: &[FieldRules] = &[
    FieldRules {
        field: Field::Name,
        rules: &[Rule::Required, Rule::MinLength(2)],
    },
    FieldRules {
        field: Field::Email,
        rules: &[Rule::Required, Rule::EmailFormat],
    },
    FieldRules {
        field: Field::Message,
        rules: &[Rule::Required, Rule::MinLength(10)],
    },
];

/// One failed field with its message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

/// Outcome of one validation pass.
///
/// A report is built fresh on every pass, so an error never outlives the
/// pass that produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<FieldError>,
}

impl ValidationReport {
    /// True when no field failed
    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of failed fields
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// The message for a field, or None when the field passed
    pub fn message_for(&self, field: Field) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// All failed fields in form order
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }
}

impl std::fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.errors.is_empty() {
            return write!(f, "all fields valid");
        }
        let joined = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{}", joined)
    }
}

/// Run the full rule table against a submission
pub fn validate(submission: &ContactSubmission) -> ValidationReport {
    let mut errors = Vec::new();
    for entry in CONTACT_RULES {
        let value = submission.value(entry.field);
        if let Some(rule) = entry.rules.iter().find(|rule| !rule.check(value)) {
            errors.push(FieldError {
                field: entry.field,
                message: rule.message(entry.field),
            });
        }
    }
    ValidationReport { errors }
}
