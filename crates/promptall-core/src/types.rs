//! Core types for Prompt All About It

use serde::{Deserialize, Serialize};

/// A single contact-form submission, captured at submit time.
///
/// Values are stored exactly as entered; trimming happens in the
/// validation rules and the mailto body rendering, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    /// Optional topic selection
    pub interest: String,
    /// Optional free text about adoption barriers
    pub barriers: String,
    pub message: String,
}

impl ContactSubmission {
    /// Read the raw value for a field
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Interest => &self.interest,
            Field::Barriers => &self.barriers,
            Field::Message => &self.message,
        }
    }
}

/// The contact-form fields.
///
/// `id()` and `error_id()` give the element identifiers the page binds to
/// (`name` / `name-error` and so on).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Name,
    Email,
    Interest,
    Barriers,
    Message,
}

impl Field {
    /// All fields in form order
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Email,
        Field::Interest,
        Field::Barriers,
        Field::Message,
    ];

    /// Element identifier of the input
    pub fn id(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Interest => "interest",
            Field::Barriers => "barriers",
            Field::Message => "message",
        }
    }

    /// Element identifier of the field's error text slot
    pub fn error_id(&self) -> String {
        format!("{}-error", self.id())
    }

    /// Human-readable label, also the subject of validation messages
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Interest => "Interest",
            Field::Barriers => "Barriers",
            Field::Message => "Message",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}
