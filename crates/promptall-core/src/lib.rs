//! Prompt All About It Core Library
//!
//! Domain logic for the Green AI awareness site's interaction layer:
//! contact-form validation, mailto composition and mail-client handoff,
//! the navigation-menu state machine, and screen-reader announcements.
//!
//! ## Overview
//!
//! The site itself is a single page; everything stateful about it fits in
//! this crate as small pure types the UI renders from:
//!
//! - **Validation is table-driven**: each field is paired with its rules,
//!   every field is checked on every pass, and a pass always produces a
//!   fresh report, so errors never go stale.
//! - **Submission is a mailto handoff**: a passing submission becomes a
//!   percent-encoded `mailto:` URI handed to the operating system. There is
//!   no server and nothing is persisted.
//! - **Menu state is explicit**: one boolean advanced by a pure
//!   event-to-state function.
//!
//! ## Quick Start
//!
//! ```
//! use promptall_core::{validate, compose, ContactSubmission};
//!
//! let submission = ContactSubmission {
//!     name: "Alice".into(),
//!     email: "alice@example.com".into(),
//!     message: "This is a long enough message.".into(),
//!     ..Default::default()
//! };
//!
//! let report = validate(&submission);
//! assert!(report.passed());
//!
//! let uri = compose(&submission);
//! assert!(uri.starts_with("mailto:"));
//! ```

pub mod announce;
pub mod error;
pub mod mailto;
pub mod menu;
pub mod types;
pub mod validation;

// Re-exports
pub use announce::{Announcement, AnnouncerState, Politeness, LIVE_REGION_MILLIS};
pub use error::{ContactError, ContactResult};
pub use mailto::{compose, submit, RECIPIENT, SUBJECT};
pub use menu::{MenuEvent, MenuState, NavKey};
pub use types::{ContactSubmission, Field};
pub use validation::{
    is_valid_email, validate, FieldError, FieldRules, Rule, ValidationReport, CONTACT_RULES,
};
