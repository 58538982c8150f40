//! Error types for Prompt All About It

use thiserror::Error;

use crate::validation::ValidationReport;

/// Main error type for contact-form operations
#[derive(Error, Debug)]
pub enum ContactError {
    /// Submission failed validation; the report carries per-field messages
    #[error("submission rejected: {0}")]
    Rejected(ValidationReport),

    /// The operating system could not hand the mailto URI to a mail client
    #[error("mail client error: {0}")]
    MailClient(#[from] std::io::Error),
}

/// Result type alias using ContactError
pub type ContactResult<T> = Result<T, ContactError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ContactSubmission;
    use crate::validation::validate;

    #[test]
    fn test_error_display_rejected() {
        let report = validate(&ContactSubmission::default());
        let err = ContactError::Rejected(report);
        assert!(format!("{}", err).starts_with("submission rejected:"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no handler");
        let err: ContactError = io_err.into();
        assert!(matches!(err, ContactError::MailClient(_)));
    }
}
