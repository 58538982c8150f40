//! Mailto composition and mail-client handoff.
//!
//! A passing submission becomes a `mailto:` URI whose body is a fixed-order
//! rendering of the form fields, percent-encoded per URI component rules.
//! The URI is handed to the operating system, which resolves the user's
//! mail client; whether that client actually opens is not observable here.

use crate::error::{ContactError, ContactResult};
use crate::types::ContactSubmission;
use crate::validation::validate;

/// Where submissions are addressed
pub const RECIPIENT: &str = "1800NewFree@gmail.com";

/// Fixed subject line for every submission
pub const SUBJECT: &str = "Green AI Contact Form Submission - Prompt All About It";

/// Build the mailto URI for a submission.
///
/// Name, email and message are trimmed. The interest selection is used as
/// selected (a select control never needs trimming) and defaults to
/// "Not specified"; barriers is trimmed and defaults to "None specified".
pub fn compose(submission: &ContactSubmission) -> String {
    let interest = if submission.interest.is_empty() {
        "Not specified"
    } else {
        &submission.interest
    };
    let barriers = match submission.barriers.trim() {
        "" => "None specified",
        trimmed => trimmed,
    };

    let body = format!(
        "Name: {}\nEmail: {}\nInterest: {}\nBarriers: {}\n\nMessage:\n{}",
        submission.name.trim(),
        submission.email.trim(),
        interest,
        barriers,
        submission.message.trim(),
    );

    format!(
        "mailto:{}?subject={}&body={}",
        RECIPIENT,
        urlencoding::encode(SUBJECT),
        urlencoding::encode(&body),
    )
}

/// Validate a submission and, when it passes, hand the composed mailto URI
/// to the system mail client.
///
/// Returns the composed URI on success. A failing validation pass is
/// returned as [`ContactError::Rejected`] without touching the OS.
pub fn submit(submission: &ContactSubmission) -> ContactResult<String> {
    let report = validate(submission);
    if !report.passed() {
        tracing::debug!(errors = report.error_count(), "contact submission rejected");
        return Err(ContactError::Rejected(report));
    }

    let uri = compose(submission);
    open::that(&uri)?;
    tracing::info!("handed contact submission to the system mail client");
    Ok(uri)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Field;

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "Alice".into(),
            email: "alice@example.com".into(),
            interest: String::new(),
            barriers: String::new(),
            message: "This is a long enough message.".into(),
        }
    }

    #[test]
    fn test_compose_addresses_and_subject() {
        let uri = compose(&submission());
        assert!(uri.starts_with("mailto:1800NewFree@gmail.com?subject="));
        assert!(uri.contains(&*urlencoding::encode(SUBJECT)));
    }

    #[test]
    fn test_compose_defaults_for_blank_optionals() {
        let uri = compose(&submission());
        let body = uri.split("&body=").nth(1).expect("body segment");
        let decoded = urlencoding::decode(body).expect("valid encoding");
        assert!(decoded.contains("Interest: Not specified"));
        assert!(decoded.contains("Barriers: None specified"));
    }

    #[test]
    fn test_compose_body_order_and_trimming() {
        let mut entry = submission();
        entry.name = "  Alice  ".into();
        entry.interest = "green-hosting".into();
        entry.barriers = "  cost  ".into();
        let uri = compose(&entry);
        let body = uri.split("&body=").nth(1).expect("body segment");
        let decoded = urlencoding::decode(body).expect("valid encoding");
        assert_eq!(
            decoded,
            "Name: Alice\nEmail: alice@example.com\nInterest: green-hosting\n\
             Barriers: cost\n\nMessage:\nThis is a long enough message."
        );
    }

    #[test]
    fn test_compose_percent_encodes_body() {
        let mut entry = submission();
        entry.message = "Lines & ampersands = trouble?".into();
        let uri = compose(&entry);
        let body = uri.split("&body=").nth(1).expect("body segment");
        assert!(!body.contains('&'));
        assert!(!body.contains('='));
        assert!(!body.contains('\n'));
        assert!(body.contains("%26"));
        assert!(body.contains("%3D"));
        assert!(body.contains("%0A"));
    }

    #[test]
    fn test_submit_rejects_before_any_handoff() {
        let entry = ContactSubmission {
            name: "Al".into(),
            email: "bad".into(),
            message: "short".into(),
            ..Default::default()
        };
        match submit(&entry) {
            Err(ContactError::Rejected(report)) => {
                assert!(report.message_for(Field::Email).is_some());
                assert!(report.message_for(Field::Message).is_some());
                assert!(report.message_for(Field::Name).is_none());
            }
            other => panic!("expected rejection, got {:?}", other.map(|_| ())),
        }
    }
}
