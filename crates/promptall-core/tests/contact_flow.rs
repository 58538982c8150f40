//! End-to-end contact-form scenarios over the public API.
//!
//! These mirror the two canonical user journeys: a submission with several
//! bad fields, and a clean submission that composes a mailto handoff.

use promptall_core::{
    compose, submit, validate, ContactError, ContactSubmission, Field, MenuEvent, MenuState,
    NavKey, SUBJECT,
};

#[test]
fn rejected_submission_reports_exactly_the_failing_fields() {
    let entry = ContactSubmission {
        name: "Al".into(),
        email: "bad".into(),
        message: "short".into(),
        ..Default::default()
    };

    let report = validate(&entry);
    assert!(!report.passed());
    assert_eq!(report.error_count(), 2);
    assert!(report.message_for(Field::Name).is_none());
    assert_eq!(
        report.message_for(Field::Email),
        Some("Please enter a valid email address")
    );
    assert_eq!(
        report.message_for(Field::Message),
        Some("Message must be at least 10 characters")
    );

    // submit() halts on the same report without reaching the OS
    match submit(&entry) {
        Err(ContactError::Rejected(rejection)) => assert_eq!(rejection, report),
        other => panic!("expected rejection, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn clean_submission_composes_the_expected_handoff() {
    let entry = ContactSubmission {
        name: "Alice".into(),
        email: "alice@example.com".into(),
        interest: String::new(),
        barriers: String::new(),
        message: "This is a long enough message.".into(),
    };

    assert!(validate(&entry).passed());

    let uri = compose(&entry);
    assert!(uri.starts_with("mailto:1800NewFree@gmail.com?subject="));

    let (subject, body) = {
        let query = uri.split_once('?').expect("query part").1;
        let mut subject = None;
        let mut body = None;
        for pair in query.split('&') {
            let (key, value) = pair.split_once('=').expect("key=value");
            match key {
                "subject" => subject = Some(urlencoding::decode(value).unwrap().into_owned()),
                "body" => body = Some(urlencoding::decode(value).unwrap().into_owned()),
                other => panic!("unexpected query key {other}"),
            }
        }
        (subject.expect("subject"), body.expect("body"))
    };

    assert_eq!(subject, SUBJECT);
    assert_eq!(
        subject,
        "Green AI Contact Form Submission - Prompt All About It"
    );
    assert!(body.contains("Name: Alice"));
    assert!(body.contains("Email: alice@example.com"));
    assert!(body.contains("Interest: Not specified"));
    assert!(body.contains("Barriers: None specified"));
    assert!(body.ends_with("Message:\nThis is a long enough message."));
}

#[test]
fn fixing_fields_between_passes_clears_their_errors() {
    let mut entry = ContactSubmission {
        name: String::new(),
        email: "nearly@valid".into(),
        message: "long enough message here".into(),
        ..Default::default()
    };

    let first = validate(&entry);
    assert_eq!(first.error_count(), 2);

    entry.name = "Alice".into();
    entry.email = "nearly@valid.example".into();
    let second = validate(&entry);
    assert!(second.passed());
    assert!(second.message_for(Field::Name).is_none());
    assert!(second.message_for(Field::Email).is_none());
}

#[test]
fn menu_walkthrough_open_navigate_close() {
    let mut menu = MenuState::default();

    // open via keyboard, close by following a link
    menu = menu.apply(MenuEvent::ToggleKey(NavKey::Space));
    assert!(menu.open);
    menu = menu.apply(MenuEvent::LinkFollowed);
    assert!(!menu.open);

    // open via click, close by clicking elsewhere on the page
    menu = menu.apply(MenuEvent::ToggleActivated);
    assert!(menu.open);
    menu = menu.apply(MenuEvent::OutsideClicked);
    assert!(!menu.open);
}
