//! Contact Form Component
//!
//! The validate-then-compose flow: on submit the previous errors are
//! dropped, every rule in the table runs, and either the failing fields get
//! their messages or the submission is handed to the system mail client and
//! the form gives way to the success panel.
//!
//! The submit button's "sending" presentation is purely cosmetic: it always
//! restores after two seconds, whatever the validation outcome. Each click
//! bumps a serial so a rapid re-click cancels the older pending restore
//! instead of racing it.

use std::time::Duration;

use dioxus::prelude::*;
use promptall_core::{ContactError, ContactSubmission, Field, ValidationReport};
use promptall_ui::{Button, Input, Select, TextArea};

use crate::components::anchor_link::scroll_to;
use crate::context::{announce, use_announcer};

/// How long the submit button keeps its "sending" presentation
const SENDING_RESTORE_MILLIS: u64 = 2_000;

/// Idle and busy labels for the submit button
const SEND_LABEL: &str = "Send Green Message";
const SENDING_LABEL: &str = "Sending Green Message...";

/// Options for the interest dropdown; the empty value is the placeholder
fn interest_options() -> Vec<(String, String)> {
    [
        ("", "Select a topic..."),
        ("energy-aware-prompting", "Energy-aware prompting"),
        ("green-hosting", "Green hosting and data centers"),
        ("model-efficiency", "Efficient model choices"),
        ("community-action", "Community action"),
    ]
    .into_iter()
    .map(|(value, label)| (value.to_string(), label.to_string()))
    .collect()
}

/// Contact form with client-side validation and mailto handoff
#[component]
pub fn ContactForm() -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut interest = use_signal(String::new);
    let mut barriers = use_signal(String::new);
    let mut message = use_signal(String::new);

    let mut report: Signal<ValidationReport> = use_signal(ValidationReport::default);
    let mut submitted = use_signal(|| false);
    let mut sending = use_signal(|| false);
    let mut sending_serial = use_signal(|| 0u64);

    let announcer = use_announcer();

    let handle_submit = move |event: MouseEvent| {
        event.prevent_default();

        // Transient sending state, restored unconditionally after the
        // delay. The serial cancels restores from superseded clicks.
        let serial = sending_serial() + 1;
        sending_serial.set(serial);
        sending.set(true);
        spawn(async move {
            tokio::time::sleep(Duration::from_millis(SENDING_RESTORE_MILLIS)).await;
            if *sending_serial.peek() == serial {
                sending.set(false);
            }
        });

        let entry = ContactSubmission {
            name: name(),
            email: email(),
            interest: interest(),
            barriers: barriers(),
            message: message(),
        };

        let mut show_success = move || {
            report.set(ValidationReport::default());
            submitted.set(true);
            announce(
                announcer,
                "Message prepared. Your mail client should now be open.",
            );
            scroll_to("success-message");
        };

        match promptall_core::submit(&entry) {
            Ok(_) => show_success(),
            Err(ContactError::Rejected(rejection)) => {
                announce(
                    announcer,
                    format!("{} form fields need attention", rejection.error_count()),
                );
                report.set(rejection);
            }
            Err(ContactError::MailClient(err)) => {
                // The handoff outcome is not observable to the page; the
                // success state is shown regardless.
                tracing::error!("mail client handoff failed: {}", err);
                show_success();
            }
        }
    };

    rsx! {
        if submitted() {
            div { id: "success-message", class: "success-message",
                h3 { "Thank you for reaching out!" }
                p {
                    "Your message is on its way. We read everything and reply to "
                    "every genuine note about greener AI."
                }
            }
        } else {
            form { id: "contact-form", class: "contact-form",
                Input {
                    id: "name".to_string(),
                    value: name(),
                    oninput: move |value| name.set(value),
                    label: "Name".to_string(),
                    placeholder: "Your name".to_string(),
                    required: true,
                    error: report().message_for(Field::Name).map(str::to_string),
                }

                Input {
                    id: "email".to_string(),
                    value: email(),
                    oninput: move |value| email.set(value),
                    label: "Email".to_string(),
                    input_type: "email".to_string(),
                    placeholder: "you@example.com".to_string(),
                    required: true,
                    error: report().message_for(Field::Email).map(str::to_string),
                }

                Select {
                    id: "interest".to_string(),
                    value: interest(),
                    onchange: move |value| interest.set(value),
                    options: interest_options(),
                    label: "What interests you most?".to_string(),
                    hint: "optional".to_string(),
                }

                TextArea {
                    id: "barriers".to_string(),
                    value: barriers(),
                    oninput: move |value| barriers.set(value),
                    label: "What holds you back from greener AI habits?".to_string(),
                    hint: "optional".to_string(),
                    rows: 2,
                }

                TextArea {
                    id: "message".to_string(),
                    value: message(),
                    oninput: move |value| message.set(value),
                    label: "Message".to_string(),
                    placeholder: "Tell us what you'd like to see...".to_string(),
                    rows: 5,
                    required: true,
                    error: report().message_for(Field::Message).map(str::to_string),
                }

                Button {
                    id: "submit-btn".to_string(),
                    button_type: "submit".to_string(),
                    busy: sending(),
                    busy_label: SENDING_LABEL.to_string(),
                    onclick: handle_submit,
                    {SEND_LABEL}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_labels() {
        assert_eq!(SEND_LABEL, "Send Green Message");
        assert_eq!(SENDING_LABEL, "Sending Green Message...");
        assert_eq!(SENDING_RESTORE_MILLIS, 2_000);
    }

    #[test]
    fn interest_options_lead_with_placeholder() {
        let options = interest_options();
        assert_eq!(options[0].0, "");
        assert!(options.len() > 1);
        // all real options carry non-empty values
        assert!(options[1..].iter().all(|(value, _)| !value.is_empty()));
    }
}
