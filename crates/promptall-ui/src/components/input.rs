//! Form Field Components
//!
//! Text inputs, textareas and selects for the contact form. Every field
//! renders an error slot (`<field id>-error`, class `error-message`) right
//! below it; the slot is empty while the field is valid and carries the
//! validation message when it is not.

use dioxus::prelude::*;

/// Error slot element id for a field id
fn error_slot_id(field_id: &str) -> String {
    format!("{}-error", field_id)
}

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Element id, also the base for the error slot id
    pub id: String,
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Input label text
    #[props(default)]
    pub label: Option<String>,
    /// Hint text after the label (e.g., "optional")
    #[props(default)]
    pub hint: Option<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input type (text, email, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Whether the input is required
    #[props(default = false)]
    pub required: bool,
    /// Validation message for this field, if any
    #[props(default)]
    pub error: Option<String>,
}

/// Single-line text input with label and error slot
///
/// # Example
///
/// ```rust,ignore
/// let mut name = use_signal(String::new);
///
/// rsx! {
///     Input {
///         id: "name".to_string(),
///         value: name(),
///         oninput: move |s| name.set(s),
///         label: "Name".to_string(),
///         required: true,
///         error: report().message_for(Field::Name).map(str::to_string),
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let error_id = error_slot_id(&props.id);

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label {
                    class: "input-label",
                    r#for: "{props.id}",
                    "{label}"
                    if let Some(hint) = &props.hint {
                        span { class: "input-hint", " ({hint})" }
                    }
                }
            }
            input {
                id: "{props.id}",
                class: "input-field",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                "aria-describedby": "{error_id}",
                oninput: move |e| props.oninput.call(e.value()),
            }
            span {
                id: "{error_id}",
                class: "error-message",
                {props.error.as_deref().unwrap_or("")}
            }
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    /// Element id, also the base for the error slot id
    pub id: String,
    /// Current textarea value
    pub value: String,
    /// Handler called when the value changes
    pub oninput: EventHandler<String>,
    /// Label text
    #[props(default)]
    pub label: Option<String>,
    /// Hint text after the label
    #[props(default)]
    pub hint: Option<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Number of visible rows
    #[props(default = 4)]
    pub rows: u32,
    /// Whether the textarea is required
    #[props(default = false)]
    pub required: bool,
    /// Validation message for this field, if any
    #[props(default)]
    pub error: Option<String>,
}

/// Multi-line text input with label and error slot
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let error_id = error_slot_id(&props.id);

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label {
                    class: "input-label",
                    r#for: "{props.id}",
                    "{label}"
                    if let Some(hint) = &props.hint {
                        span { class: "input-hint", " ({hint})" }
                    }
                }
            }
            textarea {
                id: "{props.id}",
                class: "input-field textarea",
                rows: "{props.rows}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                "aria-describedby": "{error_id}",
                oninput: move |e| props.oninput.call(e.value()),
            }
            span {
                id: "{error_id}",
                class: "error-message",
                {props.error.as_deref().unwrap_or("")}
            }
        }
    }
}

/// Properties for the Select component
#[derive(Clone, PartialEq, Props)]
pub struct SelectProps {
    /// Element id, also the base for the error slot id
    pub id: String,
    /// Currently selected option value
    pub value: String,
    /// Handler called when the selection changes
    pub onchange: EventHandler<String>,
    /// (value, label) pairs; an empty value marks the placeholder option
    pub options: Vec<(String, String)>,
    /// Label text
    #[props(default)]
    pub label: Option<String>,
    /// Hint text after the label
    #[props(default)]
    pub hint: Option<String>,
    /// Validation message for this field, if any
    #[props(default)]
    pub error: Option<String>,
}

/// Dropdown selection with label and error slot
#[component]
pub fn Select(props: SelectProps) -> Element {
    let error_id = error_slot_id(&props.id);

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label {
                    class: "input-label",
                    r#for: "{props.id}",
                    "{label}"
                    if let Some(hint) = &props.hint {
                        span { class: "input-hint", " ({hint})" }
                    }
                }
            }
            select {
                id: "{props.id}",
                class: "input-field select",
                value: "{props.value}",
                "aria-describedby": "{error_id}",
                onchange: move |e| props.onchange.call(e.value()),
                for (value, text) in props.options.iter() {
                    option {
                        value: "{value}",
                        selected: *value == props.value,
                        "{text}"
                    }
                }
            }
            span {
                id: "{error_id}",
                class: "error-message",
                {props.error.as_deref().unwrap_or("")}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_slot_ids_follow_the_page_convention() {
        assert_eq!(error_slot_id("name"), "name-error");
        assert_eq!(error_slot_id("email"), "email-error");
        assert_eq!(error_slot_id("message"), "message-error");
    }

    #[test]
    fn error_slot_id_matches_core_fields() {
        use promptall_core::Field;
        for field in Field::ALL {
            assert_eq!(error_slot_id(field.id()), field.error_id());
        }
    }
}
