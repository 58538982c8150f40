//! Button Components
//!
//! Button styles for the site:
//! - Primary: main actions (the contact form's submit)
//! - Hero: large call-to-action in the page header
//! - Ghost: subtle secondary actions
//!
//! A button can be put into a transient busy state, which dims it and swaps
//! its label for a busy label until the caller restores it.

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Primary action button
    #[default]
    Primary,
    /// Large hero call-to-action
    Hero,
    /// Subtle secondary action
    Ghost,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Hero => "btn btn-hero",
            ButtonVariant::Ghost => "btn btn-ghost",
        }
    }
}

/// Compute the full class list for a button, appending the busy marker
/// while the transient state is active.
fn button_class(variant: ButtonVariant, busy: bool) -> String {
    if busy {
        format!("{} btn-busy", variant.class())
    } else {
        variant.class().to_string()
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content shown while idle
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Transient busy state: dimmed, label swapped for `busy_label`
    #[props(default = false)]
    pub busy: bool,
    /// Label shown while busy
    #[props(default)]
    pub busy_label: Option<String>,
    /// Optional element id
    #[props(default)]
    pub id: Option<String>,
    /// Optional type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
}

/// Styled button with an optional transient busy presentation
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         id: "submit-btn".to_string(),
///         busy: sending(),
///         busy_label: "Sending Green Message...".to_string(),
///         onclick: handle_submit,
///         "Send Green Message"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let class = button_class(props.variant, props.busy);

    rsx! {
        button {
            id: props.id.as_deref().unwrap_or(""),
            class: "{class}",
            r#type: "{props.button_type}",
            disabled: props.disabled,
            onclick: move |event| {
                if let Some(handler) = &props.onclick {
                    handler.call(event);
                }
            },
            if props.busy {
                {props.busy_label.as_deref().unwrap_or("Working...")}
            } else {
                {props.children}
            }
        }
    }
}

/// Icon button for compact controls (the hamburger toggle)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<MouseEvent>,
    /// Key handler, for controls that activate from the keyboard
    #[props(default)]
    pub onkeydown: Option<EventHandler<KeyboardEvent>>,
    /// Accessible label for screen readers
    pub aria_label: String,
    /// Whether the control it toggles is expanded
    #[props(default)]
    pub aria_expanded: Option<bool>,
    /// Optional element id
    #[props(default)]
    pub id: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let extra_class = props.class.as_deref().unwrap_or("");
    let full_class = if extra_class.is_empty() {
        "icon-btn".to_string()
    } else {
        format!("icon-btn {}", extra_class)
    };

    rsx! {
        button {
            id: props.id.as_deref().unwrap_or(""),
            class: "{full_class}",
            "aria-label": "{props.aria_label}",
            "aria-expanded": props.aria_expanded.map(|expanded| expanded.to_string()),
            onclick: move |event| props.onclick.call(event),
            onkeydown: move |event| {
                if let Some(handler) = &props.onkeydown {
                    handler.call(event);
                }
            },
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn btn-primary");
        assert_eq!(ButtonVariant::Hero.class(), "btn btn-hero");
        assert_eq!(ButtonVariant::Ghost.class(), "btn btn-ghost");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }

    #[test]
    fn busy_appends_marker_class() {
        assert_eq!(
            button_class(ButtonVariant::Primary, true),
            "btn btn-primary btn-busy"
        );
        assert_eq!(button_class(ButtonVariant::Primary, false), "btn btn-primary");
    }
}
