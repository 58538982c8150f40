//! Smooth-Scroll Anchor Links
//!
//! In-page links whose href is a fragment (`#section`) suppress the default
//! jump and animate the target into view instead. The scroll runs as a
//! small script in the webview; a fragment with no matching element is a
//! no-op.

use dioxus::document;
use dioxus::prelude::*;

/// The fragment identifier of an href, when it is an in-page anchor.
///
/// A bare `#` carries no target and is not treated as an anchor.
pub fn fragment_of(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|fragment| !fragment.is_empty())
}

/// Script that animates the element with `target_id` into view, aligning
/// its top edge with the viewport. Null-guarded: a missing element leaves
/// the scroll position untouched.
pub fn scroll_snippet(target_id: &str) -> String {
    format!(
        "const el = document.getElementById('{}'); \
         if (el) el.scrollIntoView({{ behavior: 'smooth', block: 'start' }});",
        target_id
    )
}

/// Smooth-scroll the element with `target_id` into view
pub fn scroll_to(target_id: &str) {
    let _ = document::eval(&scroll_snippet(target_id));
}

/// Properties for the AnchorLink component
#[derive(Clone, PartialEq, Props)]
pub struct AnchorLinkProps {
    /// Link target; fragments get smooth-scroll handling
    pub href: String,
    /// Link content
    pub children: Element,
    /// Optional CSS classes
    #[props(default)]
    pub class: Option<String>,
    /// Called after the link is followed (e.g., to close the nav menu)
    #[props(default)]
    pub onfollow: Option<EventHandler<()>>,
}

/// Anchor element with smooth scrolling for in-page fragments
#[component]
pub fn AnchorLink(props: AnchorLinkProps) -> Element {
    let href = props.href.clone();

    rsx! {
        a {
            class: props.class.as_deref().unwrap_or(""),
            href: "{props.href}",
            onclick: move |event| {
                if let Some(target) = fragment_of(&href) {
                    event.prevent_default();
                    scroll_to(target);
                }
                if let Some(handler) = &props.onfollow {
                    handler.call(());
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
    fn fragment_of_recognizes_anchors() {
        assert_eq!(fragment_of("#contact"), Some("contact"));
        assert_eq!(fragment_of("#home"), Some("home"));
    }

    #[test]
    fn fragment_of_rejects_non_anchors() {
        assert_eq!(fragment_of("https://example.com"), None);
        assert_eq!(fragment_of("/about"), None);
        assert_eq!(fragment_of("#"), None);
        assert_eq!(fragment_of(""), None);
    }

    #[test]
    fn scroll_snippet_guards_missing_targets() {
        let snippet = scroll_snippet("contact");
        assert!(snippet.contains("getElementById('contact')"));
        assert!(snippet.contains("if (el)"));
        assert!(snippet.contains("behavior: 'smooth'"));
        assert!(snippet.contains("block: 'start'"));
    }
}
