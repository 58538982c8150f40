//! Navigation Menu Component
//!
//! Site header with brand, hamburger toggle and the nav link list. On
//! narrow windows the link list collapses behind the hamburger; the
//! `active` class on the menu container mirrors the open state.
//!
//! Opening and closing all route through the pure state machine in
//! `promptall_core::menu`; the page root reports outside clicks and the
//! header swallows its own, so a click inside the nav never counts as
//! outside.

use dioxus::prelude::*;
use promptall_core::{MenuEvent, NavKey};
use promptall_ui::IconButton;

use crate::components::AnchorLink;
use crate::context::use_menu;

/// Section links shown in the nav, in order
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#about", "What Is Green AI"),
    ("#tips", "Greener Prompting"),
    ("#contact", "Contact"),
];

/// Map a key pressed on the hamburger to the key the menu cares about
fn nav_key_of(key: &Key) -> NavKey {
    match key {
        Key::Enter => NavKey::Enter,
        Key::Character(c) if c == " " => NavKey::Space,
        _ => NavKey::Other,
    }
}

/// Site header with hamburger-collapsible navigation
#[component]
pub fn NavMenu() -> Element {
    let mut menu = use_menu();

    let handle_toggle_click = move |_| {
        menu.set(menu().apply(MenuEvent::ToggleActivated));
    };

    let handle_toggle_key = move |event: KeyboardEvent| {
        let key = nav_key_of(&event.key());
        if key.is_activation() {
            event.prevent_default();
            menu.set(menu().apply(MenuEvent::ToggleKey(key)));
        }
    };

    let close_on_follow = move |_| {
        menu.set(menu().apply(MenuEvent::LinkFollowed));
    };

    rsx! {
        header { class: "site-header",
            div {
                class: "nav-inner",
                // clicks inside the header are never "outside" the menu
                onclick: move |event| event.stop_propagation(),

                div { class: "nav-brand",
                    span { class: "brand-leaf", "\u{1F331}" }
                    span { class: "brand-name", "Prompt All About It" }
                }

                IconButton {
                    id: "hamburger".to_string(),
                    class: "hamburger".to_string(),
                    aria_label: "Toggle navigation menu".to_string(),
                    aria_expanded: menu().open,
                    onclick: handle_toggle_click,
                    onkeydown: handle_toggle_key,

                    span { class: "hamburger-bar" }
                    span { class: "hamburger-bar" }
                    span { class: "hamburger-bar" }
                }

                nav { id: "nav-menu", class: menu().css_class(),
                    for (href, label) in NAV_LINKS.iter() {
                        AnchorLink {
                            href: href.to_string(),
                            class: "nav-link".to_string(),
                            onfollow: close_on_follow,
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptall_core::MenuState;

    #[test]
    fn nav_links_target_page_sections() {
        for (href, _) in NAV_LINKS {
            assert!(href.starts_with('#'), "{href} must be an in-page anchor");
        }
        assert_eq!(NAV_LINKS.first(), Some(&("#home", "Home")));
        assert_eq!(NAV_LINKS.last(), Some(&("#contact", "Contact")));
    }

    #[test]
    fn menu_class_switches_with_state() {
        assert_eq!(MenuState { open: true }.css_class(), "nav-menu active");
        assert_eq!(MenuState { open: false }.css_class(), "nav-menu");
    }

    #[test]
    fn enter_and_space_activate_the_toggle() {
        assert_eq!(nav_key_of(&Key::Enter), NavKey::Enter);
        assert_eq!(nav_key_of(&Key::Character(" ".to_string())), NavKey::Space);
        assert_eq!(
            nav_key_of(&Key::Character("a".to_string())),
            NavKey::Other
        );
        assert_eq!(nav_key_of(&Key::Escape), NavKey::Other);
    }
}
