use dioxus::prelude::*;
use promptall_core::{AnnouncerState, MenuState};

use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// The site is a single page; in-page navigation happens via smooth-scroll
/// anchors, not routing.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
}

/// Root application component.
///
/// Injects the global stylesheet once per launch (including the `.sr-only`
/// rule the live region depends on) and provides the menu and announcer
/// state to all child components.
#[component]
pub fn App() -> Element {
    let menu: Signal<MenuState> = use_signal(MenuState::default);
    let announcer: Signal<AnnouncerState> = use_signal(AnnouncerState::default);

    use_context_provider(|| menu);
    use_context_provider(|| announcer);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
