//! Shared state contexts for Prompt All About It.
//!
//! The App component provides two signals to the whole tree: the
//! navigation-menu state and the screen-reader announcer state. Both wrap
//! pure types from `promptall-core`; components dispatch events into them
//! and render from the result.

use dioxus::prelude::*;
use promptall_core::{Announcement, AnnouncerState, MenuState};

/// Hook to access the navigation-menu state.
///
/// # Example
///
/// ```ignore
/// let mut menu = use_menu();
/// menu.set(menu().apply(MenuEvent::ToggleActivated));
/// ```
pub fn use_menu() -> Signal<MenuState> {
    use_context::<Signal<MenuState>>()
}

/// Hook to access the announcer state.
pub fn use_announcer() -> Signal<AnnouncerState> {
    use_context::<Signal<AnnouncerState>>()
}

/// Publish a polite announcement to the live region.
///
/// The Announcer component picks up the change and clears the region after
/// its display window; a newer announcement supersedes a pending one.
pub fn announce(mut announcer: Signal<AnnouncerState>, text: impl Into<String>) {
    announcer.write().announce(Announcement::polite(text));
}
