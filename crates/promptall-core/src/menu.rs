//! Navigation menu state machine.
//!
//! The menu's entire state is one boolean; every user action maps to a
//! [`MenuEvent`] and [`MenuState::apply`] computes the next state as a pure
//! function, so the component is a single render step over the result.

use serde::{Deserialize, Serialize};

/// Whether the navigation menu is open
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuState {
    pub open: bool,
}

/// A key pressed on the hamburger control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Enter,
    Space,
    Other,
}

impl NavKey {
    /// Enter and Space activate the toggle; other keys fall through to the
    /// default key action.
    pub fn is_activation(&self) -> bool {
        !matches!(self, NavKey::Other)
    }
}

/// User actions that drive the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// Hamburger clicked
    ToggleActivated,
    /// Key pressed while the hamburger is focused
    ToggleKey(NavKey),
    /// A navigation link was followed
    LinkFollowed,
    /// Click landed outside both the hamburger and the menu
    OutsideClicked,
}

impl MenuState {
    /// Next state for an event
    #[must_use]
    pub fn apply(self, event: MenuEvent) -> MenuState {
        match event {
            MenuEvent::ToggleActivated => MenuState { open: !self.open },
            MenuEvent::ToggleKey(key) if key.is_activation() => MenuState { open: !self.open },
            MenuEvent::ToggleKey(_) => self,
            MenuEvent::LinkFollowed | MenuEvent::OutsideClicked => MenuState { open: false },
        }
    }

    /// CSS class for the menu container
    pub fn css_class(&self) -> &'static str {
        if self.open {
            "nav-menu active"
        } else {
            "nav-menu"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_state() {
        let closed = MenuState::default();
        let opened = closed.apply(MenuEvent::ToggleActivated);
        assert!(opened.open);
        let closed_again = opened.apply(MenuEvent::ToggleActivated);
        assert!(!closed_again.open);
    }

    #[test]
    fn test_enter_and_space_toggle() {
        let state = MenuState::default();
        assert!(state.apply(MenuEvent::ToggleKey(NavKey::Enter)).open);
        assert!(state.apply(MenuEvent::ToggleKey(NavKey::Space)).open);
    }

    #[test]
    fn test_other_keys_ignored() {
        let open = MenuState { open: true };
        assert_eq!(open.apply(MenuEvent::ToggleKey(NavKey::Other)), open);
        assert!(!NavKey::Other.is_activation());
    }

    #[test]
    fn test_link_and_outside_close() {
        let open = MenuState { open: true };
        assert!(!open.apply(MenuEvent::LinkFollowed).open);
        assert!(!open.apply(MenuEvent::OutsideClicked).open);
    }

    #[test]
    fn test_closing_closed_menu_is_noop() {
        let closed = MenuState::default();
        assert_eq!(closed.apply(MenuEvent::OutsideClicked), closed);
        assert_eq!(closed.apply(MenuEvent::LinkFollowed), closed);
    }

    #[test]
    fn test_css_class_mirrors_state() {
        assert_eq!(MenuState { open: false }.css_class(), "nav-menu");
        assert_eq!(MenuState { open: true }.css_class(), "nav-menu active");
    }
}
