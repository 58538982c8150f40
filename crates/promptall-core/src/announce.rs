//! Screen-reader announcements.
//!
//! An [`Announcement`] is rendered into a transient ARIA live region and
//! removed again after [`LIVE_REGION_MILLIS`]. [`AnnouncerState`] tracks a
//! serial number per announcement so a pending removal can tell whether it
//! is still current; a stale removal is a no-op instead of clobbering a
//! newer announcement.

use serde::{Deserialize, Serialize};

/// How long an announcement stays in the live region
pub const LIVE_REGION_MILLIS: u64 = 1_000;

/// ARIA live-region politeness
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Politeness {
    /// Announced at the next graceful opportunity
    #[default]
    Polite,
    /// Interrupts the current speech
    Assertive,
}

impl Politeness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Politeness::Polite => "polite",
            Politeness::Assertive => "assertive",
        }
    }
}

/// One message for assistive technology. Updates are atomic: the region's
/// whole text is replaced, never appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    pub text: String,
    pub politeness: Politeness,
}

impl Announcement {
    /// A polite announcement
    pub fn polite(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            politeness: Politeness::Polite,
        }
    }
}

/// Current announcement plus the serial counter that cancels stale removals
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnouncerState {
    serial: u64,
    current: Option<Announcement>,
}

impl AnnouncerState {
    /// Publish an announcement, superseding any pending one. Returns the
    /// serial the matching [`expire`](Self::expire) call must present.
    pub fn announce(&mut self, announcement: Announcement) -> u64 {
        self.serial = self.serial.wrapping_add(1);
        self.current = Some(announcement);
        self.serial
    }

    /// Clear the region, but only if `serial` still names the current
    /// announcement.
    pub fn expire(&mut self, serial: u64) {
        if self.serial == serial {
            self.current = None;
        }
    }

    pub fn current(&self) -> Option<&Announcement> {
        self.current.as_ref()
    }

    pub fn serial(&self) -> u64 {
        self.serial
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_announce_and_expire() {
        let mut state = AnnouncerState::default();
        let serial = state.announce(Announcement::polite("Message sent"));
        assert_eq!(state.current().map(|a| a.text.as_str()), Some("Message sent"));
        state.expire(serial);
        assert!(state.current().is_none());
    }

    #[test]
    fn test_stale_expire_keeps_newer_announcement() {
        let mut state = AnnouncerState::default();
        let first = state.announce(Announcement::polite("first"));
        let _second = state.announce(Announcement::polite("second"));
        state.expire(first);
        assert_eq!(state.current().map(|a| a.text.as_str()), Some("second"));
    }

    #[test]
    fn test_rapid_announcements_last_wins() {
        let mut state = AnnouncerState::default();
        for n in 0..5 {
            state.announce(Announcement::polite(format!("update {}", n)));
        }
        assert_eq!(state.current().map(|a| a.text.as_str()), Some("update 4"));
    }

    #[test]
    fn test_politeness_attribute_values() {
        assert_eq!(Politeness::Polite.as_str(), "polite");
        assert_eq!(Politeness::Assertive.as_str(), "assertive");
        assert_eq!(Announcement::polite("x").politeness, Politeness::Polite);
    }
}
