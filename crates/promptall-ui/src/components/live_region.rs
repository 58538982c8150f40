//! Screen-Reader Live Region
//!
//! Renders the current [`Announcement`] into a visually hidden ARIA live
//! region. The element only exists while an announcement is current; the
//! caller owns the timing (publish, then expire after
//! `LIVE_REGION_MILLIS`).
//!
//! The `.sr-only` class that hides the region visually ships with the
//! global stylesheet.

use dioxus::prelude::*;
use promptall_core::Announcement;

/// Properties for the LiveRegion component
#[derive(Clone, PartialEq, Props)]
pub struct LiveRegionProps {
    /// The announcement to expose to assistive technology, if any
    #[props(default)]
    pub announcement: Option<Announcement>,
}

/// Visually hidden, politeness-tagged, atomically updated live region
#[component]
pub fn LiveRegion(props: LiveRegionProps) -> Element {
    rsx! {
        if let Some(announcement) = &props.announcement {
            div {
                class: "sr-only",
                "aria-live": announcement.politeness.as_str(),
                "aria-atomic": "true",
                "{announcement.text}"
            }
        }
    }
}
