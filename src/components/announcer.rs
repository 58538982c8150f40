//! Announcer Component
//!
//! Hosts the screen-reader live region and owns its timing: when an
//! announcement is published it stays in the region for
//! `LIVE_REGION_MILLIS`, then expires. Expiry is serial-checked, so an
//! announcement published while another is pending simply supersedes it.

use std::time::Duration;

use dioxus::prelude::*;
use promptall_core::LIVE_REGION_MILLIS;
use promptall_ui::LiveRegion;

use crate::context::use_announcer;

/// Mounts the live region fed from the announcer context
#[component]
pub fn Announcer() -> Element {
    let mut announcer = use_announcer();

    use_effect(move || {
        let state = announcer();
        if state.current().is_some() {
            let serial = state.serial();
            spawn(async move {
                tokio::time::sleep(Duration::from_millis(LIVE_REGION_MILLIS)).await;
                if announcer.peek().serial() == serial {
                    announcer.write().expire(serial);
                }
            });
        }
    });

    rsx! {
        LiveRegion { announcement: announcer().current().cloned() }
    }
}
