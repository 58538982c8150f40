//! Prompt All About It UI Components
//!
//! Reusable Dioxus components for the Green AI awareness site: buttons with
//! a transient busy state, form fields with per-field error slots, and the
//! screen-reader live region.
//!
//! Components are presentational; state and timing live with their callers
//! and in `promptall-core`.

pub mod components;

pub use components::*;
