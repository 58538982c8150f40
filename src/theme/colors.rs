//! Color constants for the Green AI palette.

#![allow(dead_code)]

// === CANOPY (Backgrounds) ===
pub const CANOPY_DARK: &str = "#0c1510";
pub const CANOPY: &str = "#121f17";
pub const CANOPY_BORDER: &str = "#1f3328";

// === LEAF (Actions, Accents) ===
pub const LEAF: &str = "#3e8e5a";
pub const LEAF_BRIGHT: &str = "#5fc97f";
pub const LEAF_GLOW: &str = "rgba(95, 201, 127, 0.3)";

// === SUN (Titles, Highlights) ===
pub const SUN: &str = "#e8c766";
pub const SUN_GLOW: &str = "rgba(232, 199, 102, 0.25)";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#f2f5f0";
pub const TEXT_SECONDARY: &str = "rgba(242, 245, 240, 0.72)";
pub const TEXT_MUTED: &str = "rgba(242, 245, 240, 0.5)";

// === SEMANTIC ===
pub const ERROR: &str = "#e05d5d";
pub const SUCCESS: &str = "#5fc97f";
