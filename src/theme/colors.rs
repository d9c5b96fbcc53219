//! Color constants for the studio UI.
//!
//! Light editor chrome with an indigo accent, matching the card banner.

#![allow(dead_code)]

// === SURFACES ===
pub const SURFACE_PAGE: &str = "#f3f4f6";
pub const SURFACE_PANEL: &str = "#ffffff";
pub const SURFACE_BORDER: &str = "#d1d5db";

// === ACCENT (Banner, buttons, focus) ===
pub const INDIGO: &str = "#1e3a8a";
pub const INDIGO_BRIGHT: &str = "#2563eb";
pub const INDIGO_SOFT: &str = "#eff6ff";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#111827";
pub const TEXT_SECONDARY: &str = "#6b7280";
pub const TEXT_MUTED: &str = "#9ca3af";

// === SEMANTIC ===
pub const DANGER: &str = "#dc2626";
