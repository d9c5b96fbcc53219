//! Shared state context for Cardsmith.
//!
//! Provides the profile store and the rendered-card surface to all
//! components via use_context.

use cardsmith_core::ProfileStore;
use dioxus::prelude::*;

/// The card SVG most recently rendered by the preview.
///
/// `None` until the preview has mounted once; export treats that as
/// "surface unavailable" and does nothing.
pub type RenderedCard = Option<String>;

/// Hook to access the profile store from context.
///
/// Every committed update through the store re-renders the editor and
/// the card preview.
pub fn use_profile_store() -> Signal<ProfileStore> {
    use_context::<Signal<ProfileStore>>()
}

/// Hook to access the rendered-card surface from context.
pub fn use_rendered_card() -> Signal<RenderedCard> {
    use_context::<Signal<RenderedCard>>()
}
