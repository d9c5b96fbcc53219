use cardsmith_core::ProfileStore;
use dioxus::prelude::*;

use crate::context::RenderedCard;
use crate::pages::Studio;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, the profile store, and the rendered-card
/// surface to the single studio view.
#[component]
pub fn App() -> Element {
    // The one profile instance, created fresh at application start
    let store: Signal<ProfileStore> = use_signal(ProfileStore::new);

    // The SVG the preview last rendered; export reads this surface
    let rendered: Signal<RenderedCard> = use_signal(|| None);

    use_context_provider(|| store);
    use_context_provider(|| rendered);

    rsx! {
        style { {GLOBAL_STYLES} }
        Studio {}
    }
}
