//! Card Preview Component
//!
//! Read-only projection of the current profile into the card template.

use cardsmith_core::card::render_card_svg;
use dioxus::prelude::*;

use crate::context::{use_profile_store, use_rendered_card};

/// Live card preview.
///
/// Runs the profile through the pure renderer on every store change,
/// publishes the SVG as the export surface, and injects the same string
/// into the page so preview and export always agree.
#[component]
pub fn CardPreview() -> Element {
    let store = use_profile_store();
    let mut rendered = use_rendered_card();

    // Publish the surface the export operation reads
    use_effect(move || {
        let svg = render_card_svg(store.read().profile());
        rendered.set(Some(svg));
    });

    let svg = render_card_svg(store.read().profile());

    rsx! {
        div { class: "card-preview",
            dangerous_inner_html: "{svg}",
        }
    }
}
