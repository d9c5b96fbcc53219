//! Studio page - the whole app in one view.
//!
//! Left: banner, editor form, download button. Right: live card preview.

use cardsmith_core::export;
use dioxus::prelude::*;

use crate::components::cards::CardPreview;
use crate::components::editor::ProfileEditor;
use crate::context::{use_profile_store, use_rendered_card};

/// Single-page studio layout.
#[component]
pub fn Studio() -> Element {
    let store = use_profile_store();
    let rendered = use_rendered_card();

    let on_download = move |_| {
        spawn(async move {
            // Surface not mounted yet: silent no-op
            let Some(svg) = rendered() else {
                return;
            };
            let filename = export::export_filename(&store.read().profile().name);

            let result = tokio::task::spawn_blocking(
                move || -> cardsmith_core::CardResult<Option<std::path::PathBuf>> {
                    let Some(path) = rfd::FileDialog::new()
                        .add_filter("PNG image", &["png"])
                        .set_title("Save Card")
                        .set_file_name(&filename)
                        .save_file()
                    else {
                        // User cancelled
                        return Ok(None);
                    };
                    export::export_card_to(&svg, &path)?;
                    Ok(Some(path))
                },
            )
            .await;

            match result {
                Ok(Ok(Some(path))) => {
                    tracing::info!("Card exported to {}", path.display());
                }
                Ok(Ok(None)) => {}
                Ok(Err(e)) => {
                    let message = format!("Failed to generate image: {e}");
                    tracing::error!("Card export failed: {e}");
                    tokio::task::spawn_blocking(move || {
                        rfd::MessageDialog::new()
                            .set_level(rfd::MessageLevel::Error)
                            .set_title("Export failed")
                            .set_description(&message)
                            .show();
                    })
                    .await
                    .ok();
                }
                Err(e) => {
                    tracing::error!("Export task failed to run: {e}");
                }
            }
        });
    };

    rsx! {
        main { class: "studio",
            div { class: "studio__columns",

                // Editor column
                section { class: "studio__editor-column",
                    header { class: "studio-banner",
                        h1 { class: "studio-banner__title", "Cardsmith" }
                        p { class: "studio-banner__tagline",
                            "Create stunning employee identification cards."
                        }
                    }

                    ProfileEditor {}

                    button {
                        class: "btn-download",
                        onclick: on_download,
                        "Download Card"
                    }
                }

                // Preview column
                section { class: "studio__preview-column",
                    h3 { class: "studio__preview-label", "Live Preview" }
                    CardPreview {}
                }
            }
        }
    }
}
