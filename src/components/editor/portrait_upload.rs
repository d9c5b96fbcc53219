//! Portrait Upload Component
//!
//! File picker that embeds the chosen image into the profile as a data
//! URI. An unreadable file leaves the current portrait untouched and the
//! failure is shown inline.

use cardsmith_core::PortraitImage;
use dioxus::prelude::*;
use rfd::FileDialog;

use crate::context::use_profile_store;

/// Upload button with inline error reporting
#[component]
pub fn PortraitUpload() -> Element {
    let mut store = use_profile_store();
    let mut uploading = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let handle_upload = move |_| {
        uploading.set(true);
        error.set(None);

        spawn(async move {
            // Open file picker (blocking, but in spawn so UI stays responsive)
            let file_path = tokio::task::spawn_blocking(move || {
                FileDialog::new()
                    .add_filter("images", &["png", "jpg", "jpeg", "webp"])
                    .set_title("Select Profile Image")
                    .pick_file()
            })
            .await;

            match file_path {
                Ok(Some(path)) => match tokio::fs::read(&path).await {
                    Ok(bytes) => match PortraitImage::embed(&bytes) {
                        Ok(portrait) => {
                            // Commit only on successful decode
                            store.write().update(|p| p.with_portrait(portrait));
                            uploading.set(false);
                        }
                        Err(e) => {
                            tracing::warn!("Portrait embed failed: {e}");
                            error.set(Some(format!("Could not read image: {e}")));
                            uploading.set(false);
                        }
                    },
                    Err(e) => {
                        tracing::warn!("Portrait file read failed: {e}");
                        error.set(Some(format!("Could not read file: {e}")));
                        uploading.set(false);
                    }
                },
                Ok(None) => {
                    // User cancelled
                    uploading.set(false);
                }
                Err(e) => {
                    error.set(Some(format!("File picker error: {e}")));
                    uploading.set(false);
                }
            }
        });
    };

    rsx! {
        div { class: "portrait-upload",
            label { class: "editor-field__label", "Profile Image" }
            button {
                class: "portrait-upload__btn",
                onclick: handle_upload,
                disabled: uploading(),
                if uploading() {
                    "Loading..."
                } else {
                    "Choose Image"
                }
            }

            if let Some(err) = error() {
                div { class: "portrait-upload__error",
                    "⚠ {err}"
                }
            }
        }
    }
}
