//! Profile Editor Component
//!
//! Form over every editable profile field. Each input derives a new
//! profile from the current one and commits it wholesale through the
//! store, which re-renders the card preview.

use dioxus::prelude::*;

use crate::components::editor::{ExperienceList, PortraitUpload};
use crate::context::use_profile_store;

/// The editor form panel
#[component]
pub fn ProfileEditor() -> Element {
    let mut store = use_profile_store();
    let profile = store.read().profile().clone();

    rsx! {
        div { class: "editor-panel",
            h2 { class: "editor-panel__title", "Edit Profile" }

            PortraitUpload {}

            // Basic info
            div { class: "editor-grid",
                div { class: "editor-field",
                    label { class: "editor-field__label", "Name" }
                    input {
                        class: "editor-field__input",
                        r#type: "text",
                        value: "{profile.name}",
                        oninput: move |e| store.write().update(|p| p.with_name(e.value())),
                    }
                }
                div { class: "editor-field",
                    label { class: "editor-field__label", "Role" }
                    input {
                        class: "editor-field__input",
                        r#type: "text",
                        value: "{profile.role}",
                        oninput: move |e| store.write().update(|p| p.with_role(e.value())),
                    }
                }
            }

            div { class: "editor-grid",
                div { class: "editor-field",
                    label { class: "editor-field__label", "Age" }
                    input {
                        class: "editor-field__input",
                        r#type: "number",
                        min: "0",
                        value: "{profile.age}",
                        oninput: move |e| {
                            // Age stays numeric; a half-typed value commits nothing
                            if let Ok(age) = e.value().parse::<u32>() {
                                store.write().update(|p| p.with_age(age));
                            }
                        },
                    }
                }
                div { class: "editor-field",
                    label { class: "editor-field__label", "Nationality" }
                    input {
                        class: "editor-field__input",
                        r#type: "text",
                        value: "{profile.nationality}",
                        oninput: move |e| store.write().update(|p| p.with_nationality(e.value())),
                    }
                }
            }

            div { class: "editor-field",
                label { class: "editor-field__label", "ID Number" }
                input {
                    class: "editor-field__input",
                    r#type: "text",
                    value: "{profile.id_number}",
                    oninput: move |e| store.write().update(|p| p.with_id_number(e.value())),
                }
            }

            div { class: "editor-field",
                label { class: "editor-field__label", "Event Name" }
                input {
                    class: "editor-field__input",
                    r#type: "text",
                    value: "{profile.event_name}",
                    oninput: move |e| store.write().update(|p| p.with_event_name(e.value())),
                }
            }

            // Languages
            div { class: "editor-field",
                label { class: "editor-field__label", "Languages" }
                div { class: "editor-languages",
                    for (idx, language) in profile.languages.clone().into_iter().enumerate() {
                        input {
                            key: "{idx}",
                            class: "editor-field__input",
                            r#type: "text",
                            value: "{language}",
                            oninput: move |e| {
                                store.write().update(|p| p.with_language(idx, e.value()))
                            },
                        }
                    }
                }
                p { class: "editor-field__hint", "Currently fixed to 2 languages" }
            }

            ExperienceList {}
        }
    }
}
