//! Experience List Component
//!
//! Add, edit, and remove work-history rows. Rows are keyed by their
//! generated id so edits target the right entry while typing.

use dioxus::prelude::*;

use crate::context::use_profile_store;

/// Editable experience rows with an add button
#[component]
pub fn ExperienceList() -> Element {
    let mut store = use_profile_store();
    let experience = store.read().profile().experience.clone();

    rsx! {
        div { class: "experience-list",
            div { class: "experience-list__header",
                label { class: "editor-field__label", "Experience" }
                button {
                    class: "experience-list__add",
                    onclick: move |_| store.write().update(|p| p.add_experience()),
                    "Add"
                }
            }

            div { class: "experience-list__rows",
                for exp in experience {
                    div { key: "{exp.id}", class: "experience-row",
                        input {
                            class: "experience-row__input",
                            r#type: "text",
                            placeholder: "Company",
                            value: "{exp.company}",
                            oninput: move |e| {
                                store.write().update(|p| p.with_experience_company(exp.id, e.value()))
                            },
                        }
                        input {
                            class: "experience-row__input",
                            r#type: "text",
                            placeholder: "Role",
                            value: "{exp.role}",
                            oninput: move |e| {
                                store.write().update(|p| p.with_experience_role(exp.id, e.value()))
                            },
                        }
                        button {
                            class: "experience-row__remove",
                            title: "Remove entry",
                            onclick: move |_| store.write().update(|p| p.remove_experience(exp.id)),
                            "×"
                        }
                    }
                }
            }
        }
    }
}
