//! Profile Store - single source of truth for the editor and renderer
//!
//! Holds the current [`Profile`] and exposes one commit point: a
//! whole-value replacement. The editor form never mutates fields in place;
//! it derives a new profile with the `Profile::with_*` helpers and commits
//! it here, and the card renderer re-projects from the committed value.

use crate::types::Profile;

/// Owns the current profile value
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileStore {
    current: Profile,
}

impl ProfileStore {
    /// Create a store holding the launch profile
    pub fn new() -> Self {
        Self {
            current: Profile::new(),
        }
    }

    /// Create a store holding a specific profile
    pub fn with_profile(profile: Profile) -> Self {
        Self { current: profile }
    }

    /// Read the current profile
    pub fn profile(&self) -> &Profile {
        &self.current
    }

    /// Replace the profile with the transformation's result.
    ///
    /// The whole value is swapped atomically and stamped with the edit
    /// time, so a re-render mid-transformation can never observe a
    /// half-applied edit.
    pub fn update(&mut self, f: impl FnOnce(Profile) -> Profile) {
        let mut next = f(self.current.clone());
        next.touch();
        self.current = next;
    }
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_store_starts_with_launch_profile() {
        let store = ProfileStore::new();
        assert_eq!(store.profile().name, "Rawan Mamdouh Attia");
        assert!(store.profile().created_at > 0);
    }

    #[test]
    fn test_update_replaces_wholesale() {
        let mut store = ProfileStore::new();
        store.update(|p| p.with_name("Jane Q Public"));
        assert_eq!(store.profile().name, "Jane Q Public");
        // Untouched fields survive the replacement
        assert_eq!(store.profile().role, "Staff Member");
    }

    #[test]
    fn test_update_stamps_edit_time() {
        let mut store = ProfileStore::with_profile(Profile::default());
        assert_eq!(store.profile().updated_at, 0);
        store.update(|p| p.with_role("Supervisor"));
        assert!(store.profile().updated_at > 0);
    }

    /// One scalar edit, as a value, so proptest can generate sequences
    #[derive(Debug, Clone)]
    enum FieldEdit {
        Name(String),
        Role(String),
        Age(u32),
        Nationality(String),
        IdNumber(String),
        EventName(String),
    }

    fn field_edit() -> impl Strategy<Value = FieldEdit> {
        prop_oneof![
            "[a-zA-Z ]{0,20}".prop_map(FieldEdit::Name),
            "[a-zA-Z ]{0,20}".prop_map(FieldEdit::Role),
            (0u32..120).prop_map(FieldEdit::Age),
            "[a-zA-Z]{0,15}".prop_map(FieldEdit::Nationality),
            "[0-9]{0,13}".prop_map(FieldEdit::IdNumber),
            "[a-zA-Z0-9 ]{0,20}".prop_map(FieldEdit::EventName),
        ]
    }

    fn apply(profile: Profile, edit: &FieldEdit) -> Profile {
        match edit {
            FieldEdit::Name(v) => profile.with_name(v.clone()),
            FieldEdit::Role(v) => profile.with_role(v.clone()),
            FieldEdit::Age(v) => profile.with_age(*v),
            FieldEdit::Nationality(v) => profile.with_nationality(v.clone()),
            FieldEdit::IdNumber(v) => profile.with_id_number(v.clone()),
            FieldEdit::EventName(v) => profile.with_event_name(v.clone()),
        }
    }

    proptest! {
        /// For any sequence of scalar edits, the store ends up holding the
        /// last value written per field; fields never written keep their
        /// launch value.
        #[test]
        fn prop_last_write_wins(edits in proptest::collection::vec(field_edit(), 0..32)) {
            // One instance: experience ids are generated per construction
            let launch = Profile::default();
            let mut store = ProfileStore::with_profile(launch.clone());
            for edit in &edits {
                store.update(|p| apply(p, edit));
            }
            let last = |pick: fn(&FieldEdit) -> Option<String>, fallback: String| {
                edits.iter().rev().find_map(pick).unwrap_or(fallback)
            };

            let p = store.profile();
            prop_assert_eq!(
                p.name.clone(),
                last(|e| match e { FieldEdit::Name(v) => Some(v.clone()), _ => None }, launch.name.clone())
            );
            prop_assert_eq!(
                p.role.clone(),
                last(|e| match e { FieldEdit::Role(v) => Some(v.clone()), _ => None }, launch.role.clone())
            );
            prop_assert_eq!(
                p.age,
                edits.iter().rev().find_map(|e| match e { FieldEdit::Age(v) => Some(*v), _ => None })
                    .unwrap_or(launch.age)
            );
            prop_assert_eq!(
                p.nationality.clone(),
                last(|e| match e { FieldEdit::Nationality(v) => Some(v.clone()), _ => None }, launch.nationality.clone())
            );
            prop_assert_eq!(
                p.id_number.clone(),
                last(|e| match e { FieldEdit::IdNumber(v) => Some(v.clone()), _ => None }, launch.id_number.clone())
            );
            prop_assert_eq!(
                p.event_name.clone(),
                last(|e| match e { FieldEdit::EventName(v) => Some(v.clone()), _ => None }, launch.event_name.clone())
            );

            // Structured fields were never edited and must be untouched
            prop_assert_eq!(p.languages.clone(), launch.languages);
            prop_assert_eq!(p.experience.clone(), launch.experience.clone());
        }
    }
}
