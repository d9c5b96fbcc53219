//! Profile Type - The editable identification-card record
//!
//! One `Profile` instance is the single source of truth for the editor form
//! and the card renderer. Every edit replaces the whole value through
//! [`crate::store::ProfileStore`].

use serde::{Deserialize, Serialize};

use crate::types::{ExperienceId, PortraitImage};

/// One work-history entry within a profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    /// Unique identity for targeted edit/remove
    pub id: ExperienceId,

    /// Company or event name
    pub company: String,

    /// Role held there
    pub role: String,
}

impl Experience {
    /// Create an entry with the given company and role
    pub fn new(company: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: ExperienceId::new(),
            company: company.into(),
            role: role.into(),
        }
    }

    /// Freshly-added entry with placeholder text, ready to be edited
    pub fn placeholder() -> Self {
        Self::new("New Company", "Role")
    }
}

/// The root editable record for one person's identification card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Full name shown on the card
    pub name: String,

    /// Current role (e.g. "Staff Member")
    pub role: String,

    /// Portrait photo, remote or embedded
    pub portrait: PortraitImage,

    /// Age in years
    pub age: u32,

    /// Nationality line
    pub nationality: String,

    /// Spoken languages, two entries by convention
    pub languages: Vec<String>,

    /// Work history, insertion order is display order
    pub experience: Vec<Experience>,

    /// Free-form identifier string, not validated
    pub id_number: String,

    /// Event the card is issued for
    pub event_name: String,

    /// Unix timestamp when profile was created
    pub created_at: i64,

    /// Unix timestamp of last committed edit
    pub updated_at: i64,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Rawan Mamdouh Attia".to_string(),
            role: "Staff Member".to_string(),
            portrait: PortraitImage::Url(
                "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?q=80&w=300&auto=format&fit=crop"
                    .to_string(),
            ),
            age: 24,
            nationality: "Egyptian".to_string(),
            languages: vec!["Arabic Native".to_string(), "English Fluent".to_string()],
            experience: vec![
                Experience::new("Saudi Media Forum", "Registration"),
                Experience::new("Beauty World", "Promoter"),
                Experience::new("Saudi Food", "Promoter"),
                Experience::new("LEAP", "Promoter"),
            ],
            id_number: "0024938472910".to_string(),
            event_name: "Saudi Media Forum".to_string(),
            created_at: 0,
            updated_at: 0,
        }
    }
}

impl Profile {
    /// Create the launch profile, stamped with the current time.
    ///
    /// Created once at application start; replaced wholesale on each edit.
    pub fn new() -> Self {
        let now = chrono::Utc::now().timestamp();
        Self {
            created_at: now,
            updated_at: now,
            ..Default::default()
        }
    }

    /// Update the profile's edit timestamp
    pub fn touch(&mut self) {
        self.updated_at = chrono::Utc::now().timestamp();
    }

    // --- Scalar field edits -------------------------------------------------
    //
    // Each helper consumes the old value and returns the new one, so they
    // compose directly with `ProfileStore::update(|p| p.with_name(..))`.

    /// Replace the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Replace the role
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Replace the age
    pub fn with_age(mut self, age: u32) -> Self {
        self.age = age;
        self
    }

    /// Replace the nationality
    pub fn with_nationality(mut self, nationality: impl Into<String>) -> Self {
        self.nationality = nationality.into();
        self
    }

    /// Replace the ID number
    pub fn with_id_number(mut self, id_number: impl Into<String>) -> Self {
        self.id_number = id_number.into();
        self
    }

    /// Replace the event name
    pub fn with_event_name(mut self, event_name: impl Into<String>) -> Self {
        self.event_name = event_name.into();
        self
    }

    /// Replace the portrait image
    pub fn with_portrait(mut self, portrait: PortraitImage) -> Self {
        self.portrait = portrait;
        self
    }

    // --- Language list ------------------------------------------------------

    /// Replace the language at `index` in place.
    ///
    /// An out-of-bounds index leaves the list unchanged.
    pub fn with_language(mut self, index: usize, value: impl Into<String>) -> Self {
        if let Some(slot) = self.languages.get_mut(index) {
            *slot = value.into();
        }
        self
    }

    // --- Experience list ----------------------------------------------------

    /// Append a placeholder experience entry with a fresh unique id
    pub fn add_experience(mut self) -> Self {
        self.experience.push(Experience::placeholder());
        self
    }

    /// Replace the company of the entry with matching `id`; no-op if absent
    pub fn with_experience_company(mut self, id: ExperienceId, value: impl Into<String>) -> Self {
        if let Some(exp) = self.experience.iter_mut().find(|e| e.id == id) {
            exp.company = value.into();
        }
        self
    }

    /// Replace the role of the entry with matching `id`; no-op if absent
    pub fn with_experience_role(mut self, id: ExperienceId, value: impl Into<String>) -> Self {
        if let Some(exp) = self.experience.iter_mut().find(|e| e.id == id) {
            exp.role = value.into();
        }
        self
    }

    /// Remove the entry with matching `id`; no-op if absent
    pub fn remove_experience(mut self, id: ExperienceId) -> Self {
        self.experience.retain(|e| e.id != id);
        self
    }
}
