//! Core types for Cardsmith

use serde::{Deserialize, Serialize};
use ulid::Ulid;

pub mod image;
pub mod profile;

pub use image::PortraitImage;
pub use profile::{Experience, Profile};

/// Unique identifier for a work-experience entry
///
/// Uses ULID so rapid successive additions never collide and entries
/// sort in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExperienceId(pub Ulid);

impl ExperienceId {
    /// Create a new ExperienceId with current timestamp
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    /// Create an ExperienceId from a ULID
    pub fn from_ulid(ulid: Ulid) -> Self {
        Self(ulid)
    }

    /// Get the underlying ULID
    pub fn as_ulid(&self) -> &Ulid {
        &self.0
    }

    /// Parse from string representation
    pub fn from_string(s: &str) -> Result<Self, ulid::DecodeError> {
        let ulid = Ulid::from_string(s)?;
        Ok(Self(ulid))
    }
}

impl Default for ExperienceId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ExperienceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "exp_{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experience_id_new() {
        let id1 = ExperienceId::new();
        let id2 = ExperienceId::new();
        // Should generate different IDs even within the same clock tick
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_experience_id_display() {
        let id = ExperienceId::new();
        let display = format!("{}", id);
        assert!(display.starts_with("exp_"));
    }

    #[test]
    fn test_experience_id_string_roundtrip() {
        let id = ExperienceId::new();
        let parsed = ExperienceId::from_string(&id.as_ulid().to_string()).expect("Failed to parse");
        assert_eq!(id, parsed);
    }
}
