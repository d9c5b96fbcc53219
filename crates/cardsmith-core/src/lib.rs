//! Cardsmith Core Library
//!
//! Profile data model, card rendering, and PNG export for the Cardsmith
//! desktop app.
//!
//! ## Overview
//!
//! Cardsmith turns one editable [`Profile`] into a styled identification
//! card. The profile lives in a [`ProfileStore`] that replaces the whole
//! value on every edit, the card is a pure SVG projection of the current
//! profile, and export rasterizes that projection into a 2x PNG.
//!
//! ## Quick Start
//!
//! ```no_run
//! use cardsmith_core::{card, export, ProfileStore};
//!
//! let mut store = ProfileStore::new();
//! store.update(|p| p.with_name("Jane Q Public").add_experience());
//!
//! let svg = card::render_card_svg(store.profile());
//! let filename = export::export_filename(&store.profile().name);
//! export::export_card_to(&svg, std::path::Path::new(&filename)).unwrap();
//! ```

pub mod card;
pub mod error;
pub mod export;
pub mod store;
pub mod types;

// Re-exports
pub use error::{CardError, CardResult};
pub use store::ProfileStore;
pub use types::{Experience, ExperienceId, PortraitImage, Profile};
