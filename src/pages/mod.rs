//! Page components for Cardsmith.

mod studio;

pub use studio::Studio;
