//! Theme for Cardsmith.

pub mod colors;
pub mod styles;

pub use styles::GLOBAL_STYLES;
