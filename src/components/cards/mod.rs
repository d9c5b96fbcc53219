//! Card preview components

mod card_preview;

pub use card_preview::CardPreview;
