//! Error types for Cardsmith

use thiserror::Error;

/// Main error type for Cardsmith operations
#[derive(Error, Debug)]
pub enum CardError {
    /// Uploaded bytes could not be decoded as an image
    #[error("Image decode error: {0}")]
    ImageDecode(String),

    /// Image could not be re-encoded for embedding
    #[error("Image encode error: {0}")]
    ImageEncode(String),

    /// Card SVG could not be parsed for rasterization
    #[error("SVG parse error: {0}")]
    SvgParse(String),

    /// Pixmap allocation or rasterization failed
    #[error("Raster error: {0}")]
    Raster(String),

    /// PNG encoding of the rasterized card failed
    #[error("PNG encode error: {0}")]
    PngEncode(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using CardError
pub type CardResult<T> = Result<T, CardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CardError::ImageDecode("not an image".to_string());
        assert_eq!(format!("{}", err), "Image decode error: not an image");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let card_err: CardError = io_err.into();
        assert!(matches!(card_err, CardError::Io(_)));
    }
}
