//! Portrait Image Type - Flexible photo storage for the card
//!
//! Supports remote URLs (the launch profile) and embedded data URIs
//! (uploaded files).

use std::io::Cursor;

use base64::Engine;
use image::ImageFormat;
use serde::{Deserialize, Serialize};

use crate::error::{CardError, CardResult};

/// Portrait photo for the card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PortraitImage {
    /// Remote image URL
    Url(String),

    /// Base64 data URI for an uploaded file
    /// Format: "data:image/png;base64,..."
    DataUri(String),
}

impl PortraitImage {
    /// Check if image data is available
    pub fn is_available(&self) -> bool {
        match self {
            PortraitImage::Url(url) => !url.is_empty(),
            PortraitImage::DataUri(uri) => !uri.is_empty(),
        }
    }

    /// Get a descriptive string for the image type
    pub fn image_type(&self) -> &'static str {
        match self {
            PortraitImage::Url(_) => "url",
            PortraitImage::DataUri(_) => "data-uri",
        }
    }

    /// The string the renderer puts in the SVG `href` attribute
    pub fn as_href(&self) -> &str {
        match self {
            PortraitImage::Url(url) => url,
            PortraitImage::DataUri(uri) => uri,
        }
    }

    /// Embed raw file bytes as a PNG data URI.
    ///
    /// Decodes with format auto-detection, re-encodes as PNG (lossless) and
    /// wraps the result in a `data:image/png;base64,...` URI. Unreadable
    /// bytes return an error and nothing is committed; the caller keeps the
    /// previous portrait.
    pub fn embed(bytes: &[u8]) -> CardResult<Self> {
        let img = image::load_from_memory(bytes)
            .map_err(|e| CardError::ImageDecode(e.to_string()))?;

        let mut buffer = Vec::new();
        img.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
            .map_err(|e| CardError::ImageEncode(e.to_string()))?;

        let base64 = base64::engine::general_purpose::STANDARD.encode(&buffer);
        Ok(PortraitImage::DataUri(format!("data:image/png;base64,{}", base64)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Smallest useful test image: 2x2 white PNG encoded at test time
    fn tiny_png_bytes() -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(2, 2, image::Rgba([255, 255, 255, 255]));
        let mut buffer = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
            .expect("encoding test image failed");
        buffer
    }

    #[test]
    fn test_url_available() {
        let img = PortraitImage::Url("https://example.com/a.jpg".to_string());
        assert!(img.is_available());
        assert_eq!(img.image_type(), "url");
    }

    #[test]
    fn test_empty_url_not_available() {
        let img = PortraitImage::Url(String::new());
        assert!(!img.is_available());
    }

    #[test]
    fn test_embed_produces_data_uri() {
        let embedded = PortraitImage::embed(&tiny_png_bytes()).expect("embed failed");
        assert_eq!(embedded.image_type(), "data-uri");
        assert!(embedded.as_href().starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_embed_rejects_garbage() {
        let result = PortraitImage::embed(b"definitely not an image");
        assert!(matches!(result, Err(CardError::ImageDecode(_))));
    }

    #[test]
    fn test_embed_roundtrips_pixels() {
        let embedded = PortraitImage::embed(&tiny_png_bytes()).expect("embed failed");
        let b64 = embedded
            .as_href()
            .strip_prefix("data:image/png;base64,")
            .expect("unexpected prefix");
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(b64)
            .expect("invalid base64");
        let img = image::load_from_memory(&bytes).expect("decode failed");
        assert_eq!((img.width(), img.height()), (2, 2));
    }
}
