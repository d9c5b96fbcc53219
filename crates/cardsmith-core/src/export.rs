//! Card Export - rasterize the rendered card into a downloadable PNG
//!
//! The card SVG is parsed with usvg, rasterized with resvg at a fixed 2x
//! pixel-density multiplier, and encoded as lossless PNG. System fonts are
//! loaded once into a shared database so `<text>` elements render.

use std::path::Path;
use std::sync::Arc;

use image::codecs::png::PngEncoder;
use image::ImageEncoder;

use crate::error::{CardError, CardResult};

/// Fixed pixel-density multiplier for exported cards
pub const EXPORT_SCALE: f32 = 2.0;

/// Lazily-loaded system font database for SVG text rendering.
///
/// Loading system fonts is expensive (~50ms), so it happens once and the
/// database is shared across all rasterization calls.
static FONTDB: std::sync::LazyLock<Arc<fontdb::Database>> = std::sync::LazyLock::new(|| {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();
    tracing::debug!("Loaded {} font faces from system", db.len());
    Arc::new(db)
});

/// Derive the download filename from the profile name.
///
/// Every whitespace run collapses to a single underscore and the fixed
/// `_card.png` suffix is appended: "Jane Q Public" becomes
/// `Jane_Q_Public_card.png`.
pub fn export_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 9);
    let mut in_whitespace = false;
    for c in name.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push('_');
                in_whitespace = true;
            }
        } else {
            out.push(c);
            in_whitespace = false;
        }
    }
    out.push_str("_card.png");
    out
}

/// Rasterize an SVG string to PNG bytes at the given scale.
pub fn render_png(svg: &str, scale: f32) -> CardResult<Vec<u8>> {
    let opts = resvg::usvg::Options {
        fontdb: FONTDB.clone(),
        ..Default::default()
    };
    let tree = resvg::usvg::Tree::from_str(svg, &opts)
        .map_err(|e| CardError::SvgParse(e.to_string()))?;

    let size = tree.size();
    let width = (size.width() * scale).ceil() as u32;
    let height = (size.height() * scale).ceil() as u32;
    if width == 0 || height == 0 || width > 8192 || height > 8192 {
        return Err(CardError::Raster(format!(
            "dimensions out of range: {width}x{height}"
        )));
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| CardError::Raster("pixmap allocation failed".to_string()))?;
    pixmap.fill(resvg::tiny_skia::Color::WHITE);

    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    let mut png_buf = Vec::new();
    let encoder = PngEncoder::new(&mut png_buf);
    encoder
        .write_image(pixmap.data(), width, height, image::ExtendedColorType::Rgba8)
        .map_err(|e| CardError::PngEncode(e.to_string()))?;

    tracing::debug!("Rasterized card: {width}x{height}, {} bytes", png_buf.len());
    Ok(png_buf)
}

/// Rasterize the card at the export scale and write it to `path`.
pub fn export_card_to(svg: &str, path: &Path) -> CardResult<()> {
    let png = render_png(svg, EXPORT_SCALE)?;
    std::fs::write(path, png)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{render_card_svg, CARD_HEIGHT, CARD_WIDTH};
    use crate::types::Profile;

    #[test]
    fn test_export_filename() {
        assert_eq!(export_filename("Jane Q Public"), "Jane_Q_Public_card.png");
    }

    #[test]
    fn test_export_filename_collapses_whitespace_runs() {
        assert_eq!(export_filename("Jane\t  Q Public"), "Jane_Q_Public_card.png");
        assert_eq!(export_filename(" Jane "), "_Jane__card.png");
        assert_eq!(export_filename(""), "_card.png");
    }

    #[test]
    fn test_render_png_doubles_dimensions() {
        let svg = render_card_svg(&Profile::default());
        let png = render_png(&svg, EXPORT_SCALE).expect("render failed");

        let img = image::load_from_memory(&png).expect("not a decodable PNG");
        assert_eq!(img.width(), CARD_WIDTH * 2);
        assert_eq!(img.height(), CARD_HEIGHT * 2);
    }

    #[test]
    fn test_render_png_rejects_invalid_svg() {
        let result = render_png("this is not svg", EXPORT_SCALE);
        assert!(matches!(result, Err(CardError::SvgParse(_))));
    }

    #[test]
    fn test_export_card_to_writes_png_file() {
        let dir = tempfile::tempdir().expect("tempdir failed");
        let path = dir.path().join(export_filename("Jane Q Public"));

        let svg = render_card_svg(&Profile::default());
        export_card_to(&svg, &path).expect("export failed");

        let bytes = std::fs::read(&path).expect("file missing");
        // PNG magic
        assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]);
    }
}
