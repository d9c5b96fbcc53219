//! Card Renderer - pure projection from a profile to the card template
//!
//! `render_card_svg` is the single visual source: the desktop preview
//! injects the returned SVG string into the page, and the export pipeline
//! rasterizes the same string. Equal profiles produce byte-identical SVG.

use crate::types::Profile;

/// Logical card canvas width in px
pub const CARD_WIDTH: u32 = 360;

/// Logical card canvas height in px
pub const CARD_HEIGHT: u32 = 580;

/// Escape text for use inside SVG attribute and element content
fn xml_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render the identification card for `profile`.
///
/// Fixed template: event banner, portrait, name, role, age, nationality,
/// the language pair, the full experience list, and the ID number strip.
pub fn render_card_svg(profile: &Profile) -> String {
    let mut svg = String::with_capacity(4096);

    svg.push_str(&format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"##,
        w = CARD_WIDTH,
        h = CARD_HEIGHT,
    ));

    // Card body
    svg.push_str(&format!(
        r##"<rect x="0" y="0" width="{w}" height="{h}" rx="18" fill="#ffffff" stroke="#e2e5ea" stroke-width="1"/>"##,
        w = CARD_WIDTH,
        h = CARD_HEIGHT,
    ));

    // Event banner
    svg.push_str(&format!(
        r##"<path d="M 0 18 Q 0 0 18 0 L {x1} 0 Q {w} 0 {w} 18 L {w} 72 L 0 72 Z" fill="#1e3a8a"/>"##,
        x1 = CARD_WIDTH - 18,
        w = CARD_WIDTH,
    ));
    svg.push_str(&format!(
        r##"<text x="{cx}" y="45" text-anchor="middle" font-family="sans-serif" font-size="18" font-weight="bold" fill="#ffffff">{event}</text>"##,
        cx = CARD_WIDTH / 2,
        event = xml_escape(&profile.event_name),
    ));

    // Portrait, clipped to a circle
    svg.push_str(r##"<defs><clipPath id="portrait-clip"><circle cx="180" cy="156" r="60"/></clipPath></defs>"##);
    svg.push_str(r##"<circle cx="180" cy="156" r="62" fill="none" stroke="#1e3a8a" stroke-width="3"/>"##);
    if profile.portrait.is_available() {
        svg.push_str(&format!(
            r##"<image x="120" y="96" width="120" height="120" preserveAspectRatio="xMidYMid slice" clip-path="url(#portrait-clip)" href="{href}"/>"##,
            href = xml_escape(profile.portrait.as_href()),
        ));
    } else {
        svg.push_str(r##"<circle cx="180" cy="156" r="60" fill="#eef1f5"/>"##);
    }

    // Name and role
    svg.push_str(&format!(
        r##"<text x="{cx}" y="248" text-anchor="middle" font-family="sans-serif" font-size="22" font-weight="bold" fill="#111827">{name}</text>"##,
        cx = CARD_WIDTH / 2,
        name = xml_escape(&profile.name),
    ));
    svg.push_str(&format!(
        r##"<text x="{cx}" y="272" text-anchor="middle" font-family="sans-serif" font-size="13" letter-spacing="2" fill="#6b7280">{role}</text>"##,
        cx = CARD_WIDTH / 2,
        role = xml_escape(&profile.role),
    ));

    svg.push_str(r##"<line x1="36" y1="290" x2="324" y2="290" stroke="#e2e5ea" stroke-width="1"/>"##);

    // Age / nationality columns
    svg.push_str(r##"<text x="110" y="314" text-anchor="middle" font-family="sans-serif" font-size="10" letter-spacing="1.5" fill="#9ca3af">AGE</text>"##);
    svg.push_str(&format!(
        r##"<text x="110" y="334" text-anchor="middle" font-family="sans-serif" font-size="15" font-weight="bold" fill="#111827">{age}</text>"##,
        age = profile.age,
    ));
    svg.push_str(r##"<text x="250" y="314" text-anchor="middle" font-family="sans-serif" font-size="10" letter-spacing="1.5" fill="#9ca3af">NATIONALITY</text>"##);
    svg.push_str(&format!(
        r##"<text x="250" y="334" text-anchor="middle" font-family="sans-serif" font-size="15" font-weight="bold" fill="#111827">{nat}</text>"##,
        nat = xml_escape(&profile.nationality),
    ));

    // Languages
    svg.push_str(r##"<text x="36" y="368" font-family="sans-serif" font-size="10" letter-spacing="1.5" fill="#9ca3af">LANGUAGES</text>"##);
    let mut y = 388;
    for language in &profile.languages {
        svg.push_str(&format!(
            r##"<text x="36" y="{y}" font-family="sans-serif" font-size="13" fill="#374151">{lang}</text>"##,
            lang = xml_escape(language),
        ));
        y += 18;
    }

    // Experience list
    let mut y = y + 16;
    svg.push_str(&format!(
        r##"<text x="36" y="{y}" font-family="sans-serif" font-size="10" letter-spacing="1.5" fill="#9ca3af">EXPERIENCE</text>"##,
    ));
    y += 20;
    for exp in &profile.experience {
        svg.push_str(&format!(
            r##"<text x="36" y="{y}" font-family="sans-serif" font-size="13" font-weight="bold" fill="#111827">{company}</text>"##,
            company = xml_escape(&exp.company),
        ));
        svg.push_str(&format!(
            r##"<text x="324" y="{y}" text-anchor="end" font-family="sans-serif" font-size="12" fill="#6b7280">{role}</text>"##,
            role = xml_escape(&exp.role),
        ));
        y += 20;
    }

    // ID strip
    svg.push_str(&format!(
        r##"<rect x="0" y="{y0}" width="{w}" height="40" fill="#f3f4f6"/>"##,
        y0 = CARD_HEIGHT - 40,
        w = CARD_WIDTH,
    ));
    svg.push_str(&format!(
        r##"<text x="{cx}" y="{ty}" text-anchor="middle" font-family="monospace" font-size="14" letter-spacing="3" fill="#374151">{id}</text>"##,
        cx = CARD_WIDTH / 2,
        ty = CARD_HEIGHT - 15,
        id = xml_escape(&profile.id_number),
    ));

    svg.push_str("</svg>");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PortraitImage;

    #[test]
    fn test_render_is_pure() {
        let profile = Profile::default();
        assert_eq!(render_card_svg(&profile), render_card_svg(&profile));
    }

    #[test]
    fn test_every_field_is_projected() {
        let profile = Profile::default();
        let svg = render_card_svg(&profile);

        assert!(svg.contains("Rawan Mamdouh Attia"));
        assert!(svg.contains("Staff Member"));
        assert!(svg.contains(">24<"));
        assert!(svg.contains("Egyptian"));
        assert!(svg.contains("Arabic Native"));
        assert!(svg.contains("English Fluent"));
        assert!(svg.contains("0024938472910"));
        assert!(svg.contains("Saudi Media Forum"));
        for exp in &profile.experience {
            assert!(svg.contains(&exp.company));
            assert!(svg.contains(&exp.role));
        }
        assert!(svg.contains("https://images.unsplash.com"));
    }

    #[test]
    fn test_text_is_escaped() {
        let profile = Profile::default()
            .with_name("A & B <Studios>")
            .with_event_name("\"Expo\"");
        let svg = render_card_svg(&profile);

        assert!(svg.contains("A &amp; B &lt;Studios&gt;"));
        assert!(svg.contains("&quot;Expo&quot;"));
        assert!(!svg.contains("<Studios>"));
    }

    #[test]
    fn test_edits_change_the_projection() {
        let before = Profile::default();
        let after = before.clone().with_name("Jane Q Public");
        assert_ne!(render_card_svg(&before), render_card_svg(&after));
    }

    #[test]
    fn test_missing_portrait_renders_placeholder() {
        let profile = Profile::default().with_portrait(PortraitImage::Url(String::new()));
        let svg = render_card_svg(&profile);
        assert!(!svg.contains("<image"));
        assert!(svg.contains("#eef1f5"));
    }

    #[test]
    fn test_experience_rows_grow_the_list() {
        let profile = Profile::default().add_experience();
        let svg = render_card_svg(&profile);
        assert!(svg.contains("New Company"));
    }
}
