use image::Rgb;
use placeholder_icons::font::{FontPreference, LabelFont};
use placeholder_icons::icon_gen::{label_pixel_size, render_icon, IconStyle};
use placeholder_icons::inspect::{centering_offset, label_ink_bounds};

/// DejaVu Sans, shipped under the Bitstream Vera license (see DejaVuSans-LICENSE)
const FIXTURE_FONT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/DejaVuSans.ttf");

fn truetype_style() -> IconStyle {
    IconStyle {
        font: FontPreference::File(FIXTURE_FONT.into()),
        ..IconStyle::default()
    }
}

#[test]
fn test_truetype_font_is_selected() {
    let font = LabelFont::resolve(&FontPreference::File(FIXTURE_FONT.into()), 24.0);
    assert!(!font.is_builtin(), "fixture font should load as TrueType");

    let bounds = font.measure("MM").expect("MM should have ink");
    assert!(bounds.width() > 0 && bounds.height() > 0);
    assert!(font.measure(" ").is_none());
}

#[test]
fn test_truetype_label_is_centered() {
    let style = truetype_style();
    for size in [16, 48, 128] {
        let icon = render_icon(size, &style).unwrap();
        assert_eq!(icon.dimensions(), (size, size));

        let bounds = label_ink_bounds(&icon, style.start, style.end)
            .unwrap_or_else(|| panic!("label missing at size {size}"));
        let (dx, dy) = centering_offset(size, &bounds);
        assert!(
            dx.abs() <= 1 && dy.abs() <= 1,
            "size {size}: box {}x{} at ({},{}) offset ({dx}, {dy})",
            bounds.width(),
            bounds.height(),
            bounds.min.x,
            bounds.min.y
        );

        // the label scales with the icon rather than staying at a fixed bitmap size
        assert!(bounds.height() as f32 <= label_pixel_size(size) + 1.0);
        assert!(bounds.height() as f32 >= label_pixel_size(size) * 0.5);
    }
}

#[test]
fn test_truetype_label_has_solid_and_blended_pixels() {
    let style = truetype_style();
    for size in [48, 128] {
        let icon = render_icon(size, &style).unwrap();
        let white = icon.pixels().filter(|p| **p == Rgb([255, 255, 255])).count();
        assert!(white > 0, "size {size}: no fully covered label pixel");
    }

    // at 16px the 8px glyph stems may never reach full coverage, but the label is still lighter
    let icon = render_icon(16, &style).unwrap();
    assert!(icon.pixels().any(|p| p[1] > 126));
}

#[test]
fn test_missing_font_renders_like_builtin() {
    let builtin = IconStyle {
        font: FontPreference::Builtin,
        ..IconStyle::default()
    };
    let missing = IconStyle {
        font: FontPreference::File("/nonexistent/fonts/arial.ttf".into()),
        ..IconStyle::default()
    };

    for size in [16, 48, 128] {
        let expected = render_icon(size, &builtin).unwrap();
        let actual = render_icon(size, &missing).expect("font fallback must not fail");
        assert_eq!(expected, actual, "size {size}");
    }
}

#[test]
fn test_custom_label_and_colors() {
    let style = IconStyle {
        start: Rgb([0, 0, 0]),
        end: Rgb([0, 0, 200]),
        text_color: Rgb([255, 0, 0]),
        label: "OK!".to_string(),
        font: FontPreference::Builtin,
    };

    let icon = render_icon(64, &style).unwrap();
    assert_eq!(*icon.get_pixel(0, 0), Rgb([0, 0, 0]));
    assert_eq!(*icon.get_pixel(0, 32), Rgb([0, 0, 100]));

    let bounds = label_ink_bounds(&icon, style.start, style.end).expect("label should be drawn");
    // 'O' and 'K' fill their cells, '!' only lights the middle column of the third
    assert_eq!((bounds.width(), bounds.height()), (15, 7));
    assert_eq!(centering_offset(64, &bounds), (0, 0));

    let text_pixels = icon.pixels().filter(|p| **p == Rgb([255, 0, 0])).count();
    assert!(text_pixels > 0);
}

#[test]
fn test_label_wider_than_icon_is_clipped() {
    let style = IconStyle {
        label: "PLACEHOLDER".to_string(),
        font: FontPreference::Builtin,
        ..IconStyle::default()
    };

    let icon = render_icon(16, &style).unwrap();
    assert_eq!(icon.dimensions(), (16, 16));
    assert!(label_ink_bounds(&icon, style.start, style.end).is_some());
}
