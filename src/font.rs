//! Label font resolution
//!
//! A label is rendered with a scalable TrueType font when one can be loaded and
//! with the built-in bitmap font otherwise. The fallback is silent: failing to
//! find or parse the preferred font is never reported as an error.

use crate::builtin_font;
use image::{Rgb, RgbImage};
use rusttype::{point, Font, PositionedGlyph, Rect, Scale};
use std::path::{Path, PathBuf};

/// Font file looked up when no explicit font is requested
pub const DEFAULT_FONT_FILE: &str = "arial.ttf";

/// Which font tier to try first
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FontPreference {
    /// Search the working directory and the usual system font folders for `arial.ttf`
    #[default]
    System,
    /// Load this TrueType file
    File(PathBuf),
    /// Go straight to the built-in bitmap font
    Builtin,
}

/// The font a label is measured and drawn with
pub enum LabelFont {
    TrueType { font: Font<'static>, scale: Scale },
    Builtin,
}

impl LabelFont {
    /// Pick the best available font at `pixel_size`
    pub fn resolve(preference: &FontPreference, pixel_size: f32) -> LabelFont {
        let font = match preference {
            FontPreference::System => system_font_candidates()
                .iter()
                .find_map(|path| load_truetype(path)),
            FontPreference::File(path) => load_truetype(path),
            FontPreference::Builtin => None,
        };

        match font {
            Some(font) => LabelFont::TrueType {
                font,
                scale: Scale::uniform(pixel_size.max(1.0)),
            },
            None => LabelFont::Builtin,
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, LabelFont::Builtin)
    }

    /// Ink bounding box of `text` relative to the pen origin
    ///
    /// Returns `None` when the text produces no visible pixels.
    pub fn measure(&self, text: &str) -> Option<Rect<i32>> {
        match self {
            LabelFont::TrueType { font, scale } => {
                union_bounds(layout(font, *scale, text).iter())
            }
            LabelFont::Builtin => builtin_font::measure(text),
        }
    }

    /// Draw `text` so that the top-left corner of its ink box lands on `top_left`
    pub fn draw(&self, canvas: &mut RgbImage, text: &str, top_left: (i32, i32), color: Rgb<u8>) {
        let Some(bounds) = self.measure(text) else {
            return;
        };
        let dx = top_left.0 - bounds.min.x;
        let dy = top_left.1 - bounds.min.y;

        match self {
            LabelFont::TrueType { font, scale } => {
                let (width, height) = (canvas.width() as i32, canvas.height() as i32);
                for glyph in layout(font, *scale, text) {
                    let Some(bb) = glyph.pixel_bounding_box() else {
                        continue;
                    };
                    glyph.draw(|gx, gy, coverage| {
                        let x = bb.min.x + gx as i32 + dx;
                        let y = bb.min.y + gy as i32 + dy;
                        if (0..width).contains(&x) && (0..height).contains(&y) {
                            let pixel = canvas.get_pixel_mut(x as u32, y as u32);
                            *pixel = blend(*pixel, color, coverage);
                        }
                    });
                }
            }
            LabelFont::Builtin => builtin_font::draw(canvas, text, dx, dy, color),
        }
    }
}

fn layout<'f>(font: &'f Font<'static>, scale: Scale, text: &str) -> Vec<PositionedGlyph<'f>> {
    let ascent = font.v_metrics(scale).ascent;
    font.layout(text, scale, point(0.0, ascent)).collect()
}

fn union_bounds<'a, 'f: 'a>(
    glyphs: impl Iterator<Item = &'a PositionedGlyph<'f>>,
) -> Option<Rect<i32>> {
    glyphs
        .filter_map(|glyph| glyph.pixel_bounding_box())
        .reduce(|a, b| Rect {
            min: point(a.min.x.min(b.min.x), a.min.y.min(b.min.y)),
            max: point(a.max.x.max(b.max.x), a.max.y.max(b.max.y)),
        })
}

fn blend(background: Rgb<u8>, foreground: Rgb<u8>, coverage: f32) -> Rgb<u8> {
    let coverage = coverage.clamp(0.0, 1.0);
    let mix = |bg: u8, fg: u8| (bg as f32 + (fg as f32 - bg as f32) * coverage).round() as u8;
    Rgb([
        mix(background[0], foreground[0]),
        mix(background[1], foreground[1]),
        mix(background[2], foreground[2]),
    ])
}

fn load_truetype(path: &Path) -> Option<Font<'static>> {
    let data = std::fs::read(path).ok()?;
    Font::try_from_vec(data)
}

/// Locations searched for [`DEFAULT_FONT_FILE`], in order
pub fn system_font_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(DEFAULT_FONT_FILE)];

    if let Some(windir) = std::env::var_os("WINDIR") {
        candidates.push(PathBuf::from(windir).join("Fonts").join(DEFAULT_FONT_FILE));
    }

    candidates.extend(
        [
            "C:\\Windows\\Fonts\\arial.ttf",
            "/Library/Fonts/Arial.ttf",
            "/System/Library/Fonts/Supplemental/Arial.ttf",
            "/usr/share/fonts/truetype/msttcorefonts/Arial.ttf",
            "/usr/share/fonts/truetype/msttcorefonts/arial.ttf",
            "/usr/share/fonts/TTF/arial.ttf",
            "/usr/share/fonts/corefonts/arial.ttf",
        ]
        .into_iter()
        .map(PathBuf::from),
    );

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_preference_skips_truetype() {
        let font = LabelFont::resolve(&FontPreference::Builtin, 64.0);
        assert!(font.is_builtin());
    }

    #[test]
    fn test_missing_font_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let font = LabelFont::resolve(&FontPreference::File(dir.path().join("nope.ttf")), 24.0);
        assert!(font.is_builtin());
    }

    #[test]
    fn test_unparsable_font_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.ttf");
        std::fs::write(&path, b"definitely not a font").unwrap();

        let font = LabelFont::resolve(&FontPreference::File(path), 24.0);
        assert!(font.is_builtin());
    }

    #[test]
    fn test_builtin_draw_places_ink_box_at_top_left() {
        let mut canvas = RgbImage::from_pixel(20, 20, Rgb([0, 0, 0]));
        let white = Rgb([255, 255, 255]);
        LabelFont::Builtin.draw(&mut canvas, "MM", (4, 6), white);

        // 'M' has ink in both top corners of its cell
        assert_eq!(*canvas.get_pixel(4, 6), white);
        assert_eq!(*canvas.get_pixel(14, 6), white);
        assert_eq!(*canvas.get_pixel(3, 6), Rgb([0, 0, 0]));
        assert_eq!(*canvas.get_pixel(4, 5), Rgb([0, 0, 0]));
        assert_eq!(*canvas.get_pixel(15, 12), Rgb([0, 0, 0]));
    }

    #[test]
    fn test_blend_extremes() {
        let bg = Rgb([102, 126, 234]);
        let fg = Rgb([255, 255, 255]);
        assert_eq!(blend(bg, fg, 0.0), bg);
        assert_eq!(blend(bg, fg, 1.0), fg);
    }

    #[test]
    fn test_blend_partial_coverage() {
        let bg = Rgb([102, 126, 234]);
        let fg = Rgb([255, 255, 255]);
        assert_eq!(blend(bg, fg, 0.5), Rgb([179, 191, 245]));
        // coverage outside 0..=1 is clamped
        assert_eq!(blend(bg, fg, 1.5), fg);
    }

    #[test]
    fn test_candidates_start_with_working_directory() {
        let candidates = system_font_candidates();
        assert_eq!(candidates[0], PathBuf::from(DEFAULT_FONT_FILE));
    }
}
