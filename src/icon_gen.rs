use crate::font::{FontPreference, LabelFont};
use crate::gradient::{paint_vertical_gradient, DEFAULT_END, DEFAULT_START};
use crate::manifest::{write_manifest, IconManifest};
use anyhow::{Context, Result};
use clap::Parser;
use image::{DynamicImage, ImageOutputFormat, Rgb, RgbImage};
use std::{
    fs::{create_dir_all, File},
    path::{Path, PathBuf},
    str::FromStr,
};

/// Sizes generated when none are given
pub const DEFAULT_SIZES: [u32; 3] = [16, 48, 128];

/// Label drawn when none is given
pub const DEFAULT_LABEL: &str = "MM";

/// Label font size as a fraction of the icon size
pub const LABEL_SCALE: f32 = 0.5;

/// Largest canvas we agree to allocate
pub const MAX_ICON_SIZE: u32 = 16_384;

#[derive(Debug, Parser)]
#[clap(
    name = "placeholder-icons",
    about = "Generate gradient placeholder icons with a centered text label"
)]
pub struct Args {
    /// Output directory. Icons are written to the working directory when omitted.
    #[clap(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Icon sizes to generate.
    #[clap(short, long, value_delimiter = ',', value_name = "SIZES", default_values_t = DEFAULT_SIZES)]
    pub sizes: Vec<u32>,

    /// Text drawn in the middle of every icon
    #[clap(long, value_name = "TEXT", default_value = DEFAULT_LABEL)]
    pub label: String,

    /// TrueType font used for the label. Falls back to the built-in font if it can't be loaded.
    #[clap(long, value_name = "PATH", conflicts_with = "builtin_font")]
    pub font: Option<PathBuf>,

    /// Always use the built-in bitmap font
    #[clap(long)]
    pub builtin_font: bool,

    /// Gradient color of the top row (CSS color format)
    #[clap(long, value_name = "COLOR", default_value = "#667eea", value_parser = parse_color)]
    pub start_color: Rgb<u8>,

    /// Gradient color approached by the bottom row (CSS color format)
    #[clap(long, value_name = "COLOR", default_value = "#767eea", value_parser = parse_color)]
    pub end_color: Rgb<u8>,

    /// Label color (CSS color format)
    #[clap(long, value_name = "COLOR", default_value = "#ffffff", value_parser = parse_color)]
    pub text_color: Rgb<u8>,

    /// Also write icons.json with the size to file mapping for an extension manifest
    #[clap(long)]
    pub manifest: bool,

    /// Keep generating the remaining sizes when one fails
    #[clap(long)]
    pub continue_on_error: bool,
}

impl Args {
    pub fn style(&self) -> IconStyle {
        let font = if self.builtin_font {
            FontPreference::Builtin
        } else if let Some(path) = &self.font {
            FontPreference::File(path.clone())
        } else {
            FontPreference::System
        };

        IconStyle {
            start: self.start_color,
            end: self.end_color,
            text_color: self.text_color,
            label: self.label.clone(),
            font,
        }
    }
}

/// How an icon looks, independent of its size
#[derive(Debug, Clone, PartialEq)]
pub struct IconStyle {
    pub start: Rgb<u8>,
    pub end: Rgb<u8>,
    pub text_color: Rgb<u8>,
    pub label: String,
    pub font: FontPreference,
}

impl Default for IconStyle {
    fn default() -> Self {
        Self {
            start: DEFAULT_START,
            end: DEFAULT_END,
            text_color: Rgb([255, 255, 255]),
            label: DEFAULT_LABEL.to_string(),
            font: FontPreference::System,
        }
    }
}

/// Parse a CSS color into an opaque RGB value
pub fn parse_color(color: &str) -> Result<Rgb<u8>, String> {
    let channel = |value: f32| (value.clamp(0.0, 1.0) * 255.).round() as u8;
    css_color::Srgb::from_str(color)
        .map(|color| {
            Rgb([
                channel(color.red),
                channel(color.green),
                channel(color.blue),
            ])
        })
        .map_err(|_| format!("invalid CSS color: {color}"))
}

/// Generate every requested icon, then print a summary line
pub fn generate_icons(args: Args) -> Result<()> {
    if let Some(dir) = &args.output {
        create_dir_all(dir).context("Can't create output directory")?;
    }

    let style = args.style();
    let mut manifest = IconManifest::new();
    let mut failed = 0;

    for &size in &args.sizes {
        let filename = icon_filename(size);
        let path = match &args.output {
            Some(dir) => dir.join(&filename),
            None => PathBuf::from(&filename),
        };

        match create_icon(size, &path, &style) {
            Ok(()) => manifest.add_icon(size, filename),
            Err(err) if args.continue_on_error => {
                eprintln!("✗ Failed {}: {err:#}", path.display());
                failed += 1;
            }
            Err(err) => return Err(err),
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {} icons failed", args.sizes.len());
    }

    if args.manifest {
        let dir = args.output.as_deref().unwrap_or(Path::new("."));
        let path = write_manifest(dir, &manifest)?;
        println!("Created {}", path.display());
    }

    println!("✅ All icons created!");
    Ok(())
}

/// File name used for an icon of `size` pixels
pub fn icon_filename(size: u32) -> String {
    format!("icon{size}.png")
}

/// Render an icon and write it to `path` as PNG, replacing any existing file
pub fn create_icon(size: u32, path: &Path, style: &IconStyle) -> Result<()> {
    let canvas = render_icon(size, style)?;
    save_png(canvas, path)?;
    println!("Created {}", path.display());
    Ok(())
}

/// Paint the gradient background and the centered label on a fresh canvas
pub fn render_icon(size: u32, style: &IconStyle) -> Result<RgbImage> {
    validate_size(size)?;

    let mut canvas = RgbImage::new(size, size);
    paint_vertical_gradient(&mut canvas, style.start, style.end);

    let font = LabelFont::resolve(&style.font, label_pixel_size(size));
    if let Some(bounds) = font.measure(&style.label) {
        let position = label_position(size, bounds.width(), bounds.height());
        font.draw(&mut canvas, &style.label, position, style.text_color);
    }

    Ok(canvas)
}

fn validate_size(size: u32) -> Result<()> {
    if size == 0 {
        anyhow::bail!("Icon size must be positive");
    }
    if size > MAX_ICON_SIZE {
        anyhow::bail!("Icon size {size} exceeds the maximum of {MAX_ICON_SIZE}");
    }
    Ok(())
}

/// Font size in pixels for an icon of `size`
pub fn label_pixel_size(size: u32) -> f32 {
    (size as f32 * LABEL_SCALE).round().max(1.0)
}

/// Top-left corner that centers a `width` x `height` box, rounding towards the top-left
pub fn label_position(size: u32, width: i32, height: i32) -> (i32, i32) {
    let size = size as i32;
    ((size - width).div_euclid(2), (size - height).div_euclid(2))
}

fn save_png(canvas: RgbImage, path: &Path) -> Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    DynamicImage::ImageRgb8(canvas)
        .write_to(&mut file, ImageOutputFormat::Png)
        .with_context(|| format!("Failed to write PNG {}", path.display()))?;
    Ok(())
}
