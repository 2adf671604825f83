use anyhow::{Context, Result};
use image::Rgb;
use placeholder_icons::gradient::{DEFAULT_END, DEFAULT_START};
use placeholder_icons::icon_gen::parse_color;
use placeholder_icons::inspect::{centering_offset, label_ink_bounds};

const USAGE: &str = "usage: inspect_icon [PATH] [START_COLOR] [END_COLOR]";

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "icon128.png".to_string());
    // gradient endpoints the icon was generated with, defaults otherwise
    let start = color_arg(args.next(), DEFAULT_START)?;
    let end = color_arg(args.next(), DEFAULT_END)?;

    let img = image::open(&path)
        .with_context(|| format!("Failed to open {path}"))?
        .to_rgb8();
    let (width, height) = img.dimensions();

    println!("Checking icon: {}", path);
    println!("Image dimensions: {}x{}", width, height);
    if width != height || width == 0 {
        anyhow::bail!("Icon is not a non-empty square");
    }

    let top = img.get_pixel(0, 0);
    let bottom = img.get_pixel(0, height - 1);
    println!("  Top row RGB:    [{}, {}, {}]", top[0], top[1], top[2]);
    println!("  Bottom row RGB: [{}, {}, {}]", bottom[0], bottom[1], bottom[2]);

    match label_ink_bounds(&img, start, end) {
        Some(bounds) => {
            let (dx, dy) = centering_offset(width, &bounds);
            println!(
                "\nLabel ink box: x={}..{} y={}..{} ({}x{})",
                bounds.min.x,
                bounds.max.x,
                bounds.min.y,
                bounds.max.y,
                bounds.width(),
                bounds.height()
            );
            println!("  Offset from center: ({}, {})", dx, dy);

            if dx.abs() <= 1 && dy.abs() <= 1 {
                println!("✓ Label is centered");
            } else {
                println!("⚠ Label is off center");
            }
        }
        None => println!("⚠ No label found on the gradient"),
    }

    Ok(())
}

fn color_arg(arg: Option<String>, default: Rgb<u8>) -> Result<Rgb<u8>> {
    match arg {
        Some(color) => parse_color(&color).map_err(|err| anyhow::anyhow!("{err}\n{USAGE}")),
        None => Ok(default),
    }
}
