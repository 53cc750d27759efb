use std::path::PathBuf;

use anyhow::{anyhow, bail, Context};
use catalyst_gfx::{
    fonts::{self, GfxFont},
    text::{Lines, TextWrap},
    Color, Dimension, Framebuffer, PixelFormat, Position, Rect,
};
use clap::{Parser, Subcommand};
use image::GrayImage;
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// space around rendered text, ink may reach past the advance box
const PADDING: u32 = 2;

const MAX_SCALE: i64 = 64;

#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// list the bundled fonts
    List,

    /// print layout metrics of TEXT as json
    Metrics {
        #[arg(short, long)]
        font: String,

        /// wrap lines at this many pixels
        #[arg(short, long)]
        wrap: Option<u32>,

        text: String,
    },

    /// draw TEXT to the terminal, or into a png with --out
    Render {
        #[arg(short, long)]
        font: String,

        /// pixel size multiplier for the output
        #[arg(
            short,
            long,
            default_value_t = 1,
            value_parser = clap::value_parser!(u32).range(1..=MAX_SCALE)
        )]
        scale: u32,

        /// wrap lines at this many pixels
        #[arg(short, long)]
        wrap: Option<u32>,

        #[arg(short, long)]
        out: Option<PathBuf>,

        text: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("catalyst=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match args.command {
        Command::List => {
            for font in fonts::ALL {
                println!("{}", describe(font));
            }
        }
        Command::Metrics { font, wrap, text } => {
            let font = find_font(&font)?;
            let metrics = TextMetrics::measure(font, &text, wrap);
            println!("{}", serde_json::to_string_pretty(&metrics)?);
        }
        Command::Render {
            font,
            scale,
            wrap,
            out,
            text,
        } => {
            let font = find_font(&font)?;
            let image = render(font, &text, wrap)?;
            let image = upscale(&image, scale)?;

            match out {
                Some(path) => {
                    image
                        .save(&path)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    info!(
                        "wrote {}x{} image to {}",
                        image.width(),
                        image.height(),
                        path.display()
                    );
                }
                None => print!("{}", to_blocks(&image)),
            }
        }
    }

    Ok(())
}

fn find_font(name: &str) -> anyhow::Result<&'static GfxFont> {
    fonts::by_name(name).ok_or_else(|| {
        let names = fonts::ALL.iter().map(|font| font.name).collect::<Vec<_>>();
        anyhow!("no font named `{name}`, available: {}", names.join(", "))
    })
}

fn describe(font: &GfxFont) -> String {
    format!(
        "{:<12} {:#06x}..={:#06x}  line height {:>2}  baseline {:>2}  {:>3} glyphs  {:>5} bytes",
        font.name,
        font.first,
        font.last,
        font.line_height(),
        font.baseline,
        font.char_count(),
        font.bitmap.len()
    )
}

fn layout<'a>(font: &'a GfxFont, text: &'a str, wrap: Option<u32>) -> Lines<'a> {
    let (mode, max_width) = match wrap {
        Some(width) => (TextWrap::Enabled, width),
        None => (TextWrap::Disabled, u32::MAX),
    };

    Lines::layout(font, text, mode, Dimension::new(max_width, u32::MAX))
}

#[derive(Debug, Serialize)]
struct TextMetrics<'a> {
    font: &'a str,
    line_height: u32,
    baseline: u8,
    /// advance width of the first line
    width: u32,
    /// ink bounds with the first baseline at the origin
    bounds: Rect,
    layout: Dimension,
    lines: Vec<LineMetrics<'a>>,
}

#[derive(Debug, Serialize)]
struct LineMetrics<'a> {
    text: &'a str,
    width: u32,
}

impl<'a> TextMetrics<'a> {
    fn measure(font: &'a GfxFont, text: &'a str, wrap: Option<u32>) -> Self {
        let lines = layout(font, text, wrap);

        Self {
            font: font.name,
            line_height: font.line_height(),
            baseline: font.baseline,
            width: font.text_width(text),
            bounds: font.text_bounds(text, Position::zero()),
            layout: lines.dimensions(),
            lines: lines
                .iter()
                .map(|line| LineMetrics {
                    text: line.text,
                    width: line.width,
                })
                .collect(),
        }
    }
}

/// draws `text` white on black into a grayscale image
fn render(font: &GfxFont, text: &str, wrap: Option<u32>) -> anyhow::Result<GrayImage> {
    let lines = layout(font, text, wrap);
    let dimensions = Dimension::new(
        lines.dimensions().width + PADDING * 2,
        lines.dimensions().height + PADDING * 2,
    );
    debug!(?dimensions, lines = lines.len(), "rendering");

    let mut buffer = vec![0u8; dimensions.width as usize * dimensions.height as usize];
    let mut fb = Framebuffer::new(
        &mut buffer,
        dimensions,
        dimensions.width as usize,
        1,
        PixelFormat::U8,
    );
    fb.clear();
    lines.draw(
        &mut fb,
        Position::new(PADDING as i64, PADDING as i64),
        Color::WHITE,
    );

    let dimensions = fb.dimensions();
    GrayImage::from_raw(dimensions.width, dimensions.height, fb.buffer().to_vec())
        .ok_or_else(|| anyhow!("framebuffer doesn't cover {dimensions:?}"))
}

fn upscale(image: &GrayImage, scale: u32) -> anyhow::Result<GrayImage> {
    if scale == 1 {
        return Ok(image.clone());
    }

    let (Some(width), Some(height)) = (
        image.width().checked_mul(scale),
        image.height().checked_mul(scale),
    ) else {
        bail!(
            "{}x{} scaled by {scale} is too large",
            image.width(),
            image.height()
        );
    };

    Ok(GrayImage::from_fn(width, height, |x, y| {
        *image.get_pixel(x / scale, y / scale)
    }))
}

/// two pixel rows per line of half blocks
fn to_blocks(image: &GrayImage) -> String {
    let lit = |x: u32, y: u32| y < image.height() && image.get_pixel(x, y).0[0] > 127;

    let mut out = String::new();
    for y in (0..image.height()).step_by(2) {
        for x in 0..image.width() {
            out.push(match (lit(x, y), lit(x, y + 1)) {
                (true, true) => '█',
                (true, false) => '▀',
                (false, true) => '▄',
                (false, false) => ' ',
            });
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_font_lists_the_available_ones() {
        let err = find_font("comic_sans").unwrap_err().to_string();
        assert!(err.contains("comic_sans"));
        for font in fonts::ALL {
            assert!(err.contains(font.name));
        }

        assert!(std::ptr::eq(find_font("bold_32").unwrap(), &fonts::BOLD_32));
    }

    #[test]
    fn describe_names_the_font() {
        let line = describe(&fonts::REGULAR_12);
        assert!(line.starts_with("regular_12 "));
        assert!(line.contains("0x0020..=0x007e"));
        assert!(line.contains("95 glyphs"));
    }

    #[test]
    fn metrics_follow_the_layout() {
        let metrics = TextMetrics::measure(&fonts::REGULAR_14, "one two three", Some(40));
        assert_eq!(metrics.width, fonts::REGULAR_14.text_width("one two three"));
        assert!(metrics.lines.len() > 1);
        assert!(metrics.lines.iter().all(|line| line.width <= 40));
        assert_eq!(
            metrics.layout.height,
            metrics.lines.len() as u32 * fonts::REGULAR_14.line_height()
        );

        let json = serde_json::to_value(&metrics).unwrap();
        assert_eq!(json["font"], "regular_14");
        assert_eq!(json["lines"][0]["text"], metrics.lines[0].text);
        assert!(json["bounds"]["min"]["y"].as_i64().unwrap() < 0);
    }

    #[test]
    fn render_fits_text_with_padding() {
        let font = &fonts::MEDIUM_16;
        let image = render(font, "Hi\nthere", None).unwrap();

        assert_eq!(
            image.dimensions(),
            (
                font.text_width("there") + PADDING * 2,
                font.line_height() * 2 + PADDING * 2
            )
        );
        assert!(image.pixels().any(|p| p.0[0] == 255));

        // nothing is drawn into the padding on the left
        assert!((0..image.height()).all(|y| image.get_pixel(0, y).0[0] == 0));
    }

    #[test]
    fn upscale_multiplies_dimensions() {
        let image = render(&fonts::REGULAR_12, "a", None).unwrap();
        let scaled = upscale(&image, 3).unwrap();
        assert_eq!(scaled.width(), image.width() * 3);
        assert_eq!(scaled.height(), image.height() * 3);
        assert_eq!(
            scaled.pixels().filter(|p| p.0[0] == 255).count(),
            image.pixels().filter(|p| p.0[0] == 255).count() * 9
        );
    }

    #[test]
    fn upscale_refuses_to_overflow() {
        let image = GrayImage::new(70_000, 1);
        let err = upscale(&image, 70_000).unwrap_err().to_string();
        assert!(err.contains("too large"));

        assert_eq!(upscale(&image, 1).unwrap().dimensions(), (70_000, 1));
    }

    #[test]
    fn scale_is_bounded_on_the_command_line() {
        let parse = |scale: &str| {
            Args::try_parse_from(["catalyst", "render", "-f", "bold_22", "-s", scale, "x"])
        };

        assert!(parse("64").is_ok());
        assert!(parse("0").is_err());
        assert!(parse("65").is_err());
        assert!(parse("4294967295").is_err());
    }

    #[test]
    fn blocks_pair_up_rows() {
        let mut image = GrayImage::new(2, 3);
        image.put_pixel(0, 0, image::Luma([255]));
        image.put_pixel(1, 1, image::Luma([255]));
        image.put_pixel(0, 2, image::Luma([255]));

        assert_eq!(to_blocks(&image), "▀▄\n▀ \n");
    }
}
