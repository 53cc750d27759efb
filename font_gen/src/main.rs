mod emit;
mod error;
mod manifest;
mod preview;
mod raster;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use error::Result;
use manifest::Manifest;

/// Converts the fonts listed in the manifest into GFX tables for catalyst_gfx.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    #[arg(short, long, default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/fonts.toml"))]
    manifest: PathBuf,

    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/../catalyst_gfx/src/text/font")
    )]
    out_dir: PathBuf,

    /// only regenerate this font
    #[arg(long, value_name = "NAME")]
    only: Option<String>,

    /// also write a png specimen sheet per font into DIR
    #[arg(long, value_name = "DIR")]
    preview: Option<PathBuf>,

    #[arg(long)]
    no_rustfmt: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("font_gen=info")),
        )
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", report(&err));
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let manifest = Manifest::load(&args.manifest)?;

    let fonts = match &args.only {
        Some(name) => vec![manifest.get(name)?],
        None => manifest.fonts.iter().collect(),
    };

    for spec in fonts {
        info!(
            "rasterizing {} from {} at {}pt",
            spec.name,
            spec.source.display(),
            spec.size
        );

        let font = raster::rasterize(spec)?;
        let path = emit::write(&font, &args.out_dir)?;
        info!(
            "wrote {} ({} glyphs, {} bitmap bytes)",
            path.display(),
            font.glyphs.len(),
            font.bitmap.len()
        );

        if !args.no_rustfmt {
            emit::rustfmt(&path);
        }

        if let Some(dir) = &args.preview {
            let path = preview::write(&font, dir)?;
            info!("wrote preview {}", path.display());
        }
    }

    check_declared(&manifest, &args.out_dir);

    Ok(())
}

/// Reminds about tables that still need a `mod` line in the aggregator.
fn check_declared(manifest: &Manifest, out_dir: &Path) {
    let path = out_dir.join("mod.rs");
    let Ok(aggregator) = std::fs::read_to_string(&path) else {
        return;
    };

    for font in &manifest.fonts {
        if !aggregator.contains(&format!("mod {};", font.name)) {
            warn!("{} is not declared in {}", font.name, path.display());
        }
    }
}

fn report(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(&format!(": {cause}"));
        source = cause.source();
    }
    message
}
