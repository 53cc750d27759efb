use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid manifest {path}")]
    Manifest {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("font `{name}`: {reason}")]
    InvalidSpec { name: String, reason: String },

    #[error("font `{name}`: {path} is not a usable OTF/TTF font")]
    InvalidFont { name: String, path: PathBuf },

    #[error("font `{name}`: glyph {character:?} doesn't fit the GFX format ({reason})")]
    GlyphOutOfRange {
        name: String,
        character: char,
        reason: &'static str,
    },

    #[error("font `{name}`: bitmap is {len} bytes, glyph offsets only reach {}", u16::MAX)]
    BitmapTooLarge { name: String, len: usize },

    #[error("no font named `{0}` in the manifest")]
    UnknownFont(String),

    #[error("failed to write preview {path}")]
    Preview {
        path: PathBuf,
        source: image::ImageError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
