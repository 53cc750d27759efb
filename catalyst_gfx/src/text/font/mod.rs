//! The bundled fonts.
//!
//! `glyph` has to come first: every generated table below builds its records
//! from those types. The tables themselves are written by `font_gen`, don't
//! edit them by hand.

mod glyph;
pub use glyph::{GfxFont, GfxGlyph, GlyphPixels};

mod bold_22;
mod bold_32;
mod medium_16;
mod regular_12;
mod regular_14;

pub use bold_22::FONT as BOLD_22;
pub use bold_32::FONT as BOLD_32;
pub use medium_16::FONT as MEDIUM_16;
pub use regular_12::FONT as REGULAR_12;
pub use regular_14::FONT as REGULAR_14;

/// every bundled font, in declaration order
pub static ALL: [&GfxFont; 5] = [&BOLD_22, &BOLD_32, &MEDIUM_16, &REGULAR_12, &REGULAR_14];

pub fn by_name(name: &str) -> Option<&'static GfxFont> {
    ALL.iter().copied().find(|font| font.name == name)
}

macro_rules! check_table {
    ($table:ident) => {
        const _: () = assert!(
            glyph::table_is_consistent($table::BITMAP, $table::GLYPHS, $table::FIRST, $table::LAST),
            concat!("generated font table `", stringify!($table), "` is inconsistent, regenerate it with font_gen"),
        );
    };
}

check_table!(bold_22);
check_table!(bold_32);
check_table!(medium_16);
check_table!(regular_12);
check_table!(regular_14);
