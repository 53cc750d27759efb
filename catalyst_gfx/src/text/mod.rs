pub mod font;
pub use font::{GfxFont, GfxGlyph};

mod lines;
pub use lines::{Line, Lines, TextWrap};
