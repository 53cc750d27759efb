//! GFX font records.
//!
//! A font is one shared bitmap plus a glyph record per character in
//! `first..=last`. Glyph bitmaps are packed MSB first with no padding between
//! rows, so a glyph takes `ceil(width * height / 8)` bytes starting at its
//! `bitmap_offset`.

use crate::types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GfxGlyph {
    pub bitmap_offset: u16,
    pub width: u8,
    pub height: u8,
    pub x_advance: u8,
    /// pen x to the left edge of the bitmap
    pub x_offset: i8,
    /// baseline to the top edge of the bitmap, negative above the baseline
    pub y_offset: i8,
}

impl GfxGlyph {
    pub const fn new(
        bitmap_offset: u16,
        width: u8,
        height: u8,
        x_advance: u8,
        x_offset: i8,
        y_offset: i8,
    ) -> GfxGlyph {
        GfxGlyph {
            bitmap_offset,
            width,
            height,
            x_advance,
            x_offset,
            y_offset,
        }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[inline]
    pub const fn bitmap_len(&self) -> usize {
        (self.width as usize * self.height as usize + 7) / 8
    }

    /// ink box relative to the pen position on the baseline
    pub const fn bounds(&self) -> Rect {
        let min = Position::new(self.x_offset as i64, self.y_offset as i64);
        Rect::new(
            min,
            Position::new(min.x + self.width as i64, min.y + self.height as i64),
        )
    }

    /// set pixels of this glyph in glyph-local coordinates. `bitmap` is the
    /// glyph's own byte span (see [`GfxFont::glyph_bitmap`]).
    pub fn pixels<'a>(&self, bitmap: &'a [u8]) -> GlyphPixels<'a> {
        GlyphPixels {
            data: bitmap,
            width: self.width as u32,
            total: self.width as u32 * self.height as u32,
            bit: 0,
        }
    }
}

pub struct GlyphPixels<'a> {
    data: &'a [u8],
    width: u32,
    total: u32,
    bit: u32,
}

impl Iterator for GlyphPixels<'_> {
    type Item = (u32, u32);

    fn next(&mut self) -> Option<(u32, u32)> {
        while self.bit < self.total {
            let byte = self.data.get((self.bit / 8) as usize).copied().unwrap_or(0);

            // whole blank byte, skip ahead
            if self.bit % 8 == 0 && byte == 0 {
                self.bit += 8;
                continue;
            }

            let bit = self.bit;
            self.bit += 1;
            if byte & (0x80 >> (bit % 8)) != 0 {
                return Some((bit % self.width, bit / self.width));
            }
        }

        None
    }
}

pub struct GfxFont {
    pub name: &'static str,
    pub bitmap: &'static [u8],
    pub glyphs: &'static [GfxGlyph],
    pub first: u16,
    pub last: u16,
    pub y_advance: u8,
    pub baseline: u8,
}

impl core::fmt::Debug for GfxFont {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GfxFont")
            .field("name", &self.name)
            .field("first", &self.first)
            .field("last", &self.last)
            .field("glyphs", &self.glyphs.len())
            .field("bitmap_len", &self.bitmap.len())
            .field("y_advance", &self.y_advance)
            .field("baseline", &self.baseline)
            .finish()
    }
}

impl GfxFont {
    pub fn glyph(&self, character: char) -> Option<&'static GfxGlyph> {
        let code = character as u32;
        if code < self.first as u32 || code > self.last as u32 {
            return None;
        }

        self.glyphs.get((code - self.first as u32) as usize)
    }

    #[inline]
    pub fn contains(&self, character: char) -> bool {
        self.glyph(character).is_some()
    }

    #[inline]
    pub const fn char_count(&self) -> usize {
        self.glyphs.len()
    }

    #[inline]
    pub const fn line_height(&self) -> u32 {
        self.y_advance as u32
    }

    pub fn glyph_bitmap(&self, glyph: &GfxGlyph) -> &'static [u8] {
        let start = glyph.bitmap_offset as usize;
        let end = (start + glyph.bitmap_len()).min(self.bitmap.len());
        self.bitmap.get(start..end).unwrap_or(&[])
    }

    /// advance width of the first line of `text`. characters the font
    /// doesn't cover take up no space.
    pub fn text_width(&self, text: &str) -> u32 {
        text.chars()
            .take_while(|&c| c != '\n')
            .filter_map(|c| self.glyph(c))
            .map(|glyph| glyph.x_advance as u32)
            .sum()
    }

    /// ink bounds of `text` drawn with its first baseline starting at `origin`
    pub fn text_bounds(&self, text: &str, origin: Position) -> Rect {
        let mut pen = origin;
        let mut bounds = Rect::at(origin);

        for c in text.chars() {
            if c == '\n' {
                pen.x = origin.x;
                pen.y += self.y_advance as i64;
                continue;
            }

            if let Some(glyph) = self.glyph(c) {
                bounds = bounds.union(&glyph.bounds().translate(pen));
                pen.x += glyph.x_advance as i64;
            }
        }

        bounds
    }
}

/// checks the shape of a generated table: one glyph per character in range,
/// every bitmap span in bounds and offsets in ascending order.
pub(super) const fn table_is_consistent(
    bitmap: &[u8],
    glyphs: &[GfxGlyph],
    first: u16,
    last: u16,
) -> bool {
    if last < first || glyphs.len() != (last - first) as usize + 1 {
        return false;
    }

    let mut prev_offset = 0;
    let mut i = 0;
    while i < glyphs.len() {
        let glyph = &glyphs[i];
        let start = glyph.bitmap_offset as usize;
        if start < prev_offset || start + glyph.bitmap_len() > bitmap.len() {
            return false;
        }
        prev_offset = start;
        i += 1;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    // 3x3 ring with the centre pixel clear, then a 2x1 bar: 0b111_101_11 0b1_0000000, 0b11_000000
    const BITMAP: &[u8] = &[0b1111_0111, 0b1000_0000, 0b1100_0000];
    const GLYPHS: &[GfxGlyph] = &[
        GfxGlyph::new(0, 0, 0, 4, 0, 0),
        GfxGlyph::new(0, 3, 3, 4, 0, -3),
        GfxGlyph::new(2, 2, 1, 3, 1, -1),
    ];

    static TINY: GfxFont = GfxFont {
        name: "tiny",
        bitmap: BITMAP,
        glyphs: GLYPHS,
        first: 0x20,
        last: 0x22,
        y_advance: 5,
        baseline: 3,
    };

    #[test]
    fn glyph_lookup_respects_range() {
        assert_eq!(TINY.glyph(' '), Some(&GLYPHS[0]));
        assert_eq!(TINY.glyph('"'), Some(&GLYPHS[2]));
        assert!(TINY.glyph('#').is_none());
        assert!(TINY.glyph('\u{1f}').is_none());
        assert!(!TINY.contains('é'));
        assert_eq!(TINY.char_count(), 3);
    }

    #[test]
    fn pixels_decode_msb_first() {
        let ring = TINY.glyph('!').unwrap();
        let pixels = ring.pixels(TINY.glyph_bitmap(ring)).collect::<Vec<_>>();
        assert_eq!(
            pixels,
            [(0, 0), (1, 0), (2, 0), (0, 1), (2, 1), (0, 2), (1, 2), (2, 2)]
        );

        let bar = TINY.glyph('"').unwrap();
        assert_eq!(TINY.glyph_bitmap(bar), &[0b1100_0000]);
        let pixels = bar.pixels(TINY.glyph_bitmap(bar)).collect::<Vec<_>>();
        assert_eq!(pixels, [(0, 0), (1, 0)]);
    }

    #[test]
    fn empty_glyph_has_no_pixels() {
        let space = TINY.glyph(' ').unwrap();
        assert!(space.is_empty());
        assert_eq!(space.bitmap_len(), 0);
        assert!(TINY.glyph_bitmap(space).is_empty());
        assert_eq!(space.pixels(&[]).count(), 0);
    }

    #[test]
    fn text_width_sums_advances_of_first_line() {
        assert_eq!(TINY.text_width(""), 0);
        assert_eq!(TINY.text_width(" !\""), 11);
        assert_eq!(TINY.text_width("!!\n!!!!"), 8);
        // unknown characters are skipped
        assert_eq!(TINY.text_width("!x!"), 8);
    }

    #[test]
    fn text_bounds_tracks_ink() {
        let bounds = TINY.text_bounds("!\"", Position::new(10, 20));
        assert_eq!(bounds.min, Position::new(10, 17));
        assert_eq!(bounds.max, Position::new(17, 20));

        let bounds = TINY.text_bounds("!\n!", Position::zero());
        assert_eq!(bounds.min, Position::new(0, -3));
        assert_eq!(bounds.max, Position::new(3, 5));
    }

    #[test]
    fn text_bounds_without_ink_is_empty_at_origin() {
        let origin = Position::new(4, 4);
        assert_eq!(TINY.text_bounds("   ", origin), Rect::at(origin));
        assert_eq!(TINY.text_bounds("", origin), Rect::at(origin));
    }

    #[test]
    fn consistency_check() {
        assert!(table_is_consistent(BITMAP, GLYPHS, 0x20, 0x22));
        // wrong range
        assert!(!table_is_consistent(BITMAP, GLYPHS, 0x20, 0x23));
        assert!(!table_is_consistent(BITMAP, GLYPHS, 0x22, 0x20));
        // bitmap too short for the last glyph
        assert!(!table_is_consistent(&BITMAP[..2], GLYPHS, 0x20, 0x22));
        // offsets going backwards
        let shuffled = [GLYPHS[0], GLYPHS[2], GLYPHS[1]];
        assert!(!table_is_consistent(BITMAP, &shuffled, 0x20, 0x22));
    }
}
