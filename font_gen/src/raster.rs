use ab_glyph::{point, Font, FontVec, PxScale, ScaleFont};
use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::manifest::FontSpec;

/// A glyph as it will end up in the table, already range checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub offset: u16,
    pub width: u8,
    pub height: u8,
    pub x_advance: u8,
    pub x_offset: i8,
    pub y_offset: i8,
}

#[derive(Debug)]
pub struct GeneratedFont {
    pub name: String,
    pub source_name: String,
    pub size: f32,
    pub first: u16,
    pub last: u16,
    pub bitmap: Vec<u8>,
    pub glyphs: Vec<(char, Glyph)>,
    pub y_advance: u8,
    pub baseline: u8,
}

impl GeneratedFont {
    pub fn glyph_pixels(&self, glyph: &Glyph) -> impl Iterator<Item = (u32, u32)> + '_ {
        let width = glyph.width as usize;
        let len = width * glyph.height as usize;
        let offset = glyph.offset as usize;

        (0..len)
            .filter(move |bit| {
                let byte = self.bitmap.get(offset + bit / 8).copied().unwrap_or(0);
                byte & (0x80 >> (bit % 8)) != 0
            })
            .map(move |bit| ((bit % width) as u32, (bit / width) as u32))
    }
}

/// Coverage of a single glyph, cropped to its inked pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedGlyph {
    pub character: char,
    pub width: u32,
    pub height: u32,
    /// row major, `width * height` entries
    pub pixels: Vec<bool>,
    pub x_advance: f32,
    /// left edge relative to the pen
    pub x_offset: i32,
    /// top edge relative to the baseline, negative above it
    pub y_offset: i32,
}

impl RenderedGlyph {
    pub fn empty(character: char, x_advance: f32) -> Self {
        Self {
            character,
            width: 0,
            height: 0,
            pixels: Vec::new(),
            x_advance,
            x_offset: 0,
            y_offset: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineMetrics {
    pub ascent: f32,
    /// negative below the baseline
    pub descent: f32,
    pub line_gap: f32,
}

pub fn rasterize(spec: &FontSpec) -> Result<GeneratedFont> {
    let data = std::fs::read(&spec.source).map_err(|source| Error::Read {
        path: spec.source.clone(),
        source,
    })?;

    rasterize_font(spec, data)
}

pub fn rasterize_font(spec: &FontSpec, data: Vec<u8>) -> Result<GeneratedFont> {
    let invalid = || Error::InvalidFont {
        name: spec.name.clone(),
        path: spec.source.clone(),
    };

    let font = FontVec::try_from_vec(data).map_err(|_| invalid())?;
    let units_per_em = font.units_per_em().ok_or_else(invalid)?;

    // ab_glyph scales by ascent - descent, not by the em square
    let scale = PxScale::from(spec.px_size() * font.height_unscaled() / units_per_em);
    let scaled = font.as_scaled(scale);
    let metrics = LineMetrics {
        ascent: scaled.ascent(),
        descent: scaled.descent(),
        line_gap: scaled.line_gap(),
    };

    let chars = spec.chars().collect::<Vec<_>>();
    let mut rendered = chars
        .par_iter()
        .map(|&c| render_glyph(&font, scale, c, spec.threshold))
        .collect::<Vec<_>>();
    rendered.sort_by_key(|glyph| glyph.character);

    assemble(spec, metrics, &rendered)
}

fn render_glyph(font: &FontVec, scale: PxScale, character: char, threshold: f32) -> RenderedGlyph {
    // missing characters fall back to .notdef
    let id = font.glyph_id(character);
    let x_advance = font.as_scaled(scale).h_advance(id);

    let glyph = id.with_scale_and_position(scale, point(0.0, 0.0));
    let Some(outline) = font.outline_glyph(glyph) else {
        return RenderedGlyph::empty(character, x_advance);
    };

    let bounds = outline.px_bounds();
    let width = bounds.width() as u32;
    let height = bounds.height() as u32;

    let mut pixels = vec![false; (width * height) as usize];
    outline.draw(|x, y, coverage| {
        if coverage >= threshold {
            if let Some(pixel) = pixels.get_mut((y * width + x) as usize) {
                *pixel = true;
            }
        }
    });

    crop(RenderedGlyph {
        character,
        width,
        height,
        pixels,
        x_advance,
        x_offset: bounds.min.x as i32,
        y_offset: bounds.min.y as i32,
    })
}

/// Strips empty rows and columns from the edges, adjusting the offsets to match.
pub fn crop(glyph: RenderedGlyph) -> RenderedGlyph {
    let width = glyph.width as usize;
    let set = |x: usize, y: usize| glyph.pixels[y * width + x];

    let rows = (0..glyph.height as usize)
        .filter(|&y| (0..width).any(|x| set(x, y)))
        .collect::<Vec<_>>();
    let cols = (0..width)
        .filter(|&x| rows.iter().any(|&y| set(x, y)))
        .collect::<Vec<_>>();

    let (Some(&top), Some(&bottom), Some(&left), Some(&right)) =
        (rows.first(), rows.last(), cols.first(), cols.last())
    else {
        return RenderedGlyph::empty(glyph.character, glyph.x_advance);
    };

    let pixels = (top..=bottom)
        .flat_map(|y| (left..=right).map(move |x| (x, y)))
        .map(|(x, y)| set(x, y))
        .collect();

    RenderedGlyph {
        character: glyph.character,
        width: (right - left + 1) as u32,
        height: (bottom - top + 1) as u32,
        pixels,
        x_advance: glyph.x_advance,
        x_offset: glyph.x_offset + left as i32,
        y_offset: glyph.y_offset + top as i32,
    }
}

/// Packs pixels MSB first without any row padding. The last byte is zero filled.
pub fn pack_bits(pixels: &[bool]) -> Vec<u8> {
    pixels
        .chunks(8)
        .map(|chunk| {
            chunk
                .iter()
                .enumerate()
                .fold(0, |acc, (i, &set)| if set { acc | (0x80 >> i) } else { acc })
        })
        .collect()
}

/// Turns rendered glyphs into table data, failing on anything the GFX fields can't hold.
pub fn assemble(
    spec: &FontSpec,
    metrics: LineMetrics,
    rendered: &[RenderedGlyph],
) -> Result<GeneratedFont> {
    let out_of_range = |character: char, reason: &'static str| Error::GlyphOutOfRange {
        name: spec.name.clone(),
        character,
        reason,
    };

    let mut bitmap = Vec::new();
    let mut glyphs = Vec::with_capacity(rendered.len());

    for glyph in rendered {
        let c = glyph.character;

        let offset = u16::try_from(bitmap.len()).map_err(|_| Error::BitmapTooLarge {
            name: spec.name.clone(),
            len: bitmap.len(),
        })?;

        let packed = Glyph {
            offset,
            width: u8::try_from(glyph.width).map_err(|_| out_of_range(c, "width"))?,
            height: u8::try_from(glyph.height).map_err(|_| out_of_range(c, "height"))?,
            x_advance: u8::try_from(glyph.x_advance.round() as i32)
                .map_err(|_| out_of_range(c, "x advance"))?,
            x_offset: i8::try_from(glyph.x_offset).map_err(|_| out_of_range(c, "x offset"))?,
            y_offset: i8::try_from(glyph.y_offset).map_err(|_| out_of_range(c, "y offset"))?,
        };

        bitmap.extend(pack_bits(&glyph.pixels));
        glyphs.push((c, packed));
    }

    let line_metric = |value: f32, reason: &'static str| {
        u8::try_from(value.round() as i32).map_err(|_| Error::InvalidSpec {
            name: spec.name.clone(),
            reason: format!("{reason} of {value} doesn't fit the GFX format"),
        })
    };

    Ok(GeneratedFont {
        name: spec.name.clone(),
        source_name: spec.source_name(),
        size: spec.size,
        first: spec.first,
        last: spec.last,
        bitmap,
        glyphs,
        y_advance: line_metric(
            metrics.ascent - metrics.descent + metrics.line_gap,
            "line height",
        )?,
        baseline: line_metric(metrics.ascent, "ascent")?,
    })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn spec(first: char, last: char) -> FontSpec {
        FontSpec {
            name: "test".to_string(),
            source: PathBuf::from("fonts/DejaVuSans-Bold.ttf"),
            size: 22.0,
            dpi: 72.0,
            first: first as u16,
            last: last as u16,
            threshold: 0.5,
        }
    }

    fn glyph(character: char, width: u32, height: u32, pixels: &str) -> RenderedGlyph {
        RenderedGlyph {
            character,
            width,
            height,
            pixels: pixels.chars().map(|c| c == '#').collect(),
            x_advance: width as f32 + 1.0,
            x_offset: 0,
            y_offset: -(height as i32),
        }
    }

    const METRICS: LineMetrics = LineMetrics {
        ascent: 9.6,
        descent: -2.4,
        line_gap: 0.0,
    };

    #[test]
    fn bits_are_packed_msb_first() {
        let pixels = "#..##..#  #".chars().map(|c| c == '#').collect::<Vec<_>>();
        assert_eq!(pack_bits(&pixels), [0b1001_1001, 0b0010_0000]);

        let pixels = "########.#".chars().map(|c| c == '#').collect::<Vec<_>>();
        assert_eq!(pack_bits(&pixels), [0xff, 0b0100_0000]);

        assert!(pack_bits(&[]).is_empty());
    }

    #[test]
    fn crop_strips_empty_edges() {
        let mut padded = glyph(
            'x',
            4,
            4,
            "....\
             .##.\
             ..#.\
             ....",
        );
        padded.x_offset = 1;
        padded.y_offset = -7;

        let cropped = crop(padded);
        assert_eq!((cropped.width, cropped.height), (2, 2));
        assert_eq!(cropped.pixels, [true, true, false, true]);
        assert_eq!((cropped.x_offset, cropped.y_offset), (2, -6));
    }

    #[test]
    fn crop_of_blank_glyph_is_empty() {
        let cropped = crop(glyph(' ', 3, 3, "........."));
        assert_eq!(cropped, RenderedGlyph::empty(' ', 4.0));
    }

    #[test]
    fn assemble_lays_out_bitmap() {
        let rendered = [
            glyph('a', 3, 3, "#.#.#.#.#"),
            glyph('b', 0, 0, ""),
            glyph('c', 2, 1, "##"),
        ];
        let font = assemble(&spec('a', 'c'), METRICS, &rendered).unwrap();

        assert_eq!(font.bitmap, [0b1010_1010, 0b1000_0000, 0b1100_0000]);
        let offsets = font.glyphs.iter().map(|(_, g)| g.offset).collect::<Vec<_>>();
        assert_eq!(offsets, [0, 2, 2]);
        assert_eq!(font.glyphs[0].1.x_advance, 4);
        assert_eq!(font.glyphs[0].1.y_offset, -3);
        assert_eq!(font.y_advance, 12);
        assert_eq!(font.baseline, 10);
        assert_eq!(font.source_name, "DejaVuSans-Bold.ttf");

        let pixels = font.glyph_pixels(&font.glyphs[0].1).collect::<Vec<_>>();
        assert_eq!(pixels, [(0, 0), (2, 0), (1, 1), (0, 2), (2, 2)]);
    }

    #[test]
    fn assemble_rejects_oversized_glyphs() {
        let mut wide = glyph('w', 300, 1, "");
        wide.pixels = vec![true; 300];
        assert!(matches!(
            assemble(&spec('w', 'w'), METRICS, &[wide]),
            Err(Error::GlyphOutOfRange { character: 'w', reason: "width", .. })
        ));

        let mut low = glyph('g', 1, 1, "#");
        low.y_offset = 200;
        assert!(matches!(
            assemble(&spec('g', 'g'), METRICS, &[low]),
            Err(Error::GlyphOutOfRange { reason: "y offset", .. })
        ));

        let mut back = glyph('b', 1, 1, "#");
        back.x_advance = -3.0;
        assert!(matches!(
            assemble(&spec('b', 'b'), METRICS, &[back]),
            Err(Error::GlyphOutOfRange { reason: "x advance", .. })
        ));
    }

    #[test]
    fn assemble_rejects_bitmaps_past_u16_offsets() {
        // each glyph packs to 8129 bytes, the tenth one starts past u16::MAX
        let big = |c| RenderedGlyph {
            pixels: vec![true; 255 * 255],
            x_advance: 200.0,
            y_offset: 0,
            ..glyph(c, 255, 255, "")
        };
        let rendered = ('a'..='j').map(big).collect::<Vec<_>>();
        assert!(matches!(
            assemble(&spec('a', 'j'), METRICS, &rendered),
            Err(Error::BitmapTooLarge { len: 73161, .. })
        ));

        // nine of them still fit
        let font = assemble(&spec('a', 'i'), METRICS, &rendered[..9]).unwrap();
        assert_eq!(font.glyphs[8].1.offset, 65032);
    }

    #[test]
    fn rasterizes_bundled_font() {
        let data = include_bytes!("../fonts/DejaVuSans-Bold.ttf").to_vec();
        let font = rasterize_font(&spec(' ', '~'), data).unwrap();

        assert_eq!(font.glyphs.len(), 95);
        assert!(font.glyphs.windows(2).all(|w| w[0].0 < w[1].0));

        let (space, blank) = font.glyphs[0];
        assert_eq!(space, ' ');
        assert_eq!((blank.width, blank.height), (0, 0));
        assert!(blank.x_advance > 0);

        for &(c, glyph) in &font.glyphs[1..] {
            assert!(glyph.width > 0 && glyph.height > 0, "{c:?} has no ink");
            let end = glyph.offset as usize
                + (glyph.width as usize * glyph.height as usize).div_ceil(8);
            assert!(end <= font.bitmap.len());
        }

        // 22px bold lands close to the bundled table
        assert!((24..=28).contains(&font.y_advance));
        assert!((18..=22).contains(&font.baseline));

        let digits = font
            .glyphs
            .iter()
            .filter(|(c, _)| c.is_ascii_digit())
            .map(|(_, g)| g.x_advance)
            .collect::<Vec<_>>();
        assert!(digits.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn garbage_is_not_a_font() {
        assert!(matches!(
            rasterize_font(&spec('a', 'b'), b"definitely not a font".to_vec()),
            Err(Error::InvalidFont { .. })
        ));
    }
}
