use std::path::{Path, PathBuf};

use image::{GrayImage, Luma};

use crate::error::{Error, Result};
use crate::raster::GeneratedFont;

const COLUMNS: u32 = 16;
const PADDING: u32 = 2;

/// Lays out every glyph on a grid, each cell holding one line of the font.
pub fn sheet(font: &GeneratedFont) -> GrayImage {
    let cell_width = font
        .glyphs
        .iter()
        .map(|(_, glyph)| {
            let right = glyph.x_offset.max(0) as u32 + glyph.width as u32;
            right.max(glyph.x_advance as u32)
        })
        .max()
        .unwrap_or(0)
        + PADDING * 2;
    let cell_height = font.y_advance as u32 + PADDING * 2;
    let rows = (font.glyphs.len() as u32).div_ceil(COLUMNS).max(1);

    let mut image = GrayImage::from_pixel(cell_width * COLUMNS, cell_height * rows, Luma([255]));

    for (i, (_, glyph)) in font.glyphs.iter().enumerate() {
        let i = i as u32;
        let pen_x = (i % COLUMNS) * cell_width + PADDING;
        let baseline = (i / COLUMNS) * cell_height + PADDING + font.baseline as u32;

        for (x, y) in font.glyph_pixels(glyph) {
            let x = pen_x as i64 + glyph.x_offset as i64 + x as i64;
            let y = baseline as i64 + glyph.y_offset as i64 + y as i64;

            if x >= 0 && y >= 0 && (x as u32) < image.width() && (y as u32) < image.height() {
                image.put_pixel(x as u32, y as u32, Luma([0]));
            }
        }
    }

    image
}

pub fn write(font: &GeneratedFont, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(format!("{}.png", font.name));
    std::fs::create_dir_all(dir).map_err(|source| Error::Write {
        path: dir.to_path_buf(),
        source,
    })?;

    sheet(font).save(&path).map_err(|source| Error::Preview {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::Glyph;

    #[test]
    fn sheet_has_a_cell_per_glyph() {
        let square = Glyph {
            offset: 0,
            width: 2,
            height: 2,
            x_advance: 3,
            x_offset: 0,
            y_offset: -2,
        };
        let font = GeneratedFont {
            name: "squares".to_string(),
            source_name: "squares.ttf".to_string(),
            size: 4.0,
            first: 0x41,
            last: 0x51,
            bitmap: vec![0b1111_0000],
            glyphs: ('A'..='Q').map(|c| (c, square)).collect(),
            y_advance: 4,
            baseline: 3,
        };

        let image = sheet(&font);
        // 17 glyphs wrap onto a second row
        assert_eq!(image.dimensions(), (7 * COLUMNS, 8 * 2));

        let black = image.pixels().filter(|p| p.0[0] == 0).count();
        assert_eq!(black, 17 * 4);

        // first glyph sits on the first baseline
        assert_eq!(image.get_pixel(2, 3).0[0], 0);
        assert_eq!(image.get_pixel(3, 4).0[0], 0);
        assert_eq!(image.get_pixel(2, 5).0[0], 255);
    }
}
