use crate::fonts::GfxFont;
use crate::types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Rgb,
    Bgr,
    /// one grayscale byte per pixel
    U8,
}

impl PixelFormat {
    /// bytes a pixel needs at minimum, the stride of a pixel may be larger
    pub const fn min_bytes_per_pixel(&self) -> usize {
        match self {
            PixelFormat::Rgb | PixelFormat::Bgr => 3,
            PixelFormat::U8 => 1,
        }
    }
}

pub struct Framebuffer<'a> {
    buffer: &'a mut [u8],

    dimensions: Dimension,

    /// in pixels
    stride: usize,
    bytes_per_pixel: usize,
    format: PixelFormat,
}

impl core::fmt::Debug for Framebuffer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Framebuffer")
            .field("dimensions", &self.dimensions)
            .field("stride", &self.stride)
            .field("bytes_per_pixel", &self.bytes_per_pixel)
            .field("format", &self.format)
            .finish()
    }
}

impl<'a> Framebuffer<'a> {
    pub fn new(
        buffer: &'a mut [u8],
        dimensions: Dimension,
        stride: usize,
        bytes_per_pixel: usize,
        format: PixelFormat,
    ) -> Self {
        Self {
            buffer,
            dimensions,
            stride: stride.max(dimensions.width as usize),
            bytes_per_pixel: bytes_per_pixel.max(format.min_bytes_per_pixel()),
            format,
        }
    }

    #[inline(always)]
    pub fn buffer(&self) -> &[u8] {
        self.buffer.as_ref()
    }

    #[inline(always)]
    pub fn dimensions(&self) -> Dimension {
        self.dimensions
    }

    #[inline(always)]
    pub fn clear(&mut self) {
        self.buffer.fill(0);
    }

    pub fn draw_rect(&mut self, rect: &Rect, color: &Color) {
        let min_x = rect.min.x.max(0);
        let min_y = rect.min.y.max(0);
        let max_x = rect.max.x.min(self.dimensions.width as i64);
        let max_y = rect.max.y.min(self.dimensions.height as i64);

        for y in min_y..max_y {
            for x in min_x..max_x {
                self.draw_pixel(&Position { x, y }, color);
            }
        }
    }

    /// draws a single character with the pen at `position` on the baseline.
    /// returns how far the pen moves, 0 if the font doesn't cover `character`.
    pub fn draw_char(
        &mut self,
        font: &GfxFont,
        color: &Color,
        character: char,
        position: &Position,
    ) -> u32 {
        let Some(glyph) = font.glyph(character) else {
            return 0;
        };

        let origin = *position + Position::new(glyph.x_offset as i64, glyph.y_offset as i64);

        for (x, y) in glyph.pixels(font.glyph_bitmap(glyph)) {
            self.draw_pixel(&(origin + Position::new(x as i64, y as i64)), color);
        }

        glyph.x_advance as u32
    }

    /// draws `string` with its first baseline starting at `position`. returns
    /// the pen position after the last character.
    pub fn draw_str(
        &mut self,
        font: &GfxFont,
        color: &Color,
        string: &str,
        position: &Position,
    ) -> Position {
        let mut pen = *position;

        for c in string.chars() {
            if c == '\n' {
                pen.x = position.x;
                pen.y += font.y_advance as i64;
                continue;
            }

            pen.x += self.draw_char(font, color, c, &pen) as i64;
        }

        pen
    }

    pub fn draw_pixel(&mut self, position: &Position, color: &Color) {
        if let Some(offset) = self.pixel_offset(position) {
            self.draw_pixel_raw(offset, color);
        }
    }

    pub fn get_pixel(&self, position: &Position) -> Option<Color> {
        let offset = self.pixel_offset(position)?;
        let pixel_bytes = self.buffer.get(offset..offset + self.format.min_bytes_per_pixel())?;

        Some(match self.format {
            PixelFormat::Rgb => Color::new(pixel_bytes[0], pixel_bytes[1], pixel_bytes[2]),
            PixelFormat::Bgr => Color::new(pixel_bytes[2], pixel_bytes[1], pixel_bytes[0]),
            PixelFormat::U8 => Color::new(pixel_bytes[0], pixel_bytes[0], pixel_bytes[0]),
        })
    }

    #[inline(always)]
    fn pixel_offset(&self, position: &Position) -> Option<usize> {
        if !Rect::from_dimensions(self.dimensions).contains(*position) {
            return None;
        }

        Some((position.y as usize * self.stride + position.x as usize) * self.bytes_per_pixel)
    }

    #[inline(always)]
    fn draw_pixel_raw(&mut self, byte_offset: usize, color: &Color) {
        let len = self.format.min_bytes_per_pixel();
        let Some(pixel_bytes) = self.buffer.get_mut(byte_offset..byte_offset + len) else {
            return;
        };

        match self.format {
            PixelFormat::Rgb => {
                pixel_bytes[0] = color.r;
                pixel_bytes[1] = color.g;
                pixel_bytes[2] = color.b;
            }
            PixelFormat::Bgr => {
                pixel_bytes[0] = color.b;
                pixel_bytes[1] = color.g;
                pixel_bytes[2] = color.r;
            }
            PixelFormat::U8 => {
                pixel_bytes[0] = color.luma();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::REGULAR_12;
    use alloc::vec;

    #[test]
    fn pixel_formats() {
        let mut buffer = vec![0u8; 2 * 4];
        let mut fb = Framebuffer::new(&mut buffer, Dimension::new(2, 1), 2, 4, PixelFormat::Bgr);
        fb.draw_pixel(&Position::new(1, 0), &Color::new(1, 2, 3));
        assert_eq!(fb.get_pixel(&Position::new(1, 0)), Some(Color::new(1, 2, 3)));
        assert_eq!(buffer, [0, 0, 0, 0, 3, 2, 1, 0]);

        let mut buffer = vec![0u8; 2 * 3];
        let mut fb = Framebuffer::new(&mut buffer, Dimension::new(2, 1), 2, 3, PixelFormat::Rgb);
        fb.draw_pixel(&Position::new(0, 0), &Color::new(1, 2, 3));
        assert_eq!(buffer, [1, 2, 3, 0, 0, 0]);
    }

    #[test]
    fn out_of_bounds_pixels_are_dropped() {
        let mut buffer = vec![0u8; 4 * 4];
        let mut fb = Framebuffer::new(&mut buffer, Dimension::new(4, 4), 4, 1, PixelFormat::U8);
        fb.draw_pixel(&Position::new(-1, 0), &Color::WHITE);
        fb.draw_pixel(&Position::new(0, -1), &Color::WHITE);
        fb.draw_pixel(&Position::new(4, 0), &Color::WHITE);
        fb.draw_pixel(&Position::new(0, 4), &Color::WHITE);
        assert!(fb.get_pixel(&Position::new(4, 0)).is_none());
        assert!(buffer.iter().all(|&b| b == 0));
    }

    #[test]
    fn buffer_reads_back_drawn_pixels() {
        let mut buffer = vec![0u8; 3 * 2];
        let mut fb = Framebuffer::new(&mut buffer, Dimension::new(3, 2), 3, 1, PixelFormat::U8);
        fb.draw_pixel(&Position::new(2, 1), &Color::new(30, 60, 90));

        assert_eq!(fb.dimensions(), Dimension::new(3, 2));
        assert_eq!(fb.buffer(), [0, 0, 0, 0, 0, 60]);

        fb.clear();
        assert!(fb.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn rect_is_clipped() {
        let mut buffer = vec![0u8; 4 * 4];
        let mut fb = Framebuffer::new(&mut buffer, Dimension::new(4, 4), 4, 1, PixelFormat::U8);
        fb.draw_rect(
            &Rect::new(Position::new(-2, 2), Position::new(10, 10)),
            &Color::WHITE,
        );
        assert_eq!(buffer.iter().filter(|&&b| b == 255).count(), 8);
        assert!(buffer[..8].iter().all(|&b| b == 0));
    }

    #[test]
    fn draw_char_blits_glyph_pixels() {
        let mut buffer = vec![0u8; 32 * 32];
        let mut fb = Framebuffer::new(&mut buffer, Dimension::new(32, 32), 32, 1, PixelFormat::U8);

        let glyph = REGULAR_12.glyph('H').unwrap();
        let advance = fb.draw_char(&REGULAR_12, &Color::WHITE, 'H', &Position::new(4, 20));
        assert_eq!(advance, glyph.x_advance as u32);

        let expected = glyph.pixels(REGULAR_12.glyph_bitmap(glyph)).count();
        assert!(expected > 0);
        assert_eq!(buffer.iter().filter(|&&b| b != 0).count(), expected);

        // nothing is drawn below the baseline for 'H'
        assert!(buffer[20 * 32..].iter().all(|&b| b == 0));
    }

    #[test]
    fn draw_str_moves_the_pen() {
        let mut buffer = vec![0u8; 64 * 48];
        let mut fb = Framebuffer::new(&mut buffer, Dimension::new(64, 48), 64, 1, PixelFormat::U8);
        let start = Position::new(2, 12);

        let pen = fb.draw_str(&REGULAR_12, &Color::WHITE, "ab", &start);
        assert_eq!(pen, Position::new(2 + REGULAR_12.text_width("ab") as i64, 12));

        let pen = fb.draw_str(&REGULAR_12, &Color::WHITE, "ab\nc", &start);
        assert_eq!(
            pen,
            Position::new(
                2 + REGULAR_12.text_width("c") as i64,
                12 + REGULAR_12.line_height() as i64
            )
        );
    }

    #[test]
    fn unknown_characters_draw_nothing() {
        let mut buffer = vec![0u8; 16 * 16];
        let mut fb = Framebuffer::new(&mut buffer, Dimension::new(16, 16), 16, 1, PixelFormat::U8);
        assert_eq!(fb.draw_char(&REGULAR_12, &Color::WHITE, 'ß', &Position::new(2, 12)), 0);
        assert_eq!(fb.draw_char(&REGULAR_12, &Color::WHITE, '\t', &Position::new(2, 12)), 0);
        assert!(buffer.iter().all(|&b| b == 0));
    }
}
