use super::font::GfxFont;
use crate::types::*;
use crate::Framebuffer;

use alloc::vec::Vec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextWrap {
    /// one line per input line, cut off at the maximum width
    Disabled,
    /// break between words, words that are too long on their own get split
    Enabled,
    /// break at any character
    Everywhere,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<'a> {
    pub text: &'a str,
    pub width: u32,
}

pub struct Lines<'a> {
    lines: Vec<Line<'a>>,
    dimensions: Dimension,
    font: &'a GfxFont,
}

impl<'a> Lines<'a> {
    #[inline]
    pub fn dimensions(&self) -> Dimension {
        self.dimensions
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Line<'a>> {
        self.lines.iter()
    }

    pub fn layout(
        font: &'a GfxFont,
        text: &'a str,
        wrap: TextWrap,
        max_dimensions: Dimension,
    ) -> Self {
        let line_height = font.line_height().max(1);
        let max_visible_lines = (max_dimensions.height / line_height) as usize;

        let mut lines = Vec::new();
        for orig_line in text.lines() {
            if lines.len() >= max_visible_lines {
                break;
            }

            match wrap {
                TextWrap::Disabled => {
                    let (end, width) = fit(font, orig_line, max_dimensions.width);
                    lines.push(Line {
                        text: &orig_line[..end],
                        width,
                    });
                }
                TextWrap::Enabled => {
                    Lines::layout_wrapped(font, orig_line, &mut lines, max_dimensions.width)
                }
                TextWrap::Everywhere => Lines::layout_wrapped_everywhere(
                    font,
                    orig_line,
                    &mut lines,
                    max_dimensions.width,
                ),
            }
        }
        lines.truncate(max_visible_lines);

        let longest_line = lines.iter().map(|line| line.width).max().unwrap_or(0);
        let dimensions = Dimension::new(longest_line, lines.len().max(1) as u32 * line_height);

        Self {
            lines,
            dimensions,
            font,
        }
    }

    fn layout_wrapped_everywhere(
        font: &GfxFont,
        mut orig_line: &'a str,
        lines: &mut Vec<Line<'a>>,
        max_width: u32,
    ) {
        if orig_line.is_empty() {
            lines.push(Line {
                text: orig_line,
                width: 0,
            });
            return;
        }

        while !orig_line.is_empty() {
            let (end, width) = fit_at_least_one(font, orig_line, max_width);
            lines.push(Line {
                text: &orig_line[..end],
                width,
            });
            orig_line = &orig_line[end..];
        }
    }

    fn layout_wrapped(
        font: &GfxFont,
        mut orig_line: &'a str,
        lines: &mut Vec<Line<'a>>,
        max_width: u32,
    ) {
        if orig_line.is_empty() {
            lines.push(Line {
                text: orig_line,
                width: 0,
            });
            return;
        }

        while !orig_line.is_empty() {
            let (end, width) = fit_at_least_one(font, orig_line, max_width);
            if end == orig_line.len() {
                lines.push(Line {
                    text: orig_line,
                    width,
                });
                break;
            }

            let split = if orig_line[end..].starts_with(' ') {
                end
            } else {
                match orig_line[..end].rfind(' ') {
                    Some(space) if space > 0 => space,
                    // a single word wider than the line
                    _ => end,
                }
            };

            let text = orig_line[..split].trim_end_matches(' ');
            lines.push(Line {
                text,
                width: font.text_width(text),
            });
            orig_line = orig_line[split..].trim_start_matches(' ');
        }
    }

    /// draws every line, `position` is the top left corner of the first line
    pub fn draw(&self, fb: &mut Framebuffer, position: Position, color: Color) {
        let line_height = self.font.line_height() as i64;
        let mut baseline = Position {
            x: position.x,
            y: position.y + self.font.baseline as i64,
        };

        for line in self.iter() {
            fb.draw_str(self.font, &color, line.text, &baseline);
            baseline.y += line_height;
        }
    }
}

/// longest prefix of `text` no wider than `max_width`, as (byte length, width)
fn fit(font: &GfxFont, text: &str, max_width: u32) -> (usize, u32) {
    let mut width = 0;
    for (i, c) in text.char_indices() {
        let advance = font.glyph(c).map_or(0, |glyph| glyph.x_advance as u32);
        if width + advance > max_width {
            return (i, width);
        }
        width += advance;
    }

    (text.len(), width)
}

/// like [`fit`], but always takes the first character so wrapping makes progress
fn fit_at_least_one(font: &GfxFont, text: &str, max_width: u32) -> (usize, u32) {
    match fit(font, text, max_width) {
        (0, _) => match text.chars().next() {
            Some(c) => (c.len_utf8(), font.text_width(&text[..c.len_utf8()])),
            None => (0, 0),
        },
        fitted => fitted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::{GfxGlyph, REGULAR_12};
    use crate::PixelFormat;
    use alloc::vec;

    // every printable character is 4px wide and has no ink
    static MONO_GLYPHS: [GfxGlyph; 95] = [GfxGlyph::new(0, 0, 0, 4, 0, 0); 95];
    static MONO: GfxFont = GfxFont {
        name: "mono",
        bitmap: &[],
        glyphs: &MONO_GLYPHS,
        first: 0x20,
        last: 0x7e,
        y_advance: 10,
        baseline: 8,
    };

    fn texts<'a>(lines: &'a Lines) -> Vec<&'a str> {
        lines.iter().map(|line| line.text).collect()
    }

    #[test]
    fn disabled_wrap_truncates() {
        let lines = Lines::layout(&MONO, "hello world", TextWrap::Disabled, Dimension::new(20, 100));
        assert_eq!(texts(&lines), ["hello"]);
        assert_eq!(lines.dimensions(), Dimension::new(20, 10));
    }

    #[test]
    fn word_wrap_breaks_at_spaces() {
        let lines = Lines::layout(
            &MONO,
            "hello big world",
            TextWrap::Enabled,
            Dimension::new(40, 100),
        );
        assert_eq!(texts(&lines), ["hello big", "world"]);
        assert_eq!(lines.iter().map(|l| l.width).collect::<Vec<_>>(), [36, 20]);
        assert_eq!(lines.dimensions(), Dimension::new(36, 20));
    }

    #[test]
    fn word_wrap_splits_long_words() {
        let lines = Lines::layout(&MONO, "abcdefghijkl", TextWrap::Enabled, Dimension::new(20, 100));
        assert_eq!(texts(&lines), ["abcde", "fghij", "kl"]);
    }

    #[test]
    fn wrap_everywhere() {
        let lines = Lines::layout(&MONO, "hello world", TextWrap::Everywhere, Dimension::new(16, 100));
        assert_eq!(texts(&lines), ["hell", "o wo", "rld"]);
    }

    #[test]
    fn wrapping_narrower_than_a_char_still_progresses() {
        let lines = Lines::layout(&MONO, "abc", TextWrap::Everywhere, Dimension::new(2, 100));
        assert_eq!(texts(&lines), ["a", "b", "c"]);
    }

    #[test]
    fn lines_beyond_height_are_dropped() {
        let lines = Lines::layout(&MONO, "a\nb\nc", TextWrap::Disabled, Dimension::new(100, 25));
        assert_eq!(texts(&lines), ["a", "b"]);

        let lines = Lines::layout(&MONO, "aaaa aaaa aaaa", TextWrap::Enabled, Dimension::new(16, 20));
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn blank_lines_are_kept() {
        let lines = Lines::layout(&MONO, "a\n\nb", TextWrap::Enabled, Dimension::new(100, 100));
        assert_eq!(texts(&lines), ["a", "", "b"]);
    }

    #[test]
    fn empty_text_is_one_line_high() {
        let lines = Lines::layout(&MONO, "", TextWrap::Enabled, Dimension::new(100, 100));
        assert!(lines.is_empty());
        assert_eq!(lines.dimensions(), Dimension::new(0, 10));
    }

    #[test]
    fn multibyte_text_splits_on_char_boundaries() {
        // 'é' is outside the font and takes no space
        let lines = Lines::layout(&MONO, "héllo", TextWrap::Disabled, Dimension::new(12, 100));
        assert_eq!(texts(&lines), ["héll"]);
        assert_eq!(lines.dimensions().width, 12);

        let lines = Lines::layout(&MONO, "ééé", TextWrap::Everywhere, Dimension::new(0, 100));
        assert_eq!(texts(&lines), ["ééé"]);
    }

    #[test]
    fn draw_places_first_baseline_below_top() {
        let mut buffer = vec![0u8; 64 * 32];
        let mut fb = Framebuffer::new(&mut buffer, Dimension::new(64, 32), 64, 1, PixelFormat::U8);

        let lines = Lines::layout(&REGULAR_12, "HH\nHH", TextWrap::Disabled, Dimension::new(64, 32));
        assert_eq!(lines.len(), 2);
        lines.draw(&mut fb, Position::new(0, 2), Color::WHITE);

        // 'H' reaches up to the cap height, which sits below the top of the line
        let top = 2 + REGULAR_12.baseline as usize
            - (-REGULAR_12.glyph('H').unwrap().y_offset) as usize;
        assert!(buffer[..top * 64].iter().all(|&b| b == 0));
        assert!(buffer[top * 64..(top + 1) * 64].iter().any(|&b| b != 0));
    }
}
