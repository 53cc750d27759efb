// This file was generated by font_gen from `DejaVuSansCondensed-Bold.ttf` at 16pt. Do not edit.

use super::glyph::{GfxFont, GfxGlyph};

pub const FIRST: u16 = 0x20;
pub const LAST: u16 = 0x7e;

pub const BITMAP: &[u8] = &[
    0xdf, 0xff, 0xb6, 0x1b, 0xf0, 0x4e, 0xf7, 0xb4, 0x80, 0x09, 0x86, 0x41, 0xb9, 0xff, 0x13, 0x0c,
    0x8f, 0xfb, 0xfe, 0x26, 0x09, 0x86, 0x40, 0x18, 0x18, 0x7e, 0xfe, 0xd8, 0xf8, 0x7e, 0x3f, 0x1f,
    0x1b, 0xff, 0x7c, 0x18, 0x18, 0x70, 0x47, 0xc6, 0x26, 0x61, 0x32, 0x0d, 0xb0, 0x79, 0x00, 0x1b,
    0xc0, 0x9b, 0x0d, 0x98, 0x4c, 0xc6, 0x36, 0x21, 0xe0, 0x1e, 0x07, 0xc0, 0xc0, 0x18, 0x03, 0x80,
    0xf9, 0xbf, 0x36, 0x7e, 0xc7, 0x9c, 0x71, 0xff, 0x1f, 0x70, 0x7f, 0x40, 0x33, 0x66, 0x6e, 0xee,
    0xe6, 0x66, 0x33, 0xe6, 0x67, 0x33, 0x33, 0x33, 0x76, 0x6e, 0x10, 0x21, 0xf9, 0xe3, 0xda, 0xc4,
    0x00, 0x18, 0x0c, 0x06, 0x03, 0x0f, 0xff, 0xf8, 0x60, 0x30, 0x18, 0x0c, 0x00, 0xff, 0xec, 0xff,
    0xf0, 0xff, 0x80, 0x08, 0xc6, 0x21, 0x18, 0xc4, 0x63, 0x10, 0x8c, 0x00, 0x3c, 0x7e, 0xe7, 0xe7,
    0xc3, 0xc3, 0xc3, 0xc3, 0xe7, 0xe7, 0x7e, 0x3c, 0x71, 0xf3, 0xe1, 0xc3, 0x87, 0x0e, 0x1c, 0x38,
    0x73, 0xff, 0xf0, 0x7c, 0xfe, 0xce, 0x07, 0x06, 0x0e, 0x1c, 0x38, 0x70, 0xf0, 0xff, 0xff, 0x7c,
    0xfe, 0x0f, 0x07, 0x0e, 0x3c, 0x3e, 0x07, 0x07, 0x07, 0xfe, 0xfc, 0x0e, 0x1e, 0x1e, 0x3e, 0x6e,
    0x6e, 0xce, 0xce, 0xff, 0xff, 0x0e, 0x0e, 0x7e, 0x7e, 0x7e, 0x60, 0x7c, 0x7e, 0x4f, 0x07, 0x07,
    0x87, 0xfe, 0xfc, 0x1e, 0x3f, 0x70, 0xe0, 0xec, 0xfe, 0xf7, 0xe3, 0xe3, 0xe7, 0x7f, 0x3e, 0xff,
    0xff, 0xff, 0x06, 0x0e, 0x0c, 0x1c, 0x1c, 0x18, 0x38, 0x30, 0x70, 0x3c, 0x7e, 0xe7, 0xe7, 0xe7,
    0x7e, 0x7e, 0xe7, 0xe7, 0xe7, 0xff, 0x7e, 0x38, 0x7e, 0xe6, 0xc7, 0xc7, 0xe7, 0xff, 0x7f, 0x07,
    0x06, 0xfe, 0x7c, 0xfc, 0x0f, 0xc0, 0x6d, 0x80, 0x1b, 0x7b, 0x00, 0x03, 0x8f, 0x9f, 0x1c, 0x0e,
    0x03, 0xe0, 0x7c, 0x07, 0xff, 0x7f, 0xc0, 0x00, 0x0f, 0xff, 0xf8, 0xc0, 0x7c, 0x0f, 0x80, 0xf0,
    0x79, 0xf3, 0xe1, 0x80, 0x7b, 0xf9, 0xc3, 0x1c, 0xe3, 0x9c, 0x00, 0xc7, 0x1c, 0x0f, 0x83, 0x8e,
    0x60, 0x64, 0x6b, 0xcf, 0x99, 0x99, 0x98, 0x99, 0x99, 0xc9, 0xbc, 0xfe, 0x60, 0x03, 0x04, 0x1f,
    0xc0, 0x70, 0x0e, 0x01, 0xe0, 0x7c, 0x0f, 0x81, 0xb8, 0x77, 0x0e, 0x61, 0x8e, 0x7f, 0xcf, 0xf9,
    0x83, 0xf0, 0x70, 0x7c, 0x7f, 0xb9, 0xdc, 0x6e, 0x77, 0xfb, 0xfd, 0xc7, 0xe3, 0xf1, 0xff, 0xdf,
    0xc0, 0x1e, 0x1f, 0xde, 0x7c, 0x0e, 0x07, 0x03, 0x81, 0xc0, 0xe0, 0x38, 0x5f, 0xe3, 0xe0, 0x7c,
    0x3f, 0xcf, 0xfb, 0x8f, 0xe1, 0xf8, 0x7e, 0x1f, 0x87, 0xe1, 0xf9, 0xef, 0xfb, 0xf8, 0x7e, 0xff,
    0xfe, 0xe0, 0xe0, 0xfe, 0xfe, 0xe0, 0xe0, 0xe0, 0xff, 0xff, 0x7e, 0xff, 0xfe, 0xe0, 0xe0, 0xfe,
    0xfe, 0xe0, 0xe0, 0xe0, 0xe0, 0xe0, 0x1f, 0x0f, 0xe7, 0x9b, 0x80, 0xe0, 0x38, 0x0e, 0x3f, 0x8f,
    0xe1, 0xdc, 0x77, 0xfc, 0x7e, 0x61, 0xb8, 0x7e, 0x1f, 0x87, 0xe1, 0xff, 0xff, 0xff, 0x87, 0xe1,
    0xf8, 0x7e, 0x1f, 0x87, 0x7f, 0xff, 0xff, 0xff, 0xf0, 0x19, 0xce, 0x73, 0x9c, 0xe7, 0x39, 0xce,
    0x73, 0xfb, 0x80, 0x61, 0xf8, 0xee, 0x73, 0xb8, 0xfc, 0x3e, 0x0f, 0xc3, 0xf8, 0xee, 0x39, 0xce,
    0x3b, 0x87, 0x60, 0xe0, 0xe0, 0xe0, 0xe0, 0xe0, 0xe0, 0xe0, 0xe0, 0xe0, 0xff, 0xff, 0x70, 0x7f,
    0x0f, 0xf8, 0xff, 0x9f, 0xf9, 0xfe, 0xdf, 0xef, 0x7e, 0xf7, 0xe7, 0x7e, 0x67, 0xe0, 0x7e, 0x07,
    0x61, 0xbc, 0x7f, 0x1f, 0xe7, 0xf9, 0xfb, 0x7e, 0xdf, 0x9f, 0xe7, 0xf8, 0xfe, 0x3f, 0x8f, 0x1e,
    0x0f, 0xe7, 0x3f, 0x87, 0xe0, 0xf8, 0x3e, 0x0f, 0x83, 0xe1, 0xdc, 0x77, 0xf8, 0xfc, 0x7c, 0x7f,
    0xbf, 0xfc, 0x7e, 0x3f, 0x3f, 0xfd, 0xfc, 0xe0, 0x70, 0x38, 0x1c, 0x00, 0x1e, 0x0f, 0xe7, 0x3f,
    0x87, 0xe0, 0xf8, 0x3e, 0x0f, 0x83, 0xe1, 0xdc, 0x77, 0xf8, 0xfc, 0x03, 0x00, 0xe0, 0x7c, 0x3f,
    0xcf, 0xf3, 0x8c, 0xe3, 0x3f, 0xcf, 0xe3, 0xfc, 0xe7, 0x38, 0xee, 0x3b, 0x87, 0x3e, 0x7f, 0xe3,
    0xe0, 0xe0, 0x7e, 0x3f, 0x0f, 0x03, 0xc7, 0xff, 0x7e, 0xff, 0xbf, 0xff, 0xf8, 0x30, 0x0c, 0x03,
    0x00, 0xc0, 0x30, 0x0c, 0x03, 0x00, 0xc0, 0x30, 0x61, 0xf0, 0xf8, 0x7c, 0x3e, 0x1f, 0x0f, 0x87,
    0xc3, 0xe1, 0xb9, 0xdf, 0xe7, 0xe0, 0xe0, 0xfc, 0x1d, 0x83, 0x38, 0xe7, 0x1c, 0x63, 0x0e, 0xe1,
    0xdc, 0x1f, 0x03, 0xe0, 0x7c, 0x07, 0x00, 0xc3, 0x0f, 0x1c, 0x3c, 0x79, 0xf9, 0xe7, 0xe7, 0x9d,
    0x96, 0x66, 0xcd, 0x9f, 0x3e, 0x7c, 0xf9, 0xf3, 0xc3, 0x87, 0x0e, 0x1c, 0xc1, 0xb8, 0xe7, 0x31,
    0xdc, 0x3e, 0x07, 0x81, 0xc0, 0xf8, 0x77, 0x1d, 0xce, 0x3b, 0x07, 0xe0, 0xd8, 0x77, 0x38, 0xee,
    0x3f, 0x07, 0xc0, 0xe0, 0x38, 0x0e, 0x03, 0x80, 0xe0, 0x38, 0xff, 0x7f, 0xff, 0xc0, 0xe0, 0xe0,
    0xe0, 0xe0, 0x70, 0x70, 0x70, 0x3f, 0xff, 0xf0, 0xff, 0xb9, 0xce, 0x73, 0x9c, 0xe7, 0x39, 0xcf,
    0x7c, 0x86, 0x10, 0x86, 0x30, 0x86, 0x30, 0x84, 0x31, 0x80, 0xff, 0x33, 0x33, 0x33, 0x33, 0x33,
    0xff, 0x18, 0x3c, 0x7e, 0xe7, 0x81, 0xff, 0xfc, 0xcc, 0x80, 0x7c, 0xfe, 0x06, 0x1f, 0xff, 0xe7,
    0xc7, 0xff, 0x77, 0xe0, 0x70, 0x38, 0x1d, 0xcf, 0xf7, 0x3b, 0x8f, 0xc7, 0xe3, 0xf1, 0xbf, 0xdd,
    0xc0, 0x3c, 0xff, 0x86, 0x0c, 0x18, 0x38, 0x3f, 0x3c, 0x03, 0x03, 0x03, 0x33, 0x7f, 0xe7, 0xc7,
    0xc3, 0xc7, 0xe7, 0xff, 0x7b, 0x3c, 0x7e, 0xe7, 0xe7, 0xff, 0xe0, 0xe0, 0xff, 0x3e, 0x3c, 0xf3,
    0x3f, 0xfd, 0xc3, 0x0c, 0x30, 0xc3, 0x0c, 0x33, 0x7f, 0xe7, 0xc7, 0xc3, 0xc7, 0xe7, 0xff, 0x73,
    0x07, 0x6e, 0x7e, 0xe0, 0xe0, 0xe0, 0xee, 0xff, 0xf7, 0xe3, 0xe3, 0xe3, 0xe3, 0xe3, 0xe3, 0xfc,
    0x7f, 0xff, 0xff, 0xf0, 0x77, 0x07, 0x77, 0x77, 0x77, 0x77, 0x7e, 0xe0, 0xe0, 0xe0, 0xe0, 0xe7,
    0xee, 0xec, 0xf8, 0xf8, 0xfc, 0xee, 0xe7, 0xe7, 0xff, 0xff, 0xff, 0xff, 0xf0, 0xec, 0x77, 0xff,
    0xb9, 0xef, 0xce, 0x7e, 0x73, 0xf3, 0x9f, 0x9c, 0xfc, 0xe7, 0xe7, 0x38, 0xee, 0xff, 0xf7, 0xe3,
    0xe3, 0xe3, 0xe3, 0xe3, 0xe3, 0x3c, 0x7e, 0xe7, 0xc7, 0xc3, 0xc3, 0xe7, 0xfe, 0x3c, 0xee, 0x7f,
    0xb9, 0xdc, 0x7e, 0x3f, 0x1f, 0x8d, 0xfe, 0xee, 0x70, 0x38, 0x1c, 0x00, 0x33, 0x7f, 0xe7, 0xc7,
    0xc3, 0xc7, 0xe7, 0xff, 0x7b, 0x03, 0x03, 0x03, 0xef, 0xff, 0x38, 0xe3, 0x8e, 0x38, 0xe0, 0x7d,
    0xfb, 0x07, 0x0f, 0xc3, 0xc3, 0xff, 0xfc, 0x70, 0xe3, 0xf7, 0xf7, 0x0e, 0x1c, 0x38, 0x70, 0x78,
    0xf0, 0xc3, 0xe3, 0xe3, 0xe3, 0xe3, 0xe7, 0xe7, 0xff, 0x7f, 0xc3, 0xc7, 0xc6, 0xe6, 0x6e, 0x7c,
    0x7c, 0x3c, 0x38, 0xc6, 0x7c, 0xe7, 0xce, 0x6e, 0xe6, 0x6b, 0xe7, 0xbe, 0x7b, 0xc7, 0x9c, 0x71,
    0xc0, 0xc7, 0xee, 0x7c, 0x3c, 0x38, 0x3c, 0x7c, 0xee, 0xc7, 0xe1, 0xb1, 0xd8, 0xce, 0x63, 0x71,
    0xf0, 0x78, 0x3c, 0x1c, 0x06, 0x07, 0x0f, 0x00, 0xff, 0xfc, 0x70, 0xe3, 0x8e, 0x38, 0x7f, 0xfe,
    0x1c, 0xf3, 0x0c, 0x30, 0xcf, 0x3c, 0x70, 0xc3, 0x0c, 0x38, 0xf0, 0xc0, 0xff, 0xff, 0xe3, 0xc3,
    0x0c, 0x30, 0xc3, 0xc7, 0x38, 0xc3, 0x0c, 0x73, 0xcc, 0x00, 0xfb, 0xcf, 0x80,
];

pub const GLYPHS: &[GfxGlyph] = &[
    GfxGlyph::new(0, 0, 0, 5, 0, 0),        // ' '
    GfxGlyph::new(0, 3, 12, 7, 2, -12),     // '!'
    GfxGlyph::new(5, 5, 5, 8, 1, -12),      // '"'
    GfxGlyph::new(9, 10, 11, 12, 1, -11),   // '#'
    GfxGlyph::new(23, 8, 14, 10, 1, -12),   // '$'
    GfxGlyph::new(37, 13, 12, 14, 1, -12),  // '%'
    GfxGlyph::new(57, 11, 12, 13, 1, -12),  // '&'
    GfxGlyph::new(74, 2, 5, 4, 1, -12),     // '\''
    GfxGlyph::new(76, 4, 14, 7, 1, -12),    // '('
    GfxGlyph::new(83, 4, 14, 7, 1, -12),    // ')'
    GfxGlyph::new(90, 7, 7, 8, 0, -12),     // '*'
    GfxGlyph::new(97, 9, 10, 12, 2, -10),   // '+'
    GfxGlyph::new(109, 3, 5, 5, 1, -3),     // ','
    GfxGlyph::new(111, 4, 3, 6, 1, -6),     // '-'
    GfxGlyph::new(113, 3, 3, 5, 1, -3),     // '.'
    GfxGlyph::new(115, 5, 13, 5, 0, -12),   // '/'
    GfxGlyph::new(124, 8, 12, 10, 1, -12),  // '0'
    GfxGlyph::new(136, 7, 12, 10, 2, -12),  // '1'
    GfxGlyph::new(147, 8, 12, 10, 1, -12),  // '2'
    GfxGlyph::new(159, 8, 12, 10, 1, -12),  // '3'
    GfxGlyph::new(171, 8, 12, 10, 1, -12),  // '4'
    GfxGlyph::new(183, 8, 12, 10, 1, -12),  // '5'
    GfxGlyph::new(195, 8, 12, 10, 1, -12),  // '6'
    GfxGlyph::new(207, 8, 12, 10, 1, -12),  // '7'
    GfxGlyph::new(219, 8, 12, 10, 1, -12),  // '8'
    GfxGlyph::new(231, 8, 12, 10, 1, -12),  // '9'
    GfxGlyph::new(243, 2, 9, 6, 2, -9),     // ':'
    GfxGlyph::new(246, 3, 11, 6, 1, -9),    // ';'
    GfxGlyph::new(251, 9, 8, 12, 2, -9),    // '<'
    GfxGlyph::new(260, 9, 6, 12, 2, -8),    // '='
    GfxGlyph::new(267, 9, 8, 12, 2, -9),    // '>'
    GfxGlyph::new(276, 6, 12, 8, 1, -12),   // '?'
    GfxGlyph::new(285, 12, 14, 14, 1, -11), // '@'
    GfxGlyph::new(306, 11, 12, 11, 0, -12), // 'A'
    GfxGlyph::new(323, 9, 12, 11, 1, -12),  // 'B'
    GfxGlyph::new(337, 9, 12, 11, 1, -12),  // 'C'
    GfxGlyph::new(351, 10, 12, 12, 1, -12), // 'D'
    GfxGlyph::new(366, 8, 12, 10, 1, -12),  // 'E'
    GfxGlyph::new(378, 8, 12, 10, 1, -12),  // 'F'
    GfxGlyph::new(390, 10, 12, 12, 1, -12), // 'G'
    GfxGlyph::new(405, 10, 12, 12, 1, -12), // 'H'
    GfxGlyph::new(420, 3, 12, 5, 1, -12),   // 'I'
    GfxGlyph::new(425, 5, 15, 5, -1, -12),  // 'J'
    GfxGlyph::new(435, 10, 12, 11, 1, -12), // 'K'
    GfxGlyph::new(450, 8, 12, 9, 1, -12),   // 'L'
    GfxGlyph::new(462, 12, 12, 14, 1, -12), // 'M'
    GfxGlyph::new(480, 10, 12, 12, 1, -12), // 'N'
    GfxGlyph::new(495, 10, 12, 12, 1, -12), // 'O'
    GfxGlyph::new(510, 9, 12, 11, 1, -12),  // 'P'
    GfxGlyph::new(524, 10, 14, 12, 1, -12), // 'Q'
    GfxGlyph::new(542, 10, 12, 11, 1, -12), // 'R'
    GfxGlyph::new(557, 8, 12, 10, 1, -12),  // 'S'
    GfxGlyph::new(569, 10, 12, 10, 0, -12), // 'T'
    GfxGlyph::new(584, 9, 12, 12, 1, -12),  // 'U'
    GfxGlyph::new(598, 11, 12, 11, 0, -12), // 'V'
    GfxGlyph::new(615, 14, 12, 16, 1, -12), // 'W'
    GfxGlyph::new(636, 10, 12, 11, 1, -12), // 'X'
    GfxGlyph::new(651, 10, 12, 10, 0, -12), // 'Y'
    GfxGlyph::new(666, 9, 12, 10, 1, -12),  // 'Z'
    GfxGlyph::new(680, 5, 14, 7, 1, -12),   // '['
    GfxGlyph::new(689, 5, 13, 5, 0, -12),   // '\\'
    GfxGlyph::new(698, 4, 14, 7, 1, -12),   // ']'
    GfxGlyph::new(705, 8, 5, 12, 2, -12),   // '^'
    GfxGlyph::new(710, 7, 2, 7, 0, 2),      // '_'
    GfxGlyph::new(712, 3, 3, 7, 1, -13),    // '`'
    GfxGlyph::new(714, 8, 9, 10, 1, -9),    // 'a'
    GfxGlyph::new(723, 9, 12, 10, 1, -12),  // 'b'
    GfxGlyph::new(737, 7, 9, 9, 1, -9),     // 'c'
    GfxGlyph::new(745, 8, 12, 10, 1, -12),  // 'd'
    GfxGlyph::new(757, 8, 9, 10, 1, -9),    // 'e'
    GfxGlyph::new(766, 6, 12, 6, 0, -12),   // 'f'
    GfxGlyph::new(775, 8, 12, 10, 1, -9),   // 'g'
    GfxGlyph::new(787, 8, 12, 10, 1, -12),  // 'h'
    GfxGlyph::new(799, 3, 12, 5, 1, -12),   // 'i'
    GfxGlyph::new(804, 4, 15, 5, 0, -12),   // 'j'
    GfxGlyph::new(812, 8, 12, 10, 1, -12),  // 'k'
    GfxGlyph::new(824, 3, 12, 5, 1, -12),   // 'l'
    GfxGlyph::new(829, 13, 9, 15, 1, -9),   // 'm'
    GfxGlyph::new(844, 8, 9, 10, 1, -9),    // 'n'
    GfxGlyph::new(853, 8, 9, 10, 1, -9),    // 'o'
    GfxGlyph::new(862, 9, 12, 10, 1, -9),   // 'p'
    GfxGlyph::new(876, 8, 12, 10, 1, -9),   // 'q'
    GfxGlyph::new(888, 6, 9, 7, 1, -9),     // 'r'
    GfxGlyph::new(895, 7, 9, 9, 1, -9),     // 's'
    GfxGlyph::new(903, 7, 11, 7, 0, -11),   // 't'
    GfxGlyph::new(913, 8, 9, 10, 1, -9),    // 'u'
    GfxGlyph::new(922, 8, 9, 9, 1, -9),     // 'v'
    GfxGlyph::new(931, 12, 9, 13, 1, -9),   // 'w'
    GfxGlyph::new(945, 8, 9, 9, 1, -9),     // 'x'
    GfxGlyph::new(954, 9, 12, 9, 0, -9),    // 'y'
    GfxGlyph::new(968, 7, 9, 8, 1, -9),     // 'z'
    GfxGlyph::new(976, 6, 15, 10, 2, -12),  // '{'
    GfxGlyph::new(988, 1, 16, 5, 2, -12),   // '|'
    GfxGlyph::new(990, 6, 15, 10, 2, -12),  // '}'
    GfxGlyph::new(1002, 9, 2, 12, 2, -6),   // '~'
];

pub static FONT: GfxFont = GfxFont {
    name: "medium_16",
    bitmap: BITMAP,
    glyphs: GLYPHS,
    first: FIRST,
    last: LAST,
    y_advance: 19,
    baseline: 15,
};
