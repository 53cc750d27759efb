// This file was generated by font_gen from `DejaVuSans.ttf` at 14pt. Do not edit.

use super::glyph::{GfxFont, GfxGlyph};

pub const FIRST: u16 = 0x20;
pub const LAST: u16 = 0x7e;

pub const BITMAP: &[u8] = &[
    0xff, 0xa8, 0xb0, 0xdd, 0xd1, 0x09, 0x02, 0x41, 0xb1, 0xff, 0x12, 0x04, 0x8f, 0xf8, 0x90, 0x24,
    0x09, 0x00, 0x10, 0xfb, 0x46, 0x8d, 0x07, 0x85, 0x8b, 0x94, 0xf0, 0x40, 0x80, 0xf0, 0x92, 0x22,
    0x44, 0x49, 0x07, 0x40, 0x0b, 0xc2, 0x48, 0x49, 0x11, 0x24, 0x1c, 0x3c, 0x30, 0x10, 0x04, 0x07,
    0x06, 0xc6, 0x35, 0x0e, 0xc3, 0x3e, 0xc0, 0xfc, 0x25, 0x25, 0xb6, 0x49, 0x12, 0x49, 0x92, 0x49,
    0x29, 0x40, 0x25, 0x5c, 0xe2, 0x10, 0x08, 0x04, 0x02, 0x01, 0x0f, 0xf8, 0x60, 0x20, 0x10, 0x08,
    0x00, 0x5e, 0xe0, 0x70, 0x11, 0x13, 0x22, 0x64, 0x44, 0x80, 0x7c, 0x8b, 0x1c, 0x38, 0x30, 0x61,
    0xe3, 0x44, 0x70, 0xe0, 0x82, 0x08, 0x20, 0x82, 0x08, 0x23, 0xf0, 0xfc, 0x08, 0x10, 0x20, 0xc3,
    0x0c, 0x30, 0xc1, 0xfc, 0xfc, 0x08, 0x10, 0x23, 0x80, 0x81, 0x83, 0x05, 0xf0, 0x1c, 0x38, 0xb3,
    0x64, 0xd1, 0xbf, 0xff, 0x0c, 0x18, 0x7c, 0x81, 0x03, 0x85, 0xc0, 0x81, 0x83, 0x0d, 0xf0, 0x3c,
    0x83, 0x06, 0xce, 0xd8, 0xf0, 0xe1, 0x46, 0x78, 0xfe, 0x08, 0x30, 0x60, 0x83, 0x04, 0x08, 0x30,
    0x40, 0x7d, 0x8f, 0x1a, 0x23, 0x88, 0xa1, 0xc1, 0xc6, 0xf8, 0x79, 0x8a, 0x1c, 0x3c, 0x6f, 0xc1,
    0x82, 0x0c, 0xf0, 0x86, 0x40, 0x17, 0x80, 0x01, 0x83, 0x8e, 0x1c, 0x07, 0x80, 0x78, 0x06, 0xff,
    0x00, 0xff, 0xff, 0xc0, 0x1c, 0x03, 0xc0, 0x30, 0x71, 0xe1, 0x80, 0xf8, 0x42, 0x33, 0x10, 0x80,
    0x21, 0x00, 0x0f, 0x03, 0x0c, 0x60, 0x24, 0x6b, 0x89, 0x99, 0x09, 0x90, 0x99, 0x8a, 0x8f, 0xe4,
    0x00, 0x20, 0x01, 0xf8, 0x0c, 0x0e, 0x05, 0x82, 0x43, 0x21, 0x19, 0xfc, 0xc3, 0x41, 0xe0, 0x40,
    0xfc, 0xc6, 0xc2, 0xc6, 0xfc, 0xc6, 0xc3, 0xc3, 0xc6, 0xfc, 0x3f, 0x61, 0xc0, 0x80, 0x80, 0x80,
    0x80, 0xc0, 0x61, 0x3e, 0xfe, 0x61, 0xb0, 0x58, 0x3c, 0x1e, 0x0f, 0x07, 0x82, 0xc7, 0x7e, 0x00,
    0xff, 0x83, 0x06, 0x0f, 0xf8, 0x30, 0x60, 0xc1, 0xfc, 0xff, 0x0c, 0x30, 0xff, 0x0c, 0x30, 0xc3,
    0x00, 0x3f, 0x30, 0x30, 0x10, 0x08, 0x04, 0x3e, 0x07, 0x83, 0x61, 0x9f, 0x80, 0xc1, 0xc1, 0xc1,
    0xc1, 0xff, 0xc1, 0xc1, 0xc1, 0xc1, 0xc1, 0xff, 0xff, 0xf0, 0x33, 0x33, 0x33, 0x33, 0x33, 0x36,
    0xc0, 0xc2, 0xc4, 0xd8, 0xf0, 0xe0, 0xf0, 0xd8, 0xcc, 0xc6, 0xc3, 0xc1, 0x83, 0x06, 0x0c, 0x18,
    0x30, 0x60, 0xc1, 0xfc, 0xe1, 0xf8, 0x7e, 0x1f, 0x4b, 0xd2, 0xf6, 0xbc, 0xcf, 0x33, 0xc0, 0xf0,
    0x30, 0xe1, 0xe1, 0xf1, 0xd1, 0xd9, 0xc9, 0xcd, 0xc7, 0xc7, 0xc3, 0x3e, 0x31, 0xb0, 0x70, 0x18,
    0x0c, 0x06, 0x03, 0x83, 0x63, 0x1f, 0x00, 0xfd, 0x8f, 0x1e, 0x3c, 0x7f, 0x30, 0x60, 0xc1, 0x80,
    0x3e, 0x31, 0xb0, 0x70, 0x18, 0x0c, 0x06, 0x03, 0x83, 0x63, 0x1f, 0x01, 0x80, 0x60, 0xfc, 0xc6,
    0xc6, 0xc6, 0xcc, 0xfc, 0xc4, 0xc2, 0xc3, 0xc1, 0x7d, 0x82, 0x06, 0x07, 0x81, 0xc1, 0x81, 0x87,
    0xf8, 0xff, 0x84, 0x02, 0x01, 0x00, 0x80, 0x40, 0x20, 0x10, 0x08, 0x04, 0x00, 0xc1, 0xc1, 0xc1,
    0xc1, 0xc1, 0xc1, 0xc1, 0xc3, 0x42, 0x3e, 0xc0, 0xa0, 0xd8, 0x44, 0x22, 0x31, 0x90, 0x58, 0x2c,
    0x1c, 0x06, 0x00, 0x86, 0x18, 0x61, 0xce, 0x3c, 0x92, 0x49, 0x24, 0x92, 0x79, 0x67, 0x1c, 0x30,
    0xc3, 0x0c, 0xc2, 0x66, 0x24, 0x38, 0x18, 0x38, 0x2c, 0x66, 0xc2, 0x83, 0xc1, 0x62, 0x26, 0x34,
    0x18, 0x08, 0x08, 0x08, 0x08, 0x08, 0xff, 0x02, 0x04, 0x0c, 0x18, 0x30, 0x20, 0x40, 0xc0, 0xff,
    0xfa, 0x49, 0x24, 0x92, 0x6e, 0x84, 0x44, 0x62, 0x23, 0x11, 0x10, 0x64, 0x92, 0x49, 0x24, 0x9e,
    0x18, 0x24, 0x42, 0x81, 0xfe, 0x90, 0x78, 0x30, 0x5f, 0xc6, 0x1c, 0xdd, 0xc1, 0x83, 0x67, 0x2c,
    0x78, 0x70, 0xe1, 0xc7, 0xf8, 0x39, 0x9c, 0x20, 0x82, 0x0c, 0x1f, 0x06, 0x0c, 0xda, 0x78, 0x70,
    0xe1, 0xc3, 0xc6, 0xfc, 0x38, 0x9a, 0x1f, 0xfc, 0x10, 0x30, 0x3e, 0x36, 0x4f, 0xc4, 0x44, 0x44,
    0x40, 0x30, 0x9e, 0x1c, 0x38, 0x70, 0xf3, 0xbb, 0x04, 0x19, 0xe0, 0xc1, 0x83, 0x67, 0x2c, 0x78,
    0xf1, 0xe3, 0xc7, 0x8c, 0xc3, 0xff, 0xf0, 0x60, 0x36, 0xdb, 0x6d, 0xac, 0xc1, 0x83, 0x16, 0x6d,
    0x1c, 0x38, 0x68, 0xcd, 0x8c, 0xff, 0xff, 0xf0, 0x18, 0xdd, 0xef, 0x18, 0xe3, 0x1c, 0x43, 0x88,
    0x71, 0x0e, 0x21, 0x19, 0xcb, 0x1e, 0x3c, 0x78, 0xf1, 0xe3, 0x38, 0x9a, 0x1c, 0x38, 0x70, 0xf1,
    0x3c, 0x19, 0xcb, 0x1e, 0x1c, 0x38, 0x71, 0xfe, 0xc1, 0x82, 0x00, 0x30, 0x9e, 0x1c, 0x38, 0x70,
    0xf1, 0xbf, 0x06, 0x0c, 0x18, 0x1f, 0x31, 0x8c, 0x63, 0x18, 0x7b, 0x28, 0x38, 0x38, 0x30, 0xbe,
    0x8c, 0xfc, 0xcc, 0xcc, 0xc7, 0x81, 0x0e, 0x1c, 0x38, 0x78, 0xf1, 0xbf, 0x82, 0x1c, 0x53, 0x49,
    0xa3, 0x8c, 0x88, 0x63, 0x39, 0xcb, 0x52, 0x56, 0x9c, 0xe6, 0x31, 0x8c, 0x85, 0x36, 0x8c, 0x31,
    0xe4, 0xe1, 0x82, 0x1c, 0x53, 0x48, 0xe3, 0x0c, 0x30, 0x8c, 0x00, 0xf8, 0x31, 0x8c, 0x21, 0x08,
    0x3f, 0x19, 0x88, 0x42, 0x13, 0x0c, 0x21, 0x08, 0x43, 0x80, 0xff, 0xfc, 0x83, 0x08, 0x42, 0x10,
    0x66, 0x21, 0x08, 0x4e, 0x00, 0xff, 0x04,
];

pub const GLYPHS: &[GfxGlyph] = &[
    GfxGlyph::new(0, 0, 0, 4, 0, 0),        // ' '
    GfxGlyph::new(0, 2, 10, 6, 2, -10),     // '!'
    GfxGlyph::new(3, 4, 4, 6, 1, -10),      // '"'
    GfxGlyph::new(5, 10, 10, 12, 1, -10),   // '#'
    GfxGlyph::new(18, 7, 12, 9, 1, -10),    // '$'
    GfxGlyph::new(29, 11, 10, 13, 1, -10),  // '%'
    GfxGlyph::new(43, 9, 10, 11, 1, -10),   // '&'
    GfxGlyph::new(55, 2, 3, 4, 1, -10),     // '\''
    GfxGlyph::new(56, 3, 13, 5, 1, -11),    // '('
    GfxGlyph::new(61, 3, 12, 5, 1, -10),    // ')'
    GfxGlyph::new(66, 5, 6, 7, 1, -10),     // '*'
    GfxGlyph::new(70, 9, 9, 12, 1, -9),     // '+'
    GfxGlyph::new(81, 2, 4, 4, 1, -2),      // ','
    GfxGlyph::new(82, 3, 1, 5, 1, -4),      // '-'
    GfxGlyph::new(83, 2, 2, 4, 1, -2),      // '.'
    GfxGlyph::new(84, 4, 11, 5, 0, -10),    // '/'
    GfxGlyph::new(90, 7, 10, 9, 1, -10),    // '0'
    GfxGlyph::new(99, 6, 10, 9, 2, -10),    // '1'
    GfxGlyph::new(107, 7, 10, 9, 1, -10),   // '2'
    GfxGlyph::new(116, 7, 10, 9, 1, -10),   // '3'
    GfxGlyph::new(125, 7, 10, 9, 1, -10),   // '4'
    GfxGlyph::new(134, 7, 10, 9, 1, -10),   // '5'
    GfxGlyph::new(143, 7, 10, 9, 1, -10),   // '6'
    GfxGlyph::new(152, 7, 10, 9, 1, -10),   // '7'
    GfxGlyph::new(161, 7, 10, 9, 1, -10),   // '8'
    GfxGlyph::new(170, 7, 10, 9, 1, -10),   // '9'
    GfxGlyph::new(179, 1, 7, 5, 2, -7),     // ':'
    GfxGlyph::new(180, 2, 9, 5, 1, -7),     // ';'
    GfxGlyph::new(183, 9, 7, 12, 1, -8),    // '<'
    GfxGlyph::new(191, 8, 4, 12, 2, -6),    // '='
    GfxGlyph::new(195, 9, 7, 12, 1, -8),    // '>'
    GfxGlyph::new(203, 5, 10, 7, 1, -10),   // '?'
    GfxGlyph::new(210, 12, 12, 14, 1, -10), // '@'
    GfxGlyph::new(228, 9, 10, 10, 0, -10),  // 'A'
    GfxGlyph::new(240, 8, 10, 10, 1, -10),  // 'B'
    GfxGlyph::new(250, 8, 10, 10, 1, -10),  // 'C'
    GfxGlyph::new(260, 9, 10, 11, 1, -10),  // 'D'
    GfxGlyph::new(272, 7, 10, 9, 1, -10),   // 'E'
    GfxGlyph::new(281, 6, 10, 8, 1, -10),   // 'F'
    GfxGlyph::new(289, 9, 10, 11, 1, -10),  // 'G'
    GfxGlyph::new(301, 8, 10, 11, 1, -10),  // 'H'
    GfxGlyph::new(311, 2, 10, 4, 1, -10),   // 'I'
    GfxGlyph::new(314, 4, 13, 4, -1, -10),  // 'J'
    GfxGlyph::new(321, 8, 10, 9, 1, -10),   // 'K'
    GfxGlyph::new(331, 7, 10, 8, 1, -10),   // 'L'
    GfxGlyph::new(340, 10, 10, 12, 1, -10), // 'M'
    GfxGlyph::new(353, 8, 10, 10, 1, -10),  // 'N'
    GfxGlyph::new(363, 9, 10, 11, 1, -10),  // 'O'
    GfxGlyph::new(375, 7, 10, 8, 1, -10),   // 'P'
    GfxGlyph::new(384, 9, 12, 11, 1, -10),  // 'Q'
    GfxGlyph::new(398, 8, 10, 10, 1, -10),  // 'R'
    GfxGlyph::new(408, 7, 10, 9, 1, -10),   // 'S'
    GfxGlyph::new(417, 9, 10, 9, 0, -10),   // 'T'
    GfxGlyph::new(429, 8, 10, 10, 1, -10),  // 'U'
    GfxGlyph::new(439, 9, 10, 10, 0, -10),  // 'V'
    GfxGlyph::new(451, 12, 10, 14, 1, -10), // 'W'
    GfxGlyph::new(466, 8, 10, 10, 1, -10),  // 'X'
    GfxGlyph::new(476, 8, 10, 9, 0, -10),   // 'Y'
    GfxGlyph::new(486, 8, 10, 10, 1, -10),  // 'Z'
    GfxGlyph::new(496, 3, 13, 5, 1, -11),   // '['
    GfxGlyph::new(501, 4, 11, 5, 0, -10),   // '\\'
    GfxGlyph::new(507, 3, 13, 5, 1, -11),   // ']'
    GfxGlyph::new(512, 8, 4, 12, 2, -10),   // '^'
    GfxGlyph::new(516, 7, 1, 7, 0, 2),      // '_'
    GfxGlyph::new(517, 2, 2, 7, 2, -11),    // '`'
    GfxGlyph::new(518, 6, 8, 9, 1, -8),     // 'a'
    GfxGlyph::new(524, 7, 10, 9, 1, -10),   // 'b'
    GfxGlyph::new(533, 6, 8, 8, 1, -8),     // 'c'
    GfxGlyph::new(539, 7, 10, 9, 1, -10),   // 'd'
    GfxGlyph::new(548, 7, 8, 9, 1, -8),     // 'e'
    GfxGlyph::new(555, 4, 11, 5, 1, -11),   // 'f'
    GfxGlyph::new(561, 7, 11, 9, 1, -8),    // 'g'
    GfxGlyph::new(571, 7, 10, 9, 1, -10),   // 'h'
    GfxGlyph::new(580, 2, 10, 4, 1, -10),   // 'i'
    GfxGlyph::new(583, 3, 13, 4, 0, -10),   // 'j'
    GfxGlyph::new(588, 7, 10, 8, 1, -10),   // 'k'
    GfxGlyph::new(597, 2, 10, 4, 1, -10),   // 'l'
    GfxGlyph::new(600, 11, 8, 14, 1, -8),   // 'm'
    GfxGlyph::new(611, 7, 8, 9, 1, -8),     // 'n'
    GfxGlyph::new(618, 7, 8, 9, 1, -8),     // 'o'
    GfxGlyph::new(625, 7, 11, 9, 1, -8),    // 'p'
    GfxGlyph::new(635, 7, 11, 9, 1, -8),    // 'q'
    GfxGlyph::new(645, 5, 8, 6, 1, -8),     // 'r'
    GfxGlyph::new(650, 6, 8, 7, 1, -8),     // 's'
    GfxGlyph::new(656, 4, 10, 5, 1, -10),   // 't'
    GfxGlyph::new(661, 7, 8, 9, 1, -8),     // 'u'
    GfxGlyph::new(668, 6, 8, 8, 1, -8),     // 'v'
    GfxGlyph::new(674, 10, 8, 11, 1, -8),   // 'w'
    GfxGlyph::new(684, 6, 8, 8, 1, -8),     // 'x'
    GfxGlyph::new(690, 6, 11, 8, 1, -8),    // 'y'
    GfxGlyph::new(699, 6, 8, 7, 1, -8),     // 'z'
    GfxGlyph::new(705, 5, 13, 9, 2, -11),   // '{'
    GfxGlyph::new(714, 1, 14, 5, 2, -11),   // '|'
    GfxGlyph::new(716, 5, 13, 9, 2, -11),   // '}'
    GfxGlyph::new(725, 8, 2, 12, 2, -5),    // '~'
];

pub static FONT: GfxFont = GfxFont {
    name: "regular_14",
    bitmap: BITMAP,
    glyphs: GLYPHS,
    first: FIRST,
    last: LAST,
    y_advance: 16,
    baseline: 13,
};
