// This file was generated by font_gen from `DejaVuSans.ttf` at 12pt. Do not edit.

use super::glyph::{GfxFont, GfxGlyph};

pub const FIRST: u16 = 0x20;
pub const LAST: u16 = 0x7e;

pub const BITMAP: &[u8] = &[
    0xfc, 0x80, 0x96, 0x80, 0x02, 0x12, 0x16, 0x7f, 0x24, 0x2c, 0xfe, 0x08, 0x48, 0x21, 0xee, 0x28,
    0xe0, 0xe2, 0xca, 0xf8, 0x80, 0x61, 0x2c, 0x89, 0x02, 0xd0, 0x69, 0x02, 0xa1, 0x24, 0x09, 0x23,
    0x80, 0x38, 0x81, 0x03, 0x07, 0x13, 0x63, 0xc3, 0x7a, 0xe0, 0x56, 0xaa, 0x50, 0x89, 0x26, 0xd2,
    0x52, 0x00, 0x6f, 0x08, 0x08, 0x18, 0xff, 0x08, 0x08, 0x08, 0xe0, 0xe0, 0xc0, 0x11, 0x22, 0x24,
    0x44, 0x88, 0x73, 0x28, 0xe1, 0x86, 0x18, 0xf2, 0x78, 0x61, 0xc3, 0x0c, 0x30, 0xc3, 0x0c, 0xfc,
    0xf4, 0xc2, 0x11, 0x99, 0x98, 0xf8, 0xf0, 0x20, 0x82, 0x30, 0x20, 0xc2, 0xf8, 0x18, 0xe2, 0x92,
    0x8a, 0x2f, 0xc2, 0x08, 0xfb, 0x08, 0x3c, 0x18, 0x20, 0xc2, 0xf0, 0x39, 0x08, 0x2c, 0xca, 0x18,
    0x73, 0x78, 0xf8, 0x42, 0x31, 0x08, 0x84, 0x60, 0x73, 0x28, 0xf2, 0x72, 0x28, 0x63, 0x78, 0x73,
    0x28, 0xa3, 0x8d, 0xf0, 0x82, 0xf0, 0xc0, 0x30, 0xc0, 0x38, 0x03, 0x0e, 0x70, 0xe0, 0x38, 0x07,
    0x7e, 0x00, 0xff, 0xc0, 0x70, 0x0e, 0x03, 0x1c, 0xe0, 0xf9, 0x11, 0x24, 0x00, 0x40, 0x33, 0x10,
    0x28, 0xc6, 0x49, 0x92, 0x64, 0x99, 0xf9, 0x00, 0x61, 0x07, 0x80, 0x18, 0x18, 0x14, 0x24, 0x24,
    0x66, 0x7e, 0x43, 0xc1, 0xfb, 0x38, 0x63, 0xfa, 0x18, 0x61, 0xf8, 0x3c, 0x86, 0x04, 0x08, 0x10,
    0x20, 0x20, 0x3c, 0xf9, 0x9a, 0x0c, 0x18, 0x30, 0x60, 0xc3, 0xf8, 0xff, 0x08, 0x20, 0xfa, 0x08,
    0x20, 0xfc, 0xfe, 0x21, 0x0f, 0xc2, 0x10, 0x80, 0x3c, 0x86, 0x04, 0x08, 0x70, 0x60, 0xa1, 0x3e,
    0x83, 0x06, 0x0c, 0x1f, 0xf0, 0x60, 0xc1, 0x82, 0xff, 0x80, 0x55, 0x55, 0x5c, 0x85, 0x12, 0x47,
    0x0e, 0x16, 0x26, 0x46, 0x86, 0x82, 0x08, 0x20, 0x82, 0x08, 0x20, 0xfc, 0xc3, 0xc3, 0xe3, 0xa5,
    0x95, 0x99, 0x99, 0x81, 0x81, 0xc3, 0x87, 0x8d, 0x19, 0x33, 0x62, 0xc7, 0x86, 0x38, 0x46, 0x82,
    0x83, 0x83, 0x83, 0x82, 0x46, 0x3c, 0xf3, 0x28, 0xe3, 0xdb, 0x08, 0x20, 0x80, 0x38, 0x46, 0x82,
    0x83, 0x83, 0x83, 0x82, 0x46, 0x3c, 0x04, 0xf1, 0x92, 0x14, 0x6f, 0x9b, 0x23, 0x42, 0x86, 0x7b,
    0x08, 0x30, 0x78, 0x30, 0x43, 0xf8, 0xfe, 0x20, 0x40, 0x81, 0x02, 0x04, 0x08, 0x10, 0x83, 0x06,
    0x0c, 0x18, 0x30, 0x61, 0xe2, 0x7c, 0x81, 0x43, 0x42, 0x62, 0x24, 0x24, 0x34, 0x18, 0x18, 0x8c,
    0x63, 0x18, 0xc6, 0x53, 0xd2, 0x94, 0xa5, 0x29, 0x8e, 0x61, 0x00, 0x84, 0x89, 0xa1, 0x83, 0x07,
    0x12, 0x62, 0x86, 0x82, 0x8d, 0x91, 0xc1, 0x02, 0x04, 0x08, 0x10, 0xfc, 0x08, 0x20, 0xc3, 0x04,
    0x10, 0x40, 0xfe, 0xea, 0xaa, 0xac, 0x88, 0x44, 0x42, 0x22, 0x11, 0xe4, 0x92, 0x49, 0x2d, 0x00,
    0x31, 0xec, 0xc0, 0xfc, 0x80, 0x70, 0xc3, 0xf8, 0xc7, 0xe0, 0x82, 0x0b, 0x32, 0x86, 0x18, 0x73,
    0xf8, 0x36, 0x21, 0x08, 0x41, 0xe0, 0x0c, 0x36, 0xf7, 0x8e, 0x38, 0xe3, 0x7c, 0x33, 0x28, 0x7f,
    0x82, 0x07, 0x80, 0x73, 0xe9, 0x24, 0x80, 0x63, 0x38, 0xe3, 0x8e, 0x37, 0x82, 0x58, 0x82, 0x0b,
    0x32, 0x8e, 0x18, 0x61, 0x84, 0x9f, 0x80, 0x41, 0x55, 0x5c, 0x84, 0x21, 0x3a, 0x72, 0x92, 0x88,
    0xff, 0x80, 0xb1, 0x33, 0x28, 0xc6, 0x21, 0x88, 0x62, 0x18, 0x84, 0xb3, 0x28, 0xe1, 0x86, 0x18,
    0x40, 0x33, 0x28, 0xa1, 0x8e, 0x27, 0x80, 0xb3, 0x28, 0x61, 0x87, 0x3f, 0xa0, 0x80, 0x63, 0x78,
    0xe3, 0x8e, 0x37, 0xc3, 0x0c, 0xbc, 0x88, 0x88, 0x80, 0x74, 0x21, 0xc1, 0x0f, 0xc0, 0x9e, 0x49,
    0x23, 0x82, 0x38, 0xe3, 0x8e, 0x37, 0xc0, 0x8c, 0x56, 0xa7, 0x10, 0x99, 0x99, 0xab, 0x66, 0x66,
    0x66, 0x86, 0x5c, 0x47, 0x6e, 0x20, 0x8c, 0x56, 0xa7, 0x10, 0x88, 0xf0, 0xc4, 0x44, 0x43, 0xe0,
    0x34, 0x44, 0x4c, 0x44, 0x46, 0x30, 0xff, 0xe0, 0xc4, 0x44, 0x63, 0x64, 0x44, 0xc0, 0x21, 0xbc,
];

pub const GLYPHS: &[GfxGlyph] = &[
    GfxGlyph::new(0, 0, 0, 4, 0, 0),       // ' '
    GfxGlyph::new(0, 1, 9, 5, 2, -9),      // '!'
    GfxGlyph::new(2, 3, 3, 6, 1, -9),      // '"'
    GfxGlyph::new(4, 8, 9, 10, 1, -9),     // '#'
    GfxGlyph::new(13, 6, 10, 8, 1, -9),    // '$'
    GfxGlyph::new(21, 10, 9, 11, 1, -9),   // '%'
    GfxGlyph::new(33, 7, 9, 9, 1, -9),     // '&'
    GfxGlyph::new(41, 1, 3, 3, 1, -9),     // '\''
    GfxGlyph::new(42, 2, 10, 5, 1, -9),    // '('
    GfxGlyph::new(45, 3, 11, 5, 1, -9),    // ')'
    GfxGlyph::new(50, 4, 2, 6, 1, -7),     // '*'
    GfxGlyph::new(51, 8, 7, 10, 1, -7),    // '+'
    GfxGlyph::new(58, 2, 2, 4, 1, -1),     // ','
    GfxGlyph::new(59, 3, 1, 4, 1, -4),     // '-'
    GfxGlyph::new(60, 2, 1, 4, 1, -1),     // '.'
    GfxGlyph::new(61, 4, 10, 4, 0, -9),    // '/'
    GfxGlyph::new(66, 6, 9, 8, 1, -9),     // '0'
    GfxGlyph::new(73, 6, 9, 8, 1, -9),     // '1'
    GfxGlyph::new(80, 5, 9, 8, 1, -9),     // '2'
    GfxGlyph::new(86, 6, 9, 8, 1, -9),     // '3'
    GfxGlyph::new(93, 6, 9, 8, 1, -9),     // '4'
    GfxGlyph::new(100, 6, 9, 8, 1, -9),    // '5'
    GfxGlyph::new(107, 6, 9, 8, 1, -9),    // '6'
    GfxGlyph::new(114, 5, 9, 8, 1, -9),    // '7'
    GfxGlyph::new(120, 6, 9, 8, 1, -9),    // '8'
    GfxGlyph::new(127, 6, 9, 8, 1, -9),    // '9'
    GfxGlyph::new(134, 2, 6, 4, 1, -6),    // ':'
    GfxGlyph::new(136, 2, 7, 4, 1, -6),    // ';'
    GfxGlyph::new(138, 8, 6, 10, 1, -7),   // '<'
    GfxGlyph::new(144, 8, 3, 10, 1, -5),   // '='
    GfxGlyph::new(147, 8, 6, 10, 1, -7),   // '>'
    GfxGlyph::new(153, 4, 9, 6, 1, -9),    // '?'
    GfxGlyph::new(158, 10, 10, 12, 1, -8), // '@'
    GfxGlyph::new(171, 8, 9, 8, 0, -9),    // 'A'
    GfxGlyph::new(180, 6, 9, 8, 1, -9),    // 'B'
    GfxGlyph::new(187, 7, 9, 8, 1, -9),    // 'C'
    GfxGlyph::new(195, 7, 9, 9, 1, -9),    // 'D'
    GfxGlyph::new(203, 6, 9, 8, 1, -9),    // 'E'
    GfxGlyph::new(210, 5, 9, 7, 1, -9),    // 'F'
    GfxGlyph::new(216, 7, 9, 9, 1, -9),    // 'G'
    GfxGlyph::new(224, 7, 9, 9, 1, -9),    // 'H'
    GfxGlyph::new(232, 1, 9, 4, 1, -9),    // 'I'
    GfxGlyph::new(234, 2, 11, 4, 0, -9),   // 'J'
    GfxGlyph::new(237, 7, 9, 8, 1, -9),    // 'K'
    GfxGlyph::new(245, 6, 9, 7, 1, -9),    // 'L'
    GfxGlyph::new(252, 8, 9, 10, 1, -9),   // 'M'
    GfxGlyph::new(261, 7, 9, 9, 1, -9),    // 'N'
    GfxGlyph::new(269, 8, 9, 9, 1, -9),    // 'O'
    GfxGlyph::new(278, 6, 9, 7, 1, -9),    // 'P'
    GfxGlyph::new(285, 8, 10, 9, 1, -9),   // 'Q'
    GfxGlyph::new(295, 7, 9, 8, 1, -9),    // 'R'
    GfxGlyph::new(303, 6, 9, 8, 1, -9),    // 'S'
    GfxGlyph::new(310, 7, 9, 7, 0, -9),    // 'T'
    GfxGlyph::new(318, 7, 9, 9, 1, -9),    // 'U'
    GfxGlyph::new(326, 8, 9, 8, 0, -9),    // 'V'
    GfxGlyph::new(335, 10, 9, 12, 1, -9),  // 'W'
    GfxGlyph::new(347, 7, 9, 8, 1, -9),    // 'X'
    GfxGlyph::new(355, 7, 9, 7, 0, -9),    // 'Y'
    GfxGlyph::new(363, 7, 9, 8, 1, -9),    // 'Z'
    GfxGlyph::new(371, 2, 11, 5, 1, -9),   // '['
    GfxGlyph::new(374, 4, 10, 4, 0, -9),   // '\\'
    GfxGlyph::new(379, 3, 11, 5, 1, -9),   // ']'
    GfxGlyph::new(384, 6, 3, 10, 2, -9),   // '^'
    GfxGlyph::new(387, 6, 1, 6, 0, 2),     // '_'
    GfxGlyph::new(388, 1, 1, 6, 2, -9),    // '`'
    GfxGlyph::new(389, 5, 7, 7, 1, -7),    // 'a'
    GfxGlyph::new(394, 6, 9, 8, 1, -9),    // 'b'
    GfxGlyph::new(401, 5, 7, 7, 1, -7),    // 'c'
    GfxGlyph::new(406, 6, 9, 8, 1, -9),    // 'd'
    GfxGlyph::new(413, 6, 7, 7, 1, -7),    // 'e'
    GfxGlyph::new(419, 3, 9, 4, 1, -9),    // 'f'
    GfxGlyph::new(423, 6, 9, 8, 1, -7),    // 'g'
    GfxGlyph::new(430, 6, 9, 8, 1, -9),    // 'h'
    GfxGlyph::new(437, 1, 9, 3, 1, -9),    // 'i'
    GfxGlyph::new(439, 2, 11, 3, 0, -9),   // 'j'
    GfxGlyph::new(442, 5, 9, 7, 1, -9),    // 'k'
    GfxGlyph::new(448, 1, 9, 3, 1, -9),    // 'l'
    GfxGlyph::new(450, 10, 7, 12, 1, -7),  // 'm'
    GfxGlyph::new(459, 6, 7, 8, 1, -7),    // 'n'
    GfxGlyph::new(465, 6, 7, 7, 1, -7),    // 'o'
    GfxGlyph::new(471, 6, 9, 8, 1, -7),    // 'p'
    GfxGlyph::new(478, 6, 9, 8, 1, -7),    // 'q'
    GfxGlyph::new(485, 4, 7, 5, 1, -7),    // 'r'
    GfxGlyph::new(489, 5, 7, 6, 1, -7),    // 's'
    GfxGlyph::new(494, 3, 8, 5, 1, -8),    // 't'
    GfxGlyph::new(497, 6, 7, 8, 1, -7),    // 'u'
    GfxGlyph::new(503, 5, 6, 7, 1, -6),    // 'v'
    GfxGlyph::new(507, 8, 6, 10, 1, -6),   // 'w'
    GfxGlyph::new(513, 5, 7, 7, 1, -7),    // 'x'
    GfxGlyph::new(518, 5, 8, 7, 1, -6),    // 'y'
    GfxGlyph::new(523, 5, 7, 6, 1, -7),    // 'z'
    GfxGlyph::new(528, 4, 11, 8, 2, -9),   // '{'
    GfxGlyph::new(534, 1, 11, 4, 2, -9),   // '|'
    GfxGlyph::new(536, 4, 11, 8, 2, -9),   // '}'
    GfxGlyph::new(542, 7, 2, 10, 1, -5),   // '~'
];

pub static FONT: GfxFont = GfxFont {
    name: "regular_12",
    bitmap: BITMAP,
    glyphs: GLYPHS,
    first: FIRST,
    last: LAST,
    y_advance: 14,
    baseline: 11,
};
