// This file was generated by font_gen from `DejaVuSans-Bold.ttf` at 22pt. Do not edit.

use super::glyph::{GfxFont, GfxGlyph};

pub const FIRST: u16 = 0x20;
pub const LAST: u16 = 0x7e;

pub const BITMAP: &[u8] = &[
    0xff, 0xff, 0xff, 0xff, 0xff, 0x60, 0xff, 0xff, 0xe7, 0xcf, 0x9f, 0x3e, 0x7c, 0xc0, 0x03, 0x8c,
    0x03, 0x1c, 0x03, 0x18, 0x03, 0x18, 0x3f, 0xff, 0x3f, 0xff, 0x3f, 0xff, 0x06, 0x30, 0x0e, 0x30,
    0x0e, 0x70, 0xff, 0xfe, 0x7f, 0xfe, 0x1c, 0x60, 0x18, 0xe0, 0x18, 0xc0, 0x18, 0xc0, 0x04, 0x00,
    0x60, 0x06, 0x03, 0xfe, 0x7f, 0xef, 0x66, 0xe6, 0x0f, 0x60, 0xff, 0x07, 0xfc, 0x3f, 0xe0, 0x7f,
    0x06, 0xf8, 0x6f, 0xff, 0xef, 0xfe, 0x7f, 0x80, 0x60, 0x06, 0x00, 0x60, 0x7e, 0x07, 0x0f, 0xf0,
    0x60, 0xe7, 0x0e, 0x0c, 0x30, 0xc0, 0xc3, 0x18, 0x0e, 0x73, 0x80, 0xff, 0x30, 0x07, 0xe7, 0x00,
    0x00, 0x67, 0xe0, 0x0c, 0xff, 0x01, 0xce, 0x70, 0x18, 0xc3, 0x03, 0x0e, 0x30, 0x30, 0xe7, 0x06,
    0x0f, 0xf0, 0xe0, 0x7e, 0x07, 0xf0, 0x0f, 0xf8, 0x07, 0x8c, 0x03, 0xc0, 0x01, 0xe0, 0x00, 0xf8,
    0x00, 0x7e, 0x1c, 0x7f, 0x8e, 0x7b, 0xc7, 0x38, 0xf7, 0xbc, 0x3f, 0x9e, 0x0f, 0xc7, 0x87, 0xc3,
    0xff, 0xf0, 0xff, 0xfc, 0x3f, 0x9f, 0xff, 0xff, 0xc0, 0x1c, 0xf3, 0x9e, 0x79, 0xcf, 0x3c, 0xf3,
    0xcf, 0x3c, 0xf3, 0xc7, 0x1c, 0x78, 0xe3, 0xc7, 0xe3, 0xc7, 0x1e, 0x38, 0xe3, 0xcf, 0x3c, 0xf3,
    0xcf, 0x3c, 0xf3, 0x8e, 0x79, 0xcf, 0x38, 0x0c, 0x03, 0x0c, 0xdd, 0xfe, 0x3e, 0x0f, 0xcf, 0xfe,
    0x33, 0x0c, 0x03, 0x00, 0x03, 0x00, 0x0c, 0x00, 0x30, 0x00, 0xc0, 0x03, 0x00, 0x0e, 0x0f, 0xff,
    0xff, 0xff, 0x03, 0x80, 0x0c, 0x00, 0x30, 0x00, 0xc0, 0x03, 0x00, 0x0c, 0x00, 0x7b, 0xde, 0xf7,
    0x3b, 0x80, 0xff, 0xff, 0xf8, 0xff, 0xff, 0x07, 0x07, 0x06, 0x06, 0x0e, 0x0c, 0x0c, 0x1c, 0x18,
    0x18, 0x38, 0x30, 0x30, 0x70, 0x60, 0x60, 0xe0, 0xe0, 0x1f, 0xc1, 0xff, 0x1f, 0xfc, 0xf1, 0xe7,
    0x87, 0xf8, 0x3f, 0xc1, 0xfe, 0x0f, 0xf0, 0x7f, 0x83, 0xfc, 0x1e, 0xf0, 0xf7, 0x8f, 0x3f, 0xf8,
    0xff, 0x83, 0xf8, 0x3f, 0x0f, 0xf0, 0xff, 0x00, 0xf0, 0x0f, 0x00, 0xf0, 0x0f, 0x00, 0xf0, 0x0f,
    0x00, 0xf0, 0x0f, 0x00, 0xf0, 0x0f, 0x07, 0xff, 0x7f, 0xf7, 0xff, 0xff, 0x9f, 0xfb, 0xff, 0xc0,
    0xf0, 0x1e, 0x03, 0xc0, 0x78, 0x1e, 0x07, 0x81, 0xe0, 0x78, 0x3e, 0x0f, 0x81, 0xff, 0xff, 0xff,
    0xff, 0x7f, 0xc3, 0xff, 0x1f, 0xfc, 0x01, 0xe0, 0x0f, 0x00, 0x78, 0x3f, 0x83, 0xf8, 0x1f, 0xe0,
    0x0f, 0x80, 0x3c, 0x01, 0xf0, 0x0f, 0x7f, 0xfb, 0xff, 0x8f, 0xf8, 0x03, 0xe0, 0x3f, 0x01, 0xf8,
    0x1f, 0xc1, 0xde, 0x0e, 0xf0, 0xe7, 0x8e, 0x3c, 0x71, 0xe7, 0x0f, 0x3f, 0xff, 0xff, 0xff, 0xff,
    0x80, 0xf0, 0x07, 0x80, 0x3c, 0xff, 0xef, 0xfe, 0xff, 0xef, 0x00, 0xf0, 0x0f, 0xf0, 0xff, 0xcf,
    0xfe, 0xc3, 0xe0, 0x1f, 0x00, 0xf0, 0x1f, 0x81, 0xef, 0xfe, 0xff, 0xc7, 0xf8, 0x0f, 0xf0, 0xff,
    0x8f, 0xdc, 0xf8, 0x07, 0x80, 0x3c, 0x81, 0xff, 0x9f, 0xfe, 0xfc, 0xff, 0xc3, 0xde, 0x1e, 0xf0,
    0xf7, 0x87, 0x9e, 0x78, 0xff, 0xc1, 0xf8, 0xff, 0xff, 0xff, 0xff, 0xfc, 0x01, 0xe0, 0x0f, 0x00,
    0xf0, 0x07, 0x80, 0x78, 0x03, 0xc0, 0x3c, 0x01, 0xe0, 0x1e, 0x00, 0xf0, 0x0f, 0x00, 0x78, 0x03,
    0xc0, 0x1f, 0xe1, 0xff, 0x9f, 0x3c, 0xf0, 0xf7, 0x87, 0x3c, 0x78, 0xff, 0x83, 0xf8, 0x3f, 0xf3,
    0xc7, 0xbc, 0x1f, 0xe0, 0xf7, 0x87, 0xbe, 0x7d, 0xff, 0xc3, 0xf8, 0x1f, 0xc1, 0xff, 0x1e, 0x7d,
    0xe1, 0xef, 0x0f, 0x78, 0x7f, 0xc3, 0xef, 0x1f, 0x7f, 0xf9, 0xff, 0xc1, 0x1e, 0x01, 0xe0, 0x0f,
    0x39, 0xf1, 0xff, 0x0f, 0xf0, 0xff, 0xff, 0x00, 0x00, 0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0xff,
    0xff, 0xee, 0xc0, 0x00, 0x0c, 0x00, 0xf0, 0x1f, 0xc3, 0xf8, 0x7f, 0x03, 0xf0, 0x0f, 0x80, 0x1f,
    0xc0, 0x1f, 0xe0, 0x0f, 0xf0, 0x07, 0xc0, 0x03, 0x7f, 0xff, 0xff, 0xff, 0xff, 0xc0, 0x00, 0x00,
    0x01, 0xff, 0xff, 0xff, 0xff, 0xff, 0xc0, 0x03, 0xe0, 0x07, 0xf0, 0x07, 0xf0, 0x03, 0xf8, 0x01,
    0xf0, 0x03, 0xc0, 0x7f, 0x0f, 0xe1, 0xfc, 0x0f, 0x80, 0x38, 0x00, 0xfe, 0x7f, 0xff, 0xe0, 0xf0,
    0x78, 0x3c, 0x3c, 0x3c, 0x3c, 0x1e, 0x0e, 0x00, 0x03, 0xc1, 0xe0, 0xf0, 0x78, 0x03, 0xfe, 0x01,
    0xff, 0xe0, 0x78, 0x0e, 0x1c, 0x00, 0xe3, 0x04, 0x0e, 0xc3, 0xfc, 0xd8, 0xff, 0x9b, 0x18, 0x73,
    0x63, 0x0e, 0x78, 0x61, 0xcd, 0x8c, 0x39, 0xb1, 0xcf, 0x66, 0x1f, 0xfc, 0xe1, 0xde, 0x0e, 0x00,
    0x00, 0xe0, 0x18, 0x0f, 0x0f, 0x00, 0xff, 0xc0, 0x03, 0xc0, 0x00, 0x03, 0xe0, 0x03, 0xf8, 0x01,
    0xfc, 0x00, 0xfe, 0x00, 0xf7, 0x80, 0x7b, 0xc0, 0x3d, 0xe0, 0x3c, 0x78, 0x1e, 0x3c, 0x0f, 0x0f,
    0x0f, 0xff, 0x87, 0xff, 0xc7, 0xff, 0xf3, 0xc0, 0x79, 0xe0, 0x3d, 0xe0, 0x0f, 0xff, 0xc7, 0xff,
    0xbf, 0xfd, 0xe1, 0xef, 0x0f, 0xf8, 0x7b, 0xff, 0xdf, 0xfc, 0xff, 0xf7, 0x87, 0xfc, 0x1f, 0xe0,
    0xff, 0x07, 0xff, 0xff, 0xff, 0xdf, 0xf8, 0x07, 0xf8, 0x7f, 0xf3, 0xff, 0xdf, 0x03, 0x78, 0x03,
    0xe0, 0x0f, 0x80, 0x3c, 0x00, 0xf0, 0x03, 0xe0, 0x0f, 0x80, 0x1e, 0x00, 0x7c, 0x0c, 0xff, 0xf1,
    0xff, 0xc1, 0xfe, 0xff, 0xc1, 0xff, 0xe3, 0xff, 0xe7, 0x87, 0xef, 0x03, 0xde, 0x07, 0xfc, 0x07,
    0xf8, 0x0f, 0xf0, 0x1f, 0xe0, 0x3f, 0xc0, 0xff, 0x81, 0xef, 0x0f, 0xdf, 0xff, 0x3f, 0xfc, 0x7f,
    0xe0, 0xff, 0xff, 0xff, 0xff, 0xf8, 0x0f, 0x01, 0xe0, 0x3f, 0xff, 0xff, 0xff, 0xfe, 0x03, 0xc0,
    0x78, 0x0f, 0x01, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xf8, 0x0f, 0x01, 0xe0, 0x3f,
    0xff, 0xff, 0xff, 0xfe, 0x03, 0xc0, 0x78, 0x0f, 0x01, 0xe0, 0x3c, 0x07, 0x80, 0x07, 0xfc, 0x3f,
    0xfc, 0xff, 0xfb, 0xf0, 0x37, 0x80, 0x1f, 0x00, 0x3e, 0x00, 0x78, 0x3f, 0xf0, 0x7f, 0xf0, 0xff,
    0xe0, 0x3b, 0xc0, 0x77, 0xe0, 0xe7, 0xff, 0xc7, 0xff, 0x83, 0xfc, 0xf0, 0x3f, 0xc0, 0xff, 0x03,
    0xfc, 0x0f, 0xf0, 0x3f, 0xc0, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xc0, 0xff, 0x03, 0xfc, 0x0f,
    0xf0, 0x3f, 0xc0, 0xff, 0x03, 0xfc, 0x0f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x1e,
    0x3c, 0x78, 0xf1, 0xe3, 0xc7, 0x8f, 0x1e, 0x3c, 0x78, 0xf1, 0xe3, 0xc7, 0x8f, 0x3f, 0xfb, 0xf7,
    0x80, 0xf0, 0x3d, 0xe0, 0xf3, 0xc3, 0xc7, 0x8f, 0x0f, 0x7c, 0x1f, 0xf0, 0x3f, 0xc0, 0x7f, 0x00,
    0xff, 0x01, 0xff, 0x03, 0xdf, 0x07, 0x9f, 0x0f, 0x1f, 0x1e, 0x1f, 0x3c, 0x1f, 0x78, 0x1f, 0xf0,
    0x1e, 0x03, 0xc0, 0x78, 0x0f, 0x01, 0xe0, 0x3c, 0x07, 0x80, 0xf0, 0x1e, 0x03, 0xc0, 0x78, 0x0f,
    0x01, 0xff, 0xff, 0xff, 0xff, 0xfc, 0x0f, 0xff, 0x03, 0xff, 0xc0, 0xff, 0xf8, 0x7f, 0xfe, 0x1f,
    0xff, 0xce, 0xff, 0x73, 0xbf, 0xdd, 0xef, 0xf3, 0xf3, 0xfc, 0xfc, 0xff, 0x1e, 0x3f, 0xc7, 0x8f,
    0xf1, 0xc3, 0xfc, 0x00, 0xff, 0x00, 0x3f, 0xc0, 0x0f, 0xf8, 0x3f, 0xe0, 0xff, 0xc3, 0xff, 0x8f,
    0xfe, 0x3f, 0xfc, 0xff, 0x73, 0xfd, 0xef, 0xf3, 0xbf, 0xcf, 0xff, 0x1f, 0xfc, 0x7f, 0xf0, 0xff,
    0xc3, 0xff, 0x07, 0xfc, 0x0f, 0x0f, 0xf0, 0x0f, 0xfe, 0x0f, 0xff, 0x8f, 0x83, 0xe7, 0x81, 0xf7,
    0xc0, 0x7b, 0xe0, 0x3d, 0xe0, 0x1f, 0xf0, 0x0f, 0xfc, 0x07, 0xbe, 0x03, 0xcf, 0x03, 0xe7, 0xc1,
    0xf1, 0xff, 0xf0, 0x7f, 0xf0, 0x1f, 0xe0, 0xff, 0xc7, 0xff, 0xbf, 0xfd, 0xe1, 0xff, 0x07, 0xf8,
    0x3f, 0xc1, 0xff, 0xff, 0xff, 0xf7, 0xff, 0x3e, 0x01, 0xe0, 0x0f, 0x00, 0x78, 0x03, 0xc0, 0x1e,
    0x00, 0x0f, 0xf0, 0x0f, 0xfe, 0x0f, 0xff, 0x8f, 0x83, 0xe7, 0x81, 0xf7, 0xc0, 0x7b, 0xe0, 0x3d,
    0xe0, 0x1f, 0xf0, 0x0f, 0xfc, 0x07, 0xbe, 0x03, 0xcf, 0x03, 0xe7, 0xc1, 0xe1, 0xff, 0xf0, 0x7f,
    0xf0, 0x1f, 0xe0, 0x00, 0x78, 0x00, 0x1e, 0x00, 0x07, 0x80, 0xff, 0xc3, 0xff, 0x8f, 0xff, 0x3c,
    0x3c, 0xf0, 0xf3, 0xc3, 0xcf, 0x0f, 0x3f, 0xf8, 0xff, 0xc3, 0xff, 0x8f, 0x1f, 0x3c, 0x3c, 0xf0,
    0xfb, 0xc1, 0xef, 0x07, 0xfc, 0x0f, 0x3f, 0xe7, 0xfe, 0xff, 0xef, 0x02, 0xe0, 0x0f, 0x00, 0xff,
    0x07, 0xfc, 0x3f, 0xe0, 0x7f, 0x00, 0xf0, 0x0f, 0xc0, 0xff, 0xff, 0xff, 0xe7, 0xfc, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xf8, 0x3e, 0x00, 0x7c, 0x00, 0xf8, 0x01, 0xf0, 0x03, 0xe0, 0x07, 0xc0, 0x0f,
    0x80, 0x1f, 0x00, 0x3e, 0x00, 0x7c, 0x00, 0xf8, 0x01, 0xf0, 0x03, 0xe0, 0xf0, 0x3f, 0xc0, 0xff,
    0x03, 0xfc, 0x0f, 0xf0, 0x3f, 0xc0, 0xff, 0x03, 0xfc, 0x0f, 0xf0, 0x3f, 0xc0, 0xff, 0x03, 0xfc,
    0x1f, 0xf8, 0x79, 0xff, 0xe3, 0xff, 0x07, 0xf8, 0xf0, 0x07, 0xbc, 0x07, 0x9e, 0x03, 0xcf, 0x83,
    0xe3, 0xc1, 0xe1, 0xe0, 0xf0, 0x78, 0xf0, 0x3c, 0x78, 0x1e, 0x3c, 0x07, 0xbc, 0x03, 0xde, 0x01,
    0xff, 0x00, 0x7f, 0x00, 0x3f, 0x80, 0x1f, 0xc0, 0x07, 0xc0, 0xf0, 0x78, 0x1f, 0xc1, 0xe0, 0xff,
    0x07, 0xc3, 0xfc, 0x3f, 0x0f, 0x78, 0xfc, 0x3d, 0xe3, 0xb1, 0xe7, 0x8c, 0xe7, 0x9e, 0x73, 0x9e,
    0x3d, 0xce, 0x78, 0xf7, 0x3b, 0xc3, 0xdc, 0x7f, 0x0f, 0xe1, 0xfc, 0x1f, 0x87, 0xf0, 0x7e, 0x1f,
    0x81, 0xf8, 0x3e, 0x07, 0xc0, 0xf8, 0xf0, 0x1e, 0xf0, 0x79, 0xf1, 0xf1, 0xe3, 0xc1, 0xef, 0x03,
    0xfe, 0x03, 0xf8, 0x03, 0xe0, 0x07, 0xc0, 0x1f, 0xc0, 0x7f, 0xc1, 0xf7, 0x83, 0xc7, 0x8f, 0x07,
    0xbe, 0x0f, 0xf8, 0x0f, 0xf8, 0x1f, 0x78, 0x1e, 0x7c, 0x3c, 0x3e, 0x7c, 0x1e, 0x78, 0x1f, 0xf0,
    0x0f, 0xf0, 0x07, 0xe0, 0x07, 0xe0, 0x03, 0xc0, 0x03, 0xc0, 0x03, 0xc0, 0x03, 0xc0, 0x03, 0xc0,
    0x03, 0xc0, 0x03, 0xc0, 0xff, 0xff, 0xff, 0xff, 0xff, 0xc0, 0x3e, 0x01, 0xf0, 0x07, 0x80, 0x3c,
    0x01, 0xf0, 0x0f, 0x80, 0x7c, 0x03, 0xe0, 0x0f, 0x00, 0x7c, 0x03, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xfd, 0xff, 0xf7, 0x8f, 0x1e, 0x3c, 0x78, 0xf1, 0xe3, 0xc7, 0x8f, 0x1e, 0x3c, 0x78, 0xf1, 0xfb,
    0xff, 0xf0, 0xe0, 0xe0, 0x60, 0x60, 0x70, 0x30, 0x30, 0x38, 0x18, 0x18, 0x1c, 0x0c, 0x0c, 0x0e,
    0x06, 0x06, 0x07, 0x07, 0x7f, 0xfd, 0xf8, 0x70, 0xe1, 0xc3, 0x87, 0x0e, 0x1c, 0x38, 0x70, 0xe1,
    0xc3, 0x87, 0x0e, 0xff, 0xfb, 0xf0, 0x0f, 0x00, 0xfc, 0x0f, 0xf0, 0x73, 0xc7, 0x07, 0x60, 0x1c,
    0xff, 0xff, 0xfc, 0xce, 0x73, 0x7f, 0xc7, 0xfe, 0x61, 0xf0, 0x0f, 0x0f, 0xf7, 0xff, 0xff, 0xff,
    0x0f, 0xf0, 0xff, 0x9f, 0x7f, 0xf3, 0xef, 0xe0, 0x07, 0x80, 0x3c, 0x01, 0xe0, 0x0f, 0x00, 0x7b,
    0xe3, 0xff, 0x9f, 0xfe, 0xf0, 0xf7, 0x83, 0xfc, 0x1f, 0xe0, 0xff, 0x07, 0xf8, 0x7b, 0xff, 0xdf,
    0xfc, 0xf7, 0xc0, 0x1f, 0xc7, 0xfd, 0xfb, 0xfc, 0x0f, 0x01, 0xe0, 0x3c, 0x07, 0x80, 0xf8, 0x0f,
    0xdc, 0xff, 0x8f, 0xe0, 0x00, 0x78, 0x03, 0xc0, 0x1e, 0x00, 0xf0, 0x07, 0x8f, 0xbd, 0xff, 0xef,
    0xff, 0xf8, 0xff, 0x83, 0xfc, 0x1f, 0xe0, 0xff, 0x07, 0xfc, 0x7d, 0xff, 0xef, 0xff, 0x1f, 0x78,
    0x1f, 0xc1, 0xff, 0x1e, 0x3d, 0xe0, 0xef, 0x07, 0xff, 0xff, 0xff, 0xfe, 0x00, 0xf0, 0x03, 0xe3,
    0x8f, 0xfc, 0x3f, 0xc0, 0x07, 0xc7, 0xf1, 0xfc, 0xf0, 0x3c, 0x3f, 0xef, 0xf9, 0xfe, 0x3c, 0x0f,
    0x03, 0xc0, 0xf0, 0x3c, 0x0f, 0x03, 0xc0, 0xf0, 0x3c, 0x00, 0x1f, 0x7b, 0xff, 0xdf, 0xff, 0xf1,
    0xff, 0x07, 0xf8, 0x3f, 0xc1, 0xfe, 0x0f, 0xf8, 0xfb, 0xff, 0xcf, 0xfe, 0x3c, 0xf0, 0x07, 0x80,
    0x79, 0xff, 0xcf, 0xfc, 0x1f, 0x00, 0xe0, 0x0f, 0x00, 0xf0, 0x0f, 0x00, 0xf0, 0x0f, 0x7c, 0xff,
    0xef, 0xff, 0xf0, 0xff, 0x0f, 0xf0, 0xff, 0x0f, 0xf0, 0xff, 0x0f, 0xf0, 0xff, 0x0f, 0xf0, 0xf0,
    0xef, 0xf0, 0x0f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xf0, 0x1c, 0x3c, 0x78, 0x00, 0x03, 0xc7, 0x8f,
    0x1e, 0x3c, 0x78, 0xf1, 0xe3, 0xc7, 0x8f, 0x1e, 0x3c, 0xf7, 0xef, 0x9e, 0x00, 0xe0, 0x07, 0x80,
    0x3c, 0x01, 0xe0, 0x0f, 0x00, 0x78, 0x7b, 0xc7, 0x9e, 0x78, 0xf7, 0x87, 0xf8, 0x3f, 0x81, 0xfe,
    0x0f, 0xf8, 0x7b, 0xe3, 0xcf, 0x9e, 0x3e, 0xf0, 0xf8, 0xef, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xf0, 0xf7, 0xcf, 0x9f, 0xff, 0xfb, 0xff, 0xff, 0xf8, 0xf8, 0xff, 0x0f, 0x1f, 0xe1, 0xe3,
    0xfc, 0x38, 0x7f, 0x87, 0x0f, 0xf0, 0xe1, 0xfe, 0x1c, 0x3f, 0xc3, 0x87, 0xf8, 0x70, 0xf0, 0xf7,
    0xcf, 0xfe, 0xff, 0xff, 0x0f, 0xf0, 0xff, 0x0f, 0xf0, 0xff, 0x0f, 0xf0, 0xff, 0x0f, 0xf0, 0xff,
    0x0f, 0x1f, 0xc1, 0xff, 0x1f, 0x7d, 0xf0, 0xff, 0x07, 0xf8, 0x3f, 0xc1, 0xfe, 0x0f, 0xf8, 0x7b,
    0xef, 0x8f, 0xf8, 0x3f, 0x80, 0xf7, 0xc7, 0xff, 0x3f, 0xfd, 0xe1, 0xef, 0x07, 0xf8, 0x3f, 0xc1,
    0xfe, 0x0f, 0xf0, 0xf7, 0xff, 0xbf, 0xf9, 0xef, 0x8f, 0x00, 0x78, 0x03, 0xc0, 0x1e, 0x00, 0xe0,
    0x00, 0x1f, 0x7b, 0xff, 0xdf, 0xff, 0xf1, 0xff, 0x07, 0xf8, 0x3f, 0xc1, 0xfe, 0x0f, 0xf8, 0xfb,
    0xff, 0xdf, 0xfe, 0x3e, 0xf0, 0x07, 0x80, 0x3c, 0x01, 0xe0, 0x0f, 0x00, 0x78, 0xf7, 0xff, 0xff,
    0xff, 0x0f, 0x07, 0x83, 0xc1, 0xe0, 0xf0, 0x78, 0x3c, 0x1e, 0x00, 0x3f, 0xcf, 0xfb, 0xc3, 0x78,
    0x0f, 0xc0, 0xff, 0x8f, 0xf8, 0x1f, 0x01, 0xfc, 0x3f, 0xff, 0x3f, 0xc0, 0x3c, 0x0f, 0x03, 0xc3,
    0xff, 0xff, 0xff, 0xf3, 0xc0, 0xf0, 0x3c, 0x0f, 0x03, 0xc0, 0xf0, 0x3f, 0xc7, 0xf0, 0xfc, 0xf0,
    0xff, 0x0f, 0xf0, 0xff, 0x0f, 0xf0, 0xff, 0x0f, 0xf0, 0xff, 0x0f, 0xf1, 0xff, 0xff, 0x7f, 0xf7,
    0xcf, 0xe0, 0x7f, 0x83, 0xbc, 0x3c, 0xe1, 0xe7, 0x8e, 0x1c, 0xf0, 0xf7, 0x07, 0xf8, 0x1f, 0xc0,
    0xfc, 0x07, 0xe0, 0x1e, 0x00, 0xf1, 0xe1, 0xfc, 0x78, 0xff, 0x1e, 0x3d, 0xc7, 0xcf, 0x7b, 0xf3,
    0x9e, 0xed, 0xe7, 0xb3, 0x78, 0xfc, 0xfe, 0x3f, 0x3f, 0x0f, 0xc7, 0xc1, 0xf1, 0xf0, 0x78, 0x7c,
    0xf0, 0xf7, 0x8f, 0x79, 0xe3, 0xfc, 0x1f, 0x80, 0xf8, 0x1f, 0x81, 0xfc, 0x3f, 0xc7, 0x9e, 0xf0,
    0xff, 0x0f, 0xf0, 0x3d, 0xe0, 0xe7, 0x87, 0x8f, 0x1e, 0x3c, 0x70, 0x73, 0xc1, 0xee, 0x07, 0xf8,
    0x0f, 0xe0, 0x3f, 0x00, 0x7c, 0x01, 0xf0, 0x03, 0x80, 0x1e, 0x03, 0xf0, 0x0f, 0x80, 0x3c, 0x00,
    0xff, 0xff, 0xff, 0xff, 0x81, 0xe0, 0x78, 0x1e, 0x07, 0x81, 0xe0, 0x78, 0x1f, 0xff, 0xff, 0xff,
    0xf0, 0x03, 0xc3, 0xf1, 0xfc, 0x78, 0x1e, 0x07, 0x81, 0xe0, 0x78, 0x1e, 0x3f, 0x0f, 0x83, 0xf0,
    0x1e, 0x07, 0x81, 0xe0, 0x78, 0x1e, 0x07, 0x81, 0xfc, 0x3f, 0x01, 0xc0, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xf0, 0xf0, 0x3f, 0x0f, 0xc0, 0x70, 0x1e, 0x07, 0x81, 0xe0, 0x78, 0x1e, 0x03, 0xf0, 0xfc,
    0x7f, 0x1e, 0x07, 0x81, 0xe0, 0x78, 0x1e, 0x0f, 0x0f, 0xc3, 0xf0, 0xe0, 0x00, 0x1c, 0x05, 0xff,
    0x7f, 0xff, 0xf0, 0x7c,
];

pub const GLYPHS: &[GfxGlyph] = &[
    GfxGlyph::new(0, 0, 0, 8, 0, 0),         // ' '
    GfxGlyph::new(0, 4, 16, 10, 3, -16),     // '!'
    GfxGlyph::new(8, 7, 6, 11, 2, -16),      // '"'
    GfxGlyph::new(14, 16, 16, 18, 1, -16),   // '#'
    GfxGlyph::new(46, 12, 20, 15, 2, -17),   // '$'
    GfxGlyph::new(76, 20, 16, 22, 1, -16),   // '%'
    GfxGlyph::new(116, 17, 16, 19, 1, -16),  // '&'
    GfxGlyph::new(150, 3, 6, 7, 2, -16),     // '\''
    GfxGlyph::new(153, 6, 20, 10, 2, -17),   // '('
    GfxGlyph::new(168, 6, 20, 10, 2, -17),   // ')'
    GfxGlyph::new(183, 10, 10, 12, 1, -16),  // '*'
    GfxGlyph::new(196, 14, 14, 18, 2, -14),  // '+'
    GfxGlyph::new(221, 5, 7, 8, 1, -4),      // ','
    GfxGlyph::new(226, 7, 3, 9, 1, -8),      // '-'
    GfxGlyph::new(229, 4, 4, 8, 2, -4),      // '.'
    GfxGlyph::new(231, 8, 18, 8, 0, -16),    // '/'
    GfxGlyph::new(249, 13, 16, 15, 1, -16),  // '0'
    GfxGlyph::new(275, 12, 16, 15, 2, -16),  // '1'
    GfxGlyph::new(299, 11, 16, 15, 2, -16),  // '2'
    GfxGlyph::new(321, 13, 16, 15, 1, -16),  // '3'
    GfxGlyph::new(347, 13, 16, 15, 1, -16),  // '4'
    GfxGlyph::new(373, 12, 16, 15, 2, -16),  // '5'
    GfxGlyph::new(397, 13, 16, 15, 1, -16),  // '6'
    GfxGlyph::new(423, 13, 16, 15, 1, -16),  // '7'
    GfxGlyph::new(449, 13, 16, 15, 1, -16),  // '8'
    GfxGlyph::new(475, 13, 16, 15, 1, -16),  // '9'
    GfxGlyph::new(501, 4, 12, 9, 2, -12),    // ':'
    GfxGlyph::new(507, 4, 15, 9, 2, -12),    // ';'
    GfxGlyph::new(515, 14, 12, 18, 2, -13),  // '<'
    GfxGlyph::new(536, 14, 8, 18, 2, -11),   // '='
    GfxGlyph::new(550, 14, 12, 18, 2, -13),  // '>'
    GfxGlyph::new(571, 9, 16, 13, 2, -16),   // '?'
    GfxGlyph::new(589, 19, 19, 22, 1, -15),  // '@'
    GfxGlyph::new(635, 17, 16, 17, 0, -16),  // 'A'
    GfxGlyph::new(669, 13, 16, 17, 2, -16),  // 'B'
    GfxGlyph::new(695, 14, 16, 16, 1, -16),  // 'C'
    GfxGlyph::new(723, 15, 16, 18, 2, -16),  // 'D'
    GfxGlyph::new(753, 11, 16, 15, 2, -16),  // 'E'
    GfxGlyph::new(775, 11, 16, 15, 2, -16),  // 'F'
    GfxGlyph::new(797, 15, 16, 18, 1, -16),  // 'G'
    GfxGlyph::new(827, 14, 16, 18, 2, -16),  // 'H'
    GfxGlyph::new(855, 4, 16, 8, 2, -16),    // 'I'
    GfxGlyph::new(863, 7, 20, 8, -1, -16),   // 'J'
    GfxGlyph::new(881, 15, 16, 17, 2, -16),  // 'K'
    GfxGlyph::new(911, 11, 16, 14, 2, -16),  // 'L'
    GfxGlyph::new(933, 18, 16, 22, 2, -16),  // 'M'
    GfxGlyph::new(969, 14, 16, 18, 2, -16),  // 'N'
    GfxGlyph::new(997, 17, 16, 19, 1, -16),  // 'O'
    GfxGlyph::new(1031, 13, 16, 16, 2, -16), // 'P'
    GfxGlyph::new(1057, 17, 19, 19, 1, -16), // 'Q'
    GfxGlyph::new(1098, 14, 16, 17, 2, -16), // 'R'
    GfxGlyph::new(1126, 12, 16, 16, 2, -16), // 'S'
    GfxGlyph::new(1150, 15, 16, 15, 0, -16), // 'T'
    GfxGlyph::new(1180, 14, 16, 18, 2, -16), // 'U'
    GfxGlyph::new(1208, 17, 16, 17, 0, -16), // 'V'
    GfxGlyph::new(1242, 22, 16, 24, 1, -16), // 'W'
    GfxGlyph::new(1286, 15, 16, 17, 1, -16), // 'X'
    GfxGlyph::new(1316, 16, 16, 16, 0, -16), // 'Y'
    GfxGlyph::new(1348, 14, 16, 16, 1, -16), // 'Z'
    GfxGlyph::new(1376, 7, 20, 10, 2, -17),  // '['
    GfxGlyph::new(1394, 8, 18, 8, 0, -16),   // '\\'
    GfxGlyph::new(1412, 7, 20, 10, 1, -17),  // ']'
    GfxGlyph::new(1430, 13, 6, 18, 3, -16),  // '^'
    GfxGlyph::new(1440, 11, 2, 11, 0, 3),    // '_'
    GfxGlyph::new(1443, 4, 4, 11, 2, -18),   // '`'
    GfxGlyph::new(1445, 12, 12, 15, 1, -12), // 'a'
    GfxGlyph::new(1463, 13, 17, 16, 2, -17), // 'b'
    GfxGlyph::new(1491, 11, 12, 13, 1, -12), // 'c'
    GfxGlyph::new(1508, 13, 17, 16, 1, -17), // 'd'
    GfxGlyph::new(1536, 13, 12, 15, 1, -12), // 'e'
    GfxGlyph::new(1556, 10, 17, 10, 0, -17), // 'f'
    GfxGlyph::new(1578, 13, 17, 16, 1, -12), // 'g'
    GfxGlyph::new(1606, 12, 17, 16, 2, -17), // 'h'
    GfxGlyph::new(1632, 4, 17, 8, 2, -17),   // 'i'
    GfxGlyph::new(1641, 7, 22, 8, -1, -17),  // 'j'
    GfxGlyph::new(1661, 13, 17, 15, 2, -17), // 'k'
    GfxGlyph::new(1689, 4, 17, 8, 2, -17),   // 'l'
    GfxGlyph::new(1698, 19, 12, 23, 2, -12), // 'm'
    GfxGlyph::new(1727, 12, 12, 16, 2, -12), // 'n'
    GfxGlyph::new(1745, 13, 12, 15, 1, -12), // 'o'
    GfxGlyph::new(1765, 13, 17, 16, 2, -12), // 'p'
    GfxGlyph::new(1793, 13, 17, 16, 1, -12), // 'q'
    GfxGlyph::new(1821, 9, 12, 11, 2, -12),  // 'r'
    GfxGlyph::new(1835, 11, 12, 13, 1, -12), // 's'
    GfxGlyph::new(1852, 10, 15, 11, 0, -15), // 't'
    GfxGlyph::new(1871, 12, 12, 16, 2, -12), // 'u'
    GfxGlyph::new(1889, 13, 12, 14, 1, -12), // 'v'
    GfxGlyph::new(1909, 18, 12, 20, 1, -12), // 'w'
    GfxGlyph::new(1936, 12, 12, 14, 1, -12), // 'x'
    GfxGlyph::new(1954, 14, 17, 14, 0, -12), // 'y'
    GfxGlyph::new(1984, 11, 12, 13, 1, -12), // 'z'
    GfxGlyph::new(2001, 10, 21, 16, 3, -17), // '{'
    GfxGlyph::new(2028, 2, 22, 8, 3, -17),   // '|'
    GfxGlyph::new(2034, 10, 21, 16, 3, -17), // '}'
    GfxGlyph::new(2061, 14, 4, 18, 2, -9),   // '~'
];

pub static FONT: GfxFont = GfxFont {
    name: "bold_22",
    bitmap: BITMAP,
    glyphs: GLYPHS,
    first: FIRST,
    last: LAST,
    y_advance: 26,
    baseline: 20,
};
