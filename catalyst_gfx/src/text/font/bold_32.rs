// This file was generated by font_gen from `DejaVuSans-Bold.ttf` at 32pt. Do not edit.

use super::glyph::{GfxFont, GfxGlyph};

pub const FIRST: u16 = 0x20;
pub const LAST: u16 = 0x7e;

pub const BITMAP: &[u8] = &[
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfd, 0xf7, 0xdf, 0x7d, 0xf7, 0x80, 0x01, 0xff, 0xff, 0xff,
    0xff, 0xc0, 0xf1, 0xfe, 0x3f, 0xc7, 0xf8, 0xff, 0x1f, 0xe3, 0xfc, 0x7f, 0x8f, 0x00, 0x70, 0xf0,
    0x01, 0xe1, 0xc0, 0x03, 0xc3, 0x80, 0x07, 0x07, 0x00, 0x0e, 0x1e, 0x00, 0x3c, 0x38, 0x0f, 0xff,
    0xff, 0x9f, 0xff, 0xff, 0x3f, 0xff, 0xfe, 0x07, 0x87, 0x80, 0x0f, 0x0e, 0x00, 0x1c, 0x3c, 0x00,
    0x38, 0x78, 0x00, 0xf0, 0xf0, 0x3f, 0xff, 0xfe, 0x7f, 0xff, 0xfc, 0xff, 0xff, 0xf8, 0x1e, 0x1c,
    0x00, 0x3c, 0x38, 0x00, 0x70, 0x70, 0x00, 0xe1, 0xe0, 0x03, 0xc3, 0x80, 0x07, 0x87, 0x00, 0x00,
    0x01, 0x80, 0x00, 0xc0, 0x00, 0x60, 0x00, 0x7e, 0x03, 0xff, 0xf3, 0xff, 0xfb, 0xff, 0xfd, 0xf3,
    0x0e, 0xf9, 0x80, 0x7c, 0xc0, 0x3e, 0x60, 0x1f, 0xf8, 0x0f, 0xff, 0xc3, 0xff, 0xf0, 0x7f, 0xfc,
    0x07, 0xff, 0x01, 0x9f, 0x80, 0xc7, 0xc0, 0x63, 0xf8, 0x31, 0xff, 0xff, 0xf7, 0xff, 0xfb, 0xff,
    0xf8, 0x3f, 0xe0, 0x01, 0x80, 0x00, 0xc0, 0x00, 0x60, 0x00, 0x30, 0x00, 0x18, 0x00, 0x07, 0x00,
    0x07, 0x00, 0xff, 0x00, 0x38, 0x07, 0xfe, 0x01, 0xe0, 0x1e, 0x3c, 0x07, 0x00, 0xf0, 0xf0, 0x38,
    0x03, 0xc3, 0xc1, 0xe0, 0x0f, 0x07, 0x07, 0x00, 0x3c, 0x1c, 0x3c, 0x00, 0xf0, 0xf0, 0xe0, 0x01,
    0xe3, 0xc7, 0x00, 0x07, 0xfe, 0x3c, 0x00, 0x0f, 0xf0, 0xe0, 0x00, 0x0f, 0x87, 0x87, 0xe0, 0x00,
    0x1c, 0x7f, 0xc0, 0x00, 0xe1, 0xef, 0x80, 0x07, 0x8f, 0x0f, 0x00, 0x1c, 0x3c, 0x3c, 0x00, 0xf0,
    0xf0, 0xf0, 0x03, 0x83, 0xc3, 0xc0, 0x1c, 0x0f, 0x0f, 0x00, 0xf0, 0x3c, 0x3c, 0x03, 0x80, 0xf9,
    0xe0, 0x1e, 0x01, 0xff, 0x00, 0x70, 0x03, 0xf8, 0x00, 0x7c, 0x00, 0x03, 0xff, 0x80, 0x07, 0xff,
    0x80, 0x0f, 0xff, 0x80, 0x0f, 0xc3, 0x80, 0x1f, 0x80, 0x00, 0x0f, 0x80, 0x00, 0x0f, 0xc0, 0x00,
    0x0f, 0xc0, 0x00, 0x0f, 0xe0, 0x00, 0x1f, 0xf0, 0x1e, 0x3f, 0xf8, 0x3e, 0x7f, 0xfc, 0x3e, 0x7c,
    0xfe, 0x3e, 0xfc, 0x7f, 0x7e, 0xf8, 0x3f, 0xfc, 0xf8, 0x1f, 0xfc, 0xfc, 0x0f, 0xf8, 0xfc, 0x07,
    0xf0, 0x7e, 0x07, 0xf0, 0x7f, 0xff, 0xf8, 0x3f, 0xff, 0xfc, 0x1f, 0xff, 0xfe, 0x0f, 0xfc, 0x7f,
    0xff, 0xff, 0xff, 0xff, 0x0f, 0x8f, 0x87, 0xc7, 0xc3, 0xe1, 0xf1, 0xf0, 0xf8, 0x7c, 0x7e, 0x3e,
    0x1f, 0x0f, 0x87, 0xc3, 0xe1, 0xf0, 0xf8, 0x7c, 0x3f, 0x0f, 0x87, 0xc3, 0xe0, 0xf8, 0x7c, 0x3e,
    0x0f, 0x87, 0xc1, 0xf0, 0xf8, 0x7c, 0x1f, 0x0f, 0x83, 0xe1, 0xf0, 0xfc, 0x3e, 0x1f, 0x0f, 0x87,
    0xe3, 0xf1, 0xf8, 0x7c, 0x3e, 0x3f, 0x1f, 0x8f, 0xc7, 0xc3, 0xe1, 0xf1, 0xf0, 0xf8, 0x7c, 0x7c,
    0x3e, 0x3e, 0x1f, 0x00, 0x03, 0x80, 0x07, 0x00, 0x0e, 0x06, 0x1c, 0x2f, 0x39, 0xef, 0xff, 0x87,
    0xfc, 0x07, 0xe0, 0x1f, 0xe0, 0xff, 0xf3, 0xee, 0xff, 0x1c, 0x70, 0x38, 0x00, 0x70, 0x00, 0xe0,
    0x00, 0x00, 0x70, 0x00, 0x07, 0x00, 0x00, 0x70, 0x00, 0x07, 0x00, 0x00, 0x70, 0x00, 0x07, 0x00,
    0x00, 0x70, 0x00, 0x07, 0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xf7, 0xff, 0xff, 0x00,
    0x70, 0x00, 0x07, 0x00, 0x00, 0x70, 0x00, 0x07, 0x00, 0x00, 0x70, 0x00, 0x07, 0x00, 0x00, 0x70,
    0x00, 0x07, 0x00, 0x7e, 0xfd, 0xfb, 0xf7, 0xef, 0x9f, 0x3c, 0xf1, 0xe3, 0x80, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xf0, 0x00, 0xe0, 0x1c, 0x07, 0x80, 0xe0, 0x1c, 0x07, 0x80,
    0xf0, 0x1c, 0x07, 0x80, 0xf0, 0x1c, 0x03, 0x80, 0xf0, 0x1c, 0x03, 0x80, 0xf0, 0x1c, 0x03, 0x80,
    0xf0, 0x1c, 0x03, 0x80, 0xf0, 0x1e, 0x03, 0x80, 0xf0, 0x1e, 0x00, 0x01, 0xe0, 0x01, 0xff, 0x80,
    0x7f, 0xf8, 0x1f, 0xff, 0x87, 0xfb, 0xf8, 0xfc, 0x3f, 0x3f, 0x03, 0xf7, 0xe0, 0x7e, 0xfc, 0x0f,
    0xdf, 0x80, 0xff, 0xf0, 0x1f, 0xfe, 0x03, 0xff, 0xc0, 0x7f, 0xf8, 0x0f, 0xff, 0x01, 0xff, 0xe0,
    0x3e, 0xfc, 0x0f, 0xdf, 0x81, 0xf9, 0xf0, 0x3f, 0x3f, 0x0f, 0xc3, 0xff, 0xf8, 0x7f, 0xfe, 0x07,
    0xff, 0x80, 0x3f, 0xc0, 0x7f, 0xe0, 0xff, 0xe0, 0xff, 0xe0, 0xff, 0xe0, 0xc7, 0xe0, 0x07, 0xe0,
    0x07, 0xe0, 0x07, 0xe0, 0x07, 0xe0, 0x07, 0xe0, 0x07, 0xe0, 0x07, 0xe0, 0x07, 0xe0, 0x07, 0xe0,
    0x07, 0xe0, 0x07, 0xe0, 0x07, 0xe0, 0x07, 0xe0, 0x07, 0xe0, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0x07, 0xc0, 0xff, 0xf8, 0xff, 0xfc, 0xff, 0xfe, 0xf9, 0xff, 0xc0, 0x7f, 0x00, 0x3f,
    0x00, 0x3f, 0x00, 0x3f, 0x00, 0x3f, 0x00, 0x7e, 0x00, 0x7e, 0x00, 0xfc, 0x03, 0xf8, 0x07, 0xf0,
    0x0f, 0xe0, 0x1f, 0xc0, 0x3f, 0x80, 0x7e, 0x00, 0xfe, 0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0x07, 0xe0, 0x1f, 0xff, 0x07, 0xff, 0xf1, 0xff, 0xfc, 0x7c, 0xff, 0x80, 0x0f, 0xe0,
    0x01, 0xf8, 0x00, 0x7e, 0x00, 0x1f, 0x80, 0x0f, 0xc0, 0xff, 0xe0, 0x3f, 0xf0, 0x0f, 0xfe, 0x03,
    0xff, 0xc0, 0x03, 0xf8, 0x00, 0x7e, 0x00, 0x0f, 0xc0, 0x03, 0xf0, 0x01, 0xff, 0x00, 0xfe, 0xff,
    0xff, 0xbf, 0xff, 0xcf, 0xff, 0xe1, 0xff, 0xe0, 0x00, 0x7f, 0x00, 0x07, 0xf0, 0x00, 0xff, 0x00,
    0x1f, 0xf0, 0x01, 0xff, 0x00, 0x3d, 0xf0, 0x07, 0xdf, 0x00, 0x79, 0xf0, 0x0f, 0x1f, 0x01, 0xe1,
    0xf0, 0x1e, 0x1f, 0x03, 0xc1, 0xf0, 0x78, 0x1f, 0x07, 0x81, 0xf0, 0xff, 0xff, 0xef, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0x7f, 0xff, 0xf0, 0x01, 0xf0, 0x00, 0x1f, 0x00, 0x01, 0xf0, 0x00,
    0x1f, 0x00, 0x7f, 0xff, 0x1f, 0xff, 0xc7, 0xff, 0xf1, 0xff, 0xfc, 0x7c, 0x00, 0x1f, 0x00, 0x07,
    0xc0, 0x01, 0xf7, 0x80, 0x7f, 0xfc, 0x1f, 0xff, 0xc7, 0xff, 0xf9, 0xfb, 0xfe, 0x00, 0x1f, 0xc0,
    0x03, 0xf0, 0x00, 0xfc, 0x00, 0x3f, 0x00, 0x0f, 0xc0, 0x07, 0xfe, 0x03, 0xfb, 0xff, 0xfe, 0xff,
    0xff, 0x3f, 0xff, 0x83, 0xff, 0x80, 0x00, 0x7c, 0x00, 0x7f, 0xf0, 0x3f, 0xfe, 0x0f, 0xff, 0xc3,
    0xfc, 0x38, 0x7e, 0x00, 0x1f, 0x80, 0x03, 0xe0, 0x00, 0xfc, 0x00, 0x1f, 0xbf, 0xc3, 0xff, 0xfc,
    0x7f, 0xff, 0xcf, 0xff, 0xfd, 0xfc, 0x1f, 0xbf, 0x83, 0xf7, 0xf0, 0x3e, 0xfc, 0x07, 0xef, 0xc0,
    0xf9, 0xf8, 0x3f, 0x3f, 0x07, 0xe3, 0xf9, 0xf8, 0x3f, 0xff, 0x03, 0xff, 0xc0, 0x3f, 0xe0, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x00, 0x1f, 0x80, 0x07, 0xe0, 0x03, 0xf0, 0x00,
    0xfc, 0x00, 0x7e, 0x00, 0x1f, 0x80, 0x0f, 0xc0, 0x03, 0xf0, 0x00, 0xf8, 0x00, 0x7e, 0x00, 0x1f,
    0x80, 0x0f, 0xc0, 0x03, 0xf0, 0x01, 0xf8, 0x00, 0x7e, 0x00, 0x3f, 0x00, 0x0f, 0xc0, 0x07, 0xe0,
    0x01, 0xf8, 0x00, 0x03, 0xf0, 0x07, 0xff, 0x83, 0xff, 0xf1, 0xff, 0xfe, 0x7e, 0x1f, 0x9f, 0x03,
    0xf7, 0xc0, 0xfd, 0xf0, 0x3f, 0x7e, 0x0f, 0x8f, 0xc7, 0xe1, 0xff, 0xf0, 0x3f, 0xf0, 0x1f, 0xff,
    0x1f, 0xff, 0xe7, 0xe0, 0xfb, 0xf0, 0x3f, 0xfc, 0x07, 0xff, 0x01, 0xff, 0xc0, 0xff, 0xf0, 0x3f,
    0x7f, 0x3f, 0xdf, 0xff, 0xe3, 0xff, 0xf0, 0x3f, 0xf0, 0x03, 0xc0, 0x03, 0xfe, 0x03, 0xff, 0xe1,
    0xff, 0xfc, 0x7e, 0x3f, 0x3f, 0x07, 0xef, 0xc0, 0xfb, 0xf0, 0x3f, 0xf8, 0x0f, 0xff, 0x03, 0xff,
    0xc1, 0xff, 0xf8, 0x7f, 0x7f, 0xff, 0xdf, 0xff, 0xf3, 0xff, 0xfc, 0x3f, 0xbf, 0x00, 0x0f, 0xc0,
    0x03, 0xe0, 0x01, 0xf9, 0x00, 0xfc, 0x7f, 0xff, 0x1f, 0xff, 0x87, 0xff, 0xc0, 0xff, 0xc0, 0xff,
    0xff, 0xff, 0xff, 0xe0, 0x00, 0x00, 0x0f, 0xff, 0xff, 0xff, 0xc0, 0x3e, 0x7c, 0xf9, 0xf3, 0xe7,
    0xcf, 0x80, 0x00, 0x00, 0x00, 0x03, 0xe7, 0xcf, 0x9f, 0x3e, 0xfd, 0xf3, 0xc7, 0x9e, 0x18, 0x00,
    0x00, 0x00, 0x10, 0x00, 0x0f, 0x00, 0x07, 0xf0, 0x03, 0xff, 0x00, 0xff, 0xc0, 0x7f, 0xe0, 0x3f,
    0xf8, 0x0f, 0xfc, 0x00, 0xfe, 0x00, 0x0f, 0xe0, 0x00, 0xff, 0xc0, 0x03, 0xff, 0x80, 0x07, 0xff,
    0x00, 0x0f, 0xfe, 0x00, 0x1f, 0xf0, 0x00, 0x7f, 0x00, 0x00, 0xf0, 0x00, 0x01, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xf0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0f, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xc0, 0x00, 0x0f, 0x80, 0x00, 0xff, 0x00, 0x0f, 0xfc, 0x00,
    0x3f, 0xf8, 0x00, 0x7f, 0xf0, 0x00, 0xff, 0xe0, 0x01, 0xff, 0x00, 0x03, 0xf0, 0x00, 0x3f, 0x00,
    0x1f, 0xf0, 0x0f, 0xfe, 0x07, 0xff, 0x03, 0xff, 0x80, 0xff, 0xc0, 0x0f, 0xe0, 0x00, 0xf8, 0x00,
    0x0c, 0x00, 0x00, 0x0f, 0x81, 0xff, 0xcf, 0xff, 0xbf, 0xff, 0xf9, 0xff, 0x03, 0xf0, 0x07, 0xc0,
    0x1f, 0x00, 0xfc, 0x07, 0xf0, 0x3f, 0x81, 0xfc, 0x0f, 0xe0, 0x3f, 0x00, 0xf8, 0x07, 0xe0, 0x00,
    0x00, 0x00, 0x00, 0xf8, 0x07, 0xe0, 0x1f, 0x80, 0x7e, 0x01, 0xf8, 0x07, 0xe0, 0x00, 0x7f, 0xf0,
    0x00, 0x1f, 0xff, 0xc0, 0x03, 0xfd, 0xfe, 0x00, 0xfc, 0x01, 0xf0, 0x1f, 0x00, 0x07, 0x81, 0xe0,
    0x00, 0x3c, 0x3c, 0x00, 0x01, 0xc7, 0x83, 0xf7, 0x8e, 0x70, 0x7f, 0xf8, 0xe7, 0x07, 0xff, 0x8e,
    0xe0, 0xf0, 0xf8, 0x7e, 0x0e, 0x07, 0x87, 0xe0, 0xe0, 0x78, 0x7e, 0x1e, 0x07, 0x87, 0xe0, 0xe0,
    0x78, 0xee, 0x0e, 0x07, 0x8e, 0xe0, 0xf0, 0xf9, 0xe7, 0x0f, 0x9f, 0xfc, 0x70, 0x7f, 0xff, 0x87,
    0x83, 0xf7, 0xe0, 0x38, 0x04, 0x30, 0x01, 0xc0, 0x00, 0x00, 0x1f, 0x00, 0x04, 0x00, 0xf8, 0x01,
    0xe0, 0x07, 0xf8, 0xfe, 0x00, 0x1f, 0xff, 0xc0, 0x00, 0x7f, 0xe0, 0x00, 0x00, 0x20, 0x00, 0x00,
    0xff, 0x00, 0x00, 0xff, 0x80, 0x00, 0xff, 0x80, 0x01, 0xff, 0x80, 0x01, 0xff, 0xc0, 0x01, 0xff,
    0xc0, 0x03, 0xf7, 0xc0, 0x03, 0xf7, 0xe0, 0x03, 0xe3, 0xe0, 0x07, 0xe3, 0xf0, 0x07, 0xe3, 0xf0,
    0x0f, 0xc1, 0xf0, 0x0f, 0xc1, 0xf8, 0x0f, 0xc1, 0xf8, 0x1f, 0xff, 0xf8, 0x1f, 0xff, 0xfc, 0x1f,
    0xff, 0xfc, 0x3f, 0xff, 0xfe, 0x3f, 0xff, 0xfe, 0x7e, 0x00, 0x7e, 0x7e, 0x00, 0x3f, 0x7e, 0x00,
    0x3f, 0xfc, 0x00, 0x3f, 0xff, 0xfe, 0x1f, 0xff, 0xe3, 0xff, 0xfe, 0x7f, 0xff, 0xef, 0xc1, 0xfd,
    0xf8, 0x1f, 0xbf, 0x03, 0xf7, 0xe0, 0x7e, 0xfc, 0x1f, 0x9f, 0xff, 0xf3, 0xff, 0xfc, 0x7f, 0xff,
    0xcf, 0xff, 0xfd, 0xf8, 0x1f, 0xff, 0x01, 0xff, 0xe0, 0x3f, 0xfc, 0x07, 0xff, 0x80, 0xff, 0xf0,
    0x7f, 0xff, 0xff, 0xef, 0xff, 0xfd, 0xff, 0xff, 0x3f, 0xff, 0x00, 0x00, 0x3c, 0x00, 0x7f, 0xf8,
    0x3f, 0xff, 0x8f, 0xff, 0xf3, 0xff, 0xfe, 0xff, 0x00, 0xdf, 0xc0, 0x03, 0xf0, 0x00, 0xfe, 0x00,
    0x1f, 0x80, 0x03, 0xf0, 0x00, 0x7e, 0x00, 0x0f, 0xc0, 0x01, 0xf8, 0x00, 0x3f, 0x00, 0x07, 0xe0,
    0x00, 0xfe, 0x00, 0x0f, 0xc0, 0x01, 0xfc, 0x00, 0x9f, 0xe0, 0x73, 0xff, 0xfe, 0x3f, 0xff, 0xc1,
    0xff, 0xf8, 0x0f, 0xfc, 0xff, 0xfc, 0x03, 0xff, 0xfe, 0x0f, 0xff, 0xfc, 0x3f, 0xff, 0xf8, 0xfc,
    0x1f, 0xf3, 0xf0, 0x1f, 0xef, 0xc0, 0x3f, 0xbf, 0x00, 0x7e, 0xfc, 0x01, 0xff, 0xf0, 0x07, 0xff,
    0xc0, 0x0f, 0xff, 0x00, 0x3f, 0xfc, 0x00, 0xff, 0xf0, 0x07, 0xff, 0xc0, 0x1f, 0xff, 0x00, 0x7e,
    0xfc, 0x03, 0xfb, 0xf0, 0x3f, 0xcf, 0xff, 0xff, 0x3f, 0xff, 0xf8, 0xff, 0xff, 0xc3, 0xff, 0xfc,
    0x0f, 0xff, 0x80, 0x00, 0xff, 0xff, 0x7f, 0xff, 0xbf, 0xff, 0xdf, 0xff, 0xef, 0xc0, 0x07, 0xe0,
    0x03, 0xf0, 0x01, 0xf8, 0x00, 0xfc, 0x00, 0x7f, 0xff, 0xbf, 0xff, 0xdf, 0xff, 0xef, 0xff, 0xf7,
    0xe0, 0x03, 0xf0, 0x01, 0xf8, 0x00, 0xfc, 0x00, 0x7e, 0x00, 0x3f, 0xff, 0xdf, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xfe, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfc, 0x00, 0xfc,
    0x00, 0xfc, 0x00, 0xfc, 0x00, 0xfc, 0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfc,
    0x00, 0xfc, 0x00, 0xfc, 0x00, 0xfc, 0x00, 0xfc, 0x00, 0xfc, 0x00, 0xfc, 0x00, 0xfc, 0x00, 0xfc,
    0x00, 0xfc, 0x00, 0x00, 0x3e, 0x00, 0x0f, 0xff, 0xc0, 0xff, 0xff, 0x87, 0xff, 0xfe, 0x3f, 0xff,
    0xf9, 0xfe, 0x00, 0xe7, 0xf0, 0x00, 0x9f, 0x80, 0x00, 0xfe, 0x00, 0x03, 0xf0, 0x00, 0x0f, 0xc0,
    0x00, 0x3f, 0x01, 0xff, 0xfc, 0x07, 0xff, 0xf0, 0x1f, 0xff, 0xc0, 0x7f, 0xff, 0x00, 0x3f, 0xfe,
    0x00, 0xfd, 0xf8, 0x03, 0xf7, 0xf0, 0x0f, 0xcf, 0xf0, 0x3f, 0x3f, 0xff, 0xfc, 0x7f, 0xff, 0xf0,
    0x7f, 0xff, 0x80, 0x7f, 0xf0, 0xfc, 0x01, 0xff, 0xe0, 0x0f, 0xff, 0x00, 0x7f, 0xf8, 0x03, 0xff,
    0xc0, 0x1f, 0xfe, 0x00, 0xff, 0xf0, 0x07, 0xff, 0x80, 0x3f, 0xfc, 0x03, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe, 0x00, 0xff, 0xf0, 0x07, 0xff, 0x80, 0x3f, 0xfc,
    0x01, 0xff, 0xe0, 0x0f, 0xff, 0x00, 0x7f, 0xf8, 0x03, 0xff, 0xc0, 0x1f, 0xfe, 0x00, 0xff, 0xf0,
    0x07, 0xe0, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xc0, 0x07, 0xe0, 0xfc, 0x1f, 0x83, 0xf0, 0x7e, 0x0f, 0xc1, 0xf8, 0x3f, 0x07,
    0xe0, 0xfc, 0x1f, 0x83, 0xf0, 0x7e, 0x0f, 0xc1, 0xf8, 0x3f, 0x07, 0xe0, 0xfc, 0x1f, 0x83, 0xf0,
    0x7e, 0x0f, 0xc1, 0xf8, 0x7f, 0x1f, 0xdf, 0xfb, 0xfe, 0x7f, 0x8f, 0xe0, 0xfc, 0x03, 0xfb, 0xf0,
    0x1f, 0xcf, 0xc0, 0xfe, 0x3f, 0x07, 0xf0, 0xfc, 0x3f, 0x83, 0xf1, 0xfc, 0x0f, 0xcf, 0xe0, 0x3f,
    0x7f, 0x00, 0xff, 0xf8, 0x03, 0xff, 0xc0, 0x0f, 0xfe, 0x00, 0x3f, 0xf8, 0x00, 0xff, 0xf0, 0x03,
    0xff, 0xe0, 0x0f, 0xdf, 0xc0, 0x3f, 0x3f, 0x80, 0xfc, 0x7f, 0x03, 0xf0, 0xfe, 0x0f, 0xc1, 0xfc,
    0x3f, 0x03, 0xf8, 0xfc, 0x07, 0xf3, 0xf0, 0x0f, 0xef, 0xc0, 0x1f, 0xc0, 0xfc, 0x00, 0x7e, 0x00,
    0x3f, 0x00, 0x1f, 0x80, 0x0f, 0xc0, 0x07, 0xe0, 0x03, 0xf0, 0x01, 0xf8, 0x00, 0xfc, 0x00, 0x7e,
    0x00, 0x3f, 0x00, 0x1f, 0x80, 0x0f, 0xc0, 0x07, 0xe0, 0x03, 0xf0, 0x01, 0xf8, 0x00, 0xfc, 0x00,
    0x7e, 0x00, 0x3f, 0xff, 0xdf, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe, 0xff, 0x00, 0x3f,
    0xff, 0xc0, 0x1f, 0xff, 0xf8, 0x07, 0xff, 0xfe, 0x01, 0xff, 0xff, 0xc0, 0xff, 0xff, 0xf0, 0x3f,
    0xff, 0xfc, 0x1f, 0xff, 0xff, 0x87, 0xff, 0xfd, 0xe3, 0xef, 0xff, 0x7c, 0xfb, 0xff, 0xcf, 0x3c,
    0xff, 0xf3, 0xff, 0x3f, 0xfc, 0xff, 0x8f, 0xff, 0x1f, 0xe3, 0xff, 0xc7, 0xf8, 0xff, 0xf0, 0xfc,
    0x3f, 0xfc, 0x3f, 0x0f, 0xff, 0x07, 0x83, 0xff, 0xc1, 0xc0, 0xff, 0xf0, 0x00, 0x3f, 0xfc, 0x00,
    0x0f, 0xff, 0x00, 0x03, 0xff, 0xc0, 0x00, 0xfc, 0xfe, 0x01, 0xff, 0xf8, 0x0f, 0xff, 0xc0, 0x7f,
    0xff, 0x03, 0xff, 0xf8, 0x1f, 0xff, 0xe0, 0xff, 0xff, 0x07, 0xff, 0xfc, 0x3f, 0xff, 0xe1, 0xff,
    0xef, 0x8f, 0xff, 0x7c, 0x7f, 0xf9, 0xf3, 0xff, 0xc7, 0x9f, 0xfe, 0x3e, 0xff, 0xf0, 0xff, 0xff,
    0x87, 0xff, 0xfc, 0x1f, 0xff, 0xe0, 0xff, 0xff, 0x03, 0xff, 0xf8, 0x1f, 0xff, 0xc0, 0x7f, 0xfe,
    0x03, 0xff, 0xf0, 0x0f, 0xe0, 0x00, 0x7c, 0x00, 0x03, 0xff, 0xc0, 0x0f, 0xff, 0xe0, 0x1f, 0xff,
    0xf0, 0x3f, 0xff, 0xf8, 0x7f, 0x81, 0xfc, 0x7f, 0x00, 0xfc, 0xfe, 0x00, 0xfe, 0xfc, 0x00, 0x7e,
    0xfc, 0x00, 0x7e, 0xfc, 0x00, 0x7e, 0xfc, 0x00, 0x7f, 0xfc, 0x00, 0x7f, 0xfc, 0x00, 0x7e, 0xfc,
    0x00, 0x7e, 0xfc, 0x00, 0x7e, 0xfe, 0x00, 0x7e, 0x7e, 0x00, 0xfe, 0x7f, 0x01, 0xfc, 0x3f, 0x83,
    0xfc, 0x3f, 0xff, 0xf8, 0x1f, 0xff, 0xf0, 0x0f, 0xff, 0xe0, 0x03, 0xff, 0x80, 0xff, 0xfe, 0x1f,
    0xff, 0xe3, 0xff, 0xff, 0x7f, 0xff, 0xef, 0xc1, 0xff, 0xf8, 0x1f, 0xff, 0x01, 0xff, 0xe0, 0x3f,
    0xfc, 0x07, 0xff, 0x81, 0xff, 0xf0, 0xff, 0x7f, 0xff, 0xef, 0xff, 0xf9, 0xff, 0xfe, 0x3f, 0xfe,
    0x07, 0xe0, 0x00, 0xfc, 0x00, 0x1f, 0x80, 0x03, 0xf0, 0x00, 0x7e, 0x00, 0x0f, 0xc0, 0x01, 0xf8,
    0x00, 0x3f, 0x00, 0x00, 0x00, 0x7c, 0x00, 0x03, 0xff, 0xc0, 0x0f, 0xff, 0xe0, 0x1f, 0xff, 0xf0,
    0x3f, 0xff, 0xf8, 0x7f, 0x81, 0xfc, 0x7f, 0x00, 0xfc, 0xfe, 0x00, 0xfe, 0xfc, 0x00, 0x7e, 0xfc,
    0x00, 0x7e, 0xfc, 0x00, 0x7e, 0xfc, 0x00, 0x7f, 0xfc, 0x00, 0x7f, 0xfc, 0x00, 0x7e, 0xfc, 0x00,
    0x7e, 0xfc, 0x00, 0x7e, 0xfe, 0x00, 0x7e, 0x7e, 0x00, 0xfe, 0x7f, 0x01, 0xfc, 0x3f, 0x83, 0xfc,
    0x3f, 0xff, 0xf8, 0x1f, 0xff, 0xf0, 0x07, 0xff, 0xe0, 0x01, 0xff, 0x80, 0x00, 0x0f, 0xc0, 0x00,
    0x07, 0xe0, 0x00, 0x03, 0xf0, 0x00, 0x01, 0xf8, 0x00, 0x00, 0xf8, 0xff, 0xfc, 0x07, 0xff, 0xf8,
    0x3f, 0xff, 0xe1, 0xff, 0xff, 0x8f, 0xc1, 0xfc, 0x7e, 0x07, 0xe3, 0xf0, 0x3f, 0x1f, 0x81, 0xf8,
    0xfc, 0x0f, 0xc7, 0xe0, 0xfc, 0x3f, 0xff, 0xc1, 0xff, 0xfc, 0x0f, 0xff, 0xe0, 0x7f, 0xff, 0x83,
    0xf1, 0xfe, 0x1f, 0x83, 0xf0, 0xfc, 0x1f, 0xc7, 0xe0, 0x7e, 0x3f, 0x03, 0xf9, 0xf8, 0x0f, 0xcf,
    0xc0, 0x7f, 0x7e, 0x01, 0xfb, 0xf0, 0x0f, 0xe0, 0x03, 0xf0, 0x01, 0xff, 0xf0, 0xff, 0xfe, 0x3f,
    0xff, 0xc7, 0xff, 0xf8, 0xf8, 0x03, 0x3f, 0x00, 0x07, 0xe0, 0x00, 0xfe, 0x00, 0x0f, 0xf0, 0x01,
    0xff, 0xf0, 0x1f, 0xff, 0x81, 0xff, 0xf8, 0x0f, 0xff, 0x80, 0x3f, 0xf0, 0x00, 0xfe, 0x00, 0x07,
    0xe0, 0x00, 0xfd, 0x00, 0x1f, 0xbc, 0x07, 0xe7, 0xff, 0xfc, 0xff, 0xff, 0x1f, 0xff, 0xc0, 0xff,
    0xf0, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x00, 0xfc, 0x00, 0x03,
    0xf0, 0x00, 0x0f, 0xc0, 0x00, 0x3f, 0x00, 0x00, 0xfc, 0x00, 0x03, 0xf0, 0x00, 0x0f, 0xc0, 0x00,
    0x3f, 0x00, 0x00, 0xfc, 0x00, 0x03, 0xf0, 0x00, 0x0f, 0xc0, 0x00, 0x3f, 0x00, 0x00, 0xfc, 0x00,
    0x03, 0xf0, 0x00, 0x0f, 0xc0, 0x00, 0x3f, 0x00, 0x00, 0xfc, 0x00, 0x03, 0xf0, 0x00, 0x0f, 0xc0,
    0x00, 0xfc, 0x03, 0xff, 0xc0, 0x3f, 0xfc, 0x03, 0xff, 0xc0, 0x3f, 0xfc, 0x03, 0xff, 0xc0, 0x3f,
    0xfc, 0x03, 0xff, 0xc0, 0x3f, 0xfc, 0x03, 0xff, 0xc0, 0x3f, 0xfc, 0x03, 0xff, 0xc0, 0x3f, 0xfc,
    0x03, 0xff, 0xc0, 0x3f, 0xfc, 0x03, 0xff, 0xc0, 0x3f, 0xfc, 0x03, 0xff, 0xe0, 0x7e, 0x7f, 0x0f,
    0xe7, 0xff, 0xfe, 0x3f, 0xff, 0xc1, 0xff, 0xf8, 0x07, 0xfe, 0x00, 0xfe, 0x00, 0x3f, 0x7e, 0x00,
    0x3f, 0x7e, 0x00, 0x3f, 0x3f, 0x00, 0x7e, 0x3f, 0x00, 0x7e, 0x3f, 0x00, 0xfc, 0x1f, 0x80, 0xfc,
    0x1f, 0x80, 0xfc, 0x1f, 0x81, 0xf8, 0x0f, 0xc1, 0xf8, 0x0f, 0xc1, 0xf8, 0x07, 0xc3, 0xf0, 0x07,
    0xe3, 0xf0, 0x07, 0xe3, 0xe0, 0x03, 0xf7, 0xe0, 0x03, 0xf7, 0xe0, 0x03, 0xff, 0xc0, 0x01, 0xff,
    0xc0, 0x01, 0xff, 0xc0, 0x00, 0xff, 0x80, 0x00, 0xff, 0x80, 0x00, 0xff, 0x80, 0x00, 0x7f, 0x00,
    0xfc, 0x03, 0xf0, 0x1f, 0xfe, 0x03, 0xf8, 0x0f, 0xdf, 0x01, 0xfc, 0x07, 0xef, 0xc0, 0xfe, 0x03,
    0xe7, 0xe0, 0x7f, 0x83, 0xf3, 0xf0, 0x7f, 0xc1, 0xf8, 0xf8, 0x3d, 0xe0, 0xfc, 0x7e, 0x1e, 0xf0,
    0x7c, 0x3f, 0x0f, 0x7c, 0x7e, 0x1f, 0x8f, 0x9e, 0x3f, 0x07, 0xc7, 0x8f, 0x1f, 0x83, 0xf3, 0xc7,
    0x8f, 0xc1, 0xf9, 0xe3, 0xe7, 0xc0, 0xfd, 0xf0, 0xf7, 0xe0, 0x7e, 0xf0, 0x7b, 0xf0, 0x1f, 0xf8,
    0x3d, 0xf8, 0x0f, 0xfc, 0x1f, 0xf8, 0x07, 0xfe, 0x07, 0xfc, 0x03, 0xff, 0x03, 0xfe, 0x00, 0xff,
    0x01, 0xff, 0x00, 0x7f, 0x80, 0xff, 0x00, 0x3f, 0xc0, 0x3f, 0x80, 0x1f, 0xe0, 0x1f, 0xc0, 0xfe,
    0x00, 0xfc, 0xfc, 0x03, 0xf0, 0xfc, 0x0f, 0xe0, 0xfc, 0x1f, 0x81, 0xf8, 0x7e, 0x01, 0xf9, 0xfc,
    0x01, 0xfb, 0xf0, 0x03, 0xff, 0xc0, 0x03, 0xff, 0x80, 0x03, 0xfe, 0x00, 0x07, 0xf8, 0x00, 0x0f,
    0xf0, 0x00, 0x1f, 0xf0, 0x00, 0x7f, 0xf0, 0x01, 0xff, 0xe0, 0x03, 0xf7, 0xe0, 0x0f, 0xcf, 0xe0,
    0x3f, 0x8f, 0xc0, 0x7e, 0x0f, 0xc1, 0xf8, 0x1f, 0xc7, 0xf0, 0x1f, 0x8f, 0xc0, 0x1f, 0xbf, 0x00,
    0x3f, 0x80, 0xfe, 0x00, 0xfe, 0xfc, 0x01, 0xf8, 0xfc, 0x07, 0xf1, 0xfc, 0x1f, 0xc1, 0xf8, 0x3f,
    0x01, 0xf8, 0xfe, 0x03, 0xf9, 0xf8, 0x03, 0xf7, 0xe0, 0x03, 0xff, 0xc0, 0x07, 0xff, 0x00, 0x07,
    0xfc, 0x00, 0x0f, 0xf8, 0x00, 0x0f, 0xe0, 0x00, 0x0f, 0xc0, 0x00, 0x1f, 0x80, 0x00, 0x3f, 0x00,
    0x00, 0x7e, 0x00, 0x00, 0xfc, 0x00, 0x01, 0xf8, 0x00, 0x03, 0xf0, 0x00, 0x07, 0xe0, 0x00, 0x0f,
    0xc0, 0x00, 0x1f, 0x80, 0x00, 0x7f, 0xff, 0xf3, 0xff, 0xff, 0x9f, 0xff, 0xfc, 0xff, 0xff, 0xe0,
    0x00, 0xfe, 0x00, 0x07, 0xf0, 0x00, 0x7f, 0x00, 0x07, 0xf0, 0x00, 0x7f, 0x00, 0x03, 0xf0, 0x00,
    0x3f, 0x00, 0x03, 0xf8, 0x00, 0x3f, 0x80, 0x03, 0xf8, 0x00, 0x3f, 0x80, 0x01, 0xf8, 0x00, 0x1f,
    0xc0, 0x01, 0xfc, 0x00, 0x1f, 0xff, 0xfd, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xe0, 0xff, 0xff, 0xff, 0xff, 0x0f, 0x87, 0xc3, 0xe1, 0xf0, 0xf8, 0x7c, 0x3e, 0x1f, 0x0f,
    0x87, 0xc3, 0xe1, 0xf0, 0xf8, 0x7c, 0x3e, 0x1f, 0x0f, 0x87, 0xc3, 0xe1, 0xf0, 0xf8, 0x7f, 0xff,
    0xff, 0xf0, 0xf0, 0x07, 0x00, 0x70, 0x07, 0x80, 0x38, 0x03, 0x80, 0x3c, 0x03, 0xc0, 0x1c, 0x01,
    0xe0, 0x1e, 0x00, 0xe0, 0x0e, 0x00, 0xf0, 0x07, 0x00, 0x70, 0x07, 0x80, 0x38, 0x03, 0x80, 0x3c,
    0x01, 0xc0, 0x1c, 0x01, 0xe0, 0x1e, 0x00, 0xe0, 0x0f, 0xff, 0xff, 0xff, 0xfc, 0x3f, 0x07, 0xc1,
    0xf0, 0x7c, 0x1f, 0x07, 0xc1, 0xf0, 0x7c, 0x1f, 0x07, 0xc1, 0xf0, 0x7c, 0x1f, 0x07, 0xc1, 0xf0,
    0x7c, 0x1f, 0x07, 0xc1, 0xf0, 0x7c, 0x1f, 0x0f, 0xff, 0xff, 0xff, 0xff, 0x01, 0xf0, 0x00, 0x7f,
    0x00, 0x1f, 0xf0, 0x07, 0xff, 0x01, 0xf1, 0xf0, 0x7c, 0x1f, 0x1f, 0x01, 0xf7, 0x80, 0x0f, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xf0, 0x78, 0x38, 0x1c, 0x1e, 0x0f, 0x0f, 0xf8, 0x0f, 0xff, 0x83,
    0xff, 0xf0, 0xff, 0xfe, 0x30, 0x1f, 0xc0, 0x03, 0xf0, 0x00, 0xfc, 0x3f, 0xff, 0x3f, 0xff, 0xdf,
    0xff, 0xf7, 0xe0, 0xfd, 0xf0, 0x3f, 0xfc, 0x0f, 0xdf, 0x07, 0xf7, 0xe3, 0xfd, 0xff, 0xff, 0x3f,
    0xef, 0xc7, 0xf3, 0xf0, 0xf8, 0x00, 0x3e, 0x00, 0x0f, 0x80, 0x03, 0xe0, 0x00, 0xf8, 0x00, 0x3e,
    0x00, 0x0f, 0x87, 0x83, 0xe7, 0xf8, 0xff, 0xff, 0x3f, 0xff, 0xef, 0xf3, 0xfb, 0xf0, 0x3f, 0xfc,
    0x0f, 0xfe, 0x03, 0xff, 0x80, 0x7f, 0xe0, 0x1f, 0xf8, 0x07, 0xff, 0x03, 0xff, 0xc0, 0xff, 0xf8,
    0x7f, 0xff, 0xff, 0xbf, 0xff, 0xef, 0xbf, 0xf3, 0xe3, 0xf0, 0x01, 0xfc, 0x07, 0xff, 0x1f, 0xff,
    0x3f, 0xff, 0x3f, 0x83, 0x7f, 0x00, 0x7e, 0x00, 0x7c, 0x00, 0xfc, 0x00, 0xfc, 0x00, 0x7c, 0x00,
    0x7e, 0x00, 0x7e, 0x00, 0x7f, 0x01, 0x3f, 0xff, 0x1f, 0xff, 0x0f, 0xff, 0x07, 0xfe, 0x00, 0x03,
    0xe0, 0x00, 0x7c, 0x00, 0x0f, 0x80, 0x01, 0xf0, 0x00, 0x3e, 0x00, 0x07, 0xc0, 0xf0, 0xf8, 0x7f,
    0x9f, 0x1f, 0xff, 0xe7, 0xff, 0xfd, 0xfc, 0x7f, 0xbf, 0x03, 0xf7, 0xe0, 0x7e, 0xf8, 0x0f, 0xdf,
    0x00, 0xff, 0xe0, 0x1f, 0x7c, 0x07, 0xef, 0xc0, 0xfd, 0xf8, 0x1f, 0xbf, 0x87, 0xf3, 0xff, 0xfe,
    0x7f, 0xff, 0xc7, 0xfe, 0xf8, 0x7f, 0x1f, 0x01, 0xf8, 0x01, 0xff, 0xc0, 0x7f, 0xfe, 0x1f, 0xff,
    0xc3, 0xf0, 0xfc, 0xfc, 0x0f, 0x9f, 0x01, 0xfb, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfd, 0xff,
    0xff, 0xbe, 0x00, 0x07, 0xe0, 0x00, 0xfc, 0x01, 0x8f, 0xe1, 0xf0, 0xff, 0xfe, 0x0f, 0xff, 0xc0,
    0xff, 0xe0, 0x07, 0xf8, 0x7f, 0xc7, 0xfe, 0x3f, 0x01, 0xf0, 0x1f, 0x83, 0xff, 0xdf, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xfc, 0x7e, 0x03, 0xf0, 0x1f, 0x80, 0xfc, 0x07, 0xe0, 0x3f, 0x01, 0xf8, 0x0f,
    0xc0, 0x7e, 0x03, 0xf0, 0x1f, 0x80, 0xfc, 0x07, 0xe0, 0x03, 0xc0, 0x01, 0xfe, 0x7c, 0x7f, 0xff,
    0x9f, 0xff, 0xf7, 0xf1, 0xfe, 0xfc, 0x0f, 0xdf, 0x81, 0xfb, 0xe0, 0x3f, 0xfc, 0x03, 0xff, 0x80,
    0x7d, 0xf0, 0x1f, 0xbf, 0x03, 0xf7, 0xe0, 0x7e, 0xfe, 0x1f, 0xcf, 0xff, 0xf8, 0xff, 0xff, 0x0f,
    0xf3, 0xe0, 0xf8, 0xfc, 0x00, 0x1f, 0x80, 0x03, 0xf1, 0x81, 0xfc, 0x3f, 0xff, 0x87, 0xff, 0xe0,
    0xff, 0xf0, 0x07, 0xf0, 0x00, 0xf8, 0x00, 0x7c, 0x00, 0x3e, 0x00, 0x1f, 0x00, 0x0f, 0x80, 0x07,
    0xc0, 0x03, 0xe1, 0xf1, 0xf3, 0xfc, 0xff, 0xff, 0x7f, 0xff, 0xff, 0xcf, 0xff, 0x83, 0xff, 0xc1,
    0xff, 0xe0, 0x7f, 0xe0, 0x3f, 0xf0, 0x1f, 0xf8, 0x0f, 0xfc, 0x07, 0xfe, 0x03, 0xff, 0x01, 0xff,
    0x80, 0xff, 0xc0, 0x7f, 0xe0, 0x3f, 0xf0, 0x1f, 0xff, 0xff, 0xf0, 0x03, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x0f, 0x87, 0xc3, 0xe1, 0xf0, 0x00, 0x00, 0x3e, 0x1f,
    0x0f, 0x87, 0xc3, 0xe1, 0xf0, 0xf8, 0x7c, 0x3e, 0x1f, 0x0f, 0x87, 0xc3, 0xe1, 0xf0, 0xf8, 0x7c,
    0x3e, 0x1f, 0x0f, 0x8f, 0xc7, 0xff, 0xff, 0xf7, 0xf3, 0xe0, 0xf8, 0x00, 0x3e, 0x00, 0x0f, 0x80,
    0x03, 0xe0, 0x00, 0xf8, 0x00, 0x3e, 0x00, 0x0f, 0x80, 0xfb, 0xe0, 0x7e, 0xf8, 0x3f, 0x3e, 0x1f,
    0x8f, 0x8f, 0xc3, 0xe7, 0xe0, 0xff, 0xf0, 0x3f, 0xf8, 0x0f, 0xfc, 0x03, 0xff, 0x80, 0xff, 0xf0,
    0x3e, 0xfe, 0x0f, 0x9f, 0xc3, 0xe3, 0xf8, 0xf8, 0x7e, 0x3e, 0x0f, 0xcf, 0x81, 0xfb, 0xe0, 0x3f,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xf8,
    0xf8, 0x1f, 0x0f, 0x9f, 0xc3, 0xfc, 0xff, 0xfe, 0x7f, 0xef, 0xff, 0xff, 0xfe, 0xff, 0x3f, 0xe7,
    0xef, 0xc1, 0xfc, 0x3f, 0xfc, 0x1f, 0x83, 0xff, 0x81, 0xf8, 0x3f, 0xf8, 0x1f, 0x83, 0xff, 0x81,
    0xf8, 0x3f, 0xf8, 0x1f, 0x83, 0xff, 0x81, 0xf8, 0x3f, 0xf8, 0x1f, 0x83, 0xff, 0x81, 0xf8, 0x3f,
    0xf8, 0x1f, 0x83, 0xff, 0x81, 0xf8, 0x3f, 0xf8, 0x1f, 0x83, 0xff, 0x81, 0xf8, 0x3f, 0xf8, 0x7c,
    0x7c, 0xff, 0x3f, 0xff, 0xdf, 0xff, 0xff, 0xf3, 0xff, 0xe0, 0xff, 0xf0, 0x7f, 0xf8, 0x1f, 0xf8,
    0x0f, 0xfc, 0x07, 0xfe, 0x03, 0xff, 0x01, 0xff, 0x80, 0xff, 0xc0, 0x7f, 0xe0, 0x3f, 0xf0, 0x1f,
    0xf8, 0x0f, 0xfc, 0x07, 0xc0, 0x01, 0xf8, 0x00, 0xff, 0xf0, 0x1f, 0xff, 0x83, 0xff, 0xfc, 0x7f,
    0x0f, 0xe7, 0xe0, 0x7e, 0x7e, 0x07, 0xe7, 0xc0, 0x3e, 0xfc, 0x03, 0xff, 0xc0, 0x3f, 0x7c, 0x03,
    0xe7, 0xc0, 0x7e, 0x7e, 0x07, 0xe7, 0xf0, 0xfe, 0x3f, 0xff, 0xc1, 0xff, 0xf8, 0x0f, 0xff, 0x00,
    0x7f, 0xe0, 0xf8, 0x78, 0x3e, 0x7f, 0x8f, 0xff, 0xf3, 0xff, 0xfe, 0xff, 0x3f, 0xbf, 0x03, 0xff,
    0xc0, 0xff, 0xe0, 0x3f, 0xf8, 0x07, 0xfe, 0x01, 0xff, 0x80, 0x7f, 0xf0, 0x3f, 0xfc, 0x0f, 0xff,
    0x87, 0xff, 0xff, 0xfb, 0xff, 0xfe, 0xfb, 0xff, 0x3e, 0x3f, 0x0f, 0x80, 0x03, 0xe0, 0x00, 0xf8,
    0x00, 0x3e, 0x00, 0x0f, 0x80, 0x03, 0xe0, 0x00, 0xf8, 0x00, 0x00, 0x03, 0xc0, 0x01, 0xfe, 0x7c,
    0x7f, 0xff, 0x9f, 0xff, 0xf7, 0xf1, 0xfe, 0xfc, 0x0f, 0xdf, 0x81, 0xfb, 0xe0, 0x3f, 0x7c, 0x03,
    0xff, 0x80, 0x7d, 0xf0, 0x1f, 0xbf, 0x03, 0xf7, 0xe0, 0x7e, 0xfe, 0x1f, 0xcf, 0xff, 0xf9, 0xff,
    0xff, 0x1f, 0xfb, 0xe1, 0xfc, 0x7c, 0x00, 0x0f, 0x80, 0x01, 0xf0, 0x00, 0x3e, 0x00, 0x07, 0xc0,
    0x00, 0xf8, 0x00, 0x1f, 0x00, 0x03, 0xe0, 0xf8, 0x7f, 0xcf, 0xfe, 0xff, 0xff, 0xff, 0xff, 0xff,
    0x03, 0xf0, 0x1f, 0x80, 0xf8, 0x07, 0xc0, 0x3e, 0x01, 0xf0, 0x0f, 0x80, 0x7c, 0x03, 0xe0, 0x1f,
    0x00, 0xf8, 0x07, 0xc0, 0x00, 0x0f, 0xf0, 0x7f, 0xf9, 0xff, 0xf7, 0xff, 0xef, 0x80, 0xdf, 0x00,
    0x3e, 0x00, 0x7f, 0xe0, 0x7f, 0xf8, 0xff, 0xf8, 0x7f, 0xf8, 0x03, 0xf0, 0x03, 0xf0, 0x07, 0xfe,
    0x1f, 0xff, 0xff, 0xff, 0xfc, 0xff, 0xf0, 0x1f, 0x80, 0x3f, 0x00, 0x7e, 0x00, 0xfc, 0x07, 0xff,
    0xdf, 0xff, 0xff, 0xff, 0xff, 0xff, 0x7f, 0xfc, 0x3f, 0x00, 0x7e, 0x00, 0xfc, 0x01, 0xf8, 0x03,
    0xf0, 0x07, 0xe0, 0x0f, 0xc0, 0x1f, 0x80, 0x3f, 0x00, 0x3f, 0xf0, 0x7f, 0xe0, 0x7f, 0xc0, 0x7f,
    0x80, 0x7c, 0x07, 0xff, 0x03, 0xff, 0xc0, 0xff, 0xf0, 0x3f, 0xfc, 0x0f, 0xff, 0x01, 0xf7, 0xc0,
    0x7d, 0xf0, 0x1f, 0x7c, 0x07, 0xdf, 0x03, 0xf7, 0xc0, 0xfd, 0xf0, 0x3f, 0x7c, 0x0f, 0xdf, 0x87,
    0xf7, 0xff, 0xfd, 0xff, 0xff, 0x3f, 0xe7, 0xc7, 0xf1, 0xf0, 0xf8, 0x03, 0xff, 0x00, 0xff, 0xf0,
    0x1f, 0xbe, 0x03, 0xe7, 0xe0, 0xfc, 0xfc, 0x1f, 0x0f, 0x83, 0xe1, 0xf8, 0xfc, 0x1f, 0x1f, 0x03,
    0xe3, 0xe0, 0x7e, 0xf8, 0x07, 0xdf, 0x00, 0xff, 0xe0, 0x0f, 0xf8, 0x01, 0xff, 0x00, 0x3f, 0xc0,
    0x03, 0xf8, 0x00, 0x7f, 0x00, 0x78, 0x0f, 0x01, 0xff, 0x83, 0xe0, 0x7d, 0xf0, 0x7e, 0x0f, 0xbe,
    0x0f, 0xc3, 0xf7, 0xe3, 0xf8, 0x7c, 0xfc, 0x7f, 0x0f, 0x8f, 0x8f, 0xf1, 0xf1, 0xf1, 0xde, 0x7e,
    0x3f, 0x7b, 0xcf, 0x87, 0xef, 0x39, 0xf0, 0x7d, 0xe7, 0xbe, 0x0f, 0xb8, 0xff, 0xc1, 0xff, 0x1f,
    0xf0, 0x1f, 0xe1, 0xfe, 0x03, 0xfc, 0x3f, 0xc0, 0x7f, 0x07, 0xf8, 0x0f, 0xe0, 0xfe, 0x00, 0xfc,
    0x0f, 0xc0, 0x78, 0x07, 0xcf, 0x81, 0xf9, 0xf8, 0x3e, 0x1f, 0x8f, 0xc1, 0xf3, 0xf0, 0x3f, 0xfc,
    0x03, 0xff, 0x00, 0x3f, 0xe0, 0x03, 0xf8, 0x00, 0x7f, 0x00, 0x1f, 0xf0, 0x07, 0xfe, 0x00, 0xff,
    0xe0, 0x3f, 0x7e, 0x0f, 0xc7, 0xe3, 0xf0, 0xfc, 0x7c, 0x0f, 0xdf, 0x80, 0xfc, 0xf0, 0x03, 0xff,
    0x00, 0xff, 0xf0, 0x1f, 0xbe, 0x03, 0xe7, 0xe0, 0xfc, 0x7c, 0x1f, 0x0f, 0x83, 0xe1, 0xf8, 0xfc,
    0x1f, 0x1f, 0x03, 0xf3, 0xe0, 0x3e, 0xf8, 0x07, 0xdf, 0x00, 0x7f, 0xe0, 0x0f, 0xf8, 0x01, 0xff,
    0x00, 0x1f, 0xe0, 0x03, 0xf8, 0x00, 0x3f, 0x00, 0x07, 0xc0, 0x00, 0xf8, 0x00, 0x3f, 0x00, 0x7f,
    0xc0, 0x0f, 0xf0, 0x01, 0xfe, 0x00, 0x3f, 0x00, 0x00, 0x7f, 0xff, 0x7f, 0xff, 0x7f, 0xff, 0x7f,
    0xff, 0x7f, 0xff, 0x00, 0x7e, 0x00, 0xfc, 0x01, 0xf8, 0x03, 0xf0, 0x07, 0xe0, 0x0f, 0xc0, 0x1f,
    0x80, 0x3f, 0x00, 0x7e, 0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x00, 0xfe, 0x07,
    0xfc, 0x1f, 0xf8, 0x3f, 0x80, 0x7e, 0x00, 0xf8, 0x01, 0xf0, 0x03, 0xe0, 0x07, 0xc0, 0x0f, 0x80,
    0x1f, 0x00, 0x7e, 0x01, 0xfc, 0x1f, 0xf0, 0x3f, 0xc0, 0x7f, 0xc0, 0x1f, 0xc0, 0x1f, 0x80, 0x1f,
    0x00, 0x3e, 0x00, 0x7c, 0x00, 0xf8, 0x01, 0xf0, 0x03, 0xe0, 0x07, 0xe0, 0x0f, 0xe0, 0x0f, 0xf8,
    0x1f, 0xf0, 0x0f, 0xe0, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xfe, 0xfe, 0x01, 0xff, 0x03, 0xfe, 0x00, 0xfe, 0x00, 0xfc, 0x01, 0xf8, 0x01,
    0xf0, 0x03, 0xe0, 0x07, 0xc0, 0x0f, 0x80, 0x1f, 0x00, 0x3f, 0x00, 0x7f, 0x00, 0x7f, 0xc0, 0x7f,
    0x81, 0xff, 0x07, 0xf0, 0x0f, 0xc0, 0x1f, 0x00, 0x3e, 0x00, 0x7c, 0x00, 0xf8, 0x01, 0xf0, 0x07,
    0xe0, 0x0f, 0xc0, 0x3f, 0x83, 0xfe, 0x07, 0xfc, 0x0f, 0xe0, 0x00, 0x0f, 0x80, 0x13, 0xff, 0x03,
    0x7f, 0xff, 0xff, 0xff, 0xff, 0xe0, 0x7f, 0xe8, 0x00, 0xf0,
];

pub const GLYPHS: &[GfxGlyph] = &[
    GfxGlyph::new(0, 0, 0, 11, 0, 0),         // ' '
    GfxGlyph::new(0, 6, 23, 15, 4, -23),      // '!'
    GfxGlyph::new(18, 11, 8, 17, 3, -23),     // '"'
    GfxGlyph::new(29, 23, 23, 27, 2, -23),    // '#'
    GfxGlyph::new(96, 17, 29, 22, 3, -24),    // '$'
    GfxGlyph::new(158, 30, 24, 32, 1, -24),   // '%'
    GfxGlyph::new(248, 24, 24, 28, 2, -24),   // '&'
    GfxGlyph::new(320, 4, 8, 10, 3, -23),     // '\''
    GfxGlyph::new(324, 9, 28, 15, 3, -24),    // '('
    GfxGlyph::new(356, 9, 28, 15, 3, -24),    // ')'
    GfxGlyph::new(388, 15, 15, 17, 1, -24),   // '*'
    GfxGlyph::new(417, 20, 20, 27, 3, -20),   // '+'
    GfxGlyph::new(467, 7, 11, 12, 2, -6),     // ','
    GfxGlyph::new(477, 10, 4, 13, 2, -11),    // '-'
    GfxGlyph::new(482, 6, 6, 12, 3, -6),      // '.'
    GfxGlyph::new(487, 11, 26, 12, 0, -23),   // '/'
    GfxGlyph::new(523, 19, 24, 22, 2, -24),   // '0'
    GfxGlyph::new(580, 16, 23, 22, 4, -23),   // '1'
    GfxGlyph::new(626, 16, 24, 22, 3, -24),   // '2'
    GfxGlyph::new(674, 18, 24, 22, 2, -24),   // '3'
    GfxGlyph::new(728, 20, 23, 22, 1, -23),   // '4'
    GfxGlyph::new(786, 18, 23, 22, 2, -23),   // '5'
    GfxGlyph::new(838, 19, 24, 22, 2, -24),   // '6'
    GfxGlyph::new(895, 18, 23, 22, 2, -23),   // '7'
    GfxGlyph::new(947, 18, 24, 22, 2, -24),   // '8'
    GfxGlyph::new(1001, 18, 24, 22, 2, -24),  // '9'
    GfxGlyph::new(1055, 5, 18, 13, 4, -18),   // ':'
    GfxGlyph::new(1067, 7, 23, 13, 2, -18),   // ';'
    GfxGlyph::new(1088, 20, 18, 27, 3, -19),  // '<'
    GfxGlyph::new(1133, 20, 10, 27, 3, -15),  // '='
    GfxGlyph::new(1158, 20, 18, 27, 3, -19),  // '>'
    GfxGlyph::new(1203, 14, 24, 19, 2, -24),  // '?'
    GfxGlyph::new(1245, 28, 28, 32, 2, -22),  // '@'
    GfxGlyph::new(1343, 24, 23, 25, 0, -23),  // 'A'
    GfxGlyph::new(1412, 19, 23, 24, 3, -23),  // 'B'
    GfxGlyph::new(1467, 19, 24, 23, 2, -24),  // 'C'
    GfxGlyph::new(1524, 22, 23, 27, 3, -23),  // 'D'
    GfxGlyph::new(1588, 17, 23, 22, 3, -23),  // 'E'
    GfxGlyph::new(1637, 16, 23, 22, 3, -23),  // 'F'
    GfxGlyph::new(1683, 22, 24, 26, 2, -24),  // 'G'
    GfxGlyph::new(1749, 21, 23, 27, 3, -23),  // 'H'
    GfxGlyph::new(1810, 6, 23, 12, 3, -23),   // 'I'
    GfxGlyph::new(1828, 11, 29, 12, -2, -23), // 'J'
    GfxGlyph::new(1868, 22, 23, 25, 3, -23),  // 'K'
    GfxGlyph::new(1932, 17, 23, 20, 3, -23),  // 'L'
    GfxGlyph::new(1981, 26, 23, 32, 3, -23),  // 'M'
    GfxGlyph::new(2056, 21, 23, 27, 3, -23),  // 'N'
    GfxGlyph::new(2117, 24, 24, 27, 2, -24),  // 'O'
    GfxGlyph::new(2189, 19, 23, 23, 3, -23),  // 'P'
    GfxGlyph::new(2244, 24, 29, 27, 2, -24),  // 'Q'
    GfxGlyph::new(2331, 21, 23, 25, 3, -23),  // 'R'
    GfxGlyph::new(2392, 19, 24, 23, 2, -24),  // 'S'
    GfxGlyph::new(2449, 22, 23, 22, 0, -23),  // 'T'
    GfxGlyph::new(2513, 20, 23, 26, 3, -23),  // 'U'
    GfxGlyph::new(2571, 24, 23, 25, 0, -23),  // 'V'
    GfxGlyph::new(2640, 33, 23, 35, 1, -23),  // 'W'
    GfxGlyph::new(2735, 23, 23, 25, 1, -23),  // 'X'
    GfxGlyph::new(2802, 23, 23, 23, 0, -23),  // 'Y'
    GfxGlyph::new(2869, 21, 23, 23, 1, -23),  // 'Z'
    GfxGlyph::new(2930, 9, 28, 15, 3, -24),   // '['
    GfxGlyph::new(2962, 12, 26, 12, 0, -23),  // '\\'
    GfxGlyph::new(3001, 10, 28, 15, 2, -24),  // ']'
    GfxGlyph::new(3036, 19, 8, 27, 4, -23),   // '^'
    GfxGlyph::new(3055, 16, 3, 16, 0, 5),     // '_'
    GfxGlyph::new(3061, 8, 6, 16, 2, -26),    // '`'
    GfxGlyph::new(3067, 18, 18, 22, 1, -18),  // 'a'
    GfxGlyph::new(3108, 18, 24, 23, 3, -24),  // 'b'
    GfxGlyph::new(3162, 16, 18, 19, 1, -18),  // 'c'
    GfxGlyph::new(3198, 19, 24, 23, 1, -24),  // 'd'
    GfxGlyph::new(3255, 19, 18, 22, 1, -18),  // 'e'
    GfxGlyph::new(3298, 13, 24, 14, 1, -24),  // 'f'
    GfxGlyph::new(3337, 19, 25, 23, 1, -18),  // 'g'
    GfxGlyph::new(3397, 17, 24, 23, 3, -24),  // 'h'
    GfxGlyph::new(3448, 5, 24, 11, 3, -24),   // 'i'
    GfxGlyph::new(3463, 9, 31, 11, -1, -24),  // 'j'
    GfxGlyph::new(3498, 18, 24, 21, 3, -24),  // 'k'
    GfxGlyph::new(3552, 5, 24, 11, 3, -24),   // 'l'
    GfxGlyph::new(3567, 28, 18, 33, 3, -18),  // 'm'
    GfxGlyph::new(3630, 17, 18, 23, 3, -18),  // 'n'
    GfxGlyph::new(3669, 20, 18, 22, 1, -18),  // 'o'
    GfxGlyph::new(3714, 18, 25, 23, 3, -18),  // 'p'
    GfxGlyph::new(3771, 19, 25, 23, 1, -18),  // 'q'
    GfxGlyph::new(3831, 13, 18, 16, 3, -18),  // 'r'
    GfxGlyph::new(3861, 15, 18, 19, 2, -18),  // 's'
    GfxGlyph::new(3895, 15, 22, 15, 0, -22),  // 't'
    GfxGlyph::new(3937, 18, 18, 23, 2, -18),  // 'u'
    GfxGlyph::new(3978, 19, 18, 21, 1, -18),  // 'v'
    GfxGlyph::new(4021, 27, 18, 30, 1, -18),  // 'w'
    GfxGlyph::new(4082, 19, 18, 21, 1, -18),  // 'x'
    GfxGlyph::new(4125, 19, 25, 21, 1, -18),  // 'y'
    GfxGlyph::new(4185, 16, 18, 19, 1, -18),  // 'z'
    GfxGlyph::new(4221, 15, 29, 23, 4, -24),  // '{'
    GfxGlyph::new(4276, 4, 32, 12, 4, -24),   // '|'
    GfxGlyph::new(4292, 15, 29, 23, 4, -24),  // '}'
    GfxGlyph::new(4347, 20, 6, 27, 3, -13),   // '~'
];

pub static FONT: GfxFont = GfxFont {
    name: "bold_32",
    bitmap: BITMAP,
    glyphs: GLYPHS,
    first: FIRST,
    last: LAST,
    y_advance: 37,
    baseline: 30,
};
