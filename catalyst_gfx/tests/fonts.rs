use catalyst_gfx::fonts::{self, GfxFont, BOLD_22, BOLD_32, MEDIUM_16, REGULAR_12, REGULAR_14};
use catalyst_gfx::Position;

const PRINTABLE: core::ops::RangeInclusive<char> = ' '..='~';

#[test]
fn every_font_is_reachable_by_name() {
    for (name, font) in [
        ("bold_22", &BOLD_22),
        ("bold_32", &BOLD_32),
        ("medium_16", &MEDIUM_16),
        ("regular_12", &REGULAR_12),
        ("regular_14", &REGULAR_14),
    ] {
        assert_eq!(font.name, name);
        let found = fonts::by_name(name).expect(name);
        assert!(core::ptr::eq(found, font));
    }

    assert!(fonts::by_name("bold_23").is_none());
    assert!(fonts::by_name("").is_none());
}

#[test]
fn all_lists_each_font_once_in_order() {
    let names = fonts::ALL.iter().map(|font| font.name).collect::<Vec<_>>();
    assert_eq!(
        names,
        ["bold_22", "bold_32", "medium_16", "regular_12", "regular_14"]
    );
}

#[test]
fn importing_twice_refers_to_the_same_tables() {
    mod first {
        pub use catalyst_gfx::fonts::*;
    }
    mod second {
        pub use catalyst_gfx::text::font::*;
    }

    assert!(core::ptr::eq(&first::BOLD_22, &second::BOLD_22));
    assert!(core::ptr::eq(&first::REGULAR_14, &REGULAR_14));
    assert!(core::ptr::eq(first::ALL[2], &second::MEDIUM_16));
}

#[test]
fn tables_cover_printable_ascii() {
    for font in fonts::ALL {
        assert_eq!(font.first, 0x20, "{}", font.name);
        assert_eq!(font.last, 0x7e, "{}", font.name);
        assert_eq!(font.char_count(), 95, "{}", font.name);

        for c in PRINTABLE {
            assert!(font.contains(c), "{} is missing {c:?}", font.name);
        }
        assert!(!font.contains('\u{7f}'));
        assert!(!font.contains('\n'));
    }
}

#[test]
fn glyph_bitmaps_are_in_bounds() {
    for font in fonts::ALL {
        for c in PRINTABLE {
            let glyph = font.glyph(c).unwrap();
            let start = glyph.bitmap_offset as usize;
            assert!(start + glyph.bitmap_len() <= font.bitmap.len(), "{} {c:?}", font.name);
            assert_eq!(font.glyph_bitmap(glyph).len(), glyph.bitmap_len());
        }
    }
}

#[test]
fn space_is_blank_and_everything_else_has_ink() {
    for font in fonts::ALL {
        let space = font.glyph(' ').unwrap();
        assert!(space.is_empty(), "{}", font.name);
        assert!(space.x_advance > 0, "{}", font.name);

        for c in '!'..='~' {
            let glyph = font.glyph(c).unwrap();
            let ink = glyph.pixels(font.glyph_bitmap(glyph)).count();
            assert!(ink > 0, "{} {c:?} has no ink", font.name);
            assert!(glyph.x_advance > 0, "{} {c:?}", font.name);
        }
    }
}

#[test]
fn glyphs_sit_inside_the_line() {
    for font in fonts::ALL {
        assert!(font.baseline > 0 && font.baseline < font.y_advance, "{}", font.name);

        for c in PRINTABLE {
            let glyph = font.glyph(c).unwrap();
            assert!(
                -(glyph.y_offset as i32) <= font.baseline as i32,
                "{} {c:?} rises above the line",
                font.name
            );
            assert!(glyph.height <= font.y_advance, "{} {c:?}", font.name);
        }
    }
}

#[test]
fn bigger_sizes_have_taller_lines() {
    fn cap_height(font: &GfxFont) -> i8 {
        -font.glyph('H').unwrap().y_offset
    }

    assert!(BOLD_32.line_height() > BOLD_22.line_height());
    assert!(REGULAR_14.line_height() > REGULAR_12.line_height());
    assert!(cap_height(&BOLD_32) > cap_height(&BOLD_22));
    assert!(cap_height(&REGULAR_14) >= cap_height(&REGULAR_12));

    let text = "Temp 21.5";
    assert!(BOLD_32.text_width(text) > BOLD_22.text_width(text));
    assert!(BOLD_22.text_width(text) > REGULAR_12.text_width(text));
}

#[test]
fn digits_share_one_advance() {
    for font in fonts::ALL {
        let zero = font.glyph('0').unwrap().x_advance;
        for c in '1'..='9' {
            assert_eq!(font.glyph(c).unwrap().x_advance, zero, "{} {c:?}", font.name);
        }
        assert_eq!(font.text_width("1234"), font.text_width("8888"));
    }
}

#[test]
fn text_bounds_of_a_word() {
    let origin = Position::new(10, 40);
    let bounds = MEDIUM_16.text_bounds("Hello", origin);

    let h = MEDIUM_16.glyph('H').unwrap();
    let tallest = "Hello"
        .chars()
        .map(|c| MEDIUM_16.glyph(c).unwrap().y_offset)
        .min()
        .unwrap();
    assert_eq!(bounds.min.x, origin.x + h.x_offset as i64);
    assert_eq!(bounds.min.y, origin.y + tallest as i64);
    assert!(bounds.max.x <= origin.x + MEDIUM_16.text_width("Hello") as i64);
    // no descenders in "Hello"
    assert_eq!(bounds.max.y, origin.y);
}

#[test]
fn tables_are_shared_across_threads() {
    let widths = std::thread::scope(|scope| {
        let handles = fonts::ALL
            .iter()
            .map(|font| scope.spawn(move || font.text_width("1013 hPa")))
            .collect::<Vec<_>>();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect::<Vec<_>>()
    });

    for (font, width) in fonts::ALL.iter().zip(widths) {
        assert_eq!(font.text_width("1013 hPa"), width);
    }
}
