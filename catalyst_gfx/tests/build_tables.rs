#[path = "../build/tables.rs"]
mod tables;

use catalyst_gfx::fonts;
use tables::{declared_tables, is_generated, stray_tables};

#[test]
fn plain_mod_lines_are_read() {
    let source = "mod glyph;\nmod bold_22;\n\nmod regular_12;\n";
    assert_eq!(declared_tables(source), ["bold_22", "regular_12"]);
}

#[test]
fn visibility_and_attributes_are_skipped() {
    let source = "\
        pub mod bold_22;\n\
        pub(crate) mod bold_32;\n\
        pub(in crate::text) mod medium_16;\n\
        #[cfg(feature = \"small\")] mod regular_12;\n\
        #[cfg(any(test, feature = \"all\"))] #[allow(dead_code)] pub(super) mod regular_14;\n\
        mod thin_8; // not bundled yet\n";

    assert_eq!(
        declared_tables(source),
        ["bold_22", "bold_32", "medium_16", "regular_12", "regular_14", "thin_8"]
    );
}

#[test]
fn other_lines_are_not_tables() {
    let source = "\
        // mod commented_out;\n\
        mod inline {}\n\
        pub use bold_22::FONT as BOLD_22;\n\
        pubmod glued;\n\
        modern;\n\
        let model = mod_count;\n\
        #[cfg(test)\n";

    assert!(declared_tables(source).is_empty());
}

#[test]
fn bundled_aggregator_declares_every_font() {
    let declared = declared_tables(include_str!("../src/text/font/mod.rs"));
    let names = fonts::ALL.iter().map(|font| font.name).collect::<Vec<_>>();
    assert_eq!(declared, names);
}

#[test]
fn undeclared_generated_tables_are_reported() {
    let declared = vec!["bold_22".to_string()];
    let files = [
        ("bold_22", "// This file was generated by font_gen from `a.ttf` at 22pt. Do not edit.\n"),
        ("bold_40", "// This file was generated by font_gen from `a.ttf` at 40pt. Do not edit.\n"),
        ("glyph", "//! Types of the generated tables.\n"),
        ("mod", "//! The bundled fonts.\n"),
        ("notes", "\n// generated by font_gen\n"),
    ]
    .map(|(name, source)| (name.to_string(), source.to_string()));

    assert_eq!(stray_tables(&declared, &files), ["bold_40"]);
}

#[test]
fn bundled_tables_carry_the_marker() {
    for source in [
        include_str!("../src/text/font/bold_22.rs"),
        include_str!("../src/text/font/regular_14.rs"),
    ] {
        assert!(is_generated(source));
    }
    assert!(!is_generated(include_str!("../src/text/font/glyph.rs")));
    assert!(!is_generated(""));
}
