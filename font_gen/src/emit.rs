use std::fmt::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::raster::GeneratedFont;

const BYTES_PER_LINE: usize = 16;

/// Renders the table module for a font, in the layout rustfmt would leave it in.
pub fn render(font: &GeneratedFont) -> String {
    let mut out = String::new();
    write_module(&mut out, font).expect("writing to a String");
    out
}

fn write_module(out: &mut String, font: &GeneratedFont) -> std::fmt::Result {
    writeln!(
        out,
        "// This file was generated by font_gen from `{}` at {}pt. Do not edit.",
        font.source_name, font.size
    )?;
    writeln!(out)?;
    writeln!(out, "use super::glyph::{{GfxFont, GfxGlyph}};")?;
    writeln!(out)?;
    writeln!(out, "pub const FIRST: u16 = {:#04x};", font.first)?;
    writeln!(out, "pub const LAST: u16 = {:#04x};", font.last)?;
    writeln!(out)?;

    if font.bitmap.is_empty() {
        writeln!(out, "pub const BITMAP: &[u8] = &[];")?;
    } else {
        writeln!(out, "pub const BITMAP: &[u8] = &[")?;
        for line in font.bitmap.chunks(BYTES_PER_LINE) {
            let bytes = line
                .iter()
                .map(|byte| format!("{byte:#04x},"))
                .collect::<Vec<_>>();
            writeln!(out, "    {}", bytes.join(" "))?;
        }
        writeln!(out, "];")?;
    }
    writeln!(out)?;

    let entries = font
        .glyphs
        .iter()
        .map(|(c, glyph)| {
            let entry = format!(
                "GfxGlyph::new({}, {}, {}, {}, {}, {})",
                glyph.offset,
                glyph.width,
                glyph.height,
                glyph.x_advance,
                glyph.x_offset,
                glyph.y_offset
            );
            (entry, c)
        })
        .collect::<Vec<_>>();

    // rustfmt lines the trailing comments up behind the widest entry
    let width = entries.iter().map(|(entry, _)| entry.len()).max().unwrap_or(0);
    writeln!(out, "pub const GLYPHS: &[GfxGlyph] = &[")?;
    for (entry, c) in &entries {
        writeln!(out, "    {:<width$} // {:?}", format!("{entry},"), c, width = width + 1)?;
    }
    writeln!(out, "];")?;
    writeln!(out)?;

    writeln!(out, "pub static FONT: GfxFont = GfxFont {{")?;
    writeln!(out, "    name: {:?},", font.name)?;
    writeln!(out, "    bitmap: BITMAP,")?;
    writeln!(out, "    glyphs: GLYPHS,")?;
    writeln!(out, "    first: FIRST,")?;
    writeln!(out, "    last: LAST,")?;
    writeln!(out, "    y_advance: {},", font.y_advance)?;
    writeln!(out, "    baseline: {},", font.baseline)?;
    writeln!(out, "}};")
}

/// Writes `<name>.rs` into `out_dir` and returns its path.
pub fn write(font: &GeneratedFont, out_dir: &Path) -> Result<PathBuf> {
    let path = out_dir.join(format!("{}.rs", font.name));
    std::fs::write(&path, render(font)).map_err(|source| Error::Write {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}

pub fn rustfmt(path: &Path) {
    let status = std::process::Command::new("rustfmt")
        .arg("--edition")
        .arg("2021")
        .arg(path)
        .status();

    match status {
        Ok(status) if status.success() => debug!("formatted {}", path.display()),
        Ok(status) => warn!("rustfmt exited with {status} on {}", path.display()),
        Err(err) => warn!("couldn't run rustfmt: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::Manifest;
    use crate::raster::{rasterize, Glyph};

    fn font() -> GeneratedFont {
        let glyph = |offset, width, height, x_advance, x_offset, y_offset| Glyph {
            offset,
            width,
            height,
            x_advance,
            x_offset,
            y_offset,
        };

        GeneratedFont {
            name: "tiny_8".to_string(),
            source_name: "Tiny.ttf".to_string(),
            size: 8.0,
            first: 0x27,
            last: 0x28,
            bitmap: (0..18).collect(),
            glyphs: vec![
                ('\'', glyph(0, 1, 3, 3, 1, -7)),
                ('(', glyph(1, 3, 9, 4, 0, -7)),
            ],
            y_advance: 10,
            baseline: 7,
        }
    }

    #[test]
    fn module_layout() {
        let source = render(&font());
        let lines = source.lines().collect::<Vec<_>>();

        assert_eq!(
            lines[0],
            "// This file was generated by font_gen from `Tiny.ttf` at 8pt. Do not edit."
        );
        assert!(lines.contains(&"pub const FIRST: u16 = 0x27;"));
        assert!(lines.contains(&"pub const LAST: u16 = 0x28;"));
        assert!(lines.contains(&"    name: \"tiny_8\","));
        assert!(lines.contains(&"    y_advance: 10,"));
        assert!(lines.contains(&"    baseline: 7,"));
        assert!(source.ends_with("};\n"));
    }

    #[test]
    fn bitmap_is_wrapped_at_sixteen_bytes() {
        let source = render(&font());
        let rows = source
            .lines()
            .skip_while(|line| !line.starts_with("pub const BITMAP"))
            .skip(1)
            .take_while(|line| *line != "];")
            .collect::<Vec<_>>();

        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with("    0x00, 0x01,"));
        assert!(rows[0].ends_with("0x0f,"));
        assert_eq!(rows[1], "    0x10, 0x11,");
    }

    #[test]
    fn glyph_comments_are_escaped() {
        let source = render(&font());
        assert!(source.contains("    GfxGlyph::new(0, 1, 3, 3, 1, -7), // '\\''\n"));
        assert!(source.contains("    GfxGlyph::new(1, 3, 9, 4, 0, -7), // '('\n"));
    }

    #[test]
    fn glyph_comments_line_up() {
        let mut font = font();
        font.glyphs[1].1.offset = 1024;
        font.glyphs[1].1.x_offset = -12;

        let source = render(&font);
        assert!(source.contains("    GfxGlyph::new(0, 1, 3, 3, 1, -7),      // '\\''\n"));
        assert!(source.contains("    GfxGlyph::new(1024, 3, 9, 4, -12, -7), // '('\n"));
    }

    #[test]
    fn empty_bitmap_stays_on_one_line() {
        let mut font = font();
        font.bitmap.clear();
        assert!(render(&font).contains("pub const BITMAP: &[u8] = &[];\n"));
    }

    #[test]
    fn fractional_sizes_are_kept() {
        let mut font = font();
        font.size = 10.5;
        assert!(render(&font).starts_with(
            "// This file was generated by font_gen from `Tiny.ttf` at 10.5pt."
        ));
    }

    #[test]
    fn bundled_tables_match_the_generator() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR"));
        let manifest = Manifest::load(&root.join("fonts.toml")).unwrap();
        let out_dir = root.join("../catalyst_gfx/src/text/font");

        for spec in &manifest.fonts {
            let font = rasterize(spec).unwrap();
            let path = out_dir.join(format!("{}.rs", spec.name));
            let checked_in = std::fs::read_to_string(&path).unwrap();
            assert!(
                render(&font) == checked_in,
                "{} is stale, rerun font_gen",
                path.display()
            );
        }
    }
}
