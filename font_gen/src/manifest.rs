use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

#[derive(Debug, Deserialize)]
pub struct Manifest {
    #[serde(rename = "font", default)]
    pub fonts: Vec<FontSpec>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FontSpec {
    /// module and table name of the generated font
    pub name: String,
    pub source: PathBuf,
    /// in points
    pub size: f32,
    #[serde(default = "default_dpi")]
    pub dpi: f32,
    #[serde(default = "default_first")]
    pub first: u16,
    #[serde(default = "default_last")]
    pub last: u16,
    /// minimum coverage for a pixel to be set
    #[serde(default = "default_threshold")]
    pub threshold: f32,
}

fn default_dpi() -> f32 {
    72.0
}

fn default_first() -> u16 {
    0x20
}

fn default_last() -> u16 {
    0x7e
}

fn default_threshold() -> f32 {
    0.5
}

impl Manifest {
    pub fn load(path: &Path) -> Result<Manifest> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut manifest = Manifest::parse(&text).map_err(|source| Error::Manifest {
            path: path.to_path_buf(),
            source,
        })?;

        // sources are relative to the manifest, not to wherever we got started from
        let base = path.parent().unwrap_or(Path::new(""));
        for font in &mut manifest.fonts {
            if font.source.is_relative() {
                font.source = base.join(&font.source);
            }
        }

        manifest.validate()?;
        Ok(manifest)
    }

    pub fn parse(text: &str) -> std::result::Result<Manifest, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn validate(&self) -> Result<()> {
        for (i, font) in self.fonts.iter().enumerate() {
            font.validate()?;

            if self.fonts[..i].iter().any(|other| other.name == font.name) {
                return Err(font.invalid("listed more than once"));
            }
        }

        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<&FontSpec> {
        self.fonts
            .iter()
            .find(|font| font.name == name)
            .ok_or_else(|| Error::UnknownFont(name.to_string()))
    }
}

impl FontSpec {
    pub fn validate(&self) -> Result<()> {
        if !is_module_name(&self.name) {
            return Err(self.invalid("name has to be a lowercase rust identifier"));
        }
        if self.name == "glyph" || self.name == "mod" {
            return Err(self.invalid("name is reserved"));
        }
        if !(self.size > 0.0) || !(self.dpi > 0.0) {
            return Err(self.invalid("size and dpi have to be positive"));
        }
        if !(self.threshold > 0.0 && self.threshold <= 1.0) {
            return Err(self.invalid("threshold has to be in (0, 1]"));
        }
        if self.first > self.last {
            return Err(self.invalid("first character comes after the last one"));
        }
        if self.chars().count() != (self.last - self.first) as usize + 1 {
            return Err(self.invalid("character range contains surrogates"));
        }

        Ok(())
    }

    /// pixels per em
    pub fn px_size(&self) -> f32 {
        self.size * self.dpi / 72.0
    }

    pub fn chars(&self) -> impl Iterator<Item = char> {
        (self.first as u32..=self.last as u32).filter_map(char::from_u32)
    }

    pub fn source_name(&self) -> String {
        self.source
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source.display().to_string())
    }

    fn invalid(&self, reason: &str) -> Error {
        Error::InvalidSpec {
            name: self.name.clone(),
            reason: reason.to_string(),
        }
    }
}

fn is_module_name(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some('a'..='z' | '_'))
        && chars.all(|c| matches!(c, 'a'..='z' | '0'..='9' | '_'))
        && name != "_"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(name: &str) -> FontSpec {
        FontSpec {
            name: name.to_string(),
            source: PathBuf::from("fonts/test.ttf"),
            size: 12.0,
            dpi: default_dpi(),
            first: default_first(),
            last: default_last(),
            threshold: default_threshold(),
        }
    }

    #[test]
    fn defaults_are_filled_in() {
        let manifest = Manifest::parse(
            r#"
            [[font]]
            name = "bold_22"
            source = "fonts/DejaVuSans-Bold.ttf"
            size = 22
            "#,
        )
        .unwrap();

        let font = manifest.get("bold_22").unwrap();
        assert_eq!(font.size, 22.0);
        assert_eq!(font.dpi, 72.0);
        assert_eq!((font.first, font.last), (0x20, 0x7e));
        assert_eq!(font.threshold, 0.5);
        assert_eq!(font.px_size(), 22.0);
        assert_eq!(font.chars().count(), 95);
        assert_eq!(font.source_name(), "DejaVuSans-Bold.ttf");
        manifest.validate().unwrap();
    }

    #[test]
    fn overrides_are_read() {
        let manifest = Manifest::parse(
            r#"
            [[font]]
            name = "digits"
            source = "a.otf"
            size = 10
            dpi = 144
            first = 0x30
            last = 0x39
            threshold = 0.3
            "#,
        )
        .unwrap();

        let font = &manifest.fonts[0];
        assert_eq!(font.px_size(), 20.0);
        assert_eq!(font.chars().collect::<String>(), "0123456789");
        assert_eq!(font.threshold, 0.3);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = Manifest::parse(
            r#"
            [[font]]
            name = "a"
            source = "a.otf"
            size = 10
            colour = "red"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn empty_manifest_has_no_fonts() {
        let manifest = Manifest::parse("").unwrap();
        assert!(manifest.fonts.is_empty());
        assert!(matches!(manifest.get("bold_22"), Err(Error::UnknownFont(_))));
    }

    #[test]
    fn invalid_specs() {
        spec("regular_12").validate().unwrap();

        for name in ["Bold22", "22bold", "bold-22", "", "_", "glyph", "mod"] {
            assert!(
                matches!(spec(name).validate(), Err(Error::InvalidSpec { .. })),
                "{name:?} was accepted"
            );
        }

        let mut font = spec("a");
        font.first = 0x7e;
        font.last = 0x20;
        assert!(font.validate().is_err());

        let mut font = spec("a");
        font.first = 0xd7ff;
        font.last = 0xe000;
        assert!(font.validate().is_err());

        let mut font = spec("a");
        font.size = 0.0;
        assert!(font.validate().is_err());

        let mut font = spec("a");
        font.threshold = 0.0;
        assert!(font.validate().is_err());
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let manifest = Manifest {
            fonts: vec![spec("a"), spec("b"), spec("a")],
        };
        assert!(matches!(
            manifest.validate(),
            Err(Error::InvalidSpec { name, .. }) if name == "a"
        ));
    }

    #[test]
    fn bundled_manifest_resolves_its_sources() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("fonts.toml");
        let manifest = Manifest::load(&path).unwrap();

        let names = manifest.fonts.iter().map(|font| font.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, ["bold_22", "bold_32", "medium_16", "regular_12", "regular_14"]);
        assert!(manifest.fonts.iter().all(|font| font.source.is_file()));

        // no medium DejaVu weight, the condensed bold stands in
        let medium = manifest.get("medium_16").unwrap();
        assert_eq!(medium.source_name(), "DejaVuSansCondensed-Bold.ttf");
    }
}
