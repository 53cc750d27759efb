//! Reading the font aggregator, shared by the build script and its tests.

pub const GENERATED_MARKER: &str = "generated by font_gen";

/// names from the `mod x;` lines of the aggregator, minus the glyph types
pub fn declared_tables(aggregator: &str) -> Vec<String> {
    aggregator
        .lines()
        .filter_map(module_name)
        .filter(|name| *name != "glyph")
        .map(str::to_owned)
        .collect()
}

/// generated files that have no `mod` line, `files` holds (stem, source) pairs
pub fn stray_tables(declared: &[String], files: &[(String, String)]) -> Vec<String> {
    files
        .iter()
        .filter(|(name, source)| !declared.contains(name) && is_generated(source))
        .map(|(name, _)| name.clone())
        .collect()
}

pub fn is_generated(source: &str) -> bool {
    source
        .lines()
        .next()
        .map_or(false, |line| line.contains(GENERATED_MARKER))
}

/// `mod x;` behind any attributes and visibility on the same line
fn module_name(line: &str) -> Option<&str> {
    let mut rest = line.split("//").next()?.trim();

    while let Some(attribute) = rest.strip_prefix("#[") {
        rest = skip_attribute(attribute)?.trim_start();
    }

    if let Some(visibility) = rest.strip_prefix("pub") {
        rest = if let Some(scope) = visibility.strip_prefix('(') {
            &scope[scope.find(')')? + 1..]
        } else if visibility.starts_with(char::is_whitespace) {
            visibility
        } else {
            return None;
        };
    }

    let name = rest.trim_start().strip_prefix("mod")?;
    if !name.starts_with(char::is_whitespace) {
        return None;
    }

    let name = name.trim().strip_suffix(';')?.trim_end();
    is_identifier(name).then_some(name)
}

/// the rest of the line after an attribute, `attribute` starts behind its `#[`
fn skip_attribute(attribute: &str) -> Option<&str> {
    let mut depth = 1;
    for (i, c) in attribute.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&attribute[i + 1..]);
                }
            }
            _ => {}
        }
    }
    None
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .map_or(false, |c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
