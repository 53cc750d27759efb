use std::fs;
use std::path::PathBuf;

extern crate build_print;
extern crate glob;

use build_print::{info, warn};
use glob::glob;

#[path = "build/tables.rs"]
mod tables;

fn main() {
    let font_dir = PathBuf::from(std::env::var_os("CARGO_MANIFEST_DIR").unwrap())
        .join("src")
        .join("text")
        .join("font");
    let aggregator = font_dir.join("mod.rs");

    println!("cargo:rerun-if-changed={}", font_dir.display());
    println!("cargo:rerun-if-changed={}", aggregator.display());
    println!("cargo:rerun-if-changed=build");

    let declared = tables::declared_tables(&fs::read_to_string(&aggregator).unwrap());
    info!("checking {} font tables", declared.len());

    for table in &declared {
        let path = font_dir.join(format!("{}.rs", table));
        println!("cargo:rerun-if-changed={}", path.display());

        // rustc would fail on the missing module too, this just says what to do about it
        if !path.exists() {
            panic!(
                "font table `{}` is declared in {} but {} is missing, regenerate it with font_gen",
                table,
                aggregator.display(),
                path.display()
            );
        }
        info!("  └> {}", table);
    }

    let pattern = font_dir.join("*.rs").to_str().unwrap().to_string();
    let files = glob(&pattern)
        .unwrap()
        .map(|entry| {
            let path = entry.unwrap();
            let name = path.file_stem().unwrap().to_string_lossy().into_owned();
            (name, fs::read_to_string(&path).unwrap_or_default())
        })
        .collect::<Vec<_>>();

    for name in tables::stray_tables(&declared, &files) {
        warn!(
            "font table `{}` was generated but isn't declared in {}",
            name,
            aggregator.display()
        );
    }
}
