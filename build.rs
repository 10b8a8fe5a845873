//! Build script: validates glyphs.json at compile time.

use std::collections::HashSet;
use std::path::PathBuf;

fn main() {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR set by Cargo");
    let config_path: PathBuf = [&manifest_dir, "config", "glyphs.json"].iter().collect();
    println!("cargo:rerun-if-changed={}", config_path.display());
    let json = std::fs::read_to_string(&config_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read {}: {}. glyphs.json must exist and be valid.",
            config_path.display(),
            e
        )
    });
    #[derive(serde::Deserialize)]
    #[allow(dead_code)]
    struct GlyphEntry {
        key: String,
        glyph: String,
        category: String,
    }
    #[derive(serde::Deserialize)]
    struct GlyphsFile {
        glyphs: Vec<GlyphEntry>,
    }
    let file: GlyphsFile = serde_json::from_str(&json).unwrap_or_else(|e| {
        panic!(
            "glyphs.json is invalid JSON: {}. Fix the file and rebuild.",
            e
        )
    });
    let mut seen = HashSet::new();
    for entry in &file.glyphs {
        if entry.key.is_empty() || entry.key != entry.key.to_lowercase() {
            panic!("glyphs.json: key '{}' must be non-empty lowercase", entry.key);
        }
        if entry.glyph.is_empty() {
            panic!("glyphs.json: key '{}' has an empty glyph", entry.key);
        }
        if !seen.insert(entry.key.clone()) {
            panic!("glyphs.json: duplicate key '{}'", entry.key);
        }
    }
}
