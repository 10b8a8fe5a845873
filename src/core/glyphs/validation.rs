//! Glyph file validation: disk format and conversion to GlyphEntry.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{Category, GlyphEntry, GlyphTableError};

/// JSON structure on disk.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct GlyphsFile {
    pub(super) glyphs: Vec<GlyphFileEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct GlyphFileEntry {
    pub key: String,
    pub glyph: String,
    pub category: Category,
}

/// Validate file entries and convert to GlyphEntry list. Keys are trimmed and lowercased.
pub(crate) fn validate_and_convert(file: GlyphsFile) -> Result<Vec<GlyphEntry>, GlyphTableError> {
    let mut seen = HashSet::new();
    let mut result = Vec::with_capacity(file.glyphs.len());

    for (i, entry) in file.glyphs.into_iter().enumerate() {
        let key = entry.key.trim().to_lowercase();
        if key.is_empty() {
            return Err(GlyphTableError::Validation(format!(
                "Glyph at index {}: key cannot be empty",
                i
            )));
        }

        let glyph = entry.glyph.trim();
        if glyph.is_empty() {
            return Err(GlyphTableError::Validation(format!(
                "Glyph '{}': glyph cannot be empty",
                key
            )));
        }

        if !seen.insert(key.clone()) {
            return Err(GlyphTableError::Validation(format!(
                "Duplicate glyph key '{}'",
                key
            )));
        }

        result.push(GlyphEntry {
            key,
            glyph: glyph.to_string(),
            category: entry.category,
        });
    }

    Ok(result)
}
