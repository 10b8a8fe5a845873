//! Glyph table: lowercase subject keywords mapped to a single display glyph.
//!
//! The builtin table is loaded from `config/glyphs.json` (embedded at compile time and
//! validated by `build.rs`). A user override file can be layered on top once at startup;
//! the resulting table is never mutated afterwards.

mod validation;


use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use self::validation::{GlyphsFile, validate_and_convert};

/// Grouping of glyph entries, used for listing only.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Mammal,
    Bird,
    Aquatic,
    Insect,
    #[value(name = "reptile_amphibian")]
    ReptileAmphibian,
    Mythical,
    Extinct,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Mammal => "mammal",
            Category::Bird => "bird",
            Category::Aquatic => "aquatic",
            Category::Insect => "insect",
            Category::ReptileAmphibian => "reptile_amphibian",
            Category::Mythical => "mythical",
            Category::Extinct => "extinct",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One keyword → glyph mapping.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GlyphEntry {
    pub key: String,
    pub glyph: String,
    pub category: Category,
}

/// Error loading a glyph file.
#[derive(Debug, thiserror::Error)]
pub enum GlyphTableError {
    #[error("Failed to read glyph file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Immutable keyword → glyph lookup. Keys are unique and lowercase.
#[derive(Clone, Debug, Default)]
pub struct GlyphTable {
    entries: HashMap<String, GlyphEntry>,
}

static BUILTIN_TABLE: OnceLock<GlyphTable> = OnceLock::new();

fn load_builtin_table() -> GlyphTable {
    let json = include_str!("../../../config/glyphs.json");
    GlyphTable::from_json(json).expect("glyphs.json must be valid")
}

impl GlyphTable {
    /// Returns the builtin table, loading from config on first access.
    pub fn builtin() -> &'static GlyphTable {
        BUILTIN_TABLE.get_or_init(load_builtin_table)
    }

    /// Build a table from the `{"glyphs": [...]}` JSON format.
    pub fn from_json(json: &str) -> Result<Self, GlyphTableError> {
        let file: GlyphsFile = serde_json::from_str(json)?;
        let table = Self::from_entries(validate_and_convert(file)?);
        if table.is_empty() {
            return Err(GlyphTableError::Validation("table has no entries".into()));
        }
        Ok(table)
    }

    fn from_entries(entries: Vec<GlyphEntry>) -> Self {
        let entries = entries
            .into_iter()
            .map(|e| (e.key.clone(), e))
            .collect();
        Self { entries }
    }

    /// Read and validate an override file. Entries are not merged; see [`GlyphTable::with_overrides`].
    pub fn load_overrides(path: &Path) -> Result<Vec<GlyphEntry>, GlyphTableError> {
        let content = fs::read_to_string(path).map_err(|source| GlyphTableError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let file: GlyphsFile = serde_json::from_str(&content)?;
        validate_and_convert(file)
    }

    /// New table with `overrides` layered on top. Same-key entries are replaced.
    pub fn with_overrides(&self, overrides: Vec<GlyphEntry>) -> GlyphTable {
        let mut entries = self.entries.clone();
        for entry in overrides {
            log::debug!("Glyph override: {} -> {}", entry.key, entry.glyph);
            entries.insert(entry.key.clone(), entry);
        }
        GlyphTable { entries }
    }

    /// Exact lookup. `key` must already be lowercase.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|e| e.glyph.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, ordered by category then key.
    pub fn entries(&self) -> Vec<&GlyphEntry> {
        let mut out: Vec<&GlyphEntry> = self.entries.values().collect();
        out.sort_by(|a, b| a.category.cmp(&b.category).then_with(|| a.key.cmp(&b.key)));
        out
    }

    /// Entries of one category, ordered by key.
    pub fn by_category(&self, category: Category) -> Vec<&GlyphEntry> {
        self.entries()
            .into_iter()
            .filter(|e| e.category == category)
            .collect()
    }

    /// Entries whose key or category contains `query` (case-insensitive), optionally
    /// restricted to one category. An empty query matches everything.
    pub fn matching(&self, category: Option<Category>, query: &str) -> Vec<&GlyphEntry> {
        let entries = match category {
            Some(c) => self.by_category(c),
            None => self.entries(),
        };
        if query.is_empty() {
            return entries;
        }
        let q = query.to_lowercase();
        entries
            .into_iter()
            .filter(|e| e.key.contains(&q) || e.category.as_str().contains(&q))
            .collect()
    }
}
