//! Glyph resolution: subject name → glyph via the glyph table.

use crate::core::glyphs::GlyphTable;

/// Resolve the glyph for a subject name.
///
/// Tries the whole lowercased name first, then each whitespace-separated word in order.
/// Returns an empty string when nothing matches (including for an empty name).
pub fn resolve_glyph<'t>(name: &str, table: &'t GlyphTable) -> &'t str {
    let lower = name.to_lowercase();
    if let Some(glyph) = table.get(&lower) {
        return glyph;
    }
    match lower.split_whitespace().find_map(|word| table.get(word)) {
        Some(glyph) => glyph,
        None => {
            if !lower.is_empty() {
                log::debug!("No glyph for subject '{}'", name);
            }
            ""
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::glyphs::GlyphTable;

    #[test]
    fn exact_match_is_case_insensitive() {
        let table = GlyphTable::builtin();
        assert_eq!(resolve_glyph("Lion", table), "🦁");
        assert_eq!(resolve_glyph("LEOPARD", table), "🐆");
    }

    #[test]
    fn falls_back_to_first_matching_word() {
        let table = GlyphTable::builtin();
        assert_eq!(resolve_glyph("Snow Leopard", table), "🐆");
        assert_eq!(resolve_glyph("Red  Fox Wolf", table), "🦊");
    }

    #[test]
    fn exact_multi_word_key_wins_over_words() {
        let table = GlyphTable::builtin().with_overrides(vec![crate::core::glyphs::GlyphEntry {
            key: "snow leopard".to_string(),
            glyph: "❄".to_string(),
            category: crate::core::glyphs::Category::Mammal,
        }]);
        assert_eq!(resolve_glyph("Snow Leopard", &table), "❄");
    }

    #[test]
    fn no_match_returns_empty() {
        let table = GlyphTable::builtin();
        assert_eq!(resolve_glyph("Golden Retriever", table), "");
        assert_eq!(resolve_glyph("", table), "");
        assert_eq!(resolve_glyph("   ", table), "");
    }

    #[test]
    fn underscore_keys_only_match_exactly() {
        let table = GlyphTable::builtin();
        assert_eq!(resolve_glyph("Tropical_Fish", table), "🐠");
        assert_eq!(resolve_glyph("Tropical Fish", table), "🐟");
    }
}
