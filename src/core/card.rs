//! Card: the name, glyph, and HTML for one response, computed together.

use serde::Serialize;

use crate::core::glyphs::GlyphTable;
use crate::core::render::render;
use crate::core::resolve::resolve_glyph;
use crate::core::subject::extract_name;

/// Everything needed to display or flatten one result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub name: String,
    pub glyph: String,
    pub html: String,
}

impl Card {
    /// Extract the name, resolve its glyph, and render the response.
    pub fn from_response<'a>(response: impl Into<Option<&'a str>>, table: &GlyphTable) -> Self {
        let response = response.into();
        let name = extract_name(response);
        let glyph = resolve_glyph(&name, table).to_string();
        let html = render(response, glyph.as_str());
        Card { name, glyph, html }
    }
}
