//! Block tree produced by the parser and consumed by the HTML and text writers.

use serde::Serialize;

use super::inline::Inline;

/// A top-level block in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// The subject line, flanked by its glyph. Always the first block when present.
    Name { glyph: String, name: String },
    Header { text: String },
    Paragraph { spans: Vec<Inline> },
    List { items: Vec<ListItem> },
}

/// One list item. A non-empty `nested` list is rendered inside the item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    pub spans: Vec<Inline>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nested: Vec<Vec<Inline>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    /// Subject name, if a name block was produced.
    #[cfg(test)]
    pub fn name(&self) -> Option<&str> {
        self.blocks.iter().find_map(|b| match b {
            Block::Name { name, .. } => Some(name.as_str()),
            _ => None,
        })
    }
}
