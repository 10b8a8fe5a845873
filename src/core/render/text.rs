//! Plain-text preview for terminals, wrapped with textwrap.

use textwrap::Options;

use super::document::{Block, Document};
use super::inline::plain_text;

impl Document {
    /// Render as wrapped plain text. Blocks are separated by a blank line; list items are not.
    pub fn to_text(&self, width: usize) -> String {
        let mut chunks: Vec<String> = Vec::with_capacity(self.blocks.len());
        for block in &self.blocks {
            let chunk = match block {
                Block::Name { glyph, name } => {
                    let line = format!("{} {} {}", glyph, name, glyph);
                    line.trim().to_string()
                }
                Block::Header { text } => text.to_uppercase(),
                Block::Paragraph { spans } => textwrap::fill(&plain_text(spans), width),
                Block::List { items } => {
                    let mut lines = Vec::new();
                    for item in items {
                        let opts = Options::new(width)
                            .initial_indent("• ")
                            .subsequent_indent("  ");
                        lines.push(textwrap::fill(&plain_text(&item.spans), opts));
                        for nested in &item.nested {
                            let opts = Options::new(width)
                                .initial_indent("    ◦ ")
                                .subsequent_indent("      ");
                            lines.push(textwrap::fill(&plain_text(nested), opts));
                        }
                    }
                    lines.join("\n")
                }
            };
            chunks.push(chunk);
        }
        chunks.join("\n\n")
    }
}
