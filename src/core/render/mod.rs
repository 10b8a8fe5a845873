//! Response rendering: a line-oriented parser that turns a response into a [`Document`],
//! plus HTML and plain-text writers for it.
//!
//! Lines are classified once ([`line::classify`]) and handled in priority order:
//! subject line (first non-blank line, once), blank, section/emphasis/colon headers,
//! bullet lists with one level of indentation-based nesting, and paragraphs.

mod cursor;
mod document;
mod html;
mod inline;
mod line;
mod text;


pub use document::{Block, Document, ListItem};
pub use inline::Inline;

use crate::core::subject::clean_subject_line;

use self::cursor::{LineCursor, indent_of};
use self::inline::parse_emphasis;
use self::line::{LineKind, classify};

/// Per-call parser state. Never shared between calls.
struct ParseState<'a> {
    cursor: LineCursor<'a>,
    subject_seen: bool,
    blocks: Vec<Block>,
}

impl<'a> ParseState<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            cursor: LineCursor::new(text),
            subject_seen: false,
            blocks: Vec::new(),
        }
    }
}

/// Render `response` to an HTML fragment with `glyph` around the subject name.
///
/// Returns an empty string for an absent or empty response. A missing glyph renders as
/// an empty string.
pub fn render<'a, 'g>(
    response: impl Into<Option<&'a str>>,
    glyph: impl Into<Option<&'g str>>,
) -> String {
    match response.into() {
        Some(text) if !text.is_empty() => {
            parse_document(text, glyph.into().unwrap_or("")).to_html()
        }
        _ => String::new(),
    }
}

/// Parse `response` into a block tree.
pub fn parse_document(response: &str, glyph: &str) -> Document {
    let mut state = ParseState::new(response);

    while let Some(line) = state.cursor.peek() {
        match classify(line) {
            LineKind::Blank => {
                state.cursor.consume();
            }
            _ if !state.subject_seen => {
                state.cursor.consume();
                state.subject_seen = true;
                state.blocks.push(Block::Name {
                    glyph: glyph.to_string(),
                    name: clean_subject_line(line),
                });
            }
            LineKind::KeywordHeader { label, trailing } => {
                state.cursor.consume();
                state.blocks.push(Block::Header {
                    text: label.to_string(),
                });
                if let Some(trailing) = trailing {
                    state.blocks.push(Block::Paragraph {
                        spans: vec![Inline::Text(trailing)],
                    });
                }
            }
            LineKind::EmphasisHeader(text) | LineKind::ColonHeader(text) => {
                state.cursor.consume();
                state.blocks.push(Block::Header { text });
            }
            LineKind::Bullet { .. } => {
                let items = parse_list(&mut state.cursor);
                state.blocks.push(Block::List { items });
            }
            LineKind::Paragraph(text) => {
                state.cursor.consume();
                state.blocks.push(Block::Paragraph {
                    spans: parse_emphasis(text),
                });
            }
        }
    }

    log::debug!(
        "Parsed {} blocks from {} lines",
        state.blocks.len(),
        state.cursor.line_count()
    );
    Document {
        blocks: state.blocks,
    }
}

/// Consume consecutive bullet lines starting at the cursor.
///
/// A bullet whose next line is a deeper bullet opens a nested list that takes every
/// following non-blank line indented deeper than the parent. Deeper levels are flattened.
/// Stops at the first non-bullet line, leaving it for the caller.
fn parse_list(cursor: &mut LineCursor<'_>) -> Vec<ListItem> {
    let mut items = Vec::new();

    while let Some(line) = cursor.peek() {
        let LineKind::Bullet { indent, content } = classify(line) else {
            break;
        };
        cursor.consume();

        let opens_nested = cursor.peek().is_some_and(|next| {
            matches!(classify(next), LineKind::Bullet { indent: deeper, .. } if deeper > indent)
        });
        if !opens_nested {
            items.push(ListItem {
                spans: parse_emphasis(content),
                nested: Vec::new(),
            });
            continue;
        }

        let mut nested = Vec::new();
        while let Some(next) = cursor.peek() {
            if next.trim().is_empty() || indent_of(next) <= indent {
                break;
            }
            cursor.consume();
            nested.push(parse_emphasis(nested_item_text(next)));
        }
        items.push(ListItem {
            spans: parse_emphasis(strip_trailing_colon(content)),
            nested,
        });
    }

    items
}

fn nested_item_text(line: &str) -> &str {
    let trimmed = line.trim();
    let text = trimmed.strip_prefix('-').unwrap_or(trimmed).trim();
    strip_trailing_colon(text)
}

fn strip_trailing_colon(s: &str) -> &str {
    s.strip_suffix(':').unwrap_or(s).trim_end()
}
