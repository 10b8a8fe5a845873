//! HTML fragment writer.
//!
//! Source text is written as-is. Callers injecting the fragment into a live page must
//! trust or sanitize the response upstream.

use super::document::{Block, Document, ListItem};
use super::inline::Inline;

const CONTAINER_CLASS: &str = "container";
const NAME_CLASS: &str = "animal_name";
const LIST_STRONG_CLASS: &str = "list-strong";
const PARAGRAPH_STRONG_CLASS: &str = "paragraph-strong";

impl Document {
    /// Serialize as one `<div class="container">` wrapping every block.
    pub fn to_html(&self) -> String {
        let mut html = format!("<div class=\"{}\">", CONTAINER_CLASS);
        for block in &self.blocks {
            push_block(&mut html, block);
        }
        html.push_str("</div>");
        html
    }
}

fn push_block(html: &mut String, block: &Block) {
    match block {
        Block::Name { glyph, name } => {
            html.push_str(&format!(
                "<div class=\"{}\">{} {} {}</div>",
                NAME_CLASS, glyph, name, glyph
            ));
        }
        Block::Header { text } => {
            html.push_str(&format!("<h2>{}</h2>", text));
        }
        Block::Paragraph { spans } => {
            html.push_str("<p>");
            push_spans(html, spans, PARAGRAPH_STRONG_CLASS);
            html.push_str("</p>");
        }
        Block::List { items } => {
            html.push_str("<ul>");
            for item in items {
                push_item(html, item);
            }
            html.push_str("</ul>");
        }
    }
}

fn push_item(html: &mut String, item: &ListItem) {
    html.push_str("<li>");
    push_spans(html, &item.spans, LIST_STRONG_CLASS);
    if !item.nested.is_empty() {
        html.push_str("<ul>");
        for nested in &item.nested {
            html.push_str("<li>");
            push_spans(html, nested, LIST_STRONG_CLASS);
            html.push_str("</li>");
        }
        html.push_str("</ul>");
    }
    html.push_str("</li>");
}

fn push_spans(html: &mut String, spans: &[Inline], strong_class: &str) {
    for span in spans {
        match span {
            Inline::Text(t) => html.push_str(t),
            Inline::Strong(t) => {
                html.push_str(&format!("<strong class=\"{}\">{}</strong>", strong_class, t))
            }
        }
    }
}
