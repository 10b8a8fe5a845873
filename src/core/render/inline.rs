//! Inline emphasis: `**text**` runs become strong spans.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// Inline span inside a paragraph, header, or list item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "text", rename_all = "snake_case")]
pub enum Inline {
    Text(String),
    Strong(String),
}

fn strong_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*\*([^*]+)\*\*").expect("strong run regex is valid"))
}

/// Split `s` into text and strong spans. Unmatched markers stay literal.
pub(crate) fn parse_emphasis(s: &str) -> Vec<Inline> {
    let mut spans = Vec::new();
    let mut last = 0;
    for caps in strong_run().captures_iter(s) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if whole.start() > last {
            spans.push(Inline::Text(s[last..whole.start()].to_string()));
        }
        spans.push(Inline::Strong(inner.as_str().to_string()));
        last = whole.end();
    }
    if last < s.len() {
        spans.push(Inline::Text(s[last..].to_string()));
    }
    spans
}

/// Concatenated text of the spans, markers dropped.
pub(crate) fn plain_text(spans: &[Inline]) -> String {
    spans
        .iter()
        .map(|span| match span {
            Inline::Text(t) | Inline::Strong(t) => t.as_str(),
        })
        .collect()
}
