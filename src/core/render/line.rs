//! Line classification. Each line maps to exactly one [`LineKind`], checked in priority order.

use super::cursor::indent_of;

/// Section labels recognized inside a bold-led line, in priority order.
pub(crate) const SECTION_LABELS: [&str; 2] = ["Explanation", "Connection"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LineKind<'a> {
    Blank,
    /// Bold-led line naming a section. `trailing` is the non-empty text after the first colon.
    KeywordHeader {
        label: &'static str,
        trailing: Option<String>,
    },
    /// `**Whole line**`, markers removed.
    EmphasisHeader(String),
    /// `Some header:`, markers and trailing colon removed.
    ColonHeader(String),
    /// `- item`; `content` is the text after the dash, trimmed.
    Bullet { indent: usize, content: &'a str },
    Paragraph(&'a str),
}

pub(crate) fn classify(line: &str) -> LineKind<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineKind::Blank;
    }

    if trimmed.starts_with("**")
        && let Some(label) = SECTION_LABELS.into_iter().find(|l| trimmed.contains(*l))
    {
        let trailing = trimmed
            .split_once(':')
            .map(|(_, rest)| rest.replace("**", "").trim().to_string())
            .filter(|rest| !rest.is_empty());
        return LineKind::KeywordHeader { label, trailing };
    }

    if trimmed.len() >= 4 && trimmed.starts_with("**") && trimmed.ends_with("**") {
        return LineKind::EmphasisHeader(trimmed.replace("**", "").trim().to_string());
    }

    if trimmed.ends_with(':') && !trimmed.starts_with('-') {
        let without_markers = trimmed.replace("**", "");
        let text = without_markers
            .trim_end()
            .strip_suffix(':')
            .unwrap_or(&without_markers);
        return LineKind::ColonHeader(text.trim().to_string());
    }

    if let Some(rest) = trimmed.strip_prefix('-') {
        return LineKind::Bullet {
            indent: indent_of(line),
            content: rest.trim(),
        };
    }

    LineKind::Paragraph(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines() {
        assert_eq!(classify(""), LineKind::Blank);
        assert_eq!(classify("  \t "), LineKind::Blank);
        assert_eq!(classify("\r"), LineKind::Blank);
    }

    #[test]
    fn keyword_header_without_trailing() {
        assert_eq!(
            classify("**Explanation**"),
            LineKind::KeywordHeader {
                label: "Explanation",
                trailing: None
            }
        );
        assert_eq!(
            classify("**Connection to the vibe:**"),
            LineKind::KeywordHeader {
                label: "Connection",
                trailing: None
            }
        );
    }

    #[test]
    fn keyword_header_with_trailing() {
        assert_eq!(
            classify("**Explanation:** You are **fierce**."),
            LineKind::KeywordHeader {
                label: "Explanation",
                trailing: Some("You are fierce.".to_string())
            }
        );
    }

    #[test]
    fn keyword_without_bold_is_not_keyword_header() {
        assert_eq!(
            classify("Connection:"),
            LineKind::ColonHeader("Connection".to_string())
        );
        assert_eq!(
            classify("The Explanation is simple."),
            LineKind::Paragraph("The Explanation is simple.")
        );
    }

    #[test]
    fn emphasis_header() {
        assert_eq!(
            classify("  **Your Traits** "),
            LineKind::EmphasisHeader("Your Traits".to_string())
        );
    }

    #[test]
    fn bare_markers_are_a_paragraph() {
        assert_eq!(classify("**"), LineKind::Paragraph("**"));
    }

    #[test]
    fn colon_header_strips_markers_and_colon() {
        assert_eq!(
            classify("**Why** it fits:"),
            LineKind::ColonHeader("Why it fits".to_string())
        );
    }

    #[test]
    fn dash_line_ending_in_colon_is_bullet() {
        assert_eq!(
            classify("  - Traits:"),
            LineKind::Bullet {
                indent: 2,
                content: "Traits:"
            }
        );
    }

    #[test]
    fn bullet_content_is_trimmed() {
        assert_eq!(
            classify("-   Calm"),
            LineKind::Bullet {
                indent: 0,
                content: "Calm"
            }
        );
    }

    #[test]
    fn paragraph_default() {
        assert_eq!(
            classify("  You are **bold**. "),
            LineKind::Paragraph("You are **bold**.")
        );
    }
}
