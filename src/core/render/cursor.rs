//! Forward-only cursor over the lines of a response.

/// Number of leading whitespace characters.
pub(crate) fn indent_of(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Line cursor. Lookahead is done with [`LineCursor::peek`]; the position never moves back.
pub(crate) struct LineCursor<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> LineCursor<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self {
            lines: text.split('\n').collect(),
            pos: 0,
        }
    }

    /// Current line without advancing.
    pub(crate) fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.pos).copied()
    }

    /// Return the current line and advance past it.
    pub(crate) fn consume(&mut self) -> Option<&'a str> {
        let line = self.peek()?;
        self.pos += 1;
        Some(line)
    }

    pub(crate) fn line_count(&self) -> usize {
        self.lines.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indent_counts_spaces_and_tabs() {
        assert_eq!(indent_of("- a"), 0);
        assert_eq!(indent_of("  - a"), 2);
        assert_eq!(indent_of("\t- a"), 1);
        assert_eq!(indent_of("    "), 4);
    }

    #[test]
    fn peek_does_not_advance() {
        let cursor = LineCursor::new("a\nb");
        assert_eq!(cursor.peek(), Some("a"));
        assert_eq!(cursor.peek(), Some("a"));
    }

    #[test]
    fn consume_walks_every_line_once() {
        let mut cursor = LineCursor::new("a\n\nc");
        assert_eq!(cursor.line_count(), 3);
        assert_eq!(cursor.consume(), Some("a"));
        assert_eq!(cursor.consume(), Some(""));
        assert_eq!(cursor.consume(), Some("c"));
        assert_eq!(cursor.consume(), None);
        assert_eq!(cursor.peek(), None);
    }
}
