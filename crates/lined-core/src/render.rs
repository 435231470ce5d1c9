//! The rendering adapter — what the external painter reads.
//!
//! The painter never sees tokens or categories; it gets [`StyledSpan`]s,
//! already resolved against a [`StyleTable`]. Together with the buffer's
//! line/focus/cursor accessors this is the entire contract between the
//! core and the screen-painting layer.

use lined_syntax::{Style, StyleTable};

use crate::buffer::Buffer;
use crate::line::Line;

/// One run of identically-styled text within a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledSpan {
    pub style: Style,
    pub text: String,
}

/// Styled spans for one line. Lossless: the concatenated span text equals
/// the line text.
#[must_use]
pub fn styled_line(line: &Line, table: &StyleTable) -> Vec<StyledSpan> {
    line.styled(table)
}

/// Styled spans for every line of the buffer, in order.
#[must_use]
pub fn styled_rows(buffer: &Buffer, table: &StyleTable) -> Vec<Vec<StyledSpan>> {
    buffer
        .lines()
        .iter()
        .map(|line| styled_line(line, table))
        .collect()
}

#[cfg(test)]
mod tests {
    use lined_syntax::Category;

    use super::*;

    #[test]
    fn spans_concatenate_to_line_text() {
        let table = StyleTable::default();
        for text in ["", "plain", "def f(x): return x + 1  # comment"] {
            let line = Line::new(text);
            let joined: String = styled_line(&line, &table)
                .iter()
                .map(|span| span.text.as_str())
                .collect();
            assert_eq!(joined, text);
        }
    }

    #[test]
    fn rows_cover_every_line() {
        let table = StyleTable::default();
        let buffer = Buffer::from_text("one\ntwo\nthree");
        let rows = styled_rows(&buffer, &table);
        assert_eq!(rows.len(), buffer.line_count());
        assert_eq!(rows[2][0].text, "three");
    }

    #[test]
    fn styles_come_from_the_table() {
        let mut table = StyleTable::default();
        let marker = lined_syntax::Style::fg_only(lined_syntax::Color::Ansi256(99));
        table.set(Category::Comment, marker);

        let line = Line::new("# hi");
        let spans = styled_line(&line, &table);
        assert_eq!(spans[0].style, marker);
    }
}
