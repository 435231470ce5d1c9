//! Line — one row of text with its own cursor column.
//!
//! A `Line` owns its text, a cursor column, and a dirty flag the renderer
//! consumes to know what needs repainting. Columns are **char offsets**,
//! not byte offsets: column 3 of `"café"` is `'é'`. One column per char;
//! display width never enters the picture.
//!
//! # Cursor invariant
//!
//! `0 <= cursor_col <= char length of text` after every operation on this
//! type. The one deliberate gap is [`set_text`](Line::set_text), which
//! replaces the text without clamping — callers that shorten a line below
//! the current column are responsible for re-clamping (the buffer's
//! structural edits all do).

use lined_syntax::{StyleTable, Token};

use crate::render::StyledSpan;

/// One line of the buffer: text plus cursor column plus dirty flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    text: String,
    cursor_col: usize,
    dirty: bool,
}

impl Default for Line {
    /// An empty line.
    fn default() -> Self {
        Self::new("")
    }
}

impl Line {
    /// Create a line with the cursor at column 0. New lines start dirty —
    /// they have never been painted.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            cursor_col: 0,
            dirty: true,
        }
    }

    // -- Accessors ----------------------------------------------------------

    /// The line's text, without any line ending.
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Char length of the text. Also the maximum valid cursor column.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// True when the line holds no text.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The cursor column (char offset, `0..=len`).
    #[inline]
    #[must_use]
    pub const fn cursor_col(&self) -> usize {
        self.cursor_col
    }

    /// Consume the line, yielding its text. Used when a line is joined
    /// into its predecessor.
    #[inline]
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }

    // -- Mutation -----------------------------------------------------------

    /// Replace the text wholesale.
    ///
    /// Does **not** clamp the cursor column — a caller that shortens the
    /// text below the current column must follow up with
    /// [`set_cursor_col`](Self::set_cursor_col).
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.dirty = true;
    }

    /// Move the cursor to `col`, clamped to the text length.
    pub fn set_cursor_col(&mut self, col: usize) {
        self.cursor_col = col.min(self.len());
        self.dirty = true;
    }

    /// Insert a character at the cursor and advance the cursor past it.
    pub fn insert_char(&mut self, ch: char) {
        let idx = self.byte_of_col(self.cursor_col);
        self.text.insert(idx, ch);
        self.cursor_col += 1;
        self.dirty = true;
    }

    /// Remove the character immediately before the cursor and step the
    /// cursor back. No-op at column 0.
    pub fn delete_before_cursor(&mut self) {
        if self.cursor_col == 0 {
            return;
        }
        let idx = self.byte_of_col(self.cursor_col - 1);
        self.text.remove(idx);
        self.cursor_col -= 1;
        self.dirty = true;
    }

    /// Move the cursor by `delta` columns, clamped to `[0, len]`.
    pub fn move_column(&mut self, delta: isize) {
        self.cursor_col = self
            .cursor_col
            .saturating_add_signed(delta)
            .min(self.len());
        self.dirty = true;
    }

    /// Append text to the end of the line. The cursor does not move.
    pub fn push_str(&mut self, text: &str) {
        self.text.push_str(text);
        self.dirty = true;
    }

    /// Split the line at the cursor: the text before the cursor is
    /// returned, the text from the cursor on stays in this line, and the
    /// cursor resets to column 0.
    #[must_use]
    pub fn split_at_cursor(&mut self) -> String {
        let idx = self.byte_of_col(self.cursor_col);
        let tail = self.text.split_off(idx);
        let head = std::mem::replace(&mut self.text, tail);
        self.cursor_col = 0;
        self.dirty = true;
        head
    }

    // -- Rendering ----------------------------------------------------------

    /// Tokenize the current text.
    ///
    /// Pure — delegates to the stateless tokenizer, no caching. Cheap
    /// enough to run per paint since it sees a single line.
    #[must_use]
    pub fn tokenize(&self) -> Vec<Token> {
        lined_syntax::tokenize(&self.text)
    }

    /// Tokenize and resolve styles in one step.
    #[must_use]
    pub fn styled(&self, table: &StyleTable) -> Vec<StyledSpan> {
        self.tokenize()
            .into_iter()
            .map(|token| StyledSpan {
                style: table.style(token.category),
                text: token.text,
            })
            .collect()
    }

    /// Whether the line changed since the last call, clearing the flag.
    /// The renderer polls this to decide what to repaint.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    // -- Helpers ------------------------------------------------------------

    /// Byte index of char column `col`. A column equal to the char length
    /// maps to the end of the string.
    fn byte_of_col(&self, col: usize) -> usize {
        self.text
            .char_indices()
            .nth(col)
            .map_or(self.text.len(), |(idx, _)| idx)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use lined_syntax::Category;

    use super::*;

    /// The invariant every operation must preserve.
    fn assert_cursor_in_bounds(line: &Line) {
        assert!(
            line.cursor_col() <= line.len(),
            "cursor {} beyond len {}",
            line.cursor_col(),
            line.len()
        );
    }

    #[test]
    fn new_line_starts_at_column_zero() {
        let line = Line::new("hello");
        assert_eq!(line.text(), "hello");
        assert_eq!(line.cursor_col(), 0);
        assert_eq!(line.len(), 5);
        assert!(!line.is_empty());
    }

    #[test]
    fn new_line_starts_dirty() {
        let mut line = Line::new("x");
        assert!(line.take_dirty());
        assert!(!line.take_dirty());
    }

    #[test]
    fn insert_advances_cursor() {
        let mut line = Line::new("");
        for ch in "abc".chars() {
            line.insert_char(ch);
            assert_cursor_in_bounds(&line);
        }
        assert_eq!(line.text(), "abc");
        assert_eq!(line.cursor_col(), 3);
    }

    #[test]
    fn insert_in_middle() {
        let mut line = Line::new("hllo");
        line.set_cursor_col(1);
        line.insert_char('e');
        assert_eq!(line.text(), "hello");
        assert_eq!(line.cursor_col(), 2);
    }

    #[test]
    fn delete_before_cursor_removes_and_steps_back() {
        let mut line = Line::new("hello");
        line.set_cursor_col(3);
        line.delete_before_cursor();
        assert_eq!(line.text(), "helo");
        assert_eq!(line.cursor_col(), 2);
    }

    #[test]
    fn delete_at_column_zero_is_noop() {
        let mut line = Line::new("hello");
        line.delete_before_cursor();
        assert_eq!(line.text(), "hello");
        assert_eq!(line.cursor_col(), 0);
    }

    #[test]
    fn insert_delete_sequences_keep_invariant() {
        let mut line = Line::new("seed");
        line.set_cursor_col(4);
        let script = [
            'i', 'n', 's', '\u{7f}', 'x', '\u{7f}', '\u{7f}', '\u{7f}', '\u{7f}', '\u{7f}',
        ];
        for step in script {
            if step == '\u{7f}' {
                line.delete_before_cursor();
            } else {
                line.insert_char(step);
            }
            assert_cursor_in_bounds(&line);
        }
    }

    #[test]
    fn move_column_clamps_both_ends() {
        let mut line = Line::new("hi");
        line.move_column(10);
        assert_eq!(line.cursor_col(), 2);
        line.move_column(-10);
        assert_eq!(line.cursor_col(), 0);
        line.move_column(1);
        assert_eq!(line.cursor_col(), 1);
    }

    #[test]
    fn set_cursor_col_clamps() {
        let mut line = Line::new("abc");
        line.set_cursor_col(99);
        assert_eq!(line.cursor_col(), 3);
    }

    #[test]
    fn unicode_columns_are_chars_not_bytes() {
        let mut line = Line::new("café");
        assert_eq!(line.len(), 4);
        line.set_cursor_col(4);
        line.insert_char('!');
        assert_eq!(line.text(), "café!");
        line.delete_before_cursor();
        line.delete_before_cursor();
        assert_eq!(line.text(), "caf");
        assert_eq!(line.cursor_col(), 3);
    }

    #[test]
    fn split_at_cursor_keeps_tail() {
        let mut line = Line::new("hello world");
        line.set_cursor_col(5);
        let head = line.split_at_cursor();
        assert_eq!(head, "hello");
        assert_eq!(line.text(), " world");
        assert_eq!(line.cursor_col(), 0);
    }

    #[test]
    fn split_at_start_and_end() {
        let mut line = Line::new("abc");
        assert_eq!(line.split_at_cursor(), "");
        assert_eq!(line.text(), "abc");

        line.set_cursor_col(3);
        assert_eq!(line.split_at_cursor(), "abc");
        assert_eq!(line.text(), "");
    }

    #[test]
    fn push_str_appends_without_moving_cursor() {
        let mut line = Line::new("ab");
        line.set_cursor_col(1);
        line.push_str("cd");
        assert_eq!(line.text(), "abcd");
        assert_eq!(line.cursor_col(), 1);
    }

    #[test]
    fn set_text_replaces_and_dirties() {
        let mut line = Line::new("old");
        let _ = line.take_dirty();
        line.set_text("new text");
        assert_eq!(line.text(), "new text");
        assert!(line.take_dirty());
    }

    #[test]
    fn mutations_mark_dirty() {
        let mut line = Line::new("abc");
        let _ = line.take_dirty();

        line.insert_char('x');
        assert!(line.take_dirty());

        line.delete_before_cursor();
        assert!(line.take_dirty());

        line.move_column(1);
        assert!(line.take_dirty());
    }

    #[test]
    fn tokenize_is_lossless() {
        let line = Line::new("let x = 'hi' # note");
        let joined: String = line.tokenize().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(joined, line.text());
    }

    #[test]
    fn tokenize_empty_line() {
        assert!(Line::new("").tokenize().is_empty());
    }

    #[test]
    fn styled_spans_cover_the_text() {
        let table = StyleTable::default();
        let line = Line::new("def f(): pass");
        let spans = line.styled(&table);
        let joined: String = spans.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(joined, line.text());
        // Keyword spans pick up the keyword style.
        assert_eq!(spans[0].style, table.style(Category::Keyword));
    }
}
