//! Buffer — the ordered line sequence and the keypress entry point.
//!
//! A `Buffer` owns the document: a never-empty `Vec<Line>`, the focus
//! index (the line receiving character-level edits), path and modified
//! metadata, and the [`CursorCoordinator`] that relates per-line cursors
//! during navigation.
//!
//! # Invariants
//!
//! - `lines` is never empty while the buffer exists. An empty document is
//!   one empty line.
//! - `focus` always indexes an existing line. Every structural mutation
//!   (insert/remove of lines) re-points focus before returning.
//!
//! # Keypress dispatch
//!
//! [`keypress`](Buffer::keypress) is the single entry point for edits:
//! printable characters go to the focused line, backspace handles both
//! in-line deletion and line joining, enter splits, arrows route through
//! the coordinator, and every other key comes back as
//! [`KeyOutcome::PassThrough`] for the outer layer.
//!
//! # File I/O
//!
//! `open_file` reads the whole file *before* touching buffer state, so a
//! failed open never destroys the document being edited. `save_file`
//! writes one newline-terminated record per line.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::cursor::{CursorCoordinator, Horizontal, Vertical};
use crate::key::{Key, KeyOutcome};
use crate::line::Line;

/// Where `save` writes when neither the command nor the buffer has a path.
pub const DEFAULT_SAVE_PATH: &str = "workfile";

// ---------------------------------------------------------------------------
// Buffer
// ---------------------------------------------------------------------------

/// The open document: ordered lines, focus, and file metadata.
///
/// One buffer per editing session — there is no multi-document model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    lines: Vec<Line>,
    focus: usize,
    path: Option<PathBuf>,
    modified: bool,
    cursor: CursorCoordinator,
}

impl Buffer {
    // -- Construction -------------------------------------------------------

    /// An empty buffer: one empty line, focus on it.
    #[must_use]
    pub fn new() -> Self {
        Self {
            lines: vec![Line::new("")],
            focus: 0,
            path: None,
            modified: false,
            cursor: CursorCoordinator::new(),
        }
    }

    /// Build a buffer from newline-delimited text. One line per record,
    /// line endings stripped; empty input yields one empty line.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let mut lines: Vec<Line> = text.lines().map(Line::new).collect();
        if lines.is_empty() {
            lines.push(Line::new(""));
        }
        Self {
            lines,
            focus: 0,
            path: None,
            modified: false,
            cursor: CursorCoordinator::new(),
        }
    }

    // -- Accessors ----------------------------------------------------------

    /// Number of lines. Always at least 1.
    #[inline]
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// A line by index, or `None` past the end.
    #[inline]
    #[must_use]
    pub fn line(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    /// All lines, in order. The renderer enumerates these.
    #[inline]
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Mutable access to all lines. The renderer uses this to consume
    /// per-line dirty flags.
    #[inline]
    pub fn lines_mut(&mut self) -> &mut [Line] {
        &mut self.lines
    }

    /// Index of the focused line.
    #[inline]
    #[must_use]
    pub const fn focus(&self) -> usize {
        self.focus
    }

    /// The focused line.
    #[must_use]
    pub fn focused_line(&self) -> &Line {
        &self.lines[self.focus]
    }

    /// Screen cursor position as `(row, col)`.
    #[must_use]
    pub fn cursor_position(&self) -> (usize, usize) {
        (self.focus, self.focused_line().cursor_col())
    }

    /// The file path this buffer is associated with, if any.
    #[inline]
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// True if the buffer changed since the last load or save.
    #[inline]
    #[must_use]
    pub const fn is_modified(&self) -> bool {
        self.modified
    }

    /// The whole document as newline-terminated text — exactly what
    /// [`save_file`](Self::save_file) writes.
    #[must_use]
    pub fn contents(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line.text());
            out.push('\n');
        }
        out
    }

    // -- Keypress dispatch --------------------------------------------------

    /// Handle one key event. The single entry point for all line-local
    /// and structural edits.
    pub fn keypress(&mut self, key: Key) -> KeyOutcome {
        match key {
            Key::Char(ch) => {
                self.cursor.end_traversal();
                self.lines[self.focus].insert_char(ch);
                self.modified = true;
            }
            Key::Backspace => {
                self.cursor.end_traversal();
                self.backspace();
            }
            Key::Enter => {
                self.cursor.end_traversal();
                self.split_line();
            }
            Key::Left => {
                self.cursor
                    .move_horizontal(&mut self.lines[self.focus], Horizontal::Left);
            }
            Key::Right => {
                self.cursor
                    .move_horizontal(&mut self.lines[self.focus], Horizontal::Right);
            }
            Key::Up => {
                if let Some(focus) = self.cursor.move_vertical(&mut self.lines, self.focus, Vertical::Up) {
                    self.focus = focus;
                }
            }
            Key::Down => {
                if let Some(focus) = self.cursor.move_vertical(&mut self.lines, self.focus, Vertical::Down) {
                    self.focus = focus;
                }
            }
            other => return KeyOutcome::PassThrough(other),
        }
        KeyOutcome::Consumed
    }

    // -- Structural edits ---------------------------------------------------

    /// Split the focused line at its cursor.
    ///
    /// The text before the cursor becomes a new line inserted immediately
    /// before the focused one; the focused line keeps the tail with its
    /// cursor reset to column 0. Focus moves down one index — it stays on
    /// the tail, preserving reading order.
    pub fn split_line(&mut self) {
        let head = self.lines[self.focus].split_at_cursor();
        self.lines.insert(self.focus, Line::new(head));
        self.focus += 1;
        self.modified = true;
        log::debug!("split line, focus now {}", self.focus);
    }

    /// Backspace at the focused line's cursor.
    ///
    /// - Cursor past column 0: delete the previous character in-line.
    /// - Column 0, empty line: remove the line, focus the previous one.
    /// - Column 0, non-empty line: join this line onto the previous one;
    ///   the previous line's cursor lands on the join point.
    /// - Column 0 on the very first line: no-op.
    fn backspace(&mut self) {
        let focus = self.focus;
        if self.lines[focus].cursor_col() > 0 {
            self.lines[focus].delete_before_cursor();
            self.modified = true;
            return;
        }
        if focus == 0 {
            // Nothing before the first line to delete into.
            return;
        }

        // Removing an empty line and joining a non-empty one are the same
        // operation once the cursor lands on the join point.
        let text = self.lines.remove(focus).into_text();
        let prev = &mut self.lines[focus - 1];
        let join_col = prev.len();
        prev.push_str(&text);
        prev.set_cursor_col(join_col);
        self.focus = focus - 1;
        self.modified = true;
        log::debug!("joined line {focus} into {}", self.focus);
    }

    // -- File I/O -----------------------------------------------------------

    /// Replace the buffer contents with the lines of `path`.
    ///
    /// Reads the whole file first; on any I/O error the existing buffer
    /// is left untouched. On success focus resets to the first line, the
    /// path is recorded, and the buffer is unmodified.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn open_file(&mut self, path: &Path) -> io::Result<()> {
        let text = fs::read_to_string(path)?;

        let mut lines: Vec<Line> = text.lines().map(Line::new).collect();
        if lines.is_empty() {
            lines.push(Line::new(""));
        }
        log::info!("opened {} ({} lines)", path.display(), lines.len());

        self.lines = lines;
        self.focus = 0;
        self.path = Some(path.to_path_buf());
        self.modified = false;
        self.cursor.end_traversal();
        Ok(())
    }

    /// Write every line, newline-terminated, to a file.
    ///
    /// The target is `path` if given, else the buffer's recorded path,
    /// else [`DEFAULT_SAVE_PATH`]. Returns the path actually written. On
    /// success the path is recorded and the buffer marked unmodified; on
    /// failure buffer state is unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn save_file(&mut self, path: Option<&Path>) -> io::Result<PathBuf> {
        let target = path.map_or_else(
            || {
                self.path
                    .clone()
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_SAVE_PATH))
            },
            Path::to_path_buf,
        );

        fs::write(&target, self.contents())?;
        log::info!("saved {} ({} lines)", target.display(), self.lines.len());

        self.path = Some(target.clone());
        self.modified = false;
        Ok(target)
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
