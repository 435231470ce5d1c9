//! Cursor coordination across lines.
//!
//! Each [`Line`] owns its own cursor column; the `CursorCoordinator` is
//! the piece that relates them when the cursor moves between lines.
//!
//! # Sticky column
//!
//! A vertical move tries to keep the column the user was on. Moving from
//! a long line through a short one and back should land on the original
//! column, not the short line's end. The coordinator records the intended
//! column on the first vertical move of a traversal and keeps aiming for
//! it until something else — a horizontal move or an edit — ends the
//! traversal.
//!
//! # Locality
//!
//! Horizontal movement never crosses line boundaries: `left` at column 0
//! and `right` at end of line are no-ops, not wraps.

use crate::line::Line;

// ---------------------------------------------------------------------------
// Directions
// ---------------------------------------------------------------------------

/// Vertical movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vertical {
    Up,
    Down,
}

impl Vertical {
    /// Focus-index delta for this direction.
    #[inline]
    #[must_use]
    pub const fn delta(self) -> isize {
        match self {
            Self::Up => -1,
            Self::Down => 1,
        }
    }
}

/// Horizontal movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Horizontal {
    Left,
    Right,
}

impl Horizontal {
    /// Column delta for this direction.
    #[inline]
    #[must_use]
    pub const fn delta(self) -> isize {
        match self {
            Self::Left => -1,
            Self::Right => 1,
        }
    }
}

// ---------------------------------------------------------------------------
// CursorCoordinator
// ---------------------------------------------------------------------------

/// Translates navigation intents into cursor-column updates on the focused
/// line and its vertical neighbors.
///
/// Owned by the buffer. Holds only the sticky column; the lines themselves
/// hold their cursor state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CursorCoordinator {
    /// The column a vertical traversal is trying to preserve. `None` when
    /// not mid-traversal.
    sticky_col: Option<usize>,
}

impl CursorCoordinator {
    #[must_use]
    pub const fn new() -> Self {
        Self { sticky_col: None }
    }

    /// The column the current vertical traversal is aiming for, if any.
    #[inline]
    #[must_use]
    pub const fn sticky_col(&self) -> Option<usize> {
        self.sticky_col
    }

    /// End the current vertical traversal. The next vertical move records
    /// a fresh intended column. Called on horizontal moves and edits.
    #[inline]
    pub const fn end_traversal(&mut self) {
        self.sticky_col = None;
    }

    /// Move focus one line up or down.
    ///
    /// Returns the new focus index, or `None` when the move would leave
    /// the buffer (a silent no-op — the caller keeps its focus). The
    /// target line's cursor is set to the intended column, clamped to the
    /// target's length.
    pub fn move_vertical(
        &mut self,
        lines: &mut [Line],
        focus: usize,
        dir: Vertical,
    ) -> Option<usize> {
        let target = focus.checked_add_signed(dir.delta())?;
        if target >= lines.len() {
            return None;
        }

        let intended = *self.sticky_col.get_or_insert(lines[focus].cursor_col());
        lines[target].set_cursor_col(intended);
        Some(target)
    }

    /// Move the focused line's cursor one column left or right, clamped
    /// to the line. Ends any vertical traversal.
    pub fn move_horizontal(&mut self, line: &mut Line, dir: Horizontal) {
        self.sticky_col = None;
        line.move_column(dir.delta());
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
