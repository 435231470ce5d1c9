//! The command prompt — a single-line input field.
//!
//! The footer line where commands are typed. It reuses [`Line`] for its
//! text-plus-cursor state, interprets a smaller key set than the buffer
//! (no vertical movement, no splitting), and hands the typed text to the
//! caller on `enter`. What happens to the submitted text — resolving it
//! against the command registry — is the caller's business.

use crate::key::Key;
use crate::line::Line;

/// Single-line editable input with a cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Prompt {
    line: Line,
}

impl Prompt {
    #[must_use]
    pub fn new() -> Self {
        Self {
            line: Line::new(""),
        }
    }

    /// The text typed so far.
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        self.line.text()
    }

    /// Cursor column within the prompt.
    #[inline]
    #[must_use]
    pub const fn cursor_col(&self) -> usize {
        self.line.cursor_col()
    }

    /// Handle one key event.
    ///
    /// Printable characters, backspace, and left/right edit the field.
    /// `enter` submits: the typed text is returned and the field clears.
    /// Every other key is ignored — the prompt is not a pass-through
    /// surface.
    pub fn keypress(&mut self, key: &Key) -> Option<String> {
        match key {
            Key::Char(ch) => self.line.insert_char(*ch),
            Key::Backspace => self.line.delete_before_cursor(),
            Key::Left => self.line.move_column(-1),
            Key::Right => self.line.move_column(1),
            Key::Enter => {
                let submitted = std::mem::take(&mut self.line).into_text();
                log::debug!("prompt submitted: {submitted:?}");
                return Some(submitted);
            }
            _ => {}
        }
        None
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(prompt: &mut Prompt, text: &str) {
        for ch in text.chars() {
            assert_eq!(prompt.keypress(&Key::Char(ch)), None);
        }
    }

    #[test]
    fn typing_builds_text() {
        let mut prompt = Prompt::new();
        type_text(&mut prompt, "open foo.txt");
        assert_eq!(prompt.text(), "open foo.txt");
        assert_eq!(prompt.cursor_col(), 12);
    }

    #[test]
    fn backspace_and_arrows_edit_locally() {
        let mut prompt = Prompt::new();
        type_text(&mut prompt, "svae");
        prompt.keypress(&Key::Left);
        prompt.keypress(&Key::Left);
        prompt.keypress(&Key::Backspace);
        assert_eq!(prompt.text(), "sae");
        prompt.keypress(&Key::Right);
        prompt.keypress(&Key::Char('v'));
        assert_eq!(prompt.text(), "save");
    }

    #[test]
    fn enter_submits_and_clears() {
        let mut prompt = Prompt::new();
        type_text(&mut prompt, "save");
        assert_eq!(prompt.keypress(&Key::Enter), Some("save".to_string()));
        assert_eq!(prompt.text(), "");
        assert_eq!(prompt.cursor_col(), 0);
    }

    #[test]
    fn enter_on_empty_prompt_submits_empty() {
        let mut prompt = Prompt::new();
        assert_eq!(prompt.keypress(&Key::Enter), Some(String::new()));
    }

    #[test]
    fn unrelated_keys_are_ignored() {
        let mut prompt = Prompt::new();
        type_text(&mut prompt, "sav");
        assert_eq!(prompt.keypress(&Key::Up), None);
        assert_eq!(prompt.keypress(&Key::Other("f5".into())), None);
        assert_eq!(prompt.text(), "sav");
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut prompt = Prompt::new();
        prompt.keypress(&Key::Left);
        assert_eq!(prompt.cursor_col(), 0);
        type_text(&mut prompt, "ab");
        prompt.keypress(&Key::Right);
        assert_eq!(prompt.cursor_col(), 2);
    }
}
