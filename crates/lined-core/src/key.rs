//! The input contract between the core and the key-event source.
//!
//! The outer input loop translates whatever its terminal library produces
//! into [`Key`] values. The core interprets printable characters and six
//! named keys; everything else is handed back untouched as
//! [`KeyOutcome::PassThrough`] so the outer layer can use it for scrolling,
//! focus switching, and the like.

use std::fmt;

// ---------------------------------------------------------------------------
// Key
// ---------------------------------------------------------------------------

/// A single key event.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable character.
    Char(char),
    Backspace,
    Enter,
    Left,
    Right,
    Up,
    Down,
    /// Any key the core does not interpret, carried by name.
    Other(String),
}

impl Key {
    /// Build a key from a textual key name, the form input backends emit.
    ///
    /// Single-character names become [`Key::Char`]; the six recognized
    /// names map to their variants; anything else is [`Key::Other`].
    #[must_use]
    pub fn named(name: &str) -> Self {
        match name {
            "backspace" => Self::Backspace,
            "enter" => Self::Enter,
            "left" => Self::Left,
            "right" => Self::Right,
            "up" => Self::Up,
            "down" => Self::Down,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Self::Char(ch),
                    _ => Self::Other(name.to_string()),
                }
            }
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(ch) => write!(f, "{ch}"),
            Self::Backspace => f.write_str("backspace"),
            Self::Enter => f.write_str("enter"),
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
            Self::Up => f.write_str("up"),
            Self::Down => f.write_str("down"),
            Self::Other(name) => f.write_str(name),
        }
    }
}

// ---------------------------------------------------------------------------
// KeyOutcome
// ---------------------------------------------------------------------------

/// What the buffer did with a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The key was interpreted and any resulting mutation is done.
    Consumed,
    /// The key is not part of the core's contract. It is returned
    /// unmodified for the outer layer to handle.
    PassThrough(Key),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
