//! # lined-syntax — tokenization and display styles for lined
//!
//! This crate is the display-classification side of the editor:
//!
//! - **[`token`]** — `Category` (the fixed set of display classes) and
//!   `Token` (one classified span of a line)
//! - **[`lexer`]** — `tokenize`, a pure function from line text to an
//!   ordered, lossless token sequence
//! - **[`style`]** — `Color`, `Attr`, `Style`, and the `StyleTable`
//!   mapping each category to a terminal style
//!
//! The tokenizer is stateless: it never looks at more than one line and
//! carries no context between calls, so it is safe to run on every paint.

pub mod lexer;
pub mod style;
pub mod token;

pub use lexer::tokenize;
pub use style::{Attr, Color, Style, StyleTable};
pub use token::{Category, Token};
