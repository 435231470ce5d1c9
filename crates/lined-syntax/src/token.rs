//! Token categories and spans.
//!
//! A line of text is classified into an ordered sequence of [`Token`]s.
//! The sequence is lossless: concatenating the span texts reproduces the
//! input exactly. Categories are a small fixed set — the style table maps
//! each one to a terminal style, and unknown syntax simply falls back to
//! [`Category::Text`].

use std::fmt;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Display class of a token span.
///
/// Deliberately coarse. The tokenizer recognizes the shapes that are worth
/// coloring differently on screen, nothing more — there is no grammar here,
/// and no attempt to detect which language the file is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// A reserved word (`fn`, `def`, `return`, ...).
    Keyword,
    /// An identifier that is not a keyword.
    Ident,
    /// An integer or float literal.
    Number,
    /// A string literal, including its quotes.
    Str,
    /// A line comment, from its marker to end of line.
    Comment,
    /// A run of operator characters (`+`, `==`, `->`, ...).
    Operator,
    /// A single bracket, separator, or other punctuation character.
    Punct,
    /// A run of whitespace.
    Whitespace,
    /// Anything the tokenizer does not recognize.
    Text,
}

impl Category {
    /// Every category, in a fixed order. Used to size and index the
    /// style table.
    pub const ALL: [Self; 9] = [
        Self::Keyword,
        Self::Ident,
        Self::Number,
        Self::Str,
        Self::Comment,
        Self::Operator,
        Self::Punct,
        Self::Whitespace,
        Self::Text,
    ];

    /// Number of categories.
    pub const COUNT: usize = Self::ALL.len();

    /// Stable index of this category in [`Category::ALL`].
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Keyword => 0,
            Self::Ident => 1,
            Self::Number => 2,
            Self::Str => 3,
            Self::Comment => 4,
            Self::Operator => 5,
            Self::Punct => 6,
            Self::Whitespace => 7,
            Self::Text => 8,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Keyword => "keyword",
            Self::Ident => "ident",
            Self::Number => "number",
            Self::Str => "string",
            Self::Comment => "comment",
            Self::Operator => "operator",
            Self::Punct => "punct",
            Self::Whitespace => "whitespace",
            Self::Text => "text",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// Token
// ---------------------------------------------------------------------------

/// One classified contiguous span of a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub category: Category,
    pub text: String,
}

impl Token {
    /// Create a token from a category and its span text.
    #[must_use]
    pub fn new(category: Category, text: impl Into<String>) -> Self {
        Self {
            category,
            text: text.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_all_order() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn count_matches_all_len() {
        assert_eq!(Category::COUNT, Category::ALL.len());
    }

    #[test]
    fn display_names() {
        assert_eq!(Category::Keyword.to_string(), "keyword");
        assert_eq!(Category::Str.to_string(), "string");
        assert_eq!(Category::Text.to_string(), "text");
    }

    #[test]
    fn token_new() {
        let token = Token::new(Category::Ident, "foo");
        assert_eq!(token.category, Category::Ident);
        assert_eq!(token.text, "foo");
    }
}
