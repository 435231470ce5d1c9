//! The line tokenizer — a pure function from text to token spans.
//!
//! `tokenize` classifies a single line of text into an ordered sequence of
//! [`Token`]s. It is a rule table, not a parser: at each position the rules
//! are tried in order, the first match wins, and anything nothing matches
//! becomes a one-character [`Category::Text`] span. Two consequences fall
//! out of that design:
//!
//! - **Lossless**: every character of the input lands in exactly one span,
//!   so concatenating the spans reproduces the line byte-for-byte.
//! - **Stateless**: no context survives between calls. A string literal
//!   left open on one line does not bleed onto the next — each line is
//!   tokenized in isolation, and an unterminated string is simply colored
//!   to end of line.
//!
//! There is no language detection. The rule set recognizes the lexical
//! shapes shared by most curly-brace and indentation languages (comments,
//! strings, numbers, identifiers, operators) plus a keyword list broad
//! enough to be useful for the common cases.

use std::sync::OnceLock;

use regex::Regex;

use crate::token::{Category, Token};

// ---------------------------------------------------------------------------
// Keywords
// ---------------------------------------------------------------------------

/// Reserved words promoted from `Ident` to `Keyword`.
///
/// Sorted for binary search. Covers the overlap of common languages rather
/// than any single one — the tokenizer does not know what language it is
/// looking at.
const KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break",
    "class", "const", "continue", "def", "del", "elif", "else", "enum",
    "except", "false", "finally", "fn", "for", "from", "global", "if", "impl",
    "import", "in", "is", "lambda", "let", "loop", "match", "mod", "mut",
    "nonlocal", "not", "or", "pass", "pub", "raise", "return", "self",
    "static", "struct", "trait", "true", "try", "use", "while", "with",
    "yield",
];

fn is_keyword(word: &str) -> bool {
    KEYWORDS.binary_search(&word).is_ok()
}

// ---------------------------------------------------------------------------
// Rule table
// ---------------------------------------------------------------------------

/// One lexer rule: an anchored pattern and the category its matches get.
struct Rule {
    category: Category,
    re: Regex,
}

impl Rule {
    fn new(category: Category, pattern: &str) -> Self {
        Self {
            category,
            re: Regex::new(pattern).expect("lexer rule pattern must compile"),
        }
    }
}

/// The compiled rule table. Built once per process (see [`tokenize`]).
struct Lexer {
    rules: Vec<Rule>,
}

impl Lexer {
    fn new() -> Self {
        // Order matters: comments before operators (`//` would otherwise
        // lex as an operator run), strings before punctuation.
        let rules = vec![
            Rule::new(Category::Whitespace, r"\A\s+"),
            Rule::new(Category::Comment, r"\A(?://|#).*"),
            Rule::new(
                Category::Str,
                r#"\A(?:"(?:\\.|[^"\\])*"?|'(?:\\.|[^'\\])*'?)"#,
            ),
            Rule::new(Category::Number, r"\A\d[\d_]*(?:\.\d+)?(?:[eE][+-]?\d+)?"),
            Rule::new(Category::Ident, r"\A[A-Za-z_][A-Za-z0-9_]*"),
            Rule::new(Category::Operator, r"\A[-+*/%=<>!&|^~?]+"),
            Rule::new(Category::Punct, r"\A[()\[\]{}.,;:@$\\]"),
        ];
        Self { rules }
    }

    fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut rest = text;

        'scan: while !rest.is_empty() {
            for rule in &self.rules {
                if let Some(m) = rule.re.find(rest) {
                    let span = &rest[..m.end()];
                    let category = if rule.category == Category::Ident && is_keyword(span) {
                        Category::Keyword
                    } else {
                        rule.category
                    };
                    tokens.push(Token::new(category, span));
                    rest = &rest[m.end()..];
                    continue 'scan;
                }
            }
            // Nothing matched: one character of plain text.
            let len = rest.chars().next().map_or(1, char::len_utf8);
            tokens.push(Token::new(Category::Text, &rest[..len]));
            rest = &rest[len..];
        }

        tokens
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Tokenize one line of text.
///
/// Pure and stateless — safe to call on every paint. The rule table is
/// compiled on first use and shared for the process lifetime.
#[must_use]
pub fn tokenize(text: &str) -> Vec<Token> {
    static LEXER: OnceLock<Lexer> = OnceLock::new();
    LEXER.get_or_init(Lexer::new).tokenize(text)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    /// Concatenation of span texts must reproduce the input exactly.
    fn assert_lossless(text: &str) {
        let joined: String = tokenize(text).iter().map(|t| t.text.as_str()).collect();
        assert_eq!(joined, text);
    }

    #[test]
    fn keywords_are_sorted() {
        let mut sorted = KEYWORDS.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, KEYWORDS);
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn lossless_on_code_samples() {
        assert_lossless("def greet(name):");
        assert_lossless("    return 'hello ' + name  # trailing comment");
        assert_lossless("let x = foo(1_000, 2.5e-3) // done");
        assert_lossless("if a == b { c |= 0 }");
        assert_lossless("\t \t");
        assert_lossless("¡unrecognized ☃ glyphs!");
    }

    #[test]
    fn classifies_keywords_and_idents() {
        let tokens = tokenize("def greet");
        assert_eq!(tokens[0], Token::new(Category::Keyword, "def"));
        assert_eq!(tokens[1], Token::new(Category::Whitespace, " "));
        assert_eq!(tokens[2], Token::new(Category::Ident, "greet"));
    }

    #[test]
    fn classifies_strings() {
        let tokens = tokenize(r#"x = "hi there""#);
        assert_eq!(tokens.last().unwrap().category, Category::Str);
        assert_eq!(tokens.last().unwrap().text, r#""hi there""#);
    }

    #[test]
    fn string_with_escapes() {
        let tokens = tokenize(r#""a \" b""#);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].category, Category::Str);
    }

    #[test]
    fn unterminated_string_runs_to_end_of_line() {
        let tokens = tokenize(r#"x = "oops"#);
        let last = tokens.last().unwrap();
        assert_eq!(last.category, Category::Str);
        assert_eq!(last.text, r#""oops"#);
    }

    #[test]
    fn classifies_comments() {
        let tokens = tokenize("x # the rest");
        assert_eq!(tokens.last().unwrap(), &Token::new(Category::Comment, "# the rest"));

        let tokens = tokenize("y = 1 // slash style");
        assert_eq!(tokens.last().unwrap().category, Category::Comment);
    }

    #[test]
    fn slashes_prefer_comment_over_operator() {
        let tokens = tokenize("a / b // c");
        assert_eq!(tokens[2], Token::new(Category::Operator, "/"));
        assert_eq!(tokens.last().unwrap().category, Category::Comment);
    }

    #[test]
    fn classifies_numbers() {
        let categories: Vec<Category> =
            tokenize("1_000 2.5 3e10").iter().map(|t| t.category).collect();
        assert_eq!(
            categories,
            [
                Category::Number,
                Category::Whitespace,
                Category::Number,
                Category::Whitespace,
                Category::Number,
            ]
        );
    }

    #[test]
    fn classifies_punctuation_and_operators() {
        let tokens = tokenize("(a->b);");
        assert_eq!(tokens[0], Token::new(Category::Punct, "("));
        assert_eq!(tokens[2], Token::new(Category::Operator, "->"));
        assert_eq!(tokens[4], Token::new(Category::Punct, ")"));
        assert_eq!(tokens[5], Token::new(Category::Punct, ";"));
    }

    #[test]
    fn unrecognized_chars_become_text() {
        let tokens = tokenize("☃");
        assert_eq!(tokens, [Token::new(Category::Text, "☃")]);
    }

    #[test]
    fn whitespace_runs_are_single_spans() {
        let tokens = tokenize("a   b");
        assert_eq!(tokens[1], Token::new(Category::Whitespace, "   "));
    }
}
