//! Terminal styles and the category-to-style table.
//!
//! A [`Style`] is a fully resolved terminal look: foreground, background,
//! and SGR attributes. The [`StyleTable`] maps every token [`Category`] to
//! one, with a default palette that callers can override per category.
//! Render-time cost is a plain array lookup — no color math on the paint
//! path.

use std::fmt;

use crate::token::Category;

// ---------------------------------------------------------------------------
// Attributes
// ---------------------------------------------------------------------------

bitflags::bitflags! {
    /// Text attributes as a compact bitfield.
    ///
    /// Each flag maps directly to an SGR (Select Graphic Rendition)
    /// parameter. Combine with bitwise OR:
    ///
    /// ```
    /// use lined_syntax::Attr;
    ///
    /// let attrs = Attr::BOLD | Attr::UNDERLINE;
    /// assert!(attrs.contains(Attr::BOLD));
    /// assert!(!attrs.contains(Attr::ITALIC));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct Attr: u8 {
        /// SGR 1 — increased intensity.
        const BOLD      = 1 << 0;
        /// SGR 2 — decreased intensity (faint).
        const DIM       = 1 << 1;
        /// SGR 3 — italic or oblique.
        const ITALIC    = 1 << 2;
        /// SGR 4 — straight underline.
        const UNDERLINE = 1 << 3;
        /// SGR 7 — swap foreground and background.
        const INVERSE   = 1 << 4;
    }
}

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// A terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Color {
    /// The terminal's own default — respects the user's terminal theme.
    #[default]
    Default,
    /// ANSI 256-color palette index.
    Ansi256(u8),
    /// 24-bit true color.
    Rgb(u8, u8, u8),
}

// ---------------------------------------------------------------------------
// Style
// ---------------------------------------------------------------------------

/// A resolved display style for one token category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Style {
    pub fg: Color,
    pub bg: Color,
    pub attrs: Attr,
}

/// SGR sequence that clears all styling.
pub const RESET: &str = "\x1b[0m";

impl Style {
    /// A style with only a foreground color.
    #[must_use]
    pub const fn fg_only(fg: Color) -> Self {
        Self {
            fg,
            bg: Color::Default,
            attrs: Attr::empty(),
        }
    }

    /// A style with a foreground color and attributes.
    #[must_use]
    pub const fn fg_attrs(fg: Color, attrs: Attr) -> Self {
        Self {
            fg,
            bg: Color::Default,
            attrs,
        }
    }

    /// The SGR escape sequence that applies this style.
    ///
    /// Always starts from a reset (`0`) so styles never leak between
    /// adjacent spans.
    #[must_use]
    pub fn sgr(&self) -> String {
        let mut seq = String::from("\x1b[0");

        if self.attrs.contains(Attr::BOLD) {
            seq.push_str(";1");
        }
        if self.attrs.contains(Attr::DIM) {
            seq.push_str(";2");
        }
        if self.attrs.contains(Attr::ITALIC) {
            seq.push_str(";3");
        }
        if self.attrs.contains(Attr::UNDERLINE) {
            seq.push_str(";4");
        }
        if self.attrs.contains(Attr::INVERSE) {
            seq.push_str(";7");
        }

        push_color(&mut seq, 38, self.fg);
        push_color(&mut seq, 48, self.bg);

        seq.push('m');
        seq
    }
}

impl fmt::Display for Style {
    /// Writes the SGR escape sequence.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sgr())
    }
}

fn push_color(seq: &mut String, base: u8, color: Color) {
    use fmt::Write as _;
    match color {
        Color::Default => {}
        // Writing to a String cannot fail.
        Color::Ansi256(idx) => {
            let _ = write!(seq, ";{base};5;{idx}");
        }
        Color::Rgb(r, g, b) => {
            let _ = write!(seq, ";{base};2;{r};{g};{b}");
        }
    }
}

// ---------------------------------------------------------------------------
// StyleTable
// ---------------------------------------------------------------------------

/// The category-to-style mapping used by the render adapter.
///
/// Constructed with a built-in palette; callers configure individual
/// categories with [`StyleTable::set`]. One entry per [`Category`], indexed
/// by [`Category::index`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleTable {
    styles: [Style; Category::COUNT],
}

impl StyleTable {
    /// Look up the style for a category.
    #[inline]
    #[must_use]
    pub const fn style(&self, category: Category) -> Style {
        self.styles[category.index()]
    }

    /// Override the style for one category.
    #[inline]
    pub const fn set(&mut self, category: Category, style: Style) {
        self.styles[category.index()] = style;
    }
}

impl Default for StyleTable {
    /// The built-in palette.
    ///
    /// Sticks to the 16-color ANSI range so it reads sensibly on any
    /// terminal theme: green keywords, red strings and numbers, gray
    /// comments, everything else in the terminal's default foreground.
    fn default() -> Self {
        let mut styles = [Style::default(); Category::COUNT];
        styles[Category::Keyword.index()] = Style::fg_only(Color::Ansi256(2));
        styles[Category::Number.index()] = Style::fg_only(Color::Ansi256(1));
        styles[Category::Str.index()] = Style::fg_only(Color::Ansi256(9));
        styles[Category::Comment.index()] = Style::fg_only(Color::Ansi256(250));
        styles[Category::Operator.index()] = Style::fg_only(Color::Ansi256(7));
        Self { styles }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_emits_plain_reset() {
        assert_eq!(Style::default().sgr(), "\x1b[0m");
    }

    #[test]
    fn sgr_with_attrs_and_fg() {
        let style = Style::fg_attrs(Color::Ansi256(2), Attr::BOLD);
        assert_eq!(style.sgr(), "\x1b[0;1;38;5;2m");
    }

    #[test]
    fn sgr_with_rgb_bg() {
        let style = Style {
            fg: Color::Default,
            bg: Color::Rgb(10, 20, 30),
            attrs: Attr::empty(),
        };
        assert_eq!(style.sgr(), "\x1b[0;48;2;10;20;30m");
    }

    #[test]
    fn display_matches_sgr() {
        let style = Style::fg_only(Color::Ansi256(250));
        assert_eq!(style.to_string(), style.sgr());
    }

    #[test]
    fn attr_combination() {
        let attrs = Attr::BOLD | Attr::INVERSE;
        assert!(attrs.contains(Attr::BOLD));
        assert!(attrs.contains(Attr::INVERSE));
        assert!(!attrs.contains(Attr::DIM));
    }

    #[test]
    fn table_default_colors_keywords() {
        let table = StyleTable::default();
        assert_eq!(table.style(Category::Keyword).fg, Color::Ansi256(2));
        assert_eq!(table.style(Category::Text), Style::default());
    }

    #[test]
    fn table_set_overrides_one_category() {
        let mut table = StyleTable::default();
        let loud = Style::fg_attrs(Color::Rgb(255, 0, 0), Attr::BOLD);
        table.set(Category::Comment, loud);
        assert_eq!(table.style(Category::Comment), loud);
        // Other categories untouched.
        assert_eq!(table.style(Category::Keyword).fg, Color::Ansi256(2));
    }
}
