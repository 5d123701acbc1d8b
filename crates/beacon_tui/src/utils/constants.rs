//! Spacing and sizing constants for the indicator feed.
//!
//! Use these when building layout or rendering so padding and spacing
//! stay uniform across indicators, header, and footer.

/// Horizontal padding in characters (each side of the feed body).
pub const HORIZONTAL_PADDING: u16 = 2;

/// Left indent for indicator rows (two spaces).
pub const LEFT_PADDING: &str = "  ";

/// Indent for the paired result line (↳), beyond [LEFT_PADDING].
pub const RESULT_INDENT: &str = "    ";

/// Blank lines between feed items.
pub const ITEM_SPACING_LINES: usize = 1;
