#![forbid(unsafe_code)]

//! Display width of glyphs.
//!
//! Every width measurement in the workspace goes through these two
//! functions. [`display_width`] is defined as the sum of [`char_width`] over
//! the string, so that a width measured up front always agrees with the
//! column count reached by a glyph-by-glyph render walk.

use unicode_width::UnicodeWidthChar;

/// Number of cells `ch` occupies: 0, 1 or 2.
///
/// Control characters and combining marks are zero width; East Asian wide and
/// fullwidth characters and emoji presentation sequences are two.
#[inline]
pub fn char_width(ch: char) -> usize {
    if ch.is_ascii() {
        return match ch {
            ' '..='~' => 1,
            _ => 0,
        };
    }
    UnicodeWidthChar::width(ch).unwrap_or(0)
}

/// Number of cells `text` occupies.
#[inline]
pub fn display_width(text: &str) -> usize {
    if text.bytes().all(|b| (0x20..=0x7E).contains(&b)) {
        return text.len();
    }
    text.chars().map(char_width).sum()
}
