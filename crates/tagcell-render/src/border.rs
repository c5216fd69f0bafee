#![forbid(unsafe_code)]

//! Box-drawing glyphs and border joining.
//!
//! When two bordered regions share an edge, the second border drawn into a
//! cell should merge with the first rather than overwrite it: a horizontal
//! line crossing a vertical one becomes `┼`, a corner meeting a line becomes
//! a T-junction, and so on. [`print_joined_border`] does this for single-line
//! glyphs using a fixed joint table.

use crate::buffer::Surface;
use crate::cell::PackedRgba;

/// `─`
pub const HORIZONTAL: char = '\u{2500}';
/// `│`
pub const VERTICAL: char = '\u{2502}';
/// `┌`
pub const TOP_LEFT: char = '\u{250c}';
/// `┐`
pub const TOP_RIGHT: char = '\u{2510}';
/// `└`
pub const BOTTOM_LEFT: char = '\u{2514}';
/// `┘`
pub const BOTTOM_RIGHT: char = '\u{2518}';
/// `├`
pub const LEFT_T: char = '\u{251c}';
/// `┤`
pub const RIGHT_T: char = '\u{2524}';
/// `┬`
pub const TOP_T: char = '\u{252c}';
/// `┴`
pub const BOTTOM_T: char = '\u{2534}';
/// `┼`
pub const CROSS: char = '\u{253c}';

/// `═`
pub const DOUBLE_HORIZONTAL: char = '\u{2550}';
/// `║`
pub const DOUBLE_VERTICAL: char = '\u{2551}';
/// `╔`
pub const DOUBLE_TOP_LEFT: char = '\u{2554}';
/// `╗`
pub const DOUBLE_TOP_RIGHT: char = '\u{2557}';
/// `╚`
pub const DOUBLE_BOTTOM_LEFT: char = '\u{255a}';
/// `╝`
pub const DOUBLE_BOTTOM_RIGHT: char = '\u{255d}';

/// `…`
pub const ELLIPSIS: char = '\u{2026}';

/// Characters used to draw a border around a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderChars {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

impl BorderChars {
    /// Single-line box-drawing characters. These are the ones that join.
    pub const SQUARE: Self = Self {
        top_left: TOP_LEFT,
        top_right: TOP_RIGHT,
        bottom_left: BOTTOM_LEFT,
        bottom_right: BOTTOM_RIGHT,
        horizontal: HORIZONTAL,
        vertical: VERTICAL,
    };

    /// Double-line border, typically used to mark focus.
    pub const DOUBLE: Self = Self {
        top_left: DOUBLE_TOP_LEFT,
        top_right: DOUBLE_TOP_RIGHT,
        bottom_left: DOUBLE_BOTTOM_LEFT,
        bottom_right: DOUBLE_BOTTOM_RIGHT,
        horizontal: DOUBLE_HORIZONTAL,
        vertical: DOUBLE_VERTICAL,
    };
}

/// Joint table: `(lower, higher) -> joined`, sorted by key.
///
/// Every unordered pair of distinct single-line glyphs appears exactly once,
/// with the lower code point first.
const JOINTS: [((char, char), char); 55] = [
    ((HORIZONTAL, VERTICAL), CROSS),
    ((HORIZONTAL, TOP_LEFT), TOP_T),
    ((HORIZONTAL, TOP_RIGHT), TOP_T),
    ((HORIZONTAL, BOTTOM_LEFT), BOTTOM_T),
    ((HORIZONTAL, BOTTOM_RIGHT), BOTTOM_T),
    ((HORIZONTAL, LEFT_T), CROSS),
    ((HORIZONTAL, RIGHT_T), CROSS),
    ((HORIZONTAL, TOP_T), TOP_T),
    ((HORIZONTAL, BOTTOM_T), BOTTOM_T),
    ((HORIZONTAL, CROSS), CROSS),
    ((VERTICAL, TOP_LEFT), LEFT_T),
    ((VERTICAL, TOP_RIGHT), RIGHT_T),
    ((VERTICAL, BOTTOM_LEFT), LEFT_T),
    ((VERTICAL, BOTTOM_RIGHT), RIGHT_T),
    ((VERTICAL, LEFT_T), LEFT_T),
    ((VERTICAL, RIGHT_T), RIGHT_T),
    ((VERTICAL, TOP_T), CROSS),
    ((VERTICAL, BOTTOM_T), CROSS),
    ((VERTICAL, CROSS), CROSS),
    ((TOP_LEFT, TOP_RIGHT), TOP_T),
    ((TOP_LEFT, BOTTOM_LEFT), LEFT_T),
    ((TOP_LEFT, BOTTOM_RIGHT), CROSS),
    ((TOP_LEFT, LEFT_T), LEFT_T),
    ((TOP_LEFT, RIGHT_T), CROSS),
    ((TOP_LEFT, TOP_T), TOP_T),
    ((TOP_LEFT, BOTTOM_T), CROSS),
    ((TOP_LEFT, CROSS), CROSS),
    ((TOP_RIGHT, BOTTOM_LEFT), CROSS),
    ((TOP_RIGHT, BOTTOM_RIGHT), RIGHT_T),
    ((TOP_RIGHT, LEFT_T), CROSS),
    ((TOP_RIGHT, RIGHT_T), RIGHT_T),
    ((TOP_RIGHT, TOP_T), TOP_T),
    ((TOP_RIGHT, BOTTOM_T), CROSS),
    ((TOP_RIGHT, CROSS), CROSS),
    ((BOTTOM_LEFT, BOTTOM_RIGHT), BOTTOM_T),
    ((BOTTOM_LEFT, LEFT_T), LEFT_T),
    ((BOTTOM_LEFT, RIGHT_T), CROSS),
    ((BOTTOM_LEFT, TOP_T), CROSS),
    ((BOTTOM_LEFT, BOTTOM_T), BOTTOM_T),
    ((BOTTOM_LEFT, CROSS), CROSS),
    ((BOTTOM_RIGHT, LEFT_T), CROSS),
    ((BOTTOM_RIGHT, RIGHT_T), RIGHT_T),
    ((BOTTOM_RIGHT, TOP_T), CROSS),
    ((BOTTOM_RIGHT, BOTTOM_T), BOTTOM_T),
    ((BOTTOM_RIGHT, CROSS), CROSS),
    ((LEFT_T, RIGHT_T), CROSS),
    ((LEFT_T, TOP_T), CROSS),
    ((LEFT_T, BOTTOM_T), CROSS),
    ((LEFT_T, CROSS), CROSS),
    ((RIGHT_T, TOP_T), CROSS),
    ((RIGHT_T, BOTTOM_T), CROSS),
    ((RIGHT_T, CROSS), CROSS),
    ((TOP_T, BOTTOM_T), CROSS),
    ((TOP_T, CROSS), CROSS),
    ((BOTTOM_T, CROSS), CROSS),
];

/// The glyph that represents `existing` and `new` sharing one cell.
///
/// Identical glyphs join to themselves. Pairs without a table entry (double
/// lines, text, blanks) resolve to `new`.
pub fn join_glyphs(existing: char, new: char) -> char {
    if existing == new {
        return new;
    }
    let key = if existing < new {
        (existing, new)
    } else {
        (new, existing)
    };
    match JOINTS.binary_search_by(|(k, _)| k.cmp(&key)) {
        Ok(i) => JOINTS[i].1,
        Err(_) => new,
    }
}

/// Print a border glyph at `(x, y)`, joining it with whatever border glyph is
/// already there.
///
/// The cell's background and attributes are kept; its foreground becomes
/// `color`. Positions outside the surface are ignored.
pub fn print_joined_border<S: Surface + ?Sized>(
    surface: &mut S,
    x: i32,
    y: i32,
    glyph: char,
    color: Option<PackedRgba>,
) {
    let Some(existing) = surface.cell(x, y) else {
        return;
    };
    let joined = join_glyphs(existing.content, glyph);
    if joined == glyph && existing.content != glyph {
        tagcell_core::trace!(x, y, existing = ?existing.content, new = ?glyph, "no joint, overwriting");
    }
    surface.set_cell(x, y, existing.with_char(joined).with_fg(color));
}

/// Draw a single-line box outline whose glyphs join with borders already on
/// the surface.
///
/// Boxes narrower or shorter than two cells draw nothing.
pub fn draw_joined_box<S: Surface + ?Sized>(
    surface: &mut S,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    color: Option<PackedRgba>,
) {
    if width < 2 || height < 2 {
        return;
    }
    let chars = BorderChars::SQUARE;
    let right = x.saturating_add(width - 1);
    let bottom = y.saturating_add(height - 1);

    for cx in x.saturating_add(1)..right {
        print_joined_border(surface, cx, y, chars.horizontal, color);
        print_joined_border(surface, cx, bottom, chars.horizontal, color);
    }
    for cy in y.saturating_add(1)..bottom {
        print_joined_border(surface, x, cy, chars.vertical, color);
        print_joined_border(surface, right, cy, chars.vertical, color);
    }
    print_joined_border(surface, x, y, chars.top_left, color);
    print_joined_border(surface, right, y, chars.top_right, color);
    print_joined_border(surface, x, bottom, chars.bottom_left, color);
    print_joined_border(surface, right, bottom, chars.bottom_right, color);
}
