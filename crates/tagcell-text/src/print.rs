#![forbid(unsafe_code)]

//! Printing tagged text into a width-bounded row of cells.
//!
//! Every alignment is reduced to a left-aligned walk over a rune range of
//! the decomposed text: right alignment keeps the longest suffix that fits,
//! center alignment shifts short text and trims long text from both ends.
//! Text style is overlaid onto each cell already on the surface, so printing
//! over a colored background keeps the background unless a tag replaces it.
//!
//! ```
//! use tagcell_render::buffer::Buffer;
//! use tagcell_render::cell::PackedRgba;
//! use tagcell_text::print::{Align, print};
//!
//! let mut buf = Buffer::new(10, 1);
//! let (runes, width) = print(&mut buf, "[red]hi", 0, 0, 10, Align::Right, PackedRgba::WHITE);
//! assert_eq!((runes, width), (2, 2));
//! assert_eq!(buf.row_text(0), "        hi");
//! assert_eq!(buf.get(8, 0).and_then(|c| c.fg), Some(PackedRgba::RED));
//! ```

use tagcell_render::buffer::Surface;
use tagcell_render::cell::{Cell, PackedRgba};
use tagcell_style::{ColorResolver, NamedColors, Style};

use crate::decompose::{Decomposition, decompose};
use crate::resolve::apply_style_tag;

/// Color of text printed with [`print_simple`].
pub const PRIMARY_TEXT_COLOR: PackedRgba = PackedRgba::WHITE;

/// Horizontal placement within the available width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Prints tagged text, resolving color names through a [`ColorResolver`].
///
/// The free functions in this module use [`Printer::default`], which
/// resolves through [`NamedColors`].
#[derive(Clone, Copy)]
pub struct Printer<'r> {
    resolver: &'r dyn ColorResolver,
}

impl Default for Printer<'static> {
    fn default() -> Self {
        Self::new(&NamedColors)
    }
}

impl std::fmt::Debug for Printer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Printer").finish_non_exhaustive()
    }
}

impl<'r> Printer<'r> {
    pub fn new(resolver: &'r dyn ColorResolver) -> Self {
        Self { resolver }
    }

    /// The resolver color names go through.
    pub fn resolver(&self) -> &'r dyn ColorResolver {
        self.resolver
    }

    /// Print `raw` at `(x, y)` within `max_width` cells in `color`.
    ///
    /// Attributes already on the surface are kept unless a tag sets them.
    /// Returns the number of runes and cells drawn.
    #[allow(clippy::too_many_arguments)]
    pub fn print<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        raw: &str,
        x: i32,
        y: i32,
        max_width: i32,
        align: Align,
        color: PackedRgba,
    ) -> (usize, usize) {
        self.print_with_style(
            surface,
            raw,
            x,
            y,
            max_width,
            align,
            Style::new().fg(color),
            false,
        )
    }

    /// Print `raw` starting from `style`.
    ///
    /// `overwrite_attrs` decides whether the style's attributes replace the
    /// ones on the surface; a tag that lists flags turns it on for the rest of
    /// the text. A negative `max_width` draws nothing.
    #[allow(clippy::too_many_arguments)]
    pub fn print_with_style<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        raw: &str,
        x: i32,
        y: i32,
        max_width: i32,
        align: Align,
        style: Style,
        overwrite_attrs: bool,
    ) -> (usize, usize) {
        let Ok(max_width) = usize::try_from(max_width) else {
            return (0, 0);
        };
        let decomposed = decompose(raw);
        let runes = decomposed.rune_count();
        let width = decomposed.width();

        let (from, to, x, max_width) = match align {
            Align::Left => (0, runes, x, max_width),
            Align::Right => {
                let (start, used) = fitting_suffix(&decomposed, max_width);
                (start, runes, offset(x, max_width - used), used)
            }
            Align::Center if width <= max_width => {
                let half = (max_width - width) / 2;
                (0, runes, offset(x, half), max_width - half)
            }
            Align::Center => {
                let (left, end) = center_trim(&decomposed, max_width);
                (left, end, x, max_width)
            }
        };
        tagcell_core::trace!(?align, from, to, max_width, "aligned");

        let (range, style, overwrite_attrs) =
            decomposed.raw_range(from, to, style, overwrite_attrs, self.resolver);
        let mut walk = RangeWalk {
            decomposed: &decomposed,
            resolver: self.resolver,
            style,
            overwrite_attrs,
            next_tag: decomposed.tags_before(range.start).len(),
        };
        walk.draw(surface, from, to, x, y, max_width)
    }

    /// Print `raw` left-aligned with unbounded width in
    /// [`PRIMARY_TEXT_COLOR`].
    pub fn print_simple<S: Surface + ?Sized>(&self, surface: &mut S, raw: &str, x: i32, y: i32) {
        self.print(
            surface,
            raw,
            x,
            y,
            i32::MAX,
            Align::Left,
            PRIMARY_TEXT_COLOR,
        );
    }
}

/// Left-aligned walk over a rune range, applying tags as they are passed.
struct RangeWalk<'d, 'a, 'r> {
    decomposed: &'d Decomposition<'a>,
    resolver: &'r dyn ColorResolver,
    style: Style,
    overwrite_attrs: bool,
    next_tag: usize,
}

impl RangeWalk<'_, '_, '_> {
    fn draw<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        from: usize,
        to: usize,
        x: i32,
        y: i32,
        max_width: usize,
    ) -> (usize, usize) {
        let tags = self.decomposed.style_tags();
        let glyphs = &self.decomposed.map().glyphs()[from..to];
        let mut drawn = 0;
        let mut drawn_width = 0;

        for glyph in glyphs {
            while let Some(tag) = tags.get(self.next_tag).filter(|t| t.span.start < glyph.raw) {
                (self.style, self.overwrite_attrs) =
                    apply_style_tag(self.style, self.overwrite_attrs, tag, self.resolver);
                self.next_tag += 1;
            }

            if drawn_width + glyph.width > max_width {
                tagcell_core::trace!(drawn, drawn_width, "width exhausted");
                break;
            }

            let cell_x = offset(x, drawn_width);
            let under = Style::from(surface.cell(cell_x, y).unwrap_or_default());
            let style = under.overlay(self.style, self.overwrite_attrs);
            let cell = style.apply_to(Cell::from_char(glyph.ch));
            for column in 0..glyph.width {
                surface.set_cell(offset(cell_x, column), y, cell);
            }

            drawn += 1;
            drawn_width += glyph.width;
        }

        (drawn, drawn_width)
    }
}

/// First rune of the longest suffix that fits in `max_width`, and its width.
fn fitting_suffix(decomposed: &Decomposition<'_>, max_width: usize) -> (usize, usize) {
    let glyphs = decomposed.map().glyphs();
    let mut start = glyphs.len();
    let mut used = 0;
    for (index, glyph) in glyphs.iter().enumerate().rev() {
        if used + glyph.width > max_width {
            break;
        }
        used += glyph.width;
        start = index;
    }
    (start, used)
}

/// Trim runes from both ends until the rest fits in `max_width`.
///
/// The side with fewer trimmed columns loses the next rune; ties trim the
/// left. Returns the kept rune range.
fn center_trim(decomposed: &Decomposition<'_>, max_width: usize) -> (usize, usize) {
    let glyphs = decomposed.map().glyphs();
    let width = decomposed.width();
    let (mut left, mut end) = (0, glyphs.len());
    let (mut chopped_left, mut chopped_right) = (0, 0);
    while left < end && width - chopped_left - chopped_right > max_width {
        if chopped_left <= chopped_right {
            chopped_left += glyphs[left].width;
            left += 1;
        } else {
            end -= 1;
            chopped_right += glyphs[end].width;
        }
    }
    (left, end)
}

#[inline]
fn offset(x: i32, by: usize) -> i32 {
    x.saturating_add(i32::try_from(by).unwrap_or(i32::MAX))
}

/// [`Printer::print`] with the standard color names.
pub fn print<S: Surface + ?Sized>(
    surface: &mut S,
    raw: &str,
    x: i32,
    y: i32,
    max_width: i32,
    align: Align,
    color: PackedRgba,
) -> (usize, usize) {
    Printer::default().print(surface, raw, x, y, max_width, align, color)
}

/// [`Printer::print_with_style`] with the standard color names.
#[allow(clippy::too_many_arguments)]
pub fn print_with_style<S: Surface + ?Sized>(
    surface: &mut S,
    raw: &str,
    x: i32,
    y: i32,
    max_width: i32,
    align: Align,
    style: Style,
    overwrite_attrs: bool,
) -> (usize, usize) {
    Printer::default().print_with_style(surface, raw, x, y, max_width, align, style, overwrite_attrs)
}

/// [`Printer::print_simple`] with the standard color names.
pub fn print_simple<S: Surface + ?Sized>(surface: &mut S, raw: &str, x: i32, y: i32) {
    Printer::default().print_simple(surface, raw, x, y);
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagcell_render::buffer::Buffer;
    use tagcell_render::cell::StyleFlags;
    use tagcell_style::Palette;

    fn fg_at(buf: &Buffer, x: u16) -> Option<PackedRgba> {
        buf.get(x, 0).and_then(|c| c.fg)
    }

    #[test]
    fn left_applies_tags_in_order() {
        let mut buf = Buffer::new(10, 1);
        let drawn = print(&mut buf, "[red]ab[blue]c", 0, 0, 10, Align::Left, PackedRgba::WHITE);
        assert_eq!(drawn, (3, 3));
        assert_eq!(buf.row_text(0), "abc       ");
        assert_eq!(fg_at(&buf, 0), Some(PackedRgba::RED));
        assert_eq!(fg_at(&buf, 1), Some(PackedRgba::RED));
        assert_eq!(fg_at(&buf, 2), Some(PackedRgba::BLUE));
        assert_eq!(fg_at(&buf, 3), None);
    }

    #[test]
    fn left_stops_at_max_width() {
        let mut buf = Buffer::new(10, 1);
        assert_eq!(print(&mut buf, "abcdef", 1, 0, 3, Align::Left, PackedRgba::WHITE), (3, 3));
        assert_eq!(buf.row_text(0), " abc      ");
    }

    #[test]
    fn wide_glyph_that_does_not_fit_stops_the_walk() {
        let mut buf = Buffer::new(10, 1);
        assert_eq!(print(&mut buf, "a漢b", 0, 0, 2, Align::Left, PackedRgba::WHITE), (1, 1));
        assert_eq!(buf.row_text(0), "a         ");
    }

    #[test]
    fn wide_glyph_fills_every_cell() {
        let mut buf = Buffer::new(4, 1);
        assert_eq!(print(&mut buf, "漢x", 0, 0, 4, Align::Left, PackedRgba::WHITE), (2, 3));
        assert_eq!(buf.get(0, 0).map(|c| c.content), Some('漢'));
        assert_eq!(buf.get(1, 0).map(|c| c.content), Some('漢'));
        assert_eq!(buf.get(2, 0).map(|c| c.content), Some('x'));
    }

    #[test]
    fn negative_width_draws_nothing() {
        let mut buf = Buffer::new(4, 1);
        assert_eq!(print(&mut buf, "abc", 0, 0, -1, Align::Left, PackedRgba::WHITE), (0, 0));
        assert_eq!(buf.row_text(0), "    ");
        assert_eq!(print(&mut buf, "abc", 0, 0, 0, Align::Left, PackedRgba::WHITE), (0, 0));
    }

    #[test]
    fn escapes_print_literally() {
        let mut buf = Buffer::new(8, 1);
        assert_eq!(print(&mut buf, "[red[]!", 0, 0, 8, Align::Left, PackedRgba::WHITE), (6, 6));
        assert_eq!(buf.row_text(0), "[red]!  ");
        assert_eq!(fg_at(&buf, 0), Some(PackedRgba::WHITE));
    }

    #[test]
    fn background_on_screen_is_kept() {
        let mut buf = Buffer::new(4, 1);
        buf.clear_with(Cell::from_char(' ').with_bg(Some(PackedRgba::BLUE)));
        print(&mut buf, "a[:red]b", 0, 0, 4, Align::Left, PackedRgba::WHITE);
        assert_eq!(buf.get(0, 0).and_then(|c| c.bg), Some(PackedRgba::BLUE));
        assert_eq!(buf.get(1, 0).and_then(|c| c.bg), Some(PackedRgba::RED));
        assert_eq!(buf.get(2, 0).and_then(|c| c.bg), Some(PackedRgba::BLUE));
    }

    #[test]
    fn attributes_on_screen_kept_until_a_tag_sets_them() {
        let mut buf = Buffer::new(4, 1);
        buf.clear_with(Cell::from_char(' ').with_attrs(StyleFlags::UNDERLINE));
        print(&mut buf, "a[::b]b", 0, 0, 4, Align::Left, PackedRgba::WHITE);
        assert_eq!(buf.get(0, 0).map(|c| c.attrs), Some(StyleFlags::UNDERLINE));
        assert_eq!(buf.get(1, 0).map(|c| c.attrs), Some(StyleFlags::BOLD));
    }

    #[test]
    fn print_with_style_overwrites_attrs_when_asked() {
        let mut buf = Buffer::new(4, 1);
        buf.clear_with(Cell::from_char(' ').with_attrs(StyleFlags::UNDERLINE));
        let style = Style::new().fg(PackedRgba::GREEN).bold();
        print_with_style(&mut buf, "ab", 0, 0, 4, Align::Left, style, true);
        assert_eq!(buf.get(0, 0).map(|c| c.attrs), Some(StyleFlags::BOLD));
        assert_eq!(fg_at(&buf, 1), Some(PackedRgba::GREEN));
    }

    #[test]
    fn right_aligns_short_text() {
        let mut buf = Buffer::new(10, 1);
        assert_eq!(print(&mut buf, "abc", 0, 0, 10, Align::Right, PackedRgba::WHITE), (3, 3));
        assert_eq!(buf.row_text(0), "       abc");
    }

    #[test]
    fn right_keeps_suffix_and_its_style() {
        let mut buf = Buffer::new(6, 1);
        let drawn = print(&mut buf, "[red]abc[blue]def", 1, 0, 4, Align::Right, PackedRgba::WHITE);
        assert_eq!(drawn, (4, 4));
        assert_eq!(buf.row_text(0), " cdef ");
        assert_eq!(fg_at(&buf, 1), Some(PackedRgba::RED));
        assert_eq!(fg_at(&buf, 2), Some(PackedRgba::BLUE));
    }

    #[test]
    fn right_with_wide_glyph_leaves_gap() {
        let mut buf = Buffer::new(4, 1);
        assert_eq!(print(&mut buf, "漢字", 0, 0, 3, Align::Right, PackedRgba::WHITE), (1, 2));
        assert_eq!(buf.row_text(0), " 字字 ");
    }

    #[test]
    fn center_shifts_short_text() {
        let mut buf = Buffer::new(10, 1);
        assert_eq!(print(&mut buf, "abc", 0, 0, 10, Align::Center, PackedRgba::WHITE), (3, 3));
        assert_eq!(buf.row_text(0), "   abc    ");
    }

    #[test]
    fn center_exact_fit() {
        let mut buf = Buffer::new(4, 1);
        assert_eq!(print(&mut buf, "abcd", 0, 0, 4, Align::Center, PackedRgba::WHITE), (4, 4));
        assert_eq!(buf.row_text(0), "abcd");
    }

    #[test]
    fn center_trims_both_sides_left_first() {
        let mut buf = Buffer::new(4, 1);
        assert_eq!(print(&mut buf, "abcdef", 0, 0, 4, Align::Center, PackedRgba::WHITE), (4, 4));
        assert_eq!(buf.row_text(0), "bcde");

        let mut buf = Buffer::new(4, 1);
        assert_eq!(print(&mut buf, "abcde", 0, 0, 4, Align::Center, PackedRgba::WHITE), (4, 4));
        assert_eq!(buf.row_text(0), "bcde");
    }

    #[test]
    fn center_trim_with_mixed_widths_fills_exactly() {
        let mut buf = Buffer::new(4, 1);
        let drawn = print(&mut buf, "ab漢cd", 0, 0, 4, Align::Center, PackedRgba::WHITE);
        assert_eq!(drawn, (3, 4));
        assert_eq!(buf.row_text(0), "b漢漢c");
    }

    #[test]
    fn center_trim_can_end_one_short() {
        let mut buf = Buffer::new(4, 1);
        let drawn = print(&mut buf, "漢abc", 0, 0, 4, Align::Center, PackedRgba::WHITE);
        assert_eq!(drawn, (3, 3));
        assert_eq!(buf.row_text(0), "abc ");
    }

    #[test]
    fn center_trim_carries_skipped_tags() {
        let mut buf = Buffer::new(3, 1);
        print(&mut buf, "[red]a[blue]bcd", 0, 0, 3, Align::Center, PackedRgba::WHITE);
        assert_eq!(buf.row_text(0), "bcd");
        assert_eq!(fg_at(&buf, 0), Some(PackedRgba::BLUE));
    }

    #[test]
    fn offscreen_cells_are_ignored() {
        let mut buf = Buffer::new(3, 1);
        assert_eq!(print(&mut buf, "abcd", -1, 0, 10, Align::Left, PackedRgba::WHITE), (4, 4));
        assert_eq!(buf.row_text(0), "bcd");
    }

    #[test]
    fn print_simple_is_white_and_unbounded() {
        let mut buf = Buffer::new(5, 1);
        print_simple(&mut buf, "hello world", 0, 0);
        assert_eq!(buf.row_text(0), "hello");
        assert_eq!(fg_at(&buf, 0), Some(PRIMARY_TEXT_COLOR));
    }

    #[test]
    fn printer_uses_its_resolver() {
        let palette = Palette::new().with("warn", PackedRgba::rgb(255, 200, 0));
        let printer = Printer::new(&palette);
        let mut buf = Buffer::new(4, 1);
        printer.print(&mut buf, "[warn]!", 0, 0, 4, Align::Left, PackedRgba::WHITE);
        assert_eq!(fg_at(&buf, 0), Some(PackedRgba::rgb(255, 200, 0)));

        let mut buf = Buffer::new(4, 1);
        print(&mut buf, "[warn]!", 0, 0, 4, Align::Left, PackedRgba::WHITE);
        assert_eq!(fg_at(&buf, 0), None);
    }

    #[test]
    fn tag_only_text_draws_nothing() {
        let mut buf = Buffer::new(4, 1);
        for align in [Align::Left, Align::Center, Align::Right] {
            assert_eq!(print(&mut buf, "[red][::b]", 0, 0, 4, align, PackedRgba::WHITE), (0, 0));
        }
        assert_eq!(buf.row_text(0), "    ");
    }
}
