#![forbid(unsafe_code)]

//! Styles and the overlay rule.
//!
//! A [`Style`] is what a run of tagged text is drawn with. Unset colors
//! (`None`) mean "keep whatever color is already on screen", which is what
//! makes [`Style::overlay`] useful: printing text over a colored background
//! keeps the background unless the text asks for a different one.

use tagcell_render::cell::{Cell, PackedRgba, StyleFlags};

/// Foreground, background and attributes.
///
/// # Example
/// ```
/// use tagcell_render::cell::{PackedRgba, StyleFlags};
/// use tagcell_style::Style;
///
/// let style = Style::new().fg(PackedRgba::RED).bold();
/// assert_eq!(style.fg, Some(PackedRgba::RED));
/// assert_eq!(style.bg, None);
/// assert!(style.attrs.contains(StyleFlags::BOLD));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    /// Foreground color; `None` leaves the screen's foreground alone.
    pub fg: Option<PackedRgba>,
    /// Background color; `None` leaves the screen's background alone.
    pub bg: Option<PackedRgba>,
    /// Text attributes.
    pub attrs: StyleFlags,
}

impl Style {
    /// A style that changes nothing.
    #[inline]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attrs: StyleFlags::empty(),
        }
    }

    /// Set the foreground color.
    #[inline]
    #[must_use]
    pub const fn fg(mut self, color: PackedRgba) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background color.
    #[inline]
    #[must_use]
    pub const fn bg(mut self, color: PackedRgba) -> Self {
        self.bg = Some(color);
        self
    }

    /// Replace the attribute set.
    #[inline]
    #[must_use]
    pub const fn attrs(mut self, attrs: StyleFlags) -> Self {
        self.attrs = attrs;
        self
    }

    #[must_use]
    pub fn bold(self) -> Self {
        self.with_flag(StyleFlags::BOLD)
    }

    #[must_use]
    pub fn dim(self) -> Self {
        self.with_flag(StyleFlags::DIM)
    }

    #[must_use]
    pub fn underline(self) -> Self {
        self.with_flag(StyleFlags::UNDERLINE)
    }

    #[must_use]
    pub fn blink(self) -> Self {
        self.with_flag(StyleFlags::BLINK)
    }

    #[must_use]
    pub fn reverse(self) -> Self {
        self.with_flag(StyleFlags::REVERSE)
    }

    /// Clear all attributes.
    #[must_use]
    pub fn normal(self) -> Self {
        self.attrs(StyleFlags::empty())
    }

    fn with_flag(mut self, flag: StyleFlags) -> Self {
        self.attrs |= flag;
        self
    }

    /// Whether this style changes nothing when overlaid without attributes.
    #[inline]
    pub fn is_default(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attrs.is_empty()
    }

    /// Compose `top` over `self`.
    ///
    /// Colors set in `top` replace ours; unset colors keep ours. Attributes
    /// are replaced wholesale, and only when `overwrite_attrs` is true.
    ///
    /// ```
    /// use tagcell_render::cell::PackedRgba;
    /// use tagcell_style::Style;
    ///
    /// let screen = Style::new().fg(PackedRgba::WHITE).bg(PackedRgba::BLUE).bold();
    /// let text = Style::new().fg(PackedRgba::RED);
    /// let out = screen.overlay(text, false);
    /// assert_eq!(out, Style::new().fg(PackedRgba::RED).bg(PackedRgba::BLUE).bold());
    /// assert_eq!(screen.overlay(text, true).attrs, text.attrs);
    /// ```
    #[must_use]
    pub fn overlay(self, top: Style, overwrite_attrs: bool) -> Style {
        let mut out = self;
        if top.bg.is_some() {
            out.bg = top.bg;
        }
        if top.fg.is_some() {
            out.fg = top.fg;
        }
        if overwrite_attrs {
            out.attrs = top.attrs;
        }
        out
    }

    /// Write this style into `cell`, keeping its glyph.
    #[inline]
    #[must_use]
    pub fn apply_to(self, cell: Cell) -> Cell {
        cell.with_fg(self.fg).with_bg(self.bg).with_attrs(self.attrs)
    }
}

impl From<Cell> for Style {
    fn from(cell: Cell) -> Self {
        Self {
            fg: cell.fg,
            bg: cell.bg,
            attrs: cell.attrs,
        }
    }
}

impl From<&Cell> for Style {
    fn from(cell: &Cell) -> Self {
        Self::from(*cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_default() {
        assert_eq!(Style::new(), Style::default());
        assert!(Style::new().is_default());
    }

    #[test]
    fn builders_accumulate_flags() {
        let s = Style::new().bold().underline().reverse();
        assert_eq!(
            s.attrs,
            StyleFlags::BOLD | StyleFlags::UNDERLINE | StyleFlags::REVERSE
        );
        assert_eq!(s.normal().attrs, StyleFlags::empty());
        assert_eq!(Style::new().dim().blink().attrs, StyleFlags::DIM | StyleFlags::BLINK);
    }

    #[test]
    fn overlay_replaces_only_set_colors() {
        let bottom = Style::new().fg(PackedRgba::WHITE).bg(PackedRgba::BLUE);
        let out = bottom.overlay(Style::new().bg(PackedRgba::RED), false);
        assert_eq!(out.fg, Some(PackedRgba::WHITE));
        assert_eq!(out.bg, Some(PackedRgba::RED));
    }

    #[test]
    fn overlay_attrs_only_when_requested() {
        let bottom = Style::new().bold();
        let top = Style::new().underline();
        assert_eq!(bottom.overlay(top, false).attrs, StyleFlags::BOLD);
        assert_eq!(bottom.overlay(top, true).attrs, StyleFlags::UNDERLINE);
        assert_eq!(bottom.overlay(Style::new(), true).attrs, StyleFlags::empty());
    }

    #[test]
    fn cell_round_trip() {
        let cell = Cell::from_char('x')
            .with_fg(Some(PackedRgba::RED))
            .with_attrs(StyleFlags::DIM);
        let style = Style::from(&cell);
        assert_eq!(style, Style::new().fg(PackedRgba::RED).dim());

        let painted = Style::new().bg(PackedRgba::GREEN).apply_to(cell);
        assert_eq!(painted.content, 'x');
        assert_eq!(painted.fg, None);
        assert_eq!(painted.bg, Some(PackedRgba::GREEN));
        assert_eq!(painted.attrs, StyleFlags::empty());
    }
}
