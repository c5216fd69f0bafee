#![forbid(unsafe_code)]

//! Cell types.
//!
//! A [`Cell`] is one position of the grid: a single glyph plus the colors and
//! attributes it is drawn with. Colors are optional; `None` is the terminal's
//! default color, which style overlays treat as "leave the color on screen
//! alone".
//!
//! Wide glyphs (display width 2) are stored by repeating the same glyph in
//! every cell they cover, so overwriting either half never leaves a dangling
//! half-glyph behind.

/// A compact RGBA color.
///
/// - **Size:** 4 bytes.
/// - **Layout:** `0xRRGGBBAA` (R in bits 31..24, A in bits 7..0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[repr(transparent)]
pub struct PackedRgba(pub u32);

impl PackedRgba {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::rgb(255, 0, 0);
    /// Opaque green.
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    /// Opaque blue.
    pub const BLUE: Self = Self::rgb(0, 0, 255);

    /// Create an opaque RGB color (alpha = 255).
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Create an RGBA color with explicit alpha.
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | (a as u32))
    }

    /// Create an opaque color from a `0xRRGGBB` value.
    #[inline]
    pub const fn from_rgb_u32(rgb: u32) -> Self {
        Self(((rgb & 0x00FF_FFFF) << 8) | 0xFF)
    }

    /// Red channel.
    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Green channel.
    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Blue channel.
    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Alpha channel.
    #[inline]
    pub const fn a(self) -> u8 {
        self.0 as u8
    }
}

bitflags::bitflags! {
    /// Text attributes a tag can switch on.
    ///
    /// The empty set is "normal" text.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StyleFlags: u8 {
        /// Bold / increased intensity.
        const BOLD      = 0b0000_0001;
        /// Dim / decreased intensity.
        const DIM       = 0b0000_0010;
        /// Underlined text.
        const UNDERLINE = 0b0000_1000;
        /// Blinking text.
        const BLINK     = 0b0001_0000;
        /// Reverse video (swap fg/bg).
        const REVERSE   = 0b0010_0000;
    }
}

/// A single grid cell.
///
/// # Default
///
/// The default cell is a space with default colors and no attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// The glyph shown in this cell.
    pub content: char,
    /// Foreground color; `None` is the terminal default.
    pub fg: Option<PackedRgba>,
    /// Background color; `None` is the terminal default.
    pub bg: Option<PackedRgba>,
    /// Text attributes.
    pub attrs: StyleFlags,
}

impl Cell {
    /// Create a cell holding `c` with default colors and no attributes.
    #[inline]
    pub const fn from_char(c: char) -> Self {
        Self {
            content: c,
            fg: None,
            bg: None,
            attrs: StyleFlags::empty(),
        }
    }

    /// Check if this cell shows nothing but a blank.
    #[inline]
    pub const fn is_blank(&self) -> bool {
        self.content == ' '
    }

    /// Set the glyph, preserving colors and attributes.
    #[inline]
    pub const fn with_char(mut self, c: char) -> Self {
        self.content = c;
        self
    }

    /// Set the foreground color.
    #[inline]
    pub const fn with_fg(mut self, fg: Option<PackedRgba>) -> Self {
        self.fg = fg;
        self
    }

    /// Set the background color.
    #[inline]
    pub const fn with_bg(mut self, bg: Option<PackedRgba>) -> Self {
        self.bg = bg;
        self
    }

    /// Set the attributes.
    #[inline]
    pub const fn with_attrs(mut self, attrs: StyleFlags) -> Self {
        self.attrs = attrs;
        self
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::from_char(' ')
    }
}
