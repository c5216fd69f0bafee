#![forbid(unsafe_code)]

//! tagcell public facade crate.
//!
//! Styled tagged text on a terminal cell grid. This crate re-exports the
//! types and functions of the internal crates and offers a prelude for
//! day-to-day usage.
//!
//! # Example
//! ```
//! use tagcell::prelude::*;
//!
//! let mut buf = Buffer::new(12, 3);
//! draw_joined_box(&mut buf, 0, 0, 12, 3, Some(PackedRgba::WHITE));
//! print(&mut buf, "[yellow]ok[white]!", 1, 1, 10, Align::Center, PackedRgba::WHITE);
//! assert_eq!(buf.row_text(1), "│   ok!    │");
//! ```

// --- Core re-exports -------------------------------------------------------

pub use tagcell_core::input_filter::{accept_float, accept_integer, max_length};

// --- Render re-exports -----------------------------------------------------

pub use tagcell_render::border::{
    BorderChars, draw_joined_box, join_glyphs, print_joined_border,
};
pub use tagcell_render::buffer::{Buffer, Surface};
pub use tagcell_render::cell::{Cell, PackedRgba, StyleFlags};
pub use tagcell_render::{char_width, display_width};

// --- Style re-exports ------------------------------------------------------

pub use tagcell_style::{
    ColorParseError, ColorResolver, NamedColors, Palette, Style, parse_hex_color,
};

// --- Text re-exports -------------------------------------------------------

pub use tagcell_text::{
    Align, Decomposition, PRIMARY_TEXT_COLOR, Printer, decompose, print, print_simple,
    print_with_style, regions, string_width, word_wrap,
};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Align, Buffer, Cell, ColorResolver, NamedColors, PackedRgba, Palette, Printer, Style,
        StyleFlags, Surface, draw_joined_box, print, print_joined_border, print_simple,
        print_with_style, string_width, word_wrap,
    };

    pub use crate::{core, render, style, text};
}

pub use tagcell_core as core;
pub use tagcell_render as render;
pub use tagcell_style as style;
pub use tagcell_text as text;

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn wrapped_text_in_a_box() {
        let mut buf = Buffer::new(10, 4);
        draw_joined_box(&mut buf, 0, 0, 10, 4, None);
        for (row, line) in word_wrap("[red]one two[white] three", 8).into_iter().enumerate() {
            print(&mut buf, line, 1, 1 + row as i32, 8, Align::Left, PackedRgba::WHITE);
        }
        assert_eq!(buf.row_text(0), "┌────────┐");
        assert_eq!(buf.row_text(1), "│one two │");
        assert_eq!(buf.row_text(2), "│three   │");
        assert_eq!(buf.row_text(3), "└────────┘");
        assert_eq!(buf.get(1, 1).and_then(|c| c.fg), Some(PackedRgba::RED));
        assert_eq!(buf.get(1, 2).and_then(|c| c.fg), Some(PackedRgba::WHITE));
    }

    #[test]
    fn divider_joins_box_edges() {
        let mut buf = Buffer::new(5, 3);
        draw_joined_box(&mut buf, 0, 0, 5, 3, None);
        for x in 0..5 {
            print_joined_border(&mut buf, x, 1, '─', None);
        }
        assert_eq!(buf.row_text(1), "├───┤");
    }

    #[test]
    fn input_predicates_are_reachable() {
        assert!(crate::accept_integer("-1", '2'));
        assert!(!crate::accept_float("1.", '.'));
        assert!(crate::max_length(2)("a", 'b'));
        assert!(!crate::max_length(2)("ab", 'c'));
    }

    #[test]
    fn custom_palette_through_printer() {
        let palette = Palette::new().with("accent", PackedRgba::rgb(0, 200, 200));
        let mut buf = Buffer::new(4, 1);
        Printer::new(&palette).print(&mut buf, "[accent]x", 0, 0, 4, Align::Left, PackedRgba::WHITE);
        assert_eq!(buf.get(0, 0).and_then(|c| c.fg), Some(PackedRgba::rgb(0, 200, 200)));
        assert_eq!(string_width("[accent]x"), 1);
    }
}
