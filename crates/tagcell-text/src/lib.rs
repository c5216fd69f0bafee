#![forbid(unsafe_code)]

//! Tagged text: decomposition, bounded printing, and word wrap.
//!
//! Text carries its styling inline as bracketed tags:
//!
//! - `[red]`, `[#ff8000:navy]` and `[::bu]` set the foreground, background
//!   and attributes from that point on,
//! - `[name[]` shows the literal text `[name]`,
//! - `["id"]` marks a region (see [`tag::regions`]) and is printed as is.
//!
//! Widths, alignment and wrapping are measured on the text with tags removed.
//!
//! # Example
//! ```
//! use tagcell_render::buffer::Buffer;
//! use tagcell_render::cell::PackedRgba;
//! use tagcell_text::{Align, print, string_width, word_wrap};
//!
//! let raw = "[yellow]warning:[white] disk [::b]full";
//! assert_eq!(string_width(raw), 18);
//!
//! let mut buf = Buffer::new(20, 2);
//! for (row, line) in word_wrap(raw, 12).into_iter().enumerate() {
//!     print(&mut buf, line, 0, row as i32, 20, Align::Left, PackedRgba::WHITE);
//! }
//! assert_eq!(buf.row_text(0).trim_end(), "warning:");
//! assert_eq!(buf.row_text(1).trim_end(), "disk full");
//! ```

pub mod decompose;
pub mod print;
pub mod resolve;
pub mod tag;
pub mod wrap;

pub use decompose::{Decomposition, Glyph, PositionMap, decompose, string_width};
pub use print::{Align, PRIMARY_TEXT_COLOR, Printer, print, print_simple, print_with_style};
pub use resolve::apply_style_tag;
pub use tag::{EscapeTag, RegionTag, StyleTag, regions};
pub use wrap::word_wrap;
