#![forbid(unsafe_code)]

//! Styles, the overlay rule, and color name resolution.

pub mod color;
pub mod style;

pub use color::{ColorParseError, ColorResolver, NamedColors, Palette, parse_hex_color};
pub use style::Style;
