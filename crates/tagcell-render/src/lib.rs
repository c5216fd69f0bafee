#![forbid(unsafe_code)]

//! Render kernel: cells, the surface abstraction, glyph widths, and border
//! joints.

pub mod border;
pub mod buffer;
pub mod cell;
pub mod width;

pub use width::{char_width, display_width};
