#![forbid(unsafe_code)]

//! Core: logging facade and input acceptance predicates.

pub mod input_filter;
pub mod logging;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, trace, trace_span, warn};
