#![forbid(unsafe_code)]

//! Acceptance predicates for single-line text entry.
//!
//! Each predicate receives the text accumulated so far and the character the
//! user is about to add, and answers whether the extended text is still an
//! acceptable (possibly incomplete) entry. Incomplete numeric prefixes such
//! as a lone `-` are accepted so that typing can continue.
//!
//! ```
//! use tagcell_core::input_filter::{accept_float, accept_integer, max_length};
//!
//! assert!(accept_integer("-", '4'));
//! assert!(!accept_integer("12", 'x'));
//! assert!(accept_float("", '.'));
//!
//! let short = max_length(3);
//! assert!(short("ab", 'c'));
//! assert!(!short("abc", 'd'));
//! ```

/// Accepts entries that parse as a signed 64-bit integer.
///
/// A lone `-` is accepted provisionally.
#[must_use]
pub fn accept_integer(text: &str, ch: char) -> bool {
    let candidate = extend(text, ch);
    if candidate == "-" {
        return true;
    }
    candidate.parse::<i64>().is_ok()
}

/// Accepts entries that parse as a 64-bit float.
///
/// `-`, `.` and `-.` are accepted provisionally.
#[must_use]
pub fn accept_float(text: &str, ch: char) -> bool {
    let candidate = extend(text, ch);
    if matches!(candidate.as_str(), "-" | "." | "-.") {
        return true;
    }
    candidate.parse::<f64>().is_ok()
}

/// Returns a predicate accepting entries of at most `max` characters.
///
/// Length is counted in `char`s, not bytes.
pub fn max_length(max: usize) -> impl Fn(&str, char) -> bool {
    move |text: &str, _ch: char| text.chars().count() < max
}

fn extend(text: &str, ch: char) -> String {
    let mut candidate = String::with_capacity(text.len() + ch.len_utf8());
    candidate.push_str(text);
    candidate.push(ch);
    candidate
}
