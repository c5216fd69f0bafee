#![forbid(unsafe_code)]

//! Tag-aware word wrapping.
//!
//! Lines are chosen on the stripped text, where tags have no width, and
//! returned as slices of the raw text so every tag inside a line (and every
//! tag directly in front of its first glyph) stays with it.
//!
//! A line may end after any punctuation character or whitespace run; the
//! whitespace at a cut is dropped, up to the first tag in it. A newline
//! always ends the line, even a blank one. A line only fits if it is
//! narrower than the target width. A word too wide for a line of its own is
//! broken between glyphs. Escapes are only broken when they start a line.
//!
//! ```
//! use tagcell_text::wrap::word_wrap;
//!
//! assert_eq!(word_wrap("[red]hello [blue]world", 8), vec!["[red]hello", "[blue]world"]);
//! assert_eq!(word_wrap("a\nb", 80), vec!["a", "b"]);
//! ```

use std::ops::Range;

use tagcell_render::{char_width, display_width};

use crate::decompose::{Decomposition, decompose};

/// A place in the stripped text where a line may end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Breakpoint {
    /// Stripped byte offset right after the breakpoint.
    end: usize,
    /// Whether the breakpoint ends in a newline.
    newline: bool,
}

/// Split `raw` into lines narrower than `width` cells.
///
/// A `width` of 0 returns the whole text as one line.
pub fn word_wrap(raw: &str, width: usize) -> Vec<&str> {
    if width == 0 {
        return vec![raw];
    }
    let decomposed = decompose(raw);
    let span = tagcell_core::debug_span!("word_wrap", width);
    let _guard = span.enter();
    let lines = LineSplitter::new(&decomposed, width).split();
    tagcell_core::debug!(lines = lines.len(), "wrapped");
    lines
}

struct LineSplitter<'d, 'a> {
    decomposed: &'d Decomposition<'a>,
    width: usize,
    /// Stripped ranges of the effective escapes, in order.
    escapes: Vec<Range<usize>>,
    lines: Vec<&'a str>,
    /// Raw offset the next line may start at.
    raw_end: usize,
    /// Stripped offset where the last line ended.
    stripped_end: usize,
}

impl<'d, 'a> LineSplitter<'d, 'a> {
    fn new(decomposed: &'d Decomposition<'a>, width: usize) -> Self {
        let map = decomposed.map();
        let escapes = decomposed
            .escapes()
            .iter()
            .map(|e| map.stripped_range(e.span.clone()))
            .collect();
        Self {
            decomposed,
            width,
            escapes,
            lines: Vec::new(),
            raw_end: 0,
            stripped_end: 0,
        }
    }

    fn split(mut self) -> Vec<&'a str> {
        let decomposed = self.decomposed;
        let stripped = decomposed.stripped();
        let mut breakpoints = breakpoints(stripped);
        breakpoints.retain(|bp| self.escape_around(bp.end).is_none());
        let mut start = 0;
        let mut fitting: Option<(usize, usize)> = None;
        let mut i = 0;

        loop {
            // The rest of an escape split by a hard break. Its closing
            // bracket starts a line so the hidden bracket is never emitted.
            let split_escape = self.escape_around(start).map(|e| e.end - 1);
            if let Some(close) = split_escape.filter(|&close| close > start) {
                let cut = if display_width(&stripped[start..close]) < self.width {
                    close
                } else {
                    hard_break(stripped, start, close, self.width)
                };
                self.push(start, cut);
                start = cut;
                fitting = None;
                continue;
            }

            let candidate_end = breakpoints.get(i).map_or(stripped.len(), |bp| bp.end);
            let candidate = stripped[start..candidate_end].trim_end();
            let limit = start + candidate.len();

            if display_width(candidate) >= self.width {
                if let Some((last_end, new_start)) = fitting.take().filter(|&(end, _)| end > start) {
                    self.push(start, last_end);
                    start = new_start;
                    continue;
                }
                let cut = hard_break(stripped, start, limit, self.width);
                // Keep an escape whole unless it starts the line.
                let cut = match self.escape_around(cut) {
                    Some(escape) if escape.start > start => escape.start,
                    _ => cut,
                };
                tagcell_core::trace!(start, cut, "hard break");
                self.push(start, cut);
                start = cut;
                if cut == limit {
                    if let Some(bp) = breakpoints.get(i) {
                        start = bp.end;
                        i += 1;
                    }
                }
                continue;
            }

            match breakpoints.get(i) {
                None => {
                    if !candidate.is_empty() {
                        self.push(start, limit);
                    }
                    break;
                }
                Some(bp) if bp.newline => {
                    self.push(start, limit);
                    start = bp.end;
                    fitting = None;
                    i += 1;
                }
                Some(bp) => {
                    fitting = Some((limit, bp.end));
                    i += 1;
                }
            }
        }
        self.lines
    }

    /// The escape that `offset` falls strictly inside of.
    fn escape_around(&self, offset: usize) -> Option<&Range<usize>> {
        let idx = self.escapes.partition_point(|e| e.end <= offset);
        self.escapes.get(idx).filter(|e| e.start < offset)
    }

    /// Emit the stripped range `[from, to)` as a raw slice.
    ///
    /// Whitespace dropped since the last line is skipped up to the first tag
    /// in it, so tags in the gap start the new line.
    fn push(&mut self, from: usize, to: usize) {
        let raw = self.decomposed.raw();
        let map = self.decomposed.map();

        let mut raw_start = self.raw_end;
        for g in &map.glyphs()[map.rune_at(self.stripped_end)..map.rune_at(from)] {
            if g.raw != raw_start {
                break;
            }
            raw_start += g.ch.len_utf8();
        }

        let (raw_end, next) = if to >= map.stripped_len() {
            (raw.len(), raw.len())
        } else {
            let end = map.raw_of(map.rune_at(to));
            let escapes = self.decomposed.escapes();
            // Cut right before a closing bracket: leave its hidden bracket out.
            if escapes.binary_search_by_key(&(end + 1), |e| e.span.end).is_ok() {
                (end - 1, end)
            } else {
                (end, end)
            }
        };
        let raw_end = raw_end.max(raw_start);
        self.lines.push(&raw[raw_start..raw_end]);
        self.raw_end = next.max(raw_end);
        self.stripped_end = to;
    }
}

/// Offset before the first glyph that would bring the line to `width`,
/// never before the first glyph; `limit` if there is none.
fn hard_break(stripped: &str, start: usize, limit: usize, width: usize) -> usize {
    let mut line_width = 0;
    for (offset, ch) in stripped[start..limit].char_indices() {
        let w = char_width(ch);
        if line_width > 0 && line_width + w >= width {
            return start + offset;
        }
        line_width += w;
    }
    limit
}

/// Punctuation followed by optional whitespace, or a whitespace run. A
/// newline ends the run it is in.
fn breakpoints(stripped: &str) -> Vec<Breakpoint> {
    let bytes = stripped.as_bytes();
    let mut found = Vec::new();
    let mut pos = 0;
    while pos < bytes.len() {
        let b = bytes[pos];
        if b.is_ascii_punctuation() {
            pos += 1;
        } else if !is_break_space(b) {
            pos += 1;
            continue;
        }
        let mut newline = false;
        while pos < bytes.len() && is_break_space(bytes[pos]) {
            pos += 1;
            if bytes[pos - 1] == b'\n' {
                newline = true;
                break;
            }
        }
        found.push(Breakpoint { end: pos, newline });
    }
    found
}

#[inline]
fn is_break_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\x0C' | b'\r')
}
