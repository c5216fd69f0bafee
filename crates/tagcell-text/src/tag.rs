#![forbid(unsafe_code)]

//! Tag grammar.
//!
//! Three kinds of bracketed tags live inline in raw text:
//!
//! | kind   | form                    | example           | effect                         |
//! |--------|-------------------------|-------------------|--------------------------------|
//! | style  | `[fg:bg:flags]`         | `[red::b]`        | removed; changes the style     |
//! | escape | `[content[]`            | `[red[]`          | shows `[red]`                  |
//! | region | `["id"]`                | `["title"]`       | reported only; shows as text   |
//!
//! Colors are either a run of ASCII letters or `#` followed by exactly six
//! ASCII alphanumerics. Flags are one or more of `l b d r u`. Every field of a
//! style tag is optional, but a second `:` must be followed by at least one
//! flag, so `[red::]` is plain text. `[]` matches the grammar but carries no
//! content and is dropped by the scanner.
//!
//! Each scanner makes one left-to-right pass. After a match, scanning resumes
//! at the end of the match; after a failed attempt, at the next character.
//!
//! ```
//! use tagcell_text::tag::{scan_escape_tags, scan_style_tags};
//!
//! let tags = scan_style_tags("[red]a[:blue:bu]b");
//! assert_eq!(tags.len(), 2);
//! assert_eq!((tags[0].fg, tags[0].bg, tags[0].flags), ("red", "", ""));
//! assert_eq!((tags[1].fg, tags[1].bg, tags[1].flags), ("", "blue", "bu"));
//!
//! let escapes = scan_escape_tags("x[red[]");
//! assert_eq!(escapes[0].literal("x[red[]"), "[red]");
//! ```

use std::ops::Range;

/// A style tag such as `[yellow:#000080:b]`.
///
/// Empty fields were not given in the tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleTag<'a> {
    /// Byte range of the whole tag in the raw text.
    pub span: Range<usize>,
    /// Foreground color text.
    pub fg: &'a str,
    /// Background color text.
    pub bg: &'a str,
    /// Attribute flag characters.
    pub flags: &'a str,
}

impl StyleTag<'_> {
    /// Whether the tag would change nothing (only `[:]`-like forms).
    pub fn is_noop(&self) -> bool {
        self.fg.is_empty() && self.bg.is_empty() && self.flags.is_empty()
    }
}

/// An escaped tag such as `[red[]`, which displays as `[red]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscapeTag {
    /// Byte range of the whole escape in the raw text.
    pub span: Range<usize>,
}

impl EscapeTag {
    /// Byte offset of the bracket that is not displayed.
    #[inline]
    pub fn hidden_bracket(&self) -> usize {
        self.span.end - 2
    }

    /// The text this escape displays.
    pub fn literal(&self, raw: &str) -> String {
        let hidden = self.hidden_bracket();
        let mut out = String::with_capacity(self.span.len() - 1);
        out.push_str(&raw[self.span.start..hidden]);
        out.push_str(&raw[hidden + 1..self.span.end]);
        out
    }
}

/// A region tag such as `["footnote-1"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionTag<'a> {
    /// Byte range of the whole tag in the raw text.
    pub span: Range<usize>,
    /// The region id between the quotes; may be empty.
    pub id: &'a str,
}

/// Find every style tag in `raw`, in order. `[]` is skipped.
pub fn scan_style_tags(raw: &str) -> Vec<StyleTag<'_>> {
    let mut tags = Vec::new();
    scan(raw, |bytes, start| {
        let tag = match_style_tag(raw, bytes, start)?;
        let end = tag.span.end;
        if tag.span.len() > 2 {
            tags.push(tag);
        }
        Some(end)
    });
    tags
}

/// Find every escape tag in `raw`, in order.
pub fn scan_escape_tags(raw: &str) -> Vec<EscapeTag> {
    let mut escapes = Vec::new();
    scan(raw, |bytes, start| {
        let end = match_escape_tag(bytes, start)?;
        escapes.push(EscapeTag { span: start..end });
        Some(end)
    });
    escapes
}

/// Find every region tag in `raw`, in order.
pub fn regions(raw: &str) -> Vec<RegionTag<'_>> {
    let mut found = Vec::new();
    scan(raw, |bytes, start| {
        let end = match_region_tag(bytes, start)?;
        found.push(RegionTag {
            span: start..end,
            id: &raw[start + 2..end - 2],
        });
        Some(end)
    });
    found
}

/// Drive `try_match` at every `[`, resuming after each match.
///
/// All grammar characters are ASCII, so every position a match can start or
/// end at is a char boundary.
fn scan(raw: &str, mut try_match: impl FnMut(&[u8], usize) -> Option<usize>) {
    let bytes = raw.as_bytes();
    let mut pos = 0;
    while let Some(offset) = bytes[pos..].iter().position(|&b| b == b'[') {
        let start = pos + offset;
        pos = match try_match(bytes, start) {
            Some(end) => end,
            None => start + 1,
        };
    }
}

fn match_style_tag<'a>(raw: &'a str, bytes: &[u8], start: usize) -> Option<StyleTag<'a>> {
    let fg_start = start + 1;
    let fg_end = match_color(bytes, fg_start);
    let mut pos = fg_end;
    let mut bg = pos..pos;
    let mut flags = pos..pos;

    if bytes.get(pos) == Some(&b':') {
        let bg_start = pos + 1;
        let bg_end = match_color(bytes, bg_start);
        bg = bg_start..bg_end;
        pos = bg_end;
        if bytes.get(pos) == Some(&b':') {
            let flags_start = pos + 1;
            let flags_end = skip_while(bytes, flags_start, is_flag_byte);
            if flags_end == flags_start {
                return None;
            }
            flags = flags_start..flags_end;
            pos = flags_end;
        }
    }

    if bytes.get(pos) != Some(&b']') {
        return None;
    }
    Some(StyleTag {
        span: start..pos + 1,
        fg: &raw[fg_start..fg_end],
        bg: &raw[bg],
        flags: &raw[flags],
    })
}

/// Returns the end of a color at `pos`, or `pos` when there is none.
fn match_color(bytes: &[u8], pos: usize) -> usize {
    match bytes.get(pos) {
        Some(b) if b.is_ascii_alphabetic() => skip_while(bytes, pos, |b| b.is_ascii_alphabetic()),
        Some(b'#') => {
            let digits = bytes.get(pos + 1..pos + 7);
            match digits {
                Some(d) if d.iter().all(u8::is_ascii_alphanumeric) => pos + 7,
                _ => pos,
            }
        }
        _ => pos,
    }
}

fn match_escape_tag(bytes: &[u8], start: usize) -> Option<usize> {
    let content_end = skip_while(bytes, start + 1, is_escape_byte);
    if content_end == start + 1 || bytes.get(content_end) != Some(&b'[') {
        return None;
    }
    let close = skip_while(bytes, content_end + 1, |b| b == b'[');
    (bytes.get(close) == Some(&b']')).then_some(close + 1)
}

fn match_region_tag(bytes: &[u8], start: usize) -> Option<usize> {
    if bytes.get(start + 1) != Some(&b'"') {
        return None;
    }
    let id_end = skip_while(bytes, start + 2, is_region_byte);
    (bytes.get(id_end..id_end + 2) == Some(&b"\"]"[..])).then_some(id_end + 2)
}

fn skip_while(bytes: &[u8], mut pos: usize, pred: impl Fn(u8) -> bool) -> usize {
    while pos < bytes.len() && pred(bytes[pos]) {
        pos += 1;
    }
    pos
}

#[inline]
fn is_flag_byte(b: u8) -> bool {
    matches!(b, b'l' | b'b' | b'd' | b'r' | b'u')
}

#[inline]
fn is_region_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'_' | b',' | b';' | b':' | b' ' | b'-' | b'.')
}

#[inline]
fn is_escape_byte(b: u8) -> bool {
    is_region_byte(b) || b == b'"' || b == b'#'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields<'a>(tag: &StyleTag<'a>) -> (&'a str, &'a str, &'a str) {
        (tag.fg, tag.bg, tag.flags)
    }

    #[test]
    fn style_tag_forms() {
        let cases = [
            ("[red]", ("red", "", "")),
            ("[:blue]", ("", "blue", "")),
            ("[::b]", ("", "", "b")),
            ("[red:blue:lbdru]", ("red", "blue", "lbdru")),
            ("[#ff0000]", ("#ff0000", "", "")),
            ("[:#00ff00]", ("", "#00ff00", "")),
            ("[red:]", ("red", "", "")),
            ("[:]", ("", "", "")),
            ("[RED:Blue]", ("RED", "Blue", "")),
        ];
        for (raw, expected) in cases {
            let tags = scan_style_tags(raw);
            assert_eq!(tags.len(), 1, "{raw}");
            assert_eq!(tags[0].span, 0..raw.len(), "{raw}");
            assert_eq!(fields(&tags[0]), expected, "{raw}");
        }
    }

    #[test]
    fn non_tags_are_rejected() {
        for raw in [
            "[red::]",
            "[red",
            "[re d]",
            "[#ff00]",
            "[#ff00001]",
            "[red:blue:x]",
            "[1]",
            "[red:blue:b:]",
            "plain",
        ] {
            assert!(scan_style_tags(raw).is_empty(), "{raw}");
        }
    }

    #[test]
    fn empty_brackets_are_dropped() {
        assert!(scan_style_tags("[]").is_empty());
        let tags = scan_style_tags("[][red]");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].span, 2..7);
    }

    #[test]
    fn scanning_retries_at_next_bracket() {
        let tags = scan_style_tags("[[red]x");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].span, 1..6);
    }

    #[test]
    fn adjacent_tags_match_independently() {
        let tags = scan_style_tags("[red][:blue][::u]x");
        let spans: Vec<_> = tags.iter().map(|t| t.span.clone()).collect();
        assert_eq!(spans, vec![0..5, 5..12, 12..17]);
    }

    #[test]
    fn tags_between_multibyte_text() {
        let raw = "é[red]漢[blue]";
        let tags = scan_style_tags(raw);
        assert_eq!(&raw[tags[0].span.clone()], "[red]");
        assert_eq!(&raw[tags[1].span.clone()], "[blue]");
    }

    #[test]
    fn escape_forms() {
        let raw = "[red[] and [a:b[[] and [\"x\"#[]";
        let escapes = scan_escape_tags(raw);
        let literals: Vec<_> = escapes.iter().map(|e| e.literal(raw)).collect();
        assert_eq!(literals, vec!["[red]", "[a:b[]", "[\"x\"#]"]);
        assert_eq!(escapes[0].hidden_bracket(), 4);
    }

    #[test]
    fn escape_needs_content() {
        assert!(scan_escape_tags("[[]").is_empty());
        assert!(scan_escape_tags("[red]").is_empty());
        assert!(scan_escape_tags("[red[x]").is_empty());
        let escapes = scan_escape_tags("[[a[]");
        assert_eq!(escapes.len(), 1);
        assert_eq!(escapes[0].span, 1..5);
    }

    #[test]
    fn region_tags() {
        let raw = r#"["a"]text[""]["bad!"]["x-1.2"]"#;
        let found = regions(raw);
        let ids: Vec<_> = found.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["a", "", "x-1.2"]);
        assert_eq!(found[0].span, 0..5);
    }

    #[test]
    fn region_tags_are_not_style_or_escape() {
        let raw = r#"["a"]"#;
        assert!(scan_style_tags(raw).is_empty());
        assert!(scan_escape_tags(raw).is_empty());
    }

    #[test]
    fn noop_tag() {
        let tags = scan_style_tags("[:]");
        assert!(tags[0].is_noop());
        assert!(!scan_style_tags("[red]")[0].is_noop());
    }
}
