#![forbid(unsafe_code)]

//! Raw text to stripped text, with an exact position map.
//!
//! Raw text is what the caller passes in, tags and all. Stripped text is what
//! ends up on screen: style tags removed and each escape shown without its
//! hidden bracket. Layout (alignment, truncation, wrapping) is measured on the
//! stripped text and then mapped back to raw byte ranges through a
//! [`PositionMap`], so the tags inside the chosen range still take effect.
//!
//! ```
//! use tagcell_text::decompose::decompose;
//!
//! let d = decompose("[red]hi [blue[] 漢");
//! assert_eq!(d.stripped(), "hi [blue] 漢");
//! assert_eq!(d.width(), 12);
//! assert_eq!(d.map().raw_of(0), 5);
//! ```

use std::ops::Range;

use tagcell_render::{char_width, display_width};
use tagcell_style::{ColorResolver, Style};

use crate::resolve::apply_style_tags;
use crate::tag::{EscapeTag, StyleTag, scan_escape_tags, scan_style_tags};

/// One visible code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    /// The code point.
    pub ch: char,
    /// Display width in cells.
    pub width: usize,
    /// Byte offset in the stripped text.
    pub stripped: usize,
    /// Byte offset in the raw text.
    pub raw: usize,
}

/// Stripped rune index to stripped and raw byte offsets.
///
/// Rune index `len()` is valid in every lookup and maps to the end of the
/// respective text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionMap {
    glyphs: Vec<Glyph>,
    raw_len: usize,
    stripped_len: usize,
}

impl PositionMap {
    /// Number of visible code points.
    #[inline]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Whether there is no visible text.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Glyph at rune index `rune`.
    #[inline]
    pub fn get(&self, rune: usize) -> Option<&Glyph> {
        self.glyphs.get(rune)
    }

    /// All glyphs in order.
    #[inline]
    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    /// Raw byte offset of rune `rune`; the raw length past the end.
    #[inline]
    pub fn raw_of(&self, rune: usize) -> usize {
        self.glyphs.get(rune).map_or(self.raw_len, |g| g.raw)
    }

    /// Stripped byte offset of rune `rune`; the stripped length past the end.
    #[inline]
    pub fn stripped_of(&self, rune: usize) -> usize {
        self.glyphs.get(rune).map_or(self.stripped_len, |g| g.stripped)
    }

    /// Index of the first rune at or after stripped byte offset `byte`.
    pub fn rune_at(&self, byte: usize) -> usize {
        self.glyphs.partition_point(|g| g.stripped < byte)
    }

    /// Stripped byte range of the glyphs whose raw offset is in `raw`.
    pub fn stripped_range(&self, raw: Range<usize>) -> Range<usize> {
        let first = self.glyphs.partition_point(|g| g.raw < raw.start);
        let past = self.glyphs.partition_point(|g| g.raw < raw.end);
        self.stripped_of(first)..self.stripped_of(past.max(first))
    }

    /// Length of the raw text in bytes.
    #[inline]
    pub fn raw_len(&self) -> usize {
        self.raw_len
    }

    /// Length of the stripped text in bytes.
    #[inline]
    pub fn stripped_len(&self) -> usize {
        self.stripped_len
    }
}

/// The result of taking a raw string apart.
#[derive(Debug, Clone)]
pub struct Decomposition<'a> {
    raw: &'a str,
    style_tags: Vec<StyleTag<'a>>,
    escapes: Vec<EscapeTag>,
    stripped: String,
    width: usize,
    map: PositionMap,
}

impl<'a> Decomposition<'a> {
    /// The raw text this was built from.
    #[inline]
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// Style tags, in order.
    #[inline]
    pub fn style_tags(&self) -> &[StyleTag<'a>] {
        &self.style_tags
    }

    /// Escapes that take effect, in order.
    #[inline]
    pub fn escapes(&self) -> &[EscapeTag] {
        &self.escapes
    }

    /// The visible text.
    #[inline]
    pub fn stripped(&self) -> &str {
        &self.stripped
    }

    /// Display width of the visible text.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Rune to offset lookups.
    #[inline]
    pub fn map(&self) -> &PositionMap {
        &self.map
    }

    /// Number of visible code points.
    #[inline]
    pub fn rune_count(&self) -> usize {
        self.map.len()
    }

    /// Whether the raw text carries no tags or escapes.
    pub fn is_plain(&self) -> bool {
        self.style_tags.is_empty() && self.escapes.is_empty()
    }

    /// Style tags that start before raw byte `raw_pos`.
    pub fn tags_before(&self, raw_pos: usize) -> &[StyleTag<'a>] {
        let n = self.style_tags.partition_point(|t| t.span.start < raw_pos);
        &self.style_tags[..n]
    }

    /// Map the stripped rune range `[from, to)` to raw bytes.
    ///
    /// The range starts at rune `from` and ends at rune `to`, or at the end of
    /// the raw text when `to` is the rune count. The returned style is `style`
    /// with every tag in front of rune `from` applied, so printing the range
    /// with it looks the same as that part of the full text.
    pub fn raw_range<R: ColorResolver + ?Sized>(
        &self,
        from: usize,
        to: usize,
        style: Style,
        overwrite_attrs: bool,
        resolver: &R,
    ) -> (Range<usize>, Style, bool) {
        let start = self.map.raw_of(from);
        let end = self.map.raw_of(to).max(start);
        let (style, overwrite_attrs) =
            apply_style_tags(style, overwrite_attrs, self.tags_before(start), resolver);
        (start..end, style, overwrite_attrs)
    }
}

/// Take `raw` apart into tags, stripped text and a position map.
///
/// Escapes overlapping a style tag are ignored; the style tag wins.
pub fn decompose(raw: &str) -> Decomposition<'_> {
    let style_tags = scan_style_tags(raw);
    let escapes: Vec<EscapeTag> = scan_escape_tags(raw)
        .into_iter()
        .filter(|escape| !overlaps_any(&style_tags, &escape.span))
        .collect();

    let mut stripped = String::with_capacity(raw.len());
    let mut glyphs = Vec::with_capacity(raw.len());
    let mut tag = 0;
    let mut escape = 0;
    for (pos, ch) in raw.char_indices() {
        while tag < style_tags.len() && style_tags[tag].span.end <= pos {
            tag += 1;
        }
        if tag < style_tags.len() && style_tags[tag].span.start <= pos {
            continue;
        }
        while escape < escapes.len() && escapes[escape].span.end <= pos {
            escape += 1;
        }
        if escape < escapes.len() && escapes[escape].hidden_bracket() == pos {
            continue;
        }
        glyphs.push(Glyph {
            ch,
            width: char_width(ch),
            stripped: stripped.len(),
            raw: pos,
        });
        stripped.push(ch);
    }

    let width = display_width(&stripped);
    tagcell_core::trace!(
        style_tags = style_tags.len(),
        escapes = escapes.len(),
        runes = glyphs.len(),
        width,
        "decomposed"
    );

    let map = PositionMap {
        glyphs,
        raw_len: raw.len(),
        stripped_len: stripped.len(),
    };
    Decomposition {
        raw,
        style_tags,
        escapes,
        stripped,
        width,
        map,
    }
}

/// Display width of `raw` with tags removed and escapes resolved.
///
/// ```
/// use tagcell_text::string_width;
///
/// assert_eq!(string_width("[red]abc[blue]def"), string_width("abcdef"));
/// assert_eq!(string_width("[red[]"), 5);
/// ```
pub fn string_width(raw: &str) -> usize {
    decompose(raw).width()
}

fn overlaps_any(tags: &[StyleTag<'_>], span: &Range<usize>) -> bool {
    let first = tags.partition_point(|t| t.span.end <= span.start);
    tags.get(first).is_some_and(|t| t.span.start < span.end)
}
