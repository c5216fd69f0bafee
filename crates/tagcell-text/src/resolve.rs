#![forbid(unsafe_code)]

//! Applying style tags to a running style.

use tagcell_render::cell::{PackedRgba, StyleFlags};
use tagcell_style::{ColorResolver, Style};

use crate::tag::StyleTag;

/// Color text that resets a channel to the default color.
pub const RESET_COLOR: &str = "default";

/// Apply one style tag on top of `style`.
///
/// Returns the new style and whether attributes are now explicit. Listing any
/// flag makes them explicit: the attribute set is cleared, then the listed
/// flags are switched on.
///
/// ```
/// use tagcell_render::cell::{PackedRgba, StyleFlags};
/// use tagcell_style::{NamedColors, Style};
/// use tagcell_text::resolve::apply_style_tag;
/// use tagcell_text::tag::scan_style_tags;
///
/// let tag = &scan_style_tags("[red::bu]")[0];
/// let start = Style::new().bg(PackedRgba::BLUE).dim();
/// let (style, explicit) = apply_style_tag(start, false, tag, &NamedColors);
/// assert_eq!(style.fg, Some(PackedRgba::RED));
/// assert_eq!(style.bg, Some(PackedRgba::BLUE));
/// assert_eq!(style.attrs, StyleFlags::BOLD | StyleFlags::UNDERLINE);
/// assert!(explicit);
/// ```
pub fn apply_style_tag<R: ColorResolver + ?Sized>(
    mut style: Style,
    mut overwrite_attrs: bool,
    tag: &StyleTag<'_>,
    resolver: &R,
) -> (Style, bool) {
    if !tag.fg.is_empty() {
        style.fg = resolve_color(tag.fg, resolver);
    }
    if !tag.bg.is_empty() {
        style.bg = resolve_color(tag.bg, resolver);
    }
    if !tag.flags.is_empty() {
        overwrite_attrs = true;
        style.attrs = parse_flags(tag.flags);
    }
    (style, overwrite_attrs)
}

/// Apply a sequence of tags in order.
pub fn apply_style_tags<'t, 'a: 't, R: ColorResolver + ?Sized>(
    style: Style,
    overwrite_attrs: bool,
    tags: impl IntoIterator<Item = &'t StyleTag<'a>>,
    resolver: &R,
) -> (Style, bool) {
    tags.into_iter()
        .fold((style, overwrite_attrs), |(style, overwrite), tag| {
            apply_style_tag(style, overwrite, tag, resolver)
        })
}

/// Resolve color text from a tag. Unknown names are the default color.
pub fn resolve_color<R: ColorResolver + ?Sized>(name: &str, resolver: &R) -> Option<PackedRgba> {
    if name.eq_ignore_ascii_case(RESET_COLOR) {
        return None;
    }
    let color = resolver.resolve(name);
    if color.is_none() {
        tagcell_core::trace!(name, "unknown color, using default");
    }
    color
}

/// Flag characters to attributes. Characters other than `l b d r u` are
/// ignored.
pub fn parse_flags(flags: &str) -> StyleFlags {
    flags.chars().fold(StyleFlags::empty(), |acc, flag| {
        acc | match flag {
            'l' => StyleFlags::BLINK,
            'b' => StyleFlags::BOLD,
            'd' => StyleFlags::DIM,
            'r' => StyleFlags::REVERSE,
            'u' => StyleFlags::UNDERLINE,
            _ => StyleFlags::empty(),
        }
    })
}
