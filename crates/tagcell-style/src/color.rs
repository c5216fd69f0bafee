#![forbid(unsafe_code)]

//! Color name resolution.
//!
//! Tags name colors as text: a word such as `red` or `steelblue`, or a
//! `#RRGGBB` hex triplet. A [`ColorResolver`] turns that text into a concrete
//! [`PackedRgba`]; `None` means "default color", which is also what any name
//! the resolver does not know degrades to.
//!
//! # Example
//! ```
//! use tagcell_render::cell::PackedRgba;
//! use tagcell_style::color::{ColorResolver, NamedColors, Palette};
//!
//! assert_eq!(NamedColors.resolve("red"), Some(PackedRgba::RED));
//! assert_eq!(NamedColors.resolve("#00ff00"), Some(PackedRgba::GREEN));
//! assert_eq!(NamedColors.resolve("nosuchcolor"), None);
//!
//! let palette = Palette::new().with("accent", PackedRgba::rgb(255, 128, 0));
//! assert_eq!(palette.resolve("accent"), Some(PackedRgba::rgb(255, 128, 0)));
//! assert_eq!(palette.resolve("blue"), Some(PackedRgba::BLUE));
//! ```

use std::collections::HashMap;
use std::fmt;

use tagcell_render::cell::PackedRgba;

/// Maps color text from a tag to a concrete color.
pub trait ColorResolver {
    /// Resolve `name`, or `None` for the default color.
    fn resolve(&self, name: &str) -> Option<PackedRgba>;
}

impl<R: ColorResolver + ?Sized> ColorResolver for &R {
    fn resolve(&self, name: &str) -> Option<PackedRgba> {
        (**self).resolve(name)
    }
}

/// Errors from [`parse_hex_color`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// The text does not start with `#`.
    MissingHash,
    /// The text after `#` is not exactly six characters long.
    InvalidLength { len: usize },
    /// A character after `#` is not a hex digit.
    InvalidDigit { position: usize, found: char },
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingHash => write!(f, "hex color must start with '#'"),
            Self::InvalidLength { len } => {
                write!(f, "hex color needs 6 digits after '#', found {len}")
            }
            Self::InvalidDigit { position, found } => {
                write!(f, "invalid hex digit {found:?} at position {position}")
            }
        }
    }
}

impl std::error::Error for ColorParseError {}

/// Parse `#RRGGBB` (case-insensitive) into an opaque color.
pub fn parse_hex_color(text: &str) -> Result<PackedRgba, ColorParseError> {
    let digits = text.strip_prefix('#').ok_or(ColorParseError::MissingHash)?;
    let len = digits.chars().count();
    if len != 6 {
        return Err(ColorParseError::InvalidLength { len });
    }
    let mut rgb: u32 = 0;
    for (i, ch) in digits.chars().enumerate() {
        let digit = ch.to_digit(16).ok_or(ColorParseError::InvalidDigit {
            position: i + 1,
            found: ch,
        })?;
        rgb = (rgb << 4) | digit;
    }
    Ok(PackedRgba::from_rgb_u32(rgb))
}

/// The standard resolver: W3C/X11 color names (case-insensitive) and
/// `#RRGGBB`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NamedColors;

impl NamedColors {
    /// Look up a color name. Hex text is not handled here.
    pub fn lookup(name: &str) -> Option<PackedRgba> {
        if let Ok(i) = COLOR_NAMES.binary_search_by(|(n, _)| cmp_ignore_ascii_case(n, name)) {
            return Some(COLOR_NAMES[i].1);
        }
        None
    }
}

impl ColorResolver for NamedColors {
    fn resolve(&self, name: &str) -> Option<PackedRgba> {
        if name.starts_with('#') {
            return parse_hex_color(name).ok();
        }
        Self::lookup(name)
    }
}

fn cmp_ignore_ascii_case(table: &str, name: &str) -> std::cmp::Ordering {
    table
        .bytes()
        .cmp(name.bytes().map(|b| b.to_ascii_lowercase()))
}

/// A resolver with application-defined names layered over [`NamedColors`].
///
/// Custom names are matched case-insensitively and take precedence over the
/// standard names.
#[derive(Debug, Clone, Default)]
pub struct Palette {
    custom: HashMap<String, PackedRgba>,
}

impl Palette {
    /// An empty palette; resolves exactly like [`NamedColors`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Palette::define`].
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, color: PackedRgba) -> Self {
        self.define(name, color);
        self
    }

    /// Define (or redefine) a custom color name.
    pub fn define(&mut self, name: impl Into<String>, color: PackedRgba) {
        self.custom.insert(name.into().to_ascii_lowercase(), color);
    }

    /// Remove a custom color name. Returns the color it mapped to.
    pub fn remove(&mut self, name: &str) -> Option<PackedRgba> {
        self.custom.remove(&name.to_ascii_lowercase())
    }

    /// Number of custom names.
    pub fn len(&self) -> usize {
        self.custom.len()
    }

    /// Whether no custom names are defined.
    pub fn is_empty(&self) -> bool {
        self.custom.is_empty()
    }
}

impl ColorResolver for Palette {
    fn resolve(&self, name: &str) -> Option<PackedRgba> {
        if let Some(color) = self.custom.get(&name.to_ascii_lowercase()) {
            return Some(*color);
        }
        NamedColors.resolve(name)
    }
}

/// W3C/X11 color names, sorted for binary search.
const COLOR_NAMES: [(&str, PackedRgba); 148] = [
    ("aliceblue", PackedRgba::from_rgb_u32(0xF0F8FF)),
    ("antiquewhite", PackedRgba::from_rgb_u32(0xFAEBD7)),
    ("aqua", PackedRgba::from_rgb_u32(0x00FFFF)),
    ("aquamarine", PackedRgba::from_rgb_u32(0x7FFFD4)),
    ("azure", PackedRgba::from_rgb_u32(0xF0FFFF)),
    ("beige", PackedRgba::from_rgb_u32(0xF5F5DC)),
    ("bisque", PackedRgba::from_rgb_u32(0xFFE4C4)),
    ("black", PackedRgba::from_rgb_u32(0x000000)),
    ("blanchedalmond", PackedRgba::from_rgb_u32(0xFFEBCD)),
    ("blue", PackedRgba::from_rgb_u32(0x0000FF)),
    ("blueviolet", PackedRgba::from_rgb_u32(0x8A2BE2)),
    ("brown", PackedRgba::from_rgb_u32(0xA52A2A)),
    ("burlywood", PackedRgba::from_rgb_u32(0xDEB887)),
    ("cadetblue", PackedRgba::from_rgb_u32(0x5F9EA0)),
    ("chartreuse", PackedRgba::from_rgb_u32(0x7FFF00)),
    ("chocolate", PackedRgba::from_rgb_u32(0xD2691E)),
    ("coral", PackedRgba::from_rgb_u32(0xFF7F50)),
    ("cornflowerblue", PackedRgba::from_rgb_u32(0x6495ED)),
    ("cornsilk", PackedRgba::from_rgb_u32(0xFFF8DC)),
    ("crimson", PackedRgba::from_rgb_u32(0xDC143C)),
    ("cyan", PackedRgba::from_rgb_u32(0x00FFFF)),
    ("darkblue", PackedRgba::from_rgb_u32(0x00008B)),
    ("darkcyan", PackedRgba::from_rgb_u32(0x008B8B)),
    ("darkgoldenrod", PackedRgba::from_rgb_u32(0xB8860B)),
    ("darkgray", PackedRgba::from_rgb_u32(0xA9A9A9)),
    ("darkgreen", PackedRgba::from_rgb_u32(0x006400)),
    ("darkgrey", PackedRgba::from_rgb_u32(0xA9A9A9)),
    ("darkkhaki", PackedRgba::from_rgb_u32(0xBDB76B)),
    ("darkmagenta", PackedRgba::from_rgb_u32(0x8B008B)),
    ("darkolivegreen", PackedRgba::from_rgb_u32(0x556B2F)),
    ("darkorange", PackedRgba::from_rgb_u32(0xFF8C00)),
    ("darkorchid", PackedRgba::from_rgb_u32(0x9932CC)),
    ("darkred", PackedRgba::from_rgb_u32(0x8B0000)),
    ("darksalmon", PackedRgba::from_rgb_u32(0xE9967A)),
    ("darkseagreen", PackedRgba::from_rgb_u32(0x8FBC8F)),
    ("darkslateblue", PackedRgba::from_rgb_u32(0x483D8B)),
    ("darkslategray", PackedRgba::from_rgb_u32(0x2F4F4F)),
    ("darkslategrey", PackedRgba::from_rgb_u32(0x2F4F4F)),
    ("darkturquoise", PackedRgba::from_rgb_u32(0x00CED1)),
    ("darkviolet", PackedRgba::from_rgb_u32(0x9400D3)),
    ("deeppink", PackedRgba::from_rgb_u32(0xFF1493)),
    ("deepskyblue", PackedRgba::from_rgb_u32(0x00BFFF)),
    ("dimgray", PackedRgba::from_rgb_u32(0x696969)),
    ("dimgrey", PackedRgba::from_rgb_u32(0x696969)),
    ("dodgerblue", PackedRgba::from_rgb_u32(0x1E90FF)),
    ("firebrick", PackedRgba::from_rgb_u32(0xB22222)),
    ("floralwhite", PackedRgba::from_rgb_u32(0xFFFAF0)),
    ("forestgreen", PackedRgba::from_rgb_u32(0x228B22)),
    ("fuchsia", PackedRgba::from_rgb_u32(0xFF00FF)),
    ("gainsboro", PackedRgba::from_rgb_u32(0xDCDCDC)),
    ("ghostwhite", PackedRgba::from_rgb_u32(0xF8F8FF)),
    ("gold", PackedRgba::from_rgb_u32(0xFFD700)),
    ("goldenrod", PackedRgba::from_rgb_u32(0xDAA520)),
    ("gray", PackedRgba::from_rgb_u32(0x808080)),
    ("green", PackedRgba::from_rgb_u32(0x008000)),
    ("greenyellow", PackedRgba::from_rgb_u32(0xADFF2F)),
    ("grey", PackedRgba::from_rgb_u32(0x808080)),
    ("honeydew", PackedRgba::from_rgb_u32(0xF0FFF0)),
    ("hotpink", PackedRgba::from_rgb_u32(0xFF69B4)),
    ("indianred", PackedRgba::from_rgb_u32(0xCD5C5C)),
    ("indigo", PackedRgba::from_rgb_u32(0x4B0082)),
    ("ivory", PackedRgba::from_rgb_u32(0xFFFFF0)),
    ("khaki", PackedRgba::from_rgb_u32(0xF0E68C)),
    ("lavender", PackedRgba::from_rgb_u32(0xE6E6FA)),
    ("lavenderblush", PackedRgba::from_rgb_u32(0xFFF0F5)),
    ("lawngreen", PackedRgba::from_rgb_u32(0x7CFC00)),
    ("lemonchiffon", PackedRgba::from_rgb_u32(0xFFFACD)),
    ("lightblue", PackedRgba::from_rgb_u32(0xADD8E6)),
    ("lightcoral", PackedRgba::from_rgb_u32(0xF08080)),
    ("lightcyan", PackedRgba::from_rgb_u32(0xE0FFFF)),
    ("lightgoldenrodyellow", PackedRgba::from_rgb_u32(0xFAFAD2)),
    ("lightgray", PackedRgba::from_rgb_u32(0xD3D3D3)),
    ("lightgreen", PackedRgba::from_rgb_u32(0x90EE90)),
    ("lightgrey", PackedRgba::from_rgb_u32(0xD3D3D3)),
    ("lightpink", PackedRgba::from_rgb_u32(0xFFB6C1)),
    ("lightsalmon", PackedRgba::from_rgb_u32(0xFFA07A)),
    ("lightseagreen", PackedRgba::from_rgb_u32(0x20B2AA)),
    ("lightskyblue", PackedRgba::from_rgb_u32(0x87CEFA)),
    ("lightslategray", PackedRgba::from_rgb_u32(0x778899)),
    ("lightslategrey", PackedRgba::from_rgb_u32(0x778899)),
    ("lightsteelblue", PackedRgba::from_rgb_u32(0xB0C4DE)),
    ("lightyellow", PackedRgba::from_rgb_u32(0xFFFFE0)),
    ("lime", PackedRgba::from_rgb_u32(0x00FF00)),
    ("limegreen", PackedRgba::from_rgb_u32(0x32CD32)),
    ("linen", PackedRgba::from_rgb_u32(0xFAF0E6)),
    ("magenta", PackedRgba::from_rgb_u32(0xFF00FF)),
    ("maroon", PackedRgba::from_rgb_u32(0x800000)),
    ("mediumaquamarine", PackedRgba::from_rgb_u32(0x66CDAA)),
    ("mediumblue", PackedRgba::from_rgb_u32(0x0000CD)),
    ("mediumorchid", PackedRgba::from_rgb_u32(0xBA55D3)),
    ("mediumpurple", PackedRgba::from_rgb_u32(0x9370DB)),
    ("mediumseagreen", PackedRgba::from_rgb_u32(0x3CB371)),
    ("mediumslateblue", PackedRgba::from_rgb_u32(0x7B68EE)),
    ("mediumspringgreen", PackedRgba::from_rgb_u32(0x00FA9A)),
    ("mediumturquoise", PackedRgba::from_rgb_u32(0x48D1CC)),
    ("mediumvioletred", PackedRgba::from_rgb_u32(0xC71585)),
    ("midnightblue", PackedRgba::from_rgb_u32(0x191970)),
    ("mintcream", PackedRgba::from_rgb_u32(0xF5FFFA)),
    ("mistyrose", PackedRgba::from_rgb_u32(0xFFE4E1)),
    ("moccasin", PackedRgba::from_rgb_u32(0xFFE4B5)),
    ("navajowhite", PackedRgba::from_rgb_u32(0xFFDEAD)),
    ("navy", PackedRgba::from_rgb_u32(0x000080)),
    ("oldlace", PackedRgba::from_rgb_u32(0xFDF5E6)),
    ("olive", PackedRgba::from_rgb_u32(0x808000)),
    ("olivedrab", PackedRgba::from_rgb_u32(0x6B8E23)),
    ("orange", PackedRgba::from_rgb_u32(0xFFA500)),
    ("orangered", PackedRgba::from_rgb_u32(0xFF4500)),
    ("orchid", PackedRgba::from_rgb_u32(0xDA70D6)),
    ("palegoldenrod", PackedRgba::from_rgb_u32(0xEEE8AA)),
    ("palegreen", PackedRgba::from_rgb_u32(0x98FB98)),
    ("paleturquoise", PackedRgba::from_rgb_u32(0xAFEEEE)),
    ("palevioletred", PackedRgba::from_rgb_u32(0xDB7093)),
    ("papayawhip", PackedRgba::from_rgb_u32(0xFFEFD5)),
    ("peachpuff", PackedRgba::from_rgb_u32(0xFFDAB9)),
    ("peru", PackedRgba::from_rgb_u32(0xCD853F)),
    ("pink", PackedRgba::from_rgb_u32(0xFFC0CB)),
    ("plum", PackedRgba::from_rgb_u32(0xDDA0DD)),
    ("powderblue", PackedRgba::from_rgb_u32(0xB0E0E6)),
    ("purple", PackedRgba::from_rgb_u32(0x800080)),
    ("rebeccapurple", PackedRgba::from_rgb_u32(0x663399)),
    ("red", PackedRgba::from_rgb_u32(0xFF0000)),
    ("rosybrown", PackedRgba::from_rgb_u32(0xBC8F8F)),
    ("royalblue", PackedRgba::from_rgb_u32(0x4169E1)),
    ("saddlebrown", PackedRgba::from_rgb_u32(0x8B4513)),
    ("salmon", PackedRgba::from_rgb_u32(0xFA8072)),
    ("sandybrown", PackedRgba::from_rgb_u32(0xF4A460)),
    ("seagreen", PackedRgba::from_rgb_u32(0x2E8B57)),
    ("seashell", PackedRgba::from_rgb_u32(0xFFF5EE)),
    ("sienna", PackedRgba::from_rgb_u32(0xA0522D)),
    ("silver", PackedRgba::from_rgb_u32(0xC0C0C0)),
    ("skyblue", PackedRgba::from_rgb_u32(0x87CEEB)),
    ("slateblue", PackedRgba::from_rgb_u32(0x6A5ACD)),
    ("slategray", PackedRgba::from_rgb_u32(0x708090)),
    ("slategrey", PackedRgba::from_rgb_u32(0x708090)),
    ("snow", PackedRgba::from_rgb_u32(0xFFFAFA)),
    ("springgreen", PackedRgba::from_rgb_u32(0x00FF7F)),
    ("steelblue", PackedRgba::from_rgb_u32(0x4682B4)),
    ("tan", PackedRgba::from_rgb_u32(0xD2B48C)),
    ("teal", PackedRgba::from_rgb_u32(0x008080)),
    ("thistle", PackedRgba::from_rgb_u32(0xD8BFD8)),
    ("tomato", PackedRgba::from_rgb_u32(0xFF6347)),
    ("turquoise", PackedRgba::from_rgb_u32(0x40E0D0)),
    ("violet", PackedRgba::from_rgb_u32(0xEE82EE)),
    ("wheat", PackedRgba::from_rgb_u32(0xF5DEB3)),
    ("white", PackedRgba::from_rgb_u32(0xFFFFFF)),
    ("whitesmoke", PackedRgba::from_rgb_u32(0xF5F5F5)),
    ("yellow", PackedRgba::from_rgb_u32(0xFFFF00)),
    ("yellowgreen", PackedRgba::from_rgb_u32(0x9ACD32)),
];
