//! RGB color type for text foregrounds.
//!
//! This module provides [`Rgb`], an 8-bit RGB triple as returned by a color
//! picker, and [`Foreground`], the character attribute that is either a
//! concrete color or the "inherit" sentinel.
//!
//! Colors parse from hex (`#RGB`, `#RRGGBB`) and from a small table of named
//! colors. Name lookup is case-insensitive and ignores spaces, so
//! `"dark blue"`, `"DarkBlue"` and `"darkblue"` all resolve to `#00008b`.
//!
//! # Examples
//!
//! ```
//! use coursetext::{Foreground, Rgb};
//!
//! let accent = Rgb::from_hex("#1a1a2e").unwrap();
//! assert_eq!(accent.to_string(), "#1a1a2e");
//!
//! assert_eq!(Rgb::from_name("dark blue"), Some(Rgb::DARK_BLUE));
//! assert_eq!(Foreground::parse_css("inherit"), Some(Foreground::Inherit));
//! ```

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Opaque RGB color with 8-bit components.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Named colors accepted by [`Rgb::from_name`], keyed by their space-free
/// lower-case spelling.
const NAMED_COLORS: &[(&str, Rgb)] = &[
    ("black", Rgb::BLACK),
    ("white", Rgb::WHITE),
    ("red", Rgb::RED),
    ("green", Rgb::GREEN),
    ("blue", Rgb::BLUE),
    ("darkblue", Rgb::DARK_BLUE),
    ("lightblue", Rgb::LIGHT_BLUE),
    ("darkred", Rgb::DARK_RED),
    ("darkgreen", Rgb::new(0x00, 0x64, 0x00)),
    ("navy", Rgb::new(0x00, 0x00, 0x80)),
    ("gray", Rgb::new(0x80, 0x80, 0x80)),
    ("grey", Rgb::new(0x80, 0x80, 0x80)),
    ("darkgray", Rgb::new(0xA9, 0xA9, 0xA9)),
    ("darkgrey", Rgb::new(0xA9, 0xA9, 0xA9)),
    ("orange", Rgb::new(0xFF, 0xA5, 0x00)),
    ("yellow", Rgb::new(0xFF, 0xFF, 0x00)),
    ("purple", Rgb::new(0x80, 0x00, 0x80)),
];

impl Rgb {
    /// Black.
    pub const BLACK: Self = Self::new(0x00, 0x00, 0x00);
    /// White.
    pub const WHITE: Self = Self::new(0xFF, 0xFF, 0xFF);
    /// Red.
    pub const RED: Self = Self::new(0xFF, 0x00, 0x00);
    /// Green (the CSS `green`, not `lime`).
    pub const GREEN: Self = Self::new(0x00, 0x80, 0x00);
    /// Blue.
    pub const BLUE: Self = Self::new(0x00, 0x00, 0xFF);
    /// Dark blue, `#00008b`.
    pub const DARK_BLUE: Self = Self::new(0x00, 0x00, 0x8B);
    /// Light blue, `#add8e6`.
    pub const LIGHT_BLUE: Self = Self::new(0xAD, 0xD8, 0xE6);
    /// Dark red, `#8b0000`.
    pub const DARK_RED: Self = Self::new(0x8B, 0x00, 0x00);

    /// Create a color from u8 components.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string (`#RGB` or `#RRGGBB`, `#` optional).
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return None;
        }

        match hex.len() {
            3 => {
                // #RGB -> #RRGGBB
                let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
                let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
                let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
                Some(Self::new(r * 17, g * 17, b * 17))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::new(r, g, b))
            }
            _ => None,
        }
    }

    /// Look up a named color, ignoring case and spaces.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let key: String = name
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        NAMED_COLORS
            .iter()
            .find(|(candidate, _)| *candidate == key)
            .map(|(_, rgb)| *rgb)
    }

    /// Components as a tuple.
    #[must_use]
    pub const fn to_rgb_u8(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Lower-case `#rrggbb` form used in markup.
    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = Error;

    /// Accepts hex notation or a named color.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        Self::from_hex(trimmed)
            .filter(|_| trimmed.starts_with('#'))
            .or_else(|| Self::from_name(trimmed))
            .or_else(|| Self::from_hex(trimmed))
            .ok_or_else(|| Error::InvalidColor(s.to_string()))
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

/// Foreground color of a run: a concrete color or inherited from context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Foreground {
    /// Use whatever color the display surface would use.
    #[default]
    Inherit,
    /// Explicit color.
    Rgb(Rgb),
}

impl Foreground {
    /// The explicit color, if any.
    #[must_use]
    pub const fn rgb(self) -> Option<Rgb> {
        match self {
            Self::Inherit => None,
            Self::Rgb(rgb) => Some(rgb),
        }
    }

    /// CSS value for the `color` declaration.
    #[must_use]
    pub fn to_css(self) -> String {
        match self {
            Self::Inherit => "inherit".to_string(),
            Self::Rgb(rgb) => rgb.to_hex(),
        }
    }

    /// Parse a CSS `color` value: `inherit`, hex, or a named color.
    #[must_use]
    pub fn parse_css(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("inherit") {
            return Some(Self::Inherit);
        }
        value.parse::<Rgb>().ok().map(Self::Rgb)
    }
}

impl From<Rgb> for Foreground {
    fn from(rgb: Rgb) -> Self {
        Self::Rgb(rgb)
    }
}

impl fmt::Display for Foreground {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}
