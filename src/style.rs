//! Character and paragraph formats, and the deltas that modify them.
//!
//! This module provides the value types the document model stores:
//!
//! - [`TextAttributes`]: Bitflags for bold, italic, underline
//! - [`CharFormat`]: Complete character format (font, size, flags, color)
//! - [`BlockFormat`]: Paragraph format (alignment)
//! - [`CharFormatDelta`] / [`BlockFormatDelta`]: Partial formats where each
//!   field is either set (overwrite) or unset (keep the existing value)
//!
//! # Examples
//!
//! ```
//! use coursetext::{CharFormat, CharFormatDelta, Rgb, Weight};
//!
//! let base = CharFormat::new("Arial", 11.0).with_italic(true);
//!
//! // Only weight and color change, italic and font survive
//! let delta = CharFormatDelta::new()
//!     .weight(Weight::Bold)
//!     .foreground(Rgb::DARK_RED);
//! let merged = base.merge(&delta);
//!
//! assert_eq!(merged.weight(), Weight::Bold);
//! assert!(merged.is_italic());
//! assert_eq!(merged.font_family, "Arial");
//! ```

use crate::color::Foreground;
use crate::error::{Error, Result};
use bitflags::bitflags;
use std::fmt;
use std::str::FromStr;

/// Font family used by a fresh session unless configured otherwise.
pub const DEFAULT_FONT_FAMILY: &str = "Sans Serif";
/// Point size used by a fresh session unless configured otherwise.
pub const DEFAULT_POINT_SIZE: f32 = 10.0;

bitflags! {
    /// Character flags (bold, italic, underline).
    ///
    /// Flags combine with bitwise OR. Deltas carry a second mask that says
    /// which of these flags they set.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct TextAttributes: u8 {
        /// Bold weight.
        const BOLD      = 0x01;
        /// Italic slant.
        const ITALIC    = 0x02;
        /// Underlined text.
        const UNDERLINE = 0x04;
    }
}

impl TextAttributes {
    /// Overwrite the flags selected by `mask` with the corresponding bits of
    /// `values`, keeping every other flag.
    #[must_use]
    pub const fn overwrite(self, values: Self, mask: Self) -> Self {
        Self::from_bits_retain((self.bits() & !mask.bits()) | (values.bits() & mask.bits()))
    }
}

/// Font weight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Weight {
    #[default]
    Normal,
    Bold,
}

impl Weight {
    /// CSS `font-weight` keyword.
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Bold => "bold",
        }
    }

    /// Parse a CSS `font-weight` value. Numeric weights of 600 and up are bold.
    #[must_use]
    pub fn parse_css(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "normal" | "lighter" => Some(Self::Normal),
            "bold" | "bolder" => Some(Self::Bold),
            other => other
                .parse::<u16>()
                .ok()
                .map(|n| if n >= 600 { Self::Bold } else { Self::Normal }),
        }
    }
}

/// Paragraph alignment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Alignment {
    #[default]
    Left,
    Right,
    Center,
    Justified,
}

impl Alignment {
    /// All alignments, in the order a picker lists them.
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Center, Self::Justified];

    /// CSS `text-align` keyword.
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
            Self::Justified => "justify",
        }
    }

    /// Parse a CSS `text-align` value.
    #[must_use]
    pub fn parse_css(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "left" | "start" => Some(Self::Left),
            "right" | "end" => Some(Self::Right),
            "center" => Some(Self::Center),
            "justify" => Some(Self::Justified),
            _ => None,
        }
    }

    /// Label shown by an alignment picker.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Left => "Left",
            Self::Right => "Right",
            Self::Center => "Center",
            Self::Justified => "Justified",
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Alignment {
    type Err = Error;

    /// Accepts picker labels ("Justified") and CSS keywords ("justify").
    fn from_str(s: &str) -> Result<Self> {
        if let Some(alignment) = Self::ALL
            .into_iter()
            .find(|a| a.label().eq_ignore_ascii_case(s.trim()))
        {
            return Ok(alignment);
        }
        Self::parse_css(s).ok_or_else(|| Error::Markup(format!("unknown alignment: {s}")))
    }
}

/// Complete character format of a run.
///
/// Compared by value: two adjacent runs with equal formats are always
/// coalesced into one.
#[derive(Clone, Debug, PartialEq)]
pub struct CharFormat {
    /// Font family name.
    pub font_family: String,
    /// Font size in points (positive).
    pub point_size: f32,
    /// Bold, italic and underline flags.
    pub attributes: TextAttributes,
    /// Text color.
    pub foreground: Foreground,
}

impl Default for CharFormat {
    fn default() -> Self {
        Self::new(DEFAULT_FONT_FAMILY, DEFAULT_POINT_SIZE)
    }
}

impl CharFormat {
    /// Create a plain format with the given font and size.
    #[must_use]
    pub fn new(font_family: impl Into<String>, point_size: f32) -> Self {
        Self {
            font_family: font_family.into(),
            point_size,
            attributes: TextAttributes::empty(),
            foreground: Foreground::Inherit,
        }
    }

    /// Font weight derived from the bold flag.
    #[must_use]
    pub const fn weight(&self) -> Weight {
        if self.attributes.contains(TextAttributes::BOLD) {
            Weight::Bold
        } else {
            Weight::Normal
        }
    }

    #[must_use]
    pub const fn is_bold(&self) -> bool {
        self.attributes.contains(TextAttributes::BOLD)
    }

    #[must_use]
    pub const fn is_italic(&self) -> bool {
        self.attributes.contains(TextAttributes::ITALIC)
    }

    #[must_use]
    pub const fn is_underline(&self) -> bool {
        self.attributes.contains(TextAttributes::UNDERLINE)
    }

    /// Return a new format with the given weight.
    #[must_use]
    pub fn with_weight(mut self, weight: Weight) -> Self {
        self.attributes
            .set(TextAttributes::BOLD, weight == Weight::Bold);
        self
    }

    /// Return a new format with the italic flag set or cleared.
    #[must_use]
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.attributes.set(TextAttributes::ITALIC, italic);
        self
    }

    /// Return a new format with the underline flag set or cleared.
    #[must_use]
    pub fn with_underline(mut self, underline: bool) -> Self {
        self.attributes.set(TextAttributes::UNDERLINE, underline);
        self
    }

    /// Return a new format with the given foreground.
    #[must_use]
    pub fn with_foreground(mut self, foreground: impl Into<Foreground>) -> Self {
        self.foreground = foreground.into();
        self
    }

    /// Apply a delta: set fields overwrite, unset fields are kept.
    #[must_use]
    pub fn merge(&self, delta: &CharFormatDelta) -> Self {
        Self {
            font_family: delta
                .font_family
                .clone()
                .unwrap_or_else(|| self.font_family.clone()),
            point_size: delta.point_size.unwrap_or(self.point_size),
            attributes: self
                .attributes
                .overwrite(delta.attributes, delta.attributes_mask),
            foreground: delta.foreground.unwrap_or(self.foreground),
        }
    }
}

/// Partial character format.
///
/// `None` fields (and flags outside `attributes_mask`) are unset and leave
/// the existing value alone when merged.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CharFormatDelta {
    pub font_family: Option<String>,
    pub point_size: Option<f32>,
    /// Flag values; only the bits in `attributes_mask` are meaningful.
    pub attributes: TextAttributes,
    /// Which flags this delta sets.
    pub attributes_mask: TextAttributes,
    pub foreground: Option<Foreground>,
}

impl CharFormatDelta {
    /// Empty delta: merging it changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Delta that sets every field from `format`.
    #[must_use]
    pub fn from_format(format: &CharFormat) -> Self {
        Self {
            font_family: Some(format.font_family.clone()),
            point_size: Some(format.point_size),
            attributes: format.attributes,
            attributes_mask: TextAttributes::all(),
            foreground: Some(format.foreground),
        }
    }

    /// Check if merging this delta is a no-op.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.font_family.is_none()
            && self.point_size.is_none()
            && self.attributes_mask.is_empty()
            && self.foreground.is_none()
    }

    #[must_use]
    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    #[must_use]
    pub fn point_size(mut self, size: f32) -> Self {
        self.point_size = Some(size);
        self
    }

    #[must_use]
    pub fn weight(self, weight: Weight) -> Self {
        self.flag(TextAttributes::BOLD, weight == Weight::Bold)
    }

    #[must_use]
    pub fn italic(self, italic: bool) -> Self {
        self.flag(TextAttributes::ITALIC, italic)
    }

    #[must_use]
    pub fn underline(self, underline: bool) -> Self {
        self.flag(TextAttributes::UNDERLINE, underline)
    }

    #[must_use]
    pub fn foreground(mut self, foreground: impl Into<Foreground>) -> Self {
        self.foreground = Some(foreground.into());
        self
    }

    fn flag(mut self, flag: TextAttributes, on: bool) -> Self {
        self.attributes_mask |= flag;
        self.attributes.set(flag, on);
        self
    }
}

/// Paragraph format of a block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BlockFormat {
    pub alignment: Alignment,
}

impl BlockFormat {
    #[must_use]
    pub const fn new(alignment: Alignment) -> Self {
        Self { alignment }
    }

    /// Apply a delta: set fields overwrite, unset fields are kept.
    #[must_use]
    pub fn merge(self, delta: &BlockFormatDelta) -> Self {
        Self {
            alignment: delta.alignment.unwrap_or(self.alignment),
        }
    }
}

/// Partial paragraph format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BlockFormatDelta {
    pub alignment: Option<Alignment>,
}

impl BlockFormatDelta {
    #[must_use]
    pub const fn new() -> Self {
        Self { alignment: None }
    }

    #[must_use]
    pub const fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.alignment.is_none()
    }
}
