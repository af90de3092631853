//! Named style presets.

use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::format::FormatDeltas;
use crate::style::{Alignment, BlockFormatDelta, CharFormatDelta, Weight};
use std::fmt;
use std::str::FromStr;

/// A named bundle of character and paragraph formatting.
///
/// | Preset    | Font   | Size | Weight | Underline | Color      | Alignment |
/// |-----------|--------|------|--------|-----------|------------|-----------|
/// | Title     | Tahoma | 16   | Bold   | yes       | dark blue  | Center    |
/// | Subtitle  | Tahoma | 14   | Bold   | yes       | light blue | Center    |
/// | Important | Arial  | 12   | Bold   | no        | dark red   | Justified |
/// | Normal    | Arial  | 11   | Normal | no        | black      | Left      |
///
/// Every preset also clears italic. `Custom` maps to nothing: the explicit
/// format controls drive formatting instead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StylePreset {
    #[default]
    Custom,
    Title,
    Subtitle,
    Important,
    Normal,
}

impl StylePreset {
    /// All presets, in the order a picker lists them.
    pub const ALL: [Self; 5] = [
        Self::Custom,
        Self::Title,
        Self::Subtitle,
        Self::Important,
        Self::Normal,
    ];

    /// Picker label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Custom => "Custom",
            Self::Title => "TITLE",
            Self::Subtitle => "SUBTITLE",
            Self::Important => "IMPORTANT",
            Self::Normal => "NORMAL",
        }
    }

    /// Resolve to concrete deltas. `Custom` yields empty deltas.
    #[must_use]
    pub fn resolve(self) -> FormatDeltas {
        let (family, size, weight, underline, color, alignment) = match self {
            Self::Custom => return FormatDeltas::default(),
            Self::Title => ("Tahoma", 16.0, Weight::Bold, true, Rgb::DARK_BLUE, Alignment::Center),
            Self::Subtitle => ("Tahoma", 14.0, Weight::Bold, true, Rgb::LIGHT_BLUE, Alignment::Center),
            Self::Important => ("Arial", 12.0, Weight::Bold, false, Rgb::DARK_RED, Alignment::Justified),
            Self::Normal => ("Arial", 11.0, Weight::Normal, false, Rgb::BLACK, Alignment::Left),
        };
        FormatDeltas {
            char: CharFormatDelta::new()
                .font_family(family)
                .point_size(size)
                .weight(weight)
                .italic(false)
                .underline(underline)
                .foreground(color),
            block: BlockFormatDelta::new().alignment(alignment),
        }
    }
}

impl fmt::Display for StylePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StylePreset {
    type Err = Error;

    /// Case-insensitive match on the picker label.
    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|preset| preset.label().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::UnknownPreset(s.to_string()))
    }
}
