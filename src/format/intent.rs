//! Style intents and their resolution into format deltas.

use crate::color::Rgb;
use crate::config::SessionOptions;
use crate::error::{Error, Result};
use crate::format::StylePreset;
use crate::markup::is_family_char;
use crate::style::{Alignment, BlockFormatDelta, CharFormat, CharFormatDelta, Weight};

/// Character and paragraph deltas produced by resolving an intent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormatDeltas {
    pub char: CharFormatDelta,
    pub block: BlockFormatDelta,
}

impl FormatDeltas {
    /// Check if applying these deltas changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.char.is_empty() && self.block.is_empty()
    }
}

/// Current state of the explicit format controls (font picker, size spinner,
/// bold/italic/underline toggles).
///
/// Every field is applied, whether or not the user just changed it.
#[derive(Clone, Debug, PartialEq)]
pub struct ExplicitFormat {
    pub font_family: String,
    pub point_size: f32,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl Default for ExplicitFormat {
    fn default() -> Self {
        Self::from_char_format(&CharFormat::default())
    }
}

impl ExplicitFormat {
    /// Controls mirroring an existing character format.
    #[must_use]
    pub fn from_char_format(format: &CharFormat) -> Self {
        Self {
            font_family: format.font_family.clone(),
            point_size: format.point_size,
            bold: format.is_bold(),
            italic: format.is_italic(),
            underline: format.is_underline(),
        }
    }

    #[must_use]
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    #[must_use]
    pub fn with_point_size(mut self, size: f32) -> Self {
        self.point_size = size;
        self
    }

    #[must_use]
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    #[must_use]
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    #[must_use]
    pub fn with_underline(mut self, underline: bool) -> Self {
        self.underline = underline;
        self
    }

    /// Reject values the controls should never have produced.
    pub fn validate(&self, options: &SessionOptions) -> Result<()> {
        if !options.accepts_point_size(self.point_size) {
            return Err(Error::InvalidRange {
                value: self.point_size,
                min: options.min_point_size,
                max: options.max_point_size,
            });
        }
        if self.font_family.trim().is_empty() || !self.font_family.chars().all(is_family_char) {
            return Err(Error::InvalidFont);
        }
        Ok(())
    }

    /// Character delta setting every controlled field. Color is untouched.
    #[must_use]
    pub fn to_delta(&self) -> CharFormatDelta {
        let weight = if self.bold { Weight::Bold } else { Weight::Normal };
        CharFormatDelta::new()
            .font_family(self.font_family.clone())
            .point_size(self.point_size)
            .weight(weight)
            .italic(self.italic)
            .underline(self.underline)
    }
}

/// What the user asked for.
#[derive(Clone, Debug, PartialEq)]
pub enum FormatIntent {
    /// A named preset was picked.
    Preset(StylePreset),
    /// One of the explicit format controls changed.
    Explicit(ExplicitFormat),
    /// The color picker closed; `None` when it was cancelled.
    Color(Option<Rgb>),
    /// An alignment was picked.
    Alignment(Alignment),
}

impl FormatIntent {
    /// Resolve to deltas, rejecting out-of-bounds values before any document
    /// is touched.
    pub fn resolve(&self, options: &SessionOptions) -> Result<FormatDeltas> {
        match self {
            Self::Preset(preset) => Ok(preset.resolve()),
            Self::Explicit(explicit) => {
                explicit.validate(options)?;
                Ok(FormatDeltas {
                    char: explicit.to_delta(),
                    block: BlockFormatDelta::new(),
                })
            }
            Self::Color(None) => Ok(FormatDeltas::default()),
            Self::Color(Some(rgb)) => Ok(FormatDeltas {
                char: CharFormatDelta::new().foreground(*rgb),
                block: BlockFormatDelta::new(),
            }),
            Self::Alignment(alignment) => Ok(FormatDeltas {
                char: CharFormatDelta::new(),
                block: BlockFormatDelta::new().alignment(*alignment),
            }),
        }
    }
}

impl From<StylePreset> for FormatIntent {
    fn from(preset: StylePreset) -> Self {
        Self::Preset(preset)
    }
}

impl From<Alignment> for FormatIntent {
    fn from(alignment: Alignment) -> Self {
        Self::Alignment(alignment)
    }
}

impl From<ExplicitFormat> for FormatIntent {
    fn from(explicit: ExplicitFormat) -> Self {
        Self::Explicit(explicit)
    }
}
