//! Session configuration.

use crate::style::{Alignment, BlockFormat, CharFormat};

/// Smallest point size the explicit format controls accept.
pub const MIN_POINT_SIZE: f32 = 8.0;
/// Largest point size the explicit format controls accept.
pub const MAX_POINT_SIZE: f32 = 48.0;

/// Options for an [`EditSession`](crate::EditSession).
#[derive(Clone, Debug, PartialEq)]
pub struct SessionOptions {
    /// Format of the empty document and of text typed before any intent.
    pub default_format: CharFormat,
    /// Paragraph alignment of the empty document.
    pub default_alignment: Alignment,
    /// Inclusive lower bound for explicit point sizes.
    pub min_point_size: f32,
    /// Inclusive upper bound for explicit point sizes.
    pub max_point_size: f32,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            default_format: CharFormat::default(),
            default_alignment: Alignment::Left,
            min_point_size: MIN_POINT_SIZE,
            max_point_size: MAX_POINT_SIZE,
        }
    }
}

impl SessionOptions {
    /// Return options with a different default character format.
    #[must_use]
    pub fn with_default_format(mut self, format: CharFormat) -> Self {
        self.default_format = format;
        self
    }

    /// Return options with a different default alignment.
    #[must_use]
    pub fn with_default_alignment(mut self, alignment: Alignment) -> Self {
        self.default_alignment = alignment;
        self
    }

    /// Return options with different point size bounds.
    #[must_use]
    pub fn with_point_size_range(mut self, min: f32, max: f32) -> Self {
        self.min_point_size = min;
        self.max_point_size = max;
        self
    }

    /// Paragraph format of the empty document.
    #[must_use]
    pub const fn default_block_format(&self) -> BlockFormat {
        BlockFormat::new(self.default_alignment)
    }

    /// Check if `size` lies within the configured bounds.
    #[must_use]
    pub fn accepts_point_size(&self, size: f32) -> bool {
        size.is_finite() && size >= self.min_point_size && size <= self.max_point_size
    }
}
