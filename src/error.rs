//! Error types for coursetext.

use std::fmt;

/// Result type alias for coursetext operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for document and formatting operations.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// Character offset outside the addressable document text.
    OutOfRange { offset: usize, len: usize },
    /// Block index past the last block.
    BlockOutOfRange { index: usize, count: usize },
    /// Numeric style parameter outside its declared bound (e.g. point size).
    InvalidRange { value: f32, min: f32, max: f32 },
    /// Empty font family name, or one holding a character markup cannot carry.
    InvalidFont,
    /// Text holding a character markup cannot carry (e.g. a C0 control).
    InvalidChar(char),
    /// Invalid color format (e.g., malformed hex string or unknown name).
    InvalidColor(String),
    /// Unknown style preset name.
    UnknownPreset(String),
    /// Markup that the importer cannot read.
    Markup(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { offset, len } => {
                write!(f, "offset {offset} out of range for document of length {len}")
            }
            Self::BlockOutOfRange { index, count } => {
                write!(f, "block {index} out of range for document with {count} blocks")
            }
            Self::InvalidRange { value, min, max } => {
                write!(f, "value {value} outside allowed range [{min}, {max}]")
            }
            Self::InvalidFont => write!(f, "font family is empty or not storable"),
            Self::InvalidChar(c) => write!(f, "character {c:?} cannot be stored in a document"),
            Self::InvalidColor(s) => write!(f, "invalid color format: {s}"),
            Self::UnknownPreset(s) => write!(f, "unknown style preset: {s}"),
            Self::Markup(s) => write!(f, "invalid markup: {s}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<roxmltree::Error> for Error {
    fn from(e: roxmltree::Error) -> Self {
        Self::Markup(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidColor("not-a-color".to_string());
        assert!(err.to_string().contains("invalid color format"));

        let err = Error::OutOfRange { offset: 12, len: 11 };
        assert_eq!(
            err.to_string(),
            "offset 12 out of range for document of length 11"
        );

        let err = Error::InvalidRange {
            value: 60.0,
            min: 8.0,
            max: 48.0,
        };
        assert!(err.to_string().contains("[8, 48]"));
        assert!(err.to_string().contains("60"));

        let err = Error::InvalidChar('\u{1}');
        assert_eq!(
            err.to_string(),
            "character '\\u{1}' cannot be stored in a document"
        );
    }

    #[test]
    fn test_xml_error_conversion() {
        let xml_err = roxmltree::Document::parse("<p>").unwrap_err();
        let err: Error = xml_err.into();
        assert!(matches!(err, Error::Markup(_)));
    }
}
