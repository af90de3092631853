//! Runs: spans of text sharing one character format.

use crate::style::CharFormat;

/// Contiguous text carrying a single [`CharFormat`].
///
/// Runs are owned by their [`Block`](super::Block). A run is never empty
/// unless it is the only run of an empty block.
#[derive(Clone, Debug, PartialEq)]
pub struct Run {
    text: String,
    format: CharFormat,
}

impl Run {
    /// Create a run.
    #[must_use]
    pub fn new(text: impl Into<String>, format: CharFormat) -> Self {
        Self {
            text: text.into(),
            format,
        }
    }

    /// Create the placeholder run of an empty block.
    #[must_use]
    pub fn empty(format: CharFormat) -> Self {
        Self::new(String::new(), format)
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn format(&self) -> &CharFormat {
        &self.format
    }

    /// Length in characters.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub(crate) fn set_format(&mut self, format: CharFormat) {
        self.format = format;
    }

    pub(crate) fn push_str(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Split at a character offset, keeping the head and returning the tail
    /// with an identical format.
    pub(crate) fn split_off(&mut self, char_offset: usize) -> Self {
        let byte = byte_offset(&self.text, char_offset);
        let tail = self.text.split_off(byte);
        Self::new(tail, self.format.clone())
    }
}

/// Byte index of the `char_offset`-th character, or the string length when
/// the offset is at (or past) the end.
pub(crate) fn byte_offset(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map_or(text.len(), |(byte, _)| byte)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_off_keeps_format() {
        let format = CharFormat::new("Arial", 12.0).with_italic(true);
        let mut run = Run::new("Hello World", format.clone());
        let tail = run.split_off(5);

        assert_eq!(run.text(), "Hello");
        assert_eq!(tail.text(), " World");
        assert_eq!(tail.format(), &format);
    }

    #[test]
    fn test_len_counts_chars_not_bytes() {
        let run = Run::new("héllo", CharFormat::default());
        assert_eq!(run.len_chars(), 5);
        assert_eq!(byte_offset("héllo", 2), 3);
        assert_eq!(byte_offset("héllo", 5), 6);
    }
}
