//! Selections over the document's character-offset space.

use std::fmt;
use std::ops::Range;

/// Half-open character range `[start, end)` across the whole document.
///
/// Offsets count characters across block boundaries, with one offset per
/// block separator. A zero-length selection is a caret.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Selection {
    start: usize,
    end: usize,
}

impl Selection {
    /// Create a selection from an anchor and a position, in either order.
    #[must_use]
    pub const fn new(anchor: usize, position: usize) -> Self {
        if anchor <= position {
            Self {
                start: anchor,
                end: position,
            }
        } else {
            Self {
                start: position,
                end: anchor,
            }
        }
    }

    /// Create a caret (zero-length selection).
    #[must_use]
    pub const fn caret(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    #[must_use]
    pub const fn start(self) -> usize {
        self.start
    }

    #[must_use]
    pub const fn end(self) -> usize {
        self.end
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.end - self.start
    }

    /// Check if this selection is a caret.
    #[must_use]
    pub const fn is_caret(self) -> bool {
        self.start == self.end
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.is_caret()
    }

    #[must_use]
    pub const fn range(self) -> Range<usize> {
        self.start..self.end
    }

    /// Intersection with `[start, end)`, if non-empty.
    #[must_use]
    pub fn intersect(self, start: usize, end: usize) -> Option<Range<usize>> {
        let lo = self.start.max(start);
        let hi = self.end.min(end);
        (lo < hi).then_some(lo..hi)
    }
}

impl From<Range<usize>> for Selection {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}
