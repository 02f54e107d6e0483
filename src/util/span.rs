use std::fmt;

/// A range of bytes in the source text.
///
/// Spans are stored as a start offset plus a length so that zero-length spans
/// (used for tokens the parser had to invent) are representable at any
/// position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextSpan {
    /// Byte offset of the first character.
    pub start:  usize,
    /// Number of bytes covered.
    pub length: usize,
}

impl TextSpan {
    /// Creates a span from a start offset and a length.
    #[must_use]
    pub const fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }

    /// Creates a span covering `start..end`.
    ///
    /// # Example
    /// ```
    /// use minicalc::util::span::TextSpan;
    ///
    /// let span = TextSpan::from_bounds(2, 5);
    /// assert_eq!(span, TextSpan::new(2, 3));
    /// assert_eq!(span.end(), 5);
    /// ```
    #[must_use]
    pub const fn from_bounds(start: usize, end: usize) -> Self {
        Self { start,
               length: end.saturating_sub(start) }
    }

    /// Byte offset one past the last character.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.start + self.length
    }
}

impl From<std::ops::Range<usize>> for TextSpan {
    fn from(range: std::ops::Range<usize>) -> Self {
        Self::from_bounds(range.start, range.end)
    }
}

impl fmt::Display for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end())
    }
}
