//! Source location spans.

use std::fmt;

/// Source location span.
///
/// `start` and `len` are byte quantities relative to the compilation unit;
/// `line` and `column` are 1-based and locate `start` for humans (columns
/// count characters, not bytes).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub len: u32,
    pub line: u32,
    pub column: u32,
}

impl Span {
    /// Placeholder span for synthesized values.
    pub const DUMMY: Span = Span {
        start: 0,
        len: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span.
    #[inline]
    pub const fn new(start: u32, len: u32, line: u32, column: u32) -> Self {
        Span {
            start,
            len,
            line,
            column,
        }
    }

    /// Create a zero-length span at a position.
    #[inline]
    pub const fn point(start: u32, line: u32, column: u32) -> Self {
        Span::new(start, 0, line, column)
    }

    /// Exclusive end offset.
    #[inline]
    pub const fn end(&self) -> u32 {
        self.start + self.len
    }

    /// Check if span is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if an offset is within this span.
    #[inline]
    pub fn contains(&self, offset: u32) -> bool {
        offset >= self.start && offset < self.end()
    }

    /// Merge two spans into one covering both.
    ///
    /// Line and column are taken from whichever operand starts first.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        let first = if other.start < self.start {
            other
        } else {
            self
        };
        let end = self.end().max(other.end());
        Span {
            start: first.start,
            len: end - first.start,
            line: first.line,
            column: first.column,
        }
    }

    /// Shift the line number, used when a unit is one line of a larger file.
    #[inline]
    #[must_use]
    pub fn with_line_offset(self, offset: u32) -> Span {
        Span {
            line: self.line + offset,
            ..self
        }
    }

    /// Convert to a `std::ops::Range` over the unit's bytes.
    #[inline]
    pub fn to_range(&self) -> std::ops::Range<usize> {
        self.start as usize..self.end() as usize
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}@{}..{}",
            self.line,
            self.column,
            self.start,
            self.end()
        )
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
