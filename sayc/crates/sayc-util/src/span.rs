//! Span module - Source location tracking.
//!
//! Say diagnostics are reported by line, so a [`Span`] carries the byte range
//! of the offending text together with the 1-based line it starts on.
//!
//! # Examples
//!
//! ```
//! use sayc_util::span::Span;
//!
//! let span = Span::new(10, 14, 2);
//! assert_eq!(span.len(), 4);
//!
//! let point = Span::point(7);
//! assert!(point.is_empty());
//! ```

use std::fmt;

/// Source location span
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
}

impl Span {
    /// Dummy span for diagnostics that have no location.
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
    };

    /// Create a span covering `start..end` that begins on `line`.
    #[inline]
    pub const fn new(start: usize, end: usize, line: u32) -> Self {
        Self { start, end, line }
    }

    /// Create an empty span that only records a line.
    #[inline]
    pub const fn point(line: u32) -> Self {
        Self {
            start: 0,
            end: 0,
            line,
        }
    }

    /// Length of the span in bytes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span covers no bytes.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if this is the dummy span.
    #[inline]
    pub fn is_dummy(&self) -> bool {
        *self == Self::DUMMY
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}", self.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_span() {
        let span = Span::new(3, 9, 2);
        assert_eq!(span.start, 3);
        assert_eq!(span.end, 9);
        assert_eq!(span.line, 2);
        assert_eq!(span.len(), 6);
        assert!(!span.is_empty());
    }

    #[test]
    fn test_point_span() {
        let span = Span::point(5);
        assert!(span.is_empty());
        assert_eq!(span.line, 5);
        assert!(!span.is_dummy());
    }

    #[test]
    fn test_dummy_span() {
        assert!(Span::DUMMY.is_dummy());
        assert_eq!(Span::default(), Span::DUMMY);
    }

    #[test]
    fn test_display() {
        assert_eq!(Span::new(0, 1, 12).to_string(), "line 12");
    }
}
