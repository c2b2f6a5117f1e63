//! Character cursor for traversing source text.
//!
//! The [`Cursor`] walks a `&str` one character at a time, tracks the current
//! line, and can give back the last character it consumed. Snapshots let the
//! lexer look past the current lexeme and then rewind without side effects.

/// A cursor over source text.
///
/// # Example
///
/// ```
/// use sayc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("say x,");
/// assert_eq!(cursor.current(), Some('s'));
/// assert_eq!(cursor.bump(), Some('s'));
/// assert_eq!(cursor.current(), Some('a'));
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Last character consumed by [`Cursor::bump`], if it can still be
    /// pushed back.
    last: Option<char>,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor positioned at the first character of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            last: None,
        }
    }

    /// Returns the character under the cursor, or `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<char> {
        // Fast path for ASCII
        match self.source.as_bytes().get(self.position) {
            None => None,
            Some(&b) if b < 128 => Some(b as char),
            Some(_) => self.source[self.position..].chars().next(),
        }
    }

    /// Returns the character after the current one without moving.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        let mut chars = self.source[self.position..].chars();
        chars.next();
        chars.next()
    }

    /// Consumes the current character and returns it.
    ///
    /// Moving past `'\n'` increments the line counter. At end of input this
    /// returns `None` and changes nothing.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.current()?;
        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
        }
        self.last = Some(c);
        Some(c)
    }

    /// Moves past the current character and returns the new current one.
    ///
    /// ```
    /// use sayc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("ab");
    /// assert_eq!(cursor.advance(), Some('b'));
    /// assert_eq!(cursor.advance(), None);
    /// assert_eq!(cursor.advance(), None);
    /// ```
    #[inline]
    pub fn advance(&mut self) -> Option<char> {
        self.bump();
        self.current()
    }

    /// Gives back the character most recently returned by [`Cursor::bump`].
    ///
    /// Only one character of pushback is supported. Pushing back a newline
    /// rewinds the line counter as well.
    ///
    /// ```
    /// use sayc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("+\n");
    /// cursor.bump();
    /// let c = cursor.bump().unwrap();
    /// assert_eq!(cursor.line(), 2);
    /// cursor.pushback(c);
    /// assert_eq!(cursor.line(), 1);
    /// assert_eq!(cursor.current(), Some('\n'));
    /// ```
    pub fn pushback(&mut self, c: char) {
        debug_assert_eq!(self.last, Some(c), "pushback of a character that was not just consumed");
        if self.last.take() != Some(c) {
            return;
        }
        self.position -= c.len_utf8();
        if c == '\n' {
            self.line -= 1;
        }
    }

    /// Consumes characters while `predicate` holds.
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while let Some(c) = self.current() {
            if !predicate(c) {
                break;
            }
            self.bump();
        }
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current line number (1-based).
    ///
    /// ```
    /// use sayc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a\nb");
    /// cursor.bump();
    /// cursor.bump();
    /// assert_eq!(cursor.line(), 2);
    /// ```
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current byte position in the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source text between `start` and the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the source text from the current position to the end.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Returns the full text of the line containing byte offset `at`,
    /// without its line break.
    pub fn line_text(&self, at: usize) -> &'a str {
        let at = at.min(self.source.len());
        let start = self.source[..at].rfind('\n').map_or(0, |i| i + 1);
        let end = self.source[at..]
            .find('\n')
            .map_or(self.source.len(), |i| at + i);
        self.source[start..end].trim_end_matches('\r')
    }

    /// Captures the cursor state.
    ///
    /// ```
    /// use sayc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("is\nnot");
    /// let snapshot = cursor.snapshot();
    /// cursor.eat_while(|_| true);
    /// assert_eq!(cursor.line(), 2);
    /// cursor.restore(snapshot);
    /// assert_eq!(cursor.position(), 0);
    /// assert_eq!(cursor.line(), 1);
    /// ```
    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            position: self.position,
            line: self.line,
            last: self.last,
        }
    }

    /// Restores state captured by [`Cursor::snapshot`].
    pub fn restore(&mut self, snapshot: CursorSnapshot) {
        self.position = snapshot.position;
        self.line = snapshot.line;
        self.last = snapshot.last;
    }
}

/// Saved cursor state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorSnapshot {
    /// Byte position in source.
    pub position: usize,
    /// Line number (1-based).
    pub line: u32,
    last: Option<char>,
}
