//! Multiword operator resolution.
//!
//! `repeat`, `is`, `not`, `less` and `more` only become tokens once the
//! following words are known. Lookahead scans the next lexeme on a cursor
//! snapshot and rewinds; a matching word is then consumed as filler.
//! Comments and line breaks may sit between the words.

use tracing::debug;

use super::core::Lexeme;
use crate::error::{LexError, LexErrorKind};
use crate::keywords::MultiwordRoot;
use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Scans the next lexeme and rewinds.
    ///
    /// Returns `None` at end of input or if scanning would fail; the error
    /// resurfaces when that text is scanned for real.
    pub(super) fn peek_lexeme(&mut self) -> Option<Lexeme<'a>> {
        let snapshot = self.cursor.snapshot();
        let peeked = self.next_lexeme().ok().flatten();
        self.cursor.restore(snapshot);
        peeked
    }

    /// Scans the next lexeme for real.
    pub(super) fn consume_lexeme(&mut self) -> Result<Option<Lexeme<'a>>, LexError> {
        self.next_lexeme()
    }

    fn next_lexeme(&mut self) -> Result<Option<Lexeme<'a>>, LexError> {
        self.skip_trivia()?;
        match self.cursor.current() {
            Some(first) => self.scan_lexeme(first).map(Some),
            None => Ok(None),
        }
    }

    /// Consumes the next lexeme if it is the unquoted `word`.
    fn follows(&mut self, word: &str) -> Result<bool, LexError> {
        match self.peek_lexeme() {
            Some(next) if !next.quoted && next.text == word => {
                self.consume_lexeme()?;
                Ok(true)
            },
            _ => Ok(false),
        }
    }

    /// Resolves a root word into its full operator.
    pub(super) fn resolve_multiword(
        &mut self,
        root: MultiwordRoot,
        lexeme: &Lexeme<'a>,
    ) -> Result<TokenKind, LexError> {
        let kind = match root {
            MultiwordRoot::Repeat => {
                if self.follows("on")? {
                    TokenKind::RepeatOn
                } else {
                    TokenKind::Repeat
                }
            },
            MultiwordRoot::Is => {
                if self.follows("not")? {
                    TokenKind::IsNot
                } else {
                    TokenKind::Is
                }
            },
            MultiwordRoot::Not => {
                if self.follows("less")? {
                    self.expect_than(lexeme, "not less", TokenKind::NotLessThan)?
                } else if self.follows("more")? {
                    self.expect_than(lexeme, "not more", TokenKind::NotMoreThan)?
                } else {
                    return Err(self
                        .error(LexErrorKind::Unknown, "not", lexeme.start, lexeme.line)
                        .with_expected("`less than` or `more than`"));
                }
            },
            MultiwordRoot::Less => self.expect_than(lexeme, "less", TokenKind::LessThan)?,
            MultiwordRoot::More => self.expect_than(lexeme, "more", TokenKind::MoreThan)?,
        };

        if kind.is_multiword() {
            debug!(root = root.as_str(), kind = %kind, line = lexeme.line, "resolved multiword operator");
        }
        Ok(kind)
    }

    fn expect_than(
        &mut self,
        lexeme: &Lexeme<'a>,
        words: &str,
        kind: TokenKind,
    ) -> Result<TokenKind, LexError> {
        if self.follows("than")? {
            Ok(kind)
        } else {
            Err(self
                .error(LexErrorKind::Unknown, words, lexeme.start, lexeme.line)
                .with_expected("`than`"))
        }
    }
}
