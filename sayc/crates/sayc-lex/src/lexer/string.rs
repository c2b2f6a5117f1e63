//! Quoted literal lexing.
//!
//! `'...'` and `"..."` delimit literals. There are no escape sequences; the
//! literal runs to the next occurrence of the opening quote.

use super::core::Lexeme;
use crate::error::{LexError, LexErrorKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Scans a quoted literal opened by `delimiter`.
    pub(super) fn scan_quoted(
        &mut self,
        delimiter: char,
        start: usize,
        line: u32,
    ) -> Result<Lexeme<'a>, LexError> {
        self.cursor.bump();
        let content_start = self.cursor.position();
        self.cursor.eat_while(|c| c != delimiter);
        let content = self.cursor.slice_from(content_start);

        if self.cursor.bump().is_none() {
            return Err(self.error_here(LexErrorKind::UnterminatedLiteral, start, line));
        }
        Ok(Lexeme::quoted(content, start, line))
    }
}
