//! Comment lexing.
//!
//! Skips whitespace and `| ... |` comments between lexemes.

use crate::error::{LexError, LexErrorKind};
use crate::Lexer;

/// Opens and closes a comment.
const COMMENT_DELIMITER: char = '|';

impl<'a> Lexer<'a> {
    /// Skips whitespace and comments.
    ///
    /// Afterwards the cursor is at end of input or on the first character
    /// of a lexeme.
    pub(super) fn skip_trivia(&mut self) -> Result<(), LexError> {
        loop {
            match self.cursor.current() {
                Some(' ' | '\t' | '\r' | '\n') => {
                    self.cursor.bump();
                },
                Some(COMMENT_DELIMITER) => self.skip_comment()?,
                _ => return Ok(()),
            }
        }
    }

    /// Skips one comment. Comments do not nest.
    fn skip_comment(&mut self) -> Result<(), LexError> {
        let start = self.cursor.position();
        let line = self.line();

        self.cursor.bump();
        self.cursor.eat_while(|c| c != COMMENT_DELIMITER);
        if self.cursor.bump().is_none() {
            return Err(self.error_here(LexErrorKind::UnterminatedComment, start, line));
        }
        Ok(())
    }
}
