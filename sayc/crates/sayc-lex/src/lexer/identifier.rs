//! Identifier and keyword lexing.

use super::core::Lexeme;
use crate::classify::is_ident_continue;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Scans a word of letters, digits and underscores.
    ///
    /// Keywords, type names and multiword roots share this shape; the
    /// classifier tells them apart.
    pub(super) fn scan_word(&mut self, start: usize, line: u32) -> Lexeme<'a> {
        self.cursor.eat_while(is_ident_continue);
        Lexeme::plain(self.cursor.slice_from(start), start, line)
    }
}
