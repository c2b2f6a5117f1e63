//! Operator lexing.
//!
//! `+ - * / %` start an operator. A second character is taken only if the
//! pair is a compound operator; otherwise it is pushed back.

use super::core::Lexeme;
use crate::Lexer;

/// Returns true if `first` followed by `second` is a two-character operator.
fn forms_compound(first: char, second: char) -> bool {
    matches!(
        (first, second),
        ('+', '+') | ('-', '-') | ('+' | '-' | '*' | '/' | '%', '=')
    )
}

impl<'a> Lexer<'a> {
    /// Scans an arithmetic operator with maximal munch.
    pub(super) fn scan_operator(&mut self, start: usize, line: u32) -> Lexeme<'a> {
        if let Some(first) = self.cursor.bump() {
            match self.cursor.bump() {
                Some(second) if forms_compound(first, second) => {},
                Some(second) => self.cursor.pushback(second),
                None => {},
            }
        }
        Lexeme::plain(self.cursor.slice_from(start), start, line)
    }
}
