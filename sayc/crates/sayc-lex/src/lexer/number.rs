//! Number literal lexing.
//!
//! Digits with at most one decimal point. There are no signs, exponents or
//! radix prefixes; a leading `-` is lexed as an operator.

use super::core::Lexeme;
use crate::classify::is_ident_continue;
use crate::error::{LexError, LexErrorKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Scans an integer or float literal.
    pub(super) fn scan_number(&mut self, start: usize, line: u32) -> Result<Lexeme<'a>, LexError> {
        let mut seen_dot = false;
        while let Some(c) = self.cursor.current() {
            match c {
                '0'..='9' => {},
                '.' if !seen_dot => seen_dot = true,
                '.' => return Err(self.malformed_number(start, line)),
                c if is_ident_continue(c) => return Err(self.malformed_number(start, line)),
                _ => break,
            }
            self.cursor.bump();
        }
        Ok(Lexeme::plain(self.cursor.slice_from(start), start, line))
    }

    /// Consumes the rest of a bad number so the error shows all of it.
    fn malformed_number(&mut self, start: usize, line: u32) -> LexError {
        self.cursor.eat_while(|c| c == '.' || is_ident_continue(c));
        self.error_here(LexErrorKind::MalformedNumber, start, line)
    }
}

#[cfg(test)]
mod tests {
    use crate::token::{Token, TokenKind};
    use crate::{LexError, LexErrorKind, Lexer};

    fn lex_one(source: &str) -> Result<Token, LexError> {
        Lexer::new(source).next_token()
    }

    #[test]
    fn test_integer() {
        let token = lex_one("12").unwrap();
        assert_eq!(token.kind(), TokenKind::IntegerLiteral);
        assert_eq!(token.text(), "12");
    }

    #[test]
    fn test_float() {
        let token = lex_one("1.5").unwrap();
        assert_eq!(token.kind(), TokenKind::FloatLiteral);
        assert_eq!(token.text(), "1.5");
    }

    #[test]
    fn test_trailing_dot_is_float() {
        assert_eq!(lex_one("1.").unwrap().kind(), TokenKind::FloatLiteral);
    }

    #[test]
    fn test_leading_zeros_kept() {
        assert_eq!(lex_one("007").unwrap().text(), "007");
    }

    #[test]
    fn test_second_dot_is_malformed() {
        let err = lex_one("1.5.2").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::MalformedNumber);
        assert_eq!(err.text, "1.5.2");
    }

    #[test]
    fn test_letters_after_digits_are_malformed() {
        let err = lex_one("12abc,").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::MalformedNumber);
        assert_eq!(err.text, "12abc");
    }

    #[test]
    fn test_number_followed_by_terminator() {
        let stream = Lexer::new("3.25,").tokenize().unwrap();
        assert_eq!(
            stream.kinds(),
            vec![TokenKind::FloatLiteral, TokenKind::Terminator, TokenKind::Eof]
        );
    }
}
