//! Stable codes attached to diagnostics.
//!
//! ```
//! use sayc_util::diagnostic::DiagnosticCode;
//!
//! assert_eq!(DiagnosticCode::E_LEXER_MALFORMED_NUMBER.to_string(), "E1003");
//! assert_eq!(DiagnosticCode::W_EMPTY_SOURCE.to_string(), "W0001");
//! ```

use std::fmt;

/// Severity letter plus a number, rendered as `E1003`.
///
/// Errors use `E`, warnings `W`. Lexer errors live in the `E1xxx` block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    letter: char,
    number: u16,
}

impl DiagnosticCode {
    const fn error(number: u16) -> Self {
        Self { letter: 'E', number }
    }

    const fn warning(number: u16) -> Self {
        Self { letter: 'W', number }
    }

    /// True for `W` codes.
    pub const fn is_warning(self) -> bool {
        self.letter == 'W'
    }

    /// Character that cannot start any lexeme.
    pub const E_LEXER_UNRECOGNIZED_CHAR: Self = Self::error(1001);
    /// Quoted literal still open at end of input.
    pub const E_LEXER_UNTERMINATED_LITERAL: Self = Self::error(1002);
    /// Number with a second decimal point or trailing letters.
    pub const E_LEXER_MALFORMED_NUMBER: Self = Self::error(1003);
    /// Lexeme that matches no token kind.
    pub const E_LEXER_UNKNOWN_TOKEN: Self = Self::error(1004);
    /// Comment still open at end of input.
    pub const E_LEXER_UNTERMINATED_COMMENT: Self = Self::error(1005);

    /// Source file produced no tokens.
    pub const W_EMPTY_SOURCE: Self = Self::warning(1);
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", self.letter, self.number)
    }
}
