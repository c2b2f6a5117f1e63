//! Lexeme classification.
//!
//! Maps the raw text of an unquoted lexeme to what it is, in a fixed order:
//! the fixed-spelling table, then multiword roots, then numeric shapes, then
//! identifier shape. Classification is pure; resolving a root into its full
//! operator needs the lexer and happens in `lexer::multiword`.

use crate::keywords::{self, MultiwordRoot};
use crate::token::TokenKind;

/// Outcome of classifying one unquoted lexeme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classification {
    /// The lexeme is a complete token of this kind.
    Kind(TokenKind),
    /// The lexeme opens a multiword operator.
    Root(MultiwordRoot),
    /// Starts with a digit but is not a valid number.
    MalformedNumber,
    /// Matches nothing.
    Unknown,
}

/// Classifies an unquoted lexeme.
///
/// ```
/// use sayc_lex::classify::{classify, Classification};
/// use sayc_lex::keywords::MultiwordRoot;
/// use sayc_lex::TokenKind;
///
/// assert_eq!(classify("while"), Classification::Kind(TokenKind::While));
/// assert_eq!(classify("less"), Classification::Root(MultiwordRoot::Less));
/// assert_eq!(classify("3.25"), Classification::Kind(TokenKind::FloatLiteral));
/// assert_eq!(classify("_count2"), Classification::Kind(TokenKind::Identifier));
/// assert_eq!(classify("1.2.3"), Classification::MalformedNumber);
/// assert_eq!(classify("@"), Classification::Unknown);
/// ```
pub fn classify(text: &str) -> Classification {
    if let Some(kind) = keywords::lookup(text) {
        return Classification::Kind(kind);
    }
    if let Some(root) = MultiwordRoot::from_word(text) {
        return Classification::Root(root);
    }
    if text.starts_with(|c: char| c.is_ascii_digit()) {
        return number_kind(text)
            .map_or(Classification::MalformedNumber, Classification::Kind);
    }
    if is_identifier(text) {
        return Classification::Kind(TokenKind::Identifier);
    }
    Classification::Unknown
}

/// Classifies the content of a quoted literal by its character count.
///
/// ```
/// use sayc_lex::classify::classify_quoted;
/// use sayc_lex::TokenKind;
///
/// assert_eq!(classify_quoted(""), TokenKind::CharLiteral);
/// assert_eq!(classify_quoted("é"), TokenKind::CharLiteral);
/// assert_eq!(classify_quoted("ab"), TokenKind::StringLiteral);
/// ```
pub fn classify_quoted(content: &str) -> TokenKind {
    let mut chars = content.chars();
    match (chars.next(), chars.next()) {
        (_, None) => TokenKind::CharLiteral,
        _ => TokenKind::StringLiteral,
    }
}

/// Integer or float kind of an all-digit lexeme with at most one `.`.
fn number_kind(text: &str) -> Option<TokenKind> {
    let mut dots = 0;
    for c in text.chars() {
        match c {
            '0'..='9' => {},
            '.' => dots += 1,
            _ => return None,
        }
    }
    match dots {
        0 => Some(TokenKind::IntegerLiteral),
        1 => Some(TokenKind::FloatLiteral),
        _ => None,
    }
}

/// Returns true if `c` can start an identifier.
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Returns true if `c` can continue an identifier.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Returns true if `text` is a letter or underscore followed by letters,
/// digits and underscores.
pub fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    chars.next().is_some_and(is_ident_start) && chars.all(is_ident_continue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_wins_over_identifier() {
        assert_eq!(classify("int"), Classification::Kind(TokenKind::Int));
        assert_eq!(classify("true"), Classification::Kind(TokenKind::True));
        assert_eq!(classify("integer"), Classification::Kind(TokenKind::Identifier));
    }

    #[test]
    fn test_roots() {
        assert_eq!(classify("repeat"), Classification::Root(MultiwordRoot::Repeat));
        assert_eq!(classify("is"), Classification::Root(MultiwordRoot::Is));
        assert_eq!(classify("not"), Classification::Root(MultiwordRoot::Not));
        assert_eq!(classify("more"), Classification::Root(MultiwordRoot::More));
    }

    #[test]
    fn test_fillers_are_identifiers_alone() {
        assert_eq!(classify("on"), Classification::Kind(TokenKind::Identifier));
        assert_eq!(classify("than"), Classification::Kind(TokenKind::Identifier));
    }

    #[test]
    fn test_numbers() {
        assert_eq!(classify("0"), Classification::Kind(TokenKind::IntegerLiteral));
        assert_eq!(classify("007"), Classification::Kind(TokenKind::IntegerLiteral));
        assert_eq!(classify("1."), Classification::Kind(TokenKind::FloatLiteral));
        assert_eq!(classify("12abc"), Classification::MalformedNumber);
        assert_eq!(classify("1..2"), Classification::MalformedNumber);
    }

    #[test]
    fn test_identifier_shape() {
        assert!(is_identifier("x"));
        assert!(is_identifier("_"));
        assert!(is_identifier("snake_case_9"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("9lives"));
        assert!(!is_identifier("naïve"));
        assert!(!is_identifier("a-b"));
    }

    #[test]
    fn test_unknown() {
        assert_eq!(classify(""), Classification::Unknown);
        assert_eq!(classify("#"), Classification::Unknown);
        assert_eq!(classify(".5"), Classification::Unknown);
    }
}
