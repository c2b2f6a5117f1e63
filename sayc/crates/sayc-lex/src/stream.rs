//! The finished, ordered token sequence.

use serde::Serialize;
use std::ops::Index;

use crate::token::{Token, TokenKind};

/// Tokens in source order, always ending with exactly one `Eof`.
///
/// ```
/// use sayc_lex::{tokenize, TokenKind};
///
/// let stream = tokenize("say x,").unwrap();
/// assert_eq!(
///     stream.kinds(),
///     vec![TokenKind::Say, TokenKind::Identifier, TokenKind::Terminator, TokenKind::Eof]
/// );
/// assert_eq!(stream.eof().line(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            tokens: Vec::with_capacity(capacity),
        }
    }

    /// Appends a token produced by the lexer.
    pub(crate) fn push(&mut self, token: Token) {
        debug_assert!(!self.is_terminated(), "token appended after EOF");
        debug_assert!(
            self.tokens.last().map_or(true, |last| last.line() <= token.line()),
            "token lines must not decrease"
        );
        self.tokens.push(token);
    }

    /// Returns true once the `Eof` sentinel has been appended.
    pub fn is_terminated(&self) -> bool {
        self.tokens.last().is_some_and(Token::is_eof)
    }

    /// Number of tokens, counting `Eof`.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if the stream holds only `Eof`.
    pub fn is_empty(&self) -> bool {
        self.tokens.len() <= 1
    }

    /// The tokens as a slice.
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Iterates over the tokens, `Eof` included.
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// The kind of every token, in order.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(Token::kind).collect()
    }

    /// The trailing `Eof` token.
    ///
    /// # Panics
    ///
    /// Panics if called on a stream that was never finished, which the
    /// public constructors rule out.
    pub fn eof(&self) -> &Token {
        match self.tokens.last() {
            Some(token) if token.is_eof() => token,
            _ => panic!("token stream is not terminated"),
        }
    }

    /// Rebuilds source text that lexes back to the same kinds and texts.
    pub fn to_source(&self) -> String {
        self.tokens
            .iter()
            .filter(|token| !token.is_eof())
            .map(Token::spelling)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Consumes the stream and returns the tokens.
    pub fn into_vec(self) -> Vec<Token> {
        self.tokens
    }
}

impl Index<usize> for TokenStream {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl IntoIterator for TokenStream {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

static_assertions::assert_impl_all!(TokenStream: Send, Sync);
