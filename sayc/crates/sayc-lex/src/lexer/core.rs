//! Core lexer implementation.
//!
//! This module contains the [`Lexer`] struct, the per-lexeme dispatch, and
//! the two-state builder that turns lexemes into a [`TokenStream`].

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use sayc_util::{Handler, Span};

use crate::classify::{classify, classify_quoted, is_ident_start, Classification};
use crate::cursor::Cursor;
use crate::error::{LexError, LexErrorKind};
use crate::stream::TokenStream;
use crate::token::{Token, TokenKind};

/// How line numbers advance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineCounting {
    /// Only newline characters advance the line counter.
    #[default]
    Newline,
    /// Every statement terminator also advances the counter, after the
    /// terminator token itself has been numbered.
    LegacyTerminator,
}

/// Lexer options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LexerConfig {
    /// Line numbering mode.
    pub line_counting: LineCounting,
}

impl LexerConfig {
    /// Configuration with terminator-based line counting.
    pub fn legacy() -> Self {
        Self {
            line_counting: LineCounting::LegacyTerminator,
        }
    }
}

/// Builder state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    /// More lexemes may follow.
    Scanning,
    /// `Eof` has been produced.
    Done,
}

/// Raw text of one lexeme before classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Lexeme<'a> {
    /// Lexeme text; the inner content for quoted literals.
    pub text: &'a str,
    /// Whether the text came from the quoted-literal path.
    pub quoted: bool,
    /// Byte offset where the lexeme starts.
    pub start: usize,
    /// Line where the lexeme starts.
    pub line: u32,
}

impl<'a> Lexeme<'a> {
    pub(crate) fn plain(text: &'a str, start: usize, line: u32) -> Self {
        Self {
            text,
            quoted: false,
            start,
            line,
        }
    }

    pub(crate) fn quoted(text: &'a str, start: usize, line: u32) -> Self {
        Self {
            text,
            quoted: true,
            start,
            line,
        }
    }
}

/// Lexer for the Say language.
///
/// Pull tokens one at a time with [`Lexer::next_token`], iterate, or
/// collect everything with [`Lexer::tokenize`].
///
/// ```
/// use sayc_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("if x not less than 10,");
/// let kinds: Vec<_> = lexer
///     .by_ref()
///     .map(|token| token.unwrap().kind())
///     .collect();
/// assert_eq!(
///     kinds,
///     vec![
///         TokenKind::If,
///         TokenKind::Identifier,
///         TokenKind::NotLessThan,
///         TokenKind::IntegerLiteral,
///         TokenKind::Terminator,
///         TokenKind::Eof,
///     ]
/// );
/// assert_eq!(lexer.next(), None);
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(super) cursor: Cursor<'a>,

    config: LexerConfig,

    state: State,

    /// Terminators seen so far, for legacy line counting.
    terminators: u32,

    /// Tokens produced so far, `Eof` excluded.
    emitted: usize,

    /// Set once the iterator has yielded `Eof` or an error.
    halted: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer with the default configuration.
    pub fn new(source: &'a str) -> Self {
        Self::with_config(source, LexerConfig::default())
    }

    /// Creates a lexer with an explicit configuration.
    pub fn with_config(source: &'a str, config: LexerConfig) -> Self {
        Self {
            cursor: Cursor::new(source),
            config,
            state: State::Scanning,
            terminators: 0,
            emitted: 0,
            halted: false,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> LexerConfig {
        self.config
    }

    /// Current builder state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Line number the next lexeme would be reported on.
    pub fn line(&self) -> u32 {
        match self.config.line_counting {
            LineCounting::Newline => self.cursor.line(),
            LineCounting::LegacyTerminator => self.cursor.line() + self.terminators,
        }
    }

    /// Returns the next token.
    ///
    /// After the end of input this returns `Eof` on every call. An error
    /// leaves the lexer past the offending text, so scanning may continue.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        if self.state == State::Done {
            return Ok(Token::eof(self.line()));
        }

        self.skip_trivia()?;

        let Some(first) = self.cursor.current() else {
            self.state = State::Done;
            let eof = Token::eof(self.line());
            debug!(tokens = self.emitted, line = eof.line(), "tokenization finished");
            return Ok(eof);
        };

        let lexeme = self.scan_lexeme(first)?;
        let token = self.build_token(lexeme)?;
        trace!(kind = %token.kind(), text = token.text(), line = token.line(), "token");

        if token.kind() == TokenKind::Terminator
            && self.config.line_counting == LineCounting::LegacyTerminator
        {
            self.terminators += 1;
        }
        self.emitted += 1;
        Ok(token)
    }

    /// Scans the whole source, stopping at the first lexical error.
    pub fn tokenize(mut self) -> Result<TokenStream, LexError> {
        let mut stream = TokenStream::with_capacity(self.estimated_tokens());
        loop {
            let token = self.next_token()?;
            let done = token.is_eof();
            stream.push(token);
            if done {
                return Ok(stream);
            }
        }
    }

    /// Scans the whole source, reporting every lexical error to `handler`
    /// and skipping past the offending text.
    ///
    /// The returned stream is always terminated by `Eof`.
    ///
    /// ```
    /// use sayc_lex::Lexer;
    /// use sayc_util::Handler;
    ///
    /// let handler = Handler::new();
    /// let stream = Lexer::new("say 1.2.3, say @ x,").tokenize_recovering(&handler);
    /// assert_eq!(handler.error_count(), 2);
    /// assert!(stream.is_terminated());
    /// ```
    pub fn tokenize_recovering(mut self, handler: &Handler) -> TokenStream {
        let mut stream = TokenStream::with_capacity(self.estimated_tokens());
        loop {
            match self.next_token() {
                Ok(token) => {
                    let done = token.is_eof();
                    stream.push(token);
                    if done {
                        return stream;
                    }
                },
                Err(err) => {
                    warn!(kind = %err.kind, line = err.line, text = %err.text, "skipping unlexable input");
                    handler.emit_diagnostic(err.to_diagnostic());
                    self.resynchronize();
                },
            }
        }
    }

    /// Dispatches on the first character of a lexeme.
    pub(super) fn scan_lexeme(&mut self, first: char) -> Result<Lexeme<'a>, LexError> {
        let start = self.cursor.position();
        let line = self.line();

        match first {
            '\'' | '"' => self.scan_quoted(first, start, line),
            '(' | ')' | '[' | ']' | ':' | ',' | '=' => {
                self.cursor.bump();
                Ok(Lexeme::plain(self.cursor.slice_from(start), start, line))
            },
            '+' | '-' | '*' | '/' | '%' => Ok(self.scan_operator(start, line)),
            c if is_ident_start(c) => Ok(self.scan_word(start, line)),
            c if c.is_ascii_digit() => self.scan_number(start, line),
            _ => {
                self.cursor.bump();
                Err(self.error_here(LexErrorKind::UnrecognizedCharacter, start, line))
            },
        }
    }

    fn build_token(&mut self, lexeme: Lexeme<'a>) -> Result<Token, LexError> {
        if lexeme.quoted {
            let kind = classify_quoted(lexeme.text);
            return Ok(Token::new(kind, lexeme.text.to_string(), lexeme.line));
        }

        let kind = match classify(lexeme.text) {
            Classification::Kind(kind) => kind,
            Classification::Root(root) => self.resolve_multiword(root, &lexeme)?,
            Classification::MalformedNumber => {
                return Err(self.error(
                    LexErrorKind::MalformedNumber,
                    lexeme.text,
                    lexeme.start,
                    lexeme.line,
                ))
            },
            Classification::Unknown => {
                return Err(self.error(LexErrorKind::Unknown, lexeme.text, lexeme.start, lexeme.line))
            },
        };

        let text = kind.canonical().unwrap_or(lexeme.text);
        Ok(Token::new(kind, text.to_string(), lexeme.line))
    }

    /// Skips to the next whitespace, comment or punctuation boundary after
    /// an error.
    fn resynchronize(&mut self) {
        self.cursor.eat_while(|c| {
            !matches!(
                c,
                ' ' | '\t' | '\r' | '\n' | '|' | ',' | ':' | '(' | ')' | '[' | ']'
            )
        });
    }

    fn estimated_tokens(&self) -> usize {
        self.cursor.source().len() / 4 + 1
    }

    /// Builds an error for `text` starting at byte `start`.
    pub(super) fn error(&self, kind: LexErrorKind, text: &str, start: usize, line: u32) -> LexError {
        let source = self.cursor.source();
        let line_start = source[..start].rfind('\n').map_or(0, |i| i + 1);
        let column = source[line_start..start].chars().count() + 1;
        let end = self.cursor.position().max(start);

        LexError::new(kind, text, Span::new(start, end, line))
            .with_context(self.cursor.line_text(start), column)
    }

    /// Builds an error for everything consumed since `start`.
    pub(super) fn error_here(&self, kind: LexErrorKind, start: usize, line: u32) -> LexError {
        self.error(kind, self.cursor.slice_from(start), start, line)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token, LexError>;

    /// Yields tokens up to and including `Eof`, or up to the first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.halted {
            return None;
        }
        let result = self.next_token();
        if !matches!(result, Ok(ref token) if !token.is_eof()) {
            self.halted = true;
        }
        Some(result)
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}
