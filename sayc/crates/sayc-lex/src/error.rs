//! Lexical and resource errors.

use std::fmt;
use std::io;
use std::path::PathBuf;

use sayc_util::diagnostic::SourceSnippet;
use sayc_util::{Diagnostic, DiagnosticCode, Span};
use thiserror::Error;

/// Longest excerpt of source kept in an error.
const MAX_EXCERPT: usize = 24;

/// What went wrong while scanning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LexErrorKind {
    /// A quoted literal reached end of input before its closing quote.
    UnterminatedLiteral,
    /// A `|` comment reached end of input before its closing `|`.
    UnterminatedComment,
    /// A lexeme starts with a digit but is not a valid number.
    MalformedNumber,
    /// A character that cannot start any lexeme.
    UnrecognizedCharacter,
    /// A lexeme that classifies as nothing, including incomplete
    /// multiword operators such as a bare `not`.
    Unknown,
}

impl LexErrorKind {
    /// Diagnostic code reported for this kind.
    pub const fn code(self) -> DiagnosticCode {
        match self {
            Self::UnterminatedLiteral => DiagnosticCode::E_LEXER_UNTERMINATED_LITERAL,
            Self::UnterminatedComment => DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT,
            Self::MalformedNumber => DiagnosticCode::E_LEXER_MALFORMED_NUMBER,
            Self::UnrecognizedCharacter => DiagnosticCode::E_LEXER_UNRECOGNIZED_CHAR,
            Self::Unknown => DiagnosticCode::E_LEXER_UNKNOWN_TOKEN,
        }
    }
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::UnterminatedLiteral => "unterminated literal",
            Self::UnterminatedComment => "unterminated comment",
            Self::MalformedNumber => "malformed number",
            Self::UnrecognizedCharacter => "unrecognized character",
            Self::Unknown => "unknown token",
        })
    }
}

/// A lexical error: what went wrong, where, and on which text.
///
/// ```
/// use sayc_lex::{tokenize, LexErrorKind};
///
/// let err = tokenize("say 1.5.2,").unwrap_err();
/// assert_eq!(err.kind, LexErrorKind::MalformedNumber);
/// assert_eq!(err.line, 1);
/// assert_eq!(err.text, "1.5.2");
/// assert_eq!(err.to_string(), "malformed number `1.5.2` at line 1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind} `{text}` at line {line}")]
pub struct LexError {
    /// Error category.
    pub kind: LexErrorKind,
    /// Line the offending lexeme started on.
    pub line: u32,
    /// Offending text, cut at the first line break and shortened if long.
    pub text: String,
    /// Follow-up words that would have completed the lexeme.
    pub expected: Option<&'static str>,
    span: Span,
    context: Option<(String, usize)>,
}

impl LexError {
    /// Creates an error; `line` is taken from `span`.
    pub fn new(kind: LexErrorKind, text: &str, span: Span) -> Self {
        Self {
            kind,
            line: span.line,
            text: excerpt(text),
            expected: None,
            span,
            context: None,
        }
    }

    pub(crate) fn with_expected(mut self, expected: &'static str) -> Self {
        self.expected = Some(expected);
        self
    }

    /// Attaches the source line and 1-based column used for snippets.
    pub(crate) fn with_context(mut self, source_line: &str, column: usize) -> Self {
        self.context = Some((source_line.to_string(), column));
        self
    }

    /// Byte range of the offending text.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Converts the error into a renderable diagnostic.
    ///
    /// The diagnostic carries the error code, a caret snippet of the line
    /// the lexeme started on, and a help line when a continuation was
    /// expected.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diagnostic =
            Diagnostic::error(self.to_string(), self.span).with_code(self.kind.code());

        if let Some((source_line, column)) = &self.context {
            let width = self.text.chars().count().max(1);
            diagnostic = diagnostic.with_snippet(SourceSnippet::new(
                source_line.clone(),
                self.line as usize,
                *column,
                column + width,
                None::<String>,
            ));
        }

        if let Some(expected) = self.expected {
            diagnostic = diagnostic.with_help(format!("expected {expected} here"));
        }
        match self.kind {
            LexErrorKind::UnterminatedLiteral => {
                diagnostic.with_help("close the literal with the same quote that opened it")
            },
            LexErrorKind::UnterminatedComment => {
                diagnostic.with_help("comments are delimited by `|` on both sides")
            },
            _ => diagnostic,
        }
    }
}

/// Any failure of a whole-source tokenization.
#[derive(Debug, Error)]
pub enum TokenizeError {
    /// The source file could not be read.
    #[error("cannot read `{}`: {source}", .path.display())]
    Resource {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// Scanning stopped at a lexical error.
    #[error(transparent)]
    Lexical(#[from] LexError),
}

impl TokenizeError {
    /// The lexical error, if this is one.
    pub fn as_lexical(&self) -> Option<&LexError> {
        match self {
            Self::Lexical(err) => Some(err),
            Self::Resource { .. } => None,
        }
    }
}

/// First line of `text`, capped at [`MAX_EXCERPT`] characters.
fn excerpt(text: &str) -> String {
    let first_line = text.lines().next().unwrap_or("").trim_end_matches('\r');
    if first_line.chars().count() > MAX_EXCERPT {
        let cut: String = first_line.chars().take(MAX_EXCERPT).collect();
        format!("{cut}...")
    } else {
        first_line.to_string()
    }
}
