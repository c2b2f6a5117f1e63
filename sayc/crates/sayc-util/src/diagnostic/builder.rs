//! Source excerpts and the fluent diagnostic builder.

use std::fmt;

use super::{Diagnostic, DiagnosticCode, Handler, Level, Span};

/// One source line with a caret underline.
///
/// ```
/// use sayc_util::diagnostic::SourceSnippet;
///
/// let snippet = SourceSnippet::new("say 1.5.2,", 3, 5, 10, Some("here"));
/// assert_eq!(snippet.to_string(), "  3 | say 1.5.2,\n    |     ^^^^^ here");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// Text of the line, without its terminator.
    pub line: String,
    /// 1-based line number shown in the gutter.
    pub line_number: usize,
    /// 1-based column of the first underlined character.
    pub start_column: usize,
    /// 1-based column just past the underline.
    pub end_column: usize,
    /// Text printed after the carets.
    pub label: Option<String>,
}

impl SourceSnippet {
    /// Underlines `start_column..end_column` of `line`.
    pub fn new(
        line: impl Into<String>,
        line_number: usize,
        start_column: usize,
        end_column: usize,
        label: Option<impl Into<String>>,
    ) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
            label: label.map(Into::into),
        }
    }
}

impl fmt::Display for SourceSnippet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let gutter = self.line_number.to_string().len().max(3);
        writeln!(f, "{:>gutter$} | {}", self.line_number, self.line)?;

        let indent = self.start_column.saturating_sub(1);
        let carets = self.end_column.saturating_sub(self.start_column).max(1);
        write!(f, "{:>gutter$} | {:indent$}{}", "", "", "^".repeat(carets))?;
        if let Some(label) = &self.label {
            write!(f, " {label}")?;
        }
        Ok(())
    }
}

/// Fluent construction of a [`Diagnostic`], usually started from
/// [`Handler::build_warning`].
///
/// ```
/// use sayc_util::{DiagnosticCode, Handler, Span};
///
/// let handler = Handler::new();
/// handler
///     .build_warning(Span::point(1), "source contains no tokens")
///     .code(DiagnosticCode::W_EMPTY_SOURCE)
///     .emit(&handler);
/// assert_eq!(handler.warning_count(), 1);
/// ```
#[derive(Debug)]
#[must_use = "a diagnostic builder does nothing until built or emitted"]
pub struct DiagnosticBuilder {
    diagnostic: Diagnostic,
}

impl DiagnosticBuilder {
    /// Starts a diagnostic at `span`.
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            diagnostic: Diagnostic::new(level, message, span),
        }
    }

    /// Sets the code.
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.diagnostic.code = Some(code);
        self
    }

    /// Appends a help line.
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.diagnostic.helps.push(help.into());
        self
    }

    /// Appends a source excerpt.
    pub fn snippet(mut self, snippet: SourceSnippet) -> Self {
        self.diagnostic.snippets.push(snippet);
        self
    }

    /// Finishes construction.
    pub fn build(self) -> Diagnostic {
        self.diagnostic
    }

    /// Finishes construction and hands the result to `handler`.
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}
