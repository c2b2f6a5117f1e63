//! Errors and warnings reported against a source file.
//!
//! A [`Diagnostic`] is plain data; a [`Handler`] collects them in emission
//! order and renders them as text.
//!
//! ```
//! use sayc_util::{DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! handler
//!     .build_warning(Span::point(4), "source contains no tokens")
//!     .code(DiagnosticCode::W_EMPTY_SOURCE)
//!     .emit(&handler);
//!
//! let rendered = handler.diagnostics()[0].render(Some("hello.say"));
//! assert_eq!(rendered, "Warning: source contains no tokens\n  --> hello.say:4 [W0001]\n");
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;

use std::cell::RefCell;
use std::fmt::{self, Write as _};
use std::io::Write;

use crate::error::DiagnosticResult;
use crate::Span;

/// Severity of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// The input is rejected.
    Error,
    /// Worth reporting; the input is still accepted.
    Warning,
}

impl Level {
    /// Capitalized name used as the headline prefix.
    pub const fn title(self) -> &'static str {
        match self {
            Level::Error => "Error",
            Level::Warning => "Warning",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Error => "error",
            Level::Warning => "warning",
        })
    }
}

/// A message with a severity, a location and optional extras.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity.
    pub level: Level,
    /// Headline.
    pub message: String,
    /// Where it applies; [`Span::DUMMY`] when nowhere in particular.
    pub span: Span,
    /// Stable code, if any.
    pub code: Option<DiagnosticCode>,
    /// `= help:` lines.
    pub helps: Vec<String>,
    /// Source excerpts.
    pub snippets: Vec<SourceSnippet>,
}

impl Diagnostic {
    /// Creates a diagnostic with no extras.
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Shorthand for an [`Level::Error`] diagnostic.
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Shorthand for a [`Level::Warning`] diagnostic.
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }

    /// Sets the code.
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Appends a help line.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Appends a source excerpt.
    pub fn with_snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }

    /// Renders the diagnostic as text, one `\n`-terminated line at a time.
    ///
    /// The headline is `<Level>: <message>`. A ` --> ` location line
    /// follows unless the span is dummy; it names `origin` when given and
    /// ends with the code in brackets.
    ///
    /// ```
    /// use sayc_util::{Diagnostic, DiagnosticCode, Span};
    ///
    /// let diag = Diagnostic::error("unknown token `not`", Span::point(2))
    ///     .with_code(DiagnosticCode::E_LEXER_UNKNOWN_TOKEN)
    ///     .with_help("write `not less than` or `not more than`");
    ///
    /// assert_eq!(
    ///     diag.render(Some("main.say")),
    ///     "Error: unknown token `not`\n  --> main.say:2 [E1004]\n  = help: write `not less than` or `not more than`\n"
    /// );
    /// ```
    pub fn render(&self, origin: Option<&str>) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_rendered(origin, &mut out);
        out
    }

    fn write_rendered(&self, origin: Option<&str>, out: &mut String) -> fmt::Result {
        writeln!(out, "{self}")?;

        if !self.span.is_dummy() {
            match origin {
                Some(origin) => write!(out, "  --> {origin}:{}", self.span.line)?,
                None => write!(out, "  --> line {}", self.span.line)?,
            }
            if let Some(code) = self.code {
                write!(out, " [{code}]")?;
            }
            out.push('\n');
        }

        for snippet in &self.snippets {
            writeln!(out, "{snippet}")?;
        }
        for help in &self.helps {
            writeln!(out, "  = help: {help}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.level.title(), self.message)
    }
}

/// Collects diagnostics for one source.
///
/// Emission takes `&self` so a handler can be shared by reference with
/// whatever is reporting into it.
///
/// ```
/// use sayc_util::{Diagnostic, Handler, Span};
///
/// let handler = Handler::new();
/// handler.emit_diagnostic(Diagnostic::error("unrecognized character `@`", Span::point(1)));
///
/// assert!(handler.has_errors());
/// assert_eq!(handler.error_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Creates an empty handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `diagnostic`.
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Starts a warning at `span`; finish it with [`DiagnosticBuilder::emit`].
    pub fn build_warning(&self, span: Span, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::new(Level::Warning, message, span)
    }

    /// True once any error has been recorded.
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Number of errors recorded.
    pub fn error_count(&self) -> usize {
        self.count(Level::Error)
    }

    /// Number of warnings recorded.
    pub fn warning_count(&self) -> usize {
        self.count(Level::Warning)
    }

    fn count(&self, level: Level) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == level)
            .count()
    }

    /// Copies out every diagnostic, in emission order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Renders every diagnostic into `out`, in emission order.
    pub fn render_to<W: Write>(&self, origin: Option<&str>, out: &mut W) -> DiagnosticResult<()> {
        for diagnostic in self.diagnostics.borrow().iter() {
            out.write_all(diagnostic.render(origin).as_bytes())?;
        }
        out.flush()?;
        Ok(())
    }
}
