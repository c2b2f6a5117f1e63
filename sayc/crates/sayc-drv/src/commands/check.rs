//! `sayc check`: report every lexical error in one or more files.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use sayc_lex::{LexerConfig, SourceFile};
use sayc_util::{DiagnosticCode, Handler, Span};
use tracing::debug;

use super::common::validate_source_path;
use crate::error::{DrvError, Result};

/// Resolved arguments for the check command.
#[derive(Debug, Clone)]
pub struct CheckArgs {
    /// Source files to check.
    pub files: Vec<PathBuf>,
    /// Lexer settings.
    pub lexer: LexerConfig,
    /// Required source extension.
    pub extension: String,
}

/// Summary of one checked file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// Tokens produced, `Eof` excluded.
    pub tokens: usize,
    /// Errors reported.
    pub errors: usize,
    /// Warnings reported.
    pub warnings: usize,
}

/// Checks each file in turn, rendering diagnostics to stderr and a
/// one-line summary per file to stdout.
pub fn run_check(args: CheckArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut total_errors = 0;

    for file in &args.files {
        let origin = file.display().to_string();
        let report = check_file(file, &args, &mut io::stderr().lock())?;
        debug!(file = %origin, ?report, "checked");

        if report.errors == 0 {
            writeln!(out, "{origin}: ok ({} tokens)", report.tokens)?;
        } else {
            writeln!(out, "{origin}: {} error(s)", report.errors)?;
        }
        total_errors += report.errors;
    }
    out.flush()?;

    if total_errors > 0 {
        return Err(DrvError::Lexical {
            count: total_errors,
        });
    }
    Ok(())
}

/// Tokenizes one file in recovering mode and renders its diagnostics.
pub fn check_file<W: Write>(
    file: &Path,
    args: &CheckArgs,
    diagnostics: &mut W,
) -> Result<FileReport> {
    validate_source_path(file, &args.extension)?;
    let source = SourceFile::open(file)?;

    let handler = Handler::new();
    let stream = source.lexer(args.lexer).tokenize_recovering(&handler);
    if stream.is_empty() && !handler.has_errors() {
        handler
            .build_warning(Span::point(stream.eof().line()), "source contains no tokens")
            .code(DiagnosticCode::W_EMPTY_SOURCE)
            .emit(&handler);
    }

    let origin = file.display().to_string();
    handler.render_to(Some(&origin), diagnostics)?;

    Ok(FileReport {
        tokens: stream.len() - 1,
        errors: handler.error_count(),
        warnings: handler.warning_count(),
    })
}
