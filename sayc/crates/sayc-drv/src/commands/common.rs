//! Common types and utilities for sayc commands.

use std::io::{self, Write};
use std::path::Path;

use clap::ValueEnum;
use sayc_lex::{Token, TokenKind, TokenStream};
use serde::{Deserialize, Serialize};

use crate::error::{DrvError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// How `sayc tokens` prints a stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One token per line: line, kind, text
    #[default]
    Table,
    /// JSON array of `{kind, text, length, line}` objects
    Json,
}

// ============================================================================
// Path Utilities
// ============================================================================

/// Checks that `path` names a source file with the expected extension.
///
/// The name must be `<stem>.<extension>` with a non-empty stem, and the
/// path must not be a directory.
pub fn validate_source_path(path: &Path, extension: &str) -> Result<()> {
    let invalid = |reason: String| DrvError::InvalidSourceName {
        path: path.to_path_buf(),
        reason,
    };

    if path.is_dir() {
        return Err(invalid("is a directory".to_string()));
    }

    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| invalid("does not name a file".to_string()))?;

    let stem = name
        .strip_suffix(extension)
        .and_then(|rest| rest.strip_suffix('.'))
        .ok_or_else(|| invalid(format!("expected a `.{extension}` file")))?;

    if stem.is_empty() {
        return Err(invalid("file name has no stem".to_string()));
    }
    Ok(())
}

// ============================================================================
// Rendering
// ============================================================================

/// Writes one token per line as `line  KIND  text`.
pub fn write_table<W: Write>(stream: &TokenStream, out: &mut W) -> io::Result<()> {
    for token in stream {
        writeln!(
            out,
            "{:>5}  {:<15} {}",
            token.line(),
            token.kind().name(),
            table_text(token)
        )?;
    }
    Ok(())
}

/// Writes the stream as a pretty-printed JSON array.
pub fn write_json<W: Write>(stream: &TokenStream, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, stream)?;
    writeln!(out)?;
    Ok(())
}

fn table_text(token: &Token) -> String {
    let text = match token.kind() {
        TokenKind::CharLiteral | TokenKind::StringLiteral => token.spelling(),
        _ => token.text().to_string(),
    };
    text.replace('\r', "\\r").replace('\n', "\\n").replace('\t', "\\t")
}
