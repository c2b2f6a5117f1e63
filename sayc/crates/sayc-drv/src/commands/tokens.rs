//! `sayc tokens`: print the token stream of one source file.

use std::io::{self, Write};
use std::path::PathBuf;

use sayc_lex::{LexerConfig, SourceFile, TokenizeError};
use sayc_util::Handler;
use tracing::debug;

use super::common::{validate_source_path, write_json, write_table, OutputFormat};
use crate::error::{DrvError, Result};

/// Resolved arguments for the tokens command.
#[derive(Debug, Clone)]
pub struct TokensArgs {
    /// Source file to tokenize.
    pub file: PathBuf,
    /// Output format.
    pub format: OutputFormat,
    /// Lexer settings.
    pub lexer: LexerConfig,
    /// Collect every error instead of stopping at the first.
    pub recover: bool,
    /// Required source extension.
    pub extension: String,
}

/// Tokenizes `args.file` and prints the stream to stdout.
///
/// In recovering mode the stream is printed even when errors were found;
/// the diagnostics go to stderr and the command still fails.
pub fn run_tokens(args: TokensArgs) -> Result<()> {
    validate_source_path(&args.file, &args.extension)?;
    let source = SourceFile::open(&args.file)?;
    debug!(file = %args.file.display(), recover = args.recover, "tokenizing");

    let handler = Handler::new();
    let stream = if args.recover {
        source.lexer(args.lexer).tokenize_recovering(&handler)
    } else {
        source
            .lexer(args.lexer)
            .tokenize()
            .map_err(TokenizeError::from)?
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format {
        OutputFormat::Table => write_table(&stream, &mut out)?,
        OutputFormat::Json => write_json(&stream, &mut out)?,
    }
    out.flush()?;

    if handler.has_errors() {
        let origin = args.file.display().to_string();
        handler.render_to(Some(&origin), &mut io::stderr().lock())?;
        return Err(DrvError::Lexical {
            count: handler.error_count(),
        });
    }
    Ok(())
}
