//! Source files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::TokenizeError;
use crate::lexer::{Lexer, LexerConfig};

/// Source text loaded from disk, together with its path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFile {
    path: PathBuf,
    text: String,
}

impl SourceFile {
    /// Reads the whole file into memory.
    ///
    /// A missing or unreadable file yields [`TokenizeError::Resource`] and
    /// no tokens are ever produced for it. Any encoding is accepted: bytes
    /// that are not valid UTF-8 become U+FFFD, which literals and comments
    /// carry through and which is an unrecognized character anywhere else.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, TokenizeError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| TokenizeError::Resource {
            path: path.to_path_buf(),
            source,
        })?;
        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(path = %path.display(), "source is not valid UTF-8, invalid bytes replaced");
                String::from_utf8_lossy(err.as_bytes()).into_owned()
            },
        };
        tracing::debug!(path = %path.display(), bytes = text.len(), "loaded source file");
        Ok(Self {
            path: path.to_path_buf(),
            text,
        })
    }

    /// Wraps text that did not come from disk.
    pub fn from_text(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    /// Path the source was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Full source text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// A lexer over this file with the given configuration.
    pub fn lexer(&self, config: LexerConfig) -> Lexer<'_> {
        Lexer::with_config(&self.text, config)
    }
}
