//! Error handling module for the sayc CLI.

use std::path::PathBuf;

use sayc_lex::TokenizeError;
use sayc_util::DiagnosticError;
use thiserror::Error;

/// Main error type for the sayc CLI application.
#[derive(Error, Debug)]
pub enum DrvError {
    /// Configuration could not be found, parsed, or applied.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The source path is not an acceptable source file name.
    #[error("Invalid source file `{}`: {reason}", .path.display())]
    InvalidSourceName {
        /// Offending path.
        path: PathBuf,
        /// What is wrong with it.
        reason: String,
    },

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Diagnostics could not be written.
    #[error(transparent)]
    Diagnostics(#[from] DiagnosticError),

    /// Reading or fail-fast tokenization failed.
    #[error(transparent)]
    Tokenize(#[from] TokenizeError),

    /// Recovering tokenization reported errors.
    #[error("{count} lexical error(s) found")]
    Lexical {
        /// Number of errors across all inputs.
        count: usize,
    },
}

/// Result type alias using DrvError.
pub type Result<T> = std::result::Result<T, DrvError>;

#[cfg(test)]
mod tests {
    use super::*;
    use sayc_lex::tokenize;

    #[test]
    fn test_config_error_display() {
        let err = DrvError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_invalid_source_display() {
        let err = DrvError::InvalidSourceName {
            path: PathBuf::from("notes.txt"),
            reason: "expected a `.say` file".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid source file `notes.txt`: expected a `.say` file"
        );
    }

    #[test]
    fn test_lexical_error_is_transparent() {
        let lex = tokenize("say 'open").unwrap_err();
        let err: DrvError = TokenizeError::from(lex).into();
        assert_eq!(err.to_string(), "unterminated literal `'open` at line 1");
    }

    #[test]
    fn test_lexical_count_display() {
        assert_eq!(
            DrvError::Lexical { count: 3 }.to_string(),
            "3 lexical error(s) found"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: DrvError = io_err.into();
        assert!(matches!(err, DrvError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: DrvError = json_err.into();
        assert!(matches!(err, DrvError::Json(_)));
    }
}
