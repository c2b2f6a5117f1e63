//! sayc-lex - Lexical Analyzer for the Say teaching language
//!
//! This crate turns Say source text into a stream of tokens for the parser.
//! Say reads almost like English: statements end with `,`, blocks are
//! `start ... end`, and comparisons are spelled out (`is not`,
//! `not less than`).
//!
//! # Example Usage
//!
//! ```
//! use sayc_lex::{tokenize, TokenKind};
//!
//! let stream = tokenize("repeat on x, say 'hi',").unwrap();
//! assert_eq!(stream[0].kind(), TokenKind::RepeatOn);
//! assert_eq!(stream[4].kind(), TokenKind::StringLiteral);
//! assert_eq!(stream[4].text(), "hi");
//! assert!(stream.eof().is_eof());
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token and token kind definitions
//! - [`keywords`] - Fixed spellings and multiword roots
//! - [`classify`] - Pure lexeme classification
//! - [`cursor`] - Character cursor with pushback and snapshots
//! - [`lexer`] - Scanning, multiword resolution, stream building
//! - [`stream`] - The finished token sequence
//! - [`source`] - Source files read from disk
//! - [`error`] - Lexical and resource errors
//!
//! # Lexical Grammar
//!
//! ## Keywords
//!
//! `create` `as` `start` `end` `if` `else` `while` `repeat` `stop` `skip`
//! `say` `input` `with` `return` `true` `false`
//!
//! ## Type names
//!
//! `int` `float` `char` `list` `string`
//!
//! ## Operators
//!
//! - **Comparison**: `is`, `is not`, `less than`, `more than`,
//!   `not less than`, `not more than`
//! - **Logical**: `and`, `or`
//! - **Arithmetic**: `+ - * / %`, `++ --`, `+= -= *= /= %=`
//! - **Assignment**: `=`
//!
//! ## Punctuation
//!
//! `( ) [ ] :` and `,`, which terminates a statement.
//!
//! ## Literals
//!
//! - **Integer**: `42`
//! - **Float**: `3.14`, `1.`
//! - **Char**: `'a'`, `"a"`, `''`
//! - **String**: `'hello'`, `"it's"` (no escape sequences)
//!
//! ## Comments
//!
//! `| anything, over several lines |`. Comments do not nest.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classify;
pub mod cursor;
pub mod error;
pub mod keywords;
pub mod lexer;
pub mod source;
pub mod stream;
pub mod token;

#[cfg(test)]
mod edge_cases;

use std::path::Path;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{LexError, LexErrorKind, TokenizeError};
pub use lexer::{Lexer, LexerConfig, LineCounting, State};
pub use source::SourceFile;
pub use stream::TokenStream;
pub use token::{Token, TokenKind};

/// Tokenizes `source` with the default configuration, stopping at the
/// first lexical error.
pub fn tokenize(source: &str) -> Result<TokenStream, LexError> {
    Lexer::new(source).tokenize()
}

/// Reads and tokenizes a file.
///
/// ```no_run
/// use sayc_lex::{tokenize_file, LexerConfig};
///
/// let stream = tokenize_file("hello.say", LexerConfig::default())?;
/// println!("{} tokens", stream.len());
/// # Ok::<(), sayc_lex::TokenizeError>(())
/// ```
pub fn tokenize_file(path: impl AsRef<Path>, config: LexerConfig) -> Result<TokenStream, TokenizeError> {
    let source = SourceFile::open(path)?;
    Ok(source.lexer(config).tokenize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).unwrap().kinds()
    }

    #[test]
    fn test_hello_program() {
        let source = r#"
            | greet the user |
            create name as string,
            say "What is your name?",
            input name,
            say "Hello " + name,
        "#;
        let stream = tokenize(source).unwrap();
        let kinds = stream.kinds();

        assert!(kinds.contains(&TokenKind::Create));
        assert!(kinds.contains(&TokenKind::String));
        assert!(kinds.contains(&TokenKind::Input));
        assert_eq!(
            kinds.iter().filter(|k| **k == TokenKind::Terminator).count(),
            4
        );
        assert_eq!(stream[0].line(), 3);
    }

    #[test]
    fn test_loop_program() {
        let source = "
            create i as int = 0,
            while i less than 10 start
                if i is not 5 start
                    say i,
                end
                i++,
            end
        ";
        let kinds = kinds(source);

        assert!(kinds.contains(&TokenKind::While));
        assert!(kinds.contains(&TokenKind::LessThan));
        assert!(kinds.contains(&TokenKind::IsNot));
        assert!(kinds.contains(&TokenKind::StartScope));
        assert!(kinds.contains(&TokenKind::EndScope));
        assert!(kinds.contains(&TokenKind::Increment));
    }

    #[test]
    fn test_function_program() {
        let source = "
            create add with (a as int, b as int) as int start
                return a + b,
            end
            repeat on nums: say nums[0],
            if x not more than 3.5 or done is false start stop, end
        ";
        let kinds = kinds(source);

        assert!(kinds.contains(&TokenKind::With));
        assert!(kinds.contains(&TokenKind::Return));
        assert!(kinds.contains(&TokenKind::RepeatOn));
        assert!(kinds.contains(&TokenKind::Colon));
        assert!(kinds.contains(&TokenKind::OpenBracket));
        assert!(kinds.contains(&TokenKind::NotMoreThan));
        assert!(kinds.contains(&TokenKind::FloatLiteral));
        assert!(kinds.contains(&TokenKind::Or));
        assert!(kinds.contains(&TokenKind::False));
        assert!(kinds.contains(&TokenKind::Stop));
    }

    #[test]
    fn test_tokenize_file_missing() {
        let err = tokenize_file("no/such/file.say", LexerConfig::default()).unwrap_err();
        assert!(matches!(err, TokenizeError::Resource { .. }));
    }

    #[test]
    fn test_tokenize_file_lexical_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("oops.say");
        std::fs::write(&path, "say 'oops").unwrap();
        let err = tokenize_file(&path, LexerConfig::default()).unwrap_err();

        assert_eq!(
            err.as_lexical().map(|e| e.kind),
            Some(LexErrorKind::UnterminatedLiteral)
        );
    }
}
