//! Lexer module.
//!
//! The lexer implementation is split into focused components:
//! - `core` - Lexer struct, dispatch, and the token stream builder
//! - `comment` - Whitespace and `| ... |` comment skipping
//! - `string` - Quoted char and string literals
//! - `operator` - Arithmetic operators with maximal munch
//! - `identifier` - Identifier and keyword shaped words
//! - `number` - Integer and float literals
//! - `multiword` - Lookahead for `repeat on`, `is not`, `not less than`, ...

mod comment;
mod core;
mod identifier;
mod multiword;
mod number;
mod operator;
mod string;

pub use self::core::{Lexer, LexerConfig, LineCounting, State};
