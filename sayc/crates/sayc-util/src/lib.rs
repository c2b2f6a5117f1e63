//! sayc-util - Core Utilities and Foundation Types
//!
//! Shared building blocks for the Say toolchain:
//!
//! - [`span`] - Source locations (byte range plus 1-based line)
//! - [`diagnostic`] - Errors and warnings, their codes, and the [`Handler`]
//!   that collects them
//! - [`error`] - Error types for the utilities themselves
//!
//! # Example
//!
//! ```
//! use sayc_util::{DiagnosticBuilder, DiagnosticCode, Handler, Level, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::new(Level::Error, "unterminated comment", Span::point(3))
//!     .code(DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT)
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level};
pub use error::{DiagnosticError, DiagnosticResult};
pub use span::Span;
