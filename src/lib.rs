//! # Lox Language Front End
//!
//! Lexical analysis for the Lox scripting language: a single-pass scanner
//! that turns source text into a flat token sequence for a downstream parser.
//!
//! ## Architecture
//!
//! The implementation is organized into two modules:
//! - `lexer`: Tokenization of source code
//! - `error`: Diagnostic formatting and the error-reporting seam
//!
//! The parser and interpreter are separate components; this crate's public
//! boundary is the token stream and the [`ErrorReporter`] trait.

pub mod error;
pub mod lexer;

// Re-export commonly used types
pub use error::{CollectingReporter, ConsoleReporter, ErrorReporter};
pub use lexer::{Literal, Scanner, Token, TokenType};

/// Version of the Lox front end
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Scan a Lox program into tokens
///
/// This is the main entry point for lexical analysis. Lexical errors are
/// delivered to `reporter`; the returned sequence is always well formed and
/// always ends with a single EOF token.
///
/// # Arguments
///
/// * `source` - The source code to scan
/// * `reporter` - Sink for lexical error reports
pub fn scan(source: &str, reporter: &mut dyn ErrorReporter) -> Vec<Token> {
    Scanner::new(source, reporter).scan_tokens()
}
