//! Lossless, error-tolerant parser for the Authzed/SpiceDB schema language.
//!
//! The crate turns schema text into a concrete syntax tree with byte-accurate
//! ranges. Every input produces a tree: malformed regions become `Error` and
//! `Missing` nodes, and the only fatal condition is input that is not UTF-8.
//!
//! - `parser` - lexer, syntax kinds, grammar, and typed AST views
//! - `tree` - the immutable [`Tree`], field access, cursor, printers, incremental reparse
//! - `diagnostics` - error reporting collected while parsing
//! - `language` - static grammar descriptor for generic tree walkers
//! - `config` - parse budgets
//!
//! # Example
//!
//! ```
//! let tree = authzed_syntax::parse("definition user {}");
//! assert!(!tree.has_errors());
//! assert_eq!(tree.text(), "definition user {}");
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod diagnostics;
pub mod language;
pub mod parser;
pub mod tree;

#[cfg(test)]
pub mod test_utils;

pub use config::{ParseConfig, ParseLimit};
pub use diagnostics::{DiagnosticKind, Diagnostics, DiagnosticsPrinter, Severity};
pub use language::{Language, language};
pub use parser::{
    SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken, parse, parse_bytes, parse_bytes_with_config,
    parse_with_config,
};
pub use tree::{Edit, Reparse, ReparseStrategy, Tree, TreeCursor};

/// Errors that prevent a tree from being built at all.
///
/// Syntax problems never surface here: they are embedded in the tree as
/// error nodes and reported through [`Diagnostics`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The input buffer is not valid UTF-8.
    #[error("source is not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidUtf8 { valid_up_to: usize },

    /// An edit range that is out of bounds or splits a code point.
    #[error("edit range {start}..{end} does not fit a source of {len} bytes")]
    InvalidEdit { start: usize, end: usize, len: usize },
}

/// Result type for fallible entry points.
pub type Result<T> = std::result::Result<T, Error>;
