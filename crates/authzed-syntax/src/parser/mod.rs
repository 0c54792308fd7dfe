//! Parser infrastructure for the schema language.
//!
//! # Architecture
//!
//! This parser produces a lossless concrete syntax tree (CST) via Rowan's green tree builder.
//!
//! - Zero-copy parsing: tokens carry spans, text sliced only when building tree nodes
//! - Trivia buffering: whitespace/comments collected, then attached as leading trivia
//! - Checkpoint-based wrapping: binary operators retroactively wrap their left operand
//! - Explicit recovery sets: per-production sets determine when to bail vs consume
//!
//! # Recovery Strategy
//!
//! The parser is resilient: it always produces a tree. Recovery follows these rules:
//!
//! 1. Unexpected tokens get wrapped in `SyntaxKind::Error` nodes up to the next sync token
//! 2. Required tokens that are absent become zero-width `SyntaxKind::Missing` nodes
//! 3. Sync tokens (`;`, `}` and the declaration keywords) are never swallowed by an error
//! 4. When a parse budget runs out, the remaining input goes into one `Incomplete` node

pub mod ast;
pub mod cst;
pub mod lexer;

mod core;
mod grammar;
mod invariants;

#[cfg(test)]
mod tests;

pub use cst::{SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};

pub use ast::{
    ArrowExpr, CaveatDef, CaveatExpr, Definition, ExclusionExpr, Expr, IntersectionExpr, Member,
    NameRef, Nil, ObjectDef, Param, ParamList, ParenExpr, Permission, Relation, SourceFile,
    TypeExpr, TypeRef, UnionExpr, Wildcard,
};

pub use core::Parser;
pub(crate) use core::ParseOutput;

use crate::config::ParseConfig;
use crate::tree::Tree;
use lexer::lex;

/// Main entry point with default budgets. Never fails: syntax errors live in the tree.
pub fn parse(source: &str) -> Tree {
    parse_with_config(source, ParseConfig::default())
}

pub fn parse_with_config(source: &str, config: ParseConfig) -> Tree {
    let mut parser = Parser::new(source, lex(source)).with_config(config);
    parser.parse_root();
    Tree::new(source.into(), parser.finish(), config)
}

/// Validates `bytes` as UTF-8, then parses.
pub fn parse_bytes(bytes: &[u8]) -> crate::Result<Tree> {
    parse_bytes_with_config(bytes, ParseConfig::default())
}

pub fn parse_bytes_with_config(bytes: &[u8], config: ParseConfig) -> crate::Result<Tree> {
    let source = std::str::from_utf8(bytes).map_err(|err| crate::Error::InvalidUtf8 {
        valid_up_to: err.valid_up_to(),
    })?;
    Ok(parse_with_config(source, config))
}

/// Parses the member or definition that starts at `start` and ends at `end`.
///
/// Returns `None` when the tokens do not line up with `end` exactly.
pub(crate) fn parse_fragment(
    source: &str,
    start: usize,
    end: usize,
    config: ParseConfig,
) -> Option<ParseOutput> {
    let mut tokens = Vec::new();
    for token in lexer::Lexer::at(source, start) {
        let token_end = usize::from(token.span.end());
        if token_end > end {
            return None;
        }
        tokens.push(token);
        if token_end == end {
            break;
        }
    }
    if tokens.last().map(|t| usize::from(t.span.end())) != Some(end) {
        return None;
    }
    let mut parser = Parser::new(source, tokens).with_config(config);
    parser.parse_fragment();
    Some(parser.finish())
}
