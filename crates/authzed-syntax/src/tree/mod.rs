//! The parsed tree and its query surface.
//!
//! A [`Tree`] owns the green root, the source it was parsed from, and the
//! diagnostics of that parse. It never changes after construction; an edit
//! produces a new tree through [`Tree::reparse`] that shares untouched green
//! subtrees with the old one.

mod cursor;
mod fields;
mod incremental;
mod printer;


use std::sync::Arc;

use rowan::GreenNode;

pub use cursor::TreeCursor;
pub use fields::{SyntaxNodeExt, field_name};
pub use incremental::{Edit, Reparse, ReparseStrategy};
pub use printer::{TreePrinter, sexp};

use crate::config::{ParseConfig, ParseLimit};
use crate::diagnostics::Diagnostics;
use crate::parser::{ParseOutput, SourceFile, SyntaxKind, SyntaxNode};

#[derive(Debug, Clone)]
pub struct Tree {
    source: Arc<str>,
    green: GreenNode,
    diagnostics: Diagnostics,
    error_count: usize,
    limit: Option<ParseLimit>,
    config: ParseConfig,
}

impl Tree {
    pub(crate) fn new(source: Arc<str>, output: ParseOutput, config: ParseConfig) -> Self {
        Self {
            source,
            green: output.green,
            diagnostics: output.diagnostics,
            error_count: output.error_nodes,
            limit: output.limit,
            config,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn green(&self) -> &GreenNode {
        &self.green
    }

    /// Red root over the shared green tree. Cheap: no copying.
    pub fn root(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green.clone())
    }

    pub fn source_file(&self) -> SourceFile {
        match SourceFile::cast(self.root()) {
            Some(file) => file,
            None => unreachable!("parser always produces a SourceFile root"),
        }
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Whether any `Error` or `Missing` node was built.
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Whether a parse budget stopped the parser before the end of input.
    pub fn is_incomplete(&self) -> bool {
        self.limit.is_some()
    }

    pub fn parse_limit(&self) -> Option<ParseLimit> {
        self.limit
    }

    pub fn config(&self) -> ParseConfig {
        self.config
    }

    /// Concatenation of every token, trivia included. Equals the source.
    pub fn text(&self) -> String {
        self.root().text().to_string()
    }

    /// `Error` and `Missing` nodes in document order.
    pub fn error_nodes(&self) -> impl Iterator<Item = SyntaxNode> + use<> {
        self.root()
            .descendants()
            .filter(|n| matches!(n.kind(), SyntaxKind::Error | SyntaxKind::Missing))
    }

    /// Depth-first walk with `skip_subtree` support.
    pub fn preorder(&self) -> rowan::api::Preorder<crate::parser::cst::AuthzedLang> {
        self.root().preorder()
    }

    pub fn cursor(&self) -> TreeCursor {
        TreeCursor::new(self.root())
    }

    pub fn to_sexp(&self) -> String {
        sexp(&self.root())
    }

    pub fn printer(&self) -> TreePrinter {
        TreePrinter::new(self.root())
    }
}

/// Counts `Error` and `Missing` nodes under `node`, itself included.
pub(crate) fn count_error_nodes(node: &SyntaxNode) -> usize {
    node.descendants()
        .filter(|n| matches!(n.kind(), SyntaxKind::Error | SyntaxKind::Missing))
        .count()
}
