//! Text renderings of a tree: an indented CST dump and S-expressions.

use std::fmt::Write;

use rowan::NodeOrToken;

use super::fields::field_name;
use crate::parser::{SyntaxElement, SyntaxNode};

/// Indented dump, one element per line: nodes as `Kind`, tokens as `Kind "text"`.
pub struct TreePrinter {
    root: SyntaxNode,
    trivia: bool,
    spans: bool,
}

impl TreePrinter {
    pub fn new(root: SyntaxNode) -> Self {
        Self {
            root,
            trivia: false,
            spans: false,
        }
    }

    pub fn with_trivia(mut self, value: bool) -> Self {
        self.trivia = value;
        self
    }

    pub fn with_spans(mut self, value: bool) -> Self {
        self.spans = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        self.format_node(&self.root, 0, w)
    }

    fn format_node(&self, node: &SyntaxNode, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        let span = self.span_str(node.text_range());

        writeln!(w, "{}{:?}{}", prefix, node.kind(), span)?;

        for child in node.children_with_tokens() {
            match child {
                NodeOrToken::Node(n) => self.format_node(&n, indent + 1, w)?,
                NodeOrToken::Token(t) => {
                    if self.trivia || !t.kind().is_trivia() {
                        let child_prefix = "  ".repeat(indent + 1);
                        let child_span = self.span_str(t.text_range());
                        writeln!(
                            w,
                            "{}{:?}{} {:?}",
                            child_prefix,
                            t.kind(),
                            child_span,
                            t.text()
                        )?;
                    }
                }
            }
        }
        Ok(())
    }

    fn span_str(&self, range: rowan::TextRange) -> String {
        if !self.spans {
            return String::new();
        }
        format!(
            " [{}..{}]",
            u32::from(range.start()),
            u32::from(range.end())
        )
    }
}

/// Tree-sitter style S-expression of `node`.
///
/// Only named kinds appear: nodes, identifiers, literals and comments.
/// Children a field refers to are prefixed with `field: `.
pub fn sexp(node: &SyntaxNode) -> String {
    let mut out = String::new();
    write_sexp(&NodeOrToken::Node(node.clone()), &mut out).expect("String write never fails");
    out
}

fn write_sexp(element: &SyntaxElement, w: &mut impl Write) -> std::fmt::Result {
    write!(w, "({}", element.kind().name())?;
    if let NodeOrToken::Node(node) = element {
        for child in node.children_with_tokens() {
            if !child.kind().is_named() {
                continue;
            }
            w.write_char(' ')?;
            if let Some(field) = field_name(&child) {
                write!(w, "{field}: ")?;
            }
            write_sexp(&child, w)?;
        }
    }
    w.write_char(')')
}
