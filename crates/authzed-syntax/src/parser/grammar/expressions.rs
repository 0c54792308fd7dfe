//! Permission expressions: precedence climbing over binding powers.
//!
//! `+` and `-` share the loosest level, `&` binds tighter and `->` tightest.
//! Every operator is left-associative: `a + b - c` is `(a + b) - c`.

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::token_sets::{BINARY_OPS, SYNC};
use crate::parser::cst::{SyntaxKind, TokenSet};

/// Left and right binding power plus the node kind an operator builds.
fn infix_binding_power(op: SyntaxKind) -> Option<(u8, u8, SyntaxKind)> {
    let power = match op {
        SyntaxKind::Plus => (1, 2, SyntaxKind::UnionExpr),
        SyntaxKind::Minus => (1, 2, SyntaxKind::ExclusionExpr),
        SyntaxKind::Amp => (3, 4, SyntaxKind::IntersectionExpr),
        SyntaxKind::Arrow => (5, 6, SyntaxKind::ArrowExpr),
        _ => return None,
    };
    Some(power)
}

impl Parser<'_> {
    pub(super) fn parse_expr(&mut self) {
        self.parse_expr_bp(0, None);
    }

    /// `operator` is the operator whose right operand this is, if any.
    fn parse_expr_bp(&mut self, min_bp: u8, operator: Option<SyntaxKind>) {
        let checkpoint = self.checkpoint();
        self.parse_primary(operator);

        loop {
            let Some((l_bp, r_bp, kind)) = infix_binding_power(self.current()) else {
                break;
            };
            if l_bp < min_bp {
                break;
            }
            let op = self.current();
            self.start_node_at(checkpoint, kind);
            self.bump();
            self.parse_expr_bp(r_bp, Some(op));
            self.finish_node();
        }
    }

    /// Identifier, `*`, `nil`, or a parenthesized expression.
    fn parse_primary(&mut self, operator: Option<SyntaxKind>) {
        if !self.enter_rule() {
            return;
        }
        match self.current() {
            SyntaxKind::Ident => self.parse_leaf(SyntaxKind::NameRef),
            SyntaxKind::Star => self.parse_leaf(SyntaxKind::WildcardExpr),
            SyntaxKind::KwNil => self.parse_leaf(SyntaxKind::NilExpr),
            SyntaxKind::ParenOpen => self.parse_paren_expr(),
            _ => {
                let (kind, detail) = match operator {
                    Some(op) => (DiagnosticKind::TrailingOperator, format!("`{}`", op.name())),
                    None => (DiagnosticKind::ExpectedExpression, "an expression".to_string()),
                };
                let no_operand = SYNC.union(BINARY_OPS).union(TokenSet::single(SyntaxKind::ParenClose));
                if self.should_stop() || self.currently_is_one_of(no_operand) {
                    self.missing(kind, &detail);
                } else {
                    self.error_and_bump(kind, &detail);
                }
            }
        }
    }

    fn parse_leaf(&mut self, kind: SyntaxKind) {
        self.start_node(kind);
        self.bump();
        self.finish_node();
    }

    fn parse_paren_expr(&mut self) {
        if !self.enter_recursion() {
            return;
        }
        self.start_node(SyntaxKind::ParenExpr);
        self.push_delimiter();
        self.bump();

        if self.currently_is(SyntaxKind::ParenClose) {
            self.missing(
                DiagnosticKind::ExpectedExpression,
                "an expression inside parentheses",
            );
        } else {
            self.parse_expr();
        }

        let close = TokenSet::single(SyntaxKind::ParenClose);
        self.skip_to(close, "expected an operator or `)`");
        self.expect_closing(
            SyntaxKind::ParenClose,
            DiagnosticKind::UnclosedParen,
            "parenthesized expression",
        );

        self.finish_node();
        self.exit_recursion();
    }
}
