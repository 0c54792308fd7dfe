//! Caveat definitions. The body is CEL, kept as an opaque run of balanced tokens.

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::token_sets::{CAVEAT_BODY_STOP, PARAM_RECOVERY, SYNC};
use crate::parser::cst::{SyntaxKind, TokenSet};

impl Parser<'_> {
    /// `caveat name(param, ...) { expression }`
    pub(super) fn parse_caveat_def(&mut self) {
        if !self.enter_rule() {
            return;
        }
        self.assert_current(SyntaxKind::KwCaveat);
        let start = self.current_span().start();
        let mark = self.diagnostics_mark();

        self.start_node(SyntaxKind::CaveatDef);
        self.bump();

        let paren_or_brace = TokenSet::new(&[SyntaxKind::ParenOpen, SyntaxKind::BraceOpen]);
        self.expect_name("caveat name", paren_or_brace);

        self.skip_to(paren_or_brace, "expected `(` after caveat name");
        if self.currently_is(SyntaxKind::ParenOpen) {
            self.parse_param_list();
        } else {
            self.missing(DiagnosticKind::ExpectedToken, "`(` after caveat name");
        }

        let brace = TokenSet::single(SyntaxKind::BraceOpen);
        if self.skip_to(brace, "expected `{` after caveat parameters") {
            self.parse_caveat_body();
        } else {
            self.missing(DiagnosticKind::ExpectedToken, "`{` after caveat parameters");
        }

        self.finish_node();
        self.tag_diagnostics(mark, start);
    }

    fn parse_param_list(&mut self) {
        self.start_node(SyntaxKind::ParamList);
        self.push_delimiter();
        self.bump();

        let list_end = SYNC.union(TokenSet::new(&[SyntaxKind::ParenClose, SyntaxKind::BraceOpen]));
        loop {
            let kind = self.current();
            if self.should_stop() || list_end.contains(kind) {
                break;
            }
            if kind == SyntaxKind::Ident {
                self.parse_param();
                if self.eat_token(SyntaxKind::Comma) {
                    continue;
                }
                if self.currently_is(SyntaxKind::Ident) {
                    self.missing(DiagnosticKind::ExpectedToken, "`,` between parameters");
                }
                continue;
            }
            self.error_until(
                DiagnosticKind::UnexpectedToken,
                "expected a parameter",
                PARAM_RECOVERY,
            );
            self.eat_token(SyntaxKind::Comma);
        }

        self.expect_closing(
            SyntaxKind::ParenClose,
            DiagnosticKind::UnclosedParameterList,
            "parameter list",
        );
        self.finish_node();
    }

    /// `name type`
    fn parse_param(&mut self) {
        if !self.enter_rule() {
            return;
        }
        self.start_node(SyntaxKind::Param);
        self.bump();

        if self.currently_is(SyntaxKind::Ident) {
            self.parse_type_expr();
        } else if self.should_stop() || self.currently_is_one_of(PARAM_RECOVERY) {
            self.missing(DiagnosticKind::ExpectedParameterType, "a parameter type");
        } else {
            self.error_until(
                DiagnosticKind::ExpectedParameterType,
                "a parameter type",
                PARAM_RECOVERY,
            );
        }

        self.finish_node();
    }

    /// `name` or `name<type, ...>`
    fn parse_type_expr(&mut self) {
        if !self.enter_recursion() {
            return;
        }
        self.start_node(SyntaxKind::TypeExpr);
        self.bump();

        if self.currently_is(SyntaxKind::LAngle) {
            self.push_delimiter();
            self.bump();
            loop {
                if self.currently_is(SyntaxKind::Ident) {
                    self.parse_type_expr();
                } else {
                    self.missing(DiagnosticKind::ExpectedParameterType, "a type argument");
                }
                if !self.eat_token(SyntaxKind::Comma) {
                    break;
                }
            }
            self.expect_closing(
                SyntaxKind::RAngle,
                DiagnosticKind::UnclosedTypeArguments,
                "type argument list",
            );
        }

        self.finish_node();
        self.exit_recursion();
    }

    /// `{ ... }` with the tokens in between under one `CaveatExpr` node.
    fn parse_caveat_body(&mut self) {
        self.push_delimiter();
        self.bump();

        if self.currently_is(SyntaxKind::BraceClose) {
            self.missing(DiagnosticKind::ExpectedExpression, "a caveat expression");
        } else if !self.should_stop() && !self.currently_is_one_of(CAVEAT_BODY_STOP) {
            self.start_node(SyntaxKind::CaveatExpr);
            self.parse_balanced_tokens();
            self.finish_node();
        }

        self.expect_closing(
            SyntaxKind::BraceClose,
            DiagnosticKind::UnclosedDefinition,
            "caveat body",
        );
    }

    /// Consumes tokens up to the `}` that closes the body. Nested brackets of
    /// any kind are tracked so inner `}` stay in the expression.
    fn parse_balanced_tokens(&mut self) {
        let mut depth = 0usize;
        loop {
            let kind = self.current();
            if self.should_stop() || CAVEAT_BODY_STOP.contains(kind) {
                break;
            }
            match kind {
                SyntaxKind::ParenOpen | SyntaxKind::BracketOpen | SyntaxKind::BraceOpen => {
                    depth += 1;
                    self.bump();
                }
                SyntaxKind::BraceClose if depth == 0 => break,
                SyntaxKind::ParenClose | SyntaxKind::BracketClose | SyntaxKind::BraceClose => {
                    if depth == 0 {
                        self.error_and_bump(DiagnosticKind::UnexpectedToken, "unbalanced closer");
                    } else {
                        depth -= 1;
                        self.bump();
                    }
                }
                SyntaxKind::Garbage => self.error_and_bump(DiagnosticKind::InvalidCharacter, ""),
                _ => self.bump(),
            }
        }
    }
}
