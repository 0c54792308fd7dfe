use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::token_sets::SYNC;
use crate::parser::cst::{SyntaxKind, TokenSet};

impl Parser<'_> {
    pub(super) fn parse_member(&mut self) {
        match self.current() {
            SyntaxKind::KwRelation => self.parse_relation(),
            SyntaxKind::KwPermission => self.parse_permission(),
            kind => unreachable!("parse_member called at {kind:?}"),
        }
    }

    /// `relation name: type_ref (| type_ref)* ;?`
    pub(super) fn parse_relation(&mut self) {
        if !self.enter_rule() {
            return;
        }
        self.assert_current(SyntaxKind::KwRelation);
        let start = self.current_span().start();
        let mark = self.diagnostics_mark();

        self.start_node(SyntaxKind::Relation);
        self.bump();
        self.expect_name("relation name", TokenSet::single(SyntaxKind::Colon));

        let colon = TokenSet::single(SyntaxKind::Colon);
        if self.skip_to(colon, "expected `:` after relation name") {
            self.bump();
            self.parse_type_refs();
        } else {
            self.missing(DiagnosticKind::ExpectedToken, "`:` after relation name");
        }
        self.eat_token(SyntaxKind::Semicolon);

        self.finish_node();
        self.tag_diagnostics(mark, start);
    }

    fn parse_type_refs(&mut self) {
        self.parse_type_ref();
        loop {
            if self.eat_token(SyntaxKind::Pipe) {
                self.parse_type_ref();
                continue;
            }
            if self.should_stop() || self.currently_is_one_of(SYNC) {
                break;
            }
            self.error_until(
                DiagnosticKind::UnexpectedToken,
                "expected `|` or the end of the relation",
                SYNC.union(TokenSet::single(SyntaxKind::Pipe)),
            );
        }
    }

    /// `type ('#' relation | ':' '*')? ('with' caveat)?`
    fn parse_type_ref(&mut self) {
        if !self.enter_rule() {
            return;
        }
        if !self.currently_is(SyntaxKind::Ident) {
            let stop = SYNC.union(TokenSet::single(SyntaxKind::Pipe));
            if self.should_stop() || self.currently_is_one_of(stop) {
                self.missing(DiagnosticKind::ExpectedTypeReference, "a type reference");
            } else {
                self.error_and_bump(DiagnosticKind::ExpectedTypeReference, "a type reference");
            }
            return;
        }

        self.start_node(SyntaxKind::TypeRef);
        self.bump();

        let after_qualifier = TokenSet::new(&[SyntaxKind::Pipe, SyntaxKind::KwWith]);
        if self.eat_token(SyntaxKind::Hash) {
            self.expect_name("relation name after `#`", after_qualifier);
        } else if self.eat_token(SyntaxKind::Colon) && !self.eat_token(SyntaxKind::Star) {
            self.missing(DiagnosticKind::ExpectedToken, "`*` after `:`");
        }

        if self.eat_token(SyntaxKind::KwWith) {
            self.expect_name("caveat name after `with`", TokenSet::single(SyntaxKind::Pipe));
        }

        self.finish_node();
    }

    /// `permission name = expression ;?`
    pub(super) fn parse_permission(&mut self) {
        if !self.enter_rule() {
            return;
        }
        self.assert_current(SyntaxKind::KwPermission);
        let start = self.current_span().start();
        let mark = self.diagnostics_mark();

        self.start_node(SyntaxKind::Permission);
        self.bump();
        self.expect_name("permission name", TokenSet::single(SyntaxKind::Equals));

        let equals = TokenSet::single(SyntaxKind::Equals);
        if self.skip_to(equals, "expected `=` after permission name") {
            self.bump();
            self.parse_expr();
            if !self.should_stop() && !self.currently_is_one_of(SYNC) {
                self.error_until(
                    DiagnosticKind::UnexpectedToken,
                    "expected an operator or the end of the permission",
                    SYNC,
                );
            }
        } else {
            self.missing(DiagnosticKind::ExpectedToken, "`=` after permission name");
        }
        self.eat_token(SyntaxKind::Semicolon);

        self.finish_node();
        self.tag_diagnostics(mark, start);
    }
}
