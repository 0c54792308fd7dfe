//! Grammar productions for the schema language.
//!
//! This module implements all `parse_*` methods as an extension of `Parser`.
//! Every production starts at a keyword the caller has already checked, so
//! the only lookahead-driven choices are inside permission expressions.

mod caveats;
mod definitions;
mod expressions;
mod members;

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::token_sets::{ROOT_RECOVERY, SYNC};
use crate::parser::cst::{SyntaxKind, TokenSet};

impl Parser<'_> {
    pub fn parse_root(&mut self) {
        self.start_node(SyntaxKind::SourceFile);

        loop {
            let kind = self.current();
            if self.should_stop() {
                break;
            }
            match kind {
                SyntaxKind::KwDefinition => self.parse_object_def(),
                SyntaxKind::KwCaveat => self.parse_caveat_def(),
                SyntaxKind::KwRelation | SyntaxKind::KwPermission => self.parse_top_level_member(),
                _ => self.error_until(
                    DiagnosticKind::UnexpectedToken,
                    "expected `definition` or `caveat`",
                    ROOT_RECOVERY,
                ),
            }
        }

        if self.is_halted() {
            self.wrap_rest_as_incomplete();
        }
        self.drain_trivia();
        self.finish_node();
    }

    /// Parses one member or definition starting at the first token, under a
    /// `SourceFile` wrapper. Whatever the production leaves unconsumed becomes
    /// one trailing `Error` node.
    pub(crate) fn parse_fragment(&mut self) {
        self.start_node(SyntaxKind::SourceFile);

        match self.current() {
            SyntaxKind::KwDefinition => self.parse_object_def(),
            SyntaxKind::KwCaveat => self.parse_caveat_def(),
            SyntaxKind::KwRelation => self.parse_relation(),
            SyntaxKind::KwPermission => self.parse_permission(),
            _ => {}
        }
        self.error_until(
            DiagnosticKind::UnexpectedToken,
            "unexpected input",
            TokenSet::EMPTY,
        );

        if self.is_halted() {
            self.wrap_rest_as_incomplete();
        }
        self.drain_trivia();
        self.finish_node();
    }

    fn parse_top_level_member(&mut self) {
        let start = self.current_span().start();
        self.parse_member();
        let range = rowan::TextRange::new(start, self.last_non_trivia_end().unwrap_or(start));
        self.note(
            DiagnosticKind::MemberOutsideDefinition,
            range,
            "wrap it in `definition name { ... }`",
        );
    }

    /// Name slot: an identifier, or a `Missing` placeholder when the next
    /// token already belongs to what follows, or a one-token `Error` otherwise.
    pub(super) fn expect_name(&mut self, what: &str, follow: TokenSet) {
        if self.eat_token(SyntaxKind::Ident) {
            return;
        }
        if self.should_stop() || self.currently_is_one_of(follow.union(SYNC)) {
            self.missing(DiagnosticKind::ExpectedName, what);
            return;
        }
        self.error_and_bump(DiagnosticKind::ExpectedName, what);
    }

    /// Skips anything before `wanted` as one `Error` node, unless the next
    /// token is a sync point. Returns whether `wanted` is now current.
    pub(super) fn skip_to(&mut self, wanted: TokenSet, detail: &str) -> bool {
        if self.currently_is_one_of(wanted) {
            return true;
        }
        if self.should_stop() || self.currently_is_one_of(SYNC) {
            return false;
        }
        self.error_until(DiagnosticKind::UnexpectedToken, detail, SYNC.union(wanted));
        self.currently_is_one_of(wanted)
    }
}
