use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::token_sets::{MEMBER_FIRST, SYNC};
use crate::parser::cst::{SyntaxKind, TokenSet};

impl Parser<'_> {
    /// `definition name { member* }`
    pub(super) fn parse_object_def(&mut self) {
        if !self.enter_rule() {
            return;
        }
        self.assert_current(SyntaxKind::KwDefinition);
        let start = self.current_span().start();
        let mark = self.diagnostics_mark();

        self.start_node(SyntaxKind::ObjectDef);
        self.bump();
        self.expect_name("definition name", TokenSet::single(SyntaxKind::BraceOpen));

        let brace = TokenSet::single(SyntaxKind::BraceOpen);
        if self.skip_to(brace, "expected `{` after definition name") {
            self.push_delimiter();
            self.bump();
            self.parse_members();
            self.expect_closing(
                SyntaxKind::BraceClose,
                DiagnosticKind::UnclosedDefinition,
                "definition",
            );
        } else {
            self.missing(DiagnosticKind::ExpectedToken, "`{` after definition name");
            // Members right after a missing `{` still belong to this definition.
            if self.currently_is_one_of(MEMBER_FIRST) {
                self.parse_members();
                self.eat_token(SyntaxKind::BraceClose);
            }
        }

        self.finish_node();
        self.tag_diagnostics(mark, start);
    }

    fn parse_members(&mut self) {
        loop {
            let kind = self.current();
            if self.should_stop() {
                break;
            }
            match kind {
                SyntaxKind::KwRelation | SyntaxKind::KwPermission => self.parse_member(),
                SyntaxKind::BraceClose | SyntaxKind::KwDefinition | SyntaxKind::KwCaveat => break,
                SyntaxKind::Semicolon => {
                    self.error_and_bump(DiagnosticKind::UnexpectedToken, "stray `;`")
                }
                _ => self.error_until(
                    DiagnosticKind::UnexpectedToken,
                    "expected `relation` or `permission`",
                    SYNC,
                ),
            }
        }
    }
}
