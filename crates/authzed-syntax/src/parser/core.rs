//! Parser state machine and low-level operations.

use rowan::{Checkpoint, GreenNode, GreenNodeBuilder, TextRange, TextSize};

use super::cst::{SyntaxKind, TokenSet, token_sets};
use super::lexer::{Token, token_text};
use crate::config::{ParseConfig, ParseLimit};
use crate::diagnostics::{DiagnosticKind, Diagnostics};

/// Everything one parser run produces.
#[derive(Debug)]
pub(crate) struct ParseOutput {
    pub green: GreenNode,
    pub diagnostics: Diagnostics,
    /// `Error` and `Missing` nodes built.
    pub error_nodes: usize,
    pub limit: Option<ParseLimit>,
}

#[derive(Debug, Clone, Copy)]
pub(super) struct OpenDelimiter {
    pub span: TextRange,
}

/// Trivia tokens are buffered and flushed when starting a new node.
pub struct Parser<'src> {
    pub(super) source: &'src str,
    pub(super) tokens: Vec<Token>,
    pub(super) pos: usize,
    pub(super) trivia_buffer: Vec<Token>,
    pub(super) builder: GreenNodeBuilder<'static>,
    pub(super) diagnostics: Diagnostics,
    pub(super) depth: u32,
    pub(super) last_diagnostic_pos: Option<TextSize>,
    pub(super) delimiter_stack: Vec<OpenDelimiter>,
    pub(super) debug_fuel: std::cell::Cell<u32>,
    /// End of the last token handed to the builder.
    emitted_end: TextSize,
    /// Offset where the token stream ends.
    end: TextSize,
    exec_fuel_remaining: Option<u32>,
    recursion_fuel_limit: Option<u32>,
    halted: Option<ParseLimit>,
    error_nodes: usize,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, tokens: Vec<Token>) -> Self {
        let start = tokens
            .first()
            .map_or(TextSize::from(source.len() as u32), |t| t.span.start());
        let end = tokens
            .last()
            .map_or(TextSize::from(source.len() as u32), |t| t.span.end());
        Self {
            source,
            tokens,
            pos: 0,
            trivia_buffer: Vec::with_capacity(4),
            builder: GreenNodeBuilder::new(),
            diagnostics: Diagnostics::new(),
            depth: 0,
            last_diagnostic_pos: None,
            delimiter_stack: Vec::with_capacity(8),
            debug_fuel: std::cell::Cell::new(256),
            emitted_end: start,
            end,
            exec_fuel_remaining: None,
            recursion_fuel_limit: None,
            halted: None,
            error_nodes: 0,
        }
    }

    pub fn with_config(mut self, config: ParseConfig) -> Self {
        self.exec_fuel_remaining = config.exec_fuel;
        self.recursion_fuel_limit = config.recursion_fuel;
        self
    }

    pub(crate) fn finish(mut self) -> ParseOutput {
        self.drain_trivia();
        ParseOutput {
            green: self.builder.finish(),
            diagnostics: self.diagnostics,
            error_nodes: self.error_nodes,
            limit: self.halted,
        }
    }

    pub(super) fn is_halted(&self) -> bool {
        self.halted.is_some()
    }

    fn halt(&mut self, limit: ParseLimit) {
        self.halted.get_or_insert(limit);
    }

    /// Current significant token. `Error` stands in for end of input and for a halted parser.
    pub(super) fn current(&mut self) -> SyntaxKind {
        self.skip_trivia_to_buffer();
        if self.is_halted() {
            return SyntaxKind::Error;
        }
        self.nth_raw(0)
    }

    fn reset_debug_fuel(&self) {
        self.debug_fuel.set(256);
    }

    pub(super) fn nth_raw(&self, lookahead: usize) -> SyntaxKind {
        self.ensure_progress();
        self.tokens
            .get(self.pos + lookahead)
            .map_or(SyntaxKind::Error, |t| t.kind)
    }

    fn consume_exec_fuel(&mut self) {
        if let Some(ref mut remaining) = self.exec_fuel_remaining {
            if *remaining == 0 {
                self.halt(ParseLimit::ExecFuel);
                return;
            }
            *remaining -= 1;
        }
    }

    /// Charges one unit of fuel for entering a grammar rule.
    /// Returns `false` when the parse has been halted.
    pub(super) fn enter_rule(&mut self) -> bool {
        self.consume_exec_fuel();
        !self.is_halted()
    }

    pub(super) fn current_span(&mut self) -> TextRange {
        self.skip_trivia_to_buffer();
        self.tokens
            .get(self.pos)
            .map_or_else(|| TextRange::empty(self.end), |t| t.span)
    }

    pub(super) fn current_text(&mut self) -> &'src str {
        self.skip_trivia_to_buffer();
        self.tokens
            .get(self.pos)
            .map_or("", |t| token_text(self.source, t))
    }

    pub(super) fn eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// End of input or halted. Skips pending trivia first, so trailing
    /// whitespace does not count as input.
    pub(super) fn should_stop(&mut self) -> bool {
        self.skip_trivia_to_buffer();
        self.eof() || self.is_halted()
    }

    pub(super) fn currently_is(&mut self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    pub(super) fn currently_is_one_of(&mut self, set: TokenSet) -> bool {
        set.contains(self.current())
    }

    pub(super) fn skip_trivia_to_buffer(&mut self) {
        while self.pos < self.tokens.len() && self.tokens[self.pos].kind.is_trivia() {
            self.trivia_buffer.push(self.tokens[self.pos]);
            self.pos += 1;
        }
    }

    pub(super) fn drain_trivia(&mut self) {
        for token in self.trivia_buffer.drain(..) {
            let text = token_text(self.source, &token);
            self.builder.token(token.kind.into(), text);
            self.emitted_end = token.span.end();
        }
    }

    pub(super) fn start_node(&mut self, kind: SyntaxKind) {
        self.drain_trivia();
        self.builder.start_node(kind.into());
    }

    pub(super) fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind) {
        self.builder.start_node_at(checkpoint, kind.into());
    }

    pub(super) fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    pub(super) fn checkpoint(&mut self) -> Checkpoint {
        self.drain_trivia();
        self.builder.checkpoint()
    }

    pub(super) fn bump(&mut self) {
        assert!(!self.eof(), "bump called at EOF");
        self.reset_debug_fuel();
        self.consume_exec_fuel();

        self.drain_trivia();

        let token = self.tokens[self.pos];
        let text = token_text(self.source, &token);
        self.builder.token(token.kind.into(), text);
        self.emitted_end = token.span.end();
        self.pos += 1;
    }

    pub(super) fn eat_token(&mut self, kind: SyntaxKind) -> bool {
        if self.currently_is(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// At most one diagnostic per position; a higher-priority kind replaces a lower one.
    fn should_report(&mut self, pos: TextSize, kind: DiagnosticKind) -> bool {
        if self.is_halted() {
            return false;
        }
        if self.last_diagnostic_pos == Some(pos) {
            return self.diagnostics.yield_to(pos, kind);
        }
        self.last_diagnostic_pos = Some(pos);
        true
    }

    /// Zero-width placeholder at the builder's position for something required.
    pub(super) fn missing(&mut self, kind: DiagnosticKind, detail: &str) {
        if self.is_halted() {
            return;
        }
        self.missing_node();
        let range = TextRange::empty(self.emitted_end);
        if self.should_report(range.start(), kind) {
            self.diagnostics.report(kind, range).message(detail).emit();
        }
    }

    fn missing_node(&mut self) {
        self.builder.start_node(SyntaxKind::Missing.into());
        self.builder.finish_node();
        self.error_nodes += 1;
    }

    /// Wraps tokens up to the first one in `recovery` into an `Error` node.
    /// Consumes at least one token.
    pub(super) fn error_until(&mut self, kind: DiagnosticKind, detail: &str, recovery: TokenSet) {
        if self.should_stop() {
            return;
        }
        let first = self.current_span();
        let kind = self.refine_error_kind(kind);
        let detail = if kind == DiagnosticKind::InvalidCharacter {
            self.current_text()
        } else {
            detail
        };

        self.start_node(SyntaxKind::Error);
        self.bump();
        loop {
            let kind = self.current();
            if self.should_stop() || recovery.contains(kind) {
                break;
            }
            self.bump();
        }
        self.finish_node();
        self.error_nodes += 1;

        let range = TextRange::new(first.start(), self.emitted_end.max(first.end()));
        if self.should_report(range.start(), kind) {
            self.diagnostics.report(kind, range).message(detail).emit();
        }
    }

    /// Wraps exactly the current token into an `Error` node.
    pub(super) fn error_and_bump(&mut self, kind: DiagnosticKind, detail: &str) {
        self.error_until(kind, detail, token_sets::ANY);
    }

    fn refine_error_kind(&mut self, kind: DiagnosticKind) -> DiagnosticKind {
        if self.currently_is(SyntaxKind::Garbage) {
            DiagnosticKind::InvalidCharacter
        } else {
            kind
        }
    }

    pub(super) fn enter_recursion(&mut self) -> bool {
        if let Some(limit) = self.recursion_fuel_limit
            && self.depth >= limit
        {
            self.halt(ParseLimit::RecursionDepth);
            return false;
        }
        self.depth += 1;
        self.reset_debug_fuel();
        true
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.reset_debug_fuel();
    }

    /// Remembers the current token as an opener. Call before bumping it.
    pub(super) fn push_delimiter(&mut self) {
        let span = self.current_span();
        self.delimiter_stack.push(OpenDelimiter { span });
    }

    pub(super) fn pop_delimiter(&mut self) -> Option<OpenDelimiter> {
        self.delimiter_stack.pop()
    }

    /// Closes the innermost delimiter: eats `close` or reports it unclosed
    /// with a related span pointing back at the opener.
    pub(super) fn expect_closing(
        &mut self,
        close: SyntaxKind,
        kind: DiagnosticKind,
        construct: &str,
    ) -> bool {
        let open = self.pop_delimiter();
        if self.eat_token(close) {
            return true;
        }
        if self.is_halted() {
            return false;
        }
        self.missing_node();
        let at = self.emitted_end;
        let Some(open) = open else {
            if self.should_report(at, kind) {
                self.diagnostics.report(kind, TextRange::empty(at)).emit();
            }
            return false;
        };
        if self.should_report(open.span.start(), kind) {
            self.diagnostics
                .report(kind, TextRange::new(open.span.start(), at))
                .related_to(format!("{construct} starts here"), open.span)
                .emit();
        }
        false
    }

    pub(super) fn last_non_trivia_end(&self) -> Option<TextSize> {
        self.tokens[..self.pos]
            .iter()
            .rev()
            .find(|t| !t.kind.is_trivia())
            .map(|t| t.span.end())
    }

    /// Tags diagnostics reported since `mark` as raised by the node starting at `origin`.
    pub(super) fn tag_diagnostics(&mut self, mark: usize, origin: TextSize) {
        self.diagnostics.set_origin_since(mark, origin);
    }

    pub(super) fn diagnostics_mark(&self) -> usize {
        self.diagnostics.len()
    }

    /// Puts every unconsumed token under an `Incomplete` node.
    pub(super) fn wrap_rest_as_incomplete(&mut self) {
        self.drain_trivia();
        if self.eof() {
            return;
        }
        let start = self.tokens[self.pos].span.start();
        self.builder.start_node(SyntaxKind::Incomplete.into());
        while let Some(token) = self.tokens.get(self.pos).copied() {
            let text = token_text(self.source, &token);
            self.builder.token(token.kind.into(), text);
            self.emitted_end = token.span.end();
            self.pos += 1;
        }
        self.builder.finish_node();

        let limit = self.halted.unwrap_or(ParseLimit::ExecFuel);
        self.diagnostics
            .report(
                DiagnosticKind::ParseLimitReached,
                TextRange::new(start, self.emitted_end),
            )
            .message(limit.to_string())
            .emit();
    }

    /// Reports a diagnostic that leaves no node behind.
    pub(super) fn note(&mut self, kind: DiagnosticKind, range: TextRange, detail: &str) {
        if self.should_report(range.start(), kind) {
            self.diagnostics.report(kind, range).message(detail).emit();
        }
    }
}
