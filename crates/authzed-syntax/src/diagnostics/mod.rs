//! Diagnostics collected while parsing.
//!
//! Syntax errors never abort a parse. The parser records them here and keeps
//! going, so a [`Diagnostics`] value sits next to every tree.

mod message;
mod printer;


use rowan::{TextRange, TextSize};

pub use message::{DiagnosticKind, DiagnosticMessage, RelatedInfo, Severity};
pub use printer::DiagnosticsPrinter;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    messages: Vec<DiagnosticMessage>,
}

#[must_use = "diagnostic not emitted, call .emit()"]
pub struct DiagnosticBuilder<'a> {
    diagnostics: &'a mut Diagnostics,
    message: DiagnosticMessage,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// Create a diagnostic with the given kind and span.
    ///
    /// Uses the kind's default message. Call `.message()` on the builder to override.
    pub fn report(&mut self, kind: DiagnosticKind, range: TextRange) -> DiagnosticBuilder<'_> {
        DiagnosticBuilder {
            diagnostics: self,
            message: DiagnosticMessage::with_default_message(kind, range),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(|d| d.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.messages.iter().any(|d| d.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.messages.iter().filter(|d| d.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.messages.iter().filter(|d| d.is_warning()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticMessage> {
        self.messages.iter()
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.messages.extend(other.messages);
    }

    pub fn printer<'a>(&'a self, source: &'a str) -> DiagnosticsPrinter<'a> {
        DiagnosticsPrinter::new(self, source)
    }

    pub fn render(&self, source: &str) -> String {
        self.printer(source).render()
    }

    pub fn render_colored(&self, source: &str, colored: bool) -> String {
        self.printer(source).colored(colored).render()
    }

    /// Drops the last diagnostic when it starts at `pos` and `kind` outranks it.
    /// Returns whether a diagnostic of `kind` may be reported at `pos`.
    pub(crate) fn yield_to(&mut self, pos: TextSize, kind: DiagnosticKind) -> bool {
        match self.messages.last() {
            Some(last) if last.range.start() == pos => {
                if kind.suppresses(&last.kind) {
                    self.messages.pop();
                    true
                } else {
                    false
                }
            }
            _ => true,
        }
    }

    /// Tags every diagnostic reported since `mark` with `origin`.
    pub(crate) fn set_origin_since(&mut self, mark: usize, origin: TextSize) {
        for message in self.messages.iter_mut().skip(mark) {
            message.origin.get_or_insert(origin);
        }
    }

    /// Splices diagnostics after an in-place reparse of the node that covered `replaced`.
    ///
    /// Diagnostics raised inside that node are replaced with `fresh`. Those
    /// after the edit move by `delta`. The result is ordered by position.
    pub(crate) fn splice(
        &self,
        replaced: TextRange,
        edit_end: TextSize,
        delta: i64,
        fresh: Diagnostics,
    ) -> Diagnostics {
        let mut messages: Vec<DiagnosticMessage> = self
            .messages
            .iter()
            .filter(|m| !m.origin.is_some_and(|origin| replaced.contains(origin)))
            .cloned()
            .map(|mut m| {
                m.shift_after(edit_end, delta);
                m
            })
            .collect();
        messages.extend(fresh.messages);
        messages.sort_by_key(|m| m.range.start());
        Diagnostics { messages }
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a DiagnosticMessage;
    type IntoIter = std::slice::Iter<'a, DiagnosticMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

impl DiagnosticBuilder<'_> {
    /// Provide custom detail for this diagnostic, rendered using the kind's template.
    pub fn message(mut self, msg: impl Into<String>) -> Self {
        let detail = msg.into();
        self.message.message = self.message.kind.message(Some(&detail));
        self
    }

    pub fn related_to(mut self, msg: impl Into<String>, range: TextRange) -> Self {
        self.message.related.push(RelatedInfo::new(range, msg));
        self
    }

    pub fn severity(mut self, severity: Severity) -> Self {
        self.message.severity = severity;
        self
    }

    pub fn emit(self) {
        self.diagnostics.messages.push(self.message);
    }
}
