use rowan::{TextRange, TextSize};
use serde::{Serialize, Serializer};

/// Diagnostic kinds ordered by priority (highest priority first).
///
/// The position in this list is the tie-breaker when two diagnostics start at
/// the same offset: the earlier kind wins and the other is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    // Unclosed delimiters swallow everything after them
    UnclosedDefinition,
    UnclosedParameterList,
    UnclosedParen,
    UnclosedTypeArguments,

    // Something required is absent
    ExpectedName,
    ExpectedTypeReference,
    ExpectedExpression,
    ExpectedParameterType,
    ExpectedToken,

    // Something present does not belong
    InvalidCharacter,
    UnexpectedToken,
    TrailingOperator,

    // Parsed, but worth a note
    MemberOutsideDefinition,
    ParseLimitReached,
}

impl DiagnosticKind {
    pub fn default_severity(&self) -> Severity {
        match self {
            Self::MemberOutsideDefinition | Self::ParseLimitReached => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Whether this kind wins over `other` at the same position.
    pub fn suppresses(&self, other: &DiagnosticKind) -> bool {
        self < other
    }

    pub fn is_unclosed(&self) -> bool {
        matches!(
            self,
            Self::UnclosedDefinition
                | Self::UnclosedParameterList
                | Self::UnclosedParen
                | Self::UnclosedTypeArguments
        )
    }

    /// Base message, used when the call site provides no detail.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::UnclosedDefinition => "missing closing `}`",
            Self::UnclosedParameterList => "missing closing `)`",
            Self::UnclosedParen => "missing closing `)`",
            Self::UnclosedTypeArguments => "missing closing `>`",

            Self::ExpectedName => "expected a name",
            Self::ExpectedTypeReference => "expected a type reference",
            Self::ExpectedExpression => "expected an expression",
            Self::ExpectedParameterType => "expected a parameter type",
            Self::ExpectedToken => "expected token",

            Self::InvalidCharacter => "invalid character",
            Self::UnexpectedToken => "unexpected token",
            Self::TrailingOperator => "operator has no right operand",

            Self::MemberOutsideDefinition => "member outside of a definition",
            Self::ParseLimitReached => "parse limit reached",
        }
    }

    /// Template for messages with call-site detail. `{}` marks the detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::ExpectedName
            | Self::ExpectedTypeReference
            | Self::ExpectedExpression
            | Self::ExpectedParameterType
            | Self::ExpectedToken => "expected {}".to_string(),
            Self::InvalidCharacter => "invalid character `{}`".to_string(),
            Self::TrailingOperator => "{} has no right operand".to_string(),
            Self::UnclosedDefinition
            | Self::UnclosedParameterList
            | Self::UnclosedParen
            | Self::UnclosedTypeArguments => format!("{}; {{}}", self.fallback_message()),
            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// - `None` returns `fallback_message()`
    /// - `Some(detail)` returns `custom_message()` with the detail filled in
    pub fn message(&self, detail: Option<&str>) -> String {
        match detail {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Secondary location, e.g. the opener of an unclosed delimiter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedInfo {
    #[serde(serialize_with = "serialize_text_range")]
    pub range: TextRange,
    pub message: String,
}

impl RelatedInfo {
    pub fn new(range: TextRange, message: impl Into<String>) -> Self {
        Self {
            range,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticMessage {
    pub kind: DiagnosticKind,
    pub severity: Severity,
    #[serde(serialize_with = "serialize_text_range")]
    pub range: TextRange,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub related: Vec<RelatedInfo>,
    /// Start of the member or definition being parsed when this was reported.
    /// Incremental reparse drops diagnostics whose origin node was replaced.
    #[serde(skip)]
    pub(crate) origin: Option<TextSize>,
}

impl DiagnosticMessage {
    pub(crate) fn new(kind: DiagnosticKind, range: TextRange, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity: kind.default_severity(),
            range,
            message: message.into(),
            related: Vec::new(),
            origin: None,
        }
    }

    pub(crate) fn with_default_message(kind: DiagnosticKind, range: TextRange) -> Self {
        Self::new(kind, range, kind.fallback_message())
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }

    /// Moves every offset at or after `from` by `delta` bytes.
    pub(crate) fn shift_after(&mut self, from: TextSize, delta: i64) {
        self.range = shift_range_after(self.range, from, delta);
        for related in &mut self.related {
            related.range = shift_range_after(related.range, from, delta);
        }
        self.origin = self.origin.map(|origin| shift_offset_after(origin, from, delta));
    }
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}..{}: {}",
            self.severity,
            u32::from(self.range.start()),
            u32::from(self.range.end()),
            self.message
        )?;
        for related in &self.related {
            write!(
                f,
                " (related: {} at {}..{})",
                related.message,
                u32::from(related.range.start()),
                u32::from(related.range.end())
            )?;
        }
        Ok(())
    }
}

fn serialize_text_range<S: Serializer>(range: &TextRange, s: S) -> Result<S::Ok, S::Error> {
    use serde::ser::SerializeStruct;
    let mut state = s.serialize_struct("TextRange", 2)?;
    state.serialize_field("start", &u32::from(range.start()))?;
    state.serialize_field("end", &u32::from(range.end()))?;
    state.end()
}

fn shift_offset_after(offset: TextSize, from: TextSize, delta: i64) -> TextSize {
    if offset < from {
        return offset;
    }
    let shifted = i64::from(u32::from(offset)) + delta;
    TextSize::from(shifted.max(0) as u32)
}

fn shift_range_after(range: TextRange, from: TextSize, delta: i64) -> TextRange {
    TextRange::new(
        shift_offset_after(range.start(), from, delta),
        shift_offset_after(range.end(), from, delta),
    )
}
