//! Syntax kinds for the schema language.
//!
//! `SyntaxKind` serves dual roles: token kinds (from lexer) and node kinds (from parser).
//! Logos derives token recognition; node kinds lack token/regex attributes.
//! `AuthzedLang` implements Rowan's `Language` trait for tree construction.

use logos::Logos;
use rowan::Language;

/// All token and node kinds. Tokens first, then nodes, then `__LAST` sentinel.
/// `#[repr(u16)]` enables safe transmute in `kind_from_raw`.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    #[token("(")]
    ParenOpen = 0,

    #[token(")")]
    ParenClose,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token("<")]
    LAngle,

    #[token(">")]
    RAngle,

    #[token("<=")]
    LtEq,

    #[token(">=")]
    GtEq,

    #[token("==")]
    EqEq,

    #[token("!=")]
    NotEq,

    #[token("=")]
    Equals,

    #[token(":")]
    Colon,

    #[token(";")]
    Semicolon,

    #[token(",")]
    Comma,

    /// Separates type references in a relation.
    #[token("|")]
    Pipe,

    #[token("||")]
    PipePipe,

    /// Intersection operator.
    #[token("&")]
    Amp,

    #[token("&&")]
    AmpAmp,

    /// Union operator.
    #[token("+")]
    Plus,

    /// Exclusion operator.
    #[token("-")]
    Minus,

    /// Relation traversal: `parent->view`.
    #[token("->")]
    Arrow,

    /// Relation qualifier in type references: `group#member`.
    #[token("#")]
    Hash,

    #[token("*")]
    Star,

    #[token(".")]
    Dot,

    #[token("!")]
    Bang,

    #[token("?")]
    Question,

    #[token("/")]
    Slash,

    #[token("%")]
    Percent,

    #[token("definition")]
    KwDefinition,

    #[token("caveat")]
    KwCaveat,

    #[token("relation")]
    KwRelation,

    #[token("permission")]
    KwPermission,

    #[token("with")]
    KwWith,

    #[token("nil")]
    KwNil,

    /// Identifier, optionally namespaced: `org/user` is one token.
    /// Keywords win over this pattern on exact matches only.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*(?:/[a-zA-Z_][a-zA-Z0-9_]*)*")]
    Ident,

    #[regex(r"[0-9]+(?:\.[0-9]+)?")]
    Number,

    #[regex(r#""(?:[^"\\]|\\.)*""#)]
    #[regex(r"'(?:[^'\\]|\\.)*'")]
    StringLit,

    #[regex(r"[ \t\r\x0C]+")]
    Whitespace,

    #[token("\n")]
    #[token("\r\n")]
    Newline,

    #[regex(r"//[^\n]*", allow_greedy = true)]
    LineComment,

    #[regex(r"/\*(?:[^*]|\*[^/])*\*/")]
    BlockComment,

    /// A single code point no token rule accepts.
    Garbage,

    // --- Node kinds (non-terminals) ---
    SourceFile,
    ObjectDef,
    CaveatDef,
    Relation,
    Permission,
    TypeRef,
    ParamList,
    Param,
    TypeExpr,
    CaveatExpr,
    NameRef,
    WildcardExpr,
    NilExpr,
    ParenExpr,
    UnionExpr,
    IntersectionExpr,
    ExclusionExpr,
    ArrowExpr,
    /// Unexpected input, always non-empty.
    Error,
    /// Zero-width placeholder for a required element that is absent.
    Missing,
    /// Input left unparsed because a parse budget ran out.
    Incomplete,

    // Must be last - used for bounds checking in `kind_from_raw`
    #[doc(hidden)]
    __LAST,
}

use SyntaxKind::*;

impl SyntaxKind {
    /// Every kind in discriminant order.
    pub const ALL: [SyntaxKind; __LAST as usize] = [
        ParenOpen,
        ParenClose,
        BraceOpen,
        BraceClose,
        BracketOpen,
        BracketClose,
        LAngle,
        RAngle,
        LtEq,
        GtEq,
        EqEq,
        NotEq,
        Equals,
        Colon,
        Semicolon,
        Comma,
        Pipe,
        PipePipe,
        Amp,
        AmpAmp,
        Plus,
        Minus,
        Arrow,
        Hash,
        Star,
        Dot,
        Bang,
        Question,
        Slash,
        Percent,
        KwDefinition,
        KwCaveat,
        KwRelation,
        KwPermission,
        KwWith,
        KwNil,
        Ident,
        Number,
        StringLit,
        Whitespace,
        Newline,
        LineComment,
        BlockComment,
        Garbage,
        SourceFile,
        ObjectDef,
        CaveatDef,
        Relation,
        Permission,
        TypeRef,
        ParamList,
        Param,
        TypeExpr,
        CaveatExpr,
        NameRef,
        WildcardExpr,
        NilExpr,
        ParenExpr,
        UnionExpr,
        IntersectionExpr,
        ExclusionExpr,
        ArrowExpr,
        Error,
        Missing,
        Incomplete,
    ];

    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, Whitespace | Newline | LineComment | BlockComment)
    }

    /// Kinds that mark unparseable input.
    #[inline]
    pub fn is_error(self) -> bool {
        matches!(self, Error | Missing | Garbage)
    }

    #[inline]
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            KwDefinition | KwCaveat | KwRelation | KwPermission | KwWith | KwNil
        )
    }

    #[inline]
    pub fn is_token(self) -> bool {
        self < SourceFile
    }

    /// Named kinds show up in S-expressions; punctuation and keywords do not.
    pub fn is_named(self) -> bool {
        !self.is_token() || matches!(self, Ident | Number | StringLit | LineComment | BlockComment)
    }

    /// External name, as used by the grammar descriptor and S-expressions.
    pub fn name(self) -> &'static str {
        match self {
            ParenOpen => "(",
            ParenClose => ")",
            BraceOpen => "{",
            BraceClose => "}",
            BracketOpen => "[",
            BracketClose => "]",
            LAngle => "<",
            RAngle => ">",
            LtEq => "<=",
            GtEq => ">=",
            EqEq => "==",
            NotEq => "!=",
            Equals => "=",
            Colon => ":",
            Semicolon => ";",
            Comma => ",",
            Pipe => "|",
            PipePipe => "||",
            Amp => "&",
            AmpAmp => "&&",
            Plus => "+",
            Minus => "-",
            Arrow => "->",
            Hash => "#",
            Star => "*",
            Dot => ".",
            Bang => "!",
            Question => "?",
            Slash => "/",
            Percent => "%",
            KwDefinition => "definition",
            KwCaveat => "caveat",
            KwRelation => "relation",
            KwPermission => "permission",
            KwWith => "with",
            KwNil => "nil",
            Ident => "identifier",
            Number => "number",
            StringLit => "string",
            Whitespace => "whitespace",
            Newline => "newline",
            LineComment => "line_comment",
            BlockComment => "block_comment",
            Garbage => "garbage",
            SourceFile => "source_file",
            ObjectDef => "object_definition",
            CaveatDef => "caveat_definition",
            Relation => "relation_declaration",
            Permission => "permission_declaration",
            TypeRef => "type_reference",
            ParamList => "parameter_list",
            Param => "parameter",
            TypeExpr => "type_expression",
            CaveatExpr => "caveat_expression",
            NameRef => "name_reference",
            WildcardExpr => "wildcard",
            NilExpr => "nil_expression",
            ParenExpr => "parenthesized_expression",
            UnionExpr => "union_expression",
            IntersectionExpr => "intersection_expression",
            ExclusionExpr => "exclusion_expression",
            ArrowExpr => "arrow_expression",
            Error => "ERROR",
            Missing => "MISSING",
            Incomplete => "INCOMPLETE",
            __LAST => "__LAST",
        }
    }

    /// Inverse of [`name`](Self::name).
    pub fn from_name(name: &str) -> Option<SyntaxKind> {
        Self::ALL.iter().copied().find(|kind| kind.name() == name)
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    #[inline]
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// Language tag for Rowan's tree types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AuthzedLang {}

impl Language for AuthzedLang {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 < __LAST as u16);
        // SAFETY: We've verified the value is in bounds, and SyntaxKind is repr(u16)
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for Rowan types parameterized by our language.
pub type SyntaxNode = rowan::SyntaxNode<AuthzedLang>;
pub type SyntaxToken = rowan::SyntaxToken<AuthzedLang>;
pub type SyntaxElement = rowan::NodeOrToken<SyntaxNode, SyntaxToken>;

/// 64-bit bitset of token `SyntaxKind`s for O(1) membership testing.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TokenSet(u64);

impl TokenSet {
    /// Creates an empty token set.
    pub const EMPTY: TokenSet = TokenSet(0);

    /// Panics at compile time if any kind's discriminant >= 64.
    #[inline]
    pub const fn new(kinds: &[SyntaxKind]) -> Self {
        let mut bits = 0u64;
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as u16;
            assert!(kind < 64, "SyntaxKind value exceeds TokenSet capacity");
            bits |= 1 << kind;
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn single(kind: SyntaxKind) -> Self {
        let kind = kind as u16;
        assert!(kind < 64, "SyntaxKind value exceeds TokenSet capacity");
        TokenSet(1 << kind)
    }

    #[inline]
    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        let kind = kind as u16;
        if kind >= 64 {
            return false;
        }
        self.0 & (1 << kind) != 0
    }

    #[inline]
    pub const fn union(self, other: TokenSet) -> TokenSet {
        TokenSet(self.0 | other.0)
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_set();
        for kind in SyntaxKind::ALL.iter().take(64) {
            if self.contains(*kind) {
                list.entry(kind);
            }
        }
        list.finish()
    }
}

/// Pre-defined token sets for the parser.
pub mod token_sets {
    use super::*;

    /// Every token: recovery stops after a single token.
    pub const ANY: TokenSet = TokenSet(u64::MAX);

    pub const DEFINITION_FIRST: TokenSet = TokenSet::new(&[KwDefinition, KwCaveat]);

    pub const MEMBER_FIRST: TokenSet = TokenSet::new(&[KwRelation, KwPermission]);

    pub const BINARY_OPS: TokenSet = TokenSet::new(&[Plus, Minus, Amp, Arrow]);

    /// Synchronization points: an error run stops before any of these.
    pub const SYNC: TokenSet = TokenSet::new(&[
        Semicolon,
        BraceClose,
        KwDefinition,
        KwRelation,
        KwPermission,
        KwCaveat,
    ]);

    /// Root level: `;` and `}` have no owner there, so only keywords stop an error run.
    pub const ROOT_RECOVERY: TokenSet = DEFINITION_FIRST.union(MEMBER_FIRST);

    pub const PARAM_RECOVERY: TokenSet = SYNC.union(TokenSet::new(&[ParenClose, BraceOpen, Comma]));

    /// A caveat body never runs past the next top-level definition.
    pub const CAVEAT_BODY_STOP: TokenSet = DEFINITION_FIRST;

    /// Tokens after which a member node cannot have grown.
    pub const MEMBER_FOLLOW: TokenSet = TokenSet::new(&[
        BraceClose,
        KwDefinition,
        KwCaveat,
        KwRelation,
        KwPermission,
    ]);

    /// Tokens after which a top-level definition cannot have grown.
    pub const DEFINITION_FOLLOW: TokenSet = DEFINITION_FIRST;
}
