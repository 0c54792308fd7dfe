//! Typed AST wrappers over CST nodes.
//!
//! Each struct wraps a `SyntaxNode` and provides typed accessors.
//! Accessors return `None` where the parser left an `Error` or `Missing` node.

use super::cst::{SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl $name {
            pub fn cast(node: SyntaxNode) -> Option<Self> {
                (node.kind() == SyntaxKind::$kind).then(|| Self(node))
            }

            pub fn as_cst(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

ast_node!(SourceFile, SourceFile);
ast_node!(ObjectDef, ObjectDef);
ast_node!(CaveatDef, CaveatDef);
ast_node!(Relation, Relation);
ast_node!(Permission, Permission);
ast_node!(TypeRef, TypeRef);
ast_node!(ParamList, ParamList);
ast_node!(Param, Param);
ast_node!(TypeExpr, TypeExpr);
ast_node!(CaveatExpr, CaveatExpr);
ast_node!(NameRef, NameRef);
ast_node!(Wildcard, WildcardExpr);
ast_node!(Nil, NilExpr);
ast_node!(ParenExpr, ParenExpr);
ast_node!(UnionExpr, UnionExpr);
ast_node!(IntersectionExpr, IntersectionExpr);
ast_node!(ExclusionExpr, ExclusionExpr);
ast_node!(ArrowExpr, ArrowExpr);

/// Top-level declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Definition {
    Object(ObjectDef),
    Caveat(CaveatDef),
}

impl Definition {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::ObjectDef => ObjectDef::cast(node).map(Definition::Object),
            SyntaxKind::CaveatDef => CaveatDef::cast(node).map(Definition::Caveat),
            _ => None,
        }
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            Definition::Object(n) => n.as_cst(),
            Definition::Caveat(n) => n.as_cst(),
        }
    }

    pub fn name(&self) -> Option<SyntaxToken> {
        match self {
            Definition::Object(n) => n.name(),
            Definition::Caveat(n) => n.name(),
        }
    }
}

/// Declaration inside an object definition.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Member {
    Relation(Relation),
    Permission(Permission),
}

impl Member {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::Relation => Relation::cast(node).map(Member::Relation),
            SyntaxKind::Permission => Permission::cast(node).map(Member::Permission),
            _ => None,
        }
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            Member::Relation(n) => n.as_cst(),
            Member::Permission(n) => n.as_cst(),
        }
    }

    pub fn name(&self) -> Option<SyntaxToken> {
        match self {
            Member::Relation(n) => n.name(),
            Member::Permission(n) => n.name(),
        }
    }
}

/// Permission expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Name(NameRef),
    Wildcard(Wildcard),
    Nil(Nil),
    Paren(ParenExpr),
    Union(UnionExpr),
    Intersection(IntersectionExpr),
    Exclusion(ExclusionExpr),
    Arrow(ArrowExpr),
}

impl Expr {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::NameRef => NameRef::cast(node).map(Expr::Name),
            SyntaxKind::WildcardExpr => Wildcard::cast(node).map(Expr::Wildcard),
            SyntaxKind::NilExpr => Nil::cast(node).map(Expr::Nil),
            SyntaxKind::ParenExpr => ParenExpr::cast(node).map(Expr::Paren),
            SyntaxKind::UnionExpr => UnionExpr::cast(node).map(Expr::Union),
            SyntaxKind::IntersectionExpr => IntersectionExpr::cast(node).map(Expr::Intersection),
            SyntaxKind::ExclusionExpr => ExclusionExpr::cast(node).map(Expr::Exclusion),
            SyntaxKind::ArrowExpr => ArrowExpr::cast(node).map(Expr::Arrow),
            _ => None,
        }
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            Expr::Name(n) => n.as_cst(),
            Expr::Wildcard(n) => n.as_cst(),
            Expr::Nil(n) => n.as_cst(),
            Expr::Paren(n) => n.as_cst(),
            Expr::Union(n) => n.as_cst(),
            Expr::Intersection(n) => n.as_cst(),
            Expr::Exclusion(n) => n.as_cst(),
            Expr::Arrow(n) => n.as_cst(),
        }
    }
}

fn token(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(SyntaxElement::into_token)
        .find(|t| t.kind() == kind)
}

/// First token of `kind` directly after a token of kind `after`, trivia skipped.
fn token_after(node: &SyntaxNode, after: SyntaxKind, kind: SyntaxKind) -> Option<SyntaxToken> {
    let mut seen = false;
    for element in node.children_with_tokens() {
        if element.kind().is_trivia() {
            continue;
        }
        if seen {
            return element.into_token().filter(|t| t.kind() == kind);
        }
        seen = element.kind() == after;
    }
    None
}

/// Operand on the given side of a binary operator token.
fn operand(node: &SyntaxNode, operator: SyntaxKind, right: bool) -> Option<Expr> {
    let mut seen_operator = false;
    for element in node.children_with_tokens() {
        if element.kind() == operator && !seen_operator {
            seen_operator = true;
            continue;
        }
        if seen_operator != right {
            continue;
        }
        if let Some(child) = element.into_node() {
            return Expr::cast(child);
        }
    }
    None
}

impl SourceFile {
    pub fn definitions(&self) -> impl Iterator<Item = Definition> + '_ {
        self.0.children().filter_map(Definition::cast)
    }

    /// Members written outside any definition.
    pub fn stray_members(&self) -> impl Iterator<Item = Member> + '_ {
        self.0.children().filter_map(Member::cast)
    }
}

impl ObjectDef {
    pub fn name(&self) -> Option<SyntaxToken> {
        token_after(&self.0, SyntaxKind::KwDefinition, SyntaxKind::Ident)
    }

    pub fn members(&self) -> impl Iterator<Item = Member> + '_ {
        self.0.children().filter_map(Member::cast)
    }

    pub fn relations(&self) -> impl Iterator<Item = Relation> + '_ {
        self.0.children().filter_map(Relation::cast)
    }

    pub fn permissions(&self) -> impl Iterator<Item = Permission> + '_ {
        self.0.children().filter_map(Permission::cast)
    }
}

impl CaveatDef {
    pub fn name(&self) -> Option<SyntaxToken> {
        token_after(&self.0, SyntaxKind::KwCaveat, SyntaxKind::Ident)
    }

    pub fn params(&self) -> Option<ParamList> {
        self.0.children().find_map(ParamList::cast)
    }

    pub fn expression(&self) -> Option<CaveatExpr> {
        self.0.children().find_map(CaveatExpr::cast)
    }
}

impl ParamList {
    pub fn params(&self) -> impl Iterator<Item = Param> + '_ {
        self.0.children().filter_map(Param::cast)
    }
}

impl Param {
    pub fn name(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Ident)
    }

    pub fn ty(&self) -> Option<TypeExpr> {
        self.0.children().find_map(TypeExpr::cast)
    }
}

impl TypeExpr {
    pub fn name(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Ident)
    }

    pub fn arguments(&self) -> impl Iterator<Item = TypeExpr> + '_ {
        self.0.children().filter_map(TypeExpr::cast)
    }
}

impl CaveatExpr {
    /// Expression source text without surrounding trivia.
    pub fn text(&self) -> String {
        self.0.text().to_string()
    }
}

impl Relation {
    pub fn name(&self) -> Option<SyntaxToken> {
        token_after(&self.0, SyntaxKind::KwRelation, SyntaxKind::Ident)
    }

    pub fn type_refs(&self) -> impl Iterator<Item = TypeRef> + '_ {
        self.0.children().filter_map(TypeRef::cast)
    }
}

impl TypeRef {
    pub fn type_name(&self) -> Option<SyntaxToken> {
        self.0
            .first_token()
            .filter(|t| t.kind() == SyntaxKind::Ident)
    }

    /// `group#member` qualifier.
    pub fn relation(&self) -> Option<SyntaxToken> {
        token_after(&self.0, SyntaxKind::Hash, SyntaxKind::Ident)
    }

    /// `user:*`
    pub fn is_wildcard(&self) -> bool {
        token(&self.0, SyntaxKind::Star).is_some()
    }

    /// `with caveat_name`
    pub fn caveat(&self) -> Option<SyntaxToken> {
        token_after(&self.0, SyntaxKind::KwWith, SyntaxKind::Ident)
    }
}

impl Permission {
    pub fn name(&self) -> Option<SyntaxToken> {
        token_after(&self.0, SyntaxKind::KwPermission, SyntaxKind::Ident)
    }

    pub fn expr(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }
}

impl NameRef {
    pub fn name(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Ident)
    }
}

impl ParenExpr {
    pub fn inner(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }
}

impl UnionExpr {
    pub fn lhs(&self) -> Option<Expr> {
        operand(&self.0, SyntaxKind::Plus, false)
    }

    pub fn rhs(&self) -> Option<Expr> {
        operand(&self.0, SyntaxKind::Plus, true)
    }
}

impl IntersectionExpr {
    pub fn lhs(&self) -> Option<Expr> {
        operand(&self.0, SyntaxKind::Amp, false)
    }

    pub fn rhs(&self) -> Option<Expr> {
        operand(&self.0, SyntaxKind::Amp, true)
    }
}

impl ExclusionExpr {
    pub fn lhs(&self) -> Option<Expr> {
        operand(&self.0, SyntaxKind::Minus, false)
    }

    pub fn rhs(&self) -> Option<Expr> {
        operand(&self.0, SyntaxKind::Minus, true)
    }
}

impl ArrowExpr {
    /// Relation walked from, left of `->`.
    pub fn relation(&self) -> Option<Expr> {
        operand(&self.0, SyntaxKind::Arrow, false)
    }

    /// Permission looked up on the related object, right of `->`.
    pub fn permission(&self) -> Option<Expr> {
        operand(&self.0, SyntaxKind::Arrow, true)
    }
}
