//! Static grammar descriptor.
//!
//! A generic tree walker needs three things besides the tree: the node kinds
//! with their names, which child a field name refers to, and the production
//! each node kind comes from. All of it lives in constant tables here; the
//! single accessor [`language`] hands them out.

use crate::parser::SyntaxKind;

/// Where a field's child sits among the parent's non-trivia children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldSlot {
    /// The first child.
    First,
    /// The child right after the first token of this kind.
    After(SyntaxKind),
    /// Every child of this kind.
    Kind(SyntaxKind),
}

/// A named field on a node kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldInfo {
    pub parent: SyntaxKind,
    pub name: &'static str,
    pub slot: FieldSlot,
    /// The field may hold more than one child.
    pub multiple: bool,
}

/// Production a node kind is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub kind: SyntaxKind,
    pub production: &'static str,
}

/// Read-only grammar description.
#[derive(Debug)]
pub struct Language {
    name: &'static str,
    root: SyntaxKind,
    extras: &'static [SyntaxKind],
    fields: &'static [FieldInfo],
    rules: &'static [Rule],
}

const fn field(parent: SyntaxKind, name: &'static str, slot: FieldSlot) -> FieldInfo {
    FieldInfo {
        parent,
        name,
        slot,
        multiple: false,
    }
}

const fn repeated(parent: SyntaxKind, name: &'static str, slot: FieldSlot) -> FieldInfo {
    FieldInfo {
        parent,
        name,
        slot,
        multiple: true,
    }
}

use FieldSlot::{After, First, Kind};
use SyntaxKind as K;

static FIELDS: &[FieldInfo] = &[
    field(K::ObjectDef, "name", After(K::KwDefinition)),
    field(K::CaveatDef, "name", After(K::KwCaveat)),
    field(K::CaveatDef, "parameters", Kind(K::ParamList)),
    field(K::CaveatDef, "expression", Kind(K::CaveatExpr)),
    field(K::Relation, "name", After(K::KwRelation)),
    repeated(K::Relation, "types", Kind(K::TypeRef)),
    field(K::Permission, "name", After(K::KwPermission)),
    field(K::Permission, "expression", After(K::Equals)),
    field(K::TypeRef, "type", First),
    field(K::TypeRef, "relation", After(K::Hash)),
    field(K::TypeRef, "wildcard", Kind(K::Star)),
    field(K::TypeRef, "caveat", After(K::KwWith)),
    repeated(K::ParamList, "parameter", Kind(K::Param)),
    field(K::Param, "name", First),
    field(K::Param, "type", Kind(K::TypeExpr)),
    field(K::TypeExpr, "name", First),
    repeated(K::TypeExpr, "argument", Kind(K::TypeExpr)),
    field(K::ParenExpr, "inner", After(K::ParenOpen)),
    field(K::UnionExpr, "left", First),
    field(K::UnionExpr, "right", After(K::Plus)),
    field(K::IntersectionExpr, "left", First),
    field(K::IntersectionExpr, "right", After(K::Amp)),
    field(K::ExclusionExpr, "left", First),
    field(K::ExclusionExpr, "right", After(K::Minus)),
    field(K::ArrowExpr, "relation", First),
    field(K::ArrowExpr, "permission", After(K::Arrow)),
];

static RULES: &[Rule] = &[
    Rule {
        kind: K::SourceFile,
        production: "(object_definition | caveat_definition | relation_declaration | permission_declaration)*",
    },
    Rule {
        kind: K::ObjectDef,
        production: "'definition' identifier '{' (relation_declaration | permission_declaration)* '}'",
    },
    Rule {
        kind: K::CaveatDef,
        production: "'caveat' identifier parameter_list '{' caveat_expression '}'",
    },
    Rule {
        kind: K::Relation,
        production: "'relation' identifier ':' type_reference ('|' type_reference)* ';'?",
    },
    Rule {
        kind: K::Permission,
        production: "'permission' identifier '=' expression ';'?",
    },
    Rule {
        kind: K::TypeRef,
        production: "identifier ('#' identifier | ':' '*')? ('with' identifier)?",
    },
    Rule {
        kind: K::ParamList,
        production: "'(' (parameter (',' parameter)* ','?)? ')'",
    },
    Rule {
        kind: K::Param,
        production: "identifier type_expression",
    },
    Rule {
        kind: K::TypeExpr,
        production: "identifier ('<' type_expression (',' type_expression)* '>')?",
    },
    Rule {
        kind: K::CaveatExpr,
        production: "balanced token run",
    },
    Rule {
        kind: K::NameRef,
        production: "identifier",
    },
    Rule {
        kind: K::WildcardExpr,
        production: "'*'",
    },
    Rule {
        kind: K::NilExpr,
        production: "'nil'",
    },
    Rule {
        kind: K::ParenExpr,
        production: "'(' expression ')'",
    },
    Rule {
        kind: K::UnionExpr,
        production: "expression '+' expression",
    },
    Rule {
        kind: K::IntersectionExpr,
        production: "expression '&' expression",
    },
    Rule {
        kind: K::ExclusionExpr,
        production: "expression '-' expression",
    },
    Rule {
        kind: K::ArrowExpr,
        production: "expression '->' expression",
    },
];

static LANGUAGE: Language = Language {
    name: "authzed",
    root: K::SourceFile,
    extras: &[K::Whitespace, K::Newline, K::LineComment, K::BlockComment],
    fields: FIELDS,
    rules: RULES,
};

/// The schema grammar descriptor.
pub fn language() -> &'static Language {
    &LANGUAGE
}

impl Language {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn root(&self) -> SyntaxKind {
        self.root
    }

    /// Kinds that may appear anywhere: whitespace and comments.
    pub fn extras(&self) -> &'static [SyntaxKind] {
        self.extras
    }

    pub fn kinds(&self) -> impl Iterator<Item = SyntaxKind> {
        SyntaxKind::ALL.iter().copied()
    }

    pub fn kind_count(&self) -> usize {
        SyntaxKind::ALL.len()
    }

    pub fn kind(&self, name: &str) -> Option<SyntaxKind> {
        SyntaxKind::from_name(name)
    }

    pub fn field(&self, parent: SyntaxKind, name: &str) -> Option<&'static FieldInfo> {
        self.fields
            .iter()
            .find(|f| f.parent == parent && f.name == name)
    }

    pub fn fields_of(&self, parent: SyntaxKind) -> impl Iterator<Item = &'static FieldInfo> {
        self.fields.iter().filter(move |f| f.parent == parent)
    }

    /// Every distinct field name, in table order.
    pub fn field_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = Vec::new();
        for info in self.fields {
            if !names.contains(&info.name) {
                names.push(info.name);
            }
        }
        names
    }

    pub fn rule(&self, kind: SyntaxKind) -> Option<&'static Rule> {
        self.rules.iter().find(|r| r.kind == kind)
    }

    pub fn rules(&self) -> &'static [Rule] {
        self.rules
    }
}
