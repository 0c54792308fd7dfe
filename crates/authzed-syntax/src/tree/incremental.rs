//! Incremental reparse.
//!
//! An edit confined to the inside of one member (or one top-level
//! definition) re-lexes and re-parses only that node. The fresh green node
//! replaces the old one; every other green subtree is shared with the
//! previous tree. Anything else falls back to a full parse.

use rowan::{TextRange, TextSize};

use super::{Tree, count_error_nodes};
use crate::parser::cst::token_sets::{DEFINITION_FOLLOW, MEMBER_FOLLOW};
use crate::parser::cst::TokenSet;
use crate::parser::lexer::Lexer;
use crate::parser::{SyntaxKind, SyntaxNode, parse_fragment, parse_with_config};

/// Replace the bytes in `delete` with `insert`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub delete: TextRange,
    pub insert: String,
}

impl Edit {
    pub fn new(delete: TextRange, insert: impl Into<String>) -> Self {
        Self {
            delete,
            insert: insert.into(),
        }
    }

    pub fn insertion(offset: TextSize, text: impl Into<String>) -> Self {
        Self::new(TextRange::empty(offset), text)
    }

    pub fn deletion(range: TextRange) -> Self {
        Self::new(range, String::new())
    }

    /// Where the inserted text sits in the edited source.
    pub fn inserted_range(&self) -> TextRange {
        TextRange::at(self.delete.start(), TextSize::of(self.insert.as_str()))
    }

    /// Change in source length.
    pub fn delta(&self) -> i64 {
        self.insert.len() as i64 - i64::from(u32::from(self.delete.len()))
    }

    /// Whether the edit can be applied to `source`.
    pub fn fits(&self, source: &str) -> bool {
        let start = usize::from(self.delete.start());
        let end = usize::from(self.delete.end());
        end <= source.len() && source.is_char_boundary(start) && source.is_char_boundary(end)
    }

    /// `source` with the edit applied. Call [`fits`](Self::fits) first.
    pub fn apply(&self, source: &str) -> String {
        let range = std::ops::Range::<usize>::from(self.delete);
        let mut out = String::with_capacity(source.len() + self.insert.len());
        out.push_str(&source[..range.start]);
        out.push_str(&self.insert);
        out.push_str(&source[range.end..]);
        out
    }
}

/// How a reparse was carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReparseStrategy {
    /// One member was reparsed; its range in the new tree.
    Member(TextRange),
    /// One top-level definition was reparsed; its range in the new tree.
    Definition(TextRange),
    /// The whole source was parsed again.
    Full,
}

#[derive(Debug, Clone)]
pub struct Reparse {
    pub tree: Tree,
    pub strategy: ReparseStrategy,
}

impl Tree {
    /// Tree for the source with `edit` applied.
    ///
    /// Fails only when the edit does not fit the source: out of bounds or
    /// splitting a code point.
    pub fn reparse(&self, edit: &Edit) -> crate::Result<Reparse> {
        if !edit.fits(&self.source) {
            return Err(crate::Error::InvalidEdit {
                start: usize::from(edit.delete.start()),
                end: usize::from(edit.delete.end()),
                len: self.source.len(),
            });
        }
        let source = edit.apply(&self.source);

        if let Some(reparse) = self.reparse_in_place(edit, &source) {
            return Ok(reparse);
        }

        Ok(Reparse {
            tree: parse_with_config(&source, self.config),
            strategy: ReparseStrategy::Full,
        })
    }

    fn reparse_in_place(&self, edit: &Edit, source: &str) -> Option<Reparse> {
        if self.is_incomplete() {
            return None;
        }
        let old = reusable_node(&self.root(), edit.delete)?;
        let follow = match old.kind() {
            SyntaxKind::Relation | SyntaxKind::Permission => MEMBER_FOLLOW,
            _ => DEFINITION_FOLLOW,
        };

        let old_range = old.text_range();
        let start = usize::from(old_range.start());
        let end = usize::try_from(i64::from(u32::from(old_range.end())) + edit.delta()).ok()?;
        if !follower_is_one_of(source, end, follow) {
            return None;
        }

        let fresh = parse_fragment(source, start, end, self.config)?;
        if fresh.limit.is_some() {
            return None;
        }
        let wrapper = SyntaxNode::new_root(fresh.green.clone());
        // Trivia left after the member sits in the wrapper, outside the node.
        let mut elements = wrapper.children_with_tokens();
        let new = elements.next()?.into_node()?;
        if new.kind() != old.kind() || elements.next().is_some() {
            return None;
        }

        let green = old.replace_with(new.green().into_owned());
        let new_range = TextRange::new(old_range.start(), TextSize::from(end as u32));
        let strategy = match old.kind() {
            SyntaxKind::Relation | SyntaxKind::Permission => ReparseStrategy::Member(new_range),
            _ => ReparseStrategy::Definition(new_range),
        };

        let error_count = self.error_count - count_error_nodes(&old) + fresh.error_nodes;
        let diagnostics =
            self.diagnostics
                .splice(old_range, edit.delete.end(), edit.delta(), fresh.diagnostics);

        let tree = Tree {
            source: source.into(),
            green,
            diagnostics,
            error_count,
            limit: None,
            config: self.config,
        };
        Some(Reparse { tree, strategy })
    }
}

/// Innermost member of an object definition, or top-level definition, that
/// strictly contains `range`.
fn reusable_node(root: &SyntaxNode, range: TextRange) -> Option<SyntaxNode> {
    if !root.text_range().contains_range(range) {
        return None;
    }
    let start = match root.covering_element(range) {
        rowan::NodeOrToken::Node(node) => node,
        rowan::NodeOrToken::Token(token) => token.parent()?,
    };
    start.ancestors().find(|node| {
        let node_range = node.text_range();
        let strictly_inside = node_range.start() < range.start() && range.end() < node_range.end();
        strictly_inside && is_reusable(node)
    })
}

fn is_reusable(node: &SyntaxNode) -> bool {
    let parent = node.parent().map(|p| p.kind());
    match node.kind() {
        SyntaxKind::Relation | SyntaxKind::Permission => parent == Some(SyntaxKind::ObjectDef),
        SyntaxKind::ObjectDef | SyntaxKind::CaveatDef => parent == Some(SyntaxKind::SourceFile),
        _ => false,
    }
}

/// Whether the first significant token at or after `offset` is in `set`, or there is none.
fn follower_is_one_of(source: &str, offset: usize, set: TokenSet) -> bool {
    if !source.is_char_boundary(offset) {
        return false;
    }
    match Lexer::at(source, offset).find(|t| !t.kind.is_trivia()) {
        Some(token) => set.contains(token.kind),
        None => true,
    }
}
