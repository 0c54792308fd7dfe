//! Positional and field-based child access.
//!
//! Children here are the significant ones: trivia tokens are skipped, so
//! `child(0)` of a relation is always its `relation` keyword.

use crate::language::{FieldSlot, language};
use crate::parser::{SyntaxElement, SyntaxNode};

pub trait SyntaxNodeExt {
    /// Non-trivia children, nodes and tokens alike.
    fn significant_children(&self) -> Vec<SyntaxElement>;

    fn child_count(&self) -> usize;

    fn child(&self, index: usize) -> Option<SyntaxElement>;

    /// First child the field refers to.
    fn child_by_field(&self, name: &str) -> Option<SyntaxElement>;

    /// Every child the field refers to.
    fn children_by_field(&self, name: &str) -> Vec<SyntaxElement>;
}

impl SyntaxNodeExt for SyntaxNode {
    fn significant_children(&self) -> Vec<SyntaxElement> {
        self.children_with_tokens()
            .filter(|e| !e.kind().is_trivia())
            .collect()
    }

    fn child_count(&self) -> usize {
        self.children_with_tokens()
            .filter(|e| !e.kind().is_trivia())
            .count()
    }

    fn child(&self, index: usize) -> Option<SyntaxElement> {
        self.children_with_tokens()
            .filter(|e| !e.kind().is_trivia())
            .nth(index)
    }

    fn child_by_field(&self, name: &str) -> Option<SyntaxElement> {
        self.children_by_field(name).into_iter().next()
    }

    fn children_by_field(&self, name: &str) -> Vec<SyntaxElement> {
        let Some(info) = language().field(self.kind(), name) else {
            return Vec::new();
        };
        let children = self.significant_children();
        match info.slot {
            FieldSlot::First => children.into_iter().take(1).collect(),
            FieldSlot::After(marker) => children
                .iter()
                .position(|e| e.kind() == marker)
                .and_then(|i| children.get(i + 1).cloned())
                .into_iter()
                .collect(),
            FieldSlot::Kind(kind) => children.into_iter().filter(|e| e.kind() == kind).collect(),
        }
    }
}

/// Field under which the parent refers to `element`, if any.
pub fn field_name(element: &SyntaxElement) -> Option<&'static str> {
    let parent = element.parent()?;
    if element.kind().is_trivia() {
        return None;
    }
    let children = parent.significant_children();
    let index = children.iter().position(|e| e == element)?;

    language().fields_of(parent.kind()).find_map(|info| {
        let matches = match info.slot {
            FieldSlot::First => index == 0,
            FieldSlot::After(marker) => children
                .iter()
                .position(|e| e.kind() == marker)
                .is_some_and(|i| i + 1 == index),
            FieldSlot::Kind(kind) => element.kind() == kind,
        };
        matches.then_some(info.name)
    })
}
