use rowan::TextRange;

use super::fields::field_name;
use crate::parser::{SyntaxElement, SyntaxKind, SyntaxNode};

/// Stateful depth-first walker over significant elements.
///
/// Trivia is never visited. Moves return `false` and leave the cursor in
/// place when there is nowhere to go, so a walk can stop at any point
/// without touching the subtrees it skipped.
#[derive(Debug, Clone)]
pub struct TreeCursor {
    root: SyntaxNode,
    current: SyntaxElement,
}

impl TreeCursor {
    pub fn new(root: SyntaxNode) -> Self {
        Self {
            current: SyntaxElement::Node(root.clone()),
            root,
        }
    }

    pub fn element(&self) -> &SyntaxElement {
        &self.current
    }

    pub fn node(&self) -> Option<&SyntaxNode> {
        self.current.as_node()
    }

    pub fn kind(&self) -> SyntaxKind {
        self.current.kind()
    }

    pub fn range(&self) -> TextRange {
        self.current.text_range()
    }

    pub fn field_name(&self) -> Option<&'static str> {
        field_name(&self.current)
    }

    /// Steps from the cursor's root down to the current element.
    pub fn depth(&self) -> usize {
        if self.at_root() {
            return 0;
        }
        let parent = match &self.current {
            SyntaxElement::Node(node) => node.parent(),
            SyntaxElement::Token(token) => token.parent(),
        };
        parent.map_or(0, |p| {
            p.ancestors()
                .take_while(|a| a != &self.root)
                .count()
                + 1
        })
    }

    /// Steps into the first significant child.
    pub fn goto_first_child(&mut self) -> bool {
        let Some(node) = self.current.as_node() else {
            return false;
        };
        let first = node
            .children_with_tokens()
            .find(|e| !e.kind().is_trivia());
        match first {
            Some(child) => {
                self.current = child;
                true
            }
            None => false,
        }
    }

    /// Steps over the current subtree to the next significant sibling.
    pub fn goto_next_sibling(&mut self) -> bool {
        if self.at_root() {
            return false;
        }
        let mut next = self.current.next_sibling_or_token();
        while let Some(element) = next {
            if !element.kind().is_trivia() {
                self.current = element;
                return true;
            }
            next = element.next_sibling_or_token();
        }
        false
    }

    /// Steps out to the parent. Never leaves the subtree the cursor started at.
    pub fn goto_parent(&mut self) -> bool {
        if self.at_root() {
            return false;
        }
        let parent = match &self.current {
            SyntaxElement::Node(node) => node.parent(),
            SyntaxElement::Token(token) => token.parent(),
        };
        match parent {
            Some(parent) => {
                self.current = SyntaxElement::Node(parent);
                true
            }
            None => false,
        }
    }

    pub fn reset(&mut self) {
        self.current = SyntaxElement::Node(self.root.clone());
    }

    fn at_root(&self) -> bool {
        self.current.as_node() == Some(&self.root)
    }
}
