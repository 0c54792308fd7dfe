//! Snapshot helpers shared by the test modules.

use crate::{Tree, parse};

fn invalid_report(tree: &Tree) -> String {
    tree.diagnostics()
        .printer(tree.source())
        .plain(true)
        .render()
}

/// CST dump of input that must parse without errors. Warnings are allowed.
#[track_caller]
pub fn expect_valid_cst(src: &str) -> String {
    let tree = parse(src);
    if tree.has_errors() || tree.diagnostics().has_errors() {
        panic!(
            "Expected valid schema, got errors:\n{}",
            invalid_report(&tree)
        );
    }
    tree.printer().dump()
}

#[track_caller]
pub fn expect_valid_cst_with_spans(src: &str) -> String {
    let tree = parse(src);
    if tree.has_errors() || tree.diagnostics().has_errors() {
        panic!(
            "Expected valid schema, got errors:\n{}",
            invalid_report(&tree)
        );
    }
    tree.printer().with_spans(true).dump()
}

#[track_caller]
pub fn expect_valid_sexp(src: &str) -> String {
    let tree = parse(src);
    if tree.has_errors() || tree.diagnostics().has_errors() {
        panic!(
            "Expected valid schema, got errors:\n{}",
            invalid_report(&tree)
        );
    }
    tree.to_sexp()
}

/// CST dump with spans of input that must produce at least one error node.
#[track_caller]
pub fn expect_invalid_cst(src: &str) -> String {
    let tree = parse(src);
    if !tree.has_errors() {
        panic!("Expected errors, got valid:\n{}", tree.printer().dump());
    }
    assert_eq!(tree.text(), src, "round trip lost text");
    tree.printer().with_spans(true).dump()
}

/// One `severity at start..end: message` line per diagnostic.
#[track_caller]
pub fn expect_invalid(src: &str) -> String {
    let tree = parse(src);
    if !tree.has_errors() {
        panic!("Expected errors, got valid:\n{}", tree.printer().dump());
    }
    assert_eq!(tree.text(), src, "round trip lost text");
    invalid_report(&tree)
}

/// Diagnostics rendered as annotated snippets.
#[track_caller]
pub fn expect_invalid_rendered(src: &str) -> String {
    let tree = parse(src);
    if !tree.has_errors() {
        panic!("Expected errors, got valid:\n{}", tree.printer().dump());
    }
    tree.diagnostics().render(src)
}
