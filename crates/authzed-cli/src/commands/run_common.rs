//! Shared output helpers for the tree, sexp and check commands.

use authzed_syntax::Tree;

/// Annotated diagnostics, empty when there are none.
pub fn render_diagnostics(tree: &Tree, name: &str, color: bool) -> String {
    if tree.diagnostics().is_empty() {
        return String::new();
    }
    tree.diagnostics()
        .printer(tree.source())
        .path(name)
        .colored(color)
        .render()
}

/// Writes diagnostics to stderr.
pub fn print_diagnostics(tree: &Tree, name: &str, color: bool) {
    let rendered = render_diagnostics(tree, name, color);
    if !rendered.is_empty() {
        eprint!("{}", rendered);
        if !rendered.ends_with('\n') {
            eprintln!();
        }
    }
}
