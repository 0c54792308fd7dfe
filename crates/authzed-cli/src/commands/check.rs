use authzed_syntax::diagnostics::DiagnosticMessage;
use authzed_syntax::{ParseConfig, Tree};
use serde::Serialize;

use super::run_common::print_diagnostics;
use super::source_loader::{SourceInput, load_tree_or_exit};

pub struct CheckArgs {
    pub input: SourceInput,
    pub strict: bool,
    pub json: bool,
    pub config: ParseConfig,
    pub color: bool,
}

#[derive(Debug, Serialize)]
pub struct CheckReport<'a> {
    pub source: String,
    pub valid: bool,
    pub error_nodes: usize,
    pub incomplete: bool,
    pub diagnostics: Vec<&'a DiagnosticMessage>,
}

impl<'a> CheckReport<'a> {
    pub fn new(tree: &'a Tree, source: String, strict: bool) -> Self {
        Self {
            source,
            valid: is_valid(tree, strict),
            error_nodes: tree.error_count(),
            incomplete: tree.is_incomplete(),
            diagnostics: tree.diagnostics().iter().collect(),
        }
    }
}

pub fn run(args: CheckArgs) {
    let tree = load_tree_or_exit(&args.input, args.config);
    let name = args.input.display_name();
    let valid = is_valid(&tree, args.strict);

    if args.json {
        let report = CheckReport::new(&tree, name, args.strict);
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        print_diagnostics(&tree, &name, args.color);
    }

    if !valid {
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}

/// No error nodes and no error diagnostics; with `strict`, no warnings either.
pub fn is_valid(tree: &Tree, strict: bool) -> bool {
    let diagnostics = tree.diagnostics();
    if tree.has_errors() || diagnostics.has_errors() {
        return false;
    }
    !(strict && diagnostics.has_warnings())
}
