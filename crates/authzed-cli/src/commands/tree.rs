use authzed_syntax::{ParseConfig, Tree};

use super::run_common::print_diagnostics;
use super::source_loader::{SourceInput, load_tree_or_exit};

pub struct TreeArgs {
    pub input: SourceInput,
    pub trivia: bool,
    pub spans: bool,
    pub config: ParseConfig,
    pub color: bool,
}

pub fn run(args: TreeArgs) {
    let tree = load_tree_or_exit(&args.input, args.config);
    print!("{}", dump_tree(&tree, args.trivia, args.spans));
    print_diagnostics(&tree, &args.input.display_name(), args.color);
}

pub fn dump_tree(tree: &Tree, trivia: bool, spans: bool) -> String {
    tree.printer()
        .with_trivia(trivia)
        .with_spans(spans)
        .dump()
}
