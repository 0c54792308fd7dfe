use authzed_syntax::ParseConfig;

use super::run_common::print_diagnostics;
use super::source_loader::{SourceInput, load_tree_or_exit};

pub struct SexpArgs {
    pub input: SourceInput,
    pub config: ParseConfig,
    pub color: bool,
}

pub fn run(args: SexpArgs) {
    let tree = load_tree_or_exit(&args.input, args.config);
    println!("{}", tree.to_sexp());
    print_diagnostics(&tree, &args.input.display_name(), args.color);
}
