//! Command builders for the CLI.
//!
//! Every command takes the same input and budget flags, so the helpers below
//! attach them in one place.

use clap::Command;

use super::args::*;

fn with_source_args(cmd: Command) -> Command {
    cmd.arg(source_path_arg()).arg(source_text_arg())
}

fn with_budget_args(cmd: Command) -> Command {
    cmd.arg(fuel_arg()).arg(max_depth_arg()).arg(unlimited_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("authzed-syntax")
        .about("Parse and inspect SpiceDB schema files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(tree_command())
        .subcommand(sexp_command())
        .subcommand(check_command())
}

/// Print the concrete syntax tree.
pub fn tree_command() -> Command {
    let cmd = Command::new("tree")
        .about("Print the concrete syntax tree")
        .override_usage(
            "\
  authzed-syntax tree <SCHEMA>
  authzed-syntax tree -s <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  authzed-syntax tree schema.zed                 # significant tokens only
  authzed-syntax tree schema.zed --trivia        # with whitespace and comments
  authzed-syntax tree -s 'definition user {}' --spans"#,
        )
        .arg(trivia_arg())
        .arg(spans_arg())
        .arg(color_arg());

    with_budget_args(with_source_args(cmd))
}

/// Print the tree as an S-expression.
pub fn sexp_command() -> Command {
    let cmd = Command::new("sexp")
        .about("Print the tree as an S-expression with field names")
        .override_usage(
            "\
  authzed-syntax sexp <SCHEMA>
  authzed-syntax sexp -s <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  authzed-syntax sexp schema.zed
  authzed-syntax sexp -s 'definition doc { permission view = a + b }'"#,
        )
        .arg(color_arg());

    with_budget_args(with_source_args(cmd))
}

/// Validate a schema.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Report syntax errors in a schema")
        .override_usage(
            "\
  authzed-syntax check <SCHEMA>
  authzed-syntax check -s <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  authzed-syntax check schema.zed            # silent on success
  authzed-syntax check schema.zed --strict   # warnings fail too
  cat schema.zed | authzed-syntax check - --json"#,
        )
        .arg(strict_arg())
        .arg(json_arg())
        .arg(color_arg());

    with_budget_args(with_source_args(cmd))
}
