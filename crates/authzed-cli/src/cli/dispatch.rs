//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use authzed_syntax::ParseConfig;
use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::sexp::SexpArgs;
use crate::commands::source_loader::SourceInput;
use crate::commands::tree::TreeArgs;

pub struct TreeParams {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub trivia: bool,
    pub spans: bool,
    pub config: ParseConfig,
    pub color: ColorChoice,
}

impl TreeParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            trivia: m.get_flag("trivia"),
            spans: m.get_flag("spans"),
            config: parse_config(m),
            color: parse_color(m),
        }
    }
}

impl From<TreeParams> for TreeArgs {
    fn from(p: TreeParams) -> Self {
        Self {
            input: SourceInput::new(p.source_path, p.source_text),
            trivia: p.trivia,
            spans: p.spans,
            config: p.config,
            color: p.color.should_colorize(),
        }
    }
}

pub struct SexpParams {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub config: ParseConfig,
    pub color: ColorChoice,
}

impl SexpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            config: parse_config(m),
            color: parse_color(m),
        }
    }
}

impl From<SexpParams> for SexpArgs {
    fn from(p: SexpParams) -> Self {
        Self {
            input: SourceInput::new(p.source_path, p.source_text),
            config: p.config,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub strict: bool,
    pub json: bool,
    pub config: ParseConfig,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            strict: m.get_flag("strict"),
            json: m.get_flag("json"),
            config: parse_config(m),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            input: SourceInput::new(p.source_path, p.source_text),
            strict: p.strict,
            json: p.json,
            config: p.config,
            color: p.color.should_colorize(),
        }
    }
}

/// Parse --color flag into ColorChoice.
fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

/// Budget flags on top of the library defaults.
fn parse_config(m: &ArgMatches) -> ParseConfig {
    if m.get_flag("unlimited") {
        return ParseConfig::unlimited();
    }
    let mut config = ParseConfig::default();
    if let Some(fuel) = m.get_one::<u32>("fuel") {
        config = config.with_exec_fuel(Some(*fuel));
    }
    if let Some(depth) = m.get_one::<u32>("max_depth") {
        config = config.with_recursion_fuel(Some(*depth));
    }
    config
}
