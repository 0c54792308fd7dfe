use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use authzed_syntax::{ParseConfig, Tree, parse_bytes_with_config};

/// Where the schema comes from: a path ("-" for stdin) or inline text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceInput {
    pub path: Option<PathBuf>,
    pub text: Option<String>,
}

impl SourceInput {
    pub fn new(path: Option<PathBuf>, text: Option<String>) -> Self {
        Self { path, text }
    }

    /// Label used in diagnostics.
    pub fn display_name(&self) -> String {
        match (&self.text, &self.path) {
            (Some(_), _) => "<inline>".to_string(),
            (None, Some(path)) if path.as_os_str() == "-" => "<stdin>".to_string(),
            (None, Some(path)) => path.display().to_string(),
            (None, None) => "<none>".to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("schema is required: use a positional SCHEMA or -s/--source")]
    MissingInput,

    #[error("cannot use both --source and positional SCHEMA")]
    ConflictingInput,

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("{name}: {source}")]
    Syntax {
        name: String,
        #[source]
        source: authzed_syntax::Error,
    },
}

/// Raw bytes of the schema. UTF-8 is checked when parsing.
pub fn load_bytes(input: &SourceInput) -> Result<Vec<u8>, SourceError> {
    match (&input.text, &input.path) {
        (Some(_), Some(_)) => Err(SourceError::ConflictingInput),
        (Some(text), None) => Ok(text.clone().into_bytes()),
        (None, Some(path)) if path.as_os_str() == "-" => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .map_err(SourceError::Stdin)?;
            Ok(buf)
        }
        (None, Some(path)) => fs::read(path).map_err(|source| SourceError::Read {
            path: path.display().to_string(),
            source,
        }),
        (None, None) => Err(SourceError::MissingInput),
    }
}

/// Reads and parses the schema.
pub fn load_tree(input: &SourceInput, config: ParseConfig) -> Result<Tree, SourceError> {
    let bytes = load_bytes(input)?;
    parse_bytes_with_config(&bytes, config).map_err(|source| SourceError::Syntax {
        name: input.display_name(),
        source,
    })
}

/// [`load_tree`], printing the error and exiting on failure.
pub fn load_tree_or_exit(input: &SourceInput, config: ParseConfig) -> Tree {
    load_tree(input, config).unwrap_or_else(|err| {
        eprintln!("error: {}", err);
        std::process::exit(1);
    })
}
