//! Parse budgets.

/// Default execution fuel: token steps plus rule entries.
pub const DEFAULT_EXEC_FUEL: u32 = 1_000_000;

/// Default nesting limit for parenthesized expressions and generic types.
pub const DEFAULT_RECURSION_FUEL: u32 = 512;

/// Limits applied to a single parse.
///
/// Execution fuel never replenishes. It bounds total work on large or
/// adversarial inputs. Recursion fuel restores when a nested rule returns.
/// It bounds nesting depth. `None` disables a limit.
///
/// Running out of either does not fail the parse: the tree is closed where
/// the parser stopped and the unparsed rest is kept in an `Incomplete` node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseConfig {
    pub exec_fuel: Option<u32>,
    pub recursion_fuel: Option<u32>,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            exec_fuel: Some(DEFAULT_EXEC_FUEL),
            recursion_fuel: Some(DEFAULT_RECURSION_FUEL),
        }
    }
}

impl ParseConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// No limits at all.
    pub fn unlimited() -> Self {
        Self {
            exec_fuel: None,
            recursion_fuel: None,
        }
    }

    pub fn with_exec_fuel(mut self, limit: Option<u32>) -> Self {
        self.exec_fuel = limit;
        self
    }

    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.recursion_fuel = limit;
        self
    }
}

/// The budget that stopped a parse early.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseLimit {
    ExecFuel,
    RecursionDepth,
}

impl std::fmt::Display for ParseLimit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseLimit::ExecFuel => write!(f, "execution fuel exhausted"),
            ParseLimit::RecursionDepth => write!(f, "nesting too deep"),
        }
    }
}
