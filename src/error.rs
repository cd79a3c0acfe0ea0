use thiserror::Error;

/// Errors raised while validating, minimizing or rendering a function.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QmError {
    /// The same minterm was given twice
    #[error("The minterm {0} is listed more than once")]
    DuplicateMinterm(u32),

    /// A token of the minterm list is not a non-negative integer
    #[error("'{0}' is not a valid minterm")]
    NonNumericToken(String),

    /// Too many variables are needed
    #[error("{required} variables are required, at most {max} are supported")]
    VariableCountExceeded { required: usize, max: usize },

    /// A rendered term uses a position without associated name
    #[error("No variable name for position {0}")]
    MissingVariableName(usize),

    /// The name is invalid
    #[error("The name '{0}' is invalid")]
    InvalidName(String),

    /// The name is used for two positions
    #[error("The name '{0}' conflicts with an other variable")]
    ConflictingName(String),

    /// The pattern is invalid
    #[error("Not a valid pattern: '{0}'")]
    InvalidPattern(String),
}
