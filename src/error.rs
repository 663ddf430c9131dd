//! Domain-specific error types for stackcalc.
//!
//! Evaluation failures are kept as distinct kinds so callers can tell a
//! malformed expression apart from a well-formed one that divides by zero.

use thiserror::Error;

/// Errors produced while evaluating an expression.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// The expression could not be parsed or reduced to a single value.
    #[error("Malformed expression: {0}")]
    Malformed(#[from] MalformedExpression),

    /// The right-hand operand of a division was exactly zero.
    #[error("Cannot divide by zero")]
    DivisionByZero,
}

impl EvalError {
    /// Check if this error is a malformed expression.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed(_))
    }
}

/// The reason an expression is malformed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedExpression {
    /// The expression was empty or contained only whitespace.
    #[error("expression is empty")]
    Empty,

    /// An operator had fewer than two operands available.
    #[error("missing operand")]
    MissingOperand,

    /// More than one value was left once every operator had been applied.
    #[error("missing operator")]
    MissingOperator,

    /// A `(` was never closed.
    #[error("unmatched '('")]
    UnmatchedLeftParen,

    /// A `)` had no opening counterpart.
    #[error("unmatched ')'")]
    UnmatchedRightParen,

    /// A run of digits and points did not form a valid number.
    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    /// A character outside the expression alphabet (strict mode only).
    #[error("unexpected character '{character}' at position {position}")]
    UnexpectedCharacter { character: char, position: usize },
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config directory could not be determined.
    #[error("Config directory not found")]
    NoDirFound,

    /// Failed to read the config file.
    #[error("Failed to read config file: {0}")]
    ReadFailed(#[source] std::io::Error),

    /// Failed to parse the config file.
    #[error("Failed to parse config: {0}")]
    ParseFailed(#[source] toml::de::Error),

    /// An explicit config file was given after the config had been loaded.
    #[error("Config already initialized, cannot load {0:?}")]
    AlreadyInitialized(std::path::PathBuf),
}
