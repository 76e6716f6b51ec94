use thiserror::Error;

/// Validation and computation failures for library operations.
///
/// The `Display` text of each variant is the user-facing message; the shell
/// and the JSON envelope carry it through verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OpError {
    #[error("expected a non-negative integer, got {0}")]
    Negative(i64),

    #[error("expected a positive integer, got {0}")]
    NotPositive(i64),

    #[error("unknown operator '{0}', expected one of + - * /")]
    UnknownOperator(String),

    #[error("expected a single alphabetic character, got '{0}'")]
    NotAlphabetic(char),

    #[error("division by zero")]
    DivisionByZero,

    #[error("result does not fit in a machine integer")]
    Overflow,

    #[error("{op} expects {expected} argument(s), got {got}")]
    WrongArity {
        op: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("{op} expects {expected} for argument {index}")]
    WrongType {
        op: &'static str,
        expected: &'static str,
        index: usize,
    },
}

pub type OpResult<T> = Result<T, OpError>;
