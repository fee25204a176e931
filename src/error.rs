//! Error types for the calculator core.
//!
//! Every variant renders as the message shown to the user, so callers can
//! display a `CalcError` directly.

use thiserror::Error;

/// Result type alias for calculator operations.
pub type Result<T> = std::result::Result<T, CalcError>;

/// Failures a single calculation can end in.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// Empty operand, or one that does not read as a number.
    #[error("Please provide valid input.")]
    InvalidInput,

    /// Division with a zero divisor.
    #[error("Number 2 can't be zero. Please provide correct input.")]
    DivisionByZero,

    /// Input outside a function's domain, e.g. `log` of a non-positive number.
    #[error("Math domain error. Please provide correct input.")]
    MathDomain,

    /// Two operands were given to a scientific function without a pre-step operator.
    #[error("Please select an operator for the calculation.")]
    MissingOperator,

    /// Operator symbol that is neither arithmetic nor scientific.
    #[error("Unknown operator: {0}")]
    UnknownOperator(String),
}
