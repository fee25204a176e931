//! Arithmetic dispatch: validate two operands, convert them, apply one operator.

use std::fmt::Display;

use tracing::{info, warn};

use crate::calculator::detection::provided_operands_valid;
use crate::calculator::evaluation::CalcResult;
use crate::calculator::number::{Number, parse_number};
use crate::calculator::operator::ArithmeticOp;
use crate::error::{CalcError, Result};

/// Perform one arithmetic operation on two operand strings.
///
/// Never fails outright: validation and arithmetic errors come back as
/// [`CalcResult::Error`] carrying the message to show the user.
///
/// ```
/// use zcalc::calculator::{ArithmeticOp, perform_operation};
///
/// let result = perform_operation(ArithmeticOp::Divide, "3", "2");
/// assert_eq!(result.message(), "Operation Performed: 3/2=1.5");
/// ```
pub fn perform_operation(op: ArithmeticOp, first: &str, second: &str) -> CalcResult {
    log_inputs(op, Some(first), Some(second));

    let result = match compute(op, first, second) {
        Ok(value) => CalcResult::success(value, format!("{}{}{}", first, op, second)),
        Err(err) => err.into(),
    };

    log_outcome(&result);
    result
}

fn compute(op: ArithmeticOp, first: &str, second: &str) -> Result<Number> {
    if first.is_empty() || second.is_empty() {
        return Err(CalcError::InvalidInput);
    }

    if !provided_operands_valid([first, second]) {
        return Err(CalcError::InvalidInput);
    }

    let lhs = parse_number(first)?;
    let rhs = parse_number(second)?;
    op.apply(lhs, rhs)
}

pub(super) fn log_inputs(operator: impl Display, first: Option<&str>, second: Option<&str>) {
    info!(
        operator = %operator,
        first = first.unwrap_or_default(),
        second = second.unwrap_or_default(),
        "Calculation requested"
    );
}

pub(super) fn log_outcome(result: &CalcResult) {
    match result {
        CalcResult::Success { value, message } => {
            info!(output = %value, "{}", message);
        }
        CalcResult::Error { message, .. } => {
            warn!("{}", message);
        }
    }
}
