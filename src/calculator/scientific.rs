//! Scientific functions, optionally preceded by one arithmetic step.

use crate::calculator::detection::provided_operands_valid;
use crate::calculator::dispatch::{log_inputs, log_outcome, perform_operation};
use crate::calculator::evaluation::CalcResult;
use crate::calculator::number::{Number, parse_number};
use crate::calculator::operator::{ArithmeticOp, ScientificOp};
use crate::error::{CalcError, Result};

/// Apply a scientific function to one operand, or to the result of an
/// arithmetic pre-step over two operands.
///
/// `None` and `Some("")` both mean the operand was not provided. When both
/// operands are present, `arith` selects the pre-step and the function is
/// applied to its value, so `sin` over `3`, `2` and `+` computes `sin(3+2)`.
pub fn perform_scientific_operation(
    op: ScientificOp,
    first: Option<&str>,
    second: Option<&str>,
    arith: Option<ArithmeticOp>,
) -> CalcResult {
    log_inputs(op, first, second);

    let first = first.filter(|s| !s.is_empty());
    let second = second.filter(|s| !s.is_empty());

    let result = match compute(op, first, second, arith) {
        Ok((value, expression)) => CalcResult::success(Number::Float(value), expression),
        Err(err) => err.into(),
    };

    log_outcome(&result);
    result
}

/// Returns the function's value and the expression text for the message.
fn compute(
    op: ScientificOp,
    first: Option<&str>,
    second: Option<&str>,
    arith: Option<ArithmeticOp>,
) -> Result<(f64, String)> {
    if !provided_operands_valid(first.into_iter().chain(second)) {
        return Err(CalcError::InvalidInput);
    }

    let (input, expression) = match (first, second) {
        (Some(a), Some(b)) => {
            let arith = arith.ok_or(CalcError::MissingOperator)?;
            let pre_step = perform_operation(arith, a, b);
            match pre_step {
                CalcResult::Success { value, .. } => {
                    (value, format!("{}{}{}{}", op, a, arith, b))
                }
                CalcResult::Error { error, .. } => return Err(error),
            }
        }
        (Some(single), None) | (None, Some(single)) => {
            (parse_number(single)?, format!("{}{}", op, single))
        }
        (None, None) => return Err(CalcError::InvalidInput),
    };

    Ok((op.apply(input)?, expression))
}
