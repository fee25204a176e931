//! Calculator core: one arithmetic operation, or one scientific function with
//! an optional arithmetic pre-step.
//!
//! This module provides functionality to:
//! - Pre-filter and convert operand strings
//! - Dispatch arithmetic and scientific operators
//! - Build the value and message shown to the user
//! - Copy results to the clipboard

mod clipboard;
mod detection;
mod dispatch;
mod evaluation;
mod number;
mod operator;
mod scientific;

pub use clipboard::{copy_result, copy_to_clipboard};
pub use detection::looks_like_operand;
pub use dispatch::perform_operation;
pub use evaluation::{CalcResult, SUCCESS_PREFIX};
pub use number::{Number, parse_number};
pub use operator::{ArithmeticOp, Operator, ScientificOp, operators};
pub use scientific::perform_scientific_operation;
