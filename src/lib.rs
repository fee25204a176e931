//! Arithmetic and scientific calculator core.
//!
//! Callers hand in an operator and raw operand strings and get back a
//! [`calculator::CalcResult`] holding the value and a display message.

pub mod calculator;
pub mod config;
pub mod error;
pub mod logging;

pub use error::{CalcError, Result};
