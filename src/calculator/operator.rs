//! Operator tags and their transforms.
//!
//! Symbols are resolved once, at the boundary, into these enums; the
//! transforms themselves are plain `match` dispatch.

use std::fmt;
use std::str::FromStr;

use crate::calculator::number::Number;
use crate::error::{CalcError, Result};

/// One of the four arithmetic operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArithmeticOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl ArithmeticOp {
    /// All arithmetic operators, in the order they are offered to the user.
    pub const ALL: [ArithmeticOp; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// The symbol used in input and in display messages.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Apply the operator to two numbers.
    ///
    /// Integer addition, subtraction and multiplication stay integral unless
    /// they overflow, in which case they are redone in floating point.
    /// Division always produces a float.
    pub fn apply(self, lhs: Number, rhs: Number) -> Result<Number> {
        if let (Number::Int(a), Number::Int(b)) = (lhs, rhs) {
            let exact = match self {
                Self::Add => a.checked_add(b),
                Self::Subtract => a.checked_sub(b),
                Self::Multiply => a.checked_mul(b),
                Self::Divide => None,
            };
            if let Some(value) = exact {
                return Ok(Number::Int(value));
            }
        }

        let (a, b) = (lhs.as_f64(), rhs.as_f64());
        let value = match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => {
                if b == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                a / b
            }
        };
        Ok(Number::Float(value))
    }
}

impl fmt::Display for ArithmeticOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for ArithmeticOp {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Subtract),
            "*" => Ok(Self::Multiply),
            "/" => Ok(Self::Divide),
            other => Err(CalcError::UnknownOperator(other.to_string())),
        }
    }
}

/// One of the scientific functions. Trigonometry works in radians.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScientificOp {
    Sin,
    Cos,
    Tan,
    /// Natural logarithm.
    Log,
}

impl ScientificOp {
    /// All scientific functions, in the order they are offered to the user.
    pub const ALL: [ScientificOp; 4] = [Self::Sin, Self::Cos, Self::Tan, Self::Log];

    /// The symbol used in input and in display messages.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log => "log",
        }
    }

    /// Apply the function.
    ///
    /// Non-finite input (e.g. an overflowed pre-step) and `log` of a
    /// non-positive number are domain errors; the result is never NaN.
    pub fn apply(self, input: Number) -> Result<f64> {
        let x = input.as_f64();
        if !x.is_finite() {
            return Err(CalcError::MathDomain);
        }

        let value = match self {
            Self::Sin => x.sin(),
            Self::Cos => x.cos(),
            Self::Tan => x.tan(),
            Self::Log => {
                if x <= 0.0 {
                    return Err(CalcError::MathDomain);
                }
                x.ln()
            }
        };

        if value.is_nan() {
            return Err(CalcError::MathDomain);
        }
        Ok(value)
    }
}

impl fmt::Display for ScientificOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for ScientificOp {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "sin" => Ok(Self::Sin),
            "cos" => Ok(Self::Cos),
            "tan" => Ok(Self::Tan),
            "log" => Ok(Self::Log),
            _ => Err(CalcError::UnknownOperator(s.trim().to_string())),
        }
    }
}

/// Any operator a caller can select.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Arithmetic(ArithmeticOp),
    Scientific(ScientificOp),
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arithmetic(op) => fmt::Display::fmt(op, f),
            Self::Scientific(op) => fmt::Display::fmt(op, f),
        }
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        s.parse::<ArithmeticOp>()
            .map(Self::Arithmetic)
            .or_else(|_| s.parse::<ScientificOp>().map(Self::Scientific))
    }
}

impl From<ArithmeticOp> for Operator {
    fn from(op: ArithmeticOp) -> Self {
        Self::Arithmetic(op)
    }
}

impl From<ScientificOp> for Operator {
    fn from(op: ScientificOp) -> Self {
        Self::Scientific(op)
    }
}

/// The arithmetic operators available for a scientific pre-step.
pub fn operators() -> &'static [ArithmeticOp] {
    &ArithmeticOp::ALL
}
