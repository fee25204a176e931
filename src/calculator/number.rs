//! Operand normalization.
//!
//! Turns operand strings into integers or floats before any operator runs.

use std::fmt;

use crate::error::{CalcError, Result};

/// Decimal exponents outside `[MIN_PLAIN_EXP, MAX_PLAIN_EXP)` display in
/// exponent form, e.g. `1e-07` and `1e+16`.
const MIN_PLAIN_EXP: i32 = -4;
const MAX_PLAIN_EXP: i32 = 16;

/// A numeric operand or result.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// The value as a float, widening integers.
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(v) => v as f64,
            Self::Float(v) => v,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Int(v) => write!(f, "{}", v),
            Self::Float(v) => f.write_str(&format_float(v)),
        }
    }
}

/// Format a float with the shortest digits that round-trip.
///
/// Integral values keep a trailing `.0`. Very large or very small magnitudes
/// use a signed exponent of at least two digits.
fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() { "inf" } else { "-inf" }.to_string();
    }

    let scientific = format!("{:e}", value);
    if let Some((mantissa, exponent)) = scientific.split_once('e')
        && let Ok(exponent) = exponent.parse::<i32>()
        && !(MIN_PLAIN_EXP..MAX_PLAIN_EXP).contains(&exponent)
    {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{}{:02}", mantissa, sign, exponent.abs());
    }

    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// Convert an operand string to a number.
///
/// A string made only of ASCII digits becomes an integer; anything else is
/// read as a float after trimming surrounding whitespace. Strings that are
/// neither, or that overflow to infinity, are invalid input.
pub fn parse_number(input: &str) -> Result<Number> {
    if !input.is_empty() && input.chars().all(|c| c.is_ascii_digit()) {
        // Too many digits for i64: read it as a float instead
        if let Ok(v) = input.parse::<i64>() {
            return Ok(Number::Int(v));
        }
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CalcError::InvalidInput);
    }

    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Number::Float(v)),
        _ => Err(CalcError::InvalidInput),
    }
}
