//! Calculation results handed back to the caller for display.

use crate::calculator::number::Number;
use crate::error::CalcError;

/// Prefix of every successful display message.
pub const SUCCESS_PREFIX: &str = "Operation Performed: ";

/// Result of a single calculation.
#[derive(Clone, Debug, PartialEq)]
pub enum CalcResult {
    /// The operation produced a value.
    Success {
        /// The numeric value.
        value: Number,
        /// Describes the operation, e.g. `Operation Performed: 3+2=5`.
        message: String,
    },
    /// Validation or arithmetic failed.
    Error {
        /// What went wrong.
        error: CalcError,
        /// Error message to display.
        message: String,
    },
}

impl CalcResult {
    /// Build a success result whose message describes `expression`.
    pub fn success(value: Number, expression: impl AsRef<str>) -> Self {
        Self::Success {
            message: format!("{}{}={}", SUCCESS_PREFIX, expression.as_ref(), value),
            value,
        }
    }

    /// Check if this is a successful result.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The numeric value, if the operation succeeded.
    pub fn value(&self) -> Option<Number> {
        match self {
            Self::Success { value, .. } => Some(*value),
            Self::Error { .. } => None,
        }
    }

    /// The value as text, or an empty string for errors.
    pub fn display_value(&self) -> String {
        self.value().map(|v| v.to_string()).unwrap_or_default()
    }

    /// The message to display (operation summary or error).
    pub fn message(&self) -> &str {
        match self {
            Self::Success { message, .. } => message,
            Self::Error { message, .. } => message,
        }
    }

    /// The error, if the operation failed.
    pub fn error(&self) -> Option<&CalcError> {
        match self {
            Self::Success { .. } => None,
            Self::Error { error, .. } => Some(error),
        }
    }

    /// Text to copy to the clipboard: the value on success, otherwise the
    /// error message so the user can still copy it.
    pub fn text_for_clipboard(&self) -> String {
        match self {
            Self::Success { value, .. } => value.to_string(),
            Self::Error { message, .. } => message.clone(),
        }
    }
}

impl From<CalcError> for CalcResult {
    fn from(err: CalcError) -> Self {
        Self::Error {
            message: err.to_string(),
            error: err,
        }
    }
}
