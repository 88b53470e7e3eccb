//! Error taxonomy for function dispatch
//!
//! Dispatch errors (see [`CalcError::is_dispatch_error`]) are raised before
//! any handler runs. Every other variant is raised by a capability set while
//! evaluating a primitive and reaches the caller unchanged.

use apcalc_types::NumberError;
use thiserror::Error;

/// Result alias used throughout the calculator.
pub type CalcResult<T> = Result<T, CalcError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// No function is registered under the requested name
    #[error("Invalid function: {name}")]
    UnknownFunction { name: String },

    /// Argument count outside the function's arity window
    #[error("{}", arity_message(.function, .min, .max, .actual))]
    ArityMismatch { function: String, min: usize, max: usize, actual: usize },

    /// A function was called without any argument to pick an implementation from
    #[error("Function {function} needs at least one argument to select an implementation")]
    NoImplementation { function: String },

    #[error("Division by zero in {function}")]
    DivisionByZero { function: String },

    /// The primitive exists but not for this representation family
    #[error("Function '{function}' is not supported for {representation} numbers")]
    NotSupported { function: String, representation: String },

    #[error("Invalid argument for '{function}': {reason}")]
    InvalidArgument { function: String, reason: String },

    #[error("Function '{function}' has a pole at the given argument")]
    Pole { function: String },

    #[error("Result of '{function}' is not a finite number")]
    NonFinite { function: String },

    #[error("Evaluation of '{function}' did not converge")]
    NoConvergence { function: String },

    /// A configured limit would be exceeded by an exact computation
    #[error("Function '{function}' exceeds the configured {setting} ({limit})")]
    LimitExceeded { function: String, setting: &'static str, limit: u64 },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error(transparent)]
    Conversion(#[from] NumberError),
}

fn arity_message(function: &str, min: &usize, max: &usize, actual: &usize) -> String {
    if min == max {
        let plural = if *min == 1 { "" } else { "s" };
        format!("Function {function} takes {min} argument{plural}, not {actual}")
    } else {
        format!("Function {function} takes {min} to {max} arguments, not {actual}")
    }
}

impl CalcError {
    pub fn division_by_zero(function: &str) -> Self {
        Self::DivisionByZero { function: function.to_string() }
    }

    pub fn invalid_argument(function: &str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument { function: function.to_string(), reason: reason.into() }
    }

    pub fn pole(function: &str) -> Self {
        Self::Pole { function: function.to_string() }
    }

    pub fn non_finite(function: &str) -> Self {
        Self::NonFinite { function: function.to_string() }
    }

    pub fn no_convergence(function: &str) -> Self {
        Self::NoConvergence { function: function.to_string() }
    }

    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            CalcError::UnknownFunction { .. } => "unknown_function",
            CalcError::ArityMismatch { .. } => "arity",
            CalcError::NoImplementation { .. } => "resolution",
            CalcError::DivisionByZero { .. }
            | CalcError::NotSupported { .. }
            | CalcError::InvalidArgument { .. }
            | CalcError::Pole { .. }
            | CalcError::NonFinite { .. }
            | CalcError::NoConvergence { .. } => "evaluation",
            CalcError::LimitExceeded { .. } => "limit",
            CalcError::Configuration { .. } => "configuration",
            CalcError::Conversion(_) => "conversion",
        }
    }

    /// True for errors raised before any handler ran.
    pub fn is_dispatch_error(&self) -> bool {
        matches!(
            self,
            CalcError::UnknownFunction { .. }
                | CalcError::ArityMismatch { .. }
                | CalcError::NoImplementation { .. }
        )
    }
}
