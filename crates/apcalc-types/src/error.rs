use thiserror::Error;

/// Errors raised while building or converting a [`crate::Number`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumberError {
    /// A literal could not be parsed into any representation.
    #[error("Failed to parse '{input}' as a number: {reason}")]
    Parse {
        /// The rejected literal.
        input: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A rational number was built with a zero denominator.
    #[error("Denominator of a rational number cannot be zero")]
    ZeroDenominator,

    /// A value does not fit the requested target representation.
    #[error("Failed to convert {value} to {target}")]
    NotRepresentable {
        /// Display form of the value.
        value: String,
        /// Name of the target representation.
        target: &'static str,
    },
}

impl NumberError {
    pub(crate) fn parse(input: &str, reason: impl Into<String>) -> Self {
        Self::Parse { input: input.to_string(), reason: reason.into() }
    }

    pub(crate) fn not_representable(value: impl ToString, target: &'static str) -> Self {
        Self::NotRepresentable { value: value.to_string(), target }
    }
}
