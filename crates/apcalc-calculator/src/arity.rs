use crate::error::{CalcError, CalcResult};
use std::fmt;

/// Inclusive window of accepted argument counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Arity {
    min: usize,
    max: usize,
}

impl Arity {
    /// Exactly `count` arguments.
    pub const fn exact(count: usize) -> Self {
        Self { min: count, max: count }
    }

    /// Between `min` and `max` arguments, both inclusive.
    pub const fn range(min: usize, max: usize) -> Self {
        assert!(min <= max, "arity window must satisfy min <= max");
        Self { min, max }
    }

    pub const fn min(&self) -> usize {
        self.min
    }

    pub const fn max(&self) -> usize {
        self.max
    }

    pub const fn is_fixed(&self) -> bool {
        self.min == self.max
    }

    pub const fn accepts(&self, count: usize) -> bool {
        count >= self.min && count <= self.max
    }

    /// Check `actual` against the window on behalf of `function`.
    ///
    /// Fixed windows and ranged windows produce differently worded
    /// `ArityMismatch` messages; both carry the full window.
    pub fn validate(&self, function: &str, actual: usize) -> CalcResult<()> {
        if self.accepts(actual) {
            return Ok(());
        }
        Err(CalcError::ArityMismatch {
            function: function.to_string(),
            min: self.min,
            max: self.max,
            actual,
        })
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_fixed() {
            write!(f, "{}", self.min)
        } else {
            write!(f, "{}-{}", self.min, self.max)
        }
    }
}
