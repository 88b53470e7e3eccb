//! Numeric kernels over `f64` and `Complex64`
//!
//! Kernels know nothing about dispatch. They report failures as
//! [`KernelError`], which the capability sets turn into a [`CalcError`]
//! naming the calculator function that was being evaluated.

pub mod agm;
pub mod constants;
pub mod gamma;
pub mod hypergeometric;
pub mod lambert;
pub mod rounding;
pub mod zeta;

use crate::error::CalcError;
use apcalc_types::Complex;

/// Relative tolerance used as the stopping criterion of iterative kernels.
pub const EPSILON: f64 = f64::EPSILON;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelError {
    Pole,
    NoConvergence,
}

impl KernelError {
    /// Attribute the failure to `function`.
    pub fn at(self, function: &str) -> CalcError {
        match self {
            KernelError::Pole => CalcError::pole(function),
            KernelError::NoConvergence => CalcError::no_convergence(function),
        }
    }
}

pub type KernelResult<T> = Result<T, KernelError>;

/// True for `0, -1, -2, ...` on the real axis.
pub fn is_non_positive_integer(z: Complex) -> bool {
    z.im == 0.0 && z.re <= 0.0 && z.re.fract() == 0.0
}

#[cfg(test)]
pub(crate) fn assert_close(actual: Complex, expected: Complex, tolerance: f64) {
    let error = (actual - expected).norm();
    let scale = expected.norm().max(1.0);
    assert!(
        error <= tolerance * scale,
        "expected {expected}, got {actual} (error {error:e})"
    );
}
