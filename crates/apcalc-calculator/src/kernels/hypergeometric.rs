//! Generalized hypergeometric series ₚFq

use super::gamma::gamma;
use super::{EPSILON, KernelError, KernelResult, is_non_positive_integer};
use apcalc_types::Complex;

/// Sum `ₚFq(numerators; denominators; z)` term by term.
///
/// Stops when a term vanishes (a numerator is a non-positive integer and the
/// series terminates) or when terms have become negligible past the peak of
/// the series. A non-positive integer denominator is a pole.
pub fn series(
    numerators: &[Complex],
    denominators: &[Complex],
    z: Complex,
    max_terms: usize,
) -> KernelResult<Complex> {
    if denominators.iter().copied().any(is_non_positive_integer) {
        return Err(KernelError::Pole);
    }
    let mut term = Complex::new(1.0, 0.0);
    let mut sum = term;
    let peak = z.norm();
    for k in 0..max_terms {
        let k = k as f64;
        let mut ratio = z / (k + 1.0);
        for &a in numerators {
            ratio *= a + k;
        }
        for &b in denominators {
            ratio /= b + k;
        }
        term *= ratio;
        sum += term;
        if term == Complex::new(0.0, 0.0) {
            return Ok(sum);
        }
        if term.norm() <= EPSILON * sum.norm() && k > peak {
            return Ok(sum);
        }
    }
    Err(KernelError::NoConvergence)
}

/// ₀F₁(; a; z)
pub fn hypergeometric_0f1(a: Complex, z: Complex, max_terms: usize) -> KernelResult<Complex> {
    series(&[], &[a], z, max_terms)
}

/// ₁F₁(a; b; z)
pub fn hypergeometric_1f1(
    a: Complex,
    b: Complex,
    z: Complex,
    max_terms: usize,
) -> KernelResult<Complex> {
    series(&[a], &[b], z, max_terms)
}

/// ₂F₁(a, b; c; z)
///
/// Evaluated by its series inside the unit disc, by Gauss's theorem at
/// `z = 1` when `Re(c - a - b) > 0`, and through the Pfaff transformation
/// `(1 - z)^-a ₂F₁(a, c - b; c; z / (z - 1))` for `Re z < 1/2`. Terminating
/// series are summed directly for any `z`. Elsewhere the series diverges.
pub fn hypergeometric_2f1(
    a: Complex,
    b: Complex,
    c: Complex,
    z: Complex,
    max_terms: usize,
) -> KernelResult<Complex> {
    if is_non_positive_integer(c) {
        return Err(KernelError::Pole);
    }
    let terminating = is_non_positive_integer(a) || is_non_positive_integer(b);
    let one = Complex::new(1.0, 0.0);
    if terminating || z.norm() < 0.5 {
        return series(&[a, b], &[c], z, max_terms);
    }
    if z == one {
        let excess = c - a - b;
        if excess.re <= 0.0 {
            return Err(KernelError::NoConvergence);
        }
        return Ok(gamma(c)? * gamma(excess)? / (gamma(c - a)? * gamma(c - b)?));
    }
    if z.re < 0.5 {
        let w = z / (z - 1.0);
        let transformed = series(&[a, c - b], &[c], w, max_terms)?;
        return Ok((1.0 - z).powc(-a) * transformed);
    }
    if z.norm() < 1.0 {
        return series(&[a, b], &[c], z, max_terms);
    }
    Err(KernelError::NoConvergence)
}
