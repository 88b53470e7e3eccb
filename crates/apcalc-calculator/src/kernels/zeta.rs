//! Riemann and Hurwitz zeta functions

use super::constants::{BERNOULLI_EVEN, PI};
use super::gamma::gamma;
use super::{KernelError, KernelResult, is_non_positive_integer};
use apcalc_types::Complex;

/// Terms of the Borwein alternating series
const BORWEIN_TERMS: usize = 50;

/// Most terms summed directly by [`hurwitz_zeta`] before giving up.
const MAX_DIRECT_TERMS: usize = 10_000;

/// `d_k` coefficients of Borwein's algorithm, `d_0 ..= d_n`.
fn borwein_coefficients(n: usize) -> Vec<f64> {
    let nf = n as f64;
    let mut coefficients = Vec::with_capacity(n + 1);
    let mut term = 1.0 / nf;
    let mut sum = term;
    coefficients.push(nf * sum);
    for i in 1..=n {
        let i = i as f64;
        term *= 4.0 * (nf + i - 1.0) * (nf - i + 1.0) / ((2.0 * i) * (2.0 * i - 1.0));
        sum += term;
        coefficients.push(nf * sum);
    }
    coefficients
}

/// ζ(s). Pole at `s = 1`.
pub fn zeta(s: Complex) -> KernelResult<Complex> {
    if s == Complex::new(1.0, 0.0) {
        return Err(KernelError::Pole);
    }
    if s.im == 0.0 && s.re < 0.0 && s.re % 2.0 == 0.0 {
        // trivial zeros
        return Ok(Complex::new(0.0, 0.0));
    }
    if s.re < 0.0 {
        // ζ(s) = 2^s π^(s-1) sin(πs/2) Γ(1-s) ζ(1-s)
        let one_minus_s = 1.0 - s;
        let factor = Complex::new(2.0, 0.0).powc(s)
            * Complex::new(PI, 0.0).powc(s - 1.0)
            * (PI * s / 2.0).sin()
            * gamma(one_minus_s)?;
        return Ok(factor * zeta(one_minus_s)?);
    }
    let d = borwein_coefficients(BORWEIN_TERMS);
    let dn = d[BORWEIN_TERMS];
    let mut sum = Complex::new(0.0, 0.0);
    for (k, dk) in d.iter().take(BORWEIN_TERMS).enumerate() {
        let sign = if k % 2 == 0 { 1.0 } else { -1.0 };
        let base = Complex::new((k + 1) as f64, 0.0);
        sum += sign * (dk - dn) * base.powc(-s);
    }
    let eta_factor = 1.0 - Complex::new(2.0, 0.0).powc(1.0 - s);
    Ok(-sum / (dn * eta_factor))
}

/// Hurwitz zeta ζ(s, a) = Σ (a + k)^-s by Euler-Maclaurin summation.
pub fn hurwitz_zeta(s: Complex, a: Complex) -> KernelResult<Complex> {
    if s == Complex::new(1.0, 0.0) || is_non_positive_integer(a) {
        return Err(KernelError::Pole);
    }
    let shift = (15.0 + s.norm() - a.re).ceil().max(0.0);
    if shift > MAX_DIRECT_TERMS as f64 {
        return direct_sum(s, a);
    }
    let shift = shift as usize;
    let mut sum = Complex::new(0.0, 0.0);
    for k in 0..shift {
        sum += (a + k as f64).powc(-s);
    }
    let w = a + shift as f64;
    sum += w.powc(1.0 - s) / (s - 1.0) + w.powc(-s) / 2.0;

    let inverse_square = (w * w).inv();
    let mut rising = s * w.powc(-s - 1.0);
    let mut factorial = 2.0;
    for (index, b) in BERNOULLI_EVEN.iter().enumerate() {
        let j = (index + 1) as f64;
        if index > 0 {
            rising *= (s + (2.0 * j - 3.0)) * (s + (2.0 * j - 2.0)) * inverse_square;
            factorial *= (2.0 * j - 1.0) * (2.0 * j);
        }
        sum += rising * (b / factorial);
    }
    Ok(sum)
}

/// Σ (a + k)^-s summed term by term, for arguments whose Euler-Maclaurin
/// shift would be too long. Converges only once `a + k` is past the origin
/// and the terms shrink geometrically, which needs `Re(s) > 1`.
fn direct_sum(s: Complex, a: Complex) -> KernelResult<Complex> {
    if s.re <= 1.0 {
        return Err(KernelError::NoConvergence);
    }
    let mut sum = Complex::new(0.0, 0.0);
    for k in 0..MAX_DIRECT_TERMS {
        let base = a + k as f64;
        let term = base.powc(-s);
        sum += term;
        if base.re >= 1.0 && term.norm() <= f64::EPSILON * sum.norm() {
            return Ok(sum);
        }
    }
    Err(KernelError::NoConvergence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::assert_close;

    fn real(x: f64) -> Complex {
        Complex::new(x, 0.0)
    }

    #[test]
    fn zeta_at_even_integers() {
        assert_close(zeta(real(2.0)).unwrap(), real(PI * PI / 6.0), 1e-12);
        assert_close(zeta(real(4.0)).unwrap(), real(PI.powi(4) / 90.0), 1e-12);
    }

    #[test]
    fn zeta_reflects_to_negative_arguments() {
        assert_close(zeta(real(0.0)).unwrap(), real(-0.5), 1e-12);
        assert_close(zeta(real(-1.0)).unwrap(), real(-1.0 / 12.0), 1e-12);
        assert_eq!(zeta(real(-2.0)), Ok(real(0.0)));
    }

    #[test]
    fn zeta_has_a_pole_at_one() {
        assert_eq!(zeta(real(1.0)), Err(KernelError::Pole));
        assert_eq!(hurwitz_zeta(real(1.0), real(2.0)), Err(KernelError::Pole));
    }

    #[test]
    fn hurwitz_at_one_is_riemann() {
        let s = Complex::new(2.5, 0.75);
        assert_close(hurwitz_zeta(s, real(1.0)).unwrap(), zeta(s).unwrap(), 1e-11);
    }

    #[test]
    fn hurwitz_at_one_half() {
        // ζ(2, 1/2) = π²/2
        assert_close(hurwitz_zeta(real(2.0), real(0.5)).unwrap(), real(PI * PI / 2.0), 1e-12);
    }

    #[test]
    fn hurwitz_rejects_non_positive_integer_shift() {
        assert_eq!(hurwitz_zeta(real(2.0), real(-3.0)), Err(KernelError::Pole));
    }

    #[test]
    fn hurwitz_with_a_huge_exponent_is_its_first_term() {
        assert_close(hurwitz_zeta(real(1e12), real(1.0)).unwrap(), real(1.0), 1e-15);
        assert_close(hurwitz_zeta(real(500.0), real(2.0)).unwrap(), real(2f64.powi(-500)), 1e-15);
    }

    #[test]
    fn hurwitz_gives_up_far_left_of_the_origin() {
        assert_eq!(hurwitz_zeta(real(2.0), real(-1e13 + 0.5)), Err(KernelError::NoConvergence));
        assert_eq!(hurwitz_zeta(Complex::new(0.5, 1e6), real(1.0)), Err(KernelError::NoConvergence));
    }
}
