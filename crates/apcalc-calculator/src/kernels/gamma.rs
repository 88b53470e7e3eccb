//! Gamma, log-gamma, digamma and the upper incomplete gamma function

use super::constants::{BERNOULLI_EVEN, PI};
use super::{EPSILON, KernelError, KernelResult, is_non_positive_integer};
use apcalc_types::Complex;

// Lanczos approximation, g = 7, n = 9
const LANCZOS_G: f64 = 7.0;
const LANCZOS: [f64; 9] = [
    0.999_999_999_999_809_9,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_1,
    -176.615_029_162_140_6,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_572e-6,
    1.505_632_735_149_311_6e-7,
];

/// `ln √(2π)`
const LN_SQRT_TAU: f64 = 0.918_938_533_204_672_8;

fn lanczos_sum(z: Complex) -> Complex {
    LANCZOS
        .iter()
        .enumerate()
        .skip(1)
        .fold(Complex::new(LANCZOS[0], 0.0), |sum, (i, &c)| sum + c / (z + i as f64))
}

/// Γ(z). Poles at the non-positive integers.
pub fn gamma(z: Complex) -> KernelResult<Complex> {
    if is_non_positive_integer(z) {
        return Err(KernelError::Pole);
    }
    if z.re < 0.5 {
        // Γ(z) Γ(1 - z) = π / sin(πz)
        let reflected = gamma(1.0 - z)?;
        return Ok(PI / ((PI * z).sin() * reflected));
    }
    let z = z - 1.0;
    let t = z + LANCZOS_G + 0.5;
    Ok((LN_SQRT_TAU + (z + 0.5) * t.ln() - t).exp() * lanczos_sum(z))
}

/// ln Γ(z), continuous on the right half plane.
pub fn log_gamma(z: Complex) -> KernelResult<Complex> {
    if is_non_positive_integer(z) {
        return Err(KernelError::Pole);
    }
    if z.re < 0.5 {
        let reflected = log_gamma(1.0 - z)?;
        return Ok(Complex::new(PI.ln(), 0.0) - (PI * z).sin().ln() - reflected);
    }
    let z = z - 1.0;
    let t = z + LANCZOS_G + 0.5;
    Ok(LN_SQRT_TAU + (z + 0.5) * t.ln() - t + lanczos_sum(z).ln())
}

/// ψ(z) = Γ'(z) / Γ(z). Poles at the non-positive integers.
pub fn digamma(z: Complex) -> KernelResult<Complex> {
    if is_non_positive_integer(z) {
        return Err(KernelError::Pole);
    }
    if z.re < 0.5 {
        // ψ(1 - z) - ψ(z) = π cot(πz)
        let reflected = digamma(1.0 - z)?;
        let angle = PI * z;
        return Ok(reflected - PI * angle.cos() / angle.sin());
    }
    let mut z = z;
    let mut result = Complex::new(0.0, 0.0);
    while z.re < 10.0 {
        result -= z.inv();
        z += 1.0;
    }
    let inverse_square = (z * z).inv();
    let mut power = inverse_square;
    let mut tail = Complex::new(0.0, 0.0);
    for (k, b) in BERNOULLI_EVEN.iter().enumerate() {
        tail += power * (b / (2 * (k + 1)) as f64);
        power *= inverse_square;
    }
    Ok(result + z.ln() - 0.5 * z.inv() - tail)
}

const TINY: f64 = 1e-300;

/// Upper incomplete gamma Γ(a, x) for real `a` and `x >= 0`.
pub fn gamma_upper(a: f64, x: f64, max_terms: usize) -> KernelResult<f64> {
    if x == 0.0 {
        return gamma(Complex::new(a, 0.0)).map(|g| g.re);
    }
    let prefactor = (-x + a * x.ln()).exp();
    if x < a + 1.0 && a > 0.0 {
        // Γ(a, x) = Γ(a) - γ(a, x), with the lower function from its series
        let full = gamma(Complex::new(a, 0.0))?.re;
        let mut denominator = a;
        let mut term = 1.0 / a;
        let mut sum = term;
        for _ in 0..max_terms {
            denominator += 1.0;
            term *= x / denominator;
            sum += term;
            if term.abs() <= sum.abs() * EPSILON {
                return Ok(full - sum * prefactor);
            }
        }
        return Err(KernelError::NoConvergence);
    }
    // Continued fraction, modified Lentz
    let mut b = x + 1.0 - a;
    let mut c = 1.0 / TINY;
    let mut d = 1.0 / b;
    let mut h = d;
    for i in 1..=max_terms {
        let i = i as f64;
        let an = -i * (i - a);
        b += 2.0;
        d = an * d + b;
        if d.abs() < TINY {
            d = TINY;
        }
        c = b + an / c;
        if c.abs() < TINY {
            c = TINY;
        }
        d = 1.0 / d;
        let delta = d * c;
        h *= delta;
        if (delta - 1.0).abs() <= EPSILON {
            return Ok(prefactor * h);
        }
    }
    Err(KernelError::NoConvergence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::assert_close;
    use crate::kernels::constants::EULER_GAMMA;

    fn real(x: f64) -> Complex {
        Complex::new(x, 0.0)
    }

    #[test]
    fn gamma_of_small_integers_is_factorial() {
        assert_close(gamma(real(1.0)).unwrap(), real(1.0), 1e-13);
        assert_close(gamma(real(5.0)).unwrap(), real(24.0), 1e-13);
        assert_close(gamma(real(0.5)).unwrap(), real(PI.sqrt()), 1e-13);
    }

    #[test]
    fn gamma_reflects_into_the_left_half_plane() {
        // Γ(-1/2) = -2√π
        assert_close(gamma(real(-0.5)).unwrap(), real(-2.0 * PI.sqrt()), 1e-12);
    }

    #[test]
    fn gamma_has_poles_at_non_positive_integers() {
        for n in [0.0, -1.0, -7.0] {
            assert_eq!(gamma(real(n)), Err(KernelError::Pole));
            assert_eq!(digamma(real(n)), Err(KernelError::Pole));
        }
    }

    #[test]
    fn log_gamma_matches_gamma() {
        let z = Complex::new(3.5, 1.25);
        assert_close(log_gamma(z).unwrap().exp(), gamma(z).unwrap(), 1e-12);
        assert_close(log_gamma(real(10.0)).unwrap(), real(362_880f64.ln()), 1e-13);
    }

    #[test]
    fn digamma_of_one_is_minus_euler_gamma() {
        assert_close(digamma(real(1.0)).unwrap(), real(-EULER_GAMMA), 1e-13);
        // ψ(1/2) = -γ - 2 ln 2
        let expected = -EULER_GAMMA - 2.0 * 2f64.ln();
        assert_close(digamma(real(0.5)).unwrap(), real(expected), 1e-12);
    }

    #[test]
    fn upper_incomplete_gamma_of_one_is_exponential() {
        for x in [0.1_f64, 1.0, 3.0, 20.0] {
            let value = gamma_upper(1.0, x, 10_000).unwrap();
            assert!((value - (-x).exp()).abs() <= 1e-13, "x = {x}: {value}");
        }
        assert!((gamma_upper(3.0, 0.0, 10_000).unwrap() - 2.0).abs() <= 1e-13);
    }
}
