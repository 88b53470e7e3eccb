//! Lambert W function, all branches

use super::constants::{E, PI};
use super::{EPSILON, KernelError, KernelResult};
use apcalc_types::Complex;

const MAX_ITERATIONS: usize = 100;

fn initial_guess(z: Complex, k: i64) -> Complex {
    let branch_point = -1.0 / E;
    let near_branch_point = (z - branch_point).norm() < 0.3;
    let real_negative = z.im == 0.0 && z.re < 0.0 && z.re > branch_point;

    if near_branch_point && (k == 0 || (k == -1 && real_negative)) {
        // Series in p = √(2(ez + 1)) around the branch point
        let p = (2.0 * (E * z + 1.0)).sqrt();
        let p = if k == 0 { p } else { -p };
        return -1.0 + p - p * p / 3.0 + 11.0 / 72.0 * p * p * p;
    }
    if k == 0 && z.norm() <= 1.0 {
        return z * (1.0 - z);
    }
    if k == -1 && real_negative {
        let l1 = (-z.re).ln();
        let l2 = (-l1).ln();
        return Complex::new(l1 - l2, 0.0);
    }
    let l = z.ln() + Complex::new(0.0, 2.0 * PI * k as f64);
    l - l.ln()
}

/// Branch `k` of the Lambert W function, the solutions of `w e^w = z`.
///
/// `W_k(0)` is a pole on every branch except the principal one.
pub fn lambert_w(z: Complex, k: i64) -> KernelResult<Complex> {
    if z == Complex::new(0.0, 0.0) {
        return if k == 0 { Ok(z) } else { Err(KernelError::Pole) };
    }
    if (k == 0 || k == -1) && z == Complex::new(-1.0 / E, 0.0) {
        return Ok(Complex::new(-1.0, 0.0));
    }

    // Halley iteration
    let mut w = initial_guess(z, k);
    for _ in 0..MAX_ITERATIONS {
        let ew = w.exp();
        let f = w * ew - z;
        let w1 = w + 1.0;
        if w1 == Complex::new(0.0, 0.0) {
            return Ok(w);
        }
        let delta = f / (ew * w1 - (w + 2.0) * f / (2.0 * w1));
        w -= delta;
        if delta.norm() <= 4.0 * EPSILON * (1.0 + w.norm()) {
            return Ok(w);
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

    fn check_inverse(z: Complex, k: i64) {
        let w = lambert_w(z, k).unwrap();
        assert_close(w * w.exp(), z, 1e-12);
    }

    #[test]
    fn principal_branch_on_the_real_line() {
        assert_close(lambert_w(real(E), 0).unwrap(), real(1.0), 1e-14);
        assert_close(lambert_w(real(1.0), 0).unwrap(), real(0.567_143_290_409_783_8), 1e-14);
        assert_eq!(lambert_w(real(0.0), 0), Ok(real(0.0)));
    }

    #[test]
    fn branch_point() {
        assert_eq!(lambert_w(real(-1.0 / E), 0), Ok(real(-1.0)));
        assert_eq!(lambert_w(real(-1.0 / E), -1), Ok(real(-1.0)));
    }

    #[test]
    fn lower_real_branch_stays_real() {
        let w = lambert_w(real(-0.2), -1).unwrap();
        assert!(w.im.abs() < 1e-12);
        assert!(w.re < -1.0);
        check_inverse(real(-0.2), -1);
    }

    #[test]
    fn other_branches_invert() {
        check_inverse(Complex::new(1.5, -2.0), 0);
        check_inverse(real(-3.0), 0);
        check_inverse(real(2.0), 1);
        check_inverse(Complex::new(-0.5, 0.5), -2);
    }

    #[test]
    fn zero_is_a_pole_off_the_principal_branch() {
        assert_eq!(lambert_w(real(0.0), 3), Err(KernelError::Pole));
    }
}
