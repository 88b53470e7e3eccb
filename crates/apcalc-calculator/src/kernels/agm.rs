use super::{EPSILON, KernelError, KernelResult};
use apcalc_types::Complex;

const MAX_ITERATIONS: usize = 200;

/// Arithmetic-geometric mean of `a` and `b`.
///
/// The geometric mean takes the square root closer to the arithmetic mean,
/// which selects the "right" choice of Cox and keeps positive reals real.
pub fn agm(a: Complex, b: Complex) -> KernelResult<Complex> {
    let zero = Complex::new(0.0, 0.0);
    if a == zero || b == zero {
        return Ok(zero);
    }
    let (mut a, mut b) = (a, b);
    for _ in 0..MAX_ITERATIONS {
        let arithmetic = (a + b) / 2.0;
        let mut geometric = (a * b).sqrt();
        if (arithmetic - geometric).norm() > (arithmetic + geometric).norm() {
            geometric = -geometric;
        }
        if (arithmetic - geometric).norm() <= EPSILON * arithmetic.norm() {
            return Ok(arithmetic);
        }
        a = arithmetic;
        b = geometric;
    }
    Err(KernelError::NoConvergence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::assert_close;

    #[test]
    fn agm_of_one_and_root_two() {
        // Gauss's constant: agm(1, √2) = 1.19814023473559220744
        let value = agm(Complex::new(1.0, 0.0), Complex::new(2f64.sqrt(), 0.0)).unwrap();
        assert_close(value, Complex::new(1.198_140_234_735_592_2, 0.0), 1e-14);
    }

    #[test]
    fn agm_with_zero_is_zero() {
        let value = agm(Complex::new(0.0, 0.0), Complex::new(3.0, 0.0)).unwrap();
        assert_eq!(value, Complex::new(0.0, 0.0));
    }

    #[test]
    fn agm_is_symmetric() {
        let a = Complex::new(1.0, 2.0);
        let b = Complex::new(-0.5, 0.25);
        assert_close(agm(a, b).unwrap(), agm(b, a).unwrap(), 1e-13);
    }
}
