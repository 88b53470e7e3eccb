use super::{
    Context, Functions, complex_result, constant, not_supported, precision_argument, random,
    random_gaussian, real_result, small_integer_argument,
};
use crate::error::{CalcError, CalcResult};
use crate::kernels::{
    KernelError, KernelResult, agm, constants, gamma, hypergeometric, lambert, rounding, zeta,
};
use crate::resolver::Family;
use apcalc_types::{Complex, Number};
use std::sync::Arc;

const ZERO: Complex = Complex::new(0.0, 0.0);
const ONE: Complex = Complex::new(1.0, 0.0);
const I: Complex = Complex::new(0.0, 1.0);

fn z(x: &Number) -> CalcResult<Complex> {
    Ok(x.to_complex()?)
}

fn kernel(function: &str, result: KernelResult<Complex>) -> CalcResult<Number> {
    complex_result(function, result.map_err(|e| e.at(function))?)
}

/// `1 / Γ(z)`, which is entire: zero at the poles of Γ.
fn reciprocal_gamma(z: Complex) -> KernelResult<Complex> {
    match gamma::gamma(z) {
        Ok(g) => Ok(g.inv()),
        Err(KernelError::Pole) => Ok(ZERO),
        Err(e) => Err(e),
    }
}

fn binomial(n: Complex, k: Complex) -> KernelResult<Complex> {
    Ok(gamma::gamma(n + 1.0)? * reciprocal_gamma(k + 1.0)? * reciprocal_gamma(n - k + 1.0)?)
}

/// Branch `k` of the `n`th root, `exp((ln x + 2πik) / n)`.
fn nth_root(function: &str, x: Complex, n: i64, k: i64) -> CalcResult<Complex> {
    if n == 0 {
        return Err(CalcError::invalid_argument(function, "zeroth root"));
    }
    if x == ZERO {
        return if n > 0 { Ok(ZERO) } else { Err(CalcError::division_by_zero(function)) };
    }
    let angle = I * (2.0 * constants::PI * k as f64);
    Ok(((x.ln() + angle) / n as f64).exp())
}

/// Capability set for complex arguments.
#[derive(Debug, Clone)]
pub struct ComplexFunctions {
    context: Arc<Context>,
}

impl ComplexFunctions {
    pub(crate) fn new(context: Arc<Context>) -> Self {
        Self { context }
    }

    fn max_terms(&self) -> usize {
        self.context.config.series_max_terms
    }

    fn unary(
        &self,
        function: &str,
        x: &Number,
        f: impl Fn(Complex) -> Complex,
    ) -> CalcResult<Number> {
        complex_result(function, f(z(x)?))
    }

    fn unsupported(&self, function: &str) -> CalcResult<Number> {
        Err(not_supported(function, Family::Complex))
    }

    fn root_of(
        &self,
        function: &str,
        x: &Number,
        n: &Number,
        k: i64,
        inverse: bool,
    ) -> CalcResult<Number> {
        let n = small_integer_argument(function, n)?;
        let n = if inverse { n.saturating_neg() } else { n };
        complex_result(function, nth_root(function, z(x)?, n, k)?)
    }
}

impl Functions for ComplexFunctions {
    fn family(&self) -> Family {
        Family::Complex
    }

    fn negate(&self, x: &Number) -> CalcResult<Number> {
        self.unary("negate", x, |x| -x)
    }

    fn add(&self, x: &Number, y: &Number) -> CalcResult<Number> {
        complex_result("add", z(x)? + z(y)?)
    }

    fn subtract(&self, x: &Number, y: &Number) -> CalcResult<Number> {
        complex_result("subtract", z(x)? - z(y)?)
    }

    fn multiply(&self, x: &Number, y: &Number) -> CalcResult<Number> {
        complex_result("multiply", z(x)? * z(y)?)
    }

    fn divide(&self, x: &Number, y: &Number) -> CalcResult<Number> {
        let divisor = z(y)?;
        if divisor == ZERO {
            return Err(CalcError::division_by_zero("divide"));
        }
        complex_result("divide", z(x)? / divisor)
    }

    fn modulo(&self, _: &Number, _: &Number) -> CalcResult<Number> {
        self.unsupported("mod")
    }

    fn pow(&self, x: &Number, y: &Number) -> CalcResult<Number> {
        let (base, exponent) = (z(x)?, z(y)?);
        if base == ZERO {
            return if exponent == ZERO {
                Err(CalcError::invalid_argument("pow", "zero to the power of zero"))
            } else if exponent.re > 0.0 {
                Ok(Number::Complex(ZERO))
            } else {
                Err(CalcError::division_by_zero("pow"))
            };
        }
        let integral = y.to_integer().and_then(|n| i32::try_from(n).ok());
        match integral {
            Some(n) => complex_result("pow", base.powi(n)),
            None => complex_result("pow", base.powc(exponent)),
        }
    }

    fn arg(&self, x: &Number) -> CalcResult<Number> {
        let x = z(x)?;
        if x == ZERO {
            return Err(CalcError::invalid_argument("arg", "angle of zero is undefined"));
        }
        real_result("arg", x.arg())
    }

    fn conj(&self, x: &Number) -> CalcResult<Number> {
        self.unary("conj", x, |x| x.conj())
    }

    fn imag(&self, x: &Number) -> CalcResult<Number> {
        real_result("imag", z(x)?.im)
    }

    fn real(&self, x: &Number) -> CalcResult<Number> {
        real_result("real", z(x)?.re)
    }

    fn abs(&self, x: &Number) -> CalcResult<Number> {
        real_result("abs", z(x)?.norm())
    }

    fn acos(&self, x: &Number) -> CalcResult<Number> {
        self.unary("acos", x, |x| x.acos())
    }

    fn acosh(&self, x: &Number) -> CalcResult<Number> {
        self.unary("acosh", x, |x| x.acosh())
    }

    fn asin(&self, x: &Number) -> CalcResult<Number> {
        self.unary("asin", x, |x| x.asin())
    }

    fn asinh(&self, x: &Number) -> CalcResult<Number> {
        self.unary("asinh", x, |x| x.asinh())
    }

    fn atan(&self, x: &Number) -> CalcResult<Number> {
        let x = z(x)?;
        if x == I || x == -I {
            return Err(CalcError::pole("atan"));
        }
        complex_result("atan", x.atan())
    }

    fn atanh(&self, x: &Number) -> CalcResult<Number> {
        let x = z(x)?;
        if x == ONE || x == -ONE {
            return Err(CalcError::pole("atanh"));
        }
        complex_result("atanh", x.atanh())
    }

    fn bernoulli(&self, _: &Number) -> CalcResult<Number> {
        self.unsupported("bernoulli")
    }

    /// Γ(n + 1) / (Γ(k + 1) Γ(n - k + 1))
    fn binomial(&self, n: &Number, k: &Number) -> CalcResult<Number> {
        kernel("binomial", binomial(z(n)?, z(k)?))
    }

    fn catalan(&self, digits: &Number) -> CalcResult<Number> {
        constant("catalan", constants::CATALAN, digits)
    }

    fn cbrt(&self, x: &Number) -> CalcResult<Number> {
        complex_result("cbrt", nth_root("cbrt", z(x)?, 3, 0)?)
    }

    fn ceil(&self, _: &Number) -> CalcResult<Number> {
        self.unsupported("ceil")
    }

    fn cos(&self, x: &Number) -> CalcResult<Number> {
        self.unary("cos", x, |x| x.cos())
    }

    fn cosh(&self, x: &Number) -> CalcResult<Number> {
        self.unary("cosh", x, |x| x.cosh())
    }

    fn digamma(&self, x: &Number) -> CalcResult<Number> {
        kernel("digamma", gamma::digamma(z(x)?))
    }

    fn e(&self, digits: &Number) -> CalcResult<Number> {
        constant("e", constants::E, digits)
    }

    fn euler(&self, digits: &Number) -> CalcResult<Number> {
        constant("euler", constants::EULER_GAMMA, digits)
    }

    fn exp(&self, x: &Number) -> CalcResult<Number> {
        self.unary("exp", x, |x| x.exp())
    }

    fn factorial(&self, x: &Number) -> CalcResult<Number> {
        kernel("factorial", gamma::gamma(z(x)? + 1.0))
    }

    fn floor(&self, _: &Number) -> CalcResult<Number> {
        self.unsupported("floor")
    }

    fn frac(&self, _: &Number) -> CalcResult<Number> {
        self.unsupported("frac")
    }

    fn gamma(&self, x: &Number) -> CalcResult<Number> {
        kernel("gamma", gamma::gamma(z(x)?))
    }

    fn gamma_incomplete(&self, _: &Number, _: &Number) -> CalcResult<Number> {
        self.unsupported("gamma")
    }

    fn gamma_generalized(&self, _: &Number, _: &Number, _: &Number) -> CalcResult<Number> {
        self.unsupported("gamma")
    }

    fn hypergeometric_0f1(&self, a: &Number, x: &Number) -> CalcResult<Number> {
        kernel("hypergeometric0F1", hypergeometric::hypergeometric_0f1(z(a)?, z(x)?, self.max_terms()))
    }

    fn hypergeometric_1f1(&self, a: &Number, b: &Number, x: &Number) -> CalcResult<Number> {
        let value = hypergeometric::hypergeometric_1f1(z(a)?, z(b)?, z(x)?, self.max_terms());
        kernel("hypergeometric1F1", value)
    }

    fn hypergeometric_2f1(&self, a: &Number, b: &Number, c: &Number, x: &Number) -> CalcResult<Number> {
        let value =
            hypergeometric::hypergeometric_2f1(z(a)?, z(b)?, z(c)?, z(x)?, self.max_terms());
        kernel("hypergeometric2F1", value)
    }

    fn glaisher(&self, digits: &Number) -> CalcResult<Number> {
        constant("glaisher", constants::GLAISHER, digits)
    }

    fn khinchin(&self, digits: &Number) -> CalcResult<Number> {
        constant("khinchin", constants::KHINCHIN, digits)
    }

    fn log(&self, x: &Number) -> CalcResult<Number> {
        let x = z(x)?;
        if x == ZERO {
            return Err(CalcError::invalid_argument("log", "logarithm of zero"));
        }
        complex_result("log", x.ln())
    }

    fn log_base(&self, x: &Number, base: &Number) -> CalcResult<Number> {
        let (x, base) = (z(x)?, z(base)?);
        if x == ZERO || base == ZERO {
            return Err(CalcError::invalid_argument("log", "logarithm of zero"));
        }
        if base == ONE {
            return Err(CalcError::division_by_zero("log"));
        }
        complex_result("log", x.ln() / base.ln())
    }

    fn log_gamma(&self, x: &Number) -> CalcResult<Number> {
        kernel("logGamma", gamma::log_gamma(z(x)?))
    }

    fn max(&self, _: &Number, _: &Number) -> CalcResult<Number> {
        self.unsupported("max")
    }

    fn min(&self, _: &Number, _: &Number) -> CalcResult<Number> {
        self.unsupported("min")
    }

    fn next_after(&self, _: &Number, _: &Number) -> CalcResult<Number> {
        self.unsupported("nextAfter")
    }

    fn next_down(&self, _: &Number) -> CalcResult<Number> {
        self.unsupported("nextDown")
    }

    fn next_up(&self, _: &Number) -> CalcResult<Number> {
        self.unsupported("nextUp")
    }

    fn pi(&self, digits: &Number) -> CalcResult<Number> {
        constant("pi", constants::PI, digits)
    }

    fn random(&self, digits: &Number) -> CalcResult<Number> {
        random(&self.context, digits)
    }

    fn random_gaussian(&self, digits: &Number) -> CalcResult<Number> {
        random_gaussian(&self.context, digits)
    }

    fn round_to_precision(&self, _: &Number, _: &Number) -> CalcResult<Number> {
        self.unsupported("roundToPrecision")
    }

    fn round_to_integer(&self, _: &Number) -> CalcResult<Number> {
        self.unsupported("roundToInteger")
    }

    fn round_to_places(&self, _: &Number, _: &Number) -> CalcResult<Number> {
        self.unsupported("roundToPlaces")
    }

    fn round_to_multiple(&self, _: &Number, _: &Number) -> CalcResult<Number> {
        self.unsupported("roundToMultiple")
    }

    fn sin(&self, x: &Number) -> CalcResult<Number> {
        self.unary("sin", x, |x| x.sin())
    }

    fn sinh(&self, x: &Number) -> CalcResult<Number> {
        self.unary("sinh", x, |x| x.sinh())
    }

    fn sqrt(&self, x: &Number) -> CalcResult<Number> {
        self.unary("sqrt", x, |x| x.sqrt())
    }

    fn tan(&self, x: &Number) -> CalcResult<Number> {
        self.unary("tan", x, |x| x.tan())
    }

    fn tanh(&self, x: &Number) -> CalcResult<Number> {
        self.unary("tanh", x, |x| x.tanh())
    }

    fn truncate(&self, _: &Number) -> CalcResult<Number> {
        self.unsupported("truncate")
    }

    fn to_degrees(&self, x: &Number) -> CalcResult<Number> {
        self.unary("toDegrees", x, |x| x * (180.0 / constants::PI))
    }

    fn to_radians(&self, x: &Number) -> CalcResult<Number> {
        self.unary("toRadians", x, |x| x * (constants::PI / 180.0))
    }

    fn ulp(&self, _: &Number) -> CalcResult<Number> {
        self.unsupported("ulp")
    }

    fn zeta(&self, s: &Number) -> CalcResult<Number> {
        kernel("zeta", zeta::zeta(z(s)?))
    }

    fn zeta_hurwitz(&self, s: &Number, a: &Number) -> CalcResult<Number> {
        kernel("zeta", zeta::hurwitz_zeta(z(s)?, z(a)?))
    }

    fn agm(&self, x: &Number, y: &Number) -> CalcResult<Number> {
        kernel("agm", agm::agm(z(x)?, z(y)?))
    }

    fn w(&self, x: &Number) -> CalcResult<Number> {
        kernel("w", lambert::lambert_w(z(x)?, 0))
    }

    fn w_branch(&self, x: &Number, k: &Number) -> CalcResult<Number> {
        let k = small_integer_argument("w", k)?;
        kernel("w", lambert::lambert_w(z(x)?, k))
    }

    fn atan2(&self, _: &Number, _: &Number) -> CalcResult<Number> {
        self.unsupported("atan2")
    }

    fn copy_sign(&self, _: &Number, _: &Number) -> CalcResult<Number> {
        self.unsupported("copySign")
    }

    fn fmod(&self, _: &Number, _: &Number) -> CalcResult<Number> {
        self.unsupported("fmod")
    }

    fn gcd(&self, _: &Number, _: &Number) -> CalcResult<Number> {
        self.unsupported("gcd")
    }

    fn lcm(&self, _: &Number, _: &Number) -> CalcResult<Number> {
        self.unsupported("lcm")
    }

    fn hypot(&self, _: &Number, _: &Number) -> CalcResult<Number> {
        self.unsupported("hypot")
    }

    fn inverse_root(&self, x: &Number, n: &Number) -> CalcResult<Number> {
        self.root_of("inverseRoot", x, n, 0, true)
    }

    fn inverse_root_branch(&self, x: &Number, n: &Number, k: &Number) -> CalcResult<Number> {
        let k = small_integer_argument("inverseRoot", k)?;
        self.root_of("inverseRoot", x, n, k, true)
    }

    fn root(&self, x: &Number, n: &Number) -> CalcResult<Number> {
        self.root_of("root", x, n, 0, false)
    }

    fn root_branch(&self, x: &Number, n: &Number, k: &Number) -> CalcResult<Number> {
        let k = small_integer_argument("root", k)?;
        self.root_of("root", x, n, k, false)
    }

    fn scale(&self, x: &Number, n: &Number) -> CalcResult<Number> {
        let n = small_integer_argument("scale", n)?;
        let factor = 10f64.powi(n.clamp(i32::MIN as i64, i32::MAX as i64) as i32);
        complex_result("scale", z(x)? * factor)
    }

    /// Both parts rounded to `digits` significant digits.
    fn precision(&self, x: &Number, digits: &Number) -> CalcResult<Number> {
        let digits = precision_argument("precision", digits)?;
        let x = z(x)?;
        complex_result(
            "precision",
            Complex::new(
                rounding::round_to_precision(x.re, digits),
                rounding::round_to_precision(x.im, digits),
            ),
        )
    }
}
