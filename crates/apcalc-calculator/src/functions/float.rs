use super::rational::{bernoulli_number, gcd_lcm};
use super::{
    ComplexFunctions, Context, Functions, check_limit, constant, integer_argument,
    precision_argument, random, random_gaussian, real_result, small_integer_argument,
};
use crate::error::{CalcError, CalcResult};
use crate::kernels::{constants, gamma, rounding};
use crate::resolver::Family;
use apcalc_types::Number;
use num_bigint::BigInt;
use num_traits::{FromPrimitive, Signed, ToPrimitive};
use std::sync::Arc;

fn r(x: &Number) -> CalcResult<f64> {
    Ok(x.to_f64()?)
}

fn integer_result(function: &str, value: f64) -> CalcResult<Number> {
    BigInt::from_f64(value).map(Number::Integer).ok_or_else(|| CalcError::non_finite(function))
}

/// Capability set for real floating point arguments.
///
/// Whenever the mathematically correct result is not real the call is
/// handed to the complex set.
#[derive(Debug, Clone)]
pub struct FloatFunctions {
    context: Arc<Context>,
    complex: ComplexFunctions,
}

impl FloatFunctions {
    pub(crate) fn new(context: Arc<Context>, complex: ComplexFunctions) -> Self {
        Self { context, complex }
    }

    fn unary(&self, function: &str, x: &Number, f: impl Fn(f64) -> f64) -> CalcResult<Number> {
        real_result(function, f(r(x)?))
    }

    /// Real root for a real base, `None` when only complex roots exist.
    fn real_root(&self, function: &str, x: f64, n: i64) -> CalcResult<Option<f64>> {
        if n == 0 {
            return Err(CalcError::invalid_argument(function, "zeroth root"));
        }
        if x == 0.0 {
            return if n > 0 { Ok(Some(0.0)) } else { Err(CalcError::division_by_zero(function)) };
        }
        if x < 0.0 && n % 2 == 0 {
            return Ok(None);
        }
        let magnitude = match n {
            2 => x.abs().sqrt(),
            3 => x.abs().cbrt(),
            _ => x.abs().powf(1.0 / n as f64),
        };
        Ok(Some(magnitude.copysign(x)))
    }

    fn exact_integer_pair(
        &self,
        function: &str,
        x: &Number,
        y: &Number,
    ) -> CalcResult<(BigInt, BigInt)> {
        Ok((integer_argument(function, x)?, integer_argument(function, y)?))
    }
}

impl Functions for FloatFunctions {
    fn family(&self) -> Family {
        Family::Float
    }

    delegate! { complex =>
        arg(x);
        binomial(n, k);
        digamma(x);
        factorial(x);
        gamma(x);
        hypergeometric_0f1(a, z);
        hypergeometric_1f1(a, b, z);
        hypergeometric_2f1(a, b, c, z);
        log_gamma(x);
        zeta(s);
        zeta_hurwitz(s, a);
        agm(x, y);
        w(z);
        w_branch(z, k);
        inverse_root_branch(x, n, k);
        root_branch(x, n, k);
    }

    fn negate(&self, x: &Number) -> CalcResult<Number> {
        self.unary("negate", x, |x| -x)
    }

    fn add(&self, x: &Number, y: &Number) -> CalcResult<Number> {
        real_result("add", r(x)? + r(y)?)
    }

    fn subtract(&self, x: &Number, y: &Number) -> CalcResult<Number> {
        real_result("subtract", r(x)? - r(y)?)
    }

    fn multiply(&self, x: &Number, y: &Number) -> CalcResult<Number> {
        real_result("multiply", r(x)? * r(y)?)
    }

    fn divide(&self, x: &Number, y: &Number) -> CalcResult<Number> {
        let divisor = r(y)?;
        if divisor == 0.0 {
            return Err(CalcError::division_by_zero("divide"));
        }
        real_result("divide", r(x)? / divisor)
    }

    fn modulo(&self, x: &Number, y: &Number) -> CalcResult<Number> {
        let divisor = r(y)?;
        if divisor == 0.0 {
            return Err(CalcError::division_by_zero("mod"));
        }
        real_result("mod", r(x)? % divisor)
    }

    fn pow(&self, x: &Number, y: &Number) -> CalcResult<Number> {
        let (base, exponent) = (r(x)?, r(y)?);
        if base == 0.0 {
            return if exponent == 0.0 {
                Err(CalcError::invalid_argument("pow", "zero to the power of zero"))
            } else if exponent > 0.0 {
                Ok(Number::Float(0.0))
            } else {
                Err(CalcError::division_by_zero("pow"))
            };
        }
        if base < 0.0 && exponent.fract() != 0.0 {
            return self.complex.pow(x, y);
        }
        real_result("pow", base.powf(exponent))
    }

    fn conj(&self, x: &Number) -> CalcResult<Number> {
        self.unary("conj", x, |x| x)
    }

    fn imag(&self, _: &Number) -> CalcResult<Number> {
        Ok(Number::Float(0.0))
    }

    fn real(&self, x: &Number) -> CalcResult<Number> {
        self.unary("real", x, |x| x)
    }

    fn abs(&self, x: &Number) -> CalcResult<Number> {
        self.unary("abs", x, f64::abs)
    }

    fn acos(&self, x: &Number) -> CalcResult<Number> {
        match r(x)? {
            v if v.abs() <= 1.0 => real_result("acos", v.acos()),
            _ => self.complex.acos(x),
        }
    }

    fn acosh(&self, x: &Number) -> CalcResult<Number> {
        match r(x)? {
            v if v >= 1.0 => real_result("acosh", v.acosh()),
            _ => self.complex.acosh(x),
        }
    }

    fn asin(&self, x: &Number) -> CalcResult<Number> {
        match r(x)? {
            v if v.abs() <= 1.0 => real_result("asin", v.asin()),
            _ => self.complex.asin(x),
        }
    }

    fn asinh(&self, x: &Number) -> CalcResult<Number> {
        self.unary("asinh", x, f64::asinh)
    }

    fn atan(&self, x: &Number) -> CalcResult<Number> {
        self.unary("atan", x, f64::atan)
    }

    fn atanh(&self, x: &Number) -> CalcResult<Number> {
        match r(x)? {
            v if v.abs() < 1.0 => real_result("atanh", v.atanh()),
            v if v.abs() == 1.0 => Err(CalcError::pole("atanh")),
            _ => self.complex.atanh(x),
        }
    }

    /// Integral arguments only; the exact value rounded to a float.
    fn bernoulli(&self, n: &Number) -> CalcResult<Number> {
        let n = integer_argument("bernoulli", n)?;
        if n.is_negative() {
            return Err(CalcError::invalid_argument("bernoulli", "index must not be negative"));
        }
        let n = check_limit("bernoulli", "max_bernoulli", self.context.config.max_bernoulli, &n)?;
        real_result("bernoulli", bernoulli_number(n).to_f64().unwrap_or(f64::NAN))
    }

    fn catalan(&self, digits: &Number) -> CalcResult<Number> {
        constant("catalan", constants::CATALAN, digits)
    }

    fn cbrt(&self, x: &Number) -> CalcResult<Number> {
        self.unary("cbrt", x, f64::cbrt)
    }

    fn ceil(&self, x: &Number) -> CalcResult<Number> {
        integer_result("ceil", r(x)?.ceil())
    }

    fn cos(&self, x: &Number) -> CalcResult<Number> {
        self.unary("cos", x, f64::cos)
    }

    fn cosh(&self, x: &Number) -> CalcResult<Number> {
        self.unary("cosh", x, f64::cosh)
    }

    fn e(&self, digits: &Number) -> CalcResult<Number> {
        constant("e", constants::E, digits)
    }

    fn euler(&self, digits: &Number) -> CalcResult<Number> {
        constant("euler", constants::EULER_GAMMA, digits)
    }

    fn exp(&self, x: &Number) -> CalcResult<Number> {
        self.unary("exp", x, f64::exp)
    }

    fn floor(&self, x: &Number) -> CalcResult<Number> {
        integer_result("floor", r(x)?.floor())
    }

    fn frac(&self, x: &Number) -> CalcResult<Number> {
        self.unary("frac", x, f64::fract)
    }

    fn gamma_incomplete(&self, a: &Number, z: &Number) -> CalcResult<Number> {
        let (a, z) = (r(a)?, r(z)?);
        if z < 0.0 {
            return Err(CalcError::invalid_argument("gamma", "argument must not be negative"));
        }
        let value = gamma::gamma_upper(a, z, self.context.config.series_max_terms)
            .map_err(|e| e.at("gamma"))?;
        real_result("gamma", value)
    }

    fn gamma_generalized(&self, a: &Number, z0: &Number, z1: &Number) -> CalcResult<Number> {
        let upper = r(&self.gamma_incomplete(a, z0)?)?;
        let lower = r(&self.gamma_incomplete(a, z1)?)?;
        real_result("gamma", upper - lower)
    }

    fn glaisher(&self, digits: &Number) -> CalcResult<Number> {
        constant("glaisher", constants::GLAISHER, digits)
    }

    fn khinchin(&self, digits: &Number) -> CalcResult<Number> {
        constant("khinchin", constants::KHINCHIN, digits)
    }

    fn log(&self, x: &Number) -> CalcResult<Number> {
        match r(x)? {
            v if v > 0.0 => real_result("log", v.ln()),
            _ => self.complex.log(x),
        }
    }

    fn log_base(&self, x: &Number, base: &Number) -> CalcResult<Number> {
        let (value, b) = (r(x)?, r(base)?);
        if value <= 0.0 || b <= 0.0 {
            return self.complex.log_base(x, base);
        }
        if b == 1.0 {
            return Err(CalcError::division_by_zero("log"));
        }
        real_result("log", value.ln() / b.ln())
    }

    fn max(&self, x: &Number, y: &Number) -> CalcResult<Number> {
        real_result("max", r(x)?.max(r(y)?))
    }

    fn min(&self, x: &Number, y: &Number) -> CalcResult<Number> {
        real_result("min", r(x)?.min(r(y)?))
    }

    fn next_after(&self, x: &Number, direction: &Number) -> CalcResult<Number> {
        real_result("nextAfter", rounding::next_after(r(x)?, r(direction)?))
    }

    fn next_down(&self, x: &Number) -> CalcResult<Number> {
        self.unary("nextDown", x, rounding::next_down)
    }

    fn next_up(&self, x: &Number) -> CalcResult<Number> {
        self.unary("nextUp", x, rounding::next_up)
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

    fn round_to_precision(&self, x: &Number, digits: &Number) -> CalcResult<Number> {
        let digits = precision_argument("roundToPrecision", digits)?;
        real_result("roundToPrecision", rounding::round_to_precision(r(x)?, digits))
    }

    fn round_to_integer(&self, x: &Number) -> CalcResult<Number> {
        integer_result("roundToInteger", r(x)?.round())
    }

    fn round_to_places(&self, x: &Number, places: &Number) -> CalcResult<Number> {
        let places = small_integer_argument("roundToPlaces", places)?;
        let places = places.clamp(-400, 400) as i32;
        real_result("roundToPlaces", rounding::round_to_places(r(x)?, places))
    }

    fn round_to_multiple(&self, x: &Number, step: &Number) -> CalcResult<Number> {
        let step = r(step)?;
        if step == 0.0 {
            return Err(CalcError::division_by_zero("roundToMultiple"));
        }
        real_result("roundToMultiple", (r(x)? / step).round() * step)
    }

    fn sin(&self, x: &Number) -> CalcResult<Number> {
        self.unary("sin", x, f64::sin)
    }

    fn sinh(&self, x: &Number) -> CalcResult<Number> {
        self.unary("sinh", x, f64::sinh)
    }

    fn sqrt(&self, x: &Number) -> CalcResult<Number> {
        match r(x)? {
            v if v >= 0.0 => real_result("sqrt", v.sqrt()),
            _ => self.complex.sqrt(x),
        }
    }

    fn tan(&self, x: &Number) -> CalcResult<Number> {
        self.unary("tan", x, f64::tan)
    }

    fn tanh(&self, x: &Number) -> CalcResult<Number> {
        self.unary("tanh", x, f64::tanh)
    }

    fn truncate(&self, x: &Number) -> CalcResult<Number> {
        integer_result("truncate", r(x)?.trunc())
    }

    fn to_degrees(&self, x: &Number) -> CalcResult<Number> {
        self.unary("toDegrees", x, f64::to_degrees)
    }

    fn to_radians(&self, x: &Number) -> CalcResult<Number> {
        self.unary("toRadians", x, f64::to_radians)
    }

    fn ulp(&self, x: &Number) -> CalcResult<Number> {
        self.unary("ulp", x, rounding::ulp)
    }

    fn atan2(&self, y: &Number, x: &Number) -> CalcResult<Number> {
        let (y, x) = (r(y)?, r(x)?);
        if y == 0.0 && x == 0.0 {
            return Err(CalcError::invalid_argument("atan2", "angle of zero is undefined"));
        }
        real_result("atan2", y.atan2(x))
    }

    fn copy_sign(&self, x: &Number, sign: &Number) -> CalcResult<Number> {
        real_result("copySign", r(x)?.copysign(r(sign)?))
    }

    fn fmod(&self, x: &Number, y: &Number) -> CalcResult<Number> {
        let divisor = r(y)?;
        if divisor == 0.0 {
            return Err(CalcError::division_by_zero("fmod"));
        }
        real_result("fmod", r(x)? % divisor)
    }

    fn gcd(&self, x: &Number, y: &Number) -> CalcResult<Number> {
        let (x, y) = self.exact_integer_pair("gcd", x, y)?;
        let (gcd, _) = gcd_lcm(&x, &y);
        real_result("gcd", gcd.to_f64().unwrap_or(f64::NAN))
    }

    fn lcm(&self, x: &Number, y: &Number) -> CalcResult<Number> {
        let (x, y) = self.exact_integer_pair("lcm", x, y)?;
        let (_, lcm) = gcd_lcm(&x, &y);
        real_result("lcm", lcm.to_f64().unwrap_or(f64::NAN))
    }

    fn hypot(&self, x: &Number, y: &Number) -> CalcResult<Number> {
        real_result("hypot", r(x)?.hypot(r(y)?))
    }

    fn inverse_root(&self, x: &Number, n: &Number) -> CalcResult<Number> {
        let order = small_integer_argument("inverseRoot", n)?;
        match self.real_root("inverseRoot", r(x)?, order)? {
            Some(root) if root == 0.0 => Err(CalcError::division_by_zero("inverseRoot")),
            Some(root) => real_result("inverseRoot", root.recip()),
            None => self.complex.inverse_root(x, n),
        }
    }

    fn root(&self, x: &Number, n: &Number) -> CalcResult<Number> {
        let order = small_integer_argument("root", n)?;
        match self.real_root("root", r(x)?, order)? {
            Some(root) => real_result("root", root),
            None => self.complex.root(x, n),
        }
    }

    fn scale(&self, x: &Number, n: &Number) -> CalcResult<Number> {
        let n = small_integer_argument("scale", n)?;
        let factor = 10f64.powi(n.clamp(-400, 400) as i32);
        real_result("scale", r(x)? * factor)
    }

    fn precision(&self, x: &Number, digits: &Number) -> CalcResult<Number> {
        let digits = precision_argument("precision", digits)?;
        real_result("precision", rounding::round_to_precision(r(x)?, digits))
    }
}
