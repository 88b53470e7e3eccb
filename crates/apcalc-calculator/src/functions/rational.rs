use super::{
    Context, FloatFunctions, Functions, check_limit, integer_argument, precision_argument,
};
use crate::error::{CalcError, CalcResult};
use crate::resolver::Family;
use apcalc_types::Number;
use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Pow, Signed, ToPrimitive, Zero};
use std::sync::Arc;

/// Bernoulli number `Bₙ` by the Akiyama-Tanigawa algorithm, with `B₁ = -1/2`.
pub(crate) fn bernoulli_number(n: u64) -> BigRational {
    if n == 1 {
        return BigRational::new(BigInt::from(-1), BigInt::from(2));
    }
    if n % 2 == 1 {
        return BigRational::zero();
    }
    let n = n as usize;
    let mut row: Vec<BigRational> = Vec::with_capacity(n + 1);
    for m in 0..=n {
        row.push(BigRational::new(BigInt::one(), BigInt::from(m + 1)));
        for j in (1..=m).rev() {
            row[j - 1] = (&row[j - 1] - &row[j]) * BigInt::from(j);
        }
    }
    row.swap_remove(0)
}

/// Non-negative gcd and lcm of two integers.
pub(crate) fn gcd_lcm(x: &BigInt, y: &BigInt) -> (BigInt, BigInt) {
    let (gcd, lcm) = x.gcd_lcm(y);
    (gcd.abs(), lcm.abs())
}

/// `n` choose `k` for integer `n` and `k`. Negative `n` uses
/// `C(n, k) = (-1)^k C(k - n - 1, k)`.
fn binomial_integer(n: &BigInt, k: &BigInt, limit: u64) -> CalcResult<BigInt> {
    if k.is_negative() {
        return Ok(BigInt::zero());
    }
    if n.is_negative() {
        let reflected = binomial_integer(&(k - n - 1), k, limit)?;
        return Ok(if k.is_odd() { -reflected } else { reflected });
    }
    if k > n {
        return Ok(BigInt::zero());
    }
    let k = std::cmp::min(k.clone(), n - k);
    let k = check_limit("binomial", "max_factorial", limit, &k)?;
    let mut result = BigInt::one();
    for i in 1..=k {
        result = result * (n - k + i) / i;
    }
    Ok(result)
}

fn factorial_integer(n: u64) -> BigInt {
    (2..=n).fold(BigInt::one(), |acc, i| acc * i)
}

/// `r` with `rⁿ = x` when one exists among the rationals.
fn exact_root(x: &BigRational, n: u32) -> Option<BigRational> {
    if n == 0 || (x.is_negative() && n % 2 == 0) {
        return None;
    }
    let root_of = |value: &BigInt| {
        let root = value.abs().nth_root(n);
        ((&root).pow(n) == value.abs()).then_some(root)
    };
    let numer = root_of(x.numer())?;
    let denom = root_of(x.denom())?;
    let root = BigRational::new(numer, denom);
    Some(if x.is_negative() { -root } else { root })
}

/// `10^exponent` as an exact fraction.
fn power_of_ten(exponent: i64) -> BigRational {
    let magnitude = Pow::pow(BigInt::from(10), exponent.unsigned_abs());
    if exponent >= 0 {
        BigRational::from_integer(magnitude)
    } else {
        BigRational::new(BigInt::one(), magnitude)
    }
}

/// `e` with `10^e <= |x| < 10^(e+1)`, for non-zero `x`.
fn decimal_exponent(x: &BigRational) -> i64 {
    let x = x.abs();
    let digits = |value: &BigInt| value.to_string().len() as i64;
    let mut exponent = digits(x.numer()) - digits(x.denom());
    while power_of_ten(exponent) > x {
        exponent -= 1;
    }
    while power_of_ten(exponent + 1) <= x {
        exponent += 1;
    }
    exponent
}

/// Capability set for integers and exact fractions.
///
/// Everything with an exact rational answer is computed exactly. The rest is
/// forwarded to the float set.
#[derive(Debug, Clone)]
pub struct RationalFunctions {
    context: Arc<Context>,
    float: FloatFunctions,
}

impl RationalFunctions {
    pub(crate) fn new(context: Arc<Context>, float: FloatFunctions) -> Self {
        Self { context, float }
    }

    pub(crate) fn context(&self) -> &Context {
        &self.context
    }

    fn q(&self, function: &str, x: &Number) -> CalcResult<BigRational> {
        x.to_rational()
            .ok_or_else(|| CalcError::invalid_argument(function, "argument is not a real number"))
    }

    /// Decimal scale factor `10^exponent`, bounded by `max_exact_exponent`.
    fn scale_factor(&self, function: &str, exponent: &BigInt) -> CalcResult<BigRational> {
        let limit = self.context.config.max_exact_exponent;
        let magnitude = check_limit(function, "max_exact_exponent", limit, &exponent.abs())?;
        if u32::try_from(magnitude).is_err() {
            return Err(CalcError::LimitExceeded {
                function: function.to_string(),
                setting: "max_exact_exponent",
                limit: u64::from(u32::MAX),
            });
        }
        let exponent = exponent
            .to_i64()
            .ok_or_else(|| CalcError::invalid_argument(function, "exponent is out of range"))?;
        Ok(power_of_ten(exponent))
    }

    /// Exact `n`th root for an integer `n`, or `None` when it is irrational.
    fn exact_nth_root(
        &self,
        function: &str,
        x: &BigRational,
        n: &BigInt,
    ) -> CalcResult<Option<BigRational>> {
        if n.is_zero() {
            return Err(CalcError::invalid_argument(function, "zeroth root"));
        }
        if x.is_zero() {
            return if n.is_positive() {
                Ok(Some(BigRational::zero()))
            } else {
                Err(CalcError::division_by_zero(function))
            };
        }
        let Some(order) = n.abs().to_u32() else {
            return Ok(None);
        };
        let root = exact_root(x, order);
        Ok(if n.is_negative() { root.map(|r| r.recip()) } else { root })
    }

    fn exact_pow(&self, base: &BigRational, exponent: &BigInt) -> CalcResult<BigRational> {
        if base.is_zero() {
            return if exponent.is_zero() {
                Err(CalcError::invalid_argument("pow", "zero to the power of zero"))
            } else if exponent.is_positive() {
                Ok(BigRational::zero())
            } else {
                Err(CalcError::division_by_zero("pow"))
            };
        }
        if base.abs().is_one() {
            let negative = base.is_negative() && exponent.is_odd();
            return Ok(if negative { -BigRational::one() } else { BigRational::one() });
        }
        let limit = self.context.config.max_exact_exponent;
        let magnitude = check_limit("pow", "max_exact_exponent", limit, &exponent.abs())?;
        let power = i32::try_from(magnitude).map_err(|_| CalcError::LimitExceeded {
            function: "pow".to_string(),
            setting: "max_exact_exponent",
            limit,
        })?;
        let result = base.pow(power);
        Ok(if exponent.is_negative() { result.recip() } else { result })
    }
}

impl Functions for RationalFunctions {
    fn family(&self) -> Family {
        Family::Rational
    }

    delegate! { float =>
        arg(x);
        acos(x);
        acosh(x);
        asin(x);
        asinh(x);
        atan(x);
        atanh(x);
        catalan(digits);
        cos(x);
        cosh(x);
        digamma(x);
        e(digits);
        euler(digits);
        exp(x);
        gamma_incomplete(a, z);
        gamma_generalized(a, z0, z1);
        hypergeometric_0f1(a, z);
        hypergeometric_1f1(a, b, z);
        hypergeometric_2f1(a, b, c, z);
        glaisher(digits);
        khinchin(digits);
        log(x);
        log_base(x, base);
        log_gamma(x);
        next_after(x, direction);
        next_down(x);
        next_up(x);
        pi(digits);
        random(digits);
        random_gaussian(digits);
        sin(x);
        sinh(x);
        tan(x);
        tanh(x);
        to_degrees(x);
        to_radians(x);
        ulp(x);
        zeta(s);
        zeta_hurwitz(s, a);
        agm(x, y);
        w(z);
        w_branch(z, k);
        atan2(y, x);
        hypot(x, y);
        inverse_root_branch(x, n, k);
        root_branch(x, n, k);
        precision(x, digits);
    }

    fn negate(&self, x: &Number) -> CalcResult<Number> {
        Ok(Number::Rational(-self.q("negate", x)?))
    }

    fn add(&self, x: &Number, y: &Number) -> CalcResult<Number> {
        Ok(Number::Rational(self.q("add", x)? + self.q("add", y)?))
    }

    fn subtract(&self, x: &Number, y: &Number) -> CalcResult<Number> {
        Ok(Number::Rational(self.q("subtract", x)? - self.q("subtract", y)?))
    }

    fn multiply(&self, x: &Number, y: &Number) -> CalcResult<Number> {
        Ok(Number::Rational(self.q("multiply", x)? * self.q("multiply", y)?))
    }

    fn divide(&self, x: &Number, y: &Number) -> CalcResult<Number> {
        let divisor = self.q("divide", y)?;
        if divisor.is_zero() {
            return Err(CalcError::division_by_zero("divide"));
        }
        Ok(Number::Rational(self.q("divide", x)? / divisor))
    }

    fn modulo(&self, x: &Number, y: &Number) -> CalcResult<Number> {
        let divisor = self.q("mod", y)?;
        if divisor.is_zero() {
            return Err(CalcError::division_by_zero("mod"));
        }
        Ok(Number::Rational(self.q("mod", x)? % divisor))
    }

    /// Exact for integer exponents and for fractional exponents whose root is
    /// rational; otherwise evaluated as floats. A negative base with a
    /// fractional exponent takes the principal complex branch, as it does
    /// for float arguments.
    fn pow(&self, x: &Number, y: &Number) -> CalcResult<Number> {
        let base = self.q("pow", x)?;
        let exponent = self.q("pow", y)?;
        if exponent.is_integer() {
            return Ok(Number::Rational(self.exact_pow(&base, &exponent.to_integer())?));
        }
        if base.is_negative() {
            return self.float.pow(x, y);
        }
        if let Some(root) = self.exact_nth_root("pow", &base, exponent.denom())? {
            return Ok(Number::Rational(self.exact_pow(&root, exponent.numer())?));
        }
        self.float.pow(x, y)
    }

    fn conj(&self, x: &Number) -> CalcResult<Number> {
        Ok(Number::Rational(self.q("conj", x)?))
    }

    fn imag(&self, _: &Number) -> CalcResult<Number> {
        Ok(Number::Integer(BigInt::zero()))
    }

    fn real(&self, x: &Number) -> CalcResult<Number> {
        Ok(Number::Rational(self.q("real", x)?))
    }

    fn abs(&self, x: &Number) -> CalcResult<Number> {
        Ok(Number::Rational(self.q("abs", x)?.abs()))
    }

    fn bernoulli(&self, n: &Number) -> CalcResult<Number> {
        let n = integer_argument("bernoulli", n)?;
        if n.is_negative() {
            return Err(CalcError::invalid_argument("bernoulli", "index must not be negative"));
        }
        let n = check_limit("bernoulli", "max_bernoulli", self.context.config.max_bernoulli, &n)?;
        Ok(Number::Rational(bernoulli_number(n)))
    }

    fn binomial(&self, n: &Number, k: &Number) -> CalcResult<Number> {
        match (n.to_integer(), k.to_integer()) {
            (Some(n), Some(k)) => {
                let limit = self.context.config.max_factorial;
                Ok(Number::Integer(binomial_integer(&n, &k, limit)?))
            }
            _ => self.float.binomial(n, k),
        }
    }

    fn cbrt(&self, x: &Number) -> CalcResult<Number> {
        match exact_root(&self.q("cbrt", x)?, 3) {
            Some(root) => Ok(Number::Rational(root)),
            None => self.float.cbrt(x),
        }
    }

    fn ceil(&self, x: &Number) -> CalcResult<Number> {
        Ok(Number::Rational(self.q("ceil", x)?.ceil()))
    }

    fn factorial(&self, x: &Number) -> CalcResult<Number> {
        let Some(n) = x.to_integer() else {
            return self.float.factorial(x);
        };
        if n.is_negative() {
            return Err(CalcError::pole("factorial"));
        }
        let n = check_limit("factorial", "max_factorial", self.context.config.max_factorial, &n)?;
        Ok(Number::Integer(factorial_integer(n)))
    }

    fn floor(&self, x: &Number) -> CalcResult<Number> {
        Ok(Number::Rational(self.q("floor", x)?.floor()))
    }

    fn frac(&self, x: &Number) -> CalcResult<Number> {
        Ok(Number::Rational(self.q("frac", x)?.fract()))
    }

    /// Γ(n) = (n - 1)! for positive integers.
    fn gamma(&self, x: &Number) -> CalcResult<Number> {
        let Some(n) = x.to_integer() else {
            return self.float.gamma(x);
        };
        if !n.is_positive() {
            return Err(CalcError::pole("gamma"));
        }
        let limit = self.context.config.max_factorial;
        let n = check_limit("gamma", "max_factorial", limit, &(n - 1))?;
        Ok(Number::Integer(factorial_integer(n)))
    }

    fn max(&self, x: &Number, y: &Number) -> CalcResult<Number> {
        Ok(Number::Rational(std::cmp::max(self.q("max", x)?, self.q("max", y)?)))
    }

    fn min(&self, x: &Number, y: &Number) -> CalcResult<Number> {
        Ok(Number::Rational(std::cmp::min(self.q("min", x)?, self.q("min", y)?)))
    }

    fn round_to_precision(&self, x: &Number, digits: &Number) -> CalcResult<Number> {
        let digits = precision_argument("roundToPrecision", digits)?;
        let value = self.q("roundToPrecision", x)?;
        if value.is_zero() {
            return Ok(Number::Rational(value));
        }
        let shift = i64::from(digits) - 1 - decimal_exponent(&value);
        let factor = self.scale_factor("roundToPrecision", &BigInt::from(shift))?;
        Ok(Number::Rational((value * &factor).round() / factor))
    }

    fn round_to_integer(&self, x: &Number) -> CalcResult<Number> {
        Ok(Number::Rational(self.q("roundToInteger", x)?.round()))
    }

    fn round_to_places(&self, x: &Number, places: &Number) -> CalcResult<Number> {
        let places = integer_argument("roundToPlaces", places)?;
        let factor = self.scale_factor("roundToPlaces", &places)?;
        let value = self.q("roundToPlaces", x)?;
        Ok(Number::Rational((value * &factor).round() / factor))
    }

    fn round_to_multiple(&self, x: &Number, step: &Number) -> CalcResult<Number> {
        let step = self.q("roundToMultiple", step)?;
        if step.is_zero() {
            return Err(CalcError::division_by_zero("roundToMultiple"));
        }
        let value = self.q("roundToMultiple", x)?;
        Ok(Number::Rational((value / &step).round() * step))
    }

    fn sqrt(&self, x: &Number) -> CalcResult<Number> {
        match exact_root(&self.q("sqrt", x)?, 2) {
            Some(root) => Ok(Number::Rational(root)),
            None => self.float.sqrt(x),
        }
    }

    fn truncate(&self, x: &Number) -> CalcResult<Number> {
        Ok(Number::Rational(self.q("truncate", x)?.trunc()))
    }

    fn copy_sign(&self, x: &Number, sign: &Number) -> CalcResult<Number> {
        let magnitude = self.q("copySign", x)?.abs();
        let negative = self.q("copySign", sign)?.is_negative();
        Ok(Number::Rational(if negative { -magnitude } else { magnitude }))
    }

    fn fmod(&self, x: &Number, y: &Number) -> CalcResult<Number> {
        let divisor = self.q("fmod", y)?;
        if divisor.is_zero() {
            return Err(CalcError::division_by_zero("fmod"));
        }
        Ok(Number::Rational(self.q("fmod", x)? % divisor))
    }

    fn gcd(&self, x: &Number, y: &Number) -> CalcResult<Number> {
        let (gcd, _) = gcd_lcm(&integer_argument("gcd", x)?, &integer_argument("gcd", y)?);
        Ok(Number::Integer(gcd))
    }

    fn lcm(&self, x: &Number, y: &Number) -> CalcResult<Number> {
        let (_, lcm) = gcd_lcm(&integer_argument("lcm", x)?, &integer_argument("lcm", y)?);
        Ok(Number::Integer(lcm))
    }

    fn inverse_root(&self, x: &Number, n: &Number) -> CalcResult<Number> {
        let order = integer_argument("inverseRoot", n)?;
        match self.exact_nth_root("inverseRoot", &self.q("inverseRoot", x)?, &order)? {
            Some(root) if root.is_zero() => Err(CalcError::division_by_zero("inverseRoot")),
            Some(root) => Ok(Number::Rational(root.recip())),
            None => self.float.inverse_root(x, n),
        }
    }

    fn root(&self, x: &Number, n: &Number) -> CalcResult<Number> {
        let order = integer_argument("root", n)?;
        match self.exact_nth_root("root", &self.q("root", x)?, &order)? {
            Some(root) => Ok(Number::Rational(root)),
            None => self.float.root(x, n),
        }
    }

    fn scale(&self, x: &Number, n: &Number) -> CalcResult<Number> {
        let exponent = integer_argument("scale", n)?;
        let factor = self.scale_factor("scale", &exponent)?;
        Ok(Number::Rational(self.q("scale", x)? * factor))
    }
}
