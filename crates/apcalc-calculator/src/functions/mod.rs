//! Capability sets
//!
//! A capability set implements every primitive the calculator can dispatch to
//! for one representation family. The rational set evaluates exactly where it
//! can and hands everything else to the float set, which in turn hands results
//! leaving the real line to the complex set.

/// Implement trait primitives by forwarding them to another capability set.
macro_rules! delegate {
    ($target:ident => $($name:ident($($arg:ident),*);)*) => {
        $(
            fn $name(&self, $($arg: &Number),*) -> CalcResult<Number> {
                self.$target.$name($($arg),*)
            }
        )*
    };
}

mod complex;
mod float;
mod rational;

pub use complex::ComplexFunctions;
pub use float::FloatFunctions;
pub use rational::RationalFunctions;

use crate::config::CalculatorConfig;
use crate::error::{CalcError, CalcResult};
use crate::function::CapabilityResolver;
use crate::kernels::{constants, rounding};
use crate::resolver::{Family, resolve_family};
use apcalc_types::{Complex, Number};
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use std::sync::{Arc, Mutex};
use tracing::{trace, warn};

/// Primitives over one representation family.
///
/// Arguments arrive in any representation at or below the implementing
/// family. Results are raw; the dispatcher promotes them afterwards.
pub trait Functions: Send + Sync {
    fn family(&self) -> Family;

    fn negate(&self, x: &Number) -> CalcResult<Number>;
    fn add(&self, x: &Number, y: &Number) -> CalcResult<Number>;
    fn subtract(&self, x: &Number, y: &Number) -> CalcResult<Number>;
    fn multiply(&self, x: &Number, y: &Number) -> CalcResult<Number>;
    fn divide(&self, x: &Number, y: &Number) -> CalcResult<Number>;
    /// Truncating remainder, sign of `x`
    fn modulo(&self, x: &Number, y: &Number) -> CalcResult<Number>;
    fn pow(&self, x: &Number, y: &Number) -> CalcResult<Number>;

    fn arg(&self, x: &Number) -> CalcResult<Number>;
    fn conj(&self, x: &Number) -> CalcResult<Number>;
    fn imag(&self, x: &Number) -> CalcResult<Number>;
    fn real(&self, x: &Number) -> CalcResult<Number>;

    fn abs(&self, x: &Number) -> CalcResult<Number>;
    fn acos(&self, x: &Number) -> CalcResult<Number>;
    fn acosh(&self, x: &Number) -> CalcResult<Number>;
    fn asin(&self, x: &Number) -> CalcResult<Number>;
    fn asinh(&self, x: &Number) -> CalcResult<Number>;
    fn atan(&self, x: &Number) -> CalcResult<Number>;
    fn atanh(&self, x: &Number) -> CalcResult<Number>;
    fn bernoulli(&self, n: &Number) -> CalcResult<Number>;
    fn binomial(&self, n: &Number, k: &Number) -> CalcResult<Number>;
    fn catalan(&self, digits: &Number) -> CalcResult<Number>;
    fn cbrt(&self, x: &Number) -> CalcResult<Number>;
    fn ceil(&self, x: &Number) -> CalcResult<Number>;
    fn cos(&self, x: &Number) -> CalcResult<Number>;
    fn cosh(&self, x: &Number) -> CalcResult<Number>;
    fn digamma(&self, x: &Number) -> CalcResult<Number>;
    fn e(&self, digits: &Number) -> CalcResult<Number>;
    fn euler(&self, digits: &Number) -> CalcResult<Number>;
    fn exp(&self, x: &Number) -> CalcResult<Number>;
    fn factorial(&self, x: &Number) -> CalcResult<Number>;
    fn floor(&self, x: &Number) -> CalcResult<Number>;
    fn frac(&self, x: &Number) -> CalcResult<Number>;
    fn gamma(&self, x: &Number) -> CalcResult<Number>;
    /// Upper incomplete gamma Γ(a, z)
    fn gamma_incomplete(&self, a: &Number, z: &Number) -> CalcResult<Number>;
    /// Generalized incomplete gamma Γ(a, z0) - Γ(a, z1)
    fn gamma_generalized(&self, a: &Number, z0: &Number, z1: &Number) -> CalcResult<Number>;
    fn hypergeometric_0f1(&self, a: &Number, z: &Number) -> CalcResult<Number>;
    fn hypergeometric_1f1(&self, a: &Number, b: &Number, z: &Number) -> CalcResult<Number>;
    fn hypergeometric_2f1(&self, a: &Number, b: &Number, c: &Number, z: &Number)
    -> CalcResult<Number>;
    fn glaisher(&self, digits: &Number) -> CalcResult<Number>;
    fn khinchin(&self, digits: &Number) -> CalcResult<Number>;
    fn log(&self, x: &Number) -> CalcResult<Number>;
    fn log_base(&self, x: &Number, base: &Number) -> CalcResult<Number>;
    fn log_gamma(&self, x: &Number) -> CalcResult<Number>;
    fn max(&self, x: &Number, y: &Number) -> CalcResult<Number>;
    fn min(&self, x: &Number, y: &Number) -> CalcResult<Number>;
    fn next_after(&self, x: &Number, direction: &Number) -> CalcResult<Number>;
    fn next_down(&self, x: &Number) -> CalcResult<Number>;
    fn next_up(&self, x: &Number) -> CalcResult<Number>;
    fn pi(&self, digits: &Number) -> CalcResult<Number>;
    fn random(&self, digits: &Number) -> CalcResult<Number>;
    fn random_gaussian(&self, digits: &Number) -> CalcResult<Number>;
    fn round_to_precision(&self, x: &Number, digits: &Number) -> CalcResult<Number>;
    fn round_to_integer(&self, x: &Number) -> CalcResult<Number>;
    fn round_to_places(&self, x: &Number, places: &Number) -> CalcResult<Number>;
    fn round_to_multiple(&self, x: &Number, step: &Number) -> CalcResult<Number>;
    fn sin(&self, x: &Number) -> CalcResult<Number>;
    fn sinh(&self, x: &Number) -> CalcResult<Number>;
    fn sqrt(&self, x: &Number) -> CalcResult<Number>;
    fn tan(&self, x: &Number) -> CalcResult<Number>;
    fn tanh(&self, x: &Number) -> CalcResult<Number>;
    fn truncate(&self, x: &Number) -> CalcResult<Number>;
    fn to_degrees(&self, x: &Number) -> CalcResult<Number>;
    fn to_radians(&self, x: &Number) -> CalcResult<Number>;
    fn ulp(&self, x: &Number) -> CalcResult<Number>;
    fn zeta(&self, s: &Number) -> CalcResult<Number>;
    /// Hurwitz zeta ζ(s, a)
    fn zeta_hurwitz(&self, s: &Number, a: &Number) -> CalcResult<Number>;

    fn agm(&self, x: &Number, y: &Number) -> CalcResult<Number>;
    /// Principal branch of the Lambert W function
    fn w(&self, z: &Number) -> CalcResult<Number>;
    fn w_branch(&self, z: &Number, k: &Number) -> CalcResult<Number>;
    /// `atan2(y, x)`, the angle of the point `(x, y)`
    fn atan2(&self, y: &Number, x: &Number) -> CalcResult<Number>;
    fn copy_sign(&self, x: &Number, sign: &Number) -> CalcResult<Number>;
    fn fmod(&self, x: &Number, y: &Number) -> CalcResult<Number>;
    fn gcd(&self, x: &Number, y: &Number) -> CalcResult<Number>;
    fn lcm(&self, x: &Number, y: &Number) -> CalcResult<Number>;
    fn hypot(&self, x: &Number, y: &Number) -> CalcResult<Number>;
    fn inverse_root(&self, x: &Number, n: &Number) -> CalcResult<Number>;
    fn inverse_root_branch(&self, x: &Number, n: &Number, k: &Number) -> CalcResult<Number>;
    fn root(&self, x: &Number, n: &Number) -> CalcResult<Number>;
    fn root_branch(&self, x: &Number, n: &Number, k: &Number) -> CalcResult<Number>;
    /// `x * 10^n`
    fn scale(&self, x: &Number, n: &Number) -> CalcResult<Number>;
    /// `x` rounded to `digits` significant digits
    fn precision(&self, x: &Number, digits: &Number) -> CalcResult<Number>;
}

/// State shared by the three built-in capability sets.
#[derive(Debug)]
pub(crate) struct Context {
    pub(crate) config: CalculatorConfig,
    rng: Mutex<StdRng>,
}

impl Context {
    pub(crate) fn new(config: CalculatorConfig) -> Self {
        let rng = match config.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng: Mutex::new(rng) }
    }

    /// Uniform sample in `[0, 1)`.
    pub(crate) fn uniform(&self) -> f64 {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.r#gen::<f64>()
    }

    /// Standard normal sample.
    pub(crate) fn gaussian(&self) -> f64 {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.sample(StandardNormal)
    }
}

/// The three built-in capability sets, one per [`Family`].
pub struct Capabilities {
    rational: RationalFunctions,
    float: FloatFunctions,
    complex: ComplexFunctions,
}

impl Capabilities {
    pub fn new(config: CalculatorConfig) -> Self {
        let context = Arc::new(Context::new(config));
        let complex = ComplexFunctions::new(Arc::clone(&context));
        let float = FloatFunctions::new(Arc::clone(&context), complex.clone());
        let rational = RationalFunctions::new(context, float.clone());
        Self { rational, float, complex }
    }

    pub fn get(&self, family: Family) -> &dyn Functions {
        match family {
            Family::Rational => &self.rational,
            Family::Float => &self.float,
            Family::Complex => &self.complex,
        }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.rational.context().config
    }
}

impl CapabilityResolver for Capabilities {
    fn resolve(&self, arguments: &[Number]) -> Option<&dyn Functions> {
        let family = resolve_family(arguments)?;
        trace!(family = family.name(), arguments = arguments.len(), "Resolved capability set");
        Some(self.get(family))
    }
}

// ---------------------------------------------------------------------------
// Argument helpers shared by the capability sets

pub(crate) fn not_supported(function: &str, family: Family) -> CalcError {
    CalcError::NotSupported { function: function.to_string(), representation: family.to_string() }
}

pub(crate) fn real_result(function: &str, value: f64) -> CalcResult<Number> {
    if value.is_finite() { Ok(Number::Float(value)) } else { Err(CalcError::non_finite(function)) }
}

pub(crate) fn complex_result(function: &str, value: Complex) -> CalcResult<Number> {
    if value.re.is_finite() && value.im.is_finite() {
        Ok(Number::Complex(value))
    } else {
        Err(CalcError::non_finite(function))
    }
}

/// Reject exact evaluations whose size parameter exceeds a configured limit.
pub(crate) fn check_limit(
    function: &str,
    setting: &'static str,
    limit: u64,
    value: &BigInt,
) -> CalcResult<u64> {
    match value.to_u64() {
        Some(v) if v <= limit => Ok(v),
        _ => {
            warn!(function, setting, limit, value = %value, "Exact evaluation rejected by configured limit");
            Err(CalcError::LimitExceeded { function: function.to_string(), setting, limit })
        }
    }
}

/// Integer-valued argument, in any representation.
pub(crate) fn integer_argument(function: &str, x: &Number) -> CalcResult<BigInt> {
    x.to_integer().ok_or_else(|| CalcError::invalid_argument(function, "argument must be an integer"))
}

pub(crate) fn small_integer_argument(function: &str, x: &Number) -> CalcResult<i64> {
    integer_argument(function, x)?
        .to_i64()
        .ok_or_else(|| CalcError::invalid_argument(function, "integer argument is out of range"))
}

/// Requested precision in significant digits, a positive integer.
pub(crate) fn precision_argument(function: &str, digits: &Number) -> CalcResult<u32> {
    match digits.to_integer() {
        Some(n) if n >= BigInt::from(1) => Ok(n.to_u32().unwrap_or(u32::MAX)),
        _ => Err(CalcError::invalid_argument(function, "precision must be a positive integer")),
    }
}

/// A mathematical constant rounded to the requested precision.
pub(crate) fn constant(function: &str, value: f64, digits: &Number) -> CalcResult<Number> {
    let digits = precision_argument(function, digits)?;
    Ok(Number::Float(rounding::round_to_precision(value, digits)))
}

pub(crate) fn random(context: &Context, digits: &Number) -> CalcResult<Number> {
    let digits = precision_argument("random", digits)?;
    Ok(Number::Float(rounding::truncate_to_places(context.uniform(), digits.min(constants::MAX_DIGITS))))
}

pub(crate) fn random_gaussian(context: &Context, digits: &Number) -> CalcResult<Number> {
    let digits = precision_argument("randomGaussian", digits)?;
    Ok(Number::Float(rounding::round_to_precision(context.gaussian(), digits)))
}
