use crate::{Complex, NumberError, Representation};
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{FromPrimitive, One, ToPrimitive, Zero};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A value of the calculator's numeric representation family.
///
/// Values are immutable once built. Arithmetic never happens here; this type
/// only knows how to describe, convert and normalize itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Number {
    /// Arbitrary size integer
    Integer(BigInt),
    /// Exact fraction
    Rational(BigRational),
    /// Binary floating point real
    Float(f64),
    /// Floating point complex number
    Complex(Complex),
}

impl Number {
    /// Builds an exact fraction `numer / denom`, reduced to lowest terms.
    pub fn ratio(numer: impl Into<BigInt>, denom: impl Into<BigInt>) -> Result<Self, NumberError> {
        let denom = denom.into();
        if denom.is_zero() {
            return Err(NumberError::ZeroDenominator);
        }
        Ok(Self::Rational(BigRational::new(numer.into(), denom)))
    }

    /// Builds a complex number from its parts.
    pub const fn complex(re: f64, im: f64) -> Self {
        Self::Complex(Complex::new(re, im))
    }

    /// Representation tag of this value.
    pub const fn representation(&self) -> Representation {
        match self {
            Self::Integer(_) => Representation::Integer,
            Self::Rational(_) => Representation::Rational,
            Self::Float(_) => Representation::Float,
            Self::Complex(_) => Representation::Complex,
        }
    }

    /// True unless this is a complex number with a non-zero imaginary part.
    pub fn is_real(&self) -> bool {
        match self {
            Self::Complex(c) => c.im == 0.0,
            _ => true,
        }
    }

    /// True when the value equals zero.
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Integer(i) => i.is_zero(),
            Self::Rational(r) => r.is_zero(),
            Self::Float(f) => *f == 0.0,
            Self::Complex(c) => c.re == 0.0 && c.im == 0.0,
        }
    }

    /// True when the value is a (finite, real) whole number.
    pub fn is_integral(&self) -> bool {
        match self {
            Self::Integer(_) => true,
            Self::Rational(r) => r.is_integer(),
            Self::Float(f) => f.is_finite() && f.fract() == 0.0,
            Self::Complex(c) => c.im == 0.0 && c.re.is_finite() && c.re.fract() == 0.0,
        }
    }

    /// Sign of a real value as `-1`, `0` or `1`; `None` when the value has an
    /// imaginary part. NaN reports `None` as well.
    pub fn signum(&self) -> Option<i8> {
        let ordering = match self {
            Self::Integer(i) => i.sign().cmp(&num_bigint::Sign::NoSign),
            Self::Rational(r) => r.cmp(&BigRational::zero()),
            Self::Float(f) => f.partial_cmp(&0.0)?,
            Self::Complex(c) if c.im == 0.0 => c.re.partial_cmp(&0.0)?,
            Self::Complex(_) => return None,
        };
        Some(ordering as i8)
    }

    /// Nearest `f64` of a real value.
    ///
    /// Fails for complex values with an imaginary part and for exact values
    /// whose magnitude overflows `f64`.
    pub fn to_f64(&self) -> Result<f64, NumberError> {
        let value = match self {
            Self::Integer(i) => i.to_f64(),
            Self::Rational(r) => r.to_f64(),
            Self::Float(f) => Some(*f),
            Self::Complex(c) if c.im == 0.0 => Some(c.re),
            Self::Complex(_) => None,
        };
        value
            .filter(|v| v.is_finite())
            .ok_or_else(|| NumberError::not_representable(self, "float"))
    }

    /// The value as a complex number.
    pub fn to_complex(&self) -> Result<Complex, NumberError> {
        match self {
            Self::Complex(c) => Ok(*c),
            other => other
                .to_f64()
                .map(|re| Complex::new(re, 0.0))
                .map_err(|_| NumberError::not_representable(self, "complex")),
        }
    }

    /// Exact rational value of a real number. Floats convert through their
    /// exact binary expansion; non-finite floats and complex values with an
    /// imaginary part have none.
    pub fn to_rational(&self) -> Option<BigRational> {
        match self {
            Self::Integer(i) => Some(BigRational::from_integer(i.clone())),
            Self::Rational(r) => Some(r.clone()),
            Self::Float(f) => BigRational::from_float(*f),
            Self::Complex(c) if c.im == 0.0 => BigRational::from_float(c.re),
            Self::Complex(_) => None,
        }
    }

    /// The value as an integer, when it is integral.
    pub fn to_integer(&self) -> Option<BigInt> {
        if !self.is_integral() {
            return None;
        }
        match self {
            Self::Integer(i) => Some(i.clone()),
            Self::Rational(r) => Some(r.to_integer()),
            Self::Float(f) => BigInt::from_f64(*f),
            Self::Complex(c) => BigInt::from_f64(c.re),
        }
    }

    /// Narrows the value to the most specific representation it fits.
    ///
    /// A complex number with a zero imaginary part becomes a float and a
    /// fraction with denominator one becomes an integer. Floats are kept as
    /// floats even when integral. Applying `promote` twice changes nothing.
    #[must_use]
    pub fn promote(self) -> Self {
        match self {
            Self::Complex(c) if c.im == 0.0 => Self::Float(c.re),
            Self::Rational(r) if r.denom().is_one() => Self::Integer(r.to_integer()),
            other => other,
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Integer(BigInt::from(value))
    }
}

impl From<BigInt> for Number {
    fn from(value: BigInt) -> Self {
        Self::Integer(value)
    }
}

impl From<BigRational> for Number {
    fn from(value: BigRational) -> Self {
        Self::Rational(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<Complex> for Number {
    fn from(value: Complex) -> Self {
        Self::Complex(value)
    }
}

impl From<Number> for String {
    fn from(value: Number) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for Number {
    type Error = NumberError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// Floats use the `Debug` form so that integral floats keep their decimal
// point ("2.0") and parse back as floats.
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Rational(r) => write!(f, "{}/{}", r.numer(), r.denom()),
            Self::Float(x) => write!(f, "{x:?}"),
            Self::Complex(c) => {
                let sign = if c.im.is_sign_negative() { '-' } else { '+' };
                write!(f, "{:?}{}{:?}i", c.re, sign, c.im.abs())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn promote_narrows_zero_imaginary_part() {
        let promoted = Number::complex(2.5, 0.0).promote();
        assert_eq!(promoted, Number::Float(2.5));
    }

    #[test]
    fn promote_narrows_whole_fraction() {
        let promoted = Number::ratio(6, 3).unwrap().promote();
        assert_eq!(promoted, Number::from(2));
    }

    #[test]
    fn promote_keeps_integral_float() {
        assert_eq!(Number::Float(4.0).promote(), Number::Float(4.0));
    }

    #[test]
    fn ratio_rejects_zero_denominator() {
        assert_eq!(Number::ratio(1, 0), Err(NumberError::ZeroDenominator));
    }

    #[test]
    fn to_f64_rejects_imaginary_part() {
        assert!(Number::complex(1.0, 1.0).to_f64().is_err());
        assert_eq!(Number::complex(1.5, 0.0).to_f64(), Ok(1.5));
    }

    #[test]
    fn to_f64_rejects_huge_integers() {
        let huge = Number::Integer(BigInt::from(10).pow(400));
        assert!(matches!(huge.to_f64(), Err(NumberError::NotRepresentable { .. })));
    }

    #[test]
    fn integral_checks_cover_every_representation() {
        assert!(Number::from(7).is_integral());
        assert!(Number::ratio(8, 4).unwrap().is_integral());
        assert!(!Number::ratio(1, 4).unwrap().is_integral());
        assert!(Number::Float(-3.0).is_integral());
        assert!(!Number::Float(0.5).is_integral());
        assert!(!Number::complex(1.0, 2.0).is_integral());
        assert_eq!(Number::Float(-3.0).to_integer(), Some(BigInt::from(-3)));
    }

    #[test]
    fn signum_of_real_values() {
        assert_eq!(Number::from(-4).signum(), Some(-1));
        assert_eq!(Number::ratio(0, 5).unwrap().signum(), Some(0));
        assert_eq!(Number::Float(0.25).signum(), Some(1));
        assert_eq!(Number::complex(-2.0, 0.0).signum(), Some(-1));
        assert_eq!(Number::complex(1.0, 1.0).signum(), None);
    }

    #[test]
    fn display_forms() {
        assert_eq!(Number::from(-12).to_string(), "-12");
        assert_eq!(Number::ratio(-3, 4).unwrap().to_string(), "-3/4");
        assert_eq!(Number::Float(2.0).to_string(), "2.0");
        assert_eq!(Number::complex(1.5, -2.0).to_string(), "1.5-2.0i");
        assert_eq!(Number::complex(0.0, 1.0).to_string(), "0.0+1.0i");
    }
}
