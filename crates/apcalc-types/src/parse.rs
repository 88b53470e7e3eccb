//! Literal parsing for [`Number`].
//!
//! Accepted forms:
//!   * integers: `42`, `-7`, `1_000`, `0x1f`, `0o17`, `0b101`
//!   * fractions: `3/4`, `-10/6`
//!   * floats: `1.5`, `2e-3`, `-0.25`
//!   * complex numbers: `1.5+2i`, `-3i`, `i`, `2-1e-3i`

use crate::{Complex, Number, NumberError};
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;
use std::str::FromStr;

impl FromStr for Number {
    type Err = NumberError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let literal: String = input.trim().chars().filter(|c| *c != '_').collect();
        if literal.is_empty() {
            return Err(NumberError::parse(input, "empty literal"));
        }
        if let Some(body) = literal.strip_suffix('i') {
            return parse_complex(input, body);
        }
        if let Some((numer, denom)) = literal.split_once('/') {
            return parse_rational(input, numer, denom);
        }
        if let Some(integer) = parse_integer(&literal) {
            return Ok(Self::Integer(integer));
        }
        parse_float(input, &literal).map(Self::Float)
    }
}

fn parse_integer(literal: &str) -> Option<BigInt> {
    let (negative, unsigned) = match literal.as_bytes().first() {
        Some(b'-') => (true, &literal[1..]),
        Some(b'+') => (false, &literal[1..]),
        _ => (false, literal),
    };
    let (radix, digits) = match unsigned.get(..2) {
        Some("0x" | "0X") => (16, &unsigned[2..]),
        Some("0o" | "0O") => (8, &unsigned[2..]),
        Some("0b" | "0B") => (2, &unsigned[2..]),
        _ => (10, unsigned),
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    let value = BigInt::parse_bytes(digits.as_bytes(), radix)?;
    Some(if negative { -value } else { value })
}

fn parse_float(input: &str, literal: &str) -> Result<f64, NumberError> {
    match literal.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        Ok(_) => Err(NumberError::parse(input, "value is not finite")),
        Err(_) => Err(NumberError::parse(input, "not a valid number")),
    }
}

fn parse_rational(input: &str, numer: &str, denom: &str) -> Result<Number, NumberError> {
    let numer = parse_integer(numer)
        .ok_or_else(|| NumberError::parse(input, "numerator is not an integer"))?;
    let denom = parse_integer(denom)
        .ok_or_else(|| NumberError::parse(input, "denominator is not an integer"))?;
    if denom.is_zero() {
        return Err(NumberError::ZeroDenominator);
    }
    Ok(Number::Rational(BigRational::new(numer, denom)))
}

/// `body` is the literal without its trailing `i`.
fn parse_complex(input: &str, body: &str) -> Result<Number, NumberError> {
    let bytes = body.as_bytes();
    let split = (1..bytes.len())
        .rev()
        .find(|&i| matches!(bytes[i], b'+' | b'-') && !matches!(bytes[i - 1], b'e' | b'E'));

    let (re, im) = match split {
        Some(i) => (parse_float(input, &body[..i])?, &body[i..]),
        None => (0.0, body),
    };
    let im = match im {
        "" | "+" => 1.0,
        "-" => -1.0,
        text => parse_float(input, text)?,
    };
    Ok(Number::Complex(Complex::new(re, im)))
}
