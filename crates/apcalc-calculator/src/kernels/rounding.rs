//! Decimal rounding and ulp arithmetic on `f64`

use super::constants::MAX_DIGITS;

/// Round to `digits` significant decimal digits.
///
/// Precisions of 17 digits or more return `x` unchanged.
pub fn round_to_precision(x: f64, digits: u32) -> f64 {
    if digits >= MAX_DIGITS || x == 0.0 || !x.is_finite() {
        return x;
    }
    let digits = digits.max(1) as usize;
    // Scientific formatting performs correctly rounded decimal conversion.
    format!("{:.*e}", digits - 1, x).parse().unwrap_or(x)
}

/// Round to `places` digits after the decimal point (negative places round
/// to tens, hundreds, ...).
pub fn round_to_places(x: f64, places: i32) -> f64 {
    if !x.is_finite() {
        return x;
    }
    if places >= 0 {
        let places = places.min(340) as usize;
        format!("{x:.places$}").parse().unwrap_or(x)
    } else {
        let step = 10f64.powi(-places);
        (x / step).round() * step
    }
}

/// Truncate toward zero to `places` decimal places.
pub fn truncate_to_places(x: f64, places: u32) -> f64 {
    let scale = 10f64.powi(places as i32);
    let truncated = (x * scale).trunc() / scale;
    if truncated.is_finite() { truncated } else { x }
}

/// Smallest `f64` greater than `x`.
pub fn next_up(x: f64) -> f64 {
    if x.is_nan() || x == f64::INFINITY {
        return x;
    }
    if x == 0.0 {
        return f64::from_bits(1);
    }
    let bits = x.to_bits();
    if x > 0.0 { f64::from_bits(bits + 1) } else { f64::from_bits(bits - 1) }
}

/// Largest `f64` less than `x`.
pub fn next_down(x: f64) -> f64 {
    -next_up(-x)
}

/// Step from `x` toward `direction`; `direction` itself when equal.
pub fn next_after(x: f64, direction: f64) -> f64 {
    if x < direction {
        next_up(x)
    } else if x > direction {
        next_down(x)
    } else {
        direction
    }
}

/// Distance from `|x|` to the next larger representable magnitude.
pub fn ulp(x: f64) -> f64 {
    let x = x.abs();
    if x == f64::MAX {
        return x - next_down(x);
    }
    next_up(x) - x
}
