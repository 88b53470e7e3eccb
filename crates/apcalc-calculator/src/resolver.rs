//! Type resolution
//!
//! Every argument maps to the capability family able to evaluate it. A call
//! is evaluated by the dominant family among its arguments: the widest one,
//! so that mixing an integer with a complex number evaluates in complex
//! arithmetic.

use apcalc_types::{Number, Representation};
use std::cmp::Ordering;
use std::fmt;

/// Capability families, narrowest first.
///
/// Integers have no family of their own; the rational family evaluates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Family {
    Rational,
    Float,
    Complex,
}

impl Family {
    pub const ALL: [Self; 3] = [Self::Rational, Self::Float, Self::Complex];

    pub const fn of(number: &Number) -> Self {
        Self::for_representation(number.representation())
    }

    pub const fn for_representation(representation: Representation) -> Self {
        match representation {
            Representation::Integer | Representation::Rational => Self::Rational,
            Representation::Float => Self::Float,
            Representation::Complex => Self::Complex,
        }
    }

    /// Specificity rank; the dominant family of a call has the highest rank.
    pub const fn rank(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Rational => "rational",
            Self::Float => "float",
            Self::Complex => "complex",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Join of `candidates` under their specificity order.
///
/// The incumbent is replaced only by a strictly greater candidate. Equal
/// candidates and candidates the order cannot compare keep the incumbent,
/// so with a partial order the outcome depends on argument order. `None` for
/// an empty input.
pub fn dominant<T, I>(candidates: I) -> Option<T>
where
    T: PartialOrd,
    I: IntoIterator<Item = T>,
{
    let mut dominant: Option<T> = None;
    for candidate in candidates {
        dominant = match dominant {
            Some(current) if candidate.partial_cmp(&current) != Some(Ordering::Greater) => {
                Some(current)
            }
            _ => Some(candidate),
        };
    }
    dominant
}

/// Dominant capability family of a call's arguments.
pub fn resolve_family(arguments: &[Number]) -> Option<Family> {
    dominant(arguments.iter().map(Family::of))
}
