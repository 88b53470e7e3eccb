use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of numeric representations, ordered along the promotion
/// chain `Integer < Rational < Float < Complex`.
///
/// A wider representation can hold every value of a narrower one, so mixing
/// representations in one call always widens to the maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Representation {
    /// Arbitrary size integer.
    Integer,
    /// Exact fraction of two arbitrary size integers.
    Rational,
    /// Binary floating point real.
    Float,
    /// Floating point complex number.
    Complex,
}

impl Representation {
    /// All representations, narrowest first.
    pub const ALL: [Self; 4] = [Self::Integer, Self::Rational, Self::Float, Self::Complex];

    /// Position in the promotion chain; a larger rank is a wider representation.
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Lowercase name used in messages.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Rational => "rational",
            Self::Float => "float",
            Self::Complex => "complex",
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_follows_declaration_order() {
        let ranks: Vec<u8> = Representation::ALL.iter().map(|r| r.rank()).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3]);
        assert!(Representation::Integer < Representation::Complex);
    }
}
