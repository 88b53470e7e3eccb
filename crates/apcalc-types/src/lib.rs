//! apcalc Types
//!
//! This crate defines the numeric representation family shared by the apcalc
//! ecosystem (currently `apcalc-calculator` and `apcalc-cli`). Every value that
//! flows through the function dispatcher is a [`Number`], and every `Number`
//! carries a [`Representation`] tag whose rank orders the family from the
//! narrowest form (integers) to the widest (complex numbers).

#![deny(missing_docs)]
#![deny(clippy::all)]

mod error;
mod number;
mod parse;
mod representation;

pub use error::NumberError;
pub use number::Number;
pub use representation::Representation;

/// Complex number type used by [`Number::Complex`].
pub type Complex = num_complex::Complex64;
