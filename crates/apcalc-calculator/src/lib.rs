//! Function dispatch for the apcalc calculator.
//!
//! A call names a function and passes a list of [`Number`]s. The
//! [`Calculator`] looks the name up in its [`FunctionRegistry`], validates
//! the argument count against the function's [`Arity`], resolves the
//! dominant representation [`Family`] among the arguments, evaluates the
//! function with that family's capability set and narrows the result to the
//! most specific representation that holds it.
//!
//! ```
//! use apcalc_calculator::Calculator;
//! use apcalc_types::Number;
//!
//! let calculator = Calculator::new();
//! let sum = calculator.function("add", &[Number::ratio(1, 2).unwrap(), Number::ratio(1, 2).unwrap()]);
//! assert_eq!(sum, Ok(Number::from(1)));
//! ```

/// Argument-count windows
pub mod arity;
mod built_in;
/// The dispatch orchestrator
pub mod calculator;
/// Calculator limits and their loading
pub mod config;
pub mod error;
/// Registry entries and the handler contract
pub mod function;
pub mod functions;
/// Numeric kernels used by the capability sets
pub mod kernels;
pub mod registry;
pub mod resolver;

pub use apcalc_types::{Complex, Number, NumberError, Representation};
pub use arity::Arity;
pub use calculator::Calculator;
pub use config::CalculatorConfig;
pub use error::{CalcError, CalcResult};
pub use function::{CapabilityResolver, FixedFunction, Function, Handler, fixed_function, ranged_function};
pub use functions::{Capabilities, ComplexFunctions, FloatFunctions, Functions, RationalFunctions};
pub use registry::FunctionRegistry;
pub use resolver::{Family, dominant, resolve_family};
