//! Dispatchable functions
//!
//! A [`Function`] is a named entry in the registry. Calling it validates the
//! argument count, resolves the capability set for the arguments, runs the
//! handler against that set and promotes the result.

use crate::arity::Arity;
use crate::error::{CalcError, CalcResult};
use crate::functions::Functions;
use apcalc_types::Number;
use std::fmt;

/// Maps a call's arguments to the capability set that evaluates it.
pub trait CapabilityResolver {
    /// `None` when the arguments name no family, i.e. the list is empty.
    fn resolve(&self, arguments: &[Number]) -> Option<&dyn Functions>;
}

/// Handler invoked with the resolved capability set and the raw arguments.
///
/// The argument count has been validated against the function's arity
/// before the handler runs, so indexing inside the window is safe. Handlers
/// of ranged functions branch on `arguments.len()`.
pub type Handler = fn(&dyn Functions, &[Number]) -> CalcResult<Number>;

pub trait Function: Send + Sync {
    /// Name used in error messages
    fn name(&self) -> &str;

    fn arity(&self) -> Arity;

    fn call(&self, resolver: &dyn CapabilityResolver, arguments: &[Number]) -> CalcResult<Number>;
}

/// Function with a static arity window and a plain handler.
#[derive(Clone)]
pub struct FixedFunction {
    name: String,
    arity: Arity,
    handler: Handler,
}

impl FixedFunction {
    pub fn new(name: impl Into<String>, arity: Arity, handler: Handler) -> Self {
        Self { name: name.into(), arity, handler }
    }
}

impl Function for FixedFunction {
    fn name(&self) -> &str {
        &self.name
    }

    fn arity(&self) -> Arity {
        self.arity
    }

    fn call(&self, resolver: &dyn CapabilityResolver, arguments: &[Number]) -> CalcResult<Number> {
        self.arity.validate(&self.name, arguments.len())?;
        let functions = resolver
            .resolve(arguments)
            .ok_or_else(|| CalcError::NoImplementation { function: self.name.clone() })?;
        let result = (self.handler)(functions, arguments)?;
        Ok(result.promote())
    }
}

impl fmt::Debug for FixedFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedFunction")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// Function taking exactly `count` arguments.
pub fn fixed_function(name: impl Into<String>, count: usize, handler: Handler) -> FixedFunction {
    FixedFunction::new(name, Arity::exact(count), handler)
}

/// Function taking between `min` and `max` arguments.
pub fn ranged_function(
    name: impl Into<String>,
    min: usize,
    max: usize,
    handler: Handler,
) -> FixedFunction {
    FixedFunction::new(name, Arity::range(min, max), handler)
}
