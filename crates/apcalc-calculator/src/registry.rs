use crate::error::{CalcError, CalcResult};
use crate::function::{CapabilityResolver, Function};
use apcalc_types::Number;
use std::collections::HashMap;
use std::fmt;

/// Name-keyed table of dispatchable functions.
///
/// The key is what callers look functions up by; it usually matches the
/// function's own name but does not have to.
pub struct FunctionRegistry {
    functions: HashMap<String, Box<dyn Function>>,
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Self { functions: HashMap::new() }
    }

    /// Register `function` under `key`, replacing any previous entry.
    pub fn register(&mut self, key: impl Into<String>, function: Box<dyn Function>) {
        self.functions.insert(key.into(), function);
    }

    pub fn get(&self, key: &str) -> Option<&dyn Function> {
        self.functions.get(key).map(|f| f.as_ref())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.functions.contains_key(key)
    }

    /// Look up `key` and call it.
    pub fn invoke(
        &self,
        key: &str,
        resolver: &dyn CapabilityResolver,
        arguments: &[Number],
    ) -> CalcResult<Number> {
        let function = self
            .get(key)
            .ok_or_else(|| CalcError::UnknownFunction { name: key.to_string() })?;
        function.call(resolver, arguments)
    }

    /// Registered keys, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionRegistry").field("functions", &self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CalculatorConfig;
    use crate::function::fixed_function;
    use crate::functions::{Capabilities, Functions};

    fn one(_: &dyn Functions, _: &[Number]) -> CalcResult<Number> {
        Ok(Number::from(1))
    }

    fn two(_: &dyn Functions, _: &[Number]) -> CalcResult<Number> {
        Ok(Number::from(2))
    }

    #[test]
    fn unknown_key_is_reported_by_name() {
        let registry = FunctionRegistry::new();
        let capabilities = Capabilities::new(CalculatorConfig::default());
        let error = registry.invoke("doesNotExist", &capabilities, &[Number::from(1)]).unwrap_err();
        assert_eq!(error.to_string(), "Invalid function: doesNotExist");
    }

    #[test]
    fn later_registration_replaces_earlier() {
        let mut registry = FunctionRegistry::new();
        registry.register("f", Box::new(fixed_function("f", 1, one)));
        registry.register("f", Box::new(fixed_function("f", 1, two)));
        let capabilities = Capabilities::new(CalculatorConfig::default());
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.invoke("f", &capabilities, &[Number::from(0)]), Ok(Number::from(2)));
    }

    #[test]
    fn key_and_function_name_may_differ() {
        let mut registry = FunctionRegistry::new();
        registry.register("n", Box::new(fixed_function("precision", 2, one)));
        assert!(registry.contains("n"));
        assert!(!registry.contains("precision"));
        assert_eq!(registry.get("n").map(|f| f.name()), Some("precision"));
    }

    #[test]
    fn names_are_sorted() {
        let mut registry = FunctionRegistry::new();
        for key in ["sin", "abs", "cos"] {
            registry.register(key, Box::new(fixed_function(key, 1, one)));
        }
        assert_eq!(registry.names(), vec!["abs", "cos", "sin"]);
        assert!(format!("{registry:?}").contains("abs"));
    }
}
