use crate::arity::Arity;
use crate::built_in::built_in_functions;
use crate::config::CalculatorConfig;
use crate::error::CalcResult;
use crate::function::Function;
use crate::functions::Capabilities;
use crate::registry::FunctionRegistry;
use apcalc_types::Number;
use tracing::{debug, trace};

/// Function-call entry point: looks a function up by name, checks its
/// arity, picks the capability set for the arguments and returns the
/// promoted result.
pub struct Calculator {
    registry: FunctionRegistry,
    capabilities: Capabilities,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default())
    }

    pub fn with_config(config: CalculatorConfig) -> Self {
        let mut registry = FunctionRegistry::new();
        for (key, function) in built_in_functions() {
            registry.register(key, Box::new(function));
        }
        debug!(functions = registry.len(), "Calculator initialized");
        Self { registry, capabilities: Capabilities::new(config) }
    }

    /// Call the function registered as `name`.
    pub fn function(&self, name: &str, arguments: &[Number]) -> CalcResult<Number> {
        debug!(
            function = name,
            arguments = arguments.len(),
            "Dispatching function call"
        );
        let result = self.registry.invoke(name, &self.capabilities, arguments);
        match &result {
            Ok(value) => {
                trace!(function = name, representation = %value.representation(), "Promoted result")
            }
            Err(error) => {
                debug!(function = name, category = error.category(), error = %error, "Function call failed")
            }
        }
        result
    }

    /// Register `function` under `name`, replacing any existing entry.
    pub fn set_function(&mut self, name: impl Into<String>, function: Box<dyn Function>) {
        self.registry.register(name, function);
    }

    pub fn signature(&self, name: &str) -> Option<Arity> {
        self.registry.get(name).map(|f| f.arity())
    }

    /// Every registered key with its arity window, sorted by key.
    pub fn signatures(&self) -> Vec<(&str, Arity)> {
        self.registry
            .names()
            .into_iter()
            .filter_map(|name| self.signature(name).map(|arity| (name, arity)))
            .collect()
    }

    pub fn config(&self) -> &CalculatorConfig {
        self.capabilities.config()
    }
}
