//! Global variable storage
//!
//! One `Environment` exists per interpreter run. There is no scope nesting:
//! loops, branches, and blocks all read and write the same mapping, so a
//! loop's counter variable survives the loop. That leakage is an observable
//! property of the language, not an accident.

use crate::ast::FunctionDecl;
use crate::value::Value;
use std::collections::HashMap;

/// The single mutable name-to-value mapping for one run
#[derive(Debug, Clone, Default)]
pub struct Environment {
    variables: HashMap<String, Value>,
    /// Function table, populated only by the dead `FunctionDecl` grammar
    /// and never read back
    functions: HashMap<String, FunctionDecl>,
}

impl Environment {
    /// Create an empty environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind or overwrite a variable; declaration and reassignment are the
    /// same operation
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.variables.insert(name.into(), value);
    }

    /// Read a variable; unbound names read as `Null`, never an error
    pub fn get(&self, name: &str) -> Value {
        self.variables.get(name).cloned().unwrap_or(Value::Null)
    }

    /// True when the name has a binding
    pub fn is_defined(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Number of bound variables
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// True when no variable is bound
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Register a function declaration (inert: nothing ever invokes one)
    pub fn define_function(&mut self, decl: FunctionDecl) {
        self.functions.insert(decl.name.clone(), decl);
    }

    /// Number of registered functions
    pub fn function_count(&self) -> usize {
        self.functions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_define_and_get() {
        let mut env = Environment::new();
        env.define("x", Value::Number(1.0));
        assert_eq!(env.get("x"), Value::Number(1.0));
        assert!(env.is_defined("x"));
    }

    #[test]
    fn test_unbound_reads_as_null() {
        let env = Environment::new();
        assert_eq!(env.get("missing"), Value::Null);
        assert!(!env.is_defined("missing"));
    }

    #[test]
    fn test_redefine_overwrites() {
        let mut env = Environment::new();
        env.define("x", Value::Number(1.0));
        env.define("x", Value::Str("\"two\"".to_string()));
        assert_eq!(env.get("x"), Value::Str("\"two\"".to_string()));
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn test_function_registration_is_inert() {
        let mut env = Environment::new();
        env.define_function(FunctionDecl {
            name: "noop".to_string(),
            params: vec![],
            body: vec![],
        });
        assert_eq!(env.function_count(), 1);
        // Registering a function binds no variable
        assert_eq!(env.get("noop"), Value::Null);
    }
}
