//! The constant and function tables handed to the parser.

use std::sync::Arc;

use tracing::debug;
use xpr_ir::{ConstantFn, FunctionFn};

use crate::builtins;
use crate::table::Table;

/// Constants and functions available to expressions.
#[derive(Clone)]
pub struct Registry {
    constants: Table<ConstantFn>,
    functions: Table<FunctionFn>,
}

impl Registry {
    /// A registry with nothing registered.
    pub fn empty() -> Self {
        Registry {
            constants: Table::new(),
            functions: Table::new(),
        }
    }

    /// A registry pre-populated with [`builtins::CONSTANTS`] and
    /// [`builtins::FUNCTIONS`].
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        for &(name, value) in builtins::CONSTANTS {
            registry.constants.insert(name, Arc::new(move || value));
        }
        for &(name, func) in builtins::FUNCTIONS {
            registry.functions.insert(name, Arc::new(func));
        }
        registry
    }

    /// Register a function, replacing any function of the same name.
    pub fn add_function<F>(&mut self, name: &str, func: F)
    where
        F: Fn(&[f64]) -> f64 + Send + Sync + 'static,
    {
        let replaced = self.functions.insert(name, Arc::new(func)).is_some();
        debug!(name, replaced, "registered function");
    }

    /// Register a constant, replacing any constant of the same name.
    pub fn add_constant<F>(&mut self, name: &str, constant: F)
    where
        F: Fn() -> f64 + Send + Sync + 'static,
    {
        let replaced = self.constants.insert(name, Arc::new(constant)).is_some();
        debug!(name, replaced, "registered constant");
    }

    /// Register a constant with a fixed value.
    pub fn add_value(&mut self, name: &str, value: f64) {
        self.add_constant(name, move || value);
    }

    /// Remove a function. Returns whether it was registered.
    pub fn remove_function(&mut self, name: &str) -> bool {
        let removed = self.functions.remove(name).is_some();
        debug!(name, removed, "removed function");
        removed
    }

    /// Remove a constant. Returns whether it was registered.
    pub fn remove_constant(&mut self, name: &str) -> bool {
        let removed = self.constants.remove(name).is_some();
        debug!(name, removed, "removed constant");
        removed
    }

    pub fn function(&self, name: &str) -> Option<&FunctionFn> {
        self.functions.get(name)
    }

    pub fn constant(&self, name: &str) -> Option<&ConstantFn> {
        self.constants.get(name)
    }

    pub fn is_function(&self, name: &str) -> bool {
        self.functions.contains(name)
    }

    pub fn is_constant(&self, name: &str) -> bool {
        self.constants.contains(name)
    }

    /// Functions in registration order.
    pub fn functions(&self) -> impl Iterator<Item = (&str, &FunctionFn)> {
        self.functions.iter()
    }

    /// Constants in registration order.
    pub fn constants(&self) -> impl Iterator<Item = (&str, &ConstantFn)> {
        self.constants.iter()
    }

    pub fn function_names(&self) -> impl Iterator<Item = &str> {
        self.functions.names()
    }

    pub fn constant_names(&self) -> impl Iterator<Item = &str> {
        self.constants.names()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
