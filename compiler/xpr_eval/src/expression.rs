use std::fmt;

use tracing::trace;
use xpr_ir::{Node, VarTable, Variable};
use xpr_parse::ParseOutput;

use crate::binding::BoundFn;

/// A parsed expression and its free variables.
///
/// The tree refers to variables by [`xpr_ir::VarId`]; the table owned here
/// holds their values. Rebinding a variable is observed by every location
/// that names it.
#[derive(Debug)]
pub struct Expression {
    root: Node,
    variables: VarTable,
}

impl Expression {
    pub fn new(root: Node, variables: VarTable) -> Self {
        Expression { root, variables }
    }

    /// Evaluate the tree. A tuple yields its first element.
    pub fn value(&self) -> f64 {
        self.root.value(&self.variables)
    }

    /// Evaluate every element of a tuple root, in order.
    ///
    /// Returns `None` when the root is not a tuple.
    pub fn multi_value(&self) -> Option<Vec<f64>> {
        self.root.values(&self.variables)
    }

    pub fn is_tuple(&self) -> bool {
        self.root.is_tuple()
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn variables(&self) -> &VarTable {
        &self.variables
    }

    /// Variable names in order of first appearance.
    pub fn variable_names(&self) -> impl Iterator<Item = &str> {
        self.variables.names()
    }

    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables.by_name(name)
    }

    /// Assign `value` to the variable `name`.
    ///
    /// Returns `false` if the expression has no such variable. Bounds, if
    /// any, clamp the stored value.
    pub fn set(&self, name: &str, value: f64) -> bool {
        match self.variables.by_name(name) {
            Some(var) => {
                var.set(value);
                trace!(name, value = var.get(), "variable set");
                true
            }
            None => false,
        }
    }

    /// Current value of the variable `name`.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.variables.by_name(name).map(Variable::get)
    }

    /// Select variables by name for positional invocation.
    ///
    /// Names the expression does not contain become discard slots: they
    /// still consume an argument, which is then ignored.
    pub fn bind<I>(&self, names: I) -> BoundFn<'_>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let slots = names
            .into_iter()
            .map(|name| self.variables.lookup(name.as_ref()))
            .collect();
        BoundFn::new(self, slots)
    }
}

impl From<ParseOutput> for Expression {
    fn from(output: ParseOutput) -> Self {
        Expression::new(output.root, output.variables)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root.display(&self.variables))
    }
}
