//! Positional rebinding of expression variables.

use xpr_ir::VarId;

use crate::Expression;

/// An [`Expression`] with an ordered selection of its variables.
///
/// Each invocation writes its arguments into the selected variables and
/// re-evaluates the tree. Writes go to shared cells, so two callables bound
/// to the same expression see each other's assignments.
#[derive(Clone, Debug)]
pub struct BoundFn<'e> {
    expression: &'e Expression,
    slots: Vec<Option<VarId>>,
}

impl<'e> BoundFn<'e> {
    pub(crate) fn new(expression: &'e Expression, slots: Vec<Option<VarId>>) -> Self {
        BoundFn { expression, slots }
    }

    /// Number of positional slots, discard slots included.
    pub fn arity(&self) -> usize {
        self.slots.len()
    }

    /// The variable behind each slot; `None` marks a discard slot.
    pub fn slots(&self) -> &[Option<VarId>] {
        &self.slots
    }

    pub fn expression(&self) -> &'e Expression {
        self.expression
    }

    /// Bind `args` and evaluate to a single value.
    ///
    /// Arguments and slots are paired up to the shorter of the two.
    pub fn invoke(&self, args: &[f64]) -> f64 {
        self.assign(args);
        self.expression.value()
    }

    /// Bind `args` and evaluate every tuple element.
    ///
    /// A non-tuple expression yields a single element.
    pub fn invoke_multi(&self, args: &[f64]) -> Vec<f64> {
        self.assign(args);
        self.expression
            .multi_value()
            .unwrap_or_else(|| vec![self.expression.value()])
    }

    fn assign(&self, args: &[f64]) {
        let vars = self.expression.variables();
        for (slot, &arg) in self.slots.iter().zip(args) {
            if let Some(id) = slot {
                vars.get(*id).set(arg);
            }
        }
    }
}
