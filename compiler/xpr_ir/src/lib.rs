//! Xpr IR - expression tree and variable storage.
//!
//! A parsed expression is a strictly owned tree of [`Node`]s. The only
//! sharing in the tree is variable identity: every occurrence of a name
//! stores the same [`VarId`], an index into the [`VarTable`] that owns the
//! mutable cells. Evaluation walks the tree on every call against that
//! table, so rebinding a variable is visible to all of its occurrences
//! without re-parsing.

mod node;
mod var;

pub use node::{Call, Callee, ConstantFn, FunctionFn, Node, NodeDisplay};
pub use var::{Bounds, VarId, VarTable, Variable};
