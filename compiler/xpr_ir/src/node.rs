//! Expression tree nodes.
//!
//! The variant set is closed, so evaluation and rendering are single
//! matches over [`Node`] rather than trait objects per operation.

use std::fmt;
use std::sync::Arc;

use smallvec::SmallVec;
use xpr_stack::ensure_sufficient_stack;

use crate::var::{VarId, VarTable};

/// An n-ary numeric function: evaluated arguments in, one number out.
///
/// Implementations must tolerate any argument count, including none.
pub type FunctionFn = Arc<dyn Fn(&[f64]) -> f64 + Send + Sync>;

/// A nullary numeric constant.
pub type ConstantFn = Arc<dyn Fn() -> f64 + Send + Sync>;

/// The callable a [`Call`] node dispatches to.
#[derive(Clone)]
pub enum Callee {
    Function(FunctionFn),
    Constant(ConstantFn),
}

impl Callee {
    #[inline]
    pub fn invoke(&self, args: &[f64]) -> f64 {
        match self {
            Callee::Function(f) => f(args),
            Callee::Constant(c) => c(),
        }
    }
}

impl fmt::Debug for Callee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Callee::Function(_) => f.write_str("Function(..)"),
            Callee::Constant(_) => f.write_str("Constant(..)"),
        }
    }
}

/// A named call to a registered function or constant.
///
/// Constants are calls with no arguments.
#[derive(Clone, Debug)]
pub struct Call {
    name: String,
    args: Vec<Node>,
    callee: Callee,
}

impl Call {
    pub fn function(name: impl Into<String>, func: FunctionFn, args: Vec<Node>) -> Self {
        Call {
            name: name.into(),
            args,
            callee: Callee::Function(func),
        }
    }

    pub fn constant(name: impl Into<String>, constant: ConstantFn) -> Self {
        Call {
            name: name.into(),
            args: Vec::new(),
            callee: Callee::Constant(constant),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &[Node] {
        &self.args
    }

    pub fn callee(&self) -> &Callee {
        &self.callee
    }
}

/// A value-producing tree node.
#[derive(Clone, Debug)]
pub enum Node {
    Scalar(f64),
    Variable(VarId),
    /// Left-to-right sum of at least one term.
    Sum(Vec<Node>),
    /// Left-to-right product of at least one factor.
    Product(Vec<Node>),
    Negate(Box<Node>),
    Reciprocal(Box<Node>),
    Power {
        base: Box<Node>,
        exponent: Box<Node>,
    },
    /// Floating-point remainder, sign follows `left`.
    Modulus {
        left: Box<Node>,
        right: Box<Node>,
    },
    Call(Call),
    /// Result of a comma split. Its scalar value is the first element.
    Tuple(Vec<Node>),
}

impl Node {
    pub fn negate(node: Node) -> Self {
        Node::Negate(Box::new(node))
    }

    pub fn reciprocal(node: Node) -> Self {
        Node::Reciprocal(Box::new(node))
    }

    pub fn power(base: Node, exponent: Node) -> Self {
        Node::Power {
            base: Box::new(base),
            exponent: Box::new(exponent),
        }
    }

    pub fn modulus(left: Node, right: Node) -> Self {
        Node::Modulus {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Evaluate against the current variable values.
    ///
    /// Nothing is cached; every call walks the whole tree.
    pub fn value(&self, vars: &VarTable) -> f64 {
        ensure_sufficient_stack(|| match self {
            Node::Scalar(v) => *v,
            Node::Variable(id) => vars.get(*id).get(),
            Node::Sum(terms) => fold(terms, vars, |acc, v| acc + v),
            Node::Product(factors) => fold(factors, vars, |acc, v| acc * v),
            Node::Negate(inner) => -inner.value(vars),
            Node::Reciprocal(inner) => 1.0 / inner.value(vars),
            Node::Power { base, exponent } => base.value(vars).powf(exponent.value(vars)),
            Node::Modulus { left, right } => left.value(vars) % right.value(vars),
            Node::Call(call) => {
                let args: SmallVec<[f64; 4]> = call.args.iter().map(|a| a.value(vars)).collect();
                call.callee.invoke(&args)
            }
            Node::Tuple(items) => items.first().map_or(0.0, |first| first.value(vars)),
        })
    }

    /// Evaluate every element of a tuple; `None` for any other node.
    pub fn values(&self, vars: &VarTable) -> Option<Vec<f64>> {
        match self {
            Node::Tuple(items) => Some(items.iter().map(|item| item.value(vars)).collect()),
            _ => None,
        }
    }

    pub fn is_tuple(&self) -> bool {
        matches!(self, Node::Tuple(_))
    }

    /// Render with variable names and current values resolved from `vars`.
    pub fn display<'a>(&'a self, vars: &'a VarTable) -> NodeDisplay<'a> {
        NodeDisplay { node: self, vars }
    }
}

fn fold(nodes: &[Node], vars: &VarTable, op: impl Fn(f64, f64) -> f64) -> f64 {
    let mut iter = nodes.iter();
    let Some(first) = iter.next() else {
        return 0.0;
    };
    iter.fold(first.value(vars), |acc, node| op(acc, node.value(vars)))
}

/// Debug rendering of a node, e.g. `( x[2] + ( -3 ) )`.
pub struct NodeDisplay<'a> {
    node: &'a Node,
    vars: &'a VarTable,
}

impl NodeDisplay<'_> {
    fn child<'b>(&'b self, node: &'b Node) -> NodeDisplay<'b> {
        NodeDisplay {
            node,
            vars: self.vars,
        }
    }

    fn joined(&self, f: &mut fmt::Formatter<'_>, nodes: &[Node], sep: &str) -> fmt::Result {
        for (i, node) in nodes.iter().enumerate() {
            if i > 0 {
                f.write_str(sep)?;
            }
            write!(f, "{}", self.child(node))?;
        }
        Ok(())
    }
}

impl fmt::Display for NodeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self.node {
            Node::Scalar(v) => write!(f, "{v}"),
            Node::Variable(id) => {
                let var = self.vars.get(*id);
                write!(f, "{}[{}]", var.name(), var.get())
            }
            Node::Sum(terms) => {
                f.write_str("( ")?;
                self.joined(f, terms, " + ")?;
                f.write_str(" )")
            }
            Node::Product(factors) => {
                f.write_str("( ")?;
                self.joined(f, factors, " * ")?;
                f.write_str(" )")
            }
            Node::Negate(inner) => write!(f, "( -{} )", self.child(inner)),
            Node::Reciprocal(inner) => write!(f, "( 1/{} )", self.child(inner)),
            Node::Power { base, exponent } => {
                write!(f, "( {}^{} )", self.child(base), self.child(exponent))
            }
            Node::Modulus { left, right } => {
                write!(f, "( {}%{} )", self.child(left), self.child(right))
            }
            Node::Call(call) if call.args.is_empty() => f.write_str(&call.name),
            Node::Call(call) => {
                write!(f, "{}( ", call.name)?;
                self.joined(f, &call.args, ", ")?;
                f.write_str(" )")
            }
            Node::Tuple(items) => self.joined(f, items, ", "),
        })
    }
}
