//! The split rules.
//!
//! A fragment is tested against the operator classes from loosest to
//! tightest binding. The first class whose character occurs in the fragment
//! splits it, and each piece is parsed recursively. Because groups are
//! already substituted and a split consumes every occurrence of its
//! character, pieces only contain tighter-binding operators.
//!
//! Fragments with no operator go through, in order: function prefix,
//! constant prefix, placeholder, number literal, identifier.

use std::sync::Arc;

use tracing::trace;
use xpr_ir::{Call, Node, VarTable};
use xpr_registry::Registry;
use xpr_stack::ensure_sufficient_stack;

use crate::brackets::{placeholder_interior, BracketHeap};
use crate::context::ParseContext;
use crate::error::{ParseError, ParseResult};

/// Characters besides ASCII letters that may start an identifier.
const IDENT_SYMBOLS: [char; 2] = ['§', '$'];

/// Operator classes in the order they are tried.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SplitClass {
    /// `,` between tuple elements.
    List,
    /// `+`
    Add,
    /// `-`, also unary minus as an empty leading term.
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`, split at the first occurrence only.
    Rem,
    /// `^`, split at the last occurrence only, so powers group left to right.
    Pow,
}

impl SplitClass {
    pub const PRECEDENCE: [SplitClass; 7] = [
        SplitClass::List,
        SplitClass::Add,
        SplitClass::Sub,
        SplitClass::Mul,
        SplitClass::Div,
        SplitClass::Rem,
        SplitClass::Pow,
    ];

    pub fn symbol(self) -> char {
        match self {
            SplitClass::List => ',',
            SplitClass::Add => '+',
            SplitClass::Sub => '-',
            SplitClass::Mul => '*',
            SplitClass::Div => '/',
            SplitClass::Rem => '%',
            SplitClass::Pow => '^',
        }
    }
}

/// Scratch state of one top-level parse.
pub(crate) struct Session<'r> {
    registry: &'r Registry,
    heap: BracketHeap,
    context: ParseContext,
}

impl<'r> Session<'r> {
    pub(crate) fn new(registry: &'r Registry) -> Self {
        Session {
            registry,
            heap: BracketHeap::new(),
            context: ParseContext::new(),
        }
    }

    /// Consume the session, keeping the discovered variables and reporting
    /// how many groups were substituted.
    pub(crate) fn finish(self) -> (VarTable, usize) {
        (self.context.into_variables(), self.heap.len())
    }

    pub(crate) fn fragment(&mut self, text: &str) -> ParseResult<Node> {
        ensure_sufficient_stack(|| self.fragment_inner(text))
    }

    #[tracing::instrument(level = "trace", skip(self))]
    fn fragment_inner(&mut self, text: &str) -> ParseResult<Node> {
        let substituted = self.heap.substitute(text.trim())?;
        let text = substituted.trim();

        for class in SplitClass::PRECEDENCE {
            if text.contains(class.symbol()) {
                trace!(?class, fragment = text, "split");
                return self.split(class, text);
            }
        }

        if let Some(call) = self.function_call(text)? {
            return Ok(call);
        }
        if let Some(constant) = self.constant(text) {
            return Ok(constant);
        }
        if let Some(interior) = placeholder_interior(text) {
            let group = self.heap.resolve(interior)?.to_owned();
            trace!(group = group.as_str(), "expand placeholder");
            return self.fragment(&group);
        }
        if let Some(value) = number(text) {
            return Ok(Node::Scalar(value));
        }
        if self.is_identifier(text) {
            return Ok(Node::Variable(self.context.variable(text)));
        }
        Err(ParseError::unexpected_end(text))
    }

    fn split(&mut self, class: SplitClass, text: &str) -> ParseResult<Node> {
        let symbol = class.symbol();
        match class {
            SplitClass::List => {
                let items = self.non_empty_pieces(text, symbol)?;
                collapse(items, Node::Tuple, text)
            }
            SplitClass::Add => {
                let terms = self.non_empty_pieces(text, symbol)?;
                collapse(terms, Node::Sum, text)
            }
            SplitClass::Sub => {
                let terms = self.leading_and_inverted(text, symbol, Node::negate)?;
                collapse(terms, Node::Sum, text)
            }
            SplitClass::Mul => {
                // Empty pieces are parsed too and fail as unexpected end.
                let factors = text
                    .split(symbol)
                    .map(|piece| self.fragment(piece))
                    .collect::<ParseResult<Vec<_>>>()?;
                Ok(Node::Product(factors))
            }
            SplitClass::Div => {
                let factors = self.leading_and_inverted(text, symbol, Node::reciprocal)?;
                if factors.is_empty() {
                    return Err(ParseError::unexpected_end(text));
                }
                Ok(Node::Product(factors))
            }
            SplitClass::Rem => {
                let (left, right) = self.binary(text, text.split_once(symbol))?;
                Ok(Node::modulus(left, right))
            }
            SplitClass::Pow => {
                let (base, exponent) = self.binary(text, text.rsplit_once(symbol))?;
                Ok(Node::power(base, exponent))
            }
        }
    }

    /// Parse every non-blank piece between occurrences of `symbol`.
    fn non_empty_pieces(&mut self, text: &str, symbol: char) -> ParseResult<Vec<Node>> {
        text.split(symbol)
            .filter(|piece| !piece.trim().is_empty())
            .map(|piece| self.fragment(piece))
            .collect()
    }

    /// The first piece as is (skipped when blank), every later non-blank
    /// piece wrapped by `invert`.
    fn leading_and_inverted(
        &mut self,
        text: &str,
        symbol: char,
        invert: fn(Node) -> Node,
    ) -> ParseResult<Vec<Node>> {
        let mut pieces = text.split(symbol);
        let mut nodes = Vec::new();
        if let Some(first) = pieces.next() {
            if !first.trim().is_empty() {
                nodes.push(self.fragment(first)?);
            }
        }
        for piece in pieces.filter(|piece| !piece.trim().is_empty()) {
            nodes.push(invert(self.fragment(piece)?));
        }
        Ok(nodes)
    }

    /// Parse both sides of a single split.
    fn binary(&mut self, text: &str, sides: Option<(&str, &str)>) -> ParseResult<(Node, Node)> {
        let Some((left, right)) = sides else {
            return Err(ParseError::unexpected_end(text));
        };
        Ok((self.fragment(left)?, self.fragment(right)?))
    }

    /// A fragment starting with exactly one registered function name.
    ///
    /// When several names are prefixes of the fragment the rule does not
    /// apply and the fragment moves on to the next rule.
    fn function_call(&mut self, text: &str) -> ParseResult<Option<Node>> {
        let registry = self.registry;
        let mut candidates = registry
            .functions()
            .filter(|(name, _)| !name.is_empty() && text.starts_with(name));
        let Some((name, func)) = candidates.next() else {
            return Ok(None);
        };
        if candidates.next().is_some() {
            trace!(fragment = text, "ambiguous function prefix");
            return Ok(None);
        }

        let remainder = &text[name.len()..];
        let args = if self.is_empty_group(remainder) {
            Vec::new()
        } else {
            match self.fragment(remainder)? {
                Node::Tuple(items) => items,
                single => vec![single],
            }
        };
        Ok(Some(Node::Call(Call::function(name, Arc::clone(func), args))))
    }

    /// A fragment starting with a registered constant name, first match in
    /// registration order.
    fn constant(&self, text: &str) -> Option<Node> {
        self.registry
            .constants()
            .find(|(name, _)| !name.is_empty() && text.starts_with(name))
            .map(|(name, constant)| Node::Call(Call::constant(name, Arc::clone(constant))))
    }

    /// `remainder` is exactly a placeholder for `()`.
    fn is_empty_group(&self, remainder: &str) -> bool {
        let remainder = remainder.trim();
        let Some(interior) = placeholder_interior(remainder) else {
            return false;
        };
        remainder.len() == interior.len() + 2
            && self
                .heap
                .resolve(interior)
                .is_ok_and(|group| group.trim().is_empty())
    }

    fn is_identifier(&self, text: &str) -> bool {
        let is_symbol = |c: char| IDENT_SYMBOLS.contains(&c);
        let mut chars = text.chars();
        let Some(first) = chars.next() else {
            return false;
        };
        (first.is_ascii_alphabetic() || is_symbol(first))
            && chars.all(|c| !c.is_whitespace())
            && !self.registry.is_constant(text)
            && !self.registry.is_function(text)
    }
}

/// A number literal: starts with a digit or `.` and parses as `f64`.
fn number(text: &str) -> Option<f64> {
    let first = text.chars().next()?;
    if first.is_ascii_digit() || first == '.' {
        text.parse().ok()
    } else {
        None
    }
}

/// Wrap two or more nodes, pass a single node through, reject none.
fn collapse(mut nodes: Vec<Node>, wrap: fn(Vec<Node>) -> Node, text: &str) -> ParseResult<Node> {
    if nodes.len() > 1 {
        return Ok(wrap(nodes));
    }
    nodes.pop().ok_or_else(|| ParseError::unexpected_end(text))
}
