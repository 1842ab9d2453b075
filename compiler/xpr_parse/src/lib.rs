//! Split-based parser for arithmetic expressions.
//!
//! There is no tokenizer and no grammar-driven descent. A fragment of text
//! is split on operator characters in a fixed order, loosest binding first,
//! and each piece is parsed recursively:
//!
//! | order | test                          | result                     |
//! |-------|-------------------------------|----------------------------|
//! | 1     | contains `,`                  | tuple                      |
//! | 2     | contains `+`                  | sum                        |
//! | 3     | contains `-`                  | sum of negated terms       |
//! | 4     | contains `*`                  | product                    |
//! | 5     | contains `/`                  | product of reciprocals     |
//! | 6     | contains `%`                  | modulus at the first `%`   |
//! | 7     | contains `^`                  | power at the last `^`      |
//! | 8     | one function name as prefix   | call                       |
//! | 9     | constant name as prefix       | nullary call               |
//! | 10    | `&N;` placeholder             | the parsed group `N`       |
//! | 11    | number literal                | scalar                     |
//! | 12    | identifier                    | variable                   |
//!
//! Parenthesised groups are hidden behind placeholders before splitting
//! (see [`brackets`]), which is what keeps inner precedence intact.
//!
//! `%` splits at its first occurrence and `^` at its last, so `2^3^2` is
//! `(2^3)^2`.

pub mod brackets;
mod context;
mod error;
mod grammar;

pub use brackets::BracketHeap;
pub use context::ParseContext;
pub use error::{ParseError, ParseResult};
pub use grammar::SplitClass;

use tracing::debug;
use xpr_ir::{Node, VarTable};
use xpr_registry::Registry;

use crate::grammar::Session;

/// Tree and variables produced by one parse.
#[derive(Debug)]
pub struct ParseOutput {
    pub root: Node,
    pub variables: VarTable,
}

/// Parser bound to a registry.
///
/// Holds no per-parse state, so one parser can serve any number of parses.
#[derive(Clone, Copy)]
pub struct Parser<'r> {
    registry: &'r Registry,
}

impl<'r> Parser<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Parser { registry }
    }

    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    /// Parse `text` into a tree.
    ///
    /// Fails on the first structural problem; the bracket heap and the
    /// discovered variables of a failed parse are dropped.
    pub fn parse(&self, text: &str) -> ParseResult<ParseOutput> {
        let mut session = Session::new(self.registry);
        let root = session.fragment(text)?;
        let (variables, groups) = session.finish();
        debug!(
            input = text,
            variables = variables.len(),
            groups,
            "parsed expression"
        );
        Ok(ParseOutput { root, variables })
    }
}

/// Parse `text` against `registry`.
pub fn parse(text: &str, registry: &Registry) -> ParseResult<ParseOutput> {
    Parser::new(registry).parse(text)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
