//! xpr: parse arithmetic text once, evaluate it many times.
//!
//! ```text
//! text ──► bracket substitution ──► split-parse ──► Expression
//!                                                      │
//!                                      set / bind ──► value()
//! ```
//!
//! [`ExpressionParser`] owns the function and constant registry. Parsing
//! borrows it, so the registry can be changed between parses but not during
//! one.
//!
//! ```
//! let parser = xprc::ExpressionParser::new();
//! let expr = parser.parse("x^2 + 1").unwrap();
//! let f = expr.bind(["x"]);
//! assert_eq!(f.invoke(&[3.0]), 10.0);
//! ```

use std::sync::Once;

use tracing::debug;

pub use xpr_eval::{BoundFn, Expression};
pub use xpr_ir::{Bounds, Node, VarId, VarTable, Variable};
pub use xpr_parse::{ParseError, ParseResult};
pub use xpr_registry::{builtins, Registry};

/// Parses expressions against an owned registry.
///
/// `new` starts from the default function and constant tables.
#[derive(Clone, Default)]
pub struct ExpressionParser {
    registry: Registry,
}

impl ExpressionParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parser over a caller-built registry, e.g. [`Registry::empty`].
    pub fn with_registry(registry: Registry) -> Self {
        ExpressionParser { registry }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// Register or replace an n-ary function.
    ///
    /// Parsing refuses to pick between function names that are prefixes of
    /// each other, so `f` and `ff` together make `ff(..)` unresolvable.
    pub fn add_function<F>(&mut self, name: &str, func: F)
    where
        F: Fn(&[f64]) -> f64 + Send + Sync + 'static,
    {
        self.registry.add_function(name, func);
    }

    /// Register or replace a constant.
    pub fn add_constant<F>(&mut self, name: &str, constant: F)
    where
        F: Fn() -> f64 + Send + Sync + 'static,
    {
        self.registry.add_constant(name, constant);
    }

    pub fn remove_function(&mut self, name: &str) -> bool {
        self.registry.remove_function(name)
    }

    pub fn remove_constant(&mut self, name: &str) -> bool {
        self.registry.remove_constant(name)
    }

    pub fn function_names(&self) -> impl Iterator<Item = &str> {
        self.registry.function_names()
    }

    pub fn constant_names(&self) -> impl Iterator<Item = &str> {
        self.registry.constant_names()
    }

    /// Parse `text` into a reusable expression.
    pub fn parse(&self, text: &str) -> ParseResult<Expression> {
        xpr_parse::parse(text, &self.registry).map(Expression::from)
    }

    /// Parse and evaluate `text` in one step.
    ///
    /// Variables read as `0.0`.
    pub fn evaluate(&self, text: &str) -> ParseResult<f64> {
        let value = self.parse(text)?.value();
        debug!(input = text, value, "evaluated");
        Ok(value)
    }
}

/// Evaluate `text` with the default registry.
pub fn eval(text: &str) -> ParseResult<f64> {
    ExpressionParser::new().evaluate(text)
}

static TRACING_INIT: Once = Once::new();

/// Install a hierarchical tracing subscriber if `RUST_LOG` is set.
///
/// Safe to call more than once; only the first call has an effect.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    });
}
