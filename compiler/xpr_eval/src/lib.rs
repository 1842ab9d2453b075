//! Evaluation layer: a parsed tree together with the variables it owns.
//!
//! An [`Expression`] is parsed once and evaluated many times. Variables are
//! rebound either by name ([`Expression::set`]) or positionally through a
//! [`BoundFn`] obtained from [`Expression::bind`].

mod binding;
mod expression;

pub use binding::BoundFn;
pub use expression::Expression;
