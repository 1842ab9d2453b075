//! Variable rebinding through the facade.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use xprc::ExpressionParser;

#[test]
fn rebinding_reflects_latest_value() {
    let expr = ExpressionParser::new().parse("x*x").unwrap();
    let f = expr.bind(["x"]);
    assert_eq!(f.invoke(&[5.0]), 25.0);
    assert_eq!(f.invoke(&[7.0]), 49.0);
}

#[test]
fn multi_value_invocation() {
    let expr = ExpressionParser::new().parse("x, x*2").unwrap();
    assert_eq!(expr.bind(["x"]).invoke_multi(&[3.0]), vec![3.0, 6.0]);
}

#[test]
fn shared_identity_across_locations() {
    let expr = ExpressionParser::new().parse("x + sqrt(x) + x^2").unwrap();
    assert_eq!(expr.variables().len(), 1);
    assert_eq!(expr.bind(["x"]).invoke(&[4.0]), 4.0 + 2.0 + 16.0);
}

#[test]
fn two_variable_function() {
    let expr = ExpressionParser::new().parse("sqrt(x^2 + y^2)").unwrap();
    let hypot = expr.bind(["x", "y"]);
    assert_eq!(hypot.invoke(&[3.0, 4.0]), 5.0);
    assert_eq!(hypot.invoke(&[5.0, 12.0]), 13.0);
}

#[test]
fn discard_slot_consumes_argument() {
    let expr = ExpressionParser::new().parse("y - 1").unwrap();
    let f = expr.bind(["nope", "y"]);
    assert_eq!(f.invoke(&[1000.0, 3.0]), 2.0);
}

#[test]
fn mismatched_lengths_pair_the_shorter() {
    let expr = ExpressionParser::new().parse("a + b").unwrap();
    assert_eq!(expr.bind(["a"]).invoke(&[1.0, 2.0]), 1.0);
    assert_eq!(expr.bind(["a", "b"]).invoke(&[5.0]), 5.0);
}

#[test]
fn bounded_variable_clamps_invocations() {
    let expr = ExpressionParser::new().parse("t * 10").unwrap();
    expr.variable("t").unwrap().set_bounds(0.0, 1.0);
    let f = expr.bind(["t"]);
    assert_eq!(f.invoke(&[0.5]), 5.0);
    assert_eq!(f.invoke(&[3.0]), 10.0);
    assert_eq!(f.invoke(&[-3.0]), 0.0);
}
