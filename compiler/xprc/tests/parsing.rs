//! End-to-end parsing and evaluation through the public facade.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use xprc::{eval, ExpressionParser, ParseError};

#[test]
fn precedence_of_literal_arithmetic() {
    assert_eq!(eval("2+3*4").unwrap(), 14.0);
    assert_eq!(eval("(2+3)*4").unwrap(), 20.0);
    assert_eq!(eval("10-4-3").unwrap(), 3.0);
    assert_eq!(eval("2*3^2").unwrap(), 18.0);
    assert_eq!(eval("-3^2").unwrap(), -9.0);
    assert_eq!(eval("17%5").unwrap(), 2.0);
}

#[test]
fn power_groups_left_to_right() {
    assert_eq!(eval("2^3^2").unwrap(), 64.0);
}

#[test]
fn function_call_with_tuple_arguments() {
    assert_eq!(eval("max(1, 7, 3)").unwrap(), 7.0);
    assert_eq!(eval("min(4, 2)").unwrap(), 2.0);
    assert_eq!(eval("sqrt(16)+1").unwrap(), 5.0);
}

#[test]
fn constants_resolve() {
    assert_eq!(eval("PI").unwrap(), std::f64::consts::PI);
    assert_eq!(eval("Infinity").unwrap(), f64::INFINITY);
}

#[test]
fn supplementary_builtins() {
    assert_eq!(eval("fact(5)").unwrap(), 120.0);
    assert_eq!(eval("binom(5, 2)").unwrap(), 10.0);
    assert_eq!(eval("round(2.5)").unwrap(), 2.0);
    assert_eq!(eval("log(8, 2)").unwrap(), 3.0);
}

#[test]
fn random_sampler_in_unit_interval() {
    for _ in 0..32 {
        let v = eval("rnd()").unwrap();
        assert!((0.0..1.0).contains(&v), "{v} out of range");
    }
}

#[test]
fn division_by_zero_is_not_an_error() {
    assert_eq!(eval("1/0").unwrap(), f64::INFINITY);
    assert!(eval("0/0").unwrap().is_nan());
}

#[test]
fn malformed_input_reports_unexpected_end() {
    for text in ["", "2*", "**", "2x", "+"] {
        assert!(
            matches!(eval(text), Err(ParseError::UnexpectedEnd { .. })),
            "`{text}` should fail"
        );
    }
}

#[test]
fn unmatched_bracket_is_reported() {
    let err = eval("(1+2").unwrap_err();
    assert_eq!(err.code(), "E1001");
    assert!(matches!(err, ParseError::UnmatchedBracket { position: 0, .. }));
}

#[test]
fn tuple_root_yields_first_and_all_values() {
    let expr = ExpressionParser::new().parse("1+1, 2*3, 2^4").unwrap();
    assert_eq!(expr.value(), 2.0);
    assert_eq!(expr.multi_value(), Some(vec![2.0, 6.0, 16.0]));
}

#[test]
fn rendering_through_display() {
    let expr = ExpressionParser::new().parse("a*(b+2)").unwrap();
    expr.set("a", 2.0);
    assert_eq!(expr.to_string(), "( a[2] * ( b[0] + 2 ) )");
}

#[test]
fn parser_is_reusable() {
    let parser = ExpressionParser::new();
    let first = parser.parse("x + 1").unwrap();
    let second = parser.parse("y * 2").unwrap();
    assert_eq!(first.variable_names().collect::<Vec<_>>(), vec!["x"]);
    assert_eq!(second.variable_names().collect::<Vec<_>>(), vec!["y"]);
}

#[test]
fn deeply_nested_groups() {
    let depth = 500;
    let text = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(eval(&text).unwrap(), 1.0);
}

#[test]
fn long_additive_chain() {
    let text = vec!["1"; 2000].join("+");
    assert_eq!(eval(&text).unwrap(), 2000.0);
}
