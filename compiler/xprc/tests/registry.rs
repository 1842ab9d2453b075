//! Registry customisation through the facade.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use xprc::{ExpressionParser, Registry};

#[test]
fn custom_function_and_constant() {
    let mut parser = ExpressionParser::new();
    parser.add_function("avg", |args| {
        if args.is_empty() {
            0.0
        } else {
            args.iter().sum::<f64>() / args.len() as f64
        }
    });
    parser.add_constant("answer", || 42.0);
    assert_eq!(parser.evaluate("avg(1, 2, 3, 6)").unwrap(), 3.0);
    assert_eq!(parser.evaluate("answer/2").unwrap(), 21.0);
}

#[test]
fn replacing_a_function_changes_later_parses() {
    let mut parser = ExpressionParser::new();
    let before = parser.parse("sqrt(9)").unwrap();
    parser.add_function("sqrt", |_| -1.0);
    let after = parser.parse("sqrt(9)").unwrap();
    assert_eq!(before.value(), 3.0);
    assert_eq!(after.value(), -1.0);
}

#[test]
fn removed_constant_reads_as_variable() {
    let mut parser = ExpressionParser::new();
    assert!(parser.remove_constant("PI"));
    assert!(!parser.remove_constant("PI"));
    let expr = parser.parse("PI").unwrap();
    assert_eq!(expr.variable_names().collect::<Vec<_>>(), vec!["PI"]);
}

#[test]
fn ambiguous_function_prefix_falls_through() {
    let mut registry = Registry::empty();
    registry.add_function("f", |a| a.first().copied().unwrap_or(0.0) + 1.0);
    registry.add_function("ff", |a| a.first().copied().unwrap_or(0.0) * 100.0);
    let parser = ExpressionParser::with_registry(registry);
    assert_eq!(parser.evaluate("f(2)").unwrap(), 3.0);
    // Both names prefix `ff(2)`, so neither is called and the group is read.
    assert_eq!(parser.evaluate("ff(2)").unwrap(), 2.0);
}

#[test]
fn empty_registry_has_no_names() {
    let parser = ExpressionParser::with_registry(Registry::empty());
    assert_eq!(parser.function_names().count(), 0);
    assert_eq!(parser.constant_names().count(), 0);
    assert!(parser.evaluate("sqrt(4)").is_ok());
}

#[test]
fn default_names_are_listed() {
    let parser = ExpressionParser::new();
    let functions: Vec<_> = parser.function_names().collect();
    let constants: Vec<_> = parser.constant_names().collect();
    assert!(functions.contains(&"sqrt"));
    assert!(functions.contains(&"binom"));
    assert!(constants.contains(&"PI"));
    assert!(constants.contains(&"e"));
}

#[test]
fn registry_mut_exposes_value_constants() {
    let mut parser = ExpressionParser::new();
    parser.registry_mut().add_value("g", 9.81);
    assert!(parser.registry().is_constant("g"));
    assert_eq!(parser.evaluate("2*g").unwrap(), 2.0 * 9.81);
}
