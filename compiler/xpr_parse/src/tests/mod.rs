//! Parser tests, split by concern.

mod error_tests;

use xpr_registry::Registry;

use crate::{parse, ParseError, ParseOutput};

fn parse_default(text: &str) -> Result<ParseOutput, ParseError> {
    parse(text, &Registry::with_defaults())
}

/// Value of a parse that must succeed.
fn eval(text: &str) -> f64 {
    let out = parse_default(text).unwrap();
    out.root.value(&out.variables)
}

/// Rendered tree of a parse that must succeed.
fn render(text: &str) -> String {
    let out = parse_default(text).unwrap();
    out.root.display(&out.variables).to_string()
}
