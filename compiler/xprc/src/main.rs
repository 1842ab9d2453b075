//! xpr command line evaluator.
//!
//! ```text
//! xpr <expression> [name=value ...]
//! ```

use xprc::{init_tracing, ExpressionParser};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        print_usage();
        if args.len() < 2 {
            std::process::exit(1);
        }
        return;
    }

    let parser = ExpressionParser::new();
    let expr = match parser.parse(&args[1]) {
        Ok(expr) => expr,
        Err(e) => {
            eprintln!("error[{}]: {e}", e.code());
            std::process::exit(1);
        }
    };

    for binding in &args[2..] {
        let Some((name, value)) = binding.split_once('=') else {
            eprintln!("error: expected `name=value`, found `{binding}`");
            std::process::exit(1);
        };
        let value: f64 = match value.trim().parse() {
            Ok(v) => v,
            Err(_) => {
                eprintln!("error: `{}` is not a number", value.trim());
                std::process::exit(1);
            }
        };
        if !expr.set(name.trim(), value) {
            eprintln!("warning: expression has no variable `{}`", name.trim());
        }
    }

    match expr.multi_value() {
        Some(values) => {
            let rendered: Vec<String> = values.iter().map(f64::to_string).collect();
            println!("{}", rendered.join(", "));
        }
        None => println!("{}", expr.value()),
    }
}

fn print_usage() {
    println!("Usage: xpr <expression> [name=value ...]");
    println!();
    println!("Evaluates an arithmetic expression. Unassigned variables are 0.");
    println!();
    println!("Examples:");
    println!("  xpr '2 + 3 * 4'");
    println!("  xpr 'sqrt(x^2 + y^2)' x=3 y=4");
    println!("  xpr 'x, x*2' x=5");
    println!();
    println!("Set RUST_LOG=debug (or trace) to see the parse.");
}
