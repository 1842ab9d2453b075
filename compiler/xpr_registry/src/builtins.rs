//! Default constant and function table.
//!
//! Every function reads its arguments positionally; a missing argument
//! reads as `0.0` and extra arguments are ignored, so any call shape
//! evaluates to a number.

use std::f64::consts;

use rand::Rng;

/// Function signature of the built-ins.
pub type BuiltinFn = fn(&[f64]) -> f64;

/// Default constants, in registration order.
pub const CONSTANTS: &[(&str, f64)] = &[
    ("PI", consts::PI),
    ("e", consts::E),
    ("Infinity", f64::INFINITY),
    ("NegInfinity", f64::NEG_INFINITY),
    ("Deg2Rad", consts::PI / 180.0),
    ("Rad2Deg", 180.0 / consts::PI),
];

/// Default functions, in registration order.
///
/// No name here is a prefix of another.
pub const FUNCTIONS: &[(&str, BuiltinFn)] = &[
    ("sqrt", |a| arg(a, 0).sqrt()),
    ("abs", |a| arg(a, 0).abs()),
    ("ln", |a| arg(a, 0).ln()),
    ("floor", |a| arg(a, 0).floor()),
    ("ceil", |a| arg(a, 0).ceil()),
    ("round", round),
    ("exp", |a| arg(a, 0).exp()),
    ("log", log),
    ("sgn", |a| sign(arg(a, 0))),
    ("sin", |a| arg(a, 0).sin()),
    ("cos", |a| arg(a, 0).cos()),
    ("tan", |a| arg(a, 0).tan()),
    ("asin", |a| arg(a, 0).asin()),
    ("acos", |a| arg(a, 0).acos()),
    ("atan", |a| arg(a, 0).atan()),
    ("min", |a| min(arg(a, 0), arg(a, 1))),
    ("max", |a| max(arg(a, 0), arg(a, 1))),
    ("rnd", rnd),
    ("fact", |a| factorial(arg(a, 0))),
    ("binom", |a| binomial(arg(a, 0), arg(a, 1))),
];

/// Positional argument, `0.0` when absent.
#[inline]
pub fn arg(args: &[f64], index: usize) -> f64 {
    args.get(index).copied().unwrap_or(0.0)
}

/// `round(x)` or `round(x, digits)`, ties to even.
fn round(args: &[f64]) -> f64 {
    let x = arg(args, 0);
    if args.len() < 2 {
        return x.round_ties_even();
    }
    let digits = arg(args, 1).trunc().clamp(0.0, 15.0);
    let scale = 10f64.powf(digits);
    (x * scale).round_ties_even() / scale
}

/// `log(x)` is the natural log, `log(x, base)` the log in `base`.
fn log(args: &[f64]) -> f64 {
    let x = arg(args, 0);
    if args.len() < 2 {
        x.ln()
    } else {
        x.log(arg(args, 1))
    }
}

/// `-1`, `0` or `1`; NaN stays NaN.
fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        x
    }
}

fn min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

fn max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

/// `rnd()` in `[0, 1)`, `rnd(a)` in `[0, a)`, `rnd(a, b)` in `[a, b)`.
fn rnd(args: &[f64]) -> f64 {
    let unit: f64 = rand::thread_rng().gen();
    match args {
        [] => unit,
        [scale] => unit * scale,
        [low, high, ..] => low + unit * (high - low),
    }
}

/// Factorial of the truncated argument. Negative input gives `0`.
///
/// Computed in floating point, so results past `170!` are infinite.
pub fn factorial(n: f64) -> f64 {
    if n.is_nan() {
        return f64::NAN;
    }
    let n = n.trunc();
    if n < 0.0 {
        return 0.0;
    }
    let mut acc: f64 = 1.0;
    let mut i = 2.0;
    while i <= n && acc.is_finite() {
        acc *= i;
        i += 1.0;
    }
    acc
}

/// Binomial coefficient of truncated, non-negative arguments.
///
/// `n == 0`, `k == 0` and `k == n` give `1`; `k > n` gives `0`.
pub fn binomial(n: f64, k: f64) -> f64 {
    if n.is_nan() || k.is_nan() {
        return f64::NAN;
    }
    let n = n.trunc().max(0.0);
    let k = k.trunc().max(0.0);
    if n == 0.0 || k == 0.0 || k == n {
        return 1.0;
    }
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    let mut acc: f64 = 1.0;
    let mut i = 1.0;
    while i <= k && acc.is_finite() {
        acc = acc * (n - k + i) / i;
        i += 1.0;
    }
    acc.round()
}
