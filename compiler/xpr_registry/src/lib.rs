//! Name tables consulted by the parser.
//!
//! A [`Registry`] holds two independent, insertion-ordered tables:
//! nullary constants and n-ary functions. It is plain configuration: build
//! one (usually [`Registry::with_defaults`]), adjust it, then hand it to the
//! parser by reference. Parsing only reads it.
//!
//! Names are matched by prefix during parsing, so a name that is a strict
//! prefix of another (`log` / `log10`) makes both ambiguous. The default
//! table avoids such pairs, so it has no `log10`, `sinh`, `cosh`, `tanh`,
//! `atan2` or degree-based trigonometry.
//!
//! Unregistered longer names do not fail to parse. `log10(100)` resolves
//! `log` and reads `10&0;` as its argument; the placeholder rule then takes
//! the group, giving `ln(100)`. Likewise `sinh(1)` is `sin(1)`. Register the
//! longer name explicitly (and drop the shorter one) to change this.

pub mod builtins;
mod registry;
mod table;

pub use registry::Registry;
pub use table::Table;
