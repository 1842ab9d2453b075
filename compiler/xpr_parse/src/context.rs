//! Per-parse variable discovery.

use tracing::trace;
use xpr_ir::{VarId, VarTable};

/// Variables discovered during one top-level parse.
///
/// The first occurrence of a name creates its variable; later occurrences
/// get the same handle. Dropped with the parse on error.
#[derive(Debug, Default)]
pub struct ParseContext {
    variables: VarTable,
}

impl ParseContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variable(&mut self, name: &str) -> VarId {
        if let Some(id) = self.variables.lookup(name) {
            return id;
        }
        trace!(name, "new variable");
        self.variables.intern(name)
    }

    pub fn variables(&self) -> &VarTable {
        &self.variables
    }

    pub fn into_variables(self) -> VarTable {
        self.variables
    }
}
