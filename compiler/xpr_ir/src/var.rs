//! Variable handles and the per-expression variable arena.

use std::cell::Cell;
use std::fmt;

use rustc_hash::FxHashMap;

/// Index into a [`VarTable`].
///
/// Every tree location referring to the same name holds the same `VarId`,
/// so writes through the table are observed by all of them.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct VarId(u32);

impl VarId {
    /// Create a new `VarId`.
    #[inline]
    pub const fn new(index: u32) -> Self {
        VarId(index)
    }

    /// Get the index into the table.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for VarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VarId({})", self.0)
    }
}

/// Inclusive value range of a bounded variable.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    /// Create bounds, swapping the ends if given in the wrong order.
    pub fn new(min: f64, max: f64) -> Self {
        if min > max {
            Bounds { min: max, max: min }
        } else {
            Bounds { min, max }
        }
    }

    /// Clamp `value` into the range. NaN passes through unchanged.
    #[inline]
    pub fn clamp(self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }
}

/// A named, mutable numeric cell.
///
/// Variables start at `0.0` and unbounded.
#[derive(Debug)]
pub struct Variable {
    name: String,
    value: Cell<f64>,
    bounds: Cell<Option<Bounds>>,
}

impl Variable {
    fn new(name: String) -> Self {
        Variable {
            name,
            value: Cell::new(0.0),
            bounds: Cell::new(None),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn get(&self) -> f64 {
        self.value.get()
    }

    /// Store `value`, clamped into the bounds if any are set.
    #[inline]
    pub fn set(&self, value: f64) {
        let value = match self.bounds.get() {
            Some(bounds) if !value.is_nan() => bounds.clamp(value),
            _ => value,
        };
        self.value.set(value);
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds.get()
    }

    /// Restrict the variable to `[min, max]` and re-clamp its current value.
    pub fn set_bounds(&self, min: f64, max: f64) {
        self.bounds.set(Some(Bounds::new(min, max)));
        self.set(self.get());
    }

    pub fn clear_bounds(&self) {
        self.bounds.set(None);
    }
}

/// Arena of the variables discovered while parsing one expression.
///
/// Names are unique; [`VarTable::intern`] returns the existing handle for a
/// name it has seen before. Iteration follows first-occurrence order.
#[derive(Debug, Default)]
pub struct VarTable {
    vars: Vec<Variable>,
    by_name: FxHashMap<String, VarId>,
}

impl VarTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the handle for `name`, creating the variable on first use.
    pub fn intern(&mut self, name: &str) -> VarId {
        if let Some(&id) = self.by_name.get(name) {
            return id;
        }
        let id = VarId::new(u32::try_from(self.vars.len()).unwrap_or(u32::MAX));
        self.vars.push(Variable::new(name.to_owned()));
        self.by_name.insert(name.to_owned(), id);
        id
    }

    pub fn lookup(&self, name: &str) -> Option<VarId> {
        self.by_name.get(name).copied()
    }

    /// Get a variable by handle.
    ///
    /// # Panics
    /// Panics if `id` was not produced by this table.
    #[inline]
    pub fn get(&self, id: VarId) -> &Variable {
        &self.vars[id.index()]
    }

    pub fn by_name(&self, name: &str) -> Option<&Variable> {
        self.lookup(name).map(|id| self.get(id))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.vars.iter().map(Variable::name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (VarId, &Variable)> {
        self.vars
            .iter()
            .enumerate()
            .map(|(i, var)| (VarId::new(u32::try_from(i).unwrap_or(u32::MAX)), var))
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

#[cfg(test)]
mod tests;
