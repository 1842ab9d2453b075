use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_intern_returns_same_handle() {
    let mut table = VarTable::new();
    let x = table.intern("x");
    let y = table.intern("y");
    assert_eq!(table.intern("x"), x);
    assert_ne!(x, y);
    assert_eq!(table.len(), 2);
}

#[test]
fn test_names_follow_first_occurrence() {
    let mut table = VarTable::new();
    for name in ["b", "a", "b", "c", "a"] {
        table.intern(name);
    }
    assert_eq!(table.names().collect::<Vec<_>>(), vec!["b", "a", "c"]);
}

#[test]
fn test_write_is_shared_by_handle() {
    let mut table = VarTable::new();
    let x = table.intern("x");
    table.get(x).set(4.5);
    assert_eq!(table.by_name("x").map(Variable::get), Some(4.5));
    let again = table.intern("x");
    assert_eq!(table.get(again).get(), 4.5);
}

#[test]
fn test_new_variable_is_zero_and_unbounded() {
    let mut table = VarTable::new();
    let id = table.intern("t");
    assert_eq!(table.get(id).get(), 0.0);
    assert_eq!(table.get(id).bounds(), None);
}

#[test]
fn test_bounds_clamp_assignment() {
    let mut table = VarTable::new();
    let id = table.intern("t");
    let var = table.get(id);
    var.set_bounds(-1.0, 1.0);
    var.set(5.0);
    assert_eq!(var.get(), 1.0);
    var.set(-3.0);
    assert_eq!(var.get(), -1.0);
    var.set(0.25);
    assert_eq!(var.get(), 0.25);
}

#[test]
fn test_bounds_swap_and_reclamp() {
    let mut table = VarTable::new();
    let id = table.intern("t");
    let var = table.get(id);
    var.set(10.0);
    var.set_bounds(2.0, -2.0);
    assert_eq!(var.bounds(), Some(Bounds { min: -2.0, max: 2.0 }));
    assert_eq!(var.get(), 2.0);

    var.clear_bounds();
    var.set(10.0);
    assert_eq!(var.get(), 10.0);
}

#[test]
fn test_nan_is_not_clamped() {
    let mut table = VarTable::new();
    let id = table.intern("t");
    let var = table.get(id);
    var.set_bounds(0.0, 1.0);
    var.set(f64::NAN);
    assert!(var.get().is_nan());
}

#[test]
fn test_lookup_unknown() {
    let table = VarTable::new();
    assert_eq!(table.lookup("x"), None);
    assert!(table.is_empty());
}
