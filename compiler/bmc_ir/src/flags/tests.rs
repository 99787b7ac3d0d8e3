#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use crate::{Expr, ExprFlags, Type};

fn u32_type() -> Type {
    Type::unsignedbv(32).unwrap()
}

fn int(value: i64) -> Expr {
    Expr::constant_int(u32_type(), value).unwrap()
}

#[test]
fn literals_are_constant() {
    assert!(int(3).flags().is_constant());
    assert!(!int(3).flags().has_symbols());
}

#[test]
fn operators_are_not_constant() {
    let add = Expr::add(u32_type(), int(1), int(2)).unwrap();
    assert!(!add.flags().is_constant());
}

#[test]
fn constant_aggregates_need_constant_members() {
    let array_type = Type::array(u32_type(), Some(int(2)), false).unwrap();
    let constant = Expr::constant_array(array_type.clone(), vec![int(1), int(2)]).unwrap();
    assert!(constant.flags().is_constant());

    let x = Expr::symbol(u32_type(), "x").unwrap();
    let mixed = Expr::constant_array(array_type, vec![int(1), x]).unwrap();
    assert!(!mixed.flags().is_constant());
    assert!(mixed.flags().has_symbols());
}

#[test]
fn presence_flags_propagate() {
    let ptr_type = Type::pointer(u32_type());
    let p = Expr::symbol(ptr_type, "p").unwrap();
    let load = Expr::dereference(u32_type(), p).unwrap();
    let sum = Expr::add(u32_type(), load, int(1)).unwrap();
    let check = Expr::overflow(Type::bool(), sum.clone()).unwrap();

    assert!(sum.flags().contains(ExprFlags::HAS_DEREF | ExprFlags::HAS_SYMBOL));
    assert!(sum.flags().touches_memory());
    assert!(!sum.flags().contains(ExprFlags::HAS_OVERFLOW_CHECK));
    assert!(check.flags().contains(ExprFlags::HAS_OVERFLOW_CHECK));
    assert!(!check.flags().is_constant());
}

#[test]
fn address_of_is_tracked() {
    let x = Expr::symbol(u32_type(), "x").unwrap();
    let addr = Expr::address_of(Type::pointer(u32_type()), x).unwrap();
    assert!(addr.flags().contains(ExprFlags::HAS_ADDRESS_OF));
    assert!(addr.flags().touches_memory());
}
