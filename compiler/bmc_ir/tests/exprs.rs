//! Regression scenarios for construction, comparison, cloning and
//! pretty printing of expressions.

#![allow(clippy::unwrap_used, reason = "Tests can panic")]
#![allow(
    clippy::eq_op,
    clippy::nonminimal_bool,
    reason = "Operator results are what these tests check"
)]

mod common;

use bmc_ir::{BigInt, Expr, ExprId, FieldValue, TypeId};
use common::{init_tracing, uint};
use pretty_assertions::assert_eq;

fn constant(value: i64) -> Expr {
    Expr::constant_int(uint(32), value).unwrap()
}

#[test]
fn min() {
    init_tracing();
    let ty = uint(32);
    assert_eq!(ty.type_id(), TypeId::UnsignedBv);

    let zero = Expr::constant_int(ty, 0).unwrap();
    assert_eq!(zero.expr_id(), ExprId::ConstantInt);
    assert!(zero == zero);
    assert!(!(zero != zero));
}

#[test]
fn fields() {
    init_tracing();
    let ty = uint(32);
    assert_eq!(ty.field("width"), Some(FieldValue::Uint(32)));

    let one = Expr::constant_int(ty.clone(), 1).unwrap();
    assert_eq!(
        one.field("constant_value"),
        Some(FieldValue::Int(&BigInt::from(1)))
    );
    assert_eq!(one.ty(), &ty);
    assert_eq!(one.field("type").and_then(FieldValue::as_type), Some(&ty));
}

#[test]
fn cmps() {
    init_tracing();
    let zero = constant(0);
    let one = constant(1);

    assert!(zero != one);
    assert!(!(zero == one));
    assert!(one != zero);
    assert!(zero < one);
    assert!(!(one < zero));

    assert_eq!(constant(0), zero);
    assert!(!(constant(0) < zero));
}

#[test]
fn pretty() {
    init_tracing();
    let zero = constant(0);
    assert_eq!(
        zero.pretty(0),
        "constant_int\n* constant_value : 0\n* type : unsignedbv\n  * width : 32"
    );
}

#[test]
fn clone() {
    init_tracing();
    let zero = constant(0);
    let copy = zero.deep_clone();
    assert_eq!(copy, zero);
    assert!(!Expr::ptr_eq(&copy, &zero));
}

#[test]
fn add() {
    init_tracing();
    let ty = uint(32);
    let a = Expr::constant_int(ty.clone(), 1).unwrap();
    let b = Expr::constant_int(ty.clone(), 2).unwrap();
    let add = Expr::add(ty, a.clone(), b.clone()).unwrap();

    assert_eq!(add.expr_id(), ExprId::Add);
    let (_, side_1, side_2) = add.as_binary().unwrap();
    assert!(side_1 == &a);
    assert!(side_2 == &b);
    assert!(side_1 != &b);
    assert!(side_2 != &a);

    // A cloned parent hands out fresh children.
    let copy = add.deep_clone();
    let (_, copy_side_1, _) = copy.as_binary().unwrap();
    assert!(copy_side_1 == &a);
    assert!(!Expr::ptr_eq(copy_side_1, &a));
}

#[test]
fn rejected_construction_reports_kind() {
    init_tracing();
    let err = Expr::add(uint(32), constant(1), Expr::constant_int(uint(8), 1).unwrap())
        .unwrap_err();
    assert_eq!(err.kind(), "add");
}
