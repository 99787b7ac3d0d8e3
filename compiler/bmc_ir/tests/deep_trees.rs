//! Operations on operator chains far deeper than the thread stack allows
//! for plain recursion.

#![allow(clippy::unwrap_used, reason = "Tests can panic")]

mod common;

use std::cmp::Ordering;

use bmc_ir::visitor::{walk_expr, Visitor};
use bmc_ir::Expr;
use common::{init_tracing, uint};

const DEPTH: i64 = 100_000;

/// Left-nested `((base + 1) + 2) + ... + depth`, as an unrolled loop yields.
fn sum_chain(base: i64, depth: i64) -> Expr {
    let mut acc = Expr::constant_int(uint(64), base).unwrap();
    for i in 1..=depth {
        let term = Expr::constant_int(uint(64), i).unwrap();
        acc = Expr::add(uint(64), acc, term).unwrap();
    }
    acc
}

#[derive(Default)]
struct CountNodes {
    exprs: usize,
}

impl<'ir> Visitor<'ir> for CountNodes {
    fn visit_expr(&mut self, expr: &'ir Expr) {
        self.exprs += 1;
        walk_expr(self, expr);
    }
}

#[test]
fn deep_clone_and_compare() {
    init_tracing();
    let chain = sum_chain(0, DEPTH);
    let copy = chain.deep_clone();
    assert!(!Expr::ptr_eq(&chain, &copy));
    assert!(copy == chain);
    assert_eq!(copy.cmp(&chain), Ordering::Equal);
}

#[test]
fn ordering_reaches_the_innermost_leaf() {
    init_tracing();
    let low = sum_chain(0, DEPTH);
    let high = sum_chain(1, DEPTH);
    assert!(low != high);
    assert_eq!(low.cmp(&high), Ordering::Less);
    assert_eq!(high.cmp(&low), Ordering::Greater);
}

#[test]
fn dropping_releases_without_recursion() {
    init_tracing();
    let chain = sum_chain(0, DEPTH);
    let shared = chain.clone();
    drop(chain);
    assert!(shared.as_binary().is_some());
    drop(shared);

    let chain = sum_chain(0, DEPTH);
    let copy = chain.deep_clone();
    drop(chain);
    drop(copy);
}

#[test]
fn visitor_walks_every_level() {
    init_tracing();
    let chain = sum_chain(0, DEPTH);
    let mut count = CountNodes::default();
    count.visit_expr(&chain);
    // One `add` and one constant per level, plus the base constant.
    assert_eq!(count.exprs, usize::try_from(2 * DEPTH + 1).unwrap());
}

#[test]
fn pretty_on_a_small_thread_stack() {
    init_tracing();
    // Output grows with the square of the depth, so the depth is kept
    // moderate and the stack made small instead.
    const SHALLOW: i64 = 1_000;
    let lines = std::thread::Builder::new()
        .stack_size(256 * 1024)
        .spawn(|| {
            let chain = sum_chain(0, SHALLOW);
            let text = chain.pretty(0);
            assert!(text.starts_with("add\n* side_1 : add\n  * side_1 : add\n"));
            assert!(text.ends_with("\n* type : unsignedbv\n  * width : 64"));
            text.lines().count()
        })
        .unwrap()
        .join()
        .unwrap();
    // Seven lines per `add` level, four for the base constant.
    assert_eq!(lines, usize::try_from(7 * SHALLOW + 4).unwrap());
}
