#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;

use super::{walk_expr, walk_type, Visitor};
use crate::{Expr, Name, Type};

fn uint(width: u32) -> Type {
    Type::unsignedbv(width).unwrap()
}

/// Records kind names in visiting order.
#[derive(Default)]
struct Trace {
    seen: Vec<&'static str>,
}

impl<'ir> Visitor<'ir> for Trace {
    fn visit_expr(&mut self, expr: &'ir Expr) {
        self.seen.push(expr.expr_id().name());
        walk_expr(self, expr);
    }

    fn visit_type(&mut self, ty: &'ir Type) {
        self.seen.push(ty.type_id().name());
        walk_type(self, ty);
    }
}

struct SymbolNames<'ir> {
    names: Vec<&'ir Name>,
}

impl<'ir> Visitor<'ir> for SymbolNames<'ir> {
    fn visit_expr(&mut self, expr: &'ir Expr) {
        if let Some(name) = expr.as_symbol() {
            self.names.push(name);
        }
        walk_expr(self, expr);
    }
}

#[test]
fn visits_operands_before_result_type() {
    let x = Expr::symbol(uint(8), "x").unwrap();
    let one = Expr::constant_int(uint(8), 1).unwrap();
    let add = Expr::add(uint(8), x, one).unwrap();

    let mut trace = Trace::default();
    trace.visit_expr(&add);
    assert_eq!(
        trace.seen,
        vec![
            "add",
            "symbol",
            "unsignedbv",
            "constant_int",
            "unsignedbv",
            "unsignedbv",
        ]
    );
}

#[test]
fn descends_into_array_sizes() {
    let size = Expr::symbol(uint(32), "n").unwrap();
    let ty = Type::array(Type::bool(), Some(size), false).unwrap();

    let mut trace = Trace::default();
    trace.visit_type(&ty);
    assert_eq!(trace.seen, vec!["array", "bool", "symbol", "unsignedbv"]);
}

#[test]
fn collects_borrowed_symbol_names() {
    let a = Expr::symbol(Type::bool(), "a").unwrap();
    let b = Expr::symbol(Type::bool(), "b").unwrap();
    let and = Expr::and(Type::bool(), a, b).unwrap();
    let not = Expr::not(Type::bool(), and).unwrap();

    let mut collector = SymbolNames { names: Vec::new() };
    collector.visit_expr(&not);
    let names: Vec<&str> = collector.names.iter().map(|name| name.as_str()).collect();
    assert_eq!(names, vec!["a", "b"]);
}
