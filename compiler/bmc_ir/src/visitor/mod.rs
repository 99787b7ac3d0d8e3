//! IR Visitor Pattern
//!
//! Provides generic read-only traversal of expression and type trees.
//!
//! # Design
//!
//! The visitor can mutate its own state during traversal, but the IR
//! remains immutable. Default implementations call `walk_*` functions that
//! visit every child in field order; override `visit_*` to add behavior at
//! specific nodes and call `walk_*` to keep descending.
//!
//! Traversal crosses categories: the result type of an expression is
//! visited after its operands, and the size expression of an array type is
//! visited like any other child.
//!
//! # Example
//!
//! ```text
//! struct CountSymbols {
//!     count: usize,
//! }
//!
//! impl<'ir> Visitor<'ir> for CountSymbols {
//!     fn visit_expr(&mut self, expr: &'ir Expr) {
//!         if expr.is_symbol() {
//!             self.count += 1;
//!         }
//!         walk_expr(self, expr);
//!     }
//! }
//! ```

use crate::stack::ensure_sufficient_stack;
use crate::{Expr, Type};

/// IR Visitor trait.
///
/// Override `visit_*` methods to add custom behavior at specific nodes.
/// Call `walk_*` functions to continue traversal into children.
pub trait Visitor<'ir> {
    /// Visit an expression.
    fn visit_expr(&mut self, expr: &'ir Expr) {
        walk_expr(self, expr);
    }

    /// Visit a type.
    fn visit_type(&mut self, ty: &'ir Type) {
        walk_type(self, ty);
    }
}

/// Visit every child of an expression, its result type last.
pub fn walk_expr<'ir, V: Visitor<'ir> + ?Sized>(visitor: &mut V, expr: &'ir Expr) {
    ensure_sufficient_stack(|| {
        for field in expr.fields() {
            for ty in field.value.types() {
                visitor.visit_type(ty);
            }
            for child in field.value.exprs() {
                visitor.visit_expr(child);
            }
        }
    });
}

/// Visit every child of a type.
pub fn walk_type<'ir, V: Visitor<'ir> + ?Sized>(visitor: &mut V, ty: &'ir Type) {
    ensure_sufficient_stack(|| {
        for field in ty.fields() {
            for nested in field.value.types() {
                visitor.visit_type(nested);
            }
            for size in field.value.exprs() {
                visitor.visit_expr(size);
            }
        }
    });
}

#[cfg(test)]
mod tests;
