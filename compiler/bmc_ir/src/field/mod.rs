//! Field descriptors.
//!
//! Each kind publishes its fields, in declaration order, as a list of
//! `Field`s. Everything generic over kinds (ordering, hashing, `Debug`,
//! pretty printing, traversal) walks these lists instead of matching on
//! individual kinds.

use num_bigint::BigInt;
use smallvec::SmallVec;

use crate::{Expr, Name, Type};

/// Field list of one node. No kind has more than four fields.
pub type Fields<'a> = SmallVec<[Field<'a>; 4]>;

/// One named field of a node.
#[derive(Copy, Clone, Debug)]
pub struct Field<'a> {
    pub name: &'static str,
    pub value: FieldValue<'a>,
}

impl<'a> Field<'a> {
    #[inline]
    pub const fn new(name: &'static str, value: FieldValue<'a>) -> Self {
        Field { name, value }
    }
}

/// Borrowed view of a field's value.
///
/// Two nodes of the same kind always produce the same variants in the same
/// positions, so the derived ordering only ever compares like with like.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum FieldValue<'a> {
    Bool(bool),
    Uint(u32),
    Int(&'a BigInt),
    Name(&'a Name),
    Names(&'a [Name]),
    Type(&'a Type),
    Types(&'a [Type]),
    Expr(&'a Expr),
    /// Optional expression; `None` is printed as `nil`.
    OptExpr(Option<&'a Expr>),
    Exprs(&'a [Expr]),
}

impl<'a> FieldValue<'a> {
    /// Expressions held directly by this field.
    pub fn exprs(self) -> &'a [Expr] {
        match self {
            FieldValue::Expr(expr) | FieldValue::OptExpr(Some(expr)) => std::slice::from_ref(expr),
            FieldValue::Exprs(exprs) => exprs,
            _ => &[],
        }
    }

    /// Types held directly by this field.
    pub fn types(self) -> &'a [Type] {
        match self {
            FieldValue::Type(ty) => std::slice::from_ref(ty),
            FieldValue::Types(types) => types,
            _ => &[],
        }
    }

    /// The expression, if this field holds exactly one.
    pub fn as_expr(self) -> Option<&'a Expr> {
        match self {
            FieldValue::Expr(expr) | FieldValue::OptExpr(Some(expr)) => Some(expr),
            _ => None,
        }
    }

    /// The type, if this field holds exactly one.
    pub fn as_type(self) -> Option<&'a Type> {
        match self {
            FieldValue::Type(ty) => Some(ty),
            _ => None,
        }
    }
}
