//! Structural equality, ordering and hashing.
//!
//! Two nodes are equal when they have the same kind and equal fields; node
//! identity never matters. Ordering is total and lexicographic:
//!
//! - types compare by `TypeId`, then field by field
//! - expressions compare by `ExprId`, then result type, then field by field
//!
//! Each node caches a structural hash at construction. `Hash` feeds only
//! that value, and equality uses it to reject unequal nodes early.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

use crate::field::Field;
use crate::stack::ensure_sufficient_stack;
use crate::{Expr, Type};

/// Hash a node from its kind tag, optional result type and fields.
///
/// Children contribute their own cached hashes, so this is O(fields).
pub(crate) fn structural_hash<K: Hash>(kind: K, ty: Option<&Type>, fields: &[Field<'_>]) -> u64 {
    let mut hasher = FxHasher::default();
    kind.hash(&mut hasher);
    if let Some(ty) = ty {
        hasher.write_u64(ty.structural_hash());
    }
    for field in fields {
        field.value.hash(&mut hasher);
    }
    hasher.finish()
}

/// Compare two field lists of the same kind, first difference wins.
fn cmp_fields(a: &[Field<'_>], b: &[Field<'_>]) -> Ordering {
    a.iter()
        .map(|field| field.value)
        .cmp(b.iter().map(|field| field.value))
}

impl Ord for Type {
    fn cmp(&self, other: &Self) -> Ordering {
        if Type::ptr_eq(self, other) {
            return Ordering::Equal;
        }
        ensure_sufficient_stack(|| {
            self.type_id()
                .cmp(&other.type_id())
                .then_with(|| cmp_fields(&self.fields(), &other.fields()))
        })
    }
}

impl PartialOrd for Type {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        if Type::ptr_eq(self, other) {
            return true;
        }
        self.structural_hash() == other.structural_hash() && self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Type {}

impl Hash for Type {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.structural_hash());
    }
}

impl Ord for Expr {
    fn cmp(&self, other: &Self) -> Ordering {
        if Expr::ptr_eq(self, other) {
            return Ordering::Equal;
        }
        ensure_sufficient_stack(|| {
            self.expr_id()
                .cmp(&other.expr_id())
                .then_with(|| self.ty().cmp(other.ty()))
                .then_with(|| cmp_fields(&self.kind().fields(), &other.kind().fields()))
        })
    }
}

impl PartialOrd for Expr {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        if Expr::ptr_eq(self, other) {
            return true;
        }
        self.structural_hash() == other.structural_hash() && self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Expr {}

impl Hash for Expr {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.structural_hash());
    }
}
