//! BMC IR - Typed Expression and Type Representation
//!
//! This crate contains the core value objects a bounded model checker
//! builds from a front-end and hands to its solver back-end:
//! - Types (`unsignedbv`, `struct`, `pointer`, ...) tagged by `TypeId`
//! - Expressions (`constant_int`, `add`, `member`, ...) tagged by `ExprId`
//! - Validated factories, one per kind
//! - Structural equality, ordering and hashing driven by field tables
//! - Identity-distinct deep clones
//! - A deterministic indented pretty printer
//!
//! # Design Philosophy
//!
//! - **Immutable Handles**: `Type` and `Expr` are reference-counted handles
//!   to nodes that never change after construction.
//! - **One Field Table**: every kind lists its fields once (`fields()`); the
//!   comparison engine, hashing, `Debug`, the pretty printer and the visitor
//!   all walk that list.
//! - **Kind Order Is Contract**: `TypeId`/`ExprId` declaration order is the
//!   primary sort key of the total order.

/// Compile-time assertion that a type has a specific size.
///
/// Used to keep handles pointer-sized.
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod cmp;
mod error;
mod expr;
mod expr_id;
mod field;
mod flags;
mod hash_cons;
mod name;
mod operators;
mod pretty;
mod stack;
mod ty;
mod type_id;
pub mod visitor;

pub use error::{Expected, IrError, IrResult};
pub use expr::{Expr, ExprKind};
pub use expr_id::ExprId;
pub use field::{Field, FieldValue, Fields};
pub use flags::ExprFlags;
pub use hash_cons::{ExprTable, HashCons, SharedHashCons, TypeTable};
pub use name::Name;
pub use num_bigint::BigInt;
pub use operators::{BinaryOp, UnaryOp};
pub use ty::{Type, TypeKind};
pub use type_id::TypeId;
pub use visitor::Visitor;

// Handles are a single `Arc` pointer.
#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Expr, Name, Type};
    static_assert_size!(Type, 8);
    static_assert_size!(Expr, 8);
    // `Arc<str>` is a fat pointer.
    static_assert_size!(Name, 16);
}
