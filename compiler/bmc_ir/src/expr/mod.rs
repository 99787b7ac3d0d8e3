//! Expression nodes.
//!
//! An `Expr` is an immutable handle to its result type, its `ExprKind`,
//! precomputed `ExprFlags` and a structural hash. All children are
//! themselves handles, so a subtree may be shared by several parents;
//! nothing can rewire a child after construction, which keeps every
//! expression a tree.

use std::fmt;
use std::sync::Arc;

use num_bigint::BigInt;
use smallvec::smallvec;

use crate::field::{Field, FieldValue, Fields};
use crate::stack::ensure_sufficient_stack;
use crate::{BinaryOp, ExprFlags, ExprId, Name, Type, UnaryOp};

mod make;

/// Immutable handle to an expression node.
///
/// `Clone` shares the node (same identity); `deep_clone` builds a new one.
#[derive(Clone)]
pub struct Expr(Arc<ExprNode>);

struct ExprNode {
    ty: Type,
    kind: ExprKind,
    flags: ExprFlags,
    hash: u64,
}

// Children whose last handle dies here are unlinked onto a worklist, so
// dropping a deep chain never recurses.
impl Drop for ExprNode {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.kind.take_children(&mut pending);
        while let Some(child) = pending.pop() {
            if let Some(mut node) = Arc::into_inner(child.0) {
                node.kind.take_children(&mut pending);
            }
        }
    }
}

/// Expression variants and their fields, in declaration order.
///
/// The result type is not part of the kind; it is stored on the node and
/// listed last by `Expr::fields`.
#[derive(Clone)]
pub enum ExprKind {
    ConstantInt {
        constant_value: BigInt,
    },
    ConstantBool {
        value: bool,
    },
    ConstantString {
        value: Name,
    },
    ConstantStruct {
        datatype_members: Vec<Expr>,
    },
    ConstantUnion {
        datatype_members: Vec<Expr>,
        init_field: Name,
    },
    ConstantArray {
        datatype_members: Vec<Expr>,
    },
    ConstantArrayOf {
        initializer: Expr,
    },
    Symbol {
        name: Name,
    },
    If {
        cond: Expr,
        true_value: Expr,
        false_value: Expr,
    },
    /// Every two-operand kind; `op` selects the `ExprId`.
    Binary {
        op: BinaryOp,
        side_1: Expr,
        side_2: Expr,
    },
    /// Every one-operand kind; `op` selects the `ExprId` and field name.
    Unary {
        op: UnaryOp,
        operand: Expr,
    },
    With {
        source_value: Expr,
        update_field: Expr,
        update_value: Expr,
    },
    Member {
        source_value: Expr,
        member: Name,
    },
    Index {
        source_value: Expr,
        index: Expr,
    },
}

impl ExprKind {
    pub fn expr_id(&self) -> ExprId {
        match self {
            ExprKind::ConstantInt { .. } => ExprId::ConstantInt,
            ExprKind::ConstantBool { .. } => ExprId::ConstantBool,
            ExprKind::ConstantString { .. } => ExprId::ConstantString,
            ExprKind::ConstantStruct { .. } => ExprId::ConstantStruct,
            ExprKind::ConstantUnion { .. } => ExprId::ConstantUnion,
            ExprKind::ConstantArray { .. } => ExprId::ConstantArray,
            ExprKind::ConstantArrayOf { .. } => ExprId::ConstantArrayOf,
            ExprKind::Symbol { .. } => ExprId::Symbol,
            ExprKind::If { .. } => ExprId::If,
            ExprKind::Binary { op, .. } => op.expr_id(),
            ExprKind::Unary { op, .. } => op.expr_id(),
            ExprKind::With { .. } => ExprId::With,
            ExprKind::Member { .. } => ExprId::Member,
            ExprKind::Index { .. } => ExprId::Index,
        }
    }

    /// The kind's own fields, without the result type.
    pub fn fields(&self) -> Fields<'_> {
        match self {
            ExprKind::ConstantInt { constant_value } => {
                smallvec![Field::new("constant_value", FieldValue::Int(constant_value))]
            }
            ExprKind::ConstantBool { value } => {
                smallvec![Field::new("value", FieldValue::Bool(*value))]
            }
            ExprKind::ConstantString { value } => {
                smallvec![Field::new("value", FieldValue::Name(value))]
            }
            ExprKind::ConstantStruct { datatype_members }
            | ExprKind::ConstantArray { datatype_members } => smallvec![Field::new(
                "datatype_members",
                FieldValue::Exprs(datatype_members)
            )],
            ExprKind::ConstantUnion {
                datatype_members,
                init_field,
            } => smallvec![
                Field::new("datatype_members", FieldValue::Exprs(datatype_members)),
                Field::new("init_field", FieldValue::Name(init_field)),
            ],
            ExprKind::ConstantArrayOf { initializer } => {
                smallvec![Field::new("initializer", FieldValue::Expr(initializer))]
            }
            ExprKind::Symbol { name } => smallvec![Field::new("name", FieldValue::Name(name))],
            ExprKind::If {
                cond,
                true_value,
                false_value,
            } => smallvec![
                Field::new("cond", FieldValue::Expr(cond)),
                Field::new("true_value", FieldValue::Expr(true_value)),
                Field::new("false_value", FieldValue::Expr(false_value)),
            ],
            ExprKind::Binary { side_1, side_2, .. } => smallvec![
                Field::new("side_1", FieldValue::Expr(side_1)),
                Field::new("side_2", FieldValue::Expr(side_2)),
            ],
            ExprKind::Unary { op, operand } => {
                smallvec![Field::new(op.operand_field(), FieldValue::Expr(operand))]
            }
            ExprKind::With {
                source_value,
                update_field,
                update_value,
            } => smallvec![
                Field::new("source_value", FieldValue::Expr(source_value)),
                Field::new("update_field", FieldValue::Expr(update_field)),
                Field::new("update_value", FieldValue::Expr(update_value)),
            ],
            ExprKind::Member {
                source_value,
                member,
            } => smallvec![
                Field::new("source_value", FieldValue::Expr(source_value)),
                Field::new("member", FieldValue::Name(member)),
            ],
            ExprKind::Index {
                source_value,
                index,
            } => smallvec![
                Field::new("source_value", FieldValue::Expr(source_value)),
                Field::new("index", FieldValue::Expr(index)),
            ],
        }
    }

    /// Move every child expression into `out`, leaving a leaf behind.
    fn take_children(&mut self, out: &mut Vec<Expr>) {
        if !self.has_children() {
            return;
        }
        let kind = std::mem::replace(self, ExprKind::ConstantBool { value: false });
        match kind {
            ExprKind::ConstantInt { .. }
            | ExprKind::ConstantBool { .. }
            | ExprKind::ConstantString { .. }
            | ExprKind::Symbol { .. } => {}
            ExprKind::ConstantStruct { datatype_members }
            | ExprKind::ConstantUnion {
                datatype_members, ..
            }
            | ExprKind::ConstantArray { datatype_members } => out.extend(datatype_members),
            ExprKind::ConstantArrayOf { initializer } => out.push(initializer),
            ExprKind::If {
                cond,
                true_value,
                false_value,
            } => out.extend([cond, true_value, false_value]),
            ExprKind::Binary { side_1, side_2, .. } => out.extend([side_1, side_2]),
            ExprKind::Unary { operand, .. } => out.push(operand),
            ExprKind::With {
                source_value,
                update_field,
                update_value,
            } => out.extend([source_value, update_field, update_value]),
            ExprKind::Member { source_value, .. } => out.push(source_value),
            ExprKind::Index {
                source_value,
                index,
            } => out.extend([source_value, index]),
        }
    }

    fn has_children(&self) -> bool {
        !matches!(
            self,
            ExprKind::ConstantInt { .. }
                | ExprKind::ConstantBool { .. }
                | ExprKind::ConstantString { .. }
                | ExprKind::Symbol { .. }
        )
    }

    fn deep_clone(&self) -> ExprKind {
        fn all(exprs: &[Expr]) -> Vec<Expr> {
            exprs.iter().map(Expr::deep_clone).collect()
        }

        match self {
            ExprKind::ConstantInt { .. }
            | ExprKind::ConstantBool { .. }
            | ExprKind::ConstantString { .. }
            | ExprKind::Symbol { .. } => self.clone(),
            ExprKind::ConstantStruct { datatype_members } => ExprKind::ConstantStruct {
                datatype_members: all(datatype_members),
            },
            ExprKind::ConstantUnion {
                datatype_members,
                init_field,
            } => ExprKind::ConstantUnion {
                datatype_members: all(datatype_members),
                init_field: init_field.clone(),
            },
            ExprKind::ConstantArray { datatype_members } => ExprKind::ConstantArray {
                datatype_members: all(datatype_members),
            },
            ExprKind::ConstantArrayOf { initializer } => ExprKind::ConstantArrayOf {
                initializer: initializer.deep_clone(),
            },
            ExprKind::If {
                cond,
                true_value,
                false_value,
            } => ExprKind::If {
                cond: cond.deep_clone(),
                true_value: true_value.deep_clone(),
                false_value: false_value.deep_clone(),
            },
            ExprKind::Binary { op, side_1, side_2 } => ExprKind::Binary {
                op: *op,
                side_1: side_1.deep_clone(),
                side_2: side_2.deep_clone(),
            },
            ExprKind::Unary { op, operand } => ExprKind::Unary {
                op: *op,
                operand: operand.deep_clone(),
            },
            ExprKind::With {
                source_value,
                update_field,
                update_value,
            } => ExprKind::With {
                source_value: source_value.deep_clone(),
                update_field: update_field.deep_clone(),
                update_value: update_value.deep_clone(),
            },
            ExprKind::Member {
                source_value,
                member,
            } => ExprKind::Member {
                source_value: source_value.deep_clone(),
                member: member.clone(),
            },
            ExprKind::Index {
                source_value,
                index,
            } => ExprKind::Index {
                source_value: source_value.deep_clone(),
                index: index.deep_clone(),
            },
        }
    }
}

impl Expr {
    /// Wrap an already validated kind.
    pub(crate) fn build(ty: Type, kind: ExprKind) -> Expr {
        let id = kind.expr_id();
        let hash = crate::cmp::structural_hash(id, Some(&ty), &kind.fields());
        let flags = ExprFlags::compute(&kind);
        Expr(Arc::new(ExprNode {
            ty,
            kind,
            flags,
            hash,
        }))
    }

    #[inline]
    pub fn expr_id(&self) -> ExprId {
        self.0.kind.expr_id()
    }

    /// The type of the value this expression denotes.
    #[inline]
    pub fn ty(&self) -> &Type {
        &self.0.ty
    }

    #[inline]
    pub fn kind(&self) -> &ExprKind {
        &self.0.kind
    }

    #[inline]
    pub fn flags(&self) -> ExprFlags {
        self.0.flags
    }

    /// Fields in declaration order: the kind's fields, then `type`.
    pub fn fields(&self) -> Fields<'_> {
        let mut fields = self.0.kind.fields();
        fields.push(Field::new("type", FieldValue::Type(&self.0.ty)));
        fields
    }

    /// Look up a field by name, `type` included.
    pub fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        self.fields()
            .into_iter()
            .find(|field| field.name == name)
            .map(|field| field.value)
    }

    /// Direct child expressions in field order.
    pub fn operands(&self) -> impl Iterator<Item = &Expr> + '_ {
        self.0
            .kind
            .fields()
            .into_iter()
            .flat_map(|field| field.value.exprs())
    }

    /// Check if two handles point at the same node.
    #[inline]
    pub fn ptr_eq(a: &Expr, b: &Expr) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }

    /// Build a value-equal copy that shares no node with `self`, the type
    /// and every descendant included.
    pub fn deep_clone(&self) -> Expr {
        ensure_sufficient_stack(|| {
            Expr(Arc::new(ExprNode {
                ty: self.0.ty.deep_clone(),
                kind: self.0.kind.deep_clone(),
                flags: self.0.flags,
                hash: self.0.hash,
            }))
        })
    }

    #[inline]
    pub(crate) fn structural_hash(&self) -> u64 {
        self.0.hash
    }

    // Typed views

    pub fn is_constant(&self) -> bool {
        self.expr_id().is_constant()
    }

    pub fn is_constant_int(&self) -> bool {
        matches!(self.kind(), ExprKind::ConstantInt { .. })
    }

    pub fn is_symbol(&self) -> bool {
        matches!(self.kind(), ExprKind::Symbol { .. })
    }

    pub fn as_constant_int(&self) -> Option<&BigInt> {
        match self.kind() {
            ExprKind::ConstantInt { constant_value } => Some(constant_value),
            _ => None,
        }
    }

    pub fn as_constant_bool(&self) -> Option<bool> {
        match self.kind() {
            ExprKind::ConstantBool { value } => Some(*value),
            _ => None,
        }
    }

    pub fn as_constant_string(&self) -> Option<&Name> {
        match self.kind() {
            ExprKind::ConstantString { value } => Some(value),
            _ => None,
        }
    }

    pub fn as_symbol(&self) -> Option<&Name> {
        match self.kind() {
            ExprKind::Symbol { name } => Some(name),
            _ => None,
        }
    }

    /// Operator and operands of a two-operand kind.
    pub fn as_binary(&self) -> Option<(BinaryOp, &Expr, &Expr)> {
        match self.kind() {
            ExprKind::Binary { op, side_1, side_2 } => Some((*op, side_1, side_2)),
            _ => None,
        }
    }

    /// Operator and operand of a one-operand kind.
    pub fn as_unary(&self) -> Option<(UnaryOp, &Expr)> {
        match self.kind() {
            ExprKind::Unary { op, operand } => Some((*op, operand)),
            _ => None,
        }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| {
            let mut out = f.debug_struct(self.expr_id().name());
            for field in self.fields() {
                out.field(field.name, &field.value);
            }
            out.finish()
        })
    }
}
