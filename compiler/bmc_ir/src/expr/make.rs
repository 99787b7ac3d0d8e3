//! Expression factories.
//!
//! One constructor per kind, taking the result type first and then the
//! kind's fields in declaration order. Every factory checks the kind's
//! typing rule; where operands and result could merely be compatible, the
//! rule demands identical types.

use num_bigint::BigInt;
use num_traits::ToPrimitive;

use super::{Expr, ExprKind};
use crate::{BinaryOp, Expected, ExprId, IrError, IrResult, Name, Type, TypeKind, UnaryOp};

/// Fail unless `found` satisfies `expected`.
fn require(
    kind: &'static str,
    field: &'static str,
    found: &Type,
    expected: Expected,
) -> IrResult<()> {
    if expected.accepts(found) {
        Ok(())
    } else {
        Err(IrError::type_mismatch(kind, field, expected, found.clone()))
    }
}

/// Fail unless `found` is exactly `expected`.
fn require_same(
    kind: &'static str,
    field: &'static str,
    found: &Type,
    expected: &Type,
) -> IrResult<()> {
    if found == expected {
        Ok(())
    } else {
        Err(IrError::type_mismatch(
            kind,
            field,
            Expected::Type(expected.clone()),
            found.clone(),
        ))
    }
}

impl Expr {
    /// Build a `constant_int` over a bit-vector type.
    pub fn constant_int(ty: Type, constant_value: impl Into<BigInt>) -> IrResult<Expr> {
        require(ExprId::ConstantInt.name(), "type", &ty, Expected::BitVector)?;
        Ok(Expr::build(
            ty,
            ExprKind::ConstantInt {
                constant_value: constant_value.into(),
            },
        ))
    }

    pub fn constant_bool(ty: Type, value: bool) -> IrResult<Expr> {
        require(ExprId::ConstantBool.name(), "type", &ty, Expected::Bool)?;
        Ok(Expr::build(ty, ExprKind::ConstantBool { value }))
    }

    pub fn constant_string(ty: Type, value: impl Into<Name>) -> IrResult<Expr> {
        require(ExprId::ConstantString.name(), "type", &ty, Expected::String)?;
        Ok(Expr::build(
            ty,
            ExprKind::ConstantString {
                value: value.into(),
            },
        ))
    }

    /// Build a struct literal with one member per struct member, in order.
    pub fn constant_struct(ty: Type, datatype_members: Vec<Expr>) -> IrResult<Expr> {
        let kind = ExprId::ConstantStruct.name();
        require(kind, "type", &ty, Expected::Struct)?;
        if let Some((members, _)) = ty.members() {
            if members.len() != datatype_members.len() {
                return Err(IrError::invalid(
                    kind,
                    format!(
                        "{} members for a struct of {}",
                        datatype_members.len(),
                        members.len()
                    ),
                ));
            }
            for (value, member) in datatype_members.iter().zip(members) {
                require_same(kind, "datatype_members", value.ty(), member)?;
            }
        }
        Ok(Expr::build(ty, ExprKind::ConstantStruct { datatype_members }))
    }

    /// Build a union literal initialising the member `init_field`.
    pub fn constant_union(
        ty: Type,
        datatype_members: Vec<Expr>,
        init_field: impl Into<Name>,
    ) -> IrResult<Expr> {
        let kind = ExprId::ConstantUnion.name();
        let init_field = init_field.into();
        require(kind, "type", &ty, Expected::Union)?;
        let [value] = datatype_members.as_slice() else {
            return Err(IrError::invalid(
                kind,
                format!(
                    "a union literal has exactly one member, found {}",
                    datatype_members.len()
                ),
            ));
        };
        let Some(member) = ty.member_type(&init_field) else {
            return Err(IrError::invalid(
                kind,
                format!("no member `{init_field}` in `{ty}`"),
            ));
        };
        require_same(kind, "datatype_members", value.ty(), member)?;
        Ok(Expr::build(
            ty,
            ExprKind::ConstantUnion {
                datatype_members,
                init_field,
            },
        ))
    }

    /// Build an array literal over a finite array type. A constant size must
    /// match the member count.
    pub fn constant_array(ty: Type, datatype_members: Vec<Expr>) -> IrResult<Expr> {
        let kind = ExprId::ConstantArray.name();
        let TypeKind::Array {
            subtype,
            array_size,
            size_is_infinite,
        } = ty.kind()
        else {
            return Err(IrError::type_mismatch(kind, "type", Expected::Array, ty.clone()));
        };
        if *size_is_infinite {
            return Err(IrError::invalid(kind, "array literal of infinite size"));
        }
        if let Some(size) = array_size.as_ref().and_then(Expr::as_constant_int) {
            if size.to_usize() != Some(datatype_members.len()) {
                return Err(IrError::invalid(
                    kind,
                    format!(
                        "{} members for an array of size {size}",
                        datatype_members.len()
                    ),
                ));
            }
        }
        for value in &datatype_members {
            require_same(kind, "datatype_members", value.ty(), subtype)?;
        }
        Ok(Expr::build(ty, ExprKind::ConstantArray { datatype_members }))
    }

    /// Build an array whose every element is `initializer`.
    pub fn constant_array_of(ty: Type, initializer: Expr) -> IrResult<Expr> {
        let kind = ExprId::ConstantArrayOf.name();
        let TypeKind::Array { subtype, .. } = ty.kind() else {
            return Err(IrError::type_mismatch(kind, "type", Expected::Array, ty.clone()));
        };
        require_same(kind, "initializer", initializer.ty(), subtype)?;
        Ok(Expr::build(ty, ExprKind::ConstantArrayOf { initializer }))
    }

    pub fn symbol(ty: Type, name: impl Into<Name>) -> IrResult<Expr> {
        let name = name.into();
        if name.is_empty() {
            return Err(IrError::invalid(ExprId::Symbol.name(), "empty name"));
        }
        Ok(Expr::build(ty, ExprKind::Symbol { name }))
    }

    pub fn r#if(ty: Type, cond: Expr, true_value: Expr, false_value: Expr) -> IrResult<Expr> {
        let kind = ExprId::If.name();
        require(kind, "cond", cond.ty(), Expected::Bool)?;
        require_same(kind, "true_value", true_value.ty(), &ty)?;
        require_same(kind, "false_value", false_value.ty(), &ty)?;
        Ok(Expr::build(
            ty,
            ExprKind::If {
                cond,
                true_value,
                false_value,
            },
        ))
    }

    /// Build any two-operand kind.
    ///
    /// - relations: boolean result, operands of one type
    /// - logical: everything boolean
    /// - arithmetic and bitwise: operands and result of one type
    /// - shifts: `side_1` of the result type, any bit-vector distance
    /// - `same_object`: boolean result, two pointers
    pub fn binary(op: BinaryOp, ty: Type, side_1: Expr, side_2: Expr) -> IrResult<Expr> {
        let kind = op.name();
        if op.is_relation() {
            require(kind, "type", &ty, Expected::Bool)?;
            require_same(kind, "side_2", side_2.ty(), side_1.ty())?;
        } else if op.is_logical() {
            require(kind, "type", &ty, Expected::Bool)?;
            require(kind, "side_1", side_1.ty(), Expected::Bool)?;
            require(kind, "side_2", side_2.ty(), Expected::Bool)?;
        } else if op.is_shift() {
            require(kind, "type", &ty, Expected::BitVector)?;
            require_same(kind, "side_1", side_1.ty(), &ty)?;
            require(kind, "side_2", side_2.ty(), Expected::BitVector)?;
        } else if op == BinaryOp::SameObject {
            require(kind, "type", &ty, Expected::Bool)?;
            require(kind, "side_1", side_1.ty(), Expected::Pointer)?;
            require(kind, "side_2", side_2.ty(), Expected::Pointer)?;
        } else {
            let expected = if op.is_bitwise() || op == BinaryOp::Modulus {
                Expected::BitVector
            } else {
                Expected::Numeric
            };
            require(kind, "type", &ty, expected)?;
            require_same(kind, "side_1", side_1.ty(), &ty)?;
            require_same(kind, "side_2", side_2.ty(), &ty)?;
        }
        Ok(Expr::build(ty, ExprKind::Binary { op, side_1, side_2 }))
    }

    /// Build any one-operand kind.
    pub fn unary(op: UnaryOp, ty: Type, operand: Expr) -> IrResult<Expr> {
        let kind = op.name();
        let field = op.operand_field();
        match op {
            UnaryOp::Typecast => {}
            UnaryOp::Not => {
                require(kind, "type", &ty, Expected::Bool)?;
                require(kind, field, operand.ty(), Expected::Bool)?;
            }
            UnaryOp::BitNot => {
                require(kind, "type", &ty, Expected::BitVector)?;
                require_same(kind, field, operand.ty(), &ty)?;
            }
            UnaryOp::Neg | UnaryOp::Abs => {
                require(kind, "type", &ty, Expected::Numeric)?;
                require_same(kind, field, operand.ty(), &ty)?;
            }
            UnaryOp::PointerOffset | UnaryOp::PointerObject => {
                require(kind, "type", &ty, Expected::BitVector)?;
                require(kind, field, operand.ty(), Expected::Pointer)?;
            }
            UnaryOp::AddressOf => {
                if ty.subtype() != Some(operand.ty()) || !ty.is_pointer() {
                    return Err(IrError::type_mismatch(
                        kind,
                        "type",
                        Expected::Type(Type::pointer(operand.ty().clone())),
                        ty,
                    ));
                }
            }
            UnaryOp::Dereference => {
                if operand.ty().subtype() != Some(&ty) || !operand.ty().is_pointer() {
                    return Err(IrError::type_mismatch(
                        kind,
                        field,
                        Expected::Type(Type::pointer(ty)),
                        operand.ty().clone(),
                    ));
                }
            }
            UnaryOp::IsNan => {
                require(kind, "type", &ty, Expected::Bool)?;
                require(kind, field, operand.ty(), Expected::FloatBv)?;
            }
            UnaryOp::Overflow => {
                require(kind, "type", &ty, Expected::Bool)?;
                let checkable = match operand.kind() {
                    ExprKind::Binary { op, .. } => op.is_arithmetic() || *op == BinaryOp::Shl,
                    ExprKind::Unary { op, .. } => *op == UnaryOp::Neg,
                    _ => false,
                };
                if !checkable {
                    return Err(IrError::invalid(
                        kind,
                        format!("cannot check `{}` for overflow", operand.expr_id()),
                    ));
                }
            }
        }
        Ok(Expr::build(ty, ExprKind::Unary { op, operand }))
    }

    /// Build a copy of `source_value` with one element or member replaced.
    ///
    /// Arrays are updated at a bit-vector index; structs and unions at the
    /// member named by a `constant_string` `update_field`.
    pub fn with(
        ty: Type,
        source_value: Expr,
        update_field: Expr,
        update_value: Expr,
    ) -> IrResult<Expr> {
        let kind = ExprId::With.name();
        require(kind, "type", &ty, Expected::Aggregate)?;
        require_same(kind, "source_value", source_value.ty(), &ty)?;
        if let Some(subtype) = ty.subtype() {
            require(kind, "update_field", update_field.ty(), Expected::BitVector)?;
            require_same(kind, "update_value", update_value.ty(), subtype)?;
        } else {
            let Some(member) = update_field.as_constant_string() else {
                return Err(IrError::invalid(
                    kind,
                    format!(
                        "struct update needs a member name, found `{}`",
                        update_field.expr_id()
                    ),
                ));
            };
            let Some(member_type) = ty.member_type(member) else {
                return Err(IrError::invalid(
                    kind,
                    format!("no member `{member}` in `{ty}`"),
                ));
            };
            require_same(kind, "update_value", update_value.ty(), member_type)?;
        }
        Ok(Expr::build(
            ty,
            ExprKind::With {
                source_value,
                update_field,
                update_value,
            },
        ))
    }

    /// Build a struct or union member access.
    pub fn member(ty: Type, source_value: Expr, member: impl Into<Name>) -> IrResult<Expr> {
        let kind = ExprId::Member.name();
        let member = member.into();
        require(
            kind,
            "source_value",
            source_value.ty(),
            Expected::StructOrUnion,
        )?;
        let Some(member_type) = source_value.ty().member_type(&member) else {
            return Err(IrError::invalid(
                kind,
                format!("no member `{member}` in `{}`", source_value.ty()),
            ));
        };
        require_same(kind, "type", &ty, member_type)?;
        Ok(Expr::build(
            ty,
            ExprKind::Member {
                source_value,
                member,
            },
        ))
    }

    /// Build an array element or string character access.
    pub fn index(ty: Type, source_value: Expr, index: Expr) -> IrResult<Expr> {
        let kind = ExprId::Index.name();
        require(kind, "source_value", source_value.ty(), Expected::Indexable)?;
        require(kind, "index", index.ty(), Expected::BitVector)?;
        match source_value.ty().subtype() {
            Some(subtype) => require_same(kind, "type", &ty, subtype)?,
            None => require(kind, "type", &ty, Expected::BitVector)?,
        }
        Ok(Expr::build(
            ty,
            ExprKind::Index {
                source_value,
                index,
            },
        ))
    }
}

macro_rules! binary_factories {
    ($($name:ident => $op:ident),* $(,)?) => {
        impl Expr {
            $(
                #[doc = concat!("Build an `", stringify!($name), "` node. See [`Expr::binary`].")]
                pub fn $name(ty: Type, side_1: Expr, side_2: Expr) -> IrResult<Expr> {
                    Expr::binary(BinaryOp::$op, ty, side_1, side_2)
                }
            )*
        }
    };
}

macro_rules! unary_factories {
    ($($name:ident => $op:ident),* $(,)?) => {
        impl Expr {
            $(
                #[doc = concat!("Build a `", stringify!($name), "` node. See [`Expr::unary`].")]
                pub fn $name(ty: Type, operand: Expr) -> IrResult<Expr> {
                    Expr::unary(UnaryOp::$op, ty, operand)
                }
            )*
        }
    };
}

binary_factories! {
    equality => Equality,
    notequal => NotEqual,
    lessthan => LessThan,
    greaterthan => GreaterThan,
    lessthanequal => LessThanEqual,
    greaterthanequal => GreaterThanEqual,
    and => And,
    or => Or,
    xor => Xor,
    implies => Implies,
    bitand => BitAnd,
    bitor => BitOr,
    bitxor => BitXor,
    lshr => Lshr,
    add => Add,
    sub => Sub,
    mul => Mul,
    div => Div,
    modulus => Modulus,
    shl => Shl,
    ashr => Ashr,
    same_object => SameObject,
}

unary_factories! {
    typecast => Typecast,
    not => Not,
    bitnot => BitNot,
    neg => Neg,
    abs => Abs,
    pointer_offset => PointerOffset,
    pointer_object => PointerObject,
    address_of => AddressOf,
    isnan => IsNan,
    overflow => Overflow,
    dereference => Dereference,
}
