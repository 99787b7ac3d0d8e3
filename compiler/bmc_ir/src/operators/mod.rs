//! Binary and Unary Operators
//!
//! Two-operand kinds share the `ExprKind::Binary` representation and
//! one-operand kinds share `ExprKind::Unary`; the operator decides the
//! `ExprId`, the typing rule and (for unary kinds) the operand field name.

use crate::ExprId;

/// Binary operators. Both operands are stored as `side_1` and `side_2`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Relations
    Equality,
    NotEqual,
    LessThan,
    GreaterThan,
    LessThanEqual,
    GreaterThanEqual,

    // Logical
    And,
    Or,
    Xor,
    Implies,

    // Bitwise
    BitAnd,
    BitOr,
    BitXor,

    // Shifts
    Lshr,
    Shl,
    Ashr,

    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Modulus,

    // Pointers
    SameObject,
}

impl BinaryOp {
    /// The expression kind this operator builds.
    pub const fn expr_id(self) -> ExprId {
        match self {
            Self::Equality => ExprId::Equality,
            Self::NotEqual => ExprId::NotEqual,
            Self::LessThan => ExprId::LessThan,
            Self::GreaterThan => ExprId::GreaterThan,
            Self::LessThanEqual => ExprId::LessThanEqual,
            Self::GreaterThanEqual => ExprId::GreaterThanEqual,
            Self::And => ExprId::And,
            Self::Or => ExprId::Or,
            Self::Xor => ExprId::Xor,
            Self::Implies => ExprId::Implies,
            Self::BitAnd => ExprId::BitAnd,
            Self::BitOr => ExprId::BitOr,
            Self::BitXor => ExprId::BitXor,
            Self::Lshr => ExprId::Lshr,
            Self::Shl => ExprId::Shl,
            Self::Ashr => ExprId::Ashr,
            Self::Add => ExprId::Add,
            Self::Sub => ExprId::Sub,
            Self::Mul => ExprId::Mul,
            Self::Div => ExprId::Div,
            Self::Modulus => ExprId::Modulus,
            Self::SameObject => ExprId::SameObject,
        }
    }

    /// The operator that builds `id`, if `id` is a binary kind.
    pub const fn from_expr_id(id: ExprId) -> Option<Self> {
        Some(match id {
            ExprId::Equality => Self::Equality,
            ExprId::NotEqual => Self::NotEqual,
            ExprId::LessThan => Self::LessThan,
            ExprId::GreaterThan => Self::GreaterThan,
            ExprId::LessThanEqual => Self::LessThanEqual,
            ExprId::GreaterThanEqual => Self::GreaterThanEqual,
            ExprId::And => Self::And,
            ExprId::Or => Self::Or,
            ExprId::Xor => Self::Xor,
            ExprId::Implies => Self::Implies,
            ExprId::BitAnd => Self::BitAnd,
            ExprId::BitOr => Self::BitOr,
            ExprId::BitXor => Self::BitXor,
            ExprId::Lshr => Self::Lshr,
            ExprId::Shl => Self::Shl,
            ExprId::Ashr => Self::Ashr,
            ExprId::Add => Self::Add,
            ExprId::Sub => Self::Sub,
            ExprId::Mul => Self::Mul,
            ExprId::Div => Self::Div,
            ExprId::Modulus => Self::Modulus,
            ExprId::SameObject => Self::SameObject,
            _ => return None,
        })
    }

    /// Kind name of the built expression.
    #[inline]
    pub const fn name(self) -> &'static str {
        self.expr_id().name()
    }

    /// Comparison producing a boolean from two equally-typed operands.
    #[inline]
    pub const fn is_relation(self) -> bool {
        matches!(
            self,
            Self::Equality
                | Self::NotEqual
                | Self::LessThan
                | Self::GreaterThan
                | Self::LessThanEqual
                | Self::GreaterThanEqual
        )
    }

    /// Boolean connective.
    #[inline]
    pub const fn is_logical(self) -> bool {
        matches!(self, Self::And | Self::Or | Self::Xor | Self::Implies)
    }

    /// Bitwise connective over bit-vectors.
    #[inline]
    pub const fn is_bitwise(self) -> bool {
        matches!(self, Self::BitAnd | Self::BitOr | Self::BitXor)
    }

    /// Shift; the shift distance may have a different width.
    #[inline]
    pub const fn is_shift(self) -> bool {
        matches!(self, Self::Lshr | Self::Shl | Self::Ashr)
    }

    /// Arithmetic that can overflow.
    #[inline]
    pub const fn is_arithmetic(self) -> bool {
        matches!(
            self,
            Self::Add | Self::Sub | Self::Mul | Self::Div | Self::Modulus
        )
    }
}

/// Unary operators. Each stores its operand under its own field name.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    Typecast,
    Not,
    BitNot,
    Neg,
    Abs,
    PointerOffset,
    PointerObject,
    AddressOf,
    IsNan,
    Overflow,
    Dereference,
}

impl UnaryOp {
    /// The expression kind this operator builds.
    pub const fn expr_id(self) -> ExprId {
        match self {
            Self::Typecast => ExprId::Typecast,
            Self::Not => ExprId::Not,
            Self::BitNot => ExprId::BitNot,
            Self::Neg => ExprId::Neg,
            Self::Abs => ExprId::Abs,
            Self::PointerOffset => ExprId::PointerOffset,
            Self::PointerObject => ExprId::PointerObject,
            Self::AddressOf => ExprId::AddressOf,
            Self::IsNan => ExprId::IsNan,
            Self::Overflow => ExprId::Overflow,
            Self::Dereference => ExprId::Dereference,
        }
    }

    /// The operator that builds `id`, if `id` is a unary kind.
    pub const fn from_expr_id(id: ExprId) -> Option<Self> {
        Some(match id {
            ExprId::Typecast => Self::Typecast,
            ExprId::Not => Self::Not,
            ExprId::BitNot => Self::BitNot,
            ExprId::Neg => Self::Neg,
            ExprId::Abs => Self::Abs,
            ExprId::PointerOffset => Self::PointerOffset,
            ExprId::PointerObject => Self::PointerObject,
            ExprId::AddressOf => Self::AddressOf,
            ExprId::IsNan => Self::IsNan,
            ExprId::Overflow => Self::Overflow,
            ExprId::Dereference => Self::Dereference,
            _ => return None,
        })
    }

    /// Kind name of the built expression.
    #[inline]
    pub const fn name(self) -> &'static str {
        self.expr_id().name()
    }

    /// Field name the operand is stored and printed under.
    pub const fn operand_field(self) -> &'static str {
        match self {
            Self::Typecast => "from",
            Self::Not | Self::BitNot | Self::Neg | Self::Abs | Self::IsNan | Self::Dereference => {
                "value"
            }
            Self::PointerOffset | Self::PointerObject | Self::AddressOf => "ptr_obj",
            Self::Overflow => "operand",
        }
    }
}
