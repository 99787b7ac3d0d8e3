//! Expression kind discriminant.
//!
//! The declaration order of `ExprId` seeds the total order over
//! expressions: all `constant_int` nodes sort before all `add` nodes, and
//! so on. Adding a kind means appending a variant here, a case to
//! `ExprKind` with its field table, and a factory.

use std::fmt;

/// Expression kind discriminant.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(u8)]
pub enum ExprId {
    // === Constants ===
    ConstantInt,
    ConstantBool,
    ConstantString,
    ConstantStruct,
    ConstantUnion,
    ConstantArray,
    ConstantArrayOf,

    // === Leaves and conversions ===
    Symbol,
    Typecast,
    If,

    // === Relations ===
    Equality,
    NotEqual,
    LessThan,
    GreaterThan,
    LessThanEqual,
    GreaterThanEqual,

    // === Logic ===
    Not,
    And,
    Or,
    Xor,
    Implies,

    // === Bitwise ===
    BitAnd,
    BitOr,
    BitXor,
    BitNot,
    Lshr,

    // === Arithmetic ===
    Neg,
    Abs,
    Add,
    Sub,
    Mul,
    Div,
    Modulus,
    Shl,
    Ashr,

    // === Pointers and aggregates ===
    SameObject,
    PointerOffset,
    PointerObject,
    AddressOf,
    With,
    Member,
    Index,

    // === Checks ===
    IsNan,
    Overflow,
    Dereference,
}

impl ExprId {
    /// All kinds in declaration order.
    pub const ALL: [ExprId; 45] = [
        ExprId::ConstantInt,
        ExprId::ConstantBool,
        ExprId::ConstantString,
        ExprId::ConstantStruct,
        ExprId::ConstantUnion,
        ExprId::ConstantArray,
        ExprId::ConstantArrayOf,
        ExprId::Symbol,
        ExprId::Typecast,
        ExprId::If,
        ExprId::Equality,
        ExprId::NotEqual,
        ExprId::LessThan,
        ExprId::GreaterThan,
        ExprId::LessThanEqual,
        ExprId::GreaterThanEqual,
        ExprId::Not,
        ExprId::And,
        ExprId::Or,
        ExprId::Xor,
        ExprId::Implies,
        ExprId::BitAnd,
        ExprId::BitOr,
        ExprId::BitXor,
        ExprId::BitNot,
        ExprId::Lshr,
        ExprId::Neg,
        ExprId::Abs,
        ExprId::Add,
        ExprId::Sub,
        ExprId::Mul,
        ExprId::Div,
        ExprId::Modulus,
        ExprId::Shl,
        ExprId::Ashr,
        ExprId::SameObject,
        ExprId::PointerOffset,
        ExprId::PointerObject,
        ExprId::AddressOf,
        ExprId::With,
        ExprId::Member,
        ExprId::Index,
        ExprId::IsNan,
        ExprId::Overflow,
        ExprId::Dereference,
    ];

    /// Get the kind name used by the pretty printer.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ConstantInt => "constant_int",
            Self::ConstantBool => "constant_bool",
            Self::ConstantString => "constant_string",
            Self::ConstantStruct => "constant_struct",
            Self::ConstantUnion => "constant_union",
            Self::ConstantArray => "constant_array",
            Self::ConstantArrayOf => "constant_array_of",
            Self::Symbol => "symbol",
            Self::Typecast => "typecast",
            Self::If => "if",
            Self::Equality => "equality",
            Self::NotEqual => "notequal",
            Self::LessThan => "lessthan",
            Self::GreaterThan => "greaterthan",
            Self::LessThanEqual => "lessthanequal",
            Self::GreaterThanEqual => "greaterthanequal",
            Self::Not => "not",
            Self::And => "and",
            Self::Or => "or",
            Self::Xor => "xor",
            Self::Implies => "implies",
            Self::BitAnd => "bitand",
            Self::BitOr => "bitor",
            Self::BitXor => "bitxor",
            Self::BitNot => "bitnot",
            Self::Lshr => "lshr",
            Self::Neg => "neg",
            Self::Abs => "abs",
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
            Self::Modulus => "modulus",
            Self::Shl => "shl",
            Self::Ashr => "ashr",
            Self::SameObject => "same_object",
            Self::PointerOffset => "pointer_offset",
            Self::PointerObject => "pointer_object",
            Self::AddressOf => "address_of",
            Self::With => "with",
            Self::Member => "member",
            Self::Index => "index",
            Self::IsNan => "isnan",
            Self::Overflow => "overflow",
            Self::Dereference => "dereference",
        }
    }

    /// Look up a kind by its pretty-printer name.
    pub fn from_name(name: &str) -> Option<ExprId> {
        Self::ALL.into_iter().find(|id| id.name() == name)
    }

    /// Check if this is one of the constant kinds.
    #[inline]
    pub const fn is_constant(self) -> bool {
        (self as u8) <= (Self::ConstantArrayOf as u8)
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExprId::{}", self.name())
    }
}

impl fmt::Display for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const _: () = assert!(std::mem::size_of::<ExprId>() == 1);
