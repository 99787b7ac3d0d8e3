//! Construction errors.
//!
//! Only factories fail. Comparison, cloning, field access and pretty
//! printing are total on validly constructed nodes.

use std::fmt;

use crate::Type;

/// Result of a factory call.
pub type IrResult<T> = Result<T, IrError>;

/// Error raised by a factory rejecting its arguments.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IrError {
    /// A field's type violates the kind's typing rule.
    #[error("type mismatch in `{kind}` field `{field}`: expected {expected}, found `{found}`")]
    TypeMismatch {
        kind: &'static str,
        field: &'static str,
        expected: Expected,
        found: Type,
    },
    /// A scalar field or field combination fails a domain check.
    #[error("invalid `{kind}`: {reason}")]
    InvalidConstruction { kind: &'static str, reason: String },
}

impl IrError {
    pub(crate) fn type_mismatch(
        kind: &'static str,
        field: &'static str,
        expected: Expected,
        found: Type,
    ) -> Self {
        tracing::debug!(kind, field, %expected, %found, "rejected construction: type mismatch");
        IrError::TypeMismatch {
            kind,
            field,
            expected,
            found,
        }
    }

    pub(crate) fn invalid(kind: &'static str, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        tracing::debug!(kind, %reason, "rejected construction");
        IrError::InvalidConstruction { kind, reason }
    }

    /// Name of the kind whose factory failed.
    pub fn kind(&self) -> &'static str {
        match self {
            IrError::TypeMismatch { kind, .. } | IrError::InvalidConstruction { kind, .. } => *kind,
        }
    }
}

/// What a typing rule required of a field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expected {
    /// Exactly this type.
    Type(Type),
    Bool,
    /// Unsigned or signed bit-vector.
    BitVector,
    /// Bit-vector, fixed-point or floating-point.
    Numeric,
    FloatBv,
    Pointer,
    Array,
    Struct,
    Union,
    StructOrUnion,
    /// Array, struct or union.
    Aggregate,
    /// Array or string.
    Indexable,
    String,
}

impl Expected {
    /// Check if `ty` satisfies this requirement.
    pub fn accepts(&self, ty: &Type) -> bool {
        match self {
            Expected::Type(expected) => expected == ty,
            Expected::Bool => ty.is_bool(),
            Expected::BitVector => ty.is_bitvector(),
            Expected::Numeric => ty.is_numeric(),
            Expected::FloatBv => ty.is_floatbv(),
            Expected::Pointer => ty.is_pointer(),
            Expected::Array => ty.is_array(),
            Expected::Struct => ty.is_struct(),
            Expected::Union => ty.is_union(),
            Expected::StructOrUnion => ty.is_struct_or_union(),
            Expected::Aggregate => ty.is_array() || ty.is_struct_or_union(),
            Expected::Indexable => ty.is_array() || ty.is_string(),
            Expected::String => ty.is_string(),
        }
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Type(ty) => write!(f, "`{ty}`"),
            Expected::Bool => f.write_str("a boolean type"),
            Expected::BitVector => f.write_str("a bit-vector type"),
            Expected::Numeric => f.write_str("a numeric type"),
            Expected::FloatBv => f.write_str("a floating-point type"),
            Expected::Pointer => f.write_str("a pointer type"),
            Expected::Array => f.write_str("an array type"),
            Expected::Struct => f.write_str("a struct type"),
            Expected::Union => f.write_str("a union type"),
            Expected::StructOrUnion => f.write_str("a struct or union type"),
            Expected::Aggregate => f.write_str("an array, struct or union type"),
            Expected::Indexable => f.write_str("an array or string type"),
            Expected::String => f.write_str("a string type"),
        }
    }
}
