//! Type kind discriminant.
//!
//! Every type node carries a `TypeId` naming its kind. The declaration
//! order below is the primary key of the type ordering: two types of
//! different kinds compare by their `TypeId` alone.

use std::fmt;

/// Type kind discriminant.
///
/// New kinds are appended; reordering changes the total order of types.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(u8)]
pub enum TypeId {
    /// Boolean.
    Bool = 0,
    /// No value (`void`).
    Empty = 1,
    /// Reference to a named type not yet resolved.
    Symbol = 2,
    /// Struct with named members.
    Struct = 3,
    /// Union with named members.
    Union = 4,
    /// Function signature.
    Code = 5,
    /// Array of a subtype, finite or infinite.
    Array = 6,
    /// Pointer to a subtype.
    Pointer = 7,
    /// Unsigned bit-vector.
    UnsignedBv = 8,
    /// Two's complement signed bit-vector.
    SignedBv = 9,
    /// Fixed-point bit-vector.
    FixedBv = 10,
    /// IEEE floating-point bit-vector.
    FloatBv = 11,
    /// String literal type.
    String = 12,
    /// Unresolved C++ name with template arguments.
    CppName = 13,
}

impl TypeId {
    /// All kinds in declaration order.
    pub const ALL: [TypeId; 14] = [
        TypeId::Bool,
        TypeId::Empty,
        TypeId::Symbol,
        TypeId::Struct,
        TypeId::Union,
        TypeId::Code,
        TypeId::Array,
        TypeId::Pointer,
        TypeId::UnsignedBv,
        TypeId::SignedBv,
        TypeId::FixedBv,
        TypeId::FloatBv,
        TypeId::String,
        TypeId::CppName,
    ];

    /// Get the kind name used by the pretty printer.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Empty => "empty",
            Self::Symbol => "symbol",
            Self::Struct => "struct",
            Self::Union => "union",
            Self::Code => "code",
            Self::Array => "array",
            Self::Pointer => "pointer",
            Self::UnsignedBv => "unsignedbv",
            Self::SignedBv => "signedbv",
            Self::FixedBv => "fixedbv",
            Self::FloatBv => "floatbv",
            Self::String => "string",
            Self::CppName => "cpp_name",
        }
    }

    /// Look up a kind by its pretty-printer name.
    pub fn from_name(name: &str) -> Option<TypeId> {
        Self::ALL.into_iter().find(|id| id.name() == name)
    }

    /// Check if values of this kind are bit-vectors of a fixed width.
    #[inline]
    pub const fn is_bitvector_like(self) -> bool {
        matches!(
            self,
            Self::UnsignedBv | Self::SignedBv | Self::FixedBv | Self::FloatBv
        )
    }
}

impl fmt::Debug for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeId::{}", self.name())
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// TypeId must stay one byte
const _: () = assert!(std::mem::size_of::<TypeId>() == 1);
