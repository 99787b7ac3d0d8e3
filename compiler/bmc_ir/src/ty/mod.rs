//! Type nodes.
//!
//! A `Type` is an immutable handle to a `TypeKind` plus its structural hash,
//! computed once at construction. Types are built only through the
//! factories in `make.rs`.

use std::fmt;
use std::sync::Arc;

use smallvec::smallvec;

use crate::field::{Field, FieldValue, Fields};
use crate::stack::ensure_sufficient_stack;
use crate::{Expr, Name, TypeId};

mod make;

/// Immutable handle to a type node.
///
/// `Clone` shares the node (same identity); `deep_clone` builds a new one.
#[derive(Clone)]
pub struct Type(Arc<TypeNode>);

struct TypeNode {
    kind: TypeKind,
    hash: u64,
}

// Nested types are released from a worklist; array size expressions
// release their own chains.
impl Drop for TypeNode {
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

/// Type variants and their fields, in declaration order.
#[derive(Clone)]
pub enum TypeKind {
    Bool,
    Empty,
    Symbol {
        symbol_name: Name,
    },
    Struct {
        members: Vec<Type>,
        member_names: Vec<Name>,
        name: Name,
    },
    Union {
        members: Vec<Type>,
        member_names: Vec<Name>,
        name: Name,
    },
    Code {
        arguments: Vec<Type>,
        ret_type: Type,
        argument_names: Vec<Name>,
        ellipsis: bool,
    },
    Array {
        subtype: Type,
        /// `None` exactly when `size_is_infinite`.
        array_size: Option<Expr>,
        size_is_infinite: bool,
    },
    Pointer {
        subtype: Type,
    },
    UnsignedBv {
        width: u32,
    },
    SignedBv {
        width: u32,
    },
    FixedBv {
        width: u32,
        integer_bits: u32,
    },
    FloatBv {
        fraction: u32,
        exponent: u32,
    },
    String {
        width: u32,
    },
    CppName {
        name: Name,
        template_args: Vec<Type>,
    },
}

impl TypeKind {
    pub fn type_id(&self) -> TypeId {
        match self {
            TypeKind::Bool => TypeId::Bool,
            TypeKind::Empty => TypeId::Empty,
            TypeKind::Symbol { .. } => TypeId::Symbol,
            TypeKind::Struct { .. } => TypeId::Struct,
            TypeKind::Union { .. } => TypeId::Union,
            TypeKind::Code { .. } => TypeId::Code,
            TypeKind::Array { .. } => TypeId::Array,
            TypeKind::Pointer { .. } => TypeId::Pointer,
            TypeKind::UnsignedBv { .. } => TypeId::UnsignedBv,
            TypeKind::SignedBv { .. } => TypeId::SignedBv,
            TypeKind::FixedBv { .. } => TypeId::FixedBv,
            TypeKind::FloatBv { .. } => TypeId::FloatBv,
            TypeKind::String { .. } => TypeId::String,
            TypeKind::CppName { .. } => TypeId::CppName,
        }
    }

    /// The field table of this kind.
    pub fn fields(&self) -> Fields<'_> {
        match self {
            TypeKind::Bool | TypeKind::Empty => Fields::new(),
            TypeKind::Symbol { symbol_name } => {
                smallvec![Field::new("symbol_name", FieldValue::Name(symbol_name))]
            }
            TypeKind::Struct {
                members,
                member_names,
                name,
            }
            | TypeKind::Union {
                members,
                member_names,
                name,
            } => smallvec![
                Field::new("members", FieldValue::Types(members)),
                Field::new("member_names", FieldValue::Names(member_names)),
                Field::new("name", FieldValue::Name(name)),
            ],
            TypeKind::Code {
                arguments,
                ret_type,
                argument_names,
                ellipsis,
            } => smallvec![
                Field::new("arguments", FieldValue::Types(arguments)),
                Field::new("ret_type", FieldValue::Type(ret_type)),
                Field::new("argument_names", FieldValue::Names(argument_names)),
                Field::new("ellipsis", FieldValue::Bool(*ellipsis)),
            ],
            TypeKind::Array {
                subtype,
                array_size,
                size_is_infinite,
            } => smallvec![
                Field::new("subtype", FieldValue::Type(subtype)),
                Field::new("array_size", FieldValue::OptExpr(array_size.as_ref())),
                Field::new("size_is_infinite", FieldValue::Bool(*size_is_infinite)),
            ],
            TypeKind::Pointer { subtype } => {
                smallvec![Field::new("subtype", FieldValue::Type(subtype))]
            }
            TypeKind::UnsignedBv { width }
            | TypeKind::SignedBv { width }
            | TypeKind::String { width } => {
                smallvec![Field::new("width", FieldValue::Uint(*width))]
            }
            TypeKind::FixedBv {
                width,
                integer_bits,
            } => smallvec![
                Field::new("width", FieldValue::Uint(*width)),
                Field::new("integer_bits", FieldValue::Uint(*integer_bits)),
            ],
            TypeKind::FloatBv { fraction, exponent } => smallvec![
                Field::new("fraction", FieldValue::Uint(*fraction)),
                Field::new("exponent", FieldValue::Uint(*exponent)),
            ],
            TypeKind::CppName {
                name,
                template_args,
            } => smallvec![
                Field::new("name", FieldValue::Name(name)),
                Field::new("template_args", FieldValue::Types(template_args)),
            ],
        }
    }

    /// Move every nested type into `out`, leaving `Empty` behind.
    fn take_children(&mut self, out: &mut Vec<Type>) {
        match std::mem::replace(self, TypeKind::Empty) {
            TypeKind::Struct { members, .. } | TypeKind::Union { members, .. } => {
                out.extend(members);
            }
            TypeKind::Code {
                arguments,
                ret_type,
                ..
            } => {
                out.extend(arguments);
                out.push(ret_type);
            }
            TypeKind::Array { subtype, .. } | TypeKind::Pointer { subtype } => out.push(subtype),
            TypeKind::CppName { template_args, .. } => out.extend(template_args),
            TypeKind::Bool
            | TypeKind::Empty
            | TypeKind::Symbol { .. }
            | TypeKind::UnsignedBv { .. }
            | TypeKind::SignedBv { .. }
            | TypeKind::FixedBv { .. }
            | TypeKind::FloatBv { .. }
            | TypeKind::String { .. } => {}
        }
    }

    fn deep_clone(&self) -> TypeKind {
        fn all(types: &[Type]) -> Vec<Type> {
            types.iter().map(Type::deep_clone).collect()
        }

        match self {
            TypeKind::Bool => TypeKind::Bool,
            TypeKind::Empty => TypeKind::Empty,
            TypeKind::Symbol { symbol_name } => TypeKind::Symbol {
                symbol_name: symbol_name.clone(),
            },
            TypeKind::Struct {
                members,
                member_names,
                name,
            } => TypeKind::Struct {
                members: all(members),
                member_names: member_names.clone(),
                name: name.clone(),
            },
            TypeKind::Union {
                members,
                member_names,
                name,
            } => TypeKind::Union {
                members: all(members),
                member_names: member_names.clone(),
                name: name.clone(),
            },
            TypeKind::Code {
                arguments,
                ret_type,
                argument_names,
                ellipsis,
            } => TypeKind::Code {
                arguments: all(arguments),
                ret_type: ret_type.deep_clone(),
                argument_names: argument_names.clone(),
                ellipsis: *ellipsis,
            },
            TypeKind::Array {
                subtype,
                array_size,
                size_is_infinite,
            } => TypeKind::Array {
                subtype: subtype.deep_clone(),
                array_size: array_size.as_ref().map(Expr::deep_clone),
                size_is_infinite: *size_is_infinite,
            },
            TypeKind::Pointer { subtype } => TypeKind::Pointer {
                subtype: subtype.deep_clone(),
            },
            TypeKind::CppName {
                name,
                template_args,
            } => TypeKind::CppName {
                name: name.clone(),
                template_args: all(template_args),
            },
            // Scalar-only kinds have no child nodes.
            TypeKind::UnsignedBv { .. }
            | TypeKind::SignedBv { .. }
            | TypeKind::FixedBv { .. }
            | TypeKind::FloatBv { .. }
            | TypeKind::String { .. } => self.clone(),
        }
    }
}

impl Type {
    /// Wrap an already validated kind.
    pub(crate) fn build(kind: TypeKind) -> Type {
        let hash = crate::cmp::structural_hash(kind.type_id(), None, &kind.fields());
        Type(Arc::new(TypeNode { kind, hash }))
    }

    #[inline]
    pub fn type_id(&self) -> TypeId {
        self.0.kind.type_id()
    }

    #[inline]
    pub fn kind(&self) -> &TypeKind {
        &self.0.kind
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> Fields<'_> {
        self.0.kind.fields()
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        self.fields()
            .into_iter()
            .find(|field| field.name == name)
            .map(|field| field.value)
    }

    /// Check if two handles point at the same node.
    #[inline]
    pub fn ptr_eq(a: &Type, b: &Type) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }

    /// Build a value-equal copy that shares no node with `self`.
    pub fn deep_clone(&self) -> Type {
        ensure_sufficient_stack(|| {
            Type(Arc::new(TypeNode {
                kind: self.0.kind.deep_clone(),
                hash: self.0.hash,
            }))
        })
    }

    #[inline]
    pub(crate) fn structural_hash(&self) -> u64 {
        self.0.hash
    }

    // Queries

    pub fn is_bool(&self) -> bool {
        matches!(self.kind(), TypeKind::Bool)
    }

    /// Unsigned or signed bit-vector.
    pub fn is_bitvector(&self) -> bool {
        matches!(
            self.kind(),
            TypeKind::UnsignedBv { .. } | TypeKind::SignedBv { .. }
        )
    }

    /// Bit-vector, fixed-point or floating-point.
    pub fn is_numeric(&self) -> bool {
        self.type_id().is_bitvector_like()
    }

    pub fn is_floatbv(&self) -> bool {
        matches!(self.kind(), TypeKind::FloatBv { .. })
    }

    pub fn is_pointer(&self) -> bool {
        matches!(self.kind(), TypeKind::Pointer { .. })
    }

    pub fn is_array(&self) -> bool {
        matches!(self.kind(), TypeKind::Array { .. })
    }

    pub fn is_struct(&self) -> bool {
        matches!(self.kind(), TypeKind::Struct { .. })
    }

    pub fn is_union(&self) -> bool {
        matches!(self.kind(), TypeKind::Union { .. })
    }

    pub fn is_struct_or_union(&self) -> bool {
        self.is_struct() || self.is_union()
    }

    pub fn is_string(&self) -> bool {
        matches!(self.kind(), TypeKind::String { .. })
    }

    /// Width in bits of bit-vector-like and string types.
    ///
    /// A `floatbv` is `fraction + exponent + 1` bits wide (sign bit).
    pub fn width(&self) -> Option<u32> {
        match *self.kind() {
            TypeKind::UnsignedBv { width }
            | TypeKind::SignedBv { width }
            | TypeKind::FixedBv { width, .. }
            | TypeKind::String { width } => Some(width),
            TypeKind::FloatBv { fraction, exponent } => {
                Some(fraction.saturating_add(exponent).saturating_add(1))
            }
            _ => None,
        }
    }

    /// Pointee of a pointer, element type of an array.
    pub fn subtype(&self) -> Option<&Type> {
        match self.kind() {
            TypeKind::Pointer { subtype } | TypeKind::Array { subtype, .. } => Some(subtype),
            _ => None,
        }
    }

    /// Members and member names of a struct or union.
    pub fn members(&self) -> Option<(&[Type], &[Name])> {
        match self.kind() {
            TypeKind::Struct {
                members,
                member_names,
                ..
            }
            | TypeKind::Union {
                members,
                member_names,
                ..
            } => Some((members, member_names)),
            _ => None,
        }
    }

    /// Type of the struct or union member called `name`.
    pub fn member_type(&self, name: &str) -> Option<&Type> {
        let (members, member_names) = self.members()?;
        member_names
            .iter()
            .position(|member| member.as_str() == name)
            .map(|index| &members[index])
    }
}

/// Compact one-line form used in error messages.
impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| self.write_compact(f))
    }
}

impl Type {
    fn write_compact(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            TypeKind::Bool => f.write_str("bool"),
            TypeKind::Empty => f.write_str("empty"),
            TypeKind::Symbol { symbol_name } => write!(f, "symbol({symbol_name})"),
            TypeKind::Struct { name, .. } => write!(f, "struct {name}"),
            TypeKind::Union { name, .. } => write!(f, "union {name}"),
            TypeKind::Code {
                arguments,
                ret_type,
                ellipsis,
                ..
            } => {
                f.write_str("code(")?;
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{argument}")?;
                }
                if *ellipsis {
                    f.write_str(if arguments.is_empty() { "..." } else { ", ..." })?;
                }
                write!(f, ") -> {ret_type}")
            }
            TypeKind::Array {
                subtype,
                array_size,
                ..
            } => match array_size.as_ref().and_then(Expr::as_constant_int) {
                Some(size) => write!(f, "array({subtype})[{size}]"),
                None if array_size.is_some() => write!(f, "array({subtype})[*]"),
                None => write!(f, "array({subtype})[inf]"),
            },
            TypeKind::Pointer { subtype } => write!(f, "pointer({subtype})"),
            TypeKind::UnsignedBv { width } => write!(f, "uint{width}"),
            TypeKind::SignedBv { width } => write!(f, "int{width}"),
            TypeKind::FixedBv {
                width,
                integer_bits,
            } => write!(f, "fixedbv({width}, {integer_bits})"),
            TypeKind::FloatBv { fraction, exponent } => {
                write!(f, "floatbv({fraction}, {exponent})")
            }
            TypeKind::String { .. } => f.write_str("string"),
            TypeKind::CppName {
                name,
                template_args,
            } => {
                write!(f, "{name}")?;
                if !template_args.is_empty() {
                    f.write_str("<")?;
                    for (i, arg) in template_args.iter().enumerate() {
                        if i > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{arg}")?;
                    }
                    f.write_str(">")?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| {
            let mut out = f.debug_struct(self.type_id().name());
            for field in self.fields() {
                out.field(field.name, &field.value);
            }
            out.finish()
        })
    }
}

#[cfg(test)]
mod tests;
