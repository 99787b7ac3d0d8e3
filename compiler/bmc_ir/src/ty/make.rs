//! Type factories.
//!
//! One constructor per kind, taking that kind's fields in declaration
//! order. Kinds whose fields admit no invalid value return the node
//! directly; the rest validate and return `IrResult`.

use rustc_hash::FxHashSet;

use super::{Type, TypeKind};
use crate::{Expected, Expr, IrError, IrResult, Name, TypeId};

impl Type {
    pub fn bool() -> Type {
        Type::build(TypeKind::Bool)
    }

    pub fn empty() -> Type {
        Type::build(TypeKind::Empty)
    }

    pub fn symbol(symbol_name: impl Into<Name>) -> IrResult<Type> {
        let symbol_name = symbol_name.into();
        require_name(TypeId::Symbol, &symbol_name)?;
        Ok(Type::build(TypeKind::Symbol { symbol_name }))
    }

    /// Build a struct type. Member names must be unique and non-empty.
    pub fn r#struct(
        members: Vec<Type>,
        member_names: Vec<Name>,
        name: impl Into<Name>,
    ) -> IrResult<Type> {
        check_members(TypeId::Struct, &members, &member_names)?;
        Ok(Type::build(TypeKind::Struct {
            members,
            member_names,
            name: name.into(),
        }))
    }

    /// Build a union type. Member names must be unique and non-empty.
    pub fn union(
        members: Vec<Type>,
        member_names: Vec<Name>,
        name: impl Into<Name>,
    ) -> IrResult<Type> {
        check_members(TypeId::Union, &members, &member_names)?;
        Ok(Type::build(TypeKind::Union {
            members,
            member_names,
            name: name.into(),
        }))
    }

    /// Build a function signature. `argument_names` is either empty or
    /// names every argument.
    pub fn code(
        arguments: Vec<Type>,
        ret_type: Type,
        argument_names: Vec<Name>,
        ellipsis: bool,
    ) -> IrResult<Type> {
        if !argument_names.is_empty() && argument_names.len() != arguments.len() {
            return Err(IrError::invalid(
                TypeId::Code.name(),
                format!(
                    "{} argument names for {} arguments",
                    argument_names.len(),
                    arguments.len()
                ),
            ));
        }
        Ok(Type::build(TypeKind::Code {
            arguments,
            ret_type,
            argument_names,
            ellipsis,
        }))
    }

    /// Build an array type. A finite array carries a bit-vector size
    /// expression; an infinite one carries none.
    pub fn array(
        subtype: Type,
        array_size: Option<Expr>,
        size_is_infinite: bool,
    ) -> IrResult<Type> {
        let kind = TypeId::Array.name();
        match (&array_size, size_is_infinite) {
            (Some(size), false) => {
                if !size.ty().is_bitvector() {
                    return Err(IrError::type_mismatch(
                        kind,
                        "array_size",
                        Expected::BitVector,
                        size.ty().clone(),
                    ));
                }
            }
            (None, true) => {}
            (Some(_), true) => {
                return Err(IrError::invalid(kind, "infinite array with a size"));
            }
            (None, false) => {
                return Err(IrError::invalid(kind, "finite array without a size"));
            }
        }
        Ok(Type::build(TypeKind::Array {
            subtype,
            array_size,
            size_is_infinite,
        }))
    }

    pub fn pointer(subtype: Type) -> Type {
        Type::build(TypeKind::Pointer { subtype })
    }

    pub fn unsignedbv(width: u32) -> IrResult<Type> {
        require_width(TypeId::UnsignedBv, "width", width)?;
        Ok(Type::build(TypeKind::UnsignedBv { width }))
    }

    pub fn signedbv(width: u32) -> IrResult<Type> {
        require_width(TypeId::SignedBv, "width", width)?;
        Ok(Type::build(TypeKind::SignedBv { width }))
    }

    /// Build a fixed-point type with `integer_bits` of its `width` before
    /// the binary point.
    pub fn fixedbv(width: u32, integer_bits: u32) -> IrResult<Type> {
        require_width(TypeId::FixedBv, "width", width)?;
        if integer_bits > width {
            return Err(IrError::invalid(
                TypeId::FixedBv.name(),
                format!("{integer_bits} integer bits exceed width {width}"),
            ));
        }
        Ok(Type::build(TypeKind::FixedBv {
            width,
            integer_bits,
        }))
    }

    pub fn floatbv(fraction: u32, exponent: u32) -> IrResult<Type> {
        require_width(TypeId::FloatBv, "fraction", fraction)?;
        require_width(TypeId::FloatBv, "exponent", exponent)?;
        Ok(Type::build(TypeKind::FloatBv { fraction, exponent }))
    }

    pub fn string(width: u32) -> IrResult<Type> {
        require_width(TypeId::String, "width", width)?;
        Ok(Type::build(TypeKind::String { width }))
    }

    pub fn cpp_name(name: impl Into<Name>, template_args: Vec<Type>) -> IrResult<Type> {
        let name = name.into();
        require_name(TypeId::CppName, &name)?;
        Ok(Type::build(TypeKind::CppName {
            name,
            template_args,
        }))
    }
}

fn require_width(id: TypeId, field: &str, bits: u32) -> IrResult<()> {
    if bits == 0 {
        return Err(IrError::invalid(id.name(), format!("{field} must be positive")));
    }
    Ok(())
}

fn require_name(id: TypeId, name: &Name) -> IrResult<()> {
    if name.is_empty() {
        return Err(IrError::invalid(id.name(), "empty name"));
    }
    Ok(())
}

fn check_members(id: TypeId, members: &[Type], member_names: &[Name]) -> IrResult<()> {
    if members.len() != member_names.len() {
        return Err(IrError::invalid(
            id.name(),
            format!(
                "{} members but {} member names",
                members.len(),
                member_names.len()
            ),
        ));
    }
    let mut seen = FxHashSet::default();
    for name in member_names {
        require_name(id, name)?;
        if !seen.insert(name.as_str()) {
            return Err(IrError::invalid(
                id.name(),
                format!("duplicate member `{name}`"),
            ));
        }
    }
    Ok(())
}
