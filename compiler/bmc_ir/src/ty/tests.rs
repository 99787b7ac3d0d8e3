#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use super::*;
use crate::IrError;
use pretty_assertions::assert_eq;

fn uint(width: u32) -> Type {
    Type::unsignedbv(width).unwrap()
}

fn names(names: &[&str]) -> Vec<Name> {
    names.iter().copied().map(Name::from).collect()
}

#[test]
fn factories_tag_their_kind() {
    assert_eq!(Type::bool().type_id(), TypeId::Bool);
    assert_eq!(Type::empty().type_id(), TypeId::Empty);
    assert_eq!(uint(32).type_id(), TypeId::UnsignedBv);
    assert_eq!(Type::signedbv(8).unwrap().type_id(), TypeId::SignedBv);
    assert_eq!(Type::pointer(uint(8)).type_id(), TypeId::Pointer);
    assert_eq!(Type::string(8).unwrap().type_id(), TypeId::String);
    assert_eq!(
        Type::cpp_name("std::vector", vec![uint(8)]).unwrap().type_id(),
        TypeId::CppName
    );
}

#[test]
fn zero_width_is_rejected() {
    for err in [
        Type::unsignedbv(0).unwrap_err(),
        Type::signedbv(0).unwrap_err(),
        Type::string(0).unwrap_err(),
        Type::floatbv(0, 8).unwrap_err(),
    ] {
        assert!(matches!(err, IrError::InvalidConstruction { .. }));
    }
    assert_eq!(Type::floatbv(23, 0).unwrap_err().kind(), "floatbv");
}

#[test]
fn fixedbv_integer_bits_fit_width() {
    assert!(Type::fixedbv(32, 32).is_ok());
    assert_eq!(Type::fixedbv(16, 17).unwrap_err().kind(), "fixedbv");
}

#[test]
fn struct_members_must_match_names() {
    let err = Type::r#struct(vec![uint(8)], names(&["a", "b"]), "s").unwrap_err();
    assert_eq!(err.kind(), "struct");

    let err = Type::union(vec![uint(8), uint(8)], names(&["a", "a"]), "u").unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid `union`: duplicate member `a`"
    );

    assert!(Type::r#struct(vec![uint(8)], names(&[""]), "s").is_err());
}

#[test]
fn empty_names_are_rejected() {
    assert!(Type::symbol("").is_err());
    assert!(Type::cpp_name("", vec![]).is_err());
    assert!(Type::symbol("tag-foo").is_ok());
}

#[test]
fn code_argument_names_are_optional() {
    assert!(Type::code(vec![uint(8), uint(8)], Type::empty(), vec![], false).is_ok());
    assert!(Type::code(vec![uint(8)], Type::empty(), names(&["x"]), true).is_ok());
    assert!(Type::code(vec![uint(8)], Type::empty(), names(&["x", "y"]), false).is_err());
}

#[test]
fn array_size_matches_infinity() {
    let size = Expr::constant_int(uint(32), 4).unwrap();
    assert!(Type::array(uint(8), Some(size.clone()), false).is_ok());
    assert!(Type::array(uint(8), None, true).is_ok());
    assert!(Type::array(uint(8), None, false).is_err());
    assert!(Type::array(uint(8), Some(size), true).is_err());

    let flag = Expr::constant_bool(Type::bool(), true).unwrap();
    let err = Type::array(uint(8), Some(flag), false).unwrap_err();
    assert!(matches!(
        err,
        IrError::TypeMismatch {
            field: "array_size",
            ..
        }
    ));
}

#[test]
fn fields_in_declaration_order() {
    let ty = Type::code(vec![uint(8)], Type::bool(), names(&["x"]), false).unwrap();
    let field_names: Vec<&str> = ty.fields().iter().map(|field| field.name).collect();
    assert_eq!(
        field_names,
        vec!["arguments", "ret_type", "argument_names", "ellipsis"]
    );
    assert!(Type::bool().fields().is_empty());
}

#[test]
fn field_lookup_by_name() {
    let ty = Type::fixedbv(32, 16).unwrap();
    assert_eq!(ty.field("integer_bits"), Some(FieldValue::Uint(16)));
    assert_eq!(ty.field("fraction"), None);

    let ptr = Type::pointer(uint(8));
    assert_eq!(ptr.field("subtype").and_then(FieldValue::as_type), Some(&uint(8)));
}

#[test]
fn widths() {
    assert_eq!(uint(32).width(), Some(32));
    assert_eq!(Type::fixedbv(24, 8).unwrap().width(), Some(24));
    assert_eq!(Type::floatbv(23, 8).unwrap().width(), Some(32));
    assert_eq!(Type::bool().width(), None);
    assert_eq!(Type::pointer(uint(8)).width(), None);
}

#[test]
fn category_queries() {
    assert!(uint(8).is_bitvector());
    assert!(Type::signedbv(8).unwrap().is_numeric());
    assert!(Type::floatbv(52, 11).unwrap().is_numeric());
    assert!(!Type::floatbv(52, 11).unwrap().is_bitvector());
    assert!(!Type::bool().is_numeric());
    assert!(Type::union(vec![], vec![], "u").unwrap().is_struct_or_union());
}

#[test]
fn member_lookup() {
    let ty = Type::r#struct(vec![uint(8), Type::bool()], names(&["a", "b"]), "s").unwrap();
    assert_eq!(ty.member_type("b"), Some(&Type::bool()));
    assert_eq!(ty.member_type("c"), None);
    assert_eq!(uint(8).member_type("a"), None);
    assert_eq!(Type::pointer(uint(8)).subtype(), Some(&uint(8)));
}

#[test]
fn display_is_compact() {
    let size = Expr::constant_int(uint(32), 4).unwrap();
    let n = Expr::symbol(uint(32), "n").unwrap();
    let code = Type::code(vec![uint(8), Type::bool()], Type::empty(), vec![], true).unwrap();

    assert_eq!(uint(32).to_string(), "uint32");
    assert_eq!(Type::signedbv(8).unwrap().to_string(), "int8");
    assert_eq!(code.to_string(), "code(uint8, bool, ...) -> empty");
    assert_eq!(
        Type::array(uint(8), Some(size), false).unwrap().to_string(),
        "array(uint8)[4]"
    );
    assert_eq!(
        Type::array(uint(8), Some(n), false).unwrap().to_string(),
        "array(uint8)[*]"
    );
    assert_eq!(
        Type::array(uint(8), None, true).unwrap().to_string(),
        "array(uint8)[inf]"
    );
    assert_eq!(
        Type::cpp_name("std::pair", vec![uint(8), Type::bool()])
            .unwrap()
            .to_string(),
        "std::pair<uint8, bool>"
    );
}

#[test]
fn deep_clone_shares_no_node() {
    let ty = Type::pointer(uint(8));
    let copy = ty.deep_clone();
    assert_eq!(ty, copy);
    assert!(!Type::ptr_eq(&ty, &copy));
    assert!(!Type::ptr_eq(
        ty.subtype().unwrap(),
        copy.subtype().unwrap()
    ));

    // `Clone` shares.
    let shared = ty.clone();
    assert!(Type::ptr_eq(&ty, &shared));
}

#[test]
fn debug_lists_fields() {
    assert_eq!(
        format!("{:?}", uint(8)),
        "unsignedbv { width: Uint(8) }"
    );
}

#[test]
fn deep_pointer_chain_clones_compares_and_drops() {
    let mut ty = Type::bool();
    for _ in 0..100_000 {
        ty = Type::pointer(ty);
    }
    let copy = ty.deep_clone();
    assert!(copy == ty);
    assert!(Type::pointer(Type::bool()) < ty);
    drop(ty);
    assert!(copy.is_pointer());
}
