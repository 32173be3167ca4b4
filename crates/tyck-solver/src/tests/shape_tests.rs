use std::sync::Arc;

use super::{shape_of, shape_ty};
use crate::{PropertyScope, TrinaryLogic, Ty, Type, VerbosityLevel};

#[test]
fn test_equals_is_reflexive() {
    let shape = shape_of(
        &[("x", Type::int())],
        &[("y", Type::string())],
    );
    assert!(shape.equals(&shape));
}

#[test]
fn test_equals_is_permutation_invariant() {
    let a = shape_of(&[("a", Type::int()), ("b", Type::string())], &[]);
    let b = shape_of(&[("b", Type::string()), ("a", Type::int())], &[]);
    assert!(a.equals(&b));
    assert!(b.equals(&a));
}

#[test]
fn test_equals_requires_same_cardinality() {
    let a = shape_of(&[("a", Type::int())], &[]);
    let b = shape_of(&[("a", Type::int()), ("b", Type::string())], &[]);
    assert!(!a.equals(&b));
    assert!(!b.equals(&a));
}

#[test]
fn test_equals_requires_identical_optional_membership() {
    let required = shape_of(&[("a", Type::int())], &[]);
    let optional = shape_of(&[], &[("a", Type::int())]);
    assert!(!required.equals(&optional));
}

#[test]
fn test_equals_compares_property_types_recursively() {
    let a = shape_of(&[("a", Type::int())], &[]);
    let b = shape_of(&[("a", Type::string())], &[]);
    assert!(!a.equals(&b));
}

#[test]
fn test_shape_is_not_equal_to_other_kinds() {
    let shape = shape_ty(&[("a", Type::int())], &[]);
    assert!(!shape.equals(&Type::Int));
    assert!(!shape.equals(&Type::Object));
}

#[test]
fn test_describe_renders_in_declaration_order() {
    let shape = shape_of(
        &[("x", Type::int())],
        &[("y", Type::string())],
    );
    assert_eq!(
        shape.describe(VerbosityLevel::TypeOnly),
        "object{x: int, y?: string}"
    );
}

#[test]
fn test_describe_is_identical_at_every_verbosity() {
    let shape = shape_of(&[("x", Type::int())], &[("y", Type::string())]);
    assert_eq!(
        shape.describe(VerbosityLevel::TypeOnly),
        shape.describe(VerbosityLevel::Precise)
    );
}

#[test]
fn test_has_property_is_trinary() {
    let shape = shape_of(&[("x", Type::int())], &[("y", Type::string())]);
    assert_eq!(shape.has_property("x"), TrinaryLogic::Yes);
    assert_eq!(shape.has_property("y"), TrinaryLogic::Maybe);
    assert_eq!(shape.has_property("z"), TrinaryLogic::No);
}

#[test]
fn test_get_property_builds_public_readable_descriptor() {
    let shape = shape_of(&[("x", Type::int())], &[]);
    let property = shape.get_property("x", &PropertyScope::OutOfClass);
    assert!(property.is_public());
    assert!(!property.is_static());
    assert!(property.is_readable());
    assert!(property.readable_type().equals(&Type::Int));
    assert_eq!(property.declaring_class(), None);
}

#[test]
#[should_panic(expected = "should not happen")]
fn test_get_property_panics_for_absent_name() {
    let shape = shape_of(&[("x", Type::int())], &[]);
    let _ = shape.get_property("missing", &PropertyScope::OutOfClass);
}

#[test]
fn test_traverse_identity_returns_same_instance() {
    let shape = shape_ty(&[("x", Type::int())], &[("y", Type::string())]);
    let traversed = Type::traverse(&shape, &mut |ty| ty.clone());
    assert!(Arc::ptr_eq(&shape, &traversed));
}

#[test]
fn test_traverse_rebuilds_when_a_property_changes() {
    let y_type = Type::string();
    let shape = Type::object_shape(
        crate::ObjectShapeType::new()
            .with_property("x", Type::int())
            .with_optional_property("y", y_type.clone()),
    );
    let traversed = Type::traverse(&shape, &mut |ty| {
        if ty.equals(&Type::Int) {
            Type::float()
        } else {
            ty.clone()
        }
    });
    assert!(!Arc::ptr_eq(&shape, &traversed));

    let Type::ObjectShape(rebuilt) = traversed.as_ref() else {
        panic!("expected an object shape");
    };
    assert!(rebuilt.properties()["x"].equals(&Type::Float));
    // Untouched property types keep their identity; the optional set is
    // carried over unchanged.
    assert!(Arc::ptr_eq(&rebuilt.properties()["y"], &y_type));
    assert!(rebuilt.is_optional("y"));
    assert!(!rebuilt.is_optional("x"));
}

#[test]
fn test_traverse_on_leaves_is_identity() {
    let int: Ty = Type::int();
    let traversed = Type::traverse(&int, &mut |_| Type::string());
    assert!(Arc::ptr_eq(&int, &traversed));
}

#[test]
fn test_traverse_rewrites_union_members() {
    let union = Type::union(vec![shape_ty(&[("x", Type::int())], &[]), Type::string()]);
    let traversed = Type::traverse(&union, &mut |ty| {
        if ty.equals(&Type::String) {
            Type::int()
        } else {
            ty.clone()
        }
    });
    assert!(!Arc::ptr_eq(&union, &traversed));
    let Type::Union(members) = traversed.as_ref() else {
        panic!("expected a union");
    };
    assert!(members[1].equals(&Type::Int));
}
