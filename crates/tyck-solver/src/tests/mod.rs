//! Solver test suite.

mod infer_tests;
mod shape_tests;

use crate::{ClassReflection, ObjectShapeType, PropertyReflection, Ty, Type};

/// Build a shape from required and optional `(name, type)` pairs.
pub(crate) fn shape_of(required: &[(&str, Ty)], optional: &[(&str, Ty)]) -> ObjectShapeType {
    let mut shape = ObjectShapeType::new();
    for (name, ty) in required {
        shape = shape.with_property(*name, ty.clone());
    }
    for (name, ty) in optional {
        shape = shape.with_optional_property(*name, ty.clone());
    }
    shape
}

pub(crate) fn shape_ty(required: &[(&str, Ty)], optional: &[(&str, Ty)]) -> Ty {
    Type::object_shape(shape_of(required, optional))
}

/// A class exposing public int properties `x` and `y`.
pub(crate) fn point_class() -> ClassReflection {
    ClassReflection::new("Point")
        .with_property(PropertyReflection::new("x", Type::int()))
        .with_property(PropertyReflection::new("y", Type::int()))
}

pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
