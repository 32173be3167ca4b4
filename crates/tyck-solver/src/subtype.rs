//! Subtyping.
//!
//! `is_super_type_of` is the reasonless dual of acceptance: the same
//! structural walk, short-circuiting to No on every hard property failure
//! instead of attaching a reason. The two must agree on the trinary verdict
//! for identical inputs.

use tracing::trace;
use tyck_common::{TrinaryLogic, VerbosityLevel};

use crate::object_shape::ObjectShapeType;
use crate::property::PropertyScope;
use crate::registry::RelationContext;
use crate::types::{Ty, Type};

impl Type {
    /// Whether every value of `other` is a value of this type.
    pub fn is_super_type_of(&self, ctx: &RelationContext<'_>, other: &Ty) -> TrinaryLogic {
        // Top and bottom first.
        if matches!(self, Type::Mixed) {
            return TrinaryLogic::Yes;
        }
        if other.is_never() {
            return TrinaryLogic::Yes;
        }
        // Candidates that decompose themselves: composites distribute,
        // templates compare through their bound.
        match other.as_ref() {
            Type::Union(_) | Type::Intersection(_) | Type::Template(_) => {
                return other.is_sub_type_of(ctx, self);
            }
            Type::Mixed => return TrinaryLogic::Maybe,
            _ => {}
        }
        match self {
            Type::Mixed => TrinaryLogic::Yes,
            Type::Never => TrinaryLogic::No,
            Type::Int => TrinaryLogic::from_bool(matches!(other.as_ref(), Type::Int)),
            Type::Float => TrinaryLogic::from_bool(matches!(other.as_ref(), Type::Float)),
            Type::String => TrinaryLogic::from_bool(matches!(other.as_ref(), Type::String)),
            Type::Bool => TrinaryLogic::from_bool(matches!(other.as_ref(), Type::Bool)),
            Type::Object => other.is_object(),
            Type::NamedObject(class) => match other.as_ref() {
                Type::NamedObject(other_class) => {
                    TrinaryLogic::from_bool(class.name() == other_class.name())
                }
                // A structural shape or an untyped object might turn out to
                // be an instance of this class; it can never be proven.
                Type::ObjectShape(_) | Type::Object => TrinaryLogic::Maybe,
                _ => TrinaryLogic::No,
            },
            Type::ObjectShape(shape) => shape.is_super_type_of_walk(ctx, other),
            Type::Union(members) => TrinaryLogic::or_all(
                members
                    .iter()
                    .map(|member| member.is_super_type_of(ctx, other)),
            ),
            Type::Intersection(members) => TrinaryLogic::and_all(
                members
                    .iter()
                    .map(|member| member.is_super_type_of(ctx, other)),
            ),
            Type::Template(template) => {
                if self.equals(other) {
                    TrinaryLogic::Yes
                } else {
                    // The placeholder could be instantiated to any subtype
                    // of its bound, so nothing else is ever provable.
                    template
                        .bound()
                        .is_super_type_of(ctx, other)
                        .and(TrinaryLogic::Maybe)
                }
            }
        }
    }

    /// Dual-dispatch entry: `self` is the candidate. Only composites,
    /// templates, and the bottom type are routed here.
    pub fn is_sub_type_of(&self, ctx: &RelationContext<'_>, supertype: &Type) -> TrinaryLogic {
        match self {
            Type::Union(members) => TrinaryLogic::and_all(
                members
                    .iter()
                    .map(|member| supertype.is_super_type_of(ctx, member)),
            ),
            Type::Intersection(members) => TrinaryLogic::or_all(
                members
                    .iter()
                    .map(|member| supertype.is_super_type_of(ctx, member)),
            ),
            Type::Never => TrinaryLogic::Yes,
            Type::Template(template) => {
                if supertype.equals(self) {
                    TrinaryLogic::Yes
                } else {
                    supertype
                        .is_super_type_of(ctx, template.bound())
                        .and(TrinaryLogic::Maybe)
                }
            }
            _ => TrinaryLogic::Maybe,
        }
    }
}

impl ObjectShapeType {
    /// The per-property subtyping walk (candidate is not composite).
    pub(crate) fn is_super_type_of_walk(
        &self,
        ctx: &RelationContext<'_>,
        other: &Ty,
    ) -> TrinaryLogic {
        trace!(
            shape = %self.describe(VerbosityLevel::TypeOnly),
            candidate = %other.describe(VerbosityLevel::TypeOnly),
            "shape subtype check"
        );

        // An unconstrained object can never be proven to satisfy the shape.
        if matches!(other.as_ref(), Type::Object) {
            return TrinaryLogic::Maybe;
        }
        for class in other.object_class_reflections() {
            if ctx.is_universal_object_crate(class) {
                return TrinaryLogic::Maybe;
            }
        }

        let scope = PropertyScope::OutOfClass;
        let mut result = TrinaryLogic::Yes;
        for (name, expected) in self.properties() {
            let mut present = other.has_property(name);
            if present.is_no() {
                if self.is_optional(name) {
                    continue;
                }
                return present;
            }
            if present.is_maybe() && self.is_optional(name) {
                present = TrinaryLogic::Yes;
            }
            result = result.and(present);

            let Ok(property) = other.get_property(name, &scope) else {
                return TrinaryLogic::No;
            };
            if !property.is_public() || property.is_static() || !property.is_readable() {
                return TrinaryLogic::No;
            }

            let inner = expected.is_super_type_of(ctx, property.readable_type());
            if inner.is_no() {
                return inner;
            }
            result = result.and(inner);
        }

        result.and(other.is_object())
    }
}
