//! Acceptance checking.
//!
//! `accepts_with_reason` decides whether a candidate type is assignable to
//! the accepting type, and explains non-Yes outcomes with an ordered reason
//! trail. The shape walk has two evaluation regimes that must not be mixed
//! up: a definitive rejection returns immediately with the first concrete
//! reason a developer should see, while Maybe/Yes outcomes keep folding so
//! the final trail reflects every weaker concern across all properties.

use tracing::trace;
use tyck_common::{AcceptsResult, TrinaryLogic, VerbosityLevel};

use crate::object_shape::ObjectShapeType;
use crate::property::PropertyScope;
use crate::registry::RelationContext;
use crate::types::{recommended_verbosity, Ty, Type};

impl Type {
    /// Truth-value projection of `accepts_with_reason`.
    pub fn accepts(&self, ctx: &RelationContext<'_>, other: &Ty, strict_types: bool) -> TrinaryLogic {
        self.accepts_with_reason(ctx, other, strict_types).result
    }

    /// Whether `other` is assignable to this type, with reasons.
    pub fn accepts_with_reason(
        &self,
        ctx: &RelationContext<'_>,
        other: &Ty,
        strict_types: bool,
    ) -> AcceptsResult {
        match self {
            Type::ObjectShape(shape) => {
                // Composite candidates own the decomposition logic; the
                // bottom type is accepted by everything.
                if other.is_composite() || other.is_never() {
                    return other.is_accepted_with_reason_by(self, ctx, strict_types);
                }
                shape.accepts_walk(ctx, other, strict_types)
            }
            Type::Union(members) => {
                let mut result = AcceptsResult::no();
                for member in members {
                    result = result.or(member.accepts_with_reason(ctx, other, strict_types));
                }
                result
            }
            Type::Intersection(members) => AcceptsResult::and_all(
                members
                    .iter()
                    .map(|member| member.accepts_with_reason(ctx, other, strict_types)),
            ),
            _ => AcceptsResult::new(self.is_super_type_of(ctx, other), Vec::new()),
        }
    }

    /// Dual-dispatch entry: `self` is the candidate, `acceptor` asked. Only
    /// composite and bottom candidates are routed here.
    pub fn is_accepted_with_reason_by(
        &self,
        acceptor: &Type,
        ctx: &RelationContext<'_>,
        strict_types: bool,
    ) -> AcceptsResult {
        match self {
            // Every branch of the union must be accepted.
            Type::Union(members) => AcceptsResult::and_all(
                members
                    .iter()
                    .map(|member| acceptor.accepts_with_reason(ctx, member, strict_types)),
            ),
            // A value of the intersection satisfies every branch, so one
            // accepting branch suffices.
            Type::Intersection(members) => {
                let mut result = AcceptsResult::no();
                for member in members {
                    result = result.or(acceptor.accepts_with_reason(ctx, member, strict_types));
                }
                result
            }
            Type::Never => AcceptsResult::yes(),
            _ => AcceptsResult::maybe(),
        }
    }
}

impl ObjectShapeType {
    /// The per-property acceptance walk. The candidate is never composite
    /// here; dispatch routes those through the candidate's own entry point.
    pub(crate) fn accepts_walk(
        &self,
        ctx: &RelationContext<'_>,
        other: &Ty,
        strict_types: bool,
    ) -> AcceptsResult {
        trace!(
            shape = %self.describe(VerbosityLevel::TypeOnly),
            candidate = %other.describe(VerbosityLevel::TypeOnly),
            "shape acceptance check"
        );

        // A dynamically-keyed candidate can neither be proven conformant
        // nor rejected statically.
        for class in other.object_class_reflections() {
            if ctx.is_universal_object_crate(class) {
                return AcceptsResult::maybe();
            }
        }

        let scope = PropertyScope::OutOfClass;
        let mut result = AcceptsResult::yes();
        for (name, expected) in self.properties() {
            let mut present = other.has_property(name);
            if present.is_no() {
                if self.is_optional(name) {
                    continue;
                }
                return AcceptsResult::new(
                    present,
                    vec![format!(
                        "{} does not have property ${name}.",
                        other.describe(VerbosityLevel::TypeOnly)
                    )],
                );
            }
            // Optional properties that might exist are not grounds for
            // rejection.
            if present.is_maybe() && self.is_optional(name) {
                present = TrinaryLogic::Yes;
            }
            let mut presence_reasons = Vec::new();
            if present.is_maybe() {
                presence_reasons.push(format!(
                    "{} might not have property ${name}.",
                    other.describe(VerbosityLevel::TypeOnly)
                ));
            }
            result = result.and(AcceptsResult::new(present, presence_reasons));

            // The candidate claimed existence but its reflection cannot
            // locate the property: definitive rejection, not foldable.
            let Ok(property) = other.get_property(name, &scope) else {
                return AcceptsResult::new(
                    TrinaryLogic::No,
                    vec![format!(
                        "{} does not have property ${name}.",
                        other.describe(VerbosityLevel::TypeOnly)
                    )],
                );
            };

            let holder = property
                .declaring_class()
                .map(str::to_string)
                .unwrap_or_else(|| other.describe(VerbosityLevel::TypeOnly));
            if !property.is_public() {
                return AcceptsResult::new(
                    TrinaryLogic::No,
                    vec![format!("Property {holder}::${name} is not public.")],
                );
            }
            if property.is_static() {
                return AcceptsResult::new(
                    TrinaryLogic::No,
                    vec![format!("Property {holder}::${name} is static.")],
                );
            }
            if !property.is_readable() {
                return AcceptsResult::new(
                    TrinaryLogic::No,
                    vec![format!("Property {holder}::${name} is not readable.")],
                );
            }

            let actual = property.readable_type();
            let verbosity = recommended_verbosity(expected, actual);
            let expected_description = expected.describe(verbosity);
            let actual_description = actual.describe(verbosity);
            let mut property_result = expected
                .accepts_with_reason(ctx, actual, strict_types)
                .decorate_reasons(|reason| {
                    format!(
                        "Property (${name}) type {expected_description} does not accept type {actual_description}: {reason}"
                    )
                });
            if property_result.reasons.is_empty() && !property_result.is_yes() {
                property_result.reasons.push(format!(
                    "Property (${name}) type {expected_description} does not accept type {actual_description}."
                ));
            }
            // A hard property rejection propagates without finishing the
            // remaining properties.
            if property_result.is_no() {
                return property_result;
            }
            result = result.and(property_result);
        }

        // Candidates that are not object-like at all cannot satisfy any
        // shape.
        result.and(AcceptsResult::new(other.is_object(), Vec::new()))
    }
}
