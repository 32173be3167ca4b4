//! The closed type variant set and its shared handle.
//!
//! `Type` is a closed set of tagged variants; `Ty` is the reference-counted
//! handle the rest of the system passes around. Sharing matters: traversal
//! returns the *same* handle when nothing changed, and upstream rewriting
//! passes rely on pointer identity to detect no-ops.

use std::sync::Arc;

use tyck_common::{TrinaryLogic, VerbosityLevel};

use crate::infer::TemplateType;
use crate::object_shape::ObjectShapeType;
use crate::property::ClassReflection;
use crate::registry::RelationContext;

/// Shared handle to an immutable type.
pub type Ty = Arc<Type>;

/// A type in the lattice.
///
/// The set is closed on purpose: composite variants (union, intersection)
/// own the decomposition logic for comparisons, and every other variant
/// answers the same capability set, so dispatch is a `match` rather than
/// open-ended inheritance.
#[derive(Debug, Clone)]
pub enum Type {
    /// Top: any value at all.
    Mixed,
    /// Bottom: no value.
    Never,
    Int,
    Float,
    String,
    Bool,
    /// Some object, class unknown.
    Object,
    /// An object of a known class.
    NamedObject(ClassReflection),
    /// A structural object shape.
    ObjectShape(ObjectShapeType),
    Union(Vec<Ty>),
    Intersection(Vec<Ty>),
    /// A generic placeholder, bounded from above.
    Template(TemplateType),
}

impl Type {
    pub fn mixed() -> Ty {
        Arc::new(Type::Mixed)
    }

    pub fn never() -> Ty {
        Arc::new(Type::Never)
    }

    pub fn int() -> Ty {
        Arc::new(Type::Int)
    }

    pub fn float() -> Ty {
        Arc::new(Type::Float)
    }

    pub fn string() -> Ty {
        Arc::new(Type::String)
    }

    pub fn boolean() -> Ty {
        Arc::new(Type::Bool)
    }

    pub fn object() -> Ty {
        Arc::new(Type::Object)
    }

    pub fn named_object(class: ClassReflection) -> Ty {
        Arc::new(Type::NamedObject(class))
    }

    pub fn object_shape(shape: ObjectShapeType) -> Ty {
        Arc::new(Type::ObjectShape(shape))
    }

    /// A union of the given members. A single member is returned as-is; no
    /// further normalization (flattening, deduplication) happens at this
    /// layer, that is the job of the external type combinator.
    pub fn union(mut members: Vec<Ty>) -> Ty {
        if members.len() == 1 {
            return members.pop().unwrap_or_else(Type::never);
        }
        Arc::new(Type::Union(members))
    }

    pub fn intersection(mut members: Vec<Ty>) -> Ty {
        if members.len() == 1 {
            return members.pop().unwrap_or_else(Type::never);
        }
        Arc::new(Type::Intersection(members))
    }

    pub fn template(template: TemplateType) -> Ty {
        Arc::new(Type::Template(template))
    }

    /// The generic numeric fallback of arithmetic coercion.
    pub fn float_or_int() -> Ty {
        Type::union(vec![Type::float(), Type::int()])
    }

    #[inline]
    pub fn is_never(&self) -> bool {
        matches!(self, Type::Never)
    }

    /// Whether this is a composite (union or intersection) that owns its
    /// own decomposition logic for comparisons.
    #[inline]
    pub fn is_composite(&self) -> bool {
        matches!(self, Type::Union(_) | Type::Intersection(_))
    }

    /// Whether values of this type are objects.
    pub fn is_object(&self) -> TrinaryLogic {
        match self {
            Type::Object | Type::NamedObject(_) | Type::ObjectShape(_) => TrinaryLogic::Yes,
            Type::Mixed => TrinaryLogic::Maybe,
            Type::Union(members) => {
                TrinaryLogic::extreme_identity(members.iter().map(|member| member.is_object()))
            }
            Type::Intersection(members) => {
                TrinaryLogic::or_all(members.iter().map(|member| member.is_object()))
            }
            Type::Template(template) => template.bound().is_object(),
            _ => TrinaryLogic::No,
        }
    }

    /// Every class reflection reachable from this type. Non-nominal types
    /// contribute nothing.
    pub fn object_class_reflections(&self) -> Vec<&ClassReflection> {
        match self {
            Type::NamedObject(class) => vec![class],
            Type::Union(members) | Type::Intersection(members) => members
                .iter()
                .flat_map(|member| member.object_class_reflections())
                .collect(),
            Type::Template(template) => template.bound().object_class_reflections(),
            _ => Vec::new(),
        }
    }

    /// Structural equality. Composite members are matched as multisets;
    /// nominal objects compare by class name.
    pub fn equals(&self, other: &Type) -> bool {
        match (self, other) {
            (Type::Mixed, Type::Mixed)
            | (Type::Never, Type::Never)
            | (Type::Int, Type::Int)
            | (Type::Float, Type::Float)
            | (Type::String, Type::String)
            | (Type::Bool, Type::Bool)
            | (Type::Object, Type::Object) => true,
            (Type::NamedObject(a), Type::NamedObject(b)) => a.name() == b.name(),
            (Type::ObjectShape(a), Type::ObjectShape(b)) => a.equals(b),
            (Type::Union(a), Type::Union(b)) | (Type::Intersection(a), Type::Intersection(b)) => {
                members_equal(a, b)
            }
            (Type::Template(a), Type::Template(b)) => a.equals(b),
            _ => false,
        }
    }

    /// Render this type for humans.
    pub fn describe(&self, level: VerbosityLevel) -> String {
        match self {
            Type::Mixed => "mixed".to_string(),
            Type::Never => "never".to_string(),
            Type::Int => "int".to_string(),
            Type::Float => "float".to_string(),
            Type::String => "string".to_string(),
            Type::Bool => "bool".to_string(),
            Type::Object => "object".to_string(),
            Type::NamedObject(class) => class.name().to_string(),
            Type::ObjectShape(shape) => shape.describe(level),
            Type::Union(members) => join_members(members, "|", level),
            Type::Intersection(members) => join_members(members, "&", level),
            Type::Template(template) => template.describe(level),
        }
    }

    /// Apply `f` to every directly nested type and rebuild. When every
    /// result is pointer-identical to its input the original handle is
    /// returned unchanged, so callers can detect no-ops with `Arc::ptr_eq`.
    pub fn traverse<F: FnMut(&Ty) -> Ty>(this: &Ty, f: &mut F) -> Ty {
        match this.as_ref() {
            Type::ObjectShape(shape) => match shape.traverse(f) {
                Some(rebuilt) => Type::object_shape(rebuilt),
                None => this.clone(),
            },
            Type::Union(members) => match traverse_members(members, f) {
                Some(mapped) => Arc::new(Type::Union(mapped)),
                None => this.clone(),
            },
            Type::Intersection(members) => match traverse_members(members, f) {
                Some(mapped) => Arc::new(Type::Intersection(mapped)),
                None => this.clone(),
            },
            _ => this.clone(),
        }
    }

    /// Result type of raising `this` to `exponent`.
    ///
    /// Object-like operands carry no numeric information, so unless the
    /// exponent is provably disjoint either operand's own type may flow
    /// through; a disjoint or bottom exponent falls back to the numeric
    /// union arithmetic coercion produces.
    pub fn exponentiate(this: &Ty, ctx: &RelationContext<'_>, exponent: &Ty) -> Ty {
        if !exponent.is_never() && !this.is_super_type_of(ctx, exponent).is_no() {
            return Type::union(vec![this.clone(), exponent.clone()]);
        }
        Type::float_or_int()
    }
}

/// Multiset equality over composite members.
fn members_equal(a: &[Ty], b: &[Ty]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut remaining: Vec<&Ty> = b.iter().collect();
    for member in a {
        let Some(position) = remaining.iter().position(|other| member.equals(other)) else {
            return false;
        };
        remaining.swap_remove(position);
    }
    true
}

fn join_members(members: &[Ty], separator: &str, level: VerbosityLevel) -> String {
    members
        .iter()
        .map(|member| member.describe(level))
        .collect::<Vec<_>>()
        .join(separator)
}

fn traverse_members<F: FnMut(&Ty) -> Ty>(members: &[Ty], f: &mut F) -> Option<Vec<Ty>> {
    let mut changed = false;
    let mapped: Vec<Ty> = members
        .iter()
        .map(|member| {
            let result = f(member);
            if !Arc::ptr_eq(&result, member) {
                changed = true;
            }
            result
        })
        .collect();
    changed.then_some(mapped)
}

/// The verbosity a pairwise diagnostic should render both sides at: full
/// detail only when the short descriptions collide and would read as "X is
/// not X". Swap this policy out here if a caller needs a different
/// heuristic; it affects message readability, not verdicts.
pub fn recommended_verbosity(a: &Type, b: &Type) -> VerbosityLevel {
    if a.describe(VerbosityLevel::TypeOnly) == b.describe(VerbosityLevel::TypeOnly) {
        VerbosityLevel::Precise
    } else {
        VerbosityLevel::TypeOnly
    }
}
