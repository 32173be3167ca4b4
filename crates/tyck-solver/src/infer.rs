//! Generic template inference.
//!
//! A template placeholder is solved by structurally matching a received
//! type against the expected type that mentions it. For object shapes that
//! means walking this shape's properties, reading the corresponding
//! property off the received type, and recursing. Inference is best
//! effort: properties the received side lacks, hides, or fails to resolve
//! are silently skipped, never an error.

use std::sync::Arc;

use indexmap::IndexMap;
use smallvec::SmallVec;
use tyck_common::{TrinaryLogic, VerbosityLevel};

use crate::object_shape::ObjectShapeType;
use crate::property::PropertyScope;
use crate::types::{Ty, Type};
use crate::variance::{TemplateReference, Variance};

/// A generic placeholder: a name and an upper bound (defaults to `mixed`).
#[derive(Debug, Clone)]
pub struct TemplateType {
    name: Arc<str>,
    bound: Ty,
}

impl TemplateType {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        TemplateType {
            name: name.into(),
            bound: Type::mixed(),
        }
    }

    pub fn with_bound(mut self, bound: Ty) -> Self {
        self.bound = bound;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bound(&self) -> &Ty {
        &self.bound
    }

    pub fn equals(&self, other: &TemplateType) -> bool {
        self.name == other.name && self.bound.equals(&other.bound)
    }

    pub fn describe(&self, level: VerbosityLevel) -> String {
        if level.is_precise() && !matches!(self.bound.as_ref(), Type::Mixed) {
            format!("{} of {}", self.name, self.bound.describe(level))
        } else {
            self.name.to_string()
        }
    }
}

/// Bindings from placeholder name to inferred type.
///
/// The union of two maps is total: bindings inferred for the same
/// placeholder along independent property paths are joined into a union
/// type. Conflict resolution beyond that lives in the external
/// type-combination logic, not here.
#[derive(Debug, Clone, Default)]
pub struct TemplateTypeMap {
    bindings: IndexMap<Arc<str>, Ty>,
}

impl TemplateTypeMap {
    pub fn empty() -> Self {
        TemplateTypeMap::default()
    }

    pub fn from_binding(name: impl Into<Arc<str>>, ty: Ty) -> Self {
        let mut map = TemplateTypeMap::empty();
        map.bindings.insert(name.into(), ty);
        map
    }

    pub fn union(mut self, other: TemplateTypeMap) -> TemplateTypeMap {
        for (name, ty) in other.bindings {
            match self.bindings.shift_remove(&name) {
                Some(existing) if !existing.equals(&ty) => {
                    self.bindings.insert(name, Type::union(vec![existing, ty]));
                }
                Some(existing) => {
                    self.bindings.insert(name, existing);
                }
                None => {
                    self.bindings.insert(name, ty);
                }
            }
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&Ty> {
        self.bindings.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Arc<str>, &Ty)> {
        self.bindings.iter()
    }
}

/// Collected placeholder occurrences; small in practice.
pub type TemplateReferences = SmallVec<[TemplateReference; 4]>;

impl Type {
    /// Infer placeholder bindings by matching `received` against this type.
    pub fn infer_template_types(&self, received: &Ty) -> TemplateTypeMap {
        match self {
            Type::Template(template) => {
                TemplateTypeMap::from_binding(template.name(), received.clone())
            }
            Type::ObjectShape(shape) => {
                if received.is_composite() {
                    return received.infer_template_types_on(self);
                }
                if let Type::ObjectShape(_) = received.as_ref() {
                    shape.infer_walk(received)
                } else {
                    TemplateTypeMap::empty()
                }
            }
            Type::Union(members) | Type::Intersection(members) => members
                .iter()
                .fold(TemplateTypeMap::empty(), |accumulated, member| {
                    accumulated.union(member.infer_template_types(received))
                }),
            _ => TemplateTypeMap::empty(),
        }
    }

    /// Inference-distribution entry for composite received types: infer the
    /// expected type against every branch and merge.
    pub fn infer_template_types_on(&self, expected: &Type) -> TemplateTypeMap {
        match self {
            Type::Union(members) | Type::Intersection(members) => members
                .iter()
                .fold(TemplateTypeMap::empty(), |accumulated, member| {
                    accumulated.union(expected.infer_template_types(member))
                }),
            _ => TemplateTypeMap::empty(),
        }
    }

    /// Every placeholder referenced by this type, with the variance of its
    /// position composed onto `position_variance`.
    pub fn referenced_template_types(&self, position_variance: Variance) -> TemplateReferences {
        match self {
            Type::Template(template) => {
                let mut references = TemplateReferences::new();
                references.push(TemplateReference::new(template.clone(), position_variance));
                references
            }
            Type::ObjectShape(shape) => {
                // Property reads are covariant positions.
                let variance = position_variance.compose(Variance::COVARIANT);
                shape
                    .properties()
                    .values()
                    .flat_map(|ty| ty.referenced_template_types(variance))
                    .collect()
            }
            Type::Union(members) | Type::Intersection(members) => members
                .iter()
                .flat_map(|member| member.referenced_template_types(position_variance))
                .collect(),
            _ => TemplateReferences::new(),
        }
    }
}

impl ObjectShapeType {
    /// Property-wise inference against a received shape. Best effort:
    /// absent, inaccessible, static, or unresolvable received properties
    /// contribute nothing.
    pub(crate) fn infer_walk(&self, received: &Ty) -> TemplateTypeMap {
        let scope = PropertyScope::OutOfClass;
        let mut map = TemplateTypeMap::empty();
        for (name, expected) in self.properties() {
            if received.has_property(name) == TrinaryLogic::No {
                continue;
            }
            let Ok(property) = received.get_property(name, &scope) else {
                continue;
            };
            if !property.is_public() || property.is_static() {
                continue;
            }
            map = map.union(expected.infer_template_types(property.readable_type()));
        }
        map
    }
}
