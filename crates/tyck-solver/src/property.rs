//! Property reflection.
//!
//! Per-property facts resolved from a candidate type: visibility,
//! static-ness, readability, and the readable type. Shapes synthesize these
//! descriptors for their declared properties; nominal classes carry them
//! directly; everything else either has no properties or only unknowable
//! ones.

use std::sync::Arc;

use tyck_common::{MissingPropertyError, TrinaryLogic, VerbosityLevel};

use crate::types::{Ty, Type};

/// Member visibility of a class property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Public,
    Protected,
    Private,
}

impl Visibility {
    #[inline]
    pub fn is_public(self) -> bool {
        self == Visibility::Public
    }

    /// The more restrictive of two visibilities: Private > Protected > Public.
    pub fn restrict(self, other: Visibility) -> Visibility {
        match (self, other) {
            (Visibility::Private, _) | (_, Visibility::Private) => Visibility::Private,
            (Visibility::Protected, _) | (_, Visibility::Protected) => Visibility::Protected,
            (Visibility::Public, Visibility::Public) => Visibility::Public,
        }
    }
}

/// Where a property access originates. The lattice algorithms always
/// resolve from outside any class; the in-class variant exists for callers
/// that resolve members on behalf of method bodies.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PropertyScope {
    #[default]
    OutOfClass,
    InClass(Arc<str>),
}

impl PropertyScope {
    pub fn in_class(&self) -> Option<&str> {
        match self {
            PropertyScope::OutOfClass => None,
            PropertyScope::InClass(name) => Some(name),
        }
    }
}

/// A resolved property fact.
#[derive(Debug, Clone)]
pub struct PropertyReflection {
    name: Arc<str>,
    declaring_class: Option<Arc<str>>,
    visibility: Visibility,
    is_static: bool,
    readable: bool,
    readable_type: Ty,
}

impl PropertyReflection {
    /// A public, non-static, readable instance property with no declaring
    /// class. Builders below override the defaults.
    pub fn new(name: impl Into<Arc<str>>, readable_type: Ty) -> Self {
        PropertyReflection {
            name: name.into(),
            declaring_class: None,
            visibility: Visibility::Public,
            is_static: false,
            readable: true,
            readable_type,
        }
    }

    /// The descriptor of a property on a dynamically-keyed holder: nothing
    /// is known about it statically, so it reads as `mixed`.
    pub(crate) fn dynamic(name: impl Into<Arc<str>>) -> Self {
        PropertyReflection::new(name, Type::mixed())
    }

    pub fn with_declaring_class(mut self, class: impl Into<Arc<str>>) -> Self {
        self.declaring_class = Some(class.into());
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    pub fn with_readable(mut self, readable: bool) -> Self {
        self.readable = readable;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display name of the declaring class, if any. Shape-declared
    /// properties have none; shapes are not nominally declared.
    pub fn declaring_class(&self) -> Option<&str> {
        self.declaring_class.as_deref()
    }

    #[inline]
    pub fn is_public(&self) -> bool {
        self.visibility.is_public()
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[inline]
    pub fn is_static(&self) -> bool {
        self.is_static
    }

    #[inline]
    pub fn is_readable(&self) -> bool {
        self.readable
    }

    /// The type produced by reading this property.
    pub fn readable_type(&self) -> &Ty {
        &self.readable_type
    }
}

/// Reflection of a nominal class: its display name and declared properties.
#[derive(Debug, Clone)]
pub struct ClassReflection {
    name: Arc<str>,
    properties: Vec<PropertyReflection>,
}

impl ClassReflection {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        ClassReflection {
            name: name.into(),
            properties: Vec::new(),
        }
    }

    /// Declare a property on this class. The declaring class of the
    /// reflection is stamped with this class's name.
    pub fn with_property(mut self, property: PropertyReflection) -> Self {
        let property = property.with_declaring_class(self.name.clone());
        self.properties.push(property);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_property(&self, name: &str) -> bool {
        self.properties.iter().any(|property| property.name() == name)
    }

    pub fn property(&self, name: &str) -> Option<&PropertyReflection> {
        self.properties.iter().find(|property| property.name() == name)
    }
}

impl Type {
    /// Trinary property existence on this type.
    pub fn has_property(&self, name: &str) -> TrinaryLogic {
        match self {
            Type::ObjectShape(shape) => shape.has_property(name),
            Type::NamedObject(class) => TrinaryLogic::from_bool(class.has_property(name)),
            // Some object / any value: the property may well exist.
            Type::Object | Type::Mixed => TrinaryLogic::Maybe,
            Type::Union(members) => TrinaryLogic::extreme_identity(
                members.iter().map(|member| member.has_property(name)),
            ),
            Type::Intersection(members) => {
                TrinaryLogic::or_all(members.iter().map(|member| member.has_property(name)))
            }
            Type::Template(template) => template.bound().has_property(name),
            _ => TrinaryLogic::No,
        }
    }

    /// Resolve the concrete property fact for `name`.
    ///
    /// Callers are expected to consult `has_property` first; a `No` answer
    /// here surfaces as `MissingPropertyError`, which relation checks
    /// recover from as a definitive rejection.
    pub fn get_property(
        &self,
        name: &str,
        scope: &PropertyScope,
    ) -> Result<PropertyReflection, MissingPropertyError> {
        match self {
            Type::ObjectShape(shape) => Ok(shape.get_property(name, scope)),
            Type::NamedObject(class) => class
                .property(name)
                .cloned()
                .ok_or_else(|| self.missing_property(name)),
            Type::Object | Type::Mixed => Ok(PropertyReflection::dynamic(name)),
            Type::Union(members) => {
                // A union only carries the property if every branch does;
                // the readable type is then the union of the branch types.
                let mut resolved = Vec::with_capacity(members.len());
                for member in members {
                    match member.get_property(name, scope) {
                        Ok(property) => resolved.push(property),
                        Err(_) => return Err(self.missing_property(name)),
                    }
                }
                merge_properties(resolved, Type::union)
                    .ok_or_else(|| self.missing_property(name))
            }
            Type::Intersection(members) => {
                // Any branch that carries the property provides it to the
                // whole intersection; overlapping declarations intersect.
                let resolved: Vec<PropertyReflection> = members
                    .iter()
                    .filter_map(|member| member.get_property(name, scope).ok())
                    .collect();
                merge_properties(resolved, Type::intersection)
                    .ok_or_else(|| self.missing_property(name))
            }
            Type::Template(template) => template.bound().get_property(name, scope),
            _ => Err(self.missing_property(name)),
        }
    }

    fn missing_property(&self, name: &str) -> MissingPropertyError {
        MissingPropertyError::new(self.describe(VerbosityLevel::TypeOnly), name)
    }
}

/// Merge property facts from composite branches: most restrictive
/// visibility wins, a static declaration anywhere makes the result static,
/// readability requires every branch to be readable, and the readable types
/// are combined by `combine`.
fn merge_properties(
    resolved: Vec<PropertyReflection>,
    combine: fn(Vec<Ty>) -> Ty,
) -> Option<PropertyReflection> {
    let mut iter = resolved.into_iter();
    let first = iter.next()?;
    let mut visibility = first.visibility();
    let mut is_static = first.is_static();
    let mut readable = first.is_readable();
    let mut types = vec![first.readable_type().clone()];
    let name: Arc<str> = first.name().into();
    let declaring_class = first.declaring_class().map(Arc::<str>::from);

    for property in iter {
        visibility = visibility.restrict(property.visibility());
        is_static = is_static || property.is_static();
        readable = readable && property.is_readable();
        types.push(property.readable_type().clone());
    }

    let mut merged = PropertyReflection::new(name, combine(types))
        .with_visibility(visibility)
        .with_static(is_static)
        .with_readable(readable);
    if let Some(class) = declaring_class {
        merged = merged.with_declaring_class(class);
    }
    Some(merged)
}
