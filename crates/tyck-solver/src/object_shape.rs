//! The object-shape data model.
//!
//! An `ObjectShapeType` describes a value purely by its named properties
//! and their declared types, independent of any class. A subset of the
//! property names may be optional: a conforming value may lack them
//! entirely, and their absence alone never causes rejection.
//!
//! Shapes are immutable once constructed; substitution goes through
//! `traverse`, which rebuilds a copy only when a property type actually
//! changed.

use std::sync::Arc;

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use tyck_common::{TrinaryLogic, VerbosityLevel};

use crate::property::{PropertyReflection, PropertyScope};
use crate::types::Ty;

#[derive(Debug, Clone)]
pub struct ObjectShapeType {
    /// Property name to declared type. Insertion order is preserved (it is
    /// the order `describe` renders) but carries no other meaning.
    properties: IndexMap<Arc<str>, Ty>,
    /// Names that may be absent on a conforming value. Invariant: every
    /// member is a key of `properties`; violating callers are buggy and are
    /// not defended against.
    optional_properties: FxHashSet<Arc<str>>,
}

impl ObjectShapeType {
    /// The empty shape, `object{}`.
    pub fn new() -> Self {
        ObjectShapeType {
            properties: IndexMap::new(),
            optional_properties: FxHashSet::default(),
        }
    }

    pub fn from_parts(
        properties: IndexMap<Arc<str>, Ty>,
        optional_properties: FxHashSet<Arc<str>>,
    ) -> Self {
        debug_assert!(
            optional_properties
                .iter()
                .all(|name| properties.contains_key(name)),
            "every optional property must be declared"
        );
        ObjectShapeType {
            properties,
            optional_properties,
        }
    }

    /// Declare a required property. Re-declaring a name replaces its type.
    pub fn with_property(mut self, name: impl Into<Arc<str>>, ty: Ty) -> Self {
        self.properties.insert(name.into(), ty);
        self
    }

    /// Declare an optional property.
    pub fn with_optional_property(mut self, name: impl Into<Arc<str>>, ty: Ty) -> Self {
        let name = name.into();
        self.properties.insert(name.clone(), ty);
        self.optional_properties.insert(name);
        self
    }

    pub fn properties(&self) -> &IndexMap<Arc<str>, Ty> {
        &self.properties
    }

    pub fn optional_properties(&self) -> &FxHashSet<Arc<str>> {
        &self.optional_properties
    }

    pub fn is_optional(&self, name: &str) -> bool {
        self.optional_properties.contains(name)
    }

    /// Trinary property existence: Yes for a required declaration, Maybe
    /// for an optional one, No when absent. Every other per-property
    /// decision in the lattice branches on this fact.
    pub fn has_property(&self, name: &str) -> TrinaryLogic {
        if !self.properties.contains_key(name) {
            return TrinaryLogic::No;
        }
        if self.is_optional(name) {
            TrinaryLogic::Maybe
        } else {
            TrinaryLogic::Yes
        }
    }

    /// Build the property descriptor for a declared name: implicitly
    /// public, non-static, readable with the stored type, and with no
    /// declaring class (shapes are not nominally declared).
    ///
    /// # Panics
    ///
    /// Panics if `name` is not declared on this shape. That is a
    /// programming-contract violation (callers must check `has_property`
    /// first) and is not recoverable.
    pub fn get_property(&self, name: &str, _scope: &PropertyScope) -> PropertyReflection {
        let Some((key, ty)) = self.properties.get_key_value(name) else {
            panic!("should not happen: object shape has no property ${name}");
        };
        PropertyReflection::new(key.clone(), ty.clone())
    }

    /// Structural equality: exact same property cardinality, recursively
    /// equal types per name, identical optional membership. Insertion order
    /// is irrelevant.
    pub fn equals(&self, other: &ObjectShapeType) -> bool {
        if self.properties.len() != other.properties.len() {
            return false;
        }
        for (name, ty) in &self.properties {
            let Some(other_ty) = other.properties.get(name) else {
                return false;
            };
            if !ty.equals(other_ty) {
                return false;
            }
        }
        if self.optional_properties.len() != other.optional_properties.len() {
            return false;
        }
        self.optional_properties
            .iter()
            .all(|name| other.optional_properties.contains(name))
    }

    /// Render as `object{a: int, b?: string}` in declaration order, with
    /// `?` marking optional names. Shapes have no terser summary form, so
    /// the verbosity level does not change the rendering.
    pub fn describe(&self, level: VerbosityLevel) -> String {
        let mut rendered = String::from("object{");
        for (index, (name, ty)) in self.properties.iter().enumerate() {
            if index > 0 {
                rendered.push_str(", ");
            }
            rendered.push_str(name);
            if self.is_optional(name) {
                rendered.push('?');
            }
            rendered.push_str(": ");
            rendered.push_str(&ty.describe(level));
        }
        rendered.push('}');
        rendered
    }

    /// Apply `f` to every property type. Returns `None` when every result
    /// was pointer-identical to its input, so the caller keeps the original
    /// shape, and the rebuilt copy otherwise. The optional set is always
    /// carried over unchanged.
    pub fn traverse<F: FnMut(&Ty) -> Ty>(&self, f: &mut F) -> Option<ObjectShapeType> {
        let mut changed = false;
        let mut properties = IndexMap::with_capacity(self.properties.len());
        for (name, ty) in &self.properties {
            let mapped = f(ty);
            if !Arc::ptr_eq(&mapped, ty) {
                changed = true;
            }
            properties.insert(name.clone(), mapped);
        }
        changed.then(|| ObjectShapeType {
            properties,
            optional_properties: self.optional_properties.clone(),
        })
    }
}
