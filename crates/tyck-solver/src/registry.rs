//! Universal-object registry and relation context.
//!
//! Some classes behave as open property bags: any property name may exist
//! on an instance, so no static shape verification against them can
//! succeed or fail definitively. The registry is the read-only set of such
//! class names. It is injected into relation checks through
//! `RelationContext`, never read from a process global, so tests and
//! embedders can substitute registries freely.

use std::sync::Arc;

use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;

use crate::property::ClassReflection;

/// The set of class names treated as dynamic property bags.
#[derive(Debug, Clone, Default)]
pub struct UniversalObjectRegistry {
    classes: FxHashSet<Arc<str>>,
}

impl UniversalObjectRegistry {
    pub fn new() -> Self {
        UniversalObjectRegistry::default()
    }

    pub fn with_class(mut self, name: impl Into<Arc<str>>) -> Self {
        self.classes.insert(name.into());
        self
    }

    pub fn is_universal_object_crate(&self, class: &ClassReflection) -> bool {
        self.classes.contains(class.name())
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

static EMPTY_REGISTRY: Lazy<UniversalObjectRegistry> = Lazy::new(UniversalObjectRegistry::new);

/// Shared read-only context for relation checks (acceptance, subtyping).
#[derive(Debug, Clone, Copy)]
pub struct RelationContext<'a> {
    universal_objects: &'a UniversalObjectRegistry,
}

impl<'a> RelationContext<'a> {
    pub fn new(universal_objects: &'a UniversalObjectRegistry) -> Self {
        RelationContext { universal_objects }
    }

    pub fn universal_objects(&self) -> &UniversalObjectRegistry {
        self.universal_objects
    }

    pub fn is_universal_object_crate(&self, class: &ClassReflection) -> bool {
        self.universal_objects.is_universal_object_crate(class)
    }
}

impl RelationContext<'static> {
    /// A context with no universal-object classes registered.
    pub fn empty() -> Self {
        RelationContext::new(&EMPTY_REGISTRY)
    }
}
