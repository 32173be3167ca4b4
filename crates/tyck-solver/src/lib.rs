//! Structural object-shape types for the tyck type checker.
//!
//! This crate implements the object-shape component of the type lattice: a
//! value type described by a fixed set of named properties (some optional),
//! together with the operations a type checker needs from it:
//!
//! - **Acceptance** (`accepts` / `accepts_with_reason`): is a candidate type
//!   assignable to the shape, with a diagnostic trail explaining rejections
//! - **Subtyping** (`is_super_type_of`): the reasonless dual
//! - **Template inference**: solving generic placeholders by structurally
//!   matching a received type against the shape
//! - **Traversal**: copy-on-write substitution over property types with a
//!   pointer-identity no-op, so rewriting passes can detect "nothing changed"
//!
//! Types are a closed set of tagged variants behind an `Arc` handle (`Ty`).
//! Composite types (unions, intersections) own their decomposition logic and
//! are reached through double dispatch (`is_accepted_with_reason_by`,
//! `is_sub_type_of`) rather than open-ended inheritance. The registry of
//! "universal object" classes (dynamic property bags whose static shape is
//! unknowable) is injected through `RelationContext` instead of being read
//! from a global, so tests can substitute registries freely.

pub mod accepts;
pub mod infer;
pub mod object_shape;
pub mod property;
pub mod registry;
pub mod subtype;
pub mod types;
pub mod variance;

pub use infer::{TemplateType, TemplateTypeMap};
pub use object_shape::ObjectShapeType;
pub use property::{ClassReflection, PropertyReflection, PropertyScope, Visibility};
pub use registry::{RelationContext, UniversalObjectRegistry};
pub use types::{recommended_verbosity, Ty, Type};
pub use variance::{TemplateReference, Variance};

pub use tyck_common::{AcceptsResult, MissingPropertyError, TrinaryLogic, VerbosityLevel};

#[cfg(test)]
mod tests;
