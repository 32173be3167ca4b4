//! Common value types for the tyck type checker.
//!
//! This crate provides the foundational result types used across all tyck
//! crates:
//! - Three-valued logic (`TrinaryLogic`) for structural facts that cannot be
//!   decided statically
//! - Acceptance verdicts with diagnostic trails (`AcceptsResult`)
//! - Description detail levels (`VerbosityLevel`)
//! - Recoverable reflection failures (`MissingPropertyError`)

// Three-valued truth domain with AND/OR algebra
pub mod trinary;
pub use trinary::TrinaryLogic;

// Verdict + ordered reason list
pub mod accepts;
pub use accepts::AcceptsResult;

// Description detail levels
pub mod verbosity;
pub use verbosity::VerbosityLevel;

// Recoverable reflection failure
pub mod error;
pub use error::MissingPropertyError;
