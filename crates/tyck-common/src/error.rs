//! Recoverable reflection failures.

use std::error::Error;
use std::fmt;

/// A candidate type claimed a property exists (trinarily) but its own
/// reflection could not locate it.
///
/// This is not a fatal condition: acceptance and subtyping checks recover
/// from it locally by treating the candidate as definitively rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingPropertyError {
    holder: String,
    property: String,
}

impl MissingPropertyError {
    pub fn new(holder: impl Into<String>, property: impl Into<String>) -> Self {
        MissingPropertyError {
            holder: holder.into(),
            property: property.into(),
        }
    }

    /// Description of the type that failed to resolve the property.
    pub fn holder(&self) -> &str {
        &self.holder
    }

    pub fn property(&self) -> &str {
        &self.property
    }
}

impl fmt::Display for MissingPropertyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} has no reflection for property ${}",
            self.holder, self.property
        )
    }
}

impl Error for MissingPropertyError {}
