//! Variance of generic-placeholder positions.
//!
//! Variance determines how subtyping of a containing type relates to
//! subtyping of a placeholder occurring inside it. Nested occurrences
//! compose by sign: covariant-in-contravariant is contravariant,
//! contravariant-in-contravariant flips back to covariant, and an
//! invariant factor is absorbing.

use bitflags::bitflags;

use crate::infer::TemplateType;

bitflags! {
    /// Variance bitmask. Both bits set means invariant; neither bit set is
    /// an unused/bivariant position that composes as the identity.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Variance: u8 {
        const COVARIANT = 1 << 0;
        const CONTRAVARIANT = 1 << 1;
        const INVARIANT = Self::COVARIANT.bits() | Self::CONTRAVARIANT.bits();
    }
}

impl Variance {
    #[inline]
    pub fn is_covariant(self) -> bool {
        self == Variance::COVARIANT
    }

    #[inline]
    pub fn is_contravariant(self) -> bool {
        self == Variance::CONTRAVARIANT
    }

    #[inline]
    pub fn is_invariant(self) -> bool {
        self == Variance::INVARIANT
    }

    /// Compose an ambient variance with the variance of a nested position.
    pub fn compose(self, other: Variance) -> Variance {
        if self.is_contravariant() {
            if other.is_contravariant() {
                return Variance::COVARIANT;
            }
            if other.is_covariant() {
                return Variance::CONTRAVARIANT;
            }
            return Variance::INVARIANT;
        }
        if self.is_covariant() {
            if other.is_contravariant() {
                return Variance::CONTRAVARIANT;
            }
            if other.is_covariant() {
                return Variance::COVARIANT;
            }
            return Variance::INVARIANT;
        }
        self
    }
}

/// An occurrence of a generic placeholder at a known variance.
#[derive(Debug, Clone)]
pub struct TemplateReference {
    template: TemplateType,
    variance: Variance,
}

impl TemplateReference {
    pub fn new(template: TemplateType, variance: Variance) -> Self {
        TemplateReference { template, variance }
    }

    pub fn template(&self) -> &TemplateType {
        &self.template
    }

    pub fn variance(&self) -> Variance {
        self.variance
    }
}
