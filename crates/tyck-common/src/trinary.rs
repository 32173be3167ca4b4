//! Three-valued logic.
//!
//! Structural facts about types frequently cannot be decided statically:
//! a property may exist on some but not all branches of a union, a candidate
//! may only be known to be "some object". `TrinaryLogic` is the truth domain
//! for those facts, with an explicit AND/OR algebra instead of overloaded
//! boolean operators:
//!
//! - AND is No-dominant, then Maybe-dominant, else Yes
//! - OR is the dual: Yes-dominant, then Maybe-dominant, else No
//! - `extreme_identity` yields the common value when all operands agree,
//!   and Maybe otherwise

use std::fmt;

/// A three-valued truth value.
///
/// The variant order matters: `No < Maybe < Yes`, so `and` is `min` and
/// `or` is `max` over the derived ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TrinaryLogic {
    No,
    Maybe,
    Yes,
}

impl TrinaryLogic {
    /// Lift a two-valued fact into the trinary domain.
    #[inline]
    pub fn from_bool(value: bool) -> Self {
        if value {
            TrinaryLogic::Yes
        } else {
            TrinaryLogic::No
        }
    }

    #[inline]
    pub fn is_yes(self) -> bool {
        self == TrinaryLogic::Yes
    }

    #[inline]
    pub fn is_maybe(self) -> bool {
        self == TrinaryLogic::Maybe
    }

    #[inline]
    pub fn is_no(self) -> bool {
        self == TrinaryLogic::No
    }

    /// Three-valued conjunction. No dominates, then Maybe.
    #[inline]
    pub fn and(self, other: Self) -> Self {
        self.min(other)
    }

    /// Three-valued disjunction. Yes dominates, then Maybe.
    #[inline]
    pub fn or(self, other: Self) -> Self {
        self.max(other)
    }

    /// Fold a sequence of operands through `and`. Empty input is Yes.
    pub fn and_all(operands: impl IntoIterator<Item = Self>) -> Self {
        operands
            .into_iter()
            .fold(TrinaryLogic::Yes, TrinaryLogic::and)
    }

    /// Fold a sequence of operands through `or`. Empty input is No.
    pub fn or_all(operands: impl IntoIterator<Item = Self>) -> Self {
        operands.into_iter().fold(TrinaryLogic::No, TrinaryLogic::or)
    }

    /// The common value when every operand agrees, Maybe otherwise.
    ///
    /// This is the right fold for per-value facts over union branches: if a
    /// property exists on every branch the union has it, if it exists on no
    /// branch the union lacks it, and a mixed answer is undecidable. An empty
    /// sequence is undecidable as well.
    pub fn extreme_identity(operands: impl IntoIterator<Item = Self>) -> Self {
        let mut iter = operands.into_iter();
        let Some(first) = iter.next() else {
            return TrinaryLogic::Maybe;
        };
        if iter.all(|operand| operand == first) {
            first
        } else {
            TrinaryLogic::Maybe
        }
    }

    /// Swap Yes and No; Maybe is its own negation.
    #[inline]
    pub fn negate(self) -> Self {
        match self {
            TrinaryLogic::Yes => TrinaryLogic::No,
            TrinaryLogic::Maybe => TrinaryLogic::Maybe,
            TrinaryLogic::No => TrinaryLogic::Yes,
        }
    }
}

impl fmt::Display for TrinaryLogic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TrinaryLogic::Yes => "Yes",
            TrinaryLogic::Maybe => "Maybe",
            TrinaryLogic::No => "No",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::TrinaryLogic::{Maybe, No, Yes};
    use super::*;

    #[test]
    fn test_and_truth_table() {
        assert_eq!(Yes.and(Yes), Yes);
        assert_eq!(Yes.and(Maybe), Maybe);
        assert_eq!(Yes.and(No), No);
        assert_eq!(Maybe.and(Maybe), Maybe);
        assert_eq!(Maybe.and(No), No);
        assert_eq!(No.and(No), No);
    }

    #[test]
    fn test_or_truth_table() {
        assert_eq!(Yes.or(Yes), Yes);
        assert_eq!(Yes.or(Maybe), Yes);
        assert_eq!(Yes.or(No), Yes);
        assert_eq!(Maybe.or(Maybe), Maybe);
        assert_eq!(Maybe.or(No), Maybe);
        assert_eq!(No.or(No), No);
    }

    #[test]
    fn test_and_is_associative() {
        for a in [Yes, Maybe, No] {
            for b in [Yes, Maybe, No] {
                for c in [Yes, Maybe, No] {
                    assert_eq!(a.and(b).and(c), a.and(b.and(c)));
                    assert_eq!(a.or(b).or(c), a.or(b.or(c)));
                }
            }
        }
    }

    #[test]
    fn test_folds() {
        assert_eq!(TrinaryLogic::and_all([Yes, Yes, Maybe]), Maybe);
        assert_eq!(TrinaryLogic::and_all([Yes, No, Maybe]), No);
        assert_eq!(TrinaryLogic::and_all([]), Yes);
        assert_eq!(TrinaryLogic::or_all([No, Maybe]), Maybe);
        assert_eq!(TrinaryLogic::or_all([No, Yes]), Yes);
        assert_eq!(TrinaryLogic::or_all([]), No);
    }

    #[test]
    fn test_extreme_identity() {
        assert_eq!(TrinaryLogic::extreme_identity([Yes, Yes]), Yes);
        assert_eq!(TrinaryLogic::extreme_identity([No, No, No]), No);
        assert_eq!(TrinaryLogic::extreme_identity([Yes, No]), Maybe);
        assert_eq!(TrinaryLogic::extreme_identity([Yes, Maybe]), Maybe);
        assert_eq!(TrinaryLogic::extreme_identity([]), Maybe);
    }

    #[test]
    fn test_negate() {
        assert_eq!(Yes.negate(), No);
        assert_eq!(No.negate(), Yes);
        assert_eq!(Maybe.negate(), Maybe);
    }

    #[test]
    fn test_from_bool() {
        assert_eq!(TrinaryLogic::from_bool(true), Yes);
        assert_eq!(TrinaryLogic::from_bool(false), No);
    }
}
