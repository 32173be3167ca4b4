//! Acceptance verdicts with a diagnostic trail.
//!
//! An acceptance check answers "is this type assignable here?" with a
//! trinary verdict, and carries an ordered list of human-readable reasons
//! explaining non-Yes outcomes. The type checker surfaces the reasons
//! verbatim as diagnostic text, so combination must preserve their order.

use crate::trinary::TrinaryLogic;

/// A trinary verdict paired with an ordered reason trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptsResult {
    pub result: TrinaryLogic,
    pub reasons: Vec<String>,
}

impl AcceptsResult {
    pub fn new(result: TrinaryLogic, reasons: Vec<String>) -> Self {
        AcceptsResult { result, reasons }
    }

    /// A definitive Yes with no reasons.
    pub fn yes() -> Self {
        AcceptsResult::new(TrinaryLogic::Yes, Vec::new())
    }

    /// An undecided verdict with no reasons.
    pub fn maybe() -> Self {
        AcceptsResult::new(TrinaryLogic::Maybe, Vec::new())
    }

    /// A definitive No with no reasons.
    pub fn no() -> Self {
        AcceptsResult::new(TrinaryLogic::No, Vec::new())
    }

    #[inline]
    pub fn is_yes(&self) -> bool {
        self.result.is_yes()
    }

    #[inline]
    pub fn is_maybe(&self) -> bool {
        self.result.is_maybe()
    }

    #[inline]
    pub fn is_no(&self) -> bool {
        self.result.is_no()
    }

    /// Combine two results: verdicts through trinary AND, reasons
    /// concatenated in order (self first).
    pub fn and(mut self, other: AcceptsResult) -> AcceptsResult {
        self.result = self.result.and(other.result);
        self.reasons.extend(other.reasons);
        self
    }

    /// Combine two results: verdicts through trinary OR, reasons
    /// concatenated in order (self first).
    pub fn or(mut self, other: AcceptsResult) -> AcceptsResult {
        self.result = self.result.or(other.result);
        self.reasons.extend(other.reasons);
        self
    }

    /// Fold a sequence through `and`. Empty input is a plain Yes.
    pub fn and_all(operands: impl IntoIterator<Item = AcceptsResult>) -> AcceptsResult {
        operands
            .into_iter()
            .fold(AcceptsResult::yes(), AcceptsResult::and)
    }

    /// Rewrite every reason through `decorator`, preserving order. Used to
    /// wrap child reasons with parent context (e.g. the property being
    /// checked) without scattering string formatting through control flow.
    pub fn decorate_reasons(mut self, decorator: impl Fn(&str) -> String) -> AcceptsResult {
        self.reasons = self
            .reasons
            .iter()
            .map(|reason| decorator(reason))
            .collect();
        self
    }
}
