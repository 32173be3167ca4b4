//! Description detail levels.

/// How much detail a type description should carry.
///
/// Most renderings only need the short, type-only form. The precise form is
/// requested when two short descriptions collide and a diagnostic has to
/// disambiguate them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VerbosityLevel {
    /// Short form: type names only.
    #[default]
    TypeOnly,
    /// Full detail, including information the short form elides.
    Precise,
}

impl VerbosityLevel {
    #[inline]
    pub fn is_precise(self) -> bool {
        self == VerbosityLevel::Precise
    }
}
