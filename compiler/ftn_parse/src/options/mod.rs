//! Lexing-mode flags for one source unit.
//!
//! The host sets these once per unit before scanning starts. They never
//! change while a unit is being parsed.

use bitflags::bitflags;

bitflags! {
    /// Lexing modes that alter how tokens are recognized.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct LexOptions: u8 {
        /// Reject nonstandard extensions (`X'..'` BOZ markers, suffix BOZ bases).
        const STRICT_CONFORMANCE = 1 << 0;
        /// Decode C-style backslash escapes inside quoted literals.
        const BACKSLASH_ESCAPES = 1 << 1;
    }
}

impl Default for LexOptions {
    fn default() -> Self {
        Self::empty()
    }
}

impl LexOptions {
    /// Add a flag.
    #[inline]
    #[must_use]
    pub const fn with(self, flag: Self) -> Self {
        self.union(flag)
    }

    /// Remove a flag.
    #[inline]
    #[must_use]
    pub const fn without(self, flag: Self) -> Self {
        self.difference(flag)
    }

    /// Check if nonstandard extensions are disabled.
    #[inline]
    pub const fn strict_conformance(self) -> bool {
        self.contains(Self::STRICT_CONFORMANCE)
    }

    /// Check if backslash escapes are decoded in quoted literals.
    #[inline]
    pub const fn backslash_escapes(self) -> bool {
        self.contains(Self::BACKSLASH_ESCAPES)
    }
}
