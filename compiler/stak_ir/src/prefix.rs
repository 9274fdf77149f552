//! Modifier prefixes.
//!
//! Prefixes are stored as a small flag set. The only way to add a prefix is
//! [`Prefixes::with`], which rejects duplicates and the `cond`/`qcond`
//! combination, so every `Prefixes` value in circulation is valid.

use std::fmt;

use bitflags::bitflags;

/// A single modifier prefix.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Prefix {
    /// Read operands instead of popping them.
    Quiet,
    /// Pop the top value and skip the instruction if it is zero.
    Cond,
    /// Like `Cond`, but the gating value is put back after the instruction.
    QCond,
}

impl Prefix {
    /// All prefixes, in canonical rendering order.
    pub const ALL: [Prefix; 3] = [Prefix::Quiet, Prefix::Cond, Prefix::QCond];

    /// Canonical source spelling.
    pub fn name(self) -> &'static str {
        match self {
            Prefix::Quiet => "quiet",
            Prefix::Cond => "cond",
            Prefix::QCond => "qcond",
        }
    }

    /// Look up a prefix by its canonical name.
    pub fn from_name(name: &str) -> Option<Prefix> {
        match name {
            "quiet" => Some(Prefix::Quiet),
            "cond" => Some(Prefix::Cond),
            "qcond" => Some(Prefix::QCond),
            _ => None,
        }
    }

    fn flag(self) -> PrefixFlags {
        match self {
            Prefix::Quiet => PrefixFlags::QUIET,
            Prefix::Cond => PrefixFlags::COND,
            Prefix::QCond => PrefixFlags::QCOND,
        }
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    struct PrefixFlags: u8 {
        const QUIET = 1 << 0;
        const COND = 1 << 1;
        const QCOND = 1 << 2;

        const GATES = Self::COND.bits() | Self::QCOND.bits();
    }
}

/// Rejected prefix combination.
#[derive(Copy, Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum PrefixError {
    #[error("prefix `{0}` given more than once")]
    Duplicate(Prefix),
    #[error("`cond` and `qcond` cannot be used on the same instruction")]
    Conflict,
}

/// How an instruction's execution is gated on the top of the stack.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Gate {
    /// Always executes.
    None,
    /// Pops the gating value; executes only if it is non-zero.
    Cond,
    /// Peeks the gating value; executes only if it is non-zero, lifting the
    /// value off for the duration of the instruction and restoring it after.
    QCond,
}

/// Validated set of prefixes attached to one instruction.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Prefixes(PrefixFlags);

impl Prefixes {
    /// No prefixes.
    pub const EMPTY: Prefixes = Prefixes(PrefixFlags::empty());

    /// Add `prefix`, enforcing the set's invariants.
    pub fn with(self, prefix: Prefix) -> Result<Prefixes, PrefixError> {
        let flag = prefix.flag();
        if self.0.contains(flag) {
            return Err(PrefixError::Duplicate(prefix));
        }
        let combined = self.0 | flag;
        if combined.contains(PrefixFlags::GATES) {
            return Err(PrefixError::Conflict);
        }
        Ok(Prefixes(combined))
    }

    /// Build a set from a sequence of prefixes, failing on the first
    /// duplicate or conflict.
    pub fn try_from_prefixes(
        prefixes: impl IntoIterator<Item = Prefix>,
    ) -> Result<Prefixes, PrefixError> {
        prefixes
            .into_iter()
            .try_fold(Prefixes::EMPTY, Prefixes::with)
    }

    #[inline]
    pub fn contains(self, prefix: Prefix) -> bool {
        self.0.contains(prefix.flag())
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn is_quiet(self) -> bool {
        self.0.contains(PrefixFlags::QUIET)
    }

    /// The gating mode these prefixes select.
    pub fn gate(self) -> Gate {
        if self.0.contains(PrefixFlags::COND) {
            Gate::Cond
        } else if self.0.contains(PrefixFlags::QCOND) {
            Gate::QCond
        } else {
            Gate::None
        }
    }

    /// Prefixes present, in canonical order.
    pub fn iter(self) -> impl Iterator<Item = Prefix> {
        Prefix::ALL.into_iter().filter(move |p| self.contains(*p))
    }
}

impl Default for Prefixes {
    fn default() -> Self {
        Prefixes::EMPTY
    }
}

impl fmt::Debug for Prefixes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for Prefixes {
    /// Space-separated canonical names.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, prefix) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(prefix.name())?;
        }
        Ok(())
    }
}
