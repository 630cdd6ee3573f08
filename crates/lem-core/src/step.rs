//! Discrete simulation step counter.
//!
//! Steps are numbered from 1: step 1 is the first turn in which any agent
//! leaves the start room.  `Step::ZERO` denotes "before the first move" and
//! never appears in a schedule.

use std::fmt;

/// An absolute step number.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step(pub u32);

impl Step {
    pub const ZERO: Step = Step(0);

    /// Zero-based position, for indexing per-step `Vec`s.
    ///
    /// # Panics
    /// Panics in debug mode on `Step::ZERO`.
    #[inline]
    pub fn slot(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}
