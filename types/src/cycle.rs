//! Cycle counter.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A cycle number.
///
/// One cycle is a complete run through all six workflow phases, ending in
/// a tally. Proposal indices and "has voted" state are scoped to a cycle,
/// never global.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Cycle(u64);

impl Cycle {
    /// The first cycle of a fresh ledger.
    pub const FIRST: Self = Self(0);

    pub fn new(n: u64) -> Self {
        Self(n)
    }

    /// The cycle that follows this one.
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cycle {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_increments() {
        assert_eq!(Cycle::FIRST.next(), Cycle::new(1));
        assert_eq!(Cycle::new(41).next().as_u64(), 42);
    }

    #[test]
    fn test_ordering() {
        assert!(Cycle::FIRST < Cycle::new(1));
    }
}
