//! Proposal collection for the current cycle.

use crate::error::LedgerError;
use serde::{Deserialize, Serialize};

/// A competing proposal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    pub title: String,
    pub description: String,
    pub vote_count: u32,
}

/// Ordered, append-only-per-cycle proposal sequence.
///
/// Indices are 0-based insertion order, immutable for the cycle. The
/// sequence is cleared when a new cycle's proposal registration opens,
/// so the tallied cycle's proposals stay readable until then.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProposalRegistry {
    proposals: Vec<Proposal>,
}

impl ProposalRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a proposal and return its index for this cycle.
    pub fn add(&mut self, title: String, description: String) -> Result<u32, LedgerError> {
        if title.trim().is_empty() {
            return Err(LedgerError::InvalidArgument(
                "proposal title must be non-empty".into(),
            ));
        }
        self.proposals.push(Proposal {
            title,
            description,
            vote_count: 0,
        });
        Ok((self.proposals.len() - 1) as u32)
    }

    /// Count one ballot toward a proposal.
    pub fn increment_vote(&mut self, proposal_id: u32) -> Result<(), LedgerError> {
        let count = self.count();
        let proposal = self
            .proposals
            .get_mut(proposal_id as usize)
            .ok_or(LedgerError::OutOfRange { proposal_id, count })?;
        proposal.vote_count += 1;
        Ok(())
    }

    pub fn get(&self, proposal_id: u32) -> Option<&Proposal> {
        self.proposals.get(proposal_id as usize)
    }

    /// The ordered sequence, counts as of call time.
    pub fn list(&self) -> &[Proposal] {
        &self.proposals
    }

    pub fn count(&self) -> u32 {
        self.proposals.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.proposals.is_empty()
    }

    /// Drop the previous cycle's proposals.
    pub fn reset_for_new_cycle(&mut self) {
        self.proposals.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_returns_insertion_index() {
        let mut reg = ProposalRegistry::new();
        assert_eq!(reg.add("A".into(), "first".into()).unwrap(), 0);
        assert_eq!(reg.add("B".into(), "second".into()).unwrap(), 1);
        assert_eq!(reg.count(), 2);
        assert_eq!(reg.list()[1].title, "B");
    }

    #[test]
    fn test_empty_title_rejected() {
        let mut reg = ProposalRegistry::new();
        assert!(matches!(
            reg.add("   ".into(), "desc".into()),
            Err(LedgerError::InvalidArgument(_))
        ));
        assert!(reg.is_empty());
    }

    #[test]
    fn test_increment_vote() {
        let mut reg = ProposalRegistry::new();
        reg.add("A".into(), String::new()).unwrap();
        reg.increment_vote(0).unwrap();
        reg.increment_vote(0).unwrap();
        assert_eq!(reg.get(0).unwrap().vote_count, 2);
    }

    #[test]
    fn test_increment_out_of_range() {
        let mut reg = ProposalRegistry::new();
        reg.add("A".into(), String::new()).unwrap();
        assert_eq!(
            reg.increment_vote(999),
            Err(LedgerError::OutOfRange {
                proposal_id: 999,
                count: 1
            })
        );
    }

    #[test]
    fn test_reset_clears_sequence() {
        let mut reg = ProposalRegistry::new();
        reg.add("A".into(), String::new()).unwrap();
        reg.reset_for_new_cycle();
        assert!(reg.is_empty());
        // Indices restart from zero for the new cycle.
        assert_eq!(reg.add("B".into(), String::new()).unwrap(), 0);
    }
}
