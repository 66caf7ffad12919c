//! Winner selection and quorum enforcement.

use crate::proposals::Proposal;
use decree_types::Cycle;
use serde::{Deserialize, Serialize};

/// Recorded outcome of one completed cycle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleResult {
    pub cycle: Cycle,
    /// `None` iff the cycle was canceled (quorum failure or no proposals).
    pub winning_proposal_id: Option<u32>,
    /// Quorum threshold the cycle was tallied against (0..=100).
    pub min_quorum_percentage: u8,
    pub vote_canceled: bool,
    pub votes_cast: u32,
    pub registered_count: u32,
}

impl CycleResult {
    /// Truncating integer participation percent:
    /// `votes_cast * 100 / registered_count`, with an empty registry
    /// counting as 0%.
    pub fn participation_percentage(&self) -> u8 {
        participation_percentage(self.votes_cast, self.registered_count)
    }
}

fn participation_percentage(votes_cast: u32, registered_count: u32) -> u8 {
    (votes_cast as u64 * 100 / (registered_count as u64).max(1)).min(100) as u8
}

/// Scans the proposal sequence and produces the cycle's result record.
pub struct TallyEngine;

impl TallyEngine {
    /// Pick the winner and apply the quorum rule.
    ///
    /// Winner selection is a left-to-right scan with a `>=` comparison, so
    /// a later proposal with an equal count overwrites the earlier leader:
    /// ties resolve to the highest index.
    ///
    /// A quorum failure is a recorded outcome, not an error: the result
    /// comes back canceled with no winning id, and the phase still
    /// advances. A cycle with zero proposals is likewise canceled, since
    /// nothing could have won it.
    pub fn tally(
        proposals: &[Proposal],
        votes_cast: u32,
        registered_count: u32,
        min_quorum_percentage: u8,
        cycle: Cycle,
    ) -> CycleResult {
        let mut leader: Option<u32> = None;
        let mut leader_count = 0u32;
        for (index, proposal) in proposals.iter().enumerate() {
            if leader.is_none() || proposal.vote_count >= leader_count {
                leader = Some(index as u32);
                leader_count = proposal.vote_count;
            }
        }

        let participation = participation_percentage(votes_cast, registered_count);
        let vote_canceled = participation < min_quorum_percentage || leader.is_none();

        CycleResult {
            cycle,
            winning_proposal_id: if vote_canceled { None } else { leader },
            min_quorum_percentage,
            vote_canceled,
            votes_cast,
            registered_count,
        }
    }
}
