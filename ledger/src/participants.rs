//! Participant eligibility and per-cycle ballot state.

use crate::error::LedgerError;
use decree_types::{AccountId, Cycle};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-participant record.
///
/// Registration, once granted, persists across cycles. Ballot state is
/// cycle-relative: "has voted" is derived by comparing `last_cycle_voted`
/// against the current cycle, so advancing the cycle implicitly clears it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub is_registered: bool,
    pub last_cycle_voted: Option<Cycle>,
    /// Proposal index voted for in `last_cycle_voted`.
    pub voted_proposal_id: u32,
}

impl Participant {
    /// Whether this participant has cast a ballot in the given cycle.
    pub fn has_voted(&self, cycle: Cycle) -> bool {
        self.last_cycle_voted == Some(cycle)
    }
}

/// Map of participant identities to their records.
///
/// Unknown identities read back as the default record; only mutation
/// distinguishes a missing participant from an unregistered one.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ParticipantRegistry {
    participants: HashMap<AccountId, Participant>,
}

impl ParticipantRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grant eligibility to an identity. Registering twice is rejected,
    /// never silently accepted.
    pub fn register(&mut self, id: &AccountId) -> Result<(), LedgerError> {
        let entry = self.participants.entry(id.clone()).or_default();
        if entry.is_registered {
            return Err(LedgerError::AlreadyRegistered(id.clone()));
        }
        entry.is_registered = true;
        Ok(())
    }

    /// Read a participant record. Unknown ids yield the default record.
    pub fn get(&self, id: &AccountId) -> Participant {
        self.participants.get(id).cloned().unwrap_or_default()
    }

    pub fn is_registered(&self, id: &AccountId) -> bool {
        self.participants
            .get(id)
            .map(|p| p.is_registered)
            .unwrap_or(false)
    }

    /// Record a ballot: check-and-set in one call, so under a host that
    /// serializes commands the first ballot wins and the second observes
    /// `AlreadyVoted`.
    pub fn record_vote(
        &mut self,
        id: &AccountId,
        proposal_id: u32,
        cycle: Cycle,
    ) -> Result<(), LedgerError> {
        let participant = self
            .participants
            .get_mut(id)
            .filter(|p| p.is_registered)
            .ok_or_else(|| LedgerError::NotRegistered(id.clone()))?;
        if participant.has_voted(cycle) {
            return Err(LedgerError::AlreadyVoted(id.clone()));
        }
        participant.last_cycle_voted = Some(cycle);
        participant.voted_proposal_id = proposal_id;
        Ok(())
    }

    /// Number of registered participants.
    pub fn registered_count(&self) -> u32 {
        self.participants
            .values()
            .filter(|p| p.is_registered)
            .count() as u32
    }

    /// Number of ballots cast in the given cycle.
    pub fn ballots_cast(&self, cycle: Cycle) -> u32 {
        self.participants
            .values()
            .filter(|p| p.has_voted(cycle))
            .count() as u32
    }

    /// Ballots in the given cycle recorded for the given proposal index.
    pub fn ballots_for(&self, proposal_id: u32, cycle: Cycle) -> u32 {
        self.participants
            .values()
            .filter(|p| p.has_voted(cycle) && p.voted_proposal_id == proposal_id)
            .count() as u32
    }
}
