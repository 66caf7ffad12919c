//! Serializable capture of the full ledger state.
//!
//! The core mandates no persistence backend. Hosts that want durability
//! call [`VotingLedger::save_state`] and stash the bytes wherever they
//! like (a `decree-store` backend, a file, a chain's state tree), then
//! rebuild with [`VotingLedger::load_state`] on restart. Pending events
//! are not captured; they are transient notifications.

use crate::access::AccessGuard;
use crate::error::LedgerError;
use crate::ledger::VotingLedger;
use crate::participants::ParticipantRegistry;
use crate::proposals::ProposalRegistry;
use crate::tally::CycleResult;
use crate::workflow::WorkflowController;
use serde::{Deserialize, Serialize};

/// Suggested key for hosts persisting through a keyed snapshot store.
const LEDGER_SNAPSHOT_KEY: &str = "voting_ledger_state";

/// Everything the data model requires to survive a restart.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub guard: AccessGuard,
    pub workflow: WorkflowController,
    pub participants: ParticipantRegistry,
    pub proposals: ProposalRegistry,
    pub min_quorum_percentage: u8,
    pub history: Vec<CycleResult>,
}

impl VotingLedger {
    /// Serialize the full ledger state to bytes.
    pub fn save_state(&self) -> Result<Vec<u8>, LedgerError> {
        let (guard, workflow, participants, proposals, min_quorum_percentage, history) =
            self.parts();
        let snapshot = LedgerSnapshot {
            guard: guard.clone(),
            workflow: workflow.clone(),
            participants: participants.clone(),
            proposals: proposals.clone(),
            min_quorum_percentage,
            history: history.to_vec(),
        };
        bincode::serialize(&snapshot).map_err(|e| LedgerError::Snapshot(e.to_string()))
    }

    /// Rebuild a ledger from serialized bytes.
    pub fn load_state(data: &[u8]) -> Result<Self, LedgerError> {
        let snapshot: LedgerSnapshot =
            bincode::deserialize(data).map_err(|e| LedgerError::Snapshot(e.to_string()))?;
        Ok(Self::from_parts(
            snapshot.guard,
            snapshot.workflow,
            snapshot.participants,
            snapshot.proposals,
            snapshot.min_quorum_percentage,
            snapshot.history,
        ))
    }

    /// The snapshot key for hosts using a keyed store.
    pub fn snapshot_key() -> &'static str {
        LEDGER_SNAPSHOT_KEY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::LedgerConfig;
    use crate::workflow::WorkflowStatus;
    use decree_store::{MemoryStore, SnapshotStore};
    use decree_types::AccountId;

    fn account(name: &str) -> AccountId {
        AccountId::new(name)
    }

    fn mid_cycle_ledger() -> VotingLedger {
        let admin = account("admin");
        let mut l = VotingLedger::new(
            admin.clone(),
            LedgerConfig {
                min_quorum_percentage: 25,
            },
        )
        .unwrap();
        l.register(&admin, account("alice")).unwrap();
        l.register(&admin, account("bob")).unwrap();
        l.open_proposals(&admin).unwrap();
        l.add_proposal(&account("alice"), "A".into(), String::new())
            .unwrap();
        l.close_proposals(&admin).unwrap();
        l.open_voting(&admin).unwrap();
        l.cast_vote(&account("alice"), 0).unwrap();
        l
    }

    #[test]
    fn test_round_trip_preserves_data_model() {
        let l = mid_cycle_ledger();
        let bytes = l.save_state().unwrap();
        let restored = VotingLedger::load_state(&bytes).unwrap();

        assert_eq!(restored.workflow_status(), WorkflowStatus::VotingOpen);
        assert_eq!(restored.cycle(), l.cycle());
        assert!(restored.is_administrator(&account("admin")));
        assert_eq!(restored.min_quorum_percentage(), 25);
        assert_eq!(restored.proposals().len(), 1);
        assert!(restored.participant(&account("alice")).has_voted(l.cycle()));
        assert!(restored.participant(&account("bob")).is_registered);
    }

    #[test]
    fn test_restored_ledger_keeps_enforcing_rules() {
        let l = mid_cycle_ledger();
        let mut restored = VotingLedger::load_state(&l.save_state().unwrap()).unwrap();

        // Alice's ballot survived, so a second one is still rejected.
        assert_eq!(
            restored.cast_vote(&account("alice"), 0),
            Err(LedgerError::AlreadyVoted(account("alice")))
        );
        restored.cast_vote(&account("bob"), 0).unwrap();
    }

    #[test]
    fn test_round_trip_through_memory_store() {
        let l = mid_cycle_ledger();
        let store = MemoryStore::new();
        store
            .put_snapshot(VotingLedger::snapshot_key(), &l.save_state().unwrap())
            .unwrap();

        let bytes = store.get_snapshot(VotingLedger::snapshot_key()).unwrap();
        let restored = VotingLedger::load_state(&bytes).unwrap();
        assert_eq!(restored.votes_cast(), 1);
    }

    #[test]
    fn test_garbage_bytes_rejected() {
        assert!(matches!(
            VotingLedger::load_state(b"not a snapshot"),
            Err(LedgerError::Snapshot(_))
        ));
    }
}
