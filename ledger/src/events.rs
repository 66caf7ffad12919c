//! Host-observable ledger events.

use crate::workflow::WorkflowStatus;
use decree_types::{AccountId, Cycle};
use serde::{Deserialize, Serialize};

/// Notification of a state mutation, queued on the ledger for the host to
/// drain. Not durable unless the host persists them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerEvent {
    VoterRegistered {
        participant: AccountId,
    },
    ProposalRegistered {
        proposal_id: u32,
    },
    VoteCast {
        voter: AccountId,
        proposal_id: u32,
    },
    WorkflowStatusChange {
        previous: WorkflowStatus,
        next: WorkflowStatus,
    },
    AdministratorTransferred {
        previous: AccountId,
        new_admin: AccountId,
    },
    CycleTallied {
        cycle: Cycle,
        winning_proposal_id: Option<u32>,
        vote_canceled: bool,
    },
}
