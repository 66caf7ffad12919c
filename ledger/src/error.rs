use crate::workflow::WorkflowStatus;
use decree_types::AccountId;
use thiserror::Error;

/// Every way a ledger command can fail.
///
/// None of these are transient: each one reports a caller-state mismatch
/// and leaves the ledger exactly as it was. Retry policy belongs to the
/// host.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("caller is not the administrator")]
    Unauthorized,

    #[error("wrong phase: requires {required}")]
    InvalidPhase { required: WorkflowStatus },

    #[error("voter {0} already registered")]
    AlreadyRegistered(AccountId),

    #[error("voter {0} is not registered")]
    NotRegistered(AccountId),

    #[error("voter {0} has already voted this cycle")]
    AlreadyVoted(AccountId),

    #[error("invalid proposal {proposal_id}: only {count} registered")]
    OutOfRange { proposal_id: u32, count: u32 },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("votes not tallied yet")]
    NotYetTallied,

    #[error("quorum not met: {participation}% < {required}%")]
    QuorumNotMet { participation: u8, required: u8 },

    #[error("snapshot error: {0}")]
    Snapshot(String),
}
