//! Six-phase workflow state machine.
//!
//! One cycle walks the phases in order, always administrator-driven, never
//! time-triggered. `reset_cycle` is the only edge back, and it increments
//! the cycle counter so ballots and proposal indices from the finished
//! cycle stop applying.

use crate::error::LedgerError;
use decree_types::Cycle;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// The phase the ledger is currently in.
///
/// Phases are strictly ordered within a cycle; compare with `<`/`>` or
/// [`WorkflowStatus::rank`] rather than casting to integers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkflowStatus {
    /// The administrator registers eligible voters.
    VotersRegistration,
    /// Registered voters submit competing proposals.
    ProposalsRegistrationOpen,
    /// Proposal list is frozen; voting has not begun.
    ProposalsRegistrationClosed,
    /// Registered voters cast one ballot each.
    VotingOpen,
    /// Ballots are frozen; awaiting the tally.
    VotingClosed,
    /// The cycle's result is recorded. Terminal until `reset_cycle`.
    Tallied,
}

impl WorkflowStatus {
    /// Explicit position of this phase within the cycle (0..=5).
    pub fn rank(&self) -> u8 {
        match self {
            Self::VotersRegistration => 0,
            Self::ProposalsRegistrationOpen => 1,
            Self::ProposalsRegistrationClosed => 2,
            Self::VotingOpen => 3,
            Self::VotingClosed => 4,
            Self::Tallied => 5,
        }
    }

    /// Whether the cycle has reached this phase or a later one.
    pub fn has_reached(&self, phase: WorkflowStatus) -> bool {
        self.rank() >= phase.rank()
    }
}

impl Ord for WorkflowStatus {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for WorkflowStatus {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for WorkflowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::VotersRegistration => "voters registration",
            Self::ProposalsRegistrationOpen => "proposals registration open",
            Self::ProposalsRegistrationClosed => "proposals registration closed",
            Self::VotingOpen => "voting open",
            Self::VotingClosed => "voting closed",
            Self::Tallied => "tallied",
        };
        write!(f, "{}", name)
    }
}

/// Owns the current phase and cycle counter, and enforces that every
/// transition advances exactly one step from its required predecessor.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorkflowController {
    status: WorkflowStatus,
    cycle: Cycle,
}

impl WorkflowController {
    /// A fresh controller: first cycle, voters registration.
    pub fn new() -> Self {
        Self {
            status: WorkflowStatus::VotersRegistration,
            cycle: Cycle::FIRST,
        }
    }

    /// Rebuild a controller from persisted state.
    pub fn restore(status: WorkflowStatus, cycle: Cycle) -> Self {
        Self { status, cycle }
    }

    pub fn status(&self) -> WorkflowStatus {
        self.status
    }

    pub fn cycle(&self) -> Cycle {
        self.cycle
    }

    /// Fail with `InvalidPhase` unless the ledger is in `required`.
    pub fn require(&self, required: WorkflowStatus) -> Result<(), LedgerError> {
        if self.status == required {
            Ok(())
        } else {
            Err(LedgerError::InvalidPhase { required })
        }
    }

    /// VotersRegistration → ProposalsRegistrationOpen.
    pub fn open_proposals(&mut self) -> Result<(WorkflowStatus, WorkflowStatus), LedgerError> {
        self.advance(
            WorkflowStatus::VotersRegistration,
            WorkflowStatus::ProposalsRegistrationOpen,
        )
    }

    /// ProposalsRegistrationOpen → ProposalsRegistrationClosed.
    pub fn close_proposals(&mut self) -> Result<(WorkflowStatus, WorkflowStatus), LedgerError> {
        self.advance(
            WorkflowStatus::ProposalsRegistrationOpen,
            WorkflowStatus::ProposalsRegistrationClosed,
        )
    }

    /// ProposalsRegistrationClosed → VotingOpen.
    pub fn open_voting(&mut self) -> Result<(WorkflowStatus, WorkflowStatus), LedgerError> {
        self.advance(
            WorkflowStatus::ProposalsRegistrationClosed,
            WorkflowStatus::VotingOpen,
        )
    }

    /// VotingOpen → VotingClosed.
    pub fn close_voting(&mut self) -> Result<(WorkflowStatus, WorkflowStatus), LedgerError> {
        self.advance(WorkflowStatus::VotingOpen, WorkflowStatus::VotingClosed)
    }

    /// VotingClosed → Tallied.
    pub fn tally(&mut self) -> Result<(WorkflowStatus, WorkflowStatus), LedgerError> {
        self.advance(WorkflowStatus::VotingClosed, WorkflowStatus::Tallied)
    }

    /// Tallied → VotersRegistration, incrementing the cycle counter.
    pub fn reset_cycle(&mut self) -> Result<(WorkflowStatus, WorkflowStatus), LedgerError> {
        self.require(WorkflowStatus::Tallied)?;
        self.status = WorkflowStatus::VotersRegistration;
        self.cycle = self.cycle.next();
        Ok((WorkflowStatus::Tallied, WorkflowStatus::VotersRegistration))
    }

    fn advance(
        &mut self,
        from: WorkflowStatus,
        to: WorkflowStatus,
    ) -> Result<(WorkflowStatus, WorkflowStatus), LedgerError> {
        self.require(from)?;
        self.status = to;
        Ok((from, to))
    }
}

impl Default for WorkflowController {
    fn default() -> Self {
        Self::new()
    }
}
