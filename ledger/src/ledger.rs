//! The `VotingLedger` facade — the unit a host embeds and drives.

use crate::access::AccessGuard;
use crate::error::LedgerError;
use crate::events::LedgerEvent;
use crate::participants::{Participant, ParticipantRegistry};
use crate::proposals::{Proposal, ProposalRegistry};
use crate::tally::{CycleResult, TallyEngine};
use crate::workflow::{WorkflowController, WorkflowStatus};
use decree_types::{AccountId, Cycle};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{debug, info};

/// Host-supplied construction parameters.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Minimum participation percent (0..=100) for a valid result.
    /// Defaults to 0: every tally counts.
    pub min_quorum_percentage: u8,
}

/// The winning proposal of a tallied cycle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningProposal {
    pub proposal_id: u32,
    pub proposal: Proposal,
}

/// Authoritative, cycle-based decision ledger.
///
/// Composes the access guard, the workflow state machine, both registries
/// and the tally engine behind one command/query surface. The ledger is a
/// single logical owner of all mutable state: every mutator takes
/// `&mut self`, and the host supplies the serialization (a mutex, an
/// actor, a consensus-ordered log). No operation blocks, suspends, or
/// leaves partial state behind on failure.
pub struct VotingLedger {
    guard: AccessGuard,
    workflow: WorkflowController,
    participants: ParticipantRegistry,
    proposals: ProposalRegistry,
    min_quorum_percentage: u8,
    /// One result per completed cycle, in cycle order.
    history: Vec<CycleResult>,
    events: VecDeque<LedgerEvent>,
}

impl VotingLedger {
    /// Create a ledger with an explicit administrator. There is no
    /// process-wide singleton; the host owns the instance.
    pub fn new(administrator: AccountId, config: LedgerConfig) -> Result<Self, LedgerError> {
        if !administrator.is_valid() {
            return Err(LedgerError::InvalidArgument(
                "administrator identity must be non-empty".into(),
            ));
        }
        if config.min_quorum_percentage > 100 {
            return Err(LedgerError::InvalidArgument(
                "quorum percentage must be 0..=100".into(),
            ));
        }
        Ok(Self {
            guard: AccessGuard::new(administrator),
            workflow: WorkflowController::new(),
            participants: ParticipantRegistry::new(),
            proposals: ProposalRegistry::new(),
            min_quorum_percentage: config.min_quorum_percentage,
            history: Vec::new(),
            events: VecDeque::new(),
        })
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Register a participant. Administrator-only, voters-registration
    /// phase only.
    pub fn register(
        &mut self,
        caller: &AccountId,
        participant: AccountId,
    ) -> Result<(), LedgerError> {
        self.guard.authorize(caller)?;
        self.workflow.require(WorkflowStatus::VotersRegistration)?;
        self.participants.register(&participant)?;
        debug!(participant = %participant, "voter registered");
        self.events
            .push_back(LedgerEvent::VoterRegistered { participant });
        Ok(())
    }

    /// Hand the administrator role to another identity.
    pub fn transfer_administrator(
        &mut self,
        caller: &AccountId,
        new_admin: AccountId,
    ) -> Result<(), LedgerError> {
        let (previous, new_admin) = self.guard.transfer(caller, new_admin)?;
        info!(previous = %previous, new_admin = %new_admin, "administrator transferred");
        self.events.push_back(LedgerEvent::AdministratorTransferred {
            previous,
            new_admin,
        });
        Ok(())
    }

    /// Set the quorum threshold for the coming cycle. Only legal while
    /// voters registration is open, which makes the value immutable for
    /// the rest of the cycle.
    pub fn set_min_quorum_percentage(
        &mut self,
        caller: &AccountId,
        percentage: u8,
    ) -> Result<(), LedgerError> {
        self.guard.authorize(caller)?;
        self.workflow.require(WorkflowStatus::VotersRegistration)?;
        if percentage > 100 {
            return Err(LedgerError::InvalidArgument(
                "quorum percentage must be 0..=100".into(),
            ));
        }
        self.min_quorum_percentage = percentage;
        Ok(())
    }

    /// Open proposal registration. Clears the previous cycle's proposals:
    /// the registry resets at this boundary, not at `reset_cycle`, so the
    /// tallied result stays readable until a new cycle actually starts.
    pub fn open_proposals(&mut self, caller: &AccountId) -> Result<(), LedgerError> {
        self.guard.authorize(caller)?;
        let change = self.workflow.open_proposals()?;
        self.proposals.reset_for_new_cycle();
        self.note_phase_change(change);
        Ok(())
    }

    /// Freeze the proposal list.
    pub fn close_proposals(&mut self, caller: &AccountId) -> Result<(), LedgerError> {
        self.guard.authorize(caller)?;
        let change = self.workflow.close_proposals()?;
        self.note_phase_change(change);
        Ok(())
    }

    /// Submit a proposal. Participant-gated, not admin-gated.
    pub fn add_proposal(
        &mut self,
        caller: &AccountId,
        title: String,
        description: String,
    ) -> Result<u32, LedgerError> {
        self.workflow
            .require(WorkflowStatus::ProposalsRegistrationOpen)?;
        if !self.participants.is_registered(caller) {
            return Err(LedgerError::NotRegistered(caller.clone()));
        }
        let proposal_id = self.proposals.add(title, description)?;
        debug!(proposal_id, submitter = %caller, "proposal registered");
        self.events
            .push_back(LedgerEvent::ProposalRegistered { proposal_id });
        Ok(proposal_id)
    }

    /// Open the voting session.
    pub fn open_voting(&mut self, caller: &AccountId) -> Result<(), LedgerError> {
        self.guard.authorize(caller)?;
        let change = self.workflow.open_voting()?;
        self.note_phase_change(change);
        Ok(())
    }

    /// Cast one ballot for the current cycle.
    ///
    /// All-or-nothing: the proposal index is bounds-checked before the
    /// participant is marked as having voted, so a rejected ballot never
    /// consumes the participant's one vote.
    pub fn cast_vote(
        &mut self,
        voter: &AccountId,
        proposal_id: u32,
    ) -> Result<(), LedgerError> {
        self.workflow.require(WorkflowStatus::VotingOpen)?;
        let count = self.proposals.count();
        if proposal_id >= count {
            return Err(LedgerError::OutOfRange { proposal_id, count });
        }
        let cycle = self.workflow.cycle();
        self.participants.record_vote(voter, proposal_id, cycle)?;
        self.proposals.increment_vote(proposal_id)?;
        debug!(voter = %voter, proposal_id, %cycle, "ballot cast");
        self.events.push_back(LedgerEvent::VoteCast {
            voter: voter.clone(),
            proposal_id,
        });
        Ok(())
    }

    /// Close the voting session.
    pub fn close_voting(&mut self, caller: &AccountId) -> Result<(), LedgerError> {
        self.guard.authorize(caller)?;
        let change = self.workflow.close_voting()?;
        self.note_phase_change(change);
        Ok(())
    }

    /// Tally the cycle: pick the winner, apply the quorum rule, record
    /// the result, and advance to `Tallied`. A quorum failure is a
    /// recorded (canceled) outcome, not an error.
    pub fn tally(&mut self, caller: &AccountId) -> Result<CycleResult, LedgerError> {
        self.guard.authorize(caller)?;
        let change = self.workflow.tally()?;
        let cycle = self.workflow.cycle();
        let result = TallyEngine::tally(
            self.proposals.list(),
            self.participants.ballots_cast(cycle),
            self.participants.registered_count(),
            self.min_quorum_percentage,
            cycle,
        );
        info!(
            %cycle,
            winner = ?result.winning_proposal_id,
            canceled = result.vote_canceled,
            participation = result.participation_percentage(),
            "cycle tallied"
        );
        self.history.push(result.clone());
        self.note_phase_change(change);
        self.events.push_back(LedgerEvent::CycleTallied {
            cycle,
            winning_proposal_id: result.winning_proposal_id,
            vote_canceled: result.vote_canceled,
        });
        Ok(result)
    }

    /// Start the next cycle. Registrations persist; ballots do not, since
    /// they are scoped to the incremented cycle counter.
    pub fn reset_cycle(&mut self, caller: &AccountId) -> Result<(), LedgerError> {
        self.guard.authorize(caller)?;
        let change = self.workflow.reset_cycle()?;
        self.note_phase_change(change);
        Ok(())
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn workflow_status(&self) -> WorkflowStatus {
        self.workflow.status()
    }

    pub fn cycle(&self) -> Cycle {
        self.workflow.cycle()
    }

    /// Record for a participant; unknown ids yield the default record.
    pub fn participant(&self, id: &AccountId) -> Participant {
        self.participants.get(id)
    }

    /// Current cycle's proposals in index order.
    pub fn proposals(&self) -> &[Proposal] {
        self.proposals.list()
    }

    pub fn min_quorum_percentage(&self) -> u8 {
        self.min_quorum_percentage
    }

    pub fn is_administrator(&self, id: &AccountId) -> bool {
        self.guard.is_administrator(id)
    }

    pub fn administrator(&self) -> &AccountId {
        self.guard.administrator()
    }

    /// Ballots cast so far in the current cycle.
    pub fn votes_cast(&self) -> u32 {
        self.participants.ballots_cast(self.workflow.cycle())
    }

    /// Recorded result of a completed cycle, if that cycle was tallied.
    pub fn cycle_result(&self, cycle: Cycle) -> Option<&CycleResult> {
        self.history.iter().find(|r| r.cycle == cycle)
    }

    /// The current cycle's winner.
    ///
    /// Fails with `NotYetTallied` before the tally, and with
    /// `QuorumNotMet` if the cycle was canceled. The canceled record
    /// itself remains readable through [`Self::cycle_result`].
    pub fn winning_proposal(&self) -> Result<WinningProposal, LedgerError> {
        self.workflow
            .require(WorkflowStatus::Tallied)
            .map_err(|_| LedgerError::NotYetTallied)?;
        let result = self
            .cycle_result(self.workflow.cycle())
            .ok_or(LedgerError::NotYetTallied)?;
        if result.vote_canceled {
            return Err(LedgerError::QuorumNotMet {
                participation: result.participation_percentage(),
                required: result.min_quorum_percentage,
            });
        }
        let proposal_id = result.winning_proposal_id.ok_or(LedgerError::NotYetTallied)?;
        let proposal = self
            .proposals
            .get(proposal_id)
            .cloned()
            .ok_or(LedgerError::OutOfRange {
                proposal_id,
                count: self.proposals.count(),
            })?;
        Ok(WinningProposal {
            proposal_id,
            proposal,
        })
    }

    /// Hand queued events to the host, oldest first.
    pub fn drain_events(&mut self) -> Vec<LedgerEvent> {
        self.events.drain(..).collect()
    }

    fn note_phase_change(&mut self, (previous, next): (WorkflowStatus, WorkflowStatus)) {
        info!(%previous, %next, "workflow advanced");
        self.events
            .push_back(LedgerEvent::WorkflowStatusChange { previous, next });
    }

    // Snapshot plumbing lives in `snapshot.rs`; these accessors let it
    // capture and rebuild the composed state.

    pub(crate) fn parts(
        &self,
    ) -> (
        &AccessGuard,
        &WorkflowController,
        &ParticipantRegistry,
        &ProposalRegistry,
        u8,
        &[CycleResult],
    ) {
        (
            &self.guard,
            &self.workflow,
            &self.participants,
            &self.proposals,
            self.min_quorum_percentage,
            &self.history,
        )
    }

    pub(crate) fn from_parts(
        guard: AccessGuard,
        workflow: WorkflowController,
        participants: ParticipantRegistry,
        proposals: ProposalRegistry,
        min_quorum_percentage: u8,
        history: Vec<CycleResult>,
    ) -> Self {
        Self {
            guard,
            workflow,
            participants,
            proposals,
            min_quorum_percentage,
            history,
            events: VecDeque::new(),
        }
    }
}
