//! Workflow and voting ledger for the Decree protocol.
//!
//! An authoritative, cycle-based decision ledger: the administrator
//! registers participants, participants submit competing proposals and
//! cast one ballot each per cycle, and the tally picks a single winner
//! subject to a minimum-participation quorum.
//!
//! Six administrator-driven phases per cycle:
//! VotersRegistration → ProposalsRegistrationOpen →
//! ProposalsRegistrationClosed → VotingOpen → VotingClosed → Tallied,
//! then `reset_cycle` starts the next cycle.
//!
//! The entry point is [`VotingLedger`]. It is a plain synchronous state
//! machine — the host supplies serialization, transport, and (if wanted)
//! persistence via the snapshot bytes.

pub mod access;
pub mod error;
pub mod events;
pub mod ledger;
pub mod participants;
pub mod proposals;
pub mod snapshot;
pub mod tally;
pub mod workflow;

pub use access::AccessGuard;
pub use error::LedgerError;
pub use events::LedgerEvent;
pub use ledger::{LedgerConfig, VotingLedger, WinningProposal};
pub use participants::{Participant, ParticipantRegistry};
pub use proposals::{Proposal, ProposalRegistry};
pub use snapshot::LedgerSnapshot;
pub use tally::{CycleResult, TallyEngine};
pub use workflow::{WorkflowController, WorkflowStatus};
