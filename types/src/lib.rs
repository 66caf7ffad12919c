//! Fundamental types for the Decree decision ledger.
//!
//! This crate defines the types shared across the workspace: participant
//! identities and the cycle counter that scopes proposals and ballots.

pub mod account;
pub mod cycle;

pub use account::AccountId;
pub use cycle::Cycle;
