//! Abstract storage traits for the Decree decision ledger.
//!
//! The core never mandates a persistence backend. Hosts that want
//! durability implement [`SnapshotStore`] over whatever they run on
//! (an embedded database, a file, a chain's state tree) and feed the
//! ledger's snapshot bytes through it. [`MemoryStore`] is provided for
//! tests and embedded hosts.

pub mod error;
pub mod memory;

pub use error::StoreError;
pub use memory::MemoryStore;

/// Keyed byte-blob storage for ledger snapshots.
///
/// Implementations must be atomic per call: a `put_snapshot` that fails
/// must leave the previously stored value readable.
pub trait SnapshotStore {
    /// Store a snapshot under a key, replacing any existing value.
    fn put_snapshot(&self, key: &str, data: &[u8]) -> Result<(), StoreError>;

    /// Retrieve a snapshot by key.
    fn get_snapshot(&self, key: &str) -> Result<Vec<u8>, StoreError>;

    /// Delete a stored snapshot. Deleting a missing key is not an error.
    fn delete_snapshot(&self, key: &str) -> Result<(), StoreError>;
}
