mod errors;
mod memory_storage;

use async_trait::async_trait;

use crate::models::AccountRecord;
use crate::types::Identifier;

pub use errors::StorageError;
pub use memory_storage::MemoryStorage;

/// The capability set every account persistence backend provides.
///
/// Callers depend only on this trait, never on a concrete backend, so a
/// volatile holder can stand in for a file or keystore backed one.
#[async_trait]
pub trait StorageAdapter: Send + Sync {
    /// Short backend name used in log output.
    fn name(&self) -> &str;

    /// Produces the currently held account record, if any.
    async fn load(&self) -> Result<Option<AccountRecord>, StorageError>;

    /// Stores `account_data`, replacing whatever was held before, and returns
    /// the identifier it was stored under.
    async fn save(&mut self, account_data: AccountRecord, identifier: Identifier) -> Result<Identifier, StorageError>;

    /// Resolves the identifier of the held account from a human readable name.
    async fn check(&self) -> Result<Identifier, StorageError>;
}
