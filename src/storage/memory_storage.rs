use async_trait::async_trait;
use tracing::trace;

use crate::models::AccountRecord;
use crate::storage::{StorageAdapter, StorageError};
use crate::types::Identifier;

/// Holds a single account record in process memory for one session.
///
/// Nothing survives the instance: the record is dropped along with it.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    account: Option<AccountRecord>
}

impl MemoryStorage {
    pub fn new(seed: Option<AccountRecord>) -> Self {
        Self {
            account: seed
        }
    }
}

#[async_trait]
impl StorageAdapter for MemoryStorage {
    fn name(&self) -> &str {
        "memory"
    }

    async fn load(&self) -> Result<Option<AccountRecord>, StorageError> {
        Ok(self.account.clone())
    }

    async fn save(&mut self, mut account_data: AccountRecord, identifier: Identifier) -> Result<Identifier, StorageError> {
        account_data.ensure_identifier(&identifier);

        //NOTE: Last write wins, the previous record is replaced wholesale and never merged
        self.account = Some(account_data);
        trace!("Account [{identifier}] held in memory");

        Ok(identifier)
    }

    async fn check(&self) -> Result<Identifier, StorageError> {
        //NOTE: There is no lookup store behind memory, so a name can never resolve to an identifier
        Err(StorageError::AccountNotFound)
    }
}
