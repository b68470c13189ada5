use tracing::debug;

use crate::models::AccountRecord;
use crate::storage::{StorageAdapter, StorageError};
use crate::types::Identifier;

/// Owns one storage backend on behalf of a logged in session.
///
/// Every write goes through [`AccountSession::persist`], which normalizes the
/// record before the backend's own `save` sees it.
pub struct AccountSession<S: StorageAdapter> {
    storage: S
}

impl<S: StorageAdapter> AccountSession<S> {
    /// Creates a new session over the provided storage backend.
    pub fn new(storage: S) -> Self {
        Self {
            storage
        }
    }

    /// Ensures the record carries an identifier, then hands it to the backend.
    ///
    /// # Errors
    /// Returns whatever `StorageError` the backend's `save` produces.
    pub async fn persist(&mut self, mut account_data: AccountRecord, identifier: Identifier) -> Result<Identifier, StorageError> {
        account_data.ensure_identifier(&identifier);
        debug!("Persisting account [{identifier}] to [{}] storage", self.storage.name());

        self.storage.save(account_data, identifier).await
    }

    /// Loads the record currently held by the backend.
    pub async fn restore(&self) -> Result<Option<AccountRecord>, StorageError> {
        self.storage.load().await
    }

    /// Resolves the held account's identifier through the backend.
    ///
    /// `Ok(None)` means the backend cannot resolve names and the caller has to
    /// fall back to another lookup path. Any other failure is returned as is.
    pub async fn resolve(&self) -> Result<Option<Identifier>, StorageError> {
        match self.storage.check().await {
            Ok(identifier) => Ok(Some(identifier)),
            Err(StorageError::AccountNotFound) => {
                debug!("Account lookup is unsupported by [{}] storage", self.storage.name());
                Ok(None)
            },
            Err(error) => Err(error)
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}
