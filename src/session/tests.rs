use super::AccountSession;
use crate::models::AccountRecord;
use crate::storage::{MemoryStorage, StorageAdapter, StorageError};
use crate::types::Identifier;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde_json::{json, Value};

fn record_from(value: Value) -> Result<AccountRecord> {
    Ok(serde_json::from_value(value)?)
}

/// Records exactly what reaches the backend so normalization can be observed.
#[derive(Default)]
struct RecordingStorage {
    received: Vec<(AccountRecord, Identifier)>,
    lookup: Option<Identifier>,
    broken: bool
}

#[async_trait]
impl StorageAdapter for RecordingStorage {
    fn name(&self) -> &str {
        "recording"
    }

    async fn load(&self) -> Result<Option<AccountRecord>, StorageError> {
        Ok(self.received.last().map(|(record, _)| record.clone()))
    }

    async fn save(&mut self, account_data: AccountRecord, identifier: Identifier) -> Result<Identifier, StorageError> {
        self.received.push((account_data, identifier.clone()));
        Ok(identifier)
    }

    async fn check(&self) -> Result<Identifier, StorageError> {
        if self.broken {
            return Err(StorageError::Backend {
                backend: self.name().to_string(),
                reason: "keystore unreachable".to_string()
            });
        }

        self.lookup.clone().ok_or(StorageError::AccountNotFound)
    }
}

#[tokio::test]
async fn test_session_normalizes_record_before_backend_save() -> Result<()> {
    let mut session = AccountSession::new(RecordingStorage::default());

    let identifier = session.persist(record_from(json!({ "email": "user@example.com" }))?, Identifier::new("abc123")).await?;

    assert_eq!(identifier, Identifier::new("abc123"));

    let (received_record, received_identifier) = session.storage().received.first()
        .ok_or_else(|| anyhow!("Backend never received a save"))?;

    assert_eq!(received_record.identifier(), Some(&json!("abc123")));
    assert_eq!(received_identifier, &Identifier::new("abc123"));

    Ok(())
}

#[tokio::test]
async fn test_session_keeps_identifier_already_on_record() -> Result<()> {
    let mut session = AccountSession::new(RecordingStorage::default());

    session.persist(record_from(json!({ "identifier": "existing" }))?, Identifier::new("ignored")).await?;

    let restored = session.restore().await?.ok_or_else(|| anyhow!("Account missing from backend"))?;

    assert_eq!(restored.identifier(), Some(&json!("existing")));

    Ok(())
}

#[tokio::test]
async fn test_session_resolve_falls_back_when_lookup_is_unsupported() -> Result<()> {
    let mut session = AccountSession::new(MemoryStorage::default());

    assert!(session.resolve().await?.is_none());

    session.persist(record_from(json!({}))?, Identifier::new("abc123")).await?;

    assert!(session.resolve().await?.is_none());

    Ok(())
}

#[tokio::test]
async fn test_session_resolve_returns_identifier_from_capable_backend() -> Result<()> {
    let storage = RecordingStorage {
        lookup: Some(Identifier::new("resolved")),
        ..RecordingStorage::default()
    };
    let session = AccountSession::new(storage);

    assert_eq!(session.resolve().await?, Some(Identifier::new("resolved")));

    Ok(())
}

#[tokio::test]
async fn test_session_resolve_propagates_backend_failures() {
    let storage = RecordingStorage {
        broken: true,
        ..RecordingStorage::default()
    };
    let session = AccountSession::new(storage);

    assert!(matches!(session.resolve().await, Err(StorageError::Backend { .. })));
}

#[tokio::test]
async fn test_session_over_memory_storage_end_to_end() -> Result<()> {
    let mut session = AccountSession::new(MemoryStorage::new(None));

    assert!(session.restore().await?.is_none());

    session.persist(record_from(json!({}))?, Identifier::new("abc123")).await?;

    let storage = session.into_storage();

    assert_eq!(storage.load().await?.map(AccountRecord::into_value), Some(json!({ "identifier": "abc123" })));

    match storage.check().await {
        Err(error) => assert_eq!(error.to_string(), "Account Not Found!"),
        Ok(identifier) => return Err(anyhow!("Check unexpectedly resolved to [{identifier}]"))
    }

    Ok(())
}
