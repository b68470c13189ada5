use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Account Not Found!")]
    AccountNotFound,
    #[error("Storage backend [{backend}] failed: {reason}")]
    Backend {
        backend: String,
        reason: String
    }
}
