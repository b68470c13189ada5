mod models;
mod session;
mod storage;
mod types;

pub use models::{AccountRecord, PlannedSave, SessionPlan, IDENTIFIER_FIELD};
pub use session::AccountSession;
pub use storage::{MemoryStorage, StorageAdapter, StorageError};
pub use types::Identifier;
