use crate::models::AccountRecord;
use crate::types::Identifier;
use serde::Deserialize;

/// A replayable session: an optional record to seed the holder with,
/// followed by the saves to apply in order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionPlan {
    #[serde(default)]
    pub seed: Option<AccountRecord>,
    #[serde(default)]
    pub saves: Vec<PlannedSave>
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlannedSave {
    pub identifier: Identifier,
    pub account: AccountRecord
}
