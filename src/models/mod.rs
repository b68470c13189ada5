mod account_record;
mod session_plan;

pub use account_record::{AccountRecord, IDENTIFIER_FIELD};
pub use session_plan::{PlannedSave, SessionPlan};
